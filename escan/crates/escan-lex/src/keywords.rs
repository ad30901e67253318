//! Reserved word table.
//!
//! The set of reserved words depends on whether the source is strict mode
//! code. Each scanner builds its own immutable [`ReservedWords`] once at
//! construction; nothing here is global or mutable.

use rustc_hash::FxHashSet;

/// Keywords reserved in all code.
pub const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var",
    "void", "while", "with", "yield",
];

/// Future reserved words in all code.
pub const FUTURE_RESERVED: &[&str] = &["enum", "await"];

/// Literal words that can never be identifiers.
pub const LITERALS: &[&str] = &["null", "true", "false"];

/// Additionally reserved in strict mode code.
pub const STRICT_RESERVED: &[&str] = &[
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
];

/// The reserved words active for one scanner.
///
/// # Examples
///
/// ```
/// use escan_lex::keywords::ReservedWords;
///
/// let sloppy = ReservedWords::new(false);
/// assert!(sloppy.contains("return"));
/// assert!(!sloppy.contains("implements"));
///
/// let strict = ReservedWords::new(true);
/// assert!(strict.contains("implements"));
/// ```
#[derive(Clone, Debug)]
pub struct ReservedWords {
    lookup: FxHashSet<&'static str>,
    /// Longest first, ties alphabetical
    ordered: Vec<&'static str>,
    strict: bool,
}

impl ReservedWords {
    /// Build the table for strict or non-strict code.
    pub fn new(strict: bool) -> Self {
        let strict_words: &[&'static str] = if strict { STRICT_RESERVED } else { &[] };
        let mut ordered: Vec<&'static str> = KEYWORDS
            .iter()
            .chain(FUTURE_RESERVED)
            .chain(LITERALS)
            .chain(strict_words)
            .copied()
            .collect();
        ordered.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        ordered.dedup();

        let lookup = ordered.iter().copied().collect();
        Self {
            lookup,
            ordered,
            strict,
        }
    }

    /// Returns true if `word` is exactly a reserved word.
    ///
    /// Callers pass a complete identifier name, so `returning` never
    /// matches `return`.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Reserved words, longest first.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ordered.iter().copied()
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Always false; the table is never empty.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Whether the strict mode words are included.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let base = KEYWORDS.len() + FUTURE_RESERVED.len() + LITERALS.len();
        assert_eq!(ReservedWords::new(false).len(), base);
        assert_eq!(
            ReservedWords::new(true).len(),
            base + STRICT_RESERVED.len()
        );
    }

    #[test]
    fn test_exact_match_only() {
        let words = ReservedWords::new(false);
        assert!(words.contains("return"));
        assert!(!words.contains("returning"));
        assert!(!words.contains("retur"));
        assert!(!words.contains("Return"));
    }

    #[test]
    fn test_literals_and_future_words() {
        let words = ReservedWords::new(false);
        for word in ["null", "true", "false", "enum", "await"] {
            assert!(words.contains(word), "{word}");
        }
        assert!(!words.contains("undefined"));
    }

    #[test]
    fn test_strict_words() {
        let sloppy = ReservedWords::new(false);
        let strict = ReservedWords::new(true);
        assert!(!sloppy.is_strict());
        assert!(strict.is_strict());
        for word in STRICT_RESERVED {
            assert!(!sloppy.contains(word), "{word}");
            assert!(strict.contains(word), "{word}");
        }
    }

    #[test]
    fn test_iter_longest_first() {
        let words = ReservedWords::new(true);
        let lengths: Vec<usize> = words.iter().map(str::len).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(words.iter().next(), Some("implements"));
        assert!(!words.is_empty());
    }
}
