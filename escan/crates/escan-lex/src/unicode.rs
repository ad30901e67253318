//! Character classes of the ECMAScript lexical grammar.
//!
//! These are the only functions that consult Unicode tables. Identifier
//! classes come from the `unicode-ident` crate (UAX #31 `XID_Start` /
//! `XID_Continue`); everything else is a closed list of code points.

/// ZERO WIDTH NON-JOINER, allowed inside identifiers.
pub const ZWNJ: char = '\u{200C}';
/// ZERO WIDTH JOINER, allowed inside identifiers.
pub const ZWJ: char = '\u{200D}';
/// ZERO WIDTH NO-BREAK SPACE (byte order mark), treated as white space.
pub const ZWNBSP: char = '\u{FEFF}';

/// Returns true for ECMAScript `WhiteSpace` code points.
///
/// TAB, VT, FF, SP, NBSP, ZWNBSP and every other `Zs` code point. Line
/// terminators are not white space.
///
/// # Examples
///
/// ```
/// use escan_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{FEFF}'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('\n'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | ZWNBSP
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Returns true for the four ECMAScript `LineTerminator` code points.
///
/// # Examples
///
/// ```
/// use escan_lex::unicode::is_line_terminator;
///
/// assert!(is_line_terminator('\n'));
/// assert!(is_line_terminator('\u{2029}'));
/// assert!(!is_line_terminator('\u{0085}'));
/// ```
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns true if `c` can begin an `IdentifierName`.
///
/// # Examples
///
/// ```
/// use escan_lex::unicode::is_id_start;
///
/// assert!(is_id_start('$'));
/// assert!(is_id_start('_'));
/// assert!(is_id_start('π'));
/// assert!(!is_id_start('1'));
/// ```
#[inline]
pub fn is_id_start(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphabetic() || c == '$' || c == '_'
    } else {
        unicode_ident::is_xid_start(c)
    }
}

/// Returns true if `c` can continue an `IdentifierName`.
///
/// Adds digits, combining marks and connector punctuation (via
/// `XID_Continue`) plus ZWNJ and ZWJ to the start set.
#[inline]
pub fn is_id_continue(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '$' || c == '_'
    } else {
        unicode_ident::is_xid_continue(c) || c == ZWNJ || c == ZWJ
    }
}

/// Returns true if `c` is a digit in the given radix (2, 8, 10 or 16).
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Raw control characters that may not appear in a regular expression
/// literal: category `Cc` except TAB and the line terminators (which get
/// their own error).
#[inline]
pub fn is_regex_forbidden(c: char) -> bool {
    c.is_control() && c != '\t' && !is_line_terminator(c)
}
