//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's decoded text
/// * `$position` - Where the token starts
/// * `$newline_before` - Whether a newline preceded the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position, false);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr, $newline_before:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
            newline_before: $newline_before,
        }
    };
}
