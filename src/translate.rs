//! Rewriting line terminators to a resolved directive.

use crate::attributes::Eol;

/// Rewrite every line terminator in `text` to match `eol`.
///
/// All terminators (`\r\n`, bare `\r`, `\n`) are unified first, so mixed
/// input comes out uniform.
pub fn translate_line_endings(text: &str, eol: Eol) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    match eol {
        Eol::Lf => unified,
        Eol::Crlf => unified.replace('\n', "\r\n"),
    }
}

/// True when every terminator in `text` already matches `eol`.
pub fn uses_line_endings(text: &str, eol: Eol) -> bool {
    match eol {
        Eol::Lf => !text.contains('\r'),
        Eol::Crlf => {
            let bytes = text.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                match b {
                    b'\n' if i == 0 || bytes[i - 1] != b'\r' => return false,
                    b'\r' if bytes.get(i + 1) != Some(&b'\n') => return false,
                    _ => {}
                }
            }
            true
        }
    }
}
