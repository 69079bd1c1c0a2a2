//! Inline styling markup
//!
//! Display lines may wrap text as `@|codes text|@`, e.g.
//! `@|bold,red Not found|@`. The server only produces it; terminals that
//! cannot render it strip it before printing.

const OPEN: &str = "@|";
const CLOSE: &str = "|@";

/// Wrap `text` in a style span
pub fn style(codes: &str, text: &str) -> String {
    format!("{}{} {}{}", OPEN, codes, text, CLOSE)
}

/// Remove all style spans, keeping their text
///
/// An unterminated `@|` is left as-is.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let span = &rest[start + OPEN.len()..];

        match span.find(CLOSE) {
            Some(end) => {
                // style codes run up to the first space
                let inner = &span[..end];
                if let Some(space) = inner.find(' ') {
                    out.push_str(&inner[space + 1..]);
                }
                rest = &span[end + CLOSE.len()..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
