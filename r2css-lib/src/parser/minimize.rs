use crate::SKIP_TOKEN;

/// Content of the only comment that survives minimizing (as [`SKIP_TOKEN`]).
const SKIP_COMMENT: &str = "no-r2";

/// Whitespace as CSS sees it. Line breaks are treated like any other space.
fn is_css_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Punctuation that never needs surrounding whitespace.
fn is_punctuation(ch: char) -> bool {
    matches!(ch, ':' | ';' | ',' | '{' | '}')
}

/// Minimize a stylesheet into a single line.
///
/// Comments are removed, except `/* no-r2 */` which becomes [`SKIP_TOKEN`].
/// Line breaks and runs of whitespace collapse to one space, whitespace
/// next to `: ; , { }` is dropped and the result is trimmed.
/// An absent stylesheet minimizes to an empty string.
pub fn minimize<'a>(css: impl Into<Option<&'a str>>) -> String {
    let Some(css) = css.into() else {
        return String::new();
    };
    let uncommented = strip_comments(css);
    collapse_whitespace(&uncommented)
}

/// Remove every [`SKIP_TOKEN`] from minimized text, together with the
/// space that separated it from its neighbours.
///
/// `a{SKIP_R2 float:left;}` becomes `a{float:left;}`.
pub fn strip_skip_markers(css: &str) -> String {
    let mut out = String::with_capacity(css.len());

    for (idx, piece) in css.split(SKIP_TOKEN).enumerate() {
        let mut piece = piece;
        if idx > 0 {
            if out.is_empty() || out.ends_with(is_punctuation) || out.ends_with(' ') {
                piece = piece.strip_prefix(' ').unwrap_or(piece);
            }
            if out.ends_with(' ') && (piece.is_empty() || piece.starts_with(is_punctuation)) {
                out.pop();
            }
        }
        out.push_str(piece);
    }
    out
}

/// Remove `/* ... */` comments, replacing skip comments with the sentinel.
/// An unterminated comment is left in place.
fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let inner = &rest[start + 2..];
        match inner.find("*/") {
            Some(end) => {
                if inner[..end].trim_matches(is_css_space) == SKIP_COMMENT {
                    out.push_str(SKIP_TOKEN);
                }
                rest = &inner[end + 2..];
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

fn collapse_whitespace(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut pending_space = false;

    for ch in css.chars() {
        if is_css_space(ch) {
            pending_space = true;
        } else if is_punctuation(ch) {
            // Space before punctuation is dropped, and so is space after it.
            pending_space = false;
            out.push(ch);
        } else {
            if pending_space && !out.is_empty() && !out.ends_with(is_punctuation) {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}
