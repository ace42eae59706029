/// One piece of a minimized stylesheet.
///
/// Headers and closing braces are emitted as they are, so nested at-rule
/// blocks come out of the scan one level at a time without any recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Selector or at-rule prelude, including its `{`.
    Header(&'a str),
    /// Declarations between a header and the next `}`.
    Body(&'a str),
    /// A closing `}`.
    Close,
}

/// Splits minimized CSS into [`Block`]s.
///
/// Text running up to a `{` is a header, text running up to a `}` (or the
/// end of input) is a declaration body.
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    css: &'a str,
    pos: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(css: &'a str) -> Self {
        Segmenter { css, pos: 0 }
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        let rest = &self.css[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let Some(idx) = rest.find(|ch: char| ch == '{' || ch == '}') else {
            self.pos = self.css.len();
            return Some(Block::Body(rest));
        };

        let block = if rest.as_bytes()[idx] == b'{' {
            self.pos += idx + 1;
            Block::Header(&rest[..=idx])
        } else if idx == 0 {
            self.pos += 1;
            Block::Close
        } else {
            self.pos += idx;
            Block::Body(&rest[..idx])
        };
        Some(block)
    }
}

/// Where the declaration splitter is while walking a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    InDeclaration,
    /// Inside an unterminated `url(`, collecting from byte `start`.
    InUrlValue { start: usize },
}

/// Split a declaration body on `;` without breaking `url(...)` payloads.
///
/// A segment that opens `url(` without closing it starts collecting; the
/// following segments are glued back on (with their `;`) until one holds a
/// `)` followed by a space or the end of the segment. This keeps values
/// such as `url("data:image/svg+xml;charset=...")` in one piece.
pub fn split_declarations(body: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut state = SplitState::InDeclaration;
    let mut offset = 0;

    for part in body.split(';') {
        let start = offset;
        let end = start + part.len();
        offset = end + 1;

        state = match state {
            SplitState::InDeclaration if opens_url(part) => SplitState::InUrlValue { start },
            SplitState::InDeclaration => {
                declarations.push(part);
                SplitState::InDeclaration
            }
            SplitState::InUrlValue { start } if closes_url(part) => {
                declarations.push(&body[start..end]);
                SplitState::InDeclaration
            }
            in_url @ SplitState::InUrlValue { .. } => in_url,
        };
    }

    // Best effort for a url( that never closes: keep it rather than lose it.
    if let SplitState::InUrlValue { start } = state {
        let pending = &body[start..];
        declarations.push(pending.strip_suffix(';').unwrap_or(pending));
    }
    declarations
}

/// `url(` followed by at least one character and no `)`.
fn opens_url(part: &str) -> bool {
    match part.rfind("url(") {
        Some(idx) => {
            let payload = &part[idx + 4..];
            !payload.is_empty() && !payload.contains(')')
        }
        None => false,
    }
}

/// A `)` followed by a space or the end of the segment.
fn closes_url(part: &str) -> bool {
    part.match_indices(')')
        .any(|(idx, _)| matches!(part.as_bytes().get(idx + 1), None | Some(b' ')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_of_simple_rules() {
        let blocks: Vec<_> = Segmenter::new("body{direction:rtl;}img{padding:4px;}").collect();
        assert_eq!(
            blocks,
            vec![
                Block::Header("body{"),
                Block::Body("direction:rtl;"),
                Block::Close,
                Block::Header("img{"),
                Block::Body("padding:4px;"),
                Block::Close,
            ]
        );
    }

    #[test]
    fn test_blocks_of_nested_at_rule() {
        let blocks: Vec<_> =
            Segmenter::new("@media all and (max-width:222px){p{padding-left:2px;}}").collect();
        assert_eq!(
            blocks,
            vec![
                Block::Header("@media all and (max-width:222px){"),
                Block::Header("p{"),
                Block::Body("padding-left:2px;"),
                Block::Close,
                Block::Close,
            ]
        );
    }

    #[test]
    fn test_empty_rule_and_trailing_text() {
        let blocks: Vec<_> = Segmenter::new("a{}b:c").collect();
        assert_eq!(blocks, vec![Block::Header("a{"), Block::Close, Block::Body("b:c")]);
        assert_eq!(Segmenter::new("").next(), None);
    }

    #[test]
    fn test_split_plain_body() {
        assert_eq!(
            split_declarations("padding-left:4px;margin-left:5px;"),
            vec!["padding-left:4px", "margin-left:5px", ""]
        );
        assert_eq!(split_declarations("color:red"), vec!["color:red"]);
    }

    #[test]
    fn test_split_keeps_url_with_semicolons() {
        let body = "display:block;background-image:url(\"data:image/svg+xml;charset=ISO-8859-1,%3Csvg%3E\");text-align:left;";
        assert_eq!(
            split_declarations(body),
            vec![
                "display:block",
                "background-image:url(\"data:image/svg+xml;charset=ISO-8859-1,%3Csvg%3E\")",
                "text-align:left",
                "",
            ]
        );
    }

    #[test]
    fn test_split_url_closed_before_space() {
        assert_eq!(
            split_declarations("background:url(data;base64,AAAA) no-repeat;float:left"),
            vec!["background:url(data;base64,AAAA) no-repeat", "float:left"]
        );
    }

    #[test]
    fn test_split_url_without_semicolon_is_untouched() {
        assert_eq!(
            split_declarations("background:url('flags/flag16.png') no-repeat;text-align:left;"),
            vec!["background:url('flags/flag16.png') no-repeat", "text-align:left", ""]
        );
    }

    #[test]
    fn test_split_flushes_unterminated_url() {
        assert_eq!(
            split_declarations("color:red;background:url(a;b;"),
            vec!["color:red", "background:url(a;b"]
        );
    }
}
