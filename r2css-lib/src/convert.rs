use crate::parser::minimize::{minimize, strip_skip_markers};
use crate::parser::segment::{split_declarations, Block, Segmenter};
use crate::style::declaration::transform_declaration;
use crate::SKIP_TOKEN;
use log::{debug, trace};
use rayon::prelude::*;

/// Flip the direction of a whole stylesheet.
///
/// The stylesheet is minimized first, so the output is a single line.
/// Selectors, at-rule preludes and braces are copied as they are, and each
/// declaration body is rewritten declaration by declaration. A body holding
/// the skip marker, or following a header that holds it, is copied through
/// untouched with the marker removed.
pub fn convert<'a>(css: impl Into<Option<&'a str>>) -> String {
    let css = minimize(css);
    let mut out = String::with_capacity(css.len());
    let mut skip_next_body = false;
    let mut declarations = 0usize;

    for block in Segmenter::new(&css) {
        match block {
            Block::Header(header) => {
                // A marked header only protects the body right after it.
                skip_next_body = header.contains(SKIP_TOKEN);
                if skip_next_body {
                    out.push_str(&strip_skip_markers(header));
                } else {
                    out.push_str(header);
                }
            }
            Block::Close => {
                skip_next_body = false;
                out.push('}');
            }
            Block::Body(body) if skip_next_body || body.contains(SKIP_TOKEN) => {
                trace!("skipping declaration body {body:?}");
                skip_next_body = false;
                out.push_str(&strip_skip_markers(body));
            }
            Block::Body(body) => {
                for decl in split_declarations(body) {
                    let swapped = transform_declaration(decl);
                    if !decl.is_empty() {
                        trace!("{decl:?} -> {swapped:?}");
                        declarations += 1;
                    }
                    out.push_str(&swapped);
                }
            }
        }
    }

    debug!(
        "converted stylesheet: {} bytes in, {} bytes out, {} declarations",
        css.len(),
        out.len(),
        declarations
    );
    out
}

/// Convert several independent stylesheets on the rayon pool.
/// The results come back in input order.
pub fn convert_all<S>(stylesheets: &[S]) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    stylesheets
        .par_iter()
        .map(|css| convert(css.as_ref()))
        .collect()
}
