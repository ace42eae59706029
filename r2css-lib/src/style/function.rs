use crate::style::values::{split_outside_parens, swap_left_right};

/// Vendor prefixes ignored when looking a function up.
const VENDOR_PREFIXES: &[&str] = &["-moz-", "-webkit-", "-o-"];

/// Functions whose `left`/`right` arguments describe a direction.
const MIRRORED_FUNCTIONS: &[&str] = &["gradient", "linear-gradient"];

/// Mirror the arguments of a gradient call such as
/// `-webkit-linear-gradient(left,#fff,#000)`.
///
/// Every `left` and `right` inside the arguments trades places; argument
/// order and count stay the same. Values that are not a call to one of the
/// mirrored functions are returned unchanged.
pub fn function_swap(value: &str) -> String {
    let Some((name, args)) = parse_function(value) else {
        return value.to_string();
    };
    if !MIRRORED_FUNCTIONS.contains(&canonical_name(name)) {
        return value.to_string();
    }

    let args: Vec<String> = split_outside_parens(args, ',')
        .into_iter()
        .map(swap_left_right)
        .collect();
    format!("{name}({})", args.join(","))
}

/// `name(args)` with a lowercase, dash separated name spanning the whole value.
fn parse_function(value: &str) -> Option<(&str, &str)> {
    let value = value.trim_end();
    let open = value.find('(')?;
    let name = &value[..open];
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
        return None;
    }
    let args = value[open + 1..].strip_suffix(')')?;
    Some((name, args))
}

fn canonical_name(name: &str) -> &str {
    VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}
