use crate::style::values::{split_number, split_outside_parens, words_outside_parens};

/// Mirror a `box-shadow` value by negating the horizontal offset of each
/// shadow in the list.
///
/// Commas inside function calls such as `rgba(0,0,0,0.2)` do not separate
/// shadows. A leading `inset` moves to the end of its shadow. A shadow that
/// does not start with a number is left as it was.
pub fn shadow_swap(value: &str) -> String {
    split_outside_parens(value, ',')
        .into_iter()
        .map(|shadow| single_shadow_swap(shadow.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn single_shadow_swap(shadow: &str) -> String {
    let mut args = words_outside_parens(shadow);
    if args.first() == Some(&"inset") {
        args.rotate_left(1);
    }

    let Some(offset) = args.first().and_then(|first| negate_offset(first)) else {
        return shadow.to_string();
    };

    // offset, vertical offset, blur, spread, color, inset
    let mut flipped = Vec::with_capacity(6);
    flipped.push(offset.as_str());
    flipped.extend(args.iter().skip(1).take(5));
    flipped.join(" ")
}

/// Flip the sign of a number with an optional word-character unit.
/// Zero stays unsigned.
fn negate_offset(token: &str) -> Option<String> {
    let (number, unit) = split_number(token)?;
    if !unit.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }

    let (negative, magnitude) = match number.as_bytes()[0] {
        b'-' => (true, &number[1..]),
        b'+' => (false, &number[1..]),
        _ => (false, number),
    };
    let flipped = if negative || magnitude.bytes().all(|b| b == b'0' || b == b'.') {
        format!("{magnitude}{unit}")
    } else {
        format!("-{magnitude}{unit}")
    };
    Some(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_to_six_args() {
        assert_eq!(shadow_swap("1px 2px"), "-1px 2px");
        assert_eq!(shadow_swap("-1px 2px"), "1px 2px");
        assert_eq!(shadow_swap("1px 2px #000"), "-1px 2px #000");
        assert_eq!(shadow_swap("1px 2px 3px 4px"), "-1px 2px 3px 4px");
        assert_eq!(shadow_swap("1px 2px 3px 4px #000"), "-1px 2px 3px 4px #000");
        assert_eq!(
            shadow_swap("1px 2px 3px 4px #000 inset"),
            "-1px 2px 3px 4px #000 inset"
        );
    }

    #[test]
    fn test_leading_inset_moves_to_end() {
        assert_eq!(shadow_swap("inset 1px 2px"), "-1px 2px inset");
    }

    #[test]
    fn test_multiple_shadows() {
        assert_eq!(
            shadow_swap("inset 1px 2px, 1px 2px #000"),
            "-1px 2px inset, -1px 2px #000"
        );
        assert_eq!(
            shadow_swap("inset 1px 2px rgba(0,0,0,0.2), 1px 2px #000"),
            "-1px 2px rgba(0,0,0,0.2) inset, -1px 2px #000"
        );
        assert_eq!(shadow_swap("1px 2px #000,3px 4px #fff"), "-1px 2px #000, -3px 4px #fff");
    }

    #[test]
    fn test_offsets() {
        assert_eq!(shadow_swap("+5px 2px"), "-5px 2px");
        assert_eq!(shadow_swap("0 2px"), "0 2px");
        assert_eq!(shadow_swap("-0px 2px"), "0px 2px");
        assert_eq!(shadow_swap("1.5em 2px"), "-1.5em 2px");
    }

    #[test]
    fn test_extra_tokens_are_dropped() {
        assert_eq!(shadow_swap("1px 2px 3px 4px #000 inset x"), "-1px 2px 3px 4px #000 inset");
    }

    #[test]
    fn test_malformed_shadow_unchanged() {
        assert_eq!(shadow_swap("none"), "none");
        assert_eq!(shadow_swap("#000 1px 2px"), "#000 1px 2px");
        assert_eq!(shadow_swap("inset #000"), "inset #000");
        assert_eq!(shadow_swap(""), "");
    }
}
