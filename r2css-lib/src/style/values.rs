//! Value rewriting for direction-sensitive properties.
//!
//! Every function here takes a declaration value and returns its mirrored
//! form. A value with an unexpected shape comes back unchanged.

use crate::style::function::function_swap;

/// Given `rtl` or `ltr` return the other one. Anything else is unchanged.
pub fn direction_swap(value: &str) -> String {
    match value {
        "rtl" => "ltr".to_string(),
        "ltr" => "rtl".to_string(),
        other => other.to_string(),
    }
}

/// Given `left` or `right` return the other one. Anything else is unchanged.
pub fn side_swap(value: &str) -> String {
    match value {
        "left" => "right".to_string(),
        "right" => "left".to_string(),
        other => other.to_string(),
    }
}

/// Swap the right and left members of a 4-value `top right bottom left`
/// declaration, as used by `padding` and `margin`.
///
/// `1px 2px 3px 4px` becomes `1px 4px 3px 2px`; other arities are unchanged.
pub fn quad_swap(value: &str) -> String {
    match words_outside_parens(value).as_slice() {
        [top, right, bottom, left] => [*top, *left, *bottom, *right].join(" "),
        _ => value.to_string(),
    }
}

/// Mirror a `border-radius` value. Corners run top-left, top-right,
/// bottom-right, bottom-left, so every pair trades places. Values with an
/// elliptical `/` part are left alone.
pub fn border_radius_swap(value: &str) -> String {
    if value.contains('/') {
        return value.to_string();
    }
    match words_outside_parens(value).as_slice() {
        [a, b, c, d] => [*b, *a, *d, *c].join(" "),
        [a, b, c] => [*b, *a, *b, *c].join(" "),
        [a, b] => [*b, *a].join(" "),
        _ => value.to_string(),
    }
}

/// Mirror a `background-position` value such as `left center` or `0% 50%`.
///
/// `left` and `right` trade places. A leading percentage is inverted
/// (`25%` becomes `75%`) and a leading length is anchored on the right
/// edge instead (`25px` becomes `right 25px center`).
pub fn background_position_swap(value: &str) -> String {
    let swapped = swap_left_right(value);
    let points = words_outside_parens(&swapped);
    let Some(first) = points.first() else {
        return swapped;
    };

    if let Some(inverted) = invert_percentage(first) {
        return match points.get(1) {
            Some(second) => format!("{inverted} {second}"),
            None => inverted,
        };
    }

    if is_length(first) {
        let vertical = points.get(1).copied().unwrap_or("center");
        return format!("right {first} {vertical}");
    }

    swapped
}

/// Mirror the `background` shorthand.
///
/// A `left`, `right` or percentage token starts a position pair with the
/// token after it, which goes through [`background_position_swap`]. Gradient
/// calls are mirrored by [`function_swap`]; every other token by [`side_swap`].
pub fn background_swap(value: &str) -> String {
    let tokens = words_outside_parens(value);
    let mut swapped = Vec::with_capacity(tokens.len());
    let mut idx = 0;

    while idx < tokens.len() {
        let token = tokens[idx];
        if is_horizontal_position(token) {
            let pair = match tokens.get(idx + 1) {
                Some(next) => format!("{token} {next}"),
                None => token.to_string(),
            };
            swapped.push(background_position_swap(&pair));
            idx += 2;
        } else {
            if token.contains('(') {
                swapped.push(function_swap(token));
            } else {
                swapped.push(side_swap(token));
            }
            idx += 1;
        }
    }
    swapped.join(" ")
}

/// Mirror every layer of a `background-image` list.
pub fn background_image_swap(value: &str) -> String {
    split_outside_parens(value, ',')
        .into_iter()
        .map(function_swap)
        .collect::<Vec<_>>()
        .join(",")
}

fn is_horizontal_position(token: &str) -> bool {
    token == "left" || token == "right" || invert_percentage(token).is_some()
}

/// Replace every `left` with `right` and every `right` with `left` in one pass.
pub(crate) fn swap_left_right(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 1);
    let mut rest = value;

    loop {
        let left = rest.find("left").map(|idx| (idx, "left", "right"));
        let right = rest.find("right").map(|idx| (idx, "right", "left"));
        let next = match (left, right) {
            (Some(l), Some(r)) => Some(if l.0 < r.0 { l } else { r }),
            (l, r) => l.or(r),
        };
        match next {
            Some((idx, from, to)) => {
                out.push_str(&rest[..idx]);
                out.push_str(to);
                rest = &rest[idx + from.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Split a token into a leading signed decimal number and whatever follows it.
pub(crate) fn split_number(token: &str) -> Option<(&str, &str)> {
    let bytes = token.as_bytes();
    let mut idx = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if bytes.get(idx) == Some(&b'.') {
        let mut end = idx + 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > idx + 1 {
            digits += end - idx - 1;
            idx = end;
        }
    }

    (digits > 0).then(|| token.split_at(idx))
}

/// A number followed by a 2 or 3 letter unit, e.g. `25px` or `-1.5em`.
fn is_length(token: &str) -> bool {
    match split_number(token) {
        Some((_, unit)) => {
            (2..=3).contains(&unit.len()) && unit.bytes().all(|b| b.is_ascii_lowercase())
        }
        None => false,
    }
}

/// `N%` becomes `(100 - N)%`. The arithmetic is done on the decimal digits,
/// so `12.5%` comes out as `87.5%` without float noise.
fn invert_percentage(token: &str) -> Option<String> {
    let (number, "%") = split_number(token)? else {
        return None;
    };

    let (negative, unsigned) = match number.as_bytes()[0] {
        b'-' => (true, &number[1..]),
        b'+' => (false, &number[1..]),
        _ => (false, number),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.len() + frac_part.len() > 15 {
        return None;
    }

    let places = frac_part.len();
    let scale = 10i64.pow(places as u32);
    let magnitude: i64 = format!("{int_part}{frac_part}").parse().ok()?;
    let percent = if negative { -magnitude } else { magnitude };
    let inverted = 100 * scale - percent;

    let sign = if inverted < 0 { "-" } else { "" };
    let whole = inverted.abs() / scale;
    let fraction = format!("{:0places$}", inverted.abs() % scale);
    let fraction = fraction.trim_end_matches('0');
    if places == 0 || fraction.is_empty() {
        Some(format!("{sign}{whole}%"))
    } else {
        Some(format!("{sign}{whole}.{fraction}%"))
    }
}

/// Split on `separator`, ignoring separators nested in parentheses.
pub(crate) fn split_outside_parens(value: &str, separator: char) -> Vec<&str> {
    split_top_level(value, |ch| ch == separator)
}

/// Whitespace separated words, keeping `rgba(0, 0, 0)` and the like whole.
pub(crate) fn words_outside_parens(value: &str) -> Vec<&str> {
    split_top_level(value, |ch| ch.is_ascii_whitespace())
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect()
}

fn split_top_level(value: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_separator(ch) => {
                parts.push(&value[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}
