use crate::style::shadow::shadow_swap;
use crate::style::values::{
    background_image_swap, background_position_swap, background_swap, border_radius_swap,
    direction_swap, quad_swap, side_swap,
};

/// Property names that trade places when the direction flips. Every pair is
/// listed both ways, so a lookup applied twice gives back the original name.
const PROPERTY_MAP: &[(&str, &str)] = &[
    ("margin-left", "margin-right"),
    ("margin-right", "margin-left"),
    ("padding-left", "padding-right"),
    ("padding-right", "padding-left"),
    ("border-left", "border-right"),
    ("border-right", "border-left"),
    ("border-left-width", "border-right-width"),
    ("border-right-width", "border-left-width"),
    ("border-radius-bottomleft", "border-radius-bottomright"),
    ("border-radius-bottomright", "border-radius-bottomleft"),
    ("border-radius-topleft", "border-radius-topright"),
    ("border-radius-topright", "border-radius-topleft"),
    ("-moz-border-radius-bottomright", "-moz-border-radius-bottomleft"),
    ("-moz-border-radius-bottomleft", "-moz-border-radius-bottomright"),
    ("-moz-border-radius-topright", "-moz-border-radius-topleft"),
    ("-moz-border-radius-topleft", "-moz-border-radius-topright"),
    ("-webkit-border-top-right-radius", "-webkit-border-top-left-radius"),
    ("-webkit-border-top-left-radius", "-webkit-border-top-right-radius"),
    ("-webkit-border-bottom-right-radius", "-webkit-border-bottom-left-radius"),
    ("-webkit-border-bottom-left-radius", "-webkit-border-bottom-right-radius"),
    ("left", "right"),
    ("right", "left"),
];

/// How the value of a property is mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// `top right bottom left` quads.
    Quad,
    BorderRadius,
    /// `left` / `right` keywords.
    Side,
    /// `rtl` / `ltr` keywords.
    Direction,
    Shadow,
    BackgroundPosition,
    Background,
    BackgroundImage,
}

impl ValueRule {
    pub fn apply(self, value: &str) -> String {
        match self {
            ValueRule::Quad => quad_swap(value),
            ValueRule::BorderRadius => border_radius_swap(value),
            ValueRule::Side => side_swap(value),
            ValueRule::Direction => direction_swap(value),
            ValueRule::Shadow => shadow_swap(value),
            ValueRule::BackgroundPosition => background_position_swap(value),
            ValueRule::Background => background_swap(value),
            ValueRule::BackgroundImage => background_image_swap(value),
        }
    }
}

/// Value rules keyed by the property name after renaming.
const VALUE_RULES: &[(&str, ValueRule)] = &[
    ("padding", ValueRule::Quad),
    ("margin", ValueRule::Quad),
    ("border-radius", ValueRule::BorderRadius),
    ("-moz-border-radius", ValueRule::BorderRadius),
    ("-webkit-border-radius", ValueRule::BorderRadius),
    ("text-align", ValueRule::Side),
    ("float", ValueRule::Side),
    ("clear", ValueRule::Side),
    ("box-shadow", ValueRule::Shadow),
    ("-webkit-box-shadow", ValueRule::Shadow),
    ("-moz-box-shadow", ValueRule::Shadow),
    ("direction", ValueRule::Direction),
    ("background-position", ValueRule::BackgroundPosition),
    ("background", ValueRule::Background),
    ("background-image", ValueRule::BackgroundImage),
];

/// The mirrored name of a direction-specific property, e.g. `margin-left`
/// gives `margin-right`. Matching is exact and case-sensitive.
pub fn mirrored_property(property: &str) -> Option<&'static str> {
    PROPERTY_MAP
        .iter()
        .find(|(from, _)| *from == property)
        .map(|(_, to)| *to)
}

/// The value rule registered for `property`, if any.
pub fn value_rule(property: &str) -> Option<ValueRule> {
    VALUE_RULES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, rule)| *rule)
}

/// Mirror a single `property:value` declaration, e.g. `padding-left:4px`
/// becomes `padding-right:4px;`.
///
/// The output always ends in `;`. An absent declaration, or one without a
/// property and a value around its first `:`, produces an empty string and
/// so disappears from the stylesheet.
pub fn transform_declaration<'a>(decl: impl Into<Option<&'a str>>) -> String {
    let Some((property, value)) = decl.into().and_then(split_declaration) else {
        return String::new();
    };

    let property = mirrored_property(property).unwrap_or(property);
    let value = match value_rule(property) {
        Some(rule) => {
            let (core, important) = split_important(value);
            format!("{}{important}", rule.apply(core))
        }
        None => value.to_string(),
    };
    format!("{property}:{value};")
}

fn split_declaration(decl: &str) -> Option<(&str, &str)> {
    let (property, value) = decl.split_once(':')?;
    (!property.is_empty() && !value.is_empty()).then_some((property, value))
}

/// Separate a trailing `!important` (with the whitespace before it) so the
/// value rule only sees the value itself.
fn split_important(value: &str) -> (&str, &str) {
    match value.rfind('!') {
        Some(idx) if value[idx + 1..].trim().eq_ignore_ascii_case("important") => {
            let core = value[..idx].trim_end();
            (core, &value[core.len()..])
        }
        _ => (value, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_invalid_declarations() {
        assert_eq!(transform_declaration(None::<&str>), "");
        assert_eq!(transform_declaration(""), "");
        assert_eq!(transform_declaration("not a decl"), "");
        assert_eq!(transform_declaration(":4px"), "");
        assert_eq!(transform_declaration("padding:"), "");
    }

    #[test]
    fn test_renames_property() {
        assert_eq!(transform_declaration("padding-right:4px"), "padding-left:4px;");
        assert_eq!(transform_declaration("left:0"), "right:0;");
        assert_eq!(
            transform_declaration("-webkit-border-top-left-radius:3px"),
            "-webkit-border-top-right-radius:3px;"
        );
    }

    #[test]
    fn test_rewrites_value() {
        assert_eq!(transform_declaration("padding:1px 2px 3px 4px"), "padding:1px 4px 3px 2px;");
        assert_eq!(transform_declaration("direction:rtl"), "direction:ltr;");
        assert_eq!(transform_declaration("float:left"), "float:right;");
        assert_eq!(transform_declaration("box-shadow:1px 2px #000"), "box-shadow:-1px 2px #000;");
    }

    #[test]
    fn test_ignores_other_properties() {
        assert_eq!(transform_declaration("foo:bar"), "foo:bar;");
        assert_eq!(transform_declaration("color:left"), "color:left;");
        assert_eq!(transform_declaration("Float:left"), "Float:left;");
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(
            transform_declaration("background:url(http://example.com/a.png) left"),
            "background:url(http://example.com/a.png) right;"
        );
    }

    #[test]
    fn test_important_suffix() {
        assert_eq!(transform_declaration("float:left!important"), "float:right!important;");
        assert_eq!(
            transform_declaration("margin:1px 2px 3px 4px !important"),
            "margin:1px 4px 3px 2px !important;"
        );
        assert_eq!(transform_declaration("margin-left:0!important"), "margin-right:0!important;");
    }

    #[test]
    fn test_property_map_is_an_involution() {
        for (from, to) in PROPERTY_MAP {
            assert_eq!(mirrored_property(to), Some(*from), "{from} <-> {to}");
        }
        assert_eq!(mirrored_property("color"), None);
    }

    #[test]
    fn test_one_rule_per_property() {
        for (idx, (name, _)) in VALUE_RULES.iter().enumerate() {
            assert!(
                VALUE_RULES[idx + 1..].iter().all(|(other, _)| other != name),
                "duplicate rule for {name}"
            );
        }
        assert_eq!(value_rule("clear"), Some(ValueRule::Side));
        assert_eq!(value_rule("margin-left"), None);
    }
}
