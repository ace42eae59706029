//! Flip CSS stylesheets between right-to-left and left-to-right.
//!
//! The conversion is textual: the stylesheet is minimized, split into
//! selector headers and declaration bodies, and every declaration whose
//! property or value depends on direction is mirrored. Everything else is
//! copied through.
//!
//! ```
//! let ltr = r2css_lib::convert("body { direction: rtl; padding: 1px 2px 3px 4px; }");
//! assert_eq!(ltr, "body{direction:ltr;padding:1px 4px 3px 2px;}");
//! ```
//!
//! Put `/* no-r2 */` inside a rule (or right before its selector) to leave
//! that rule as it is.

pub mod convert;
pub mod parser;
pub mod style;

/// Stands in for a `/* no-r2 */` comment between minimizing and output.
pub const SKIP_TOKEN: &str = "SKIP_R2";

pub use convert::{convert, convert_all};
pub use parser::minimize::{minimize, strip_skip_markers};
pub use parser::segment::{split_declarations, Block, Segmenter};
pub use style::declaration::{mirrored_property, transform_declaration, value_rule, ValueRule};
pub use style::function::function_swap;
pub use style::shadow::shadow_swap;
pub use style::values::{
    background_image_swap, background_position_swap, background_swap, border_radius_swap,
    direction_swap, quad_swap, side_swap,
};
