pub mod declaration;
pub mod function;
pub mod shadow;
pub mod values;
