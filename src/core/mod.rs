//! Recipe engine: field decoding, token tables, the table interpreter,
//! product matchers and the ordered catalog that resolves a volume's image
//! descriptor. The high-level `api` module builds on these primitives.
pub mod catalog;
pub mod descriptor;
pub mod fields;
pub mod interpreter;
pub mod matchers;
pub mod params;
pub mod recipes;
pub mod tokens;
