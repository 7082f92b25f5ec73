//! Password generation core: character pool building and sampling.

pub mod charset;
mod generate;

pub use charset::Selection;
pub use generate::{Rounding, generate};
