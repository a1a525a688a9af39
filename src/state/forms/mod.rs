//! Form domain layer: fields, per-variant form structs, validation

mod field;
mod form_state;
mod validate;

pub use field::*;
pub use form_state::*;
pub use validate::*;
