//! Application state module

mod app_state;
mod forms;
mod outcome;

pub use app_state::*;
pub use forms::*;
pub use outcome::*;
