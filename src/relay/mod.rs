//! Form relay module for HTTP communication with Web3Forms

mod client;
mod traits;

pub use client::{RelayError, Web3FormsClient};
pub use traits::FormRelay;

#[cfg(test)]
pub use traits::MockFormRelay;
