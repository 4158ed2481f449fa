pub mod auth;
pub mod fixtures;
pub mod types;

pub use types::*;
