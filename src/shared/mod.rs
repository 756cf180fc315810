/// Shared kernel - Common utilities and types used across all layers
pub mod error;
pub mod result;
pub mod security;
pub mod text;

pub use result::Result;
