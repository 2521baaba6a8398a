//! Shared types and error types for Voxlink

pub mod errors;

pub use errors::{AppError, AppResult};
