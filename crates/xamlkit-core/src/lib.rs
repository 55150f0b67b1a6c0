//! Core design types for the xamlkit generators.
//!
//! This crate provides the read-only object graph the generators consume:
//! - Value types (colors, points, rectangles, gradients)
//! - Text styles and styled runs
//! - Layers and fills
//! - The project index used to resolve values to named resources

pub mod layers;
pub mod project;
pub mod text;
pub mod types;

pub use layers::*;
pub use project::*;
pub use text::*;
pub use types::*;
