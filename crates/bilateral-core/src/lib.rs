//! bilateral-core - Core data structures for the bilateral filter engine
//!
//! This crate provides the fundamental data structures shared by the
//! engine crates:
//!
//! - [`GrayBuffer`] - Owned single-channel 8-bit image buffer (row-major)
//! - [`Error`] / [`Result`] - Unified error type for core operations
//!
//! The engine exchanges raw grayscale bytes with external collaborators
//! (decoders, display surfaces) exclusively through [`GrayBuffer`] views
//! and bulk copies; no image format or I/O concern lives here.

pub mod buffer;
pub mod error;

pub use buffer::GrayBuffer;
pub use error::{Error, Result};
