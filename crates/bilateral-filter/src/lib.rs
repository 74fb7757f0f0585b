//! bilateral-filter - Edge-preserving smoothing engine
//!
//! This crate implements a bilateral filter over single-channel 8-bit
//! images:
//!
//! - [`BilateralFilter`] - stateful engine with owned buffers and lazily
//!   rebuilt weight-table caches, for interactive sigma tuning
//! - [`bilateral_gray`] / [`bilateral_gray_into`] - one-shot functional
//!   entry points
//! - [`SpatialKernel`] / [`make_range_kernel`] - the precomputed weight
//!   tables
//!
//! The filter runs synchronously and touches no I/O; callers exchange raw
//! grayscale bytes through `bilateral-core` buffers.

pub mod bilateral;
pub mod engine;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};

// Re-export commonly used items
pub use bilateral::{bilateral_gray, bilateral_gray_into};
pub use engine::{BilateralFilter, SigmaParams};
pub use kernel::{MAX_RADIUS, SpatialKernel, make_range_kernel};
