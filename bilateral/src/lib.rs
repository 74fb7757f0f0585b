//! Bilateral - Edge-preserving smoothing for grayscale images
//!
//! A bilateral filter engine over single-channel 8-bit image buffers,
//! combining a spatial Gaussian weight with an intensity-similarity
//! weight so that uniform regions are smoothed while edges survive.
//!
//! # Example
//!
//! ```
//! use bilateral::BilateralFilter;
//!
//! let mut engine = BilateralFilter::new(4, 4).unwrap();
//! engine.set_sigma(2.0, 30.0).unwrap();
//! engine.input_mut().copy_from_slice(&[64u8; 16]);
//! engine.run().unwrap();
//! assert_eq!(engine.output().len(), 16);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bilateral_core::*;

// Re-export the engine crate's public API at the top level
pub use bilateral_filter::{
    BilateralFilter, FilterError, FilterResult, MAX_RADIUS, SigmaParams, SpatialKernel,
    bilateral_gray, bilateral_gray_into, make_range_kernel,
};
