//! bilateral-test - Regression test framework for the bilateral filter
//!
//! Provides a small regression test framework with three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default; a missing
//!   golden file is generated on first run)
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use bilateral_test::RegParams;
//!
//! let mut rp = RegParams::new("bilateral");
//! rp.compare_values(36.0, engine.output().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"
//!
//! The crate also provides synthetic single-channel test images used
//! across the workspace's regression tests.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use bilateral_core::GrayBuffer;

/// Create an image with every pixel set to `val`.
pub fn constant_image(width: u32, height: u32, val: u8) -> GrayBuffer {
    let mut buf = GrayBuffer::new(width, height).expect("valid test dimensions");
    buf.fill(val);
    buf
}

/// Create an image with a sharp vertical edge at `width / 2`.
///
/// Pixels left of the edge are `low`, pixels right of it are `high`.
pub fn edge_image(width: u32, height: u32, low: u8, high: u8) -> GrayBuffer {
    let mut buf = GrayBuffer::new(width, height).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            let val = if x < width / 2 { low } else { high };
            buf.set_pixel_unchecked(x, y, val);
        }
    }
    buf
}

/// Create a horizontal intensity ramp, 0 at the left edge and 255 at the
/// right edge.
pub fn gradient_image(width: u32, height: u32) -> GrayBuffer {
    let mut buf = GrayBuffer::new(width, height).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            let val = if width > 1 {
                ((x * 255) / (width - 1)) as u8
            } else {
                0
            };
            buf.set_pixel_unchecked(x, y, val);
        }
    }
    buf
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bilateral-test is at crates/bilateral-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
