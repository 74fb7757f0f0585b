//! Bilateral filtering (edge-preserving smoothing)
//!
//! The bilateral filter is a non-linear, edge-preserving smoothing filter.
//! Each output pixel is a normalized weighted average of its neighbors,
//! where the weight is the product of a spatial Gaussian (distance from
//! the center pixel) and a range Gaussian (intensity difference from the
//! center pixel). Uniform regions are smoothed while edges survive.
//!
//! # Border policy
//!
//! Offsets that fall outside the image are skipped entirely and the
//! normalization compensates (skip-and-renormalize). Border pixels are
//! therefore averaged over their in-bounds neighbors only and are not
//! biased toward any replicated or padded value.
//!
//! # Purity
//!
//! The per-pixel reduction reads only the input buffer and the weight
//! tables and writes only the pixel's own output slot. No output value is
//! ever read back as a source within the same pass, so results do not
//! depend on pixel visiting order.

use crate::kernel::{SpatialKernel, make_range_kernel};
use crate::{FilterError, FilterResult};
use bilateral_core::{Error, GrayBuffer};

/// Run one bilateral filter pass, writing into a caller-supplied buffer.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] (via [`FilterError::Core`]) if the
/// output buffer's dimensions differ from the input's.
pub fn bilateral_gray_into(
    input: &GrayBuffer,
    output: &mut GrayBuffer,
    spatial: &SpatialKernel,
    range: &[f32; 256],
) -> FilterResult<()> {
    if input.width() != output.width() || input.height() != output.height() {
        return Err(FilterError::Core(Error::DimensionMismatch {
            expected: (input.width(), input.height()),
            actual: (output.width(), output.height()),
        }));
    }

    let w = input.width() as i32;
    let h = input.height() as i32;
    let r = spatial.radius() as i32;

    let src = input.as_slice();
    let dst = output.as_mut_slice();

    for y in 0..h {
        for x in 0..w {
            let center = src[(y * w + x) as usize];

            let mut sum = 0.0f32;
            let mut norm = 0.0f32;

            for dy in -r..=r {
                let ny = y + dy;
                if ny < 0 || ny >= h {
                    continue;
                }
                for dx in -r..=r {
                    let nx = x + dx;
                    if nx < 0 || nx >= w {
                        continue;
                    }

                    let neighbor = src[(ny * w + nx) as usize];
                    let weight =
                        spatial.get(dx, dy) * range[center.abs_diff(neighbor) as usize];
                    sum += neighbor as f32 * weight;
                    norm += weight;
                }
            }

            // norm > 0 always: the center offset contributes weight 1 * 1
            dst[(y * w + x) as usize] = (sum / norm + 0.5) as u8;
        }
    }

    Ok(())
}

/// Apply a bilateral filter to a grayscale image in one shot.
///
/// Builds both weight tables from the given sigmas and allocates a fresh
/// output buffer. Interactive callers that tune sigmas across many passes
/// over the same buffers should use [`crate::BilateralFilter`] instead,
/// which caches the tables.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if either sigma is not
/// finite and positive.
pub fn bilateral_gray(
    input: &GrayBuffer,
    spatial_sigma: f32,
    range_sigma: f32,
) -> FilterResult<GrayBuffer> {
    let spatial = SpatialKernel::from_sigma(spatial_sigma)?;
    let range = make_range_kernel(range_sigma)?;

    let mut output = GrayBuffer::new(input.width(), input.height())?;
    bilateral_gray_into(input, &mut output, &spatial, &range)?;
    Ok(output)
}
