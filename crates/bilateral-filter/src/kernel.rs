//! Precomputed filter weight tables
//!
//! The bilateral filter combines two Gaussian weights per pixel pair: a
//! spatial weight depending only on the offset between the pixels, and a
//! range weight depending only on their intensity difference. Both are
//! precomputed here so the per-pixel reduction is pure table lookups.

use crate::{FilterError, FilterResult};

/// Factor of sigma beyond which spatial weights are treated as negligible.
const SIGMA_CUTOFF: f32 = 3.0;

/// Largest supported kernel radius.
///
/// Spatial sigmas whose 3-sigma cutoff lands beyond this are capped here,
/// keeping the weight table bounded for any finite positive sigma. At
/// this radius the window already spans 2049x2049 pixels.
pub const MAX_RADIUS: u32 = 1024;

/// Precomputed table of spatial Gaussian weights over a square window.
///
/// Weights are stored row-major for offsets (dx, dy) with
/// `|dx|, |dy| <= radius`; the entry for offset (0, 0) is exactly 1.
#[derive(Debug, Clone)]
pub struct SpatialKernel {
    /// Window half-width in pixels
    radius: u32,
    /// Sigma the table was built from
    sigma: f32,
    /// Weight table, (2*radius+1)^2 entries, row-major in (dx, dy)
    weights: Vec<f32>,
}

impl SpatialKernel {
    /// Kernel radius for a given spatial sigma.
    ///
    /// The smallest integer R at which the Gaussian falls below the
    /// negligibility cutoff: `ceil(3 * sigma)`, capped at [`MAX_RADIUS`].
    pub fn radius_for_sigma(sigma: f32) -> u32 {
        let r = (SIGMA_CUTOFF * sigma).ceil();
        if r >= MAX_RADIUS as f32 {
            MAX_RADIUS
        } else {
            r as u32
        }
    }

    /// Build a kernel from a spatial sigma, deriving the radius.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `sigma` is not finite
    /// and positive.
    pub fn from_sigma(sigma: f32) -> FilterResult<Self> {
        Self::with_radius(Self::radius_for_sigma(validate_sigma(sigma, "spatial")?), sigma)
    }

    /// Build a kernel with an explicit radius.
    ///
    /// A radius of 0 produces the degenerate single-entry kernel (the
    /// filter becomes an identity transform).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `sigma` is not finite
    /// and positive, or if `radius` exceeds [`MAX_RADIUS`].
    pub fn with_radius(radius: u32, sigma: f32) -> FilterResult<Self> {
        let sigma = validate_sigma(sigma, "spatial")?;
        if radius > MAX_RADIUS {
            return Err(FilterError::InvalidParameters(format!(
                "kernel radius {radius} exceeds maximum {MAX_RADIUS}"
            )));
        }

        let side = 2 * radius as i64 + 1;
        // Square the sigma in f64: squaring a small f32 sigma can
        // underflow to 0.0 and turn the center weight into NaN
        let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
        let mut weights = Vec::with_capacity((side * side) as usize);

        let r = radius as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                let dist_sq = (dx * dx + dy * dy) as f64;
                weights.push((-dist_sq / denom).exp() as f32);
            }
        }

        Ok(SpatialKernel {
            radius,
            sigma,
            weights,
        })
    }

    /// Get the window half-width in pixels.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Get the sigma this table was built from.
    #[inline]
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Get the window side length, `2 * radius + 1`.
    #[inline]
    pub fn side(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Get the weight for offset (dx, dy).
    ///
    /// # Panics
    ///
    /// Panics if `|dx| > radius` or `|dy| > radius`.
    #[inline]
    pub fn get(&self, dx: i32, dy: i32) -> f32 {
        let r = self.radius as i32;
        assert!(dx.abs() <= r && dy.abs() <= r);
        let side = self.side() as i32;
        self.weights[((dy + r) * side + (dx + r)) as usize]
    }
}

/// Create a range (intensity) kernel for bilateral filtering.
///
/// Creates a 256-element array where entry `d` is the weight for an
/// absolute intensity difference of `d`: `exp(-d^2 / (2 * sigma^2))`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `sigma` is not finite
/// and positive.
pub fn make_range_kernel(sigma: f32) -> FilterResult<[f32; 256]> {
    let sigma = validate_sigma(sigma, "range")?;

    let mut kernel = [0.0f32; 256];
    // f64 for the same underflow reason as the spatial table
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);

    for (i, val) in kernel.iter_mut().enumerate() {
        *val = (-(i as f64 * i as f64) / denom).exp() as f32;
    }

    Ok(kernel)
}

fn validate_sigma(sigma: f32, which: &str) -> FilterResult<f32> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "{which} sigma must be finite and positive, got {sigma}"
        )));
    }
    Ok(sigma)
}
