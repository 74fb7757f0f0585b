//! Stateful bilateral filter engine
//!
//! [`BilateralFilter`] owns one input and one output buffer for a fixed
//! image size and reuses them across passes, which is the interactive
//! tuning workflow: load pixels once, then adjust sigmas and re-run. The
//! weight tables are cached and rebuilt lazily: `set_sigma` only stores
//! the new values and marks the affected table stale; the rebuild happens
//! at the start of the next `run`, so repeated sigma changes between
//! passes cost nothing.
//!
//! The engine runs synchronously and performs no internal locking; it is
//! not meant to be shared across threads mid-pass.

use crate::bilateral::bilateral_gray_into;
use crate::kernel::{SpatialKernel, make_range_kernel};
use crate::{FilterError, FilterResult};
use bilateral_core::GrayBuffer;

/// Current sigma parameters of an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmaParams {
    /// Spatial sigma: how far, in pixels, smoothing extends
    pub spatial: f32,
    /// Range sigma: how much intensity difference suppresses smoothing
    pub range: f32,
}

/// Cached spatial weight table.
///
/// `Stale` forces a full rebuild at the start of the next run.
#[derive(Debug)]
enum SpatialCache {
    Stale,
    Fresh(SpatialKernel),
}

/// Cached range weight table.
#[derive(Debug)]
enum RangeCache {
    Stale,
    Fresh([f32; 256]),
}

/// Bilateral filter engine over a fixed-size grayscale image.
///
/// # Lifecycle
///
/// Constructed → Configured (first successful [`set_sigma`]) → Filtered
/// (each [`run`]). `set_sigma` may be called from any state; changing the
/// spatial sigma marks the spatial table stale regardless of prior state.
/// `run` fails with [`FilterError::NotInitialized`] until a `set_sigma`
/// call has succeeded; there is no implicit default sigma.
///
/// # Example
///
/// ```
/// use bilateral_filter::BilateralFilter;
///
/// let mut engine = BilateralFilter::new(4, 4).unwrap();
/// engine.set_sigma(2.0, 30.0).unwrap();
/// engine.input_mut().copy_from_slice(&[128u8; 16]);
/// engine.run().unwrap();
/// assert_eq!(engine.output(), &[128u8; 16]);
/// ```
///
/// [`set_sigma`]: BilateralFilter::set_sigma
/// [`run`]: BilateralFilter::run
#[derive(Debug)]
pub struct BilateralFilter {
    input: GrayBuffer,
    output: GrayBuffer,
    params: Option<SigmaParams>,
    spatial: SpatialCache,
    range: RangeCache,
}

impl BilateralFilter {
    /// Create an engine for the given image dimensions.
    ///
    /// Both buffers are allocated zero-initialized and never reallocated.
    ///
    /// # Errors
    ///
    /// Returns [`bilateral_core::Error::InvalidDimension`] (via
    /// [`FilterError::Core`]) if width or height is 0.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        Ok(BilateralFilter {
            input: GrayBuffer::new(width, height)?,
            output: GrayBuffer::new(width, height)?,
            params: None,
            spatial: SpatialCache::Stale,
            range: RangeCache::Stale,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.input.width()
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.input.height()
    }

    /// Get the current sigma parameters, if any have been set.
    #[inline]
    pub fn sigma(&self) -> Option<SigmaParams> {
        self.params
    }

    /// Set both sigma parameters.
    ///
    /// The update is atomic: on failure neither value changes and no
    /// cache is invalidated. On success the affected weight tables are
    /// marked stale; recomputation is deferred to the next [`run`].
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if either value is not
    /// finite and positive.
    ///
    /// [`run`]: BilateralFilter::run
    pub fn set_sigma(&mut self, spatial: f32, range: f32) -> FilterResult<()> {
        if !spatial.is_finite() || spatial <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "spatial sigma must be finite and positive, got {spatial}"
            )));
        }
        if !range.is_finite() || range <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "range sigma must be finite and positive, got {range}"
            )));
        }

        match self.params {
            Some(prev) => {
                if prev.spatial != spatial {
                    self.spatial = SpatialCache::Stale;
                }
                if prev.range != range {
                    self.range = RangeCache::Stale;
                }
            }
            None => {
                self.spatial = SpatialCache::Stale;
                self.range = RangeCache::Stale;
            }
        }
        self.params = Some(SigmaParams { spatial, range });
        Ok(())
    }

    /// Get a read-only view of the input buffer.
    #[inline]
    pub fn input(&self) -> &[u8] {
        self.input.as_slice()
    }

    /// Get a mutable view of the input buffer for the caller to populate.
    #[inline]
    pub fn input_mut(&mut self) -> &mut [u8] {
        self.input.as_mut_slice()
    }

    /// Get a read-only view of the output buffer.
    #[inline]
    pub fn output(&self) -> &[u8] {
        self.output.as_slice()
    }

    /// Bulk copy pixels into the input buffer.
    ///
    /// # Errors
    ///
    /// Returns [`bilateral_core::Error::SizeMismatch`] (via
    /// [`FilterError::Core`]) if `src.len() != width * height`.
    pub fn load_input(&mut self, src: &[u8]) -> FilterResult<()> {
        self.input.copy_from_slice(src)?;
        Ok(())
    }

    /// Bulk copy the output buffer into a caller-owned slice.
    ///
    /// # Errors
    ///
    /// Returns [`bilateral_core::Error::SizeMismatch`] (via
    /// [`FilterError::Core`]) if `dst.len() != width * height`.
    pub fn copy_output(&self, dst: &mut [u8]) -> FilterResult<()> {
        self.output.copy_to_slice(dst)?;
        Ok(())
    }

    /// Run one full filter pass from the input buffer into the output
    /// buffer.
    ///
    /// Rebuilds any stale weight table first, then executes the pass
    /// synchronously; the input buffer is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NotInitialized`] if no `set_sigma` call has
    /// succeeded yet. On error no buffer is mutated.
    pub fn run(&mut self) -> FilterResult<()> {
        let Some(params) = self.params else {
            return Err(FilterError::NotInitialized);
        };

        if matches!(self.spatial, SpatialCache::Stale) {
            self.spatial = SpatialCache::Fresh(SpatialKernel::from_sigma(params.spatial)?);
        }
        if matches!(self.range, RangeCache::Stale) {
            self.range = RangeCache::Fresh(make_range_kernel(params.range)?);
        }

        let (SpatialCache::Fresh(spatial), RangeCache::Fresh(range)) =
            (&self.spatial, &self.range)
        else {
            unreachable!("weight tables rebuilt above");
        };

        bilateral_gray_into(&self.input, &mut self.output, spatial, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilateral_core::Error;

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(matches!(
            BilateralFilter::new(0, 10),
            Err(FilterError::Core(Error::InvalidDimension { .. }))
        ));
        assert!(BilateralFilter::new(10, 0).is_err());
    }

    #[test]
    fn test_run_before_set_sigma() {
        let mut engine = BilateralFilter::new(4, 4).unwrap();
        assert!(matches!(engine.run(), Err(FilterError::NotInitialized)));
        // Failed run must not touch the output buffer
        assert!(engine.output().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_failed_set_sigma_keeps_engine_unconfigured() {
        let mut engine = BilateralFilter::new(4, 4).unwrap();
        assert!(engine.set_sigma(0.0, 30.0).is_err());
        assert_eq!(engine.sigma(), None);
        assert!(matches!(engine.run(), Err(FilterError::NotInitialized)));
    }

    #[test]
    fn test_set_sigma_atomic_on_failure() {
        let mut engine = BilateralFilter::new(4, 4).unwrap();
        engine.set_sigma(2.0, 30.0).unwrap();

        // Second value invalid: neither value may change
        assert!(engine.set_sigma(3.0, -1.0).is_err());
        assert_eq!(
            engine.sigma(),
            Some(SigmaParams {
                spatial: 2.0,
                range: 30.0
            })
        );

        assert!(engine.set_sigma(f32::NAN, 30.0).is_err());
        assert!(engine.set_sigma(f32::INFINITY, 30.0).is_err());
        assert_eq!(
            engine.sigma(),
            Some(SigmaParams {
                spatial: 2.0,
                range: 30.0
            })
        );
    }

    #[test]
    fn test_run_after_configure() {
        let mut engine = BilateralFilter::new(4, 4).unwrap();
        engine.set_sigma(1.0, 10.0).unwrap();
        engine.input_mut().copy_from_slice(&[200u8; 16]);
        engine.run().unwrap();
        assert_eq!(engine.output(), &[200u8; 16]);
    }

    #[test]
    fn test_sigma_change_between_runs() {
        let mut engine = BilateralFilter::new(6, 6).unwrap();
        engine.set_sigma(1.0, 10.0).unwrap();
        engine.run().unwrap();

        // Change only the range sigma, then only the spatial sigma; each
        // run must pick up the new tables
        engine.set_sigma(1.0, 50.0).unwrap();
        engine.run().unwrap();
        engine.set_sigma(2.5, 50.0).unwrap();
        engine.run().unwrap();
        assert_eq!(
            engine.sigma(),
            Some(SigmaParams {
                spatial: 2.5,
                range: 50.0
            })
        );
    }

    #[test]
    fn test_extreme_sigmas_accepted_and_run() {
        // Finite positive sigmas at the f32 extremes must run without
        // panicking; the radius is capped, not overflowed
        let mut engine = BilateralFilter::new(2, 2).unwrap();
        engine.input_mut().copy_from_slice(&[9u8; 4]);

        engine.set_sigma(1.0e9, 30.0).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.output(), &[9u8; 4]);

        engine.set_sigma(1.0e-30, 1.0e-30).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.output(), &[9u8; 4]);
    }

    #[test]
    fn test_bulk_copy_api() {
        let mut engine = BilateralFilter::new(3, 2).unwrap();
        engine.set_sigma(1.0, 10.0).unwrap();

        engine.load_input(&[10, 20, 30, 40, 50, 60]).unwrap();
        assert!(matches!(
            engine.load_input(&[0u8; 5]),
            Err(FilterError::Core(Error::SizeMismatch { .. }))
        ));

        engine.run().unwrap();
        let mut out = [0u8; 6];
        engine.copy_output(&mut out).unwrap();
        assert_eq!(&out, engine.output());

        let mut short = [0u8; 4];
        assert!(engine.copy_output(&mut short).is_err());
    }
}
