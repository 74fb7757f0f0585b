//! Engine lifecycle regression test
//!
//! Walks the engine state machine: construction, sigma validation and
//! atomic updates, buffer views and bulk copies, lazy weight-table
//! rebuilds across sigma changes, and the constant-image fixed point.

use bilateral_filter::{BilateralFilter, FilterError, SpatialKernel};
use bilateral_test::{RegParams, constant_image};

#[test]
fn engine_reg_lifecycle() {
    let mut rp = RegParams::new("engine_lifecycle");

    // Construction validates dimensions
    rp.compare_values(
        1.0,
        if BilateralFilter::new(0, 4).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    let mut engine = BilateralFilter::new(16, 9).expect("create engine");
    rp.compare_values(16.0, engine.width() as f64, 0.0);
    rp.compare_values(9.0, engine.height() as f64, 0.0);
    rp.compare_values(144.0, engine.input().len() as f64, 0.0);
    rp.compare_values(144.0, engine.output().len() as f64, 0.0);

    // Running before any set_sigma is rejected
    let not_initialized = matches!(engine.run(), Err(FilterError::NotInitialized));
    rp.compare_values(1.0, if not_initialized { 1.0 } else { 0.0 }, 0.0);

    // Invalid sigmas are rejected; a later valid pair sticks
    rp.compare_values(
        1.0,
        if engine.set_sigma(-2.0, 30.0).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    engine.set_sigma(1.5, 25.0).expect("set sigma");
    rp.compare_values(
        1.0,
        if engine.set_sigma(1.5, f32::NAN).is_err() { 1.0 } else { 0.0 },
        0.0,
    );
    let params = engine.sigma().expect("configured");
    rp.compare_values(1.5, params.spatial as f64, 0.0);
    rp.compare_values(25.0, params.range as f64, 0.0);

    // Populate via the mutable view and run
    let fill = constant_image(16, 9, 77);
    engine.input_mut().copy_from_slice(fill.as_slice());
    engine.run().expect("run");

    // Constant input filters to itself for any valid sigma pair
    rp.compare_strings(fill.as_slice(), engine.output());
    // The input buffer is never mutated by a pass
    rp.compare_strings(fill.as_slice(), engine.input());

    // Spatial sigma change forces a table rebuild on the next run
    engine.set_sigma(3.0, 25.0).expect("update sigma");
    engine.run().expect("run after rebuild");
    rp.compare_strings(fill.as_slice(), engine.output());

    assert!(rp.cleanup(), "engine_lifecycle regression test failed");
}

#[test]
fn engine_reg_radius_derivation() {
    let mut rp = RegParams::new("engine_radius");

    // R = ceil(3 * sigma)
    rp.compare_values(3.0, SpatialKernel::radius_for_sigma(1.0) as f64, 0.0);
    rp.compare_values(6.0, SpatialKernel::radius_for_sigma(2.0) as f64, 0.0);
    rp.compare_values(2.0, SpatialKernel::radius_for_sigma(0.5) as f64, 0.0);
    rp.compare_values(4.0, SpatialKernel::radius_for_sigma(1.1) as f64, 0.0);

    let kernel = SpatialKernel::from_sigma(2.0).expect("kernel");
    rp.compare_values(13.0, kernel.side() as f64, 0.0);
    rp.compare_values(1.0, kernel.get(0, 0) as f64, 0.0);
    rp.compare_values(
        kernel.get(3, -2) as f64,
        kernel.get(-3, 2) as f64,
        0.0,
    );

    assert!(rp.cleanup(), "engine_radius regression test failed");
}
