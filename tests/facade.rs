//! The facade exposes the core crate unchanged

use approx::assert_relative_eq;
use autosimd::prelude::*;

#[test]
fn test_prelude_covers_kernel_surface() {
    let a = LaneVector::<f64, 4, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
    let b = LaneVector::<f64, 4, 4>::from_array([10.0, 20.0, 30.0, 40.0]);

    let mut acc = LaneVector::<f64, 4, 4>::default();
    acc.mul(&a, &b).fma(&a, &b);
    assert_eq!(acc.into_array(), [20.0, 80.0, 180.0, 320.0]);

    let r = (1.0 / a) * a;
    for &lane in r.iter() {
        assert_relative_eq!(lane, 1.0, epsilon = 1e-15);
    }
}

#[test]
fn test_modules_are_reachable() {
    assert_eq!(autosimd::config::BLOCK_SIZE, 4);
    assert_eq!(<AutoImplTraits<f32, f64> as ImplTraits>::SIMD_SIZE, 1);
    assert!(!autosimd::VERSION.is_empty());

    let counter = autosimd::flops::FlopCounter::new();
    counter.add(1);
    assert_eq!(counter.get(), u64::from(FlopCounter::is_enabled()));
}
