//! Lane vectors and kernel configuration for templated numerical kernels
//!
//! Facade over the workspace crates. Cargo features are forwarded to
//! `autosimd-core`:
//!
//! - `align-16`, `align-32` (default), `align-64` - vector register width
//! - `count-flops` - live flop counter
//! - `serialize` (default) - serde support for lane vectors
//!
//! ```rust
//! use autosimd::prelude::*;
//!
//! type Traits = AutoImplTraits<f64, f64>;
//!
//! let mut acc = Traits::vreal();
//! let x = LaneVector::splat(3.0);
//! acc.mul(&x, &x).fma_scalar(&x, 2.0);
//! flops_add!(2 * Traits::SIMD_SIZE as u64);
//!
//! assert_eq!(acc[0], 15.0);
//! ```

pub use autosimd_core::*;
