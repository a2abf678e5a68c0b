//! Fixed-width lane vectors for templated numerical kernels
//!
//! This crate provides the innermost building block of a kernel library: a
//! small value type holding `S` scalar lanes with compile-time alignment, and
//! the build-time configuration that kernels are specialised with.
//!
//! # Architecture Overview
//!
//! 1. **Lane vector** - [`LaneVector<T, S, A>`] with elementwise arithmetic,
//!    broadcast assignment and `mul`/`fma` accumulation chains
//! 2. **Traits descriptor** - [`ImplTraits`] picks lane count, alignment and
//!    batching for a (complex, real) scalar pair
//! 3. **Instrumentation** - [`FlopCounter`] and the `flops_*!` macros
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: shape and alignment are part of the type
//! - **No Runtime Dispatch**: lane loops have compile-time trip counts
//! - **No Allocation**: vectors are plain `Copy` values
//! - **Total Arithmetic**: operators never fail; numeric edge cases follow
//!   the scalar type
//!
//! # Example
//!
//! ```rust
//! use autosimd_core::LaneVector;
//!
//! let a = LaneVector::<f64, 4, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
//! let b = LaneVector::<f64, 4, 4>::splat(0.5);
//!
//! let mut acc = LaneVector::<f64, 4, 4>::default();
//! acc.mul(&a, &b).fma_scalar(&a, 2.0);
//!
//! assert_eq!(acc.into_array(), [2.5, 5.0, 7.5, 10.0]);
//! assert_eq!(2.0 / b, LaneVector::splat(4.0));
//! ```

pub mod align;
pub mod config;
pub mod error;
pub mod flops;
pub mod lane;
pub mod ops;
pub mod scalar;
#[cfg(feature = "serialize")]
pub mod serialize;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use align::{AlignFor, AlignMarker};
pub use config::{BuildConfig, ConfigFlags};
pub use flops::FlopCounter;
pub use lane::LaneVector;
pub use scalar::LaneScalar;
pub use traits::{
    native_simd_size, AutoImplTraits, ImplTraits, LaneTraits, NativeF32Traits, NativeF64Traits,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AlignFor, AutoImplTraits, BuildConfig, FlopCounter, ImplTraits, LaneScalar, LaneTraits,
        LaneVector, Result,
    };

    pub use crate::error::Error;

    pub use crate::{flops_add, flops_get, flops_reset};
}
