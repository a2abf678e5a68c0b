//! Traits descriptor: lane sizing for a (complex, real) scalar pair
//!
//! Kernels pick a descriptor for their scalar types and instantiate lane
//! vectors through its associated types, so every vector in a kernel shares
//! one lane count and one alignment.
//!
//! ```rust
//! use autosimd_core::{AutoImplTraits, ImplTraits, LaneVector};
//!
//! type Traits = AutoImplTraits<f64, f64>;
//! let mut acc = Traits::vreal();
//! acc.fma_scalar(&LaneVector::splat(2.0), 3.0);
//! assert_eq!(acc[0], 6.0);
//! assert_eq!(Traits::SIMD_SIZE, 1);
//! ```
//!
//! # Descriptor invariant
//!
//! `SIMD * size_of::<C>()` must divide `ALIGN_SIZE`. The check runs when any
//! associated constant is read or a vector is built through
//! [`ImplTraits::vcomplex`], [`ImplTraits::vreal`] or [`ImplTraits::vint`].
//! Naming `VComplex`/`VReal`/`VInt` alone, e.g. `VReal::default()`, is not
//! checked; kernels construct through the descriptor.
//!
//! Sixteen `f64` lanes are 128 bytes, wider than any supported register:
//!
//! ```compile_fail
//! use autosimd_core::{ImplTraits, LaneTraits};
//!
//! type TooWide = LaneTraits<f64, f64, 16, 16>;
//! assert_eq!(<TooWide as ImplTraits>::ALIGN_SIZE, 0);
//! ```
//!
//! Three `f64` lanes (24 bytes) divide no power-of-two register width:
//!
//! ```compile_fail
//! use autosimd_core::{ImplTraits, LaneTraits};
//!
//! type Odd = LaneTraits<f64, f64, 3, 1>;
//! let _acc = <Odd as ImplTraits>::vreal();
//! ```

use crate::align::AlignFor;
use crate::config;
use crate::lane::LaneVector;
use crate::scalar::LaneScalar;
use std::marker::PhantomData;

/// Compile-time constants and lane types a kernel is specialised with
pub trait ImplTraits {
    /// Scalar type of complex-valued quantities
    type Complex: LaneScalar;
    /// Scalar type of real-valued quantities
    type Real: LaneScalar;

    /// Lane vector of complex-valued quantities
    type VComplex: Copy + Default;
    /// Lane vector of real-valued quantities
    type VReal: Copy + Default;
    /// Lane vector of integer quantities
    type VInt: Copy + Default;

    /// Kernel batching granularity
    const BLOCK_SIZE: usize;
    /// Memory alignment in bytes
    const ALIGN_SIZE: usize;
    /// Lanes per vector
    const SIMD_SIZE: usize;
    /// Alignment multiplier of the vector types
    const VALIGN_SIZE: usize;
    /// Outer batching factor
    const BATCH_SIZE: usize;

    /// Zeroed complex-valued lane vector
    fn vcomplex() -> Self::VComplex;
    /// Zeroed real-valued lane vector
    fn vreal() -> Self::VReal;
    /// Zeroed integer lane vector
    fn vint() -> Self::VInt;
}

/// Descriptor with `SIMD` lanes and alignment multiplier `VALIGN`
///
/// Never instantiated; only its associated items are used.
pub struct LaneTraits<C, R, const SIMD: usize = 1, const VALIGN: usize = 1> {
    _marker: PhantomData<(C, R)>,
}

/// Scalar-fallback descriptor: one lane, natural alignment
pub type AutoImplTraits<C, R> = LaneTraits<C, R, 1, 1>;

/// Descriptor whose lanes fill one vector register of `f64`
pub type NativeF64Traits = LaneTraits<f64, f64, { config::ALIGN_SIZE / 8 }, { config::ALIGN_SIZE / 8 }>;

/// Descriptor whose lanes fill one vector register of `f32`
pub type NativeF32Traits = LaneTraits<f32, f32, { config::ALIGN_SIZE / 4 }, { config::ALIGN_SIZE / 4 }>;

impl<C, R, const SIMD: usize, const VALIGN: usize> LaneTraits<C, R, SIMD, VALIGN>
where
    C: LaneScalar,
{
    const VALID: () = {
        assert!(SIMD > 0, "SIMD_SIZE must be positive");
        assert!(
            config::ALIGN_SIZE % (SIMD * std::mem::size_of::<C>()) == 0,
            "SIMD_SIZE lanes of the complex scalar must divide ALIGN_SIZE"
        );
    };
}

impl<C, R, const SIMD: usize, const VALIGN: usize> ImplTraits for LaneTraits<C, R, SIMD, VALIGN>
where
    C: AlignFor<VALIGN>,
    R: AlignFor<VALIGN>,
    i32: AlignFor<VALIGN>,
{
    type Complex = C;
    type Real = R;

    type VComplex = LaneVector<C, SIMD, VALIGN>;
    type VReal = LaneVector<R, SIMD, VALIGN>;
    type VInt = LaneVector<i32, SIMD, VALIGN>;

    const BLOCK_SIZE: usize = {
        let () = Self::VALID;
        config::BLOCK_SIZE
    };
    const ALIGN_SIZE: usize = {
        let () = Self::VALID;
        config::ALIGN_SIZE
    };
    const SIMD_SIZE: usize = {
        let () = Self::VALID;
        SIMD
    };
    const VALIGN_SIZE: usize = {
        let () = Self::VALID;
        VALIGN
    };
    const BATCH_SIZE: usize = {
        let () = Self::VALID;
        config::BATCH_SIZE
    };

    #[inline]
    fn vcomplex() -> Self::VComplex {
        let () = Self::VALID;
        LaneVector::zeroed()
    }

    #[inline]
    fn vreal() -> Self::VReal {
        let () = Self::VALID;
        LaneVector::zeroed()
    }

    #[inline]
    fn vint() -> Self::VInt {
        let () = Self::VALID;
        LaneVector::zeroed()
    }
}

/// Lane count a fully vectorised build would use for `T`
pub const fn native_simd_size<T: LaneScalar>() -> usize {
    let lanes = config::ALIGN_SIZE / std::mem::size_of::<T>();
    if lanes == 0 {
        1
    } else {
        lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;
    use std::mem::align_of;

    #[test]
    fn test_auto_traits_constants() {
        type T = AutoImplTraits<f64, f64>;
        assert_eq!(T::BLOCK_SIZE, 4);
        assert_eq!(T::ALIGN_SIZE, config::ALIGN_SIZE);
        assert_eq!(T::SIMD_SIZE, 1);
        assert_eq!(T::VALIGN_SIZE, 1);
        assert_eq!(T::BATCH_SIZE, 1);
    }

    #[test]
    fn test_derived_vector_types_share_shape() {
        type T = LaneTraits<f32, f64, 2, 2>;
        assert_eq!(
            TypeId::of::<<T as ImplTraits>::VComplex>(),
            TypeId::of::<LaneVector<f32, 2, 2>>()
        );
        assert_eq!(
            TypeId::of::<<T as ImplTraits>::VReal>(),
            TypeId::of::<LaneVector<f64, 2, 2>>()
        );
        assert_eq!(
            TypeId::of::<<T as ImplTraits>::VInt>(),
            TypeId::of::<LaneVector<i32, 2, 2>>()
        );
        assert_eq!(T::SIMD_SIZE, 2);
    }

    #[test]
    fn test_descriptor_constructors_are_zeroed() {
        type T = LaneTraits<f32, f64, 2, 2>;
        assert_eq!(T::vcomplex(), LaneVector::<f32, 2, 2>::splat(0.0));
        assert_eq!(T::vreal().into_array(), [0.0, 0.0]);
        assert_eq!(T::vint().into_array(), [0, 0]);
        assert_eq!(align_of::<<T as ImplTraits>::VReal>(), 16);

        let mut acc = NativeF64Traits::vreal();
        acc.set(1.5);
        assert_eq!(acc.as_slice().len(), NativeF64Traits::SIMD_SIZE);
    }

    #[test]
    fn test_every_constant_passes_the_invariant() {
        type T = LaneTraits<f64, f64, 2, 2>;
        let constants = [
            T::BLOCK_SIZE,
            T::ALIGN_SIZE,
            T::SIMD_SIZE,
            T::VALIGN_SIZE,
            T::BATCH_SIZE,
        ];
        assert_eq!(constants, [config::BLOCK_SIZE, config::ALIGN_SIZE, 2, 2, config::BATCH_SIZE]);
        assert_eq!(T::ALIGN_SIZE % (T::SIMD_SIZE * std::mem::size_of::<f64>()), 0);
    }

    #[test]
    fn test_native_descriptors_fill_a_register() {
        assert_eq!(NativeF64Traits::SIMD_SIZE, native_simd_size::<f64>());
        assert_eq!(NativeF32Traits::SIMD_SIZE, native_simd_size::<f32>());
        assert_eq!(
            align_of::<<NativeF64Traits as ImplTraits>::VReal>(),
            config::ALIGN_SIZE
        );
    }

    #[test]
    fn test_native_simd_size() {
        assert_eq!(native_simd_size::<f64>(), config::ALIGN_SIZE / 8);
        assert_eq!(native_simd_size::<i32>(), config::ALIGN_SIZE / 4);
    }
}
