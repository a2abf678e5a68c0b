//! Compile-time alignment for lane storage
//!
//! `#[repr(align(N))]` only accepts a literal, so a lane vector cannot be
//! aligned by a const generic directly. Instead every vector stores a
//! zero-length array of a marker type whose alignment is the requested byte
//! count. [`AlignFor<A>`] maps a scalar and an alignment multiplier `A` to the
//! marker for `A * size_of::<T>()` bytes.
//!
//! A multiplier without an impl is rejected at compile time, the same way a
//! lane count mismatch is:
//!
//! ```compile_fail
//! use autosimd_core::LaneVector;
//!
//! let _v = LaneVector::<f64, 4, 3>::splat(1.0);
//! ```

use crate::scalar::LaneScalar;
use std::fmt::Debug;

/// Zero-sized type that carries an alignment requirement and nothing else
pub trait AlignMarker: Copy + Default + Debug + Send + Sync + 'static {
    /// Alignment in bytes
    const BYTES: usize;
}

macro_rules! align_markers {
    ($($name:ident => $bytes:literal),* $(,)?) => {
        $(
            #[doc = concat!("Marker aligned to ", stringify!($bytes), " bytes")]
            #[repr(align($bytes))]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl AlignMarker for $name {
                const BYTES: usize = $bytes;
            }
        )*
    };
}

align_markers! {
    Align1 => 1,
    Align2 => 2,
    Align4 => 4,
    Align8 => 8,
    Align16 => 16,
    Align32 => 32,
    Align64 => 64,
    Align128 => 128,
    Align256 => 256,
}

/// Maps a lane scalar and alignment multiplier `A` to a storage alignment
///
/// The resulting alignment is `A * size_of::<Self>()` bytes.
pub trait AlignFor<const A: usize>: LaneScalar {
    /// Marker type with the required alignment
    type Marker: AlignMarker;
}

macro_rules! impl_align_for {
    ($t:ty: $($mult:literal => $marker:ident),* $(,)?) => {
        $(
            impl AlignFor<$mult> for $t {
                type Marker = $marker;
            }
        )*
    };
}

impl_align_for!(f32: 1 => Align4, 2 => Align8, 4 => Align16, 8 => Align32, 16 => Align64);
impl_align_for!(i32: 1 => Align4, 2 => Align8, 4 => Align16, 8 => Align32, 16 => Align64);
impl_align_for!(u32: 1 => Align4, 2 => Align8, 4 => Align16, 8 => Align32, 16 => Align64);
impl_align_for!(f64: 1 => Align8, 2 => Align16, 4 => Align32, 8 => Align64, 16 => Align128);
impl_align_for!(i64: 1 => Align8, 2 => Align16, 4 => Align32, 8 => Align64, 16 => Align128);
impl_align_for!(u64: 1 => Align8, 2 => Align16, 4 => Align32, 8 => Align64, 16 => Align128);
