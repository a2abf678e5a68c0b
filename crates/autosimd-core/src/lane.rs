//! Fixed-width lane vector
//!
//! [`LaneVector<T, S, A>`] holds `S` scalars of type `T` in storage aligned to
//! `A * size_of::<T>()` bytes. Every operation is applied to each lane
//! independently; there is no horizontal reduction and no shuffling. Loops
//! have a compile-time trip count, so the optimiser unrolls them and, for
//! wide enough `S`, emits vector instructions.
//!
//! # Operand forms
//!
//! Binary operators accept a vector or a bare scalar on either side. A scalar
//! is broadcast to every lane and keeps its position as left or right
//! operand, so `e - v` and `e / v` are computed as written.
//!
//! # Accumulation chains
//!
//! Kernels start a product with one of the `mul` forms and extend it with the
//! `fma` forms:
//!
//! ```rust
//! use autosimd_core::LaneVector;
//!
//! let a = LaneVector::<i32, 4>::from_array([1, 2, 3, 4]);
//! let b = LaneVector::<i32, 4>::from_array([10, 20, 30, 40]);
//!
//! let mut acc = LaneVector::<i32, 4>::default();
//! acc.mul(&a, &b).fma(&a, &b);
//! assert_eq!(acc.into_array(), [20, 80, 180, 320]);
//! ```
//!
//! # Shape checking
//!
//! Lane count and alignment are part of the type, so combining vectors of
//! different shapes does not compile:
//!
//! ```compile_fail
//! use autosimd_core::LaneVector;
//!
//! let wide = LaneVector::<f64, 4>::splat(1.0);
//! let narrow = LaneVector::<f64, 2>::splat(1.0);
//! let _sum = wide + narrow;
//! ```
//!
//! # Unchecked contracts
//!
//! Division by a zero lane follows the scalar's native behaviour (IEEE
//! infinities/NaN for floats, a panic for integers). Indexing through
//! [`Index`] is bounds-checked; [`LaneVector::get_unchecked`] is the
//! unchecked form for hot loops.

use crate::align::AlignFor;
use crate::config::always_inline;
use crate::error::{Error, Result};
use bytemuck::Zeroable;
use std::fmt;
use std::ops::{Index, IndexMut};

/// `S` scalar lanes of type `T` aligned to `A * size_of::<T>()` bytes
#[repr(C)]
pub struct LaneVector<T, const S: usize, const A: usize = 1>
where
    T: AlignFor<A>,
{
    _align: [T::Marker; 0],
    pub(crate) vec: [T; S],
}

impl<T, const S: usize, const A: usize> LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    /// Number of lanes
    pub const SIZE: usize = S;

    /// Alignment multiplier
    pub const ALIGN_SIZE: usize = A;

    always_inline! {
        /// Vector with every lane set to `e`
        pub fn splat(e: T) -> Self {
            Self { _align: [], vec: [e; S] }
        }
    }

    always_inline! {
        /// Vector holding the given lanes
        pub const fn from_array(vec: [T; S]) -> Self {
            Self { _align: [], vec }
        }
    }

    /// Vector with every lane zero
    #[inline]
    pub fn zeroed() -> Self {
        <Self as Zeroable>::zeroed()
    }

    /// Lanes as an array
    #[inline]
    pub fn as_array(&self) -> &[T; S] {
        &self.vec
    }

    /// Lanes as a mutable array
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; S] {
        &mut self.vec
    }

    /// Consume the vector and return its lanes
    #[inline]
    pub fn into_array(self) -> [T; S] {
        self.vec
    }

    /// Lanes as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    /// Iterator over the lanes in order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    always_inline! {
        /// Lane `i` without a bounds check
        ///
        /// # Safety
        /// `i` must be less than `S`.
        pub unsafe fn get_unchecked(&self, i: usize) -> &T {
            debug_assert!(i < S, "lane {} out of range for {} lanes", i, S);
            self.vec.get_unchecked(i)
        }
    }

    always_inline! {
        /// Mutable lane `i` without a bounds check
        ///
        /// # Safety
        /// `i` must be less than `S`.
        pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
            debug_assert!(i < S, "lane {} out of range for {} lanes", i, S);
            self.vec.get_unchecked_mut(i)
        }
    }

    always_inline! {
        /// Copy every lane of `v` into `self`
        pub fn assign(&mut self, v: &Self) -> &mut Self {
            for i in 0..S {
                self.vec[i] = v.vec[i];
            }
            self
        }
    }

    always_inline! {
        /// Broadcast `e` into every lane
        pub fn set(&mut self, e: T) -> &mut Self {
            for lane in &mut self.vec {
                *lane = e;
            }
            self
        }
    }

    always_inline! {
        /// `self[i] += v[i] * w[i]`
        pub fn fma(&mut self, v: &Self, w: &Self) -> &mut Self {
            for i in 0..S {
                self.vec[i] += v.vec[i] * w.vec[i];
            }
            self
        }
    }

    always_inline! {
        /// `self[i] += v[i] * e`
        pub fn fma_scalar(&mut self, v: &Self, e: T) -> &mut Self {
            for i in 0..S {
                self.vec[i] += v.vec[i] * e;
            }
            self
        }
    }

    always_inline! {
        /// `self[i] += e * v[i]`
        pub fn scalar_fma(&mut self, e: T, v: &Self) -> &mut Self {
            for i in 0..S {
                self.vec[i] += e * v.vec[i];
            }
            self
        }
    }

    always_inline! {
        /// `self[i] = v[i] * w[i]`
        pub fn mul(&mut self, v: &Self, w: &Self) -> &mut Self {
            for i in 0..S {
                self.vec[i] = v.vec[i] * w.vec[i];
            }
            self
        }
    }

    always_inline! {
        /// `self[i] = v[i] * e`
        pub fn mul_scalar(&mut self, v: &Self, e: T) -> &mut Self {
            for i in 0..S {
                self.vec[i] = v.vec[i] * e;
            }
            self
        }
    }

    always_inline! {
        /// `self[i] = e * v[i]`
        pub fn scalar_mul(&mut self, e: T, v: &Self) -> &mut Self {
            for i in 0..S {
                self.vec[i] = e * v.vec[i];
            }
            self
        }
    }

    /// Write the lanes to the front of `out`
    pub fn store(&self, out: &mut [T]) -> Result<()> {
        if out.len() < S {
            return Err(Error::BufferTooSmall {
                required: S,
                actual: out.len(),
            });
        }
        out[..S].copy_from_slice(&self.vec);
        Ok(())
    }
}

impl<T, const S: usize, const A: usize> Index<usize> for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    type Output = T;

    always_inline! {
        fn index(&self, i: usize) -> &T {
            &self.vec[i]
        }
    }
}

impl<T, const S: usize, const A: usize> IndexMut<usize> for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    always_inline! {
        fn index_mut(&mut self, i: usize) -> &mut T {
            &mut self.vec[i]
        }
    }
}

impl<T, const S: usize, const A: usize> Clone for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const S: usize, const A: usize> Copy for LaneVector<T, S, A> where T: AlignFor<A> {}

// Safety: every lane is Pod and the marker array is zero-sized, so all-zero
// bytes are a valid value.
unsafe impl<T, const S: usize, const A: usize> Zeroable for LaneVector<T, S, A> where T: AlignFor<A> {}

impl<T, const S: usize, const A: usize> Default for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    #[inline]
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const S: usize, const A: usize> PartialEq for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T, const S: usize, const A: usize> fmt::Debug for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LaneVector").field(&self.vec).finish()
    }
}

impl<T, const S: usize, const A: usize> From<[T; S]> for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    #[inline]
    fn from(vec: [T; S]) -> Self {
        Self::from_array(vec)
    }
}

impl<T, const S: usize, const A: usize> TryFrom<&[T]> for LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    type Error = Error;

    fn try_from(lanes: &[T]) -> Result<Self> {
        let vec: [T; S] = lanes
            .try_into()
            .map_err(|_| Error::lane_count(S, lanes.len()))?;
        Ok(Self::from_array(vec))
    }
}

impl<'a, T, const S: usize, const A: usize> IntoIterator for &'a LaneVector<T, S, A>
where
    T: AlignFor<A>,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    type V4 = LaneVector<i32, 4>;

    #[test]
    fn test_layout_follows_alignment_multiplier() {
        assert_eq!(align_of::<LaneVector<f64, 1>>(), 8);
        assert_eq!(align_of::<LaneVector<f64, 1, 4>>(), 32);
        assert_eq!(size_of::<LaneVector<f64, 1, 4>>(), 32);
        assert_eq!(align_of::<LaneVector<f32, 8, 8>>(), 32);
        assert_eq!(size_of::<LaneVector<f32, 8, 8>>(), 32);
        assert_eq!(size_of::<LaneVector<i64, 4, 4>>(), 32);
        assert_eq!(LaneVector::<f32, 8, 8>::SIZE, 8);
        assert_eq!(LaneVector::<f32, 8, 8>::ALIGN_SIZE, 8);

        let v = LaneVector::<f64, 2, 8>::splat(1.0);
        assert_eq!(v.as_slice().as_ptr() as usize % 64, 0);
    }

    #[test]
    fn test_splat_and_set_broadcast() {
        let v = V4::splat(7);
        assert!(v.iter().all(|&x| x == 7));

        let mut w = V4::from_array([1, 2, 3, 4]);
        w.set(-3);
        assert_eq!(w.into_array(), [-3; 4]);
    }

    #[test]
    fn test_assign_copies_every_lane() {
        let src = V4::from_array([5, 6, 7, 8]);
        let mut dst = V4::default();
        dst.assign(&src).set(1).assign(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(V4::default().into_array(), [0; 4]);
        assert_eq!(LaneVector::<f64, 2, 4>::zeroed().into_array(), [0.0; 2]);
    }

    #[test]
    fn test_indexing() {
        let mut v = V4::from_array([1, 2, 3, 4]);
        v[2] = 30;
        assert_eq!(v[2], 30);
        unsafe {
            *v.get_unchecked_mut(0) = 10;
            assert_eq!(*v.get_unchecked(0), 10);
        }
        assert_eq!(v.as_array(), &[10, 2, 30, 4]);
    }

    #[test]
    #[should_panic]
    fn test_checked_index_out_of_range_panics() {
        let v = V4::splat(0);
        let i = V4::SIZE;
        let _lane = v[i];
    }

    #[test]
    fn test_mul_then_fma_accumulates() {
        let a = V4::from_array([1, 2, 3, 4]);
        let b = V4::from_array([10, 20, 30, 40]);
        let mut acc = V4::default();
        acc.mul(&a, &b).fma(&a, &b);
        assert_eq!(acc.into_array(), [20, 80, 180, 320]);
    }

    #[test]
    fn test_scalar_operand_orders() {
        let v = V4::from_array([1, 2, 3, 4]);
        let mut acc = V4::default();

        acc.mul_scalar(&v, 3);
        assert_eq!(acc.into_array(), [3, 6, 9, 12]);
        acc.scalar_mul(2, &v);
        assert_eq!(acc.into_array(), [2, 4, 6, 8]);
        acc.fma_scalar(&v, 10).scalar_fma(100, &v);
        assert_eq!(acc.into_array(), [112, 224, 336, 448]);
    }

    #[test]
    fn test_fma_is_not_fused_rounding() {
        let a = LaneVector::<f64, 2>::from_array([0.1, 1.0 / 3.0]);
        let b = LaneVector::<f64, 2>::from_array([0.7, 3.0]);
        let mut acc = LaneVector::<f64, 2>::splat(0.2);
        acc.fma(&a, &b);
        for i in 0..2 {
            assert_eq!(acc[i], 0.2 + a[i] * b[i]);
        }
    }

    #[test]
    fn test_slice_conversions() {
        let v = V4::try_from(&[1, 2, 3, 4][..]).unwrap();
        assert_eq!(v, V4::from([1, 2, 3, 4]));

        let err = V4::try_from(&[1, 2, 3][..]).unwrap_err();
        assert_eq!(err, Error::LaneCountMismatch { expected: 4, actual: 3 });

        let mut out = [0; 6];
        v.store(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 0, 0]);

        let mut short = [0; 2];
        assert_eq!(
            v.store(&mut short),
            Err(Error::BufferTooSmall { required: 4, actual: 2 })
        );
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_debug_format() {
        let v = LaneVector::<u32, 2>::from_array([1, 2]);
        assert_eq!(format!("{v:?}"), "LaneVector([1, 2])");
        assert_eq!((&v).into_iter().copied().sum::<u32>(), 3);
    }
}
