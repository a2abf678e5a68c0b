//! Elementwise operator implementations for [`LaneVector`]
//!
//! Every operator exists in a vector-vector and a vector-scalar form. The
//! scalar-on-the-left forms are generated for each concrete lane scalar,
//! because a blanket `impl<T> Add<LaneVector<T, ..>> for T` is not allowed.

use crate::align::AlignFor;
use crate::config::always_inline;
use crate::lane::LaneVector;
use std::array;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_lane_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt, $sym_assign:tt) => {
        impl<T, const S: usize, const A: usize> $OpAssign for LaneVector<T, S, A>
        where
            T: AlignFor<A>,
        {
            always_inline! {
                fn $op_assign(&mut self, v: Self) {
                    for i in 0..S {
                        self.vec[i] $sym_assign v.vec[i];
                    }
                }
            }
        }

        impl<T, const S: usize, const A: usize> $OpAssign<T> for LaneVector<T, S, A>
        where
            T: AlignFor<A>,
        {
            always_inline! {
                fn $op_assign(&mut self, e: T) {
                    for lane in &mut self.vec {
                        *lane $sym_assign e;
                    }
                }
            }
        }

        impl<T, const S: usize, const A: usize> $Op for LaneVector<T, S, A>
        where
            T: AlignFor<A>,
        {
            type Output = Self;

            always_inline! {
                fn $op(self, v: Self) -> Self {
                    Self::from_array(array::from_fn(|i| self.vec[i] $sym v.vec[i]))
                }
            }
        }

        impl<T, const S: usize, const A: usize> $Op<T> for LaneVector<T, S, A>
        where
            T: AlignFor<A>,
        {
            type Output = Self;

            always_inline! {
                fn $op(self, e: T) -> Self {
                    Self::from_array(array::from_fn(|i| self.vec[i] $sym e))
                }
            }
        }
    };
}

impl_lane_binop!(Add, add, AddAssign, add_assign, +, +=);
impl_lane_binop!(Sub, sub, SubAssign, sub_assign, -, -=);
impl_lane_binop!(Mul, mul, MulAssign, mul_assign, *, *=);
impl_lane_binop!(Div, div, DivAssign, div_assign, /, /=);

impl<T, const S: usize, const A: usize> Neg for LaneVector<T, S, A>
where
    T: AlignFor<A> + Neg<Output = T>,
{
    type Output = Self;

    always_inline! {
        fn neg(self) -> Self {
            Self::from_array(array::from_fn(|i| -self.vec[i]))
        }
    }
}

macro_rules! impl_scalar_lhs_op {
    ($t:ty, $Op:ident, $op:ident, $sym:tt) => {
        impl<const S: usize, const A: usize> $Op<LaneVector<$t, S, A>> for $t
        where
            $t: AlignFor<A>,
        {
            type Output = LaneVector<$t, S, A>;

            always_inline! {
                fn $op(self, v: LaneVector<$t, S, A>) -> Self::Output {
                    LaneVector::from_array(array::from_fn(|i| self $sym v.vec[i]))
                }
            }
        }
    };
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),* $(,)?) => {
        $(
            impl_scalar_lhs_op!($t, Add, add, +);
            impl_scalar_lhs_op!($t, Sub, sub, -);
            impl_scalar_lhs_op!($t, Mul, mul, *);
            impl_scalar_lhs_op!($t, Div, div, /);
        )*
    };
}

impl_scalar_lhs!(f32, f64, i32, i64, u32, u64);
