//! Scalar types that can fill the lanes of a [`LaneVector`](crate::LaneVector)
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: the trait only names what per-lane arithmetic needs
//! - **Native semantics**: lanes use the scalar's own `+ - * /`, including its
//!   division-by-zero and overflow behaviour
//! - **Plain old data**: every lane scalar is `Pod`, so vectors of them are
//!   trivially copyable and may be zero-initialised

use bytemuck::Pod;
use num_traits::{Num, NumAssign};
use std::fmt::Debug;

/// Base trait for scalar types that can be held in a lane
pub trait LaneScalar: Pod + Num + NumAssign + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Short type name used in configuration summaries
    const NAME: &'static str;
}

macro_rules! impl_lane_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl LaneScalar for $t {
                const NAME: &'static str = stringify!($t);
            }
        )*
    };
}

impl_lane_scalar!(f32, f64, i32, i64, u32, u64);
