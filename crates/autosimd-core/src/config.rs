//! Build-time configuration for lane kernels
//!
//! Every knob here is resolved when the crate is compiled. Cargo features
//! pick the alignment width, flop counting and serde support; the debug flag
//! is Rust's own `debug_assertions`. Nothing can be changed while the program
//! runs.
//!
//! | Knob              | Source                                   |
//! |-------------------|------------------------------------------|
//! | `ALIGN_SIZE`      | `align-16` / `align-32` / `align-64`     |
//! | `BLOCK_SIZE`      | fixed at 4                               |
//! | `DEBUG`           | `debug_assertions`                       |
//! | `ALWAYS_INLINE`   | not `DEBUG`                              |
//! | `VECTORIZE_HINTS` | not `DEBUG`                              |
//! | `COUNT_FLOPS`     | `count-flops`                            |
//! | `SERIALIZE`       | `serialize`                              |

use crate::scalar::LaneScalar;
use bitflags::bitflags;

/// Vector register width in bytes used to align lane storage
#[cfg(feature = "align-64")]
pub const ALIGN_SIZE: usize = 64;
#[cfg(all(feature = "align-32", not(feature = "align-64")))]
pub const ALIGN_SIZE: usize = 32;
#[cfg(all(feature = "align-16", not(any(feature = "align-32", feature = "align-64"))))]
pub const ALIGN_SIZE: usize = 16;
/// Vector register width in bytes used to align lane storage
#[cfg(not(any(feature = "align-16", feature = "align-32", feature = "align-64")))]
pub const ALIGN_SIZE: usize = 32;

/// Kernel batching granularity
pub const BLOCK_SIZE: usize = 4;

/// Outer batching factor
pub const BATCH_SIZE: usize = 1;

/// Built without optimisation-oriented hints
pub const DEBUG: bool = cfg!(debug_assertions);

/// Lane operations are marked `#[inline(always)]`
pub const ALWAYS_INLINE: bool = !DEBUG;

/// Lane loops are written for the auto-vectoriser (fixed trip count, no
/// early exits)
pub const VECTORIZE_HINTS: bool = !DEBUG;

/// The flop counter is live
pub const COUNT_FLOPS: bool = cfg!(feature = "count-flops");

/// Serde support for kernel state is compiled in
pub const SERIALIZE: bool = cfg!(feature = "serialize");

/// Quadrature kernels may precompute integration-rule coefficients
pub const INTRULE_COEFF_PRECOMP: bool = true;

const _: () = assert!(ALIGN_SIZE.is_power_of_two(), "ALIGN_SIZE must be a power of two");
const _: () = assert!(
    ALIGN_SIZE >= std::mem::align_of::<f64>(),
    "ALIGN_SIZE must cover the natural alignment of f64"
);
const _: () = assert!(BLOCK_SIZE > 0, "BLOCK_SIZE must be positive");

/// Marks a function `#[inline(always)]` unless built with debug assertions
macro_rules! always_inline {
    ($(#[$meta:meta])* $vis:vis fn $($rest:tt)*) => {
        $(#[$meta])*
        #[cfg_attr(not(debug_assertions), inline(always))]
        #[cfg_attr(debug_assertions, inline)]
        $vis fn $($rest)*
    };
    ($(#[$meta:meta])* $vis:vis unsafe fn $($rest:tt)*) => {
        $(#[$meta])*
        #[cfg_attr(not(debug_assertions), inline(always))]
        #[cfg_attr(debug_assertions, inline)]
        $vis unsafe fn $($rest)*
    };
    ($(#[$meta:meta])* $vis:vis const fn $($rest:tt)*) => {
        $(#[$meta])*
        #[cfg_attr(not(debug_assertions), inline(always))]
        #[cfg_attr(debug_assertions, inline)]
        $vis const fn $($rest)*
    };
}
pub(crate) use always_inline;

/// Round `val` up to the next multiple of `base`
///
/// `base` must be non-zero.
pub const fn round_up(val: usize, base: usize) -> usize {
    val.div_ceil(base) * base
}

/// Round an element count up so that a buffer of `T` fills whole vector
/// registers of `ALIGN_SIZE` bytes
pub const fn aligned_len<T: LaneScalar>(len: usize) -> usize {
    let per_register = ALIGN_SIZE / std::mem::size_of::<T>();
    if per_register == 0 {
        len
    } else {
        round_up(len, per_register)
    }
}

bitflags! {
    /// Build options that are switched on
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConfigFlags: u32 {
        /// Built with debug assertions
        const DEBUG = 0b00000001;
        /// Lane operations are force-inlined
        const ALWAYS_INLINE = 0b00000010;
        /// Lane loops target the auto-vectoriser
        const VECTORIZE_HINTS = 0b00000100;
        /// Flop counter is live
        const COUNT_FLOPS = 0b00001000;
        /// Serde support is compiled in
        const SERIALIZE = 0b00010000;
        /// Integration-rule coefficients are precomputed
        const INTRULE_COEFF_PRECOMP = 0b00100000;
    }
}

/// Snapshot of the resolved build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct BuildConfig {
    pub align_size: usize,
    pub block_size: usize,
    pub batch_size: usize,
    pub debug: bool,
    pub always_inline: bool,
    pub vectorize_hints: bool,
    pub count_flops: bool,
    pub serialize: bool,
    pub intrule_coeff_precomp: bool,
}

impl BuildConfig {
    /// The configuration this crate was compiled with
    pub const fn current() -> Self {
        Self {
            align_size: ALIGN_SIZE,
            block_size: BLOCK_SIZE,
            batch_size: BATCH_SIZE,
            debug: DEBUG,
            always_inline: ALWAYS_INLINE,
            vectorize_hints: VECTORIZE_HINTS,
            count_flops: COUNT_FLOPS,
            serialize: SERIALIZE,
            intrule_coeff_precomp: INTRULE_COEFF_PRECOMP,
        }
    }

    /// Boolean options as flags
    pub fn flags(&self) -> ConfigFlags {
        let mut flags = ConfigFlags::empty();
        flags.set(ConfigFlags::DEBUG, self.debug);
        flags.set(ConfigFlags::ALWAYS_INLINE, self.always_inline);
        flags.set(ConfigFlags::VECTORIZE_HINTS, self.vectorize_hints);
        flags.set(ConfigFlags::COUNT_FLOPS, self.count_flops);
        flags.set(ConfigFlags::SERIALIZE, self.serialize);
        flags.set(ConfigFlags::INTRULE_COEFF_PRECOMP, self.intrule_coeff_precomp);
        flags
    }

    /// Lanes per vector register for scalar `T`
    pub fn lanes_per_register<T: LaneScalar>(&self) -> usize {
        (self.align_size / std::mem::size_of::<T>()).max(1)
    }

    /// `name=lanes` entry for scalar `T`, as shown by [`log_summary`](Self::log_summary)
    pub fn lanes_entry<T: LaneScalar>(&self) -> String {
        format!("{}={}", T::NAME, self.lanes_per_register::<T>())
    }

    /// Log the configuration at info level
    pub fn log_summary(&self) {
        log::info!(
            "autosimd build: align={}B block={} batch={} flags={:?}",
            self.align_size,
            self.block_size,
            self.batch_size,
            self.flags()
        );
        let lanes = [
            self.lanes_entry::<f32>(),
            self.lanes_entry::<f64>(),
            self.lanes_entry::<i32>(),
            self.lanes_entry::<i64>(),
            self.lanes_entry::<u32>(),
            self.lanes_entry::<u64>(),
        ];
        log::debug!("lanes per register: {}", lanes.join(" "));
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::current()
    }
}
