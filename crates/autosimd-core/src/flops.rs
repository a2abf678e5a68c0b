//! Floating-point operation counter for kernel instrumentation
//!
//! With the `count-flops` feature a [`FlopCounter`] wraps a relaxed atomic
//! integer. Without it the counter is a zero-sized type: `reset` and `add`
//! compile to nothing and `get` always returns 0, so instrumented kernels
//! call the same three methods in both builds.
//!
//! The count is diagnostic. Concurrent `add` calls never block and no
//! ordering with other memory operations is implied. Lane arithmetic never
//! touches a counter; kernels add their own operation counts explicitly.
//!
//! ```rust
//! use autosimd_core::FlopCounter;
//!
//! let counter = FlopCounter::new();
//! counter.add(5);
//! counter.add(3);
//! let expected = if cfg!(feature = "count-flops") { 8 } else { 0 };
//! assert_eq!(counter.get(), expected);
//! ```

#[cfg(feature = "count-flops")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter of floating-point operations performed by instrumented kernels
#[derive(Debug, Default)]
pub struct FlopCounter {
    #[cfg(feature = "count-flops")]
    count: AtomicU64,
}

impl FlopCounter {
    /// New counter starting at zero
    pub const fn new() -> Self {
        Self {
            #[cfg(feature = "count-flops")]
            count: AtomicU64::new(0),
        }
    }

    /// Whether this build counts anything
    pub const fn is_enabled() -> bool {
        cfg!(feature = "count-flops")
    }

    /// Set the count to zero
    #[inline]
    pub fn reset(&self) {
        #[cfg(feature = "count-flops")]
        self.count.store(0, Ordering::Relaxed);
    }

    /// Add `cnt` operations
    #[inline]
    pub fn add(&self, cnt: u64) {
        #[cfg(feature = "count-flops")]
        self.count.fetch_add(cnt, Ordering::Relaxed);
        #[cfg(not(feature = "count-flops"))]
        let _ = cnt;
    }

    /// Current count (always 0 when counting is compiled out)
    #[inline]
    pub fn get(&self) -> u64 {
        #[cfg(feature = "count-flops")]
        {
            self.count.load(Ordering::Relaxed)
        }
        #[cfg(not(feature = "count-flops"))]
        {
            0
        }
    }

    /// Log the current count at debug level
    pub fn report(&self, label: &str) {
        log::debug!("{label}: {} flops", self.get());
    }
}

static GLOBAL: FlopCounter = FlopCounter::new();

/// The process-wide counter used by the `flops_*!` macros
pub fn global() -> &'static FlopCounter {
    &GLOBAL
}

/// Reset the process-wide flop counter
#[macro_export]
macro_rules! flops_reset {
    () => {
        $crate::flops::global().reset()
    };
}

/// Add to the process-wide flop counter
#[macro_export]
macro_rules! flops_add {
    ($cnt:expr) => {
        $crate::flops::global().add($cnt)
    };
}

/// Read the process-wide flop counter
#[macro_export]
macro_rules! flops_get {
    () => {
        $crate::flops::global().get()
    };
}
