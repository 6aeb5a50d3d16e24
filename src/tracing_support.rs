//! Logging support.
//!
//! With the `tracing` feature, the crate logs through the `tracing` macros
//! re-exported here.  Without it, the same macro names expand to nothing, so
//! call sites need no `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a `fmt` subscriber that writes through the test harness's
    /// captured output.  Safe to call repeatedly; only the first call has an
    /// effect, and an already installed global subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_test_writer()
                .try_init();
        });
    }

    /// Installs a `fmt` subscriber that writes to stderr, for binaries.
    /// Returns `false` if a global subscriber was already installed.
    pub fn init_stderr_logging() -> bool {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn init_stderr_logging() -> bool {
        false
    }

    macro_rules! trace {
        ($($args:tt)*) => {};
    }

    macro_rules! debug {
        ($($args:tt)*) => {};
    }

    macro_rules! debug_span {
        ($($args:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    pub(crate) use {debug, debug_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::{init_stderr_logging, init_tracing};
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, debug_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_stderr_logging, init_tracing};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, debug_span, trace};
