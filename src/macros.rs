//! Crate-private logging shims.
//!
//! Forward to `tracing` when the `tracing` feature is enabled and compile to
//! nothing otherwise. Only format-string arguments are accepted so both
//! configurations type-check the same call sites.

macro_rules! graph_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

macro_rules! graph_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
