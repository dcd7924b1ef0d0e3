//! Internal macros shared by the collection modules.

/// Emit a tracing event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites carry no cost in builds
/// without the feature.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        crate::tracing::$level!($($arg)+);
    };
}

/// Enter a span conditionally
macro_rules! enter_span {
    ($span:expr) => {
        #[cfg(feature = "tracing")]
        let _guard = $span.entered();
    };
}
