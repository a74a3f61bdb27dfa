//! Error macros for tracegraph

/// Macro for rejecting a graph document
#[macro_export]
macro_rules! bail_graph {
    ($path:expr, $($arg:tt)*) => {
        return Err($crate::error::TraceError::invalid_graph($path, format!($($arg)*)))
    };
}
