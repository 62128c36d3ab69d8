//! Error macros for hopmap

/// Macro for creating invalid input errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::HopmapError::invalid_input($context, $value))
    };
}
