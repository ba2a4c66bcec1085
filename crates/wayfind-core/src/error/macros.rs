//! Error macros for wayfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfindError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WayfindError::UsageError($msg.to_string()))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::WayfindError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for rejecting a dataset that failed validation
#[macro_export]
macro_rules! bail_dataset {
    ($path:expr, $reason:expr) => {
        return Err($crate::error::WayfindError::invalid_dataset(
            $path, $reason,
        ))
    };
}
