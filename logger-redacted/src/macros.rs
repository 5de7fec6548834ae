// Logging macros that pass the formatted message through the redactor
#[macro_export]
macro_rules! redacted_info {
    ($($arg:tt)*) => {
        tracing::info!("{}", $crate::redact(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! redacted_debug {
    ($($arg:tt)*) => {
        tracing::debug!("{}", $crate::redact(&format!($($arg)*)))
    };
}
