//! Level macros
//!
//! Each macro takes the logger first. The message is only formatted when the
//! level is enabled.

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        let level = $level;
        if $logger.is_enabled(level) {
            $logger.log(level, ::core::module_path!(), ::std::format!($($arg)*));
        }
    }};
}
