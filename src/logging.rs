//! Internal logging shim.
//!
//! With the `logging` feature the engine reports through the `log` facade;
//! without it the calls compile to nothing. The host installs the logger.

macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)+);
        }
    }};
}
