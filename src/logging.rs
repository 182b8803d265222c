//! Logging macros which forward to `log` or `defmt`, depending on the
//! enabled feature. With neither enabled, the arguments are still
//! type-checked, but nothing is emitted.

#[cfg(all(feature = "log", feature = "defmt"))]
compile_error!("The `log` and `defmt` features are mutually exclusive");

macro_rules! log_forward {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::$level!($($arg)+);
        #[cfg(feature = "defmt")]
        ::defmt::$level!($($arg)+);
        #[cfg(not(any(feature = "log", feature = "defmt")))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! trace {
    ($($arg:tt)+) => { log_forward!(trace, $($arg)+) };
}

macro_rules! debug {
    ($($arg:tt)+) => { log_forward!(debug, $($arg)+) };
}

macro_rules! info {
    ($($arg:tt)+) => { log_forward!(info, $($arg)+) };
}

macro_rules! warn {
    ($($arg:tt)+) => { log_forward!(warn, $($arg)+) };
}

#[allow(unused_macros)]
macro_rules! error {
    ($($arg:tt)+) => { log_forward!(error, $($arg)+) };
}
