//! Format-string front ends for [`Logger`](crate::Logger).
//!
//! Every macro logs through the shared logger unless it is given an explicit
//! one: `info!(logger: &my_logger, "listening on {}", addr)`.

/// Logs at info level.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().info(::std::format_args!($($arg)+))
    };
}

/// Logs at warning level, with a stack trace when backtraces are on.
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().warning(::std::format_args!($($arg)+))
    };
}

/// Logs at error level, with a stack trace when backtraces are on.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().error(::std::format_args!($($arg)+))
    };
}

/// Logs at debug level unless debug output is disabled.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().debug(::std::format_args!($($arg)+))
    };
}

/// Logs at error level, then exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().fatal(::std::format_args!($($arg)+))
    };
}

/// Disables backtraces, logs at error level, then unwinds with the message.
#[macro_export]
macro_rules! log_panic {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.panic(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().panic(::std::format_args!($($arg)+))
    };
}
