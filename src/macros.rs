//! Variadic construction and early-return macros.

/// Create a [`StackError`](crate::StackError) from a template and
/// arguments.
///
/// ```
/// use stackerr::err;
///
/// let e = err!("open %q failed", "conf.toml", 2);
/// assert_eq!(e.message(), "open \"conf.toml\" failed");
/// assert_eq!(e.debug().len(), 2);
/// ```
#[macro_export]
macro_rules! err {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::StackError::new(
            $template,
            ::std::vec![$($crate::Value::from($arg)),*],
        )
    };
}

/// Wrap an error, optionally prepending a formatted context layer.
///
/// ```
/// use stackerr::wrap;
/// use std::io;
///
/// let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
/// let e = wrap!(io_err, "read %s", "state.db");
/// assert_eq!(e.message(), "read state.db: gone");
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr) => {
        $crate::StackError::wrap($err)
    };
    ($err:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::StackError::wrap_with(
            $err,
            $template,
            ::std::vec![$($crate::Value::from($arg)),*],
        )
    };
}

/// Return early with a new error.
///
/// ```
/// use stackerr::{bail, Result};
///
/// fn run(port: u32) -> Result<()> {
///     if port == 0 {
///         bail!("invalid port %d", port);
///     }
///     Ok(())
/// }
/// assert!(run(0).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err($crate::err!($($arg)*))
    };
}

/// Return early with a new error when a condition does not hold.
///
/// ```
/// use stackerr::{ensure, Result};
///
/// fn check(len: usize) -> Result<()> {
///     ensure!(len <= 16, "name too long: %d bytes", len);
///     Ok(())
/// }
/// assert!(check(64).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
