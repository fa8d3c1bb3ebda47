//! stackerr - immutable augmented errors with template chains, debug
//! values and captured stack traces.
//!
//! # Overview
//!
//! A [`StackError`] wraps an error with three pieces of out-of-band
//! state:
//!
//! - an ordered chain of raw format **templates**, outermost first.
//!   Classification ([`StackError::is`], [`StackError::contains`] and
//!   their regex variants) compares templates, never rendered text, so
//!   call sites can match errors whose messages embed request ids,
//!   paths or timestamps.
//! - an ordered list of **debug** [`Value`]s: every argument passed at
//!   construction or wrap time, whether or not the template consumed it.
//! - a **stack** snapshot captured once, where the innermost error was
//!   created, and inherited unchanged through wraps.
//!
//! # Quick start
//!
//! ```
//! use stackerr::{err, Result, ResultExt};
//!
//! fn fetch(id: u64) -> Result<String> {
//!     Err(err!("user %d not found", id))
//! }
//!
//! fn handle(id: u64) -> Result<String> {
//!     fetch(id).context("handling request")
//! }
//!
//! let e = handle(7).unwrap_err();
//! assert_eq!(e.message(), "handling request: user 7 not found");
//! assert!(e.contains("user %d not found"));
//! assert_eq!(e.debug()[0], 7u64);
//! ```
//!
//! Templates are printf-style: `%` plus one alphabetic verb is a
//! placeholder, `%%` is a literal `%`. Formatting is lenient - too few
//! arguments render a visible `%!v(MISSING)` marker, surplus arguments
//! stay out of the message but are kept as debug values.
//!
//! With the `serde` feature enabled, errors serialize to a three-field
//! structure (`message`, `debug`, `stack`); `debug` is omitted when
//! empty.

mod error;
mod ext;
mod format;
mod macros;
mod stack;
mod value;

pub use error::{contains, contains_pattern, is, is_pattern, StackError};
pub use ext::ResultExt;
pub use value::Value;

/// Result type alias.
pub type Result<T, E = StackError> = core::result::Result<T, E>;
