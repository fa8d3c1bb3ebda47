//! Extension trait for Result types.

use std::error::Error as StdError;

use crate::value::Value;
use crate::StackError;

/// Extension methods for carrying `Result` errors as [`StackError`].
///
/// All three methods pass `Ok` through untouched. That is this crate's
/// single policy for applying wrap operations to something that may not
/// hold an error: absence short-circuits, it never aborts.
pub trait ResultExt<T> {
    /// Convert the error side into a [`StackError`].
    fn wrap(self) -> crate::Result<T>;

    /// Wrap the error and prepend a context layer with no arguments.
    fn context(self, template: impl Into<String>) -> crate::Result<T>;

    /// Wrap the error and prepend one debug value.
    fn attach(self, value: impl Into<Value>) -> crate::Result<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn wrap(self) -> crate::Result<T> {
        self.map_err(StackError::wrap)
    }

    fn context(self, template: impl Into<String>) -> crate::Result<T> {
        self.map_err(|e| StackError::wrap(e).with_template(template, Vec::new()))
    }

    fn attach(self, value: impl Into<Value>) -> crate::Result<T> {
        self.map_err(|e| StackError::wrap(e).with_debug([value.into()]))
    }
}
