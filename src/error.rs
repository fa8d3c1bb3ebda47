//! The augmented error type and its classification functions.

use core::any::TypeId;
use core::fmt;
use std::error::Error as StdError;

use regex::Regex;
use smallvec::{smallvec, SmallVec};

use crate::format;
use crate::stack;
use crate::value::Value;

/// Inline chain depth. Wrap chains are 1-4 layers deep in practice;
/// deeper chains spill to the heap.
const INLINE_DEPTH: usize = 4;

/// An immutable error value carrying a template chain, debug values
/// and a stack trace.
///
/// A `StackError` augments a plain error with:
/// - an ordered chain of raw format templates, outermost first, used
///   for classification that survives message formatting
/// - an ordered list of [`Value`] debug attachments kept out of the
///   rendered message
/// - a call-stack snapshot captured once, where the innermost error
///   was created
///
/// Every producing operation returns a fresh value; a `StackError` is
/// never mutated in place and can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use stackerr::{err, wrap};
///
/// let inner = err!("parse row %d", 17);
/// let outer = wrap!(inner, "load table %s", "users");
/// assert_eq!(outer.message(), "load table users: parse row 17");
/// assert!(outer.is("load table %s"));
/// assert!(outer.contains("parse row %d"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StackError {
    /// Raw format templates, outermost first. Never empty.
    templates: SmallVec<[String; INLINE_DEPTH]>,
    /// Debug values, newest wrap layer first, each layer's arguments
    /// in their original order.
    debug: SmallVec<[Value; INLINE_DEPTH]>,
    /// `path:line (0xADDR)` frames from the innermost creation site.
    stack: Vec<String>,
    /// Rendered message, cached at construction.
    message: String,
}

impl StackError {
    /// Create an error from a format template and its arguments.
    ///
    /// The first `min(placeholders, args.len())` arguments are
    /// substituted into the template; all arguments, consumed or not,
    /// are retained as debug values. Missing trailing arguments render
    /// a visible `%!<verb>(MISSING)` marker instead of failing.
    ///
    /// The [`err!`](crate::err) macro is the variadic front-end.
    #[must_use]
    pub fn new(template: impl Into<String>, args: Vec<Value>) -> Self {
        let template = template.into();
        let consumed = format::placeholder_count(&template).min(args.len());
        let message = format::render(&template, &args[..consumed]);
        StackError {
            templates: smallvec![template],
            debug: SmallVec::from_vec(args),
            stack: stack::capture(),
            message,
        }
    }

    /// Wrap a plain error into a single-layer chain.
    ///
    /// The error's rendered text becomes the sole template, so it can
    /// later be matched with [`is`](Self::is)/[`contains`](Self::contains),
    /// and a fresh stack is captured at the wrap site. Wrapping a value
    /// that is already a `StackError` returns it unchanged: ownership
    /// guarantees the result is independent of any other copy.
    #[must_use]
    pub fn wrap<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        if TypeId::of::<E>() == TypeId::of::<Self>() {
            // SAFETY: TypeId guarantees E is StackError. Read it out and
            // forget the original to avoid double-drop.
            unsafe {
                let out = core::ptr::read(&err as *const E as *const Self);
                core::mem::forget(err);
                out
            }
        } else {
            let text = err.to_string();
            StackError {
                templates: smallvec![text.clone()],
                debug: SmallVec::new(),
                stack: stack::capture(),
                message: text,
            }
        }
    }

    /// Wrap an error and prepend a formatted context layer in one step.
    ///
    /// Equivalent to [`wrap`](Self::wrap) followed by
    /// [`with_template`](Self::with_template). The
    /// [`wrap!`](crate::wrap) macro is the variadic front-end.
    #[must_use]
    pub fn wrap_with<E>(err: E, template: impl Into<String>, args: Vec<Value>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::wrap(err).prepend(template.into(), args)
    }

    /// Return a new error with one formatted layer prepended.
    ///
    /// The template goes to the front of the chain, all `args` to the
    /// front of the debug list, and the message becomes
    /// `rendered-template + ": " + old-message`. The stack is inherited
    /// unchanged.
    #[must_use]
    pub fn with_template(&self, template: impl Into<String>, args: Vec<Value>) -> Self {
        self.clone().prepend(template.into(), args)
    }

    fn prepend(mut self, template: String, args: Vec<Value>) -> Self {
        let consumed = format::placeholder_count(&template).min(args.len());
        let head = format::render(&template, &args[..consumed]);
        self.message = format!("{}: {}", head, self.message);
        self.templates.insert(0, template);
        self.debug.insert_many(0, args);
        self
    }

    /// Return a new error with literal, already-rendered messages
    /// prepended to the chain. No argument substitution happens.
    #[must_use]
    pub fn with_messages<I, S>(&self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        let mut next = self.clone();
        if messages.is_empty() {
            return next;
        }
        next.message = format!("{}: {}", messages.join(": "), next.message);
        next.templates.insert_many(0, messages);
        next
    }

    /// Return a new error with debug values prepended. The rendered
    /// message is unaffected.
    #[must_use]
    pub fn with_debug<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut next = self.clone();
        next.debug.insert_many(0, values);
        next
    }

    /// True if the outermost template equals `template` exactly.
    pub fn is(&self, template: &str) -> bool {
        self.templates[0] == template
    }

    /// True if the outermost template matches `pattern` anywhere.
    pub fn is_pattern(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.templates[0])
    }

    /// True if any template in the chain equals `template` exactly.
    pub fn contains(&self, template: &str) -> bool {
        self.templates.iter().any(|t| t == template)
    }

    /// True if any template in the chain matches `pattern` anywhere.
    pub fn contains_pattern(&self, pattern: &Regex) -> bool {
        self.templates.iter().any(|t| pattern.is_match(t))
    }

    /// The rendered message, outermost layer first, joined with `": "`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The raw template chain, outermost first.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// The ordered debug values.
    pub fn debug(&self) -> &[Value] {
        &self.debug
    }

    /// The stack frames captured at the innermost creation site.
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Rebuild an error from its serialized parts: the message becomes
    /// a single-template chain.
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(message: String, debug: Vec<Value>, stack: Vec<String>) -> Self {
        StackError {
            templates: smallvec![message.clone()],
            debug: SmallVec::from_vec(debug),
            stack,
            message,
        }
    }
}

impl fmt::Display for StackError {
    // The alternate form ({:#}) appends the captured stack frames.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() {
            for frame in &self.stack {
                write!(f, "\n  at {}", frame)?;
            }
        }
        Ok(())
    }
}

impl StdError for StackError {}

impl From<&str> for StackError {
    fn from(template: &str) -> Self {
        Self::new(template, Vec::new())
    }
}

impl From<String> for StackError {
    fn from(template: String) -> Self {
        Self::new(template, Vec::new())
    }
}

#[cfg(feature = "anyhow")]
impl From<anyhow::Error> for StackError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StackError>() {
            Ok(e) => e,
            Err(err) => Self::new(err.to_string(), Vec::new()),
        }
    }
}

/// True if `err`'s outermost template (or its rendered text, for a
/// plain error) equals `template` exactly.
pub fn is(err: &(dyn StdError + 'static), template: &str) -> bool {
    match err.downcast_ref::<StackError>() {
        Some(e) => e.is(template),
        None => err.to_string() == template,
    }
}

/// Like [`is`] but matches a pre-compiled pattern instead of comparing.
pub fn is_pattern(err: &(dyn StdError + 'static), pattern: &Regex) -> bool {
    match err.downcast_ref::<StackError>() {
        Some(e) => e.is_pattern(pattern),
        None => pattern.is_match(&err.to_string()),
    }
}

/// Like [`is`] but scans the whole template chain.
pub fn contains(err: &(dyn StdError + 'static), template: &str) -> bool {
    match err.downcast_ref::<StackError>() {
        Some(e) => e.contains(template),
        None => err.to_string() == template,
    }
}

/// Like [`contains`] but matches a pre-compiled pattern.
pub fn contains_pattern(err: &(dyn StdError + 'static), pattern: &Regex) -> bool {
    match err.downcast_ref::<StackError>() {
        Some(e) => e.contains_pattern(pattern),
        None => pattern.is_match(&err.to_string()),
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Wire form: three fields, debug omitted when empty.
    #[derive(Serialize, Deserialize)]
    struct SerializedError {
        message: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        debug: Vec<Value>,
        #[serde(default)]
        stack: Vec<String>,
    }

    impl Serialize for StackError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SerializedError {
                message: self.message.clone(),
                debug: self.debug.to_vec(),
                stack: self.stack.clone(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for StackError {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = SerializedError::deserialize(deserializer)?;
            Ok(StackError::from_parts(s.message, s.debug, s.stack))
        }
    }
}
