//! Printf-style template rendering.
//!
//! A placeholder is `%` followed by a single ASCII-alphabetic verb
//! (`%v`, `%s`, `%d`, ...). `%%` renders one literal `%` and consumes
//! no argument; a `%` followed by anything else is kept literally.
//! Rendering is lenient: a placeholder with no argument left renders a
//! visible `%!<verb>(MISSING)` marker, and a verb that does not fit
//! its value falls back to the plain display form.

use core::fmt::Write;

use crate::value::Value;

/// Number of arguments `template` consumes when rendered.
pub(crate) fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
            }
            Some(v) if v.is_ascii_alphabetic() => {
                chars.next();
                count += 1;
            }
            _ => {}
        }
    }
    count
}

/// Substitute `args` into `template`, left to right.
///
/// Callers are expected to pass only the consumed argument prefix;
/// surplus arguments would simply be ignored.
pub(crate) fn render(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut next = 0;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(&verb) if verb.is_ascii_alphabetic() => {
                chars.next();
                match args.get(next) {
                    Some(value) => render_verb(&mut out, verb, value),
                    None => {
                        let _ = write!(out, "%!{}(MISSING)", verb);
                    }
                }
                next += 1;
            }
            _ => out.push('%'),
        }
    }
    out
}

fn render_verb(out: &mut String, verb: char, value: &Value) {
    // Writing to a String cannot fail.
    let _ = match (verb, value) {
        ('q', Value::String(s)) => write!(out, "{:?}", s),
        ('x', Value::Int(n)) => write!(out, "{:x}", n),
        ('x', Value::Uint(n)) => write!(out, "{:x}", n),
        _ => write!(out, "{}", value),
    };
}
