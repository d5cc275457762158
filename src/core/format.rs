//! Printf-style mini-format engine
//!
//! Renders a format string against an ordered argument list. The mini
//! language has three tokens:
//!
//! - `%%` — a literal `%`, consumes no argument
//! - `%x` — emits the prefix `0x`, then substitutes the next argument
//! - `%<alnum-run>` — ordinary substitution; the next unconsumed argument
//!   is rendered in its natural textual form and the alphanumeric run is
//!   skipped without further interpretation
//!
//! Arguments are consumed strictly left to right. A substitution reached
//! after the list is exhausted renders a literal `%`; surplus arguments
//! are silently ignored. Every other character is copied verbatim.

use super::format_arg::{ArgList, FormatArg};
use std::iter::Peekable;
use std::str::Chars;

/// Render `fmt` against `args` and return the formatted text.
///
/// # Examples
///
/// ```
/// use ss_logger::{render, args};
///
/// let text = render("user %s logged in with code %x", &args!["alice", 255]);
/// assert_eq!(text, "user alice logged in with code 0x255");
/// ```
#[must_use]
pub fn render(fmt: &str, args: &[FormatArg]) -> String {
    let list = ArgList::new(args);
    let mut out = String::with_capacity(fmt.len());
    let mut chars = fmt.chars().peekable();
    let mut next = 0usize;

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
            Some('x') => {
                // The hex marker prefixes the substitution; the argument
                // itself keeps its natural textual form.
                out.push_str("0x");
                substitute(&mut out, &list, &mut next);
                skip_specifier(&mut chars);
            }
            _ => {
                substitute(&mut out, &list, &mut next);
                skip_specifier(&mut chars);
            }
        }
    }

    out
}

/// Consume and render the next argument, or emit a literal `%` once the
/// list is exhausted.
fn substitute(out: &mut String, args: &ArgList<'_>, next: &mut usize) {
    if *next < args.len() {
        args.visit(*next, |arg| out.push_str(&arg.to_string()));
        *next += 1;
    } else {
        out.push('%');
    }
}

/// Skip the uninterpreted conversion-specifier suffix: the maximal run of
/// ASCII alphanumerics following the substitution point.
fn skip_specifier(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(char::is_ascii_alphanumeric).is_some() {}
}
