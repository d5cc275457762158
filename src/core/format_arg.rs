//! Heterogeneous format arguments
//!
//! A call site hands the format engine a fixed-arity list of values of
//! mixed types. `FormatArg` closes over every supported kind so the list
//! becomes an ordinary indexable sequence, and `ArgList` adds the
//! index-then-apply primitive the engine is built on.

use std::fmt;

/// A single format argument, tagged by kind.
#[derive(Debug, Clone)]
pub enum FormatArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Text(String),
    Pointer(usize),
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Int(i) => write!(f, "{}", i),
            FormatArg::Uint(u) => write!(f, "{}", u),
            FormatArg::Float(fl) => write!(f, "{}", fl),
            FormatArg::Bool(b) => write!(f, "{}", b),
            FormatArg::Char(c) => write!(f, "{}", c),
            FormatArg::Text(s) => write!(f, "{}", s),
            FormatArg::Pointer(p) => write!(f, "0x{:x}", p),
        }
    }
}

impl From<i8> for FormatArg {
    fn from(i: i8) -> Self {
        FormatArg::Int(i as i64)
    }
}

impl From<i16> for FormatArg {
    fn from(i: i16) -> Self {
        FormatArg::Int(i as i64)
    }
}

impl From<i32> for FormatArg {
    fn from(i: i32) -> Self {
        FormatArg::Int(i as i64)
    }
}

impl From<i64> for FormatArg {
    fn from(i: i64) -> Self {
        FormatArg::Int(i)
    }
}

impl From<isize> for FormatArg {
    fn from(i: isize) -> Self {
        FormatArg::Int(i as i64)
    }
}

impl From<u8> for FormatArg {
    fn from(u: u8) -> Self {
        FormatArg::Uint(u as u64)
    }
}

impl From<u16> for FormatArg {
    fn from(u: u16) -> Self {
        FormatArg::Uint(u as u64)
    }
}

impl From<u32> for FormatArg {
    fn from(u: u32) -> Self {
        FormatArg::Uint(u as u64)
    }
}

impl From<u64> for FormatArg {
    fn from(u: u64) -> Self {
        FormatArg::Uint(u)
    }
}

impl From<usize> for FormatArg {
    fn from(u: usize) -> Self {
        FormatArg::Uint(u as u64)
    }
}

impl From<f32> for FormatArg {
    fn from(f: f32) -> Self {
        FormatArg::Float(f as f64)
    }
}

impl From<f64> for FormatArg {
    fn from(f: f64) -> Self {
        FormatArg::Float(f)
    }
}

impl From<bool> for FormatArg {
    fn from(b: bool) -> Self {
        FormatArg::Bool(b)
    }
}

impl From<char> for FormatArg {
    fn from(c: char) -> Self {
        FormatArg::Char(c)
    }
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        FormatArg::Text(s.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        FormatArg::Text(s)
    }
}

impl From<&String> for FormatArg {
    fn from(s: &String) -> Self {
        FormatArg::Text(s.clone())
    }
}

impl<T> From<*const T> for FormatArg {
    fn from(p: *const T) -> Self {
        FormatArg::Pointer(p as usize)
    }
}

impl<T> From<*mut T> for FormatArg {
    fn from(p: *mut T) -> Self {
        FormatArg::Pointer(p as usize)
    }
}

/// Ordered, fixed-arity view over a call site's arguments.
#[derive(Debug, Clone, Copy)]
pub struct ArgList<'a> {
    args: &'a [FormatArg],
}

impl<'a> ArgList<'a> {
    pub fn new(args: &'a [FormatArg]) -> Self {
        Self { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Apply `op` to the `idx`-th argument, whatever its kind.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range. Callers are expected to guard with
    /// [`len`](Self::len); the formatting entry points never reach this
    /// panic.
    pub fn visit<R>(&self, idx: usize, op: impl FnOnce(&FormatArg) -> R) -> R {
        match self.args.get(idx) {
            Some(arg) => op(arg),
            None => panic!("argument index {} out of range for list of {}", idx, self.args.len()),
        }
    }
}

impl<'a> From<&'a [FormatArg]> for ArgList<'a> {
    fn from(args: &'a [FormatArg]) -> Self {
        Self::new(args)
    }
}
