//! Backend-polymorphic template functions.
//!
//! A logical operation (say, "the keys of a map") is implemented once per
//! emission target. The implementations share no code, only observable
//! behavior: given runtime-equal operands, every backend's output must
//! compute the same result in its own host.
//!
//! Which implementation runs is decided by the backend currently emitting
//! code, never by runtime inspection of operand values. A function that
//! lacks an implementation for an active backend is a configuration bug
//! surfaced at dispatch time, not a runtime failure.

use std::fmt;

use crate::expr::{JsExpr, PyExpr};
use crate::value::{Value, ValueKind};

/// One emission target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// In-process interpreted execution, no codegen.
    Interp,
    /// JavaScript source generation.
    Js,
    /// Python source generation.
    Py,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Interp => "interp",
            Backend::Js => "js",
            Backend::Py => "py",
        };
        write!(f, "{name}")
    }
}

/// Errors raised while dispatching or interpreting a function.
#[derive(Debug, thiserror::Error)]
pub enum FnError {
    #[error("function '{function}' has no implementation for backend '{backend}'")]
    MissingBackend {
        function: &'static str,
        backend: Backend,
    },

    #[error("function '{function}' called with {got} arg(s), expects one of {expected:?}")]
    WrongArgCount {
        function: &'static str,
        expected: &'static [usize],
        got: usize,
    },

    #[error("function '{function}' argument {index} has kind {got}, expects {expected}")]
    WrongArgType {
        function: &'static str,
        index: usize,
        expected: ValueKind,
        got: ValueKind,
    },
}

/// One logical operation, with up to one implementation per backend.
///
/// Implementors override the capability accessors for the backends they
/// support; the defaults report no support, which [`interp_impl`] and
/// friends turn into [`FnError::MissingBackend`].
pub trait TemplateFn {
    /// The function's name as written in template source.
    fn name(&self) -> &'static str;

    /// Argument counts this function accepts.
    fn arg_counts(&self) -> &'static [usize];

    fn as_interp(&self) -> Option<&dyn InterpFn> {
        None
    }

    fn as_js(&self) -> Option<&dyn JsSrcFn> {
        None
    }

    fn as_py(&self) -> Option<&dyn PySrcFn> {
        None
    }
}

/// Interpreted execution of a function on in-memory values.
pub trait InterpFn {
    fn apply(&self, args: &[Value]) -> Result<Value, FnError>;
}

/// JavaScript code generation for a function call.
///
/// Receives operands already built (and already parenthesized where their
/// own emission required it) and returns the whole call, which is atomic.
pub trait JsSrcFn {
    fn compute(&self, args: Vec<JsExpr>) -> JsExpr;
}

/// Python code generation for a function call. Same contract as
/// [`JsSrcFn`].
pub trait PySrcFn {
    fn compute(&self, args: Vec<PyExpr>) -> PyExpr;
}

/// The interpreted implementation of `f`, or the missing-implementation
/// error for [`Backend::Interp`].
pub fn interp_impl<'a>(f: &'a dyn TemplateFn) -> Result<&'a dyn InterpFn, FnError> {
    f.as_interp().ok_or(FnError::MissingBackend {
        function: f.name(),
        backend: Backend::Interp,
    })
}

/// The JavaScript implementation of `f`, or the missing-implementation
/// error for [`Backend::Js`].
pub fn js_impl<'a>(f: &'a dyn TemplateFn) -> Result<&'a dyn JsSrcFn, FnError> {
    f.as_js().ok_or(FnError::MissingBackend {
        function: f.name(),
        backend: Backend::Js,
    })
}

/// The Python implementation of `f`, or the missing-implementation error
/// for [`Backend::Py`].
pub fn py_impl<'a>(f: &'a dyn TemplateFn) -> Result<&'a dyn PySrcFn, FnError> {
    f.as_py().ok_or(FnError::MissingBackend {
        function: f.name(),
        backend: Backend::Py,
    })
}

/// Check an interpreted call's argument count against the function's
/// declared arities. Shared by [`InterpFn`] implementations.
pub(crate) fn check_arg_count(
    f: &dyn TemplateFn,
    args: &[Value],
) -> Result<(), FnError> {
    if f.arg_counts().contains(&args.len()) {
        return Ok(());
    }
    Err(FnError::WrongArgCount {
        function: f.name(),
        expected: f.arg_counts(),
        got: args.len(),
    })
}
