//! Front-end support core for the weft multi-target template compiler.
//!
//! Two tightly-coupled facilities live here: source-span tracking (merging
//! token positions into validated ranges for diagnostics) and the
//! backend-polymorphic expression layer (per-target generated-code values
//! with precedence-aware splicing, plus per-backend function dispatch).
//!
//! The lexer, AST, type checker, and code printers are external; this crate
//! is the contract between them.

pub mod basic_functions;
pub mod expr;
pub mod function;
pub mod span;
pub mod token;
pub mod value;

// Re-exports for convenience
pub use token::{Token, are_adjacent, point_before};

pub use span::{Point, SourceSpan, SpanError, merge_span};

pub use value::{Value, ValueKind};

pub use expr::{
    JsExpr, Precedence, PyExpr, TargetExpr, bool_expr, float_expr, int_expr, list_expr,
    string_expr,
};

pub use function::{
    Backend, FnError, InterpFn, JsSrcFn, PySrcFn, TemplateFn, interp_impl, js_impl, py_impl,
};

pub use basic_functions::KeysFn;
