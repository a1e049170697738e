//! Backend expression values and the precedence splicer.
//!
//! Generated code is built by string concatenation, not by re-walking a
//! target-language AST, so the precedence rank carried on every expression
//! is the only guard against `a + b * c` silently becoming `(a + b) * c`
//! when a looser child is spliced into a tighter context.
//!
//! Each backend gets its own concrete expression type so that expressions
//! for different targets can never be intermixed; all of them satisfy the
//! same [`TargetExpr`] contract, which is also the entire interface a code
//! printer may rely on.

use std::fmt;

use crate::value::ValueKind;

/// Operator precedence rank; higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(pub u32);

impl Precedence {
    /// Rank of atomic expressions — literals, calls, text already wrapped in
    /// parentheses. Never needs protection as a child of anything.
    pub const MAX: Precedence = Precedence(u32::MAX);
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generated sub-expression for a specific backend.
///
/// Implementations are immutable value types with equality over all three
/// fields; backend correctness is verified by comparing generated text, not
/// by executing it.
pub trait TargetExpr: Sized {
    fn new(text: impl Into<String>, kind: ValueKind, precedence: Precedence) -> Self;

    /// The generated code, verbatim.
    fn text(&self) -> &str;

    /// The runtime value category the text evaluates to.
    fn kind(&self) -> ValueKind;

    fn precedence(&self) -> Precedence;

    /// Atomic expression: a literal, call, or already-parenthesized text.
    fn atom(text: impl Into<String>, kind: ValueKind) -> Self {
        Self::new(text, kind, Precedence::MAX)
    }

    /// True iff this expression must be parenthesized before being embedded
    /// in a context requiring `required` precedence.
    ///
    /// Equal precedence never forces parentheses: operator families are
    /// treated as left-associative with left-nested emission, and emitters
    /// raise `required` by one rank for right operands where that matters.
    fn needs_parens(&self, required: Precedence) -> bool {
        self.precedence() < required
    }

    /// The expression text, wrapped in parentheses iff the context requires
    /// it.
    fn protected_text(&self, required: Precedence) -> String {
        if self.needs_parens(required) {
            format!("({})", self.text())
        } else {
            self.text().to_string()
        }
    }
}

macro_rules! target_expr {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            text: String,
            kind: ValueKind,
            precedence: Precedence,
        }

        impl TargetExpr for $name {
            fn new(text: impl Into<String>, kind: ValueKind, precedence: Precedence) -> Self {
                Self {
                    text: text.into(),
                    kind,
                    precedence,
                }
            }

            fn text(&self) -> &str {
                &self.text
            }

            fn kind(&self) -> ValueKind {
                self.kind
            }

            fn precedence(&self) -> Precedence {
                self.precedence
            }
        }
    };
}

target_expr! {
    /// A generated JavaScript sub-expression.
    JsExpr
}

target_expr! {
    /// A generated Python sub-expression.
    PyExpr
}

/// Atomic string-valued expression for any backend.
pub fn string_expr<E: TargetExpr>(text: impl Into<String>) -> E {
    E::atom(text, ValueKind::Str)
}

/// Atomic float-valued expression for any backend.
pub fn float_expr<E: TargetExpr>(text: impl Into<String>) -> E {
    E::atom(text, ValueKind::Float)
}

/// Atomic int-valued expression for any backend.
pub fn int_expr<E: TargetExpr>(text: impl Into<String>) -> E {
    E::atom(text, ValueKind::Int)
}

/// Atomic bool-valued expression for any backend.
pub fn bool_expr<E: TargetExpr>(text: impl Into<String>) -> E {
    E::atom(text, ValueKind::Bool)
}

/// Atomic list-valued expression for any backend.
pub fn list_expr<E: TargetExpr>(text: impl Into<String>) -> E {
    E::atom(text, ValueKind::List)
}
