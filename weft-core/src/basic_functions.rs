//! Built-in template functions.
//!
//! Each function here implements every backend the compiler ships with, and
//! the implementations are required to agree on observable behavior.

use crate::expr::{JsExpr, PyExpr, TargetExpr};
use crate::function::{
    FnError, InterpFn, JsSrcFn, PySrcFn, TemplateFn, check_arg_count,
};
use crate::value::{Value, ValueKind};

/// `keys(map)` — a lazy, order-unspecified sequence of the keys of a map.
pub struct KeysFn;

impl TemplateFn for KeysFn {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn arg_counts(&self) -> &'static [usize] {
        &[1]
    }

    fn as_interp(&self) -> Option<&dyn InterpFn> {
        Some(self)
    }

    fn as_js(&self) -> Option<&dyn JsSrcFn> {
        Some(self)
    }

    fn as_py(&self) -> Option<&dyn PySrcFn> {
        Some(self)
    }
}

impl InterpFn for KeysFn {
    fn apply(&self, args: &[Value]) -> Result<Value, FnError> {
        check_arg_count(self, args)?;
        match &args[0] {
            Value::Map(map) => Ok(Value::List(
                map.keys().map(|k| Value::Str(k.clone())).collect(),
            )),
            other => Err(FnError::WrongArgType {
                function: self.name(),
                index: 0,
                expected: ValueKind::Map,
                got: other.kind(),
            }),
        }
    }
}

impl JsSrcFn for KeysFn {
    fn compute(&self, args: Vec<JsExpr>) -> JsExpr {
        // Call syntax is self-delimiting; the operand goes in unprotected.
        JsExpr::atom(
            format!("weft.runtime.getMapKeys({})", args[0].text()),
            ValueKind::List,
        )
    }
}

impl PySrcFn for KeysFn {
    fn compute(&self, args: Vec<PyExpr>) -> PyExpr {
        // Method-call shape; the operand is parenthesized so attribute
        // lookup binds to the whole operand text.
        PyExpr::atom(format!("list(({}).keys())", args[0].text()), ValueKind::List)
    }
}
