//! Cross-backend equivalence tests for built-in functions.
//!
//! Every backend's implementation of a function must compute the same
//! result in its own host. The interpreted backend is executed directly;
//! the codegen backends are checked against fixed expected source text.

mod common;

use common::sample_map;
use weft_core::{
    FnError, JsExpr, KeysFn, Precedence, PyExpr, TargetExpr, Value, ValueKind, interp_impl,
    js_impl, py_impl, string_expr,
};

// ============================================================================
// keys()
// ============================================================================

#[test]
fn keys_interp_returns_exactly_the_map_keys() {
    let f = KeysFn;
    let result = interp_impl(&f).unwrap().apply(&[sample_map()]).unwrap();

    let Value::List(keys) = result else {
        panic!("keys() should return a list");
    };
    let mut names: Vec<String> = keys
        .into_iter()
        .map(|k| match k {
            Value::Str(s) => s,
            other => panic!("non-string key {other:?}"),
        })
        .collect();
    names.sort();
    assert_eq!(names, ["boo", "foo", "goo"]);
}

#[test]
fn keys_js_wraps_the_operand_exactly_once() {
    let f = KeysFn;
    let operand = JsExpr::atom("JS_CODE", ValueKind::Map);
    let result = js_impl(&f).unwrap().compute(vec![operand]);

    assert_eq!(result.text(), "weft.runtime.getMapKeys(JS_CODE)");
    assert_eq!(result.precedence(), Precedence::MAX);
    assert_eq!(result.kind(), ValueKind::List);
}

#[test]
fn keys_py_emits_a_method_call_on_the_operand() {
    let f = KeysFn;
    let operand = PyExpr::atom("dictionary", ValueKind::Map);
    let result = py_impl(&f).unwrap().compute(vec![operand]);

    assert_eq!(result.text(), "list((dictionary).keys())");
    assert_eq!(result.precedence(), Precedence::MAX);
    assert_eq!(result.kind(), ValueKind::List);
}

#[test]
fn keys_result_is_idempotent_and_value_equal() {
    let f = KeysFn;
    let a = js_impl(&f)
        .unwrap()
        .compute(vec![JsExpr::atom("m", ValueKind::Map)]);
    let b = js_impl(&f)
        .unwrap()
        .compute(vec![JsExpr::atom("m", ValueKind::Map)]);
    assert_eq!(a, b);
}

// ============================================================================
// Splicing function results into larger expressions
// ============================================================================

#[test]
fn call_results_splice_without_extra_parens() {
    // A call is atomic, so embedding it under any operator adds nothing.
    let f = KeysFn;
    let call = js_impl(&f)
        .unwrap()
        .compute(vec![JsExpr::atom("m", ValueKind::Map)]);
    assert_eq!(
        call.protected_text(Precedence(11)),
        "weft.runtime.getMapKeys(m)"
    );
}

#[test]
fn loose_operands_are_protected_before_member_access() {
    // The py emitter parenthesizes inside its own text, so even a loose
    // operand splices safely.
    let f = KeysFn;
    let ternary = PyExpr::new("a if c else b", ValueKind::Map, Precedence(1));
    let result = py_impl(&f).unwrap().compute(vec![ternary]);
    assert_eq!(result.text(), "list((a if c else b).keys())");
}

// ============================================================================
// Missing backends
// ============================================================================

struct InterpOnlyFn;

impl weft_core::TemplateFn for InterpOnlyFn {
    fn name(&self) -> &'static str {
        "interpOnly"
    }

    fn arg_counts(&self) -> &'static [usize] {
        &[1]
    }

    fn as_interp(&self) -> Option<&dyn weft_core::InterpFn> {
        Some(self)
    }
}

impl weft_core::InterpFn for InterpOnlyFn {
    fn apply(&self, args: &[Value]) -> Result<Value, FnError> {
        Ok(args[0].clone())
    }
}

#[test]
fn targeting_an_unimplemented_backend_fails_at_dispatch() {
    let f = InterpOnlyFn;
    assert!(interp_impl(&f).is_ok());
    assert!(matches!(
        js_impl(&f),
        Err(FnError::MissingBackend {
            function: "interpOnly",
            backend: weft_core::Backend::Js,
        })
    ));
    assert!(matches!(py_impl(&f), Err(FnError::MissingBackend { .. })));
}

#[test]
fn typed_atoms_feed_function_operands() {
    // The typed constructors produce atoms ready to pass as operands.
    let operand: JsExpr = string_expr("'greeting'");
    assert_eq!(operand.kind(), ValueKind::Str);
    assert_eq!(operand.precedence(), Precedence::MAX);
}
