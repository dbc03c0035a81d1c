use crate::check::{
  assign, call, evar, if_, int, let_, op, seq, simple, string, unit, var_dec, Build,
};
use ast::Oper;
use statics::Ty;

#[test]
fn undefined_var() {
  let mut b = Build::new();
  let y = b.name("y");
  let ck = b.finish(evar(y));
  assert_eq!(ck.codes(), vec![5]);
  assert_eq!(ck.msgs(), vec!["undefined variable: y"]);
  assert_eq!(ck.ty(), Ty::Top);
}

#[test]
fn function_used_as_var() {
  let mut b = Build::new();
  let print = b.name("print");
  let ck = b.finish(evar(print));
  assert_eq!(ck.codes(), vec![7]);
  assert_eq!(ck.ty(), Ty::Top);
}

#[test]
fn undefined_function() {
  let mut b = Build::new();
  let g = b.name("g");
  let ck = b.finish(call(g, vec![]));
  assert_eq!(ck.codes(), vec![6]);
  assert_eq!(ck.ty(), Ty::Top);
}

#[test]
fn variable_called() {
  let mut b = Build::new();
  let f = b.name("f");
  let decs = vec![var_dec(f, None, int(1))];
  let ck = b.finish(let_(decs, call(f, vec![])));
  assert_eq!(ck.codes(), vec![8]);
  assert_eq!(ck.msgs(), vec!["expected a function, found a variable: f"]);
}

#[test]
fn arity_mismatch() {
  let mut b = Build::new();
  let print = b.name("print");
  let ck = b.finish(call(print, vec![]));
  assert_eq!(ck.codes(), vec![13]);
  assert_eq!(
    ck.msgs(),
    vec!["wrong number of arguments to print: expected 1 argument, found 0"]
  );
  assert_eq!(ck.ty(), Ty::Unit);
}

#[test]
fn argument_mismatch() {
  let mut b = Build::new();
  let print = b.name("print");
  let ck = b.finish(call(print, vec![int(3)]));
  assert_eq!(ck.codes(), vec![14]);
  assert_eq!(ck.msgs(), vec!["expected string, found int"]);
}

#[test]
fn arithmetic() {
  let b = Build::new();
  b.finish(op(int(1), Oper::Plus, int(2))).ok_with(Ty::Int);
}

#[test]
fn arithmetic_left_operand() {
  let mut b = Build::new();
  let a = b.name("a");
  let ck = b.finish(op(string(a), Oper::Plus, int(1)));
  assert_eq!(ck.codes(), vec![16]);
  assert_eq!(
    ck.msgs(),
    vec!["mismatched operand for +: expected int, found string"]
  );
  assert_eq!(ck.ty(), Ty::Int);
}

#[test]
fn arithmetic_right_operand() {
  let mut b = Build::new();
  let a = b.name("a");
  let ck = b.finish(op(int(1), Oper::Plus, string(a)));
  assert_eq!(ck.codes(), vec![16]);
}

#[test]
fn order_wants_int() {
  let mut b = Build::new();
  let a = b.name("a");
  let z = b.name("z");
  let ck = b.finish(op(string(a), Oper::Lt, string(z)));
  assert_eq!(ck.codes(), vec![16]);
}

#[test]
fn equality_ints() {
  let b = Build::new();
  b.finish(op(int(1), Oper::Eq, int(2))).ok_with(Ty::Int);
}

#[test]
fn equality_mixed() {
  let mut b = Build::new();
  let x = b.name("x");
  let ck = b.finish(op(int(1), Oper::Eq, string(x)));
  assert_eq!(ck.codes(), vec![16]);
  assert_eq!(
    ck.msgs(),
    vec!["mismatched operand for =: expected int, found string"]
  );
}

#[test]
fn equality_units() {
  let b = Build::new();
  b.finish(op(unit(), Oper::Neq, unit())).ok_with(Ty::Int);
}

#[test]
fn one_error_per_cause() {
  // the undefined variable is reported once; the consumers of its type are
  // not heard from again.
  let mut b = Build::new();
  let x = b.name("x");
  let y = b.name("y");
  let decs = vec![var_dec(x, None, evar(y))];
  let ck = b.finish(let_(decs, op(evar(x), Oper::Plus, int(1))));
  assert_eq!(ck.codes(), vec![5]);
  assert_eq!(ck.ty(), Ty::Int);
}

#[test]
fn seq_value_is_last() {
  let mut b = Build::new();
  let hi = b.name("hi");
  b.finish(seq(vec![int(1), string(hi)])).ok_with(Ty::String);
}

#[test]
fn assignment() {
  let mut b = Build::new();
  let x = b.name("x");
  let decs = vec![var_dec(x, None, int(1))];
  b.finish(let_(decs, assign(simple(x), int(2))))
    .ok_with(Ty::Unit);
}

#[test]
fn assignment_mismatch() {
  let mut b = Build::new();
  let x = b.name("x");
  let hi = b.name("hi");
  let decs = vec![var_dec(x, None, int(1))];
  let ck = b.finish(let_(decs, assign(simple(x), string(hi))));
  assert_eq!(ck.codes(), vec![21]);
}

#[test]
fn if_branch_mismatch() {
  let mut b = Build::new();
  let a = b.name("a");
  let ck = b.finish(if_(int(1), string(a), Some(int(2))));
  assert_eq!(ck.codes(), vec![28]);
  assert_eq!(
    ck.msgs(),
    vec!["mismatched branches of if: then has type string, else has type int"]
  );
  assert_eq!(ck.ty(), Ty::Top);
}

#[test]
fn if_without_else_wants_unit() {
  let b = Build::new();
  let ck = b.finish(if_(int(1), int(2), None));
  assert_eq!(ck.codes(), vec![24]);
  assert_eq!(ck.ty(), Ty::Unit);
}

#[test]
fn if_condition_wants_int() {
  let mut b = Build::new();
  let x = b.name("x");
  let ck = b.finish(if_(string(x), unit(), None));
  assert_eq!(ck.codes(), vec![23]);
  assert_eq!(ck.msgs(), vec!["expected int for a condition, found string"]);
}

#[test]
fn if_with_else() {
  let b = Build::new();
  b.finish(if_(int(1), int(2), Some(int(3)))).ok_with(Ty::Int);
}

#[test]
fn let_scope_ends() {
  let mut b = Build::new();
  let x = b.name("x");
  let inner = let_(vec![var_dec(x, None, int(1))], evar(x));
  let ck = b.finish(seq(vec![inner, evar(x)]));
  assert_eq!(ck.codes(), vec![5]);
}
