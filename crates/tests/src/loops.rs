use crate::check::{
  assign, brk, call, evar, for_, fun, fun_decs, int, let_, op, seq, simple, string, unit,
  var_dec, while_, Build,
};
use ast::Oper;
use statics::Ty;

#[test]
fn while_loop() {
  let b = Build::new();
  b.finish(while_(int(1), unit())).ok_with(Ty::Unit);
}

#[test]
fn while_condition_wants_int() {
  let mut b = Build::new();
  let x = b.name("x");
  let ck = b.finish(while_(string(x), unit()));
  assert_eq!(ck.codes(), vec![23]);
}

#[test]
fn while_body_wants_unit() {
  let b = Build::new();
  let ck = b.finish(while_(int(1), int(5)));
  assert_eq!(ck.codes(), vec![25]);
  assert_eq!(ck.msgs(), vec!["expected unit for a while body, found int"]);
}

#[test]
fn for_with_break() {
  let mut b = Build::new();
  let i = b.name("i");
  b.finish(for_(i, int(0), int(10), brk())).ok_with(Ty::Unit);
}

#[test]
fn for_lower_bound_wants_int() {
  let mut b = Build::new();
  let i = b.name("i");
  let a = b.name("a");
  let ck = b.finish(for_(i, string(a), int(10), unit()));
  assert_eq!(ck.codes(), vec![29]);
  assert_eq!(
    ck.msgs(),
    vec!["expected int for the lower bound of a for, found string"]
  );
}

#[test]
fn for_upper_bound_wants_int() {
  let mut b = Build::new();
  let i = b.name("i");
  let z = b.name("z");
  let ck = b.finish(for_(i, int(0), string(z), unit()));
  assert_eq!(ck.codes(), vec![29]);
  assert_eq!(
    ck.msgs(),
    vec!["expected int for the upper bound of a for, found string"]
  );
}

#[test]
fn for_body_wants_unit() {
  let mut b = Build::new();
  let i = b.name("i");
  let ck = b.finish(for_(i, int(0), int(10), int(5)));
  assert_eq!(ck.codes(), vec![26]);
}

#[test]
fn induction_var_is_int() {
  let mut b = Build::new();
  let i = b.name("i");
  let exit = b.name("exit");
  b.finish(for_(i, int(0), int(10), call(exit, vec![evar(i)])))
    .ok_with(Ty::Unit);
}

#[test]
fn induction_var_assignable() {
  // the language reference forbids this, the checker accepts it.
  let mut b = Build::new();
  let i = b.name("i");
  b.finish(for_(i, int(0), int(10), assign(simple(i), int(0))))
    .ok_with(Ty::Unit);
}

#[test]
fn break_outside_loop() {
  let b = Build::new();
  let ck = b.finish(brk());
  assert_eq!(ck.codes(), vec![34]);
  assert_eq!(ck.msgs(), vec!["break outside of a loop"]);
  assert_eq!(ck.ty(), Ty::Bottom);
}

#[test]
fn break_after_loop() {
  let mut b = Build::new();
  let i = b.name("i");
  let body = seq(vec![
    assign(simple(i), op(evar(i), Oper::Plus, int(1))),
    brk(),
  ]);
  let exp = seq(vec![while_(int(1), body), brk()]);
  let ck = b.finish(let_(vec![var_dec(i, None, int(0))], exp));
  assert_eq!(ck.codes(), vec![34]);
}

#[test]
fn break_in_function_inside_loop() {
  // a function body starts outside any loop, even when the declaration sits
  // inside one.
  let mut b = Build::new();
  let f = b.name("f");
  let body = let_(vec![fun_decs(vec![fun(f, vec![], None, brk())])], unit());
  let ck = b.finish(while_(int(1), body));
  assert_eq!(ck.codes(), vec![34]);
}
