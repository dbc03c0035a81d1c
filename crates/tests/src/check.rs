//! Support for building programs and checking them.
//!
//! There is no parser in this workspace, so tests build ASTs directly with
//! these helpers. Everything is located at offset zero, and assertions are
//! about codes, messages, and types, not positions.

use ast::{Dec, Exp, Field, ForExp, FunDec, Oper, Row, TyDec, Var, VarDec};
use intern::{StrRef, StrStore, StrStoreMut};
use loc::{Loc, Located};
use statics::{ErrorLines, Statics, Ty};

fn l<T>(val: T) -> Located<T> {
  Loc::new(0).wrap(val)
}

/// Interns the names a test mentions, then checks the program it builds.
pub(crate) struct Build {
  store: StrStoreMut,
}

impl Build {
  pub(crate) fn new() -> Self {
    Self {
      store: StrStoreMut::new(),
    }
  }

  pub(crate) fn name(&mut self, s: &str) -> StrRef {
    self.store.insert(s.into())
  }

  pub(crate) fn finish(self, exp: Located<Exp>) -> Checked {
    Checked {
      statics: statics::get(&exp),
      store: self.store.finish(),
    }
  }
}

pub(crate) struct Checked {
  pub(crate) statics: Statics,
  store: StrStore,
}

impl Checked {
  pub(crate) fn ty(&self) -> Ty {
    self.statics.exp_ty.ty
  }

  pub(crate) fn ty_display(&self) -> String {
    self
      .ty()
      .display(&self.statics.tys, &self.store)
      .to_string()
  }

  /// Asserts the program checked with no errors and has this type.
  pub(crate) fn ok_with(&self, ty: Ty) {
    self.no_errors();
    assert_eq!(self.ty(), ty);
  }

  pub(crate) fn no_errors(&self) {
    assert!(
      self.statics.errors.is_empty(),
      "unexpected errors: {:?}",
      self.msgs()
    );
  }

  pub(crate) fn codes(&self) -> Vec<u8> {
    self.statics.errors.iter().map(|e| e.to_code()).collect()
  }

  pub(crate) fn msgs(&self) -> Vec<String> {
    self
      .statics
      .errors
      .iter()
      .map(|e| {
        e.display(&self.statics.tys, &self.store, ErrorLines::One)
          .to_string()
      })
      .collect()
  }
}

pub(crate) fn int(n: i32) -> Located<Exp> {
  l(Exp::Int(n))
}

pub(crate) fn string(s: StrRef) -> Located<Exp> {
  l(Exp::String(s))
}

pub(crate) fn nil() -> Located<Exp> {
  l(Exp::Nil)
}

/// The empty sequence, `()`.
pub(crate) fn unit() -> Located<Exp> {
  seq(vec![])
}

pub(crate) fn seq(exps: Vec<Located<Exp>>) -> Located<Exp> {
  l(Exp::Seq(exps))
}

pub(crate) fn simple(name: StrRef) -> Located<Var> {
  l(Var::Simple(name))
}

pub(crate) fn field(var: Located<Var>, lab: StrRef) -> Located<Var> {
  l(Var::Field(Box::new(var), l(lab)))
}

pub(crate) fn subscript(var: Located<Var>, idx: Located<Exp>) -> Located<Var> {
  l(Var::Subscript(Box::new(var), Box::new(idx)))
}

pub(crate) fn var_exp(var: Located<Var>) -> Located<Exp> {
  l(Exp::Var(var))
}

/// A use of a variable by name.
pub(crate) fn evar(name: StrRef) -> Located<Exp> {
  var_exp(simple(name))
}

pub(crate) fn call(func: StrRef, args: Vec<Located<Exp>>) -> Located<Exp> {
  l(Exp::Call(l(func), args))
}

pub(crate) fn op(left: Located<Exp>, oper: Oper, right: Located<Exp>) -> Located<Exp> {
  l(Exp::Op(Box::new(left), oper, Box::new(right)))
}

pub(crate) fn record(typ: StrRef, rows: Vec<(StrRef, Located<Exp>)>) -> Located<Exp> {
  let rows = rows
    .into_iter()
    .map(|(lab, exp)| Row { lab: l(lab), exp })
    .collect();
  l(Exp::Record(l(typ), rows))
}

pub(crate) fn assign(var: Located<Var>, exp: Located<Exp>) -> Located<Exp> {
  l(Exp::Assign(var, Box::new(exp)))
}

pub(crate) fn if_(
  test: Located<Exp>,
  then_e: Located<Exp>,
  else_e: Option<Located<Exp>>,
) -> Located<Exp> {
  l(Exp::If(
    Box::new(test),
    Box::new(then_e),
    else_e.map(Box::new),
  ))
}

pub(crate) fn while_(test: Located<Exp>, body: Located<Exp>) -> Located<Exp> {
  l(Exp::While(Box::new(test), Box::new(body)))
}

pub(crate) fn for_(
  var: StrRef,
  lo: Located<Exp>,
  hi: Located<Exp>,
  body: Located<Exp>,
) -> Located<Exp> {
  l(Exp::For(Box::new(ForExp {
    var: l(var),
    escape: false,
    lo,
    hi,
    body,
  })))
}

pub(crate) fn let_(decs: Vec<Located<Dec>>, body: Located<Exp>) -> Located<Exp> {
  l(Exp::Let(decs, Box::new(body)))
}

pub(crate) fn array(typ: StrRef, size: Located<Exp>, init: Located<Exp>) -> Located<Exp> {
  l(Exp::Array(l(typ), Box::new(size), Box::new(init)))
}

pub(crate) fn brk() -> Located<Exp> {
  l(Exp::Break)
}

pub(crate) fn var_dec(name: StrRef, ty: Option<StrRef>, init: Located<Exp>) -> Located<Dec> {
  l(Dec::Var(VarDec {
    name: l(name),
    escape: false,
    ty: ty.map(l),
    init,
  }))
}

pub(crate) fn fun_decs(fun_decs: Vec<FunDec>) -> Located<Dec> {
  l(Dec::Fun(fun_decs))
}

pub(crate) fn fun(
  name: StrRef,
  params: Vec<(StrRef, StrRef)>,
  result: Option<StrRef>,
  body: Located<Exp>,
) -> FunDec {
  let params = params
    .into_iter()
    .map(|(name, ty)| Field {
      name: l(name),
      escape: false,
      ty: l(ty),
    })
    .collect();
  FunDec {
    name: l(name),
    params,
    result: result.map(l),
    body,
  }
}

pub(crate) fn ty_decs(ty_decs: Vec<TyDec>) -> Located<Dec> {
  l(Dec::Ty(ty_decs))
}

pub(crate) fn ty_name(name: StrRef, to: StrRef) -> TyDec {
  TyDec {
    name: l(name),
    ty: l(ast::Ty::Name(to)),
  }
}

pub(crate) fn ty_record(name: StrRef, fields: Vec<(StrRef, StrRef)>) -> TyDec {
  let fields = fields
    .into_iter()
    .map(|(name, ty)| Field {
      name: l(name),
      escape: false,
      ty: l(ty),
    })
    .collect();
  TyDec {
    name: l(name),
    ty: l(ast::Ty::Record(fields)),
  }
}

pub(crate) fn ty_array(name: StrRef, elem: StrRef) -> TyDec {
  TyDec {
    name: l(name),
    ty: l(ast::Ty::Array(elem)),
  }
}
