//! Check declarations.

use crate::error::ErrorKind;
use crate::exp;
use crate::st::St;
use crate::ty_dec;
use crate::types::{Cx, Ty, ValInfo};
use crate::util::{ck_subtype, get_ty};
use ast::{Dec, FunDec, VarDec};
use loc::Located;
use rustc_hash::FxHashSet;

/// Checks a declaration and returns the extended context for whatever comes
/// after it. The given context is untouched.
pub(crate) fn ck(cx: &Cx, st: &mut St, dec: &Located<Dec>) -> Cx {
  match &dec.val {
    Dec::Fun(fun_decs) => ck_fun_decs(cx, st, fun_decs),
    Dec::Var(var_dec) => ck_var_dec(cx, st, var_dec),
    Dec::Ty(ty_decs) => ty_dec::ck(cx, st, ty_decs),
  }
}

fn ck_var_dec(cx: &Cx, st: &mut St, var_dec: &VarDec) -> Cx {
  let init_ty = exp::ck(cx, st, &var_dec.init).ty;
  let mut declared = match var_dec.ty {
    None => init_ty,
    Some(ann) => get_ty(cx, st, ann),
  };
  // a bare `var x := nil` gives no way to learn which record type x is.
  if declared == Ty::Nil {
    st.err(var_dec.name.loc, ErrorKind::NilInitialization(var_dec.name.val));
    declared = Ty::Top;
  }
  ck_subtype(st, var_dec.init.loc, init_ty, declared, || {
    ErrorKind::AssignmentMismatch(init_ty, declared)
  });
  let mut cx = cx.clone();
  cx.env.val_env.insert(var_dec.name.val, ValInfo::Var(declared));
  cx
}

fn ck_fun_decs(cx: &Cx, st: &mut St, fun_decs: &[FunDec]) -> Cx {
  let mut cx = cx.clone();
  // pass 1: headers. every signature goes into scope before any body is
  // checked, so the block may be mutually recursive.
  let mut headers = Vec::with_capacity(fun_decs.len());
  for fun_dec in fun_decs {
    let mut seen = FxHashSet::default();
    let mut formals = Vec::with_capacity(fun_dec.params.len());
    for param in fun_dec.params.iter() {
      if !seen.insert(param.name.val) {
        let err = ErrorKind::ArgumentRedefined(fun_dec.name.val, param.name.val);
        st.err(param.name.loc, err);
      }
      formals.push(get_ty(&cx, st, param.ty));
    }
    let result = match fun_dec.result {
      None => Ty::Unit,
      Some(ann) => get_ty(&cx, st, ann),
    };
    cx.env
      .val_env
      .insert(fun_dec.name.val, ValInfo::Fun(formals.clone(), result));
    headers.push((formals, result));
  }
  // pass 2: bodies.
  for (fun_dec, (formals, result)) in fun_decs.iter().zip(headers) {
    let mut body_cx = cx.clone();
    body_cx.in_loop = false;
    for (param, &ty) in fun_dec.params.iter().zip(formals.iter()) {
      body_cx.env.val_env.insert(param.name.val, ValInfo::Var(ty));
    }
    let body_ty = exp::ck(&body_cx, st, &fun_dec.body).ty;
    match fun_dec.result {
      None => ck_subtype(st, fun_dec.body.loc, body_ty, Ty::Unit, || {
        ErrorKind::NonUnitProcedure(fun_dec.name.val, body_ty)
      }),
      Some(_) => ck_subtype(st, fun_dec.body.loc, body_ty, result, || {
        ErrorKind::TypeMismatch(body_ty, result)
      }),
    }
  }
  cx
}
