//! Check expressions and lvalues.
//!
//! Checking never aborts: every rule reports what it can and hands back its
//! best-known type, with Top standing for "already complained about". A
//! consumer that sees Top stays quiet, so one bad expression yields one
//! report, not a report at every enclosing expression.

use crate::dec;
use crate::error::ErrorKind;
use crate::st::St;
use crate::types::{join, Cx, ExpTy, Ty, ValInfo};
use crate::util::ck_subtype;
use ast::{Exp, Oper, Var};
use loc::Located;

pub(crate) fn ck(cx: &Cx, st: &mut St, exp: &Located<Exp>) -> ExpTy {
  match &exp.val {
    Exp::Nil => ExpTy::new(Ty::Nil),
    Exp::Int(_) => ExpTy::new(Ty::Int),
    Exp::String(_) => ExpTy::new(Ty::String),
    Exp::Var(var) => ck_var(cx, st, var),
    Exp::Call(func, args) => match cx.env.val_env.get(&func.val) {
      None => {
        st.err(func.loc, ErrorKind::UndefinedFunction(func.val));
        ExpTy::new(Ty::Top)
      }
      Some(ValInfo::Var(_)) => {
        st.err(func.loc, ErrorKind::NameBoundToVar(func.val));
        ExpTy::new(Ty::Top)
      }
      Some(ValInfo::Fun(formals, result)) => {
        let (formals, result) = (formals.clone(), *result);
        if formals.len() != args.len() {
          let err = ErrorKind::ArityMismatch(func.val, args.len(), formals.len());
          st.err(exp.loc, err);
        }
        // on an arity mismatch, still check as many arguments as there are
        // formals to check them against.
        for (arg, &want) in args.iter().zip(formals.iter()) {
          let got = ck(cx, st, arg).ty;
          ck_subtype(st, arg.loc, got, want, || {
            ErrorKind::ArgumentMismatch(got, want)
          });
        }
        ExpTy::new(result)
      }
    },
    Exp::Op(left, oper, right) => {
      let left_ty = ck(cx, st, left).ty;
      let right_ty = ck(cx, st, right).ty;
      // the equality operators accept operands of any one shared type, which
      // Bottom joins up to. everything else wants int.
      let want = match oper {
        Oper::Eq | Oper::Neq => Ty::Bottom,
        _ => Ty::Int,
      };
      let left_join = join(left_ty, want);
      if !left_join.is_well_typed() && left_ty.is_well_typed() {
        st.err(left.loc, ErrorKind::OperandMismatch(*oper, left_ty, want));
      } else {
        let actual = join(left_join, right_ty);
        if !actual.is_well_typed() && left_join.is_well_typed() && right_ty.is_well_typed() {
          st.err(right.loc, ErrorKind::OperandMismatch(*oper, right_ty, left_join));
        }
      }
      ExpTy::new(Ty::Int)
    }
    Exp::Record(typ, rows) => {
      let rec_ty = match cx.env.ty_env.get(&typ.val) {
        None => {
          st.err(typ.loc, ErrorKind::UnboundRecordType(typ.val));
          return ExpTy::new(Ty::Top);
        }
        Some(&ty) => st.tys.strip(ty),
      };
      let sym = match rec_ty {
        Ty::Record(sym) => sym,
        _ => {
          if rec_ty.is_well_typed() {
            st.err(typ.loc, ErrorKind::NonRecordType(typ.val, rec_ty));
          }
          return ExpTy::new(Ty::Top);
        }
      };
      let fields = st.tys.fields(sym).to_vec();
      for (name, field_ty) in fields {
        let want = st.tys.strip(field_ty);
        match rows.iter().find(|row| row.lab.val == name) {
          None => st.err(exp.loc, ErrorKind::MissingField(name, want)),
          Some(row) => {
            let got = ck(cx, st, &row.exp).ty;
            ck_subtype(st, row.exp.loc, got, want, || {
              ErrorKind::FieldMismatch(name, got, want)
            });
          }
        }
      }
      ExpTy::new(rec_ty)
    }
    Exp::Seq(exps) => {
      let mut ty = Ty::Unit;
      for exp in exps {
        ty = ck(cx, st, exp).ty;
      }
      ExpTy::new(ty)
    }
    Exp::Assign(var, rhs) => {
      let lhs_ty = ck_var(cx, st, var).ty;
      let rhs_ty = ck(cx, st, rhs).ty;
      ck_subtype(st, exp.loc, rhs_ty, lhs_ty, || {
        ErrorKind::AssignmentMismatch(rhs_ty, lhs_ty)
      });
      ExpTy::new(Ty::Unit)
    }
    Exp::If(test, then_e, else_e) => {
      let test_ty = ck(cx, st, test).ty;
      ck_subtype(st, test.loc, test_ty, Ty::Int, || {
        ErrorKind::ConditionMismatch(test_ty)
      });
      let then_ty = ck(cx, st, then_e).ty;
      match else_e {
        None => {
          ck_subtype(st, then_e.loc, then_ty, Ty::Unit, || {
            ErrorKind::NonUnitIf(then_ty)
          });
          ExpTy::new(Ty::Unit)
        }
        Some(else_e) => {
          let else_ty = ck(cx, st, else_e).ty;
          let ty = join(then_ty, else_ty);
          if !ty.is_well_typed() && then_ty.is_well_typed() && else_ty.is_well_typed() {
            st.err(exp.loc, ErrorKind::IfBranchMismatch(then_ty, else_ty));
          }
          ExpTy::new(ty)
        }
      }
    }
    Exp::While(test, body) => {
      let test_ty = ck(cx, st, test).ty;
      ck_subtype(st, test.loc, test_ty, Ty::Int, || {
        ErrorKind::ConditionMismatch(test_ty)
      });
      let mut body_cx = cx.clone();
      body_cx.in_loop = true;
      let body_ty = ck(&body_cx, st, body).ty;
      ck_subtype(st, body.loc, body_ty, Ty::Unit, || {
        ErrorKind::NonUnitWhile(body_ty)
      });
      ExpTy::new(Ty::Unit)
    }
    Exp::For(for_exp) => {
      let lo_ty = ck(cx, st, &for_exp.lo).ty;
      ck_subtype(st, for_exp.lo.loc, lo_ty, Ty::Int, || {
        ErrorKind::ForRangeMismatch("lower", lo_ty)
      });
      let hi_ty = ck(cx, st, &for_exp.hi).ty;
      ck_subtype(st, for_exp.hi.loc, hi_ty, Ty::Int, || {
        ErrorKind::ForRangeMismatch("upper", hi_ty)
      });
      let mut body_cx = cx.clone();
      body_cx.in_loop = true;
      body_cx
        .env
        .val_env
        .insert(for_exp.var.val, ValInfo::Var(Ty::Int));
      let body_ty = ck(&body_cx, st, &for_exp.body).ty;
      ck_subtype(st, for_exp.body.loc, body_ty, Ty::Unit, || {
        ErrorKind::NonUnitFor(body_ty)
      });
      ExpTy::new(Ty::Unit)
    }
    Exp::Let(decs, body) => {
      let mut cx = cx.clone();
      for dec in decs {
        cx = dec::ck(&cx, st, dec);
      }
      ck(&cx, st, body)
    }
    Exp::Array(typ, size, init) => {
      let size_ty = ck(cx, st, size).ty;
      ck_subtype(st, size.loc, size_ty, Ty::Int, || {
        ErrorKind::ArraySizeMismatch(size_ty)
      });
      let arr_ty = match cx.env.ty_env.get(&typ.val) {
        None => {
          st.err(typ.loc, ErrorKind::UnboundType(typ.val));
          Ty::Top
        }
        Some(&ty) => st.tys.strip(ty),
      };
      let init_ty = ck(cx, st, init).ty;
      match arr_ty {
        Ty::Array(sym) => {
          let want = st.tys.strip(st.tys.elem(sym));
          ck_subtype(st, init.loc, init_ty, want, || {
            ErrorKind::ArrayInitMismatch(init_ty, want)
          });
          ExpTy::new(arr_ty)
        }
        _ => {
          if arr_ty.is_well_typed() {
            st.err(typ.loc, ErrorKind::NonArrayType(typ.val, arr_ty));
          }
          ExpTy::new(Ty::Top)
        }
      }
    }
    Exp::Break => {
      if !cx.in_loop {
        st.err(exp.loc, ErrorKind::IllegalBreak);
      }
      ExpTy::new(Ty::Bottom)
    }
  }
}

pub(crate) fn ck_var(cx: &Cx, st: &mut St, var: &Located<Var>) -> ExpTy {
  match &var.val {
    Var::Simple(name) => match cx.env.val_env.get(name) {
      None => {
        st.err(var.loc, ErrorKind::UndefinedVar(*name));
        ExpTy::new(Ty::Top)
      }
      Some(ValInfo::Fun(..)) => {
        st.err(var.loc, ErrorKind::NameBoundToFunction(*name));
        ExpTy::new(Ty::Top)
      }
      Some(ValInfo::Var(ty)) => ExpTy::new(*ty),
    },
    Var::Field(inner, lab) => {
      let inner_ty = ck_var(cx, st, inner).ty;
      let sym = match inner_ty {
        Ty::Record(sym) => sym,
        _ => {
          if inner_ty.is_well_typed() {
            st.err(lab.loc, ErrorKind::NonRecordAccess(lab.val, inner_ty));
          }
          return ExpTy::new(Ty::Top);
        }
      };
      let field_ty = st
        .tys
        .fields(sym)
        .iter()
        .find(|&&(name, _)| name == lab.val)
        .map(|&(_, ty)| ty);
      match field_ty {
        None => {
          st.err(lab.loc, ErrorKind::NoSuchField(lab.val, inner_ty));
          ExpTy::new(Ty::Top)
        }
        Some(ty) => ExpTy::new(st.tys.strip(ty)),
      }
    }
    Var::Subscript(inner, idx) => {
      let inner_ty = ck_var(cx, st, inner).ty;
      let idx_ty = ck(cx, st, idx).ty;
      ck_subtype(st, idx.loc, idx_ty, Ty::Int, || {
        ErrorKind::NonIntSubscript(idx_ty)
      });
      match inner_ty {
        Ty::Array(sym) => ExpTy::new(st.tys.strip(st.tys.elem(sym))),
        // nil has no elements either: anything well-typed that is not an
        // array is reported, only an earlier error is not.
        _ => {
          if inner_ty.is_well_typed() {
            st.err(var.loc, ErrorKind::NonArrayAccess(inner_ty));
          }
          ExpTy::new(Ty::Top)
        }
      }
    }
  }
}
