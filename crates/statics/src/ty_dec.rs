//! Resolve blocks of mutually recursive type declarations.
//!
//! The declarations in one block may refer to each other in any order, so
//! this runs in two passes. Pass 1 gives every declared name a preliminary
//! type, inventing an unsolved Name wherever a body mentions a type that is
//! not bound yet. Pass 2 chases every invented Name through the finished
//! environment and writes the concrete type it lands on into its slot.
//!
//! A chain of pure aliases that closes on itself has no concrete type to land
//! on; every Name on such a chain gets Top, and the cycle is reported once.
//! A chain that passes through a record or array is not a cycle: that is how
//! recursive data is declared, and the record or array itself is the concrete
//! type the chain lands on.

use crate::error::ErrorKind;
use crate::st::St;
use crate::types::{Cx, Sym, Ty};
use ast::TyDec;
use intern::StrRef;
use loc::Loc;
use rustc_hash::FxHashSet;

pub(crate) fn ck(cx: &Cx, st: &mut St, ty_decs: &[TyDec]) -> Cx {
  let mut cx = cx.clone();
  // pass 1: introduce. later declarations see the preliminary bindings of
  // earlier ones.
  let mut introduced = Vec::with_capacity(ty_decs.len());
  let mut seen = FxHashSet::default();
  for ty_dec in ty_decs {
    if !seen.insert(ty_dec.name.val) {
      st.err(ty_dec.name.loc, ErrorKind::TypeRedefined(ty_dec.name.val));
      continue;
    }
    let ty = match &ty_dec.ty.val {
      ast::Ty::Name(s) => name_ty(&cx, st, *s),
      ast::Ty::Record(fields) => {
        let fields = fields
          .iter()
          .map(|field| (field.name.val, name_ty(&cx, st, field.ty.val)))
          .collect();
        Ty::Record(st.tys.record(ty_dec.name.val, fields))
      }
      ast::Ty::Array(s) => {
        let elem = name_ty(&cx, st, *s);
        Ty::Array(st.tys.array(ty_dec.name.val, elem))
      }
    };
    cx.env.ty_env.insert(ty_dec.name.val, ty);
    introduced.push((ty_dec.name.val, ty, ty_dec.name.loc));
  }
  // pass 2: chase every Name the block introduced down to a concrete type.
  for &(name, ty, loc) in introduced.iter() {
    match ty {
      Ty::Name(n) => follow(&cx, st, loc, vec![name], n),
      Ty::Record(rec) => {
        let names: Vec<Sym> = st
          .tys
          .fields(rec)
          .iter()
          .filter_map(|&(_, field_ty)| match field_ty {
            Ty::Name(n) => Some(n),
            _ => None,
          })
          .collect();
        for n in names {
          follow(&cx, st, loc, Vec::new(), n);
        }
      }
      Ty::Array(arr) => {
        if let Ty::Name(n) = st.tys.elem(arr) {
          follow(&cx, st, loc, Vec::new(), n);
        }
      }
      _ => {}
    }
  }
  cx
}

/// The rule for a type mentioned by name in a declaration body: an existing
/// binding is used as-is, and anything else becomes a fresh unsolved Name for
/// pass 2 to chase.
fn name_ty(cx: &Cx, st: &mut St, s: StrRef) -> Ty {
  match cx.env.ty_env.get(&s) {
    Some(&ty) => ty,
    None => Ty::Name(st.tys.name(s)),
  }
}

/// Walks the chain of aliases out of the unsolved Name `n` and solves every
/// Name on the walk with the concrete type the chain ends at, or Top if it
/// ends nowhere.
///
/// `trail` is the names already on the alias chain. It starts holding the
/// declared name when `n` is the whole body of an alias declaration, so that
/// a cycle of aliases reports every declaration on it; a Name reached through
/// a record field or array element starts a fresh chain.
fn follow(cx: &Cx, st: &mut St, loc: Loc, mut trail: Vec<StrRef>, n: Sym) {
  let mut pending = Vec::new();
  let mut cur = Ty::Name(n);
  loop {
    let sym = match cur {
      Ty::Name(sym) => sym,
      ty => {
        for p in pending {
          st.tys.solve(p, ty);
        }
        return;
      }
    };
    if let Some(ty) = st.tys.slot(sym) {
      for p in pending {
        st.tys.solve(p, ty);
      }
      return;
    }
    let name = st.tys.name_of(sym);
    if trail.contains(&name) {
      st.err(loc, ErrorKind::CyclicTypeDec(trail));
      for p in pending {
        st.tys.solve(p, Ty::Top);
      }
      return;
    }
    trail.push(name);
    pending.push(sym);
    match cx.env.ty_env.get(&name) {
      None => {
        st.err(loc, ErrorKind::UnresolvedType(name));
        for p in pending {
          st.tys.solve(p, Ty::Top);
        }
        return;
      }
      Some(&ty) => cur = ty,
    }
  }
}
