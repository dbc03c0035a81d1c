//! Types.

use crate::translate;
use intern::{StrRef, StrStore};
use rustc_hash::FxHashMap;
use std::fmt;

/// A type.
///
/// Record, array, and named types carry a [`Sym`], an index into a [`Tys`].
/// Equality of those types is equality of the `Sym`: two record types with
/// identical fields but different declarations are different types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
  /// The type of integer literals and arithmetic.
  Int,
  /// The type of string literals.
  String,
  /// The type of expressions evaluated only for effect.
  Unit,
  /// The type of the `nil` literal. A subtype of every record type.
  Nil,
  /// A record type.
  Record(Sym),
  /// An array type.
  Array(Sym),
  /// A named type, not yet known to be any of the others. After a type
  /// declaration block has been resolved, following the name one hop always
  /// lands on a concrete type.
  Name(Sym),
  /// The universal type. The type of anything that already had an error
  /// reported about it; comparisons against it are skipped.
  Top,
  /// The empty type. The type of `break`, and the expected operand type for
  /// the equality operators.
  Bottom,
}

impl Ty {
  /// Returns whether this type is well-formed, i.e. is not the error type.
  pub fn is_well_typed(self) -> bool {
    !matches!(self, Ty::Top)
  }

  /// Returns a value that displays this type.
  pub fn display<'a>(self, tys: &'a Tys, store: &'a StrStore) -> impl fmt::Display + 'a {
    TyDisplay {
      ty: self,
      tys,
      store,
      long: true,
    }
  }
}

/// Returns whether `a` is a subtype of `b`.
///
/// The relation is reflexive; Bottom is below everything; Top is above
/// everything; nil is below every record type. Everything else is nominal.
pub fn subtype(a: Ty, b: Ty) -> bool {
  match (a, b) {
    (Ty::Bottom, _) | (_, Ty::Top) => true,
    (Ty::Nil, Ty::Record(_)) => true,
    _ => a == b,
  }
}

/// Returns the least upper bound of `a` and `b`, which is Top when the two
/// are unrelated.
pub fn join(a: Ty, b: Ty) -> Ty {
  if subtype(a, b) {
    b
  } else if subtype(b, a) {
    a
  } else {
    Ty::Top
  }
}

struct TyDisplay<'a> {
  ty: Ty,
  tys: &'a Tys,
  store: &'a StrStore,
  long: bool,
}

impl fmt::Display for TyDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.ty {
      Ty::Int => f.write_str("int"),
      Ty::String => f.write_str("string"),
      Ty::Unit => f.write_str("unit"),
      Ty::Nil => f.write_str("nil"),
      // not real syntax
      Ty::Top | Ty::Bottom => f.write_str("_"),
      Ty::Record(sym) | Ty::Name(sym) => f.write_str(self.store.get(self.tys.name_of(sym))),
      Ty::Array(sym) => {
        if self.long {
          f.write_str("array of ")?;
          let elem = TyDisplay {
            ty: self.tys.elem(sym),
            tys: self.tys,
            store: self.store,
            long: false,
          };
          elem.fmt(f)
        } else {
          f.write_str(self.store.get(self.tys.name_of(sym)))
        }
      }
    }
  }
}

/// The identity of a record, array, or named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sym(usize);

#[derive(Debug)]
enum TyData {
  /// The fields, in declaration order.
  Record(Vec<(StrRef, Ty)>),
  /// The element type.
  Array(Ty),
  /// The resolution slot of a named type. Written at most once, by the
  /// resolver, and never with another Name.
  Name(Option<Ty>),
}

/// All the record, array, and named types created during a run of the
/// analysis, with the names they were declared under.
#[derive(Debug, Default)]
pub struct Tys {
  store: Vec<(StrRef, TyData)>,
}

impl Tys {
  fn insert(&mut self, name: StrRef, data: TyData) -> Sym {
    let ret = Sym(self.store.len());
    self.store.push((name, data));
    ret
  }

  pub(crate) fn record(&mut self, name: StrRef, fields: Vec<(StrRef, Ty)>) -> Sym {
    self.insert(name, TyData::Record(fields))
  }

  pub(crate) fn array(&mut self, name: StrRef, elem: Ty) -> Sym {
    self.insert(name, TyData::Array(elem))
  }

  pub(crate) fn name(&mut self, name: StrRef) -> Sym {
    self.insert(name, TyData::Name(None))
  }

  /// Returns the name this Sym was declared under.
  pub(crate) fn name_of(&self, sym: Sym) -> StrRef {
    self.store[sym.0].0
  }

  /// Returns the fields of a record type.
  pub(crate) fn fields(&self, sym: Sym) -> &[(StrRef, Ty)] {
    match &self.store[sym.0].1 {
      TyData::Record(fields) => fields,
      _ => unreachable!("fields of a non-record"),
    }
  }

  /// Returns the element type of an array type.
  pub(crate) fn elem(&self, sym: Sym) -> Ty {
    match self.store[sym.0].1 {
      TyData::Array(elem) => elem,
      _ => unreachable!("elem of a non-array"),
    }
  }

  /// Returns the resolution slot of a named type.
  pub(crate) fn slot(&self, sym: Sym) -> Option<Ty> {
    match self.store[sym.0].1 {
      TyData::Name(slot) => slot,
      _ => unreachable!("slot of a non-name"),
    }
  }

  /// Solves a named type. Panics if it was already solved, or if `ty` is
  /// itself a name.
  pub(crate) fn solve(&mut self, sym: Sym, ty: Ty) {
    assert!(!matches!(ty, Ty::Name(_)));
    match &mut self.store[sym.0].1 {
      TyData::Name(slot) => {
        assert!(slot.is_none());
        *slot = Some(ty);
      }
      _ => unreachable!("solve of a non-name"),
    }
  }

  /// Follows a Name one hop to the concrete type it was solved with.
  /// Concrete types are returned unchanged.
  pub(crate) fn strip(&self, ty: Ty) -> Ty {
    match ty {
      Ty::Name(sym) => self.slot(sym).expect("name not solved after resolution"),
      _ => ty,
    }
  }
}

/// What checking an expression computes: its translation and its type.
#[derive(Debug)]
pub struct ExpTy {
  /// The translation.
  pub exp: translate::Exp,
  /// The type.
  pub ty: Ty,
}

impl ExpTy {
  pub(crate) fn new(ty: Ty) -> Self {
    Self {
      exp: translate::Exp,
      ty,
    }
  }
}

/// An environment entry for a value identifier.
#[derive(Debug, Clone)]
pub(crate) enum ValInfo {
  /// A variable.
  Var(Ty),
  /// A function, with its formal parameter types and its result type.
  Fun(Vec<Ty>, Ty),
}

pub(crate) type ValEnv = FxHashMap<StrRef, ValInfo>;
pub(crate) type TyEnv = FxHashMap<StrRef, Ty>;

/// The environments.
#[derive(Debug, Default, Clone)]
pub(crate) struct Env {
  pub(crate) val_env: ValEnv,
  pub(crate) ty_env: TyEnv,
}

/// The context threaded through checking.
///
/// Scopes nest by cloning: a sub-check extends its own clone and the parent's
/// view is untouched, so leaving a scope is just dropping the clone.
#[derive(Debug, Clone)]
pub(crate) struct Cx {
  pub(crate) env: Env,
  /// Whether we are inside a `while` or `for` body, where `break` is legal.
  pub(crate) in_loop: bool,
}
