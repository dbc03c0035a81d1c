use crate::types::{Ty, Tys};
use ast::Oper;
use intern::{StrRef, StrStore};
use loc::Loc;
use std::fmt;

/// A statics error.
#[derive(Debug)]
pub struct Error {
  loc: Loc,
  kind: ErrorKind,
}

impl Error {
  pub(crate) fn new(loc: Loc, kind: ErrorKind) -> Self {
    Self { loc, kind }
  }

  /// Returns the source position this error points at.
  pub fn loc(&self) -> Loc {
    self.loc
  }

  /// Returns a value that displays the message.
  pub fn display<'a>(
    &'a self,
    tys: &'a Tys,
    store: &'a StrStore,
    lines: ErrorLines,
  ) -> impl fmt::Display + 'a {
    ErrorKindDisplay {
      kind: &self.kind,
      tys,
      store,
      lines,
    }
  }

  /// Returns the code for this.
  pub fn to_code(&self) -> u8 {
    match self.kind {
      ErrorKind::UnboundType(_) => 1,
      ErrorKind::UnresolvedType(_) => 2,
      ErrorKind::CyclicTypeDec(_) => 3,
      ErrorKind::TypeRedefined(_) => 4,
      ErrorKind::UndefinedVar(_) => 5,
      ErrorKind::UndefinedFunction(_) => 6,
      ErrorKind::NameBoundToFunction(_) => 7,
      ErrorKind::NameBoundToVar(_) => 8,
      ErrorKind::NoSuchField(_, _) => 9,
      ErrorKind::NonRecordAccess(_, _) => 10,
      ErrorKind::NonIntSubscript(_) => 11,
      ErrorKind::NonArrayAccess(_) => 12,
      ErrorKind::ArityMismatch(_, _, _) => 13,
      ErrorKind::ArgumentMismatch(_, _) => 14,
      ErrorKind::ArgumentRedefined(_, _) => 15,
      ErrorKind::OperandMismatch(_, _, _) => 16,
      ErrorKind::FieldMismatch(_, _, _) => 17,
      ErrorKind::MissingField(_, _) => 18,
      ErrorKind::NonRecordType(_, _) => 19,
      ErrorKind::UnboundRecordType(_) => 20,
      ErrorKind::AssignmentMismatch(_, _) => 21,
      ErrorKind::NilInitialization(_) => 22,
      ErrorKind::ConditionMismatch(_) => 23,
      ErrorKind::NonUnitIf(_) => 24,
      ErrorKind::NonUnitWhile(_) => 25,
      ErrorKind::NonUnitFor(_) => 26,
      ErrorKind::NonUnitProcedure(_, _) => 27,
      ErrorKind::IfBranchMismatch(_, _) => 28,
      ErrorKind::ForRangeMismatch(_, _) => 29,
      ErrorKind::ArraySizeMismatch(_) => 30,
      ErrorKind::ArrayInitMismatch(_, _) => 31,
      ErrorKind::NonArrayType(_, _) => 32,
      ErrorKind::TypeMismatch(_, _) => 33,
      ErrorKind::IllegalBreak => 34,
    }
  }
}

/// How many lines to spread mismatched-type messages across.
#[derive(Debug, Clone, Copy)]
pub enum ErrorLines {
  /// One line.
  One,
  /// Maybe many lines.
  Many,
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
  /// A type annotation mentioned a type that is not in scope.
  UnboundType(StrRef),
  /// A type declaration's chain of aliases reached a type not in scope.
  UnresolvedType(StrRef),
  /// A chain of pure type aliases that closes on itself. Carries the names on
  /// the cycle, in chain order.
  CyclicTypeDec(Vec<StrRef>),
  /// The same name declared twice in one type declaration block.
  TypeRedefined(StrRef),
  UndefinedVar(StrRef),
  UndefinedFunction(StrRef),
  /// A function name used where a variable is needed.
  NameBoundToFunction(StrRef),
  /// A variable name called like a function.
  NameBoundToVar(StrRef),
  /// field, the record type it is not a field of.
  NoSuchField(StrRef, Ty),
  /// field, the non-record type it was selected from.
  NonRecordAccess(StrRef, Ty),
  NonIntSubscript(Ty),
  NonArrayAccess(Ty),
  /// function, actual argument count, expected argument count.
  ArityMismatch(StrRef, usize, usize),
  /// actual, expected.
  ArgumentMismatch(Ty, Ty),
  /// function, the parameter name bound twice.
  ArgumentRedefined(StrRef, StrRef),
  /// operator, actual, expected.
  OperandMismatch(Oper, Ty, Ty),
  /// field, actual, expected.
  FieldMismatch(StrRef, Ty, Ty),
  /// field, its declared type.
  MissingField(StrRef, Ty),
  /// the written type name, the non-record type it denotes.
  NonRecordType(StrRef, Ty),
  UnboundRecordType(StrRef),
  /// actual, expected.
  AssignmentMismatch(Ty, Ty),
  /// The variable declared with `nil` and no annotation to infer a record
  /// type from.
  NilInitialization(StrRef),
  ConditionMismatch(Ty),
  NonUnitIf(Ty),
  NonUnitWhile(Ty),
  NonUnitFor(Ty),
  /// procedure, the non-unit type of its body.
  NonUnitProcedure(StrRef, Ty),
  /// then-type, else-type.
  IfBranchMismatch(Ty, Ty),
  /// which bound ("lower" or "upper"), actual.
  ForRangeMismatch(&'static str, Ty),
  ArraySizeMismatch(Ty),
  /// actual, expected.
  ArrayInitMismatch(Ty, Ty),
  /// the written type name, the non-array type it denotes.
  NonArrayType(StrRef, Ty),
  /// actual, expected.
  TypeMismatch(Ty, Ty),
  IllegalBreak,
}

struct ErrorKindDisplay<'a> {
  kind: &'a ErrorKind,
  tys: &'a Tys,
  store: &'a StrStore,
  lines: ErrorLines,
}

impl fmt::Display for ErrorKindDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tys = self.tys;
    let store = self.store;
    match *self.kind {
      ErrorKind::UnboundType(name) => write!(f, "undefined type: {}", store.get(name)),
      ErrorKind::UnresolvedType(name) => write!(f, "unresolved type: {}", store.get(name)),
      ErrorKind::CyclicTypeDec(ref names) => {
        f.write_str("cyclic type declarations: ")?;
        comma_seq(f, names.iter().map(|&name| store.get(name)))
      }
      ErrorKind::TypeRedefined(name) => write!(f, "duplicate type: {}", store.get(name)),
      ErrorKind::UndefinedVar(name) => write!(f, "undefined variable: {}", store.get(name)),
      ErrorKind::UndefinedFunction(name) => write!(f, "undefined function: {}", store.get(name)),
      ErrorKind::NameBoundToFunction(name) => {
        write!(f, "expected a variable, found a function: {}", store.get(name))
      }
      ErrorKind::NameBoundToVar(name) => {
        write!(f, "expected a function, found a variable: {}", store.get(name))
      }
      ErrorKind::NoSuchField(field, ty) => write!(
        f,
        "no field {} on type {}",
        store.get(field),
        ty.display(tys, store)
      ),
      ErrorKind::NonRecordAccess(field, ty) => write!(
        f,
        "cannot select field {}: expected a record, found {}",
        store.get(field),
        ty.display(tys, store)
      ),
      ErrorKind::NonIntSubscript(ty) => {
        write!(f, "expected int for a subscript, found {}", ty.display(tys, store))
      }
      ErrorKind::NonArrayAccess(ty) => {
        write!(f, "cannot subscript: expected an array, found {}", ty.display(tys, store))
      }
      ErrorKind::ArityMismatch(name, got, want) => {
        let s = if want == 1 { "" } else { "s" };
        write!(
          f,
          "wrong number of arguments to {}: expected {want} argument{s}, found {got}",
          store.get(name)
        )
      }
      ErrorKind::ArgumentMismatch(got, want) => {
        mismatched(f, self.lines, want.display(tys, store), got.display(tys, store))
      }
      ErrorKind::ArgumentRedefined(func, arg) => write!(
        f,
        "duplicate parameter for {}: {}",
        store.get(func),
        store.get(arg)
      ),
      ErrorKind::OperandMismatch(oper, got, want) => write!(
        f,
        "mismatched operand for {oper}: expected {}, found {}",
        want.display(tys, store),
        got.display(tys, store)
      ),
      ErrorKind::FieldMismatch(field, got, want) => write!(
        f,
        "mismatched type for field {}: expected {}, found {}",
        store.get(field),
        want.display(tys, store),
        got.display(tys, store)
      ),
      ErrorKind::MissingField(field, ty) => write!(
        f,
        "missing field {} of type {}",
        store.get(field),
        ty.display(tys, store)
      ),
      ErrorKind::NonRecordType(_, ty) => {
        write!(f, "expected a record type, found {}", ty.display(tys, store))
      }
      ErrorKind::UnboundRecordType(name) => {
        write!(f, "undefined record type: {}", store.get(name))
      }
      ErrorKind::AssignmentMismatch(got, want) => {
        mismatched(f, self.lines, want.display(tys, store), got.display(tys, store))
      }
      ErrorKind::NilInitialization(name) => write!(
        f,
        "cannot infer a type for {}: nil needs a type annotation",
        store.get(name)
      ),
      ErrorKind::ConditionMismatch(ty) => {
        write!(f, "expected int for a condition, found {}", ty.display(tys, store))
      }
      ErrorKind::NonUnitIf(ty) => write!(
        f,
        "expected unit for an if without else, found {}",
        ty.display(tys, store)
      ),
      ErrorKind::NonUnitWhile(ty) => {
        write!(f, "expected unit for a while body, found {}", ty.display(tys, store))
      }
      ErrorKind::NonUnitFor(ty) => {
        write!(f, "expected unit for a for body, found {}", ty.display(tys, store))
      }
      ErrorKind::NonUnitProcedure(name, ty) => write!(
        f,
        "expected unit for the body of procedure {}, found {}",
        store.get(name),
        ty.display(tys, store)
      ),
      ErrorKind::IfBranchMismatch(then_ty, else_ty) => write!(
        f,
        "mismatched branches of if: then has type {}, else has type {}",
        then_ty.display(tys, store),
        else_ty.display(tys, store)
      ),
      ErrorKind::ForRangeMismatch(which, ty) => write!(
        f,
        "expected int for the {which} bound of a for, found {}",
        ty.display(tys, store)
      ),
      ErrorKind::ArraySizeMismatch(ty) => {
        write!(f, "expected int for an array size, found {}", ty.display(tys, store))
      }
      ErrorKind::ArrayInitMismatch(got, want) => {
        mismatched(f, self.lines, want.display(tys, store), got.display(tys, store))
      }
      ErrorKind::NonArrayType(_, ty) => {
        write!(f, "expected an array type, found {}", ty.display(tys, store))
      }
      ErrorKind::TypeMismatch(got, want) => {
        mismatched(f, self.lines, want.display(tys, store), got.display(tys, store))
      }
      ErrorKind::IllegalBreak => f.write_str("break outside of a loop"),
    }
  }
}

fn mismatched<T>(f: &mut fmt::Formatter<'_>, lines: ErrorLines, want: T, got: T) -> fmt::Result
where
  T: fmt::Display,
{
  match lines {
    ErrorLines::One => write!(f, "expected {want}, found {got}"),
    ErrorLines::Many => {
      writeln!(f, "mismatched types:")?;
      writeln!(f, "  expected {want}")?;
      write!(f, "     found {got}")
    }
  }
}

fn comma_seq<T, I>(f: &mut fmt::Formatter<'_>, mut iter: I) -> fmt::Result
where
  T: fmt::Display,
  I: Iterator<Item = T>,
{
  if let Some(x) = iter.next() {
    x.fmt(f)?;
  }
  for x in iter {
    f.write_str(", ")?;
    x.fmt(f)?;
  }
  Ok(())
}
