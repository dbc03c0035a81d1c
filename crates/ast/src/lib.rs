//! Abstract syntax trees.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

use intern::StrRef;
use loc::Located;
use std::fmt;

/// An expression.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum Exp {
  Nil,
  Int(i32),
  String(StrRef),
  Var(Located<Var>),
  Call(Located<StrRef>, Vec<Located<Exp>>),
  Op(Box<Located<Exp>>, Oper, Box<Located<Exp>>),
  /// The name of the record type, then the fields.
  Record(Located<StrRef>, Vec<Row>),
  /// The value of the whole sequence is the value of the last expression, or
  /// unit if there are none.
  Seq(Vec<Located<Exp>>),
  Assign(Located<Var>, Box<Located<Exp>>),
  If(Box<Located<Exp>>, Box<Located<Exp>>, Option<Box<Located<Exp>>>),
  While(Box<Located<Exp>>, Box<Located<Exp>>),
  For(Box<ForExp>),
  /// requires !decs.is_empty()
  Let(Vec<Located<Dec>>, Box<Located<Exp>>),
  /// The name of the array type, then the size, then the initializer.
  Array(Located<StrRef>, Box<Located<Exp>>, Box<Located<Exp>>),
  Break,
}

/// An lvalue: an expression denoting a storage location, which may appear on
/// the left of an assignment.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum Var {
  Simple(StrRef),
  Field(Box<Located<Var>>, Located<StrRef>),
  Subscript(Box<Located<Var>>, Box<Located<Exp>>),
}

/// A field in a record literal, as in `point { x = 1, y = 2 }`.
#[derive(Debug)]
pub struct Row {
  /// The label.
  pub lab: Located<StrRef>,
  /// The value.
  pub exp: Located<Exp>,
}

/// A `for` expression. The induction variable is bound to int inside the body.
#[derive(Debug)]
pub struct ForExp {
  /// The induction variable.
  pub var: Located<StrRef>,
  /// Whether the induction variable escapes. Filled in by escape analysis.
  pub escape: bool,
  /// The lower bound.
  pub lo: Located<Exp>,
  /// The upper bound.
  pub hi: Located<Exp>,
  /// The body.
  pub body: Located<Exp>,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Oper {
  Plus,
  Minus,
  Times,
  Divide,
  Eq,
  Neq,
  Lt,
  Le,
  Gt,
  Ge,
}

impl fmt::Display for Oper {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Oper::Plus => "+",
      Oper::Minus => "-",
      Oper::Times => "*",
      Oper::Divide => "/",
      Oper::Eq => "=",
      Oper::Neq => "<>",
      Oper::Lt => "<",
      Oper::Le => "<=",
      Oper::Gt => ">",
      Oper::Ge => ">=",
    };
    f.write_str(s)
  }
}

/// A declaration.
#[derive(Debug)]
pub enum Dec {
  /// A block of function declarations, which may be mutually recursive.
  /// requires !fun_decs.is_empty()
  Fun(Vec<FunDec>),
  /// A variable declaration.
  Var(VarDec),
  /// A block of type declarations, which may be mutually recursive.
  /// requires !ty_decs.is_empty()
  Ty(Vec<TyDec>),
}

/// A variable declaration, as in `var x : int := 3`.
#[derive(Debug)]
pub struct VarDec {
  /// The name being bound.
  pub name: Located<StrRef>,
  /// Whether the variable escapes. Filled in by escape analysis.
  pub escape: bool,
  /// The optional type annotation.
  pub ty: Option<Located<StrRef>>,
  /// The initializer.
  pub init: Located<Exp>,
}

/// A function declaration.
#[derive(Debug)]
pub struct FunDec {
  /// The name of the function.
  pub name: Located<StrRef>,
  /// The formal parameters.
  pub params: Vec<Field>,
  /// The optional annotated result type. None means this is a procedure.
  pub result: Option<Located<StrRef>>,
  /// The body.
  pub body: Located<Exp>,
}

/// A type declaration, as in `type list = { hd: int, tl: list }`.
#[derive(Debug)]
pub struct TyDec {
  /// The name of the type being declared.
  pub name: Located<StrRef>,
  /// The type it is declared to be.
  pub ty: Located<Ty>,
}

/// A type as written in the source.
#[derive(Debug)]
pub enum Ty {
  /// Another type's name.
  Name(StrRef),
  /// A record type.
  Record(Vec<Field>),
  /// An array type.
  Array(StrRef),
}

/// A named, typed slot: a record field in a type declaration, or a formal
/// parameter of a function.
#[derive(Debug)]
pub struct Field {
  /// The name.
  pub name: Located<StrRef>,
  /// Whether it escapes. Filled in by escape analysis.
  pub escape: bool,
  /// The name of its type.
  pub ty: Located<StrRef>,
}
