//! Static analysis.
//!
//! Takes an abstract syntax tree and checks every typing rule of the
//! language, producing the type of the whole program and a log of every
//! error found along the way. Analysis always runs to completion: a bad
//! expression is reported, given the error type, and checking continues
//! around it.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

mod dec;
mod error;
mod exp;
mod st;
mod std_lib;
mod ty_dec;
mod types;
mod util;

pub mod translate;

pub use error::{Error, ErrorLines};
pub use types::{join, subtype, ExpTy, Sym, Ty, Tys};

use loc::Located;

/// The data computed when running static analysis.
#[derive(Debug)]
pub struct Statics {
  /// The translation and type of the whole program. A program whose own type
  /// could not be determined gets Top; `errors` being empty is what says the
  /// program checked cleanly.
  pub exp_ty: ExpTy,
  /// The record, array, and named types the program declared. Needed to
  /// display types and errors.
  pub tys: Tys,
  /// The errors, in the order checking found them.
  pub errors: Vec<Error>,
}

/// Performs static analysis on a whole program.
pub fn get(exp: &Located<ast::Exp>) -> Statics {
  let (cx, mut st) = std_lib::get();
  let exp_ty = exp::ck(&cx, &mut st, exp);
  let (tys, errors) = st.finish();
  Statics {
    exp_ty,
    tys,
    errors,
  }
}
