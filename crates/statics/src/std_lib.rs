//! The base environment: the built-in types and procedures.

use crate::st::St;
use crate::types::{Cx, Env, Ty, ValInfo};
use intern::StrRef;

pub(crate) fn get() -> (Cx, St) {
  let mut env = Env::default();
  env.ty_env.insert(StrRef::INT, Ty::Int);
  env.ty_env.insert(StrRef::STRING, Ty::String);
  let fns = [
    (StrRef::PRINT, vec![Ty::String], Ty::Unit),
    (StrRef::FLUSH, vec![], Ty::Unit),
    (StrRef::GETCHAR, vec![], Ty::String),
    (StrRef::ORD, vec![Ty::String], Ty::Int),
    (StrRef::CHR, vec![Ty::Int], Ty::String),
    (StrRef::SIZE, vec![Ty::String], Ty::Int),
    (StrRef::SUBSTRING, vec![Ty::String, Ty::Int, Ty::Int], Ty::String),
    (StrRef::CONCAT, vec![Ty::String, Ty::String], Ty::String),
    (StrRef::NOT, vec![Ty::Int], Ty::Int),
    (StrRef::EXIT, vec![Ty::Int], Ty::Unit),
  ];
  for (name, formals, result) in fns {
    env.val_env.insert(name, ValInfo::Fun(formals, result));
  }
  let cx = Cx {
    env,
    in_loop: false,
  };
  (cx, St::default())
}
