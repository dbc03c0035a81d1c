use crate::error::ErrorKind;
use crate::st::St;
use crate::types::{subtype, Cx, Ty};
use intern::StrRef;
use loc::{Loc, Located};

/// Emits the error made by `f` at `loc` if `got` is not a subtype of `want`.
///
/// Checks where either side is already the error type are skipped, so one
/// bad sub-expression does not cascade into a report at every consumer.
pub(crate) fn ck_subtype<F>(st: &mut St, loc: Loc, got: Ty, want: Ty, f: F)
where
  F: FnOnce() -> ErrorKind,
{
  if !subtype(got, want) && got.is_well_typed() && want.is_well_typed() {
    st.err(loc, f());
  }
}

/// Looks up a type annotation and follows it through its name to the concrete
/// type. Unbound annotations report and come back as the error type.
pub(crate) fn get_ty(cx: &Cx, st: &mut St, name: Located<StrRef>) -> Ty {
  match cx.env.ty_env.get(&name.val) {
    None => {
      st.err(name.loc, ErrorKind::UnboundType(name.val));
      Ty::Top
    }
    Some(&ty) => st.tys.strip(ty),
  }
}
