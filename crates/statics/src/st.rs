use crate::error::{Error, ErrorKind};
use crate::types::Tys;
use loc::Loc;

/// The state.
///
/// Invariant: 'grows' monotonically. Checking never removes a type from `tys`
/// or an error from `errors`.
#[derive(Debug, Default)]
pub(crate) struct St {
  pub(crate) tys: Tys,
  errors: Vec<Error>,
}

impl St {
  /// Records an error at the given position. This is the only way errors get
  /// reported: checking itself never aborts.
  pub(crate) fn err(&mut self, loc: Loc, kind: ErrorKind) {
    self.errors.push(Error::new(loc, kind));
  }

  pub(crate) fn finish(self) -> (Tys, Vec<Error>) {
    (self.tys, self.errors)
  }
}
