//! Source code locations.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

use std::fmt;

/// A position in the source, as a byte offset from the start of the file.
///
/// The lexer hands these out; everything downstream treats them as opaque and
/// only ever compares them or reports them back to the user.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Loc(usize);

impl Loc {
  /// Returns a new Loc for the byte offset.
  #[must_use]
  pub const fn new(n: usize) -> Self {
    Self(n)
  }

  /// Converts this back into a usize.
  #[must_use]
  pub const fn to_usize(self) -> usize {
    self.0
  }

  /// Wraps a value in a Loc.
  pub fn wrap<T>(self, val: T) -> Located<T> {
    Located { val, loc: self }
  }
}

impl fmt::Display for Loc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A generic wrapper for some value which was ultimately derived from some
/// location in the source.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct Located<T> {
  /// The value.
  pub val: T,
  /// The location of the value.
  pub loc: Loc,
}

impl<T> Located<T> {
  /// Wraps a new value at the same location.
  pub fn wrap<U>(&self, val: U) -> Located<U> {
    Located {
      val,
      loc: self.loc,
    }
  }
}

impl<T> fmt::Debug for Located<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.val.fmt(f)
  }
}
