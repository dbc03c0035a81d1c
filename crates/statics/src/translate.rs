//! Translation to intermediate code.
//!
//! The checker computes a translation for every expression it checks, but the
//! translation phase itself is a later pass. Until it lands, the translation
//! is this placeholder.

/// An intermediate-code expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exp;
