//! String interning.
//!
//! Identifiers show up everywhere in a program, and the checker compares them
//! constantly: every environment lookup, every record field access, every
//! duplicate-binding check. Comparing heap-allocated Strings is O(len), and
//! cloning them allocates. So we intern: the first time we see a String we
//! hand out a fresh StrRef for it, and every later occurrence of the same
//! String gets the same StrRef. Comparing and copying StrRefs is O(1).
//!
//! To show an identifier to the user again, for instance in a diagnostic, look
//! it up in the StrStore made from the StrStoreMut that produced the StrRef.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

use rustc_hash::FxHashMap;
use std::fmt;

/// A reference to an interned string. To learn what string this represents,
/// ask the StrStore created from the StrStoreMut that returned this StrRef.
///
/// NOTE the PartialOrd and Ord implementations are based not on the ordering
/// of the strings represented, but on the internal IDs, which are handed out
/// in source order. Only use the ordering for deterministic iteration.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct StrRef(usize);

const SPECIAL_STR_REF: usize = 12;

impl fmt::Debug for StrRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0 < SPECIAL_STR_REF {
      write!(f, "StrRef(special: {})", self.0)
    } else {
      write!(f, "StrRef(regular: {})", self.0 - SPECIAL_STR_REF)
    }
  }
}

/// The built-in identifiers. These are pre-interned so the base environment
/// can mention them without a store in hand. New StrRefs should be appended to
/// the bottom.
#[allow(missing_docs)]
impl StrRef {
  pub const INT: Self = Self(0);
  pub const STRING: Self = Self(1);
  pub const PRINT: Self = Self(2);
  pub const FLUSH: Self = Self(3);
  pub const GETCHAR: Self = Self(4);
  pub const ORD: Self = Self(5);
  pub const CHR: Self = Self(6);
  pub const SIZE: Self = Self(7);
  pub const SUBSTRING: Self = Self(8);
  pub const CONCAT: Self = Self(9);
  pub const NOT: Self = Self(10);
  pub const EXIT: Self = Self(11);
}

/// A mutable factory of StrRefs. Allows creating new StrRefs from Strings.
#[derive(Debug)]
pub struct StrStoreMut {
  store: FxHashMap<String, StrRef>,
  next: usize,
}

impl StrStoreMut {
  /// Returns a new StrStoreMut containing only the special StrRefs.
  pub fn new() -> Self {
    let mut store = FxHashMap::with_capacity_and_hasher(
      SPECIAL_STR_REF,
      std::hash::BuildHasherDefault::default(),
    );
    macro_rules! ins {
      ($s:expr, $name:ident) => {
        assert!(store.insert($s.to_owned(), StrRef::$name).is_none());
      };
    }
    ins!("int", INT);
    ins!("string", STRING);
    ins!("print", PRINT);
    ins!("flush", FLUSH);
    ins!("getchar", GETCHAR);
    ins!("ord", ORD);
    ins!("chr", CHR);
    ins!("size", SIZE);
    ins!("substring", SUBSTRING);
    ins!("concat", CONCAT);
    ins!("not", NOT);
    ins!("exit", EXIT);
    assert_eq!(store.len(), SPECIAL_STR_REF);
    Self {
      next: SPECIAL_STR_REF,
      store,
    }
  }

  /// Inserts a string into this StrStoreMut. Returns a StrRef corresponding to
  /// that string.
  pub fn insert(&mut self, s: std::borrow::Cow<'_, str>) -> StrRef {
    if let Some(&id) = self.store.get(&*s) {
      return id;
    }
    let ret = StrRef(self.next);
    self.store.insert(s.into_owned(), ret);
    self.next += 1;
    ret
  }

  /// Converts this StrStoreMut into a StrStore, preventing further mutation.
  pub fn finish(self) -> StrStore {
    let mut store = vec![String::new(); self.store.len()];
    for (s, id) in self.store {
      // each index is assigned exactly once, based on the way we handed out
      // StrRefs.
      store[id.0] = s;
    }
    for s in store.iter() {
      assert!(!s.is_empty());
    }
    StrStore { store }
  }
}

impl Default for StrStoreMut {
  fn default() -> Self {
    Self::new()
  }
}

/// An immutable store of Strings. Allows looking up the String corresponding
/// to a StrRef.
#[derive(Debug)]
pub struct StrStore {
  store: Vec<String>,
}

impl StrStore {
  /// Returns the string slice corresponding to this StrRef.
  pub fn get(&self, id: StrRef) -> &str {
    self
      .store
      .get(id.0)
      .expect("gave a StrStore a StrRef that didn't come from its StrStoreMut")
      .as_str()
  }
}
