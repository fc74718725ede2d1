/*!
A global dictionary of interned term identifiers. Provides an abstraction API over the interner library so that the
rest of the crate only ever sees `Identifier`.

The dictionary is append-only and lives behind a mutex, so a `Term` built on one thread resolves to the same name on
any other thread.

*/

use std::{
  cmp::Ordering,
  sync::{Mutex, MutexGuard, PoisonError}
};

use lazy_static::lazy_static;
use string_interner::{DefaultSymbol, StringInterner, Symbol};

lazy_static! {
  static ref STRING_INTERNER: Mutex<StringInterner> = Mutex::new(StringInterner::default());
}

fn interner() -> MutexGuard<'static, StringInterner> {
  // The interner is never left half-updated, so a poisoned lock is still usable.
  STRING_INTERNER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The name of a term. Only obtainable by interning a string, so every `Identifier` resolves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Identifier(DefaultSymbol);

impl Identifier {
  /// The name this identifier was interned from.
  pub fn resolve(&self) -> String {
    let interner = interner();
    match interner.resolve(self.0) {
      Some(name) => name.to_owned(),
      None       => unknown_identifier()
    }
  }

  /// Orders identifiers by when they were first interned. Consistent within a process and needs no lock.
  pub(crate) fn interning_order(&self, other: &Identifier) -> Ordering {
    self.0.to_usize().cmp(&other.0.to_usize())
  }
}

/// Interns `name`, returning the identifier for it. Interning the same string twice gives the same identifier.
pub fn interned(name: &str) -> Identifier {
  Identifier(interner().get_or_intern(name))
}

/// Lexicographic comparison of the names behind two identifiers.
pub fn compare(left: Identifier, right: Identifier) -> Ordering {
  if left == right {
    return Ordering::Equal;
  }
  let interner = interner();
  match (interner.resolve(left.0), interner.resolve(right.0)) {
    (Some(l), Some(r)) => l.cmp(r),
    _                  => unknown_identifier()
  }
}

/// A critical error state.
fn unknown_identifier() -> ! {
  unreachable!("Encountered an identifier that was not produced by the interner. This is a bug.")
}
