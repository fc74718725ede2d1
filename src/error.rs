//! Errors raised while constructing nodes. The rewrite operations themselves are total.

use thiserror::Error;

use crate::node::NodeKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
  #[error("{kind} is not an operator; only Union, Intersect, and Complement are supported")]
  InvalidKind { kind: NodeKind },
  #[error("{kind} requires {expected} children, found {found}")]
  InvalidArity {
    kind: NodeKind,
    expected: Arity,
    found: usize,
  },
}

/// The number of children an operator accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
  Exactly(usize),
  AtLeast(usize),
}

impl Arity {
  pub fn admits(&self, count: usize) -> bool {
    match self {
      Arity::Exactly(n) => count == *n,
      Arity::AtLeast(n) => count >= *n,
    }
  }
}

impl std::fmt::Display for Arity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Arity::Exactly(n) => write!(f, "exactly {}", n),
      Arity::AtLeast(n) => write!(f, "at least {}", n),
    }
  }
}
