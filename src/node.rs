/*!

A `Node` is a set algebra expression: one of the absolute sets `Universal` (𝕌) and `Null` (∅), a named `Term`, or an
operator applied to child expressions. The set of variants is closed, so every operation on expressions is an
exhaustive `match`. We use `EnumDiscriminants` from `strum` to derive the `NodeKind` enum whose variants are only the
names (no data) of the variants in `Node`.

Nodes are immutable values. Every transformation produces a new tree and leaves its input untouched.

# Arity

`Union` and `Intersect` are commutative and associative and take two or more children. `Complement` takes exactly
one. The children of a `Union` or `Intersect` live in `Operands`, which can only be constructed inside this crate
after the arity has been checked, so a malformed node cannot exist. The checked constructors are `Node::operator`,
`Node::union`, and `Node::intersect`. A `Complement` holds a single boxed child and needs no check.

*/

use std::{
  hash::{Hash, Hasher},
  ops::Deref
};

use fnv::FnvHasher;
use strum_macros::{Display, EnumDiscriminants, EnumString, IntoStaticStr};

use crate::{
  cnf::{to_cnf, to_dnf},
  distribute::distribute,
  error::{Arity, NodeError},
  interner::{interned, Identifier},
  logging::{log, Channel},
  simplify::simplify,
};


#[derive(Clone, PartialEq, Eq, Debug, EnumDiscriminants)]
#[strum_discriminants(name(NodeKind))]
#[strum_discriminants(derive(Display, EnumString, IntoStaticStr, Hash))]
pub enum Node {
  /// The absolute set containing everything.
  Universal,
  /// The empty set.
  Null,
  /// An atomic named set.
  Term(Identifier),
  Union(Operands),
  Intersect(Operands),
  Complement(Box<Node>),
}


/// The children of a `Union` or `Intersect`. Always holds at least two nodes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Operands(Vec<Node>);

impl Operands {
  pub fn into_vec(self) -> Vec<Node> {
    self.0
  }
}

impl Deref for Operands {
  type Target = [Node];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}


/// A term or the complement of a term.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Literal {
  pub identifier: Identifier,
  /// False for a complemented term.
  pub positive: bool,
}

impl Literal {
  pub fn negated(&self) -> Literal {
    Literal {
      identifier: self.identifier,
      positive: !self.positive,
    }
  }
}


impl NodeKind {
  /// The number of children a node of this kind takes, or `None` if the kind is not an operator.
  pub fn arity(&self) -> Option<Arity> {
    match self {
      NodeKind::Union
      | NodeKind::Intersect  => Some(Arity::AtLeast(2)),
      NodeKind::Complement   => Some(Arity::Exactly(1)),
      NodeKind::Universal
      | NodeKind::Null
      | NodeKind::Term       => None,
    }
  }

  pub fn is_operator(&self) -> bool {
    self.arity().is_some()
  }

  /// `Union` and `Intersect` swap roles under De Morgan's law and the distributive law. Every other kind is its own
  /// dual.
  pub fn dual(&self) -> NodeKind {
    match self {
      NodeKind::Union     => NodeKind::Intersect,
      NodeKind::Intersect => NodeKind::Union,
      other               => *other,
    }
  }
}


impl Node {

  // region Construction

  /// Creates a term named `name`.
  pub fn term(name: &str) -> Node {
    Node::Term(interned(name))
  }

  /// Creates an operator node of the given kind, checking that `kind` is an operator and that it accepts the number
  /// of children given.
  pub fn operator(kind: NodeKind, mut children: Vec<Node>) -> Result<Node, NodeError> {
    let arity = match kind.arity() {
      Some(arity) => arity,
      None => {
        log(Channel::Error, 1, format!("Cannot construct an operator of kind {}.", kind).as_str());
        return Err(NodeError::InvalidKind { kind });
      }
    };

    if !arity.admits(children.len()) {
      log(
        Channel::Error,
        1,
        format!("{} constructed with {} children.", kind, children.len()).as_str()
      );
      return Err(NodeError::InvalidArity { kind, expected: arity, found: children.len() });
    }

    if kind == NodeKind::Complement {
      if let Some(child) = children.pop() {
        return Ok(Node::complement(child));
      }
    }
    Ok(Node::n_ary(kind, children))
  }

  pub fn union(children: Vec<Node>) -> Result<Node, NodeError> {
    Node::operator(NodeKind::Union, children)
  }

  pub fn intersect(children: Vec<Node>) -> Result<Node, NodeError> {
    Node::operator(NodeKind::Intersect, children)
  }

  pub fn complement(child: Node) -> Node {
    Node::Complement(Box::new(child))
  }

  /// Creates a `Union` or `Intersect` without checking arity. For use by the rewrite engine, which only builds nodes
  /// from two or more children.
  pub(crate) fn n_ary(kind: NodeKind, children: Vec<Node>) -> Node {
    debug_assert!(children.len() >= 2, "{} built with {} children", kind, children.len());
    match kind {
      NodeKind::Union     => Node::Union(Operands(children)),
      NodeKind::Intersect => Node::Intersect(Operands(children)),
      other => unreachable!("{} is not an n-ary operator. This is a bug.", other),
    }
  }

  // endregion

  // region Accessors

  /// Reports the `NodeKind` of `self`.
  pub fn kind(&self) -> NodeKind {
    self.into()
  }

  /// The immediate children: empty for `Universal`, `Null`, and `Term`, a single node for `Complement`.
  pub fn children(&self) -> &[Node] {
    match self {
      Node::Universal
      | Node::Null
      | Node::Term(_) => &[],

      Node::Union(children)
      | Node::Intersect(children) => children,

      Node::Complement(child) => std::slice::from_ref(&**child),
    }
  }

  /// Consumes `self`, giving up its children.
  pub fn into_children(self) -> Vec<Node> {
    match self {
      Node::Universal
      | Node::Null
      | Node::Term(_) => Vec::new(),

      Node::Union(children)
      | Node::Intersect(children) => children.into_vec(),

      Node::Complement(child) => vec![*child],
    }
  }

  pub fn identifier(&self) -> Option<Identifier> {
    match self {
      Node::Term(identifier) => Some(*identifier),
      _                      => None,
    }
  }

  /// The name of a term.
  pub fn term_name(&self) -> Option<String> {
    self.identifier().map(|identifier| identifier.resolve())
  }

  /// Is `self` `Universal` or `Null`?
  pub fn is_absolute(&self) -> bool {
    matches!(self, Node::Universal | Node::Null)
  }

  /// Is `self` a `Union` or an `Intersect`?
  pub fn is_composite(&self) -> bool {
    matches!(self, Node::Union(_) | Node::Intersect(_))
  }

  /// If `self` is a term or the complement of a term, returns it as a `Literal`.
  pub fn literal(&self) -> Option<Literal> {
    match self {
      Node::Term(identifier) => Some(Literal { identifier: *identifier, positive: true }),
      Node::Complement(child) => match &**child {
        Node::Term(identifier) => Some(Literal { identifier: *identifier, positive: false }),
        _ => None,
      },
      _ => None,
    }
  }

  pub fn is_literal(&self) -> bool {
    self.literal().is_some()
  }

  /// The number of nodes in the tree.
  pub fn size(&self) -> usize {
    1 + self.children().iter().map(Node::size).sum::<usize>()
  }

  /// The length of the longest path from `self` to a leaf. A leaf has depth 0.
  pub fn depth(&self) -> usize {
    self.children()
        .iter()
        .map(|child| child.depth() + 1)
        .max()
        .unwrap_or(0)
  }

  // endregion

  // region Rewriting

  pub fn simplify(&self) -> Node {
    simplify(self)
  }

  pub fn distribute(&self) -> Node {
    distribute(self)
  }

  pub fn to_cnf(&self) -> Node {
    to_cnf(self)
  }

  pub fn to_dnf(&self) -> Node {
    to_dnf(self)
  }

  // endregion

  /**
  Structural hash of the tree. Terms that merely share a name with an operator's rendering must still hash
  differently, so each variant hashes a prefix before its data.

    universal : [20 , 133, 9  , 61 , 250, 12 , 77 , 201]
    null      : [168, 33 , 90 , 4  , 147, 219, 6  , 52]
    term      : [107, 10 , 247, 23 , 33 , 221, 163, 156]
    union     : [72 , 5  , 244, 86 , 5  , 210, 69 , 30]
    intersect : [1  , 207, 143, 106, 203, 58 , 96 , 148]
    complement: [174, 52 , 210, 181, 122, 46 , 205, 101]

  */
  pub fn hashed(&self) -> u64 {
    let mut hasher = FnvHasher::default();
    self.hash_into(&mut hasher);
    hasher.finish()
  }

  fn hash_into(&self, hasher: &mut FnvHasher) {
    match self {
      Node::Universal => hasher.write(&[20 , 133, 9  , 61 , 250, 12 , 77 , 201]),
      Node::Null      => hasher.write(&[168, 33 , 90 , 4  , 147, 219, 6  , 52]),

      Node::Term(identifier) => {
        hasher.write(&[107, 10 , 247, 23 , 33 , 221, 163, 156]);
        identifier.hash(hasher);
      }

      Node::Union(children) => {
        hasher.write(&[72 , 5  , 244, 86 , 5  , 210, 69 , 30]);
        hasher.write_usize(children.len());
        for child in children.iter() {
          child.hash_into(hasher);
        }
      }

      Node::Intersect(children) => {
        hasher.write(&[1  , 207, 143, 106, 203, 58 , 96 , 148]);
        hasher.write_usize(children.len());
        for child in children.iter() {
          child.hash_into(hasher);
        }
      }

      Node::Complement(child) => {
        hasher.write(&[174, 52 , 210, 181, 122, 46 , 205, 101]);
        child.hash_into(hasher);
      }
    }
  }
}


impl Hash for Node {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_u64(self.hashed())
  }
}


impl From<&str> for Node {
  fn from(name: &str) -> Self {
    Node::term(name)
  }
}


impl From<Identifier> for Node {
  fn from(identifier: Identifier) -> Self {
    Node::Term(identifier)
  }
}
