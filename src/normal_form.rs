/*

# Normalization

`Union` and `Intersect` are associative and commutative, so two trees can denote the same expression while differing
in the order of their children. A _commutative normal form_ (C-normal form) of a tree is obtained by rearranging the
children of every commutative node into ascending order with respect to a fixed total order on trees. Two trees are
equal modulo child order exactly when their C-normal forms are structurally equal.

The total order is arbitrary but fixed. Different kinds of node are ordered by kind:

    Universal < Null < Term < Union < Intersect < Complement

Terms are ordered by name. Operators of the same kind are compared lexicographically by their children, and then by
length. The simplifier applies the idempotent law with a variant that orders terms by interning order, which gives the same
equality modulo child order without resolving names.

*/

use std::cmp::Ordering;

use crate::{
  interner::{compare, Identifier},
  node::{Node, NodeKind}
};

/// A total order on nodes.
///
/// The total ordering does not use Rust's in-built `Ord` trait, because the ordering exists only to pick a
/// representative among equivalent trees and should not leak into sorting done by callers.
pub trait NormalFormOrder {
  fn cmp(&self, other: &Self) -> Ordering;

  fn is_equal(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }

  fn is_greater(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Greater
  }

  fn is_less(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Less
  }
}


impl NormalFormOrder for Node {
  fn cmp(&self, other: &Self) -> Ordering {
    compare_nodes(self, other, &|s: Identifier, t: Identifier| compare(s, t))
  }
}


/// The total order on nodes, parameterized by the order on term identifiers.
fn compare_nodes(left: &Node, right: &Node, terms: &dyn Fn(Identifier, Identifier) -> Ordering) -> Ordering {
  match (left, right) {

    // Same node type //

    (Node::Universal, Node::Universal)
    | (Node::Null, Node::Null) => Ordering::Equal,

    (Node::Term(s), Node::Term(t)) => terms(*s, *t),

    (Node::Complement(s), Node::Complement(t)) => compare_nodes(&**s, &**t, terms),

    (Node::Union(f), Node::Union(g))
    | (Node::Intersect(f), Node::Intersect(g)) => {
      for (l, r) in f.iter().zip(g.iter()) {
        let ordering = compare_nodes(l, r, terms);
        if ordering != Ordering::Equal {
          return ordering;
        }
      }
      // If we get this far, the children compared pairwise have been equal. Compare lengths.
      f.len().cmp(&g.len())
    }

    // Different node types //
    (thing_one, thing_two) => kind_rank(thing_one.kind()).cmp(&kind_rank(thing_two.kind())),

  } // end match (left, right)
}


fn kind_rank(kind: NodeKind) -> u32 {
  match kind {
    NodeKind::Universal  => 0,
    NodeKind::Null       => 1,
    NodeKind::Term       => 2,
    NodeKind::Union      => 3,
    NodeKind::Intersect  => 4,
    NodeKind::Complement => 5,
  }
}


impl Node {
  /// Returns a copy of `self` in commutative normal form.
  pub fn commutative_normal_form(&self) -> Node {
    self.sorted_by(&|s: Identifier, t: Identifier| compare(s, t))
  }

  /// Are `self` and `other` the same expression up to the order of children?
  pub fn equivalent_modulo_order(&self, other: &Node) -> bool {
    self.commutative_normal_form() == other.commutative_normal_form()
  }

  /// A copy of `self` with commutative children sorted with terms in interning order rather than by name. Two trees
  /// have equal keys exactly when they are equal modulo child order, and building a key never touches the interner
  /// lock. Keys are only comparable within one process.
  pub(crate) fn dedup_key(&self) -> Node {
    self.sorted_by(&|s: Identifier, t: Identifier| s.interning_order(&t))
  }

  fn sorted_by(&self, terms: &dyn Fn(Identifier, Identifier) -> Ordering) -> Node {
    match self {
      Node::Universal
      | Node::Null
      | Node::Term(_) => self.clone(),

      Node::Complement(child) => Node::complement(child.sorted_by(terms)),

      Node::Union(children)
      | Node::Intersect(children) => {
        let mut sorted: Vec<Node> = children.iter().map(|child| child.sorted_by(terms)).collect();
        sorted.sort_by(|l, r| compare_nodes(l, r, terms));
        Node::n_ary(self.kind(), sorted)
      }
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn term(name: &str) -> Node {
    Node::term(name)
  }

  #[test]
  fn kinds_are_ordered() {
    let union = Node::union(vec![term("a"), term("b")]).unwrap();
    let intersect = Node::intersect(vec![term("a"), term("b")]).unwrap();

    assert!(Node::Universal.is_less(&Node::Null));
    assert!(Node::Null.is_less(&term("a")));
    assert!(term("zzz").is_less(&union));
    assert!(union.is_less(&intersect));
    assert!(intersect.is_less(&Node::complement(term("a"))));
  }

  #[test]
  fn terms_are_ordered_by_name() {
    assert!(term("apple").is_less(&term("banana")));
    assert!(term("b").is_greater(&term("a")));
    assert!(term("a").is_equal(&term("a")));
  }

  #[test]
  fn shorter_operator_sorts_first() {
    let short = Node::union(vec![term("a"), term("b")]).unwrap();
    let long = Node::union(vec![term("a"), term("b"), term("c")]).unwrap();

    assert!(short.is_less(&long));
  }

  #[test]
  fn normal_form_sorts_recursively() {
    let node = Node::union(vec![
      Node::intersect(vec![term("d"), term("c")]).unwrap(),
      term("b"),
      Node::complement(Node::union(vec![term("y"), term("x")]).unwrap()),
    ]).unwrap();

    let expected = Node::union(vec![
      term("b"),
      Node::intersect(vec![term("c"), term("d")]).unwrap(),
      Node::complement(Node::union(vec![term("x"), term("y")]).unwrap()),
    ]).unwrap();

    assert_eq!(node.commutative_normal_form(), expected);
  }

  #[test]
  fn equivalence_ignores_order_only() {
    let left = Node::intersect(vec![term("a"), Node::union(vec![term("b"), term("c")]).unwrap()]).unwrap();
    let right = Node::intersect(vec![Node::union(vec![term("c"), term("b")]).unwrap(), term("a")]).unwrap();
    let different = Node::intersect(vec![term("a"), Node::intersect(vec![term("b"), term("c")]).unwrap()]).unwrap();

    assert!(left.equivalent_modulo_order(&right));
    assert!(!left.equivalent_modulo_order(&different));
  }

  #[test]
  fn dedup_key_matches_equivalence() {
    let left = Node::union(vec![term("q"), Node::intersect(vec![term("p"), term("r")]).unwrap()]).unwrap();
    let right = Node::union(vec![Node::intersect(vec![term("r"), term("p")]).unwrap(), term("q")]).unwrap();
    let different = Node::union(vec![term("q"), Node::union(vec![term("p"), term("r")]).unwrap()]).unwrap();

    assert_eq!(left.dedup_key(), right.dedup_key());
    assert_ne!(left.dedup_key(), different.dedup_key());
    assert!(left.equivalent_modulo_order(&right));
  }
}
