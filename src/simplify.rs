/*!

Simplification rewrites a tree bottom-up into a locally minimal equivalent. Children are simplified first, then the
laws of set algebra are applied to the node itself.

For `Complement`:

  1. De Morgan's law: `(a ∪ b)′ = a′ ∩ b′` and `(a ∩ b)′ = a′ ∪ b′`.
  2. Involution: `a′′ = a`.
  3. Complement of the absolute sets: `𝕌′ = ∅`, `∅′ = 𝕌`.

For `Union` and `Intersect`, in order:

  1. Associativity: children of the same kind are spliced into the node.
  2. Identity: `a ∪ ∅ = a`, `a ∩ 𝕌 = a`.
  3. Annihilation: `a ∪ 𝕌 = 𝕌`, `a ∩ ∅ = ∅`.
  4. Idempotence: `a ∪ a = a`. Children are duplicates if they are equal up to the order of their children. The
     first occurrence is kept.
  5. Complement: `a ∪ a′ = 𝕌`, `a ∩ a′ = ∅`, for terms `a`.
  6. Absorption: `a ∪ (a ∩ b) = a`, `a ∩ (a ∪ b) = a`. Only a literal sibling absorbs a composite child, and only
     when the literal appears among the composite's own children. Composite-vs-composite redundancy such as
     `(a ∩ b) ∪ (a ∩ b ∩ c)` is left alone.

A `Union` or `Intersect` left with a single child is replaced by that child. One left with no children is replaced by
the identity of its operator.

*/

use fnv::FnvHashSet;
use smallvec::SmallVec;

use crate::{
  format::{Formattable, Formatter},
  logging::{log, verbosity_is_at_least, Channel},
  node::{Literal, Node, NodeKind},
};


/// Returns the simplified equivalent of `node`.
pub fn simplify(node: &Node) -> Node {
  match node {
    Node::Universal
    | Node::Null
    | Node::Term(_) => node.clone(),

    Node::Complement(child) => complement_of_simplified(simplify(child)),

    Node::Union(children)
    | Node::Intersect(children) => {
      let simple_children = children.iter().map(simplify).collect();
      let result = normalize(node.kind(), simple_children);
      trace("simplify", node, &result);
      result
    }
  }
}


/// The simplified complement of an already simplified node.
fn complement_of_simplified(simple: Node) -> Node {
  let kind = simple.kind();
  match simple {
    Node::Union(_)
    | Node::Intersect(_) => {
      // De Morgan. Grandchildren of a simplified node are simplified.
      let complements = simple.into_children().into_iter().map(complement_of_simplified).collect();
      normalize(kind.dual(), complements)
    }

    // Involution
    Node::Complement(grandchild) => *grandchild,

    // Keeps De Morgan and involution valid for trees that collapse to an absolute set.
    Node::Universal => Node::Null,
    Node::Null      => Node::Universal,

    other => Node::complement(other),
  }
}


/// Applies the `Union`/`Intersect` laws to a node of kind `kind` whose children are already simplified.
pub(crate) fn normalize(kind: NodeKind, children: Vec<Node>) -> Node {
  let (identity, absorbing) = match kind {
    NodeKind::Union     => (Node::Null, Node::Universal),
    NodeKind::Intersect => (Node::Universal, Node::Null),
    other => unreachable!("Cannot normalize a node of kind {}. This is a bug.", other),
  };

  // Associativity
  let mut survivors: Vec<Node> = Vec::with_capacity(children.len());
  for child in children {
    if child.kind() == kind {
      survivors.extend(child.into_children());
    } else {
      survivors.push(child);
    }
  }

  // Identity
  survivors.retain(|child| *child != identity);

  // Annihilation
  if survivors.contains(&absorbing) {
    return absorbing;
  }

  // Idempotence
  let mut seen: FnvHashSet<Node> = FnvHashSet::default();
  survivors.retain(|child| seen.insert(child.dedup_key()));

  let singles: SmallVec<[Literal; 8]> = survivors.iter().filter_map(Node::literal).collect();

  // Complement
  if singles.iter().any(|literal| singles.contains(&literal.negated())) {
    return absorbing;
  }

  // Absorption
  survivors.retain(
    |child| !(child.is_composite() && child.children().iter().filter_map(Node::literal).any(|l| singles.contains(&l)))
  );

  if survivors.len() > 1 {
    Node::n_ary(kind, survivors)
  } else {
    // Nothing left but identities, so the node equals the identity. Keeps `a ∪ ∅ = a` valid for `a = ∅`.
    survivors.pop().unwrap_or(identity)
  }
}


fn trace(step: &str, before: &Node, after: &Node) {
  if verbosity_is_at_least(5) && before != after {
    let formatter = Formatter::default();
    log(
      Channel::Debug,
      5,
      format!("{}: {} -> {}", step, before.format(&formatter), after.format(&formatter)).as_str()
    );
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn term(name: &str) -> Node {
    Node::term(name)
  }

  fn union(children: Vec<Node>) -> Node {
    Node::union(children).unwrap()
  }

  fn intersect(children: Vec<Node>) -> Node {
    Node::intersect(children).unwrap()
  }

  fn not(child: Node) -> Node {
    Node::complement(child)
  }

  #[test]
  fn noop() {
    let node = intersect(vec![term("beep"), term("boop")]);
    assert_eq!(simplify(&node), node);

    let node = union(vec![term("beep"), term("boop")]);
    assert_eq!(simplify(&node), node);

    assert_eq!(simplify(&term("a")), term("a"));
    assert_eq!(simplify(&Node::Universal), Node::Universal);
  }

  #[test]
  fn flattens_same_kind() {
    let node = intersect(vec![term("a"), intersect(vec![term("b"), term("c")])]);
    assert_eq!(simplify(&node), intersect(vec![term("a"), term("b"), term("c")]));
  }

  #[test]
  fn does_not_flatten_opposite_kind() {
    let node = intersect(vec![term("a"), union(vec![term("b"), term("c")])]);
    assert_eq!(simplify(&node), node);
  }

  #[test]
  fn identity_laws() {
    let a = union(vec![term("a"), term("b")]);
    assert_eq!(simplify(&union(vec![a.clone(), Node::Null])), a);
    assert_eq!(simplify(&intersect(vec![term("a"), Node::Universal])), term("a"));
    assert_eq!(
      simplify(&intersect(vec![term("a"), Node::Universal, term("b")])),
      intersect(vec![term("a"), term("b")])
    );
  }

  #[test]
  fn empty_after_identity_is_identity() {
    assert_eq!(simplify(&union(vec![Node::Null, Node::Null])), Node::Null);
    assert_eq!(simplify(&intersect(vec![Node::Universal, Node::Universal])), Node::Universal);
  }

  #[test]
  fn annihilation_laws() {
    assert_eq!(simplify(&union(vec![term("a"), Node::Universal, term("b")])), Node::Universal);
    assert_eq!(simplify(&intersect(vec![term("a"), Node::Null])), Node::Null);
    assert_eq!(simplify(&union(vec![Node::Null, Node::Universal])), Node::Universal);
  }

  #[test]
  fn complement_laws() {
    assert_eq!(simplify(&union(vec![not(term("a")), term("a")])), Node::Universal);
    assert_eq!(simplify(&intersect(vec![term("a"), term("b"), not(term("a"))])), Node::Null);
    assert_eq!(
      simplify(&union(vec![not(term("a")), term("b")])),
      union(vec![not(term("a")), term("b")])
    );
  }

  #[test]
  fn involution() {
    assert_eq!(simplify(&not(not(term("a")))), term("a"));
    assert_eq!(simplify(&not(not(not(term("a"))))), not(term("a")));
  }

  #[test]
  fn de_morgan() {
    let left = simplify(&not(union(vec![term("a"), term("b")])));
    let right = simplify(&intersect(vec![not(term("a")), not(term("b"))]));
    assert_eq!(left, right);
    assert_eq!(left, intersect(vec![not(term("a")), not(term("b"))]));

    let node = not(intersect(vec![not(term("A")), not(term("B"))]));
    assert_eq!(simplify(&node), union(vec![term("A"), term("B")]));
  }

  #[test]
  fn de_morgan_nested() {
    // (a ∪ (b ∩ c))′ = a′ ∩ (b′ ∪ c′)
    let node = not(union(vec![term("a"), intersect(vec![term("b"), term("c")])]));
    assert_eq!(
      simplify(&node),
      intersect(vec![not(term("a")), union(vec![not(term("b")), not(term("c"))])])
    );
  }

  #[test]
  fn complement_of_absolute_sets() {
    assert_eq!(simplify(&not(Node::Universal)), Node::Null);
    assert_eq!(simplify(&not(Node::Null)), Node::Universal);
    assert_eq!(simplify(&not(union(vec![term("a"), not(term("a"))]))), Node::Null);
  }

  #[test]
  fn absorption() {
    let node = union(vec![term("A"), intersect(vec![term("A"), term("B")])]);
    assert_eq!(simplify(&node), term("A"));

    let node = intersect(vec![union(vec![term("b"), term("a")]), term("a"), term("c")]);
    assert_eq!(simplify(&node), intersect(vec![term("a"), term("c")]));

    let node = union(vec![not(term("a")), intersect(vec![not(term("a")), term("b")])]);
    assert_eq!(simplify(&node), not(term("a")));
  }

  #[test]
  fn absorption_respects_polarity() {
    let node = union(vec![not(term("a")), intersect(vec![term("a"), term("b")])]);
    assert_eq!(simplify(&node), node);
  }

  #[test]
  fn absorption_ignores_composite_siblings() {
    // Known limitation: (a ∩ b) ∪ (a ∩ b ∩ c) is not reduced to (a ∩ b).
    let node = union(vec![
      intersect(vec![term("a"), term("b")]),
      intersect(vec![term("a"), term("b"), term("c")]),
    ]);
    assert_eq!(simplify(&node), node);
  }

  #[test]
  fn idempotent_laws() {
    assert_eq!(simplify(&union(vec![term("a"), term("a")])), term("a"));
    assert_eq!(
      simplify(&union(vec![term("a"), term("b"), term("a")])),
      union(vec![term("a"), term("b")])
    );
  }

  #[test]
  fn duplicates_modulo_order() {
    let node = intersect(vec![
      union(vec![term("a"), term("b")]),
      union(vec![term("b"), term("a")]),
      term("c"),
    ]);
    assert_eq!(simplify(&node), intersect(vec![union(vec![term("a"), term("b")]), term("c")]));
  }

  #[test]
  fn simplify_is_idempotent() {
    let node = union(vec![
      not(intersect(vec![term("a"), not(term("b")), union(vec![term("c"), Node::Null])])),
      intersect(vec![term("d"), union(vec![term("e"), term("d")])]),
      term("f"),
    ]);
    let once = simplify(&node);
    assert_eq!(simplify(&once), once);
  }

  #[test]
  fn input_is_untouched() {
    let node = union(vec![term("a"), term("a")]);
    let copy = node.clone();
    let _ = simplify(&node);
    assert_eq!(node, copy);
  }
}
