/*!

Conversion to the normal forms.

A tree is in _conjunctive normal form_ (CNF) when no `Intersect` occurs anywhere below a `Union`: it is an
intersection of clauses, each clause a union of literals. _Disjunctive normal form_ (DNF) is the dual, a union of
intersections of literals.

Both conversions work bottom-up. The node is simplified, its children are converted, and then, if the node is a clause
operator (`Union` for CNF, `Intersect` for DNF) with a child of the opposite kind, the distributive law pushes the
clause operator below the opposite operator. Because every converted child is already in normal form, one
distribution per level suffices, and the recursion ends at literals and absolute sets.

*/

use crate::{
  distribute::distribute,
  format::{Formattable, Formatter},
  logging::{log, verbosity_is_at_least, Channel},
  node::{Node, NodeKind},
  simplify::simplify,
};


/// Converts `node` to an equivalent tree in conjunctive normal form.
pub fn to_cnf(node: &Node) -> Node {
  let result = to_normal_form(node, NodeKind::Union);
  trace("to_cnf", node, &result);
  result
}

/// Converts `node` to an equivalent tree in disjunctive normal form.
pub fn to_dnf(node: &Node) -> Node {
  let result = to_normal_form(node, NodeKind::Intersect);
  trace("to_dnf", node, &result);
  result
}


/// `clause` is the operator that must not have an operator of the dual kind below it.
fn to_normal_form(node: &Node, clause: NodeKind) -> Node {
  let simple = simplify(node);
  if !simple.is_composite() {
    // Terms, absolute sets, and complements of those.
    return simple;
  }

  let kind = simple.kind();
  let converted: Vec<Node> = simple.children().iter().map(|child| to_normal_form(child, clause)).collect();
  let needs_distribution = kind == clause && converted.iter().any(|child| child.kind() == clause.dual());
  let rebuilt = Node::n_ary(kind, converted);

  if needs_distribution {
    distribute(&rebuilt)
  } else {
    // Converted children may have collapsed to the same kind as `rebuilt`.
    simplify(&rebuilt)
  }
}


/// Is `node` a literal, an absolute set, or the complement of an absolute set?
fn is_atomic(node: &Node) -> bool {
  match node {
    Node::Universal
    | Node::Null
    | Node::Term(_) => true,

    Node::Complement(child) => matches!(&**child, Node::Universal | Node::Null | Node::Term(_)),

    Node::Union(_)
    | Node::Intersect(_) => false,
  }
}

/// Does `node` consist only of `kind` operators over atomic nodes?
fn is_clause(node: &Node, kind: NodeKind) -> bool {
  if node.kind() == kind {
    node.children().iter().all(|child| is_clause(child, kind))
  } else {
    is_atomic(node)
  }
}

fn is_normal_form(node: &Node, clause: NodeKind) -> bool {
  if node.kind() == clause.dual() {
    node.children().iter().all(|child| is_normal_form(child, clause))
  } else {
    is_clause(node, clause)
  }
}

/// Is `node` an intersection of unions of literals? Absolute sets count as literals.
pub fn is_cnf(node: &Node) -> bool {
  is_normal_form(node, NodeKind::Union)
}

/// Is `node` a union of intersections of literals? Absolute sets count as literals.
pub fn is_dnf(node: &Node) -> bool {
  is_normal_form(node, NodeKind::Intersect)
}


fn trace(step: &str, before: &Node, after: &Node) {
  if verbosity_is_at_least(4) {
    let formatter = Formatter::default();
    log(
      Channel::Debug,
      4,
      format!("{}: {} -> {}", step, before.format(&formatter), after.format(&formatter)).as_str()
    );
  }
}
