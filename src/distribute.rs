/*!

The distributive law, `a ∪ (b ∩ c) = (a ∪ b) ∩ (a ∪ c)` and its dual `a ∩ (b ∪ c) = (a ∩ b) ∪ (a ∩ c)`.

`distribute` expands a `Union` (resp. `Intersect`) having at least one `Intersect` (resp. `Union`) child into an
`Intersect` (resp. `Union`) of the cross product. The expansion is not minimal, and its size grows with the product
of the sizes of the distributed children.

*/

use crate::{
  format::{Formattable, Formatter},
  logging::{log, verbosity_is_at_least, Channel},
  node::{Node, NodeKind},
  simplify::simplify,
};


/// Applies the distributive law to a `Union` or `Intersect`. Any other node, or a node without a child of the
/// opposite kind, is returned unchanged. The result is simplified.
pub fn distribute(node: &Node) -> Node {
  if !node.is_composite() {
    return node.clone();
  }

  let kind = node.kind();
  let dual = kind.dual();

  let (mut different, accumulator): (Vec<&Node>, Vec<&Node>)
      = node.children().iter().partition(|child| child.kind() == dual);

  if different.is_empty() {
    return node.clone();
  }

  let left: Node = match accumulator.len() {
    0 => different.remove(0).clone(),
    1 => accumulator[0].clone(),
    _ => Node::n_ary(kind, accumulator.into_iter().cloned().collect()),
  };

  let folded = different.into_iter().fold(left, |accum, right| {
    let combinations = right.children()
        .iter()
        .map(|grandchild| {
          let combined = Node::n_ary(kind, vec![accum.clone(), grandchild.clone()]);
          if accum.kind() == dual {
            distribute(&combined)
          } else {
            combined
          }
        })
        .collect();
    join(dual, combinations)
  });

  let result = simplify(&folded);

  if verbosity_is_at_least(4) {
    let formatter = Formatter::default();
    log(
      Channel::Debug,
      4,
      format!("distribute: {} -> {}", node.format(&formatter), result.format(&formatter)).as_str()
    );
  }

  result
}


/// Builds a node of kind `kind` over `parts`, splicing in the children of any part that is itself of kind `kind`.
/// `parts` must hold at least two nodes.
fn join(kind: NodeKind, parts: Vec<Node>) -> Node {
  let mut children = Vec::with_capacity(parts.len());
  for part in parts {
    if part.kind() == kind {
      children.extend(part.into_children());
    } else {
      children.push(part);
    }
  }
  Node::n_ary(kind, children)
}
