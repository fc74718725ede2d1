/*!

A term rewriting engine for set algebra.

Expressions are trees of terms combined with union, intersection, and complement, together with the absolute sets
universal (𝕌) and null (∅). The engine rewrites a tree into a canonical simplified form (`simplify`), applies the
distributive law (`distribute`), and converts trees to conjunctive or disjunctive normal form (`to_cnf`, `to_dnf`).

```
use setalg::{Node, to_cnf};

let a = Node::term("a");
let b_and_c = Node::intersect(vec![Node::term("b"), Node::term("c")]).unwrap();
let node = Node::union(vec![a, b_and_c]).unwrap();

assert_eq!(to_cnf(&node).to_string(), "((a ∪ b) ∩ (a ∪ c))");
```

*/

mod cnf;
mod distribute;
mod error;
mod format;
mod interner;
mod node;
mod normal_form;
mod simplify;
pub mod logging;

pub use cnf::{is_cnf, is_dnf, to_cnf, to_dnf};
pub use distribute::distribute;
pub use error::{Arity, NodeError};
pub use format::{to_string, DisplayForm, Formattable, Formatter};
pub use interner::Identifier;
pub use node::{Literal, Node, NodeKind, Operands};
pub use normal_form::NormalFormOrder;
pub use simplify::simplify;
