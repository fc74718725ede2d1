/*!

  A `Formatter` holds information about how to format a node, that is, how to express the node as a string.

  "Formatting" needs to be distinct from Rust's standard `Display` trait, because nodes are formatted differently
  depending on the context. The standard form uses the usual set notation, the ASCII form is for terminals and logs
  that can't be trusted with Unicode, and the full form spells every operator out as a head with bracketed
  arguments. Independently of the form, the children of every `Union` and `Intersect` can be sorted by their own text,
  which makes the rendering insensitive to child order.

*/

use strum::EnumString;

use crate::node::Node;


#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumString, Hash)]
pub enum DisplayForm {
  /// `(a ∪ b′)`, `𝕌`, `∅`
  #[strum(serialize = "StandardForm", serialize = "standard")]
  Standard,
  /// `(a | b')`, `U`, `0`
  #[strum(serialize = "AsciiForm", serialize = "ascii")]
  Ascii,
  /// `Union[a, Complement[b]]`, `Universal`, `Null`
  #[strum(serialize = "FullForm", serialize = "full")]
  Full,
}

impl Default for DisplayForm {
  fn default() -> DisplayForm {
    DisplayForm::Standard
  }
}


/// Parameters used in methods that transform nodes into strings.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
pub struct Formatter {
  pub form: DisplayForm,
  /// Sort the children of `Union` and `Intersect` lexicographically by their text.
  pub sort: bool,
}

impl Formatter {
  pub fn sorted() -> Formatter {
    Formatter {
      form: DisplayForm::default(),
      sort: true,
    }
  }

  pub fn with_sort(self, sort: bool) -> Formatter {
    Formatter { sort, ..self }
  }
}

impl From<DisplayForm> for Formatter {
  fn from(form: DisplayForm) -> Self {
    Formatter {
      form,
      sort: false,
    }
  }
}


pub trait Formattable {
  fn format(&self, formatter: &Formatter) -> String;
}


macro_rules! display_formattable_impl {
  ($type_name:ty) => {
    impl std::fmt::Display for $type_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(&Formatter::default()))
      }
    }
  }
}


struct Notation {
  universal : &'static str,
  null      : &'static str,
  complement: &'static str,
  union     : &'static str,
  intersect : &'static str,
}

const STANDARD_NOTATION: Notation = Notation {
  universal : "𝕌",
  null      : "∅",
  complement: "′",
  union     : " ∪ ",
  intersect : " ∩ ",
};

const ASCII_NOTATION: Notation = Notation {
  universal : "U",
  null      : "0",
  complement: "'",
  union     : " | ",
  intersect : " & ",
};


impl Formattable for Node {
  fn format(&self, formatter: &Formatter) -> String {
    let notation = match formatter.form {
      DisplayForm::Standard => &STANDARD_NOTATION,
      DisplayForm::Ascii    => &ASCII_NOTATION,
      DisplayForm::Full     => return format_full(self, formatter),
    };

    match self {
      Node::Universal => notation.universal.to_string(),
      Node::Null      => notation.null.to_string(),
      Node::Term(identifier) => identifier.resolve(),

      Node::Complement(child) => format!("{}{}", child.format(formatter), notation.complement),

      Node::Union(children) => format!("({})", format_children(children, formatter).join(notation.union)),

      Node::Intersect(children) => format!("({})", format_children(children, formatter).join(notation.intersect)),
    }
  }
}

fn format_full(node: &Node, formatter: &Formatter) -> String {
  match node {
    Node::Universal
    | Node::Null => node.kind().to_string(),

    Node::Term(identifier) => identifier.resolve(),

    _ => format!("{}[{}]", node.kind(), format_children(node.children(), formatter).join(", ")),
  }
}

fn format_children(children: &[Node], formatter: &Formatter) -> Vec<String> {
  let mut texts: Vec<String> = children.iter().map(|child| child.format(formatter)).collect();
  if formatter.sort {
    texts.sort();
  }
  texts
}

display_formattable_impl!(Node);


/// Renders `node` in the standard form, optionally sorting children.
pub fn to_string(node: &Node, sort: bool) -> String {
  node.format(&Formatter::default().with_sort(sort))
}
