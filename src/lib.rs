/* Exports */

pub mod errors;
pub mod format;
pub mod model;
pub mod source;
pub mod rdf;
pub mod viewmodel;
pub mod dispatch;

pub use errors::{ViewModelError, ConversionError, ParserError};
pub use format::{ModelFormat, ViewModelKind, FormatRegistry};
pub use model::{GraphModel, Node, Link, TableModel, Row, TreeNode, JsonModel, ModelValues, SourceRef};
pub use source::{SourceResult, RdfSourceResult, JsonSourceResult};
pub use rdf::{RdfDataset, graph::{RdfToGraph, GraphOptions}, tabulator::{RdfTabulator, TabulationOptions}};
pub use viewmodel::{ViewModel, ConversionOptions, graph::GraphViewModel, table::TableViewModel, tree::{TreeViewModel, TreeOptions, ParentPolicy}};
pub use dispatch::Dispatcher;

/* Common Definitions */

pub type Result<T> = std::result::Result<T, ViewModelError>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize, Hash)]
pub enum RdfNode {
  Named{ iri: String },
  Blank{ id: String },
  RawLit{ val: String },
  LangTaggedLit{ val: String, lang: String },
  TypedLit{ val: String, datatype: String },
}
impl RdfNode {
  /* The string a view model sees: IRI, blank node id or lexical form */
  pub fn value(&self) -> &str {
    use RdfNode::*;
    match self {
      Named{ iri } => iri,
      Blank{ id } => id,
      RawLit{ val } | LangTaggedLit{ val, .. } | TypedLit{ val, .. } => val,
    }
  }
  pub fn is_literal(&self) -> bool {
    match self {
      RdfNode::RawLit{ .. } | RdfNode::LangTaggedLit{ .. } | RdfNode::TypedLit{ .. } => true,
      _ => false,
    }
  }
}
impl std::convert::From<&str> for RdfNode {
  fn from(s: &str) -> Self {
    Self::Named{ iri: s.to_string() }
  }
}

/// A triple, or a quad when `graph` is set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize, Hash)]
pub struct Statement {
  pub subject: RdfNode,
  pub predicate: RdfNode,
  pub object: RdfNode,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub graph: Option<RdfNode>,
}
impl Statement {
  pub fn new(subject: impl Into<RdfNode>, predicate: impl Into<RdfNode>, object: impl Into<RdfNode>) -> Self {
    Statement {
      subject: subject.into(),
      predicate: predicate.into(),
      object: object.into(),
      graph: None,
    }
  }
  pub fn in_graph(mut self, graph: impl Into<RdfNode>) -> Self {
    self.graph = Some(graph.into());
    self
  }
}

/// What the converters need from an RDF statement.
///
/// Only term values are read, plus whether the object is a literal so
/// that `LiteralPolicy::Skip` can drop literal objects.
pub trait RdfStatement {
  fn subject_value(&self) -> &str;
  fn predicate_value(&self) -> &str;
  fn object_value(&self) -> &str;
  fn object_is_literal(&self) -> bool;
  fn graph_value(&self) -> Option<&str> { None }
}
impl RdfStatement for Statement {
  fn subject_value(&self) -> &str { self.subject.value() }
  fn predicate_value(&self) -> &str { self.predicate.value() }
  fn object_value(&self) -> &str { self.object.value() }
  fn object_is_literal(&self) -> bool { self.object.is_literal() }
  fn graph_value(&self) -> Option<&str> { self.graph.as_ref().map(RdfNode::value) }
}
impl<T: RdfStatement + ?Sized> RdfStatement for &T {
  fn subject_value(&self) -> &str { (**self).subject_value() }
  fn predicate_value(&self) -> &str { (**self).predicate_value() }
  fn object_value(&self) -> &str { (**self).object_value() }
  fn object_is_literal(&self) -> bool { (**self).object_is_literal() }
  fn graph_value(&self) -> Option<&str> { (**self).graph_value() }
}
impl<'a> RdfStatement for rio_api::model::Triple<'a> {
  fn subject_value(&self) -> &str {
    use rio_api::model::NamedOrBlankNode;
    match &self.subject {
      NamedOrBlankNode::NamedNode(n) => n.iri,
      NamedOrBlankNode::BlankNode(b) => b.id,
    }
  }
  fn predicate_value(&self) -> &str { self.predicate.iri }
  fn object_value(&self) -> &str {
    use rio_api::model::{Term, Literal};
    match &self.object {
      Term::NamedNode(n) => n.iri,
      Term::BlankNode(b) => b.id,
      Term::Literal(Literal::Simple{ value })
      | Term::Literal(Literal::LanguageTaggedString{ value, .. })
      | Term::Literal(Literal::Typed{ value, .. }) => *value,
    }
  }
  fn object_is_literal(&self) -> bool {
    match &self.object {
      rio_api::model::Term::Literal(_) => true,
      _ => false,
    }
  }
}
