use {
  serde::{Serialize, Deserialize, Deserializer},
  serde_json::{Map, Number, Value},
  crate::format::ModelFormat,
};

/* Fields a renderer added to a node or link (x, y, colour...)
   survive a structural copy through these maps. */
pub type Extra = Map<String, Value>;

/// One table row, keyed by column name.
pub type Row = Map<String, Value>;

pub const DEFAULT_GROUP: u64 = 1;

fn default_group() -> Number { DEFAULT_GROUP.into() }
fn default_value() -> Number { 1u64.into() }

/* A link end is a node id, or the node object itself once a
   force layout has resolved it. */
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkEnd {
  Id(String),
  Node{ id: String },
}

fn link_end<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
  Ok(match LinkEnd::deserialize(deserializer)? {
    LinkEnd::Id(id) | LinkEnd::Node{ id } => id,
  })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  #[serde(default = "default_group")]
  pub group: Number,
  #[serde(flatten)]
  pub extra: Extra,
}
impl Node {
  pub fn new(id: impl Into<String>) -> Self {
    Node {
      id: id.into(),
      group: default_group(),
      extra: Extra::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
  #[serde(deserialize_with = "link_end")]
  pub source: String,
  #[serde(deserialize_with = "link_end")]
  pub target: String,
  #[serde(default = "default_value")]
  pub value: Number,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
  #[serde(flatten)]
  pub extra: Extra,
}
impl Link {
  pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
    Link {
      source: source.into(),
      target: target.into(),
      value: default_value(),
      label: None,
      extra: Extra::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphModel {
  pub nodes: Vec<Node>,
  pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableModel {
  pub header: Vec<String>,
  pub rows: Vec<Row>,
}

/// A graph node placed in a tree: `index` is its position,
/// `parent` the index of its parent (absent for roots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
  pub id: String,
  #[serde(default = "default_group")]
  pub group: Number,
  pub index: usize,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parent: Option<usize>,
  #[serde(flatten)]
  pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelValues {
  Graph(GraphModel),
  Table(Vec<Row>),
  Tree(Vec<TreeNode>),
}

/// Provenance of a model. Only names the source result, never holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
  pub id: String,
  pub format: ModelFormat,
}

/* The record handed to renderers */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonModel {
  pub format: ModelFormat,
  pub values: ModelValues,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub header: Option<Vec<String>>,
  pub source_result: SourceRef,
}
impl JsonModel {
  /* Column names for table-like presentation: the header when
     there is one, otherwise the keys of the first row. */
  pub fn fields(&self) -> Vec<String> {
    if let Some(header) = &self.header {
      return header.clone()
    }
    match &self.values {
      ModelValues::Table(rows) => rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default(),
      _ => Vec::new(),
    }
  }
  pub fn graph(&self) -> Option<&GraphModel> {
    match &self.values {
      ModelValues::Graph(graph) => Some(graph),
      _ => None,
    }
  }
  pub fn rows(&self) -> Option<&[Row]> {
    match &self.values {
      ModelValues::Table(rows) => Some(rows.as_slice()),
      _ => None,
    }
  }
  pub fn tree(&self) -> Option<&[TreeNode]> {
    match &self.values {
      ModelValues::Tree(tree) => Some(tree.as_slice()),
      _ => None,
    }
  }
  /* The values as they would be read back by a JsonSourceResult */
  pub fn values_json(&self) -> serde_json::Result<Value> {
    match (&self.values, &self.header) {
      (ModelValues::Table(rows), Some(header)) => Ok(serde_json::json!({
        "header": header,
        "rows": rows,
      })),
      (values, _) => serde_json::to_value(values),
    }
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use serde_json::json;
  fn source() -> SourceRef {
    SourceRef { id: "test".into(), format: ModelFormat::RawRdfDataset }
  }
  #[test]
  fn graph_serializes_to_d3_shape() {
    let model = JsonModel {
      format: ModelFormat::GraphJson,
      values: ModelValues::Graph(GraphModel {
        nodes: vec![Node::new("A"), Node::new("B")],
        links: vec![Link::new("A", "B")],
      }),
      header: None,
      source_result: source(),
    };
    assert_eq!(
      json!({
        "format": "vm-graph-json",
        "values": {
          "nodes": [{"id": "A", "group": 1}, {"id": "B", "group": 1}],
          "links": [{"source": "A", "target": "B", "value": 1}],
        },
        "sourceResult": {"id": "test", "format": "raw-rdfdataset"},
      }),
      serde_json::to_value(&model).unwrap()
    );
  }
  #[test]
  fn node_keeps_renderer_fields() {
    let node: Node = serde_json::from_value(json!({"id": "A", "x": 3.5})).unwrap();
    assert_eq!(Some(DEFAULT_GROUP), node.group.as_u64());
    assert_eq!(Some(&json!(3.5)), node.extra.get("x"));
    assert_eq!(json!({"id": "A", "group": 1, "x": 3.5}), serde_json::to_value(&node).unwrap());
  }
  #[test]
  fn fields_prefer_header() {
    let mut row = Row::new();
    row.insert("b".into(), json!("1"));
    row.insert("a".into(), json!("2"));
    let mut model = JsonModel {
      format: ModelFormat::TabularJson,
      values: ModelValues::Table(vec![row]),
      header: Some(vec!["b".into(), "a".into(), "c".into()]),
      source_result: source(),
    };
    assert_eq!(vec!["b", "a", "c"], model.fields());
    model.header = None;
    assert_eq!(vec!["b", "a"], model.fields());
    model.values = ModelValues::Table(Vec::new());
    assert!(model.fields().is_empty());
  }
  #[test]
  fn node_group_is_any_number() {
    let node: Node = serde_json::from_value(json!({"id": "A", "group": -2.5})).unwrap();
    assert_eq!(Some(-2.5), node.group.as_f64());
    assert_eq!(json!({"id": "A", "group": -2.5}), serde_json::to_value(&node).unwrap());
  }
  #[test]
  fn link_ends_resolved_to_nodes() {
    let link: Link = serde_json::from_value(json!({
      "source": {"id": "A", "x": 1.0, "index": 0},
      "target": "B",
      "value": 2,
    })).unwrap();
    assert_eq!(("A", "B"), (link.source.as_str(), link.target.as_str()));
    assert_eq!(json!({"source": "A", "target": "B", "value": 2}), serde_json::to_value(&link).unwrap());
  }
  #[test]
  fn tree_root_has_no_parent_key() {
    let root = TreeNode { id: "r".into(), group: 1u64.into(), index: 0, parent: None, extra: Extra::new() };
    assert_eq!(json!({"id": "r", "group": 1, "index": 0}), serde_json::to_value(&root).unwrap());
  }
}
