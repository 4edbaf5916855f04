use {
  std::collections::HashMap,
  serde::{Serialize, Deserialize},
};

/// Tag carried by every source result and every produced view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFormat {
  #[serde(rename = "raw-rdfdataset")]
  RawRdfDataset,
  #[serde(rename = "vm-graph-json")]
  GraphJson,
  #[serde(rename = "vm-tabular-json")]
  TabularJson,
  #[serde(rename = "vm-tree-json")]
  TreeJson,
}
impl ModelFormat {
  pub const ALL: [ModelFormat; 4] = [
    ModelFormat::RawRdfDataset,
    ModelFormat::GraphJson,
    ModelFormat::TabularJson,
    ModelFormat::TreeJson,
  ];
  pub fn as_str(&self) -> &'static str {
    match self {
      ModelFormat::RawRdfDataset => "raw-rdfdataset",
      ModelFormat::GraphJson => "vm-graph-json",
      ModelFormat::TabularJson => "vm-tabular-json",
      ModelFormat::TreeJson => "vm-tree-json",
    }
  }
}
impl std::fmt::Display for ModelFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewModelKind {
  Graph,
  Table,
  Tree,
}
impl ViewModelKind {
  pub const ALL: [ViewModelKind; 3] = [ViewModelKind::Graph, ViewModelKind::Table, ViewModelKind::Tree];
}
impl std::fmt::Display for ViewModelKind {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      ViewModelKind::Graph => write!(f, "graph"),
      ViewModelKind::Table => write!(f, "table"),
      ViewModelKind::Tree => write!(f, "tree"),
    }
  }
}

/* Which view model kinds can consume a given format.
   Hand-curated: a new kind needs an explicit entry here
   (or a call to register()) before the Dispatcher lets
   anything through to it. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRegistry {
  compatible: HashMap<ModelFormat, Vec<ViewModelKind>>,
}
impl Default for FormatRegistry {
  fn default() -> Self {
    use {ModelFormat::*, ViewModelKind::*};
    let mut compatible = HashMap::new();
    compatible.insert(RawRdfDataset, vec![Graph, Table, Tree]);
    compatible.insert(GraphJson, vec![Graph, Tree]);
    compatible.insert(TabularJson, vec![Table]);
    FormatRegistry { compatible }
  }
}
impl FormatRegistry {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn empty() -> Self {
    FormatRegistry { compatible: HashMap::new() }
  }
  /* A format with no entry yields an empty slice */
  pub fn compatible_kinds(&self, format: ModelFormat) -> &[ViewModelKind] {
    self.compatible.get(&format).map(Vec::as_slice).unwrap_or(&[])
  }
  pub fn is_compatible(&self, format: ModelFormat, kind: ViewModelKind) -> bool {
    self.compatible_kinds(format).contains(&kind)
  }
  pub fn register(&mut self, format: ModelFormat, kind: ViewModelKind) {
    let kinds = self.compatible.entry(format).or_insert_with(Vec::new);
    if !kinds.contains(&kind) {
      kinds.push(kind);
    }
  }
}
