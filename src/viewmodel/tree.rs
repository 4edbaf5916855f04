use {
  std::collections::{HashMap, VecDeque},
  serde::{Serialize, Deserialize},
  crate::{
    Result,
    errors::ConversionError,
    format::{ModelFormat, ViewModelKind},
    model::{GraphModel, TreeNode, JsonModel, ModelValues},
    rdf::graph::{RdfToGraph, GraphOptions},
    source::SourceResult,
    viewmodel::{ViewModel, unsupported, rdf_payload, json_payload},
  },
};

const FORMATS_CONSUMED: &[ModelFormat] = &[ModelFormat::RawRdfDataset, ModelFormat::GraphJson];

/// How a node with several incoming links picks its parent.
/// A link's source becomes the parent of its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParentPolicy {
  /// The last link into a node decides. Cycles are kept as they come.
  LastWins,
  FirstWins,
  /// Fail with `MultipleParents` when two links disagree on a parent.
  RejectMultiParent,
  /// Walk links breadth-first from `root`; the first link to reach a
  /// node decides. Nodes the walk never reaches have no parent.
  SpanningTree{ root: String },
}
impl Default for ParentPolicy {
  fn default() -> Self { ParentPolicy::LastWins }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
  pub parent_policy: ParentPolicy,
}

/* Index every node by position, then hang each node off
   the source of a link pointing at it. */
pub fn graph_to_tree(graph: &GraphModel, policy: &ParentPolicy) -> std::result::Result<Vec<TreeNode>, ConversionError> {
  let mut id_to_index: HashMap<&str, usize> = HashMap::new();
  let mut tree: Vec<TreeNode> = Vec::with_capacity(graph.nodes.len());
  for (index, node) in graph.nodes.iter().enumerate() {
    id_to_index.entry(node.id.as_str()).or_insert(index);
    /* index and parent are recomputed; stale copies would shadow them */
    let mut extra = node.extra.clone();
    extra.remove("index");
    extra.remove("parent");
    tree.push(TreeNode {
      id: node.id.clone(),
      group: node.group.clone(),
      index,
      parent: None,
      extra,
    });
  }
  let lookup = |id: &str| id_to_index.get(id).copied()
    .ok_or_else(|| ConversionError::DanglingLink(id.to_string()));
  let mut edges: Vec<(usize, usize)> = Vec::with_capacity(graph.links.len());
  for link in graph.links.iter() {
    edges.push((lookup(link.source.as_str())?, lookup(link.target.as_str())?));
  }
  match policy {
    ParentPolicy::LastWins => {
      for &(source, target) in edges.iter() {
        tree[target].parent = Some(source);
      }
    },
    ParentPolicy::FirstWins => {
      for &(source, target) in edges.iter() {
        tree[target].parent.get_or_insert(source);
      }
    },
    ParentPolicy::RejectMultiParent => {
      for &(source, target) in edges.iter() {
        match tree[target].parent {
          Some(parent) if parent != source => {
            return Err(ConversionError::MultipleParents(tree[target].id.clone()))
          },
          _ => tree[target].parent = Some(source),
        }
      }
    },
    ParentPolicy::SpanningTree{ root } => {
      let root = id_to_index.get(root.as_str()).copied()
        .ok_or_else(|| ConversionError::UnknownRoot(root.clone()))?;
      let mut children: Vec<Vec<usize>> = vec![Vec::new(); tree.len()];
      for &(source, target) in edges.iter() {
        children[source].push(target);
      }
      let mut visited = vec![false; tree.len()];
      let mut queue = VecDeque::new();
      visited[root] = true;
      queue.push_back(root);
      while let Some(parent) = queue.pop_front() {
        for &child in children[parent].iter() {
          if !visited[child] {
            visited[child] = true;
            tree[child].parent = Some(parent);
            queue.push_back(child);
          }
        }
      }
    },
  }
  Ok(tree)
}

#[derive(Debug, Clone, Default)]
pub struct TreeViewModel {
  converter: RdfToGraph,
  options: TreeOptions,
  model: Option<JsonModel>,
}

impl TreeViewModel {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn with_options(graph: GraphOptions, options: TreeOptions) -> Self {
    TreeViewModel {
      converter: RdfToGraph::with_options(graph),
      options,
      model: None,
    }
  }
  pub fn tree(&self) -> Option<&[TreeNode]> {
    self.model.as_ref().and_then(JsonModel::tree)
  }
}

impl ViewModel for TreeViewModel {
  fn name(&self) -> &'static str { "TreeViewModel" }
  fn kind(&self) -> ViewModelKind { ViewModelKind::Tree }
  fn formats_consumed(&self) -> &'static [ModelFormat] { FORMATS_CONSUMED }
  fn produced_format(&self) -> ModelFormat { ModelFormat::TreeJson }
  fn convert(&self, source: &dyn SourceResult) -> Result<JsonModel> {
    let graph = match source.model_format() {
      ModelFormat::RawRdfDataset => self.converter.to_graph(rdf_payload(source)?),
      ModelFormat::GraphJson => json_payload::<GraphModel>(source)?,
      ModelFormat::TabularJson | ModelFormat::TreeJson => return Err(unsupported(self, source)),
    };
    let tree = graph_to_tree(&graph, &self.options.parent_policy)?;
    Ok(JsonModel {
      format: self.produced_format(),
      values: ModelValues::Tree(tree),
      header: None,
      source_result: source.source_ref(),
    })
  }
  fn json_model(&self) -> Option<&JsonModel> {
    self.model.as_ref()
  }
  fn set_json_model(&mut self, model: JsonModel) -> &JsonModel {
    self.model.insert(model)
  }
}
