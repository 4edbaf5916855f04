use crate::{
  Result,
  format::{ModelFormat, ViewModelKind},
  model::{GraphModel, JsonModel, ModelValues},
  rdf::graph::{RdfToGraph, GraphOptions},
  source::SourceResult,
  viewmodel::{ViewModel, unsupported, rdf_payload, json_payload},
};

const FORMATS_CONSUMED: &[ModelFormat] = &[ModelFormat::RawRdfDataset, ModelFormat::GraphJson];

/// Graph view model: `{ nodes, links }` for force-directed layouts.
#[derive(Debug, Clone, Default)]
pub struct GraphViewModel {
  converter: RdfToGraph,
  model: Option<JsonModel>,
}

impl GraphViewModel {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn with_options(options: GraphOptions) -> Self {
    GraphViewModel {
      converter: RdfToGraph::with_options(options),
      model: None,
    }
  }
  pub fn graph(&self) -> Option<&GraphModel> {
    self.model.as_ref().and_then(JsonModel::graph)
  }
}

impl ViewModel for GraphViewModel {
  fn name(&self) -> &'static str { "GraphViewModel" }
  fn kind(&self) -> ViewModelKind { ViewModelKind::Graph }
  fn formats_consumed(&self) -> &'static [ModelFormat] { FORMATS_CONSUMED }
  fn produced_format(&self) -> ModelFormat { ModelFormat::GraphJson }
  fn convert(&self, source: &dyn SourceResult) -> Result<JsonModel> {
    let graph = match source.model_format() {
      ModelFormat::RawRdfDataset => self.converter.to_graph(rdf_payload(source)?),
      ModelFormat::GraphJson => json_payload::<GraphModel>(source)?,
      ModelFormat::TabularJson | ModelFormat::TreeJson => return Err(unsupported(self, source)),
    };
    Ok(JsonModel {
      format: self.produced_format(),
      values: ModelValues::Graph(graph),
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
