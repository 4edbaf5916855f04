/*
  A view model consumes a SourceResult and turns it into one
  canonical JSON shape. Each kind is its own struct owning its
  current model; the trait supplies the shared consume() flow,
  the kinds only say how to convert.
*/

pub mod graph;
pub mod table;
pub mod tree;

use {
  serde::{Serialize, Deserialize, de::DeserializeOwned},
  crate::{
    Result,
    errors::{ViewModelError, ConversionError},
    format::{ModelFormat, ViewModelKind},
    model::{JsonModel, ModelValues},
    rdf::{RdfDataset, graph::GraphOptions, tabulator::TabulationOptions},
    source::SourceResult,
  },
  self::{graph::GraphViewModel, table::TableViewModel, tree::{TreeViewModel, TreeOptions}},
};

/// Settings for every kind of view model, for hosts that keep them
/// in their own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
  pub graph: GraphOptions,
  pub table: TabulationOptions,
  pub tree: TreeOptions,
}

pub trait ViewModel: std::fmt::Debug {
  fn name(&self) -> &'static str;
  fn kind(&self) -> ViewModelKind;
  /// Formats `consume` accepts. Mirrors the entries for this kind in
  /// the default `FormatRegistry`.
  fn formats_consumed(&self) -> &'static [ModelFormat];
  fn produced_format(&self) -> ModelFormat;
  /// Builds a model from `source` without touching the current one.
  fn convert(&self, source: &dyn SourceResult) -> Result<JsonModel>;
  fn json_model(&self) -> Option<&JsonModel>;
  fn set_json_model(&mut self, model: JsonModel) -> &JsonModel;

  /* Provided */

  /// Replaces the current model with one built from `source`.
  ///
  /// On any failure the current model is left as it was.
  fn consume(&mut self, source: &dyn SourceResult) -> Result<&JsonModel> {
    let format = source.model_format();
    match self.convert(source) {
      Ok(model) => {
        tracing::debug!(view_model = self.name(), source = source.id(), %format, "consumed source result");
        Ok(self.set_json_model(model))
      },
      Err(err @ ViewModelError::UnsupportedFormat(..)) => {
        tracing::error!(view_model = self.name(), source = source.id(), %format, "does not accept model format");
        Err(err)
      },
      Err(err) => {
        tracing::warn!(view_model = self.name(), source = source.id(), error = %err, "conversion failed, current model kept");
        Err(err)
      },
    }
  }
  fn json_model_format(&self) -> Option<ModelFormat> {
    self.json_model().map(|model| model.format)
  }
  fn json_model_values(&self) -> Option<&ModelValues> {
    self.json_model().map(|model| &model.values)
  }
  fn json_model_fields(&self) -> Vec<String> {
    self.json_model().map(JsonModel::fields).unwrap_or_default()
  }
}

impl ViewModelKind {
  pub fn instantiate(&self, options: &ConversionOptions) -> Box<dyn ViewModel> {
    match self {
      ViewModelKind::Graph => Box::new(GraphViewModel::with_options(options.graph)),
      ViewModelKind::Table => Box::new(TableViewModel::with_options(options.table.clone())),
      ViewModelKind::Tree => Box::new(TreeViewModel::with_options(options.graph, options.tree.clone())),
    }
  }
}

/* Shared payload access for the kinds */

pub(crate) fn unsupported(view_model: &dyn ViewModel, source: &dyn SourceResult) -> ViewModelError {
  ViewModelError::UnsupportedFormat(view_model.name(), source.model_format())
}

pub(crate) fn rdf_payload(source: &dyn SourceResult) -> Result<&RdfDataset> {
  source.rdf_dataset()
    .ok_or_else(|| ConversionError::MissingPayload(source.model_format()).into())
}

/* Structural copy: the JSON is read into the model shape,
   unknown fields ride along in each item's `extra` map. */
pub(crate) fn json_payload<T: DeserializeOwned>(source: &dyn SourceResult) -> Result<T> {
  let format = source.model_format();
  let values = source.json_model_values()
    .ok_or_else(|| ViewModelError::from(ConversionError::MissingPayload(format)))?;
  T::deserialize(values)
    .map_err(|e| ConversionError::MalformedJson(format, Box::new(e)).into())
}
