use {
  serde_json::Value,
  crate::{
    format::ModelFormat,
    model::{JsonModel, SourceRef},
    rdf::RdfDataset,
  },
};

/// Input to a view model: a format tag plus either an RDF dataset or the
/// JSON values of a previously produced view model.
///
/// A source that feeds more than one view model must hand out the same
/// statements each time `rdf_dataset` is called.
pub trait SourceResult: std::fmt::Debug {
  fn id(&self) -> &str;
  fn model_format(&self) -> ModelFormat;
  fn rdf_dataset(&self) -> Option<&RdfDataset> { None }
  fn json_model_values(&self) -> Option<&Value> { None }
  fn source_ref(&self) -> SourceRef {
    SourceRef {
      id: self.id().to_string(),
      format: self.model_format(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdfSourceResult {
  id: String,
  dataset: RdfDataset,
}
impl RdfSourceResult {
  pub fn new(id: impl Into<String>, dataset: impl Into<RdfDataset>) -> Self {
    RdfSourceResult {
      id: id.into(),
      dataset: dataset.into(),
    }
  }
}
impl SourceResult for RdfSourceResult {
  fn id(&self) -> &str { &self.id }
  fn model_format(&self) -> ModelFormat { ModelFormat::RawRdfDataset }
  fn rdf_dataset(&self) -> Option<&RdfDataset> { Some(&self.dataset) }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonSourceResult {
  id: String,
  format: ModelFormat,
  values: Value,
}
impl JsonSourceResult {
  pub fn new(id: impl Into<String>, format: ModelFormat, values: Value) -> Self {
    JsonSourceResult {
      id: id.into(),
      format,
      values,
    }
  }
  /* Feeds one view model's output into another */
  pub fn from_model(id: impl Into<String>, model: &JsonModel) -> serde_json::Result<Self> {
    Ok(JsonSourceResult {
      id: id.into(),
      format: model.format,
      values: model.values_json()?,
    })
  }
}
impl SourceResult for JsonSourceResult {
  fn id(&self) -> &str { &self.id }
  fn model_format(&self) -> ModelFormat { self.format }
  fn json_model_values(&self) -> Option<&Value> { Some(&self.values) }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use crate::Statement;
  use serde_json::json;
  #[test]
  fn rdf_source() {
    let source = RdfSourceResult::new("rdf", vec![Statement::new("A", "p", "B")]);
    assert_eq!(ModelFormat::RawRdfDataset, source.model_format());
    assert_eq!(Some(1), source.rdf_dataset().map(RdfDataset::len));
    assert!(source.json_model_values().is_none());
    assert_eq!(SourceRef { id: "rdf".into(), format: ModelFormat::RawRdfDataset }, source.source_ref());
  }
  #[test]
  fn json_source() {
    let source = JsonSourceResult::new("json", ModelFormat::GraphJson, json!({"nodes": [], "links": []}));
    assert_eq!(ModelFormat::GraphJson, source.model_format());
    assert!(source.rdf_dataset().is_none());
    assert_eq!(Some(&json!({"nodes": [], "links": []})), source.json_model_values());
  }
}
