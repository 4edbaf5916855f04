use {
  serde::Deserialize,
  crate::{
    Result,
    format::{ModelFormat, ViewModelKind},
    model::{TableModel, Row, JsonModel, ModelValues},
    rdf::tabulator::{RdfTabulator, TabulationOptions},
    source::SourceResult,
    viewmodel::{ViewModel, unsupported, rdf_payload, json_payload},
  },
};

const FORMATS_CONSUMED: &[ModelFormat] = &[ModelFormat::RawRdfDataset, ModelFormat::TabularJson];

/* Tabular JSON arrives either with its header or as bare rows */
#[derive(Deserialize)]
#[serde(untagged)]
enum TableJson {
  Full(TableModel),
  Rows(Vec<Row>),
}

#[derive(Debug, Clone, Default)]
pub struct TableViewModel {
  tabulator: RdfTabulator,
  model: Option<JsonModel>,
}

impl TableViewModel {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn with_options(options: TabulationOptions) -> Self {
    TableViewModel {
      tabulator: RdfTabulator::with_options(options),
      model: None,
    }
  }
  pub fn rows(&self) -> Option<&[Row]> {
    self.model.as_ref().and_then(JsonModel::rows)
  }
}

impl ViewModel for TableViewModel {
  fn name(&self) -> &'static str { "TableViewModel" }
  fn kind(&self) -> ViewModelKind { ViewModelKind::Table }
  fn formats_consumed(&self) -> &'static [ModelFormat] { FORMATS_CONSUMED }
  fn produced_format(&self) -> ModelFormat { ModelFormat::TabularJson }
  fn convert(&self, source: &dyn SourceResult) -> Result<JsonModel> {
    let (header, rows) = match source.model_format() {
      ModelFormat::RawRdfDataset => {
        let TableModel { header, rows } = self.tabulator.to_table(rdf_payload(source)?);
        (Some(header), rows)
      },
      ModelFormat::TabularJson => match json_payload::<TableJson>(source)? {
        TableJson::Full(TableModel { header, rows }) => (Some(header), rows),
        TableJson::Rows(rows) => (None, rows),
      },
      ModelFormat::GraphJson | ModelFormat::TreeJson => return Err(unsupported(self, source)),
    };
    Ok(JsonModel {
      format: self.produced_format(),
      values: ModelValues::Table(rows),
      header,
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
