use {
  std::collections::{HashMap, HashSet},
  serde::{Serialize, Deserialize},
  serde_json::Value,
  crate::{
    RdfStatement,
    model::{TableModel, Row},
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellMode {
  /* A row only holds the predicates seen for its own subject */
  Sparse,
  /* Every row holds every header column, missing cells are null */
  Dense,
}
impl Default for CellMode {
  fn default() -> Self { CellMode::Sparse }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabulationOptions {
  pub cells: CellMode,
  /// When set, a leading column of this name holds each row's subject.
  pub subject_column: Option<String>,
}

/// Groups RDF statements by subject into one row per subject.
///
/// The header is the union of predicate values in first-seen order. When two
/// statements share subject and predicate the later object wins the cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RdfTabulator {
  options: TabulationOptions,
}

impl RdfTabulator {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn with_options(options: TabulationOptions) -> Self {
    RdfTabulator { options }
  }
  pub fn options(&self) -> &TabulationOptions {
    &self.options
  }
  pub fn to_table<I>(&self, statements: I) -> TableModel
  where
    I: IntoIterator,
    I::Item: RdfStatement,
  {
    let mut header: Vec<String> = Vec::new();
    let mut seen_predicates: HashSet<String> = HashSet::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<Row> = Vec::new();
    if let Some(column) = &self.options.subject_column {
      header.push(column.clone());
      seen_predicates.insert(column.clone());
    }
    for statement in statements {
      let subject = statement.subject_value();
      let predicate = statement.predicate_value();
      let row = match row_index.get(subject) {
        Some(&i) => &mut rows[i],
        None => {
          row_index.insert(subject.to_string(), rows.len());
          let mut row = Row::new();
          if let Some(column) = &self.options.subject_column {
            row.insert(column.clone(), Value::String(subject.to_string()));
          }
          rows.push(row);
          let last = rows.len() - 1;
          &mut rows[last]
        },
      };
      row.insert(predicate.to_string(), Value::String(statement.object_value().to_string()));
      if !seen_predicates.contains(predicate) {
        seen_predicates.insert(predicate.to_string());
        header.push(predicate.to_string());
      }
    }
    if self.options.cells == CellMode::Dense {
      for row in rows.iter_mut() {
        for column in header.iter() {
          row.entry(column.as_str()).or_insert(Value::Null);
        }
      }
    }
    tracing::debug!(columns = header.len(), rows = rows.len(), "tabulated RDF");
    TableModel { header, rows }
  }
}
