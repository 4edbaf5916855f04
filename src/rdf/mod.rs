pub mod graph;
pub mod tabulator;
pub mod parser;

use crate::Statement;

/* A materialised statement collection. Iterating borrows,
   so one dataset can feed any number of view models. */
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RdfDataset(pub Vec<Statement>);
impl RdfDataset {
  pub fn new() -> Self {
    RdfDataset(Vec::new())
  }
  pub fn insert(&mut self, statement: Statement) {
    self.0.push(statement);
  }
  pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
    self.0.iter()
  }
  pub fn len(&self) -> usize {
    self.0.len()
  }
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
impl std::iter::FromIterator<Statement> for RdfDataset {
  fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
    RdfDataset(iter.into_iter().collect())
  }
}
impl From<Vec<Statement>> for RdfDataset {
  fn from(statements: Vec<Statement>) -> Self {
    RdfDataset(statements)
  }
}
impl<'a> IntoIterator for &'a RdfDataset {
  type Item = &'a Statement;
  type IntoIter = std::slice::Iter<'a, Statement>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
impl IntoIterator for RdfDataset {
  type Item = Statement;
  type IntoIter = std::vec::IntoIter<Statement>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}
