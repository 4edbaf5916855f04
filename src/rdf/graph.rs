use {
  std::collections::HashMap,
  serde::{Serialize, Deserialize},
  crate::{
    RdfStatement,
    model::{GraphModel, Node, Link},
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralPolicy {
  AsNodes,
  Skip,
}
impl Default for LiteralPolicy {
  fn default() -> Self { LiteralPolicy::AsNodes }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkValue {
  /* Every link has value 1, however many statements produced it */
  Constant,
  /* A link's value is the number of statements between its ends */
  Count,
}
impl Default for LinkValue {
  fn default() -> Self { LinkValue::Constant }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
  /// Label each link with the predicate of the last statement that wrote it.
  pub link_labels: bool,
  pub literals: LiteralPolicy,
  pub link_value: LinkValue,
}

/* Builds a node/link graph out of RDF statements.
   Subjects and objects share one node space keyed by term
   value, links are keyed by their (subject, object) pair.
   Output order is first-seen order for both. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RdfToGraph {
  options: GraphOptions,
}

impl RdfToGraph {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn with_options(options: GraphOptions) -> Self {
    RdfToGraph { options }
  }
  pub fn options(&self) -> &GraphOptions {
    &self.options
  }
  pub fn to_graph<I>(&self, statements: I) -> GraphModel
  where
    I: IntoIterator,
    I::Item: RdfStatement,
  {
    let mut node_index: HashMap<String, usize> = HashMap::new();
    let mut link_index: HashMap<(String, String), usize> = HashMap::new();
    let mut graph = GraphModel::default();
    for statement in statements {
      let subject = statement.subject_value();
      upsert_node(&mut graph.nodes, &mut node_index, subject);
      if statement.object_is_literal() && self.options.literals == LiteralPolicy::Skip {
        tracing::trace!(subject, literal = statement.object_value(), "skipping literal object");
        continue
      }
      let object = statement.object_value();
      upsert_node(&mut graph.nodes, &mut node_index, object);
      let key = (subject.to_string(), object.to_string());
      let link = match link_index.get(&key) {
        Some(&i) => {
          let link = &mut graph.links[i];
          match self.options.link_value {
            LinkValue::Constant => link.value = 1u64.into(),
            LinkValue::Count => link.value = link.value.as_u64().map_or(1, |v| v + 1).into(),
          }
          link
        },
        None => {
          link_index.insert(key, graph.links.len());
          graph.links.push(Link::new(subject, object));
          let last = graph.links.len() - 1;
          &mut graph.links[last]
        },
      };
      if self.options.link_labels {
        link.label = Some(statement.predicate_value().to_string());
      }
    }
    tracing::debug!(nodes = graph.nodes.len(), links = graph.links.len(), "built graph from RDF");
    graph
  }
}

fn upsert_node(nodes: &mut Vec<Node>, index: &mut HashMap<String, usize>, id: &str) {
  if !index.contains_key(id) {
    index.insert(id.to_string(), nodes.len());
    nodes.push(Node::new(id));
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use crate::{Statement, RdfNode};
  use std::collections::HashSet;
  use rand::{Rng, SeedableRng, rngs::StdRng};

  fn lit(val: &str) -> RdfNode {
    RdfNode::RawLit{ val: val.into() }
  }
  fn ids(graph: &GraphModel) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.id.as_str()).collect()
  }
  fn ends(graph: &GraphModel) -> Vec<(&str, &str)> {
    graph.links.iter().map(|l| (l.source.as_str(), l.target.as_str())).collect()
  }
  fn random_statements(seed: u64, count: usize, terms: usize) -> Vec<Statement> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| {
      let s = format!("s{}", rng.gen_range(0, terms));
      let p = format!("p{}", rng.gen_range(0, 4));
      let o = format!("s{}", rng.gen_range(0, terms));
      Statement::new(s.as_str(), p.as_str(), o.as_str())
    }).collect()
  }

  #[test]
  fn single_statement() {
    let graph = RdfToGraph::new().to_graph(&[Statement::new("A", "p", "B")]);
    assert_eq!(
      GraphModel {
        nodes: vec![Node::new("A"), Node::new("B")],
        links: vec![Link::new("A", "B")],
      },
      graph
    );
  }
  #[test]
  fn duplicate_statements_collapse() {
    let single = RdfToGraph::new().to_graph(&[Statement::new("A", "p", "B")]);
    let doubled = RdfToGraph::new().to_graph(&[
      Statement::new("A", "p", "B"),
      Statement::new("A", "p", "B"),
    ]);
    assert_eq!(single, doubled);
  }
  #[test]
  fn empty_input() {
    let graph = RdfToGraph::new().to_graph(Vec::<Statement>::new());
    assert_eq!(GraphModel::default(), graph);
  }
  #[test]
  fn predicates_do_not_split_links() {
    let graph = RdfToGraph::new().to_graph(&[
      Statement::new("A", "p1", "B"),
      Statement::new("A", "p2", "B"),
      Statement::new("B", "p1", "A"),
    ]);
    assert_eq!(vec![("A", "B"), ("B", "A")], ends(&graph));
    assert!(graph.links.iter().all(|l| l.value.as_u64() == Some(1) && l.label.is_none()));
  }
  #[test]
  fn first_seen_order() {
    let graph = RdfToGraph::new().to_graph(&[
      Statement::new("C", "p", "A"),
      Statement::new("A", "p", "B"),
      Statement::new("B", "p", "C"),
      Statement::new("A", "q", lit("x")),
    ]);
    assert_eq!(vec!["C", "A", "B", "x"], ids(&graph));
    assert_eq!(vec![("C", "A"), ("A", "B"), ("B", "C"), ("A", "x")], ends(&graph));
  }
  #[test]
  fn objects_that_are_subjects_share_a_node() {
    let graph = RdfToGraph::new().to_graph(&[
      Statement::new("A", "p", "B"),
      Statement::new("B", "p", lit("A")),
    ]);
    assert_eq!(vec!["A", "B"], ids(&graph));
  }
  #[test]
  fn node_count_is_distinct_terms() {
    for seed in 0..16 {
      let statements = random_statements(seed, 200, 30);
      let distinct: HashSet<&str> = statements.iter()
        .flat_map(|st| vec![st.subject_value(), st.object_value()])
        .collect();
      let pairs: HashSet<(&str, &str)> = statements.iter()
        .map(|st| (st.subject_value(), st.object_value()))
        .collect();
      let graph = RdfToGraph::new().to_graph(&statements);
      assert_eq!(distinct.len(), graph.nodes.len());
      assert_eq!(pairs.len(), graph.links.len());
    }
  }
  #[test]
  fn deterministic() {
    let statements = random_statements(99, 500, 50);
    let converter = RdfToGraph::new();
    assert_eq!(converter.to_graph(&statements), converter.to_graph(&statements));
  }
  #[test]
  fn skip_literals() {
    let converter = RdfToGraph::with_options(GraphOptions {
      literals: LiteralPolicy::Skip,
      ..GraphOptions::default()
    });
    let graph = converter.to_graph(&[
      Statement::new("A", "name", lit("alice")),
      Statement::new("A", "knows", "B"),
      Statement::new("C", "name", lit("carol")),
    ]);
    assert_eq!(vec!["A", "B", "C"], ids(&graph));
    assert_eq!(vec![("A", "B")], ends(&graph));
  }
  #[test]
  fn labels_and_counts() {
    let converter = RdfToGraph::with_options(GraphOptions {
      link_labels: true,
      link_value: LinkValue::Count,
      ..GraphOptions::default()
    });
    let graph = converter.to_graph(&[
      Statement::new("A", "p1", "B"),
      Statement::new("A", "p2", "B"),
      Statement::new("A", "p2", "C"),
    ]);
    assert_eq!(Some(2), graph.links[0].value.as_u64());
    assert_eq!(Some("p2".to_string()), graph.links[0].label);
    assert_eq!(Some(1), graph.links[1].value.as_u64());
  }
  #[test]
  fn options_from_json() {
    let options: GraphOptions = serde_json::from_str(r#"{"literals": "skip"}"#).unwrap();
    assert_eq!(LiteralPolicy::Skip, options.literals);
    assert_eq!(LinkValue::Constant, options.link_value);
    assert!(!options.link_labels);
  }
  #[test]
  fn reads_rio_triples() {
    use rio_api::model::{Triple, NamedNode, NamedOrBlankNode, Term};
    let triples = vec![Triple {
      subject: NamedOrBlankNode::NamedNode(NamedNode{ iri: "http://a" }),
      predicate: NamedNode{ iri: "http://p" },
      object: Term::NamedNode(NamedNode{ iri: "http://b" }),
    }];
    let graph = RdfToGraph::new().to_graph(triples);
    assert_eq!(vec![("http://a", "http://b")], ends(&graph));
  }
}
