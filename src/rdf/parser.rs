/*
  Turns serialised RDF into an RdfDataset so that it can be
  wrapped in an RdfSourceResult. Terms are taken as given,
  nothing beyond what the rio parsers check is validated.
*/

use {
  rio_api::{
    parser::TriplesParser,
    model::{
      Triple as RioTriple,
      NamedOrBlankNode,
      NamedNode,
      Term,
      Literal,
    },
  },
  rio_turtle::{TurtleParser, TurtleError},
  rio_xml::{RdfXmlParser, RdfXmlError},
  crate::{
    RdfNode, Statement,
    errors::ParserError,
    rdf::RdfDataset,
  },
};

type Result<T> = std::result::Result<T, ParserError>;

/* Turtle, and N-Triples since it is a subset of Turtle */
pub fn from_turtle(text: &str, base_iri: &str) -> Result<RdfDataset> {
  let mut dataset = RdfDataset::new();
  TurtleParser::new(text.as_bytes(), base_iri)?
    .parse_all(&mut |t| {
      dataset.insert(to_statement(&t));
      Ok(()) as std::result::Result<(), TurtleError>
    })?;
  tracing::debug!(statements = dataset.len(), "parsed turtle");
  Ok(dataset)
}

pub fn from_rdf_xml(text: &str, base_iri: &str) -> Result<RdfDataset> {
  let mut dataset = RdfDataset::new();
  RdfXmlParser::new(text.as_bytes(), base_iri)?
    .parse_all(&mut |t| {
      dataset.insert(to_statement(&t));
      Ok(()) as std::result::Result<(), RdfXmlError>
    })?;
  tracing::debug!(statements = dataset.len(), "parsed RDF/XML");
  Ok(dataset)
}

pub fn to_statement(t: &RioTriple) -> Statement {
  let subject = match &t.subject {
    NamedOrBlankNode::NamedNode(NamedNode{ iri }) => RdfNode::Named{ iri: iri.to_string() },
    NamedOrBlankNode::BlankNode(b) => RdfNode::Blank{ id: b.id.to_string() },
  };
  let predicate = RdfNode::Named{ iri: t.predicate.iri.to_string() };
  let object = match &t.object {
    Term::NamedNode(NamedNode{ iri }) => RdfNode::Named{ iri: iri.to_string() },
    Term::BlankNode(b) => RdfNode::Blank{ id: b.id.to_string() },
    Term::Literal(lit) => match lit {
      Literal::Simple{ value } => RdfNode::RawLit{ val: value.to_string() },
      Literal::LanguageTaggedString{ value, language } => RdfNode::LangTaggedLit{ val: value.to_string(), lang: language.to_string() },
      Literal::Typed{ value, datatype: NamedNode{ iri } } => RdfNode::TypedLit{ val: value.to_string(), datatype: iri.to_string() },
    },
  };
  Statement { subject, predicate, object, graph: None }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  const BASE: &str = "http://example.com/";
  #[test]
  fn parse_turtle() {
    let dataset = from_turtle(r#"
      @prefix ex: <http://example.com/> .
      ex:alice ex:knows ex:bob ;
               ex:name "Alice"@en .
      ex:bob ex:age "42"^^<http://www.w3.org/2001/XMLSchema#integer> .
      _:anon ex:knows ex:alice .
    "#, BASE).unwrap();
    assert_eq!(4, dataset.len());
    let statements: Vec<&Statement> = dataset.iter().collect();
    assert_eq!(RdfNode::from("http://example.com/alice"), statements[0].subject);
    assert_eq!(RdfNode::from("http://example.com/bob"), statements[0].object);
    assert_eq!(RdfNode::LangTaggedLit{ val: "Alice".into(), lang: "en".into() }, statements[1].object);
    assert_eq!(
      RdfNode::TypedLit{ val: "42".into(), datatype: "http://www.w3.org/2001/XMLSchema#integer".into() },
      statements[2].object
    );
    assert!(match statements[3].subject { RdfNode::Blank{ .. } => true, _ => false });
  }
  #[test]
  fn parse_ntriples_as_turtle() {
    let dataset = from_turtle(
      "<http://a> <http://p> <http://b> .\n<http://a> <http://q> \"x\" .\n",
      BASE
    ).unwrap();
    assert_eq!(2, dataset.len());
    assert_eq!(RdfNode::RawLit{ val: "x".into() }, dataset.0[1].object);
  }
  #[test]
  fn parse_rdf_xml() {
    let dataset = from_rdf_xml(r#"<?xml version="1.0"?>
      <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
               xmlns:ex="http://example.com/">
        <rdf:Description rdf:about="http://example.com/alice">
          <ex:knows rdf:resource="http://example.com/bob"/>
          <ex:name>Alice</ex:name>
        </rdf:Description>
      </rdf:RDF>"#, BASE).unwrap();
    assert_eq!(2, dataset.len());
    assert_eq!(RdfNode::from("http://example.com/knows"), dataset.0[0].predicate);
    assert_eq!(RdfNode::RawLit{ val: "Alice".into() }, dataset.0[1].object);
  }
  #[test]
  fn bad_turtle_is_an_error() {
    assert!(match from_turtle("<http://a> <http://p> .", BASE) {
      Err(ParserError::Turtle(_)) => true,
      _ => false,
    });
  }
}
