use crate::format::{ModelFormat, ViewModelKind};

type Source<E> = Box<E>;

#[derive(Debug)]
pub enum ViewModelError {
  UnsupportedFormat(&'static str, ModelFormat),
  IncompatibleFormat(ViewModelKind, ModelFormat),
  Conversion(Source<ConversionError>),
}
impl std::error::Error for ViewModelError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use ViewModelError::*;
    match self {
      Conversion(e) => Some(&**e),
      _ => None,
    }
  }
}
impl std::fmt::Display for ViewModelError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    use ViewModelError::*;
    match self {
      UnsupportedFormat(view_model, format) => write!(f, "{} does not accept model format {}", view_model, format),
      IncompatibleFormat(kind, format) => write!(f, "A {} view model cannot be rendered from model format {}", kind, format),
      Conversion(e) => write!(f, "Conversion failed: {}", *e),
    }
  }
}
impl From<ConversionError> for ViewModelError {
  fn from(err: ConversionError) -> ViewModelError {
    ViewModelError::Conversion(Box::new(err))
  }
}

#[derive(Debug)]
pub enum ConversionError {
  MissingPayload(ModelFormat),
  MalformedJson(ModelFormat, Source<serde_json::Error>),
  DanglingLink(String),
  MultipleParents(String),
  UnknownRoot(String),
}
impl std::error::Error for ConversionError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use ConversionError::*;
    match self {
      MalformedJson(_, e) => Some(&**e),
      _ => None,
    }
  }
}
impl std::fmt::Display for ConversionError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    use ConversionError::*;
    match self {
      MissingPayload(format) => write!(f, "Source result tagged {} carries no payload of that format", format),
      MalformedJson(format, e) => write!(f, "Source values are not valid {}: {}", format, *e),
      DanglingLink(id) => write!(f, "Link refers to node \"{}\" which is not in the graph", id),
      MultipleParents(id) => write!(f, "Node \"{}\" has more than one incoming link and cannot be placed in a tree", id),
      UnknownRoot(id) => write!(f, "Tree root \"{}\" is not a node of the graph", id),
    }
  }
}

#[derive(Debug)]
pub enum ParserError {
  Turtle(Source<rio_turtle::TurtleError>),
  RdfXml(Source<rio_xml::RdfXmlError>),
}
impl std::error::Error for ParserError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use ParserError::*;
    match self {
      Turtle(e) => Some(&**e),
      RdfXml(e) => Some(&**e),
    }
  }
}
impl std::fmt::Display for ParserError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    use ParserError::*;
    match self {
      Turtle(e) => write!(f, "{}", e),
      RdfXml(e) => write!(f, "{}", e),
    }
  }
}
impl From<rio_turtle::TurtleError> for ParserError {
  fn from(err: rio_turtle::TurtleError) -> ParserError {
    ParserError::Turtle(Box::new(err))
  }
}
impl From<rio_xml::RdfXmlError> for ParserError {
  fn from(err: rio_xml::RdfXmlError) -> ParserError {
    ParserError::RdfXml(Box::new(err))
  }
}
