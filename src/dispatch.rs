use crate::{
  Result,
  errors::ViewModelError,
  format::{ModelFormat, ViewModelKind, FormatRegistry},
  model::JsonModel,
  source::SourceResult,
  viewmodel::{ViewModel, ConversionOptions},
};

/// Routes a source result to a view model after checking the
/// registry says that kind can consume the source's format.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
  registry: FormatRegistry,
  options: ConversionOptions,
}

impl Dispatcher {
  pub fn new() -> Self {
    Self::default()
  }
  pub fn with_registry(registry: FormatRegistry) -> Self {
    Dispatcher {
      registry,
      options: ConversionOptions::default(),
    }
  }
  pub fn with_options(mut self, options: ConversionOptions) -> Self {
    self.options = options;
    self
  }
  pub fn registry(&self) -> &FormatRegistry {
    &self.registry
  }
  pub fn registry_mut(&mut self) -> &mut FormatRegistry {
    &mut self.registry
  }
  /* The kinds a UI could offer for this source */
  pub fn compatible_kinds(&self, format: ModelFormat) -> &[ViewModelKind] {
    self.registry.compatible_kinds(format)
  }
  pub fn render<'v>(&self, source: &dyn SourceResult, view_model: &'v mut dyn ViewModel) -> Result<&'v JsonModel> {
    let format = source.model_format();
    let kind = view_model.kind();
    if !self.registry.is_compatible(format, kind) {
      tracing::warn!(source = source.id(), %format, %kind, "no compatible view model, nothing converted");
      return Err(ViewModelError::IncompatibleFormat(kind, format))
    }
    view_model.consume(source)
  }
  /* Renders into a fresh view model of the given kind */
  pub fn render_as(&self, source: &dyn SourceResult, kind: ViewModelKind) -> Result<Box<dyn ViewModel>> {
    let format = source.model_format();
    if !self.registry.is_compatible(format, kind) {
      tracing::warn!(source = source.id(), %format, %kind, "no compatible view model, nothing converted");
      return Err(ViewModelError::IncompatibleFormat(kind, format))
    }
    let mut view_model = kind.instantiate(&self.options);
    view_model.consume(source)?;
    Ok(view_model)
  }
}
