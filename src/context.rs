use super::*;

/// State threaded through one extraction run.
pub(crate) struct Context<'a> {
  candidates: Vec<NodeId>,
  document: Document,
  options: &'a ExtractorOptions,
  selected: Option<NodeId>,
  title: String,
}

impl<'a> Context<'a> {
  pub(crate) fn candidates(&self) -> &[NodeId] {
    &self.candidates
  }

  pub(crate) fn document(&self) -> &Document {
    &self.document
  }

  pub(crate) fn document_mut(&mut self) -> &mut Document {
    &mut self.document
  }

  pub(crate) fn new(document: Document, options: &'a ExtractorOptions) -> Self {
    Self {
      candidates: Vec::new(),
      document,
      options,
      selected: None,
      title: String::new(),
    }
  }

  pub(crate) fn options(&self) -> &'a ExtractorOptions {
    self.options
  }

  pub(crate) fn selected(&self) -> Option<NodeId> {
    self.selected
  }

  pub(crate) fn set_candidates(&mut self, candidates: Vec<NodeId>) {
    self.candidates = candidates;
  }

  pub(crate) fn set_selected(&mut self, selected: NodeId) {
    self.selected = Some(selected);
  }

  pub(crate) fn set_title(&mut self, title: String) {
    self.title = title;
  }

  pub(crate) fn title(&self) -> &str {
    &self.title
  }
}
