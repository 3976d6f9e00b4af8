use super::*;

/// The main content found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
  /// Text of the document's first `<title>`, empty when there is none.
  pub title: String,
  /// Outer markup of the selected content root.
  pub content: String,
  /// Standalone page combining the title heading and the content.
  pub html: String,
}

impl Extraction {
  pub(crate) fn new(title: String, content: String) -> Self {
    let html = output::compose(&title, &content);

    Self {
      title,
      content,
      html,
    }
  }
}
