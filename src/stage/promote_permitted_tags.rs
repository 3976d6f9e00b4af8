use super::*;

/// Lifts every candidate to the nearest block-level container, then past any
/// wrappers that add no text of their own.
///
/// Each slot is promoted on its own; the result may contain duplicates.
pub struct PromotePermittedTagsStage;

impl Stage for PromotePermittedTagsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let candidates = context
      .candidates()
      .iter()
      .map(|&id| Self::promote(document, id))
      .collect();

    context.set_candidates(candidates);

    Ok(())
  }
}

impl PromotePermittedTagsStage {
  const PERMITTED_TAGS: [&'static str; 16] = [
    "article", "div", "span", "section", "tr", "td", "h1", "h2", "h3", "h4",
    "h5", "h6", "h7", "li", "ul", "ol",
  ];

  fn promote(document: &Document, id: NodeId) -> NodeId {
    let mut current = id;

    while !Self::PERMITTED_TAGS.contains(&document.tag_name(current)) {
      let Some(parent) = document.parent(current) else {
        break;
      };

      current = parent;
    }

    let text = document.inner_text(current);

    while let Some(parent) = document.parent(current) {
      if document.inner_text(parent) != text {
        break;
      }

      current = parent;
    }

    current
  }
}
