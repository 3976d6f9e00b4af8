use super::*;

/// Reads the text of the first `<title>` in document order.
pub struct TitleStage;

impl Stage for TitleStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let title = document
      .descendants(document.root())
      .find(|&id| document.tag_name(id) == "title")
      .map(|id| document.own_text(id))
      .unwrap_or_default();

    context.set_title(title);

    Ok(())
  }
}
