use super::*;

/// Only `div` containers are accepted as content roots.
pub struct RetainDivsStage;

impl Stage for RetainDivsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let candidates = context
      .candidates()
      .iter()
      .copied()
      .filter(|&id| document.tag_name(id) == "div")
      .collect();

    context.set_candidates(candidates);

    Ok(())
  }
}
