use super::*;

/// Drops every candidate that has another candidate below it, so only the
/// deepest containers for a piece of content remain.
pub struct KeepLowestStage;

impl Stage for KeepLowestStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();
    let current = context.candidates();

    let candidates = current
      .iter()
      .copied()
      .filter(|&candidate| {
        !current
          .iter()
          .any(|&other| document.is_ancestor(candidate, other))
      })
      .collect();

    context.set_candidates(candidates);

    Ok(())
  }
}
