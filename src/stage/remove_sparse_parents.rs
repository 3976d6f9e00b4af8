use super::*;

/// Keeps only candidates whose whole text is longer than the article
/// threshold.
pub struct RemoveSparseParentsStage;

impl Stage for RemoveSparseParentsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();
    let threshold = context.options().article_threshold;

    let candidates = context
      .candidates()
      .iter()
      .copied()
      .filter(|&id| word_count(&document.inner_text(id)) > threshold)
      .collect();

    context.set_candidates(candidates);

    Ok(())
  }
}
