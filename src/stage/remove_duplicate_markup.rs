use super::*;

/// Treats candidates whose start tag appears more than once in the list as
/// repeated boilerplate (share boxes, comment entries) and drops all of them.
pub struct RemoveDuplicateMarkupStage;

impl Stage for RemoveDuplicateMarkupStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let markups = context
      .candidates()
      .iter()
      .map(|&id| (id, document.own_markup(id)))
      .collect::<Vec<_>>();

    let mut occurrences: HashMap<&str, usize> = HashMap::new();

    for (_, markup) in &markups {
      *occurrences.entry(markup.as_str()).or_default() += 1;
    }

    let candidates = markups
      .iter()
      .filter(|(_, markup)| occurrences[markup.as_str()] == 1)
      .map(|&(id, _)| id)
      .collect();

    context.set_candidates(candidates);

    Ok(())
  }
}
