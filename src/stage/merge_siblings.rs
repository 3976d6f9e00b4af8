use super::*;

/// Collapses structurally identical siblings (repeated cards, teasers) by
/// promoting them one level up.
///
/// This is one left-to-right pass over a working copy: a slot is compared
/// against the list as it stands when the slot is visited, so promoting the
/// first of two identical siblings leaves the second one without a twin.
pub struct MergeSiblingsStage;

impl Stage for MergeSiblingsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let candidates = Self::merge(context.document(), context.candidates());

    context.set_candidates(candidates);

    Ok(())
  }
}

impl MergeSiblingsStage {
  fn merge(document: &Document, candidates: &[NodeId]) -> Vec<NodeId> {
    let mut markup_cache: HashMap<NodeId, String> = HashMap::new();

    let mut own_markup = |id: NodeId| {
      markup_cache
        .entry(id)
        .or_insert_with(|| document.own_markup(id))
        .clone()
    };

    let mut merged = candidates.to_vec();

    for index in 0..merged.len() {
      let current = merged[index];

      let Some(parent) = document.parent(current) else {
        continue;
      };

      let markup = own_markup(current);

      let twins = merged
        .iter()
        .filter(|&&other| {
          document.parent(other) == Some(parent) && own_markup(other) == markup
        })
        .count();

      if twins > 1 {
        merged[index] = parent;
      }
    }

    merged
  }
}
