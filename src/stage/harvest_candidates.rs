use super::*;

/// Seeds the candidate list with the parents of every text node that is long
/// enough to read as prose.
pub struct HarvestCandidatesStage;

impl Stage for HarvestCandidatesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let candidates =
      Self::harvest(context.document(), context.options().article_threshold);

    context.set_candidates(candidates);

    Ok(())
  }
}

impl HarvestCandidatesStage {
  fn harvest(document: &Document, threshold: usize) -> Vec<NodeId> {
    let mut text_nodes = document
      .descendants(document.root())
      .filter(|&id| {
        document.has_flag(id, NodeFlag::Text)
          && word_count(&document.own_text(id)) > threshold
      })
      .collect::<Vec<_>>();

    text_nodes.sort_by_key(|&id| document.position(id));

    let mut seen = HashSet::new();

    text_nodes
      .into_iter()
      .filter_map(|id| document.parent(id))
      .filter(|&parent| seen.insert(parent))
      .collect()
  }
}
