use super::*;

/// Removes repeated candidates, keeping the first occurrence, and orders the
/// rest by document position.
pub struct NormalizeCandidatesStage;

impl Stage for NormalizeCandidatesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let candidates = Self::normalize(context.document(), context.candidates());

    context.set_candidates(candidates);

    Ok(())
  }
}

impl NormalizeCandidatesStage {
  fn normalize(document: &Document, candidates: &[NodeId]) -> Vec<NodeId> {
    let mut seen = HashSet::new();

    let mut normalized = candidates
      .iter()
      .copied()
      .filter(|&id| seen.insert(id))
      .collect::<Vec<_>>();

    normalized.sort_by_key(|&id| document.position(id));

    normalized
  }
}
