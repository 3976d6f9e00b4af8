use super::*;

/// Resolves candidates that ended up at different depths of the same content
/// to a shared candidate ancestor.
///
/// The distinct candidates at the start form the reference set. Each
/// reference, in list order, claims every slot it is an ancestor (or the
/// value) of at that moment, which leaves each slot at the highest reference
/// on its ancestor chain. References are captured once: a slot that moves
/// never becomes a reference itself.
pub struct PromoteToReferenceStage;

impl Stage for PromoteToReferenceStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let candidates = Self::promote(context.document(), context.candidates());

    context.set_candidates(candidates);

    Ok(())
  }
}

impl PromoteToReferenceStage {
  fn promote(document: &Document, candidates: &[NodeId]) -> Vec<NodeId> {
    let mut seen = HashSet::new();

    let references = candidates
      .iter()
      .copied()
      .filter(|&id| seen.insert(id))
      .collect::<Vec<_>>();

    let mut promoted = candidates.to_vec();

    for &reference in &references {
      for slot in &mut promoted {
        if document.is_self_or_ancestor(reference, *slot) {
          *slot = reference;
        }
      }
    }

    promoted
  }
}
