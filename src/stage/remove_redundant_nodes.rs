use super::*;

/// Drops scripts, styles, the document head, comments and doctypes before any
/// text is measured.
pub struct RemoveRedundantNodesStage;

impl Stage for RemoveRedundantNodesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let root = document.root();

    let mut to_remove: Vec<NodeId> = Vec::new();

    for tag in Self::REDUNDANT_TAGS {
      to_remove.extend(
        document
          .descendants(root)
          .filter(|&id| document.tag_name(id) == tag),
      );
    }

    to_remove.extend(
      document
        .descendants(root)
        .filter(|&id| document.has_flag(id, NodeFlag::SpecialTag)),
    );

    let document = context.document_mut();

    for id in to_remove {
      document.delete_node(id);
    }

    Ok(())
  }
}

impl RemoveRedundantNodesStage {
  const REDUNDANT_TAGS: [&'static str; 3] = ["script", "style", "head"];
}
