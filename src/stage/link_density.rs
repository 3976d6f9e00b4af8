use super::*;

/// Drops candidates whose words mostly sit inside anchors, which is how
/// menus and link lists look.
pub struct LinkDensityStage;

impl Stage for LinkDensityStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();
    let threshold = context.options().link_ratio_threshold;

    let candidates = context
      .candidates()
      .iter()
      .copied()
      .filter(|&id| Self::link_ratio(document, id) < threshold)
      .collect();

    context.set_candidates(candidates);

    Ok(())
  }
}

impl LinkDensityStage {
  /// Share of the node's words that belong to text nodes with an `<a>`
  /// somewhere above them. The ancestor walk is not bounded by `id`, so a
  /// node nested in an anchor counts as all link.
  fn link_ratio(document: &Document, id: NodeId) -> f64 {
    let words = word_count(&document.inner_text(id));

    let link_words: usize = document
      .descendants(id)
      .filter(|&descendant| {
        document.has_flag(descendant, NodeFlag::Text)
          && document.has_ancestor_tag(descendant, "a")
      })
      .map(|descendant| word_count(&document.own_text(descendant)))
      .sum();

    let link_words =
      f64::from(u32::try_from(link_words).unwrap_or(u32::MAX));

    let words = f64::from(u32::try_from(words).unwrap_or(u32::MAX));

    link_words / words
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const FIFTEEN: &str = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12 w13 w14 w15";

  const FIVE: &str = "l1 l2 l3 l4 l5";

  fn surviving(html: &str) -> usize {
    let options = ExtractorOptions::default();

    let mut context = seeded_context(html, "div", &options);

    LinkDensityStage.run(&mut context).unwrap();

    context.candidates().len()
  }

  #[test]
  fn drops_mostly_linked_paragraph() {
    assert_eq!(
      surviving(&format!(
        "<html><body><div><p>{FIVE} <a href=\"/x\">{FIFTEEN}</a></p></div></body></html>"
      )),
      0
    );
  }

  #[test]
  fn keeps_lightly_linked_paragraph() {
    assert_eq!(
      surviving(&format!(
        "<html><body><div><p>{FIFTEEN} <a href=\"/x\">{FIVE}</a></p></div></body></html>"
      )),
      1
    );
  }

  #[test]
  fn ratio_counts_nested_anchor_text_once() {
    let document = Document::parse(&format!(
      "<html><body><div><p>{FIFTEEN} <a><b>{FIVE}</b></a></p></div></body></html>"
    ));

    let div = document.select_one("div");

    assert_eq!(LinkDensityStage::link_ratio(&document, div), 0.25);
  }

  #[test]
  fn candidate_inside_anchor_is_all_link() {
    let document = Document::parse(&format!(
      "<html><body><a href=\"/\"><div>{FIFTEEN}</div></a></body></html>"
    ));

    let div = document.select_one("div");

    assert_eq!(LinkDensityStage::link_ratio(&document, div), 1.0);
  }

  #[test]
  fn ratio_at_threshold_is_dropped() {
    let ten = "a b c d e f g h i j";

    assert_eq!(
      surviving(&format!(
        "<html><body><div><p>{ten} <a>{ten}</a></p></div></body></html>"
      )),
      0
    );
  }
}
