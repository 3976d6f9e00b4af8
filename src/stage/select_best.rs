use super::*;

/// Picks the candidate with the most words; the earliest one wins a tie.
pub struct SelectBestStage;

impl Stage for SelectBestStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let document = context.document();

    let counts = context
      .candidates()
      .iter()
      .map(|&id| (id, word_count(&document.inner_text(id))))
      .collect::<Vec<_>>();

    let max = counts
      .iter()
      .map(|&(_, words)| words)
      .max()
      .ok_or(Error::MissingContent)?;

    let (selected, words) = counts
      .into_iter()
      .find(|&(_, words)| words == max)
      .ok_or(Error::MissingContent)?;

    debug!(
      words,
      tag = document.tag_name(selected),
      "selected content root"
    );

    context.set_selected(selected);

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn picks_the_wordiest_candidate() {
    let options = ExtractorOptions::default();

    let mut context = seeded_context(
      "<html><body><div id=\"a\">one two</div><div id=\"b\">one two three</div></body></html>",
      "div",
      &options,
    );

    SelectBestStage.run(&mut context).unwrap();

    assert_eq!(
      context.selected(),
      Some(context.document().select_one("#b"))
    );
  }

  #[test]
  fn first_candidate_wins_a_tie() {
    let options = ExtractorOptions::default();

    let mut context = seeded_context(
      "<html><body><div id=\"a\">one two</div><div id=\"b\">three four</div></body></html>",
      "div",
      &options,
    );

    let mut reversed = context.candidates().to_vec();
    reversed.reverse();
    context.set_candidates(reversed);

    SelectBestStage.run(&mut context).unwrap();

    assert_eq!(
      context.selected(),
      Some(context.document().select_one("#b"))
    );
  }

  #[test]
  fn empty_candidate_list_is_an_error() {
    let options = ExtractorOptions::default();

    let mut context = seeded_context(
      "<html><body><p>nothing</p></body></html>",
      "div",
      &options,
    );

    assert!(matches!(
      SelectBestStage.run(&mut context),
      Err(Error::MissingContent)
    ));
    assert_eq!(context.selected(), None);
  }
}
