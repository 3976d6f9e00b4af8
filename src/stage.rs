use super::*;

mod clean_content;
mod fix_relative_uris;
mod harvest_candidates;
mod keep_lowest;
mod link_density;
mod merge_siblings;
mod normalize_candidates;
mod promote_permitted_tags;
mod promote_to_reference;
mod remove_duplicate_markup;
mod remove_redundant_nodes;
mod remove_sparse_parents;
mod retain_divs;
mod select_best;
mod title;

pub use {
  clean_content::CleanContentStage, fix_relative_uris::FixRelativeUrisStage,
  harvest_candidates::HarvestCandidatesStage, keep_lowest::KeepLowestStage,
  link_density::LinkDensityStage, merge_siblings::MergeSiblingsStage,
  normalize_candidates::NormalizeCandidatesStage,
  promote_permitted_tags::PromotePermittedTagsStage,
  promote_to_reference::PromoteToReferenceStage,
  remove_duplicate_markup::RemoveDuplicateMarkupStage,
  remove_redundant_nodes::RemoveRedundantNodesStage,
  remove_sparse_parents::RemoveSparseParentsStage,
  retain_divs::RetainDivsStage, select_best::SelectBestStage,
  title::TitleStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;

  fn name(&self) -> &'static str {
    let name = std::any::type_name::<Self>();
    name.rsplit("::").next().unwrap_or(name)
  }
}

/// Parses `html` into a context whose candidate list holds the nodes matched
/// by `selector`, in document order.
#[cfg(test)]
pub(crate) fn seeded_context<'a>(
  html: &str,
  selector: &str,
  options: &'a ExtractorOptions,
) -> Context<'a> {
  let document = Document::parse(html);
  let candidates = document.select(selector);

  let mut context = Context::new(document, options);
  context.set_candidates(candidates);
  context
}
