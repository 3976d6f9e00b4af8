use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;

      debug!(
        stage = stage.name(),
        candidates = self.context.candidates().len(),
        "stage finished"
      );
    }

    Ok(self.context)
  }

  /// Builds the fixed stage order. Optional passes are switched in from the
  /// context's options; link correction runs whenever a base url is given.
  pub(crate) fn with_default_stages(
    context: Context<'a>,
    base_url: Option<&'a Url>,
  ) -> Self {
    let options = context.options();

    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(TitleStage));
    pipeline.add_stage(Box::new(RemoveRedundantNodesStage));
    pipeline.add_stage(Box::new(HarvestCandidatesStage));

    if options.filter_sparse_parents {
      pipeline.add_stage(Box::new(RemoveSparseParentsStage));
    }

    pipeline.add_stage(Box::new(LinkDensityStage));
    pipeline.add_stage(Box::new(PromotePermittedTagsStage));
    pipeline.add_stage(Box::new(RetainDivsStage));

    if options.early_promotion {
      pipeline.add_stage(Box::new(PromoteToReferenceStage));
    }

    pipeline.add_stage(Box::new(NormalizeCandidatesStage));
    pipeline.add_stage(Box::new(KeepLowestStage));
    pipeline.add_stage(Box::new(MergeSiblingsStage));
    pipeline.add_stage(Box::new(PromoteToReferenceStage));
    pipeline.add_stage(Box::new(NormalizeCandidatesStage));
    pipeline.add_stage(Box::new(RemoveDuplicateMarkupStage));
    pipeline.add_stage(Box::new(SelectBestStage));

    if base_url.is_some() {
      pipeline.add_stage(Box::new(FixRelativeUrisStage::new(base_url)));
    }

    if options.clean_content {
      pipeline.add_stage(Box::new(CleanContentStage));
    }

    pipeline
  }
}
