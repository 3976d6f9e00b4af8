use {
  context::Context,
  document::{Document, NodeFlag},
  ego_tree::NodeId,
  pipeline::Pipeline,
  regex::Regex,
  scraper::{ElementRef, Html, Node},
  serde::{Deserialize, Serialize},
  stage::{
    CleanContentStage, FixRelativeUrisStage, HarvestCandidatesStage,
    KeepLowestStage, LinkDensityStage, MergeSiblingsStage,
    NormalizeCandidatesStage, PromotePermittedTagsStage,
    PromoteToReferenceStage, RemoveDuplicateMarkupStage,
    RemoveRedundantNodesStage, RemoveSparseParentsStage, RetainDivsStage,
    SelectBestStage, Stage, TitleStage,
  },
  std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
  },
  tracing::{debug, trace},
  url::Url,
};

pub use crate::{
  error::Error,
  extraction::Extraction,
  extractor::{ContentExtractor, extract_content, extract_content_with_url},
  options::{ExtractorOptions, ExtractorOptionsBuilder},
  word_count::word_count,
};

mod context;
mod document;
mod error;
mod extraction;
mod extractor;
mod options;
mod output;
mod pipeline;
mod re;
mod serializer;
mod stage;
mod word_count;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
