use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorOptions {
  /// Minimum number of words a text node needs to count as prose.
  pub article_threshold: usize,
  /// Strip attributes and share widgets from the selected content.
  pub clean_content: bool,
  /// Promote candidates to their highest candidate ancestor right after the
  /// div restriction, before duplicates are collapsed.
  pub early_promotion: bool,
  /// Drop harvested parents whose whole text is not longer than
  /// `article_threshold`.
  pub filter_sparse_parents: bool,
  /// Candidates whose share of anchor words reaches this ratio are dropped.
  pub link_ratio_threshold: f64,
  /// Anchors pointing at any of these hosts mark their container as a widget
  /// when `clean_content` is set.
  pub widget_hosts: Vec<String>,
}

impl Default for ExtractorOptions {
  fn default() -> Self {
    Self {
      article_threshold: 10,
      clean_content: false,
      early_promotion: false,
      filter_sparse_parents: false,
      link_ratio_threshold: 0.5,
      widget_hosts: vec!["facebook.com".to_string()],
    }
  }
}

impl ExtractorOptions {
  #[must_use]
  pub fn builder() -> ExtractorOptionsBuilder {
    ExtractorOptionsBuilder::default()
  }

  pub(crate) fn validate(&self) -> Result {
    if !(0.0..1.0).contains(&self.link_ratio_threshold) {
      return Err(Error::InvalidLinkRatioThreshold(self.link_ratio_threshold));
    }

    Ok(())
  }
}

#[derive(Default)]
pub struct ExtractorOptionsBuilder {
  inner: ExtractorOptions,
}

impl ExtractorOptionsBuilder {
  #[must_use]
  pub fn article_threshold(self, article_threshold: usize) -> Self {
    Self {
      inner: ExtractorOptions {
        article_threshold,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ExtractorOptions {
    self.inner
  }

  #[must_use]
  pub fn clean_content(self, clean_content: bool) -> Self {
    Self {
      inner: ExtractorOptions {
        clean_content,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn early_promotion(self, early_promotion: bool) -> Self {
    Self {
      inner: ExtractorOptions {
        early_promotion,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn filter_sparse_parents(self, filter_sparse_parents: bool) -> Self {
    Self {
      inner: ExtractorOptions {
        filter_sparse_parents,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn link_ratio_threshold(self, link_ratio_threshold: f64) -> Self {
    Self {
      inner: ExtractorOptions {
        link_ratio_threshold,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn widget_hosts<I, S>(self, hosts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: ExtractorOptions {
        widget_hosts: hosts.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }
}
