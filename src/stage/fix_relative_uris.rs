use super::*;

static LINK_ATTRIBUTES: [(&str, &str); 2] = [("a", "href"), ("img", "src")];

pub struct FixRelativeUrisStage<'a> {
  base_url: Option<&'a Url>,
}

impl Stage for FixRelativeUrisStage<'_> {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(base_url) = self.base_url else {
      return Ok(());
    };

    let Some(selected) = context.selected() else {
      return Ok(());
    };

    Self::fix_relative_uris(context.document_mut(), selected, base_url);

    Ok(())
  }
}

impl<'a> FixRelativeUrisStage<'a> {
  fn fix_relative_uris(document: &mut Document, root: NodeId, base_url: &Url) {
    let view: &Document = document;

    let rewrites = view
      .descendants(root)
      .flat_map(|id| {
        LINK_ATTRIBUTES
          .iter()
          .filter(move |(tag, _)| view.tag_name(id) == *tag)
          .filter_map(move |&(_, attribute)| {
            let value = view.attribute(id, attribute)?;
            let resolved = Self::resolve_uri(base_url, value)?;
            Some((id, attribute, resolved))
          })
      })
      .collect::<Vec<_>>();

    debug!(count = rewrites.len(), "resolving relative links");

    for (id, attribute, resolved) in rewrites {
      document.set_attribute(id, attribute, &resolved);
    }
  }

  fn is_javascript_uri(value: &str) -> bool {
    value
      .trim_start()
      .to_ascii_lowercase()
      .starts_with("javascript:")
  }

  pub fn new(base_url: Option<&'a Url>) -> Self {
    Self { base_url }
  }

  /// Absolute form of a relative `value`, or `None` when the value should be
  /// left untouched.
  fn resolve_uri(base_url: &Url, value: &str) -> Option<String> {
    if value.is_empty()
      || value.starts_with('#')
      || Self::is_javascript_uri(value)
      || Url::parse(value).is_ok()
    {
      return None;
    }

    base_url.join(value).ok().map(String::from)
  }
}
