use super::*;

/// Extracts the main content region of one HTML document.
///
/// Parsing happens inside [`ContentExtractor::extract`], so an extractor can
/// be built on one thread and run on another.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
  base_url: Option<Url>,
  html: String,
  options: ExtractorOptions,
}

impl ContentExtractor {
  /// Runs the pipeline and returns the title, the selected content and the
  /// composed page.
  ///
  /// Fails with [`Error::MissingContent`] when no text node in the document
  /// is longer than the article threshold or every candidate is filtered
  /// out.
  pub fn extract(self) -> Result<Extraction> {
    let document = Document::parse(&self.html);

    let context = Context::new(document, &self.options);

    let context =
      Pipeline::with_default_stages(context, self.base_url.as_ref()).run()?;

    let selected = context.selected().ok_or(Error::MissingContent)?;

    let content = context.document().outer_markup(selected);

    Ok(Extraction::new(context.title().to_string(), content))
  }

  pub fn new(
    html: &str,
    base_url: Option<&str>,
    options: ExtractorOptions,
  ) -> Result<Self> {
    options.validate()?;

    let base_url = base_url.map(Url::parse).transpose()?;

    Ok(Self {
      base_url,
      html: html.to_string(),
      options,
    })
  }
}

/// Returns the composed page for the main content of `html`.
pub fn extract_content(
  html: &str,
  options: &ExtractorOptions,
) -> Result<String> {
  Ok(ContentExtractor::new(html, None, options.clone())?.extract()?.html)
}

/// Like [`extract_content`], additionally resolving relative `a[href]` and
/// `img[src]` values inside the content against `url`.
pub fn extract_content_with_url(
  html: &str,
  url: &str,
  options: &ExtractorOptions,
) -> Result<String> {
  Ok(
    ContentExtractor::new(html, Some(url), options.clone())?
      .extract()?
      .html,
  )
}
