use super::*;

#[derive(Parser)]
#[command(name = "content-extractor")]
#[command(
  about = "Extract the main content of an HTML file",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    value_name = "WORDS",
    help = "Minimum words a text node needs to count as prose"
  )]
  article_threshold: Option<usize>,
  #[arg(
    long,
    help = "Strip attributes and share widgets from the extracted content"
  )]
  clean: bool,
  #[arg(
    long,
    value_name = "FILE",
    help = "JSON file with extractor options"
  )]
  config: Option<PathBuf>,
  #[arg(value_name = "FILE", help = "Path to the HTML file to extract from")]
  input: PathBuf,
  #[arg(
    long,
    help = "Print the title, content and page as JSON instead of the page"
  )]
  json: bool,
  #[arg(
    long,
    value_name = "RATIO",
    help = "Drop candidates whose link word ratio reaches this value"
  )]
  link_ratio_threshold: Option<f64>,
  #[arg(
    short,
    long,
    value_name = "FILE",
    help = "Write the result here instead of stdout"
  )]
  output: Option<PathBuf>,
  #[arg(
    long,
    value_name = "URL",
    help = "Page url used to resolve relative links in the content"
  )]
  url: Option<String>,
}

impl Arguments {
  fn options(&self) -> Result<ExtractorOptions> {
    let mut options = match &self.config {
      Some(path) => {
        let config = fs::read_to_string(path).with_context(|| {
          format!("failed to read config from `{}`", path.display())
        })?;

        serde_json::from_str::<ExtractorOptions>(&config).with_context(
          || format!("failed to parse config `{}`", path.display()),
        )?
      }
      None => ExtractorOptions::default(),
    };

    if let Some(article_threshold) = self.article_threshold {
      options.article_threshold = article_threshold;
    }

    if let Some(link_ratio_threshold) = self.link_ratio_threshold {
      options.link_ratio_threshold = link_ratio_threshold;
    }

    if self.clean {
      options.clean_content = true;
    }

    Ok(options)
  }

  pub(crate) fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let extractor =
      ContentExtractor::new(&html, self.url.as_deref(), self.options()?)
        .context("failed to configure extractor")?;

    let extraction = extractor.extract().with_context(|| {
      format!("failed to extract `{}`", self.input.display())
    })?;

    let rendered = if self.json {
      serde_json::to_string_pretty(&extraction)?
    } else {
      extraction.html
    };

    match &self.output {
      Some(path) => fs::write(path, rendered).with_context(|| {
        format!("failed to write output to `{}`", path.display())
      })?,
      None => println!("{rendered}"),
    }

    Ok(())
  }
}
