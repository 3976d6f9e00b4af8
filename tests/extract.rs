use {
  content_extractor::{
    ContentExtractor, Error, Extraction, ExtractorOptions, extract_content,
    extract_content_with_url, word_count,
  },
  pretty_assertions::assert_eq,
};

const FIFTEEN: &str = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen";

const SHARE: &str =
  "Share this story with your friends and family on every social network";

const STORY: &str = "The bridge over the river will close for repairs next month, and the council has promised a temporary ferry service for the thousands of commuters who cross it every single working day";

fn extract(html: &str, options: ExtractorOptions) -> String {
  ContentExtractor::new(html, None, options)
    .unwrap()
    .extract()
    .unwrap()
    .content
}

#[test]
fn extracts_titled_page() {
  let html = format!(
    "<html><head><title>T</title><script>x</script></head><body><div><p>{FIFTEEN}</p></div><div><a>link</a></div></body></html>"
  );

  let page = extract_content(&html, &ExtractorOptions::default()).unwrap();

  insta::assert_snapshot!(page, @"<html><body style='width: 800px; margin: auto; text-align: justify;'><h1>T</h1><div><p>one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen</p></div></body></html>");
}

#[test]
fn omits_heading_without_title() {
  let html = format!(
    "<html><body><div><p>{FIFTEEN}</p></div><span>menu</span></body></html>"
  );

  let page = extract_content(&html, &ExtractorOptions::default()).unwrap();

  assert!(!page.contains("<h1>"));
  assert!(page.contains(FIFTEEN));
}

#[test]
fn reports_missing_content_for_short_text() {
  assert!(matches!(
    extract_content(
      "<html><body><p>short text only</p></body></html>",
      &ExtractorOptions::default()
    ),
    Err(Error::MissingContent)
  ));
}

#[test]
fn reports_missing_content_when_everything_is_links() {
  let html = format!(
    "<html><body><div><a href=\"#\">{FIFTEEN}</a></div><span>x</span></body></html>"
  );

  assert!(matches!(
    extract_content(&html, &ExtractorOptions::default()),
    Err(Error::MissingContent)
  ));
}

#[test]
fn reports_missing_content_when_every_candidate_repeats() {
  let html = format!(
    "<html><body><div id=\"a\"><span>x</span><div class=\"w\">{SHARE}</div></div><div id=\"b\"><span>y</span><div class=\"w\">{SHARE}</div></div></body></html>"
  );

  assert!(matches!(
    extract_content(&html, &ExtractorOptions::default()),
    Err(Error::MissingContent)
  ));
}

#[test]
fn sibling_widgets_lose_to_the_story() {
  let html = format!(
    "<html><body><div id=\"story\"><p>{STORY}</p></div><div id=\"widgets\"><div class=\"share\"><p>{SHARE}</p></div><div class=\"share\"><p>{SHARE}</p></div></div></body></html>"
  );

  let content = extract(&html, ExtractorOptions::default());

  assert_eq!(content, format!("<div id=\"story\"><p>{STORY}</p></div>"));
}

#[test]
fn lower_candidate_wins_by_default() {
  let html = format!(
    "<html><body><span>x</span><div id=\"outer\"><p>{SHARE}</p><div id=\"inner\"><p>{STORY}</p></div></div></body></html>"
  );

  let content = extract(&html, ExtractorOptions::default());

  assert_eq!(content, format!("<div id=\"inner\"><p>{STORY}</p></div>"));
}

#[test]
fn early_promotion_prefers_enclosing_candidate() {
  let html = format!(
    "<html><body><span>x</span><div id=\"outer\"><p>{SHARE}</p><div id=\"inner\"><p>{STORY}</p></div></div></body></html>"
  );

  let content = extract(
    &html,
    ExtractorOptions::builder().early_promotion(true).build(),
  );

  assert!(content.starts_with("<div id=\"outer\">"));
  assert!(content.contains(SHARE));
  assert!(content.contains(STORY));
}

#[test]
fn sparse_parent_filter_keeps_real_content() {
  let html = format!(
    "<html><body><div><p>{STORY}</p></div><span>menu</span></body></html>"
  );

  assert_eq!(
    extract(
      &html,
      ExtractorOptions::builder().filter_sparse_parents(true).build()
    ),
    extract(&html, ExtractorOptions::default())
  );
}

#[test]
fn higher_threshold_ignores_shorter_prose() {
  let html = format!(
    "<html><body><div id=\"a\"><p>{FIFTEEN}</p></div><div id=\"b\"><p>{STORY}</p></div></body></html>"
  );

  let options = ExtractorOptions::builder().article_threshold(20).build();

  assert_eq!(
    extract(&html, options),
    format!("<div id=\"b\"><p>{STORY}</p></div>")
  );
}

#[test]
fn resolves_relative_links_against_url() {
  let html = format!(
    "<html><body><div><p>{STORY} <a href=\"docs/page.html\">docs</a></p><img src=\"/logo.png\"></div><span>x</span></body></html>"
  );

  let page = extract_content_with_url(
    &html,
    "https://example.org/news/today.html",
    &ExtractorOptions::default(),
  )
  .unwrap();

  assert!(page.contains("href=\"https://example.org/news/docs/page.html\""));
  assert!(page.contains("src=\"https://example.org/logo.png\""));
}

#[test]
fn leaves_links_alone_without_url() {
  let html = format!(
    "<html><body><div><p>{STORY} <a href=\"docs/page.html\">docs</a></p></div><span>x</span></body></html>"
  );

  let page = extract_content(&html, &ExtractorOptions::default()).unwrap();

  assert!(page.contains("href=\"docs/page.html\""));
}

#[test]
fn cleans_selected_content() {
  let html = format!(
    "<html><body><div id=\"nav\">menu</div><div id=\"main\"><p style=\"color: red\">{FIFTEEN}</p><div class=\"share\"><a href=\"https://facebook.com/sharer\">Share</a></div></div></body></html>"
  );

  let content =
    extract(&html, ExtractorOptions::builder().clean_content(true).build());

  insta::assert_snapshot!(content, @r#"<div id="main"><p>one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen</p></div>"#);
}

#[test]
fn extraction_serializes_all_parts() {
  let html = format!(
    "<html><head><title>T</title></head><body><div><p>{FIFTEEN}</p></div><span>x</span></body></html>"
  );

  let extraction =
    ContentExtractor::new(&html, None, ExtractorOptions::default())
      .unwrap()
      .extract()
      .unwrap();

  let value = serde_json::to_value(&extraction).unwrap();

  assert_eq!(value["title"], "T");
  assert_eq!(value["content"], format!("<div><p>{FIFTEEN}</p></div>"));
  assert_eq!(value["html"], extraction.html);

  let decoded: Extraction = serde_json::from_value(value).unwrap();

  assert_eq!(decoded, extraction);
}

#[test]
fn counts_words_like_the_pipeline() {
  assert_eq!(word_count(FIFTEEN), 15);
  assert_eq!(word_count("a\r\n\tb"), 2);
}
