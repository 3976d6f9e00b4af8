use super::*;

const BODY_STYLE: &str = "width: 800px; margin: auto; text-align: justify;";

/// Wraps the selected content in a minimal page, headed by the title when
/// there is one.
pub(crate) fn compose(title: &str, content: &str) -> String {
  let mut html = format!("<html><body style='{BODY_STYLE}'>");

  if !title.is_empty() {
    html.push_str("<h1>");
    html.push_str(&serializer::text(title));
    html.push_str("</h1>");
  }

  html.push_str(content);
  html.push_str("</body></html>");

  html
}
