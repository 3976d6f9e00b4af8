use {
  super::*,
  html5ever::serialize::{
    HtmlSerializer, SerializeOpts, Serializer, TraversalScope,
  },
  scraper::node::Element,
};

fn finish(serializer: HtmlSerializer<Vec<u8>>) -> String {
  String::from_utf8(serializer.writer).unwrap_or_default()
}

fn serializer() -> HtmlSerializer<Vec<u8>> {
  HtmlSerializer::new(
    Vec::new(),
    SerializeOpts {
      scripting_enabled: false,
      traversal_scope: TraversalScope::ChildrenOnly(None),
      create_missing_parent: false,
    },
  )
}

/// The start tag of `element`, attributes in source order.
pub(crate) fn start_tag(element: &Element) -> String {
  let mut serializer = serializer();

  let attrs = element
    .attrs
    .iter()
    .map(|(name, value)| (name, &value[..]));

  if serializer.start_elem(element.name.clone(), attrs).is_ok() {
    finish(serializer)
  } else {
    String::new()
  }
}

/// `value` escaped for use as element text.
pub(crate) fn text(value: &str) -> String {
  let mut serializer = serializer();

  if serializer.write_text(value).is_ok() {
    finish(serializer)
  } else {
    String::new()
  }
}
