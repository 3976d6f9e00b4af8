use super::*;

/// Strips presentational attributes from the selected content and removes
/// share widgets: containers holding buttons or links to a known widget host.
pub struct CleanContentStage;

impl Stage for CleanContentStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(selected) = context.selected() else {
      return Ok(());
    };

    let widget_hosts = &context.options().widget_hosts;

    let document = context.document_mut();

    let widgets = Self::find_widgets(document, selected, widget_hosts);

    let descendants = document.descendants(selected).collect::<Vec<_>>();

    for id in descendants {
      if !Self::KEPT_ATTRIBUTE_TAGS.contains(&document.tag_name(id)) {
        document.clear_attributes(id);
      }
    }

    debug!(count = widgets.len(), "removing widgets");

    for id in widgets {
      document.delete_node(id);
    }

    Ok(())
  }
}

impl CleanContentStage {
  const CONTAINER_TAGS: [&'static str; 3] = ["div", "span", "section"];

  const KEPT_ATTRIBUTE_TAGS: [&'static str; 2] = ["a", "img"];

  /// Nearest `div`, `span` or `section` strictly between `id` and `root`.
  fn container(
    document: &Document,
    root: NodeId,
    id: NodeId,
  ) -> Option<NodeId> {
    document
      .ancestors(id)
      .take_while(|&ancestor| ancestor != root)
      .find(|&ancestor| {
        Self::CONTAINER_TAGS.contains(&document.tag_name(ancestor))
      })
  }

  fn find_widgets(
    document: &Document,
    root: NodeId,
    widget_hosts: &[String],
  ) -> Vec<NodeId> {
    document
      .descendants(root)
      .filter(|&id| match document.tag_name(id) {
        "button" => true,
        "a" => document.attribute(id, "href").is_some_and(|href| {
          widget_hosts.iter().any(|host| href.contains(host.as_str()))
        }),
        _ => false,
      })
      .filter_map(|id| Self::container(document, root, id))
      .collect()
  }
}
