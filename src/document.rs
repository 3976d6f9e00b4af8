use super::*;

/// Node markers that are independent of tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeFlag {
  /// Comments, doctypes and processing instructions.
  SpecialTag,
  /// Leaf text content.
  Text,
}

/// A parsed HTML document addressed through arena node ids.
///
/// Every node reachable from the root at parse time is assigned its
/// pre-order position once. Deleting nodes never renumbers the survivors, so
/// positions stay usable as a sort key for the whole run.
pub(crate) struct Document {
  html: Html,
  positions: HashMap<NodeId, usize>,
}

impl Document {
  /// Nodes strictly above `id`, nearest first.
  pub(crate) fn ancestors(
    &self,
    id: NodeId,
  ) -> impl Iterator<Item = NodeId> + '_ {
    self
      .html
      .tree
      .get(id)
      .into_iter()
      .flat_map(|node| node.ancestors())
      .map(|node| node.id())
  }

  pub(crate) fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
    match self.html.tree.get(id)?.value() {
      Node::Element(element) => element.attr(name),
      _ => None,
    }
  }

  pub(crate) fn clear_attributes(&mut self, id: NodeId) {
    let Some(mut node) = self.html.tree.get_mut(id) else {
      return;
    };

    if let Node::Element(element) = node.value() {
      element.attrs.clear();
    }
  }

  /// Removes `id` and its subtree from the document. Deleting the root, a
  /// node that is already detached, or a node inside a detached subtree does
  /// nothing.
  pub(crate) fn delete_node(&mut self, id: NodeId) {
    if id == self.root() || !self.is_attached(id) {
      return;
    }

    if let Some(mut node) = self.html.tree.get_mut(id) {
      node.detach();
    }
  }

  /// Nodes strictly below `id` in document order, walked from the live tree
  /// on every call.
  pub(crate) fn descendants(
    &self,
    id: NodeId,
  ) -> impl Iterator<Item = NodeId> + '_ {
    self
      .html
      .tree
      .get(id)
      .into_iter()
      .flat_map(|node| node.descendants().skip(1))
      .map(|node| node.id())
  }

  pub(crate) fn has_ancestor_tag(&self, id: NodeId, tag: &str) -> bool {
    self
      .ancestors(id)
      .any(|ancestor| self.tag_name(ancestor) == tag)
  }

  pub(crate) fn has_flag(&self, id: NodeId, flag: NodeFlag) -> bool {
    let Some(node) = self.html.tree.get(id) else {
      return false;
    };

    match flag {
      NodeFlag::SpecialTag => matches!(
        node.value(),
        Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_)
      ),
      NodeFlag::Text => node.value().is_text(),
    }
  }

  pub(crate) fn inner_text(&self, id: NodeId) -> String {
    let Some(node) = self.html.tree.get(id) else {
      return String::new();
    };

    let mut text = String::new();

    for descendant in node.descendants() {
      if let Node::Text(value) = descendant.value() {
        text.push_str(value);
      }
    }

    text
  }

  /// Strict ancestry: a node is not its own ancestor.
  pub(crate) fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
    self.ancestors(id).any(|node| node == ancestor)
  }

  pub(crate) fn is_attached(&self, id: NodeId) -> bool {
    let root = self.root();
    id == root || self.ancestors(id).last() == Some(root)
  }

  pub(crate) fn is_self_or_ancestor(
    &self,
    ancestor: NodeId,
    id: NodeId,
  ) -> bool {
    id == ancestor || self.is_ancestor(ancestor, id)
  }

  pub(crate) fn outer_markup(&self, id: NodeId) -> String {
    let Some(node) = self.html.tree.get(id) else {
      return String::new();
    };

    match node.value() {
      Node::Element(_) => ElementRef::wrap(node)
        .map(|element| element.html())
        .unwrap_or_default(),
      Node::Text(text) => serializer::text(text),
      _ => String::new(),
    }
  }

  /// The start tag of an element with its attributes in source order, used
  /// to recognise structurally identical nodes.
  pub(crate) fn own_markup(&self, id: NodeId) -> String {
    let Some(node) = self.html.tree.get(id) else {
      return String::new();
    };

    match node.value() {
      Node::Element(element) => serializer::start_tag(element),
      Node::Text(text) => serializer::text(text),
      _ => String::new(),
    }
  }

  /// Text owned directly by `id`: a text node's content, or the direct text
  /// children of an element.
  pub(crate) fn own_text(&self, id: NodeId) -> String {
    let Some(node) = self.html.tree.get(id) else {
      return String::new();
    };

    match node.value() {
      Node::Text(text) => text.to_string(),
      Node::Element(_) => node
        .children()
        .filter_map(|child| match child.value() {
          Node::Text(text) => Some(&**text),
          _ => None,
        })
        .collect(),
      _ => String::new(),
    }
  }

  pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.html.tree.get(id)?.parent().map(|parent| parent.id())
  }

  pub(crate) fn parse(source: &str) -> Self {
    let html = Html::parse_document(source);

    for error in &html.errors {
      trace!(%error, "recovered from html parse error");
    }

    let positions = html
      .tree
      .root()
      .descendants()
      .enumerate()
      .map(|(position, node)| (node.id(), position))
      .collect();

    Self { html, positions }
  }

  /// Pre-order position assigned at parse time.
  pub(crate) fn position(&self, id: NodeId) -> usize {
    self.positions.get(&id).copied().unwrap_or(usize::MAX)
  }

  pub(crate) fn root(&self) -> NodeId {
    self.html.tree.root().id()
  }

  #[cfg(test)]
  pub(crate) fn select(&self, selector: &str) -> Vec<NodeId> {
    let selector = scraper::Selector::parse(selector).unwrap();

    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| {
        ElementRef::wrap(*node)
          .is_some_and(|element| selector.matches(&element))
      })
      .map(|node| node.id())
      .collect()
  }

  #[cfg(test)]
  pub(crate) fn select_one(&self, selector: &str) -> NodeId {
    self.select(selector)[0]
  }

  /// Replaces the value of an existing attribute. Missing attributes are left
  /// missing.
  pub(crate) fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
    let Some(mut node) = self.html.tree.get_mut(id) else {
      return;
    };

    let Node::Element(element) = node.value() else {
      return;
    };

    if let Some((_, current)) = element
      .attrs
      .iter_mut()
      .find(|(attr, _)| attr.local.as_ref() == name)
    {
      current.clear();
      current.push_slice(value);
    }
  }

  pub(crate) fn tag_name(&self, id: NodeId) -> &str {
    match self.html.tree.get(id).map(|node| node.value()) {
      Some(Node::Element(element)) => element.name(),
      _ => "",
    }
  }
}
