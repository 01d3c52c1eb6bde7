// ABOUTME: Arena-backed document tree built on ego-tree with NodeId handles.
// ABOUTME: Provides predicate queries in document order and in-place structural edits.

use ego_tree::{NodeId, NodeRef, Tree};

use super::node::{Element, Node};

/// Tag used for the synthetic root element.
pub const ROOT_TAG: &str = "body";

/// A rendered document. The root element stands for the content region and is
/// never serialized itself.
///
/// Nodes are addressed by [`NodeId`]. Removing a node detaches its subtree;
/// stale ids keep resolving inside the arena but are no longer reachable from
/// the root, so use [`Document::is_attached`] before acting on ids collected
/// ahead of a mutation.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(Node::element(ROOT_TAG)),
        }
    }

    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.tree.get(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.tree.get(id).and_then(|n| n.value().as_element())
    }

    /// Runs `f` against the element at `id`. Returns `None` for text nodes.
    pub fn update_element<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        node.value().as_element_mut().map(f)
    }

    /// True when `id` is the given tag.
    pub fn is_tag(&self, id: NodeId, name: &str) -> bool {
        self.tree.get(id).is_some_and(|n| n.value().is_tag(name))
    }

    /// True when the node is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let root = self.root();
        let mut cur = self.tree.get(id);
        while let Some(node) = cur {
            if node.id() == root {
                return true;
            }
            cur = node.parent();
        }
        false
    }

    /// All elements matching `pred`, depth-first in document order. The root
    /// itself is never returned.
    pub fn select<P>(&self, pred: P) -> Vec<NodeId>
    where
        P: Fn(&Element) -> bool,
    {
        self.select_within(self.root(), pred)
    }

    /// Elements matching `pred` below `scope` (exclusive), in document order.
    pub fn select_within<P>(&self, scope: NodeId, pred: P) -> Vec<NodeId>
    where
        P: Fn(&Element) -> bool,
    {
        let Some(scope) = self.tree.get(scope) else {
            return Vec::new();
        };
        scope
            .descendants()
            .skip(1)
            .filter(|n| n.value().as_element().is_some_and(&pred))
            .map(|n| n.id())
            .collect()
    }

    /// First match below `scope`, in document order.
    pub fn find_within<P>(&self, scope: NodeId, pred: P) -> Option<NodeId>
    where
        P: Fn(&Element) -> bool,
    {
        let scope = self.tree.get(scope)?;
        scope
            .descendants()
            .skip(1)
            .find(|n| n.value().as_element().is_some_and(&pred))
            .map(|n| n.id())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.parent().map(|p| p.id())
    }

    /// Ids of all child nodes, text included.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| n.children().map(|c| c.id()).collect())
            .unwrap_or_default()
    }

    /// Ids of element children only.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|n| {
                n.children()
                    .filter(|c| c.value().as_element().is_some())
                    .map(|c| c.id())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw previous sibling (text nodes included).
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.tree.get(id)?.prev_sibling().map(|n| n.id())
    }

    /// Previous sibling that is an element.
    pub fn prev_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.tree.get(id)?.prev_sibling();
        while let Some(node) = cur {
            if node.value().as_element().is_some() {
                return Some(node.id());
            }
            cur = node.prev_sibling();
        }
        None
    }

    /// Next sibling that is an element.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.tree.get(id)?.next_sibling();
        while let Some(node) = cur {
            if node.value().as_element().is_some() {
                return Some(node.id());
            }
            cur = node.next_sibling();
        }
        None
    }

    /// Concatenated text of every text node below `id`.
    pub fn text(&self, id: NodeId) -> String {
        let Some(node) = self.tree.get(id) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|n| n.value().as_text())
            .collect()
    }

    /// No element children and no non-whitespace text.
    pub fn is_empty_element(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(|n| {
            n.value().as_element().is_some() && n.children().all(|c| c.value().is_blank_text())
        })
    }

    /// Appends a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, node: Node) -> Option<NodeId> {
        let mut parent = self.tree.get_mut(parent)?;
        Some(parent.append(node).id())
    }

    /// Inserts a new node right before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, node: Node) -> Option<NodeId> {
        if self.parent(sibling).is_none() {
            return None;
        }
        let mut sibling = self.tree.get_mut(sibling)?;
        Some(sibling.insert_before(node).id())
    }

    /// Inserts a new node right after `sibling`.
    pub fn insert_after(&mut self, sibling: NodeId, node: Node) -> Option<NodeId> {
        if self.parent(sibling).is_none() {
            return None;
        }
        let mut sibling = self.tree.get_mut(sibling)?;
        Some(sibling.insert_after(node).id())
    }

    /// Moves an existing node to the front of `parent`'s children.
    pub fn prepend_existing(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.tree.get(child).is_none() {
            return;
        }
        if let Some(mut parent) = self.tree.get_mut(parent) {
            parent.prepend_id(child);
        }
    }

    /// Detaches `id` and its subtree from the document.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root() {
            return;
        }
        if let Some(mut node) = self.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Puts `node` where `id` was and detaches `id`.
    pub fn replace(&mut self, id: NodeId, node: Node) -> Option<NodeId> {
        let new_id = self.insert_before(id, node)?;
        self.remove(id);
        Some(new_id)
    }

    /// Replaces `id` with a text node holding its flattened text. Empty text
    /// just removes the node.
    pub fn replace_with_text(&mut self, id: NodeId) -> Option<NodeId> {
        let text = self.text(id);
        if text.is_empty() {
            self.remove(id);
            None
        } else {
            self.replace(id, Node::Text(text))
        }
    }

    /// Splices the children of `id` into its parent in place of `id`.
    pub fn unwrap(&mut self, id: NodeId) {
        if self.parent(id).is_none() {
            return;
        }
        for child in self.children(id) {
            if let Some(mut anchor) = self.tree.get_mut(id) {
                anchor.insert_id_before(child);
            }
        }
        self.remove(id);
    }

    /// Drops all children of `id` and replaces them with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        for child in self.children(id) {
            self.remove(child);
        }
        let text = text.into();
        if !text.is_empty() {
            self.append(id, Node::Text(text));
        }
    }

    /// Merges runs of adjacent text nodes below `id`.
    pub fn merge_adjacent_text(&mut self, id: NodeId) {
        let Some(scope) = self.tree.get(id) else {
            return;
        };
        let parents: Vec<NodeId> = scope
            .descendants()
            .filter(|n| n.has_children())
            .map(|n| n.id())
            .collect();

        for parent in parents {
            let mut run_start: Option<NodeId> = None;
            for child in self.children(parent) {
                let text = self
                    .tree
                    .get(child)
                    .and_then(|n| n.value().as_text().map(str::to_owned));
                let Some(text) = text else {
                    run_start = None;
                    continue;
                };
                match run_start {
                    Some(start) => {
                        if let Some(mut head) = self.tree.get_mut(start) {
                            if let Node::Text(existing) = head.value() {
                                existing.push_str(&text);
                            }
                        }
                        self.remove(child);
                    }
                    None => run_start = Some(child),
                }
            }
        }
    }

    pub(crate) fn tree(&self) -> &Tree<Node> {
        &self.tree
    }
}
