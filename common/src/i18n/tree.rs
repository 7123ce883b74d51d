//! Nested message trees and the deep-merge rule.
//!
//! A [`MessageTree`] maps segment names to [`MessageNode`]s, which are either
//! leaf strings or further trees. Merging follows a single precedence rule:
//! when both sides hold a tree the merge recurses, otherwise the incoming node
//! replaces the stored one. Keys absent from the incoming tree are never
//! touched.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry within a [`MessageTree`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageNode {
    /// Translated leaf string.
    Text(String),
    /// Nested namespace.
    Tree(MessageTree),
}

impl MessageNode {
    /// Returns the leaf string, or `None` for inner nodes.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Tree(_) => None,
        }
    }

    /// Returns the nested tree, or `None` for leaves.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&MessageTree> {
        match self {
            Self::Text(_) => None,
            Self::Tree(tree) => Some(tree),
        }
    }
}

impl From<&str> for MessageNode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for MessageNode {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<MessageTree> for MessageNode {
    fn from(value: MessageTree) -> Self {
        Self::Tree(value)
    }
}

/// Wire shape accepted when deserialising bundles.
///
/// Non-string scalars are accepted so bundle authors can write `count = 3`
/// without quoting; they are stored as their string rendering.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Tree(BTreeMap<String, RawNode>),
}

impl From<RawNode> for MessageNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Text(text) => Self::Text(text),
            RawNode::Integer(number) => Self::Text(number.to_string()),
            RawNode::Float(number) => Self::Text(number.to_string()),
            RawNode::Flag(flag) => Self::Text(flag.to_string()),
            RawNode::Tree(entries) => Self::Tree(
                entries
                    .into_iter()
                    .map(|(key, node)| (key, Self::from(node)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for MessageNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer).map(Self::from)
    }
}

/// Recursively nested mapping from segment name to [`MessageNode`].
///
/// ```
/// use lexis_common::i18n::{MessageNode, MessageTree};
///
/// let mut stored = MessageTree::from_iter([(
///     "styleManager",
///     MessageTree::from_iter([
///         ("empty", MessageNode::from("Select an element first")),
///         ("layer", MessageNode::from("Layer")),
///     ]),
/// )]);
/// let patch = MessageTree::from_iter([(
///     "styleManager",
///     MessageTree::from_iter([("empty", MessageNode::from("Nothing selected"))]),
/// )]);
///
/// stored.merge(patch);
/// assert_eq!(stored.text_at(&["styleManager", "empty"]), Some("Nothing selected"));
/// assert_eq!(stored.text_at(&["styleManager", "layer"]), Some("Layer"));
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MessageTree {
    entries: BTreeMap<String, MessageNode>,
}

impl MessageTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the direct child called `segment`.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&MessageNode> {
        self.entries.get(segment)
    }

    /// Insert a direct child, returning the node it replaced.
    pub fn insert(
        &mut self,
        segment: impl Into<String>,
        node: impl Into<MessageNode>,
    ) -> Option<MessageNode> {
        self.entries.insert(segment.into(), node.into())
    }

    /// Iterate over the direct children in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, MessageNode> {
        self.entries.iter()
    }

    /// Walks `path` from this tree and returns the node it addresses.
    ///
    /// An empty path addresses nothing.
    #[must_use]
    pub fn node_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&MessageNode> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment.as_ref())?.as_tree()?;
        }
        current.get(last.as_ref())
    }

    /// Returns the leaf string at `path`.
    ///
    /// Paths that stop at an inner node yield `None`.
    #[must_use]
    pub fn text_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&str> {
        self.node_at(path).and_then(MessageNode::as_text)
    }

    /// Deep-merge `incoming` into this tree.
    ///
    /// Trees meeting trees merge recursively; any other pairing lets the
    /// incoming node win. Siblings absent from `incoming` are preserved.
    pub fn merge(&mut self, incoming: Self) {
        for (key, node) in incoming.entries {
            match node {
                MessageNode::Tree(patch) => match self.entries.get_mut(&key) {
                    Some(MessageNode::Tree(existing)) => existing.merge(patch),
                    _ => {
                        self.entries.insert(key, MessageNode::Tree(patch));
                    }
                },
                text @ MessageNode::Text(_) => {
                    self.entries.insert(key, text);
                }
            }
        }
    }

    /// Collects the path of every leaf string, depth first in key order.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        let mut prefix = Vec::new();
        self.collect_leaf_paths(&mut prefix, &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, prefix: &mut Vec<String>, paths: &mut Vec<Vec<String>>) {
        for (key, node) in &self.entries {
            prefix.push(key.clone());
            match node {
                MessageNode::Text(_) => paths.push(prefix.clone()),
                MessageNode::Tree(tree) => tree.collect_leaf_paths(prefix, paths),
            }
            prefix.pop();
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MessageTree
where
    K: Into<String>,
    V: Into<MessageNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MessageTree {
    type Item = (&'a String, &'a MessageNode);
    type IntoIter = btree_map::Iter<'a, String, MessageNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
