use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    str::FromStr,
};

use tree::Tree;

pub type Attributes = HashMap<String, String>;

/// Parsed XML document. Elements are `Node`s, text runs are `Leaf`s.
pub type Document = Tree<XmlNode>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attributes: Attributes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(Tag),
    Text(String),
}

impl XmlNode {
    pub fn tag_has_name(&self, name: &str) -> bool {
        matches!(self, XmlNode::Element(t) if t.name == name)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            XmlNode::Element(t) => t.attributes.get(key).map(String::as_str),
            XmlNode::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gid(pub u64);

impl FromStr for Gid {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Gid)
    }
}

impl Gid {
    /// The GID representing an empty tile in the map.
    pub const EMPTY: Gid = Gid(0);

    pub fn is_empty(self) -> bool {
        self == Gid::EMPTY
    }
}

impl fmt::Display for Gid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distinct, non-empty tile ids, kept in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileIdSet(BTreeSet<Gid>);

impl TileIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id was not present yet. `Gid::EMPTY` is never stored.
    pub fn insert(&mut self, gid: Gid) -> bool {
        !gid.is_empty() && self.0.insert(gid)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Gid> + '_ {
        self.0.iter().copied()
    }

    pub fn to_sorted_vec(&self) -> Vec<Gid> {
        self.iter().collect()
    }
}

impl Extend<Gid> for TileIdSet {
    fn extend<I: IntoIterator<Item = Gid>>(&mut self, iter: I) {
        for gid in iter {
            self.insert(gid);
        }
    }
}

impl FromIterator<Gid> for TileIdSet {
    fn from_iter<I: IntoIterator<Item = Gid>>(iter: I) -> Self {
        let mut set = TileIdSet::new();
        set.extend(iter);
        set
    }
}

/// Counters for a single `<layer>`; only used for logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerScan {
    pub name: Option<String>,
    pub tiles: usize,
    pub empty: usize,
    pub malformed: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub ids: TileIdSet,
    pub layers: Vec<LayerScan>,
    // Layers with no `<data>` child, or an empty one.
    pub layers_without_data: usize,
}

impl Extraction {
    pub fn malformed_tokens(&self) -> usize {
        self.layers.iter().map(|l| l.malformed).sum()
    }
}
