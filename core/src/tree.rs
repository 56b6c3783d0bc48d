//! The property tree which decoded elements are stored in.
//!
//! A [`PropertyTree`] maps names to entries, where each entry is either a
//! nested tree (a branch) or a property holding one or more values.
//! Entries are addressed by slash separated paths, such as
//! `"SIEMENS CSA HEADER/NumberOfImagesInMosaic"`.
//! Empty path segments are ignored, so `"/A//B"` and `"A/B"` are equivalent.

use crate::value::Value;
use smallvec::SmallVec;
use std::collections::btree_map::{self, BTreeMap};

/// A property: the list of values stored under one name,
/// in the order in which they were decoded.
pub type Property = SmallVec<[Value; 1]>;

/// An entry of a property tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A nested tree
    Branch(PropertyTree),
    /// A leaf holding values
    Property(Property),
}

impl Entry {
    /// Obtain the nested tree of this entry,
    /// replacing a property with an empty branch first.
    fn make_branch(&mut self) -> &mut PropertyTree {
        if let Entry::Property(_) = self {
            *self = Entry::Branch(PropertyTree::new());
        }
        match self {
            Entry::Branch(tree) => tree,
            Entry::Property(_) => unreachable!("entry was just turned into a branch"),
        }
    }

    /// The values of this entry, if it is a property.
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Entry::Property(p) => Some(p),
            Entry::Branch(_) => None,
        }
    }

    /// The nested tree of this entry, if it is a branch.
    pub fn as_branch(&self) -> Option<&PropertyTree> {
        match self {
            Entry::Branch(t) => Some(t),
            Entry::Property(_) => None,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn split_leaf(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut parents: Vec<&str> = segments(path).collect();
    let leaf = parents.pop()?;
    Some((parents, leaf))
}

/// A hierarchical, multi-valued property tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTree {
    entries: BTreeMap<String, Entry>,
}

impl PropertyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries at the top level of the tree.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the top level entries, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Find the tree which would hold the leaf of `path`,
    /// creating intermediate branches as needed.
    fn parent_mut(&mut self, parents: &[&str]) -> &mut PropertyTree {
        let mut node = self;
        for segment in parents {
            node = node
                .entries
                .entry((*segment).to_owned())
                .or_insert_with(|| Entry::Branch(PropertyTree::new()))
                .make_branch();
        }
        node
    }

    /// Store a single value at `path`, replacing whatever was there.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        self.insert(path, Entry::Property(smallvec::smallvec![value.into()]));
    }

    /// Store an entry at `path`, replacing whatever was there.
    pub fn insert(&mut self, path: &str, entry: Entry) {
        if let Some((parents, leaf)) = split_leaf(path) {
            self.parent_mut(&parents).entries.insert(leaf.to_owned(), entry);
        }
    }

    /// Append a value to the property at `path`,
    /// creating it if it does not exist yet.
    /// A branch found at `path` is replaced.
    pub fn push(&mut self, path: &str, value: impl Into<Value>) {
        let Some((parents, leaf)) = split_leaf(path) else {
            return;
        };
        let value = value.into();
        match self.parent_mut(&parents).entries.entry(leaf.to_owned()) {
            btree_map::Entry::Occupied(mut o) => match o.get_mut() {
                Entry::Property(values) => values.push(value),
                slot => *slot = Entry::Property(smallvec::smallvec![value]),
            },
            btree_map::Entry::Vacant(v) => {
                v.insert(Entry::Property(smallvec::smallvec![value]));
            }
        }
    }

    /// Retrieve the entry at `path`.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        let (parents, leaf) = split_leaf(path)?;
        let mut node = self;
        for segment in parents {
            node = node.entries.get(segment)?.as_branch()?;
        }
        node.entries.get(leaf)
    }

    /// Retrieve all values of the property at `path`.
    pub fn property(&self, path: &str) -> Option<&Property> {
        self.get(path)?.as_property()
    }

    /// Retrieve the first value of the property at `path`.
    pub fn value(&self, path: &str) -> Option<&Value> {
        self.property(path)?.first()
    }

    /// Retrieve the branch at `path`.
    /// An empty path designates the tree itself.
    pub fn branch(&self, path: &str) -> Option<&PropertyTree> {
        let mut node = self;
        for segment in segments(path) {
            node = node.entries.get(segment)?.as_branch()?;
        }
        Some(node)
    }

    /// Retrieve the branch at `path` for modification.
    pub fn branch_mut(&mut self, path: &str) -> Option<&mut PropertyTree> {
        let mut node = self;
        for segment in segments(path) {
            node = match node.entries.get_mut(segment) {
                Some(Entry::Branch(tree)) => tree,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Retrieve the branch at `path`, creating it if needed.
    /// Properties found along the way are replaced by branches.
    pub fn touch_branch(&mut self, path: &str) -> &mut PropertyTree {
        let segments: Vec<&str> = segments(path).collect();
        self.parent_mut(&segments)
    }

    /// Whether an entry exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Remove the entry at `path`, returning it.
    pub fn remove(&mut self, path: &str) -> Option<Entry> {
        let (parents, leaf) = split_leaf(path)?;
        let mut node = self;
        for segment in parents {
            node = match node.entries.get_mut(segment) {
                Some(Entry::Branch(tree)) => tree,
                _ => return None,
            };
        }
        node.entries.remove(leaf)
    }

    /// Move the entry at `from` to `to`, replacing anything at `to`.
    /// Returns whether there was an entry to move.
    pub fn rename(&mut self, from: &str, to: &str) -> bool {
        match self.remove(from) {
            Some(entry) => {
                self.insert(to, entry);
                true
            }
            None => false,
        }
    }

    /// Merge another tree into this one.
    ///
    /// Values of properties present in both trees are accumulated,
    /// this tree's values first. Branches present in both are merged
    /// recursively. Where one tree holds a branch and the other a property,
    /// the incoming entry wins.
    pub fn merge(&mut self, other: PropertyTree) {
        for (key, incoming) in other.entries {
            match self.entries.entry(key) {
                btree_map::Entry::Vacant(v) => {
                    v.insert(incoming);
                }
                btree_map::Entry::Occupied(mut o) => match (o.get_mut(), incoming) {
                    (Entry::Property(mine), Entry::Property(theirs)) => mine.extend(theirs),
                    (Entry::Branch(mine), Entry::Branch(theirs)) => mine.merge(theirs),
                    (slot, incoming) => *slot = incoming,
                },
            }
        }
    }

    /// Visit every property of the tree depth-first, in name order,
    /// with its full path.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &Property),
    {
        fn walk_inner<F>(tree: &PropertyTree, prefix: &mut String, visit: &mut F)
        where
            F: FnMut(&str, &Property),
        {
            for (name, entry) in &tree.entries {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(name);
                match entry {
                    Entry::Property(values) => visit(prefix, values),
                    Entry::Branch(tree) => walk_inner(tree, prefix, visit),
                }
                prefix.truncate(len);
            }
        }

        walk_inner(self, &mut String::new(), &mut visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_nested() {
        let mut tree = PropertyTree::new();
        tree.set("A/B/C", "x");
        tree.set("//A/D", 5_u16);
        assert_eq!(tree.value("A/B/C"), Some(&Value::from("x")));
        assert_eq!(tree.value("A/D"), Some(&Value::U16(5)));
        assert!(tree.branch("A/B").is_some());
        assert!(tree.value("A/B").is_none());
        assert!(tree.branch("").is_some());
    }

    #[test]
    fn push_accumulates() {
        let mut tree = PropertyTree::new();
        tree.push("Name", "a");
        tree.push("Name", "b");
        let values = tree.property("Name").unwrap();
        assert_eq!(values.as_slice(), &[Value::from("a"), Value::from("b")]);
        tree.set("Name", "c");
        assert_eq!(tree.property("Name").unwrap().len(), 1);
    }

    #[test]
    fn touch_branch_replaces_property() {
        let mut tree = PropertyTree::new();
        tree.set("Seq", "leaf");
        tree.touch_branch("Seq").set("Inner", 1_i32);
        assert_eq!(tree.value("Seq/Inner"), Some(&Value::I32(1)));
    }

    #[test]
    fn merge_accumulates_and_recurses() {
        let mut left = PropertyTree::new();
        left.set("P", 1_i32);
        left.set("B/Q", "left");
        left.set("Kind", "property");

        let mut right = PropertyTree::new();
        right.set("P", 2_i32);
        right.set("B/Q", "right");
        right.set("B/R", 3.5);
        right.set("Kind/Nested", "branch");

        left.merge(right);
        assert_eq!(
            left.property("P").unwrap().as_slice(),
            &[Value::I32(1), Value::I32(2)]
        );
        assert_eq!(left.property("B/Q").unwrap().len(), 2);
        assert_eq!(left.value("B/R"), Some(&Value::F64(3.5)));
        assert_eq!(left.value("Kind/Nested"), Some(&Value::from("branch")));
    }

    #[test]
    fn remove_and_rename() {
        let mut tree = PropertyTree::new();
        tree.set("A/B", "v");
        assert!(tree.rename("A/B", "C/D"));
        assert!(!tree.contains("A/B"));
        assert_eq!(tree.value("C/D"), Some(&Value::from("v")));
        assert!(tree.remove("C/D").is_some());
        assert!(tree.remove("C/D").is_none());
        assert!(!tree.rename("nothing", "here"));
    }

    #[test]
    fn walk_visits_full_paths_in_order() {
        let mut tree = PropertyTree::new();
        tree.set("b", 1_i32);
        tree.set("a/y", 2_i32);
        tree.set("a/x", 3_i32);
        let mut seen = Vec::new();
        tree.walk(|path, _| seen.push(path.to_owned()));
        assert_eq!(seen, vec!["a/x", "a/y", "b"]);
    }
}
