mod node;

use self::node::Node;
use crate::config::TreeConfig;
use crate::data::{Family, Range};
use crate::error::*;
use crate::index::PrefixOps;
use std::mem;
use tracing::{debug, trace};

/// Longest-match index over IP prefixes
///
/// A balanced multiway search tree whose keys are ranges. Keys within a node
/// never cover each other. A range broader than a key is kept in the node's
/// cover list instead, so nested prefixes need not be copied into every
/// descendant.
#[derive(Debug)]
pub struct PrefixTree<T> {
    root: Node<T>,
    config: TreeConfig,
    /// Fixed by the first insert
    family: Option<Family>,
    len: usize,
}

/// Where the insert descent placed a range
enum Placement<T> {
    /// An equal range was already stored, its payload is handed back
    Replaced(T),
    /// Attached as a key or cover entry without growing a node
    Attached,
    /// Inserted as a new leaf key, the node may need to split
    Leaf,
}

impl<T> PrefixTree<T> {
    /// Creates an empty PrefixTree holding at most `arity` keys per node
    #[inline]
    pub fn new(arity: usize) -> Result<Self> {
        Ok(Self::with_config(TreeConfig::new(arity)?))
    }

    pub fn with_config(config: TreeConfig) -> Self {
        PrefixTree {
            root: Node::new(),
            config,
            family: None,
            len: 0,
        }
    }

    /// Number of distinct ranges stored
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    #[inline]
    pub fn arity(&self) -> usize {
        self.config.arity()
    }
    /// Address family of the stored ranges, `None` until the first insert
    #[inline]
    pub fn family(&self) -> Option<Family> {
        self.family
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.root.height()
    }

    fn check_family<U>(&self, range: &Range<U>) -> Result<()> {
        match self.family {
            Some(expected) if expected != range.family() => Err(PrefixTreeError::FamilyMismatch {
                expected,
                found: range.family(),
            }),
            _ => Ok(()),
        }
    }

    /// Returns the stored range that matches `point`
    ///
    /// A key covering `point` is returned as soon as the descent meets it.
    /// Otherwise the cover lists met on the way down are scanned from the
    /// root downwards, latest attached entry first within a node. This is
    /// not guaranteed to yield the narrowest of several covering entries.
    pub fn search_range<U>(&self, point: &Range<U>) -> Result<Option<&Range<T>>> {
        self.check_family(point)?;

        let mut node = &self.root;
        let mut covers: Vec<&[Range<T>]> = Vec::new();
        loop {
            let idx = node.upper_bound(point);
            if idx > 0 && node.keys[idx - 1].encloses(point) {
                return Ok(Some(&node.keys[idx - 1]));
            }
            covers.push(node.cover.as_slice());
            match node.children.get(idx) {
                Some(child) => node = child,
                None => break,
            }
        }

        Ok(covers
            .into_iter()
            .flat_map(|entries| entries.iter().rev())
            .find(|entry| entry.encloses(point)))
    }

    fn insert_range(&mut self, range: Range<T>) -> Result<Option<T>> {
        self.check_family(&range)?;
        self.family = Some(range.family());

        // Child index taken at each level, root first
        let mut path = Vec::new();
        let mut node = &mut self.root;
        let placement = loop {
            let idx = node.lower_bound(&range);
            if let Some(key) = node.keys.get(idx) {
                if key.same_bounds(&range) {
                    let old = mem::replace(&mut node.keys[idx], range);
                    break Placement::Replaced(old.into_payload());
                }
                if range.encloses(key) {
                    break match node.attach_cover(range) {
                        Some(old) => Placement::Replaced(old),
                        None => Placement::Attached,
                    };
                }
            }
            if idx > 0 && node.keys[idx - 1].encloses(&range) {
                let broader = mem::replace(&mut node.keys[idx - 1], range);
                node.cover.push(broader);
                break Placement::Attached;
            }
            if idx < node.children.len() {
                path.push(idx);
                node = &mut node.children[idx];
            } else {
                node.keys.insert(idx, range);
                break Placement::Leaf;
            }
        };

        match placement {
            Placement::Replaced(old) => Ok(Some(old)),
            Placement::Attached => {
                self.len += 1;
                Ok(None)
            }
            Placement::Leaf => {
                self.len += 1;
                self.rebalance(&path);
                Ok(None)
            }
        }
    }

    /// Splits full nodes bottom-up along `path`, growing a new root if the
    /// split reaches the top.
    fn rebalance(&mut self, path: &[usize]) {
        let arity = self.config.arity();
        let split_pos = self.config.split_pos();

        for depth in (0..=path.len()).rev() {
            let node = self.root.descend_mut(&path[..depth]);
            if node.keys.len() < arity {
                return;
            }
            let split = match node.split(split_pos) {
                Some(split) => split,
                None => return,
            };
            trace!(
                target: "prefix_tree::split",
                depth,
                promoted = %split.promoted,
                lifted = split.lifted.len(),
                "split node"
            );
            self.len -= split.dropped;

            if depth == 0 {
                let old_root = mem::replace(&mut self.root, Node::new());
                self.root.children.push(old_root);
                self.root.adopt(0, split);
                debug!(height = self.root.height(), "root split");
            } else {
                self.root
                    .descend_mut(&path[..depth - 1])
                    .adopt(path[depth - 1], split);
            }
        }
    }
}

impl<T> Default for PrefixTree<T> {
    fn default() -> Self {
        Self::with_config(TreeConfig::default())
    }
}

impl<T> PrefixOps<T> for PrefixTree<T> {
    #[inline]
    fn insert(&mut self, range: Range<T>) -> Result<Option<T>> {
        self.insert_range(range)
    }

    #[inline]
    fn search<U>(&self, point: &Range<U>) -> Result<Option<&T>> {
        Ok(self.search_range(point)?.map(Range::payload))
    }
}
