use crate::data::Range;
use std::cmp::Ordering;
use std::mem;
use tracing::warn;

/// A node of the prefix tree
///
/// `keys` are sorted and no key covers another. A leaf has no children,
/// an internal node has exactly `keys.len() + 1` of them. `cover` holds
/// ranges broader than at least one key of this node, in attach order.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) keys: Vec<Range<T>>,
    pub(crate) children: Vec<Node<T>>,
    pub(crate) cover: Vec<Range<T>>,
}

/// Outcome of splitting an overflowing node
pub(crate) struct Split<T> {
    /// Key to be inserted into the parent
    pub(crate) promoted: Range<T>,
    /// New right sibling, to be placed right after the promoted key
    pub(crate) right: Node<T>,
    /// Cover entries that move up to the parent
    pub(crate) lifted: Vec<Range<T>>,
    /// Number of cover entries that no longer covered any key
    pub(crate) dropped: usize,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Node {
            keys: Vec::new(),
            children: Vec::new(),
            cover: Vec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Leftmost position at which `range` would sort
    #[inline]
    pub(crate) fn lower_bound<U>(&self, range: &Range<U>) -> usize {
        self.keys
            .partition_point(|key| key.order(range) == Ordering::Less)
    }

    /// Number of keys that sort before or equal to `range`
    #[inline]
    pub(crate) fn upper_bound<U>(&self, range: &Range<U>) -> usize {
        self.keys
            .partition_point(|key| key.order(range) != Ordering::Greater)
    }

    /// Appends `range` to the cover list, or replaces the payload of an
    /// equal entry already there.
    pub(crate) fn attach_cover(&mut self, range: Range<T>) -> Option<T> {
        match self.cover.iter_mut().find(|entry| entry.same_bounds(&range)) {
            Some(entry) => Some(mem::replace(entry, range).into_payload()),
            None => {
                self.cover.push(range);
                None
            }
        }
    }

    /// Follows a path of child indices starting at this node
    #[inline]
    pub(crate) fn descend_mut(&mut self, path: &[usize]) -> &mut Node<T> {
        path.iter()
            .fold(self, |node, &idx| &mut node.children[idx])
    }

    /// Number of levels below and including this node
    pub(crate) fn height(&self) -> usize {
        1 + self.children.first().map_or(0, Node::height)
    }

    /// Splits off everything from `split_pos` onwards into a new right
    /// sibling and pops the last remaining key for promotion.
    ///
    /// Cover entries follow the keys they cover: an entry covering the
    /// promoted key is lifted to the parent, one covering a key of the right
    /// sibling moves there, one covering a remaining key stays. Anything else
    /// is dropped.
    pub(crate) fn split(&mut self, split_pos: usize) -> Option<Split<T>> {
        if split_pos == 0 || split_pos > self.keys.len() {
            return None;
        }
        let right_keys = self.keys.split_off(split_pos);
        let right_children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(split_pos)
        };
        let promoted = self.keys.pop()?;

        let mut right = Node {
            keys: right_keys,
            children: right_children,
            cover: Vec::new(),
        };
        let mut lifted = Vec::new();
        let mut dropped = 0;

        for entry in mem::take(&mut self.cover) {
            if entry.encloses(&promoted) {
                lifted.push(entry);
            } else if right.keys.iter().any(|key| entry.encloses(key)) {
                right.cover.push(entry);
            } else if self.keys.iter().any(|key| entry.encloses(key)) {
                self.cover.push(entry);
            } else {
                warn!(
                    target: "prefix_tree::split",
                    range = %entry,
                    "dropping cover entry that covers no key after split"
                );
                dropped += 1;
            }
        }

        Some(Split {
            promoted,
            right,
            lifted,
            dropped,
        })
    }

    /// Takes in a split child that sits at position `idx`
    pub(crate) fn adopt(&mut self, idx: usize, split: Split<T>) {
        self.keys.insert(idx, split.promoted);
        self.children.insert(idx + 1, split.right);
        self.cover.extend(split.lifted);
    }
}
