//! Ordered root index (AVL tree)
//!
//! Roots are kept sorted by code-point comparison of their letters. Each node
//! owns its children; insertion recurses and returns the replacement
//! subtree, so no parent pointers are needed.

use std::cmp::Ordering;

use crate::model::RootEntity;

type Link = Option<Box<RootNode>>;

/// One tree node: a root, its children and the cached subtree height
#[derive(Debug, Clone)]
pub struct RootNode {
    root: RootEntity,
    left: Link,
    right: Link,
    height: usize,
}

impl RootNode {
    fn leaf(root: RootEntity) -> Box<Self> {
        Box::new(Self {
            root,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub fn root(&self) -> &RootEntity {
        &self.root
    }

    pub fn left(&self) -> Option<&RootNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&RootNode> {
        self.right.as_deref()
    }

    /// Cached height; a leaf has height 1
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// height(left) - height(right)
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

fn balance_of(link: &Link) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

// Rotations move boxes only; the contained RootEntity is never touched.

fn rotate_right(mut y: Box<RootNode>) -> Box<RootNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<RootNode>) -> Box<RootNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn rebalance(mut node: Box<RootNode>) -> Box<RootNode> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if balance_of(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if balance_of(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn insert_rec(link: Link, root: RootEntity) -> Box<RootNode> {
    let Some(mut node) = link else {
        return RootNode::leaf(root);
    };

    match root.letters().cmp(node.root.letters()) {
        Ordering::Less => node.left = Some(insert_rec(node.left.take(), root)),
        Ordering::Greater => node.right = Some(insert_rec(node.right.take(), root)),
        Ordering::Equal => return node,
    }

    rebalance(node)
}

/// Self-balancing index of roots keyed by letters
#[derive(Debug, Clone, Default)]
pub struct OrderedRootIndex {
    top: Link,
    count: usize,
}

impl OrderedRootIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root; returns false (no-op) for empty letters or a duplicate
    pub fn insert(&mut self, root: RootEntity) -> bool {
        if root.letters().is_empty() || self.contains(root.letters()) {
            return false;
        }

        self.top = Some(insert_rec(self.top.take(), root));
        self.count += 1;
        true
    }

    /// Node holding `letters`; any key length is safe
    pub fn search(&self, letters: &str) -> Option<&RootNode> {
        let mut current = self.top.as_deref();
        while let Some(node) = current {
            current = match letters.cmp(node.root.letters()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Mutable access to a stored root, for recording derivatives
    ///
    /// `RootEntity` exposes no way to change its letters, so the key and the
    /// node's position stay in step; only the derivative set can change.
    pub fn search_mut(&mut self, letters: &str) -> Option<&mut RootEntity> {
        let mut current = self.top.as_deref_mut();
        while let Some(node) = current {
            current = match letters.cmp(node.root.letters()) {
                Ordering::Equal => return Some(&mut node.root),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Stored root for `letters`
    pub fn get(&self, letters: &str) -> Option<&RootEntity> {
        self.search(letters).map(RootNode::root)
    }

    pub fn contains(&self, letters: &str) -> bool {
        self.search(letters).is_some()
    }

    /// Lazy in-order traversal, ascending by letters
    ///
    /// Each call starts a fresh traversal.
    pub fn all_roots(&self) -> Roots<'_> {
        let mut roots = Roots { stack: Vec::new() };
        roots.push_left_spine(self.top.as_deref());
        roots
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Height of the whole tree (0 when empty)
    pub fn height(&self) -> usize {
        height(&self.top)
    }

    pub fn top(&self) -> Option<&RootNode> {
        self.top.as_deref()
    }

    /// Recomputes heights from scratch and checks the AVL property at
    /// every node, independent of the cached values
    pub fn is_balanced(&self) -> bool {
        fn check(node: Option<&RootNode>) -> Option<usize> {
            let Some(node) = node else {
                return Some(0);
            };
            let left = check(node.left())?;
            let right = check(node.right())?;
            let h = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && h == node.height).then_some(h)
        }
        check(self.top()).is_some()
    }
}

/// In-order iterator over the roots of an `OrderedRootIndex`
pub struct Roots<'a> {
    stack: Vec<&'a RootNode>,
}

impl<'a> Roots<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a RootNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Roots<'a> {
    type Item = &'a RootEntity;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(keys: &[&str]) -> OrderedRootIndex {
        let mut index = OrderedRootIndex::new();
        for key in keys {
            index.insert(RootEntity::new(*key));
        }
        index
    }

    #[test]
    fn test_empty_index() {
        let index = OrderedRootIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.height(), 0);
        assert!(index.is_balanced());
        assert_eq!(index.all_roots().count(), 0);
    }

    #[test]
    fn test_search_mut_keeps_order_and_key() {
        let mut index = index_of(&["جلس", "درس", "كتب"]);

        let root = index.search_mut("جلس").unwrap();
        assert!(root.add_derivative("جالس"));

        let listed: Vec<_> = index.all_roots().map(RootEntity::letters).collect();
        assert_eq!(listed, vec!["جلس", "درس", "كتب"]);
        assert!(index.get("جلس").unwrap().has_derivative("جالس"));
        assert!(index.search_mut("يسر").is_none());
    }

    #[test]
    fn test_rejects_empty_and_duplicate() {
        let mut index = OrderedRootIndex::new();
        assert!(!index.insert(RootEntity::new("")));
        assert!(index.insert(RootEntity::new("كتب")));
        assert!(!index.insert(RootEntity::new("كتب")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_ascending_inserts_rotate_left() {
        let index = index_of(&["أ", "ب", "ت"]);
        let top = index.top().unwrap();
        assert_eq!(top.root().letters(), "ب");
        assert_eq!(top.height(), 2);
        assert!(index.is_balanced());
    }

    #[test]
    fn test_descending_inserts_rotate_right() {
        let index = index_of(&["ت", "ب", "أ"]);
        assert_eq!(index.top().unwrap().root().letters(), "ب");
    }

    #[test]
    fn test_left_right_case() {
        let index = index_of(&["ت", "أ", "ب"]);
        let top = index.top().unwrap();
        assert_eq!(top.root().letters(), "ب");
        assert_eq!(top.left().unwrap().root().letters(), "أ");
        assert_eq!(top.right().unwrap().root().letters(), "ت");
    }

    #[test]
    fn test_right_left_case() {
        let index = index_of(&["أ", "ت", "ب"]);
        assert_eq!(index.top().unwrap().root().letters(), "ب");
    }

    #[test]
    fn test_six_sequential_keys_stay_shallow() {
        let index = index_of(&["أ", "ب", "ت", "ث", "ج", "ح"]);
        assert_eq!(index.height(), 3);
        assert!(index.is_balanced());
    }

    #[test]
    fn test_rotation_preserves_entities() {
        let mut index = OrderedRootIndex::new();
        let mut root = RootEntity::new("أبت");
        root.add_derivative("x");
        index.insert(root);
        index.insert(RootEntity::new("ثجح"));
        index.insert(RootEntity::new("خدذ"));

        let moved = index.get("أبت").unwrap();
        assert!(moved.has_derivative("x"));
    }

    #[test]
    fn test_search_mut_records_in_place() {
        let mut index = index_of(&["كتب", "درس"]);
        index.search_mut("درس").unwrap().add_derivative("دارس");

        assert!(index.get("درس").unwrap().has_derivative("دارس"));
        assert!(index.search_mut("شرب").is_none());
    }

    #[test]
    fn test_all_roots_in_order_and_restartable() {
        let index = index_of(&["كتب", "درس", "قول", "فعل", "جلس"]);
        let first: Vec<_> = index.all_roots().map(|r| r.letters()).collect();
        let second: Vec<_> = index.all_roots().map(|r| r.letters()).collect();

        assert_eq!(first, vec!["جلس", "درس", "فعل", "قول", "كتب"]);
        assert_eq!(first, second);
    }
}
