// Guest directory tree: a binary tree of guest handles shaped purely by
// arrival order (breadth-first first-empty-slot fill). Not a search tree;
// it exists for traversal-based display only.

use std::collections::VecDeque;

use crate::guests::GuestId;

#[derive(Debug)]
struct Node {
    guest: GuestId,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Default)]
pub struct GuestDirectoryTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl GuestDirectoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Level-order insertion: scan breadth-first from the root and attach at
    // the first empty left slot, else the first empty right slot. Keeps the
    // tree complete in insertion order regardless of any guest attribute.
    pub fn insert(&mut self, guest: GuestId) {
        let new_idx = self.nodes.len();
        self.nodes.push(Node {
            guest,
            left: None,
            right: None,
        });

        let root = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(new_idx);
                return;
            }
        };

        let mut work = VecDeque::new();
        work.push_back(root);

        while let Some(idx) = work.pop_front() {
            match self.nodes[idx].left {
                None => {
                    self.nodes[idx].left = Some(new_idx);
                    return;
                }
                Some(left) => work.push_back(left),
            }
            match self.nodes[idx].right {
                None => {
                    self.nodes[idx].right = Some(new_idx);
                    return;
                }
                Some(right) => work.push_back(right),
            }
        }
    }

    pub fn traverse_inorder(&self) -> Vec<GuestId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.inorder(self.root, &mut out);
        out
    }

    pub fn traverse_preorder(&self) -> Vec<GuestId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.preorder(self.root, &mut out);
        out
    }

    pub fn traverse_postorder(&self) -> Vec<GuestId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.postorder(self.root, &mut out);
        out
    }

    fn inorder(&self, idx: Option<usize>, out: &mut Vec<GuestId>) {
        if let Some(idx) = idx {
            self.inorder(self.nodes[idx].left, out);
            out.push(self.nodes[idx].guest);
            self.inorder(self.nodes[idx].right, out);
        }
    }

    fn preorder(&self, idx: Option<usize>, out: &mut Vec<GuestId>) {
        if let Some(idx) = idx {
            out.push(self.nodes[idx].guest);
            self.preorder(self.nodes[idx].left, out);
            self.preorder(self.nodes[idx].right, out);
        }
    }

    fn postorder(&self, idx: Option<usize>, out: &mut Vec<GuestId>) {
        if let Some(idx) = idx {
            self.postorder(self.nodes[idx].left, out);
            self.postorder(self.nodes[idx].right, out);
            out.push(self.nodes[idx].guest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<GuestId> {
        (0..n).map(GuestId).collect()
    }

    #[test]
    fn test_level_order_shape() {
        let mut tree = GuestDirectoryTree::new();
        let [a, b, c, d, e]: [GuestId; 5] = ids(5).try_into().unwrap();
        for id in [a, b, c, d, e] {
            tree.insert(id);
        }

        // root=A, A.left=B, A.right=C, B.left=D, B.right=E
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].guest, a);
        let left = tree.nodes[root].left.unwrap();
        let right = tree.nodes[root].right.unwrap();
        assert_eq!(tree.nodes[left].guest, b);
        assert_eq!(tree.nodes[right].guest, c);
        assert_eq!(tree.nodes[tree.nodes[left].left.unwrap()].guest, d);
        assert_eq!(tree.nodes[tree.nodes[left].right.unwrap()].guest, e);
    }

    #[test]
    fn test_traversal_orders() {
        let mut tree = GuestDirectoryTree::new();
        let [a, b, c, d, e]: [GuestId; 5] = ids(5).try_into().unwrap();
        for id in [a, b, c, d, e] {
            tree.insert(id);
        }

        assert_eq!(tree.traverse_inorder(), vec![d, b, e, a, c]);
        assert_eq!(tree.traverse_preorder(), vec![a, b, d, e, c]);
        assert_eq!(tree.traverse_postorder(), vec![d, e, b, c, a]);
    }

    #[test]
    fn test_empty_tree_traversals() {
        let tree = GuestDirectoryTree::new();
        assert!(tree.is_empty());
        assert!(tree.traverse_inorder().is_empty());
        assert!(tree.traverse_preorder().is_empty());
        assert!(tree.traverse_postorder().is_empty());
    }

    #[test]
    fn test_single_node() {
        let mut tree = GuestDirectoryTree::new();
        tree.insert(GuestId(0));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.traverse_inorder(), vec![GuestId(0)]);
    }

    #[test]
    fn test_traversals_are_restartable() {
        let mut tree = GuestDirectoryTree::new();
        for id in ids(7) {
            tree.insert(id);
        }
        let first = tree.traverse_inorder();
        let second = tree.traverse_inorder();
        assert_eq!(first, second);
    }
}
