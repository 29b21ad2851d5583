use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum Tree<T> {
    Leaf(T),
    Node(T, Vec<Tree<T>>),
}

impl<T> Tree<T> {
    pub fn item(&self) -> &T {
        match self {
            Tree::Leaf(item) | Tree::Node(item, _) => item,
        }
    }

    // A `Leaf` has no children, a `Node` may have none as well.
    pub fn children(&self) -> &[Tree<T>] {
        match self {
            Tree::Leaf(_) => &[],
            Tree::Node(_, children) => children,
        }
    }

    /// Direct children whose item satisfies `pred`, in document order.
    pub fn children_where<'a, F>(&'a self, pred: F) -> impl Iterator<Item = &'a Tree<T>> + 'a
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.children().iter().filter(move |c| pred(c.item()))
    }

    pub fn find_child<F>(&self, pred: F) -> Option<&Tree<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.children().iter().find(|c| pred(c.item()))
    }

    pub fn iter(&self) -> BreadthFirstIterator<T> {
        BreadthFirstIterator::new(self)
    }
}

// Children are unlinked into a work list first, so dropping a deep tree
// doesn't recurse once per level.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let Tree::Node(_, children) = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Tree::Node(_, grandchildren) = &mut node {
                pending.append(grandchildren);
            }
        }
    }
}

pub struct BreadthFirstIterator<'a, T> {
    queue: VecDeque<&'a Tree<T>>,
}

impl<'a, T> BreadthFirstIterator<'a, T> {
    fn new(root: &'a Tree<T>) -> Self {
        BreadthFirstIterator {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, T> Iterator for BreadthFirstIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node.item())
    }
}
