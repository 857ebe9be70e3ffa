use std::fmt::{self, Debug};

use super::ForwardSequence;
use crate::capability::Forward;

/// A singly linked list backed by an arena.
///
/// Nodes are only ever linked through `next`, so the only thing a cursor can do is move forward.
/// Neither the distance between two cursors nor the position before a cursor is available
/// without walking the list.
///
/// ```
/// use cursort_sorts::sequence::ForwardList;
///
/// let mut list = ForwardList::new();
/// list.push_front(2);
/// list.push_front(1);
/// assert_eq!(list.to_vec(), vec![1, 2]);
/// ```
#[derive(Clone)]
pub struct ForwardList<T> {
    values: Vec<T>,
    links: Vec<Option<usize>>,
    head: Option<usize>,
}

/// A position in a [`ForwardList`]. The end position is the one past the last node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardCursor(Option<usize>);

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            links: Vec::new(),
            head: None,
        }
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.values.len();
        self.values.push(value);
        self.links.push(self.head);
        self.head = Some(node);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        Iter {
            list: self,
            node: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn node(&self, cursor: ForwardCursor) -> usize {
        match cursor.0 {
            Some(node) => node,
            None => panic!("the end cursor of a ForwardList does not point at an element"),
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = ForwardList::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

struct Iter<'a, T> {
    list: &'a ForwardList<T>,
    node: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = self.list.links[node];
        Some(&self.list.values[node])
    }
}

impl<T> ForwardSequence for ForwardList<T> {
    type Item = T;
    type Cursor = ForwardCursor;
    type Category = Forward;

    fn begin(&self) -> ForwardCursor {
        ForwardCursor(self.head)
    }

    fn end(&self) -> ForwardCursor {
        ForwardCursor(None)
    }

    fn next(&self, cursor: ForwardCursor) -> ForwardCursor {
        ForwardCursor(self.links[self.node(cursor)])
    }

    fn at(&self, cursor: ForwardCursor) -> &T {
        &self.values[self.node(cursor)]
    }

    fn swap(&mut self, a: ForwardCursor, b: ForwardCursor) {
        let (a, b) = (self.node(a), self.node(b));
        self.values.swap(a, b);
    }
}
