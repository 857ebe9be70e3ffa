use std::fmt::{self, Debug};

use super::{BidirectionalSequence, ForwardSequence};
use crate::capability::Bidirectional;

/// A doubly linked list backed by an arena.
///
/// Cursors step both ways but there is no way to jump or to measure a range without walking it.
///
/// ```
/// use cursort_sorts::sequence::List;
///
/// let mut list = List::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.push_back(3);
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct List<T> {
    values: Vec<T>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    head: Option<usize>,
    tail: Option<usize>,
}

/// A position in a [`List`]. The end position is the one past the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListCursor(Option<usize>);

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            next: Vec::new(),
            prev: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn push_back(&mut self, value: T) {
        let node = self.values.len();
        self.values.push(value);
        self.next.push(None);
        self.prev.push(self.tail);
        match self.tail {
            Some(tail) => self.next[tail] = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.values.len();
        self.values.push(value);
        self.next.push(self.head);
        self.prev.push(None);
        match self.head {
            Some(head) => self.prev[head] = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            done: self.head.is_none(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn node(&self, cursor: ListCursor) -> usize {
        match cursor.0 {
            Some(node) => node,
            None => panic!("the end cursor of a List does not point at an element"),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    done: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.front?;
        if self.front == self.back {
            self.done = true;
        }
        self.front = self.list.next[node];
        Some(&self.list.values[node])
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.back?;
        if self.front == self.back {
            self.done = true;
        }
        self.back = self.list.prev[node];
        Some(&self.list.values[node])
    }
}

impl<T> ForwardSequence for List<T> {
    type Item = T;
    type Cursor = ListCursor;
    type Category = Bidirectional;

    fn begin(&self) -> ListCursor {
        ListCursor(self.head)
    }

    fn end(&self) -> ListCursor {
        ListCursor(None)
    }

    fn next(&self, cursor: ListCursor) -> ListCursor {
        ListCursor(self.next[self.node(cursor)])
    }

    fn at(&self, cursor: ListCursor) -> &T {
        &self.values[self.node(cursor)]
    }

    fn swap(&mut self, a: ListCursor, b: ListCursor) {
        let (a, b) = (self.node(a), self.node(b));
        self.values.swap(a, b);
    }
}

impl<T> BidirectionalSequence for List<T> {
    fn prev(&self, cursor: ListCursor) -> ListCursor {
        let before = match cursor.0 {
            Some(node) => self.prev[node],
            None => self.tail,
        };
        match before {
            Some(node) => ListCursor(Some(node)),
            None => panic!("stepped before the first element of a List"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_both_ways() {
        let list: List<_> = (1..=4).collect();

        let mut cursor = list.end();
        let mut backwards = Vec::new();
        while cursor != list.begin() {
            cursor = list.prev(cursor);
            backwards.push(*list.at(cursor));
        }
        assert_eq!(backwards, vec![4, 3, 2, 1]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), backwards);
    }

    #[test]
    fn push_front_and_back_interleave() {
        let mut list = List::new();
        list.push_front(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn swap_values() {
        let mut list: List<_> = ["x", "y"].into_iter().collect();
        let (first, second) = (list.begin(), list.next(list.begin()));
        list.swap(first, second);
        assert_eq!(list.to_vec(), vec!["y", "x"]);
    }

    #[test]
    #[should_panic(expected = "stepped before")]
    fn prev_of_begin_panics() {
        let list: List<_> = [1, 2].into_iter().collect();
        list.prev(list.begin());
    }
}
