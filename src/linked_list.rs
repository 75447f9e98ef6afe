use std::fmt;

use log::{debug, trace, warn};

use crate::error::{ListError, Result};
use crate::node::{Link, Node};
use crate::sequence::{self, Sequence, RECURSION_LIMIT};
use crate::stack::{Stack, StackOps};

/// Singly-linked list owning a chain of boxed nodes.
pub struct LinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
        sequence::check_position(pos, self.size)?;
        let len = self.size;
        self.iter_mut()
            .nth(pos - 1)
            .ok_or(ListError::OutOfRange { pos, len })
    }

    /// Reverses the list by pushing every node onto a [`Stack`] and popping
    /// them back into a fresh chain. Needs O(n) auxiliary space.
    pub fn reverse_by_stack(&mut self) {
        debug!("reversing {} nodes through a stack", self.size);
        let mut stack = Stack::new();
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            stack.push(node);
        }

        let mut cursor = &mut self.head;
        while let Ok(node) = stack.pop() {
            cursor = &mut cursor.insert(node).next;
        }
    }

    /// Returns the link that holds the node at 0-based `index`, or the empty
    /// link past the tail when `index == len`. Callers validate `index`.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    /// Moves `node` and its successors onto `head` in reverse order. Descends
    /// to the last node first and relinks on the way back up, returning the
    /// empty link after the node it just placed.
    fn reverse_onto<'a>(mut node: Box<Node<T>>, head: &'a mut Link<T>) -> &'a mut Link<T> {
        let slot = match node.next.take() {
            Some(rest) => Self::reverse_onto(rest, head),
            None => head,
        };
        &mut slot.insert(node).next
    }

    fn collect_on_unwind<'a>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
        if let Some(node) = link {
            Self::collect_on_unwind(&node.next, out);
            out.push(&node.value);
        }
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn insert_head(&mut self, value: T) {
        let new_node: Box<Node<T>> = Box::new(Node::new(value, self.head.take()));
        self.head = Some(new_node);
        self.size += 1;
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<()> {
        sequence::check_insert(pos, self.size)?;
        trace!("insert at position {} (len {})", pos, self.size);
        let link = self.link_at(pos - 1);
        let next = link.take();
        *link = Some(Box::new(Node::new(value, next)));
        self.size += 1;
        Ok(())
    }

    fn delete(&mut self, pos: usize) -> Result<T> {
        sequence::check_position(pos, self.size)?;
        trace!("delete at position {} (len {})", pos, self.size);
        let len = self.size;
        let link = self.link_at(pos - 1);
        let mut node = link.take().ok_or(ListError::OutOfRange { pos, len })?;
        *link = node.next.take();
        self.size -= 1;
        Ok(node.value)
    }

    fn get(&self, pos: usize) -> Result<&T> {
        sequence::check_position(pos, self.size)?;
        self.iter().nth(pos - 1).ok_or(ListError::OutOfRange {
            pos,
            len: self.size,
        })
    }

    fn reverse(&mut self) {
        debug!("reversing {} nodes iteratively", self.size);
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    fn reverse_recursive(&mut self) -> Result<()> {
        sequence::check_recursion(self.size)?;
        debug!("reversing {} nodes recursively", self.size);
        if let Some(first) = self.head.take() {
            Self::reverse_onto(first, &mut self.head);
        }
        Ok(())
    }

    fn reverse_print(&self) -> String
    where
        T: fmt::Display,
    {
        let mut values = Vec::with_capacity(self.size);
        if self.size <= RECURSION_LIMIT {
            Self::collect_on_unwind(&self.head, &mut values);
        } else {
            warn!(
                "list of length {} is past the recursion limit, walking iteratively",
                self.size
            );
            values.extend(self.iter());
            values.reverse();
        }
        sequence::join(values)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: &Link<T> = &self.head;
        let mut first = true;
        loop {
            match current {
                Some(node) => {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", node.value)?;
                    first = false;
                    current = &node.next;
                }
                None => break,
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends every value after the current tail.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.size;
        let mut cursor = self.link_at(len);
        let mut added = 0;
        for value in iter {
            cursor = &mut cursor.insert(Box::new(Node::new(value, None))).next;
            added += 1;
        }
        self.size += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.delete(1).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
