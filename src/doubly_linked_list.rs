use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::node::{DoublyNode, Slot};
use crate::sequence::{self, Sequence};

/// Doubly-linked list whose nodes live in a slot arena.
///
/// `next` and `prev` are slot indices, so the back-links never own anything
/// and the whole chain is released when the arena is dropped. Slots freed by
/// `delete` are reused by later inserts. The tail is cached, which makes
/// `insert_tail` O(1).
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<DoublyNode<T>>>,
    free: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
    size: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Appends `value` after the current tail.
    pub fn insert_tail(&mut self, value: T) {
        self.link_between(self.tail, None, value);
    }

    pub fn front(&self) -> Option<&T> {
        self.node(self.head?).map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|node| &node.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.size,
        }
    }

    /// Walks the chain from the head and verifies that every `prev` names the
    /// actual predecessor, the head has no `prev`, the cached tail is the
    /// last node and the cached length matches.
    pub fn check_links(&self) -> bool {
        let mut expected_prev = None;
        let mut current = self.head;
        let mut count = 0;
        while let Some(slot) = current {
            let node = match self.node(slot) {
                Some(node) => node,
                None => return false,
            };
            if node.prev != expected_prev || count == self.size {
                return false;
            }
            expected_prev = Some(slot);
            current = node.next;
            count += 1;
        }
        count == self.size && self.tail == expected_prev
    }

    fn node(&self, slot: Slot) -> Option<&DoublyNode<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: Slot) -> Option<&mut DoublyNode<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    fn set_next(&mut self, slot: Slot, next: Option<Slot>) {
        if let Some(node) = self.node_mut(slot) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, slot: Slot, prev: Option<Slot>) {
        if let Some(node) = self.node_mut(slot) {
            node.prev = prev;
        }
    }

    fn alloc(&mut self, node: DoublyNode<T>) -> Slot {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Places a new node between `prev` and `next`, which must be adjacent
    /// (or absent at either end), and repairs both neighbours' links.
    fn link_between(&mut self, prev: Option<Slot>, next: Option<Slot>, value: T) -> Slot {
        let mut node = DoublyNode::new(value);
        node.prev = prev;
        node.next = next;
        let slot = self.alloc(node);
        match prev {
            Some(prev) => self.set_next(prev, Some(slot)),
            None => self.head = Some(slot),
        }
        match next {
            Some(next) => self.set_prev(next, Some(slot)),
            None => self.tail = Some(slot),
        }
        self.size += 1;
        slot
    }

    /// Detaches the node in `slot`, joins its neighbours and frees the slot.
    fn unlink(&mut self, slot: Slot) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }
        self.size -= 1;
        Some(node.value)
    }

    /// Slot of the element at 1-based `pos`, walking from whichever end is
    /// closer. Callers validate `pos`.
    fn slot_at(&self, pos: usize) -> Option<Slot> {
        if pos <= self.size / 2 + 1 {
            let mut current = self.head;
            for _ in 1..pos {
                current = self.node(current?)?.next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in pos..self.size {
                current = self.node(current?)?.prev;
            }
            current
        }
    }

    fn relink_from(&mut self, current: Option<Slot>, prev: Option<Slot>) {
        let slot = match current {
            Some(slot) => slot,
            None => {
                self.head = prev;
                return;
            }
        };
        let next = match self.node_mut(slot) {
            Some(node) => {
                let next = node.next;
                node.next = prev;
                node.prev = next;
                next
            }
            None => return,
        };
        self.relink_from(next, Some(slot));
    }
}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn insert_head(&mut self, value: T) {
        self.link_between(None, self.head, value);
    }

    fn insert(&mut self, pos: usize, value: T) -> Result<()> {
        sequence::check_insert(pos, self.size)?;
        trace!("insert at position {} (len {})", pos, self.size);
        if pos == self.size + 1 {
            self.insert_tail(value);
            return Ok(());
        }
        let len = self.size;
        let next = self
            .slot_at(pos)
            .ok_or(ListError::OutOfRange { pos, len })?;
        let prev = self.node(next).and_then(|node| node.prev);
        self.link_between(prev, Some(next), value);
        Ok(())
    }

    fn delete(&mut self, pos: usize) -> Result<T> {
        sequence::check_position(pos, self.size)?;
        trace!("delete at position {} (len {})", pos, self.size);
        let len = self.size;
        self.slot_at(pos)
            .and_then(|slot| self.unlink(slot))
            .ok_or(ListError::OutOfRange { pos, len })
    }

    fn get(&self, pos: usize) -> Result<&T> {
        sequence::check_position(pos, self.size)?;
        self.slot_at(pos)
            .and_then(|slot| self.node(slot))
            .map(|node| &node.value)
            .ok_or(ListError::OutOfRange {
                pos,
                len: self.size,
            })
    }

    /// Swaps `next` and `prev` on every node, then swaps head and tail.
    fn reverse(&mut self) {
        debug!("reversing {} nodes by swapping links", self.size);
        let mut current = self.head;
        while let Some(slot) = current {
            current = match self.node_mut(slot) {
                Some(node) => {
                    mem::swap(&mut node.prev, &mut node.next);
                    node.prev
                }
                None => None,
            };
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    fn reverse_recursive(&mut self) -> Result<()> {
        sequence::check_recursion(self.size)?;
        debug!("reversing {} nodes recursively", self.size);
        let first = self.head;
        self.tail = first;
        self.relink_from(first, None);
        Ok(())
    }

    /// Walks back from the tail along the `prev` links.
    fn reverse_print(&self) -> String
    where
        T: fmt::Display,
    {
        sequence::join(self.iter().rev())
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence::write_joined(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_tail(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<Slot>,
    back: Option<Slot>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.delete(1).ok()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let len = self.0.len();
        self.0.delete(len).ok()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
