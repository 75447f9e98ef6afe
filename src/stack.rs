use std::fmt;

use log::trace;

use crate::error::{ListError, Result};
use crate::linked_list::LinkedList;
use crate::sequence::{self, Sequence};

/// Capacity of an [`ArrayStack`] built with [`ArrayStack::new`].
pub const DEFAULT_CAPACITY: usize = 101;

/// Last-in first-out operations shared by the stack implementations.
pub trait StackOps<T> {
    fn push(&mut self, value: T) -> Result<()>;

    /// Removes and returns the top element, or `EmptyStack`.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top element, or `EmptyStack`.
    fn top(&self) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded stack whose top is the head of a singly-linked list. Pushing
/// never fails.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    /// Pushes `value`. Unlike [`StackOps::push`] this cannot fail.
    pub fn push(&mut self, value: T) {
        self.list.insert_head(value);
    }

    pub fn iter(&self) -> crate::linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> StackOps<T> for Stack<T> {
    fn push(&mut self, value: T) -> Result<()> {
        Stack::push(self, value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        if self.list.is_empty() {
            return Err(ListError::EmptyStack);
        }
        self.list.delete(1)
    }

    fn top(&self) -> Result<&T> {
        if self.list.is_empty() {
            return Err(ListError::EmptyStack);
        }
        self.list.get(1)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Lists the elements from the top down.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

/// Fixed-capacity stack over contiguous storage.
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    pub fn new() -> ArrayStack<T> {
        ArrayStack::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> ArrayStack<T> {
        ArrayStack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> StackOps<T> for ArrayStack<T> {
    fn push(&mut self, value: T) -> Result<()> {
        if self.items.len() == self.capacity {
            trace!("push refused, stack holds {} items", self.capacity);
            return Err(ListError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(ListError::EmptyStack)
    }

    fn top(&self) -> Result<&T> {
        self.items.last().ok_or(ListError::EmptyStack)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        ArrayStack::new()
    }
}

/// Lists the elements from the bottom up.
impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        sequence::write_joined(f, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_reveals_previous_top() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.top(), Ok(&1));
        assert!(!stack.is_empty());
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_errors() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(ListError::EmptyStack));
        assert_eq!(stack.top(), Err(ListError::EmptyStack));
        assert_eq!(StackOps::len(&stack), 0);
    }

    #[test]
    fn stack_displays_top_first() {
        let mut stack = Stack::new();
        for i in 1..=3 {
            stack.push(i);
        }
        assert_eq!(stack.to_string(), "3 2 1");
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn array_stack_overflows_without_mutating() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(
            stack.push(4),
            Err(ListError::StackOverflow { capacity: 2 })
        );
        assert_eq!(stack.to_string(), "2 3");
        assert_eq!(stack.top(), Ok(&3));
    }

    #[test]
    fn array_stack_pop_and_top() {
        let mut stack: ArrayStack<i32> = ArrayStack::new();
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
        assert_eq!(stack.pop(), Err(ListError::EmptyStack));
        for i in 2..=5 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.top(), Ok(&3));
        assert_eq!(stack.len(), 2);
    }

    fn drain<S: StackOps<i32>>(stack: &mut S) -> Vec<i32> {
        let mut out = Vec::new();
        while let Ok(value) = stack.pop() {
            out.push(value);
        }
        out
    }

    #[test]
    fn both_stacks_are_lifo() {
        let mut linked = Stack::new();
        let mut array = ArrayStack::new();
        for i in 0..5 {
            StackOps::push(&mut linked, i).unwrap();
            array.push(i).unwrap();
        }
        assert_eq!(drain(&mut linked), vec![4, 3, 2, 1, 0]);
        assert_eq!(drain(&mut array), vec![4, 3, 2, 1, 0]);
    }
}
