//! Generic singly- and doubly-linked lists with 1-based positional access,
//! iterative and recursive reversal, and stacks built on top of them.
//!
//! Both list types implement [`Sequence`], so code that only needs the shared
//! operations can be written once:
//!
//! ```
//! use linked_list::{DoublyLinkedList, LinkedList, Sequence};
//!
//! fn fill<S: Sequence<i32>>(list: &mut S) {
//!     list.insert(1, 4).unwrap();
//!     list.insert(2, 5).unwrap();
//!     list.insert(1, 3).unwrap();
//! }
//!
//! let mut singly = LinkedList::new();
//! let mut doubly = DoublyLinkedList::new();
//! fill(&mut singly);
//! fill(&mut doubly);
//! assert_eq!(singly.to_string(), "3 4 5");
//! assert_eq!(doubly.reverse_print(), "5 4 3");
//! ```

pub mod doubly_linked_list;
pub mod error;
pub mod linked_list;
mod node;
pub mod sequence;
pub mod stack;

pub use doubly_linked_list::DoublyLinkedList;
pub use error::{ListError, Result};
pub use linked_list::LinkedList;
pub use sequence::{Sequence, RECURSION_LIMIT};
pub use stack::{ArrayStack, Stack, StackOps};
