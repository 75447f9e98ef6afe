/// Owning forward link of a singly-linked chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }
}

/// Slot index of a node inside a doubly-linked list's arena.
pub(crate) type Slot = usize;

/// Cell of a doubly-linked list. Both links are plain slot indices into the
/// owning list's arena; neither of them owns the neighbour.
#[derive(Debug, Clone)]
pub(crate) struct DoublyNode<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<Slot>,
    pub(crate) next: Option<Slot>,
}

impl<T> DoublyNode<T> {
    pub fn new(value: T) -> DoublyNode<T> {
        DoublyNode {
            value,
            prev: None,
            next: None,
        }
    }
}
