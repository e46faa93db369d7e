/// Owning link to the next node in a chain, `None` at the end.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single chain element: a payload value and the owned link to its
/// successor. Every node has exactly one owner, either its predecessor or the
/// head slot of the list itself.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Node<T> {
        Node { value, next: None }
    }
}
