/// A bucket: empty, or the head of an owned chain of entries.
pub(crate) type Chain<V> = Option<Box<ChainNode<V>>>;

/// One entry of a bucket chain. Distinct from the other node types in this crate; a chain is
/// singly linked and keyed.
pub(crate) struct ChainNode<V> {
    pub key: String,
    pub value: V,
    pub next: Chain<V>,
}

impl<V> ChainNode<V> {
    pub(crate) const fn new(key: String, value: V) -> ChainNode<V> {
        ChainNode {
            key,
            value,
            next: None,
        }
    }
}
