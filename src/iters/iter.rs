
use crate::{SingleList, nodes::Node,};
use std::iter::*;

/// Creates a new `Iter` from parts.
///
/// # Params
///
/// list --- The `SingleList` to iterate over.
#[inline]
pub(crate) fn new_iter<'t, T: 't,>(list: &'t SingleList<T,>,) -> Iter<'t, T,> {
    Iter { nodes: &list.nodes, next: list.first(), len: list.len(), }
}

/// An iterator over the values of a `SingleList` from front to back.
pub struct Iter<'t, T: 't,> {
    nodes: &'t [Node<T,>],
    next: Option<usize>,
    len: usize,
}

impl<'t, T: 't,> Clone for Iter<'t, T,> {
    #[inline]
    fn clone(&self,) -> Self {
        Self { nodes: self.nodes, next: self.next, len: self.len, }
    }
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self,) -> Option<Self::Item,> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];

        self.next = node.next;
        self.len -= 1;

        Some(node.value.as_ref().expect(super::node_err!(),),)
    }
    #[inline]
    fn size_hint(&self,) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> ExactSizeIterator for Iter<'t, T,> {}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}
