
use crate::{SingleList, nodes::Node,};
use std::{iter::*, marker::PhantomData,};

/// Creates a new `IterMut` from parts.
///
/// # Params
///
/// list --- The `SingleList` to iterate over.
#[inline]
pub(crate) fn new_iter_mut<'t, T: 't,>(list: &'t mut SingleList<T,>,) -> IterMut<'t, T,> {
    let next = list.first();
    let len = list.len();

    IterMut { nodes: list.nodes.as_mut_ptr(), next, len, marker: PhantomData, }
}

/// A mutable iterator over the values of a `SingleList` from front to back.
pub struct IterMut<'t, T: 't,> {
    /// The `Node`s of the `SingleList` being iterated.
    nodes: *mut Node<T,>,
    /// The index of the next `Node` to yield.
    next: Option<usize>,
    /// The number of values left.
    len: usize,
    marker: PhantomData<&'t mut [Node<T,>]>,
}

impl<'t, T: 't,> Iterator for IterMut<'t, T,> {
    type Item = &'t mut T;

    fn next(&mut self,) -> Option<Self::Item,> {
        let index = self.next?;
        //SAFETY: `index` is a live `Node` of the borrowed list and the chain is acyclic so
        //  no `Node` is yielded twice.
        let node = unsafe { &mut *self.nodes.add(index,) };

        self.next = node.next;
        self.len -= 1;

        Some(node.value.as_mut().expect(super::node_err!(),),)
    }
    #[inline]
    fn size_hint(&self,) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

//SAFETY: `IterMut` is a unique borrow of the `Node`s, so sending it sends `&mut T`s.
unsafe impl<'t, T: 't + Send,> Send for IterMut<'t, T,> {}

//SAFETY: A shared `IterMut` gives no access to the values, sharing it is sharing `&mut T`s.
unsafe impl<'t, T: 't + Sync,> Sync for IterMut<'t, T,> {}

impl<'t, T: 't,> ExactSizeIterator for IterMut<'t, T,> {}

impl<'t, T: 't,> FusedIterator for IterMut<'t, T,> {}
