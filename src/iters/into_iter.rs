
use crate::SingleList;
use std::iter::*;

/// A consuming iterator which pops the values of a `SingleList` from the front.
pub struct IntoIter<T,> {
    pub(crate) list: SingleList<T,>,
}

impl<T,> Iterator for IntoIter<T,> {
    type Item = T;

    #[inline]
    fn next(&mut self,) -> Option<Self::Item,> { self.list.pop_front() }
    #[inline]
    fn size_hint(&self,) -> (usize, Option<usize,>,) { (self.list.len(), Some(self.list.len(),),) }
}

impl<T,> ExactSizeIterator for IntoIter<T,> {}

impl<T,> FusedIterator for IntoIter<T,> {}
