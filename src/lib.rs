//! `single-list` is an implementation of a Singly-Linked-List using an underlying [`Vec`]
//! to store the nodes so as to avoid a heap allocation per value.
//!
//! The list is anchored by a valueless sentinel `Node` so that every insertion and
//! removal is made *after* some [`Position`]; inserting at the front is inserting after
//! [`SingleList::before_begin`].
//!
//! Positions are plain handles which do not borrow the list. Misusing one (stepping past
//! the end, reading the sentinel, passing a position from another list or one whose value
//! was erased) is reported as an [`Error`].
//!
//! Author --- daniel.bechaz@gmail.com
//! Last Moddified --- 2026-10-18

use log::{debug, trace, warn,};
use std::{
    cmp::{PartialEq, PartialOrd, Ord, Ordering,},
    iter::{FromIterator, Extend,},
    fmt::{self, Debug,},
    hash::{Hash, Hasher,},
    mem,
    sync::atomic::{self, AtomicUsize,},
};

mod error;
mod nodes;
mod iters;
mod positions;

use self::nodes::*;
use self::positions::Slot;
pub use self::error::{Error, Result,};
pub use self::iters::{Iter, IterMut, IntoIter,};
pub use self::positions::{Access, Mutable, Constant, Position, MutPosition, ConstPosition,};

/// The identity handed to the next [`SingleList`]; `0` is never handed out.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1,);

/// An implementation of a singly-linked-list backed by a `Vec`.
pub struct SingleList<T,> {
    /// The [`Node`]s of the [`SingleList`], the sentinel is at [`SENTINEL`].
    nodes: Vec<Node<T,>,>,
    /// The number of values in the [`SingleList`].
    len: usize,
    /// A stack of allocated [`Node`]s not used in the linked list.
    empty: Option<usize,>,
    /// The identity stamped on every [`Position`] taken from this [`SingleList`].
    id: usize,
}

impl<T,> SingleList<T,> {
    /// Returns the index of the first [`Node`] holding a value.
    #[inline]
    pub(crate) fn first(&self,) -> Option<usize,> { self.nodes[SENTINEL].next }
    /// Returns the index of the last [`Node`], the sentinel if the list is empty.
    fn last(&self,) -> usize {
        let mut at = SENTINEL;

        while let Some(next) = self.nodes[at].next { at = next }

        at
    }
    /// Creates a new [`Node`] and returns its index.
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    /// next --- The index of the [`Node`] which will follow it.
    fn new_node(&mut self, value: T, next: Option<usize,>,) -> usize {
        //Increase the length.
        self.len += 1;

        match self.empty {
            //There is a preallocated empty `Node`.
            Some(new) => {
                //Pop the empty `Node`.
                self.empty = self.nodes[new].stack_pop();
                //Populate the `Node`.
                self.nodes[new].fill(value, next,);
                trace!("reused shelved node {}", new,);

                new
            },
            //There is no preallocated empty `Node`.
            None => {
                let new = self.nodes.len();

                self.nodes.push(Node::new(value, next,),);

                new
            },
        }
    }
    /// Empty the passed [`Node`] and return its value.
    ///
    /// The [`Node`] must already be unlinked, it will be placed on the `empty` stack.
    ///
    /// # Params
    ///
    /// node --- The [`Node`] to remove.
    fn remove_node(&mut self, node: usize,) -> T {
        //Decrement the `Node` count.
        self.len -= 1;

        let value = self.nodes[node].shelve().expect(iters::node_err!(),);
        //Push the `Node` onto the empty stack.
        self.nodes[node].stack_push(self.empty,);
        self.empty = Some(node,);
        trace!("shelved node {}", node,);

        value
    }
    /// Links a new [`Node`] holding `value` directly after `at` and returns its index.
    fn link_after(&mut self, at: usize, value: T,) -> usize {
        let new = self.new_node(value, self.nodes[at].next,);

        self.nodes[at].next = Some(new,);
        trace!("linked node {} after {}", new, at,);

        new
    }
    /// Unlinks the [`Node`] directly after `at` and returns its value.
    fn unlink_after(&mut self, at: usize,) -> Option<T,> {
        let node = self.nodes[at].next?;

        self.nodes[at].next = self.nodes[node].next;

        Some(self.remove_node(node,),)
    }
    /// Returns a [`Position`] naming the [`Node`] at `index`, or the end.
    fn position<A: Access,>(&self, index: Option<usize,>,) -> Position<A,> {
        let slot = index.map(|index| Slot { index, generation: self.nodes[index].generation, },);

        Position::new(self.id, slot,)
    }
    /// Returns the index of the [`Node`] named by `pos`.
    ///
    /// # Errors
    ///
    /// * If `pos` is the end position.
    /// * If `pos` was taken from another list.
    /// * If the [`Node`] `pos` names has been removed.
    fn resolve<A: Access,>(&self, pos: Position<A,>,) -> Result<usize,> {
        let result = match pos.slot {
            None => Err(Error::EndPosition,),
            Some(_,) if pos.list != self.id => Err(Error::ForeignPosition,),
            Some(slot,) => match self.nodes.get(slot.index,) {
                Some(node,) if node.generation == slot.generation => Ok(slot.index,),
                _ => Err(Error::StalePosition,),
            },
        };

        if let Err(e) = &result { warn!("rejected {:?}: {}", pos, e,) }

        result
    }
}

impl<T,> SingleList<T,> {
    /// Returns a new empty [`SingleList`].
    #[inline]
    pub fn new() -> Self { Self::with_capacity(0,) }
    /// Returns a new empty [`SingleList`] with room for `capacity` values.
    ///
    /// # Params
    ///
    /// capacity --- The number of values to allocate space for.
    pub fn with_capacity(capacity: usize,) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1,),);

        nodes.push(Node::sentinel(),);

        Self { nodes, len: 0, empty: None, id: NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed,), }
    }
    /// Returns the number of values this [`SingleList`] can hold without reallocating.
    #[inline]
    pub fn capacity(&self,) -> usize { self.nodes.capacity() - 1 }
    /// The number of shelved [`Node`]s waiting to be reused.
    #[inline]
    fn shelved(&self,) -> usize { self.nodes.len() - 1 - self.len }
    /// Reserves space for at least `additional` more values.
    ///
    /// # Params
    ///
    /// additional --- The number of additional values to allocate for.
    pub fn reserve(&mut self, additional: usize,) {
        //Shelved `Node`s are reused before the `Vec` grows.
        self.nodes.reserve(additional.saturating_sub(self.shelved(),),)
    }
    /// Reserves space for at least `additional` more values, reporting allocation failure.
    ///
    /// # Params
    ///
    /// additional --- The number of additional values to allocate for.
    ///
    /// # Errors
    ///
    /// * If the allocation could not be made.
    #[cfg(feature = "try_reserve",)]
    pub fn try_reserve(&mut self, additional: usize,) -> Result<(),> {
        self.nodes.try_reserve(additional.saturating_sub(self.shelved(),),)
            .map_err(|_| Error::Reserve(additional,),)
    }
    /// Clear the [`SingleList`], dropping the values from front to back.
    pub fn clear(&mut self,) {
        debug!("clearing {} values", self.len,);

        while self.pop_front().is_some() {}
    }
    /// Returns the number of values in this [`SingleList`].
    #[inline]
    pub const fn len(&self,) -> usize { self.len }
    /// `true` if this [`SingleList`] is empty.
    #[inline]
    pub const fn is_empty(&self,) -> bool { self.len() == 0 }
    /// Returns the first value.
    #[inline]
    pub fn front(&self,) -> Option<&T,> {
        self.first().and_then(|head| self.nodes[head].value.as_ref(),)
    }
    /// Returns the first value.
    #[inline]
    pub fn front_mut(&mut self,) -> Option<&mut T,> {
        let head = self.first()?;

        self.nodes[head].value.as_mut()
    }
    /// Pushes a value onto the front of the [`SingleList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    #[inline]
    pub fn push_front(&mut self, value: T,) { self.link_after(SENTINEL, value,); }
    /// Pops the first value off the front of the [`SingleList`].
    ///
    /// Popping an empty [`SingleList`] does nothing and returns `None`.
    #[inline]
    pub fn pop_front(&mut self,) -> Option<T,> { self.unlink_after(SENTINEL,) }
    /// Returns the [`Position`] before the first value.
    ///
    /// It can be passed to [`insert_after`](#method.insert_after) and
    /// [`erase_after`](#method.erase_after) but holds no value.
    #[inline]
    pub fn before_begin(&self,) -> MutPosition { self.position(Some(SENTINEL,),) }
    /// Returns the read only [`Position`] before the first value.
    #[inline]
    pub fn cbefore_begin(&self,) -> ConstPosition { self.position(Some(SENTINEL,),) }
    /// Returns the [`Position`] of the first value, the end if the list is empty.
    #[inline]
    pub fn begin(&self,) -> MutPosition { self.position(self.first(),) }
    #[inline]
    pub fn cbegin(&self,) -> ConstPosition { self.position(self.first(),) }
    /// Returns the end [`Position`].
    #[inline]
    pub fn end(&self,) -> MutPosition { Position::end() }
    #[inline]
    pub fn cend(&self,) -> ConstPosition { Position::end() }
    /// Inserts `value` directly after `pos` and returns the [`Position`] of the new value.
    ///
    /// Inserting after [`before_begin`](#method.before_begin) is a
    /// [`push_front`](#method.push_front).
    ///
    /// # Params
    ///
    /// pos --- The position to insert after.
    /// value --- The value to insert.
    ///
    /// # Errors
    ///
    /// * If `pos` is the end position.
    /// * If `pos` was taken from another list or its value has been erased.
    pub fn insert_after<A: Access,>(&mut self, pos: Position<A,>, value: T,) -> Result<MutPosition,> {
        let at = self.resolve(pos,)?;
        let new = self.link_after(at, value,);

        Ok(self.position(Some(new,),),)
    }
    /// Erases the value directly after `pos` and returns the [`Position`] which now
    /// follows `pos`.
    ///
    /// Erasing after [`before_begin`](#method.before_begin) is a
    /// [`pop_front`](#method.pop_front).
    ///
    /// # Params
    ///
    /// pos --- The position to erase after.
    ///
    /// # Errors
    ///
    /// * If `pos` is the end position or names the last value.
    /// * If `pos` was taken from another list or its value has been erased.
    pub fn erase_after<A: Access,>(&mut self, pos: Position<A,>,) -> Result<MutPosition,> {
        let at = self.resolve(pos,)?;

        if self.unlink_after(at,).is_none() {
            warn!("rejected {:?}: {}", pos, Error::NoSuccessor,);
            return Err(Error::NoSuccessor,);
        }

        Ok(self.position(self.nodes[at].next,),)
    }
    /// Returns the value at `pos`.
    ///
    /// # Errors
    ///
    /// * If `pos` is the end or before-begin position.
    /// * If `pos` was taken from another list or its value has been erased.
    pub fn get<A: Access,>(&self, pos: Position<A,>,) -> Result<&T,> {
        let at = self.resolve(pos,)?;

        //Only the sentinel holds no value.
        self.nodes[at].value.as_ref().ok_or(Error::BeforeBegin,)
    }
    /// Returns the value at `pos` mutably.
    ///
    /// # Errors
    ///
    /// * If `pos` is the end or before-begin position.
    /// * If `pos` was taken from another list or its value has been erased.
    pub fn get_mut(&mut self, pos: MutPosition,) -> Result<&mut T,> {
        let at = self.resolve(pos,)?;

        self.nodes[at].value.as_mut().ok_or(Error::BeforeBegin,)
    }
    /// Returns the [`Position`] following `pos`.
    ///
    /// # Errors
    ///
    /// * If `pos` is the end position.
    /// * If `pos` was taken from another list or its value has been erased.
    pub fn successor<A: Access,>(&self, pos: Position<A,>,) -> Result<Position<A,>,> {
        let at = self.resolve(pos,)?;

        Ok(self.position(self.nodes[at].next,),)
    }
    /// Steps `pos` forward to the following [`Position`].
    ///
    /// `pos` is left unchanged on error.
    ///
    /// # Errors
    ///
    /// See [`successor`](#method.successor).
    #[inline]
    pub fn advance<A: Access,>(&self, pos: &mut Position<A,>,) -> Result<(),> {
        *pos = self.successor(*pos,)?;

        Ok(())
    }
    /// Steps `pos` forward and returns where it was.
    ///
    /// # Errors
    ///
    /// See [`successor`](#method.successor).
    #[inline]
    pub fn post_advance<A: Access,>(&self, pos: &mut Position<A,>,) -> Result<Position<A,>,> {
        let prev = *pos;

        self.advance(pos,)?;

        Ok(prev)
    }
    /// Swaps the values of two lists without moving any value.
    ///
    /// Positions taken from either list keep naming the same values, which now belong
    /// to the other list.
    ///
    /// # Params
    ///
    /// other --- The list to swap with.
    #[inline]
    pub fn swap(&mut self, other: &mut Self,) {
        debug!("swapping lists {} and {}", self.id, other.id,);

        mem::swap(self, other,)
    }
    /// Removes all values that don't pass the `pred` filter.
    ///
    /// # Params
    ///
    /// pred --- The filter function values need to pass to be retained.
    pub fn retain(&mut self, mut pred: impl FnMut(&T,) -> bool,) {
        let mut at = SENTINEL;

        while let Some(next) = self.nodes[at].next {
            let keep = self.nodes[next].value.as_ref().map_or(false, &mut pred,);

            if keep { at = next }
            else { self.unlink_after(at,); }
        }
    }
    /// Returns an iterator over all values in the [`SingleList`].
    #[inline]
    pub fn iter(&self,) -> Iter<'_, T,> { iters::new_iter(self,) }
    /// Returns a mutable iterator over all values in the [`SingleList`].
    #[inline]
    pub fn iter_mut(&mut self,) -> IterMut<'_, T,> { iters::new_iter_mut(self,) }
}

impl<T: PartialEq,> SingleList<T,> {
    /// Returns `true` if the `x` is found in the [`SingleList`].
    ///
    /// # Params
    ///
    /// x --- The value to search for.
    pub fn contains(&self, x: &T,) -> bool {
        self.iter().any(|y| x == y,)
    }
}

/// Swaps the values of two lists, see [`SingleList::swap`].
#[inline]
pub fn swap<T,>(lhs: &mut SingleList<T,>, rhs: &mut SingleList<T,>,) { lhs.swap(rhs,) }

impl<T,> Default for SingleList<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone,> Clone for SingleList<T,> {
    fn clone(&self,) -> Self {
        debug!("cloning {} values of list {}", self.len, self.id,);

        let mut list = Self::with_capacity(self.len,);

        list.extend(self.iter().cloned(),);
        list
    }
    fn clone_from(&mut self, source: &Self,) {
        //The copy is complete before any current value is dropped.
        let mut copy = source.clone();

        self.swap(&mut copy,)
    }
}

impl<T,> Extend<T,> for SingleList<T,> {
    fn extend<I,>(&mut self, iter: I,)
        where I: IntoIterator<Item = T,>, {
        let iter = iter.into_iter();

        self.reserve(iter.size_hint().0,);
        //Walk to the back once, then keep linking after the newest `Node`.
        let mut tail = self.last();
        for value in iter { tail = self.link_after(tail, value,) }
    }
}

impl<'a, T: 'a + Copy,> Extend<&'a T,> for SingleList<T,> {
    #[inline]
    fn extend<I,>(&mut self, iter: I,)
        where I: IntoIterator<Item = &'a T,>, {
        self.extend(iter.into_iter().copied(),)
    }
}

impl<T,> FromIterator<T,> for SingleList<T,> {
    fn from_iter<I,>(iter: I,) -> Self
        where I: IntoIterator<Item = T,>, {
        let mut list = SingleList::new();

        list.extend(iter,); list
    }
}

impl<T, const N: usize,> From<[T; N]> for SingleList<T,> {
    #[inline]
    fn from(values: [T; N],) -> Self { values.into_iter().collect() }
}

impl<T,> IntoIterator for SingleList<T,> {
    type Item = T;
    type IntoIter = IntoIter<T,>;

    #[inline]
    fn into_iter(self,) -> Self::IntoIter { IntoIter { list: self, } }
}

impl<'t, T: 't,> IntoIterator for &'t SingleList<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self,) -> Self::IntoIter { self.iter() }
}

impl<'t, T: 't,> IntoIterator for &'t mut SingleList<T,> {
    type Item = &'t mut T;
    type IntoIter = IterMut<'t, T,>;

    #[inline]
    fn into_iter(self,) -> Self::IntoIter { self.iter_mut() }
}

impl<T: PartialEq,> PartialEq for SingleList<T,> {
    fn eq(&self, rhs: &Self,) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter(),)
    }
}

impl<T: Eq,> Eq for SingleList<T,> {}

impl<T: PartialOrd,> PartialOrd for SingleList<T,> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self,) -> Option<Ordering,> {
        self.iter().partial_cmp(rhs.iter(),)
    }
}

impl<T: Ord,> Ord for SingleList<T,> {
    #[inline]
    fn cmp(&self, rhs: &Self,) -> Ordering { self.iter().cmp(rhs.iter(),) }
}

impl<T: Hash,> Hash for SingleList<T,> {
    fn hash<H: Hasher,>(&self, state: &mut H,) {
        state.write_usize(self.len,);
        self.iter().for_each(|value| value.hash(state,),);
    }
}

impl<T: Debug,> Debug for SingleList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter(),).finish()
    }
}

impl<T,> Drop for SingleList<T,> {
    #[inline]
    fn drop(&mut self,) { self.clear() }
}
