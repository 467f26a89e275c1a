
use crate::nodes::SENTINEL;
use std::{
    fmt::{self, Debug,},
    hash::{Hash, Hasher,},
    marker::PhantomData,
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Mutable {}
    impl Sealed for super::Constant {}
}

/// The kind of access a [`Position`] grants to the value it names.
pub trait Access: sealed::Sealed + 'static {}

/// Marks a [`Position`] which may be used to write to its value.
#[derive(Debug,)]
pub enum Mutable {}

/// Marks a [`Position`] which may only be used to read its value.
#[derive(Debug,)]
pub enum Constant {}

impl Access for Mutable {}

impl Access for Constant {}

/// A [`Position`] which can be passed to `SingleList::get_mut`.
pub type MutPosition = Position<Mutable,>;
/// A read only [`Position`].
pub type ConstPosition = Position<Constant,>;

/// The arena slot a [`Position`] names.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug,)]
pub(crate) struct Slot {
    /// The index of the `Node`.
    pub index: usize,
    /// The generation of the `Node` when the [`Position`] was taken.
    pub generation: usize,
}

/// A cursor into a `SingleList`.
///
/// A [`Position`] names either the before-begin sentinel, a value in the list or the
/// end of the list. It does not borrow the list it was taken from so it can be held
/// across mutations; using it after the `Node` it names was erased is reported as an
/// error by the list rather than read.
pub struct Position<A: Access,> {
    /// The identity of the list the [`Position`] was taken from.
    pub(crate) list: usize,
    /// The `Node` named, `None` at the end of the list.
    pub(crate) slot: Option<Slot>,
    marker: PhantomData<A>,
}

impl<A: Access,> Position<A,> {
    #[inline]
    pub(crate) const fn new(list: usize, slot: Option<Slot>,) -> Self {
        Self { list, slot, marker: PhantomData, }
    }
    /// Returns the end [`Position`], which names no `Node`.
    #[inline]
    pub const fn end() -> Self { Self::new(0, None,) }
    /// `true` if this is the end [`Position`].
    #[inline]
    pub const fn is_end(&self,) -> bool { self.slot.is_none() }
    /// `true` if this [`Position`] names the before-begin sentinel of a list.
    #[inline]
    pub fn is_before_begin(&self,) -> bool {
        self.slot.map_or(false, |slot| slot.index == SENTINEL,)
    }
    /// Reinterprets the access of this [`Position`].
    #[inline]
    pub(crate) const fn cast<B: Access,>(self,) -> Position<B,> {
        Position::new(self.list, self.slot,)
    }
}

impl<A: Access,> Clone for Position<A,> {
    #[inline]
    fn clone(&self,) -> Self { *self }
}

impl<A: Access,> Copy for Position<A,> {}

impl<A: Access,> Default for Position<A,> {
    #[inline]
    fn default() -> Self { Self::end() }
}

impl From<MutPosition> for ConstPosition {
    #[inline]
    fn from(from: MutPosition,) -> Self { from.cast() }
}

impl<A: Access, B: Access,> PartialEq<Position<B,>> for Position<A,> {
    fn eq(&self, rhs: &Position<B,>,) -> bool {
        match (self.slot, rhs.slot,) {
            //Every end position is the same position.
            (None, None,) => true,
            (Some(lhs,), Some(slot,),) => self.list == rhs.list && lhs == slot,
            _ => false,
        }
    }
}

impl<A: Access,> Eq for Position<A,> {}

impl<A: Access,> Hash for Position<A,> {
    fn hash<H: Hasher,>(&self, state: &mut H,) {
        match self.slot {
            None => None::<(usize, Slot,)>.hash(state,),
            Some(slot,) => Some((self.list, slot,)).hash(state,),
        }
    }
}

impl<A: Access,> Debug for Position<A,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        match self.slot {
            None => fmt.write_str("Position(end)",),
            Some(slot,) if slot.index == SENTINEL => write!(fmt, "Position(list {}, before-begin)", self.list,),
            Some(slot,) => write!(fmt, "Position(list {}, node {}@{})", self.list, slot.index, slot.generation,),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_equality() {
        let node = Some(Slot { index: 3, generation: 1, },);

        assert_eq!(MutPosition::default(), ConstPosition::end(),
            "`Position::default` was not the end position",
        );
        assert_eq!(MutPosition::new(1, node,), ConstPosition::new(1, node,),
            "`Position::eq` did not compare equal across access",
        );
        assert_ne!(MutPosition::new(1, node,), MutPosition::new(2, node,),
            "`Position::eq` ignored the list identity",
        );
        assert_ne!(MutPosition::new(1, node,), MutPosition::new(1, Some(Slot { index: 3, generation: 2, },),),
            "`Position::eq` ignored the generation",
        );
        assert_ne!(MutPosition::new(1, node,), MutPosition::end(),
            "`Position::eq` matched a node with the end",
        );
        assert_eq!(MutPosition::new(7, None,), ConstPosition::new(9, None,),
            "`Position::eq` distinguished end positions",
        );
    }

    #[test]
    fn test_position_convert() {
        let sentinel = MutPosition::new(4, Some(Slot { index: SENTINEL, generation: 0, },),);
        let constant = ConstPosition::from(sentinel,);

        assert_eq!(constant, sentinel, "`ConstPosition::from` changed the position",);
        assert!(constant.is_before_begin(), "`Position::is_before_begin` missed the sentinel",);
        assert!(!constant.is_end(), "`Position::is_end` matched the sentinel",);
        assert!(ConstPosition::end().is_end(), "`Position::is_end` missed the end",);
        assert!(!ConstPosition::end().is_before_begin(), "`Position::is_before_begin` matched the end",);
    }
}
