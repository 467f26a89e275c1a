
/// The index of the sentinel [`Node`] in every `SingleList`.
pub const SENTINEL: usize = 0;

/// A node in a singly linked list.
pub struct Node<T,> {
    /// The value inside this [`Node`], `None` for the sentinel and for shelved `Node`s.
    pub value: Option<T>,
    /// The index of the next [`Node`].
    pub next: Option<usize>,
    /// Incremented every time this [`Node`] is shelved.
    pub generation: usize,
}

impl<T,> Node<T,> {
    /// Create a new, populated [`Node`].
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    /// next --- The index of the [`Node`] which follows this one.
    #[inline]
    pub const fn new(value: T, next: Option<usize>,) -> Self {
        Self { value: Some(value,), next, generation: 0, }
    }
    /// Create the valueless sentinel [`Node`].
    #[inline]
    pub const fn sentinel() -> Self {
        Self { value: None, next: None, generation: 0, }
    }
    /// Repopulates a shelved [`Node`] and links it before `next`.
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    /// next --- The index of the [`Node`] which follows this one.
    pub fn fill(&mut self, value: T, next: Option<usize>,) {
        debug_assert!(self.value.is_none(), "`Node::fill` on a populated `Node`",);

        self.value = Some(value,);
        self.next = next;
    }
    /// Takes the value out of this [`Node`] and invalidates all positions naming it.
    pub fn shelve(&mut self,) -> Option<T> {
        self.generation = self.generation.wrapping_add(1,);
        self.next = None;
        self.value.take()
    }
    /// Pushes this [`Node`] onto the head of a stack.
    #[inline]
    pub fn stack_push(&mut self, next: Option<usize>,) { self.next = next }
    /// Pops this [`Node`] off the head of a stack.
    #[inline]
    pub fn stack_pop(&mut self,) -> Option<usize> { self.next.take() }
}
