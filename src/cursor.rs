//! Random-access positions over a `CircularList`.
//!
//! A cursor remembers the slot it points at and the slot its traversal started
//! from (the newest element when it was created by `begin()`). Moving forward
//! goes toward older elements, matching the order of `CircularList::iter`.
//!
//! Cursors borrow the list, so the list cannot be pushed, popped or cleared
//! while one is alive.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::utils::*;

/// Moves `index` by `n` steps, forward (toward older elements) for positive
/// `n`. Forward walks down the slot indices.
#[inline]
fn advance(index: usize, n: isize, slots: usize) -> usize {
    let steps = n.unsigned_abs() % slots;
    if n >= 0 {
        wrap_sub(index, steps, slots)
    } else {
        wrap_add(index, steps, slots)
    }
}

/// Moves `index` by `n` steps backward, toward newer elements for positive `n`.
#[inline]
fn retreat(index: usize, n: isize, slots: usize) -> usize {
    let steps = n.unsigned_abs() % slots;
    if n >= 0 {
        wrap_add(index, steps, slots)
    } else {
        wrap_sub(index, steps, slots)
    }
}

/// A read-only position in a `CircularList`.
///
/// # Examples
///
/// ```
/// use circular_list::CircularList;
///
/// let mut list = CircularList::new(4);
/// for i in 1..=6 {
///     list.push(i);
/// }
///
/// let mut cursor = list.begin();
/// let mut seen = Vec::new();
/// while cursor != list.end() {
///     seen.push(*cursor.get().unwrap());
///     cursor += 1;
/// }
/// assert_eq!(seen, [6, 5, 4, 3]);
/// ```
pub struct Cursor<'a, T: 'a> {
    ring: &'a [Option<T>],
    origin: usize,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(ring: &'a [Option<T>], origin: usize, index: usize) -> Self {
        debug_assert!(origin < ring.len() && index < ring.len());
        Cursor { ring, origin, index }
    }

    /// The capacity of the list this cursor walks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.len() - 1
    }

    /// Returns the element under the cursor, or `None` when the cursor sits
    /// outside the live elements, as `end()` does.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        let ring = self.ring;
        ring[self.index].as_ref()
    }

    /// Returns the element `n` steps ahead without moving the cursor.
    #[inline]
    pub fn nth(&self, n: isize) -> Option<&'a T> {
        (*self + n).get()
    }

    /// Number of forward steps from the start of this traversal.
    #[inline]
    pub fn offset(&self) -> usize {
        wrap_sub(self.origin, self.index, self.ring.len())
    }

    /// Steps toward the next older element.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = wrap_sub(self.index, 1, self.ring.len());
    }

    /// Steps toward the next newer element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = wrap_add(self.index, 1, self.ring.len());
    }

    #[inline]
    fn same_storage(&self, other: &Cursor<'a, T>) -> bool {
        ptr::eq(self.ring, other.ring)
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> AddAssign<isize> for Cursor<'a, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.index = advance(self.index, n, self.ring.len());
    }
}

impl<'a, T> SubAssign<isize> for Cursor<'a, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.index = retreat(self.index, n, self.ring.len());
    }
}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline]
    fn add(mut self, n: isize) -> Cursor<'a, T> {
        self += n;
        self
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    #[inline]
    fn sub(mut self, n: isize) -> Cursor<'a, T> {
        self -= n;
        self
    }
}

impl<'a, T> Sub for Cursor<'a, T> {
    type Output = usize;

    /// Circular distance: the number of forward steps from `other` to `self`,
    /// in `0..=capacity`.
    #[inline]
    fn sub(self, other: Cursor<'a, T>) -> usize {
        debug_assert!(self.same_storage(&other));
        wrap_sub(other.index, self.index, self.ring.len())
    }
}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'a, T>) -> bool {
        self.same_storage(other) && self.index == other.index
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> PartialOrd for Cursor<'a, T> {
    /// Cursors are ordered by their offset within one traversal. Cursors of
    /// different lists or different traversals are not comparable.
    fn partial_cmp(&self, other: &Cursor<'a, T>) -> Option<Ordering> {
        if self.same_storage(other) && self.origin == other.origin {
            Some(self.offset().cmp(&other.offset()))
        } else {
            None
        }
    }
}

impl<'a, T> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("offset", &self.offset())
            .finish()
    }
}

/// A position in a `CircularList` that can modify the element under it.
pub struct CursorMut<'a, T: 'a> {
    ring: &'a mut [Option<T>],
    origin: usize,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(ring: &'a mut [Option<T>], origin: usize, index: usize) -> Self {
        debug_assert!(origin < ring.len() && index < ring.len());
        CursorMut { ring, origin, index }
    }

    /// The capacity of the list this cursor walks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.len() - 1
    }

    /// Returns the element under the cursor.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.ring[self.index].as_ref()
    }

    /// Returns the element under the cursor mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.ring[self.index].as_mut()
    }

    /// Number of forward steps from the start of this traversal.
    #[inline]
    pub fn offset(&self) -> usize {
        wrap_sub(self.origin, self.index, self.ring.len())
    }

    /// Steps toward the next older element.
    #[inline]
    pub fn move_next(&mut self) {
        self.index = wrap_sub(self.index, 1, self.ring.len());
    }

    /// Steps toward the next newer element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.index = wrap_add(self.index, 1, self.ring.len());
    }

    /// Borrows this position as a read-only cursor.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.ring, self.origin, self.index)
    }
}

impl<'a, T> AddAssign<isize> for CursorMut<'a, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.index = advance(self.index, n, self.ring.len());
    }
}

impl<'a, T> SubAssign<isize> for CursorMut<'a, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.index = retreat(self.index, n, self.ring.len());
    }
}

impl<'a, T> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("offset", &self.offset())
            .finish()
    }
}
