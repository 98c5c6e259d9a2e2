use alloc::boxed::Box;
use core::slice;

use log::{debug, trace};

use crate::cursor::{Cursor, CursorMut};
use crate::error::Error;

mod internal;
mod iterator_impls;
mod trait_impls;

/// `CircularList` is a fixed capacity ring buffer that keeps the most recent
/// elements.
///
/// Pushing into a full list silently evicts the oldest element. `front()` is
/// always the newest element and `back()` the oldest, and every iterator and
/// cursor walks from the newest element toward the oldest; call `.rev()` on an
/// iterator for chronological order.
///
/// The slots are allocated once, when the list is built, and never again.
///
/// # Capacity
///
/// The backing storage has `capacity() + 1` slots; the spare slot tells a
/// full list apart from an empty one.
/// [Read more]
///
/// [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
pub struct CircularList<T> {
    ring: Box<[Option<T>]>,
    head: usize,
    tail: usize,
}

/// `CircularList` iterator, newest element first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [Option<T>],
    head: usize,
    tail: usize,
}

/// `CircularList` mutable iterator, newest element first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    older: slice::IterMut<'a, Option<T>>,
    newer: slice::IterMut<'a, Option<T>>,
}

/// A by-value `CircularList` iterator, newest element first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: CircularList<T>,
}

impl<T> CircularList<T> {
    /// Creates an empty `CircularList` that retains at most `capacity`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated. See [`try_new`] for a
    /// fallible version.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list: CircularList<u32> = CircularList::new(4);
    /// assert_eq!(list.capacity(), 4);
    /// assert!(list.is_empty());
    /// ```
    ///
    /// [`try_new`]: #method.try_new
    pub fn new(capacity: usize) -> CircularList<T> {
        match Self::try_new(capacity) {
            Ok(list) => list,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates an empty `CircularList`, reporting allocation failure as an
    /// error instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, Error};
    ///
    /// let list = CircularList::<u8>::try_new(8).unwrap();
    /// assert_eq!(list.capacity(), 8);
    ///
    /// let err = CircularList::<u8>::try_new(usize::MAX).unwrap_err();
    /// assert_eq!(err, Error::AllocationFailed { capacity: usize::MAX });
    /// ```
    pub fn try_new(capacity: usize) -> Result<CircularList<T>, Error> {
        let mut ring = Self::allocate(capacity)?;
        ring.resize_with(capacity + 1, || None);
        debug!("allocated circular list with capacity {}", capacity);
        Ok(Self::from_parts(ring.into_boxed_slice(), 0, 0))
    }

    /// Builds a full `CircularList` from a range of known length.
    ///
    /// The capacity is the number of elements in the range. Elements are
    /// stored positionally: the first element of the range becomes the oldest
    /// (`back()`) and the last one the newest (`front()`).
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated or if the iterator yields a
    /// different number of elements than its `len()` reported. See
    /// [`try_from_range`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let source = [10, 20, 30, 40, 50];
    /// let list = CircularList::from_range(source[1..4].iter().cloned());
    /// assert!(list.is_full());
    /// assert_eq!(list.back(), Some(&20));
    /// assert_eq!(list.front(), Some(&40));
    /// ```
    ///
    /// [`try_from_range`]: #method.try_from_range
    pub fn from_range<I>(range: I) -> CircularList<T>
        where I: IntoIterator,
              I::IntoIter: ExactSizeIterator<Item = T>
    {
        match Self::try_from_range(range) {
            Ok(list) => list,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible version of [`from_range`].
    ///
    /// On error nothing is returned and every element already taken from the
    /// range has been dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::try_from_range(vec!['a', 'b', 'c']).unwrap();
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.front(), Some(&'c'));
    ///
    /// let empty = CircularList::<char>::try_from_range(Vec::new()).unwrap();
    /// assert_eq!(empty.capacity(), 0);
    /// ```
    ///
    /// [`from_range`]: #method.from_range
    pub fn try_from_range<I>(range: I) -> Result<CircularList<T>, Error>
        where I: IntoIterator,
              I::IntoIter: ExactSizeIterator<Item = T>
    {
        let mut iter = range.into_iter();
        let capacity = iter.len();
        let mut ring = Self::allocate(capacity)?;

        for actual in 0..capacity {
            match iter.next() {
                Some(element) => ring.push(Some(element)),
                None => {
                    debug!("range ended after {} of {} elements", actual, capacity);
                    return Err(Error::LengthMismatch { expected: capacity, actual });
                }
            }
        }
        if iter.next().is_some() {
            debug!("range produced more than the {} elements it reported", capacity);
            return Err(Error::LengthMismatch { expected: capacity, actual: capacity + 1 });
        }

        // the spare slot sits at index `capacity`, right where head points
        ring.push(None);
        debug!("built full circular list of capacity {} from range", capacity);
        Ok(Self::from_parts(ring.into_boxed_slice(), capacity, 0))
    }

    /// Return the capacity of the `CircularList`.
    ///
    /// # Capacity
    ///
    /// Note that the `capacity()` is always `backed_slots.len() - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list: CircularList<i32> = CircularList::new(3);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots() - 1
    }

    /// Returns the number of elements in the `CircularList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(2);
    /// assert_eq!(list.len(), 0);
    /// list.push(1);
    /// assert_eq!(list.len(), 1);
    /// list.push(2);
    /// list.push(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        crate::utils::count(self.tail(), self.head(), self.slots())
    }

    /// Returns true if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head() == self.tail()
    }

    /// Returns true if the list holds `capacity()` elements, so that the next
    /// `push` evicts the oldest one.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(2);
    /// list.push(1);
    /// assert!(!list.is_full());
    /// list.push(2);
    /// assert!(list.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.wrap_add(self.head(), 1) == self.tail()
    }

    /// Pushes an element as the newest one.
    ///
    /// Returns `None` if the list still had room, or `Some(evicted)` if it was
    /// full, where `evicted` is the oldest element, which had to make room.
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> None
    /// [1, _, _] <-(+)- 2 => [2, 1, _] -> None
    /// [2, 1, _] <-(+)- 3 => [3, 2, 1] -> None
    /// [3, 2, 1] <-(+)- 4 => [4, 3, 2] -> Some(1)
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(3);
    /// list.push(1);
    /// list.push(2);
    /// list.push(3);
    /// let evicted = list.push(4);
    ///
    /// assert_eq!(evicted, Some(1));
    /// assert_eq!(list.front(), Some(&4));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push(&mut self, element: T) -> Option<T> {
        if self.capacity() == 0 {
            trace!("zero capacity circular list handed back pushed element");
            return Some(element);
        }
        let evicted = if self.is_full() {
            trace!("circular list full at capacity {}, evicting oldest element", self.capacity());
            self.pop()
        } else {
            None
        };
        let head = self.head();
        self.buffer_write(head, element);
        self.set_head(self.wrap_add(head, 1));
        evicted
    }

    /// Removes the oldest element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(3);
    /// list.push(1);
    /// list.push(2);
    ///
    /// assert_eq!(list.pop(), Some(1));
    /// assert_eq!(list.pop(), Some(2));
    /// assert_eq!(list.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail();
        self.set_tail(self.wrap_add(tail, 1));
        self.buffer_read(tail)
    }

    /// Provides a reference to the newest element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(15);
    /// assert_eq!(list.front(), None);
    ///
    /// list.push(23);
    /// list.push(41);
    /// assert_eq!(list.front(), Some(&41));
    /// ```
    pub fn front(&self) -> Option<&T> {
        if !self.is_empty() {
            self.buffer_get(self.wrap_sub(self.head(), 1))
        } else {
            None
        }
    }

    /// Provides a mutable reference to the newest element, or `None` if the
    /// list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if !self.is_empty() {
            let newest = self.wrap_sub(self.head(), 1);
            self.buffer_get_mut(newest)
        } else {
            None
        }
    }

    /// Provides a reference to the oldest element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(15);
    /// assert_eq!(list.back(), None);
    ///
    /// list.push(23);
    /// list.push(41);
    /// assert_eq!(list.back(), Some(&23));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if !self.is_empty() {
            self.buffer_get(self.tail())
        } else {
            None
        }
    }

    /// Provides a mutable reference to the oldest element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(3);
    /// list.push(1);
    /// list.push(2);
    /// if let Some(x) = list.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(list.back(), Some(&9));
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if !self.is_empty() {
            let tail = self.tail();
            self.buffer_get_mut(tail)
        } else {
            None
        }
    }

    /// Retrieves an element by age: index 0 is the newest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(4);
    /// list.push(3);
    /// list.push(4);
    /// list.push(5);
    /// assert_eq!(list.get(0), Some(&5));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.buffer_get(self.wrap_sub(self.head(), index + 1))
        } else {
            None
        }
    }

    /// Retrieves an element mutably by age: index 0 is the newest element.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let idx = self.wrap_sub(self.head(), index + 1);
            self.buffer_get_mut(idx)
        } else {
            None
        }
    }

    /// Returns `true` if the list contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        self.iter().any(|e| e == x)
    }

    /// Removes all elements. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(5);
    /// list.push(1);
    /// list.push(2);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 5);
    /// ```
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
        self.set_head(0);
        self.set_tail(0);
    }

    /// Moves the contents out, leaving `self` as an empty list of capacity 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut source = CircularList::from(vec![1, 2]);
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.len(), 2);
    /// assert!(source.is_empty());
    /// assert_eq!(source.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> CircularList<T> {
        core::mem::take(self)
    }

    /// Returns an iterator from the newest to the oldest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(3);
    /// list.push(5);
    /// list.push(6);
    /// list.push(8);
    ///
    /// let newest_first: Vec<_> = list.iter().cloned().collect();
    /// assert_eq!(newest_first, [8, 6, 5]);
    ///
    /// let oldest_first: Vec<_> = list.iter().rev().cloned().collect();
    /// assert_eq!(oldest_first, [5, 6, 8]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self.ring(),
            head: self.head(),
            tail: self.tail(),
        }
    }

    /// Returns an iterator from the newest to the oldest element that yields
    /// mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new(3);
    /// list.push(5);
    /// list.push(3);
    /// list.push(4);
    /// for num in list.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(list.iter().cloned().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (older, newer) = self.as_mut_slices();
        IterMut {
            older: older.iter_mut(),
            newer: newer.iter_mut(),
        }
    }

    /// Returns a cursor at the newest element.
    ///
    /// Advancing the cursor moves toward older elements; after `len()` steps
    /// it reaches `end()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let list = CircularList::from(vec![1, 2, 3]);
    /// let begin = list.begin();
    /// assert_eq!(begin.get(), Some(&3));
    /// assert_eq!((begin + 2).get(), Some(&1));
    /// assert_eq!(list.end() - begin, list.len());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        let newest = self.wrap_sub(self.head(), 1);
        Cursor::new(self.ring(), newest, newest)
    }

    /// Returns the cursor one step past the oldest element.
    ///
    /// The cursor belongs to the same traversal as `begin()`, so the two can
    /// be compared and subtracted.
    pub fn end(&self) -> Cursor<'_, T> {
        let newest = self.wrap_sub(self.head(), 1);
        let past_oldest = self.wrap_sub(self.tail(), 1);
        Cursor::new(self.ring(), newest, past_oldest)
    }

    /// Returns a mutable cursor at the newest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::from(vec![1, 2, 3]);
    /// {
    ///     let mut cursor = list.begin_mut();
    ///     cursor.move_next();
    ///     if let Some(x) = cursor.get_mut() {
    ///         *x *= 10;
    ///     }
    /// }
    /// assert_eq!(list.iter().cloned().collect::<Vec<_>>(), [3, 20, 1]);
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let newest = self.wrap_sub(self.head(), 1);
        CursorMut::new(self.ring_mut(), newest, newest)
    }
}
