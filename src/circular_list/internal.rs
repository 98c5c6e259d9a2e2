use alloc::boxed::Box;
use alloc::vec::Vec;

use log::warn;

use super::CircularList;
use crate::error::Error;
use crate::utils::*;

impl<T> CircularList<T> {
    /// Reserves room for `capacity + 1` slots without filling any of them.
    pub(crate) fn allocate(capacity: usize) -> Result<Vec<Option<T>>, Error> {
        let slots = match capacity.checked_add(1) {
            Some(slots) => slots,
            None => {
                warn!("circular list capacity {} overflows the slot count", capacity);
                return Err(Error::AllocationFailed { capacity });
            }
        };
        let mut ring = Vec::new();
        if ring.try_reserve_exact(slots).is_err() {
            warn!("failed to allocate {} slots for circular list", slots);
            return Err(Error::AllocationFailed { capacity });
        }
        Ok(ring)
    }

    #[inline]
    pub(crate) fn from_parts(ring: Box<[Option<T>]>, head: usize, tail: usize) -> Self {
        debug_assert!(!ring.is_empty());
        debug_assert!(head < ring.len());
        debug_assert!(tail < ring.len());
        CircularList { ring, head, tail }
    }

    #[inline]
    pub(crate) fn slots(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.slots())
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.slots())
    }

    #[inline]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub(crate) fn set_head(&mut self, head: usize) {
        debug_assert!(head <= self.capacity());
        self.head = head;
    }

    #[inline]
    pub(crate) fn set_tail(&mut self, tail: usize) {
        debug_assert!(tail <= self.capacity());
        self.tail = tail;
    }

    #[inline]
    pub(crate) fn ring(&self) -> &[Option<T>] {
        &self.ring
    }

    #[inline]
    pub(crate) fn ring_mut(&mut self) -> &mut [Option<T>] {
        &mut self.ring
    }

    /// Moves the value out of a slot, leaving it vacant.
    #[inline]
    pub(crate) fn buffer_read(&mut self, offset: usize) -> Option<T> {
        self.ring[offset].take()
    }

    #[inline]
    pub(crate) fn buffer_write(&mut self, offset: usize, element: T) {
        debug_assert!(self.ring[offset].is_none(), "slot {} is still occupied", offset);
        self.ring[offset] = Some(element);
    }

    #[inline]
    pub(crate) fn buffer_get(&self, offset: usize) -> Option<&T> {
        self.ring[offset].as_ref()
    }

    #[inline]
    pub(crate) fn buffer_get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.ring[offset].as_mut()
    }

    /// Removes the newest element.
    pub(crate) fn pop_newest(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let new_head = self.wrap_sub(self.head(), 1);
        self.set_head(new_head);
        self.buffer_read(new_head)
    }

    /// Returns the live slots as `(older, newer)`, each in chronological order.
    pub(crate) fn as_mut_slices(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let head = self.head();
        let tail = self.tail();
        let buf = &mut self.ring[..];
        if tail <= head {
            let (empty, buf) = buf.split_at_mut(0);
            (&mut buf[tail..head], empty)
        } else {
            let (left, right) = buf.split_at_mut(tail);
            (right, &mut left[..head])
        }
    }
}
