use core::iter::FusedIterator;

use super::*;
use crate::utils::*;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.tail == self.head {
            return None;
        }
        let ring = self.ring;
        self.head = wrap_sub(self.head, 1, ring.len());
        ring[self.head].as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = count(self.tail, self.head, self.ring.len());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.tail == self.head {
            return None;
        }
        let ring = self.ring;
        let tail = self.tail;
        self.tail = wrap_add(self.tail, 1, ring.len());
        ring[tail].as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.newer.next_back() {
            Some(slot) => slot.as_mut(),
            None => self.older.next_back().and_then(Option::as_mut),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.newer.len() + self.older.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.older.next() {
            Some(slot) => slot.as_mut(),
            None => self.newer.next().and_then(Option::as_mut),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_newest()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn wrapped(capacity: usize, pushes: usize) -> CircularList<usize> {
        let mut list = CircularList::new(capacity);
        for i in 0..pushes {
            list.push(i);
        }
        list
    }

    #[test]
    fn iter_is_newest_first_and_rev_is_chronological() {
        let list = wrapped(3, 3);
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), [2, 1, 0]);
        assert_eq!(list.iter().rev().cloned().collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn iter_yields_exactly_len_items_at_every_padding() {
        for pushes in 0..20 {
            let list = wrapped(6, pushes);
            let items: Vec<_> = list.iter().cloned().collect();
            assert_eq!(items.len(), list.len());
            assert_eq!(list.iter().len(), list.len());
            let expected: Vec<_> = (0..pushes).rev().take(6).collect();
            assert_eq!(items, expected);
        }
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list = wrapped(5, 8);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&7));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&6));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_matches_iter_order_when_wrapped() {
        for pushes in 0..12 {
            let mut list = wrapped(4, pushes);
            let expected: Vec<_> = list.iter().cloned().collect();
            assert_eq!(list.iter_mut().len(), expected.len());
            let seen: Vec<_> = list.iter_mut().map(|x| *x).collect();
            assert_eq!(seen, expected);
            let seen_rev: Vec<_> = list.iter_mut().rev().map(|x| *x).collect();
            let mut expected_rev = expected.clone();
            expected_rev.reverse();
            assert_eq!(seen_rev, expected_rev);
        }
    }

    #[test]
    fn iter_mut_writes_through() {
        let mut list = wrapped(3, 5);
        for (i, x) in list.iter_mut().enumerate() {
            *x = i * 100;
        }
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), [0, 100, 200]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&200));
    }

    #[test]
    fn into_iter_both_ends() {
        let list = wrapped(4, 6);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.next_back(), Some(2));
        assert_eq!(iter.collect::<Vec<_>>(), [4, 3]);
    }
}
