use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::mem;
use core::ops::{Index, IndexMut};

use super::*;

impl<T: Clone> Clone for CircularList<T> {
    /// Copies the slots as they are, so the clone has the same head and tail
    /// as the source.
    fn clone(&self) -> CircularList<T> {
        CircularList::from_parts(self.ring.clone(), self.head(), self.tail())
    }

    /// Reuses the existing storage when both lists have the same capacity,
    /// cloning slot by slot. If an element's `clone` panics, `self` is left
    /// empty with its capacity unchanged.
    fn clone_from(&mut self, source: &CircularList<T>) {
        if self.slots() != source.slots() {
            *self = source.clone();
            return;
        }
        let mut guard = ResetOnUnwind(self);
        guard.0.ring.clone_from_slice(&source.ring);
        guard.0.set_head(source.head());
        guard.0.set_tail(source.tail());
        mem::forget(guard);
    }
}

/// Empties the list when dropped; forgotten once the slots are consistent.
struct ResetOnUnwind<'a, T: 'a>(&'a mut CircularList<T>);

impl<'a, T> Drop for ResetOnUnwind<'a, T> {
    fn drop(&mut self) {
        for slot in self.0.ring.iter_mut() {
            *slot = None;
        }
        self.0.set_head(0);
        self.0.set_tail(0);
    }
}

impl<T> Default for CircularList<T> {
    /// An empty list of capacity 0.
    #[inline]
    fn default() -> CircularList<T> {
        CircularList::new(0)
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    /// Lists are equal when they hold equal elements in the same order,
    /// whatever their capacities.
    fn eq(&self, other: &CircularList<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for CircularList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(element) => element,
            None => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            }
        }
    }
}

impl<T> IndexMut<usize> for CircularList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => {
                panic!("index out of bounds: the len is {} but the index is {}",
                       len,
                       index)
            }
        }
    }
}

impl<T> From<Vec<T>> for CircularList<T> {
    /// Builds a full list whose capacity is the length of `elements`.
    ///
    /// Elements are pushed in order, so the last one becomes `front()`.
    fn from(elements: Vec<T>) -> CircularList<T> {
        let mut list = CircularList::new(elements.len());
        for element in elements {
            list.push(element);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for CircularList<T> {
    fn from(elements: [T; N]) -> CircularList<T> {
        CircularList::from(Vec::from(elements))
    }
}

impl<T> iter::FromIterator<T> for CircularList<T> {
    /// The capacity is the number of collected elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CircularList::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for CircularList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> Extend<T> for CircularList<T> {
    /// Pushes every element in turn; elements evicted on the way are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn initializer_sequence_is_full_with_last_as_front() {
        let list = CircularList::from(vec![2, 4, 6, 9]);
        assert!(list.is_full());
        assert_eq!(list.len(), 4);
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.front(), Some(&9));

        let list = CircularList::from(['a', 'b', 'c', 'd']);
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.back(), Some(&'a'));
        assert_eq!(list.front(), Some(&'d'));
    }

    #[test]
    fn collect_sizes_capacity_to_input() {
        let list: CircularList<_> = (0..5).collect();
        assert_eq!(list.capacity(), 5);
        assert!(list.is_full());
        assert_eq!(list.front(), Some(&4));
    }

    #[test]
    fn clone_is_independent_and_keeps_cursors() {
        let mut source = CircularList::new(4);
        for i in 0..6 {
            source.push(i);
        }
        source.pop();

        let mut copy = source.clone();
        assert_eq!(copy.len(), source.len());
        assert_eq!(copy.front(), source.front());
        assert_eq!(copy.back(), source.back());
        assert_eq!(copy.head(), source.head());
        assert_eq!(copy.tail(), source.tail());
        assert!(copy.iter().eq(source.iter()));

        copy.push(100);
        copy.push(101);
        assert_eq!(source.iter().cloned().collect::<Vec<_>>(), [5, 4, 3]);
        assert_eq!(copy.iter().cloned().collect::<Vec<_>>(), [101, 100, 5, 4]);

        source.clear();
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn clone_of_string_list() {
        let source: CircularList<String> =
            vec![String::from("x"), String::from("y")].into_iter().collect();
        let copy = source.clone();
        drop(source);
        assert_eq!(copy.front().map(String::as_str), Some("y"));
    }

    #[test]
    fn clone_from_reuses_storage_of_equal_capacity() {
        let mut source: CircularList<i32> = CircularList::new(4);
        source.extend(0..7);
        source.pop();

        let mut dest: CircularList<i32> = CircularList::new(4);
        dest.extend(10..12);
        let storage = dest.ring().as_ptr();

        dest.clone_from(&source);
        assert_eq!(dest.ring().as_ptr(), storage);
        assert_eq!(dest.head(), source.head());
        assert_eq!(dest.tail(), source.tail());
        assert_eq!(dest, source);
        assert!(dest.ring().iter().zip(source.ring()).all(|(a, b)| a == b));

        dest.push(100);
        assert_eq!(source.iter().cloned().collect::<Vec<_>>(), [5, 4, 3]);
        assert_eq!(dest.iter().cloned().collect::<Vec<_>>(), [100, 5, 4, 3]);
    }

    #[test]
    fn clone_from_other_capacity_takes_source_capacity() {
        let source = CircularList::from(vec![1, 2, 3]);
        let mut dest: CircularList<i32> = CircularList::new(7);
        dest.extend(0..5);

        dest.clone_from(&source);
        assert_eq!(dest.capacity(), 3);
        assert_eq!(dest.head(), source.head());
        assert_eq!(dest.tail(), source.tail());
        assert_eq!(dest, source);
    }

    struct Fragile {
        clones: Rc<Cell<usize>>,
        drops: Rc<Cell<usize>>,
    }

    impl Fragile {
        fn new(clones: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Fragile {
            Fragile { clones: clones.clone(), drops: drops.clone() }
        }
    }

    impl Clone for Fragile {
        fn clone(&self) -> Fragile {
            let n = self.clones.get();
            self.clones.set(n + 1);
            if n == 2 {
                panic!("third clone fails");
            }
            Fragile::new(&self.clones, &self.drops)
        }
    }

    impl Drop for Fragile {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn panicking_clone_rolls_back() {
        let clones = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));
        let source: CircularList<Fragile> =
            (0..4).map(|_| Fragile::new(&clones, &drops)).collect();

        let result = catch_unwind(AssertUnwindSafe(|| source.clone()));
        assert!(result.is_err());
        // the two clones made before the panic are gone again
        assert_eq!(drops.get(), 2);
        assert_eq!(source.len(), 4);

        drop(source);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn panicking_clone_from_leaves_destination_empty() {
        let clones = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));
        let source: CircularList<Fragile> =
            (0..4).map(|_| Fragile::new(&clones, &drops)).collect();
        let mut dest: CircularList<Fragile> =
            (0..4).map(|_| Fragile::new(&clones, &drops)).collect();

        let result = catch_unwind(AssertUnwindSafe(|| dest.clone_from(&source)));
        assert!(result.is_err());
        assert!(dest.is_empty());
        assert_eq!(dest.capacity(), 4);
        assert!(dest.ring().iter().all(Option::is_none));
        // all four original destination elements and both finished clones
        assert_eq!(drops.get(), 6);

        dest.push(Fragile::new(&clones, &drops));
        assert_eq!(dest.len(), 1);
        drop(dest);
        drop(source);
        assert_eq!(drops.get(), 11);
    }

    #[test]
    fn panicking_collect_rolls_back() {
        let clones = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));
        let result = catch_unwind(AssertUnwindSafe(|| {
            (0..4)
                .map(|i| {
                    if i == 3 {
                        panic!("source failed");
                    }
                    Fragile::new(&clones, &drops)
                })
                .collect::<CircularList<Fragile>>()
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn default_is_empty_zero_capacity() {
        let list: CircularList<u8> = CircularList::default();
        assert_eq!(list.capacity(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn equality_ignores_capacity_and_position() {
        let mut a: CircularList<i32> = CircularList::new(3);
        a.extend(0..7);
        let mut b: CircularList<i32> = CircularList::new(8);
        b.extend(4..7);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.push(7);
        assert!(a != b);
    }

    #[test]
    fn index_is_newest_first() {
        let mut list: CircularList<i32> = CircularList::new(3);
        list.extend(&[1, 2, 3, 4]);
        assert_eq!(list[0], 4);
        assert_eq!(list[2], 2);
        list[1] = 30;
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), [4, 30, 2]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 2 but the index is 2")]
    fn index_past_len_panics() {
        let mut list: CircularList<i32> = CircularList::new(3);
        list.extend(&[1, 2]);
        let _ = list[2];
    }

    #[test]
    fn fmt_lists_newest_first() {
        let mut list: CircularList<i32> = CircularList::new(5);
        list.extend(0..4);
        assert_eq!(format!("{:?}", list), "[3, 2, 1, 0]");
    }

    #[test]
    fn for_loops_over_references() {
        let mut list = CircularList::from(vec![1, 2, 3]);
        for x in &mut list {
            *x += 1;
        }
        let mut sum = 0;
        for x in &list {
            sum += *x;
        }
        assert_eq!(sum, 9);
        let owned: Vec<_> = list.into_iter().collect();
        assert_eq!(owned, [4, 3, 2]);
    }
}
