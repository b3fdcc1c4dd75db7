use crate::list::heuristic::{Heuristic, Transpose};
use crate::Error;

pub mod heuristic;

mod traits;

/// The capacity of a list created by [`List::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// The `List` is a growable, self-organizing list. Elements are found by a
/// linear search, and every successful access moves the accessed element
/// toward the front, as decided by the heuristic `H`.
///
/// The `List` contains:
/// - the live elements, stored contiguously in slots `0..len`;
/// - the capacity of the list, which is always `>= len`, and is doubled
///   whenever an insertion finds the list full. The capacity never shrinks;
/// - the heuristic applied on access, [`Transpose`] by default.
///
/// The list does not reject duplicates. Inserting an element equal to a live
/// one makes later lookups ambiguous: they find whichever copy is nearer to
/// the front.
///
/// # Naming Conventions
///
/// - `search`, `contains`, `peek`: read-only queries that never reorganize;
/// - `get*`: accesses that reorganize the list and return the accessed element.
pub struct List<T, H = Transpose> {
    elements: Vec<T>,
    /// the number of allocated slots, `elements.len() <= capacity`
    capacity: usize,
    heuristic: H,
}

// private methods
impl<T, H> List<T, H> {
    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity.checked_mul(2).expect("capacity overflow")
        };
        log::debug!(from = self.capacity, to = new_capacity, "Growing list capacity");
        self.elements.reserve_exact(new_capacity - self.elements.len());
        self.capacity = new_capacity;
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }
}

impl<T> List<T> {
    /// Create an empty `List` with [`DEFAULT_CAPACITY`] and the [`Transpose`]
    /// heuristic.
    ///
    /// # Examples
    /// ```
    /// use self_organizing_list::{List, DEFAULT_CAPACITY};
    /// let list: List<u32> = List::new();
    /// assert_eq!(list.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty `List` with room for `capacity` elements and the
    /// [`Transpose`] heuristic.
    ///
    /// A zero capacity is allowed: the first insertion grows it to one.
    ///
    /// # Examples
    /// ```
    /// use self_organizing_list::List;
    /// let list: List<u32> = List::with_capacity(50);
    /// assert_eq!(list.capacity(), 50);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_heuristic(capacity, Transpose::default())
    }
}

impl<T, H> List<T, H> {
    /// Create an empty `List` with room for `capacity` elements, reorganized
    /// by `heuristic` on access.
    ///
    /// # Examples
    /// ```
    /// use self_organizing_list::{List, MoveToFront};
    ///
    /// let mut list = List::with_heuristic(8, MoveToFront);
    /// list.extend([1, 2, 3].iter().copied());
    ///
    /// assert_eq!(list.get(&3), Ok(&3));
    /// assert_eq!(list.into_vec(), vec![3, 1, 2]);
    /// ```
    pub fn with_heuristic(capacity: usize, heuristic: H) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
            heuristic,
        }
    }

    /// Returns the number of live elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the `List` holds no element.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.insert("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of allocated slots. It only ever grows, by doubling.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::with_capacity(2);
    /// list.insert(1);
    /// list.insert(2);
    /// assert_eq!(list.capacity(), 2);
    ///
    /// list.insert(3);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the heuristic reorganizing the list.
    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Provides a reference to the element at `index`, or `None` if `index` is
    /// not a live slot. Unlike [`List::get_by_index`], it does not reorganize
    /// the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list: List<_> = List::from_iter([1, 2, 3].iter().copied());
    /// assert_eq!(list.peek(1), Some(&2));
    /// assert_eq!(list.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Appends an element at the back of the list, the coldest position.
    ///
    /// If the list is full, its capacity is doubled first, moving the live
    /// elements to the new storage in the same order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time; a growth
    /// step takes *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::with_capacity(1);
    /// list.insert(1);
    /// list.insert(3);
    /// assert_eq!(list.peek(1), Some(&3));
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn insert(&mut self, elem: T) {
        if self.elements.len() == self.capacity {
            self.grow();
        }
        self.elements.push(elem);
    }

    /// Removes all elements from the `List`, keeping its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::with_capacity(4);
    /// list.insert(1);
    /// list.insert(2);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 4);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the list and returns its live elements in their current order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialEq, H> List<T, H> {
    /// Returns the index of the first element equal to `elem`, or `None` if
    /// there is none. The list is not reorganized.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, and is fast for
    /// elements brought near the front by previous accesses.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list: List<_> = List::from_iter(0..10);
    /// assert_eq!(list.search(&7), Some(7));
    /// assert_eq!(list.search(&10), None);
    /// ```
    pub fn search(&self, elem: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == elem)
    }

    /// Returns `true` if the `List` contains an element equal to `elem`.
    /// The list is not reorganized.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.insert(0);
    /// list.insert(1);
    /// list.insert(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    #[inline]
    pub fn contains(&self, elem: &T) -> bool {
        self.search(elem).is_some()
    }

    /// Removes the first element equal to `elem` and returns it, or returns
    /// `None` if there is none, leaving the list untouched.
    ///
    /// The last element takes the slot of the removed one. The order is given
    /// up for constant time removal; the displaced element finds its way back
    /// toward the front on its next accesses.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time for the search, then
    /// *O*(1) for the removal itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = List::from_iter(0..5);
    ///
    /// assert_eq!(list.remove(&1), Some(1));
    /// assert_eq!(list.into_vec(), vec![0, 4, 2, 3]);
    /// ```
    pub fn remove(&mut self, elem: &T) -> Option<T> {
        let index = self.search(elem)?;
        log::trace!(index, swapped = self.len() - 1, "Removing list element");
        Some(self.elements.swap_remove(index))
    }
}

impl<T, H: Heuristic> List<T, H> {
    /// Accesses the element at `index`, reorganizing the list, and returns a
    /// reference to the element at its new position.
    ///
    /// With the default [`Transpose`] heuristic, the element moves
    /// [`TRANSPOSE_DISTANCE`](crate::TRANSPOSE_DISTANCE) slots toward the
    /// front, swapping places with the element there, or swaps with the first
    /// element when it is closer to the front than that.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = List::from_iter(0..10);
    ///
    /// assert_eq!(list.get_by_index(9), Ok(&9));
    /// assert_eq!(list.search(&9), Some(5));
    /// assert_eq!(list.peek(9), Some(&5));
    ///
    /// assert_eq!(list.get_by_index(10), Err(Error::OutOfRange { index: 10, len: 10 }));
    /// ```
    pub fn get_by_index(&mut self, index: usize) -> Result<&T, Error> {
        self.get_by_index_mut(index).map(|elem| &*elem)
    }

    /// Like [`List::get_by_index`], but returns a mutable reference.
    ///
    /// Changing the element in a way that changes its equality is allowed,
    /// later searches simply compare against the new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = List::from_iter(0..3);
    ///
    /// if let Ok(x) = list.get_by_index_mut(2) {
    ///     *x *= 5;
    /// }
    /// assert_eq!(list.peek(0), Some(&10));
    /// ```
    pub fn get_by_index_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.check_index(index)?;
        let target = self.heuristic.promote(&mut self.elements, index);
        log::trace!(from = index, to = target, "Promoted list element");
        Ok(&mut self.elements[target])
    }
}

impl<T: PartialEq, H: Heuristic> List<T, H> {
    /// Looks up the first element equal to `elem`, reorganizes the list as
    /// [`List::get_by_index`] does, and returns a reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element is equal to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = List::from_iter(0..10);
    ///
    /// assert_eq!(list.get(&9), Ok(&9));
    /// assert_eq!(list.get(&9), Ok(&9));
    /// assert_eq!(list.search(&9), Some(1));
    ///
    /// assert_eq!(list.get(&10), Err(Error::NotFound));
    /// ```
    pub fn get(&mut self, elem: &T) -> Result<&T, Error> {
        self.get_mut(elem).map(|elem| &*elem)
    }

    /// Like [`List::get`], but returns a mutable reference.
    pub fn get_mut(&mut self, elem: &T) -> Result<&mut T, Error> {
        let index = self.search(elem).ok_or(Error::NotFound)?;
        self.get_by_index_mut(index)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::heuristic::{MoveToFront, Transpose};
    use crate::list::List;
    use crate::Error;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn list_eq<T, H, I>(list: &List<T, H>, expected: I)
    where
        T: std::fmt::Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(list.elements, Vec::from_iter(expected));
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::with_capacity(50);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 50);
        assert_eq!(list.heuristic(), &Transpose::default());
        list.insert(1);
        assert!(!list.is_empty());
        assert_eq!(list.remove(&1), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 50);
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy + PartialEq> PartialEq for DropChecker<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::with_capacity(1);
        list.insert(DropChecker::new(1, &dropped));
        list.insert(DropChecker::new(2, &dropped));
        list.insert(DropChecker::new(3, &dropped));
        assert!(dropped.borrow().is_empty(), "growth must move, not drop");

        let removed = list.remove(&DropChecker::new(2, &dropped));
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(removed);
        assert_eq!(dropped.borrow().as_slice(), &[2, 2]);

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 2, 1, 3]);
    }

    #[test]
    fn list_insert_and_grow() {
        let mut list = List::with_capacity(50);
        for i in 0..50 {
            list.insert(i);
        }
        assert_eq!(list.capacity(), 50);
        for i in 50..55 {
            list.insert(i);
        }
        assert_eq!(list.len(), 55);
        assert_eq!(list.capacity(), 100);
        list_eq(&list, 0..55);
        for i in 0..55 {
            assert_eq!(list.search(&i), Some(i as usize));
        }
    }

    #[test]
    fn list_grow_from_zero() {
        let mut list = List::with_capacity(0);
        assert_eq!(list.capacity(), 0);
        let mut capacities = Vec::new();
        for i in 0..9 {
            list.insert(i);
            capacities.push(list.capacity());
        }
        assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
        list_eq(&list, 0..9);
    }

    #[test]
    fn list_insert_duplicates() {
        let mut list = List::new();
        list.insert('a');
        list.insert('b');
        list.insert('a');
        assert_eq!(list.len(), 3);
        assert_eq!(list.search(&'a'), Some(0));
        assert_eq!(list.remove(&'a'), Some('a'));
        list_eq(&list, vec!['a', 'b']);
        assert_eq!(list.search(&'a'), Some(0));
    }

    #[test]
    fn list_search_does_not_reorganize() {
        let list: List<_> = List::from_iter(0..10);
        assert_eq!(list.search(&9), Some(9));
        assert_eq!(list.search(&9), Some(9));
        assert!(list.contains(&3));
        assert!(!list.contains(&10));
        assert_eq!(list.search(&-1), None);
        list_eq(&list, 0..10);

        let empty = List::<i32>::new();
        assert_eq!(empty.search(&0), None);
    }

    #[test]
    fn list_get_by_index() {
        fn test_get_by_index(index: usize, expected_target: usize) {
            let mut list: List<usize> = List::from_iter(0..10);
            assert_eq!(list.get_by_index(index), Ok(&index));
            assert_eq!(list.peek(expected_target), Some(&index));
            assert_eq!(list.peek(index), Some(&expected_target));
            assert_eq!(list.len(), 10);
        }
        test_get_by_index(9, 5);
        test_get_by_index(5, 1);
        test_get_by_index(4, 0);
        test_get_by_index(2, 0);
        test_get_by_index(0, 0);
    }

    #[test]
    fn list_get_by_index_out_of_range() {
        let mut list: List<_> = List::from_iter(0..3);
        assert_eq!(
            list.get_by_index(3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.get_by_index_mut(usize::MAX),
            Err(Error::OutOfRange {
                index: usize::MAX,
                len: 3
            })
        );
        list_eq(&list, 0..3);

        let mut empty = List::<i32>::new();
        assert_eq!(
            empty.get_by_index(0),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn list_get_converges() {
        let mut list = List::with_capacity(50);
        for i in 0..55 {
            list.insert(i);
        }

        let mut positions = Vec::new();
        for _ in 0..5 {
            assert_eq!(list.get(&49), Ok(&49));
            positions.push(list.search(&49));
        }
        assert_eq!(
            positions,
            vec![Some(45), Some(41), Some(37), Some(33), Some(29)]
        );
        for _ in 0..8 {
            assert_eq!(list.get(&49), Ok(&49));
        }
        assert_eq!(list.search(&49), Some(0));
        assert_eq!(list.len(), 55);

        assert_eq!(list.remove(&49), Some(49));
        assert_eq!(list.search(&49), None);
        assert_eq!(list.len(), 54);
    }

    #[test]
    fn list_get_not_found() {
        let mut list: List<_> = List::from_iter(0..5);
        assert_eq!(list.get(&5), Err(Error::NotFound));
        assert_eq!(list.get_mut(&5), Err(Error::NotFound));
        list_eq(&list, 0..5);
    }

    #[test]
    fn list_get_mut() {
        let mut list: List<_> = List::from_iter(0..6);
        if let Ok(x) = list.get_mut(&5) {
            *x = 50;
        }
        list_eq(&list, vec![0, 50, 2, 3, 4, 1]);
        assert_eq!(list.search(&5), None);
        assert_eq!(list.get(&50), Ok(&50));
        assert_eq!(list.search(&50), Some(0));
    }

    #[test]
    fn list_move_to_front() {
        let mut list = List::with_heuristic(4, MoveToFront);
        list.extend(0..6);
        assert_eq!(list.get(&4), Ok(&4));
        list_eq(&list, vec![4, 0, 1, 2, 3, 5]);
        assert_eq!(list.get_by_index(5), Ok(&5));
        list_eq(&list, vec![5, 4, 0, 1, 2, 3]);
        assert_eq!(list.capacity(), 8);
    }

    #[test]
    fn list_remove() {
        fn test_remove<I1, I2>(list: I1, elem: i32, removed: Option<i32>, expected: I2)
        where
            I1: IntoIterator<Item = i32>,
            I2: IntoIterator<Item = i32>,
        {
            let mut list: List<i32> = List::from_iter(list);
            let capacity = list.capacity();
            assert_eq!(list.remove(&elem), removed);
            list_eq(&list, expected);
            assert_eq!(list.capacity(), capacity);
        }
        test_remove(0..5, 0, Some(0), vec![4, 1, 2, 3]);
        test_remove(0..5, 2, Some(2), vec![0, 1, 4, 3]);
        test_remove(0..5, 4, Some(4), 0..4);
        test_remove(0..5, 5, None, 0..5);
        test_remove(Some(0), 0, Some(0), None);
        test_remove(None, 0, None, None);
    }

    #[test]
    fn list_remove_twice() {
        let mut list: List<_> = List::from_iter(0..5);
        assert_eq!(list.remove(&3), Some(3));
        assert_eq!(list.remove(&3), None);
        assert_eq!(list.len(), 4);
        list_eq(&list, vec![0, 1, 2, 4]);
    }

    #[test]
    fn list_clear() {
        let mut list = List::with_capacity(2);
        list.extend(0..5);
        assert_eq!(list.capacity(), 8);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.peek(0), None);
    }
}
