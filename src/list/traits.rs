use crate::list::List;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::iter::FromIterator;

/// Two lists are equal if their live elements are equal and in the same
/// order. Capacity and heuristic are not compared.
impl<T: PartialEq, H> PartialEq for List<T, H> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, H> Eq for List<T, H> {}

impl<T: Hash, H> Hash for List<T, H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.elements.hash(state);
    }
}

impl<T: Clone, H: Clone> Clone for List<T, H> {
    /// Clones the live elements in their current order. The clone has the
    /// same capacity and heuristic as the original.
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend_from_slice(&self.elements);
        Self {
            elements,
            capacity: self.capacity,
            heuristic: self.heuristic.clone(),
        }
    }
}

impl<T: fmt::Debug, H> fmt::Debug for List<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// Writes the live elements in their current order, separated by a space.
impl<T: fmt::Display, H> fmt::Display for List<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.elements.iter();
        if let Some(first) = elements.next() {
            write!(f, "{}", first)?;
            for elem in elements {
                write!(f, " {}", elem)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display, H> List<T, H> {
    /// Writes the current order of the list on a line of `out`, for
    /// debugging purposes.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = List::from_iter(0..6);
    /// list.get(&5).unwrap();
    ///
    /// let mut out = Vec::new();
    /// list.print(&mut out).unwrap();
    /// assert_eq!(out, b"0 5 2 3 4 1\n");
    /// ```
    pub fn print<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl<T, H: Default> FromIterator<T> for List<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut list = List::with_heuristic(lower, H::default());
        list.extend(iter);
        list
    }
}

impl<T, H> Extend<T> for List<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elem| self.insert(elem));
    }
}

impl<'a, T: 'a + Copy, H> Extend<&'a T> for List<T, H> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
