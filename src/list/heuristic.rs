//! Reorganization heuristics applied by a [`List`](crate::List) on every
//! successful access.

/// The default distance an accessed element moves toward the front under
/// the [`Transpose`] heuristic.
pub const TRANSPOSE_DISTANCE: usize = 4;

/// A policy deciding how the live elements are reordered after an access.
///
/// `promote` is only called with `index < elements.len()`.
pub trait Heuristic {
    /// Move the element at `index` toward the front of `elements`, and return
    /// the index it now occupies.
    fn promote<T>(&self, elements: &mut [T], index: usize) -> usize;
}

/// The "transpose with fixed offset" heuristic.
///
/// On access, the element at `index` is swapped with the element `distance`
/// slots ahead of it, or with the first element if it is already closer than
/// `distance` to the front. Elements accessed repeatedly converge to the
/// front after a few hits, while a single access only disturbs two slots.
///
/// # Examples
///
/// ```
/// use self_organizing_list::{Heuristic, Transpose};
///
/// let mut elements = [0, 1, 2, 3, 4, 5, 6];
///
/// assert_eq!(Transpose::default().promote(&mut elements, 6), 2);
/// assert_eq!(elements, [0, 1, 6, 3, 4, 5, 2]);
///
/// assert_eq!(Transpose::default().promote(&mut elements, 2), 0);
/// assert_eq!(elements, [6, 1, 0, 3, 4, 5, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transpose {
    distance: usize,
}

impl Transpose {
    /// Create a transpose heuristic moving accessed elements `distance` slots
    /// toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `distance == 0`.
    pub fn new(distance: usize) -> Self {
        assert!(distance > 0, "Transpose distance must be positive");
        Self { distance }
    }

    /// Returns the number of slots an accessed element moves toward the front.
    #[inline]
    pub fn distance(&self) -> usize {
        self.distance
    }
}

impl Default for Transpose {
    fn default() -> Self {
        Self::new(TRANSPOSE_DISTANCE)
    }
}

impl Heuristic for Transpose {
    fn promote<T>(&self, elements: &mut [T], index: usize) -> usize {
        let target = index.saturating_sub(self.distance);
        elements.swap(index, target);
        target
    }
}

/// The "move-to-front" heuristic.
///
/// On access, the element at `index` moves to the first slot, and every
/// element ahead of it shifts back by one slot, keeping their relative order.
///
/// # Examples
///
/// ```
/// use self_organizing_list::{Heuristic, MoveToFront};
///
/// let mut elements = [0, 1, 2, 3, 4];
///
/// assert_eq!(MoveToFront.promote(&mut elements, 3), 0);
/// assert_eq!(elements, [3, 0, 1, 2, 4]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveToFront;

impl Heuristic for MoveToFront {
    fn promote<T>(&self, elements: &mut [T], index: usize) -> usize {
        elements[..=index].rotate_right(1);
        0
    }
}
