use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use crate::error::DynArrayError;
use crate::iter::{Iter, IterMut, RevIter};

/// Capacity of an array created with [`DynArray::new`].
pub const DEFAULT_CAPACITY: usize = 4;
const GROWTH_FACTOR: usize = 2;

/// A growable array that owns a contiguous block of `capacity` slots.
///
/// Slots `[0, len)` hold the logical elements. Slots `[len, capacity)` hold
/// `T::default()` placeholders: they are allocated and readable through
/// [`DynArray::at`] and indexing, but are not part of the array's contents.
pub struct DynArray<T> {
    storage: Box<[T]>,
    size: usize,
}

impl<T: Default> DynArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with `capacity` pre-allocated slots.
    ///
    /// The length stays 0; nothing is pushed. A capacity of 0 is raised to 1
    /// so that doubling always makes progress.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: default_block(capacity.max(1)),
            size: 0,
        }
    }

    /// Appends `value` as the last element, doubling the capacity first if
    /// the array is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows. Aborts on allocation failure;
    /// use [`DynArray::try_push`] to observe either as an error.
    pub fn push(&mut self, value: T) {
        if self.size == self.capacity() {
            let new_capacity = self.capacity().saturating_mul(GROWTH_FACTOR);
            self.relocate(Vec::with_capacity(new_capacity), new_capacity);
        }
        self.place(value);
    }

    /// Appends `value` like [`DynArray::push`], reporting growth failures.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityOverflow` if the doubled capacity
    /// overflows `usize` or the byte size of the new block exceeds
    /// `isize::MAX`, or `DynArrayError::AllocationFailed` if the allocator
    /// refuses the new block. The array is unchanged on error.
    pub fn try_push(&mut self, value: T) -> Result<(), DynArrayError> {
        if self.size == self.capacity() {
            let capacity = self.capacity();
            let new_capacity = capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(DynArrayError::CapacityOverflow { capacity })
                .inspect_err(|err| tracing::debug!(%err, "try_push rejected"))?;
            self.try_grow_to(new_capacity)?;
        }
        self.place(value);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty. The capacity is never reduced;
    /// the vacated slot is reset to a placeholder.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        self.size -= 1;
        self.storage.get_mut(self.size).map(mem::take)
    }

    /// Removes every element, keeping the capacity.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    #[allow(clippy::indexing_slicing)] // callers grow first when full
    fn place(&mut self, value: T) {
        self.storage[self.size] = value;
        self.size += 1;
    }

    fn try_grow_to(&mut self, new_capacity: usize) -> Result<(), DynArrayError> {
        let capacity = self.capacity();
        Layout::array::<T>(new_capacity)
            .map_err(|_| DynArrayError::CapacityOverflow { capacity })
            .and_then(|_| try_allocate(new_capacity))
            .map(|block| self.relocate(block, new_capacity))
            .inspect_err(|err| tracing::debug!(%err, new_capacity, "growth rejected"))
    }

    // `block` comes in with `new_capacity` reserved, so nothing below
    // reallocates and the old storage is only released once its elements
    // have moved.
    fn relocate(&mut self, mut block: Vec<T>, new_capacity: usize) {
        let old_capacity = self.capacity();

        block.extend(mem::take(&mut self.storage).into_vec());
        block.resize_with(new_capacity, T::default);
        self.storage = block.into_boxed_slice();

        tracing::trace!(
            old_capacity,
            new_capacity = self.capacity(),
            len = self.size,
            "reallocated storage"
        );
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// Creates an array holding `count` copies of `value`, with no spare
    /// capacity.
    ///
    /// A `count` of 0 yields an empty array with capacity 1.
    #[must_use]
    pub fn from_elem(count: usize, value: T) -> Self {
        if count == 0 {
            return Self::with_capacity(0);
        }
        Self {
            storage: alloc::vec![value; count].into_boxed_slice(),
            size: count,
        }
    }
}

impl<T> DynArray<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the element at `index`, validated against the capacity.
    ///
    /// Indices in `[len, capacity)` are accepted and yield the slot's
    /// placeholder value.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= capacity`.
    pub fn at(&self, index: usize) -> Result<&T, DynArrayError> {
        let capacity = self.capacity();
        self.storage
            .get(index)
            .ok_or(DynArrayError::OutOfRange { index, capacity })
    }

    /// Mutable form of [`DynArray::at`].
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= capacity`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let capacity = self.capacity();
        self.storage
            .get_mut(index)
            .ok_or(DynArrayError::OutOfRange { index, capacity })
    }

    /// Returns slot 0 without checking the length.
    ///
    /// On an empty array this is the first placeholder.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn front(&self) -> &T {
        &self.storage[0]
    }

    #[allow(clippy::indexing_slicing)]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.storage[0]
    }

    /// Returns the last element without checking the length.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn back(&self) -> &T {
        assert!(self.size > 0, "back() called on empty array");
        &self.storage[self.size - 1]
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    #[allow(clippy::indexing_slicing)]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.size > 0, "back_mut() called on empty array");
        &mut self.storage[self.size - 1]
    }

    /// The logical elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.get(..self.size).unwrap_or_default()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.get_mut(..self.size).unwrap_or_default()
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a reverse iterator over the elements.
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) fn into_elements(self) -> Vec<T> {
        let mut elements = self.storage.into_vec();
        elements.truncate(self.size);
        elements
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Display> DynArray<T> {
    /// Writes the elements, space separated, to stdout followed by a newline.
    pub fn print(&self) {
        std::println!("{self}");
    }
}

fn default_block<T: Default>(capacity: usize) -> Box<[T]> {
    core::iter::repeat_with(T::default).take(capacity).collect()
}

fn try_allocate<T>(slots: usize) -> Result<Vec<T>, DynArrayError> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(slots)
        .map_err(|_| DynArrayError::AllocationFailed { requested: slots })?;
    Ok(block)
}

impl<T: Default> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            size: self.size,
        }
    }

    // Build the copy first, then swap it in; the previous block drops here.
    fn clone_from(&mut self, source: &Self) {
        let mut storage = source.storage.clone();
        mem::swap(&mut self.storage, &mut storage);
        self.size = source.size;
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[allow(clippy::indexing_slicing)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T: Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(f, "{element} ")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_default_construction() {
        let array: DynArray<i32> = DynArray::new();

        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
        assert_eq!(array.storage.len(), 4);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut array: DynArray<i32> = DynArray::with_capacity(0);
        assert_eq!(array.capacity(), 1);

        array.push(1);
        array.push(2);
        assert_eq!(array.capacity(), 2);
        assert_eq!(array.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_growth_doubles_and_keeps_order() {
        let mut array = DynArray::new();
        for i in 0..4 {
            array.push(i);
        }
        assert_eq!(array.capacity(), 4);

        array.push(4);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
        // tail slots are fresh placeholders
        assert_eq!(&array.storage[5..], &[0, 0, 0]);
    }

    #[test]
    fn test_pop_resets_slot() {
        let mut array = DynArray::new();
        array.push("a".to_string());
        array.push("b".to_string());

        assert_eq!(array.pop(), Some("b".to_string()));
        assert_eq!(array.storage[1], "");
        assert_eq!(array.len(), 1);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn test_try_push_grows() {
        let mut array = DynArray::with_capacity(1);
        array.try_push(1u8).unwrap();
        array.try_push(2u8).unwrap();
        array.try_push(3u8).unwrap();

        assert_eq!(array.capacity(), 4);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_allocate_reports_allocation_failure() {
        // fits the layout limit, but no allocator can hand out isize::MAX bytes
        let requested = isize::MAX as usize;
        let error = try_allocate::<u8>(requested).unwrap_err();

        assert_eq!(error, DynArrayError::AllocationFailed { requested });
        assert!(error.to_string().contains("Allocation failed"));
    }

    #[test]
    fn test_try_grow_to_layout_overflow_leaves_array_untouched() {
        let mut array: DynArray<u64> = [1, 2, 3].into_iter().collect();

        let error = array.try_grow_to(usize::MAX).unwrap_err();

        assert_eq!(error, DynArrayError::CapacityOverflow { capacity: 4 });
        assert!(error.to_string().contains("capacity 4"));
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
        assert_eq!(&array.storage[3..], &[0]);
    }

    #[test]
    fn test_try_grow_to_allocation_failure_leaves_array_untouched() {
        let mut array: DynArray<u8> = [7, 8, 9, 10].into_iter().collect();
        let requested = isize::MAX as usize;

        assert_eq!(
            array.try_grow_to(requested).unwrap_err(),
            DynArrayError::AllocationFailed { requested }
        );
        assert_eq!(array.len(), 4);
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.as_slice(), &[7, 8, 9, 10]);

        // still usable after the failed growth
        array.try_push(11).unwrap();
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.as_slice(), &[7, 8, 9, 10, 11]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_place_on_full_storage_panics() {
        let mut array = DynArray::from_elem(2, 0u32);
        array.place(1);
    }

    #[test]
    fn test_growth_allocates_exact_block() {
        let mut array: DynArray<u16> = DynArray::with_capacity(3);
        for i in 0..4 {
            array.push(i);
        }

        assert_eq!(array.capacity(), 6);
        assert_eq!(array.storage.len(), 6);
        assert_eq!(&array.storage[4..], &[0, 0]);
    }

    #[test]
    fn test_clone_from_replaces_storage() {
        let mut target = DynArray::with_capacity(16);
        target.push(9);

        let source: DynArray<i32> = [1, 2, 3].into_iter().collect();
        target.clone_from(&source);

        assert_eq!(target.capacity(), 4);
        assert_eq!(target.len(), 3);
        assert_eq!(target, source);
    }

    #[test]
    fn test_into_elements_drops_placeholders() {
        let array: DynArray<i32> = vec![7, 8].into_iter().collect();
        assert_eq!(array.into_elements(), vec![7, 8]);
    }
}
