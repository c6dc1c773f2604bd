#![no_std]

//! `DynArray`: a growable array owning one contiguous block of storage.
//!
//! `DynArray<T>` tracks a logical length inside an allocated capacity. Pushing
//! onto a full array doubles the capacity, moving the existing elements into
//! the new block in order, so appends are amortized O(1).
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! - `push()`: amortized O(1); O(n) on the push that doubles the capacity
//! - `pop()`: O(1), never shrinks the capacity
//! - `at()`, indexing, `front()`, `back()`: O(1)
//! - `clone()`, `clone_from()`: O(capacity), copies every slot
//! - Iterator operations: O(n)
//!
//! Enable the optional `std` feature for [`DynArray::print`]:
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Capacity and Length
//!
//! Every slot of the capacity holds a value. Slots past the length hold
//! `T::default()` placeholders, which is why constructors and growth require
//! `T: Default`.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::new();
//! assert_eq!(array.capacity(), 4);
//!
//! for i in 1..=5 {
//!     array.push(i);
//! }
//! assert_eq!(array.len(), 5);
//! assert_eq!(array.capacity(), 8);
//!
//! assert_eq!(array.pop(), Some(5));
//! assert_eq!(array.len(), 4);
//! assert_eq!(array.capacity(), 8);
//! ```
//!
//! `with_capacity` only reserves slots; `from_elem` fills them:
//!
//! ```
//! # use dynarray::DynArray;
//! let reserved: DynArray<u8> = DynArray::with_capacity(10);
//! assert_eq!(reserved.len(), 0);
//! assert_eq!(reserved.capacity(), 10);
//!
//! let filled = DynArray::from_elem(3, 'x');
//! assert_eq!(filled.as_slice(), &['x', 'x', 'x']);
//! assert_eq!(filled.capacity(), 3);
//! ```
//!
//! # Validated and Unvalidated Access
//!
//! `at()` checks the index against the **capacity**, not the length, so the
//! reserved slots can be peeked at:
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let array: DynArray<i32> = DynArray::new();
//!
//! assert_eq!(array.at(3), Ok(&0));
//! assert_eq!(
//!     array.at(4),
//!     Err(DynArrayError::OutOfRange { index: 4, capacity: 4 })
//! );
//! ```
//!
//! `front()`, `back()` and `array[i]` do no checks of their own; misuse ends
//! in a slice-indexing panic rather than an error value.
//!
//! # Copies
//!
//! `clone()` and `clone_from()` produce fully independent storage:
//!
//! ```
//! # use dynarray::DynArray;
//! let original: DynArray<i32> = [1, 2, 3].into_iter().collect();
//! let mut copy = original.clone();
//! copy[0] = 100;
//! copy.push(4);
//!
//! assert_eq!(original.as_slice(), &[1, 2, 3]);
//! assert_ne!(original, copy);
//! ```
//!
//! # Iterator Support
//!
//! Iterators borrow the array, so the borrow checker rejects any use of one
//! after a `push`, `pop` or drop that could move the storage.
//!
//! ```
//! # use dynarray::DynArray;
//! let array: DynArray<&str> = ["a", "b", "c"].into_iter().collect();
//!
//! let forward: Vec<_> = array.iter().copied().collect();
//! let backward: Vec<_> = array.iter_rev().copied().collect();
//! assert_eq!(forward, ["a", "b", "c"]);
//! assert_eq!(backward, ["c", "b", "a"]);
//!
//! assert_eq!(array.to_string(), "a b c ");
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod array;
mod error;
mod iter;

// Re-export public types and traits
pub use array::{DynArray, DEFAULT_CAPACITY};
pub use error::DynArrayError;
pub use iter::{IntoIter, Iter, IterMut, RevIter};
