//! A container holding zero or one value.
//!
//! Absence is a valid state, not an error. Reading a value that is not there
//! is a caller bug and goes through [`crate::contract::violated`].

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::contract;
use crate::error::Violation;

/// Holds zero or one `T`.
///
/// The value lives inline, so an empty `Optional` costs no allocation and `T`
/// needs neither `Default` nor `Clone` unless the caller copies the container.
///
/// Method calls on an `Optional` reach the held value through `Deref`. Like
/// `Box` and `Rc`, the container's own operations are associated functions
/// (`Optional::is_present(&o)`), so they never hide a method of `T`:
///
/// ```
/// use carrier_core::Optional;
///
/// let mut items = Optional::new(vec![1, 2, 3]);
/// items.clear();
/// assert!(Optional::is_present(&items));
/// assert!(items.is_empty());
///
/// let mut greeting = Optional::new("hi".to_string());
/// assert_eq!(greeting.len(), 2);
/// assert_eq!(Optional::consume(&mut greeting), "hi");
/// assert!(Optional::is_empty(&greeting));
/// ```
///
/// Copies are deep and moves drain the source:
///
/// ```
/// use carrier_core::Optional;
///
/// let mut original = Optional::new(vec![1, 2, 3]);
/// let mut copy = original.clone();
/// copy.push(4);
/// assert_eq!(*original, vec![1, 2, 3]);
///
/// let moved = Optional::take(&mut original);
/// assert!(Optional::is_empty(&original));
/// assert_eq!(*moved, vec![1, 2, 3]);
/// ```
///
/// # Thread safety
///
/// No internal synchronization. `Optional<T>` is `Send`/`Sync` exactly when `T`
/// is; concurrent mutation needs external locking.
#[derive(PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    /// An empty container.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// A container owning `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// A container owning a copy of `value`.
    #[inline]
    #[must_use]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone())
    }

    /// True iff a value is held.
    #[inline]
    #[must_use]
    pub const fn is_present(this: &Self) -> bool {
        this.slot.is_some()
    }

    /// True iff no value is held.
    #[inline]
    #[must_use]
    pub const fn is_empty(this: &Self) -> bool {
        this.slot.is_none()
    }

    /// Borrow the held value.
    ///
    /// # Panics
    ///
    /// Contract violation if empty.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn get(this: &Self) -> &T {
        match &this.slot {
            Some(value) => value,
            None => contract::violated(Violation::empty_optional::<Self>()),
        }
    }

    /// Mutably borrow the held value.
    ///
    /// # Panics
    ///
    /// Contract violation if empty.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn get_mut(this: &mut Self) -> &mut T {
        match &mut this.slot {
            Some(value) => value,
            None => contract::violated(Violation::empty_optional::<Self>()),
        }
    }

    /// Move the value out, leaving the container empty.
    ///
    /// # Panics
    ///
    /// Contract violation if empty.
    #[inline]
    #[track_caller]
    pub fn consume(this: &mut Self) -> T {
        match this.slot.take() {
            Some(value) => value,
            None => contract::violated(Violation::empty_optional::<Self>()),
        }
    }

    /// Move the value out of a container that is no longer needed.
    ///
    /// # Panics
    ///
    /// Contract violation if empty.
    #[inline]
    #[track_caller]
    pub fn into_inner(this: Self) -> T {
        match this.slot {
            Some(value) => value,
            None => contract::violated(Violation::empty_optional::<Self>()),
        }
    }

    /// Transfer ownership into a new container; `this` becomes empty.
    #[inline]
    #[must_use]
    pub const fn take(this: &mut Self) -> Self {
        Self {
            slot: this.slot.take(),
        }
    }

    /// Replace the contents of `this` with those of `source`, which becomes empty.
    ///
    /// The previously held value, if any, is dropped.
    #[inline]
    pub fn assign_move(this: &mut Self, source: &mut Self) {
        this.slot = source.slot.take();
    }

    /// Replace the contents of `this` with a deep copy of `other`.
    ///
    /// Aliasing `this` and `other` is rejected by the borrow checker, so there
    /// is no self-assignment case to guard against.
    #[inline]
    pub fn assign_copy(this: &mut Self, other: &Self)
    where
        T: Clone,
    {
        this.slot.clone_from(&other.slot);
    }

    /// Drop the held value, if any.
    #[inline]
    pub fn reset(this: &mut Self) {
        this.slot = None;
    }

    /// Borrow as a native `Option`.
    #[inline]
    #[must_use]
    pub const fn as_option(this: &Self) -> Option<&T> {
        this.slot.as_ref()
    }

    /// Hand the value over to a native `Option`.
    #[inline]
    #[must_use]
    pub fn into_option(this: Self) -> Option<T> {
        this.slot
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Optional<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        Self::assign_copy(self, source);
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.slot
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        Self::get(self)
    }
}

impl<T> DerefMut for Optional<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        Self::get_mut(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}
