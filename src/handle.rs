//! Value semantics for erased cursors.
//!
//! A `Handle` owns its erased cursor through a `Shared`: cloning a handle
//! aliases the cursor, reading through it never copies, and the first
//! operation that changes the cursor (advancing, writing to the element)
//! detaches a shared cursor by duplicating it. Handles of the same cursor
//! can therefore be passed around freely without one observing another's
//! movement.
//!
//! `Iter` is the read-only flavour, `IterMut` the one that can write to the
//! element.

use std::fmt;

use crate::access::{Access, Mutable, Narrows, ReadOnly};
use crate::element::{ElementMut, ElementRef};
use crate::erased::{Location, ReadCursor};
use crate::error::{IteratorError, Result};
use crate::shared::{Shared, Storage};

/// Reference counted, copy-on-write handle over an erased cursor yielding
/// elements of type `E`.
pub struct Handle<'a, E: ?Sized + 'a, M: Access> {
    shared: Shared<'a, M::Cursor<'a, E>>,
}

/// Read-only handle
pub type Iter<'a, E> = Handle<'a, E, ReadOnly>;

/// Handle that can write to the element
pub type IterMut<'a, E> = Handle<'a, E, Mutable>;

impl<'a, E: ?Sized + 'a, M: Access> Handle<'a, E, M> {
    /// Takes ownership of `cursor`.
    pub fn new(cursor: Box<M::Cursor<'a, E>>) -> Self {
        Handle { shared: Shared::new(cursor) }
    }

    /// Wraps a cursor that lives on the stack. The handle and its clones
    /// never free it, and the first change to the cursor moves a copy of it
    /// to the heap.
    pub fn borrowed(cursor: &'a M::Cursor<'a, E>) -> Self {
        Handle { shared: Shared::borrowed(cursor) }
    }

    /// The current element, `None` at the end
    pub fn get(&self) -> Option<ElementRef<'_, E>> {
        self.shared.get().get()
    }

    /// True if the handle sits on the end position. Does not borrow the
    /// element, so it works while another handle writes to it.
    pub fn is_exhausted(&self) -> bool {
        self.shared.get().at_end()
    }

    /// Moves to the next element. Fails without copying anything if the
    /// handle is already at the end.
    pub fn try_advance(&mut self) -> Result<&mut Self> {
        if self.is_exhausted() {
            debug!("refusing to advance a {} iterator past the end", M::NAME);
            return Err(IteratorError::PastEnd);
        }
        self.shared.make_mut().advance();
        Ok(self)
    }

    /// Moves to the next element.
    ///
    /// # Panics
    /// If the handle is already at the end. See `try_advance`.
    pub fn advance(&mut self) -> &mut Self {
        if let Err(error) = self.try_advance() {
            panic!("{}", error);
        }
        self
    }

    /// Moves to the next element and returns a handle at the previous
    /// position.
    ///
    /// # Panics
    /// If the handle is already at the end.
    pub fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }

    /// Adapter type and position
    pub fn location(&self) -> Location {
        self.shared.get().locate()
    }

    /// Compares positions.
    ///
    /// Fails if the handles wrap different adapter types or walk different
    /// containers. Containers are told apart by the address of their
    /// storage, which has two consequences:
    ///
    /// * Two distinct empty `Vec`s (or slices) have no storage and share the
    ///   same dangling address, so their handles compare equal instead of
    ///   failing with `DifferentContainers`.
    /// * A subslice starts at another address than the vector it is cut
    ///   from, so `data[1..]` and `data` are different containers even where
    ///   they reach the same element. Only a full slice matches its vector.
    pub fn try_eq<N: Access>(&self, other: &Handle<'a, E, N>) -> Result<bool> {
        if self.shares_with(other) {
            return Ok(true);
        }
        self.location().same_as(&other.location()).map_err(|error| {
            debug!("comparison refused: {}", error);
            error
        })
    }

    /// Number of handles sharing the cursor, `None` if it is borrowed
    pub fn owners(&self) -> Option<usize> {
        self.shared.owners()
    }

    /// Where the cursor lives
    pub fn storage(&self) -> Storage {
        self.shared.storage()
    }

    /// True if both handles share one cursor
    pub fn shares_with<N: Access>(&self, other: &Handle<'a, E, N>) -> bool {
        self.shared.addr() == other.shared.addr()
    }

    /// A handle of access mode `N` at the same position. Aliases the cursor
    /// if the mode stays the same, copies it otherwise.
    pub fn view<N: Access>(&self) -> Handle<'a, E, N>
        where M: Narrows<N>
    {
        Handle { shared: <M as Narrows<N>>::narrow(&self.shared) }
    }

    /// Makes this handle a copy of `other`. Nothing happens if the two
    /// already share a cursor.
    pub fn assign<N: Access>(&mut self, other: &Handle<'a, E, N>)
        where N: Narrows<M>
    {
        if self.shares_with(other) {
            return;
        }
        self.shared = <N as Narrows<M>>::narrow(&other.shared);
    }
}

impl<'a, E: ?Sized + 'a> Handle<'a, E, Mutable> {
    /// Write access to the current element, `None` at the end. Detaches a
    /// shared cursor first.
    pub fn get_mut(&mut self) -> Option<ElementMut<'_, E>> {
        if self.is_exhausted() {
            return None;
        }
        self.shared.make_mut().get_mut()
    }
}

impl<'a, E: ?Sized + 'a, M: Access> Clone for Handle<'a, E, M> {
    fn clone(&self) -> Self {
        Handle { shared: self.shared.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.shared.clone_from(&source.shared)
    }
}

/// # Panics
/// If the handles cannot be compared. See `Handle::try_eq`.
impl<'a, E, M, N> PartialEq<Handle<'a, E, N>> for Handle<'a, E, M>
    where E: ?Sized + 'a,
          M: Narrows<N>,
          N: Access
{
    fn eq(&self, other: &Handle<'a, E, N>) -> bool {
        match self.try_eq(other) {
            Ok(equal) => equal,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, E: ?Sized + 'a> From<IterMut<'a, E>> for Iter<'a, E> {
    fn from(handle: IterMut<'a, E>) -> Self {
        handle.view()
    }
}

impl<'a, E: ?Sized + 'a, M: Access> fmt::Debug for Handle<'a, E, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Handle")
            .field("access", &M::NAME)
            .field("location", &self.location())
            .field("shared", &self.shared)
            .finish()
    }
}
