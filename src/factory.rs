//! Erasing concrete cursors into handles.
//!
//! Each factory takes a cursor, usually straight from `Traversable::begin`
//! or `Traversable::end`, boxes the matching adapter and hands back a handle
//! that owns it. The element type `E` is always named by the caller:
//!
//! ```
//! use polyiter::{make_iterator, Element};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::Scalar;
//!
//! let data = vec![Scalar::new(1.0), Scalar::new(2.0)];
//! let mut it = make_iterator::<dyn Element, _>(data.begin());
//! let end = make_iterator::<dyn Element, _>(data.end());
//! let mut sum = 0.0;
//! while it != end {
//!     sum += it.get().unwrap().value();
//!     it.advance();
//! }
//! assert_eq!(sum, 3.0);
//! ```
//!
//! The `_mut` factories need a cursor that can write, which only
//! `CellCursor` over `RefCell` elements provides. A plain borrow is refused
//! at compile time:
//!
//! ```compile_fail
//! use polyiter::{make_iterator_mut, Element};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::Scalar;
//!
//! let data = vec![Scalar::new(1.0)];
//! let it = make_iterator_mut::<dyn Element, _>(data.begin());
//! ```
//!
//! Keys of a map are never writable, so there is no mutable left factory.

use std::any;

use crate::adapter::{Adapter, Left, Right};
use crate::cursor::{PairCursor, PairCursorMut, SequenceCursor, SequenceCursorMut};
use crate::element::AsElement;
use crate::erased::{ReadCursor, WriteCursor};
use crate::handle::{Handle, Iter, IterMut};

/// Read-only handle over the elements of a sequence.
pub fn make_iterator<'a, E, C>(cursor: C) -> Iter<'a, E>
    where E: ?Sized + 'a,
          C: SequenceCursor + 'a,
          C::Value: AsElement<E>
{
    trace!("erasing {}", any::type_name::<C>());
    let erased: Box<dyn ReadCursor<'a, E> + 'a> = Box::new(Adapter::new(cursor));
    Handle::new(erased)
}

/// Handle over the elements of a sequence that can write to them.
pub fn make_iterator_mut<'a, E, C>(cursor: C) -> IterMut<'a, E>
    where E: ?Sized + 'a,
          C: SequenceCursorMut + 'a,
          C::Value: AsElement<E>
{
    trace!("erasing {} for writing", any::type_name::<C>());
    let erased: Box<dyn WriteCursor<'a, E> + 'a> = Box::new(Adapter::new(cursor));
    Handle::new(erased)
}

/// Read-only handle over the keys of a map.
pub fn make_left_iterator<'a, E, C>(cursor: C) -> Iter<'a, E>
    where E: ?Sized + 'a,
          C: PairCursor + 'a,
          C::Key: AsElement<E>
{
    trace!("erasing the keys of {}", any::type_name::<C>());
    let erased: Box<dyn ReadCursor<'a, E> + 'a> = Box::new(Left::new(cursor));
    Handle::new(erased)
}

/// Read-only handle over the values of a map.
pub fn make_right_iterator<'a, E, C>(cursor: C) -> Iter<'a, E>
    where E: ?Sized + 'a,
          C: PairCursor + 'a,
          C::Value: AsElement<E>
{
    trace!("erasing the values of {}", any::type_name::<C>());
    let erased: Box<dyn ReadCursor<'a, E> + 'a> = Box::new(Right::new(cursor));
    Handle::new(erased)
}

/// Handle over the values of a map that can write to them.
///
/// ```
/// use std::cell::RefCell;
/// use std::collections::HashMap;
/// use polyiter::{make_right_iterator_mut, Element};
/// use polyiter::cursor::Traversable;
/// use polyiter::fixture::Doubled;
///
/// let mut map = HashMap::new();
/// map.insert(1, RefCell::new(Doubled::new(1.0)));
/// let mut it = make_right_iterator_mut::<dyn Element, _>(map.begin().cells());
/// it.get_mut().unwrap().set_value(4.0);
/// assert_eq!(map[&1].borrow().value(), 8.0);
/// ```
pub fn make_right_iterator_mut<'a, E, C>(cursor: C) -> IterMut<'a, E>
    where E: ?Sized + 'a,
          C: PairCursorMut + 'a,
          C::Value: AsElement<E>
{
    trace!("erasing the values of {} for writing", any::type_name::<C>());
    let erased: Box<dyn WriteCursor<'a, E> + 'a> = Box::new(Right::new(cursor));
    Handle::new(erased)
}
