//! Adapters erase a concrete cursor behind `ReadCursor`/`WriteCursor`.
//!
//! `Adapter` serves sequences. For maps, `Left` exposes the key and `Right`
//! the value of the current entry. Which one applies is decided by the
//! factory the caller picks, never by looking at the item at runtime.

use std::any;
use std::cell::RefMut;
use std::marker::PhantomData;

use crate::cursor::{Position, SequenceCursor, SequenceCursorMut};
use crate::element::{AsElement, ElementMut, ElementRef};
use crate::erased::{ReadCursor, WriteCursor};

mod projection;

pub use self::projection::{Left, Right};

/// Erases a sequence cursor.
pub struct Adapter<C> {
    cursor: C,
    // Handles are single threaded
    _local: PhantomData<*const ()>,
}

impl<C> Adapter<C> {
    /// Wraps `cursor`
    pub fn new(cursor: C) -> Self {
        Adapter {
            cursor: cursor,
            _local: PhantomData,
        }
    }

    /// The wrapped cursor
    pub fn cursor(&self) -> &C {
        &self.cursor
    }
}

impl<C: Clone> Clone for Adapter<C> {
    fn clone(&self) -> Self {
        Adapter::new(self.cursor.clone())
    }
}

impl<'a, E, C> ReadCursor<'a, E> for Adapter<C>
    where E: ?Sized,
          C: SequenceCursor + 'a,
          C::Value: AsElement<E>
{
    fn get(&self) -> Option<ElementRef<'_, E>> {
        self.cursor
            .value()
            .map(|value| value.map(|value| AsElement::<E>::as_element(value)))
    }

    fn advance(&mut self) -> bool {
        self.cursor.step()
    }

    fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    fn position(&self) -> Position {
        self.cursor.position()
    }

    fn kind(&self) -> &'static str {
        any::type_name::<Self>()
    }

    fn duplicate_read(&self) -> Box<dyn ReadCursor<'a, E> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a, E, C> WriteCursor<'a, E> for Adapter<C>
    where E: ?Sized,
          C: SequenceCursorMut + 'a,
          C::Value: AsElement<E>
{
    fn get_mut(&mut self) -> Option<ElementMut<'_, E>> {
        self.cursor
            .value_mut()
            .map(|value| RefMut::map(value, |value| AsElement::<E>::as_element_mut(value)))
    }

    fn duplicate_write(&self) -> Box<dyn WriteCursor<'a, E> + 'a> {
        Box::new(self.clone())
    }
}
