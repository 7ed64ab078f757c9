use std::ops::Deref;

use crate::access::PairLike;
use crate::cursor::{origin_of, CellCursor, Cursor, PairCursor, Position, SequenceCursor};
use crate::element::ElementRef;

/// Read-only cursor built on a std iterator of a borrowed container.
///
/// Keeps the item it points at, much like `std::iter::Peekable` keeps the
/// peeked one, and counts steps so that two cursors can be compared.
pub struct IterCursor<I: Iterator> {
    origin: usize,
    index: usize,
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Cursor at the first element of `container`
    pub fn begin<'a, C>(container: &'a C) -> Self
        where C: ?Sized,
              &'a C: IntoIterator<IntoIter = I>
    {
        let mut iter = container.into_iter();
        let current = iter.next();
        IterCursor {
            origin: origin_of(container),
            index: 0,
            iter: iter,
            current: current,
        }
    }

    /// Cursor one past the last element of `container`
    pub fn end<'a, C>(container: &'a C) -> Self
        where C: ?Sized,
              &'a C: IntoIterator<IntoIter = I>,
              I: ExactSizeIterator
    {
        let iter = container.into_iter();
        IterCursor {
            origin: origin_of(container),
            index: iter.len(),
            iter: iter,
            current: None,
        }
    }

    /// Number of steps taken from the first element
    pub fn index(&self) -> usize {
        self.index
    }

    /// The item the cursor points at
    pub fn item(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Writable cursor over the same positions, for containers whose
    /// elements are `RefCell`s.
    pub fn cells(self) -> CellCursor<I> {
        CellCursor::new(self)
    }
}

impl<I> Clone for IterCursor<I>
    where I: Iterator + Clone,
          I::Item: Clone
{
    fn clone(&self) -> Self {
        IterCursor {
            origin: self.origin,
            index: self.index,
            iter: self.iter.clone(),
            current: self.current.clone(),
        }
    }
}

impl<I> Cursor for IterCursor<I>
    where I: Iterator + Clone,
          I::Item: Clone
{
    fn step(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.current = self.iter.next();
        self.index += 1;
        true
    }

    fn at_end(&self) -> bool {
        self.current.is_none()
    }

    fn position(&self) -> Position {
        Position {
            origin: self.origin,
            index: self.index,
        }
    }
}

impl<I> SequenceCursor for IterCursor<I>
    where I: Iterator + Clone,
          I::Item: Deref + Clone,
          <I::Item as Deref>::Target: Sized
{
    type Value = <I::Item as Deref>::Target;

    fn value(&self) -> Option<ElementRef<'_, Self::Value>> {
        self.current.as_ref().map(|item| ElementRef::Borrowed(&**item))
    }
}

impl<I> PairCursor for IterCursor<I>
    where I: Iterator + Clone,
          I::Item: PairLike + Clone
{
    type Key = <I::Item as PairLike>::Key;
    type Value = <I::Item as PairLike>::Value;

    fn key(&self) -> Option<ElementRef<'_, Self::Key>> {
        self.current.as_ref().map(|pair| ElementRef::Borrowed(pair.key()))
    }

    fn value(&self) -> Option<ElementRef<'_, Self::Value>> {
        self.current.as_ref().map(|pair| ElementRef::Borrowed(pair.value()))
    }
}
