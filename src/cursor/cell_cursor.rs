use std::cell::{RefCell, RefMut};
use std::ops::Deref;

use crate::access::PairLike;
use crate::cursor::{Cursor, IterCursor, PairCursor, PairCursorMut, Position, SequenceCursor,
                    SequenceCursorMut};
use crate::element::ElementRef;

/// Cursor over a container whose elements each sit in a `RefCell`, such as
/// `Vec<RefCell<T>>` or `BTreeMap<K, RefCell<V>>`.
///
/// Stepping goes through the container's own iterator and never touches an
/// element. Reading borrows the current element for as long as the returned
/// guard lives, writing borrows it mutably. Only two guards on the same
/// element can conflict, and that panics as `RefCell` does.
pub struct CellCursor<I: Iterator> {
    inner: IterCursor<I>,
}

impl<I: Iterator> CellCursor<I> {
    /// Writable cursor at the position of `inner`
    pub fn new(inner: IterCursor<I>) -> Self {
        CellCursor { inner: inner }
    }

    /// Number of steps taken from the first element
    pub fn index(&self) -> usize {
        self.inner.index()
    }
}

impl<I> Clone for CellCursor<I>
    where I: Iterator + Clone,
          I::Item: Clone
{
    fn clone(&self) -> Self {
        CellCursor { inner: self.inner.clone() }
    }
}

impl<I> Cursor for CellCursor<I>
    where I: Iterator + Clone,
          I::Item: Clone
{
    fn step(&mut self) -> bool {
        self.inner.step()
    }

    fn at_end(&self) -> bool {
        self.inner.at_end()
    }

    fn position(&self) -> Position {
        self.inner.position()
    }
}

impl<I, T> SequenceCursor for CellCursor<I>
    where I: Iterator + Clone,
          I::Item: Deref<Target = RefCell<T>> + Clone
{
    type Value = T;

    fn value(&self) -> Option<ElementRef<'_, T>> {
        self.inner.item().map(|cell| ElementRef::Guarded(RefCell::borrow(&**cell)))
    }
}

impl<I, T> SequenceCursorMut for CellCursor<I>
    where I: Iterator + Clone,
          I::Item: Deref<Target = RefCell<T>> + Clone
{
    fn value_mut(&mut self) -> Option<RefMut<'_, T>> {
        self.inner.item().map(|cell| RefCell::borrow_mut(&**cell))
    }
}

impl<I, V> PairCursor for CellCursor<I>
    where I: Iterator + Clone,
          I::Item: PairLike<Value = RefCell<V>> + Clone
{
    type Key = <I::Item as PairLike>::Key;
    type Value = V;

    fn key(&self) -> Option<ElementRef<'_, Self::Key>> {
        self.inner.item().map(|pair| ElementRef::Borrowed(pair.key()))
    }

    fn value(&self) -> Option<ElementRef<'_, V>> {
        self.inner
            .item()
            .map(|pair| ElementRef::Guarded(RefCell::borrow(PairLike::value(pair))))
    }
}

impl<I, V> PairCursorMut for CellCursor<I>
    where I: Iterator + Clone,
          I::Item: PairLike<Value = RefCell<V>> + Clone
{
    fn value_mut(&mut self) -> Option<RefMut<'_, V>> {
        self.inner.item().map(|pair| RefCell::borrow_mut(PairLike::value(pair)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, LinkedList, VecDeque};

    use super::*;
    use crate::cursor::Traversable;

    #[test]
    fn write_through() {
        let data: VecDeque<RefCell<u32>> = (1..4).map(RefCell::new).collect();
        let mut cursor = data.begin().cells();
        cursor.step();
        *SequenceCursorMut::value_mut(&mut cursor).unwrap() = 20;
        assert_eq!(*SequenceCursor::value(&cursor).unwrap(), 20);
        cursor.step();
        cursor.step();
        assert!(SequenceCursorMut::value_mut(&mut cursor).is_none());
        assert!(!cursor.step());
        assert_eq!(data.iter().map(|c| *c.borrow()).collect::<Vec<_>>(), vec![1, 20, 3]);
    }

    #[test]
    fn guard_blocks_writer() {
        let data = vec![RefCell::new(1), RefCell::new(2)];
        let cursor = data.begin().cells();
        let guard = SequenceCursor::value(&cursor).unwrap();
        assert!(data[0].try_borrow_mut().is_err());
        assert!(data[1].try_borrow_mut().is_ok());
        drop(guard);
        assert!(data[0].try_borrow_mut().is_ok());
    }

    #[test]
    fn steps_past_a_held_element() {
        let list: LinkedList<RefCell<u32>> = (0..3).map(RefCell::new).collect();
        let mut writer = list.begin().cells();
        let mut walker = writer.clone();
        let guard = SequenceCursorMut::value_mut(&mut writer).unwrap();
        assert!(!walker.at_end());
        assert!(walker.step());
        assert_eq!(*SequenceCursor::value(&walker).unwrap(), 1);
        drop(guard);
        assert_eq!(walker.index(), 1);
    }

    #[test]
    fn map_entries_line_up() {
        let map: HashMap<u32, RefCell<u32>> = (0..32).map(|i| (i, RefCell::new(i * 10))).collect();
        let mut cursor = map.begin().cells();
        let end = map.end().cells();
        let mut visited = 0;
        while !cursor.at_end() {
            let key = *cursor.key().unwrap();
            assert_eq!(*PairCursor::value(&cursor).unwrap(), key * 10);
            *PairCursorMut::value_mut(&mut cursor).unwrap() += 1;
            assert_eq!(*map[&key].borrow(), key * 10 + 1);
            cursor.step();
            visited += 1;
        }
        assert_eq!(visited, 32);
        assert_eq!(cursor.position(), end.position());
    }
}
