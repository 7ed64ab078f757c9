//! Concrete cursors.
//!
//! A cursor is a position inside a borrowed container that can be copied,
//! compared and stepped forward, the way a C++ container iterator can.
//! Std iterators only do the stepping, so two cursor types wrap them:
//!
//! * `IterCursor` holds one cloneable std iterator plus the item it
//!   currently points at. Read-only.
//! * `CellCursor` wraps an `IterCursor` over a container of `RefCell`
//!   elements and borrows one element at a time. It is the only cursor that
//!   can write.
//!
//! `Traversable` hands out begin and end cursors for the std containers.

use std::cell::RefMut;
use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};
use std::collections::{btree_map, hash_map, linked_list, vec_deque};
use std::slice;

use crate::element::ElementRef;

mod cell_cursor;
mod iter_cursor;

pub use self::cell_cursor::CellCursor;
pub use self::iter_cursor::IterCursor;

/// The container a cursor walks and the index it is at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Address of the container
    pub origin: usize,
    /// Number of steps taken from the first element
    pub index: usize,
}

/// Address of `container`, used as `Position::origin`
pub fn origin_of<C: ?Sized>(container: &C) -> usize {
    container as *const C as *const () as usize
}

/// A copyable position inside a container.
pub trait Cursor: Clone {
    /// Moves to the next element. Returns false, without moving, at the end.
    fn step(&mut self) -> bool;

    /// True at the end. Never touches the elements.
    fn at_end(&self) -> bool;

    /// Where the cursor is
    fn position(&self) -> Position;
}

/// Cursor over a container of plain values.
pub trait SequenceCursor: Cursor {
    /// The container's value type
    type Value;

    /// The value at the cursor, `None` at the end
    fn value(&self) -> Option<ElementRef<'_, Self::Value>>;
}

/// Sequence cursor that can write to the value.
pub trait SequenceCursorMut: SequenceCursor {
    /// Write access to the value at the cursor, `None` at the end
    fn value_mut(&mut self) -> Option<RefMut<'_, Self::Value>>;
}

/// Cursor over a container of key/value pairs.
pub trait PairCursor: Cursor {
    /// Key type
    type Key;
    /// Value type
    type Value;

    /// Key at the cursor, `None` at the end
    fn key(&self) -> Option<ElementRef<'_, Self::Key>>;

    /// Value at the cursor, `None` at the end
    fn value(&self) -> Option<ElementRef<'_, Self::Value>>;
}

/// Pair cursor that can write to the value side. Keys stay read-only.
pub trait PairCursorMut: PairCursor {
    /// Write access to the value at the cursor, `None` at the end
    fn value_mut(&mut self) -> Option<RefMut<'_, Self::Value>>;
}

/// Containers that hand out begin and end cursors.
pub trait Traversable {
    /// The cursor type
    type Cursor<'a>: Cursor where Self: 'a;

    /// Cursor at the first element
    fn begin(&self) -> Self::Cursor<'_>;

    /// Cursor one past the last element
    fn end(&self) -> Self::Cursor<'_>;
}

macro_rules! traversable {
    ($lt:lifetime, [$($param:tt)*], $container:ty, $iter:ty) => {
        impl<$($param)*> Traversable for $container {
            type Cursor<$lt> = IterCursor<$iter> where Self: $lt;

            fn begin(&self) -> Self::Cursor<'_> {
                IterCursor::begin(self)
            }

            fn end(&self) -> Self::Cursor<'_> {
                IterCursor::end(self)
            }
        }
    }
}

traversable!('a, [T], [T], slice::Iter<'a, T>);
traversable!('a, [T], VecDeque<T>, vec_deque::Iter<'a, T>);
traversable!('a, [T], LinkedList<T>, linked_list::Iter<'a, T>);
traversable!('a, [K, V], BTreeMap<K, V>, btree_map::Iter<'a, K, V>);
traversable!('a, [K, V, S], HashMap<K, V, S>, hash_map::Iter<'a, K, V>);

// Vectors share the slice cursor so that a vector and its full slice are the
// same container.
impl<T> Traversable for Vec<T> {
    type Cursor<'a> = IterCursor<slice::Iter<'a, T>> where Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        self.as_slice().begin()
    }

    fn end(&self) -> Self::Cursor<'_> {
        self.as_slice().end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_begin_is_end() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(empty.begin().position(), empty.end().position());
        let list = LinkedList::<u32>::new();
        assert_eq!(list.begin().position(), list.end().position());
        assert!(list.begin().at_end());
    }

    #[test]
    fn walk_to_end() {
        let data = vec![1, 2, 3];
        let mut cursor = data.begin();
        let end = data.end();
        let mut steps = 0;
        while cursor.position() != end.position() {
            assert!(cursor.step());
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert!(!cursor.step());
        assert_eq!(cursor.position(), end.position());
    }

    #[test]
    fn origins_differ() {
        let a = vec![1];
        let b = vec![1];
        assert!(a.begin().position() != b.begin().position());
        assert_eq!(a.begin().position().origin, a.end().position().origin);
    }

    #[test]
    fn slice_and_vec_agree() {
        let data = vec![1, 2];
        let slice: &[i32] = &data;
        assert_eq!(slice.end().position(), data.end().position());
        assert_eq!(data[..].begin().position(), data.begin().position());
    }
}
