//! The capability interface shared by all erased cursors.
//!
//! `ReadCursor` is what every adapter offers. `WriteCursor` adds write
//! access to the element and is only implemented by adapters over a
//! writable source.

use crate::cursor::Position;
use crate::element::{ElementMut, ElementRef};
use crate::error::{IteratorError, Result};
use crate::shared::Duplicate;

/// Where an erased cursor points and what kind of adapter it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Type name of the adapter
    pub kind: &'static str,
    /// Container and index
    pub position: Position,
}

impl Location {
    /// Compares two locations. Locations are only comparable if they come
    /// from the same adapter type walking the same container.
    pub fn same_as(&self, other: &Location) -> Result<bool> {
        if self.kind != other.kind {
            return Err(IteratorError::IncompatibleKinds {
                left: self.kind,
                right: other.kind,
            });
        }
        if self.position.origin != other.position.origin {
            return Err(IteratorError::DifferentContainers);
        }
        Ok(self.position.index == other.position.index)
    }
}

/// Read-only capability set of an erased cursor over elements of type `E`.
pub trait ReadCursor<'a, E: ?Sized> {
    /// The current element, `None` at the end
    fn get(&self) -> Option<ElementRef<'_, E>>;

    /// Moves one element forward. Returns false, without moving, at the end.
    fn advance(&mut self) -> bool;

    /// True at the end. Cheaper than `get`, and never borrows an element.
    fn at_end(&self) -> bool;

    /// Container and index
    fn position(&self) -> Position;

    /// Type name of the adapter, used to refuse comparisons between
    /// unrelated adapters
    fn kind(&self) -> &'static str;

    /// An independent cursor at the same position
    fn duplicate_read(&self) -> Box<dyn ReadCursor<'a, E> + 'a>;

    /// Kind and position
    fn locate(&self) -> Location {
        Location {
            kind: self.kind(),
            position: self.position(),
        }
    }
}

/// Read-write capability set of an erased cursor.
pub trait WriteCursor<'a, E: ?Sized>: ReadCursor<'a, E> {
    /// Write access to the current element, `None` at the end
    fn get_mut(&mut self) -> Option<ElementMut<'_, E>>;

    /// An independent cursor at the same position
    fn duplicate_write(&self) -> Box<dyn WriteCursor<'a, E> + 'a>;
}

impl<'a, E: ?Sized> Duplicate for dyn ReadCursor<'a, E> + 'a {
    fn duplicate(&self) -> Box<Self> {
        self.duplicate_read()
    }
}

impl<'a, E: ?Sized> Duplicate for dyn WriteCursor<'a, E> + 'a {
    fn duplicate(&self) -> Box<Self> {
        self.duplicate_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(kind: &'static str, origin: usize, index: usize) -> Location {
        Location {
            kind: kind,
            position: Position {
                origin: origin,
                index: index,
            },
        }
    }

    #[test]
    fn same_as() {
        assert_eq!(location("a", 1, 0).same_as(&location("a", 1, 0)), Ok(true));
        assert_eq!(location("a", 1, 0).same_as(&location("a", 1, 2)), Ok(false));
    }

    #[test]
    fn refused() {
        assert_eq!(location("a", 1, 0).same_as(&location("b", 1, 0)),
                   Err(IteratorError::IncompatibleKinds {
                       left: "a",
                       right: "b",
                   }));
        assert_eq!(location("a", 1, 0).same_as(&location("a", 2, 0)),
                   Err(IteratorError::DifferentContainers));
    }
}
