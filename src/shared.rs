//! Reference counted, copy-on-write ownership.
//!
//! `Shared` gives value semantics to a heap allocated, possibly unsized
//! value: cloning aliases the allocation, reading never copies, and the
//! first write through an aliased `Shared` detaches it by duplicating the
//! value. The allocation is freed when the last alias goes away.
//!
//! A `Shared` may also wrap a value it does not own (`Storage::Borrowed`).
//! Such a value is never freed by the `Shared` and is duplicated onto the
//! heap before the first write.

use std::fmt;
use std::rc::Rc;

/// Values that can produce an independent copy of themselves on the heap.
/// The object safe counterpart of `Clone`.
pub trait Duplicate {
    /// A boxed copy of `self`
    fn duplicate(&self) -> Box<Self>;
}

/// Where the data of a `Shared` lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Reference counted heap allocation
    Heap,
    /// Borrowed, not managed
    Borrowed,
}

enum Slot<'b, T: ?Sized> {
    Owned(Rc<T>),
    Borrowed(&'b T),
}

/// Copy-on-write shared ownership of a `T`.
pub struct Shared<'b, T: ?Sized> {
    slot: Slot<'b, T>,
}

impl<'b, T: ?Sized> Shared<'b, T> {
    /// Takes ownership of `value`. The new `Shared` is its only owner.
    pub fn new(value: Box<T>) -> Self {
        Shared { slot: Slot::Owned(Rc::from(value)) }
    }

    /// Wraps a value that lives somewhere else. It is never freed by this
    /// `Shared` or its clones.
    pub fn borrowed(value: &'b T) -> Self {
        Shared { slot: Slot::Borrowed(value) }
    }

    /// Read access. Never copies.
    pub fn get(&self) -> &T {
        match self.slot {
            Slot::Owned(ref rc) => &**rc,
            Slot::Borrowed(value) => value,
        }
    }

    /// Number of `Shared`s owning the heap allocation, `None` if borrowed
    pub fn owners(&self) -> Option<usize> {
        match self.slot {
            Slot::Owned(ref rc) => Some(Rc::strong_count(rc)),
            Slot::Borrowed(_) => None,
        }
    }

    /// Where the data lives
    pub fn storage(&self) -> Storage {
        match self.slot {
            Slot::Owned(_) => Storage::Heap,
            Slot::Borrowed(_) => Storage::Borrowed,
        }
    }

    /// Address of the data, for alias checks
    pub fn addr(&self) -> *const () {
        self.get() as *const T as *const ()
    }

    /// True if both point at the same data
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<'b, T: ?Sized + Duplicate> Shared<'b, T> {
    /// Write access. Duplicates the data first unless this `Shared` is its
    /// only owner.
    pub fn make_mut(&mut self) -> &mut T {
        let unique = match self.slot {
            Slot::Owned(ref mut rc) => Rc::get_mut(rc).is_some(),
            Slot::Borrowed(_) => false,
        };
        if !unique {
            trace!("copy-on-write: detaching from {:?} ({:?} owners)",
                   self.storage(),
                   self.owners());
            let copy = self.get().duplicate();
            self.slot = Slot::Owned(Rc::from(copy));
        }
        match self.slot {
            Slot::Owned(ref mut rc) => {
                match Rc::get_mut(rc) {
                    Some(value) => value,
                    None => unreachable!("freshly duplicated data has a single owner"),
                }
            }
            Slot::Borrowed(_) => unreachable!("borrowed data is duplicated before writing"),
        }
    }
}

impl<'b, T: ?Sized> Clone for Shared<'b, T> {
    fn clone(&self) -> Self {
        let slot = match self.slot {
            Slot::Owned(ref rc) => Slot::Owned(Rc::clone(rc)),
            Slot::Borrowed(value) => Slot::Borrowed(value),
        };
        Shared { slot: slot }
    }

    fn clone_from(&mut self, source: &Self) {
        if !self.ptr_eq(source) {
            *self = source.clone();
        }
    }
}

impl<'b, T: ?Sized> fmt::Debug for Shared<'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Shared")
            .field("storage", &self.storage())
            .field("owners", &self.owners())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Tracked {
        value: u32,
        drops: Rc<Cell<usize>>,
        copies: Rc<Cell<usize>>,
    }

    impl Tracked {
        fn new(value: u32) -> (Tracked, Rc<Cell<usize>>, Rc<Cell<usize>>) {
            let drops = Rc::new(Cell::new(0));
            let copies = Rc::new(Cell::new(0));
            let tracked = Tracked {
                value: value,
                drops: drops.clone(),
                copies: copies.clone(),
            };
            (tracked, drops, copies)
        }
    }

    impl Duplicate for Tracked {
        fn duplicate(&self) -> Box<Self> {
            self.copies.set(self.copies.get() + 1);
            Box::new(Tracked {
                value: self.value,
                drops: self.drops.clone(),
                copies: self.copies.clone(),
            })
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn freed_once() {
        let (tracked, drops, _) = Tracked::new(1);
        let first = Shared::new(Box::new(tracked));
        let mut copies = (0..4).map(|_| first.clone()).collect::<Vec<_>>();
        assert_eq!(first.owners(), Some(5));
        copies.truncate(1);
        assert_eq!(first.owners(), Some(2));
        assert_eq!(drops.get(), 0);
        drop(first);
        assert_eq!(drops.get(), 0);
        assert_eq!(copies[0].owners(), Some(1));
        copies.clear();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn copy_on_write() {
        let (tracked, drops, copies) = Tracked::new(1);
        let a = Shared::new(Box::new(tracked));
        let mut b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(b.get().value, 1);
        assert_eq!(copies.get(), 0);

        b.make_mut().value = 2;
        assert_eq!(copies.get(), 1);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.get().value, 1);
        assert_eq!(b.get().value, 2);
        assert_eq!(a.owners(), Some(1));
        assert_eq!(b.owners(), Some(1));

        // Unique owners write in place
        b.make_mut().value = 3;
        assert_eq!(copies.get(), 1);
        drop(a);
        drop(b);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn borrowed() {
        let (tracked, drops, copies) = Tracked::new(7);
        {
            let mut shared = Shared::borrowed(&tracked);
            let alias = shared.clone();
            assert_eq!(shared.storage(), Storage::Borrowed);
            assert_eq!(shared.owners(), None);
            assert!(shared.ptr_eq(&alias));

            shared.make_mut().value = 8;
            assert_eq!(copies.get(), 1);
            assert_eq!(shared.storage(), Storage::Heap);
            assert_eq!(alias.get().value, 7);
        }
        // Only the heap copy was freed
        assert_eq!(drops.get(), 1);
        assert_eq!(tracked.value, 7);
    }

    #[test]
    fn clone_from_alias() {
        let (tracked, _, _) = Tracked::new(1);
        let a = Shared::new(Box::new(tracked));
        let mut b = a.clone();
        b.clone_from(&a);
        assert_eq!(a.owners(), Some(2));

        let (other, _, _) = Tracked::new(2);
        let mut c = Shared::new(Box::new(other));
        c.clone_from(&a);
        assert_eq!(a.owners(), Some(3));
        assert_eq!(c.get().value, 1);
    }
}
