//! Compile time access qualifiers.
//!
//! A handle is either `ReadOnly` or `Mutable`. The marker picks the erased
//! cursor trait the handle stores, and `Narrows` lists which conversions
//! between the two are legal: everything may become read-only, nothing
//! read-only may become mutable.
//!
//! `PairLike` recognises the key/value items map iterators yield.

use crate::erased::{ReadCursor, WriteCursor};
use crate::shared::{Duplicate, Shared};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ReadOnly {}
    impl Sealed for super::Mutable {}
}

/// Access mode of a handle. Implemented by `ReadOnly` and `Mutable` only.
pub trait Access: sealed::Sealed {
    /// The erased cursor a handle of this mode owns
    type Cursor<'a, E: ?Sized + 'a>: ?Sized + ReadCursor<'a, E> + Duplicate + 'a;

    /// Name used in diagnostics
    const NAME: &'static str;
}

/// Handles that may read and advance, but never write.
#[derive(Debug)]
pub enum ReadOnly {}

/// Handles that may also write through to the element.
#[derive(Debug)]
pub enum Mutable {}

impl Access for ReadOnly {
    type Cursor<'a, E: ?Sized + 'a> = dyn ReadCursor<'a, E> + 'a;

    const NAME: &'static str = "read-only";
}

impl Access for Mutable {
    type Cursor<'a, E: ?Sized + 'a> = dyn WriteCursor<'a, E> + 'a;

    const NAME: &'static str = "mutable";
}

/// `Self` can be viewed as `To`.
pub trait Narrows<To: Access>: Access {
    /// Turns shared state of this mode into shared state of mode `To`.
    /// Between equal modes this aliases, otherwise it copies.
    fn narrow<'a, E: ?Sized + 'a>(shared: &Shared<'a, Self::Cursor<'a, E>>)
                             -> Shared<'a, To::Cursor<'a, E>>;
}

impl Narrows<ReadOnly> for ReadOnly {
    fn narrow<'a, E: ?Sized + 'a>(shared: &Shared<'a, Self::Cursor<'a, E>>)
                             -> Shared<'a, <ReadOnly as Access>::Cursor<'a, E>> {
        shared.clone()
    }
}

impl Narrows<Mutable> for Mutable {
    fn narrow<'a, E: ?Sized + 'a>(shared: &Shared<'a, Self::Cursor<'a, E>>)
                             -> Shared<'a, <Mutable as Access>::Cursor<'a, E>> {
        shared.clone()
    }
}

impl Narrows<ReadOnly> for Mutable {
    fn narrow<'a, E: ?Sized + 'a>(shared: &Shared<'a, Self::Cursor<'a, E>>)
                             -> Shared<'a, <ReadOnly as Access>::Cursor<'a, E>> {
        debug!("copying a mutable cursor into a read-only one");
        Shared::new(shared.get().duplicate_read())
    }
}

/// An item made of a key and a value, as yielded by map iterators.
pub trait PairLike {
    /// Left side
    type Key;
    /// Right side
    type Value;

    /// The key
    fn key(&self) -> &Self::Key;
    /// The value
    fn value(&self) -> &Self::Value;
}

impl<'a, K, V> PairLike for (&'a K, &'a V) {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        self.0
    }

    fn value(&self) -> &V {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn names() {
        assert_eq!(ReadOnly::NAME, "read-only");
        assert_eq!(Mutable::NAME, "mutable");
    }

    #[test]
    fn pair_like() {
        let mut map = BTreeMap::new();
        map.insert(3, "three");
        let pair = map.iter().next().unwrap();
        assert_eq!(*pair.key(), 3);
        assert_eq!(*PairLike::value(&pair), "three");
    }
}
