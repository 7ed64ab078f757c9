use std::any;
use std::cell::RefMut;
use std::marker::PhantomData;

use crate::cursor::{PairCursor, PairCursorMut, Position};
use crate::element::{AsElement, ElementMut, ElementRef};
use crate::erased::{ReadCursor, WriteCursor};

/// Erases a pair cursor, exposing the key of each entry. Never writable.
pub struct Left<C> {
    cursor: C,
    _local: PhantomData<*const ()>,
}

/// Erases a pair cursor, exposing the value of each entry.
pub struct Right<C> {
    cursor: C,
    _local: PhantomData<*const ()>,
}

macro_rules! projection {
    ($name:ident) => {
        impl<C> $name<C> {
            /// Wraps `cursor`
            pub fn new(cursor: C) -> Self {
                $name {
                    cursor: cursor,
                    _local: PhantomData,
                }
            }

            /// The wrapped cursor
            pub fn cursor(&self) -> &C {
                &self.cursor
            }
        }

        impl<C: Clone> Clone for $name<C> {
            fn clone(&self) -> Self {
                $name::new(self.cursor.clone())
            }
        }
    }
}

projection!(Left);
projection!(Right);

impl<'a, E, C> ReadCursor<'a, E> for Left<C>
    where E: ?Sized,
          C: PairCursor + 'a,
          C::Key: AsElement<E>
{
    fn get(&self) -> Option<ElementRef<'_, E>> {
        self.cursor
            .key()
            .map(|key| key.map(|key| AsElement::<E>::as_element(key)))
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

impl<'a, E, C> ReadCursor<'a, E> for Right<C>
    where E: ?Sized,
          C: PairCursor + 'a,
          C::Value: AsElement<E>
{
    fn get(&self) -> Option<ElementRef<'_, E>> {
        PairCursor::value(&self.cursor)
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

impl<'a, E, C> WriteCursor<'a, E> for Right<C>
    where E: ?Sized,
          C: PairCursorMut + 'a,
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

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::*;
    use crate::cursor::Traversable;
    use crate::element::Element;
    use crate::fixture::{Doubled, Scalar};

    fn sample() -> BTreeMap<Scalar, Doubled> {
        (0..3).map(|i| (Scalar::new(i as f32), Doubled::new(i as f32))).collect()
    }

    #[test]
    fn sides() {
        let map = sample();
        let mut left: Box<dyn ReadCursor<dyn Element>> = Box::new(Left::new(map.begin()));
        let mut right: Box<dyn ReadCursor<dyn Element>> = Box::new(Right::new(map.begin()));
        let mut keys = Vec::new();
        let mut values = Vec::new();
        loop {
            let key = match left.get() {
                Some(key) => key.value(),
                None => break,
            };
            keys.push(key);
            values.push(right.get().unwrap().value());
            left.advance();
            right.advance();
        }
        assert_eq!(keys, vec![0.0, 1.0, 2.0]);
        assert_eq!(values, vec![0.0, 2.0, 4.0]);
        assert!(left.kind() != right.kind());
        assert_eq!(left.position(), right.position());
        assert!(left.at_end() && right.at_end());
    }

    #[test]
    fn right_writes() {
        let map: BTreeMap<Scalar, RefCell<Doubled>> =
            sample().into_iter().map(|(k, v)| (k, RefCell::new(v))).collect();
        let mut right = Right::new(map.begin().cells());
        {
            let cursor: &mut dyn WriteCursor<dyn Element> = &mut right;
            cursor.advance();
            cursor.get_mut().unwrap().set_value(7.0);
        }
        let values = map.values().map(|v| v.borrow().value()).collect::<Vec<_>>();
        assert_eq!(values, vec![0.0, 14.0, 4.0]);
        assert_eq!(right.cursor().index(), 1);
    }
}
