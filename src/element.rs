//! The element side of the erasure.
//!
//! Iterator handles never hand out the container's concrete value type.
//! They hand out some `E: ?Sized`, usually `dyn Element`, reached through
//! `AsElement`. Because a handle may read from a plain borrow or from a
//! `RefCell`, reads come back as an `ElementRef` which is either a plain
//! reference or a `Ref` guard.

use std::cell::{Ref, RefMut};
use std::fmt;
use std::ops::Deref;

/// Capabilities every element reachable through an erased iterator offers.
pub trait Element: fmt::Display {
    /// The numeric payload
    fn value(&self) -> f32;

    /// Identifies the instance. Unique for the lifetime of the process.
    fn id(&self) -> usize;

    /// Overwrites the numeric payload
    fn set_value(&mut self, value: f32);

    /// Short name of the concrete element type
    fn kind(&self) -> &'static str;
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn value(&self) -> f32 {
        (**self).value()
    }

    fn id(&self) -> usize {
        (**self).id()
    }

    fn set_value(&mut self, value: f32) {
        (**self).set_value(value)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

/// Views a container value as the erased element type `E`.
pub trait AsElement<E: ?Sized> {
    /// Shared view
    fn as_element(&self) -> &E;
    /// Exclusive view
    fn as_element_mut(&mut self) -> &mut E;
}

impl<'e, T: Element + 'e> AsElement<dyn Element + 'e> for T {
    fn as_element(&self) -> &(dyn Element + 'e) {
        self
    }

    fn as_element_mut(&mut self) -> &mut (dyn Element + 'e) {
        self
    }
}

/// Write access to an element. Only `RefCell` backed sources hand these out.
pub type ElementMut<'b, E> = RefMut<'b, E>;

/// Read access to an element.
pub enum ElementRef<'b, E: ?Sized> {
    /// Borrowed straight out of the container
    Borrowed(&'b E),
    /// Borrowed out of a `RefCell` element
    Guarded(Ref<'b, E>),
}

impl<'b, E: ?Sized> ElementRef<'b, E> {
    /// Narrows the reference to a part of the element, keeping any guard alive.
    pub fn map<U: ?Sized, F>(self, f: F) -> ElementRef<'b, U>
        where F: FnOnce(&E) -> &U
    {
        match self {
            ElementRef::Borrowed(element) => ElementRef::Borrowed(f(element)),
            ElementRef::Guarded(guard) => ElementRef::Guarded(Ref::map(guard, f)),
        }
    }

    /// True if the element is read through a `RefCell` guard
    pub fn is_guarded(&self) -> bool {
        match *self {
            ElementRef::Borrowed(_) => false,
            ElementRef::Guarded(_) => true,
        }
    }
}

impl<'b, E: ?Sized> Deref for ElementRef<'b, E> {
    type Target = E;

    fn deref(&self) -> &E {
        match *self {
            ElementRef::Borrowed(element) => element,
            ElementRef::Guarded(ref guard) => &**guard,
        }
    }
}

impl<'b, E: ?Sized + fmt::Debug> fmt::Debug for ElementRef<'b, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<'b, E: ?Sized + fmt::Display> fmt::Display for ElementRef<'b, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::fixture::{Doubled, Scalar};

    #[test]
    fn boxed_forwarding() {
        let mut boxed: Box<dyn Element> = Box::new(Doubled::new(2.0));
        assert_eq!(boxed.value(), 4.0);
        assert_eq!(boxed.kind(), "doubled");
        boxed.set_value(1.0);
        assert_eq!(boxed.value(), 2.0);
    }

    #[test]
    fn project() {
        let mut scalar = Scalar::new(3.0);
        let id = scalar.id();
        {
            let element: &dyn Element = scalar.as_element();
            assert_eq!(element.id(), id);
        }
        AsElement::<dyn Element>::as_element_mut(&mut scalar).set_value(7.0);
        assert_eq!(scalar.value(), 7.0);
    }

    #[test]
    fn map_borrowed() {
        let scalar = Scalar::new(1.5);
        let element = ElementRef::Borrowed(&scalar).map(|s| s.as_element());
        assert!(!element.is_guarded());
        assert_eq!(element.value(), 1.5);
        assert_eq!(element.to_string(), "1.5");
    }

    #[test]
    fn map_guarded() {
        let cell = RefCell::new(vec![Scalar::new(0.5), Scalar::new(2.5)]);
        {
            let element = ElementRef::Guarded(cell.borrow())
                .map(|items| &items[1])
                .map(|s| s.as_element());
            assert!(element.is_guarded());
            assert_eq!(element.value(), 2.5);
            assert!(cell.try_borrow_mut().is_err());
        }
        assert!(cell.try_borrow_mut().is_ok());
    }
}
