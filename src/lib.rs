//! Polyiter hides the iterator type of a std container behind one handle
//! type.
//!
//! Version 0.1.0
//!
//! # Features
//!
//! * One handle type for vectors, slices, deques, linked lists, ordered and
//!   hashed maps.
//! * Elements are reached through an element trait of your choice
//!   (usually `dyn Element`), so containers of different element types can
//!   be walked by the same code.
//! * Handles are reference counted and copy-on-write: cloning is cheap,
//!   and a clone never sees another clone move.
//! * Read-only and mutable handles are different types. Writing through a
//!   read-only handle, or making a mutable handle from a read-only source,
//!   does not compile.
//! * Maps are walked by key (`make_left_iterator`) or by value
//!   (`make_right_iterator`).
//!
//! # Basic Usage
//!
//! Add Polyiter to Cargo.toml
//! ```toml
//! [dependencies]
//! polyiter = "0.1"
//! ```
//!
//! ## Walk a container
//! ```rust
//! use polyiter::{make_iterator, Element};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::{Doubled, Scalar};
//!
//! let data: Vec<Box<dyn Element>> = vec![Box::new(Scalar::new(1.0)),
//!                                        Box::new(Doubled::new(1.0))];
//!
//! //Handles are made from a begin and an end cursor
//! let mut it = make_iterator::<dyn Element, _>(data.begin());
//! let end = make_iterator::<dyn Element, _>(data.end());
//!
//! //Clones share their cursor until one of them moves
//! let first = it.clone();
//! while it != end {
//!     println!("{}", it.get().unwrap()); //Prints 1 and 2
//!     it.advance();
//! }
//! assert_eq!(first.get().unwrap().value(), 1.0);
//! ```
//!
//! ## Write through a handle
//! Only containers that keep each element in a `RefCell` can be written to.
//! `cells` turns their cursor into a writable one.
//! ```rust
//! use std::cell::RefCell;
//! use std::collections::LinkedList;
//! use polyiter::{make_iterator_mut, Element};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::Scalar;
//!
//! let mut list = LinkedList::new();
//! list.push_back(RefCell::new(Scalar::new(1.0)));
//! let mut it = make_iterator_mut::<dyn Element, _>(list.begin().cells());
//! it.get_mut().unwrap().set_value(2.0);
//! assert_eq!(list.front().unwrap().borrow().value(), 2.0);
//! ```
//!
//! A read-only handle has no `get_mut`:
//! ```compile_fail
//! use polyiter::{make_iterator, Element};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::Scalar;
//!
//! let data = vec![Scalar::new(1.0)];
//! let mut it = make_iterator::<dyn Element, _>(data.begin());
//! it.get_mut();
//! ```
//!
//! Nor can it be turned into a mutable one:
//! ```compile_fail
//! use std::cell::RefCell;
//! use polyiter::{make_iterator, Element, IterMut};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::Scalar;
//!
//! let data = vec![RefCell::new(Scalar::new(1.0))];
//! let it = make_iterator::<dyn Element, _>(data.begin().cells());
//! let writer: IterMut<dyn Element> = it.view();
//! ```
//!
//! Handles are bound to the thread that made them:
//! ```compile_fail
//! use polyiter::{make_iterator, Element};
//! use polyiter::cursor::Traversable;
//! use polyiter::fixture::Scalar;
//!
//! fn send<T: Send>(_: T) {}
//!
//! let data = vec![Scalar::new(1.0)];
//! send(make_iterator::<dyn Element, _>(data.begin()));
//! ```
#![deny(missing_docs)]

#[macro_use]
extern crate log;

pub mod access;
pub mod adapter;
pub mod algorithm;
pub mod cursor;
pub mod element;
pub mod erased;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod handle;
pub mod shared;

pub use crate::access::{Access, Mutable, Narrows, ReadOnly};
pub use crate::element::{AsElement, Element, ElementMut, ElementRef};
pub use crate::error::{IteratorError, Result};
pub use crate::factory::{make_iterator, make_iterator_mut, make_left_iterator,
                         make_right_iterator, make_right_iterator_mut};
pub use crate::handle::{Handle, Iter, IterMut};
pub use crate::shared::Storage;
