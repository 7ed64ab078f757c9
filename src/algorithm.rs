//! Range helpers over `[begin, end)` pairs of handles.
//!
//! These take the begin handle by value and step it until it compares equal
//! to `end`, like the std algorithms do with a pair of C++ iterators. Mixing
//! handles of different containers makes the comparison panic.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::access::{Access, Mutable, Narrows};
use crate::handle::{Handle, IterMut};

/// Calls `f` on every element.
pub fn for_each<'a, E, M, N, F>(mut begin: Handle<'a, E, M>, end: &Handle<'a, E, N>, mut f: F)
    where E: ?Sized + 'a,
          M: Narrows<N>,
          N: Access,
          F: FnMut(&E)
{
    while begin != *end {
        if let Some(element) = begin.get() {
            f(&*element);
        }
        begin.advance();
    }
}

/// Calls `f` on every element, with write access.
pub fn for_each_mut<'a, E, N, F>(mut begin: IterMut<'a, E>, end: &Handle<'a, E, N>, mut f: F)
    where E: ?Sized + 'a,
          Mutable: Narrows<N>,
          N: Access,
          F: FnMut(&mut E)
{
    while begin != *end {
        if let Some(mut element) = begin.get_mut() {
            f(&mut *element);
        }
        begin.advance();
    }
}

/// Number of elements in the range
pub fn count<'a, E, M, N>(begin: Handle<'a, E, M>, end: &Handle<'a, E, N>) -> usize
    where E: ?Sized + 'a,
          M: Narrows<N>,
          N: Access
{
    let mut n = 0;
    for_each(begin, end, |_| n += 1);
    n
}

/// Handle at the first element matching `predicate`, or at `end`'s position
/// if there is none.
pub fn find<'a, E, M, N, P>(mut begin: Handle<'a, E, M>,
                            end: &Handle<'a, E, N>,
                            mut predicate: P)
                            -> Handle<'a, E, M>
    where E: ?Sized + 'a,
          M: Narrows<N>,
          N: Access,
          P: FnMut(&E) -> bool
{
    while begin != *end {
        let found = match begin.get() {
            Some(element) => predicate(&*element),
            None => false,
        };
        if found {
            break;
        }
        begin.advance();
    }
    begin
}

/// Handle at the smallest element according to `compare`. The first of
/// several smallest elements wins. Returns `begin` for an empty range.
pub fn min_by<'a, E, M, N, F>(begin: Handle<'a, E, M>, end: &Handle<'a, E, N>, mut compare: F)
                              -> Handle<'a, E, M>
    where E: ?Sized + 'a,
          M: Narrows<N>,
          N: Access,
          F: FnMut(&E, &E) -> Ordering
{
    let mut best = begin.clone();
    let mut current = begin;
    if current == *end {
        return best;
    }
    current.advance();
    while current != *end {
        let better = match (current.get(), best.get()) {
            (Some(candidate), Some(held)) => compare(&*candidate, &*held) == Ordering::Less,
            _ => false,
        };
        if better {
            best.clone_from(&current);
        }
        current.advance();
    }
    best
}

/// The elements of the range, separated by single spaces.
pub fn render<'a, E, M, N>(begin: Handle<'a, E, M>, end: &Handle<'a, E, N>) -> String
    where E: ?Sized + Display + 'a,
          M: Narrows<N>,
          N: Access
{
    let mut parts = Vec::new();
    for_each(begin, end, |element| parts.push(element.to_string()));
    parts.join(" ")
}
