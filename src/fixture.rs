//! Sample element types.
//!
//! `Scalar` stores the number it was built with, `Doubled` stores twice that
//! number and `Pinned` is a `Scalar` that defaults to 300. Every instance
//! gets an id from a process wide counter so tests can check that an
//! iterator really points into the container and not at a copy.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{self, AtomicUsize};

use crate::element::Element;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// Stores its number as is.
#[derive(Debug)]
pub struct Scalar {
    id: usize,
    value: f32,
}

impl Scalar {
    /// Creates a new instance with a fresh id
    pub fn new(value: f32) -> Self {
        Scalar {
            id: next_id(),
            value: value,
        }
    }
}

impl Element for Scalar {
    fn value(&self) -> f32 {
        self.value
    }

    fn id(&self) -> usize {
        self.id
    }

    fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    fn kind(&self) -> &'static str {
        "scalar"
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Ordered by value first so a `BTreeMap` keyed by `Scalar` iterates in
// numeric order. The id breaks ties.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value).then(self.id.cmp(&other.id))
    }
}

/// Stores twice the number it is given.
#[derive(Debug)]
pub struct Doubled {
    id: usize,
    value: f32,
}

impl Doubled {
    /// Creates a new instance holding `2 * number`
    pub fn new(number: f32) -> Self {
        Doubled {
            id: next_id(),
            value: number * 2.0,
        }
    }
}

impl Element for Doubled {
    fn value(&self) -> f32 {
        self.value
    }

    fn id(&self) -> usize {
        self.id
    }

    fn set_value(&mut self, number: f32) {
        self.value = number * 2.0;
    }

    fn kind(&self) -> &'static str {
        "doubled"
    }
}

impl fmt::Display for Doubled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A `Scalar` with a fixed default of 300.
#[derive(Debug)]
pub struct Pinned {
    base: Scalar,
}

impl Pinned {
    /// Value every `Pinned` starts out with
    pub const DEFAULT: f32 = 300.0;

    /// Creates a new instance holding `Pinned::DEFAULT`
    pub fn new() -> Self {
        Pinned { base: Scalar::new(Self::DEFAULT) }
    }

    /// Creates a new instance (with a fresh id) holding the value of `scalar`
    pub fn from_scalar(scalar: &Scalar) -> Self {
        Pinned { base: Scalar::new(scalar.value()) }
    }

    /// The underlying `Scalar`
    pub fn base(&self) -> &Scalar {
        &self.base
    }
}

impl Default for Pinned {
    fn default() -> Self {
        Pinned::new()
    }
}

impl Element for Pinned {
    fn value(&self) -> f32 {
        self.base.value()
    }

    fn id(&self) -> usize {
        self.base.id()
    }

    fn set_value(&mut self, value: f32) {
        self.base.set_value(value)
    }

    fn kind(&self) -> &'static str {
        "pinned"
    }
}

impl fmt::Display for Pinned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids() {
        let a = Scalar::new(1.0);
        let b = Doubled::new(1.0);
        let c = Pinned::new();
        assert!(a.id() != b.id());
        assert!(b.id() != c.id());
        assert!(a.id() != c.id());
    }

    #[test]
    fn doubled() {
        let mut d = Doubled::new(4.0);
        assert_eq!(d.value(), 8.0);
        d.set_value(0.5);
        assert_eq!(d.value(), 1.0);
    }

    #[test]
    fn pinned() {
        let p = Pinned::default();
        assert_eq!(p.value(), 300.0);
        assert_eq!(p.id(), p.base().id());
        let s = Scalar::new(12.0);
        let q = Pinned::from_scalar(&s);
        assert_eq!(q.value(), 12.0);
        assert!(q.id() != s.id());
        assert_eq!(q.to_string(), "12");
    }

    #[test]
    fn scalar_order() {
        let small = Scalar::new(-1.0);
        let large = Scalar::new(10.0);
        let other = Scalar::new(10.0);
        assert!(small < large);
        assert!(large != other);
        assert_eq!(large.cmp(&large), Ordering::Equal);
    }
}
