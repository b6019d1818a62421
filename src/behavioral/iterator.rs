//! Iterator: walk the elements of a collection in order without exposing how
//! the collection stores them.
//!
//! Exhaustion is reported as `None`, never as an in-band value, so every
//! `i32` (including `-1`) is an ordinary element.

use crate::core::Transcript;

/// Collection that hands out iterators over its elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConcreteAggregate {
    collection: Vec<i32>,
}

impl ConcreteAggregate {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            collection: values.into(),
        }
    }

    pub fn create_iterator(&self) -> ConcreteIterator<'_> {
        ConcreteIterator {
            collection: &self.collection,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

impl FromIterator<i32> for ConcreteAggregate {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            collection: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConcreteAggregate {
    type Item = i32;
    type IntoIter = ConcreteIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_iterator()
    }
}

/// Cursor over a [`ConcreteAggregate`].
#[derive(Clone, Debug)]
pub struct ConcreteIterator<'a> {
    collection: &'a [i32],
    index: usize,
}

impl ConcreteIterator<'_> {
    pub fn has_next(&self) -> bool {
        self.index < self.collection.len()
    }
}

impl Iterator for ConcreteIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.collection.get(self.index).copied()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.collection.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ConcreteIterator<'_> {}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let aggregate = ConcreteAggregate::new([1, 2, 3, 4, 5]);
    let mut iterator = aggregate.create_iterator();

    let mut rendered = Vec::new();
    while iterator.has_next() {
        if let Some(value) = iterator.next() {
            rendered.push(value.to_string());
        }
    }
    out.line(rendered.join(" "));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_elements_in_order() {
        let aggregate = ConcreteAggregate::new([3, 1, 2]);
        assert_eq!(aggregate.create_iterator().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn exhausted_iterator_returns_none() {
        let aggregate = ConcreteAggregate::new([7]);
        let mut iterator = aggregate.create_iterator();

        assert!(iterator.has_next());
        assert_eq!(iterator.next(), Some(7));
        assert!(!iterator.has_next());
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn minus_one_is_an_ordinary_element() {
        let aggregate = ConcreteAggregate::new([-1, 0, -1]);
        let mut iterator = aggregate.create_iterator();

        assert_eq!(iterator.next(), Some(-1));
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(iterator.next(), Some(-1));
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn empty_aggregate_has_nothing() {
        let aggregate = ConcreteAggregate::default();
        let iterator = aggregate.create_iterator();

        assert!(aggregate.is_empty());
        assert!(!iterator.has_next());
        assert_eq!(iterator.len(), 0);
    }

    #[test]
    fn iterators_are_independent() {
        let aggregate: ConcreteAggregate = (1..=3).collect();
        let mut first = aggregate.create_iterator();
        first.next();

        let second = aggregate.create_iterator();
        assert_eq!(second.len(), 3);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn aggregate_works_in_for_loops() {
        let aggregate = ConcreteAggregate::new(vec![10, 20]);
        let mut sum = 0;
        for value in &aggregate {
            sum += value;
        }
        assert_eq!(sum, 30);
    }
}
