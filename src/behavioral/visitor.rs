//! Visitor: add operations over a fixed set of element types without
//! changing those types, using double dispatch.

use crate::core::Transcript;

pub trait Visitor {
    fn visit_element_a(&mut self, element: &ElementA, out: &mut Transcript);
    fn visit_element_b(&mut self, element: &ElementB, out: &mut Transcript);
}

pub trait Element {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ElementA;

impl Element for ElementA {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_element_a(self, out);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ElementB;

impl Element for ElementB {
    fn accept(&self, visitor: &mut dyn Visitor, out: &mut Transcript) {
        visitor.visit_element_b(self, out);
    }
}

/// Prints each visit and counts visits per element type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConcreteVisitor {
    visited_a: usize,
    visited_b: usize,
}

impl ConcreteVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited_a(&self) -> usize {
        self.visited_a
    }

    pub fn visited_b(&self) -> usize {
        self.visited_b
    }
}

impl Visitor for ConcreteVisitor {
    fn visit_element_a(&mut self, _element: &ElementA, out: &mut Transcript) {
        self.visited_a += 1;
        out.line("Visiting ElementA");
    }

    fn visit_element_b(&mut self, _element: &ElementB, out: &mut Transcript) {
        self.visited_b += 1;
        out.line("Visiting ElementB");
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let a = ElementA;
    let b = ElementB;
    let mut visitor = ConcreteVisitor::new();

    a.accept(&mut visitor, &mut out);
    b.accept(&mut visitor, &mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_element_dispatches_to_its_own_visit() {
        let mut visitor = ConcreteVisitor::new();
        let mut out = Transcript::new();

        ElementB.accept(&mut visitor, &mut out);

        assert_eq!(visitor.visited_a(), 0);
        assert_eq!(visitor.visited_b(), 1);
        assert_eq!(out.lines(), &["Visiting ElementB"]);
    }

    #[test]
    fn heterogeneous_elements_share_one_visitor() {
        let elements: Vec<Box<dyn Element>> =
            vec![Box::new(ElementA), Box::new(ElementB), Box::new(ElementA)];
        let mut visitor = ConcreteVisitor::new();
        let mut out = Transcript::new();

        for element in &elements {
            element.accept(&mut visitor, &mut out);
        }

        assert_eq!(visitor.visited_a(), 2);
        assert_eq!(visitor.visited_b(), 1);
        assert_eq!(
            out.lines(),
            &["Visiting ElementA", "Visiting ElementB", "Visiting ElementA"]
        );
    }

    /// A second operation over the same elements, added without touching them.
    #[derive(Default)]
    struct NameCollector(Vec<&'static str>);

    impl Visitor for NameCollector {
        fn visit_element_a(&mut self, _element: &ElementA, _out: &mut Transcript) {
            self.0.push("A");
        }

        fn visit_element_b(&mut self, _element: &ElementB, _out: &mut Transcript) {
            self.0.push("B");
        }
    }

    #[test]
    fn new_operations_need_no_element_changes() {
        let mut collector = NameCollector::default();
        let mut out = Transcript::new();

        ElementA.accept(&mut collector, &mut out);
        ElementB.accept(&mut collector, &mut out);

        assert_eq!(collector.0, vec!["A", "B"]);
        assert!(out.is_empty());
    }
}
