//! Adapter: let a type with an incompatible interface satisfy the interface a
//! client expects.

use crate::core::Transcript;

/// Legacy type whose interface cannot change.
#[derive(Clone, Copy, Debug, Default)]
pub struct OldPrinter;

impl OldPrinter {
    pub fn old_print(&self, out: &mut Transcript) {
        out.line("Printing using OldPrinter");
    }
}

/// The interface clients are written against.
pub trait NewPrinter {
    fn print(&self, out: &mut Transcript);
}

/// Borrows an [`OldPrinter`] and presents it as a [`NewPrinter`].
#[derive(Clone, Copy, Debug)]
pub struct PrinterAdapter<'a> {
    old_printer: &'a OldPrinter,
}

impl<'a> PrinterAdapter<'a> {
    pub fn new(old_printer: &'a OldPrinter) -> Self {
        Self { old_printer }
    }
}

impl NewPrinter for PrinterAdapter<'_> {
    fn print(&self, out: &mut Transcript) {
        self.old_printer.old_print(out);
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let old_printer = OldPrinter;
    let adapter = PrinterAdapter::new(&old_printer);
    adapter.print(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_through(printer: &dyn NewPrinter) -> Transcript {
        let mut out = Transcript::new();
        printer.print(&mut out);
        out
    }

    #[test]
    fn adapter_forwards_to_old_interface() {
        let old_printer = OldPrinter;
        let adapter = PrinterAdapter::new(&old_printer);

        let mut direct = Transcript::new();
        old_printer.old_print(&mut direct);

        assert_eq!(print_through(&adapter), direct);
    }
}
