//! Template Method: a provided method fixes the skeleton of an algorithm and
//! implementors fill in the varying steps.

use crate::core::Transcript;

pub trait Beverage {
    fn name(&self) -> &str;

    fn brew(&self, out: &mut Transcript);
    fn add_condiments(&self, out: &mut Transcript);

    fn boil_water(&self, out: &mut Transcript) {
        out.line("Boiling water...");
    }

    fn pour_in_cup(&self, out: &mut Transcript) {
        out.line("Pouring into cup...");
    }

    /// The fixed recipe. Implementors override steps, not this order.
    fn prepare_recipe(&self, out: &mut Transcript) {
        self.boil_water(out);
        self.brew(out);
        self.pour_in_cup(out);
        self.add_condiments(out);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Tea;

impl Beverage for Tea {
    fn name(&self) -> &str {
        "tea"
    }

    fn brew(&self, out: &mut Transcript) {
        out.line("Steeping the tea...");
    }

    fn add_condiments(&self, out: &mut Transcript) {
        out.line("Adding lemon...");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Coffee;

impl Beverage for Coffee {
    fn name(&self) -> &str {
        "coffee"
    }

    fn brew(&self, out: &mut Transcript) {
        out.line("Dripping coffee through filter...");
    }

    fn add_condiments(&self, out: &mut Transcript) {
        out.line("Adding sugar and milk...");
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let beverages: [&dyn Beverage; 2] = [&Tea, &Coffee];
    for (i, beverage) in beverages.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        out.line(format!("Making {}:", beverage.name()));
        beverage.prepare_recipe(&mut out);
    }

    out
}
