//! Abstract Factory: an interface for creating families of related objects
//! without naming their concrete types.

use crate::core::Transcript;

/// Product contract.
pub trait Animal {
    /// The sound this animal makes.
    fn sound(&self) -> &'static str;

    fn make_sound(&self, out: &mut Transcript) {
        out.line(self.sound());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dog;

impl Animal for Dog {
    fn sound(&self) -> &'static str {
        "Woof!"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cat;

impl Animal for Cat {
    fn sound(&self) -> &'static str {
        "Meow!"
    }
}

/// Factory contract. Each concrete factory decides which product it builds.
pub trait AnimalFactory {
    fn create_animal(&self) -> Box<dyn Animal>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DogFactory;

impl AnimalFactory for DogFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CatFactory;

impl AnimalFactory for CatFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

/// Create an animal from whichever factory the caller holds and let it speak.
pub fn speak_with(factory: &dyn AnimalFactory, out: &mut Transcript) {
    let animal = factory.create_animal();
    animal.make_sound(out);
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let factories: [Box<dyn AnimalFactory>; 2] = [Box::new(DogFactory), Box::new(CatFactory)];
    for factory in &factories {
        speak_with(factory.as_ref(), &mut out);
    }

    out
}
