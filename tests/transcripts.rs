//! Output of every demonstration, line for line.

use patterns::{Pattern, Transcript};

fn assert_transcript(actual: Transcript, expected: &[&str]) {
    let lines: Vec<&str> = actual.lines().iter().map(String::as_str).collect();
    assert_eq!(lines, expected);
}

#[test]
fn abstract_factory() {
    assert_transcript(Pattern::AbstractFactory.run(), &["Woof!", "Meow!"]);
}

#[test]
fn factory_method() {
    assert_transcript(Pattern::FactoryMethod.run(), &["Woof!", "Meow!"]);
}

#[test]
fn builder() {
    assert_transcript(Pattern::Builder.run(), &["Product Parts: Part A, Part B"]);
}

#[test]
fn prototype() {
    assert_transcript(
        Pattern::Prototype.run(),
        &["ConcretePrototypeA with value: 42"],
    );
}

#[test]
fn singleton() {
    assert_transcript(
        Pattern::Singleton.run(),
        &["Singleton Instance Created", "Both instances are the same!"],
    );
}

#[test]
fn adapter() {
    assert_transcript(Pattern::Adapter.run(), &["Printing using OldPrinter"]);
}

#[test]
fn bridge() {
    assert_transcript(
        Pattern::Bridge.run(),
        &[
            "TV is now ON",
            "TV is now OFF",
            "Radio is now ON",
            "Device is now MUTED",
            "Radio is now OFF",
        ],
    );
}

#[test]
fn composite() {
    assert_transcript(
        Pattern::Composite.run(),
        &[
            "Directory: dir1",
            "  File: file1.txt",
            "  Directory: dir2",
            "    File: file2.txt",
        ],
    );
}

#[test]
fn decorator() {
    assert_transcript(
        Pattern::Decorator.run(),
        &[
            "Simple Component:",
            "ConcreteComponent: Base Operation",
            "",
            "Component with ConcreteDecoratorA:",
            "ConcreteComponent: Base Operation",
            "ConcreteDecoratorA: Added Behavior A",
            "",
            "Component with ConcreteDecoratorA and ConcreteDecoratorB:",
            "ConcreteComponent: Base Operation",
            "ConcreteDecoratorA: Added Behavior A",
            "ConcreteDecoratorB: Added Behavior B",
            "",
        ],
    );
}

#[test]
fn facade() {
    assert_transcript(
        Pattern::Facade.run(),
        &[
            "",
            "Preparing to watch a movie...",
            "Amplifier is turned ON.",
            "Amplifier volume set to 10",
            "DVD Player is turned ON.",
            "Projector is turned ON.",
            "Projector set to widescreen mode.",
            "Playing movie: Inception",
            "Enjoy your movie!",
            "",
            "Shutting down the home theater system...",
            "DVD Player is turned OFF.",
            "Projector is turned OFF.",
            "Amplifier is turned OFF.",
            "Home theater system is off.",
        ],
    );
}

#[test]
fn flyweight() {
    assert_transcript(
        Pattern::Flyweight.run(),
        &[
            "Flyweight with intrinsic state [A] and extrinsic state [First call]",
            "Flyweight with intrinsic state [A] and extrinsic state [Second call]",
            "Flyweight with intrinsic state [B] and extrinsic state [Another instance]",
        ],
    );
}

#[test]
fn proxy() {
    assert_transcript(
        Pattern::Proxy.run(),
        &[
            "Client: Requesting through Proxy...",
            "Proxy: Creating RealSubject instance.",
            "Proxy: Forwarding request to RealSubject.",
            "RealSubject: Handling request.",
            "Client: Requesting again...",
            "Proxy: Forwarding request to RealSubject.",
            "RealSubject: Handling request.",
        ],
    );
}

#[test]
fn chain_of_responsibility() {
    assert_transcript(
        Pattern::ChainOfResponsibility.run(),
        &[
            "ConcreteHandler1 handled request 5",
            "ConcreteHandler2 handled request 15",
            "ConcreteHandler3 handled request 25",
            "Request 35 could not be handled.",
        ],
    );
}

#[test]
fn command() {
    assert_transcript(Pattern::Command.run(), &["Light is ON", "Light is OFF"]);
}

#[test]
fn interpreter() {
    assert_transcript(
        Pattern::Interpreter.run(),
        &[
            "Result of expression 'x + y': 15",
            "Result of expression 'x + 6': 16",
        ],
    );
}

#[test]
fn iterator() {
    assert_transcript(Pattern::Iterator.run(), &["1 2 3 4 5"]);
}

#[test]
fn mediator() {
    assert_transcript(
        Pattern::Mediator.run(),
        &[
            "ComponentA sends: Hello from A!",
            "ComponentB receives: Hello from A!",
            "ComponentB sends: Hi from B!",
            "ComponentA receives: Hi from B!",
        ],
    );
}

#[test]
fn memento() {
    assert_transcript(
        Pattern::Memento.run(),
        &[
            "State set to: 1",
            "State set to: 2",
            "State set to: 3",
            "State restored to: 1",
        ],
    );
}

#[test]
fn observer() {
    assert_transcript(
        Pattern::Observer.run(),
        &[
            "Setting state to 10",
            "Observer 1 notified. New state: 10",
            "Observer 2 notified. New state: 10",
            "Setting state to 20",
            "Observer 2 notified. New state: 20",
        ],
    );
}

#[test]
fn state() {
    assert_transcript(
        Pattern::State.run(),
        &[
            "Turning ON the light.",
            "The light is already ON.",
            "Turning OFF the light.",
            "The light is already OFF.",
        ],
    );
}

#[test]
fn strategy() {
    assert_transcript(
        Pattern::Strategy.run(),
        &["Executing Strategy A", "Executing Strategy B"],
    );
}

#[test]
fn template_method() {
    assert_transcript(
        Pattern::TemplateMethod.run(),
        &[
            "Making tea:",
            "Boiling water...",
            "Steeping the tea...",
            "Pouring into cup...",
            "Adding lemon...",
            "",
            "Making coffee:",
            "Boiling water...",
            "Dripping coffee through filter...",
            "Pouring into cup...",
            "Adding sugar and milk...",
        ],
    );
}

#[test]
fn visitor() {
    assert_transcript(
        Pattern::Visitor.run(),
        &["Visiting ElementA", "Visiting ElementB"],
    );
}

#[test]
fn rendered_transcript_ends_every_line_with_newline() {
    let rendered = Pattern::Command.run().to_string();
    assert_eq!(rendered, "Light is ON\nLight is OFF\n");
}

#[test]
fn runs_are_independent() {
    assert_eq!(Pattern::Singleton.run(), Pattern::Singleton.run());
    assert_eq!(Pattern::Flyweight.run(), Pattern::Flyweight.run());
}
