//! Command: wrap a request to a receiver in an object, so an invoker can
//! trigger it without knowing what it does.

use crate::core::Transcript;
use std::cell::Cell;

/// Receiver. Does the actual work.
#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&self, out: &mut Transcript) {
        self.on.set(true);
        out.line("Light is ON");
    }

    pub fn turn_off(&self, out: &mut Transcript) {
        self.on.set(false);
        out.line("Light is OFF");
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

pub trait Command {
    fn execute(&self, out: &mut Transcript);
}

#[derive(Clone, Copy, Debug)]
pub struct TurnOnCommand<'a> {
    light: &'a Light,
}

impl<'a> TurnOnCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for TurnOnCommand<'_> {
    fn execute(&self, out: &mut Transcript) {
        self.light.turn_on(out);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TurnOffCommand<'a> {
    light: &'a Light,
}

impl<'a> TurnOffCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for TurnOffCommand<'_> {
    fn execute(&self, out: &mut Transcript) {
        self.light.turn_off(out);
    }
}

/// Invoker. Holds at most one command and runs it on demand.
#[derive(Default)]
pub struct RemoteControl<'a> {
    command: Option<&'a dyn Command>,
}

impl<'a> RemoteControl<'a> {
    pub fn new() -> Self {
        Self { command: None }
    }

    pub fn set_command(&mut self, command: &'a dyn Command) {
        self.command = Some(command);
    }

    /// Run the current command. Does nothing when none is set.
    pub fn press_button(&self, out: &mut Transcript) {
        match self.command {
            Some(command) => command.execute(out),
            None => tracing::debug!("button pressed with no command set"),
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let light = Light::new();
    let turn_on = TurnOnCommand::new(&light);
    let turn_off = TurnOffCommand::new(&light);

    let mut remote = RemoteControl::new();
    remote.set_command(&turn_on);
    remote.press_button(&mut out);

    remote.set_command(&turn_off);
    remote.press_button(&mut out);

    out
}
