//! State: an object changes behavior when its internal state object is
//! replaced.
//!
//! Each state consumes itself on a transition and returns the state that
//! replaces it, so the previous state is dropped rather than reused.

use crate::core::Transcript;

pub trait LightState {
    fn name(&self) -> &'static str;
    fn is_on(&self) -> bool;
    fn turn_on(self: Box<Self>, out: &mut Transcript) -> Box<dyn LightState>;
    fn turn_off(self: Box<Self>, out: &mut Transcript) -> Box<dyn LightState>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OnState;

impl LightState for OnState {
    fn name(&self) -> &'static str {
        "On"
    }

    fn is_on(&self) -> bool {
        true
    }

    fn turn_on(self: Box<Self>, out: &mut Transcript) -> Box<dyn LightState> {
        out.line("The light is already ON.");
        self
    }

    fn turn_off(self: Box<Self>, out: &mut Transcript) -> Box<dyn LightState> {
        out.line("Turning OFF the light.");
        Box::new(OffState)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OffState;

impl LightState for OffState {
    fn name(&self) -> &'static str {
        "Off"
    }

    fn is_on(&self) -> bool {
        false
    }

    fn turn_on(self: Box<Self>, out: &mut Transcript) -> Box<dyn LightState> {
        out.line("Turning ON the light.");
        Box::new(OnState)
    }

    fn turn_off(self: Box<Self>, out: &mut Transcript) -> Box<dyn LightState> {
        out.line("The light is already OFF.");
        self
    }
}

/// Context whose behavior is delegated to its current state.
pub struct LightSwitch {
    state: Option<Box<dyn LightState>>,
}

impl Default for LightSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl LightSwitch {
    /// A new switch is off.
    pub fn new() -> Self {
        Self {
            state: Some(Box::new(OffState)),
        }
    }

    pub fn is_on(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.is_on())
    }

    pub fn state_name(&self) -> &'static str {
        self.state.as_ref().map_or("Off", |s| s.name())
    }

    pub fn turn_on(&mut self, out: &mut Transcript) {
        self.transition(out, |state, out| state.turn_on(out));
    }

    pub fn turn_off(&mut self, out: &mut Transcript) {
        self.transition(out, |state, out| state.turn_off(out));
    }

    fn transition<F>(&mut self, out: &mut Transcript, step: F)
    where
        F: FnOnce(Box<dyn LightState>, &mut Transcript) -> Box<dyn LightState>,
    {
        if let Some(state) = self.state.take() {
            let from = state.name();
            let next = step(state, out);
            if next.name() != from {
                tracing::debug!(from, to = next.name(), "light switch transition");
            }
            self.state = Some(next);
        }
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let mut light_switch = LightSwitch::new();

    light_switch.turn_on(&mut out);
    light_switch.turn_on(&mut out);
    light_switch.turn_off(&mut out);
    light_switch.turn_off(&mut out);

    out
}
