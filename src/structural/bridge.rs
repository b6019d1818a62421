//! Bridge: split an abstraction (remote controls) from its implementation
//! (devices) so the two hierarchies vary independently.

use crate::core::Transcript;

/// Implementation side.
pub trait Device {
    fn name(&self) -> &str;
    fn is_on(&self) -> bool;
    fn turn_on(&mut self, out: &mut Transcript);
    fn turn_off(&mut self, out: &mut Transcript);
}

#[derive(Clone, Debug, Default)]
pub struct Tv {
    on: bool,
}

impl Device for Tv {
    fn name(&self) -> &str {
        "TV"
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self, out: &mut Transcript) {
        self.on = true;
        out.line("TV is now ON");
    }

    fn turn_off(&mut self, out: &mut Transcript) {
        self.on = false;
        out.line("TV is now OFF");
    }
}

#[derive(Clone, Debug, Default)]
pub struct Radio {
    on: bool,
}

impl Device for Radio {
    fn name(&self) -> &str {
        "Radio"
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn turn_on(&mut self, out: &mut Transcript) {
        self.on = true;
        out.line("Radio is now ON");
    }

    fn turn_off(&mut self, out: &mut Transcript) {
        self.on = false;
        out.line("Radio is now OFF");
    }
}

/// Abstraction side. Owns whichever device it drives.
pub struct RemoteControl {
    device: Box<dyn Device>,
}

impl RemoteControl {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self { device }
    }

    pub fn turn_on(&mut self, out: &mut Transcript) {
        self.device.turn_on(out);
    }

    pub fn turn_off(&mut self, out: &mut Transcript) {
        self.device.turn_off(out);
    }

    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }
}

/// Refined abstraction: everything a [`RemoteControl`] does, plus mute.
pub struct AdvancedRemote {
    remote: RemoteControl,
    muted: bool,
}

impl AdvancedRemote {
    pub fn new(device: Box<dyn Device>) -> Self {
        Self {
            remote: RemoteControl::new(device),
            muted: false,
        }
    }

    pub fn turn_on(&mut self, out: &mut Transcript) {
        self.remote.turn_on(out);
    }

    pub fn turn_off(&mut self, out: &mut Transcript) {
        self.remote.turn_off(out);
    }

    pub fn mute(&mut self, out: &mut Transcript) {
        self.muted = true;
        out.line("Device is now MUTED");
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn device(&self) -> &dyn Device {
        self.remote.device()
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let mut basic_remote = RemoteControl::new(Box::new(Tv::default()));
    basic_remote.turn_on(&mut out);
    basic_remote.turn_off(&mut out);

    let mut advanced_remote = AdvancedRemote::new(Box::new(Radio::default()));
    advanced_remote.turn_on(&mut out);
    advanced_remote.mute(&mut out);
    advanced_remote.turn_off(&mut out);

    out
}
