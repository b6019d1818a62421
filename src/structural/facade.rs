//! Facade: one entry point that drives several subsystem components in the
//! right order.

use crate::core::Transcript;

#[derive(Clone, Debug, Default)]
pub struct Amplifier {
    on: bool,
    volume: Option<u8>,
}

impl Amplifier {
    pub fn on(&mut self, out: &mut Transcript) {
        self.on = true;
        out.line("Amplifier is turned ON.");
    }

    pub fn off(&mut self, out: &mut Transcript) {
        self.on = false;
        out.line("Amplifier is turned OFF.");
    }

    pub fn set_volume(&mut self, level: u8, out: &mut Transcript) {
        self.volume = Some(level);
        out.line(format!("Amplifier volume set to {level}"));
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> Option<u8> {
        self.volume
    }
}

#[derive(Clone, Debug, Default)]
pub struct DvdPlayer {
    on: bool,
    playing: Option<String>,
}

impl DvdPlayer {
    pub fn on(&mut self, out: &mut Transcript) {
        self.on = true;
        out.line("DVD Player is turned ON.");
    }

    pub fn off(&mut self, out: &mut Transcript) {
        self.on = false;
        self.playing = None;
        out.line("DVD Player is turned OFF.");
    }

    pub fn play(&mut self, movie: &str, out: &mut Transcript) {
        self.playing = Some(movie.to_string());
        out.line(format!("Playing movie: {movie}"));
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Projector {
    on: bool,
    widescreen: bool,
}

impl Projector {
    pub fn on(&mut self, out: &mut Transcript) {
        self.on = true;
        out.line("Projector is turned ON.");
    }

    pub fn off(&mut self, out: &mut Transcript) {
        self.on = false;
        out.line("Projector is turned OFF.");
    }

    pub fn wide_screen_mode(&mut self, out: &mut Transcript) {
        self.widescreen = true;
        out.line("Projector set to widescreen mode.");
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn is_widescreen(&self) -> bool {
        self.widescreen
    }
}

/// Volume the facade dials in when a movie starts.
pub const MOVIE_VOLUME: u8 = 10;

#[derive(Clone, Debug, Default)]
pub struct HomeTheaterFacade {
    amp: Amplifier,
    dvd: DvdPlayer,
    projector: Projector,
}

impl HomeTheaterFacade {
    pub fn new(amp: Amplifier, dvd: DvdPlayer, projector: Projector) -> Self {
        Self { amp, dvd, projector }
    }

    pub fn watch_movie(&mut self, movie: &str, out: &mut Transcript) {
        out.blank();
        out.line("Preparing to watch a movie...");
        self.amp.on(out);
        self.amp.set_volume(MOVIE_VOLUME, out);
        self.dvd.on(out);
        self.projector.on(out);
        self.projector.wide_screen_mode(out);
        self.dvd.play(movie, out);
        out.line("Enjoy your movie!");
    }

    pub fn end_movie(&mut self, out: &mut Transcript) {
        out.blank();
        out.line("Shutting down the home theater system...");
        self.dvd.off(out);
        self.projector.off(out);
        self.amp.off(out);
        out.line("Home theater system is off.");
    }

    pub fn amplifier(&self) -> &Amplifier {
        &self.amp
    }

    pub fn dvd_player(&self) -> &DvdPlayer {
        &self.dvd
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let mut home_theater =
        HomeTheaterFacade::new(Amplifier::default(), DvdPlayer::default(), Projector::default());
    home_theater.watch_movie("Inception", &mut out);
    home_theater.end_movie(&mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_movie_powers_everything_on() {
        let mut theater = HomeTheaterFacade::default();
        let mut out = Transcript::new();

        theater.watch_movie("Alien", &mut out);

        assert!(theater.amplifier().is_on());
        assert_eq!(theater.amplifier().volume(), Some(MOVIE_VOLUME));
        assert!(theater.dvd_player().is_on());
        assert_eq!(theater.dvd_player().playing(), Some("Alien"));
        assert!(theater.projector().is_on());
        assert!(theater.projector().is_widescreen());
        assert_eq!(out.last(), Some("Enjoy your movie!"));
    }

    #[test]
    fn end_movie_powers_everything_off() {
        let mut theater = HomeTheaterFacade::default();
        let mut out = Transcript::new();

        theater.watch_movie("Alien", &mut out);
        theater.end_movie(&mut out);

        assert!(!theater.amplifier().is_on());
        assert!(!theater.dvd_player().is_on());
        assert_eq!(theater.dvd_player().playing(), None);
        assert!(!theater.projector().is_on());
        assert_eq!(out.last(), Some("Home theater system is off."));
    }

    #[test]
    fn watch_movie_sequence_is_fixed() {
        let mut theater = HomeTheaterFacade::default();
        let mut out = Transcript::new();

        theater.watch_movie("Up", &mut out);

        assert_eq!(
            out.lines(),
            &[
                "",
                "Preparing to watch a movie...",
                "Amplifier is turned ON.",
                "Amplifier volume set to 10",
                "DVD Player is turned ON.",
                "Projector is turned ON.",
                "Projector set to widescreen mode.",
                "Playing movie: Up",
                "Enjoy your movie!",
            ]
        );
    }
}
