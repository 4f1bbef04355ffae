//! Page atmosphere: day/night mode, the sun/moon orbit, scroll effects and
//! the flickering type.

#[cfg(target_arch = "wasm32")]
mod effects;
pub mod flicker;
pub mod mode;
pub mod orbit;
pub mod scroll;
mod view;

pub use mode::SkyMode;
pub use orbit::{OrbitFrame, OrbitPath};
pub use view::{ClickHint, HeroTitle, MatrixBackdrop, ModeToggle, Orb, ProgressBar, SceneRoot};

/// Page-wide visual state shared through context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    pub mode: SkyMode,
    /// Continuous phase for the stylesheet: 0 is day, 1 is night.
    pub phase: f64,
    pub orbit: Option<OrbitFrame>,
    pub experience_started: bool,
    pub hint_hidden: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            mode: SkyMode::Day,
            phase: SkyMode::Day.phase(),
            orbit: None,
            experience_started: false,
            hint_hidden: false,
        }
    }
}

impl SceneState {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.phase = self.mode.phase();
    }

    /// Mark the intro as started. Returns `true` only the first time.
    pub fn start_experience(&mut self) -> bool {
        !std::mem::replace(&mut self.experience_started, true)
    }

    pub fn hide_hint(&mut self) {
        self.hint_hidden = true;
    }

    /// Follow the orbit; the finished orbit leaves the page in night mode.
    pub fn apply_orbit(&mut self, frame: OrbitFrame) {
        self.orbit = Some(frame);
        self.phase = frame.progress;
        if frame.is_done() {
            self.mode = SkyMode::Night;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_toggle_writes_binary_phase() {
        let mut scene = SceneState::default();
        scene.toggle_mode();
        assert_eq!(scene.mode, SkyMode::Night);
        assert_eq!(scene.phase, 1.0);
        scene.toggle_mode();
        assert_eq!(scene.phase, 0.0);
    }

    #[test]
    fn experience_starts_once() {
        let mut scene = SceneState::default();
        assert!(scene.start_experience());
        assert!(!scene.start_experience());
    }

    #[test]
    fn orbit_ends_in_night() {
        let path = OrbitPath::default();
        let mut scene = SceneState::default();
        scene.apply_orbit(path.frame(0.4));
        assert_eq!(scene.mode, SkyMode::Day);
        assert_eq!(scene.phase, 0.4);
        scene.apply_orbit(path.frame(1.0));
        assert_eq!(scene.mode, SkyMode::Night);
        assert_eq!(scene.phase, 1.0);
    }
}
