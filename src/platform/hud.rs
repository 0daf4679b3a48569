//! HUD readouts and control buttons
//!
//! The loop pushes values out; the page never polls game state.

use serde::Serialize;

use crate::sim::GamePhase;

/// Latest session values for the text readouts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readout {
    pub health: i32,
    pub score: u32,
    pub level: u32,
    /// Whole seconds until elites can appear (only while the grace period runs)
    pub elite_countdown_secs: Option<u32>,
}

/// One control button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: &'static str,
}

impl ButtonState {
    const fn on(label: &'static str) -> Self {
        Self { enabled: true, label }
    }

    const fn off(label: &'static str) -> Self {
        Self {
            enabled: false,
            label,
        }
    }
}

/// Start / pause / reset buttons for a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub start: ButtonState,
    pub pause: ButtonState,
    pub reset: ButtonState,
}

impl ButtonStates {
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Running => Self {
                start: ButtonState::off("Playing"),
                pause: ButtonState::on("Pause"),
                reset: ButtonState::on("Reset"),
            },
            GamePhase::Paused => Self {
                start: ButtonState::on("Resume"),
                pause: ButtonState::on("Resume"),
                reset: ButtonState::on("Reset"),
            },
            GamePhase::GameOver => Self {
                start: ButtonState::on("Play again"),
                pause: ButtonState::off("Pause"),
                reset: ButtonState::on("Reset"),
            },
            GamePhase::Idle => Self {
                start: ButtonState::on("Start"),
                pause: ButtonState::off("Pause"),
                reset: ButtonState::off("Reset"),
            },
        }
    }
}

/// Receiver for HUD updates
pub trait HudSink {
    fn show_stats(&mut self, readout: &Readout);
    fn show_buttons(&mut self, buttons: &ButtonStates);
}

/// Discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHud;

impl HudSink for NullHud {
    fn show_stats(&mut self, _readout: &Readout) {}
    fn show_buttons(&mut self, _buttons: &ButtonStates) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_states() {
        let idle = ButtonStates::for_phase(GamePhase::Idle);
        assert!(idle.start.enabled);
        assert!(!idle.pause.enabled);
        assert!(!idle.reset.enabled);

        let running = ButtonStates::for_phase(GamePhase::Running);
        assert!(!running.start.enabled);
        assert_eq!(running.pause.label, "Pause");

        let paused = ButtonStates::for_phase(GamePhase::Paused);
        assert_eq!(paused.pause.label, "Resume");

        let over = ButtonStates::for_phase(GamePhase::GameOver);
        assert_eq!(over.start.label, "Play again");
        assert!(!over.pause.enabled);
    }
}
