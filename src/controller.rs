//! Game loop controller
//!
//! Owns the game state and drives the Idle → Running ⇄ Paused → GameOver
//! state machine. Each frame runs Update (skipped while paused) and then
//! Render, and reports whether another frame should be scheduled.

use crate::platform::{ButtonStates, Clock, HudSink, Readout, TickSource};
use crate::renderer::{Canvas, FrameContext, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Player, Playfield, Randomness, TickInput};
use crate::sim::{fire, update};
use crate::tuning::Tuning;

/// Whether the caller should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stopped,
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Key {
    /// Map a `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// The game loop with its injected clock and randomness
pub struct GameLoop<C: Clock, R: Randomness> {
    state: GameState,
    tuning: Tuning,
    settings: Settings,
    clock: C,
    rolls: R,
    /// Movement keys currently held
    input: TickInput,
    last_frame_ms: Option<f64>,
    /// Time between the last two frames (bookkeeping only)
    frame_delta_ms: f64,
    frames: u64,
}

impl<C: Clock, R: Randomness> GameLoop<C, R> {
    pub fn new(
        seed: u64,
        playfield: Playfield,
        tuning: Tuning,
        settings: Settings,
        clock: C,
        rolls: R,
    ) -> Self {
        let state = GameState::new(seed, playfield, settings.quality.star_count(), &tuning);
        Self {
            state,
            tuning,
            settings,
            clock,
            rolls,
            input: TickInput::default(),
            last_frame_ms: None,
            frame_delta_ms: 0.0,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn frame_delta_ms(&self) -> f64 {
        self.frame_delta_ms
    }

    /// Frames processed since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Begin a session. Returns true when the caller must start the frame chain.
    pub fn start(&mut self, hud: &mut impl HudSink) -> bool {
        match self.state.phase {
            GamePhase::Running | GamePhase::Paused => return false,
            GamePhase::GameOver => self.state.reset(&self.tuning),
            GamePhase::Idle => {}
        }

        let now = self.clock.now_ms();
        self.state.phase = GamePhase::Running;
        self.state.session.started_at_ms = now;
        self.state.player = Player::new(&self.state.playfield, &self.tuning);
        self.last_frame_ms = None;

        log::info!("Session started (seed {})", self.state.seed);
        hud.show_buttons(&ButtonStates::for_phase(self.state.phase));
        true
    }

    /// Toggle between Running and Paused. Not idempotent: a second call resumes.
    pub fn toggle_pause(&mut self, hud: &mut impl HudSink) {
        self.state.phase = match self.state.phase {
            GamePhase::Running => {
                log::info!("Paused");
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Running
            }
            other => {
                log::debug!("Pause ignored in {:?}", other);
                return;
            }
        };
        hud.show_buttons(&ButtonStates::for_phase(self.state.phase));
    }

    /// Back to Idle with a fresh session and no entities
    pub fn reset(&mut self, hud: &mut impl HudSink) {
        self.state.reset(&self.tuning);
        self.input = TickInput::default();
        self.last_frame_ms = None;

        log::info!("Game reset");
        hud.show_stats(&self.readout());
        hud.show_buttons(&ButtonStates::for_phase(self.state.phase));
    }

    /// Fire if running and off cooldown
    pub fn fire(&mut self) -> bool {
        let now = self.clock.now_ms();
        fire(&mut self.state, now)
    }

    /// Record a key transition. Fire triggers on press; movement is sampled.
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.input.left = pressed,
            Key::Right => self.input.right = pressed,
            Key::Up => self.input.up = pressed,
            Key::Down => self.input.down = pressed,
            Key::Fire => {
                if pressed {
                    self.fire();
                }
            }
        }
    }

    /// Canvas click: restarts a finished game. Returns true if a new chain must start.
    pub fn click(&mut self, hud: &mut impl HudSink) -> bool {
        if self.state.phase != GamePhase::GameOver {
            return false;
        }
        self.reset(hud);
        self.start(hud)
    }

    /// Change the drawing surface. Entities keep their positions.
    pub fn resize(&mut self, playfield: Playfield) {
        if playfield != self.state.playfield {
            log::debug!("Playfield resized to {}x{}", playfield.width, playfield.height);
            self.state.playfield = playfield;
        }
    }

    /// Latest HUD values
    pub fn readout(&self) -> Readout {
        let session = &self.state.session;
        let elite_countdown_secs = if self.state.phase == GamePhase::Running {
            let left = self.tuning.elite_grace_ms - session.elapsed_ms(self.clock.now_ms());
            (left > 0.0).then(|| (left / 1000.0).ceil() as u32)
        } else {
            None
        };
        Readout {
            health: session.health,
            score: session.score,
            level: session.level,
            elite_countdown_secs,
        }
    }

    /// Run one frame: Update (unless paused), then Render
    pub fn frame(
        &mut self,
        frame_time_ms: f64,
        canvas: &mut impl Canvas,
        hud: &mut impl HudSink,
    ) -> FrameOutcome {
        if !self.state.phase.is_active() {
            return FrameOutcome::Stopped;
        }

        if let Some(last) = self.last_frame_ms {
            self.frame_delta_ms = frame_time_ms - last;
        }
        self.last_frame_ms = Some(frame_time_ms);
        self.frames += 1;

        if self.state.phase == GamePhase::Running {
            let now = self.clock.now_ms();
            let events = update(&mut self.state, &self.input, &mut self.rolls, &self.tuning, now);
            self.handle_events(&events, now, hud);
            hud.show_stats(&self.readout());
        }

        self.redraw(canvas);

        if self.state.phase.is_active() {
            FrameOutcome::Continue
        } else {
            FrameOutcome::Stopped
        }
    }

    /// Render the current state without advancing it
    pub fn redraw(&self, canvas: &mut impl Canvas) {
        let ctx = FrameContext {
            settings: &self.settings,
            collision_margin: self.tuning.collision_margin,
            now_ms: self.clock.now_ms(),
        };
        render(&self.state, &ctx, canvas);
    }

    /// Drive frames from a tick source until it runs dry or the loop stops
    pub fn run(
        &mut self,
        ticks: &mut impl TickSource,
        canvas: &mut impl Canvas,
        hud: &mut impl HudSink,
    ) -> FrameOutcome {
        while let Some(frame_time) = ticks.next_frame() {
            if self.frame(frame_time, canvas, hud) == FrameOutcome::Stopped {
                return FrameOutcome::Stopped;
            }
        }
        FrameOutcome::Continue
    }

    fn handle_events(&mut self, events: &[GameEvent], now_ms: f64, hud: &mut impl HudSink) {
        for event in events {
            if *event == GameEvent::GameOver {
                let summary = self.state.session.summary(now_ms);
                match serde_json::to_string(&summary) {
                    Ok(json) => log::info!("Game over: {}", json),
                    Err(e) => log::warn!("Game over (summary unavailable: {})", e),
                }
                hud.show_buttons(&ButtonStates::for_phase(self.state.phase));
            }
        }
    }
}
