//! Game state and core simulation types
//!
//! Everything one play session needs lives in `GameState`. It is created
//! once, mutated every frame by `tick::update`, and cleared by `reset`.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::random::{Randomness, seeded};
use crate::consts::*;
use crate::tuning::Tuning;

/// Loop controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started (or reset)
    Idle,
    /// Active gameplay
    Running,
    /// Frozen; still rendered
    Paused,
    /// Health ran out; waits for reset
    GameOver,
}

impl GamePhase {
    /// Running or Paused: the frame chain is alive
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::Paused)
    }
}

/// Drawing surface dimensions (square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn square(size: f32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Size the playfield for a container of the given width
    pub fn fit(container_width: f32) -> Self {
        let size = (container_width - PLAYFIELD_PADDING)
            .min(MAX_PLAYFIELD_SIZE)
            .floor()
            .max(MIN_PLAYFIELD_SIZE);
        Self::square(size)
    }
}

/// One playthrough's mutable counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    /// Always within [0, MAX_HEALTH]
    pub health: i32,
    pub level: u32,
    /// Timestamp the session started (ms)
    pub started_at_ms: f64,
    /// Timestamp of the last power-up spawn (ms)
    pub last_power_up_ms: Option<f64>,
    /// Score at which the last level was granted
    pub last_level_score: u32,
}

impl Session {
    pub fn new(started_at_ms: f64) -> Self {
        Self {
            score: 0,
            health: MAX_HEALTH,
            level: START_LEVEL,
            started_at_ms,
            last_power_up_ms: None,
            last_level_score: 0,
        }
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.started_at_ms
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Lose health; returns true once health is depleted
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
        self.is_depleted()
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).clamp(0, MAX_HEALTH);
    }

    pub fn is_depleted(&self) -> bool {
        self.health <= 0
    }

    pub fn summary(&self, now_ms: f64) -> SessionSummary {
        SessionSummary {
            score: self.score,
            level: self.level,
            health: self.health,
            elapsed_ms: self.elapsed_ms(now_ms).max(0.0),
        }
    }
}

/// Logged when a session ends
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub level: u32,
    pub health: i32,
    pub elapsed_ms: f64,
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame
    pub speed: f32,
    pub last_shot_ms: Option<f64>,
    pub fire_cooldown_ms: f64,
    pub damage: f32,
}

impl Player {
    pub fn new(playfield: &Playfield, tuning: &Tuning) -> Self {
        Self {
            pos: Self::start_position(playfield),
            size: Vec2::splat(PLAYER_SIZE),
            speed: tuning.player_speed,
            last_shot_ms: None,
            fire_cooldown_ms: tuning.fire_cooldown_ms,
            damage: tuning.base_damage,
        }
    }

    /// Bottom-center spawn point
    pub fn start_position(playfield: &Playfield) -> Vec2 {
        Vec2::new(
            playfield.width / 2.0 - PLAYER_SIZE / 2.0,
            playfield.height - PLAYER_START_OFFSET_Y,
        )
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn can_fire(&self, now_ms: f64) -> bool {
        self.last_shot_ms
            .is_none_or(|last| now_ms - last > self.fire_cooldown_ms)
    }

    /// Move by `delta`, keeping the craft fully inside the playfield
    pub fn move_within(&mut self, delta: Vec2, playfield: &Playfield) {
        let max = Vec2::new(
            (playfield.width - self.size.x).max(0.0),
            (playfield.height - self.size.y).max(0.0),
        );
        self.pos = (self.pos + delta).clamp(Vec2::ZERO, max);
    }
}

/// A player shot travelling upward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Projectile {
    /// Fired from the craft's nose
    pub fn from_player(player: &Player) -> Self {
        Self {
            pos: Vec2::new(
                player.pos.x + player.size.x / 2.0 - PROJECTILE_WIDTH / 2.0,
                player.pos.y,
            ),
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A descending hostile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame before the difficulty multiplier
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub elite: bool,
}

impl Hostile {
    /// Ordinary one-hit hostile
    pub fn ordinary(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(HOSTILE_SIZE),
            speed,
            health: 1.0,
            max_health: 1.0,
            elite: false,
        }
    }

    pub fn elite(pos: Vec2, speed: f32, health: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(HOSTILE_SIZE),
            speed,
            health,
            max_health: health,
            elite: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Remaining health as a fraction of the pool, for health bars
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            (self.health / self.max_health).clamp(0.0, 1.0)
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Health,
    Repair,
}

impl PowerUpKind {
    /// Health restored on pickup
    pub fn restore(&self, tuning: &Tuning) -> i32 {
        match self {
            PowerUpKind::Health => tuning.health_restore,
            PowerUpKind::Repair => tuning.repair_restore,
        }
    }
}

/// A collectible drifting down the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            size: Vec2::splat(POWER_UP_SIZE),
            speed: POWER_UP_SPEED,
            kind,
            collected: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left
    pub life: u32,
    /// HSL hue in degrees
    pub hue: f32,
}

impl Particle {
    /// Opacity from remaining lifetime
    pub fn alpha(&self) -> f32 {
        (self.life as f32 / PARTICLE_LIFETIME as f32).clamp(0.0, 1.0)
    }
}

/// Decorative background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for the decorative RNG
    pub seed: u64,
    pub phase: GamePhase,
    pub playfield: Playfield,
    pub session: Session,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub hostiles: Vec<Hostile>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    /// Decoration RNG (stars, particles); gameplay rolls come from outside
    fx_rng: Pcg32,
}

impl GameState {
    /// Create an idle game state
    pub fn new(seed: u64, playfield: Playfield, star_count: usize, tuning: &Tuning) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Idle,
            playfield,
            session: Session::new(0.0),
            player: Player::new(&playfield, tuning),
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            stars: Vec::with_capacity(star_count),
            fx_rng: seeded(seed),
        };
        state.scatter_stars(star_count);
        state
    }

    fn scatter_stars(&mut self, count: usize) {
        let Playfield { width, height } = self.playfield;
        for _ in 0..count {
            let star = Star {
                pos: Vec2::new(self.fx_rng.roll() * width, self.fx_rng.roll() * height),
                size: self.fx_rng.roll() * 2.0 + 1.0,
                speed: self.fx_rng.roll() * 2.0 + 1.0,
                opacity: self.fx_rng.roll() * 0.8 + 0.2,
            };
            self.stars.push(star);
        }
    }

    /// Fresh session, fresh craft, no transient entities. Stars are kept.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.phase = GamePhase::Idle;
        self.session = Session::new(0.0);
        self.player = Player::new(&self.playfield, tuning);
        self.clear_entities();
    }

    pub fn clear_entities(&mut self) {
        self.projectiles.clear();
        self.hostiles.clear();
        self.power_ups.clear();
        self.particles.clear();
    }

    /// Emit an explosion burst centered at `center`
    pub fn spawn_explosion(&mut self, center: Vec2) {
        for _ in 0..BURST_PARTICLES {
            let vel = Vec2::new(
                (self.fx_rng.roll() - 0.5) * PARTICLE_MAX_SPEED,
                (self.fx_rng.roll() - 0.5) * PARTICLE_MAX_SPEED,
            );
            let hue = self.fx_rng.roll() * 60.0 + 20.0;
            self.particles.push(Particle {
                pos: center,
                vel,
                life: PARTICLE_LIFETIME,
                hue,
            });
        }
    }

    /// Move stars down, wrapping to the top at a fresh column
    pub fn drift_stars(&mut self) {
        let Playfield { width, height } = self.playfield;
        for star in &mut self.stars {
            star.pos.y += star.speed;
            if star.pos.y > height {
                star.pos.y = 0.0;
                star.pos.x = self.fx_rng.roll() * width;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_fit() {
        assert_eq!(Playfield::fit(1200.0), Playfield::square(800.0));
        assert_eq!(Playfield::fit(500.5), Playfield::square(460.0));
        assert_eq!(Playfield::fit(10.0), Playfield::square(MIN_PLAYFIELD_SIZE));
    }

    #[test]
    fn test_health_clamps() {
        let mut session = Session::new(0.0);
        assert!(!session.take_damage(30));
        assert_eq!(session.health, 70);
        session.heal(80);
        assert_eq!(session.health, 100);
        assert!(session.take_damage(250));
        assert_eq!(session.health, 0);
    }

    #[test]
    fn test_player_start_and_clamp() {
        let field = Playfield::square(400.0);
        let mut player = Player::new(&field, &Tuning::default());
        assert_eq!(player.pos, Vec2::new(175.0, 340.0));

        player.move_within(Vec2::new(-1000.0, 1000.0), &field);
        assert_eq!(player.pos, Vec2::new(0.0, 350.0));
    }

    #[test]
    fn test_fire_cooldown() {
        let field = Playfield::square(400.0);
        let mut player = Player::new(&field, &Tuning::default());
        assert!(player.can_fire(0.0));
        player.last_shot_ms = Some(1000.0);
        assert!(!player.can_fire(1150.0));
        assert!(player.can_fire(1151.0));
    }

    #[test]
    fn test_new_state_is_idle_with_stars() {
        let state = GameState::new(1, Playfield::square(400.0), 100, &Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.stars.len(), 100);
        for star in &state.stars {
            assert!((0.0..400.0).contains(&star.pos.x));
            assert!((1.0..3.0).contains(&star.size));
            assert!((0.2..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_explosion_burst() {
        let mut state = GameState::new(1, Playfield::square(400.0), 0, &Tuning::default());
        state.spawn_explosion(Vec2::new(50.0, 60.0));
        assert_eq!(state.particles.len(), BURST_PARTICLES);
        for p in &state.particles {
            assert_eq!(p.pos, Vec2::new(50.0, 60.0));
            assert_eq!(p.life, PARTICLE_LIFETIME);
            assert!(p.vel.x.abs() <= 5.0 && p.vel.y.abs() <= 5.0);
            assert!((20.0..80.0).contains(&p.hue));
        }
    }

    #[test]
    fn test_elite_health_fraction() {
        let mut boss = Hostile::elite(Vec2::ZERO, 0.5, 40.0);
        boss.health = 10.0;
        assert!((boss.health_fraction() - 0.25).abs() < 1e-6);
    }
}
