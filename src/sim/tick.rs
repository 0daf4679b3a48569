//! Per-frame simulation update
//!
//! Advances the game by exactly one display frame. Motion is expressed in
//! fixed per-frame deltas, so game speed follows the refresh rate. The
//! sub-steps run in a fixed order and each one removes the entities it
//! destroys before the next step looks at the collections.

use glam::Vec2;

use super::collision::overlaps_with_margin;
use super::random::Randomness;
use super::state::{GamePhase, GameState, Hostile, PowerUp, PowerUpKind, Projectile};
use crate::consts::*;
use crate::tuning::Tuning;

/// Movement keys sampled at the start of the frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Unit-per-axis direction from the held keys
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Something gameplay-relevant that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    HostileDestroyed { elite: bool, points: u32 },
    HostileEscaped,
    PlayerRammed,
    EliteSpawned,
    PowerUpSpawned(PowerUpKind),
    PowerUpCollected(PowerUpKind),
    LevelUp { level: u32 },
    GameOver,
}

/// Advance the game state by one frame
pub fn update(
    state: &mut GameState,
    input: &TickInput,
    rolls: &mut impl Randomness,
    tuning: &Tuning,
    now_ms: f64,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    move_player(state, input);
    advance_projectiles(state);
    advance_hostiles(state, tuning, &mut events);
    advance_particles(state);
    state.drift_stars();
    spawn_hostiles(state, rolls, tuning, now_ms, &mut events);
    spawn_power_ups(state, rolls, tuning, now_ms, &mut events);
    advance_power_ups(state);
    resolve_collisions(state, tuning, &mut events);
    check_level_up(state, tuning, &mut events);

    events
}

/// Fire a projectile if the session is live and the cooldown has passed
pub fn fire(state: &mut GameState, now_ms: f64) -> bool {
    if state.phase != GamePhase::Running || !state.player.can_fire(now_ms) {
        return false;
    }
    state.projectiles.push(Projectile::from_player(&state.player));
    state.player.last_shot_ms = Some(now_ms);
    true
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let delta = input.direction() * state.player.speed;
    if delta != Vec2::ZERO {
        let playfield = state.playfield;
        state.player.move_within(delta, &playfield);
    }
}

fn advance_projectiles(state: &mut GameState) {
    state.projectiles.retain_mut(|shot| {
        shot.pos.y -= shot.speed;
        shot.bounds().bottom() >= 0.0
    });
}

fn advance_hostiles(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let height = state.playfield.height;
    let before = state.hostiles.len();
    state.hostiles.retain_mut(|hostile| {
        hostile.pos.y += hostile.speed * tuning.difficulty;
        hostile.bounds().top() <= height
    });

    for _ in state.hostiles.len()..before {
        events.push(GameEvent::HostileEscaped);
        if state.session.take_damage(tuning.escape_penalty) {
            end_session(state, events);
        }
    }
}

fn advance_particles(state: &mut GameState) {
    state.particles.retain_mut(|particle| {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
        particle.life > 0
    });
}

fn advance_power_ups(state: &mut GameState) {
    let height = state.playfield.height;
    state.power_ups.retain_mut(|power_up| {
        power_up.pos.y += power_up.speed;
        power_up.pos.y <= height && !power_up.collected
    });
}

/// Roll for a hostile. Elites are only possible after the grace period.
fn spawn_hostiles(
    state: &mut GameState,
    rolls: &mut impl Randomness,
    tuning: &Tuning,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    if rolls.roll() >= tuning.hostile_spawn_chance * tuning.difficulty {
        return;
    }

    let grace_over = state.session.elapsed_ms(now_ms) > tuning.elite_grace_ms;
    let elite = grace_over && rolls.roll() < tuning.elite_chance;

    let x = rolls.roll_range(0.0, (state.playfield.width - HOSTILE_SIZE).max(0.0));
    let pos = Vec2::new(x, SPAWN_Y);

    let hostile = if elite {
        let speed = 0.5 + rolls.roll() * 0.5;
        let health = 30.0 + (rolls.roll() * 20.0).floor();
        log::debug!("Elite spawned at x={:.0} with {} health", x, health);
        events.push(GameEvent::EliteSpawned);
        Hostile::elite(pos, speed, health)
    } else {
        Hostile::ordinary(pos, 1.0 + rolls.roll())
    };
    state.hostiles.push(hostile);
}

/// Roll for a power-up once the spawn cooldown has elapsed
fn spawn_power_ups(
    state: &mut GameState,
    rolls: &mut impl Randomness,
    tuning: &Tuning,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    let ready = state
        .session
        .last_power_up_ms
        .is_none_or(|last| now_ms - last > tuning.power_up_cooldown_ms);
    if !ready || rolls.roll() >= tuning.power_up_chance {
        return;
    }

    let kind = if rolls.roll() < 0.5 {
        PowerUpKind::Health
    } else {
        PowerUpKind::Repair
    };
    let x = rolls.roll_range(0.0, (state.playfield.width - POWER_UP_SIZE).max(0.0));
    state.power_ups.push(PowerUp::new(Vec2::new(x, SPAWN_Y), kind));
    state.session.last_power_up_ms = Some(now_ms);

    log::debug!("Power-up {:?} spawned", kind);
    events.push(GameEvent::PowerUpSpawned(kind));
}

/// Projectiles vs hostiles, player vs hostiles, player vs power-ups
pub fn resolve_collisions(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let margin = tuning.collision_margin;

    // A projectile is spent on the first hostile it touches
    let damage = state.player.damage;
    let mut i = 0;
    while i < state.projectiles.len() {
        let shot = state.projectiles[i].bounds();
        let Some(j) = state
            .hostiles
            .iter()
            .position(|h| overlaps_with_margin(&shot, &h.bounds(), margin))
        else {
            i += 1;
            continue;
        };

        state.projectiles.remove(i);
        let hostile = &mut state.hostiles[j];
        hostile.health -= damage;
        if hostile.health <= 0.0 {
            let hostile = state.hostiles.remove(j);
            let points = if hostile.elite {
                tuning.elite_score
            } else {
                tuning.hostile_score
            };
            state.session.add_score(points);
            state.spawn_explosion(hostile.bounds().center());
            events.push(GameEvent::HostileDestroyed {
                elite: hostile.elite,
                points,
            });
        }
    }

    let player = state.player.bounds();
    let mut rammed = Vec::new();
    state.hostiles.retain(|hostile| {
        let hit = overlaps_with_margin(&player, &hostile.bounds(), margin);
        if hit {
            rammed.push(hostile.bounds().center());
        }
        !hit
    });
    for center in rammed {
        state.spawn_explosion(center);
        events.push(GameEvent::PlayerRammed);
        if state.session.take_damage(tuning.ram_penalty) {
            end_session(state, events);
        }
    }

    // A finished session collects nothing
    if state.phase == GamePhase::GameOver {
        return;
    }

    let mut collected = Vec::new();
    for power_up in &mut state.power_ups {
        if overlaps_with_margin(&player, &power_up.bounds(), margin) {
            power_up.collected = true;
            collected.push((power_up.kind, power_up.bounds().center()));
        }
    }
    state.power_ups.retain(|p| !p.collected);
    for (kind, center) in collected {
        state.session.heal(kind.restore(tuning));
        state.spawn_explosion(center);
        log::debug!("Collected {:?}, health now {}", kind, state.session.health);
        events.push(GameEvent::PowerUpCollected(kind));
    }
}

/// Grant a level each time the score lands on a new multiple of the threshold
fn check_level_up(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let score = state.session.score;
    if score == 0
        || score % tuning.level_threshold != 0
        || score == state.session.last_level_score
    {
        return;
    }

    state.session.level += 1;
    state.session.last_level_score = score;

    let player = &mut state.player;
    player.fire_cooldown_ms =
        (player.fire_cooldown_ms - tuning.fire_cooldown_step_ms).max(tuning.fire_cooldown_floor_ms);
    player.damage += tuning.damage_step;

    log::info!(
        "Level {} reached (cooldown {}ms, damage {})",
        state.session.level,
        player.fire_cooldown_ms,
        player.damage
    );
    events.push(GameEvent::LevelUp {
        level: state.session.level,
    });
}

fn end_session(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase == GamePhase::Running {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{ScriptedRolls, seeded};
    use crate::sim::state::Playfield;
    use proptest::prelude::*;

    /// Rolls that never spawn anything
    fn quiet() -> ScriptedRolls {
        ScriptedRolls::constant(0.99)
    }

    fn running_state() -> GameState {
        let mut state = GameState::new(12345, Playfield::square(400.0), 0, &Tuning::default());
        state.phase = GamePhase::Running;
        state
    }

    /// Ordinary hostile parked just above the player's nose
    fn hostile_in_line_of_fire(state: &GameState) -> Hostile {
        let shot = Projectile::from_player(&state.player);
        Hostile::ordinary(Vec2::new(shot.pos.x - 12.0, shot.pos.y - 100.0), 0.0)
    }

    #[test]
    fn test_projectile_destroys_ordinary_hostile() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let hostile = hostile_in_line_of_fire(&state);
        let mut shot = Projectile::from_player(&state.player);
        shot.pos.y = hostile.pos.y + 10.0;
        state.hostiles.push(hostile);
        state.projectiles.push(shot);

        let mut events = Vec::new();
        resolve_collisions(&mut state, &tuning, &mut events);

        assert!(state.hostiles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.session.score, 10);
        assert_eq!(state.particles.len(), BURST_PARTICLES);
        assert_eq!(
            events,
            vec![GameEvent::HostileDestroyed {
                elite: false,
                points: 10
            }]
        );
    }

    #[test]
    fn test_projectile_hits_at_most_one_hostile() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let first = hostile_in_line_of_fire(&state);
        let mut second = first.clone();
        second.pos.y += 4.0;
        let mut shot = Projectile::from_player(&state.player);
        shot.pos.y = first.pos.y + 10.0;
        state.hostiles.push(first);
        state.hostiles.push(second);
        state.projectiles.push(shot);

        let mut events = Vec::new();
        resolve_collisions(&mut state, &tuning, &mut events);

        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.session.score, 10);
    }

    #[test]
    fn test_elite_takes_damage_without_dying() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let spot = hostile_in_line_of_fire(&state).pos;
        state.hostiles.push(Hostile::elite(spot, 0.0, 30.0));
        let mut shot = Projectile::from_player(&state.player);
        shot.pos.y = spot.y + 10.0;
        state.projectiles.push(shot);

        let mut events = Vec::new();
        resolve_collisions(&mut state, &tuning, &mut events);

        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].health, 29.0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.session.score, 0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_elite_kill_awards_bonus() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let spot = hostile_in_line_of_fire(&state).pos;
        let mut boss = Hostile::elite(spot, 0.0, 30.0);
        boss.health = 1.0;
        state.hostiles.push(boss);
        let mut shot = Projectile::from_player(&state.player);
        shot.pos.y = spot.y + 10.0;
        state.projectiles.push(shot);

        let mut events = Vec::new();
        resolve_collisions(&mut state, &tuning, &mut events);
        assert_eq!(state.session.score, 50);
    }

    #[test]
    fn test_ram_at_low_health_ends_session_same_update() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.session.health = 10;
        let mut hostile = Hostile::ordinary(state.player.pos, 0.0);
        hostile.pos.y += 10.0;
        state.hostiles.push(hostile);

        let events = update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);

        assert_eq!(state.session.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.hostiles.is_empty());
        assert!(events.contains(&GameEvent::PlayerRammed));
        assert!(events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_escaped_hostile_costs_health() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state
            .hostiles
            .push(Hostile::ordinary(Vec2::new(10.0, 399.9), 2.0));

        let events = update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);

        assert!(state.hostiles.is_empty());
        assert_eq!(state.session.health, 90);
        assert_eq!(events, vec![GameEvent::HostileEscaped]);
    }

    #[test]
    fn test_hostile_descends_with_difficulty() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.hostiles.push(Hostile::ordinary(Vec2::new(10.0, 0.0), 2.0));
        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);
        assert_eq!(state.hostiles[0].pos.y, 1.0);
    }

    #[test]
    fn test_projectile_removed_when_fully_above() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let mut shot = Projectile::from_player(&state.player);
        shot.pos.y = -PROJECTILE_HEIGHT + 5.0;
        state.projectiles.push(shot.clone());
        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);
        assert_eq!(state.projectiles.len(), 1);
        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_player_movement_clamped() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..200 {
            update(&mut state, &input, &mut quiet(), &tuning, 0.0);
        }
        assert_eq!(state.player.pos, Vec2::ZERO);

        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..200 {
            update(&mut state, &input, &mut quiet(), &tuning, 0.0);
        }
        assert_eq!(state.player.pos, Vec2::new(350.0, 350.0));
    }

    #[test]
    fn test_no_elite_during_grace_period() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.session.started_at_ms = 1_000.0;
        // Every roll passes: spawn check and elite roll both succeed
        let mut rolls = ScriptedRolls::constant(0.0);

        for frame in 0..900 {
            let now = 1_000.0 + frame as f64 * 16.0;
            assert!(now - 1_000.0 < 15_000.0);
            update(&mut state, &TickInput::default(), &mut rolls, &tuning, now);
            assert!(state.hostiles.iter().all(|h| !h.elite));
        }
    }

    #[test]
    fn test_elite_spawns_after_grace_period() {
        let tuning = Tuning::default();
        let mut state = running_state();
        let mut rolls = ScriptedRolls::constant(0.0);

        let events = update(&mut state, &TickInput::default(), &mut rolls, &tuning, 15_001.0);

        let elite = state.hostiles.iter().find(|h| h.elite).unwrap();
        assert_eq!(elite.max_health, 30.0);
        assert_eq!(elite.health, elite.max_health);
        assert_eq!(elite.speed, 0.5);
        assert!(events.contains(&GameEvent::EliteSpawned));
    }

    #[test]
    fn test_power_up_cooldown() {
        let tuning = Tuning::default();
        let mut state = running_state();
        // Every spawn check passes and the kind roll picks Health
        let mut rolls = ScriptedRolls::constant(0.0);
        let mut try_spawn = |state: &mut GameState, now: f64| {
            let mut events = Vec::new();
            spawn_power_ups(state, &mut rolls, &tuning, now, &mut events);
            events
        };

        assert_eq!(
            try_spawn(&mut state, 100.0),
            vec![GameEvent::PowerUpSpawned(PowerUpKind::Health)]
        );
        assert!(try_spawn(&mut state, 20_000.0).is_empty());
        assert!(try_spawn(&mut state, 30_100.0).is_empty());
        assert_eq!(state.power_ups.len(), 1);
        assert_eq!(try_spawn(&mut state, 30_101.0).len(), 1);
        assert_eq!(state.power_ups.len(), 2);
    }

    #[test]
    fn test_power_up_restores_health_clamped() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.session.health = 80;
        state
            .power_ups
            .push(PowerUp::new(state.player.pos, PowerUpKind::Repair));

        let mut events = Vec::new();
        resolve_collisions(&mut state, &tuning, &mut events);

        assert_eq!(state.session.health, 100);
        assert!(state.power_ups.is_empty());
        assert_eq!(events, vec![GameEvent::PowerUpCollected(PowerUpKind::Repair)]);
    }

    #[test]
    fn test_no_pickup_after_session_ends() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.session.health = 10;
        state
            .hostiles
            .push(Hostile::ordinary(Vec2::new(10.0, 399.9), 2.0));
        state
            .power_ups
            .push(PowerUp::new(state.player.pos, PowerUpKind::Repair));

        let events = update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.session.health, 0);
        assert!(!events.contains(&GameEvent::PowerUpCollected(PowerUpKind::Repair)));
    }

    #[test]
    fn test_power_up_removed_below_playfield() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state
            .power_ups
            .push(PowerUp::new(Vec2::new(10.0, 400.0), PowerUpKind::Health));
        state
            .power_ups
            .push(PowerUp::new(Vec2::new(60.0, 399.0), PowerUpKind::Health));

        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);

        assert_eq!(state.power_ups.len(), 1);
        assert_eq!(state.power_ups[0].pos.x, 60.0);
    }

    #[test]
    fn test_hostile_spawn_threshold() {
        let tuning = Tuning::default();
        // 0.01 base chance scaled by 0.5 difficulty
        let mut state = running_state();
        let mut rolls = ScriptedRolls::new(vec![0.0049, 0.5, 0.5]);
        update(&mut state, &TickInput::default(), &mut rolls, &tuning, 0.0);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].pos.y, SPAWN_Y);

        let mut state = running_state();
        let mut rolls = ScriptedRolls::constant(0.0051);
        update(&mut state, &TickInput::default(), &mut rolls, &tuning, 0.0);
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_stars_wrap_to_top() {
        use crate::sim::state::Star;

        let tuning = Tuning::default();
        let mut state = running_state();
        for i in 0..5 {
            state.stars.push(Star {
                pos: Vec2::new(i as f32 * 50.0, 399.5),
                size: 1.0,
                speed: 1.0 + i as f32 * 0.5,
                opacity: 1.0,
            });
        }

        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);

        for star in &state.stars {
            assert_eq!(star.pos.y, 0.0);
            assert!((0.0..400.0).contains(&star.pos.x));
        }
    }

    #[test]
    fn test_level_up_at_threshold() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.session.score = 40;
        let hostile = hostile_in_line_of_fire(&state);
        let mut shot = Projectile::from_player(&state.player);
        shot.pos.y = hostile.pos.y + 10.0 + PROJECTILE_SPEED;
        state.hostiles.push(hostile);
        state.projectiles.push(shot);

        let events = update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);

        assert_eq!(state.session.score, 50);
        assert_eq!(state.session.level, 2);
        assert_eq!(state.player.fire_cooldown_ms, 140.0);
        assert_eq!(state.player.damage, 1.5);
        assert!(events.contains(&GameEvent::LevelUp { level: 2 }));

        // Staying on the same score does not grant another level
        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);
        assert_eq!(state.session.level, 2);
    }

    #[test]
    fn test_fire_cooldown_floor() {
        let tuning = Tuning::default();
        let mut state = running_state();
        for step in 1..=10u32 {
            state.session.score = step * 50;
            let mut events = Vec::new();
            check_level_up(&mut state, &tuning, &mut events);
        }
        assert_eq!(state.session.level, 11);
        assert_eq!(state.player.fire_cooldown_ms, 100.0);
        assert_eq!(state.player.damage, 6.0);
    }

    #[test]
    fn test_fire_respects_phase_and_cooldown() {
        let mut state = running_state();
        assert!(fire(&mut state, 1000.0));
        assert!(!fire(&mut state, 1100.0));
        assert!(fire(&mut state, 1151.0));
        assert_eq!(state.projectiles.len(), 2);

        state.phase = GamePhase::Paused;
        assert!(!fire(&mut state, 5000.0));
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_particles_expire() {
        let tuning = Tuning::default();
        let mut state = running_state();
        state.spawn_explosion(Vec2::new(200.0, 200.0));
        for _ in 0..PARTICLE_LIFETIME - 1 {
            update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);
        }
        assert_eq!(state.particles.len(), BURST_PARTICLES);
        update(&mut state, &TickInput::default(), &mut quiet(), &tuning, 0.0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let tuning = Tuning::default();
        let mut state1 = running_state();
        let mut state2 = running_state();
        let mut rolls1 = seeded(99999);
        let mut rolls2 = seeded(99999);
        let input = TickInput {
            left: true,
            ..Default::default()
        };

        for frame in 0..2000 {
            let now = frame as f64 * 16.0;
            fire(&mut state1, now);
            fire(&mut state2, now);
            update(&mut state1, &input, &mut rolls1, &tuning, now);
            update(&mut state2, &input, &mut rolls2, &tuning, now);
        }

        assert_eq!(state1.session.score, state2.session.score);
        assert_eq!(state1.session.health, state2.session.health);
        assert_eq!(state1.hostiles.len(), state2.hostiles.len());
        assert_eq!(state1.player.pos, state2.player.pos);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_health_bounded_and_score_monotonic(
            seed in any::<u64>(),
            keys in proptest::collection::vec(any::<(bool, bool, bool, bool, bool)>(), 1..400),
        ) {
            let tuning = Tuning {
                hostile_spawn_chance: 0.2,
                power_up_chance: 0.05,
                power_up_cooldown_ms: 500.0,
                ..Tuning::default()
            };
            let mut state = running_state();
            let mut rolls = seeded(seed);
            let mut last_score = 0;

            for (frame, (left, right, up, down, shoot)) in keys.into_iter().enumerate() {
                let now = frame as f64 * 16.0;
                if shoot {
                    fire(&mut state, now);
                }
                let input = TickInput { left, right, up, down };
                update(&mut state, &input, &mut rolls, &tuning, now);

                prop_assert!((0..=MAX_HEALTH).contains(&state.session.health));
                prop_assert!(state.session.score >= last_score);
                prop_assert!(state.particles.iter().all(|p| p.life > 0));
                prop_assert!(state.power_ups.iter().all(|p| !p.collected));
                prop_assert!(state.hostiles.iter().all(|h| h.health > 0.0));
                last_score = state.session.score;
            }
        }
    }
}
