// The simulation state machine: one running state advanced by `tick`.

use super::types::{FrameEvent, FrameSnapshot, InputEvent};
use crate::domain::systems::player_movement::{self, MovementConfig};
use crate::domain::systems::projectiles::ProjectileManager;
use crate::domain::systems::hostile_ai;
use crate::domain::tuning::SimulationConfig;
use crate::domain::{
    Hostile, HostileSnapshot, InputState, Player, PlayerSnapshot, ProjectileSnapshot,
    ViewOrientation,
};
use tracing::{debug, info};

/// All mutable world state, owned by the frame task. Collaborators only ever see
/// [`FrameSnapshot`]s.
pub struct SimulationState {
    config: SimulationConfig,
    tick: u64,
    input: InputState,
    player: Player,
    hostiles: Vec<Hostile>,
    projectiles: ProjectileManager,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Self {
        let hostiles = hostile_ai::spawn_hostiles(&config);
        info!(
            hostile_count = hostiles.len(),
            spawn_radius = config.spawn_radius,
            seed = config.spawn_seed,
            "world initialized"
        );
        Self {
            config,
            tick: 0,
            input: InputState::new(),
            player: Player::at(config.player_start),
            hostiles,
            projectiles: ProjectileManager::new(config.projectile_max_range),
        }
    }

    /// Applies an input notification. Look events belong to the camera and are ignored here.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { code, pressed } => self.input.set_key(code, pressed),
            InputEvent::TriggerPressed => self.input.press_trigger(),
            InputEvent::TriggerReleased => self.input.release_trigger(),
            InputEvent::PointerLock(locked) => {
                debug!(locked, "pointer lock changed");
                self.input.set_pointer_locked(locked);
            }
            InputEvent::Look { .. } => {}
        }
    }

    /// Advances the world by `dt` seconds.
    ///
    /// Order: consume input, move the player, fire, advance projectiles, then steer every
    /// hostile against the player position as it stands after this tick's movement.
    pub fn tick(&mut self, dt: f32, view: &impl ViewOrientation) -> FrameSnapshot {
        let dt = dt.max(0.0);
        let mut events = Vec::new();

        let input = self.input.take_snapshot();

        let movement = MovementConfig {
            walk_speed: self.config.walk_speed,
            sprint_speed: self.config.sprint_speed,
            half_extent: self.config.ground_half_extent,
        };
        player_movement::tick_player(&mut self.player, &input, view, dt, movement);

        if input.fire {
            let origin = self.player.position;
            let direction = view.forward().normalize_or_zero();
            let id = self
                .projectiles
                .spawn(origin, direction, self.config.projectile_speed);
            debug!(projectile_id = id, "projectile fired");
            events.push(FrameEvent::ProjectileFired {
                id,
                origin,
                direction,
            });
        }

        for id in self.projectiles.tick(dt) {
            events.push(FrameEvent::ProjectileExpired { id });
        }

        let player_position = self.player.position;
        hostile_ai::tick_hostiles(
            &mut self.hostiles,
            player_position,
            self.config.hostile_speed,
            dt,
        );

        self.tick += 1;
        self.snapshot(dt, events)
    }

    fn snapshot(&self, dt: f32, events: Vec<FrameEvent>) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            dt,
            player: PlayerSnapshot::from(&self.player),
            hostiles: self.hostiles.iter().map(HostileSnapshot::from).collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(ProjectileSnapshot::from)
                .collect(),
            events,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hostiles(&self) -> &[Hostile] {
        &self.hostiles
    }

    pub fn projectiles(&self) -> &ProjectileManager {
        &self.projectiles
    }
}
