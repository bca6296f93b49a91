// Simulation - the externally owned loop that drives characters
//
// The host pushes events (named input actions, combat effects from the
// encounter system, end-of-animation signals) and advances time. Events are
// applied in the order they were queued at the start of the next tick.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use glam::Vec3;
use log::{debug, warn};

use crate::engine::game_loop::GameLoop;
use crate::engine::input::{Action, InputConfig, PlayerInput};

use super::characters::{Character, CharacterId, CharacterManager, CharacterStats};

/// Health change requested by the combat/encounter system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEffect {
    Damage(f32),
    DamagePercent(f32),
    Heal(f32),
    HealPercent(f32),
}

/// An event delivered to the simulation by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Named button press/release or axis value from the input layer.
    /// Buttons treat `value != 0.0` as pressed.
    Input {
        character: CharacterId,
        name: String,
        value: f32,
    },
    /// Damage or healing from an external combat system
    Combat {
        character: CharacterId,
        effect: CombatEffect,
    },
    /// The attack animation finished playing
    AttackFinished { character: CharacterId },
}

impl GameEvent {
    /// Button press shorthand
    pub fn press(character: CharacterId, name: &str) -> Self {
        Self::Input {
            character,
            name: name.to_string(),
            value: 1.0,
        }
    }

    /// Button release shorthand
    pub fn release(character: CharacterId, name: &str) -> Self {
        Self::Input {
            character,
            name: name.to_string(),
            value: 0.0,
        }
    }

    /// Axis value shorthand
    pub fn axis(character: CharacterId, name: &str, value: f32) -> Self {
        Self::Input {
            character,
            name: name.to_string(),
            value,
        }
    }

    /// The character this event is addressed to
    pub fn character(&self) -> CharacterId {
        match self {
            Self::Input { character, .. }
            | Self::Combat { character, .. }
            | Self::AttackFinished { character } => *character,
        }
    }
}

/// Errors raised while applying events
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Unknown character: {0}")]
    UnknownCharacter(CharacterId),
}

/// Movement intent produced for one character during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementIntent {
    pub character: CharacterId,
    /// Accumulated movement input (host scales it by `max_walk_speed`)
    pub input: Vec3,
    /// Input clamped to unit length and scaled by `max_walk_speed`
    pub desired_velocity: Vec3,
    pub max_walk_speed: f32,
    pub jump_held: bool,
}

/// Result of one or more ticks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// One intent per character per tick, in tick order
    pub intents: Vec<MovementIntent>,
    /// Events that were dropped because they could not be applied
    pub errors: Vec<SimulationError>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: TickReport) {
        self.intents.extend(other.intents);
        self.errors.extend(other.errors);
    }
}

/// Owns the characters and routes host events into them
#[derive(Debug)]
pub struct Simulation {
    characters: CharacterManager,
    bindings: InputConfig,
    inputs: HashMap<CharacterId, PlayerInput>,
    pending: VecDeque<GameEvent>,
    game_loop: GameLoop,
    tick_count: u64,
}

impl Simulation {
    /// Create a simulation with the given input bindings
    pub fn new(bindings: InputConfig) -> Self {
        Self {
            characters: CharacterManager::new(),
            bindings,
            inputs: HashMap::new(),
            pending: VecDeque::new(),
            game_loop: GameLoop::new(),
            tick_count: 0,
        }
    }

    /// Spawn a character and start tracking its input
    pub fn spawn(&mut self, name: &str, stats: CharacterStats) -> CharacterId {
        let id = self.characters.spawn_character(name, stats);
        self.inputs.insert(id, PlayerInput::new());
        id
    }

    /// Remove a character and its input state
    pub fn despawn(&mut self, id: CharacterId) -> Option<Character> {
        self.inputs.remove(&id);
        self.characters.remove(id)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id)
    }

    pub fn characters(&self) -> &CharacterManager {
        &self.characters
    }

    pub fn bindings(&self) -> &InputConfig {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut InputConfig {
        &mut self.bindings
    }

    pub fn game_loop(&self) -> &GameLoop {
        &self.game_loop
    }

    pub fn game_loop_mut(&mut self) -> &mut GameLoop {
        &mut self.game_loop
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of events waiting for the next tick
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Queue an event for the next tick
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Apply an event immediately
    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), SimulationError> {
        let id = event.character();
        let character = self
            .characters
            .get_mut(id)
            .ok_or(SimulationError::UnknownCharacter(id))?;
        let input = self.inputs.entry(id).or_default();

        match event {
            GameEvent::Input { name, value, .. } => {
                let Some(action) = self.bindings.get_action(&name) else {
                    warn!("No binding for input '{}', dropping", name);
                    return Ok(());
                };
                route_action(character, input, action, value);
            }
            GameEvent::Combat { effect, .. } => apply_combat(character, effect),
            GameEvent::AttackFinished { .. } => character.end_attack(),
        }

        Ok(())
    }

    /// Run one fixed tick: drain queued events, apply held axes, collect intents.
    ///
    /// Events that cannot be applied are reported in the returned
    /// [`TickReport`]; they never stop the tick.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        while let Some(event) = self.pending.pop_front() {
            if let Err(err) = self.dispatch(event) {
                warn!("Dropping event: {}", err);
                report.errors.push(err);
            }
        }

        report.intents.reserve(self.characters.count());
        for character in self.characters.all_mut() {
            if let Some(input) = self.inputs.get(&character.id) {
                apply_axes(character, input, dt);
            }

            report.intents.push(MovementIntent {
                character: character.id,
                desired_velocity: character.desired_velocity(),
                max_walk_speed: character.max_walk_speed(),
                jump_held: character.is_jump_held(),
                input: character.consume_movement_input(),
            });
        }

        self.tick_count += 1;
        report
    }

    /// Feed a frame of real time and run every fixed tick it covers
    pub fn advance(&mut self, frame_time: Duration) -> TickReport {
        let steps = self.game_loop.begin_frame(frame_time);
        let dt = self.game_loop.fixed_timestep();

        let mut report = TickReport::default();
        for _ in 0..steps {
            report.merge(self.tick(dt));
        }
        report
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

/// Route a resolved action into the character
fn route_action(character: &mut Character, input: &mut PlayerInput, action: Action, value: f32) {
    if action.is_axis() {
        match action {
            // Absolute deltas apply once, immediately
            Action::Turn => character.add_yaw_input(value),
            Action::LookUp => character.add_pitch_input(value),
            _ => input.set_axis(action, value),
        }
        return;
    }

    if value != 0.0 {
        if !input.press(action) {
            return;
        }
        debug!("Character {} pressed {}", character.id, action);
        match action {
            Action::LightAttack => {
                character.attack_light();
            }
            Action::HeavyAttack => {
                character.attack_heavy();
            }
            Action::Jump => character.jump(),
            Action::Sprint => character.sprint(),
            _ => {}
        }
    } else if input.release(action) {
        match action {
            Action::Jump => character.stop_jumping(),
            Action::Sprint => character.stop_sprinting(),
            _ => {}
        }
    }
}

/// Apply held rate/movement axes for one tick
fn apply_axes(character: &mut Character, input: &PlayerInput, dt: f32) {
    character.move_forward(input.axis(Action::MoveForward));
    character.move_right(input.axis(Action::MoveRight));
    character.turn_at_rate(input.axis(Action::TurnRate), dt);
    character.look_up_at_rate(input.axis(Action::LookUpRate), dt);
}

fn apply_combat(character: &mut Character, effect: CombatEffect) {
    match effect {
        CombatEffect::Damage(amount) => character.status.take_damage(amount),
        CombatEffect::DamagePercent(percent) => character.status.take_damage_percent(percent),
        CombatEffect::Heal(amount) => character.status.heal_amount(amount),
        CombatEffect::HealPercent(percent) => character.status.heal_percent(percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::AttackKind;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn simulation() -> (Simulation, CharacterId) {
        let mut sim = Simulation::default();
        let id = sim.spawn("Hero", CharacterStats::standard());
        (sim, id)
    }

    #[test]
    fn test_light_attack_input_blocks_movement_until_finished() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::press(id, "LightAttack"));
        sim.push_event(GameEvent::axis(id, "MoveForward", 1.0));

        let intents = sim.tick(DT).intents;
        assert_eq!(intents[0].input, Vec3::ZERO);
        assert!(sim.character(id).unwrap().status.is_attacking());

        sim.push_event(GameEvent::AttackFinished { character: id });
        let intents = sim.tick(DT).intents;
        assert!(sim.character(id).unwrap().status.can_act());
        assert_eq!(intents[0].input, Vec3::X);
    }

    #[test]
    fn test_heavy_ignored_during_light() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::press(id, "LightAttack"));
        sim.push_event(GameEvent::press(id, "HeavyAttack"));
        sim.tick(DT);

        let status = &sim.character(id).unwrap().status;
        assert_eq!(status.attack_type(), Some(AttackKind::Light));
        assert!(status.is_attacking());
    }

    #[test]
    fn test_held_attack_button_does_not_retrigger() {
        let (mut sim, id) = simulation();
        sim.dispatch(GameEvent::press(id, "LightAttack")).unwrap();
        sim.dispatch(GameEvent::AttackFinished { character: id }).unwrap();
        sim.dispatch(GameEvent::press(id, "LightAttack")).unwrap();
        assert!(!sim.character(id).unwrap().status.is_attacking());

        sim.dispatch(GameEvent::release(id, "LightAttack")).unwrap();
        sim.dispatch(GameEvent::press(id, "LightAttack")).unwrap();
        assert!(sim.character(id).unwrap().status.is_attacking());
    }

    #[test]
    fn test_combat_events_follow_scenario() {
        let (mut sim, id) = simulation();
        for effect in [
            CombatEffect::Damage(30.0),
            CombatEffect::Damage(90.0),
            CombatEffect::Heal(15.0),
        ] {
            sim.push_event(GameEvent::Combat { character: id, effect });
        }
        sim.tick(DT);

        assert_eq!(sim.character(id).unwrap().status.current_health(), 15.0);
    }

    #[test]
    fn test_percent_combat_events() {
        let (mut sim, id) = simulation();
        sim.dispatch(GameEvent::Combat {
            character: id,
            effect: CombatEffect::DamagePercent(1.0),
        })
        .unwrap();
        assert_eq!(sim.characters().alive_count(), 0);

        sim.dispatch(GameEvent::Combat {
            character: id,
            effect: CombatEffect::HealPercent(1.0),
        })
        .unwrap();
        assert_eq!(sim.character(id).unwrap().status.current_health(), 100.0);
    }

    #[test]
    fn test_sprint_and_jump_buttons() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::press(id, "Sprint"));
        sim.push_event(GameEvent::press(id, "Jump"));
        let intents = sim.tick(DT).intents;
        assert_eq!(intents[0].max_walk_speed, 900.0);
        assert!(intents[0].jump_held);

        sim.push_event(GameEvent::release(id, "Sprint"));
        sim.push_event(GameEvent::release(id, "Jump"));
        let intents = sim.tick(DT).intents;
        assert_eq!(intents[0].max_walk_speed, 600.0);
        assert!(!intents[0].jump_held);
    }

    #[test]
    fn test_turn_rate_axis_applies_every_tick() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::axis(id, "TurnRate", 1.0));
        sim.tick(0.5);
        sim.tick(0.5);
        assert_relative_eq!(sim.character(id).unwrap().control_rotation().yaw, 45.0);
    }

    #[test]
    fn test_absolute_turn_applies_once() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::axis(id, "Turn", 10.0));
        sim.push_event(GameEvent::axis(id, "LookUp", -5.0));
        sim.tick(DT);
        sim.tick(DT);

        let rotation = sim.character(id).unwrap().control_rotation();
        assert_relative_eq!(rotation.yaw, 10.0);
        assert_relative_eq!(rotation.pitch, -5.0);
    }

    #[test]
    fn test_held_axis_keeps_moving() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::axis(id, "MoveRight", 1.0));
        sim.tick(DT);
        let intents = sim.tick(DT).intents;
        assert_relative_eq!(intents[0].input.y, 1.0, epsilon = 1e-6);

        sim.push_event(GameEvent::axis(id, "MoveRight", 0.0));
        let intents = sim.tick(DT).intents;
        assert_eq!(intents[0].input, Vec3::ZERO);
    }

    #[test]
    fn test_unknown_input_name_is_dropped() {
        let (mut sim, id) = simulation();
        assert!(sim.dispatch(GameEvent::press(id, "ResetVR")).is_ok());
        assert!(sim.character(id).unwrap().status.can_act());
    }

    #[test]
    fn test_rebound_alias_routes_to_action() {
        let (mut sim, id) = simulation();
        sim.bindings_mut().bind("Attack", Action::HeavyAttack);
        sim.dispatch(GameEvent::press(id, "Attack")).unwrap();
        assert_eq!(
            sim.character(id).unwrap().status.attack_type(),
            Some(AttackKind::Heavy)
        );
    }

    #[test]
    fn test_unknown_character_is_reported() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::AttackFinished { character: 42 });
        sim.push_event(GameEvent::Combat {
            character: id,
            effect: CombatEffect::Damage(10.0),
        });

        let report = sim.tick(DT);
        assert_eq!(report.errors, vec![SimulationError::UnknownCharacter(42)]);
        // The valid event behind it still applied
        assert_eq!(sim.character(id).unwrap().status.current_health(), 90.0);
        assert_eq!(sim.pending_events(), 0);
    }

    #[test]
    fn test_bad_event_keeps_other_intents() {
        let (mut sim, id) = simulation();
        let other = sim.spawn("Rival", CharacterStats::standard());
        sim.push_event(GameEvent::axis(id, "MoveForward", 1.0));
        sim.push_event(GameEvent::AttackFinished { character: 99 });
        sim.push_event(GameEvent::axis(other, "MoveRight", 1.0));

        let report = sim.tick(DT);
        assert!(!report.is_clean());
        assert_eq!(report.intents.len(), 2);
        assert_eq!(report.intents[0].character, id);
        assert_eq!(report.intents[0].input, Vec3::X);
        assert_relative_eq!(report.intents[1].input.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_advance_runs_every_counted_step_despite_errors() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::axis(id, "MoveForward", 1.0));
        sim.push_event(GameEvent::AttackFinished { character: 99 });

        let report = sim.advance(Duration::from_millis(51));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.intents.len(), 3);
        assert_eq!(sim.tick_count(), sim.game_loop().update_count());
        assert!(report.intents.iter().all(|intent| intent.input == Vec3::X));
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::axis(id, "MoveForward", 1.0));

        let report = sim.advance(Duration::from_millis(51));
        assert!(report.is_clean());
        assert_eq!(report.intents.len(), 3);
        assert_eq!(sim.tick_count(), 3);
    }

    #[test]
    fn test_intent_carries_desired_velocity() {
        let (mut sim, id) = simulation();
        sim.push_event(GameEvent::press(id, "Sprint"));
        sim.push_event(GameEvent::axis(id, "MoveForward", 1.0));
        sim.push_event(GameEvent::axis(id, "MoveRight", 1.0));

        let intents = sim.tick(DT).intents;
        assert_relative_eq!(intents[0].desired_velocity.length(), 900.0, epsilon = 1e-2);
    }

    #[test]
    fn test_advance_while_paused() {
        let (mut sim, _id) = simulation();
        sim.game_loop_mut().pause();
        assert!(sim.advance(Duration::from_millis(100)).intents.is_empty());
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn test_despawn() {
        let (mut sim, id) = simulation();
        assert!(sim.despawn(id).is_some());
        assert_eq!(
            sim.dispatch(GameEvent::AttackFinished { character: id }),
            Err(SimulationError::UnknownCharacter(id))
        );
    }
}
