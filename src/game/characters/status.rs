// Character status - health/mana pools and combat gating

use log::{debug, info};

use super::stats::CharacterStats;

/// The kind of attack most recently started by a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Light,
    Heavy,
    Combo,
}

impl AttackKind {
    /// Integer tag used by animation blueprints (0 = light, 1 = heavy, 2 = combo)
    pub fn tag(&self) -> i32 {
        match self {
            Self::Light => 0,
            Self::Heavy => 1,
            Self::Combo => 2,
        }
    }
}

/// Health, mana and attack/stun state for a single character.
///
/// Health is clamped after every damage or heal: damage floors it at 0 and
/// healing caps it at `max_health`. Nothing else is validated, so a negative
/// damage amount heals and a negative heal amount damages.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStatus {
    current_health: f32,
    max_health: f32,
    current_mana: f32,
    max_mana: f32,
    is_attacking: bool,
    is_stunned: bool,
    attack_type: Option<AttackKind>,
}

impl Default for CharacterStatus {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

impl CharacterStatus {
    /// Create a status with full health and mana
    pub fn new(max_health: f32, max_mana: f32) -> Self {
        Self {
            current_health: max_health,
            max_health,
            current_mana: max_mana,
            max_mana,
            is_attacking: false,
            is_stunned: false,
            attack_type: None,
        }
    }

    /// Create a status using the pools from a stats preset
    pub fn from_stats(stats: &CharacterStats) -> Self {
        Self::new(stats.max_health, stats.max_mana)
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn current_mana(&self) -> f32 {
        self.current_mana
    }

    pub fn max_mana(&self) -> f32 {
        self.max_mana
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn is_stunned(&self) -> bool {
        self.is_stunned
    }

    /// Most recently started attack, `None` until the first attack
    pub fn attack_type(&self) -> Option<AttackKind> {
        self.attack_type
    }

    /// Health as a fraction of the maximum (0.0 when max health is 0)
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.current_health / self.max_health
        } else {
            0.0
        }
    }

    /// Check if the character still has health left
    pub fn is_alive(&self) -> bool {
        self.current_health > 0.0
    }

    /// Subtract a flat amount of health
    pub fn take_damage(&mut self, amount: f32) {
        self.apply_damage(amount);
    }

    /// Subtract a fraction of max health (1.0 = 100%)
    pub fn take_damage_percent(&mut self, percent: f32) {
        self.apply_damage(percent * self.max_health);
    }

    /// Add a flat amount of health
    pub fn heal_amount(&mut self, amount: f32) {
        self.apply_heal(amount);
    }

    /// Add a fraction of max health (1.0 = 100%)
    pub fn heal_percent(&mut self, percent: f32) {
        self.apply_heal(percent * self.max_health);
    }

    fn apply_damage(&mut self, amount: f32) {
        let was_alive = self.is_alive();
        self.current_health -= amount;
        if self.current_health < 0.0 {
            self.current_health = 0.0;
        }

        if was_alive && !self.is_alive() {
            info!("Health depleted");
        }
    }

    fn apply_heal(&mut self, amount: f32) {
        self.current_health += amount;
        if self.current_health > self.max_health {
            self.current_health = self.max_health;
        }
    }

    /// Start a light attack. Returns false if another attack is in progress.
    pub fn attack_light(&mut self) -> bool {
        self.begin_attack(AttackKind::Light)
    }

    /// Start a heavy attack. Returns false if another attack is in progress.
    pub fn attack_heavy(&mut self) -> bool {
        self.begin_attack(AttackKind::Heavy)
    }

    /// Select the combo attack.
    ///
    /// Unlike light and heavy attacks this only records the attack type and
    /// leaves `is_attacking` untouched.
    pub fn attack_combo(&mut self) -> bool {
        if self.is_attacking {
            debug!("Combo ignored, attack already in progress");
            return false;
        }

        self.attack_type = Some(AttackKind::Combo);
        true
    }

    fn begin_attack(&mut self, kind: AttackKind) -> bool {
        if self.is_attacking {
            debug!("{:?} attack ignored, attack already in progress", kind);
            return false;
        }

        self.attack_type = Some(kind);
        self.is_attacking = true;
        debug!("{:?} attack started", kind);
        true
    }

    /// Finish the current attack (end-of-animation signal)
    pub fn end_attack(&mut self) {
        self.is_attacking = false;
    }

    /// Set or clear the stun flag
    pub fn set_stunned(&mut self, stunned: bool) {
        self.is_stunned = stunned;
    }

    /// Check if the character accepts movement and action input
    pub fn can_act(&self) -> bool {
        !self.is_attacking && !self.is_stunned
    }
}
