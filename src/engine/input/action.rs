// Game action definitions and default bindings

use std::fmt;
use std::str::FromStr;

/// Represents all in-game actions the character responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Buttons
    LightAttack,
    HeavyAttack,
    Jump,
    Sprint,

    // Axes
    MoveForward,
    MoveRight,
    /// Absolute yaw delta (mouse-style)
    Turn,
    /// Normalised yaw rate (stick-style)
    TurnRate,
    /// Absolute pitch delta (mouse-style)
    LookUp,
    /// Normalised pitch rate (stick-style)
    LookUpRate,
}

/// Every action, in declaration order
pub const ALL_ACTIONS: [Action; 10] = [
    Action::LightAttack,
    Action::HeavyAttack,
    Action::Jump,
    Action::Sprint,
    Action::MoveForward,
    Action::MoveRight,
    Action::Turn,
    Action::TurnRate,
    Action::LookUp,
    Action::LookUpRate,
];

impl Action {
    /// Canonical binding name of the action
    pub fn name(&self) -> &'static str {
        match self {
            Self::LightAttack => "LightAttack",
            Self::HeavyAttack => "HeavyAttack",
            Self::Jump => "Jump",
            Self::Sprint => "Sprint",
            Self::MoveForward => "MoveForward",
            Self::MoveRight => "MoveRight",
            Self::Turn => "Turn",
            Self::TurnRate => "TurnRate",
            Self::LookUp => "LookUp",
            Self::LookUpRate => "LookUpRate",
        }
    }

    /// Check if the action carries a continuous value instead of press/release
    pub fn is_axis(&self) -> bool {
        matches!(
            self,
            Self::MoveForward
                | Self::MoveRight
                | Self::Turn
                | Self::TurnRate
                | Self::LookUp
                | Self::LookUpRate
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an action name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action: {0}")]
pub struct ActionParseError(pub String);

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ACTIONS
            .iter()
            .copied()
            .find(|action| action.name() == s)
            .ok_or_else(|| ActionParseError(s.to_string()))
    }
}

/// Default binding table: every action under its canonical name
pub fn default_bindings() -> Vec<(String, Action)> {
    ALL_ACTIONS
        .iter()
        .map(|action| (action.name().to_string(), *action))
        .collect()
}
