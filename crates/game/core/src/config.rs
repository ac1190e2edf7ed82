/// Battle-speed setting. Selects the base ATB increment per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl BattleSpeed {
    /// Gauge units added to every unit per tick before status modifiers.
    pub const fn atb_increment(self) -> i32 {
        match self {
            BattleSpeed::Slow => 8,
            BattleSpeed::Medium => 10,
            BattleSpeed::Fast => 14,
        }
    }
}

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub speed: BattleSpeed,
    /// Ipsen's Castle inverts the base damage of player weapon attacks.
    pub ipsens_castle: bool,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_PARTY: usize = 4;
    pub const MAX_ENEMIES: usize = 8;

    // ===== fixed rules =====
    pub const TRANCE_BAR_LENGTH: i32 = 255;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: BattleSpeed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_ipsens_castle(mut self, enabled: bool) -> Self {
        self.ipsens_castle = enabled;
        self
    }
}
