use serde::{Serialize, Serializer};

/// What a spell mainly does. Exactly one category applies per spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectCategory {
    Damage,
    Heal,
    Buff,
    Debuff,
    Control,
    Summon,
    Transform,
    Reaction,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timing {
    Instant,
    Duration,
    Concentration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationUnit {
    Round,
    Minute,
    Hour,
    Day,
    Permanent,
}

impl DurationUnit {
    /// Parse the lower-case singular unit word captured from duration text
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "round" => Some(Self::Round),
            "minute" => Some(Self::Minute),
            "hour" => Some(Self::Hour),
            "day" => Some(Self::Day),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpellDuration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl SpellDuration {
    pub const PERMANENT: Self = Self {
        value: 1,
        unit: DurationUnit::Permanent,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaShape {
    /// Centered on the caster with no further footprint
    #[serde(rename = "SELF")]
    Caster,
    /// No area at all; never serialized as an area object
    Single,
    Radius,
    Cone,
    Line,
    Cube,
    Cylinder,
}

impl AreaShape {
    /// Shapes whose footprint catches every creature inside it
    pub fn covers_area(self) -> bool {
        matches!(
            self,
            Self::Radius | Self::Cone | Self::Line | Self::Cube | Self::Cylinder
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Feet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Area {
    pub shape: AreaShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<LengthUnit>,
}

impl Area {
    pub fn new(shape: AreaShape, size_feet: Option<u32>) -> Self {
        Self {
            shape,
            size: size_feet,
            units: size_feet.map(|_| LengthUnit::Feet),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    Ally,
    Enemy,
    Creature,
}

/// How many creatures a spell affects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCount {
    Exact(u32),
    AllInArea,
}

impl Serialize for TargetCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Exact(n) => serializer.serialize_u32(*n),
            Self::AllInArea => serializer.serialize_str("ALL_IN_AREA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Targets {
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub count: TargetCount,
}

/// Derived classification written to a spell's `effect` field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Effect {
    pub category: EffectCategory,
    pub timing: Timing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<SpellDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    pub targets: Targets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureType {
    Beast,
    Elemental,
    Fey,
    Undead,
    Celestial,
    Fiend,
    Monstrosity,
    Creature,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummonOption {
    pub count: u32,
    #[serde(rename = "maxCR")]
    pub max_cr: f64,
    #[serde(rename = "type")]
    pub creature_type: CreatureType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summon {
    pub options: Vec<SummonOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Paralyzed,
    Stunned,
    Charmed,
    Blinded,
    Deafened,
    Unconscious,
    Prone,
    Restrained,
    Frightened,
    Poisoned,
    Incapacitated,
    Invisible,
}

impl Condition {
    /// Every condition, in tagging priority order
    pub const ALL: [Self; 12] = [
        Self::Paralyzed,
        Self::Stunned,
        Self::Charmed,
        Self::Blinded,
        Self::Deafened,
        Self::Unconscious,
        Self::Prone,
        Self::Restrained,
        Self::Frightened,
        Self::Poisoned,
        Self::Incapacitated,
        Self::Invisible,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Paralyzed => "paralyzed",
            Self::Stunned => "stunned",
            Self::Charmed => "charmed",
            Self::Blinded => "blinded",
            Self::Deafened => "deafened",
            Self::Unconscious => "unconscious",
            Self::Prone => "prone",
            Self::Restrained => "restrained",
            Self::Frightened => "frightened",
            Self::Poisoned => "poisoned",
            Self::Incapacitated => "incapacitated",
            Self::Invisible => "invisible",
        }
    }

    /// Conditions that make a spell count as crowd control.
    /// Invisibility is tagged but does not control the target.
    pub fn is_control(self) -> bool {
        !matches!(self, Self::Invisible)
    }
}
