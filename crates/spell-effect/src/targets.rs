use crate::model::{AreaShape, EffectCategory, TargetCount, TargetType, Targets};
use crate::rules::contains_any;

/// Phrases that state an explicit number of targets, checked in order
const COUNT_PHRASES: &[(&[&str], u32)] = &[
    (&["three creatures", "up to three"], 3),
    (&["two creatures", "up to two"], 2),
    (&["ten creatures"], 10),
    (&["twelve creatures"], 12),
];

pub fn target_type(category: EffectCategory) -> TargetType {
    match category {
        EffectCategory::Heal => TargetType::Ally,
        EffectCategory::Damage | EffectCategory::Debuff | EffectCategory::Control => {
            TargetType::Enemy
        }
        _ => TargetType::Creature,
    }
}

/// Number of targets from the area shape and the lower-cased description
pub fn target_count(shape: AreaShape, desc: &str) -> TargetCount {
    if shape.covers_area() {
        return TargetCount::AllInArea;
    }
    COUNT_PHRASES
        .iter()
        .find(|(phrases, _)| contains_any(desc, phrases))
        .map(|(_, count)| TargetCount::Exact(*count))
        .unwrap_or(TargetCount::Exact(1))
}

pub fn determine_targets(category: EffectCategory, shape: AreaShape, desc: &str) -> Targets {
    Targets {
        target_type: target_type(category),
        count: target_count(shape, desc),
    }
}
