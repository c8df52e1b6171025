use crate::model::{Condition, EffectCategory};
use crate::rules::{contains_any, first_match, Rule};
use crate::LoweredText;

/// Name fragments that mark a spell as calling something into being
const SUMMON_NAME_WORDS: &[&str] = &[
    "summon",
    "conjure",
    "animate",
    "find",
    "guardian",
    "spiritual weapon",
];

const BUFF_WORDS: &[&str] = &["bonus", "advantage", "add a d", "extra d", "resistance"];

const DEBUFF_WORDS: &[&str] = &["penalty", "disadvantage", "subtract a d", "vulnerability"];

const TRANSFORM_WORDS: &[&str] = &["transform", "polymorph", "shape"];

fn mentions_control_condition(desc: &str) -> bool {
    Condition::ALL
        .iter()
        .filter(|c| c.is_control())
        .any(|c| desc.contains(c.keyword()))
}

fn is_damage(desc: &str) -> bool {
    let offensive = desc.contains("damage") || desc.contains("attack") || desc.contains("hit");
    // "bonus" without "damage" is left to the buff rule
    offensive && (!desc.contains("bonus") || desc.contains("damage"))
}

/// Category rules in precedence order
pub const CATEGORY_RULES: &[Rule<LoweredText, EffectCategory>] = &[
    Rule {
        outcome: EffectCategory::Reaction,
        test: |t| t.time.contains("reaction"),
    },
    Rule {
        outcome: EffectCategory::Summon,
        test: |t| contains_any(&t.name, SUMMON_NAME_WORDS),
    },
    Rule {
        outcome: EffectCategory::Heal,
        test: |t| t.description.contains("regain") && t.description.contains("hit point"),
    },
    Rule {
        outcome: EffectCategory::Damage,
        test: |t| is_damage(&t.description),
    },
    Rule {
        outcome: EffectCategory::Control,
        test: |t| mentions_control_condition(&t.description),
    },
    Rule {
        outcome: EffectCategory::Buff,
        test: |t| contains_any(&t.description, BUFF_WORDS),
    },
    Rule {
        outcome: EffectCategory::Debuff,
        test: |t| contains_any(&t.description, DEBUFF_WORDS),
    },
    Rule {
        outcome: EffectCategory::Transform,
        test: |t| contains_any(&t.description, TRANSFORM_WORDS),
    },
];

pub fn determine_category(text: &LoweredText) -> EffectCategory {
    first_match(CATEGORY_RULES, text).unwrap_or(EffectCategory::Utility)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowered(name: &str, description: &str, time: &str) -> LoweredText {
        LoweredText {
            name: name.to_lowercase(),
            description: description.to_lowercase(),
            time: time.to_lowercase(),
            duration: String::new(),
            range: String::new(),
        }
    }

    fn category(name: &str, description: &str, time: &str) -> EffectCategory {
        determine_category(&lowered(name, description, time))
    }

    #[test]
    fn test_reaction_beats_everything() {
        assert_eq!(
            category("Shield", "You take no damage from magic missile.", "1 Reaction"),
            EffectCategory::Reaction
        );
    }

    #[test]
    fn test_summon_by_name() {
        assert_eq!(
            category("Find Steed", "You summon a spirit.", "10 minutes"),
            EffectCategory::Summon
        );
        assert_eq!(
            category("Spiritual Weapon", "Make a melee spell attack.", "1 bonus action"),
            EffectCategory::Summon
        );
    }

    #[test]
    fn test_heal_before_damage() {
        assert_eq!(
            category("Cure Wounds", "A creature you touch regains hit points. Undead take no damage.", "1 action"),
            EffectCategory::Heal
        );
    }

    #[test]
    fn test_damage_boolean() {
        // "hit" with "bonus" and no "damage" falls through to later rules
        assert_eq!(
            category("Magic Weapon", "The weapon gets a +1 bonus to attack rolls.", "1 bonus action"),
            EffectCategory::Buff
        );
        // "damage" keeps it damage even with "bonus"
        assert_eq!(
            category("Hex", "Deal an extra 1d6 bonus damage.", "1 bonus action"),
            EffectCategory::Damage
        );
        // "hit" without "bonus" is damage
        assert_eq!(
            category("Whip", "On a hit the target is pulled.", "1 action"),
            EffectCategory::Damage
        );
    }

    #[test]
    fn test_control_ignores_invisible() {
        assert_eq!(
            category("Hold Person", "The target must succeed or be paralyzed.", "1 action"),
            EffectCategory::Control
        );
        assert_eq!(
            category("Invisibility", "A creature you touch becomes invisible.", "1 action"),
            EffectCategory::Utility
        );
    }

    #[test]
    fn test_buff_debuff_transform() {
        assert_eq!(
            category("Bless", "Add a d4 to saving throws.", "1 action"),
            EffectCategory::Buff
        );
        assert_eq!(
            category("Bane", "Subtract a d4 from saving throws.", "1 action"),
            EffectCategory::Debuff
        );
        assert_eq!(
            category("Polymorph", "This spell transforms a creature.", "1 action"),
            EffectCategory::Transform
        );
    }

    #[test]
    fn test_utility_fallback() {
        assert_eq!(
            category("Light", "You touch one object that sheds light.", "1 action"),
            EffectCategory::Utility
        );
        assert_eq!(category("", "", ""), EffectCategory::Utility);
    }
}
