use regex::Regex;
use std::sync::LazyLock;

use crate::model::{CreatureType, SummonOption};
use crate::rules::first_keyword;

static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)").expect("count regex"));

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rating\s+([0-9]+)").expect("rating regex"));

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
];

const CR_FRACTIONS: &[(&str, f64)] = &[("1/2", 0.5), ("1/4", 0.25), ("1/8", 0.125)];

const CREATURE_TYPES: &[(&str, CreatureType)] = &[
    ("beast", CreatureType::Beast),
    ("elemental", CreatureType::Elemental),
    ("fey", CreatureType::Fey),
    ("undead", CreatureType::Undead),
    ("celestial", CreatureType::Celestial),
    ("fiend", CreatureType::Fiend),
    ("monstrosity", CreatureType::Monstrosity),
];

/// Used when "Animate Dead" lists no options of its own
pub const ANIMATE_DEAD_OPTION: SummonOption = SummonOption {
    count: 1,
    max_cr: 0.25,
    creature_type: CreatureType::Undead,
};

fn option_count(line: &str) -> u32 {
    first_keyword(NUMBER_WORDS, line)
        .or_else(|| {
            COUNT_RE
                .captures(line)
                .and_then(|caps| caps[1].parse().ok())
        })
        .unwrap_or(1)
}

fn option_max_cr(line: &str) -> f64 {
    first_keyword(CR_FRACTIONS, line)
        .or_else(|| {
            RATING_RE
                .captures(line)
                .and_then(|caps| caps[1].parse::<f64>().ok())
        })
        .unwrap_or(0.0)
}

fn option_type(line: &str) -> CreatureType {
    first_keyword(CREATURE_TYPES, line).unwrap_or(CreatureType::Creature)
}

/// Parse one option per bulleted ("-") line of a summoning spell's description
pub fn parse_summon_options(description: &str) -> Vec<SummonOption> {
    description
        .split('\n')
        .map(|line| line.trim().to_lowercase())
        .filter(|line| line.starts_with('-'))
        .map(|line| SummonOption {
            count: option_count(&line),
            max_cr: option_max_cr(&line),
            creature_type: option_type(&line),
        })
        .collect()
}
