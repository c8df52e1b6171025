use regex::Regex;
use std::sync::LazyLock;

use crate::model::{Area, AreaShape};
use crate::rules::{first_match, Rule};

/// Size patterns per shape. Within a shape the first pattern that matches wins.
static SIZE_PATTERNS: LazyLock<Vec<(AreaShape, Regex)>> = LazyLock::new(|| {
    [
        (AreaShape::Radius, r"([0-9]+)-foot-radius"),
        (AreaShape::Radius, r"([0-9]+)-foot\s+radius"),
        (AreaShape::Radius, r"([0-9]+)-foot\s+sphere"),
        (AreaShape::Cone, r"([0-9]+)-foot cone"),
        (AreaShape::Cube, r"([0-9]+)-foot cube"),
        (AreaShape::Line, r"([0-9]+)-foot line"),
    ]
    .into_iter()
    .map(|(shape, pattern)| (shape, Regex::new(pattern).expect("area size regex")))
    .collect()
});

fn mentions_radius(desc: &str) -> bool {
    desc.contains("radius") || desc.contains("sphere")
}

/// Shapes emanating from the caster, checked when the range is "self"
pub const SELF_SHAPE_RULES: &[Rule<str, AreaShape>] = &[
    Rule {
        outcome: AreaShape::Cone,
        test: |d| d.contains("cone"),
    },
    Rule {
        outcome: AreaShape::Radius,
        test: mentions_radius,
    },
    Rule {
        outcome: AreaShape::Line,
        test: |d| d.contains("line"),
    },
];

/// Shapes placed at range
pub const RANGED_SHAPE_RULES: &[Rule<str, AreaShape>] = &[
    Rule {
        outcome: AreaShape::Radius,
        test: mentions_radius,
    },
    Rule {
        outcome: AreaShape::Cone,
        test: |d| d.contains("cone"),
    },
    Rule {
        outcome: AreaShape::Cube,
        test: |d| d.contains("cube"),
    },
    Rule {
        outcome: AreaShape::Line,
        test: |d| d.contains("line"),
    },
];

/// Pick the area shape from the lower-cased range and description
pub fn determine_shape(range: &str, desc: &str) -> AreaShape {
    if range.contains("self") {
        first_match(SELF_SHAPE_RULES, desc).unwrap_or(AreaShape::Caster)
    } else {
        first_match(RANGED_SHAPE_RULES, desc).unwrap_or(AreaShape::Single)
    }
}

/// Size in feet of `shape` as written in the description, e.g. "20-foot-radius"
pub fn capture_size(shape: AreaShape, desc: &str) -> Option<u32> {
    SIZE_PATTERNS
        .iter()
        .filter(|(s, _)| *s == shape)
        .find_map(|(_, re)| re.captures(desc))
        .and_then(|caps| caps[1].parse().ok())
}

/// Area object for a shape, or `None` for single-target spells
pub fn build_area(shape: AreaShape, desc: &str) -> Option<Area> {
    if shape == AreaShape::Single {
        return None;
    }
    Some(Area::new(shape, capture_size(shape, desc)))
}
