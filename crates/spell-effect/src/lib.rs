//! Heuristic effect classification for spell documents.
//!
//! Derives a structured `effect` record (plus optional `summon` and
//! `condition`) from a spell's free-text fields using ordered keyword and
//! pattern rules. Classification is pure and never fails.

pub mod area;
pub mod category;
pub mod condition;
pub mod model;
pub mod rules;
pub mod summon;
pub mod targets;
pub mod timing;

use anyhow::Result;
use serde::Serialize;
use spell_data::{SpellDocument, SpellText};

pub use model::{
    Area, AreaShape, Condition, CreatureType, DurationUnit, Effect, EffectCategory, SpellDuration,
    Summon, SummonOption, TargetCount, TargetType, Targets, Timing,
};

/// Lower-cased copies of the text fields, computed once per spell
#[derive(Debug, Clone, Default)]
pub struct LoweredText {
    pub name: String,
    pub description: String,
    pub time: String,
    pub duration: String,
    pub range: String,
}

impl LoweredText {
    pub fn new(text: &SpellText) -> Self {
        Self {
            name: text.name.to_lowercase(),
            description: text.description.to_lowercase(),
            time: text.time.to_lowercase(),
            duration: text.duration.to_lowercase(),
            range: text.range.to_lowercase(),
        }
    }
}

/// Everything the classifier derives for one spell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub effect: Effect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summon: Option<Summon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Annotation {
    /// Write the derived fields into a document.
    ///
    /// `effect` is always replaced; `summon` and `condition` are only written
    /// when something was derived, so values from earlier runs survive.
    pub fn apply(&self, doc: &mut SpellDocument) -> Result<()> {
        doc.set("effect", serde_json::to_value(&self.effect)?);
        if let Some(summon) = &self.summon {
            doc.set("summon", serde_json::to_value(summon)?);
        }
        if let Some(condition) = self.condition {
            doc.set("condition", serde_json::to_value(condition)?);
        }
        Ok(())
    }
}

/// Classify one spell from its raw text fields
pub fn classify(text: &SpellText) -> Annotation {
    let lowered = LoweredText::new(text);

    let category = category::determine_category(&lowered);
    let shape = area::determine_shape(&lowered.range, &lowered.description);

    // Find Familiar ignores its duration text
    let (timing, duration) = if text.name == "Find Familiar" {
        (Timing::Duration, Some(SpellDuration::PERMANENT))
    } else {
        (
            timing::determine_timing(text.concentration, &lowered.duration),
            timing::parse_duration(&lowered.duration),
        )
    };

    let effect = Effect {
        category,
        timing,
        duration,
        area: area::build_area(shape, &lowered.description),
        targets: targets::determine_targets(category, shape, &lowered.description),
    };

    let summon = if category == EffectCategory::Summon {
        let options = summon::parse_summon_options(&text.description);
        if !options.is_empty() {
            Some(Summon { options })
        } else if text.name == "Animate Dead" {
            Some(Summon {
                options: vec![summon::ANIMATE_DEAD_OPTION],
            })
        } else {
            None
        }
    } else {
        None
    };

    let condition = condition::detect_condition(&lowered.description);

    tracing::trace!(name = %text.name, ?category, ?timing, ?shape, "classified spell");

    Annotation {
        effect,
        summon,
        condition,
    }
}
