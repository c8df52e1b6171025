use crate::model::Condition;

/// First condition (in priority order, not text order) named by the description
pub fn detect_condition(desc: &str) -> Option<Condition> {
    Condition::ALL
        .into_iter()
        .find(|condition| desc.contains(condition.keyword()))
}
