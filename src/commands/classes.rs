use anyhow::Result;
use serde_json::json;
use spell_data::SpellDocument;

use crate::pipeline::{run_batch, BatchConfig, Change};

/// Class list given to spells that do not name their own
pub const DEFAULT_CLASSES: [&str; 8] = [
    "Wizard", "Cleric", "Druid", "Paladin", "Bard", "Sorcerer", "Warlock", "Ranger",
];

/// Add the default class list unless the spell already has one
pub fn tag_classes(doc: &mut SpellDocument) -> Change {
    if doc.contains("classes") {
        return Change::Untouched;
    }
    doc.set("classes", json!(DEFAULT_CLASSES));
    Change::Modified
}

pub async fn classes(config: &BatchConfig) -> Result<()> {
    let report = run_batch(config, |doc| Ok(tag_classes(doc))).await?;
    super::print_report("classes", &report);
    super::ensure_written(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_tag_missing_classes() {
        let mut doc = SpellDocument::new("aid.json", serde_json::Map::new());
        assert_eq!(tag_classes(&mut doc), Change::Modified);
        assert_eq!(
            doc.get("classes"),
            Some(&json!([
                "Wizard", "Cleric", "Druid", "Paladin", "Bard", "Sorcerer", "Warlock", "Ranger"
            ]))
        );
    }

    #[test]
    fn test_keep_existing_classes() {
        let mut fields = serde_json::Map::new();
        fields.insert("classes".to_string(), json!(["Cleric"]));
        let mut doc = SpellDocument::new("bless.json", fields);
        assert_eq!(tag_classes(&mut doc), Change::Untouched);
        assert_eq!(doc.get("classes"), Some(&json!(["Cleric"])));
    }

    #[tokio::test]
    async fn test_classes_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("aid.json"), r#"{"name": "Aid"}"#).unwrap();
        std::fs::write(
            dir.path().join("bless.json"),
            r#"{"name": "Bless", "classes": ["Cleric"]}"#,
        )
        .unwrap();

        let config = BatchConfig {
            spell_dir: dir.path().to_path_buf(),
            jobs: 4,
        };
        classes(&config).await.unwrap();

        let aid: Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("aid.json")).unwrap())
                .unwrap();
        assert_eq!(aid["classes"].as_array().unwrap().len(), 8);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("bless.json")).unwrap(),
            r#"{"name": "Bless", "classes": ["Cleric"]}"#
        );
    }
}
