use anyhow::{Context, Result};
use spell_data::SpellDocument;
use std::path::Path;

/// Print the annotation for one spell file without writing it
pub fn show(file: &Path) -> Result<()> {
    let doc = SpellDocument::load(file)?;
    let annotation = spell_effect::classify(&doc.text());
    let rendered =
        serde_json::to_string_pretty(&annotation).context("Failed to render annotation")?;
    println!("{}", rendered);
    Ok(())
}
