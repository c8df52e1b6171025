use anyhow::Result;
use tracing::debug;

use crate::pipeline::{run_batch, BatchConfig, Change};

/// Classify every spell in the directory and write the derived fields back.
///
/// Every loadable file is rewritten, even when its annotation did not change.
pub async fn annotate(config: &BatchConfig) -> Result<()> {
    let report = run_batch(config, |doc| {
        let annotation = spell_effect::classify(&doc.text());
        annotation.apply(doc)?;
        debug!(
            "{}: {:?}",
            doc.path().display(),
            annotation.effect.category
        );
        Ok(Change::Modified)
    })
    .await?;

    super::print_report("annotate", &report);
    super::ensure_written(&report)
}
