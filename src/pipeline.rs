use anyhow::Result;
use spell_data::SpellDocument;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Where the spells live and how many files to work on at once
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub spell_dir: PathBuf,
    pub jobs: usize,
}

/// Whether a task modified the document it was handed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Modified,
    Untouched,
}

/// What happened to a single file during a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Unchanged,
    /// The file could not be loaded; the task never ran
    Skipped { reason: String },
    /// The task or the write-back failed
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-file outcomes of a batch run, sorted by path
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.files.len()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Files that were skipped or failed, with the reason
    pub fn problems(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            Outcome::Skipped { reason } | Outcome::Failed { reason } => {
                Some((&f.path, reason.as_str()))
            }
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Run `task` over every spell file in the configured directory.
///
/// Files are handled independently on the blocking pool, at most
/// `config.jobs` at a time. A modified document is written back to its path.
pub async fn run_batch<F>(config: &BatchConfig, task: F) -> Result<BatchReport>
where
    F: Fn(&mut SpellDocument) -> Result<Change> + Send + Sync + 'static,
{
    let files = spell_data::list_spell_files(&config.spell_dir)?;
    info!(
        "Processing {} spells in {}",
        files.len(),
        config.spell_dir.display()
    );

    let task = Arc::new(task);
    let permits = Arc::new(Semaphore::new(config.jobs.max(1)));
    let mut workers = JoinSet::new();

    for path in files {
        let permit = permits.clone().acquire_owned().await?;
        let task = task.clone();
        workers.spawn_blocking(move || {
            let _permit = permit;
            let worker = std::panic::AssertUnwindSafe(|| process_file(path.clone(), &*task));
            std::panic::catch_unwind(worker).unwrap_or_else(|payload| {
                let reason = format!("worker panicked: {}", panic_message(payload.as_ref()));
                warn!("Failed to process {}: {}", path.display(), reason);
                FileOutcome {
                    path,
                    outcome: Outcome::Failed { reason },
                }
            })
        });
    }

    let mut report = BatchReport::default();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(file) => report.files.push(file),
            Err(e) => warn!("Spell worker panicked: {}", e),
        }
    }
    report.files.sort_by(|a, b| a.path.cmp(&b.path));

    info!(
        "Batch finished: {} written, {} unchanged, {} skipped, {} failed",
        report.written(),
        report.unchanged(),
        report.skipped(),
        report.failed()
    );
    Ok(report)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

fn process_file<F>(path: PathBuf, task: &F) -> FileOutcome
where
    F: Fn(&mut SpellDocument) -> Result<Change>,
{
    let outcome = match SpellDocument::load(&path) {
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            Outcome::Skipped {
                reason: e.to_string(),
            }
        }
        Ok(mut doc) => match task(&mut doc) {
            Err(e) => {
                warn!("Failed to process {}: {:#}", path.display(), e);
                Outcome::Failed {
                    reason: format!("{:#}", e),
                }
            }
            Ok(Change::Untouched) => Outcome::Unchanged,
            Ok(Change::Modified) => match doc.save() {
                Ok(()) => {
                    debug!("Wrote {}", path.display());
                    Outcome::Written
                }
                Err(e) => {
                    warn!("{}", e);
                    Outcome::Failed {
                        reason: e.to_string(),
                    }
                }
            },
        },
    };
    FileOutcome { path, outcome }
}
