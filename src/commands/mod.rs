mod annotate;
mod classes;
mod show;

pub use annotate::annotate;
pub use classes::classes;
pub use show::show;

use crate::pipeline::BatchReport;

/// Print a batch summary and list every file that needs attention
fn print_report(command: &str, report: &BatchReport) {
    println!("{}: {} spells processed", command, report.processed());
    println!("- written: {}", report.written());
    println!("- unchanged: {}", report.unchanged());
    println!("- skipped: {}", report.skipped());
    println!("- failed: {}", report.failed());
    for (path, reason) in report.problems() {
        eprintln!("{}: {} ({})", command, path.display(), reason);
    }
}

/// Skipped files are reported only; write failures fail the command
fn ensure_written(report: &BatchReport) -> anyhow::Result<()> {
    if report.failed() > 0 {
        anyhow::bail!("{} spell files could not be updated", report.failed());
    }
    Ok(())
}
