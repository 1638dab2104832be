use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use greekdex_import::{import_batch, parse_batch, ImportOptions, ImportProgress, RunCache};
use greekdex_model::wire::BatchRecord;

use super::open_db;
use crate::CliError;

/// Import one or more batch files into the directory database.
pub(crate) fn run_import(
    db_path: &Path,
    files: &[PathBuf],
    dry_run: bool,
    source: Option<String>,
) -> Result<(), CliError> {
    if files.is_empty() {
        return Err(CliError::other("No batch files given"));
    }

    // Malformed input is the one fatal condition: fail before touching the
    // database rather than import half a batch.
    let mut records: Vec<BatchRecord> = Vec::new();
    for file in files {
        let contents = fs::read_to_string(file)?;
        let mut batch = parse_batch(&contents)
            .map_err(|e| CliError::parse(format!("{}: {}", file.display(), e)))?;
        records.append(&mut batch);
    }

    let conn = open_db(db_path)?;

    let source_name = source.unwrap_or_else(|| {
        files[0]
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("batch")
            .to_string()
    });
    let options = ImportOptions {
        dry_run,
        source_name,
    };

    log::info!(
        "{}",
        format!(
            "Importing {} record(s) from {} file(s) into {}",
            records.len(),
            files.len(),
            db_path.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: nothing will be written".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    let progress = SpinnerProgress { pb: &pb };

    // One cache for the whole run, even across split batch files
    let mut cache = RunCache::new();
    let stats = import_batch(&conn, &records, &options, &mut cache, Some(&progress))
        .map_err(|e| CliError::database(e.to_string()))?;
    pb.finish_and_clear();

    log::info!("");
    log::info!(
        "{}",
        if dry_run {
            "Dry run complete"
        } else {
            "Import complete"
        }
        .if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {} Universities: {} created, {} matched",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.universities_created,
        stats.universities_matched,
    );
    log::info!(
        "  {} Organizations: {} created, {} matched",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.organizations_created,
        stats.organizations_matched,
    );
    log::info!(
        "  {} Chapters: {} created",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.chapters_created,
    );
    if stats.chapters_skipped > 0 {
        log::info!(
            "  {} {} duplicate chapter(s) skipped",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            stats.chapters_skipped,
        );
    }
    if stats.errors > 0 {
        log::info!(
            "  {} {} error(s)",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            stats.errors,
        );
    }

    Ok(())
}

/// Spinner-backed progress reporter for batch imports.
struct SpinnerProgress<'a> {
    pb: &'a ProgressBar,
}

impl ImportProgress for SpinnerProgress<'_> {
    fn on_record(&self, current: usize, total: usize, name: &str) {
        self.pb
            .set_message(format!("[{}/{}] {}", current, total, name));
        self.pb.tick();
    }

    fn on_phase(&self, message: &str) {
        self.pb.set_message(message.to_string());
        self.pb.tick();
    }

    fn on_complete(&self, _message: &str) {
        self.pb.finish_and_clear();
    }
}
