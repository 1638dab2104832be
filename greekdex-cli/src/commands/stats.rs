use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Show directory statistics.
pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    if !db_path.exists() {
        log::warn!("No directory database found at {}", db_path.display());
        log::info!("Run 'greekdex import <batch.json>' to create one.");
        return Ok(());
    }

    let conn = super::open_db(db_path)?;
    let stats = greekdex_db::directory_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;

    log::info!(
        "{}",
        "Directory Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    log::info!("  Universities:   {:>8}", stats.universities);
    log::info!("  Organizations:  {:>8}", stats.organizations);
    log::info!("  Chapters:       {:>8}", stats.chapters);
    log::info!("    Active:       {:>8}", stats.active_chapters);
    log::info!("    Verified:     {:>8}", stats.verified_chapters);
    log::info!("  Officers:       {:>8}", stats.officers);
    log::info!("  Import runs:    {:>8}", stats.import_runs);

    Ok(())
}
