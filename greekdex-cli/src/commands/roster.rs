use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use greekdex_import::{import_roster, parse_roster};

use super::open_db;
use crate::CliError;

/// Import a CSV officer roster for one chapter.
pub(crate) fn run_roster(db_path: &Path, chapter_id: &str, file: &Path) -> Result<(), CliError> {
    let reader = fs::File::open(file)?;
    let officers = parse_roster(reader)
        .map_err(|e| CliError::parse(format!("{}: {}", file.display(), e)))?;

    if officers.is_empty() {
        return Err(CliError::parse(format!(
            "{}: no officer rows found",
            file.display()
        )));
    }

    let conn = open_db(db_path)?;
    let stored = import_roster(&conn, chapter_id, &officers)
        .map_err(|e| CliError::database(e.to_string()))?;

    log::info!(
        "  {} {} officer(s) stored for {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stored,
        chapter_id.if_supports_color(Stdout, |t| t.bold()),
    );

    Ok(())
}
