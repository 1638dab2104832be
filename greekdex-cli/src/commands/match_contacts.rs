use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use greekdex_import::match_contacts;
use greekdex_model::wire::MatchContactsRequest;

use super::open_db;
use crate::CliError;

/// Match a chapter-lookup request file against the directory.
pub(crate) fn run_match_contacts(
    db_path: &Path,
    request_path: &Path,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let contents = fs::read_to_string(request_path)?;
    let request: MatchContactsRequest = serde_json::from_str(&contents)
        .map_err(|e| CliError::parse(format!("{}: {}", request_path.display(), e)))?;

    let conn = open_db(db_path)?;
    let response =
        match_contacts(&conn, &request).map_err(|e| CliError::database(e.to_string()))?;

    let json = serde_json::to_string_pretty(&response)
        .map_err(|e| CliError::other(e.to_string()))?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Response written to {}", path.display());
        }
        None => println!("{json}"),
    }

    log::info!(
        "  {} {} of {} matched",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        response.summary.matched,
        response.summary.total_input,
    );
    if response.summary.unmatched > 0 {
        log::info!(
            "  {} {} unmatched",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            response.summary.unmatched,
        );
    }

    Ok(())
}
