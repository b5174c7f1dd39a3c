//! The tally pipeline: read → parse → ingest → rank → render.

use std::io::{Read, Write};

use tracing::debug;

use crate::data::League;
use crate::options::ParseOptions;
use crate::output::StandingsTable;
use crate::query::{rank, Standings};
use crate::source::parse_records_with;
use crate::Result;

/// Compute standings from input text.
///
/// Any malformed record or invalid outcome aborts the whole computation.
pub fn standings(text: &str, options: &ParseOptions) -> Result<Standings> {
    let records = parse_records_with(text, options)?;
    debug!(records = records.len(), "parsed match records");

    let mut league = League::new();
    for record in &records {
        league.ingest(record)?;
    }
    debug!(teams = league.len(), "ingested match records");

    Ok(rank(&league))
}

/// Read match results from `input` and write the standings table to `output`.
///
/// The table is rendered in memory first; nothing is written unless every
/// record was accepted.
pub fn tally<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    tally_with(input, output, &ParseOptions::default())
}

/// [`tally`] with explicit parse options.
pub fn tally_with<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    options: &ParseOptions,
) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let standings = standings(&text, options)?;
    StandingsTable::from_standings(&standings).write_to(&mut output)?;
    output.flush()?;
    Ok(())
}
