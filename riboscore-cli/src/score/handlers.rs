use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use riboscore_core::models::QueryRegionSet;
use riboscore_core::models::score::write_region_scores;
use riboscore_scoring::{DEFAULT_CUTOFF, score_regions};
use riboscore_track::{TrackFormat, load_track};

use super::cli;

pub fn run_score(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let regions_file = matches
        .get_one::<String>("regions")
        .expect("A path to a query regions file is required.");

    let signal_file = matches
        .get_one::<String>("signal")
        .expect("A path to a signal track is required.");

    let default_out = cli::DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let cutoff = match matches.get_one::<String>("cutoff") {
        Some(cutoff) => cutoff
            .parse::<u32>()
            .with_context(|| format!("Invalid cutoff: {}", cutoff))?,
        None => DEFAULT_CUTOFF,
    };

    let format = match matches.get_one::<String>("format") {
        Some(format) => Some(TrackFormat::from_str(format)?),
        None => None,
    };

    // coerce arguments to types
    let regions = QueryRegionSet::try_from(Path::new(regions_file))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message(format!("Loading signal track {}...", signal_file));

    let track = load_track(Path::new(signal_file), format)?;

    spinner.set_message(format!("Scoring {} regions...", regions.len()));

    let report = match matches.get_one::<String>("threads") {
        Some(threads) => {
            let threads = threads
                .parse::<usize>()
                .with_context(|| format!("Invalid thread count: {}", threads))?;
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| score_regions(&regions.regions, track.as_ref(), cutoff))
        }
        None => score_regions(&regions.regions, track.as_ref(), cutoff),
    };

    spinner.finish_with_message(format!(
        "Scored {} regions ({} below cutoff, {} invalid)",
        report.scores.len(),
        report.skipped_short,
        report.skipped_invalid,
    ));

    if report.skipped_invalid > 0 {
        eprintln!(
            "Warning: skipped {} regions with end <= start",
            report.skipped_invalid
        );
    }

    write_region_scores(output, &report.scores)?;

    Ok(())
}
