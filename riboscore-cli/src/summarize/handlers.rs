use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use riboscore_core::models::score::read_region_scores;
use riboscore_core::models::summary::write_transcript_summaries;
use riboscore_scoring::summarize;

use super::cli;

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a region scores file is required.");

    let default_out = cli::DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let scores = read_region_scores(Path::new(input))?;
    let summaries = summarize(&scores);

    eprintln!(
        "Summarized {} region scores into {} transcripts",
        scores.len(),
        summaries.len()
    );

    write_transcript_summaries(output, &summaries)?;

    Ok(())
}
