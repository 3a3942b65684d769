mod filter;
mod score;
mod summarize;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "riboscore";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Score how much sequencing-signal support there is for a set of genomic regions, then roll the scores up per transcript.")
        .subcommand_required(true)
        .subcommand(score::cli::create_score_cli())
        .subcommand(summarize::cli::create_summarize_cli())
        .subcommand(filter::cli::create_filter_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // REGION SCORING
        //
        Some((score::cli::SCORE_CMD, matches)) => {
            score::handlers::run_score(matches)?;
        }

        //
        // TRANSCRIPT SUMMARY
        //
        Some((summarize::cli::SUMMARIZE_CMD, matches)) => {
            summarize::handlers::run_summarize(matches)?;
        }

        //
        // OVERLAP EXCLUSION
        //
        Some((filter::cli::FILTER_CMD, matches)) => {
            filter::handlers::run_filter(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn score_args_parse() {
        let matches = build_parser()
            .try_get_matches_from([
                consts::BIN_NAME,
                "score",
                "-g",
                "regions.tsv",
                "-r",
                "signal.bed",
                "-c",
                "25",
            ])
            .unwrap();

        let (cmd, matches) = matches.subcommand().unwrap();
        assert_eq!(cmd, score::cli::SCORE_CMD);
        assert_eq!(
            matches.get_one::<String>("regions").unwrap(),
            "regions.tsv"
        );
        assert_eq!(matches.get_one::<String>("cutoff").unwrap(), "25");
        assert!(matches.get_one::<String>("output").is_none());
    }

    #[test]
    fn score_requires_regions_and_signal() {
        let result = build_parser().try_get_matches_from([
            consts::BIN_NAME,
            "score",
            "-g",
            "regions.tsv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn summarize_requires_input() {
        let result = build_parser().try_get_matches_from([
            consts::BIN_NAME,
            "summarize",
            "-o",
            "out.tsv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn filter_requires_input_and_exclusions() {
        let result = build_parser().try_get_matches_from([
            consts::BIN_NAME,
            "filter",
            "-i",
            "summary.tsv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        let result = build_parser().try_get_matches_from([consts::BIN_NAME]);
        assert!(result.is_err());
    }
}
