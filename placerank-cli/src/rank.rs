//! The `rank` subcommand.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_core::{Confidence, PlacesDocument, ZeroReviewPolicy};
use placerank_scorer::{RankOptions, rank};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RANK_CONFIDENCE, ARG_RANK_DROP_ZERO_REVIEWS, ARG_RANK_INPUT, ARG_RANK_OUTPUT, CliError,
    ENV_RANK_INPUT, fs, write_json,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Score every place in a JSON places document by the lower \
                 bound of the Wilson score interval around its rating, then \
                 write the document back best first, with a metadata block \
                 describing the ranking.",
    about = "Rank a places document"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct RankArgs {
    /// Path to the JSON places document to rank.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the ranked document here instead of standard output.
    #[arg(long = ARG_RANK_OUTPUT, short = 'o', value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Confidence level of the score interval, strictly between 0 and 1.
    #[arg(long = ARG_RANK_CONFIDENCE, value_name = "level")]
    #[serde(default)]
    pub(crate) confidence: Option<f64>,
    /// Leave places without reviews out of the ranking.
    #[arg(
        long = ARG_RANK_DROP_ZERO_REVIEWS,
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) drop_zero_reviews: Option<bool>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Document to read.
    pub(crate) input: Utf8PathBuf,
    /// Destination file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Confidence level and zero-review policy.
    pub(crate) options: RankOptions,
}

impl RankConfig {
    pub(crate) fn validate_input(&self) -> Result<(), CliError> {
        match fs::is_file(&self.input) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingInputFile {
                path: self.input.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingInputFile {
                    path: self.input.clone(),
                })
            }
            Err(source) => Err(CliError::OpenInput {
                path: self.input.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_RANK_INPUT,
            env: ENV_RANK_INPUT,
        })?;
        let confidence = args
            .confidence
            .map_or(Ok(Confidence::DEFAULT), Confidence::new)
            .map_err(CliError::InvalidConfidence)?;
        let zero_reviews = ZeroReviewPolicy::from_drop_flag(args.drop_zero_reviews.unwrap_or(false));
        Ok(Self {
            input,
            output: args.output,
            options: RankOptions {
                confidence,
                zero_reviews,
            },
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_rank(&config, stdout)
}

/// Rank the configured document, writing to the output file or `stdout`.
pub(crate) fn execute_rank(config: &RankConfig, stdout: &mut dyn Write) -> Result<(), CliError> {
    config.validate_input()?;
    let document = load_places(&config.input)?;
    info!(
        "ranking {} places from {} at {} confidence",
        document.places.len(),
        config.input,
        config.options.confidence
    );

    let ranking = rank(&document.places, &config.options).map_err(CliError::Rank)?;
    let ranked = ranking.into_document();

    match &config.output {
        Some(path) => {
            let mut file = fs::create_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_json(&mut file, &ranked)?;
            info!("wrote {} ranked places to {path}", ranked.places.len());
            Ok(())
        }
        None => write_json(stdout, &ranked),
    }
}

/// Loads a JSON-encoded [`PlacesDocument`] from disk.
pub(crate) fn load_places(path: &Utf8Path) -> Result<PlacesDocument, CliError> {
    let file = fs::open_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
