//! Focused unit tests covering `rank` configuration and execution.

use super::helpers::{Workspace, ranked_names, read_json, write_utf8};
use super::*;
use crate::rank::{RankConfig, config_from_layers_for_test, execute_rank, load_places};
use ortho_config::MergeComposer;
use placerank_core::{Confidence, ScoreError, ZeroReviewPolicy};
use placerank_scorer::{RankError, RankOptions};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config_for(input: camino::Utf8PathBuf) -> RankConfig {
    RankConfig {
        input,
        output: None,
        options: RankOptions::default(),
    }
}

#[rstest]
fn converting_without_input_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing input should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RANK_INPUT);
            assert_eq!(env, ENV_RANK_INPUT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn defaults_retain_places_at_95_percent() {
    let args = RankArgs {
        input: Some("places.json".into()),
        ..RankArgs::default()
    };

    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.options.confidence, Confidence::DEFAULT);
    assert_eq!(config.options.zero_reviews, ZeroReviewPolicy::Retain);
    assert!(config.output.is_none());
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(1.5)]
fn rejects_unusable_confidence(#[case] level: f64) {
    let args = RankArgs {
        input: Some("places.json".into()),
        confidence: Some(level),
        ..RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("confidence should be rejected");
    match err {
        CliError::InvalidConfidence(ScoreError::InvalidConfidence { .. }) => {}
        other => panic!("expected InvalidConfidence, found {other:?}"),
    }
}

#[rstest]
fn validate_input_reports_missing_file(workspace: Workspace) {
    let config = config_for(workspace.path("absent.json"));

    let err = config.validate_input().expect_err("missing input");
    match err {
        CliError::MissingInputFile { path } => assert_eq!(path, workspace.path("absent.json")),
        other => panic!("expected MissingInputFile, found {other:?}"),
    }
}

#[rstest]
fn validate_input_rejects_directories(workspace: Workspace) {
    let dir = workspace.path("places");
    std::fs::create_dir(dir.as_std_path()).expect("create directory");

    let err = config_for(dir).validate_input().expect_err("directory input");
    assert!(matches!(err, CliError::MissingInputFile { .. }));
}

#[rstest]
fn load_places_rejects_invalid_json(workspace: Workspace) {
    let path = workspace.path("broken.json");
    write_utf8(&path, b"{ \"restaurants\": [");

    let err = load_places(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseInput { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn ranks_to_stdout_with_metadata(workspace: Workspace) {
    let config = config_for(workspace.write_places("places.json"));
    let mut stdout = Vec::new();

    execute_rank(&config, &mut stdout).expect("rank should succeed");

    let written: serde_json::Value = serde_json::from_slice(&stdout).expect("stdout is JSON");
    assert_eq!(
        ranked_names(&written),
        ["Old Favourite", "Fresh Opening", "Not Yet Reviewed"]
    );
    assert_eq!(written["restaurants"][2]["score"], json!(0.0));
    assert_eq!(written["restaurants"][0]["price_level"], json!(2));
    let metadata = &written["metadata"];
    assert_eq!(metadata["ranking_method"], "Wilson Score Interval");
    assert_eq!(metadata["confidence_level"], json!(0.95));
    assert_eq!(metadata["total_restaurants"], json!(3));
    assert_eq!(metadata["ranked_restaurants"], json!(3));
    assert_eq!(metadata["dropped_zero_reviews"], json!(0));
}

#[rstest]
fn writes_output_file_creating_parents(workspace: Workspace) {
    let output = workspace.path("out/ranked/places.json");
    let config = RankConfig {
        output: Some(output.clone()),
        options: RankOptions::default().with_zero_reviews(ZeroReviewPolicy::Drop),
        ..config_for(workspace.write_places("places.json"))
    };
    let mut stdout = Vec::new();

    execute_rank(&config, &mut stdout).expect("rank should succeed");

    assert!(stdout.is_empty(), "nothing goes to stdout with --output");
    let written = read_json(&output);
    assert_eq!(ranked_names(&written), ["Old Favourite", "Fresh Opening"]);
    assert_eq!(written["metadata"]["dropped_zero_reviews"], json!(1));
}

#[rstest]
fn malformed_place_aborts_without_output(workspace: Workspace) {
    let input = workspace.path("bad.json");
    write_utf8(
        &input,
        br#"{"restaurants": [{"name": "Ok", "rating": 4.0, "user_ratings_total": 10},
                             {"name": "Broken", "rating": 4.0, "user_ratings_total": -2}]}"#,
    );
    let output = workspace.path("ranked.json");
    let config = RankConfig {
        output: Some(output.clone()),
        ..config_for(input)
    };

    let err = execute_rank(&config, &mut Vec::new()).expect_err("negative count");
    match err {
        CliError::Rank(RankError::InvalidRecord { index, name, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(name, "Broken");
        }
        other => panic!("expected Rank error, found {other:?}"),
    }
    assert!(!output.as_std_path().exists());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "confidence": "high" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "input": "from-file.json",
            "confidence": 0.9,
            "drop_zero_reviews": true,
        }),
        None,
    );
    composer.push_environment(json!({ "confidence": 0.99 }));
    composer.push_cli(json!({ "input": "from-cli.json" }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.input, "from-cli.json");
    assert_eq!(config.options.confidence.get(), 0.99);
    assert_eq!(config.options.zero_reviews, ZeroReviewPolicy::Drop);
}
