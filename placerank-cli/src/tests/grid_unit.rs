//! Focused unit tests covering `grid` configuration and output.

use super::*;
use crate::grid::{DEFAULT_RADIUS_KM, GridConfig, config_from_layers_for_test, execute_grid};
use ortho_config::MergeComposer;
use placerank_collector::{CollectError, DEFAULT_TILE_RADIUS_M};
use placerank_core::LatLng;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(None, Some(-104.77), ARG_GRID_LATITUDE, ENV_GRID_LATITUDE)]
#[case(Some(38.88), None, ARG_GRID_LONGITUDE, ENV_GRID_LONGITUDE)]
fn converting_without_centre_errors(
    #[case] latitude: Option<f64>,
    #[case] longitude: Option<f64>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = GridArgs {
        latitude,
        longitude,
        ..GridArgs::default()
    };

    let err = GridConfig::try_from(args).expect_err("missing centre should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn applies_default_radii() {
    let args = GridArgs {
        latitude: Some(38.88),
        longitude: Some(-104.77),
        ..GridArgs::default()
    };

    let config = GridConfig::try_from(args).expect("config should build");
    assert_eq!(config.center, LatLng::new(38.88, -104.77));
    assert_eq!(config.radius_km, DEFAULT_RADIUS_KM);
    assert_eq!(config.tile_radius_m, DEFAULT_TILE_RADIUS_M);
}

#[rstest]
fn prints_tiles_as_json() {
    let config = GridConfig {
        center: LatLng::new(38.8784, -104.767914),
        radius_km: 1.0,
        tile_radius_m: 500.0,
    };
    let mut stdout = Vec::new();

    execute_grid(&config, &mut stdout).expect("grid should print");

    let printed: Value = serde_json::from_slice(&stdout).expect("stdout is JSON");
    let tiles = printed["tiles"].as_array().expect("tiles array");
    assert_eq!(tiles.len(), 9);
    assert_eq!(
        tiles[0],
        json!({
            "ring": 0,
            "center": {"latitude": 38.8784, "longitude": -104.767914},
            "radius_m": 500.0
        })
    );
    assert!(tiles[1..].iter().all(|tile| tile["ring"] == json!(1)));
}

#[rstest]
fn reports_invalid_centre() {
    let config = GridConfig {
        center: LatLng::new(120.0, 0.0),
        radius_km: 1.0,
        tile_radius_m: 500.0,
    };

    let err = execute_grid(&config, &mut Vec::new()).expect_err("latitude out of range");
    match err {
        CliError::Grid(CollectError::InvalidCenter { latitude, .. }) => {
            assert_eq!(latitude, 120.0);
        }
        other => panic!("expected Grid error, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_prefers_environment_over_file() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "latitude": 51.5, "longitude": -0.12, "radius_km": 5.0 }),
        None,
    );
    composer.push_environment(json!({ "radius_km": 2.0 }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.center, LatLng::new(51.5, -0.12));
    assert_eq!(config.radius_km, 2.0);
    assert_eq!(config.tile_radius_m, DEFAULT_TILE_RADIUS_M);
}
