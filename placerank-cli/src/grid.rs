//! The `grid` subcommand.

use std::io::Write;

use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_collector::{DEFAULT_TILE_RADIUS_M, SearchGrid};
use placerank_core::LatLng;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_GRID_LATITUDE, ARG_GRID_LONGITUDE, ARG_GRID_RADIUS_KM, ARG_GRID_TILE_RADIUS_M, CliError,
    ENV_GRID_LATITUDE, ENV_GRID_LONGITUDE, write_json,
};

/// Radius searched when none is configured, in kilometres.
pub(crate) const DEFAULT_RADIUS_KM: f64 = 15.0;

/// CLI arguments for the `grid` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "grid",
    long_about = "Lay out the concentric rings of overlapping nearby-search \
                 tiles that cover a circular area, and print them as JSON.",
    about = "Print the search tiles covering an area"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct GridArgs {
    /// Latitude of the search centre in degrees.
    #[arg(long = ARG_GRID_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the search centre in degrees.
    #[arg(long = ARG_GRID_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Radius to cover, in kilometres.
    #[arg(long = ARG_GRID_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Radius of each search tile, in metres.
    #[arg(long = ARG_GRID_TILE_RADIUS_M, value_name = "metres")]
    #[serde(default)]
    pub(crate) tile_radius_m: Option<f64>,
}

impl GridArgs {
    pub(crate) fn into_config(self) -> Result<GridConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GridConfig::try_from(merged)
    }
}

/// Resolved `grid` command configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GridConfig {
    pub(crate) center: LatLng,
    pub(crate) radius_km: f64,
    pub(crate) tile_radius_m: f64,
}

impl TryFrom<GridArgs> for GridConfig {
    type Error = CliError;

    fn try_from(args: GridArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_GRID_LATITUDE,
            env: ENV_GRID_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_GRID_LONGITUDE,
            env: ENV_GRID_LONGITUDE,
        })?;
        Ok(Self {
            center: LatLng::new(latitude, longitude),
            radius_km: args.radius_km.unwrap_or(DEFAULT_RADIUS_KM),
            tile_radius_m: args.tile_radius_m.unwrap_or(DEFAULT_TILE_RADIUS_M),
        })
    }
}

pub(crate) fn run_grid(args: GridArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_grid_with(args, &mut stdout)
}

pub(crate) fn run_grid_with(args: GridArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_grid(&config, writer)
}

pub(crate) fn execute_grid(config: &GridConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let grid = SearchGrid::plan(config.center, config.radius_km, config.tile_radius_m)
        .map_err(CliError::Grid)?;
    info!(
        "planned {} search tiles in {} rings",
        grid.len(),
        grid.rings()
    );
    write_json(writer, &grid)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GridConfig, CliError> {
    let merged = GridArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GridConfig::try_from(merged)
}
