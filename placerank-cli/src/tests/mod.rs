//! Shared test harness modules for the placerank CLI.

use super::*;

mod grid_unit;
mod helpers;
mod rank_unit;
