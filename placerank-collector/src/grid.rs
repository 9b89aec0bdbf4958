//! Concentric rings of overlapping search tiles around a centre.
//!
//! Ring `0` is a single tile on the centre. Ring `r` sits `r * 1.5 * tile
//! radius` away and holds `8 * r` tiles spaced evenly by bearing, so
//! neighbouring tiles overlap and leave no gaps. Rings are added until their
//! spacing covers the requested radius.

use geo::{Destination, Haversine, Point};
use placerank_core::LatLng;
use serde::Serialize;

use crate::CollectError;

/// Tile radius used when the caller does not choose one, in metres.
pub const DEFAULT_TILE_RADIUS_M: f64 = 500.0;

/// Upper bound on the number of searches a single plan may schedule.
pub const MAX_TILES: usize = 10_000;

const RING_SPACING_FACTOR: f64 = 1.5;
const TILES_PER_RING_STEP: usize = 8;

/// One circular search area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchTile {
    /// Ring the tile belongs to; `0` is the centre.
    pub ring: usize,
    /// Centre of the search circle.
    pub center: LatLng,
    /// Radius of the search circle in metres.
    pub radius_m: f64,
}

impl SearchTile {
    /// Build a tile.
    #[must_use]
    pub const fn new(ring: usize, center: LatLng, radius_m: f64) -> Self {
        Self {
            ring,
            center,
            radius_m,
        }
    }
}

/// Ordered search tiles covering a circular area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchGrid {
    center: LatLng,
    radius_km: f64,
    tiles: Vec<SearchTile>,
}

impl SearchGrid {
    /// Plan tiles of `tile_radius_m` covering `radius_km` around `center`.
    ///
    /// # Errors
    /// - [`CollectError::InvalidCenter`] when `center` is not a valid position.
    /// - [`CollectError::InvalidRadius`] unless both radii are finite and
    ///   positive.
    /// - [`CollectError::TooManyTiles`] when the plan would exceed
    ///   [`MAX_TILES`] searches.
    ///
    /// # Examples
    /// ```
    /// use placerank_collector::SearchGrid;
    /// use placerank_core::LatLng;
    ///
    /// let grid = SearchGrid::plan(LatLng::new(51.5, -0.12), 15.0, 500.0)?;
    /// assert_eq!(grid.rings(), 20);
    /// assert_eq!(grid.len(), 1521);
    /// # Ok::<(), placerank_collector::CollectError>(())
    /// ```
    pub fn plan(center: LatLng, radius_km: f64, tile_radius_m: f64) -> Result<Self, CollectError> {
        if !center.is_valid() {
            return Err(CollectError::InvalidCenter {
                latitude: center.latitude,
                longitude: center.longitude,
            });
        }
        ensure_positive("radius_km", radius_km)?;
        ensure_positive("tile_radius_m", tile_radius_m)?;

        let spacing_m = ring_spacing(tile_radius_m);
        let rings = ring_count(radius_km, spacing_m)?;
        let origin = Point::from(center);
        let mut tiles = Vec::with_capacity(tile_count(rings));
        tiles.push(SearchTile::new(0, center, tile_radius_m));
        for ring in 1..rings {
            push_ring(&mut tiles, origin, ring, spacing_m, tile_radius_m);
        }
        Ok(Self {
            center,
            radius_km,
            tiles,
        })
    }

    /// Centre the plan was built around.
    #[must_use]
    pub const fn center(&self) -> LatLng {
        self.center
    }

    /// Radius the plan covers, in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Number of rings, counting the centre tile as ring `0`.
    #[must_use]
    pub fn rings(&self) -> usize {
        self.tiles.last().map_or(0, |tile| tile.ring + 1)
    }

    /// Tiles in search order, innermost ring first.
    #[must_use]
    pub fn tiles(&self) -> &[SearchTile] {
        &self.tiles
    }

    /// Number of tiles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Report whether the plan has no tiles. Valid plans always hold the
    /// centre tile.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), CollectError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CollectError::InvalidRadius { field, value })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "ring spacing scales the tile radius"
)]
fn ring_spacing(tile_radius_m: f64) -> f64 {
    tile_radius_m * RING_SPACING_FACTOR
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "ring count is a bounded ceiling of a positive ratio"
)]
fn ring_count(radius_km: f64, spacing_m: f64) -> Result<usize, CollectError> {
    let rings = (radius_km * 1000.0 / spacing_m).ceil();
    // 4 * r * (r - 1) + 1 > MAX_TILES well before r reaches this bound.
    let ceiling = MAX_TILES as f64;
    if !rings.is_finite() || rings > ceiling {
        return Err(CollectError::TooManyTiles {
            tiles: usize::MAX,
            limit: MAX_TILES,
        });
    }
    let rings = (rings as usize).max(1);
    let tiles = tile_count(rings);
    if tiles > MAX_TILES {
        return Err(CollectError::TooManyTiles {
            tiles,
            limit: MAX_TILES,
        });
    }
    Ok(rings)
}

/// Tiles needed for `rings` rings: one centre plus `8 * r` per outer ring.
const fn tile_count(rings: usize) -> usize {
    if rings == 0 {
        return 0;
    }
    1 + 4 * rings * (rings - 1)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "bearings and distances are derived from ring geometry"
)]
fn push_ring(
    tiles: &mut Vec<SearchTile>,
    origin: Point<f64>,
    ring: usize,
    spacing_m: f64,
    tile_radius_m: f64,
) {
    let points = TILES_PER_RING_STEP * ring;
    let step = 360.0 / points as f64;
    let distance = ring as f64 * spacing_m;
    tiles.extend((0..points).map(|index| {
        let bearing = step * index as f64;
        let center = Haversine.destination(origin, bearing, distance);
        SearchTile::new(ring, LatLng::from(center), tile_radius_m)
    }));
}
