//! Place records exchanged between the collector and the ranker.

use geo::Point;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A WGS84 position as reported by the places provider.
///
/// # Examples
/// ```
/// use geo::Point;
/// use placerank_core::LatLng;
///
/// let here = LatLng::new(38.8784, -104.767914);
/// let point: Point<f64> = here.into();
/// assert_eq!(point.x(), -104.767914);
/// assert_eq!(point.y(), 38.8784);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of the prime meridian.
    pub longitude: f64,
}

impl LatLng {
    /// Build a position from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Report whether both components are finite and within WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Self::new(value.longitude, value.latitude)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(value: Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

/// One place with its aggregate rating.
///
/// The serialised form matches the intermediate `restaurants` file: the
/// review count travels as `user_ratings_total` (`rating_count` is accepted
/// on input) and the primary type as `type`. Fields this crate does not
/// model are kept in [`PlaceRecord::extra`] so a rank pass never loses data.
///
/// `rating_count` is signed on purpose: a negative count is a data-quality
/// problem the ranker reports, not a parse failure.
///
/// # Examples
/// ```
/// use placerank_core::PlaceRecord;
///
/// let record: PlaceRecord = serde_json::from_str(
///     r#"{"name":"Taqueria","rating":4.6,"user_ratings_total":812}"#,
/// )?;
/// assert_eq!(record.rating_count, 812);
/// assert!(record.has_reviews());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Display name; not guaranteed to be unique.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Provider identifier used to deduplicate overlapping searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Primary type display text, such as "Mexican Restaurant".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Average star rating on the 1 to 5 scale, absent without reviews.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of ratings behind [`PlaceRecord::rating`].
    #[serde(
        rename = "user_ratings_total",
        alias = "rating_count",
        default,
        deserialize_with = "null_as_default"
    )]
    pub rating_count: i64,
    /// Where the place is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    /// Short formatted address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Link to the place on the provider's map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
    /// Lower confidence bound assigned by the ranker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Unmodelled fields carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlaceRecord {
    /// Construct a record with a name, rating, and review count.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::PlaceRecord;
    ///
    /// let record = PlaceRecord::new("Diner", None, 0);
    /// assert!(!record.has_reviews());
    /// assert!(record.score.is_none());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, rating: Option<f64>, rating_count: i64) -> Self {
        Self {
            name: name.into(),
            place_id: None,
            kind: None,
            rating,
            rating_count,
            location: None,
            address: None,
            maps_url: None,
            score: None,
            extra: Map::new(),
        }
    }

    /// Attach a provider identifier.
    #[must_use]
    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    /// Attach a location.
    #[must_use]
    pub const fn with_location(mut self, location: LatLng) -> Self {
        self.location = Some(location);
        self
    }

    /// Return a copy carrying `score`.
    #[must_use]
    pub fn scored(&self, score: f64) -> Self {
        Self {
            score: Some(score),
            ..self.clone()
        }
    }

    /// Report whether any ratings back this record.
    #[must_use]
    pub const fn has_reviews(&self) -> bool {
        self.rating_count > 0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
