//! Test helpers for building places documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory addressed with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    pub(super) fn write_places(&self, relative: &str) -> Utf8PathBuf {
        let path = self.path(relative);
        let payload = serde_json::to_vec_pretty(&sample_document()).expect("serialise sample");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn read_json(path: &Utf8Path) -> Value {
    let raw = std::fs::read(path.as_std_path()).expect("read output");
    serde_json::from_slice(&raw).expect("output is JSON")
}

/// Collector output with a hyped newcomer, an established favourite, and a
/// place nobody has reviewed yet.
pub(super) fn sample_document() -> Value {
    json!({
        "restaurants": [
            {
                "name": "Fresh Opening",
                "place_id": "fresh",
                "type": "Ramen Restaurant",
                "rating": 5.0,
                "user_ratings_total": 3
            },
            {
                "name": "Not Yet Reviewed",
                "place_id": "quiet",
                "rating": null,
                "user_ratings_total": 0
            },
            {
                "name": "Old Favourite",
                "place_id": "favourite",
                "type": "Diner",
                "rating": 4.5,
                "user_ratings_total": 500,
                "price_level": 2
            }
        ]
    })
}

pub(super) fn ranked_names(document: &Value) -> Vec<String> {
    document["restaurants"]
        .as_array()
        .expect("restaurants array")
        .iter()
        .map(|place| place["name"].as_str().expect("name").to_owned())
        .collect()
}
