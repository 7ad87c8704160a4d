//! テスト用のメモリ上の取得元

#![allow(dead_code)]

use park_map::source::ParkSource;
use park_map_common::{DataLoadError, Index, Park};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

pub fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("fixture読み込み失敗")
}

pub fn fixture_index() -> Index {
    serde_json::from_str(&fixture("index.json")).expect("index.jsonが不正")
}

pub fn fixture_park(code: &str) -> Park {
    serde_json::from_str(&fixture(&format!("{}.json", code))).expect("park jsonが不正")
}

/// Index/Parkをメモリに持つ取得元
#[derive(Default)]
pub struct MemorySource {
    pub index: Option<Index>,
    pub parks: HashMap<String, Park>,
    pub failing: RefCell<HashSet<String>>,
    pub requests: RefCell<Vec<String>>,
}

impl MemorySource {
    /// fixturesのARCH/YELLを持つ取得元
    pub fn with_fixtures() -> Self {
        let mut parks = HashMap::new();
        parks.insert("ARCH".to_string(), fixture_park("ARCH"));
        parks.insert("YELL".to_string(), fixture_park("YELL"));
        Self {
            index: Some(fixture_index()),
            parks,
            ..Default::default()
        }
    }

    pub fn fail_park(&self, code: &str) {
        self.failing.borrow_mut().insert(code.to_string());
    }

    pub fn heal_park(&self, code: &str) {
        self.failing.borrow_mut().remove(code);
    }
}

impl ParkSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch_index(&self) -> Result<Index, DataLoadError> {
        self.requests.borrow_mut().push("index.json".to_string());
        self.index
            .clone()
            .ok_or_else(|| DataLoadError::new("memory/index.json", "HTTP 503 Service Unavailable"))
    }

    async fn fetch_park(&self, code: &str) -> Result<Park, DataLoadError> {
        let endpoint = format!("memory/parks/{}.json", code);
        self.requests.borrow_mut().push(format!("parks/{}.json", code));
        if self.failing.borrow().contains(code) {
            return Err(DataLoadError::new(endpoint, "HTTP 500 Internal Server Error"));
        }
        self.parks
            .get(code)
            .cloned()
            .ok_or_else(|| DataLoadError::new(endpoint, "HTTP 404 Not Found"))
    }
}
