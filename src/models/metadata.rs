//! Board, member, list and card metadata consumed by the report layer.
//!
//! The core only ever reads these; they come from the host environment (or,
//! for CLI exports, from a JSON metadata file).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// One card as seen by the report layer: display metadata plus the raw
/// plugin-data fragments accumulated on it. A card may carry several
/// fragments; all of them are parsed and merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub id_list: String,
    #[serde(default)]
    pub plugin_data: Vec<String>,
}

impl CardData {
    /// Placeholder card for ids the metadata file doesn't know about.
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            desc: String::new(),
            labels: Vec::new(),
            id_list: String::new(),
            plugin_data: Vec::new(),
        }
    }
}

/// Shape of the optional `--meta` JSON file passed to `export`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardMetadata {
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub cards: Vec<CardData>,
}
