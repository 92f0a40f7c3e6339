use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Metadata ---

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metadata {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// Metadata as written by users in manifests and snapshots.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ObjectMetadata {
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Metadata {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

impl Default for ObjectMetadata {
    fn default() -> Self {
        ObjectMetadata {
            name: Uuid::new_v4().to_string(),
            labels: HashMap::new(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        let id = Uuid::new_v4();
        Metadata {
            id,
            name: id.to_string(),
            labels: HashMap::new(),
        }
    }
}

impl From<ObjectMetadata> for Metadata {
    fn from(user: ObjectMetadata) -> Self {
        Metadata {
            name: user.name,
            labels: user.labels,
            ..Default::default()
        }
    }
}
