use serde::{Deserialize, Serialize};

/// Candidate node as seen by the scheduler.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub allocatable: Resources,
}

/// Resource quantities, cpu in millicores and memory in bytes.
///
/// Signed so that hosts can report overcommitted nodes as negative values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Resources {
    #[serde(default)]
    pub cpu: i64,
    #[serde(default)]
    pub memory: i64,
}

impl Resources {
    pub fn with_memory(memory: i64) -> Self {
        Self { cpu: 0, memory }
    }
}

impl Node {
    pub fn new(name: &str, allocatable: Resources) -> Self {
        Node {
            name: name.to_string(),
            allocatable,
        }
    }
}
