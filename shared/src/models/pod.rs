use serde::{Deserialize, Serialize};

use crate::models::metadata::{Metadata, ObjectMetadata};

/// Workload unit. Only its identity and labels matter to the scheduler.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Pod {
    pub metadata: Metadata,
}

/// Pod as it appears in a manifest.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PodManifest {
    pub metadata: ObjectMetadata,
}

impl From<PodManifest> for Pod {
    fn from(manifest: PodManifest) -> Self {
        Pod {
            metadata: manifest.metadata.into(),
        }
    }
}
