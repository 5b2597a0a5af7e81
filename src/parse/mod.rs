//! Parse phase: JSON documents → model types.

pub mod types;

pub use types::*;

use crate::error::Error;

/// Deserialize a cluster JSON document.
pub fn parse_cluster(json: &str) -> Result<Cluster, Error> {
    serde_json::from_str::<Cluster>(json).map_err(|source| Error::Parse {
        document: "cluster",
        source,
    })
}

/// Deserialize an instance-group JSON document.
pub fn parse_instance_group(json: &str) -> Result<InstanceGroup, Error> {
    serde_json::from_str::<InstanceGroup>(json).map_err(|source| Error::Parse {
        document: "instance group",
        source,
    })
}
