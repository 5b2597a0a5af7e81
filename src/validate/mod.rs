//! AWS-specific validation phase.
//!
//! Layers provider constraints on top of a provider-neutral pass that is assumed
//! to run separately. Every rule returns its own findings; the entry points
//! concatenate them in a fixed order and never stop early.

pub mod cluster;
pub mod common;
pub mod instance_group;

pub use common::check_enum;

use crate::cloud::CloudCapabilities;
use crate::error::Error;
use crate::field::ErrorList;
use crate::parse::types::{Cluster, InstanceGroup};

/// Validate the cluster-wide spec.
pub fn validate_cluster(cluster: &Cluster) -> ErrorList {
    let errors = cluster::validate_cluster(cluster);
    tracing::debug!(
        cluster = %cluster.metadata.name,
        errors = errors.len(),
        "validated cluster"
    );
    errors
}

/// Validate one instance group. Without `cloud`, machine types are not looked up.
pub fn validate_instance_group(
    ig: &InstanceGroup,
    cloud: Option<&dyn CloudCapabilities>,
) -> ErrorList {
    let errors = instance_group::validate_instance_group(ig, cloud);
    tracing::debug!(
        instance_group = %ig.metadata.name,
        cloud = cloud.is_some(),
        errors = errors.len(),
        "validated instance group"
    );
    errors
}

/// Parse + validate a cluster document.
pub fn validate_cluster_json(json: &str) -> Result<ErrorList, Error> {
    let cluster = crate::parse::parse_cluster(json)?;
    Ok(validate_cluster(&cluster))
}

/// Parse + validate an instance-group document.
pub fn validate_instance_group_json(
    json: &str,
    cloud: Option<&dyn CloudCapabilities>,
) -> Result<ErrorList, Error> {
    let ig = crate::parse::parse_instance_group(json)?;
    Ok(validate_instance_group(&ig, cloud))
}

/// Turn a non-empty finding list into `Error::Rejected`.
pub fn ensure_valid(document: &'static str, errors: ErrorList) -> Result<(), Error> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Rejected { document, errors })
    }
}
