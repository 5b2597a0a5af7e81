//! Rules shared by the cluster and instance-group validators.

use std::collections::HashSet;

use crate::cloud::{CloudCapabilities, SECURITY_GROUP_PREFIX};
use crate::field::{ErrorList, FieldError, Path};

/// Check an optional value against a closed set. Absence is not an error.
pub fn check_enum(path: &Path, value: Option<&str>, allowed: &[&str]) -> ErrorList {
    match value {
        Some(v) if !allowed.contains(&v) => {
            vec![FieldError::unsupported(path.clone(), v, allowed)]
        }
        _ => Vec::new(),
    }
}

/// Validate a list of extra security group IDs.
///
/// Each entry is checked for repetition, blankness and the `sg-` prefix. A blank
/// entry skips the prefix check but the walk continues with the next entry.
pub fn validate_additional_security_groups(path: &Path, groups: &[String]) -> ErrorList {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, group) in groups.iter().enumerate() {
        if !seen.insert(group.as_str()) {
            errors.push(FieldError::duplicate(path.index(i), group.as_str()));
        }
        if group.trim().is_empty() {
            errors.push(FieldError::invalid(
                path.index(i),
                group.as_str(),
                "security group cannot be empty, if specified",
            ));
            continue;
        }
        if !group.starts_with(SECURITY_GROUP_PREFIX) {
            errors.push(FieldError::invalid(
                path.index(i),
                group.as_str(),
                "security group does not match the expected AWS format",
            ));
        }
    }

    errors
}

/// Resolve each comma-separated candidate in `machine_type` against the cloud.
///
/// Every unresolvable candidate is reported at `path` itself. Nothing is checked
/// when the field is empty or no capability port was supplied.
pub fn validate_instance_type(
    path: &Path,
    machine_type: &str,
    cloud: Option<&dyn CloudCapabilities>,
) -> ErrorList {
    let mut errors = Vec::new();
    if machine_type.is_empty() {
        return errors;
    }
    let Some(cloud) = cloud else {
        tracing::trace!(%path, machine_type, "no cloud capabilities, skipping machine type lookup");
        return errors;
    };

    for candidate in machine_type.split(',') {
        if let Err(err) = cloud.describe_instance_type(candidate) {
            tracing::debug!(%path, candidate, error = %err, "instance type lookup failed");
            errors.push(FieldError::invalid(
                path.clone(),
                candidate,
                "machine type specified is invalid",
            ));
        }
    }

    errors
}
