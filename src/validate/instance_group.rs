//! AWS rules for a single instance group.

use crate::cloud::{CloudCapabilities, INSTANCE_INTERRUPTION_BEHAVIORS, SPOT_ALLOCATION_STRATEGIES};
use crate::field::{ErrorList, FieldError, Path};
use crate::parse::types::{
    InstanceGroup, InstanceMetadataOptions, MixedInstancesPolicySpec,
};

use super::common::{check_enum, validate_additional_security_groups, validate_instance_type};

/// Spot block durations, in minutes.
const SPOT_DURATIONS: &[&str] = &["60", "120", "180", "240", "300", "360"];
const HTTP_TOKENS: &[&str] = &["optional", "required"];
const HOP_LIMIT_MIN: i64 = 1;
const HOP_LIMIT_MAX: i64 = 64;

/// Run every instance-group rule in order and concatenate the findings.
pub fn validate_instance_group(
    ig: &InstanceGroup,
    cloud: Option<&dyn CloudCapabilities>,
) -> ErrorList {
    let spec = &ig.spec;
    let named = named_spec_path(ig);
    let mut errors = Vec::new();

    errors.extend(validate_additional_security_groups(
        &Path::new(["spec", "additionalSecurityGroups"]),
        &spec.additional_security_groups,
    ));
    errors.extend(validate_instance_type(
        &named.child("machineType"),
        &spec.machine_type,
        cloud,
    ));
    errors.extend(validate_spot_duration(
        &named.child("spotDurationInMinutes"),
        spec.spot_duration_in_minutes,
    ));
    errors.extend(check_enum(
        &named.child("instanceInterruptionBehavior"),
        spec.instance_interruption_behavior.as_deref(),
        INSTANCE_INTERRUPTION_BEHAVIORS,
    ));

    if let Some(policy) = &spec.mixed_instances_policy {
        errors.extend(validate_mixed_instances_policy(
            &Path::new(["spec", "mixedInstancesPolicy"]),
            policy,
            spec.max_size,
            cloud,
        ));
    }

    if let Some(metadata) = &spec.instance_metadata {
        errors.extend(validate_instance_metadata(
            &Path::new(["spec", "instanceMetadata"]),
            metadata,
        ));
    }

    errors
}

/// `<name>.spec`, or plain `spec` for an unnamed group.
fn named_spec_path(ig: &InstanceGroup) -> Path {
    if ig.metadata.name.is_empty() {
        Path::new(["spec"])
    } else {
        Path::new([ig.metadata.name.as_str(), "spec"])
    }
}

pub fn validate_spot_duration(path: &Path, minutes: Option<i64>) -> ErrorList {
    match minutes {
        Some(m) => {
            let rendered = m.to_string();
            check_enum(path, Some(rendered.as_str()), SPOT_DURATIONS)
        }
        None => Vec::new(),
    }
}

pub fn validate_mixed_instances_policy(
    path: &Path,
    policy: &MixedInstancesPolicySpec,
    max_size: Option<i32>,
    cloud: Option<&dyn CloudCapabilities>,
) -> ErrorList {
    let mut errors = Vec::new();

    for (i, instance_type) in policy.instances.iter().enumerate() {
        errors.extend(validate_instance_type(
            &path.child("instances").index(i),
            instance_type,
            cloud,
        ));
    }

    if let Some(base) = policy.on_demand_base {
        let base_path = path.child("onDemandBase");
        if base < 0 {
            errors.push(FieldError::invalid(
                base_path.clone(),
                base,
                "cannot be less than zero",
            ));
        }
        // An unset max size counts as zero.
        if base > i64::from(max_size.unwrap_or(0)) {
            errors.push(FieldError::invalid(
                base_path,
                base,
                "cannot be greater than max size",
            ));
        }
    }

    if let Some(above) = policy.on_demand_above_base {
        let above_path = path.child("onDemandAboveBase");
        if above < 0 {
            errors.push(FieldError::invalid(
                above_path.clone(),
                above,
                "cannot be less than 0",
            ));
        }
        if above > 100 {
            errors.push(FieldError::invalid(
                above_path,
                above,
                "cannot be greater than 100",
            ));
        }
    }

    errors.extend(check_enum(
        &path.child("spotAllocationStrategy"),
        policy.spot_allocation_strategy.as_deref(),
        SPOT_ALLOCATION_STRATEGIES,
    ));

    errors
}

pub fn validate_instance_metadata(path: &Path, options: &InstanceMetadataOptions) -> ErrorList {
    let mut errors = Vec::new();

    errors.extend(check_enum(
        &path.child("httpTokens"),
        options.http_tokens.as_deref(),
        HTTP_TOKENS,
    ));

    if let Some(limit) = options.http_put_response_hop_limit {
        if !(HOP_LIMIT_MIN..=HOP_LIMIT_MAX).contains(&limit) {
            errors.push(FieldError::invalid(
                path.child("httpPutResponseHopLimit"),
                limit,
                "HTTPPutResponseLimit must be a value between 1 and 64",
            ));
        }
    }

    errors
}
