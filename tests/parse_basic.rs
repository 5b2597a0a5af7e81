//! Integration tests for document parsing and the parse + validate entry points.

#[allow(dead_code)]
mod helpers;

use awsvalidate::error::Error;
use awsvalidate::parse::{self, LoadBalancerClass, LoadBalancerType};
use awsvalidate::validate;

#[test]
fn parse_cluster_fixture() {
    let json = include_str!("fixtures/cluster.json");
    let cluster = parse::parse_cluster(json).expect("Should parse");
    assert_eq!(cluster.metadata.name, "prod.example.com");
    assert_eq!(cluster.spec.subnets.len(), 2);

    let lb = cluster
        .spec
        .api
        .as_ref()
        .and_then(|api| api.load_balancer.as_ref())
        .expect("load balancer");
    assert_eq!(lb.class, Some(LoadBalancerClass::Network));
    assert_eq!(lb.lb_type, Some(LoadBalancerType::Internal));
    assert_eq!(lb.subnets[0].private_ipv4_address.as_deref(), Some("172.20.32.10"));
    assert!(lb.subnets[1].allocation_id.is_none());
    assert_eq!(
        cluster
            .spec
            .cloud_config
            .as_ref()
            .and_then(|cc| cc.aws_ebs_csi_driver.as_ref())
            .and_then(|d| d.enabled),
        Some(true)
    );
}

#[test]
fn parse_instance_group_fixture() {
    let json = include_str!("fixtures/instance_group.json");
    let ig = parse::parse_instance_group(json).expect("Should parse");
    assert_eq!(ig.metadata.name, "nodes-us-east-1a");
    assert_eq!(ig.spec.max_size, Some(4));
    assert_eq!(ig.spec.spot_duration_in_minutes, Some(180));
    let policy = ig.spec.mixed_instances_policy.as_ref().expect("policy");
    assert_eq!(policy.instances.len(), 3);
    assert_eq!(policy.on_demand_base, Some(1));
    let metadata = ig.spec.instance_metadata.as_ref().expect("metadata");
    assert_eq!(metadata.http_tokens.as_deref(), Some("required"));
}

#[test]
fn parse_round_trip() {
    let json = include_str!("fixtures/cluster.json");
    let cluster = parse::parse_cluster(json).expect("Should parse");
    let serialized = serde_json::to_string(&cluster).expect("Should serialize");
    assert!(serialized.contains("\"privateIPv4Address\":\"172.20.32.10\""));
    assert!(serialized.contains("\"awsEBSCSIDriver\""));
    let again = parse::parse_cluster(&serialized).expect("Should parse again");
    assert_eq!(again.metadata, cluster.metadata);
    assert_eq!(again.spec.subnets.len(), cluster.spec.subnets.len());
}

#[test]
fn parse_invalid_json_returns_error() {
    let err = parse::parse_cluster("not valid json").unwrap_err();
    assert!(matches!(err, Error::Parse { document: "cluster", .. }));
    assert!(err.field_errors().is_empty());

    let err = parse::parse_instance_group("42").unwrap_err();
    assert!(err.to_string().starts_with("failed to parse instance group JSON"));
}

#[test]
fn parse_rejects_unknown_load_balancer_class() {
    let json = r#"{"spec": {"api": {"loadBalancer": {"class": "Gateway"}}}}"#;
    assert!(parse::parse_cluster(json).is_err());
}

#[test]
fn valid_cluster_fixture_passes() {
    let json = include_str!("fixtures/cluster.json");
    let errors = validate::validate_cluster_json(json).expect("Should parse");
    assert!(errors.is_empty(), "Expected no validation errors, got: {:?}", errors);
}

#[test]
fn invalid_cluster_fixture_reports_everything() {
    let json = include_str!("fixtures/cluster_invalid.json");
    let errors = validate::validate_cluster_json(json).expect("Should parse");
    helpers::assert_identities(
        &errors,
        &[
            "Forbidden::spec.api.loadBalancer.sslPolicy",
            "Forbidden::spec.api.loadBalancer.sslPolicy",
            "Not found::spec.api.loadBalancer.subnets[0].name",
            "Forbidden::spec.api.loadBalancer.subnets[0].allocationID",
            "Forbidden::spec.externalCloudControllerManager",
        ],
    );
}

#[test]
fn valid_instance_group_fixture_passes() {
    let json = include_str!("fixtures/instance_group.json");
    let catalog = helpers::catalog();
    let errors =
        validate::validate_instance_group_json(json, Some(&catalog)).expect("Should parse");
    assert!(errors.is_empty(), "Expected no validation errors, got: {:?}", errors);
}

#[test]
fn instance_group_fixture_against_small_catalog() {
    let json = include_str!("fixtures/instance_group.json");
    let catalog = awsvalidate::cloud::StaticCatalog::from_names(["m5.large"]);
    let errors =
        validate::validate_instance_group_json(json, Some(&catalog)).expect("Should parse");
    helpers::assert_identities(
        &errors,
        &[
            "Invalid value::nodes-us-east-1a.spec.machineType",
            "Invalid value::spec.mixedInstancesPolicy.instances[1]",
            "Invalid value::spec.mixedInstancesPolicy.instances[2]",
        ],
    );
}
