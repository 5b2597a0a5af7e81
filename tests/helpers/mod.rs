use awsvalidate::cloud::StaticCatalog;
use awsvalidate::field::{FieldError, identities};
use awsvalidate::parse::*;

// =============================================================================
// Instance group builders
// =============================================================================

/// An instance group named `test-nodes` with the given spec.
pub fn named_ig(spec: InstanceGroupSpec) -> InstanceGroup {
    InstanceGroup {
        metadata: ObjectMeta {
            name: "test-nodes".into(),
        },
        spec,
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The catalog the instance-group tests resolve machine types against.
pub fn catalog() -> StaticCatalog {
    StaticCatalog::with_defaults()
}

// =============================================================================
// Cluster builders
// =============================================================================

/// A cluster whose API load balancer has the given class/type and subnet bindings,
/// with cluster subnets `names` all sharing `10.0.0.0/24`.
pub fn cluster_with_lb(
    class: Option<LoadBalancerClass>,
    lb_type: Option<LoadBalancerType>,
    names: &[&str],
    bindings: Vec<LoadBalancerSubnetSpec>,
) -> Cluster {
    Cluster {
        metadata: ObjectMeta {
            name: "test.example.com".into(),
        },
        spec: ClusterSpec {
            api: Some(AccessSpec {
                load_balancer: Some(LoadBalancerAccessSpec {
                    class,
                    lb_type,
                    subnets: bindings,
                    ..Default::default()
                }),
            }),
            subnets: names
                .iter()
                .map(|n| ClusterSubnetSpec {
                    name: n.to_string(),
                    cidr: "10.0.0.0/24".into(),
                    zone: "us-east-1a".into(),
                })
                .collect(),
            ..Default::default()
        },
    }
}

/// Internal Network load balancer over subnets a, b, c.
pub fn internal_nlb(bindings: Vec<LoadBalancerSubnetSpec>) -> Cluster {
    cluster_with_lb(
        Some(LoadBalancerClass::Network),
        Some(LoadBalancerType::Internal),
        &["a", "b", "c"],
        bindings,
    )
}

pub fn binding(name: &str, ip: Option<&str>, allocation_id: Option<&str>) -> LoadBalancerSubnetSpec {
    LoadBalancerSubnetSpec {
        name: name.into(),
        private_ipv4_address: ip.map(String::from),
        allocation_id: allocation_id.map(String::from),
    }
}

pub fn load_balancer_mut(cluster: &mut Cluster) -> &mut LoadBalancerAccessSpec {
    cluster
        .spec
        .api
        .as_mut()
        .and_then(|api| api.load_balancer.as_mut())
        .expect("cluster should have a load balancer")
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_identities(errors: &[FieldError], expected: &[&str]) {
    assert_eq!(
        identities(errors),
        expected.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        "full errors: {:#?}",
        errors
    );
}
