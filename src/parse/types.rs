//! Serde model of the cluster and instance-group documents.
//!
//! Only the fields the AWS rules read are modelled. Field names follow the
//! document's camelCase spelling; a handful of acronyms are renamed explicitly.

use serde::{Deserialize, Serialize};

// =============================================================================
// SHARED
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// CLUSTER
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ClusterSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub api: Option<AccessSpec>,
    #[serde(default)]
    pub subnets: Vec<ClusterSubnetSpec>,
    pub external_cloud_controller_manager: Option<CloudControllerManagerConfig>,
    pub kube_controller_manager: Option<KubeControllerManagerConfig>,
    pub cloud_config: Option<CloudConfiguration>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSpec {
    pub load_balancer: Option<LoadBalancerAccessSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadBalancerClass {
    Classic,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadBalancerType {
    Public,
    Internal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerAccessSpec {
    pub class: Option<LoadBalancerClass>,
    #[serde(rename = "type")]
    pub lb_type: Option<LoadBalancerType>,
    #[serde(default)]
    pub additional_security_groups: Vec<String>,
    #[serde(default)]
    pub ssl_certificate: String,
    pub ssl_policy: Option<String>,
    #[serde(default)]
    pub subnets: Vec<LoadBalancerSubnetSpec>,
}

impl LoadBalancerAccessSpec {
    pub fn is_network(&self) -> bool {
        self.class == Some(LoadBalancerClass::Network)
    }

    pub fn is_internal(&self) -> bool {
        self.lb_type == Some(LoadBalancerType::Internal)
    }
}

/// A load balancer's binding to one of the cluster's subnets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerSubnetSpec {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "privateIPv4Address")]
    pub private_ipv4_address: Option<String>,
    #[serde(rename = "allocationID")]
    pub allocation_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSubnetSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cidr: String,
    #[serde(default)]
    pub zone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudControllerManagerConfig {
    pub cloud_provider: Option<String>,
    pub cluster_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeControllerManagerConfig {
    #[serde(default)]
    pub external_cloud_volume_plugin: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudConfiguration {
    #[serde(rename = "awsEBSCSIDriver")]
    pub aws_ebs_csi_driver: Option<AwsEbsCsiDriver>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsEbsCsiDriver {
    pub enabled: Option<bool>,
}

// =============================================================================
// INSTANCE GROUP
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroup {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: InstanceGroupSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroupSpec {
    pub role: Option<String>,
    #[serde(default)]
    pub image: String,
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
    /// One type, or a comma-separated list for mixed policies.
    #[serde(default)]
    pub machine_type: String,
    #[serde(default)]
    pub additional_security_groups: Vec<String>,
    pub spot_duration_in_minutes: Option<i64>,
    pub instance_interruption_behavior: Option<String>,
    pub mixed_instances_policy: Option<MixedInstancesPolicySpec>,
    pub instance_metadata: Option<InstanceMetadataOptions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedInstancesPolicySpec {
    #[serde(default)]
    pub instances: Vec<String>,
    pub on_demand_base: Option<i64>,
    pub on_demand_above_base: Option<i64>,
    pub spot_allocation_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMetadataOptions {
    pub http_put_response_hop_limit: Option<i64>,
    pub http_tokens: Option<String>,
}
