//! AWS rules for the cluster-wide spec: the API load balancer and the
//! external cloud-controller-manager integration.

use std::net::{IpAddr, Ipv4Addr};

use crate::field::{ErrorList, FieldError, Path};
use crate::parse::types::{
    Cluster, ClusterSpec, ClusterSubnetSpec, LoadBalancerAccessSpec, LoadBalancerSubnetSpec,
};

use super::common::validate_additional_security_groups;

/// Volume plugin name that wires the external CCM to AWS storage.
const AWS_VOLUME_PLUGIN: &str = "aws";

/// Run every cluster rule in order and concatenate the findings.
pub fn validate_cluster(cluster: &Cluster) -> ErrorList {
    let spec = &cluster.spec;
    let mut errors = Vec::new();

    if let Some(lb) = spec.api.as_ref().and_then(|api| api.load_balancer.as_ref()) {
        let lb_path = Path::new(["spec", "api", "loadBalancer"]);
        errors.extend(validate_additional_security_groups(
            &lb_path.child("additionalSecurityGroups"),
            &lb.additional_security_groups,
        ));
        errors.extend(validate_ssl_policy(&lb_path.child("sslPolicy"), lb));
        errors.extend(validate_load_balancer_subnets(
            &lb_path.child("subnets"),
            lb,
            &spec.subnets,
        ));
    }

    errors.extend(validate_external_cloud_controller_manager(spec));

    errors
}

/// A TLS policy needs a Network load balancer and a certificate.
pub fn validate_ssl_policy(path: &Path, lb: &LoadBalancerAccessSpec) -> ErrorList {
    let mut errors = Vec::new();

    if lb.ssl_policy.is_some() {
        if !lb.is_network() {
            errors.push(FieldError::forbidden(
                path.clone(),
                "sslPolicy should be specified with Network Load Balancer",
            ));
        }
        if lb.ssl_certificate.is_empty() {
            errors.push(FieldError::forbidden(
                path.clone(),
                "sslPolicy should not be specified without SSLCertificate",
            ));
        }
    }

    errors
}

pub fn validate_load_balancer_subnets(
    path: &Path,
    lb: &LoadBalancerAccessSpec,
    cluster_subnets: &[ClusterSubnetSpec],
) -> ErrorList {
    let mut errors = Vec::new();

    for (i, binding) in lb.subnets.iter().enumerate() {
        errors.extend(validate_subnet_binding(
            &path.index(i),
            binding,
            lb,
            cluster_subnets,
        ));
    }

    errors
}

fn validate_subnet_binding(
    path: &Path,
    binding: &LoadBalancerSubnetSpec,
    lb: &LoadBalancerAccessSpec,
    cluster_subnets: &[ClusterSubnetSpec],
) -> ErrorList {
    let mut errors = Vec::new();

    let mut resolved: Option<&ClusterSubnetSpec> = None;
    if binding.name.is_empty() {
        errors.push(FieldError::required(
            path.child("name"),
            "subnet name can't be empty",
        ));
    } else {
        resolved = cluster_subnets.iter().find(|cs| cs.name == binding.name);
        if resolved.is_none() {
            errors.push(FieldError::not_found(
                path.child("name"),
                binding.name.as_str(),
                format!("subnet {:?} not found in cluster subnets", binding.name),
            ));
        }
    }

    if let Some(address) = &binding.private_ipv4_address {
        let ip_path = path.child("privateIPv4Address");
        if address.is_empty() {
            errors.push(FieldError::required(
                ip_path.clone(),
                "privateIPv4Address can't be empty",
            ));
        } else {
            match address.parse::<Ipv4Addr>() {
                Err(_) => errors.push(FieldError::invalid(
                    ip_path.clone(),
                    address.as_str(),
                    "privateIPv4Address is not a valid IPv4 address",
                )),
                Ok(ip) => {
                    // An unparsable subnet CIDR is left to the base validation pass.
                    let outside = resolved
                        .and_then(|subnet| cidr_contains(&subnet.cidr, ip))
                        .is_some_and(|contained| !contained);
                    if outside {
                        errors.push(FieldError::invalid(
                            ip_path.clone(),
                            address.as_str(),
                            "privateIPv4Address is not part of the subnet CIDR",
                        ));
                    }
                }
            }
        }
        if !(lb.is_network() && lb.is_internal()) {
            errors.push(FieldError::forbidden(
                ip_path,
                "privateIPv4Address only allowed for internal NLBs",
            ));
        }
    }

    if let Some(allocation_id) = &binding.allocation_id {
        let alloc_path = path.child("allocationID");
        if allocation_id.is_empty() {
            errors.push(FieldError::required(
                alloc_path.clone(),
                "allocationID can't be empty",
            ));
        }
        if !lb.is_network() || lb.is_internal() {
            errors.push(FieldError::forbidden(
                alloc_path,
                "allocationID only allowed for Public NLBs",
            ));
        }
    }

    errors
}

/// Whether `ip` falls inside `cidr`. `None` when the CIDR does not parse.
/// An IPv6 block never contains an IPv4 address.
fn cidr_contains(cidr: &str, ip: Ipv4Addr) -> Option<bool> {
    let (network, prefix) = cidr.split_once('/')?;
    let prefix: u32 = prefix.parse().ok()?;
    match network.parse::<IpAddr>().ok()? {
        IpAddr::V4(network) => {
            if prefix > 32 {
                return None;
            }
            let mask = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
            Some(u32::from(network) & mask == u32::from(ip) & mask)
        }
        IpAddr::V6(_) => (prefix <= 128).then_some(false),
    }
}

/// An external CCM needs AWS storage wired up one way or the other.
pub fn validate_external_cloud_controller_manager(spec: &ClusterSpec) -> ErrorList {
    let mut errors = Vec::new();

    if spec.external_cloud_controller_manager.is_some() {
        let volume_plugin = spec
            .kube_controller_manager
            .as_ref()
            .is_some_and(|kcm| kcm.external_cloud_volume_plugin == AWS_VOLUME_PLUGIN);
        let csi_driver = spec
            .cloud_config
            .as_ref()
            .and_then(|cc| cc.aws_ebs_csi_driver.as_ref())
            .and_then(|driver| driver.enabled)
            .unwrap_or(false);

        if !volume_plugin && !csi_driver {
            errors.push(FieldError::forbidden(
                Path::new(["spec", "externalCloudControllerManager"]),
                "AWS external CCM cannot be used without enabling \
                 spec.cloudConfig.awsEBSCSIDriver or setting \
                 spec.kubeControllerManager.externalCloudVolumePlugin to `aws`",
            ));
        }
    }

    errors
}
