//! Cloud capability port.
//!
//! The validators only need to know whether an instance type exists. A live
//! provider client implements `CloudCapabilities` outside this crate;
//! `StaticCatalog` answers from a fixed table.

use std::collections::BTreeMap;

use thiserror::Error;

/// EC2 instance interruption behaviors for spot instances.
pub const INSTANCE_INTERRUPTION_BEHAVIORS: &[&str] = &["hibernate", "stop", "terminate"];

/// Spot allocation strategies accepted in a mixed-instances policy.
pub const SPOT_ALLOCATION_STRATEGIES: &[&str] = &["lowest-price", "capacity-optimized"];

/// Prefix every EC2 security group ID carries.
pub const SECURITY_GROUP_PREFIX: &str = "sg-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceTypeInfo {
    pub name: String,
    pub vcpus: u32,
    pub memory_mib: u64,
}

impl InstanceTypeInfo {
    pub fn new(name: impl Into<String>, vcpus: u32, memory_mib: u64) -> Self {
        InstanceTypeInfo {
            name: name.into(),
            vcpus,
            memory_mib,
        }
    }
}

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("instance type {0:?} is not offered")]
    UnknownInstanceType(String),

    #[error("cloud provider request failed: {0}")]
    Unavailable(String),
}

pub trait CloudCapabilities {
    /// Resolve an instance type name. Any error means the type is unusable.
    fn describe_instance_type(&self, name: &str) -> Result<InstanceTypeInfo, CloudError>;
}

/// In-memory instance-type table.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    types: BTreeMap<String, InstanceTypeInfo>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        StaticCatalog::default()
    }

    /// A catalog of common general-purpose, compute and memory types.
    pub fn with_defaults() -> Self {
        [
            InstanceTypeInfo::new("t2.micro", 1, 1024),
            InstanceTypeInfo::new("t2.medium", 2, 4096),
            InstanceTypeInfo::new("t3.micro", 2, 1024),
            InstanceTypeInfo::new("t3.medium", 2, 4096),
            InstanceTypeInfo::new("t3.large", 2, 8192),
            InstanceTypeInfo::new("m5.large", 2, 8192),
            InstanceTypeInfo::new("m5.xlarge", 4, 16384),
            InstanceTypeInfo::new("m5.2xlarge", 8, 32768),
            InstanceTypeInfo::new("c5.large", 2, 4096),
            InstanceTypeInfo::new("c5.xlarge", 4, 8192),
            InstanceTypeInfo::new("r5.large", 2, 16384),
            InstanceTypeInfo::new("r5.xlarge", 4, 32768),
        ]
        .into_iter()
        .collect()
    }

    /// Catalog of bare names, for callers that only know which types exist.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|n| InstanceTypeInfo::new(n, 0, 0))
            .collect()
    }

    pub fn insert(&mut self, info: InstanceTypeInfo) {
        self.types.insert(info.name.clone(), info);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<InstanceTypeInfo> for StaticCatalog {
    fn from_iter<T: IntoIterator<Item = InstanceTypeInfo>>(iter: T) -> Self {
        let mut catalog = StaticCatalog::new();
        for info in iter {
            catalog.insert(info);
        }
        catalog
    }
}

impl CloudCapabilities for StaticCatalog {
    fn describe_instance_type(&self, name: &str) -> Result<InstanceTypeInfo, CloudError> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| CloudError::UnknownInstanceType(name.to_string()))
    }
}
