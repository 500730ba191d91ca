//! Host-count demands and their allocation order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

/// A named request for a subnet with at least `hosts` usable addresses
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Demand {
    pub name: String,
    pub hosts: u32,
}

impl Demand {
    pub fn new(name: impl Into<String>, hosts: u32) -> Self {
        Demand {
            name: name.into(),
            hosts,
        }
    }

    /// Build a demand from a signed count as found in plan files and on the
    /// command line, rejecting counts that are not positive or do not fit
    /// in the IPv4 address space.
    pub fn from_count(name: impl Into<String>, count: i64) -> Result<Self, AllocationError> {
        let name = name.into();
        if count <= 0 {
            return Err(AllocationError::invalid_demand(
                &name,
                format!("host count must be positive, got {}", count),
            ));
        }
        let hosts = u32::try_from(count).map_err(|_| {
            AllocationError::invalid_demand(&name, format!("host count {} exceeds the IPv4 address space", count))
        })?;
        Ok(Demand { name, hosts })
    }
}

/// Check every demand has a non-empty unique name and a positive host count
pub fn validate_demands(demands: &[Demand]) -> Result<(), AllocationError> {
    let mut seen = HashSet::new();

    for demand in demands {
        if demand.name.trim().is_empty() {
            return Err(AllocationError::invalid_demand(&demand.name, "name cannot be empty"));
        }
        if demand.hosts == 0 {
            return Err(AllocationError::invalid_demand(&demand.name, "host count must be positive, got 0"));
        }
        if !seen.insert(demand.name.as_str()) {
            return Err(AllocationError::invalid_demand(&demand.name, "duplicate name"));
        }
    }

    Ok(())
}

/// Order demands largest first.
///
/// Equal host counts are ordered by ascending name so the same input always
/// produces the same plan.
pub fn sort_demands(demands: &[Demand]) -> Vec<Demand> {
    let mut sorted = demands.to_vec();
    sorted.sort_by(|a, b| b.hosts.cmp(&a.hosts).then_with(|| a.name.cmp(&b.name)));
    sorted
}
