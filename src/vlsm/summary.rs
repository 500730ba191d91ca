//! Utilisation figures for a finished allocation.

use serde::Serialize;

use super::subnet::AllocatedSubnet;
use crate::ip::ParentNetwork;

/// How much of the parent network a plan consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSummary {
    pub network: ParentNetwork,
    pub subnet_count: usize,
    /// Addresses in the parent block
    pub capacity: u64,
    /// Addresses taken by allocated blocks, network and broadcast included
    pub addresses_used: u64,
    pub addresses_remaining: u64,
    pub hosts_requested: u64,
    pub hosts_allocated: u64,
    /// Share of granted usable hosts that were actually requested, in percent
    pub host_utilization: f64,
}

impl AllocationSummary {
    pub fn new(network: &ParentNetwork, subnets: &[AllocatedSubnet]) -> Self {
        let capacity = network.capacity();
        let addresses_used: u64 = subnets.iter().map(AllocatedSubnet::block_size).sum();
        let hosts_requested: u64 = subnets.iter().map(|s| u64::from(s.needed_size)).sum();
        let hosts_allocated: u64 = subnets.iter().map(|s| s.allocated_size).sum();

        let host_utilization = if hosts_allocated == 0 {
            0.0
        } else {
            hosts_requested as f64 / hosts_allocated as f64 * 100.0
        };

        AllocationSummary {
            network: *network,
            subnet_count: subnets.len(),
            capacity,
            addresses_used,
            addresses_remaining: capacity.saturating_sub(addresses_used),
            hosts_requested,
            hosts_allocated,
            host_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vlsm::allocate_map;

    #[test]
    fn test_summary_for_classic_plan() {
        let network: ParentNetwork = "192.168.1.0/24".parse().unwrap();
        let subnets = allocate_map(&network, vec![("A", 50), ("B", 30), ("C", 62), ("D", 10)]).unwrap();
        let summary = AllocationSummary::new(&network, &subnets);

        assert_eq!(summary.subnet_count, 4);
        assert_eq!(summary.capacity, 256);
        assert_eq!(summary.addresses_used, 64 + 64 + 32 + 16);
        assert_eq!(summary.addresses_remaining, 80);
        assert_eq!(summary.hosts_requested, 152);
        assert_eq!(summary.hosts_allocated, 62 + 62 + 30 + 14);
        assert!((summary.host_utilization - 152.0 / 168.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let network: ParentNetwork = "10.0.0.0/30".parse().unwrap();
        let summary = AllocationSummary::new(&network, &[]);
        assert_eq!(summary.addresses_remaining, 4);
        assert_eq!(summary.host_utilization, 0.0);
    }
}
