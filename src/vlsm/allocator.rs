//! VLSM allocation.
//!
//! Demands are processed largest first. Each one is sized, laid out at the
//! cursor and the cursor moves past the whole block, so blocks are contiguous
//! and never overlap. Any failure aborts the plan.

use super::demand::{sort_demands, validate_demands, Demand};
use super::sizer::size_demand;
use super::subnet::{format_subnet, AllocatedSubnet};
use crate::error::AllocationError;
use crate::ip::{block_size, ParentNetwork};

/// Next free address inside the parent network
#[derive(Debug)]
struct AddressCursor {
    next: u64,
    end: u64,
}

impl AddressCursor {
    fn new(parent: &ParentNetwork) -> Self {
        AddressCursor {
            next: u64::from(parent.base_bits()),
            end: parent.end_bits(),
        }
    }

    /// Addresses left between the cursor and the end of the parent block
    fn remaining(&self) -> u64 {
        (self.end + 1).saturating_sub(self.next)
    }

    /// Claim `size` addresses, returning the start of the claimed block
    fn reserve(&mut self, size: u64) -> Option<u32> {
        if size > self.remaining() {
            return None;
        }
        let start = u32::try_from(self.next).ok()?;
        self.next += size;
        Some(start)
    }
}

/// Carve `demands` out of `parent`.
///
/// Returns the subnets in allocation order: host count descending, ties by
/// ascending name.
///
/// # Examples
/// ```
/// use vlsm::ip::ParentNetwork;
/// use vlsm::vlsm::{allocate, Demand};
///
/// let parent: ParentNetwork = "192.168.1.0/24".parse()?;
/// let subnets = allocate(&parent, &[Demand::new("office", 50), Demand::new("lab", 10)])?;
///
/// assert_eq!(subnets[0].name, "office");
/// assert_eq!(subnets[0].address.to_string(), "192.168.1.0");
/// assert_eq!(subnets[1].address.to_string(), "192.168.1.64");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn allocate(parent: &ParentNetwork, demands: &[Demand]) -> Result<Vec<AllocatedSubnet>, AllocationError> {
    validate_demands(demands)?;

    let sorted = sort_demands(demands);
    let mut cursor = AddressCursor::new(parent);
    let mut subnets = Vec::with_capacity(sorted.len());

    log::info!("Allocating {} subnets from {}", sorted.len(), parent);

    for demand in &sorted {
        let prefix = size_demand(demand)?;
        let size = block_size(prefix);

        let start = cursor.reserve(size).ok_or_else(|| AllocationError::AddressSpaceExhausted {
            name: demand.name.clone(),
            block_size: size,
            remaining: cursor.remaining(),
            network: parent.to_string(),
        })?;

        let subnet = format_subnet(&demand.name, demand.hosts, start, prefix)?;
        log::debug!(
            "Allocated {}{} to {} ({} hosts requested, {} usable)",
            subnet.address,
            subnet.mask_notation(),
            subnet.name,
            subnet.needed_size,
            subnet.allocated_size
        );
        subnets.push(subnet);
    }

    log::info!("Allocation complete, {} addresses left in {}", cursor.remaining(), parent);
    Ok(subnets)
}

/// Allocate from a `name -> host count` mapping
pub fn allocate_map<I, K>(parent: &ParentNetwork, demands: I) -> Result<Vec<AllocatedSubnet>, AllocationError>
where
    I: IntoIterator<Item = (K, u32)>,
    K: Into<String>,
{
    let demands: Vec<Demand> = demands
        .into_iter()
        .map(|(name, hosts)| Demand::new(name, hosts))
        .collect();
    allocate(parent, &demands)
}
