use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AllocationError;
use crate::ip::ParentNetwork;
use crate::report::ReportFormat;
use crate::vlsm::Demand;

/// An allocation plan as read from YAML
///
/// ```yaml
/// network: 192.168.1.0/24
/// demands:
///   A: 50
///   B: 30
/// format: table
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Parent network in `A.B.C.D/N` notation
    pub network: String,
    /// Host count per subnet name
    pub demands: BTreeMap<String, i64>,
    /// Preferred report layout, overridden by the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
}

impl Plan {
    /// Validate the plan
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.network.trim().is_empty() {
            return Err(PlanError::InvalidNetwork("network cannot be empty".to_string()));
        }
        self.parent_network()
            .map_err(|e| PlanError::InvalidNetwork(e.to_string()))?;

        if self.demands.is_empty() {
            return Err(PlanError::InvalidDemands("at least one demand is required".to_string()));
        }
        for (name, count) in &self.demands {
            if name.trim().is_empty() {
                return Err(PlanError::InvalidDemands("demand names cannot be empty".to_string()));
            }
            if *count <= 0 {
                return Err(PlanError::InvalidDemands(format!(
                    "demand '{}' must request a positive host count, got {}",
                    name, count
                )));
            }
        }

        Ok(())
    }

    /// Parse the parent network
    pub fn parent_network(&self) -> Result<ParentNetwork, AllocationError> {
        self.network.parse()
    }

    /// Convert the demand mapping into checked demands
    pub fn demands(&self) -> Result<Vec<Demand>, AllocationError> {
        self.demands
            .iter()
            .map(|(name, count)| Demand::from_count(name.as_str(), *count))
            .collect()
    }
}

/// Parse a `NAME=HOSTS` command line demand
pub fn parse_demand_arg(arg: &str) -> Result<Demand, String> {
    let (name, count) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=HOSTS, got '{}'", arg))?;
    let count = count
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("'{}' is not a valid host count", count))?;
    Demand::from_count(name.trim(), count).map_err(|e| e.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid demand configuration: {0}")]
    InvalidDemands(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(network: &str, demands: &[(&str, i64)]) -> Plan {
        Plan {
            network: network.to_string(),
            demands: demands.iter().map(|(n, c)| (n.to_string(), *c)).collect(),
            format: None,
        }
    }

    #[test]
    fn test_validate_plan() {
        assert!(plan("192.168.1.0/24", &[("A", 50)]).validate().is_ok());

        assert!(matches!(plan("", &[("A", 50)]).validate(), Err(PlanError::InvalidNetwork(_))));
        assert!(matches!(plan("192.168.1.0/40", &[("A", 50)]).validate(), Err(PlanError::InvalidNetwork(_))));
        assert!(matches!(plan("192.168.1.0/24", &[]).validate(), Err(PlanError::InvalidDemands(_))));
        assert!(matches!(plan("192.168.1.0/24", &[("A", 0)]).validate(), Err(PlanError::InvalidDemands(_))));
        assert!(matches!(plan("192.168.1.0/24", &[("A", -3)]).validate(), Err(PlanError::InvalidDemands(_))));
        assert!(matches!(plan("192.168.1.0/24", &[(" ", 3)]).validate(), Err(PlanError::InvalidDemands(_))));
    }

    #[test]
    fn test_plan_demands() {
        let demands = plan("10.0.0.0/8", &[("b", 20), ("a", 10)]).demands().unwrap();
        assert_eq!(demands, vec![Demand::new("a", 10), Demand::new("b", 20)]);
    }

    #[test]
    fn test_parse_plan_yaml() {
        let yaml = r#"
network: 10.10.0.0/16
demands:
  servers: 200
  printers: 12
format: json
"#;
        let plan: Plan = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plan.network, "10.10.0.0/16");
        assert_eq!(plan.demands.get("servers"), Some(&200));
        assert_eq!(plan.format, Some(ReportFormat::Json));
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_parse_demand_arg() {
        assert_eq!(parse_demand_arg("A=50"), Ok(Demand::new("A", 50)));
        assert_eq!(parse_demand_arg(" lab = 12 "), Ok(Demand::new("lab", 12)));
        assert!(parse_demand_arg("A").is_err());
        assert!(parse_demand_arg("A=lots").is_err());
        assert!(parse_demand_arg("A=0").is_err());
        assert!(parse_demand_arg("A=-1").is_err());
    }
}
