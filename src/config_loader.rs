use crate::config::Plan;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and validate an allocation plan from a YAML file
pub fn load_plan(plan_path: &Path) -> Result<Plan> {
    info!("Loading plan from: {:?}", plan_path);

    let file = File::open(plan_path)
        .wrap_err_with(|| format!("Failed to open plan file '{}'", plan_path.display()))?;

    let plan: Plan = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse plan file '{}'", plan_path.display()))?;

    plan.validate()?;

    info!("Plan requests {} subnets from {}", plan.demands.len(), plan.network);
    Ok(plan)
}
