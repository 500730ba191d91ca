//! Allocation report rendering.
//!
//! Three layouts are supported:
//!
//! - `tsv`: one tab-separated line per subnet in the order
//!   `name, needed, allocated, address, /N, mask, first - last, broadcast`.
//!   Downstream tooling may depend on this exact layout.
//! - `table`: the same fields, column-aligned under a header
//! - `json`: network, subnets and optional summary as a JSON document

use serde::{Deserialize, Serialize};

use crate::ip::ParentNetwork;
use crate::vlsm::{AllocatedSubnet, AllocationSummary};

/// Output layout for an allocation report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab-separated, one subnet per line
    #[default]
    Tsv,
    /// Column-aligned table with a header
    Table,
    /// JSON document
    Json,
}

const TABLE_HEADER: [&str; 8] = [
    "Name",
    "Needed",
    "Allocated",
    "Address",
    "Mask",
    "Dec Mask",
    "Usable Range",
    "Broadcast",
];

fn subnet_fields(subnet: &AllocatedSubnet) -> [String; 8] {
    [
        subnet.name.clone(),
        subnet.needed_size.to_string(),
        subnet.allocated_size.to_string(),
        subnet.address.to_string(),
        subnet.mask_notation(),
        subnet.decimal_mask.to_string(),
        subnet.range_text(),
        subnet.broadcast.to_string(),
    ]
}

/// Render subnets as tab-separated lines
pub fn render_tsv(subnets: &[AllocatedSubnet]) -> String {
    let mut output = String::new();
    for subnet in subnets {
        output.push_str(&subnet_fields(subnet).join("\t"));
        output.push('\n');
    }
    output
}

/// Render subnets as a column-aligned table
pub fn render_table(subnets: &[AllocatedSubnet]) -> String {
    let rows: Vec<[String; 8]> = subnets.iter().map(subnet_fields).collect();

    let mut widths = TABLE_HEADER.map(str::len);
    for row in &rows {
        for (width, field) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(field.len());
        }
    }

    let format_row = |fields: &[&str]| -> String {
        let cells: Vec<String> = fields
            .iter()
            .zip(widths.iter())
            .map(|(field, width)| format!("{:<width$}", field, width = width))
            .collect();
        format!("{}\n", cells.join("  ").trim_end())
    };

    let mut output = format_row(&TABLE_HEADER);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format_row(&rule.iter().map(String::as_str).collect::<Vec<_>>()));
    for row in &rows {
        output.push_str(&format_row(&row.iter().map(String::as_str).collect::<Vec<_>>()));
    }
    output
}

/// Render the utilisation summary as `key: value` lines
pub fn render_summary(summary: &AllocationSummary) -> String {
    format!(
        "Network: {}\n\
         Subnets: {}\n\
         Addresses used: {} of {} ({} remaining)\n\
         Hosts requested: {}\n\
         Hosts allocated: {}\n\
         Host utilization: {:.1}%\n",
        summary.network,
        summary.subnet_count,
        summary.addresses_used,
        summary.capacity,
        summary.addresses_remaining,
        summary.hosts_requested,
        summary.hosts_allocated,
        summary.host_utilization,
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    network: &'a ParentNetwork,
    subnets: &'a [AllocatedSubnet],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<AllocationSummary>,
}

/// Render the full report in the requested layout
pub fn render_report(
    network: &ParentNetwork,
    subnets: &[AllocatedSubnet],
    format: ReportFormat,
    include_summary: bool,
) -> Result<String, serde_json::Error> {
    let summary = include_summary.then(|| AllocationSummary::new(network, subnets));

    let output = match format {
        ReportFormat::Json => {
            let report = JsonReport { network, subnets, summary };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        ReportFormat::Tsv | ReportFormat::Table => {
            let mut text = if format == ReportFormat::Tsv {
                render_tsv(subnets)
            } else {
                render_table(subnets)
            };
            if let Some(summary) = &summary {
                text.push('\n');
                text.push_str(&render_summary(summary));
            }
            text
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vlsm::allocate_map;

    fn classic_plan() -> (ParentNetwork, Vec<AllocatedSubnet>) {
        let network: ParentNetwork = "192.168.1.0/24".parse().unwrap();
        let subnets = allocate_map(&network, vec![("A", 50), ("B", 30), ("C", 62), ("D", 10)]).unwrap();
        (network, subnets)
    }

    #[test]
    fn test_tsv_layout() {
        let (_, subnets) = classic_plan();
        let tsv = render_tsv(&subnets);
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "C\t62\t62\t192.168.1.0\t/26\t255.255.255.192\t192.168.1.1 - 192.168.1.62\t192.168.1.63"
        );
        assert_eq!(
            lines[3],
            "D\t10\t14\t192.168.1.160\t/28\t255.255.255.240\t192.168.1.161 - 192.168.1.174\t192.168.1.175"
        );
    }

    #[test]
    fn test_table_layout() {
        let (_, subnets) = classic_plan();
        let table = render_table(&subnets);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Name  Needed  Allocated  Address"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].starts_with("C     62      62         192.168.1.0"));
        assert!(lines.iter().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_json_report() {
        let (network, subnets) = classic_plan();
        let json = render_report(&network, &subnets, ReportFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["network"], "192.168.1.0/24");
        assert_eq!(value["subnets"][0]["name"], "C");
        assert_eq!(value["subnets"][0]["decimal_mask"], "255.255.255.192");
        assert_eq!(value["subnets"][0]["usable_range"]["first"], "192.168.1.1");
        assert_eq!(value["subnets"][2]["prefix_length"], 27);
        assert_eq!(value["summary"]["addresses_remaining"], 80);
    }

    #[test]
    fn test_json_without_summary() {
        let (network, subnets) = classic_plan();
        let json = render_report(&network, &subnets, ReportFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("summary").is_none());
    }

    #[test]
    fn test_summary_appended_to_text() {
        let (network, subnets) = classic_plan();
        let text = render_report(&network, &subnets, ReportFormat::Tsv, true).unwrap();
        assert!(text.contains("Addresses used: 176 of 256 (80 remaining)"));
        assert!(text.contains("Host utilization: 90.5%"));

        let plain = render_report(&network, &subnets, ReportFormat::Tsv, false).unwrap();
        assert_eq!(plain, render_tsv(&subnets));
    }
}
