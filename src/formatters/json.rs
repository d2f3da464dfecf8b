use anyhow::Result;

use crate::types::ScaffoldReport;

pub fn format(report: &ScaffoldReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
