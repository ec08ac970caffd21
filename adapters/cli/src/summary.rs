use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use site_clearing_core::{Direction, Position, Termination};
use site_clearing_system_accounting::CostReport;
use site_clearing_system_bulldozer::Bulldozer;
use site_clearing_world::query;

/// Machine-readable record of a finished clearing session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct SessionSummary {
    /// Descriptions of the accepted commands in issue order.
    pub(crate) history: Vec<String>,
    /// Itemised costs and their total.
    pub(crate) costs: CostReport,
    /// Reason the session ended.
    pub(crate) termination: Termination,
    /// Square the bulldozer occupied when the session ended.
    pub(crate) final_position: Position,
    /// Direction the bulldozer faced when the session ended.
    pub(crate) final_facing: Direction,
    /// Clearable squares left untouched on the site.
    pub(crate) uncleared_squares: u64,
}

impl SessionSummary {
    /// Captures the summary of a terminated session.
    pub(crate) fn capture(bulldozer: &Bulldozer, termination: Termination) -> Self {
        Self {
            history: bulldozer.history().to_vec(),
            costs: bulldozer.cost_report(),
            termination,
            final_position: bulldozer.position(),
            final_facing: bulldozer.facing(),
            uncleared_squares: query::remaining_clearable(bulldozer.site()),
        }
    }

    /// Writes the summary as pretty-printed JSON.
    pub(crate) fn write(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialise session summary")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write session summary to {}", path.display()))?;
        log::info!("wrote session summary to {}", path.display());
        Ok(())
    }
}
