#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text presentation of the site map and the end-of-session report.
//!
//! Views borrow the state they present and implement [`fmt::Display`], so
//! adapters decide where the text goes.

use std::fmt;

use site_clearing_system_accounting::CostReport;
use site_clearing_world::Site;

/// Horizontal rule framing the site map.
pub const SITE_RULE: &str =
    "  -----------------------------------------------------------------  ";

const REPORT_SEPARATOR: &str = "-----------------------------";
const LABEL_WIDTH: usize = 30;
const NUMBER_WIDTH: usize = 20;

/// Tab-separated view of every square of the site framed by rules.
#[derive(Clone, Copy, Debug)]
pub struct SiteView<'a> {
    site: &'a Site,
}

impl<'a> SiteView<'a> {
    /// Creates a view of the provided site.
    #[must_use]
    pub const fn new(site: &'a Site) -> Self {
        Self { site }
    }
}

impl fmt::Display for SiteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SITE_RULE}")?;
        for row in self.site.rows_iter() {
            for (index, terrain) in row.iter().enumerate() {
                if index > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", terrain.symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "{SITE_RULE}")
    }
}

/// Command history followed by the itemised cost table.
#[derive(Clone, Copy, Debug)]
pub struct ReportView<'a> {
    history: &'a [String],
    costs: &'a CostReport,
}

impl<'a> ReportView<'a> {
    /// Creates a report view from the command history and cost report.
    #[must_use]
    pub const fn new(history: &'a [String], costs: &'a CostReport) -> Self {
        Self { history, costs }
    }
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "These are the commands you issued:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.history.join(", "))?;
        writeln!(f)?;
        writeln!(f, "The costs for this land clearing operation were:")?;
        writeln!(f)?;
        table_row(f, "Item", "Quantity", "Cost")?;
        for line in self.costs.lines() {
            table_row(
                f,
                line.item.label(),
                &line.quantity.to_string(),
                &line.cost.to_string(),
            )?;
        }
        table_row(f, REPORT_SEPARATOR, "", "")?;
        table_row(f, "Total", "", &self.costs.total().to_string())
    }
}

fn table_row(f: &mut fmt::Formatter<'_>, label: &str, quantity: &str, cost: &str) -> fmt::Result {
    writeln!(
        f,
        "{label:<label_width$} {quantity:>number_width$} {cost:>number_width$}",
        label_width = LABEL_WIDTH,
        number_width = NUMBER_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::{ReportView, SiteView, SITE_RULE};
    use site_clearing_core::{Position, Terrain};
    use site_clearing_system_accounting::CostLedger;
    use site_clearing_world::Site;

    #[test]
    fn site_view_separates_squares_with_tabs() {
        let mut site: Site = "ootoo\nrrTor\n".parse().expect("site parses");
        let _ = site.clear(Position::new(0, 0));
        let rendered = SiteView::new(&site).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![SITE_RULE, "*\to\tt\to\to", "r\tr\tT\to\tr", "", SITE_RULE]
        );
    }

    #[test]
    fn site_view_uses_terrain_symbols() {
        let site: Site = "*".parse().expect("site parses");
        let rendered = SiteView::new(&site).to_string();
        assert!(rendered.contains(&Terrain::Clear.symbol().to_string()));
    }

    #[test]
    fn report_view_matches_reference_layout() {
        let mut ledger = CostLedger::new(48);
        for _ in 0..3 {
            ledger.add_communication();
        }
        for _ in 0..7 {
            ledger.add_fuel(Terrain::Plain);
        }
        for _ in 0..6 {
            ledger.remove_uncleared_square();
        }
        ledger.add_paint_damage();
        let history = vec![
            "Advance 4".to_owned(),
            "Turn right".to_owned(),
            "Advance 2".to_owned(),
        ];
        let costs = ledger.report();

        let rendered = ReportView::new(&history, &costs).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "",
                "These are the commands you issued:",
                "",
                "Advance 4, Turn right, Advance 2",
                "",
                "The costs for this land clearing operation were:",
                "",
                "Item                                       Quantity                 Cost",
                "communication overhead                            3                    3",
                "fuel usage                                        7                    7",
                "uncleared squares                                42                  126",
                "destruction of protected tree                     0                    0",
                "paint damage to bulldozer                         1                    2",
                "-----------------------------                                           ",
                "Total                                                                138",
            ]
        );
    }
}
