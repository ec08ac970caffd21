use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use site_clearing_core::{
    Command, Termination, COMMAND_PROMPT, FAREWELL, STARTING_NOTICE, WELCOME_BANNER,
};
use site_clearing_rendering::{ReportView, SiteView};
use site_clearing_system_bulldozer::Bulldozer;

/// Drives an interactive clearing session until the bulldozer terminates.
///
/// Closing the input stream counts as a quit command.
pub(crate) fn run<R, W>(
    bulldozer: &mut Bulldozer,
    mut input: R,
    mut output: W,
    show_site_after_command: bool,
) -> Result<Termination>
where
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    writeln!(output, "{WELCOME_BANNER}")?;
    writeln!(output)?;
    write!(output, "{}", SiteView::new(bulldozer.site()))?;
    writeln!(output)?;
    writeln!(output, "{STARTING_NOTICE}")?;
    writeln!(output)?;

    let mut events = Vec::new();
    let mut line = String::new();
    loop {
        write!(output, "{COMMAND_PROMPT}")?;
        output.flush().context("failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read command")?;
        let command = if read == 0 {
            log::info!("command input closed; quitting");
            Command::Quit
        } else {
            match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    log::debug!("rejected command {:?}: {error}", line.trim());
                    writeln!(
                        output,
                        "{} is not an acceptable command, please try again.",
                        line.trim()
                    )?;
                    writeln!(output)?;
                    continue;
                }
            }
        };

        events.clear();
        let outcome = bulldozer.apply(command, &mut events);
        for event in &events {
            log::debug!("{event:?}");
        }

        match outcome {
            Ok(()) => {
                if show_site_after_command {
                    write!(output, "{}", SiteView::new(bulldozer.site()))?;
                }
            }
            Err(reason) => {
                write_final_report(bulldozer, reason, &mut output)?;
                return Ok(reason);
            }
        }
    }
}

fn write_final_report<W: Write>(
    bulldozer: &Bulldozer,
    reason: Termination,
    output: &mut W,
) -> Result<()> {
    let costs = bulldozer.cost_report();
    writeln!(output, "{reason}")?;
    writeln!(output, "The final status of the site is shown below:")?;
    writeln!(output)?;
    write!(output, "{}", SiteView::new(bulldozer.site()))?;
    write!(output, "{}", ReportView::new(bulldozer.history(), &costs))?;
    writeln!(output)?;
    writeln!(output, "{FAREWELL}")?;
    output.flush().context("failed to flush final report")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use site_clearing_core::{CostItem, Position, Termination};
    use site_clearing_system_bulldozer::Bulldozer;
    use site_clearing_world::Site;

    use super::run;

    const SAMPLE: &str = "ootooooooo\n\
                          oooooooToo\n\
                          rrrooooToo\n\
                          rrrroooooo\n\
                          rrrrrtoooo\n";

    fn play(script: &str) -> (Bulldozer, Termination, String) {
        let site: Site = SAMPLE.parse().expect("sample site parses");
        let mut bulldozer = Bulldozer::new(site);
        let mut output = Vec::new();
        let termination = run(&mut bulldozer, Cursor::new(script), &mut output, true)
            .expect("session runs");
        let text = String::from_utf8(output).expect("output is utf-8");
        (bulldozer, termination, text)
    }

    #[test]
    fn quit_prints_report_and_farewell() {
        let (bulldozer, termination, text) = play("a 4\nr\na 2\nq\n");

        assert_eq!(termination, Termination::UserQuit);
        assert_eq!(
            bulldozer.history(),
            ["Advance 4", "Turn right", "Advance 2", "Quit"]
        );
        assert!(text.contains("The simulation has ended at your request."));
        assert!(text.contains("Advance 4, Turn right, Advance 2, Quit"));
        assert!(text.contains(
            "Total                                                                138"
        ));
        assert!(text.trim_end().ends_with("Thank you for using the site clearing simulator."));
    }

    #[test]
    fn invalid_commands_are_rejected_and_reprompted() {
        let (bulldozer, termination, text) = play("jump\nA 0\nLEFT\nquit\n");

        assert_eq!(termination, Termination::UserQuit);
        assert!(text.contains("jump is not an acceptable command, please try again."));
        assert!(text.contains("A 0 is not an acceptable command, please try again."));
        assert_eq!(bulldozer.history(), ["Turn left", "Quit"]);
        assert_eq!(bulldozer.ledger().quantity(CostItem::Communication), 1);
    }

    #[test]
    fn driving_off_the_site_ends_the_session() {
        let (bulldozer, termination, text) = play("a 20\nq\n");

        assert_eq!(termination, Termination::OutOfBounds);
        assert_eq!(bulldozer.position(), Position::new(0, 9));
        assert_eq!(bulldozer.history(), ["Advance 20"]);
        assert!(text.contains("Bulldozer moved out of site!"));
    }

    #[test]
    fn hitting_a_protected_tree_ends_the_session() {
        let (_, termination, text) = play("a 8\nr\na 1\n");

        assert_eq!(termination, Termination::ProtectedTree);
        assert!(text.contains("Simulation ended by attempting to move to a protected tree!"));
        assert!(text.contains(
            "destruction of protected tree                     1                   10"
        ));
    }

    #[test]
    fn closed_input_counts_as_quit() {
        let (bulldozer, termination, _) = play("a 1\n");

        assert_eq!(termination, Termination::UserQuit);
        assert_eq!(bulldozer.history(), ["Advance 1", "Quit"]);
    }

    #[test]
    fn site_is_hidden_between_commands_when_disabled() {
        let site: Site = SAMPLE.parse().expect("sample site parses");
        let mut bulldozer = Bulldozer::new(site);
        let mut output = Vec::new();
        let _ = run(&mut bulldozer, Cursor::new("r\nr\nq\n"), &mut output, false)
            .expect("session runs");
        let text = String::from_utf8(output).expect("output is utf-8");

        // Once at start-up and once in the final report.
        assert_eq!(text.matches("o\to\tt").count(), 2);
    }
}
