use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::{format_runs, rating_label, truncate};
use crate::presentation::view_models::{AgentTableViewModel, CreateView, DisplayOptions};

impl CreateView for AgentTableViewModel {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(AgentTableView {
            data: self,
            options,
        })
    }
}

struct AgentTableView<'a> {
    data: &'a AgentTableViewModel,
    options: &'a DisplayOptions,
}

impl<'a> fmt::Display for AgentTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.agents.is_empty() {
            writeln!(f, "No agents found.")?;
            return Ok(());
        }

        let header = format!(
            "{:<4} {:<20} {:<16} {:>12}  {:<7} DESCRIPTION",
            "#", "AGENT", "CREATOR", "RUNS", "RATING"
        );
        if self.options.enable_color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }
        writeln!(f, "{}", "-".repeat(100))?;

        for row in &self.data.agents {
            writeln!(
                f,
                "{:<4} {:<20} {:<16} {:>12}  {:<7} {}",
                row.rank,
                truncate(&row.agent_name, 20),
                truncate(&row.creator, 16),
                format_runs(row.runs, &self.options.locale),
                rating_label(row.rating),
                truncate(&row.description, 40)
            )?;
        }

        if self.data.agents.len() < self.data.total {
            writeln!(
                f,
                "\n({} of {} agents shown)",
                self.data.agents.len(),
                self.data.total
            )?;
        }

        Ok(())
    }
}
