use std::fmt;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{CreateView, CreatorListViewModel, DisplayOptions};

impl CreateView for CreatorListViewModel {
    fn create_view<'a>(&'a self, _options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CreatorListView { data: self })
    }
}

struct CreatorListView<'a> {
    data: &'a CreatorListViewModel,
}

impl<'a> fmt::Display for CreatorListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.creators.is_empty() {
            writeln!(f, "No featured creators.")?;
            return Ok(());
        }

        writeln!(f, "{:<18} {:<14} {:>6}  ABOUT", "CREATOR", "USERNAME", "AGENTS")?;
        writeln!(f, "{}", "-".repeat(80))?;

        for creator in &self.data.creators {
            writeln!(
                f,
                "{:<18} {:<14} {:>6}  {}",
                truncate(&creator.name, 18),
                format!("@{}", creator.username),
                creator.num_agents,
                truncate(&creator.description, 40)
            )?;
        }

        Ok(())
    }
}
