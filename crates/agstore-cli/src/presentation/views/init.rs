use std::fmt;

use crate::presentation::view_models::{
    CreateView, DisplayOptions, InitFileStatus, InitResultViewModel,
};

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitResultView { data: self })
    }
}

struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

fn status_text(status: InitFileStatus) -> &'static str {
    match status {
        InitFileStatus::Created => "created",
        InitFileStatus::Overwritten => "overwritten",
        InitFileStatus::KeptExisting => "kept existing",
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Workspace: {}", self.data.data_dir)?;
        writeln!(
            f,
            "  config   {} ({})",
            self.data.config_path,
            status_text(self.data.config_status)
        )?;
        writeln!(
            f,
            "  catalog  {} ({})",
            self.data.catalog_path,
            status_text(self.data.catalog_status)
        )?;
        writeln!(
            f,
            "  {} featured, {} agents, {} creators",
            self.data.featured_count, self.data.agent_count, self.data.creator_count
        )?;
        Ok(())
    }
}
