use std::fmt;

use agstore_core::indicator_marks;
use owo_colors::OwoColorize;

use crate::presentation::formatters::{format_runs, rating_label};
use crate::presentation::view_models::{CreateView, DisplayOptions, FeaturedListViewModel};

impl CreateView for FeaturedListViewModel {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(FeaturedListView {
            data: self,
            options,
        })
    }
}

struct FeaturedListView<'a> {
    data: &'a FeaturedListViewModel,
    options: &'a DisplayOptions,
}

impl<'a> fmt::Display for FeaturedListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let total = self.data.slides.len();
        if total == 0 {
            writeln!(f, "No featured agents.")?;
            return Ok(());
        }

        writeln!(f, "FEATURED AGENTS ({})", total)?;
        writeln!(f)?;

        for slide in &self.data.slides {
            let current = self.data.current_index == Some(slide.index);
            let marker = if current { "▶" } else { " " };
            let position = format!("[{}/{}]", slide.index + 1, total);

            if self.options.enable_color && current {
                writeln!(
                    f,
                    "{} {} {}  by {}",
                    marker.cyan(),
                    position.dimmed(),
                    slide.agent_name.bold(),
                    slide.creator_name
                )?;
            } else {
                writeln!(
                    f,
                    "{} {} {}  by {}",
                    marker, position, slide.agent_name, slide.creator_name
                )?;
            }

            if !slide.sub_heading.is_empty() {
                writeln!(f, "        {}", slide.sub_heading)?;
            }
            writeln!(
                f,
                "        runs {}   {}",
                format_runs(slide.runs, &self.options.locale),
                rating_label(slide.rating)
            )?;
            writeln!(f, "        {}", slide.path)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", indicator_line(self.data.current_index, total))?;
        Ok(())
    }
}

/// Indicator strip as text: the current slide elongated, others as dots.
pub fn indicator_line(current: Option<usize>, len: usize) -> String {
    indicator_marks(current, len, 1.0)
        .iter()
        .map(|mark| {
            if mark.active {
                "━".repeat(mark.width as usize)
            } else {
                "•".repeat(mark.width as usize)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
