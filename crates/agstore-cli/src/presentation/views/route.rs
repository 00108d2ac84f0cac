use std::fmt;

use crate::presentation::view_models::{CreateView, DisplayOptions, RouteViewModel};

impl CreateView for RouteViewModel {
    fn create_view<'a>(&'a self, _options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(RouteView { data: self })
    }
}

struct RouteView<'a> {
    data: &'a RouteViewModel,
}

impl<'a> fmt::Display for RouteView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}
