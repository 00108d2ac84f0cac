//! Windowed strip of featured cards.
//!
//! Shows `visible` cards starting at the viewport's displayed position,
//! wrapping around the end of the collection.

use num_format::Locale;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use super::FeaturedCardView;
use crate::presentation::view_models::FeaturedSlideViewModel;

pub struct FeaturedStripView<'a> {
    slides: &'a [FeaturedSlideViewModel],
    start: usize,
    visible: usize,
    current: Option<usize>,
    locale: Locale,
}

impl<'a> FeaturedStripView<'a> {
    pub fn new(
        slides: &'a [FeaturedSlideViewModel],
        start: usize,
        visible: usize,
        current: Option<usize>,
        locale: Locale,
    ) -> Self {
        Self {
            slides,
            start,
            visible,
            current,
            locale,
        }
    }

    /// Slide indices shown, left to right.
    pub fn window(&self) -> Vec<usize> {
        let len = self.slides.len();
        if len == 0 {
            return Vec::new();
        }
        let count = self.visible.clamp(1, len);
        (0..count).map(|offset| (self.start + offset) % len).collect()
    }
}

impl<'a> Widget for FeaturedStripView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let window = self.window();
        if window.is_empty() {
            return;
        }

        let constraints = vec![Constraint::Ratio(1, window.len() as u32); window.len()];
        let columns = Layout::horizontal(constraints).split(area);

        for (column, index) in columns.iter().zip(window) {
            let slide = &self.slides[index];
            FeaturedCardView::new(slide, self.current == Some(index), self.locale)
                .render(*column, buf);
        }
    }
}
