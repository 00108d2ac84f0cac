//! Position marks under the featured strip.

use agstore_core::IndicatorMark;
use agstore_core::indicator::{MARK_GAP, strip_width};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub struct IndicatorStripView<'a> {
    marks: &'a [IndicatorMark],
}

impl<'a> IndicatorStripView<'a> {
    pub fn new(marks: &'a [IndicatorMark]) -> Self {
        Self { marks }
    }

    /// Area the marks occupy when centered in `area`. Used for hit testing.
    pub fn strip_area(&self, area: Rect) -> Rect {
        let width = strip_width(self.marks).min(area.width);
        let x = area.x + (area.width - width) / 2;
        Rect::new(x, area.y, width, area.height.min(1))
    }
}

impl<'a> Widget for IndicatorStripView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let strip = self.strip_area(area);
        if strip.width == 0 || strip.height == 0 {
            return;
        }

        let mut x = strip.x;
        let right = strip.x + strip.width;
        for mark in self.marks {
            let (symbol, style) = if mark.active {
                ("━", Style::default().fg(Color::White))
            } else {
                ("•", Style::default().fg(Color::DarkGray))
            };
            for _ in 0..mark.width {
                if x >= right {
                    return;
                }
                buf[(x, strip.y)].set_symbol(symbol).set_style(style);
                x += 1;
            }
            x = x.saturating_add(MARK_GAP);
        }
    }
}
