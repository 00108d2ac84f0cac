//! Position indicator marks, one per slide.

/// Width of an inactive mark, in cells.
pub const DOT_WIDTH: u16 = 1;
/// Width of the active mark once its transition has finished.
pub const ACTIVE_WIDTH: u16 = 3;
/// Cells between adjacent marks.
pub const MARK_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorMark {
    pub index: usize,
    pub active: bool,
    pub width: u16,
}

/// Derive the marks for `len` slides with `current` active.
///
/// `progress` is the viewport's transition progress; the active mark grows
/// from a dot to full width over the same transition.
pub fn indicator_marks(current: Option<usize>, len: usize, progress: f64) -> Vec<IndicatorMark> {
    let grow = f64::from(ACTIVE_WIDTH - DOT_WIDTH) * progress.clamp(0.0, 1.0);
    let active_width = DOT_WIDTH + grow.round() as u16;

    (0..len)
        .map(|index| {
            let active = current == Some(index);
            IndicatorMark {
                index,
                active,
                width: if active { active_width } else { DOT_WIDTH },
            }
        })
        .collect()
}

/// Total cells occupied by `marks`, gaps included. Saturates at `u16::MAX`.
pub fn strip_width(marks: &[IndicatorMark]) -> u16 {
    let widths: usize = marks.iter().map(|m| usize::from(m.width)).sum();
    let gaps = usize::from(MARK_GAP) * marks.len().saturating_sub(1);
    u16::try_from(widths + gaps).unwrap_or(u16::MAX)
}

/// Which mark sits at column `x`, measured from the start of the strip.
pub fn mark_at(marks: &[IndicatorMark], x: u16) -> Option<usize> {
    let x = usize::from(x);
    let mut left = 0usize;
    for mark in marks {
        if left > x {
            break;
        }
        let right = left + usize::from(mark.width);
        if x < right {
            return Some(mark.index);
        }
        left = right + usize::from(MARK_GAP);
    }
    None
}
