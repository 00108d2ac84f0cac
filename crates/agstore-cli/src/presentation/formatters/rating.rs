use super::PLACEHOLDER;

pub const STAR: &str = "★";

/// One-decimal rating, or a dash when missing or not a number.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating.filter(|r| r.is_finite()) {
        Some(r) => format!("{:.1}", r),
        None => PLACEHOLDER.to_string(),
    }
}

/// Rating prefixed with a star glyph; the dash stands alone.
pub fn rating_label(rating: Option<f64>) -> String {
    match rating.filter(|r| r.is_finite()) {
        Some(_) => format!("{} {}", STAR, format_rating(rating)),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_one_decimal() {
        assert_eq!(format_rating(Some(4.7)), "4.7");
        assert_eq!(format_rating(Some(4.0)), "4.0");
        assert_eq!(format_rating(Some(4.66)), "4.7");
        assert_eq!(format_rating(Some(3.94)), "3.9");
    }

    #[test]
    fn test_missing_rating_renders_dash() {
        assert_eq!(format_rating(None), "—");
        assert_eq!(format_rating(Some(f64::NAN)), "—");
        assert_eq!(rating_label(None), "—");
    }

    #[test]
    fn test_rating_label_has_star() {
        insta::assert_snapshot!(rating_label(Some(4.7)), @"★ 4.7");
    }
}
