//! Pure geometry behind the decorative effects: parallax, tilt, header tone,
//! nav scrolling, staggered fade-in and grain flicker.
//!
//! The frontend reads DOM measurements, calls these and writes the resulting
//! style strings back.

/// Vertical offset of a parallax decoration for the given scroll position
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed / 10.0)
}

/// Parse a `data-speed` attribute; missing or garbage means 1
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(1.0)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

/// Rotation of a card following the pointer, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `x`/`y` are pointer coordinates relative to the card's top-left corner.
    pub fn from_pointer(width: f64, height: f64, x: f64, y: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / 20.0,
            rotate_y: (center_x - x) / 20.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "scale(1.05) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub const CARD_REST_TRANSFORM: &str = "scale(1)";
pub const CARD_PULSE_TRANSFORM: &str = "scale(1.1)";
pub const CARD_PULSE_SETTLE_TRANSFORM: &str = "scale(1.05)";

/// Header appearance depending on scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTone {
    Translucent,
    Solid,
}

impl HeaderTone {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderTone::Solid
        } else {
            HeaderTone::Translucent
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            HeaderTone::Solid => {
                "background-color: rgba(5, 5, 5, 0.98); box-shadow: 0 5px 20px rgba(0, 0, 0, 0.5);"
            }
            HeaderTone::Translucent => "background-color: rgba(5, 5, 5, 0.95); box-shadow: none;",
        }
    }
}

/// Target of a smooth scroll to an in-page anchor.
///
/// `element_top` is the bounding-rect top (viewport relative).
pub fn nav_scroll_target(element_top: f64, page_y: f64, header_offset: f64) -> f64 {
    element_top + page_y - header_offset
}

/// Returns the element id for in-page anchors (`#about` -> `about`)
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Style of the fade-in layer of the `index`-th card.
///
/// Cards sit 30px low and transparent until they first enter the viewport.
pub fn fade_in_style(index: usize, stagger_ms: u32, revealed: bool) -> String {
    let delay = index as f64 * stagger_ms as f64 / 1000.0;
    let (opacity, offset) = if revealed { (1, 0) } else { (0, 30) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s;"
    )
}

/// Grain overlay opacity for a uniform sample `r` in `[0, 1)`
pub fn grain_opacity(r: f64) -> f64 {
    0.1 + r.clamp(0.0, 1.0) * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0.0, 1.0), 0.0);
        assert_eq!(parallax_offset(200.0, 1.0), -20.0);
        assert_eq!(parallax_offset(200.0, 2.5), -50.0);
        assert_eq!(parallax_transform(100.0, 1.0), "translateY(-10px)");
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed(None), 1.0);
        assert_eq!(parse_speed(Some("2")), 2.0);
        assert_eq!(parse_speed(Some(" 0.5 ")), 0.5);
        assert_eq!(parse_speed(Some("fast")), 1.0);
        assert_eq!(parse_speed(Some("0")), 1.0);
    }

    #[test]
    fn test_tilt_center_is_flat() {
        let tilt = Tilt::from_pointer(200.0, 100.0, 100.0, 50.0);
        assert_eq!(tilt, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn test_tilt_corner() {
        let tilt = Tilt::from_pointer(200.0, 100.0, 0.0, 100.0);
        assert_eq!(tilt.rotate_x, 2.5);
        assert_eq!(tilt.rotate_y, 5.0);
        assert_eq!(tilt.transform(), "scale(1.05) rotateX(2.5deg) rotateY(5deg)");
    }

    #[test]
    fn test_header_tone() {
        assert_eq!(HeaderTone::for_scroll(0.0, 100.0), HeaderTone::Translucent);
        assert_eq!(HeaderTone::for_scroll(100.0, 100.0), HeaderTone::Translucent);
        assert_eq!(HeaderTone::for_scroll(100.5, 100.0), HeaderTone::Solid);
        assert!(HeaderTone::Solid.style().contains("0.98"));
    }

    #[test]
    fn test_nav_target() {
        assert_eq!(nav_scroll_target(350.0, 1000.0, 100.0), 1250.0);
        assert_eq!(anchor_target("#menu"), Some("menu"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }

    #[test]
    fn test_fade_in_stagger() {
        assert!(fade_in_style(0, 100, false).contains("ease 0s"));
        assert!(fade_in_style(3, 100, false).contains("ease 0.3s"));
    }

    #[test]
    fn test_fade_in_revealed() {
        assert!(fade_in_style(1, 100, false).starts_with("opacity: 0; transform: translateY(30px)"));
        assert!(fade_in_style(1, 100, true).starts_with("opacity: 1; transform: translateY(0px)"));
    }

    #[test]
    fn test_grain_opacity_bounds() {
        assert_eq!(grain_opacity(0.0), 0.1);
        assert!((grain_opacity(0.5) - 0.15).abs() < 1e-9);
        assert!(grain_opacity(0.999) < 0.2);
    }
}
