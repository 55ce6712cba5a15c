//! Chart coordinate system and per-bar geometry.

use crate::scale::{BandScale, LinearScale};

/// Whitespace around the plot rectangle, in viewBox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Fixed internal coordinate system of a chart.
///
/// The SVG is emitted with this viewBox and `width: 100%`, so the browser
/// scales the whole drawing; positions computed here are also valid as
/// percentages of the rendered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 340.0,
            // Leaves room for value labels above the bars and for
            // two-line ticks below the axis.
            margin: Margin {
                top: 30.0,
                right: 10.0,
                bottom: 60.0,
                left: 70.0,
            },
        }
    }
}

impl ChartLayout {
    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    /// Horizontal scale over the plot area for `len` buckets.
    pub fn band_scale(&self, len: usize) -> BandScale {
        BandScale::new(len, self.plot_left(), self.plot_right())
    }

    /// Vertical scale over the plot area for counts up to `data_max`.
    pub fn count_scale(&self, data_max: u32) -> LinearScale {
        LinearScale::new(data_max, self.plot_top(), self.plot_bottom())
    }
}

/// Resolved geometry for one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Geometry for the bar at `index` with `count` respondents, or `None`
/// when either scale declines (out-of-range index, degenerate domain).
pub fn bar_rect(
    band: &BandScale,
    counts: &LinearScale,
    index: usize,
    count: u32,
    bar_size: f64,
    baseline: f64,
) -> Option<BarRect> {
    let center = band.center(index)?;
    let top = counts.position(count)?;
    let width = bar_size.min(band.band_width());
    Some(BarRect {
        x: center - width / 2.0,
        y: top,
        width,
        height: baseline - top,
    })
}

/// SVG path for a bar with rounded top corners. The radius is clamped so
/// short or narrow bars stay well-formed.
pub fn rounded_top_bar_path(bar: &BarRect, radius: f64) -> String {
    let r = radius.min(bar.height).min(bar.width / 2.0).max(0.0);
    let bottom = bar.y + bar.height;
    format!(
        "M {} {} L {} {} Q {} {} {} {} L {} {} Q {} {} {} {} L {} {} Z",
        bar.x,
        bottom,
        bar.x,
        bar.y + r,
        bar.x,
        bar.y,
        bar.x + r,
        bar.y,
        bar.x + bar.width - r,
        bar.y,
        bar.x + bar.width,
        bar.y,
        bar.x + bar.width,
        bar.y + r,
        bar.x + bar.width,
        bottom,
    )
}

#[cfg(test)]
mod tests {
    use super::{bar_rect, rounded_top_bar_path, BarRect, ChartLayout};

    #[test]
    fn plot_rectangle_respects_margins() {
        let layout = ChartLayout::default();
        assert_eq!(layout.plot_left(), 70.0);
        assert_eq!(layout.plot_right(), 630.0);
        assert_eq!(layout.plot_top(), 30.0);
        assert_eq!(layout.plot_bottom(), 280.0);
    }

    #[test]
    fn bar_geometry_is_centered_in_its_band() {
        let layout = ChartLayout::default();
        let band = layout.band_scale(5);
        let counts = layout.count_scale(10);
        let bar = bar_rect(&band, &counts, 4, 10, 50.0, layout.plot_bottom()).unwrap();
        assert_eq!(bar.width, 50.0);
        assert_eq!(bar.center_x(), 574.0);
        assert_eq!(bar.y, 30.0);
        assert_eq!(bar.height, 250.0);
    }

    #[test]
    fn zero_count_bar_sits_on_the_baseline() {
        let layout = ChartLayout::default();
        let band = layout.band_scale(5);
        let counts = layout.count_scale(10);
        let bar = bar_rect(&band, &counts, 0, 0, 50.0, layout.plot_bottom()).unwrap();
        assert_eq!(bar.y, layout.plot_bottom());
        assert_eq!(bar.height, 0.0);
    }

    #[test]
    fn degenerate_scale_yields_no_bar() {
        let layout = ChartLayout::default();
        let band = layout.band_scale(5);
        let counts = layout.count_scale(0);
        assert_eq!(bar_rect(&band, &counts, 0, 0, 50.0, 280.0), None);
        assert_eq!(bar_rect(&band, &counts, 9, 3, 50.0, 280.0), None);
    }

    #[test]
    fn wide_bars_clamp_to_the_band() {
        let layout = ChartLayout::default();
        let band = layout.band_scale(5);
        let counts = layout.count_scale(10);
        let bar = bar_rect(&band, &counts, 2, 5, 500.0, layout.plot_bottom()).unwrap();
        assert_eq!(bar.width, band.band_width());
    }

    #[test]
    fn rounded_path_clamps_the_radius() {
        let flat = BarRect {
            x: 10.0,
            y: 100.0,
            width: 50.0,
            height: 2.0,
        };
        let path = rounded_top_bar_path(&flat, 6.0);
        // Radius must not exceed the bar height.
        assert!(path.contains("L 10 102"));
        assert!(path.starts_with("M 10 102"));
    }
}
