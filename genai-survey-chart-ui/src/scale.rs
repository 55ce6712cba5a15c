//! Band and linear scales for the bar chart.

/// Maps bucket indices to evenly spaced horizontal bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    end: f64,
    len: usize,
}

impl BandScale {
    pub fn new(len: usize, start: f64, end: f64) -> Self {
        Self { start, end, len }
    }

    /// Width of one band.
    pub fn band_width(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            (self.end - self.start) / self.len as f64
        }
    }

    /// Left edge of band `index`, or `None` when the index is out of range.
    pub fn band_start(&self, index: usize) -> Option<f64> {
        if index < self.len {
            Some(self.start + self.band_width() * index as f64)
        } else {
            None
        }
    }

    /// Center of band `index`, or `None` when the index is out of range.
    pub fn center(&self, index: usize) -> Option<f64> {
        self.band_start(index)
            .map(|left| left + self.band_width() / 2.0)
    }
}

/// Maps counts to vertical positions over a nice [0, scale_max] domain.
///
/// `bottom` and `top` are screen coordinates, so `bottom > top` and larger
/// counts map to smaller y values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    scale_max: u32,
    step: u32,
    top: f64,
    bottom: f64,
}

/// Candidate tick steps, smallest first.
const NICE_STEPS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

/// Most intervals a readable axis should carry.
const MAX_INTERVALS: u32 = 5;

impl LinearScale {
    /// Build a scale covering `data_max`, rounded up to a whole number of
    /// nice steps.
    pub fn new(data_max: u32, top: f64, bottom: f64) -> Self {
        let step = NICE_STEPS
            .into_iter()
            .find(|s| data_max.div_ceil(*s) <= MAX_INTERVALS)
            .unwrap_or(data_max.div_ceil(MAX_INTERVALS).max(1));
        let scale_max = data_max.div_ceil(step) * step;
        Self {
            scale_max,
            step,
            top,
            bottom,
        }
    }

    /// Upper bound of the domain.
    pub fn scale_max(&self) -> u32 {
        self.scale_max
    }

    /// Screen position for `value`, or `None` when the domain is degenerate
    /// (all counts zero).
    pub fn position(&self, value: u32) -> Option<f64> {
        if self.scale_max == 0 {
            return None;
        }
        let ratio = f64::from(value) / f64::from(self.scale_max);
        Some(self.bottom - (self.bottom - self.top) * ratio)
    }

    /// Tick counts from zero to the domain maximum, inclusive.
    pub fn tick_values(&self) -> Vec<u32> {
        (0..=self.scale_max)
            .step_by(self.step.max(1) as usize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{BandScale, LinearScale};

    #[test]
    fn bands_split_the_plot_evenly() {
        let band = BandScale::new(5, 70.0, 630.0);
        assert_eq!(band.band_width(), 112.0);
        assert_eq!(band.band_start(0), Some(70.0));
        assert_eq!(band.center(0), Some(126.0));
        assert_eq!(band.center(4), Some(574.0));
        assert_eq!(band.center(5), None);
    }

    #[test]
    fn linear_scale_spans_the_nice_domain() {
        let scale = LinearScale::new(10, 30.0, 280.0);
        assert_eq!(scale.scale_max(), 10);
        assert_eq!(scale.position(0), Some(280.0));
        assert_eq!(scale.position(10), Some(30.0));
        assert_eq!(scale.position(5), Some(155.0));
        assert_eq!(scale.tick_values(), vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn odd_maxima_round_up_to_a_step_multiple() {
        let scale = LinearScale::new(7, 0.0, 100.0);
        assert_eq!(scale.scale_max(), 8);
        assert_eq!(scale.tick_values(), vec![0, 2, 4, 6, 8]);

        let small = LinearScale::new(3, 0.0, 100.0);
        assert_eq!(small.scale_max(), 3);
        assert_eq!(small.tick_values(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn degenerate_domain_yields_no_positions() {
        let scale = LinearScale::new(0, 30.0, 280.0);
        assert_eq!(scale.position(0), None);
        assert_eq!(scale.tick_values(), vec![0]);
    }
}
