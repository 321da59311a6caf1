//! Pure positional scales used by the column-chart renderer.
//!
//! Both scales are plain functions of (domain, range): deterministic and
//! side-effect-free, so geometry can be asserted in unit tests.

/// Ordinal band scale: maps slot indices to evenly spaced bands across an
/// inner chart width, with a fixed fraction of each step left as padding
/// between bands (and the same fraction as outer padding on both ends).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    slots: usize,
    step: f64,
    offset: f64,
    band: f64,
}

impl BandScale {
    /// Lay out `slots` bands across `[0, width]` with `padding` (0..1) of
    /// each step reserved as inter-band spacing.
    pub fn new(slots: usize, width: f64, padding: f64) -> Self {
        let n = slots.max(1) as f64;
        let padding = padding.clamp(0.0, 1.0);
        // Same divisor d3 uses for rangeBands with equal inner/outer padding.
        let step = width.max(0.0) / (n - padding + 2.0 * padding);
        Self {
            slots: slots.max(1),
            step,
            offset: step * padding,
            band: step * (1.0 - padding),
        }
    }

    /// Left edge of the band for slot `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.offset + self.step * index as f64
    }

    /// Width allocated to a single bar.
    pub fn band_width(&self) -> f64 {
        self.band
    }

    pub fn slots(&self) -> usize {
        self.slots
    }
}

/// Linear scale mapping a value domain onto a pixel range. The chart uses an
/// inverted range (`[height, 0]`) so larger values draw higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return self.r0;
        }
        let t = (value - self.d0) / span;
        self.r0 + t * (self.r1 - self.r0)
    }
}
