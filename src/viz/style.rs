//! Styling for rendered charts: one color per visual role.

/// 8-bit RGB triple, backend-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors and type settings applied by the drawing-surface adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub bar: Rgb8,
    pub axis: Rgb8,
    pub grid: Rgb8,
    pub label: Rgb8,
    pub font_family: String,
    pub font_px: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            // Office-palette blue for bars; muted grays for the reference layers.
            bar: Rgb8 {
                r: 68,
                g: 114,
                b: 196,
            },
            axis: Rgb8 {
                r: 102,
                g: 102,
                b: 102,
            },
            grid: Rgb8 {
                r: 204,
                g: 204,
                b: 204,
            },
            label: Rgb8 {
                r: 68,
                g: 68,
                b: 68,
            },
            font_family: "sans-serif".to_string(),
            font_px: 12,
        }
    }
}
