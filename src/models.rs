use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Container width (px) at or below which charts use the mobile layout.
pub const MOBILE_THRESHOLD: f64 = 600.0;

/// Reserved dataset key holding the aggregate series.
pub const TOTAL_KEY: &str = "total";

/// Raw counts are stored per person and displayed in millions.
pub const UNIT_DIVISOR: f64 = 1_000_000.0;

/// Binary layout mode driven by container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    /// Classify a container width against the fixed 600 px threshold.
    ///
    /// Exactly 600 px counts as mobile (`width <= threshold`).
    pub fn classify(width: f64) -> Self {
        if width <= MOBILE_THRESHOLD {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Breakpoint::Mobile)
    }
}

/// Inclusive year range the x axis spans. Index i of a series corresponds to
/// calendar year `first + i`. The domain positions bars and labels ticks; it
/// is never stored with the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDomain {
    pub first: i32,
    pub last: i32,
}

impl YearDomain {
    pub fn new(first: i32, last: i32) -> Self {
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    /// Number of years (and bar slots) in the domain.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    pub fn year_at(&self, index: usize) -> i32 {
        self.first + index as i32
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        self.first..=self.last
    }
}

/// Mapping from country name to its ordered yearly series, plus the reserved
/// `"total"` aggregate. Deserialized straight from the dataset JSON document;
/// no other fields are read.
///
/// A `BTreeMap` keeps iteration (and therefore render order) stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Dataset {
    pub series: BTreeMap<String, Vec<f64>>,
}

impl Dataset {
    /// Per-country entries, excluding the reserved aggregate key.
    pub fn countries(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series
            .iter()
            .filter(|(name, _)| name.as_str() != TOTAL_KEY)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// The aggregate series, if the dataset carries one.
    pub fn total(&self) -> Option<&[f64]> {
        self.series.get(TOTAL_KEY).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundary_is_mobile_at_threshold() {
        assert_eq!(Breakpoint::classify(599.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(600.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(600.5), Breakpoint::Desktop);
        assert_eq!(Breakpoint::classify(601.0), Breakpoint::Desktop);
    }

    #[test]
    fn year_domain_indexing() {
        let d = YearDomain::new(1975, 2014);
        assert_eq!(d.len(), 40);
        assert_eq!(d.year_at(0), 1975);
        assert_eq!(d.year_at(39), 2014);
        assert_eq!(d.years().count(), 40);
    }

    #[test]
    fn dataset_skips_total_in_country_iteration() {
        let json = r#"{"Vietnam":[1.0,2.0],"total":[3.0,4.0],"Cuba":[5.0,6.0]}"#;
        let ds: Dataset = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = ds.countries().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Cuba", "Vietnam"]);
        assert_eq!(ds.total(), Some(&[3.0, 4.0][..]));
    }
}
