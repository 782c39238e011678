use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::config::DEFAULT_PERIOD_WIDTH_MINUTES;
use crate::model::TaxiPark;

/// Start of the `width`-minute period containing `duration`.
pub fn period_start(duration: u32, width: u32) -> u32 {
    let width = width.max(1);
    duration / width * width
}

/// Inclusive minute range `[start, start + width - 1]`.
pub fn period_range(start: u32, width: u32) -> RangeInclusive<u32> {
    start..=start.saturating_add(width.max(1) - 1)
}

impl TaxiPark {
    /// Trip count per period start. A zero `width` is treated as one minute.
    pub fn trip_duration_histogram(&self, width: u32) -> BTreeMap<u32, usize> {
        let mut histogram = BTreeMap::new();
        for trip in &self.trips {
            *histogram
                .entry(period_start(trip.duration, width))
                .or_insert(0) += 1;
        }
        histogram
    }

    /// The 10-minute period (`0..=9`, `10..=19`, ..) holding the most trips,
    /// or `None` when there are no trips.
    ///
    /// Ties go to the period with the lowest start.
    pub fn most_frequent_trip_duration_period(&self) -> Option<RangeInclusive<u32>> {
        self.most_frequent_trip_duration_period_with(DEFAULT_PERIOD_WIDTH_MINUTES)
    }

    pub fn most_frequent_trip_duration_period_with(
        &self,
        width: u32,
    ) -> Option<RangeInclusive<u32>> {
        let mut best: Option<(u32, usize)> = None;
        for (start, count) in self.trip_duration_histogram(width) {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((start, count));
            }
        }
        best.map(|(start, _)| period_range(start, width))
    }
}
