//! Scanner trigger/boundary marker values embedded in the sample stream.

/// Known marker-value revisions.
///
/// Early Trio logs only inject trigger on/off and header boundary values;
/// later revisions and all Prisma logs additionally close the stream with
/// the 5003/6003 footer marks. Real files use either, so the set is a
/// parser parameter rather than a constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMarkers {
    Classic,
    Extended,
}

impl TriggerMarkers {
    pub fn values(self) -> &'static [i64] {
        match self {
            TriggerMarkers::Classic => &[5000, 5002, 6000, 6002],
            TriggerMarkers::Extended => &[5000, 5002, 5003, 6000, 6002, 6003],
        }
    }

    pub fn matches_int(self, sample: i64) -> bool {
        self.values().contains(&sample)
    }

    /// Float samples only count as markers on exact equality, matching the
    /// integer sentinel values the scanner writes.
    pub fn matches_float(self, sample: f64) -> bool {
        self.values().iter().any(|&m| sample == m as f64)
    }
}

/// Drops every marker value from an integer sample stream.
pub fn filter_int_samples(samples: Vec<i64>, markers: TriggerMarkers) -> Vec<i64> {
    samples
        .into_iter()
        .filter(|&s| !markers.matches_int(s))
        .collect()
}

/// Drops every marker value from a float sample stream.
pub fn filter_float_samples(samples: Vec<f64>, markers: TriggerMarkers) -> Vec<f64> {
    samples
        .into_iter()
        .filter(|&s| !markers.matches_float(s))
        .collect()
}
