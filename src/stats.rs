use crate::maps::markers::SCORE_CUTOFF;
use crate::maps::utility::mean;
use crate::records::AirportRecord;

/// Whole-dataset counters derived from the loaded records.
///
/// Used for progress logging and the `summary` subcommand; never
/// rendered into a map.
#[derive(Debug, Default)]
pub struct DatasetSummary {
    pub total: usize,
    pub with_coordinates: usize,
    pub high_opportunity: usize,
    pub military_relevant: usize,
    pub mean_score: f64,
    pub max_score: f64,
}

impl DatasetSummary {
    pub fn from_records(records: &[AirportRecord]) -> Self {
        let mut s = DatasetSummary {
            total: records.len(),
            ..Default::default()
        };

        let mut scores = Vec::with_capacity(records.len());

        for r in records {
            if r.coordinates().is_some() {
                s.with_coordinates += 1;
            }

            if r.score >= SCORE_CUTOFF {
                s.high_opportunity += 1;
            }

            if r.military_relevant {
                s.military_relevant += 1;
            }

            scores.push(r.score);
        }

        s.mean_score = mean(&scores);
        s.max_score = scores.iter().copied().fold(0.0, f64::max);

        s
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    pub fn coordinate_pct(&self) -> f64 {
        Self::pct(self.with_coordinates, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, score: f64, coords: bool, military: bool) -> AirportRecord {
        AirportRecord {
            name: "TEST FIELD".to_string(),
            city: "TESTVILLE".to_string(),
            state: state.to_string(),
            latitude: coords.then_some(32.0),
            longitude: coords.then_some(-96.0),
            score,
            cert_score: 1.0,
            military_relevant: military,
        }
    }

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(DatasetSummary::pct(10, 0), 0.0);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(DatasetSummary::pct(50, 100), 50.0);
        assert_eq!(DatasetSummary::pct(1, 4), 25.0);
    }

    #[test]
    fn test_from_records_empty() {
        let summary = DatasetSummary::from_records(&[]);

        assert_eq!(summary.total, 0);
        assert_eq!(summary.with_coordinates, 0);
        assert_eq!(summary.mean_score, 0.0);
    }

    #[test]
    fn test_from_records_counters() {
        let records = vec![
            record("Texas", 88.0, true, true),
            record("Texas", 72.0, true, false),
            record("California", 40.0, false, false),
        ];

        let summary = DatasetSummary::from_records(&records);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.with_coordinates, 2);
        assert_eq!(summary.high_opportunity, 2);
        assert_eq!(summary.military_relevant, 1);
        assert!((summary.mean_score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.max_score, 88.0);
    }

    #[test]
    fn test_coordinate_pct() {
        let records = vec![
            record("Texas", 50.0, true, false),
            record("Texas", 50.0, false, false),
        ];
        let summary = DatasetSummary::from_records(&records);

        assert_eq!(summary.coordinate_pct(), 50.0);
    }
}
