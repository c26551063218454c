// Heuristic AQI predictor
use crate::domain::reading::Reading;

const PM2_5_WEIGHT: f64 = 0.45;
const PM10_WEIGHT: f64 = 0.25;
const NO2_WEIGHT: f64 = 0.08;
const SO2_WEIGHT: f64 = 0.06;
const CO_WEIGHT: f64 = 2.5;
const O3_WEIGHT: f64 = 0.06;
const WIND_RELIEF: f64 = 2.0;
const HUMIDITY_RELIEF: f64 = 0.2;
const HUMIDITY_BASELINE: f64 = 50.0;
const MAX_AQI: f64 = 600.0;

/// Weighted-sum AQI estimate for a reading, clamped to [0, 600] and rounded
/// half away from zero.
///
/// Missing or non-numeric fields carry NaN into the sum; a not-a-number
/// score yields `None` rather than an error.
pub fn predict(reading: &Reading) -> Option<i64> {
    let pollution = PM2_5_WEIGHT * reading.value("PM2_5")
        + PM10_WEIGHT * reading.value("PM10")
        + NO2_WEIGHT * reading.value("NO2")
        + SO2_WEIGHT * reading.value("SO2")
        + CO_WEIGHT * reading.value("CO")
        + O3_WEIGHT * reading.value("O3");
    let relief = WIND_RELIEF * reading.value("wind_speed")
        + HUMIDITY_RELIEF * (HUMIDITY_BASELINE - reading.value("humidity"));

    let score = pollution - relief;
    if score.is_nan() {
        return None;
    }
    Some(score.clamp(0.0, MAX_AQI).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(pairs: &[(&str, f64)]) -> Reading {
        let mut reading = Reading::new();
        for (name, value) in pairs {
            reading.insert(*name, *value);
        }
        reading
    }

    fn full_reading(pm2_5: f64, pm10: f64, wind_speed: f64, humidity: f64) -> Reading {
        reading(&[
            ("PM2_5", pm2_5),
            ("PM10", pm10),
            ("NO2", 0.0),
            ("SO2", 0.0),
            ("CO", 0.0),
            ("O3", 0.0),
            ("wind_speed", wind_speed),
            ("humidity", humidity),
        ])
    }

    #[test]
    fn test_worked_example() {
        let input = reading(&[
            ("PM2_5", 100.0),
            ("PM10", 80.0),
            ("NO2", 20.0),
            ("SO2", 10.0),
            ("CO", 1.0),
            ("O3", 15.0),
            ("wind_speed", 5.0),
            ("humidity", 40.0),
        ]);
        // 45 + 20 + 1.6 + 0.6 + 2.5 + 0.9 - (10 + 2) = 58.6
        assert_eq!(predict(&input), Some(59));
    }

    #[test]
    fn test_zero_pollutants_score_zero() {
        assert_eq!(predict(&full_reading(0.0, 0.0, 0.0, 50.0)), Some(0));
    }

    #[test]
    fn test_deterministic() {
        let input = full_reading(35.0, 20.0, 3.0, 60.0);
        let first = predict(&input);
        for _ in 0..10 {
            assert_eq!(predict(&input), first);
        }
    }

    #[test]
    fn test_negative_scores_floor_at_zero() {
        assert_eq!(predict(&full_reading(1.0, 0.0, 50.0, 50.0)), Some(0));
    }

    #[test]
    fn test_high_scores_cap_at_600() {
        assert_eq!(predict(&full_reading(5000.0, 0.0, 0.0, 50.0)), Some(600));
    }

    #[test]
    fn test_missing_fields_yield_none() {
        assert_eq!(predict(&reading(&[("PM2_5", 10.0)])), None);
        assert_eq!(predict(&Reading::new()), None);
    }
}
