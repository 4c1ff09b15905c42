//! Fabricated series shown by the landing page dashboard

/// One labelled data point, optionally with a comparison value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub label: &'static str,
    pub value: f64,
    pub previous: Option<f64>,
}

const fn point(label: &'static str, value: f64) -> DataPoint {
    DataPoint {
        label,
        value,
        previous: None,
    }
}

const fn compared(label: &'static str, value: f64, previous: f64) -> DataPoint {
    DataPoint {
        label,
        value,
        previous: Some(previous),
    }
}

/// Resolution rate this year against last year
pub const PERFORMANCE: [DataPoint; 7] = [
    compared("Jan", 65.0, 50.0),
    compared("Feb", 70.0, 55.0),
    compared("Mar", 80.0, 65.0),
    compared("Apr", 81.0, 77.0),
    compared("May", 85.0, 71.0),
    compared("Jun", 92.0, 75.0),
    compared("Jul", 94.0, 80.0),
];

pub const CONVERSATION_TYPES: [DataPoint; 3] = [
    point("Support", 65.0),
    point("Sales", 25.0),
    point("Feedback", 10.0),
];

pub const WEEKLY_ACTIVITY: [DataPoint; 7] = [
    point("Mon", 420.0),
    point("Tue", 380.0),
    point("Wed", 510.0),
    point("Thu", 470.0),
    point("Fri", 590.0),
    point("Sat", 390.0),
    point("Sun", 320.0),
];

/// Human first-response time (value) against the agent's (previous), in seconds
pub const RESPONSE_TIME: [DataPoint; 7] = [
    compared("Mon", 120.0, 3.0),
    compared("Tue", 180.0, 2.0),
    compared("Wed", 150.0, 3.0),
    compared("Thu", 210.0, 2.0),
    compared("Fri", 160.0, 2.0),
    compared("Sat", 90.0, 1.0),
    compared("Sun", 60.0, 1.0),
];

pub const SATISFACTION: [DataPoint; 7] = [
    point("Jan", 4.2),
    point("Feb", 4.3),
    point("Mar", 4.1),
    point("Apr", 4.4),
    point("May", 4.5),
    point("Jun", 4.7),
    point("Jul", 4.8),
];

pub const REGIONS: [DataPoint; 6] = [
    point("North America", 42.0),
    point("Europe", 29.0),
    point("Asia", 18.0),
    point("South America", 7.0),
    point("Africa", 3.0),
    point("Australia", 1.0),
];

/// A bar ready to draw: primary and comparison heights in chart units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledBar {
    pub label: &'static str,
    pub height: f64,
    pub previous_height: Option<f64>,
}

/// Scale a series so its largest value (primary or comparison) fills `max_height`
pub fn scale_series(points: &[DataPoint], max_height: f64) -> Vec<ScaledBar> {
    let peak = points
        .iter()
        .flat_map(|p| std::iter::once(p.value).chain(p.previous))
        .fold(0.0_f64, f64::max);

    let scale = |v: f64| {
        if peak <= 0.0 {
            0.0
        } else {
            (v.max(0.0) / peak) * max_height
        }
    };

    points
        .iter()
        .map(|p| ScaledBar {
            label: p.label,
            height: scale(p.value),
            previous_height: p.previous.map(scale),
        })
        .collect()
}

/// Each point's share of the series total, in percent
pub fn shares(points: &[DataPoint]) -> Vec<(&'static str, f64)> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    points
        .iter()
        .map(|p| {
            let share = if total > 0.0 {
                p.value.max(0.0) / total * 100.0
            } else {
                0.0
            };
            (p.label, share)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_series_peak_fills_height() {
        let bars = scale_series(&WEEKLY_ACTIVITY, 100.0);
        assert_eq!(bars.len(), 7);
        let fri = bars.iter().find(|b| b.label == "Fri").unwrap();
        assert_eq!(fri.height, 100.0);
        assert!(bars.iter().all(|b| b.height <= 100.0));
    }

    #[test]
    fn test_scale_series_includes_comparison() {
        let points = [compared("a", 50.0, 100.0)];
        let bars = scale_series(&points, 10.0);
        assert_eq!(bars[0].height, 5.0);
        assert_eq!(bars[0].previous_height, Some(10.0));
    }

    #[test]
    fn test_scale_series_all_zero() {
        let points = [point("a", 0.0), point("b", 0.0)];
        let bars = scale_series(&points, 10.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let total: f64 = shares(&REGIONS).iter().map(|(_, s)| s).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let (label, share) = shares(&CONVERSATION_TYPES)[0];
        assert_eq!(label, "Support");
        assert!((share - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_empty() {
        assert!(shares(&[]).is_empty());
    }
}
