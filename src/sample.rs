//! Deterministic sample series generation for charts and drill-down views.
//!
//! Series keep a stable shape per metric id (char-code hash picks the base
//! magnitude, a sine term shapes the curve) while the jitter source is an
//! injected `Rng`, so production callers get plausible variation and tests
//! can supply a fixed generator for exact reproducibility.

use rand::Rng;

/// Fiscal-year month labels, April through March
pub const FISCAL_MONTHS: [&str; 12] = [
    "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar",
];

/// Zone labels with their share of the organization-wide total
const ZONE_SHARES: [(&str, f64); 5] = [
    ("Calgary", 0.38),
    ("Edmonton", 0.35),
    ("Central", 0.12),
    ("North", 0.09),
    ("South", 0.06),
];

const CLASSIFICATION_SHARES: [(&str, f64); 5] = [
    ("RFT (Reg Full-time)", 0.45),
    ("RPT (Reg Part-time)", 0.35),
    ("CAS (Casual)", 0.10),
    ("TFT (Temp Full-time)", 0.05),
    ("TPT (Temp Part-time)", 0.05),
];

const UNION_SHARES: [(&str, f64); 6] = [
    ("UNA", 0.32),
    ("AUPE GSS", 0.28),
    ("HSAA", 0.18),
    ("AUPE AUX", 0.15),
    ("NUEE", 0.05),
    ("PARA", 0.02),
];

/// Sum of character codes of the seed key. Empty keys hash to zero, which
/// lands on the default base magnitude downstream.
pub fn seed_hash(key: &str) -> u32 {
    key.chars().map(|c| c as u32).sum()
}

/// Base magnitude for a seed key: 50..80 depending on the hash
fn base_magnitude(key: &str) -> f64 {
    (50 + seed_hash(key) % 30) as f64
}

/// One point of a generated monthly trend
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub actual: f64,
    pub target: f64,
    /// Present only for the final quarter of the fiscal year
    pub forecast: Option<f64>,
}

/// Twelve-month actual/target/forecast trend keyed off the metric id
pub fn trend_series<R: Rng>(seed_key: &str, rng: &mut R) -> Vec<TrendPoint> {
    let base = base_magnitude(seed_key);
    FISCAL_MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| {
            let shape = (i as f64 / 2.0).sin() * 10.0;
            let actual = (base + shape + rng.gen_range(0.0..8.0)).floor();
            let target = (base + i as f64 * 0.5).floor();
            let forecast = if i > 8 {
                Some((base + 12.0 + rng.gen_range(0.0..5.0)).floor())
            } else {
                None
            };
            TrendPoint {
                label: (*month).to_string(),
                actual,
                target,
                forecast,
            }
        })
        .collect()
}

/// One labelled slice of a category breakdown or pie split
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
}

/// Optional filters applied to a drill-down view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterContext {
    pub zone: Option<String>,
    pub search: Option<String>,
}

/// Full drill-down dataset for a metric: headline total plus distributions
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownData {
    pub total: u64,
    pub target: u64,
    pub zones: Vec<Slice>,
    pub unions: Vec<Slice>,
    pub classification: Vec<Slice>,
    pub clinical: Vec<Slice>,
}

/// Generate the drill-down breakdown for a metric under the given filters.
/// Zone selection collapses the distribution onto that zone; search narrows
/// the simulated volume. Magnitudes are always non-negative.
pub fn breakdown<R: Rng>(seed_key: &str, filters: &FilterContext, rng: &mut R) -> BreakdownData {
    let is_hours = seed_key.contains("hours") || seed_key.contains("overtime");

    let mut scale: f64 = if is_hours { 100_000.0 } else { 1_000.0 };
    let base: f64 = if is_hours { 20.0 } else { 95.0 };
    let variance: f64 = if is_hours { 50.0 } else { 25.0 };

    // A selected zone carries roughly a quarter of the provincial volume
    if filters.zone.is_some() {
        scale *= 0.25;
    }
    if filters.search.as_deref().is_some_and(|s| !s.is_empty()) {
        scale *= 0.1;
    }

    let total = (rng.gen_range(0.0..1.0) * variance * scale + base * scale).floor() as u64;
    let target = (total as f64 * 0.95).floor() as u64;

    let zones = ZONE_SHARES
        .iter()
        .map(|(name, share)| {
            let value = match filters.zone.as_deref() {
                Some(selected) if selected != *name => 0,
                Some(_) => total,
                None => (total as f64 * share).floor() as u64,
            };
            Slice {
                label: (*name).to_string(),
                value,
            }
        })
        .collect();

    let split = |shares: &[(&str, f64)]| {
        shares
            .iter()
            .map(|(name, share)| Slice {
                label: (*name).to_string(),
                value: (total as f64 * share).floor() as u64,
            })
            .collect::<Vec<_>>()
    };

    BreakdownData {
        total,
        target,
        zones,
        unions: split(&UNION_SHARES),
        classification: split(&CLASSIFICATION_SHARES),
        clinical: split(&[("Clinical", 0.78), ("Non-Clinical", 0.22)]),
    }
}

/// Direction of a generated table-row trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTrend {
    Up,
    Down,
    Flat,
}

/// One generated row of a per-zone comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRow {
    pub label: String,
    pub value: f64,
    pub trend: RowTrend,
}

/// Per-zone rows with jittered values around the hash-derived base
pub fn table_rows<R: Rng>(seed_key: &str, rng: &mut R) -> Vec<GeneratedRow> {
    let base = base_magnitude(seed_key);
    let variance = 8.0;
    ZONE_SHARES
        .iter()
        .map(|(name, share)| {
            let value = base * (0.6 + share) + rng.gen_range(0.0..variance) - variance / 2.0;
            let roll: f64 = rng.gen_range(0.0..1.0);
            let trend = if roll > 0.6 {
                RowTrend::Up
            } else if roll > 0.3 {
                RowTrend::Down
            } else {
                RowTrend::Flat
            };
            GeneratedRow {
                label: (*name).to_string(),
                value: value.max(0.0),
                trend,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn fixed_rng() -> StepRng {
        StepRng::new(42, 13)
    }

    #[test]
    fn seed_hash_sums_char_codes() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 97 + 98);
    }

    #[test]
    fn empty_seed_does_not_panic_and_uses_default_base() {
        let series = trend_series("", &mut fixed_rng());
        assert_eq!(series.len(), 12);
        // empty key hashes to 0, so base falls back to 50
        for p in &series {
            assert!(p.actual >= 40.0 && p.actual <= 70.0);
        }
    }

    #[test]
    fn trend_is_deterministic_with_fixed_rng() {
        let a = trend_series("overtime", &mut fixed_rng());
        let b = trend_series("overtime", &mut fixed_rng());
        assert_eq!(a, b);
    }

    #[test]
    fn trend_forecast_only_in_final_quarter() {
        let series = trend_series("overtime", &mut fixed_rng());
        for (i, p) in series.iter().enumerate() {
            assert_eq!(p.forecast.is_some(), i > 8, "month index {}", i);
        }
        assert_eq!(series[0].label, "Apr");
        assert_eq!(series[11].label, "Mar");
    }

    #[test]
    fn different_seeds_shift_the_base() {
        let a = trend_series("overtime", &mut fixed_rng());
        let b = trend_series("vacancy", &mut fixed_rng());
        // Same rng stream, different hash-derived base
        assert_ne!(a[0].actual, b[0].actual);
    }

    #[test]
    fn breakdown_shares_sum_to_total_within_rounding() {
        let data = breakdown("workforce", &FilterContext::default(), &mut fixed_rng());
        let zone_sum: u64 = data.zones.iter().map(|s| s.value).sum();
        assert!(zone_sum <= data.total);
        // Shares cover 100%; floor rounding may drop at most one unit per slice
        assert!(data.total - zone_sum <= data.zones.len() as u64);

        let clinical_sum: u64 = data.clinical.iter().map(|s| s.value).sum();
        assert!(data.total - clinical_sum <= 2);
    }

    #[test]
    fn breakdown_zone_filter_collapses_distribution() {
        let filters = FilterContext {
            zone: Some("North".to_string()),
            search: None,
        };
        let data = breakdown("overtime", &filters, &mut fixed_rng());
        for slice in &data.zones {
            if slice.label == "North" {
                assert_eq!(slice.value, data.total);
            } else {
                assert_eq!(slice.value, 0);
            }
        }
    }

    #[test]
    fn breakdown_search_filter_narrows_volume() {
        let unfiltered = breakdown("overtime", &FilterContext::default(), &mut fixed_rng());
        let filters = FilterContext {
            zone: None,
            search: Some("emergency".to_string()),
        };
        let filtered = breakdown("overtime", &filters, &mut fixed_rng());
        assert!(filtered.total < unfiltered.total);
    }

    #[test]
    fn breakdown_target_is_95_percent_of_total() {
        let data = breakdown("vacancy", &FilterContext::default(), &mut fixed_rng());
        assert_eq!(data.target, (data.total as f64 * 0.95).floor() as u64);
    }

    #[test]
    fn table_rows_are_non_negative() {
        for key in ["overtime", "", "vacancy"] {
            for row in table_rows(key, &mut fixed_rng()) {
                assert!(row.value >= 0.0);
            }
        }
    }
}
