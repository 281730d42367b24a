use super::{CoolingMethod, SimulationResult};

/// Qualitative rating thresholds on the drop-based efficiency percentage.
const EXCELLENT_THRESHOLD: f64 = 30.0;
const GOOD_THRESHOLD: f64 = 20.0;

/// Derived summary metrics for a linear-drop trajectory.
///
/// Stateless and recomputed on every run; nothing here is cached or stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetrics {
    /// Temperature drop as a percentage of the starting temperature.
    pub efficiency_pct: f64,
    /// Degrees shed per simulated second.
    pub cooling_rate_per_s: f64,
    /// Population standard deviation of the trajectory; lower = smoother.
    pub stability_index: f64,
    /// Simulated span covered by the trajectory, in seconds.
    pub duration_s: f64,
}

impl PerformanceMetrics {
    /// Derive metrics from a trajectory.
    ///
    /// Expects a well-formed series (at least two samples, positive initial
    /// temperature) — both guaranteed by the simulation functions, whose
    /// horizons are fixed and whose ambient floor is 20 °C.
    pub fn from_series(result: &SimulationResult) -> Self {
        let drop = result.temperature_drop();
        let duration = result.duration_s();
        Self {
            efficiency_pct: drop / result.initial_temperature() * 100.0,
            cooling_rate_per_s: drop / duration,
            stability_index: population_std_dev(&result.temperatures),
            duration_s: duration,
        }
    }

    pub fn rating(&self) -> EfficiencyRating {
        EfficiencyRating::from_efficiency(self.efficiency_pct)
    }
}

/// Qualitative banner shown under the metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Moderate,
}

impl EfficiencyRating {
    pub fn from_efficiency(efficiency_pct: f64) -> Self {
        if efficiency_pct >= EXCELLENT_THRESHOLD {
            EfficiencyRating::Excellent
        } else if efficiency_pct >= GOOD_THRESHOLD {
            EfficiencyRating::Good
        } else {
            EfficiencyRating::Moderate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "Excellent",
            EfficiencyRating::Good => "Good",
            EfficiencyRating::Moderate => "Moderate",
        }
    }

    /// CSS modifier class for the rating banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "rating excellent",
            EfficiencyRating::Good => "rating good",
            EfficiencyRating::Moderate => "rating moderate",
        }
    }
}

/// Efficiency score for the exponential-decay model: the cooling factor
/// expressed as a percentage. Shown on the home page after a run.
pub fn decay_efficiency_pct(method: CoolingMethod) -> f64 {
    method.cooling_factor() * 100.0
}

/// Population standard deviation (divides by N, not N-1).
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{simulate_linear_drop, SimulationInput};

    #[test]
    fn test_std_dev_known_values() {
        // Mean 5, deviations ±2 and ±1 → variance (4+1+1+4)/4 = 2.5
        let values = [3.0, 4.0, 6.0, 7.0];
        assert!((population_std_dev(&values) - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_constant_series_is_zero() {
        assert!((population_std_dev(&[42.0; 10]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_empty() {
        assert!((population_std_dev(&[]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_concrete_scenario() {
        // Air, cpu=50, gpu=40, ambient=25: base 47.5, T(9)=39.4, drop 8.1
        let input = SimulationInput::clamped(50.0, 40.0, 25.0, CoolingMethod::Air);
        let metrics = PerformanceMetrics::from_series(&simulate_linear_drop(&input));

        assert!((metrics.cooling_rate_per_s - 0.9).abs() < 1e-9);
        assert!((metrics.efficiency_pct - 8.1 / 47.5 * 100.0).abs() < 1e-9);
        assert!((metrics.efficiency_pct - 17.05).abs() < 0.01);
        assert_eq!(metrics.rating(), EfficiencyRating::Moderate);
        assert!((metrics.duration_s - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_ramp_std_dev() {
        // T(t) = 47.5 - 0.9t for t=0..9: uniform ramp, std dev = 0.9 * std(0..9)
        let input = SimulationInput::clamped(50.0, 40.0, 25.0, CoolingMethod::Air);
        let metrics = PerformanceMetrics::from_series(&simulate_linear_drop(&input));
        let steps: Vec<f64> = (0..10).map(|t| t as f64).collect();
        let expected = 0.9 * population_std_dev(&steps);
        assert!((metrics.stability_index - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(EfficiencyRating::from_efficiency(30.0), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_efficiency(45.0), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_efficiency(29.999), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_efficiency(20.0), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_efficiency(19.999), EfficiencyRating::Moderate);
        assert_eq!(EfficiencyRating::from_efficiency(0.0), EfficiencyRating::Moderate);
    }

    #[test]
    fn test_decay_efficiency_is_factor_times_100() {
        assert!((decay_efficiency_pct(CoolingMethod::Air) - 30.0).abs() < 1e-9);
        assert!((decay_efficiency_pct(CoolingMethod::Liquid) - 60.0).abs() < 1e-9);
        assert!((decay_efficiency_pct(CoolingMethod::MineralOil) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_determinism() {
        let input = SimulationInput::clamped(66.0, 33.0, 28.0, CoolingMethod::Liquid);
        let a = PerformanceMetrics::from_series(&simulate_linear_drop(&input));
        let b = PerformanceMetrics::from_series(&simulate_linear_drop(&input));
        assert_eq!(a, b);
    }

    #[test]
    fn test_stronger_method_rates_higher() {
        let metrics_for = |m| {
            let input = SimulationInput::clamped(50.0, 40.0, 25.0, m);
            PerformanceMetrics::from_series(&simulate_linear_drop(&input))
        };
        let air = metrics_for(CoolingMethod::Air);
        let liquid = metrics_for(CoolingMethod::Liquid);
        let oil = metrics_for(CoolingMethod::MineralOil);

        assert!(air.efficiency_pct < liquid.efficiency_pct);
        assert!(liquid.efficiency_pct < oil.efficiency_pct);
        assert!(air.cooling_rate_per_s < oil.cooling_rate_per_s);
        // Mineral oil on these defaults: drop = 0.9*3*9 = 24.3, base 47.5
        // → 51.2% → Excellent
        assert_eq!(oil.rating(), EfficiencyRating::Excellent);
    }
}
