use super::CoolingMethod;

/// CPU load contributes more heat than GPU load in the mixing formula.
const CPU_HEAT_WEIGHT: f64 = 0.6;
const GPU_HEAT_WEIGHT: f64 = 0.4;

/// Exponential model: time constant of the decay envelope, in seconds.
const DECAY_TIME_CONSTANT_S: f64 = 30.0;

/// Exponential model: simulated horizon, one sample per second (t = 0..59).
pub const DECAY_STEPS: u32 = 60;

/// Linear model: degrees shed per second per unit of cooling factor.
const LINEAR_DROP_RATE: f64 = 3.0;

/// Linear model: simulated horizon (t = 0..9).
pub const LINEAR_STEPS: u32 = 10;

/// Input bounds. Clamping happens at construction — the simulation
/// functions themselves assume pre-validated input.
pub const LOAD_RANGE: (f64, f64) = (0.0, 100.0);
pub const AMBIENT_RANGE: (f64, f64) = (20.0, 50.0);

/// One simulation request: component loads, room temperature, cooling method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    pub cpu_load_pct: f64,
    pub gpu_load_pct: f64,
    pub ambient_temp_c: f64,
    pub method: CoolingMethod,
}

impl SimulationInput {
    /// Build an input with all numeric fields clamped into range.
    ///
    /// This is the only validation in the system; out-of-range values are
    /// clamped rather than rejected, matching the slider widgets.
    pub fn clamped(
        cpu_load_pct: f64,
        gpu_load_pct: f64,
        ambient_temp_c: f64,
        method: CoolingMethod,
    ) -> Self {
        Self {
            cpu_load_pct: cpu_load_pct.clamp(LOAD_RANGE.0, LOAD_RANGE.1),
            gpu_load_pct: gpu_load_pct.clamp(LOAD_RANGE.0, LOAD_RANGE.1),
            ambient_temp_c: ambient_temp_c.clamp(AMBIENT_RANGE.0, AMBIENT_RANGE.1),
            method,
        }
    }

    /// Load-weighted heat term shared by both formula variants' inputs.
    pub fn heat_generated(&self) -> f64 {
        self.cpu_load_pct * CPU_HEAT_WEIGHT + self.gpu_load_pct * GPU_HEAT_WEIGHT
    }
}

/// A computed temperature trajectory. `time_steps` and `temperatures`
/// always have the same length; both are built in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub time_steps: Vec<u32>,
    pub temperatures: Vec<f64>,
}

impl SimulationResult {
    pub fn initial_temperature(&self) -> f64 {
        self.temperatures.first().copied().unwrap_or(0.0)
    }

    pub fn final_temperature(&self) -> f64 {
        self.temperatures.last().copied().unwrap_or(0.0)
    }

    pub fn temperature_drop(&self) -> f64 {
        self.initial_temperature() - self.final_temperature()
    }

    /// Elapsed simulated time from first to last sample, in seconds.
    pub fn duration_s(&self) -> f64 {
        match (self.time_steps.first(), self.time_steps.last()) {
            (Some(&first), Some(&last)) => (last - first) as f64,
            _ => 0.0,
        }
    }

    /// (time_s, temp_c) pairs for the chart components.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.time_steps
            .iter()
            .zip(self.temperatures.iter())
            .map(|(&t, &temp)| (t as f64, temp))
            .collect()
    }
}

/// Exponential-decay model (the canonical one, used by the home page).
///
/// The load mix generates a heat term that decays toward ambient with a
/// 30 s time constant, scaled by the method's cooling factor:
///
/// ```text
/// T(t) = ambient + heat * factor * e^(-t/30),   t = 0..59 s
/// ```
///
/// Deterministic: identical input gives a bit-identical trajectory.
pub fn simulate_decay(input: &SimulationInput) -> SimulationResult {
    let heat = input.heat_generated();
    let factor = input.method.cooling_factor();

    let time_steps: Vec<u32> = (0..DECAY_STEPS).collect();
    let temperatures = time_steps
        .iter()
        .map(|&t| {
            input.ambient_temp_c + heat * factor * (-(t as f64) / DECAY_TIME_CONSTANT_S).exp()
        })
        .collect();

    SimulationResult { time_steps, temperatures }
}

/// Linear-drop model (used by the gradient-visualization page).
///
/// Starts from a load-elevated base temperature and sheds a fixed number of
/// degrees per second proportional to the cooling factor:
///
/// ```text
/// base = ambient + (cpu + gpu) / 4
/// T(t) = base - factor * 3t,   t = 0..9 s
/// ```
///
/// The short horizon keeps the ramp visually steep for the gradient chart.
pub fn simulate_linear_drop(input: &SimulationInput) -> SimulationResult {
    let base = input.ambient_temp_c + (input.cpu_load_pct + input.gpu_load_pct) / 4.0;
    let factor = input.method.cooling_factor();

    let time_steps: Vec<u32> = (0..LINEAR_STEPS).collect();
    let temperatures = time_steps
        .iter()
        .map(|&t| base - factor * LINEAR_DROP_RATE * t as f64)
        .collect();

    SimulationResult { time_steps, temperatures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ALL_METHODS;

    fn input(cpu: f64, gpu: f64, ambient: f64, method: CoolingMethod) -> SimulationInput {
        SimulationInput::clamped(cpu, gpu, ambient, method)
    }

    #[test]
    fn test_lengths_match_decay() {
        let result = simulate_decay(&input(50.0, 40.0, 25.0, CoolingMethod::Air));
        assert_eq!(result.time_steps.len(), result.temperatures.len());
        assert_eq!(result.time_steps.len(), DECAY_STEPS as usize);
        assert_eq!(*result.time_steps.first().unwrap(), 0);
        assert_eq!(*result.time_steps.last().unwrap(), 59);
    }

    #[test]
    fn test_lengths_match_linear() {
        let result = simulate_linear_drop(&input(50.0, 40.0, 25.0, CoolingMethod::Liquid));
        assert_eq!(result.time_steps.len(), result.temperatures.len());
        assert_eq!(result.time_steps.len(), LINEAR_STEPS as usize);
        assert_eq!(*result.time_steps.last().unwrap(), 9);
    }

    #[test]
    fn test_determinism() {
        let i = input(73.0, 21.0, 33.0, CoolingMethod::MineralOil);
        assert_eq!(simulate_decay(&i), simulate_decay(&i));
        assert_eq!(simulate_linear_drop(&i), simulate_linear_drop(&i));
    }

    #[test]
    fn test_decay_concrete_scenario() {
        // cpu=50, gpu=40, ambient=25, mineral oil:
        // heat = 50*0.6 + 40*0.4 = 46; T(0) = 25 + 46*0.9 = 66.4
        let result = simulate_decay(&input(50.0, 40.0, 25.0, CoolingMethod::MineralOil));
        assert!((result.initial_temperature() - 66.4).abs() < 1e-9);
        // T(59) = 25 + 41.4 * e^(-59/30) ≈ 30.79
        let expected = 25.0 + 41.4 * (-59.0_f64 / 30.0).exp();
        assert!((result.final_temperature() - expected).abs() < 1e-9);
        assert!((result.final_temperature() - 30.79).abs() < 0.05);
    }

    #[test]
    fn test_linear_concrete_scenario() {
        // cpu=50, gpu=40, ambient=25, air: base = 25 + 90/4 = 47.5,
        // T(t) = 47.5 - 0.9t, T(9) = 39.4
        let result = simulate_linear_drop(&input(50.0, 40.0, 25.0, CoolingMethod::Air));
        assert!((result.initial_temperature() - 47.5).abs() < 1e-9);
        assert!((result.final_temperature() - 39.4).abs() < 1e-9);
        assert!((result.temperature_drop() - 8.1).abs() < 1e-9);
        assert!((result.duration_s() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_load_decay_starts_at_ambient() {
        // heat = 0, so every sample sits exactly at ambient
        let result = simulate_decay(&input(0.0, 0.0, 20.0, CoolingMethod::Liquid));
        assert!((result.initial_temperature() - 20.0).abs() < 1e-12);
        for &t in &result.temperatures {
            assert!((t - 20.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_load_linear_base_is_ambient() {
        let result = simulate_linear_drop(&input(0.0, 0.0, 20.0, CoolingMethod::Air));
        assert!((result.initial_temperature() - 20.0).abs() < 1e-12);
        // Pure cooling-driven ramp from the base
        assert!((result.final_temperature() - (20.0 - 0.3 * 3.0 * 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_stronger_method_ends_cooler_decay() {
        let finals: Vec<f64> = ALL_METHODS
            .iter()
            .map(|&m| simulate_decay(&input(80.0, 60.0, 30.0, m)).final_temperature())
            .collect();
        // Air > Liquid > MineralOil at the end of the run
        assert!(finals[0] > finals[1] && finals[1] > finals[2], "{:?}", finals);
    }

    #[test]
    fn test_stronger_method_ends_cooler_linear() {
        let finals: Vec<f64> = ALL_METHODS
            .iter()
            .map(|&m| simulate_linear_drop(&input(80.0, 60.0, 30.0, m)).final_temperature())
            .collect();
        assert!(finals[0] > finals[1] && finals[1] > finals[2], "{:?}", finals);
    }

    #[test]
    fn test_decay_monotonically_approaches_ambient() {
        let result = simulate_decay(&input(100.0, 100.0, 25.0, CoolingMethod::MineralOil));
        for pair in result.temperatures.windows(2) {
            assert!(pair[1] < pair[0]);
            assert!(pair[1] > 25.0);
        }
    }

    #[test]
    fn test_clamping() {
        let i = SimulationInput::clamped(150.0, -10.0, 5.0, CoolingMethod::Air);
        assert!((i.cpu_load_pct - 100.0).abs() < 1e-12);
        assert!((i.gpu_load_pct - 0.0).abs() < 1e-12);
        assert!((i.ambient_temp_c - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_heat_generated_weighting() {
        let i = input(100.0, 0.0, 25.0, CoolingMethod::Air);
        assert!((i.heat_generated() - 60.0).abs() < 1e-12);
        let i = input(0.0, 100.0, 25.0, CoolingMethod::Air);
        assert!((i.heat_generated() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_points_pairs_up() {
        let result = simulate_linear_drop(&input(50.0, 40.0, 25.0, CoolingMethod::Air));
        let points = result.points();
        assert_eq!(points.len(), LINEAR_STEPS as usize);
        assert!((points[0].0 - 0.0).abs() < 1e-12);
        assert!((points[0].1 - 47.5).abs() < 1e-9);
        assert!((points[9].0 - 9.0).abs() < 1e-12);
    }
}
