mod method;
mod metrics;
mod thermal;

pub use method::{ComparisonRow, CoolingMethod, ALL_METHODS};
pub use metrics::{
    decay_efficiency_pct, population_std_dev, EfficiencyRating, PerformanceMetrics,
};
pub use thermal::{
    simulate_decay, simulate_linear_drop, SimulationInput, SimulationResult, AMBIENT_RANGE,
    DECAY_STEPS, LINEAR_STEPS, LOAD_RANGE,
};
