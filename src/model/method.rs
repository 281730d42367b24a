/// The three cooling methods the simulator compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingMethod {
    Air,
    Liquid,
    MineralOil,
}

/// All methods, in ascending cooling-factor order.
pub const ALL_METHODS: [CoolingMethod; 3] = [
    CoolingMethod::Air,
    CoolingMethod::Liquid,
    CoolingMethod::MineralOil,
];

/// Qualitative comparison row for the report table.
///
/// These are fixed editorial values, not derived from the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub efficiency: &'static str,
    pub cost: &'static str,
    pub maintenance: &'static str,
}

impl CoolingMethod {
    /// Dimensionless heat-removal effectiveness in (0, 1].
    ///
    /// Higher means more effective. These constants are the whole "physics"
    /// of the simulator; there is deliberately no runtime configuration.
    pub fn cooling_factor(&self) -> f64 {
        match self {
            CoolingMethod::Air => 0.3,
            CoolingMethod::Liquid => 0.6,
            CoolingMethod::MineralOil => 0.9,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            CoolingMethod::Air => "Air Cooling",
            CoolingMethod::Liquid => "Liquid Cooling",
            CoolingMethod::MineralOil => "Mineral Oil Cooling",
        }
    }

    /// Short identifier used in localStorage and `<select>` values.
    pub fn slug(&self) -> &'static str {
        match self {
            CoolingMethod::Air => "air",
            CoolingMethod::Liquid => "liquid",
            CoolingMethod::MineralOil => "mineral-oil",
        }
    }

    /// Parse a slug back into a method. Unknown slugs fall back to air
    /// cooling so stale stored settings never break the app.
    pub fn from_slug(slug: &str) -> CoolingMethod {
        match slug {
            "liquid" => CoolingMethod::Liquid,
            "mineral-oil" => CoolingMethod::MineralOil,
            _ => CoolingMethod::Air,
        }
    }

    /// The report-table row for this method.
    ///
    /// Kept here, next to `cooling_factor`, so the model and the report
    /// generator share one lookup table instead of drifting copies.
    pub fn comparison(&self) -> ComparisonRow {
        match self {
            CoolingMethod::Air => ComparisonRow {
                efficiency: "Low",
                cost: "Low",
                maintenance: "Easy",
            },
            CoolingMethod::Liquid => ComparisonRow {
                efficiency: "Medium",
                cost: "Medium",
                maintenance: "Moderate",
            },
            CoolingMethod::MineralOil => ComparisonRow {
                efficiency: "High",
                cost: "High",
                maintenance: "Low",
            },
        }
    }
}
