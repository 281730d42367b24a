mod app;
mod controls;
mod gradient_chart;
mod metric_cards;
mod nav_bar;
mod temp_chart;

pub use app::App;
pub use controls::SimulationControls;
pub use gradient_chart::GradientChart;
pub use metric_cards::MetricCards;
pub use nav_bar::NavBar;
pub use temp_chart::TempChart;
