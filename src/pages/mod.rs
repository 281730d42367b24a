mod about;
mod gradient;
mod not_found;
mod report;

pub use about::AboutPage;
pub use gradient::GradientPage;
pub use not_found::NotFoundPage;
pub use report::ReportPage;
