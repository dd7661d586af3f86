mod charts;
mod overview;
mod summary;

pub use charts::ChartsSection;
pub use overview::OverviewSection;
pub use summary::SummarySection;
