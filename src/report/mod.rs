pub mod logic;
pub mod model;

pub use logic::{build_report, build_report_row};
pub use model::CardReportRow;
