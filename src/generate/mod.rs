mod report;

pub use report::{generate_report, relative_display, write_report, REPORT_NOTE, REPORT_TITLE};
