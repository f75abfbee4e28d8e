pub mod contacts;
pub mod output;
pub mod parser;

pub use contacts::ContactStream;
pub use output::{ReportWriter, TextReportWriter};
pub use parser::{parse_float, parse_id, parse_person};
