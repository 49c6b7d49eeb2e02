pub mod eoq;
pub mod report;
