//! Small formatting helpers shared by the reports

pub mod string;
