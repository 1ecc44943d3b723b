//! Environment diagnostics.

pub mod report;

pub use report::{host_platform, installed_version, DoctorReport, PLACEHOLDER};
