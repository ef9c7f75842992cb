//! Estimation feature: the technical study form and its report.

pub mod ui;
