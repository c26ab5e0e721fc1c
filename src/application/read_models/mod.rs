//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a denormalized, serializable
//! representation of the scan results.

pub mod match_report_read_model;
pub mod match_report_read_model_builder;

pub use match_report_read_model::{
    DependencyView, MatchReportReadModel, ProjectView, SummaryView, TargetFrameworkView, ToolView,
};
pub use match_report_read_model_builder::MatchReportReadModelBuilder;
