//! Orchestration of an investigation: collect, persist, analyze, visualize.
//!
//! Scraping and persistence are collaborators behind [`PresenceSource`] and
//! [`InvestigationStore`]; this crate only sequences them around the risk
//! analyzer and graph builder.

pub mod error;
pub mod pipeline;
pub mod source;
pub mod store;

pub use error::{PipelineError, SourceError, StoreError};
pub use pipeline::{investigation_view, run_investigation, InvestigationRun, InvestigationView};
pub use source::{CaptureSource, PresenceSource};
pub use store::{InvestigationStore, MemoryStore};
