//! Deal qualification scoring and coaching workflows for enterprise sales teams.
//!
//! The heart of the crate is the MEDDIC qualification engine under
//! [`workflows::qualification`]: a pure, synchronous scorer that turns a deal
//! snapshot into six dimension scores with evidence trails, a tier
//! classification, and a prioritized list of remediation gaps. Everything
//! around it (service facade, repository, HTTP router) exists so callers can
//! register deals, re-score them as the snapshot evolves, and surface the
//! scorecard to coaching UIs.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
