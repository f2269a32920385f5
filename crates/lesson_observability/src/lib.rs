//! Lesson Evaluator observability: tracing setup shared by the CLI and the web server.
//!
//! - `tracing-subscriber` fmt output on stderr, filtered by `EnvFilter`
//! - optional OTLP span export when an endpoint is configured
//! - span helpers for HTTP requests and grading calls
//!
//! # Quick Start
//!
//! ```no_run
//! use lesson_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("lesson-eval").with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), lesson_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` or `SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` - Service version
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint
//! - `OTEL_LOG_LEVEL` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use crate::tracing::{record_duration, record_error};
