//! Web front-end: a single form page that grades a lesson explanation.
//!
//! | Route            | Purpose                          |
//! |------------------|----------------------------------|
//! | `GET /`          | Empty form                       |
//! | `POST /evaluate` | Grade form fields, render result |
//! | `GET /healthz`   | Liveness probe (JSON)            |

pub mod config;
pub mod error;
mod render;
mod routes;
mod server;

pub use config::WebConfig;
pub use error::ServerError;
pub use routes::{AppState, build_router};
pub use server::serve;
