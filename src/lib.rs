//! plan-ai: a step-by-step trip planning wizard
//!
//! The wizard walks through a fixed sequence of input steps, collects the answers
//! into a [`TripRequest`], posts it to a remote planner API and renders the
//! returned itinerary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plan_ai::{render, PlanClient, Wizard};
//!
//! #[tokio::main]
//! async fn main() {
//!     let planner = PlanClient::new("http://127.0.0.1:8000/api/v1/plan");
//!     let mut wizard = Wizard::new();
//!
//!     wizard.submit(&planner).await;
//!     println!("{}", render::render_screen(&wizard, false));
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod schemas;
pub mod services;
pub mod types;

pub use config::Config;
pub use crate::core::{FormField, PlanStatus, Screen, Wizard, WizardStep};
pub use error::{PlanAiError, Result, GENERIC_FAILURE_MESSAGE};
pub use services::{FeedbackLink, PlanClient, Planner};
pub use types::{TripRequest, TripResponse};

#[cfg(feature = "cli")]
pub mod cli;
