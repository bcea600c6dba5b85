pub mod feedback;
pub mod plan_client;

pub use feedback::FeedbackLink;
pub use plan_client::{PlanClient, Planner, DEFAULT_API_URL, DEFAULT_TIMEOUT};
