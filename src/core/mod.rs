pub mod form;
pub mod steps;
pub mod wizard;

pub use form::{join_list, parse_list, FormField};
pub use steps::{WizardStep, INPUT_STEPS};
pub use wizard::{PlanStatus, Screen, Wizard};
