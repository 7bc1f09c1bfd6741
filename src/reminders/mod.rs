pub mod engine;
pub mod geo;
pub mod runner;
pub mod window;

pub use engine::{run_pass, ReminderContext, ReminderOutcome};
pub use geo::distance_km;
pub use runner::run_reminder_pass;
