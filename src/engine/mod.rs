pub mod record;
pub mod simulation;

pub use record::{round_to_cents, YearlyRecord};
pub use simulation::{calculate_compound_interest, simulate};
