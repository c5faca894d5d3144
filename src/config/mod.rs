pub mod calculator_config;
pub mod interval;
pub mod params;

pub use calculator_config::{CalculatorConfiguration, CalculatorLimits};
pub use interval::Interval;
pub use params::{ParameterError, SimulationParameters};
