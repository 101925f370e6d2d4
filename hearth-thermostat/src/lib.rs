// hearth-thermostat/src/lib.rs
pub mod delegate;
pub mod panel;
pub mod state;

pub use delegate::ThermostatDelegate;
pub use panel::ThermostatPanel;
pub use state::{HvacMode, Thermostat};
