// hearth-thermostat/src/delegate.rs
use crate::state::Thermostat;

/// Receives notifications from a `ThermostatPanel`.
///
/// Registration is explicit and owned by the panel (`set_delegate` /
/// `clear_delegate`); there is no implicit deregistration.
pub trait ThermostatDelegate {
    /// A local user action changed the displayed thermostat's state.
    fn thermostat_changed(&self, thermostat: &Thermostat);

    /// The user asked to move on to the next thermostat in the collection.
    fn show_next_thermostat(&self);
}
