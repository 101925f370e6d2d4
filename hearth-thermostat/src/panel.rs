// hearth-thermostat/src/panel.rs
use crate::delegate::ThermostatDelegate;
use crate::state::Thermostat;

/// A passive display panel for one thermostat.
///
/// Holds the last state set by the caller plus two interaction gates: a
/// `busy` flag while a fetch or write is in flight and an `enabled` flag for
/// the panel as a whole. Local user actions (`turn_fan`, `request_next`) are
/// reported to the registered delegate; programmatic updates are not.
pub struct ThermostatPanel {
    thermostat: Thermostat,
    enabled: bool,
    busy: bool,
    delegate: Option<Box<dyn ThermostatDelegate>>,
}

impl ThermostatPanel {
    pub fn new(thermostat: Thermostat) -> Self {
        Self {
            thermostat,
            enabled: true,
            busy: false,
            delegate: None,
        }
    }

    pub fn thermostat(&self) -> &Thermostat {
        &self.thermostat
    }

    pub fn set_delegate(&mut self, delegate: impl ThermostatDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Replace the displayed state. Caller-driven, so the delegate is not
    /// notified.
    pub fn update_with(&mut self, thermostat: Thermostat) {
        self.thermostat = thermostat;
    }

    /// Local fan override. Ignored while the panel is disabled or busy;
    /// otherwise flips the fan timer and notifies the delegate.
    pub fn turn_fan(&mut self, on: bool) {
        if !self.enabled || self.busy {
            return;
        }
        self.thermostat.fan_timer_active = on;
        if let Some(delegate) = &self.delegate {
            delegate.thermostat_changed(&self.thermostat);
        }
    }

    /// The user asked for the next thermostat in the collection.
    pub fn request_next(&self) {
        if !self.enabled {
            return;
        }
        if let Some(delegate) = &self.delegate {
            delegate.show_next_thermostat();
        }
    }

    pub fn begin_loading(&mut self) {
        self.busy = true;
    }

    pub fn end_loading(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        changes: Rc<RefCell<Vec<Thermostat>>>,
        next_requests: Rc<RefCell<u32>>,
    }

    impl ThermostatDelegate for Recorder {
        fn thermostat_changed(&self, thermostat: &Thermostat) {
            self.changes.borrow_mut().push(thermostat.clone());
        }

        fn show_next_thermostat(&self) {
            *self.next_requests.borrow_mut() += 1;
        }
    }

    fn panel_with_recorder() -> (ThermostatPanel, Rc<RefCell<Vec<Thermostat>>>, Rc<RefCell<u32>>) {
        let recorder = Recorder::default();
        let changes = Rc::clone(&recorder.changes);
        let next_requests = Rc::clone(&recorder.next_requests);
        let mut panel = ThermostatPanel::new(Thermostat {
            id: "t-1".to_string(),
            name: "Hallway".to_string(),
            ..Thermostat::default()
        });
        panel.set_delegate(recorder);
        (panel, changes, next_requests)
    }

    #[test]
    fn turn_fan_notifies_delegate_with_new_state() {
        let (mut panel, changes, _) = panel_with_recorder();

        panel.turn_fan(true);

        assert!(panel.thermostat().fan_timer_active);
        let changes = changes.borrow();
        assert_eq!(changes.len(), 1);
        assert!(changes[0].fan_timer_active);
        assert_eq!(changes[0].id, "t-1");
    }

    #[test]
    fn turn_fan_is_ignored_while_disabled_or_busy() {
        let (mut panel, changes, _) = panel_with_recorder();

        panel.disable();
        panel.turn_fan(true);
        assert!(!panel.thermostat().fan_timer_active);

        panel.enable();
        panel.begin_loading();
        panel.turn_fan(true);
        assert!(!panel.thermostat().fan_timer_active);

        panel.end_loading();
        panel.turn_fan(true);
        assert!(panel.thermostat().fan_timer_active);
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn request_next_notifies_delegate_unless_disabled() {
        let (mut panel, _, next_requests) = panel_with_recorder();

        panel.request_next();
        assert_eq!(*next_requests.borrow(), 1);

        panel.disable();
        panel.request_next();
        assert_eq!(*next_requests.borrow(), 1);
    }

    #[test]
    fn update_with_replaces_state_without_notifying() {
        let (mut panel, changes, _) = panel_with_recorder();

        panel.update_with(Thermostat {
            id: "t-2".to_string(),
            current_temp: 68,
            ..Thermostat::default()
        });

        assert_eq!(panel.thermostat().id, "t-2");
        assert_eq!(panel.thermostat().current_temp, 68);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn cleared_delegate_is_no_longer_notified() {
        let (mut panel, changes, _) = panel_with_recorder();

        panel.clear_delegate();
        panel.turn_fan(true);

        assert!(panel.thermostat().fan_timer_active);
        assert!(changes.borrow().is_empty());
    }
}
