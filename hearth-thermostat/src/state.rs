// hearth-thermostat/src/state.rs
use hearth_rest::JsonMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operating mode reported by a thermostat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HvacMode {
    Heat,
    Cool,
    HeatCool,
    Eco,
    #[default]
    Off,
}

impl std::fmt::Display for HvacMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            HvacMode::Heat => "heat",
            HvacMode::Cool => "cool",
            HvacMode::HeatCool => "heat-cool",
            HvacMode::Eco => "eco",
            HvacMode::Off => "off",
        };
        write!(f, "{text}")
    }
}

/// One thermostat's displayable state. Fields mirror the device API's JSON
/// object, so a value can be read straight from a fetched mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thermostat {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_temp: i64,
    #[serde(default)]
    pub target_temp: i64,
    #[serde(default)]
    pub hvac_mode: HvacMode,
    #[serde(default)]
    pub fan_timer_active: bool,
}

impl Thermostat {
    /// Build a thermostat from a fetched JSON mapping. Unknown fields are
    /// ignored, missing fields take their defaults.
    pub fn from_fields(fields: JsonMap) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(fields))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_a_full_mapping() {
        let fields = json!({
            "id": "t-123",
            "name": "Hallway",
            "current_temp": 72,
            "target_temp": 70,
            "hvac_mode": "heat-cool",
            "fan_timer_active": true,
        });
        let thermostat = Thermostat::from_fields(fields.as_object().unwrap().clone()).unwrap();
        assert_eq!(thermostat.name, "Hallway");
        assert_eq!(thermostat.current_temp, 72);
        assert_eq!(thermostat.hvac_mode, HvacMode::HeatCool);
        assert!(thermostat.fan_timer_active);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let fields = json!({"id": "t-123"});
        let thermostat = Thermostat::from_fields(fields.as_object().unwrap().clone()).unwrap();
        assert_eq!(thermostat.id, "t-123");
        assert_eq!(thermostat.hvac_mode, HvacMode::Off);
        assert!(!thermostat.fan_timer_active);
    }

    #[test]
    fn hvac_mode_uses_wire_names() {
        assert_eq!(serde_json::to_value(HvacMode::HeatCool).unwrap(), json!("heat-cool"));
        assert_eq!(HvacMode::Eco.to_string(), "eco");
    }
}
