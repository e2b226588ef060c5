use std::fmt;

/// Fixed weather report. No lookup is performed; every city gets the same
/// conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub condition: &'static str,
    pub temperature_c: i32,
}

impl WeatherReport {
    pub fn for_city(city: &str) -> Self {
        Self {
            city: city.to_string(),
            condition: "sunny",
            temperature_c: 25,
        }
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The current weather in {} is {} with a temperature of {}°C.",
            self.city, self.condition, self.temperature_c
        )
    }
}
