//! Weather forecast models

use serde::Serialize;

/// Multi-day forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherForecast {
    pub location: Option<WeatherLocation>,
    pub current: Option<CurrentConditions>,
    pub days: Vec<ForecastDay>,
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub local_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temp_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub condition: Option<String>,
    pub humidity: Option<u32>,
    pub wind_kph: Option<f64>,
    pub uv: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp_c: Option<f64>,
    pub min_temp_c: Option<f64>,
    pub avg_humidity: Option<u32>,
    pub chance_of_rain: Option<u32>,
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAlert {
    pub headline: String,
    pub severity: Option<String>,
    pub event: Option<String>,
    pub description: Option<String>,
}
