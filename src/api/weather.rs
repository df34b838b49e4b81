//! Forecast DTOs for the third-party weather API
//!
//! Only the fields the app displays are modelled; everything is optional
//! because the upstream omits sections freely.

use serde::Deserialize;

use crate::models::{CurrentConditions, ForecastDay, WeatherAlert, WeatherForecast, WeatherLocation};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherResponseDto {
    #[serde(default)]
    pub location: Option<LocationDto>,

    #[serde(default)]
    pub current: Option<CurrentDto>,

    #[serde(default)]
    pub forecast: Option<ForecastDto>,

    #[serde(default)]
    pub alerts: Option<AlertsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionDto {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentDto {
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub condition: Option<ConditionDto>,
    #[serde(default)]
    pub humidity: Option<u32>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub uv: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDto {
    #[serde(default)]
    pub forecastday: Vec<ForecastDayDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDayDto {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub day: Option<DayDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayDto {
    #[serde(default)]
    pub maxtemp_c: Option<f64>,
    #[serde(default)]
    pub mintemp_c: Option<f64>,
    #[serde(default)]
    pub avghumidity: Option<u32>,
    #[serde(default)]
    pub daily_chance_of_rain: Option<u32>,
    #[serde(default)]
    pub condition: Option<ConditionDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsDto {
    #[serde(default)]
    pub alert: Vec<AlertDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertDto {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl From<WeatherResponseDto> for WeatherForecast {
    fn from(dto: WeatherResponseDto) -> Self {
        let days = dto
            .forecast
            .map(|f| f.forecastday)
            .unwrap_or_default()
            .into_iter()
            .map(|fd| {
                let day = fd.day.unwrap_or_default();
                ForecastDay {
                    date: fd.date,
                    max_temp_c: day.maxtemp_c,
                    min_temp_c: day.mintemp_c,
                    avg_humidity: day.avghumidity,
                    chance_of_rain: day.daily_chance_of_rain,
                    condition: day.condition.and_then(|c| c.text),
                }
            })
            .collect();

        let alerts = dto
            .alerts
            .map(|a| a.alert)
            .unwrap_or_default()
            .into_iter()
            .map(|a| WeatherAlert {
                headline: a.headline,
                severity: a.severity,
                event: a.event,
                description: a.desc,
            })
            .collect();

        WeatherForecast {
            location: dto.location.map(|l| WeatherLocation {
                name: l.name,
                region: l.region,
                country: l.country,
                local_time: l.localtime,
            }),
            current: dto.current.map(|c| CurrentConditions {
                temp_c: c.temp_c,
                feels_like_c: c.feelslike_c,
                condition: c.condition.and_then(|c| c.text),
                humidity: c.humidity,
                wind_kph: c.wind_kph,
                uv: c.uv,
            }),
            days,
            alerts,
        }
    }
}
