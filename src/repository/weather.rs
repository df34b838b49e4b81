//! Seven-day forecasts from the third-party weather API

use std::sync::Arc;

use crate::api::WeatherResponseDto;
use crate::classify::ErrorMessages;
use crate::error::{AppError, Result};
use crate::models::WeatherForecast;
use crate::transport::{ApiRequest, Transport};

use super::support::{Endpoint, require_text};

pub const FORECAST_DAYS: u32 = 7;
pub const MISSING_API_KEY: &str = "Weather API key is not configured";

/// Forecast lookups against a separate transport (its own base URL).
pub struct WeatherRepository {
    endpoint: Endpoint,
    api_key: Option<String>,
}

impl WeatherRepository {
    pub fn new(transport: Arc<dyn Transport>, api_key: Option<String>) -> Self {
        let messages = ErrorMessages::new()
            .unauthorized("Invalid weather API key")
            .forbidden("Weather API key is not allowed to access forecasts")
            .not_found("Location not found");
        Self {
            endpoint: Endpoint::new(transport, messages, "weather"),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub async fn forecast(&self, location: &str) -> Result<WeatherForecast> {
        let location = require_text(location, "Location cannot be empty")?;
        let Some(api_key) = &self.api_key else {
            return Err(AppError::Authentication(MISSING_API_KEY.to_string()));
        };

        let request = ApiRequest::get("forecast.json")
            .query("key", api_key)
            .query("q", &location)
            .query("days", FORECAST_DAYS)
            .query("aqi", "yes")
            .query("alerts", "yes");

        let dto: WeatherResponseDto = self.endpoint.fetch(request).await?;
        let forecast = WeatherForecast::from(dto);
        log::debug!(
            "Forecast for {location}: {} days, {} alerts",
            forecast.days.len(),
            forecast.alerts.len()
        );
        Ok(forecast)
    }
}
