//! Eco-Driving Tips Client
//!
//! Outbound boundary to an OpenAI-compatible chat-completions service
//! that turns a numeric driving digest into free-text tips. The service's
//! output is displayed verbatim by the UI and never validated beyond
//! extracting the string lists.
//!
//! Any failure here — unreachable host, timeout, non-success status,
//! malformed payload — degrades to a fixed static tip list and is logged,
//! never surfaced to the caller as an error.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::MetricsError;
use crate::maintenance::MaintenanceItem;
use crate::summary::DrivingDigest;

/// Default OpenAI-compatible API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model for tip generation
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Static eco-driving tips shown when the service is unavailable
pub fn fallback_driving_tips() -> Vec<String> {
    vec![
        "Practice gradual acceleration to improve fuel efficiency.".to_string(),
        "Maintain a steady speed and avoid unnecessary braking.".to_string(),
        "Regular vehicle maintenance keeps your car running efficiently.".to_string(),
    ]
}

/// Static maintenance advice shown when the service is unavailable
pub fn fallback_maintenance_advice() -> MaintenanceAdvice {
    MaintenanceAdvice {
        recommendations: vec![
            "Check tire pressure and inflate to recommended levels.".to_string(),
            "Consider scheduling an oil change in the next 30 days.".to_string(),
            "Inspect air filters and replace if dirty.".to_string(),
        ],
        urgent_items: Vec::new(),
    }
}

/// Maintenance suggestions returned by the tip service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAdvice {
    /// General maintenance recommendations
    pub recommendations: Vec<String>,
    /// Items the service considers urgent; may be empty
    #[serde(default)]
    pub urgent_items: Vec<String>,
}

/// Chat-completions response envelope
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the tip-generation service
pub struct TipsClient {
    /// HTTP client for API requests
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl TipsClient {
    /// Create a client against the default API base with the default
    /// model and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("EcoDriveCompanion/0.1")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        TipsClient {
            client,
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different OpenAI-compatible base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate eco-driving tips from a driving digest.
    ///
    /// Always returns a non-empty list: on any service failure the static
    /// fallback tips are returned and the failure is logged.
    pub async fn driving_tips(&self, digest: &DrivingDigest) -> Vec<String> {
        match self.request_driving_tips(digest).await {
            Ok(tips) => tips,
            Err(e) => {
                tracing::warn!("tip generation failed, using fallback tips: {e}");
                fallback_driving_tips()
            }
        }
    }

    /// Generate maintenance advice from the current schedule.
    ///
    /// Same degradation contract as [`TipsClient::driving_tips`].
    pub async fn maintenance_advice(&self, schedule: &[MaintenanceItem]) -> MaintenanceAdvice {
        match self.request_maintenance_advice(schedule).await {
            Ok(advice) => advice,
            Err(e) => {
                tracing::warn!("maintenance analysis failed, using fallback advice: {e}");
                fallback_maintenance_advice()
            }
        }
    }

    async fn request_driving_tips(
        &self,
        digest: &DrivingDigest,
    ) -> Result<Vec<String>, MetricsError> {
        let system = "You are an eco-driving expert. Analyze the driving data and provide \
                      specific, actionable tips for improvement. Format your response as a \
                      JSON object with a 'tips' array containing 3 specific tips.";
        let prompt = format!(
            "Based on the following driving data from the past week:\n\
             - Average Eco Score: {} (scale 0-100, higher is better)\n\
             - Average Fuel Consumption: {} L/100km\n\
             - Total Harsh Braking Events: {}\n\
             - Total Rapid Acceleration Events: {}\n\n\
             Please provide 3 specific eco-driving tips that will help improve fuel \
             efficiency and reduce emissions.",
            digest.average_eco_score,
            digest.average_fuel_consumption,
            digest.total_harsh_braking_events,
            digest.total_rapid_acceleration_events,
        );

        let content = self.chat(system, &prompt).await?;
        parse_driving_tips(&content)
    }

    async fn request_maintenance_advice(
        &self,
        schedule: &[MaintenanceItem],
    ) -> Result<MaintenanceAdvice, MetricsError> {
        let system = "You are a vehicle maintenance expert. Analyze the vehicle data and \
                      suggest maintenance actions. Format your response as a JSON object \
                      with 'recommendations' and 'urgent_items' string arrays.";
        let mut prompt =
            String::from("Based on this vehicle's maintenance schedule, what maintenance is needed?\n");
        for item in schedule {
            prompt.push_str(&format!(
                "- {}: last serviced {}, next due {} (every {} km), currently {}\n",
                item.name,
                item.last_service_date,
                item.next_due_date,
                item.interval_km,
                item.status.label(),
            ));
        }

        let content = self.chat(system, &prompt).await?;
        parse_maintenance_advice(&content)
    }

    /// Send one chat-completions request and return the first choice's
    /// message content
    async fn chat(&self, system: &str, user: &str) -> Result<String, MetricsError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "response_format": { "type": "json_object" },
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| MetricsError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetricsError::ExternalService(format!(
                "tip service returned status {}",
                response.status()
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| MetricsError::ExternalService(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| MetricsError::ExternalService("response contained no choices".to_string()))
    }
}

/// Extract the `tips` string array from a model response
fn parse_driving_tips(content: &str) -> Result<Vec<String>, MetricsError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| MetricsError::ExternalService(format!("malformed tips payload: {e}")))?;

    let tips: Vec<String> = value
        .get("tips")
        .and_then(|t| t.as_array())
        .ok_or_else(|| MetricsError::ExternalService("payload missing 'tips' array".to_string()))?
        .iter()
        .filter_map(|t| t.as_str().map(str::to_string))
        .collect();

    if tips.is_empty() {
        return Err(MetricsError::ExternalService(
            "'tips' array contained no strings".to_string(),
        ));
    }
    Ok(tips)
}

/// Extract recommendations and urgent items from a model response
fn parse_maintenance_advice(content: &str) -> Result<MaintenanceAdvice, MetricsError> {
    let advice: MaintenanceAdvice = serde_json::from_str(content)
        .map_err(|e| MetricsError::ExternalService(format!("malformed advice payload: {e}")))?;

    if advice.recommendations.is_empty() {
        return Err(MetricsError::ExternalService(
            "advice contained no recommendations".to_string(),
        ));
    }
    Ok(advice)
}
