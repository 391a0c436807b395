//! Monitor configuration
//!
//! Environment-driven configuration, resolved once at startup and
//! immutable for the run. All timestamps in the pipeline share one clock
//! domain (the camera boards run on UTC); this is fixed here and never
//! mixed with local time.

use crate::error::{Error, Result};
use chrono::Duration;
use std::path::PathBuf;

/// MQTT publishing settings
#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Topic template; `{board_id}` is substituted at publish time
    pub topic_template: String,
    /// QoS level (0-2)
    pub qos: u8,
    pub retain: bool,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
    /// Publish attempts before giving up
    pub retries: u32,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("MQTT_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("MQTT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1883),
            username: std::env::var("MQTT_USER").unwrap_or_default(),
            password: std::env::var("MQTT_PASS").unwrap_or_default(),
            topic_template: std::env::var("MQTT_TOPIC")
                .unwrap_or_else(|_| "storeyes/{board_id}/recordings".to_string()),
            qos: std::env::var("QOS")
                .ok()
                .and_then(|q| q.parse().ok())
                .unwrap_or(1),
            retain: std::env::var("RETAIN")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            timeout_secs: std::env::var("TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(5),
            retries: std::env::var("RETRIES")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(3),
        }
    }
}

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Directory holding the camera recordings
    pub recordings_dir: PathBuf,
    /// Nominal time between consecutive recordings
    pub expected_interval: Duration,
    /// Slack added to the expected interval before a gap is anomalous
    pub tolerance: Duration,
    /// Window past tolerance in which a stale newest file is FINISHING
    pub finishing_grace: Duration,
    /// Leave the newest entry out of gap comparisons (it may still be
    /// written when the run executes)
    pub exclude_newest: bool,
    /// MQTT publishing settings
    pub mqtt: MqttConfig,
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            recordings_dir: std::env::var("RECORDINGS_DIR")
                .map(|d| expand_home(&d))
                .unwrap_or_else(|_| expand_home("~/recordings")),
            expected_interval: Duration::minutes(
                std::env::var("EXPECTED_INTERVAL_MINUTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
            tolerance: Duration::seconds(
                std::env::var("TOLERANCE_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),
            finishing_grace: Duration::seconds(
                std::env::var("FINISHING_GRACE_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(120),
            ),
            exclude_newest: true,
            mqtt: MqttConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Reject invalid values before any computation runs
    pub fn validate(&self) -> Result<()> {
        if self.expected_interval <= Duration::zero() {
            return Err(Error::Config(
                "expected interval must be positive".to_string(),
            ));
        }
        if self.tolerance < Duration::zero() {
            return Err(Error::Config("tolerance must not be negative".to_string()));
        }
        if self.finishing_grace < Duration::zero() {
            return Err(Error::Config(
                "finishing grace must not be negative".to_string(),
            ));
        }
        if self.mqtt.qos > 2 {
            return Err(Error::Config(format!(
                "QoS must be 0-2, got {}",
                self.mqtt.qos
            )));
        }
        Ok(())
    }
}
