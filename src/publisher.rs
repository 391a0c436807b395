//! MQTT publisher
//!
//! Publishes the serialized monitoring report to the broker with bounded
//! retries. Each attempt opens a fresh connection, publishes with the
//! configured QoS/retain, waits for the broker acknowledgment under the
//! configured timeout and disconnects.

use crate::config::MqttConfig;
use crate::error::{Error, Result};
use crate::report::MonitoringReport;
use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Outgoing, Packet, QoS};
use std::time::Duration;
use tracing::{info, warn};

const RETRY_PAUSE: Duration = Duration::from_secs(2);

/// MQTT publisher for monitoring reports
pub struct ReportPublisher {
    config: MqttConfig,
}

impl ReportPublisher {
    pub fn new(config: MqttConfig) -> Self {
        Self { config }
    }

    /// Resolve the configured topic template for a board
    pub fn topic_for(&self, board_id: &str) -> String {
        self.config.topic_template.replace("{board_id}", board_id)
    }

    fn qos(&self) -> QoS {
        match self.config.qos {
            0 => QoS::AtMostOnce,
            2 => QoS::ExactlyOnce,
            _ => QoS::AtLeastOnce,
        }
    }

    /// Publish the report, retrying up to the configured attempt count.
    pub async fn publish(&self, report: &MonitoringReport) -> Result<()> {
        let payload = serde_json::to_string(report)?;
        let topic = self.topic_for(&report.board_id);
        let attempts = self.config.retries.max(1);

        let mut last_error = Error::Mqtt("no publish attempts made".to_string());
        for attempt in 1..=attempts {
            info!(
                attempt,
                attempts,
                topic = %topic,
                "Publishing monitoring report"
            );
            match self.publish_once(&topic, payload.as_bytes()).await {
                Ok(()) => {
                    info!(topic = %topic, "Monitoring report published");
                    return Ok(());
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Publish attempt failed");
                    last_error = e;
                }
            }
            if attempt < attempts {
                tokio::time::sleep(RETRY_PAUSE).await;
            }
        }

        Err(last_error)
    }

    async fn publish_once(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let client_id = format!("recmon-{}", std::process::id());
        let mut options =
            MqttOptions::new(client_id, self.config.host.as_str(), self.config.port);
        if !self.config.username.is_empty() {
            options.set_credentials(
                self.config.username.as_str(),
                self.config.password.as_str(),
            );
        }
        options.set_keep_alive(Duration::from_secs(self.config.timeout_secs.max(1)));

        let (client, mut eventloop) = AsyncClient::new(options, 10);
        client
            .publish(topic, self.qos(), self.config.retain, payload)
            .await?;

        let acked = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            self.wait_for_ack(&mut eventloop),
        )
        .await
        .map_err(|_| Error::Mqtt("publish timed out".to_string()))?;

        let _ = client.disconnect().await;
        acked
    }

    /// Drive the event loop until the broker acknowledges the publish
    /// (QoS 1/2) or the packet leaves the outgoing queue (QoS 0).
    async fn wait_for_ack(&self, eventloop: &mut EventLoop) -> Result<()> {
        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::PubAck(_)))
                | Ok(Event::Incoming(Packet::PubComp(_))) => return Ok(()),
                Ok(Event::Outgoing(Outgoing::Publish(_))) if self.qos() == QoS::AtMostOnce => {
                    return Ok(())
                }
                Ok(_) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MqttConfig {
        MqttConfig {
            host: "localhost".to_string(),
            port: 1883,
            username: String::new(),
            password: String::new(),
            topic_template: "storeyes/{board_id}/recordings".to_string(),
            qos: 1,
            retain: true,
            timeout_secs: 5,
            retries: 3,
        }
    }

    #[test]
    fn test_topic_template_substitution() {
        let publisher = ReportPublisher::new(config());
        assert_eq!(
            publisher.topic_for("abcd1234"),
            "storeyes/abcd1234/recordings"
        );
    }

    #[test]
    fn test_qos_mapping() {
        let mut cfg = config();
        cfg.qos = 0;
        assert_eq!(ReportPublisher::new(cfg.clone()).qos(), QoS::AtMostOnce);
        cfg.qos = 1;
        assert_eq!(ReportPublisher::new(cfg.clone()).qos(), QoS::AtLeastOnce);
        cfg.qos = 2;
        assert_eq!(ReportPublisher::new(cfg).qos(), QoS::ExactlyOnce);
    }
}
