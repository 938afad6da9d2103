use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_eventbridge::Client;
use aws_sdk_eventbridge::error::DisplayErrorContext;
use aws_sdk_eventbridge::types::PutEventsRequestEntry;
use tracing::debug;

use crate::entry::EventEntry;
use crate::errors::DispatchError;
use crate::sink::{EventSink, SinkAck};

/// Region used when neither the CLI nor the config names one.
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Connection settings for the EventBridge sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub region: String,
    /// Target bus; the account's default bus when absent.
    pub event_bus_name: Option<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            event_bus_name: None,
        }
    }
}

/// [`EventSink`] backed by the EventBridge `PutEvents` API.
#[derive(Debug, Clone)]
pub struct EventBridgeSink {
    client: Client,
    event_bus_name: Option<String>,
}

impl EventBridgeSink {
    /// Resolve the AWS configuration for the region and build a client.
    pub async fn connect(config: &SinkConfig) -> Result<Self, DispatchError> {
        let region = config.region.trim();
        if region.is_empty() {
            return Err(DispatchError::Session("region must not be empty".to_string()));
        }

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        verify_credentials(&sdk_config).await?;

        debug!(event = "session_created", region, "eventbridge client ready");
        Ok(Self::from_sdk_config(&sdk_config, config.event_bus_name.clone()))
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig, event_bus_name: Option<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            event_bus_name,
        }
    }
}

/// Resolve credentials once so a missing or broken chain fails before any
/// batch is built.
pub async fn verify_credentials(sdk_config: &SdkConfig) -> Result<(), DispatchError> {
    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        DispatchError::Session("no AWS credentials provider configured".to_string())
    })?;
    provider.provide_credentials().await.map_err(|err| {
        DispatchError::Session(format!(
            "could not load AWS credentials: {}",
            DisplayErrorContext(&err)
        ))
    })?;
    Ok(())
}

#[async_trait]
impl EventSink for EventBridgeSink {
    fn name(&self) -> &'static str {
        "eventbridge"
    }

    async fn put_events(&self, entries: Vec<EventEntry>) -> Result<SinkAck, DispatchError> {
        let entries: Vec<PutEventsRequestEntry> = entries
            .into_iter()
            .map(|entry| {
                PutEventsRequestEntry::builder()
                    .source(entry.source)
                    .detail_type(entry.detail_type)
                    .detail(entry.detail)
                    .set_event_bus_name(self.event_bus_name.clone())
                    .build()
            })
            .collect();

        let output = self
            .client
            .put_events()
            .set_entries(Some(entries))
            .send()
            .await
            .map_err(|err| DispatchError::Submit(DisplayErrorContext(&err).to_string()))?;

        Ok(SinkAck {
            failed_entries: usize::try_from(output.failed_entry_count()).unwrap_or(0),
        })
    }
}
