use crate::{CoreError, CoreResult, DecodedValue, ToJson};

use gw_proto::TypeUrl;
use gw_proto::cosmos::bank::v1beta1::MsgSendResponse;
use gw_proto::registry::v1::{MsgCreatePresignedResponse, MsgUpdateEntryResponse};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use prost::Message;
use serde_json::Value;

/// Pure decode function from message bytes to a JSON value
pub type DecodeFn = Arc<dyn Fn(&[u8]) -> CoreResult<Value> + Send + Sync>;

/// Immutable mapping from `typeUrl` to decoder.
///
/// Built once at startup and shared read-only. Extending it means building a
/// new registry from [`MessageRegistry::to_builder`].
#[derive(Clone, Default)]
pub struct MessageRegistry {
    decoders: HashMap<String, DecodeFn>,
}

impl MessageRegistry {
    pub fn builder() -> MessageRegistryBuilder {
        MessageRegistryBuilder::default()
    }

    /// Registry with every message response this gateway knows about
    pub fn standard() -> Self {
        Self::builder()
            .register_message::<MsgSendResponse>()
            .register_message::<MsgCreatePresignedResponse>()
            .register_message::<MsgUpdateEntryResponse>()
            .build()
    }

    /// Start a new builder seeded with this registry's decoders
    pub fn to_builder(&self) -> MessageRegistryBuilder {
        MessageRegistryBuilder {
            decoders: self.decoders.clone(),
        }
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.decoders.contains_key(type_url)
    }

    /// Registered type URLs, sorted
    pub fn type_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        urls.sort_unstable();
        urls
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decode `bytes` as the message named by `type_url`.
    ///
    /// Never fails: an unregistered type or a decoder error yields a
    /// [`DecodedValue::Failed`] carrying the raw bytes, so one bad message
    /// cannot abort a batch.
    pub fn decode(&self, type_url: &str, bytes: &[u8]) -> DecodedValue {
        let Some(decoder) = self.decoders.get(type_url) else {
            debug!("No decoder registered for {}", type_url);
            return DecodedValue::unknown_type(type_url, bytes);
        };

        match decoder(bytes) {
            Ok(value) => DecodedValue::Decoded(value),
            Err(e) => {
                warn!("Decoder for {} failed: {}", type_url, e);
                DecodedValue::failed(e.message(), bytes)
            }
        }
    }
}

impl fmt::Debug for MessageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageRegistry")
            .field("type_urls", &self.type_urls())
            .finish()
    }
}

#[derive(Default)]
pub struct MessageRegistryBuilder {
    decoders: HashMap<String, DecodeFn>,
}

impl MessageRegistryBuilder {
    /// Register a decoder; a later registration for the same URL replaces the earlier one
    pub fn register<S, F>(mut self, type_url: S, decoder: F) -> Self
    where
        S: Into<String>,
        F: Fn(&[u8]) -> CoreResult<Value> + Send + Sync + 'static,
    {
        self.decoders.insert(type_url.into(), Arc::new(decoder));
        self
    }

    /// Register a prost message under its own type URL
    pub fn register_message<M>(self) -> Self
    where
        M: Message + Default + TypeUrl + ToJson + 'static,
    {
        self.register(M::TYPE_URL, |bytes: &[u8]| {
            decode_message::<M>(bytes).map(|message| message.to_json())
        })
    }

    pub fn build(self) -> MessageRegistry {
        MessageRegistry {
            decoders: self.decoders,
        }
    }
}

/// Decode a prost message, tagging failures with its type URL
#[track_caller]
pub fn decode_message<M>(bytes: &[u8]) -> CoreResult<M>
where
    M: Message + Default + TypeUrl,
{
    M::decode(bytes).map_err(|e| CoreError::proto_decode(M::TYPE_URL, e))
}
