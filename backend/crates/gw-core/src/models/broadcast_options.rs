use serde::{Deserialize, Serialize};

/// Caller-supplied context for a broadcast. Carried through for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastOptions {
    pub service: String,
    pub action: String,
}

impl BroadcastOptions {
    pub fn new<S: Into<String>, A: Into<String>>(service: S, action: A) -> Self {
        Self {
            service: service.into(),
            action: action.into(),
        }
    }
}
