use gw_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("{source}")]
    Core {
        #[from]
        source: CoreError,
    },

    #[error("Cannot reach node at {url}: {message} {location}")]
    Connection {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Node HTTP error: {message} {location}")]
    Http {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
    },

    #[error("Node JSON-RPC error {code}: {message} {location}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<String>,
        location: ErrorLocation,
    },

    #[error("Rejected by node with code {code}: {raw_log} {location}")]
    RpcRejection {
        code: u32,
        codespace: String,
        raw_log: String,
        location: ErrorLocation,
    },

    #[error("Query service '{service}' not found. Available services: {} {location}", .available.join(", "))]
    ServiceNotFound {
        service: String,
        available: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Method '{method}' not found on {service}. Available methods: {} {location}", .available.join(", "))]
    MethodNotFound {
        service: String,
        method: String,
        available: Vec<String>,
        location: ErrorLocation,
    },

    #[error("All candidate requests failed for {method} {location}")]
    AllCandidatesFailed {
        method: String,
        location: ErrorLocation,
    },

    #[error("Request does not fit {method}: {message} {location}")]
    RequestEncode {
        method: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot decode {method} response: {message} {location}")]
    ResponseDecode {
        method: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection for {service} already released {location}")]
    ConnectionClosed {
        service: String,
        location: ErrorLocation,
    },

    #[error("Request cancelled {location}")]
    Cancelled { location: ErrorLocation },
}

impl NodeError {
    #[track_caller]
    pub fn connection<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Connection {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        Self::Http {
            message: message.into(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rpc<S: Into<String>>(code: i64, message: S, data: Option<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
            data,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejection<C: Into<String>, L: Into<String>>(
        code: u32,
        codespace: C,
        raw_log: L,
    ) -> Self {
        Self::RpcRejection {
            code,
            codespace: codespace.into(),
            raw_log: raw_log.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn service_not_found(service: &str, available: Vec<String>) -> Self {
        Self::ServiceNotFound {
            service: service.to_string(),
            available,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn method_not_found(service: &str, method: &str, available: Vec<String>) -> Self {
        Self::MethodNotFound {
            service: service.to_string(),
            method: method.to_string(),
            available,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn all_candidates_failed(method: &str) -> Self {
        Self::AllCandidatesFailed {
            method: method.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn request_encode<S: Into<String>>(method: &str, message: S) -> Self {
        Self::RequestEncode {
            method: method.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn response_decode<S: Into<String>>(method: &str, message: S) -> Self {
        Self::ResponseDecode {
            method: method.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn connection_closed(service: &str) -> Self {
        Self::ConnectionClosed {
            service: service.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a reqwest failure: refused connections and timeouts mean the
    /// node is unreachable, everything else is an HTTP-level problem.
    #[track_caller]
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::connection(url, err.to_string())
        } else {
            Self::http(err.to_string(), err.status().map(|s| s.as_u16()))
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Core { source } => match source {
                CoreError::Validation { .. } | CoreError::HexDecode { .. } => "VALIDATION_ERROR",
                _ => "DECODE_ERROR",
            },
            Self::Connection { .. } => "CONNECTION_ERROR",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Rpc { .. } => "RPC_ERROR",
            Self::RpcRejection { .. } => "RPC_REJECTION",
            Self::ServiceNotFound { .. } => "SERVICE_NOT_FOUND",
            Self::MethodNotFound { .. } => "METHOD_NOT_FOUND",
            Self::AllCandidatesFailed { .. } => "ALL_CANDIDATES_FAILED",
            Self::RequestEncode { .. } => "REQUEST_ENCODE",
            Self::ResponseDecode { .. } => "RESPONSE_DECODE",
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::Cancelled { .. } => "CANCELLED",
        }
    }

    /// Message for API consumers, without the source location suffix
    pub fn message(&self) -> String {
        match self {
            Self::Core { source } => source.message(),
            Self::Connection { url, message, .. } => {
                format!("Cannot reach node at {}: {}", url, message)
            }
            Self::Http { message, .. } => message.clone(),
            Self::Rpc {
                code,
                message,
                data,
                ..
            } => match data {
                Some(data) => format!("Node JSON-RPC error {}: {} ({})", code, message, data),
                None => format!("Node JSON-RPC error {}: {}", code, message),
            },
            Self::RpcRejection {
                code,
                codespace,
                raw_log,
                ..
            } => {
                if codespace.is_empty() {
                    format!("Transaction rejected with code {}: {}", code, raw_log)
                } else {
                    format!(
                        "Transaction rejected with code {} ({}): {}",
                        code, codespace, raw_log
                    )
                }
            }
            Self::ServiceNotFound {
                service, available, ..
            } => format!(
                "Query service '{}' not found. Available services: {}",
                service,
                available.join(", ")
            ),
            Self::MethodNotFound {
                service,
                method,
                available,
                ..
            } => format!(
                "Method '{}' not found on {}. Available methods: {}",
                method,
                service,
                available.join(", ")
            ),
            Self::AllCandidatesFailed { method, .. } => {
                format!("All candidate requests failed for {}", method)
            }
            Self::RequestEncode {
                method, message, ..
            } => format!("Request does not fit {}: {}", method, message),
            Self::ResponseDecode {
                method, message, ..
            } => format!("Cannot decode {} response: {}", method, message),
            Self::ConnectionClosed { service, .. } => {
                format!("Connection for {} already released", service)
            }
            Self::Cancelled { .. } => "Request cancelled".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, NodeError>;
