//! Protobuf types exchanged with the consensus node.
//!
//! The Rust sources under `generated/` are regenerated by `build.rs` from the
//! `.proto` files in the repository's `proto/` directory (requires `protoc`).

mod type_url;

#[cfg(test)]
mod tests;

pub use type_url::TypeUrl;

pub mod google {
    pub mod protobuf {
        include!("generated/google.protobuf.rs");
    }
}

pub mod cosmos {
    pub mod base {
        pub mod abci {
            pub mod v1beta1 {
                include!("generated/cosmos.base.abci.v1beta1.rs");
            }
        }
        pub mod query {
            pub mod v1beta1 {
                include!("generated/cosmos.base.query.v1beta1.rs");
            }
        }
        pub mod v1beta1 {
            include!("generated/cosmos.base.v1beta1.rs");
        }
    }
    pub mod bank {
        pub mod v1beta1 {
            include!("generated/cosmos.bank.v1beta1.rs");
        }
    }
}

pub mod registry {
    pub mod v1 {
        include!("generated/registry.v1.rs");
    }
}

pub use cosmos::base::abci::v1beta1::TxMsgData;
pub use cosmos::base::query::v1beta1::{PageRequest, PageResponse};
pub use google::protobuf::Any;
