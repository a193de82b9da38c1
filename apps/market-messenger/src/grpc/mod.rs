//! Generated Dalal Street protocol stubs.
//!
//! The prost messages and tonic client/server stubs for package
//! `dalalstreet.api` are checked in under
//! `packages/schema-gen/rust/dalalstreet/api/` and regenerated from
//! `packages/proto/dalalstreet/api/` with `buf generate`. Both client and
//! server stubs are kept so tests can stand up an in-process server.

mod responses;

pub use responses::ActionResponse;

// Allow clippy warnings and missing docs in generated code
#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
pub mod proto {
    pub mod dalalstreet {
        pub mod api {
            include!("../../../../packages/schema-gen/rust/dalalstreet/api/dalalstreet.api.rs");
        }
    }
}
