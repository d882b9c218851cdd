//! Synchronous API client core for a football teams collection.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host executes the actual
//! HTTP round-trip, which keeps the core deterministic and testable.
//!
//! # Design
//! - `TeamsClient` is stateless: it holds only the collection URL.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Failures are typed (`ApiError`) so callers can tell "not found" from a
//!   server error from a decode error.
//! - Team ids are chosen by the client; see `ids`.

pub mod client;
pub mod error;
pub mod http;
pub mod ids;
pub mod types;

pub use client::TeamsClient;
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use ids::IdStrategy;
pub use types::{Team, TeamDraft};
