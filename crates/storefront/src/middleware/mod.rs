//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, binary only)
//! 2. `TraceLayer` (request span with `request_id` field)
//! 3. Request ID (reuse or generate `x-request-id`)
//! 4. Session layer (tower-sessions with in-memory store)

pub mod auth;
pub mod request_id;
pub mod session;

pub use auth::{
    OptionalCustomer, RequireAdmin, RequireCustomer, clear_current_customer, set_admin,
    set_current_customer,
};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
