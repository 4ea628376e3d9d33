//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. The filter
//! comes from `RUST_LOG`; the format is compact and hides module paths
//! (`with_target(false)`), since every event already carries structured fields such as
//! `entity_type`, `id` or `path`.
//!
//! ## What Gets Traced
//!
//! - **Store**: cache hits (`trace`), reloads (`debug`), persists (`info`), failures (`warn`)
//! - **Writer actor**: startup, shutdown, and each Created/Updated/Deleted with the new
//!   collection `size`
//! - **Clients**: one span per operation via `#[instrument]`
//! - **HTTP**: one `debug` event per request, with method, path and status
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request and write logs
//! RUST_LOG=info twd-api --data data.json
//!
//! # Full payloads and cache reloads
//! RUST_LOG=debug twd-api
//!
//! # Every cache hit
//! RUST_LOG=twd_api=trace twd-api
//! ```
//!
//! With `RUST_LOG=info` a create shows up as:
//!
//! ```text
//! INFO create: Created entity_type="Character" id=1760601234567 size=16
//! INFO Persisted path="data.json" characters=16 episodes=177
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and path fields identify the source
        .compact()
        .init();
}
