// Composition root for the event map service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the Postgres adapters and wire them into the use case handlers.
// - Spawn the daily snapshot rollover worker.
// - Expose the HTTP router with CORS and request tracing.

pub mod config;
pub mod http;
pub mod state;
pub mod workers;
