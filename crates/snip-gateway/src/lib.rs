//! HTTP transport for the snip URL shortener. The `gateway` binary serves
//! either this router or the gRPC front end from `snip-shortener`.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
