//! gRPC front end of the shortener.

mod server;
mod status;

pub use server::ShortenerGrpcServer;
pub use status::{into_status, status_code};
