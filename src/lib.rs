pub mod ctx;
pub mod storage;

/// Version constant for the shared client
pub const SHARED_CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
