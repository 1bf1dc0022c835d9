/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default client disconnect timeout in seconds.
/// This is the time the server waits for cleanup after a client disconnects.
pub const DEFAULT_CLIENT_DISCONNECT_TIMEOUT_SECONDS: u64 = 5;

/// Seconds in-flight requests get to finish on shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 5;
