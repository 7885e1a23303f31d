/// This is the prefix used in logs to identify a started service.
///
/// For example:
///
/// ```text
/// 2024-06-25T12:36:25.025580Z  INFO SERVICE HEALTH: Started on: http://0.0.0.0:3000
/// ```
pub const STARTED_ON: &str = "Started on";

/// Log target of the HTTP server.
pub const SERVICE_HEALTH_LOG_TARGET: &str = "SERVICE HEALTH";
