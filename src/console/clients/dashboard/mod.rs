//! Status dashboard.
//!
//! A console client that polls the three health endpoints of a running
//! service and shows them as a task list:
//!
//! Task | Hint | Status
//! ---|---|---
//! `/health` | General health monitoring | `Not started`, `Completed` or `Error`
//! `/health/live` | Liveness probe | `Not started`, `Completed` or `Error`
//! `/health/ready` | Readiness probe | `Not started`, `Completed` or `Error`
//!
//! A task is `Completed` when its endpoint answers a `2xx` with a JSON body
//! whose `status` is `"ok"`. Transport failures, timeouts, other status codes
//! and unexpected payloads are all shown as `Error` with a description.
//!
//! Refer to the [`app`] module for the command line options.
pub mod app;
pub mod board;
pub mod checks;
pub mod config;
pub mod console;
pub mod logger;
pub mod poller;
pub mod printer;
pub mod render;
