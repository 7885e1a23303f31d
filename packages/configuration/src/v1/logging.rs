use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Logging {
    /// Logging level. Possible values are: `off`, `error`, `warn`, `info`,
    /// `debug` and `trace`. Default is `info`.
    #[serde(default = "Logging::default_threshold")]
    pub threshold: Threshold,

    /// Output format. Possible values are: `full`, `pretty`, `compact` and
    /// `json`. Default is `full`.
    #[serde(default = "Logging::default_style")]
    pub style: TraceStyle,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            style: Self::default_style(),
        }
    }
}

impl Logging {
    fn default_threshold() -> Threshold {
        Threshold::Info
    }

    fn default_style() -> TraceStyle {
        TraceStyle::Full
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy, Display)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A threshold lower than all security levels.
    #[display("off")]
    Off,
    /// Corresponds to the `Error` security level.
    #[display("error")]
    Error,
    /// Corresponds to the `Warn` security level.
    #[display("warn")]
    Warn,
    /// Corresponds to the `Info` security level.
    #[display("info")]
    Info,
    /// Corresponds to the `Debug` security level.
    #[display("debug")]
    Debug,
    /// Corresponds to the `Trace` security level.
    #[display("trace")]
    Trace,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Hash, Clone, Copy, Display)]
#[serde(rename_all = "lowercase")]
pub enum TraceStyle {
    #[display("full")]
    Full,
    #[display("pretty")]
    Pretty,
    #[display("compact")]
    Compact,
    #[display("json")]
    Json,
}
