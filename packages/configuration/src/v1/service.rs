use serde::{Deserialize, Serialize};

/// Identity reported by the general health endpoint.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Service {
    #[serde(default = "Service::default_name")]
    pub name: String,

    #[serde(default = "Service::default_version")]
    pub version: String,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            version: Self::default_version(),
        }
    }
}

impl Service {
    fn default_name() -> String {
        "service-health".to_owned()
    }

    fn default_version() -> String {
        "1.0.0".to_owned()
    }
}
