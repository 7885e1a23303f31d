use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// The static dashboard served on every path that is not a health endpoint.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Dashboard {
    /// Directory with `index.html` and its assets.
    #[serde(default = "Dashboard::default_public_dir")]
    pub public_dir: Utf8PathBuf,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            public_dir: Self::default_public_dir(),
        }
    }
}

impl Dashboard {
    fn default_public_dir() -> Utf8PathBuf {
        Utf8PathBuf::from("./share/default/public")
    }
}
