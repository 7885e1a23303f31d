//! The status reported on the wire by every health endpoint.
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Status field of a health response.
///
/// It's serialized in lower case: `"ok"` or `"error"`.
#[derive(Hash, Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[display("ok")]
    Ok,
    #[display("error")]
    Error,
}

impl Status {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        *self == Status::Ok
    }
}
