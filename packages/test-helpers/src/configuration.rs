use std::net::{IpAddr, Ipv4Addr};

use camino::Utf8PathBuf;
use service_health_configuration::{Configuration, Threshold};

use crate::public;

/// This configuration is used for testing. It binds to a port chosen by the
/// operating system, so tests do not collide, and serves a fresh fixture
/// directory.
///
/// # Panics
///
/// Will panic if the fixture directory can't be created.
#[must_use]
pub fn ephemeral() -> Configuration {
    ephemeral_with_public_dir(public::fixture_dir())
}

/// Same as [`ephemeral`] but serving the given directory.
#[must_use]
pub fn ephemeral_with_public_dir(public_dir: Utf8PathBuf) -> Configuration {
    let mut config = Configuration::default();

    // Change to `Threshold::Debug` for tests debugging
    config.logging.threshold = Threshold::Off;

    config.http_server.host = IpAddr::V4(Ipv4Addr::LOCALHOST);
    config.http_server.port = 0;

    config.dashboard.public_dir = public_dir;

    config
}

/// An ephemeral configuration reporting the given name and version.
#[must_use]
pub fn ephemeral_with_service(name: &str, version: &str) -> Configuration {
    let mut config = ephemeral();

    config.service.name = name.to_owned();
    config.service.version = version.to_owned();

    config
}
