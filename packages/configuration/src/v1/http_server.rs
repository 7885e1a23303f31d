use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Where the HTTP server listens.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpServer {
    /// The IP address to bind to. Use `0.0.0.0` to listen on all interfaces.
    ///
    /// Host names such as `localhost` are not resolved and make the
    /// configuration invalid.
    #[serde(default = "HttpServer::default_host")]
    pub host: IpAddr,

    /// The port to bind to. Use `0` to let the operating system choose a
    /// free port.
    #[serde(default = "HttpServer::default_port")]
    pub port: u16,
}

impl Default for HttpServer {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServer {
    fn default_host() -> IpAddr {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }

    fn default_port() -> u16 {
        3000
    }

    #[must_use]
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
