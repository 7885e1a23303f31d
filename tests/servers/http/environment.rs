use std::net::SocketAddr;
use std::sync::Arc;

use service_health::bootstrap::app::reporter;
use service_health::servers::http::server::{HttpServer, Launcher, Running, Stopped};
use service_health_configuration::Configuration;

pub type Started = Environment<Running>;

pub struct Environment<S> {
    pub config: Arc<Configuration>,
    pub server: HttpServer<S>,
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        let launcher = Launcher::new(
            configuration.http_server.bind_address(),
            Arc::new(reporter(configuration)),
            configuration.dashboard.public_dir.clone(),
        );

        Self {
            config: configuration.clone(),
            server: HttpServer::new(launcher),
        }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            server: self.server.start().await.expect("it should start the HTTP server"),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            server: self.server.stop().await.expect("it should stop the HTTP server"),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}
