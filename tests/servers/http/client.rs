use std::net::SocketAddr;

use reqwest::redirect::Policy;
use reqwest::Response;

/// HTTP client for the health server. It does not follow redirects.
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            client: reqwest::Client::builder()
                .redirect(Policy::none())
                .build()
                .expect("it should build the HTTP client"),
            base_url: format!("http://{bind_address}"),
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("it should get a response")
    }
}
