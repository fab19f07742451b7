use super::{response::TestResponse, UserLike};
use http::HeaderName;
use serde::Serialize;

/// A pending call against the running server.
#[derive(Debug)]
pub struct RequestBuilder(reqwest::RequestBuilder);

#[allow(unused)]
impl RequestBuilder {
    pub(super) fn new(builder: reqwest::RequestBuilder) -> Self {
        RequestBuilder(builder)
    }

    /// Authenticates as `user` with its bearer token.
    pub fn user(self, user: &impl UserLike) -> Self {
        Self(self.0.bearer_auth(user.access_token()))
    }

    pub fn json(self, body: &impl Serialize) -> Self {
        Self(self.0.json(body))
    }

    pub fn header(self, name: HeaderName, value: &str) -> Self {
        Self(self.0.header(name, value))
    }

    pub async fn send(self) -> TestResponse {
        let response = self.0.send().await.expect("server did not answer");
        TestResponse::new(response)
    }
}
