//! HTTP client for the studio scheduling API

use crate::domain::{BlockedTimeRequest, NewSession, SessionEvent, Trainer};
use crate::error::{BlockoutError, Result};
use crate::infrastructure::ScheduleGateway;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Gateway that talks to `{base_url}/api/sessions`
pub struct HttpGateway {
    base_url: Url,
    token: Option<String>,
    http_client: Client,
}

impl HttpGateway {
    pub fn new(base_url: &str, token: Option<String>, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| BlockoutError::Config(format!("Invalid api_url: '{}'", base_url)))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(HttpGateway {
            base_url,
            token,
            http_client,
        })
    }

    /// `{base_url}/api/sessions/{segments...}`, each segment percent-encoded
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BlockoutError::Config(format!("Invalid api_url: '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "sessions"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        debug!(%method, %url, "building request");

        let builder = self.http_client.request(method, url);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Send and turn non-2xx responses into `Backend` errors
    fn send(&self, operation: &str, builder: RequestBuilder) -> Result<Response> {
        info!(operation, "dispatching request");
        let response = builder.send()?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        Err(BlockoutError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    fn mutate<B: Serialize>(
        &self,
        operation: &str,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<()> {
        let builder = self.request(method, segments)?;
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send(operation, builder)?;
        Ok(())
    }

    /// Lists come back bare or wrapped in `data`, `sessions` or `trainers`
    fn fetch_list<T: DeserializeOwned>(&self, operation: &str, segments: &[&str]) -> Result<Vec<T>> {
        let response = self.send(operation, self.request(Method::GET, segments)?)?;
        let value: serde_json::Value = response.json()?;

        let list = match value {
            serde_json::Value::Array(items) => serde_json::Value::Array(items),
            serde_json::Value::Object(mut map) => ["data", "sessions", "trainers"]
                .iter()
                .find_map(|key| map.remove(*key).filter(|v| v.is_array()))
                .ok_or_else(|| BlockoutError::Backend {
                    status: 200,
                    message: format!("unexpected response shape for {}", operation),
                })?,
            _ => {
                return Err(BlockoutError::Backend {
                    status: 200,
                    message: format!("unexpected response shape for {}", operation),
                })
            }
        };

        Ok(serde_json::from_value(list)?)
    }
}

impl ScheduleGateway for HttpGateway {
    fn create_blocked_time(&self, request: &BlockedTimeRequest) -> Result<()> {
        self.mutate("createBlockedTime", Method::POST, &["block"], Some(request))
    }

    fn delete_blocked_time(&self, id: &str, remove_all: bool) -> Result<()> {
        let builder = self
            .request(Method::DELETE, &["block", id])?
            .query(&[("removeAll", remove_all)]);
        self.send("deleteBlockedTime", builder)?;
        Ok(())
    }

    fn create_session(&self, session: &NewSession) -> Result<()> {
        self.mutate("createSession", Method::POST, &[], Some(session))
    }

    fn book_session(&self, id: &str) -> Result<()> {
        self.mutate::<()>("bookSession", Method::POST, &[id, "book"], None)
    }

    fn cancel_session(&self, id: &str) -> Result<()> {
        self.mutate::<()>("cancelSession", Method::PATCH, &[id, "cancel"], None)
    }

    fn confirm_session(&self, id: &str) -> Result<()> {
        self.mutate::<()>("confirmSession", Method::PUT, &["confirm", id], None)
    }

    fn fetch_sessions(&self) -> Result<Vec<SessionEvent>> {
        self.fetch_list("fetchSessions", &[])
    }

    fn fetch_trainers(&self) -> Result<Vec<Trainer>> {
        self.fetch_list("fetchTrainers", &["trainers"])
    }
}
