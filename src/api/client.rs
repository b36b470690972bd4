use crate::config::Config;
use crate::error::ClientError;
use crate::rate_limit::RequestPacer;
use serde_json::Value;
use std::io::Read;

const USER_AGENT: &str = "summoner_stats/0.1.0";

/// Single-shot JSON GET. Implementations never retry.
pub trait JsonFetcher {
    fn fetch(&self, url: &str) -> Result<Value, ClientError>;
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
    fn fetch(&self, url: &str) -> Result<Value, ClientError> {
        (**self).fetch(url)
    }
}

pub struct RiotApiClient {
    agent: ureq::Agent,
    api_key: String,
    pacer: RequestPacer,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        RiotApiClient {
            agent,
            api_key: config.api_key.clone(),
            pacer: RequestPacer::new(config.request_delay),
        }
    }

    pub fn requests_made(&self) -> u32 {
        self.pacer.requests_made()
    }
}

impl JsonFetcher for RiotApiClient {
    fn fetch(&self, url: &str) -> Result<Value, ClientError> {
        self.pacer.wait();
        log::debug!("GET {}", url);

        match self.agent.get(url).query("api_key", &self.api_key).call() {
            Ok(resp) => {
                let status = resp.status();
                classify_status(status)?;

                let mut body = String::new();
                resp.into_reader()
                    .read_to_string(&mut body)
                    .map_err(|e| ClientError::Transport(format!("failed to read body: {}", e)))?;

                serde_json::from_str(&body).map_err(|e| {
                    log::warn!("GET {} -> HTTP {} with undecodable body: {}", url, status, e);
                    ClientError::UpstreamError(status)
                })
            }
            Err(ureq::Error::Status(code, _)) => {
                log::debug!("GET {} -> HTTP {}", url, code);
                Err(classify_status(code)
                    .err()
                    .unwrap_or(ClientError::UpstreamError(code)))
            }
            Err(ureq::Error::Transport(t)) => Err(ClientError::Transport(t.to_string())),
        }
    }
}

/// Maps an HTTP status onto the client's outcome classes.
pub fn classify_status(code: u16) -> Result<(), ClientError> {
    match code {
        200..=299 => Ok(()),
        404 => Err(ClientError::NotFound),
        other => Err(ClientError::UpstreamError(other)),
    }
}
