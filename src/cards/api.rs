//! Card lookup over HTTP.
//!
//! `ApiCardSource` resolves names against a magicthegathering.io-style
//! endpoint: `GET <base_url>?name=<name>` answering `{"cards": [...]}`.
//! The first returned card wins. An empty `cards` array is a clean miss.
//!
//! Remote records are converted through `CardRecord`, so they pass the same
//! validation as file data. Power and toughness arrive as strings; values
//! that are not plain integers (`*`, `1+*`) leave the card without stats.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::definition::{Card, CardRef};
use super::record::CardRecord;
use super::source::CardSource;
use crate::error::CardLookupError;

/// Public magicthegathering.io card search endpoint.
pub const DEFAULT_API_URL: &str = "https://api.magicthegathering.io/v1/cards";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    cards: Vec<ApiCard>,
}

#[derive(Debug, Deserialize)]
struct ApiCard {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cmc: f64,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default)]
    power: Option<String>,
    #[serde(default)]
    toughness: Option<String>,
    #[serde(default)]
    text: String,
}

impl ApiCard {
    /// Convert to a record, falling back to the queried name for missing
    /// id and name fields.
    fn into_record(self, queried: &str) -> CardRecord {
        let pt = match (&self.power, &self.toughness) {
            (Some(p), Some(t)) => p
                .trim()
                .parse::<i64>()
                .ok()
                .zip(t.trim().parse::<i64>().ok()),
            _ => None,
        };

        CardRecord {
            id: self.id.unwrap_or_else(|| queried.to_string()),
            name: self.name.unwrap_or_else(|| queried.to_string()),
            // Fractional costs (Un-cards) truncate.
            cmc: self.cmc as i64,
            types: self.types,
            colors: self.colors,
            pt,
            power: None,
            toughness: None,
            text_dsl: self.text,
        }
    }
}

/// `CardSource` backed by a remote card search API.
#[derive(Clone, Debug)]
pub struct ApiCardSource {
    client: Client,
    base_url: String,
}

impl ApiCardSource {
    /// Source for the public endpoint with a 10 second timeout.
    pub fn new() -> Result<Self, CardLookupError> {
        let client = Client::builder()
            .user_agent(concat!("horde-lab/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| CardLookupError::Transport {
                name: String::new(),
                source,
            })?;
        Ok(Self::with_client(client))
    }

    /// Source using a caller-built client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point at a different endpoint (builder pattern).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch(&self, name: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.base_url)
            .query(&[("name", name)])
            .send()?
            .error_for_status()?
            .text()
    }
}

impl CardSource for ApiCardSource {
    fn lookup(&self, name: &str) -> Result<CardRef, CardLookupError> {
        let body = self.fetch(name).map_err(|source| CardLookupError::Transport {
            name: name.to_string(),
            source,
        })?;

        let response: SearchResponse = serde_json::from_str(&body)?;
        let Some(first) = response.cards.into_iter().next() else {
            return Err(CardLookupError::NotFound {
                name: name.to_string(),
            });
        };

        let record = first.into_record(name);
        let id = record.id.clone();
        let card = Card::try_from(record)
            .map_err(|source| CardLookupError::InvalidRecord { id, source })?;

        tracing::debug!(name, id = %card.id, "card resolved over http");
        Ok(card.into_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Stats;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned HTTP response and report the request line.
    fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/v1/cards", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let Ok((mut sock, _)) = listener.accept() else { return };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match sock.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let text = String::from_utf8_lossy(&request);
            let _ = tx.send(text.lines().next().unwrap_or_default().to_string());
            let _ = sock.write_all(response.as_bytes());
        });

        (url, rx)
    }

    fn source(url: &str) -> ApiCardSource {
        let client = Client::builder().no_proxy().build().unwrap();
        ApiCardSource::with_client(client).with_base_url(url)
    }

    #[test]
    fn test_lookup_builds_card_from_first_result() {
        let body = r#"{"cards": [
            {"id": "abc", "name": "Grizzly Bears", "cmc": 2.0, "types": ["Creature"],
             "colors": ["Green"], "power": "2", "toughness": "2", "text": ""},
            {"id": "other", "name": "Grizzly Bears", "cmc": 2.0}
        ]}"#;
        let (url, requests) = serve_once("200 OK", body);

        let card = source(&url).lookup("Grizzly Bears").unwrap();

        assert_eq!(card.id.as_str(), "abc");
        assert_eq!(card.cost, 2);
        assert_eq!(card.stats, Some(Stats::new(2, 2)));
        let request_line = requests.recv().unwrap();
        assert!(request_line.starts_with("GET /v1/cards?name=Grizzly+Bears"));
    }

    #[test]
    fn test_star_power_means_no_stats() {
        let body = r#"{"cards": [{"id": "t", "name": "Tarmogoyf", "cmc": 2,
            "types": ["Creature"], "power": "*", "toughness": "1+*"}]}"#;
        let (url, _requests) = serve_once("200 OK", body);

        let card = source(&url).lookup("Tarmogoyf").unwrap();
        assert!(card.stats.is_none());
        assert_eq!(card.power(), 0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_query() {
        let (url, _requests) = serve_once("200 OK", r#"{"cards": [{"types": ["Basic", "Land"]}]}"#);

        let card = source(&url).lookup("Forest").unwrap();
        assert_eq!(card.name, "Forest");
        assert_eq!(card.id.as_str(), "Forest");
        assert!(card.is_basic_land());
    }

    #[test]
    fn test_empty_result_is_not_found() {
        let (url, _requests) = serve_once("200 OK", r#"{"cards": []}"#);

        let err = source(&url).lookup("Nonexistent Card").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_http_error_is_transport_failure() {
        let (url, _requests) = serve_once("503 Service Unavailable", "{}");

        let err = source(&url).lookup("Forest").unwrap_err();
        assert!(matches!(err, CardLookupError::Transport { ref name, .. } if name == "Forest"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_unreachable_host_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/v1/cards", listener.local_addr().unwrap());
        drop(listener);

        let err = source(&url).lookup("Forest").unwrap_err();
        assert!(matches!(err, CardLookupError::Transport { .. }));
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let (url, _requests) = serve_once("200 OK", "<html>");

        let err = source(&url).lookup("Forest").unwrap_err();
        assert!(matches!(err, CardLookupError::Parse(_)));
    }

    #[test]
    fn test_invalid_remote_record() {
        let (url, _requests) =
            serve_once("200 OK", r#"{"cards": [{"id": "neg", "name": "Neg", "power": "-1", "toughness": "2"}]}"#);

        let err = source(&url).lookup("Neg").unwrap_err();
        assert!(matches!(err, CardLookupError::InvalidRecord { .. }));
    }
}
