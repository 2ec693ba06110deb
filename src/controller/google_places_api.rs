use std::thread;
use std::time::Duration;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use crate::config::{Config, ResultOrder};
use crate::error::LookupError;
use crate::helpers::prompt::validate_city;
use crate::helpers::ranking::rank_by_composite_score;
use crate::models::place_details::{PlaceDetails, PlaceDetailsResponse, DETAILS_FIELDS};
use crate::models::restaurant::{PlaceResult, RestaurantRecord, TextSearchResponse};

pub const MAX_RESULTS: usize = 10;
pub const DETAILS_PAUSE: Duration = Duration::from_millis(200);

/// Raw HTTP answer handed back by a transport: status code plus undecoded body.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// The single outbound seam of the crate. Everything above it is pure mapping.
pub trait PlacesTransport {
    fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<TransportResponse, LookupError>;
}

impl<T: PlacesTransport + ?Sized> PlacesTransport for &T {
    fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<TransportResponse, LookupError> {
        (**self).get(url, params)
    }
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl PlacesTransport for ReqwestTransport {
    fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<TransportResponse, LookupError> {
        let response = self.client
            .get(url)
            .query(params)
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(TransportResponse { status, body })
    }
}

pub struct LookupClient<T = ReqwestTransport> {
    transport: T,
    api_key: String,
    places_api_url: String,
    order: ResultOrder,
}

impl LookupClient<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        // credential is checked before the HTTP client even exists
        let api_key = require_api_key(config.google_api_key.as_deref())?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;

        Ok(Self {
            transport,
            api_key,
            places_api_url: config.places_api_url.trim_end_matches('/').to_string(),
            order: config.order,
        })
    }
}

impl<T: PlacesTransport> LookupClient<T> {
    pub fn new(
        transport: T,
        api_key: Option<&str>,
        places_api_url: &str,
    ) -> Result<Self, LookupError> {
        let api_key = require_api_key(api_key)?;

        Ok(Self {
            transport,
            api_key,
            places_api_url: places_api_url.trim_end_matches('/').to_string(),
            order: ResultOrder::Provider,
        })
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }

    /// Issues one Text Search request for restaurants in `city` and maps the first
    /// page to at most [`MAX_RESULTS`] records.
    pub fn search_restaurants(&self, city: &str) -> Result<Vec<RestaurantRecord>, LookupError> {
        let city = validate_city(city)?;
        let query = format!("restaurants in {}", city);
        let url = format!("{}/textsearch/json", self.places_api_url);
        info!("Searching places API for: {}", query);

        let params = [
            ("query", query.as_str()),
            ("type", "restaurant"),
            ("key", self.api_key.as_str()),
        ];
        let response: TextSearchResponse = self.get_json(&url, &params)?;

        let results = match response.status.as_deref() {
            Some("ZERO_RESULTS") => return Ok(Vec::new()),
            Some("OK") | None => response.results.ok_or_else(|| {
                LookupError::Parse("response has no `results` array".to_string())
            })?,
            Some(status) => return Err(provider_status_error(status, response.error_message)),
        };
        debug!("Places API returned {} results for {}", results.len(), city);

        let mut records = match self.order {
            ResultOrder::Provider => map_places(results.into_iter().take(MAX_RESULTS))?,
            // the whole page is ranked, so every entry has to map
            ResultOrder::Composite => rank_by_composite_score(map_places(results)?),
        };
        records.truncate(MAX_RESULTS);

        Ok(records)
    }

    pub fn fetch_place_details(&self, place_id: &str) -> Result<PlaceDetails, LookupError> {
        let url = format!("{}/details/json", self.places_api_url);
        let params = [
            ("place_id", place_id),
            ("fields", DETAILS_FIELDS),
            ("key", self.api_key.as_str()),
        ];
        let response: PlaceDetailsResponse = self.get_json(&url, &params)?;

        match response.status.as_deref() {
            Some("OK") | None => response.result.ok_or_else(|| {
                LookupError::Parse("details response has no `result` object".to_string())
            }),
            Some(status) => Err(provider_status_error(status, response.error_message)),
        }
    }

    /// Fills url, website and review snippets for each record, one request at a time.
    /// A failed lookup leaves that record untouched.
    pub fn enrich_with_details(&self, records: &mut [RestaurantRecord]) {
        for (i, record) in records.iter_mut().enumerate() {
            if i > 0 {
                thread::sleep(DETAILS_PAUSE);
            }
            match self.fetch_place_details(&record.place_id) {
                Ok(details) => {
                    record.review_snippets = details.review_snippets();
                    record.google_maps_url = details.url;
                    record.website = details.website;
                }
                Err(e) => {
                    warn!("Failed to fetch details for {} due to: {}", record.name, e);
                }
            }
        }
    }

    fn get_json<R: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<R, LookupError> {
        let response = self.transport.get(url, params)?;
        let status = StatusCode::from_u16(response.status)
            .map_err(|e| LookupError::Fetch(e.to_string()))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LookupError::Auth(format!("places API answered {}", status)));
        }
        if !status.is_success() {
            return Err(LookupError::Fetch(format!("places API answered {}", status)));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

fn map_places(
    results: impl IntoIterator<Item = serde_json::Value>,
) -> Result<Vec<RestaurantRecord>, LookupError> {
    results
        .into_iter()
        .map(|place| {
            serde_json::from_value::<PlaceResult>(place)
                .map(RestaurantRecord::from)
                .map_err(LookupError::from)
        })
        .collect()
}

fn require_api_key(api_key: Option<&str>) -> Result<String, LookupError> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(LookupError::missing_credential()),
    }
}

fn provider_status_error(status: &str, message: Option<String>) -> LookupError {
    let detail = match message {
        Some(message) => format!("{}: {}", status, message),
        None => status.to_string(),
    };
    match status {
        "REQUEST_DENIED" => LookupError::Auth(detail),
        _ => LookupError::Fetch(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(matches!(require_api_key(None), Err(LookupError::Auth(_))));
        assert!(matches!(require_api_key(Some("   ")), Err(LookupError::Auth(_))));
        assert_eq!(require_api_key(Some(" abc ")).unwrap(), "abc");
    }

    #[test]
    fn request_denied_is_an_auth_failure() {
        let err = provider_status_error("REQUEST_DENIED", Some("The provided API key is invalid.".into()));
        assert!(matches!(err, LookupError::Auth(ref m) if m.contains("invalid")));
        assert!(matches!(provider_status_error("OVER_QUERY_LIMIT", None), LookupError::Fetch(_)));
    }
}
