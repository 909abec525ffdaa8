//! iTunes Search API client

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::catalog::{Category, SearchResult};
use super::search::SearchClient;

const SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const SEARCH_LIMIT: usize = 200;

/// HTTP client for the store's search endpoint.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StoreClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tunesearch/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            http,
            endpoint: SEARCH_ENDPOINT.to_string(),
        })
    }
}

impl SearchClient for StoreClient {
    fn search(
        &self,
        text: String,
        category: Category,
    ) -> impl Future<Output = Result<Vec<SearchResult>>> + Send {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();

        async move {
            tracing::debug!(term = %text, category = ?category, "API request: search");

            let mut params = vec![("term", text), ("limit", SEARCH_LIMIT.to_string())];
            let entity = category.entity_token();
            if !entity.is_empty() {
                params.push(("entity", entity.to_string()));
            }

            let response = http
                .get(&endpoint)
                .query(&params)
                .send()
                .await
                .context("store request failed")?;

            let status = response.status();
            if !status.is_success() {
                anyhow::bail!("store responded with status {status}");
            }

            let body = response
                .text()
                .await
                .context("reading store response body")?;
            let envelope: ResultEnvelope =
                serde_json::from_str(&body).context("malformed store response")?;

            tracing::info!(count = envelope.result_count, "search response decoded");

            Ok(envelope
                .results
                .into_iter()
                .map(RawResult::into_search_result)
                .collect())
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultEnvelope {
    #[serde(default)]
    result_count: u32,
    #[serde(default)]
    results: Vec<RawResult>,
}

/// One wire-format record. Most fields are optional on the wire; which of
/// them are present depends on the media kind, so normalization happens in
/// `into_search_result`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawResult {
    kind: Option<String>,
    track_name: Option<String>,
    collection_name: Option<String>,
    artist_name: Option<String>,
    track_price: Option<f64>,
    collection_price: Option<f64>,
    price: Option<f64>,
    currency: Option<String>,
    track_view_url: Option<String>,
    collection_view_url: Option<String>,
    artwork_url60: Option<String>,
    artwork_url100: Option<String>,
    primary_genre_name: Option<String>,
    genres: Option<Vec<String>>,
}

impl RawResult {
    fn into_search_result(self) -> SearchResult {
        SearchResult {
            name: self.track_name.or(self.collection_name).unwrap_or_default(),
            artist: self.artist_name.unwrap_or_default(),
            // Audiobook records carry no `kind` on the wire.
            kind: self.kind.unwrap_or_else(|| "audiobook".to_string()),
            price: self
                .track_price
                .or(self.collection_price)
                .or(self.price)
                .unwrap_or(0.0),
            currency: self.currency.unwrap_or_default(),
            store_url: self
                .track_view_url
                .or(self.collection_view_url)
                .unwrap_or_default(),
            artwork_small: self.artwork_url60.unwrap_or_default(),
            artwork_large: self.artwork_url100.unwrap_or_default(),
            genre: self
                .primary_genre_name
                .or_else(|| self.genres.map(|g| g.join(", ")))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG_AND_AUDIOBOOK: &str = r#"{
        "resultCount": 2,
        "results": [
            {
                "wrapperType": "track",
                "kind": "song",
                "trackName": "Fade to Black",
                "artistName": "Metallica",
                "trackPrice": 1.29,
                "currency": "USD",
                "trackViewUrl": "https://music.example/track/1",
                "artworkUrl60": "https://img.example/60.jpg",
                "artworkUrl100": "https://img.example/100.jpg",
                "primaryGenreName": "Metal",
                "trackTimeMillis": 417000
            },
            {
                "wrapperType": "audiobook",
                "collectionName": "The Hobbit",
                "artistName": "J.R.R. Tolkien",
                "collectionPrice": 9.99,
                "currency": "USD",
                "collectionViewUrl": "https://books.example/hobbit",
                "genres": ["Fantasy", "Audiobooks"]
            }
        ]
    }"#;

    fn decode(json: &str) -> Vec<SearchResult> {
        let envelope: ResultEnvelope = serde_json::from_str(json).expect("valid payload");
        envelope
            .results
            .into_iter()
            .map(RawResult::into_search_result)
            .collect()
    }

    #[test]
    fn decodes_track_records() {
        let results = decode(SONG_AND_AUDIOBOOK);

        let song = &results[0];
        assert_eq!(song.name, "Fade to Black");
        assert_eq!(song.artist, "Metallica");
        assert_eq!(song.kind, "song");
        assert_eq!(song.price, 1.29);
        assert_eq!(song.currency, "USD");
        assert_eq!(song.store_url, "https://music.example/track/1");
        assert_eq!(song.artwork_small, "https://img.example/60.jpg");
        assert_eq!(song.genre, "Metal");
    }

    #[test]
    fn collection_fields_back_fill_missing_track_fields() {
        let results = decode(SONG_AND_AUDIOBOOK);

        let book = &results[1];
        assert_eq!(book.name, "The Hobbit");
        assert_eq!(book.kind, "audiobook");
        assert_eq!(book.price, 9.99);
        assert_eq!(book.store_url, "https://books.example/hobbit");
        assert_eq!(book.genre, "Fantasy, Audiobooks");
    }

    #[test]
    fn empty_envelope_decodes_to_no_records() {
        assert!(decode(r#"{"resultCount": 0, "results": []}"#).is_empty());
        // Missing fields fall back to defaults rather than failing decode.
        assert!(decode("{}").is_empty());
    }

    #[test]
    fn bare_record_normalizes_to_defaults() {
        let results = decode(r#"{"resultCount": 1, "results": [{}]}"#);

        let item = &results[0];
        assert_eq!(item.name, "");
        assert_eq!(item.kind, "audiobook");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.store_url, "");
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        assert!(serde_json::from_str::<ResultEnvelope>("not json").is_err());
        assert!(serde_json::from_str::<ResultEnvelope>(r#"{"results": 3}"#).is_err());
    }
}
