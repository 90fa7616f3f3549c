//! Wire types for the swapi.tech endpoints
//!
//! The unfiltered listing and the name-filtered search return differently
//! shaped bodies; the search shape is normalized into [`ListResponse`] so
//! callers only ever see one listing type.

use holodex_core::CharacterFields;
use serde::Deserialize;

/// One page of the character listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub message: String,
    pub total_records: u64,
    pub total_pages: u64,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub results: Vec<Character>,
}

/// A listing entry: just enough to identify and link a character.
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub uid: String,
    pub name: String,
    pub url: String,
}

/// Full property set of one character, as served by the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDetails {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    #[serde(default)]
    pub url: String,
}

/// Envelope of the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterResponse {
    pub message: String,
    pub result: CharacterResult,
}

/// Payload of the detail envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterResult {
    pub properties: CharacterDetails,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub uid: String,
    #[serde(rename = "__v", default)]
    pub version: i64,
}

/// Query parameters for the listing call.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// 1-based page number; defaults to 1.
    pub page: Option<u32>,
    /// Name filter. When present the upstream switches to the search shape.
    pub search: Option<String>,
}

/// Raw body of a name-filtered listing request.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    pub message: String,
    pub result: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchHit {
    pub uid: String,
    pub properties: SearchHitProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchHitProperties {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl From<SearchResponse> for ListResponse {
    /// Collapse a search body onto a single listing page. The search shape
    /// carries no cursor, so `total_pages` is forced to 1 and the record
    /// count is whatever came back; this mirrors the upstream's observed
    /// behavior rather than guessing at the true match count.
    fn from(raw: SearchResponse) -> Self {
        let results: Vec<Character> = raw
            .result
            .into_iter()
            .map(|hit| Character {
                uid: hit.uid,
                name: hit.properties.name,
                url: hit.properties.url,
            })
            .collect();

        ListResponse {
            message: raw.message,
            total_records: results.len() as u64,
            total_pages: 1,
            previous: None,
            next: None,
            results,
        }
    }
}

impl From<&CharacterDetails> for CharacterFields {
    fn from(details: &CharacterDetails) -> Self {
        CharacterFields {
            name: details.name.clone(),
            height: details.height.clone(),
            mass: details.mass.clone(),
            hair_color: details.hair_color.clone(),
            skin_color: details.skin_color.clone(),
            eye_color: details.eye_color.clone(),
            birth_year: details.birth_year.clone(),
            gender: details.gender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_page() {
        let body = r#"{
            "message": "ok",
            "total_records": 82,
            "total_pages": 9,
            "previous": null,
            "next": "https://www.swapi.tech/api/people?page=2&limit=10",
            "results": [
                {"uid": "1", "name": "Luke Skywalker", "url": "https://www.swapi.tech/api/people/1"}
            ]
        }"#;

        let page: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.total_pages, 9);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].uid, "1");
    }

    #[test]
    fn parses_detail_envelope() {
        let body = r#"{
            "message": "ok",
            "result": {
                "properties": {
                    "name": "Luke Skywalker",
                    "height": "172",
                    "mass": "77",
                    "hair_color": "blond",
                    "skin_color": "fair",
                    "eye_color": "blue",
                    "birth_year": "19BBY",
                    "gender": "male",
                    "homeworld": "https://www.swapi.tech/api/planets/1",
                    "films": ["a", "b"],
                    "species": [],
                    "vehicles": ["c"],
                    "starships": [],
                    "created": "2020-09-17T06:49:05.235Z",
                    "edited": "2020-09-17T06:49:05.235Z",
                    "url": "https://www.swapi.tech/api/people/1"
                },
                "description": "A person within the Star Wars universe",
                "_id": "5f63a36eee9fd7000499be42",
                "uid": "1",
                "__v": 0
            }
        }"#;

        let detail: CharacterResponse = serde_json::from_str(body).unwrap();
        assert_eq!(detail.result.uid, "1");
        assert_eq!(detail.result.properties.birth_year, "19BBY");
        assert_eq!(detail.result.properties.films.len(), 2);

        let fields = CharacterFields::from(&detail.result.properties);
        assert_eq!(fields.name, "Luke Skywalker");
        assert_eq!(fields.gender, "male");
    }

    #[test]
    fn search_body_collapses_to_one_page() {
        let body = r#"{
            "message": "ok",
            "result": [
                {
                    "uid": "1",
                    "properties": {"name": "Luke Skywalker", "url": "https://www.swapi.tech/api/people/1", "height": "172"},
                    "description": "ignored",
                    "_id": "x"
                },
                {
                    "uid": "2",
                    "properties": {"name": "Luke Lars", "url": ""}
                }
            ]
        }"#;

        let raw: SearchResponse = serde_json::from_str(body).unwrap();
        let page = ListResponse::from(raw);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 2);
        assert!(page.next.is_none() && page.previous.is_none());
        assert_eq!(page.results[1].name, "Luke Lars");
    }

    #[test]
    fn unknown_body_fields_are_ignored() {
        let body = r#"{
            "message": "ok",
            "total_records": 0,
            "total_pages": 0,
            "previous": null,
            "next": null,
            "results": [],
            "apiVersion": "1.0",
            "support": {"contact": "x"}
        }"#;

        let page: ListResponse = serde_json::from_str(body).unwrap();
        assert!(page.results.is_empty());
    }
}
