//! Stateless HTTP request builder and response parser for the teams API.
//!
//! # Design
//! `TeamsClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The host executes the HTTP round-trip in between.
//!
//! Any 2xx status is success. Mutations never read the response body, so a
//! backend answering `201` with an empty body is fine.

use url::Url;

use crate::error::{ApiError, ValidationError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Team;

/// Synchronous, stateless client for one team collection resource.
#[derive(Debug, Clone)]
pub struct TeamsClient {
    collection: Url,
}

impl TeamsClient {
    /// `collection_url` is the collection resource itself, e.g.
    /// `http://host:8000/teams`. A trailing slash is ignored.
    pub fn new(collection_url: &str) -> Result<Self, ApiError> {
        let mut collection = Url::parse(collection_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{collection_url}: {e}")))?;
        if !matches!(collection.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{collection_url}: scheme must be http or https"
            )));
        }
        match collection.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty();
            }
            Err(()) => return Err(ApiError::InvalidUrl(collection_url.to_string())),
        }
        Ok(Self { collection })
    }

    pub fn collection_url(&self) -> &str {
        self.collection.as_str()
    }

    /// URL of a single team; the id is percent-encoded as one path segment.
    /// A blank id is rejected since it would address the collection itself.
    fn item_url(&self, id: &str) -> Result<String, ApiError> {
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.collection.to_string()))?
            .push(id);
        Ok(url.into())
    }

    pub fn build_list_teams(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url().to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_team(&self, id: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_create_team(&self, team: &Team) -> Result<HttpRequest, ApiError> {
        if team.id.trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        let body = serde_json::to_string(team).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url().to_string(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Full replace: the whole record is sent even if one field changed.
    pub fn build_update_team(&self, id: &str, team: &Team) -> Result<HttpRequest, ApiError> {
        let path = self.item_url(id)?;
        let body = serde_json::to_string(team).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path,
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_team(&self, id: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id)?,
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list_teams(&self, response: HttpResponse) -> Result<Vec<Team>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// `Ok(None)` when the server answers 404.
    pub fn parse_get_team(&self, response: HttpResponse) -> Result<Option<Team>, ApiError> {
        match check_status(&response) {
            Ok(()) => serde_json::from_str(&response.body)
                .map(Some)
                .map_err(|e| ApiError::DeserializationError(e.to_string())),
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn parse_create_team(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_update_team(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_team(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TeamsClient {
        TeamsClient::new("http://localhost:3000/teams").unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn team() -> Team {
        Team {
            id: "3".to_string(),
            name: "San Lorenzo".to_string(),
            description: "Cuervo".to_string(),
            points: 0,
            goals: 0,
            logo: "https://example.test/casla.png".to_string(),
        }
    }

    #[test]
    fn build_list_teams_produces_correct_request() {
        let req = client().build_list_teams();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/teams");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_team_produces_correct_request() {
        let req = client().build_get_team("3").unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/teams/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        let req = client().build_delete_team("a b/c").unwrap();
        assert_eq!(req.path, "http://localhost:3000/teams/a%20b%2Fc");
    }

    #[test]
    fn blank_ids_never_address_the_collection() {
        let c = client();
        for id in ["", "   "] {
            assert!(matches!(
                c.build_get_team(id),
                Err(ApiError::Validation(ValidationError::EmptyId))
            ));
            assert!(matches!(
                c.build_delete_team(id),
                Err(ApiError::Validation(ValidationError::EmptyId))
            ));
            assert!(matches!(
                c.build_update_team(id, &team()),
                Err(ApiError::Validation(ValidationError::EmptyId))
            ));
        }
        let unnamed = Team {
            id: String::new(),
            ..team()
        };
        assert!(matches!(
            c.build_create_team(&unnamed),
            Err(ApiError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn build_create_team_posts_full_record() {
        let req = client().build_create_team(&team()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/teams");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], "3");
        assert_eq!(body["name"], "San Lorenzo");
        assert_eq!(body["points"], 0);
        assert_eq!(body["goals"], 0);
    }

    #[test]
    fn build_update_team_puts_full_record() {
        let updated = team().with_description("Ciclon");
        let req = client().build_update_team("3", &updated).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/teams/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["description"], "Ciclon");
        assert_eq!(body["name"], "San Lorenzo");
        assert_eq!(body["logo"], "https://example.test/casla.png");
    }

    #[test]
    fn build_delete_team_produces_correct_request() {
        let req = client().build_delete_team("3").unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/teams/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_teams_success() {
        let resp = response(
            200,
            r#"[{"id":"1","name":"Boca","description":"","points":0,"goals":0,"logo":""}]"#,
        );
        let teams = client().parse_list_teams(resp).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Boca");
    }

    #[test]
    fn parse_list_teams_server_error() {
        let err = client().parse_list_teams(response(500, "oops")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_teams_bad_json() {
        let err = client().parse_list_teams(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_team_not_found_is_none() {
        let team = client().parse_get_team(response(404, "")).unwrap();
        assert!(team.is_none());
    }

    #[test]
    fn parse_get_team_success() {
        let team = client()
            .parse_get_team(response(200, r#"{"id":"3","name":"San Lorenzo"}"#))
            .unwrap()
            .unwrap();
        assert_eq!(team.id, "3");
    }

    #[test]
    fn parse_get_team_other_status_is_error() {
        let err = client().parse_get_team(response(502, "bad gateway")).unwrap_err();
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn parse_create_team_ignores_empty_body() {
        assert!(client().parse_create_team(response(201, "")).is_ok());
        assert!(client().parse_create_team(response(200, "garbage")).is_ok());
    }

    #[test]
    fn parse_create_team_wrong_status() {
        let err = client().parse_create_team(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_team_success() {
        assert!(client().parse_update_team(response(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_team_not_found() {
        let err = client().parse_delete_team(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_team_no_content() {
        assert!(client().parse_delete_team(response(204, "")).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TeamsClient::new("http://localhost:3000/teams/").unwrap();
        assert_eq!(client.build_list_teams().path, "http://localhost:3000/teams");
        assert_eq!(client.build_get_team("9").unwrap().path, "http://localhost:3000/teams/9");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            TeamsClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            TeamsClient::new("mailto:team@example.test"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
