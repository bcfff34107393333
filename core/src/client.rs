//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemsClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, keeping this layer free of I/O.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, Item, UpdateItem};

#[derive(Debug, Clone)]
pub struct ItemsClient {
    base_url: String,
}

impl ItemsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/items", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// New items are always sent as incomplete.
    pub fn build_add_item(&self, name: &str) -> Result<HttpRequest, ApiError> {
        let input = CreateItem {
            name: name.to_string(),
            is_complete: false,
        };
        let body = serde_json::to_string(&input).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/items", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_item(&self, id: i64, input: &UpdateItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/items/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_set_item_completed(
        &self,
        id: i64,
        is_complete: bool,
    ) -> Result<HttpRequest, ApiError> {
        self.build_update_item(
            id,
            &UpdateItem {
                name: None,
                is_complete: Some(is_complete),
            },
        )
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/items/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_add_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 201)?;
        parse_body(&response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        parse_body(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
