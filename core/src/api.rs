//! Async executor for the items API.
//!
//! `ApiClient` pairs an `ItemsClient` with one `reqwest::Client`. Build one
//! at startup and share it; every call goes through `dispatch`, which logs a
//! failure exactly once before handing it back to the caller.

use crate::client::ItemsClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Item;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5006";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    items: ItemsClient,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            items: ItemsClient::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        self.items.base_url()
    }

    pub async fn get_items(&self) -> Result<Vec<Item>, ApiError> {
        let request = Ok(self.items.build_get_items());
        self.dispatch(request, ItemsClient::parse_get_items).await
    }

    pub async fn add_item(&self, name: &str) -> Result<Item, ApiError> {
        let request = self.items.build_add_item(name);
        self.dispatch(request, ItemsClient::parse_add_item).await
    }

    pub async fn set_item_completed(&self, id: i64, is_complete: bool) -> Result<Item, ApiError> {
        let request = self.items.build_set_item_completed(id, is_complete);
        self.dispatch(request, ItemsClient::parse_update_item).await
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        let request = Ok(self.items.build_delete_item(id));
        self.dispatch(request, ItemsClient::parse_delete_item).await
    }

    async fn dispatch<T>(
        &self,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&ItemsClient, HttpResponse) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let result = match request {
            Ok(request) => match self.execute(request).await {
                Ok(response) => parse(&self.items, response),
                Err(err) => Err(err),
            },
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            tracing::error!(error = %err, "API error");
        }
        result
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");

        let mut builder = self.http.request(to_reqwest(request.method), &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
