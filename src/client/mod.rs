//! Client layer: the request dispatcher and one method per IDT Express endpoint.

mod error;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::{
    API_ERROR_FALLBACK_MESSAGE, DESERIALIZE_MESSAGE, IdtExpressError, UNEXPECTED_MESSAGE,
};

use crate::domain::{
    ApiKey, ApiSecret, BrowseAvailableNumbersResponse, CountryCoverage, CountryCoverageResponse,
    CountryIso, CreateOrder, DeleteNumberResponse, DidGroupsQuery, DidGroupsResponse, DidNumber,
    ListNumbers, ListOrders, NumberResponse, OrderId, OrderResponse, OrdersResponse,
    RegionsResponse, ValidationError,
};

/// Sandbox environment, used unless the builder overrides the base URL.
pub const DEFAULT_BASE_URL: &str = "https://sandbox-api.idtexpress.com/v1/";

const JSON_CONTENT_TYPE: &str = "application/json";
const SUPPORTED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, request.url);
            for (name, value) in request.headers {
                builder = builder.header(
                    HeaderName::from_static(name),
                    HeaderValue::from_str(&value)?,
                );
            }
            if let Some(body) = request.body {
                builder = builder
                    .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                    .body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, Box<dyn StdError + Send + Sync>>(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// API key and secret sent with every request (`x-api-key` / `x-api-secret`).
pub struct Credentials {
    key: ApiKey,
    secret: ApiSecret,
}

impl Credentials {
    /// Validate both parts and pair them.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            key: ApiKey::new(key)?,
            secret: ApiSecret::new(secret)?,
        })
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    pub fn secret(&self) -> &ApiSecret {
        &self.secret
    }

    fn push_headers(&self, headers: &mut Vec<(&'static str, String)>) {
        headers.push((ApiKey::HEADER, self.key.as_str().to_owned()));
        headers.push((ApiSecret::HEADER, self.secret.as_str().to_owned()));
    }
}

#[derive(Debug, Clone)]
/// Builder for [`IdtExpressClient`].
///
/// Use this when you need a different environment or `User-Agent`.
pub struct IdtExpressClientBuilder {
    credentials: Credentials,
    base_url: String,
    user_agent: Option<String>,
}

impl IdtExpressClientBuilder {
    /// Create a builder pointing at the sandbox environment.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
        }
    }

    /// Override the base URL that endpoint paths are resolved against.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`IdtExpressClient`].
    ///
    /// Errors:
    /// - [`IdtExpressError::InvalidBaseUrl`] if the base URL does not parse,
    /// - [`IdtExpressError::Unexpected`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<IdtExpressClient, IdtExpressError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(IdtExpressError::unexpected)?;

        Ok(IdtExpressClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, url::ParseError> {
    let mut parsed = url::Url::parse(base_url.trim())?;
    if !parsed.path().ends_with('/') {
        let path = format!("{}/", parsed.path());
        parsed.set_path(&path);
    }
    Ok(parsed.into())
}

#[derive(Clone)]
/// High-level IDT Express client.
///
/// Every operation funnels through [`IdtExpressClient::send`], which attaches the
/// credential headers, performs exactly one HTTP round trip and classifies the
/// outcome into a typed value or an [`IdtExpressError`]. The client never retries.
///
/// The client holds no per-call state; clones share the underlying connection pool
/// and may be used concurrently.
pub struct IdtExpressClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl IdtExpressClient {
    /// Create a client for the sandbox environment.
    ///
    /// For more customization, use [`IdtExpressClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> IdtExpressClientBuilder {
        IdtExpressClientBuilder::new(credentials)
    }

    /// Base URL that endpoint paths are resolved against (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and decode the response into `T`.
    ///
    /// `path` is relative to the base URL and may carry a query string. `body`, when
    /// present, is sent as `application/json`.
    ///
    /// Errors:
    /// - [`IdtExpressError::UnsupportedMethod`] for verbs other than GET/POST/PUT/DELETE
    ///   (nothing is sent),
    /// - [`IdtExpressError::Api`] for non-2xx responses carrying an error envelope,
    /// - [`IdtExpressError::HttpStatus`] for other non-2xx responses,
    /// - [`IdtExpressError::Deserialize`] for 2xx responses that are empty, `null` or
    ///   do not match `T`,
    /// - [`IdtExpressError::Unexpected`] for transport and serialization failures.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, IdtExpressError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if !SUPPORTED_METHODS.contains(&method) {
            return Err(IdtExpressError::UnsupportedMethod { method });
        }

        let body = body
            .map(crate::transport::encode_json_body)
            .transpose()
            .map_err(IdtExpressError::unexpected)?;

        let mut headers = Vec::with_capacity(2);
        self.credentials.push_headers(&mut headers);

        debug!("dispatching {method} {path}");
        let response = self
            .http
            .send(HttpRequest {
                method: method.clone(),
                url: self.url(path),
                headers,
                body,
            })
            .await
            .map_err(IdtExpressError::unexpected)?;
        debug!("{method} {path} returned HTTP {}", response.status);

        if !(200..=299).contains(&response.status) {
            return Err(failure_from_response(response));
        }

        crate::transport::decode_json_response(&response.body).map_err(|err| {
            IdtExpressError::Deserialize {
                body: response.body,
                source: Box::new(err),
            }
        })
    }

    /// List the countries with DID coverage.
    pub async fn get_country_coverage(&self) -> Result<Vec<CountryCoverage>, IdtExpressError> {
        let path = crate::transport::encode_country_coverage_path();
        let response: CountryCoverageResponse = self.send(Method::GET, &path, NO_BODY).await?;
        Ok(response.countries)
    }

    /// List the regions offered in a country.
    pub async fn get_regions(
        &self,
        country_iso: &CountryIso,
    ) -> Result<RegionsResponse, IdtExpressError> {
        let path = crate::transport::encode_regions_path(country_iso);
        self.send(Method::GET, &path, NO_BODY).await
    }

    /// List DID groups for a country, optionally narrowed by region and toll-free class.
    pub async fn get_did_groups(
        &self,
        query: &DidGroupsQuery,
    ) -> Result<DidGroupsResponse, IdtExpressError> {
        let path = crate::transport::encode_did_groups_path(query);
        self.send(Method::GET, &path, NO_BODY).await
    }

    /// List the numbers (and their SKUs) currently available in a DID group.
    pub async fn browse_available_numbers(
        &self,
        did_group_id: u64,
    ) -> Result<BrowseAvailableNumbersResponse, IdtExpressError> {
        let path = crate::transport::encode_browse_numbers_path(did_group_id);
        self.send(Method::GET, &path, NO_BODY).await
    }

    /// Place (or preview) an order.
    pub async fn create_order(
        &self,
        request: &CreateOrder,
    ) -> Result<OrderResponse, IdtExpressError> {
        let path = crate::transport::encode_create_order_path();
        self.send(Method::POST, &path, Some(request)).await
    }

    pub async fn get_order(&self, order_id: &OrderId) -> Result<OrderResponse, IdtExpressError> {
        let path = crate::transport::encode_get_order_path(order_id);
        self.send(Method::GET, &path, NO_BODY).await
    }

    /// List orders page by page, optionally filtered by status.
    pub async fn get_orders(&self, request: &ListOrders) -> Result<OrdersResponse, IdtExpressError> {
        let path = crate::transport::encode_list_orders_path(request);
        self.send(Method::GET, &path, NO_BODY).await
    }

    /// List the numbers held by the account.
    pub async fn get_numbers(
        &self,
        request: &ListNumbers,
    ) -> Result<NumberResponse, IdtExpressError> {
        let path = crate::transport::encode_list_numbers_path(request);
        self.send(Method::GET, &path, NO_BODY).await
    }

    /// Release a number from the account.
    ///
    /// Deleting a number that is already gone surfaces the vendor error
    /// (`NumberNotFound`) as [`IdtExpressError::Api`].
    pub async fn delete_number(
        &self,
        number: &DidNumber,
    ) -> Result<DeleteNumberResponse, IdtExpressError> {
        let path = crate::transport::encode_delete_number_path(number);
        self.send(Method::DELETE, &path, NO_BODY).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

const NO_BODY: Option<&()> = None;

fn failure_from_response(response: HttpResponse) -> IdtExpressError {
    match crate::transport::decode_error_envelope(&response.body) {
        Some(envelope) => {
            warn!(
                "IDT Express returned HTTP {} (request id {:?}): {:?}",
                response.status,
                envelope.api_request_id,
                envelope.first_detail()
            );
            IdtExpressError::Api {
                status: response.status,
                envelope,
            }
        }
        None => {
            warn!(
                "IDT Express returned HTTP {} without an error envelope",
                response.status
            );
            IdtExpressError::HttpStatus {
                status: response.status,
                body: response.body,
            }
        }
    }
}
