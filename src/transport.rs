//! Outbound form requests.

use pushform_util::FieldValue;
use reqwest::{
    header::{ACCEPT, HeaderValue},
    multipart::{Form, Part},
};
use std::future::Future;
use tracing::debug;
use url::Url;

/// One form POST: target URL plus every named field in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub url: String,
    pub fields: Vec<(String, FieldValue)>,
}

/// Status line and fully read body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: String::new(),
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid request URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Sends a form and returns the response once its body is read.
///
/// The future is dropped when a submission times out, which aborts the
/// request.
pub trait Transport: Send + Sync {
    fn post(&self, request: FormRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Multipart transport over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn multipart(fields: Vec<(String, FieldValue)>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = match value {
            FieldValue::Text(text) => form.text(name, text),
            FieldValue::File {
                file_name,
                mime,
                data,
            } => {
                let mut part = Part::bytes(data).file_name(file_name);
                if let Some(mime) = mime {
                    part = part.mime_str(&mime)?;
                }
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

impl Transport for HttpTransport {
    async fn post(&self, request: FormRequest) -> Result<HttpResponse, TransportError> {
        let url = Url::parse(&request.url).map_err(|source| TransportError::InvalidUrl {
            url: request.url.clone(),
            source,
        })?;
        debug!(%url, fields = request.fields.len(), "posting form");

        let response = self
            .client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(multipart(request.fields)?)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "form response");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
