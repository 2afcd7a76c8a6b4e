//! HTTP vocabulary shared by descriptors, client, and transports.
//!
//! # Design
//! Requests and responses are plain data with owned fields, so tests can
//! fabricate either side of an exchange without touching the network.
//! `Headers` is the domain's header map (unique names, overwrite-on-set);
//! conversion to a stack-specific header type happens inside the transport
//! that needs it.
//!
//! The two header constructors carry different auth schemes on purpose:
//! `json` base64-encodes a username/password pair into a `Basic` value,
//! `binary` applies a pre-formed token verbatim.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Wire verb for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// A username/password pair for `Basic` authorization.
///
/// Always supplied through configuration; nothing in this crate embeds
/// account literals.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Base64 of `username:password`, the value part of a `Basic` header.
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Header map with unique names.
///
/// `set` overwrites, `merge` lets the argument win on collisions, and two
/// maps are equal iff their full name/value mappings are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value for `name`, inserting it if absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Overlay `other` onto this map. On collisions `other`'s values win;
    /// names absent from `other` are preserved.
    pub fn merge(&mut self, other: &Headers) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headers for JSON API calls, with `Basic` authorization when
    /// credentials are supplied.
    pub fn json(credentials: Option<&BasicCredentials>) -> Headers {
        let mut headers = Headers::new();
        headers.set("Content-Type", "application/json");
        headers.set("Accept", "application/json");
        if let Some(credentials) = credentials {
            headers.set("Authorization", format!("Basic {}", credentials.basic_token()));
        }
        headers
    }

    /// Headers for raw byte uploads. The token, when supplied, is applied
    /// verbatim; this scheme does not base64-encode.
    pub fn binary(token: Option<&str>) -> Headers {
        let mut headers = Headers::new();
        headers.set("Content-Type", "application/octet-stream");
        if let Some(token) = token {
            headers.set("Authorization", token);
        }
        headers
    }
}

/// An HTTP request described as plain data, ready for a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Option<Headers>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response as realized by a transport.
///
/// `body: None` means the stack produced no body at all; the client
/// classifies that differently from an empty one.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// Whether the status falls in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
