// rapsa-core/src/request/parser.rs
// ============================================================================
// Module: Request Parser
// Description: Reconstruction of a request from its URI text form.
// Purpose: Invert the build grammar exactly without re-running schema rules.
// Dependencies: crate::request
// ============================================================================

//! ## Overview
//! Parsing splits the URI once on `://`, requires the literal `rapsa`
//! scheme, resolves the path token, and groups repeated query keys into
//! ordered lists (a key appearing exactly once stays scalar). The raw
//! parameter map is installed directly: parse accepts whatever keys were
//! present and does not re-run the schema or business rules that `add_*`
//! enforces. This asymmetry is deliberate — validation of embedded values
//! is deferred to the typed accessors, which re-validate lazily.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::request::RequestError;
use crate::request::RequestPath;
use crate::request::SCHEME;
use crate::request::builder::Rapsa;
use crate::request::query;

// ============================================================================
// SECTION: Parsing
// ============================================================================

impl Rapsa {
    /// Parses URI text into a request without re-running schema rules.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the separator or scheme is wrong, the
    /// path token is unknown, or a query value fails percent-decoding.
    pub fn parse(uri: &str) -> Result<Self, RequestError> {
        let Some((scheme, rest)) = uri.split_once("://") else {
            return Err(RequestError::MalformedUri(
                "missing \"://\" separator".to_string(),
            ));
        };
        if scheme != SCHEME {
            return Err(RequestError::MalformedUri(format!(
                "unsupported scheme {scheme:?}"
            )));
        }
        let (token, query_text) = match rest.split_once('?') {
            Some((token, query_text)) => (token, Some(query_text)),
            None => (rest, None),
        };
        let path = RequestPath::from_token(token)?;

        let mut params: Vec<(String, Vec<String>)> = Vec::new();
        if let Some(query_text) = query_text {
            for segment in query_text.split('&') {
                if segment.is_empty() {
                    continue;
                }
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                let value = query::decode_value(value)?;
                if let Some(entry) = params.iter_mut().find(|(existing, _)| existing == key) {
                    entry.1.push(value);
                } else {
                    params.push((key.to_string(), vec![value]));
                }
            }
        }

        let mut request = Self::new();
        request.select_path(path);
        request.install_raw(params);
        Ok(request)
    }
}
