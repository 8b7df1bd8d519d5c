use serde::Deserialize;

/// Summary of a single Wikipedia article, as returned by the REST
/// `page/random/summary` endpoint.
///
/// Only `title` and `extract` are kept; every other field of the response
/// is ignored. Both are required and must be JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub title: String,
    pub extract: String,
}
