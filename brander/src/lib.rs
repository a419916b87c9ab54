//! # brander
//!
//! Look up a brand record by (partial, case-insensitive) name.
//!
//! Given a `brand` query parameter, scan a fixed list of brand records in
//! order and emit the first record whose name contains the query as a
//! substring, serialized as a compact JSON object. A missing parameter and a
//! missing match are both the normal outcome and emit the literal body
//! `null`, never an error.

pub mod query;

use serde::Serialize;

///////////
// Brand //
///////////

/// A single brand record. The field order here is the JSON field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub url: String,
}

impl Brand {
    pub fn new(
        name: impl Into<String>,
        logo: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
            url: url.into(),
        }
    }
}

///////////////
// BrandBook //
///////////////

/// The immutable, ordered list of accepted brands. Built once at startup and
/// never mutated; ties between matches are resolved by list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandBook(Vec<Brand>);

impl BrandBook {
    pub fn new(brands: Vec<Brand>) -> Self {
        Self(brands)
    }

    /// The built-in accepted brand list.
    pub fn builtin() -> Self {
        Self::new(vec![
            Brand::new(
                "Choice University",
                "http://www.choiceuniversity.com/logo.png",
                "http://www.choiceuniversity.com",
            ),
            Brand::new(
                "Engage University",
                "http://www.engageuniversity.com/logo.jpg",
                "http://www.engageuniversity.com/engage",
            ),
            Brand::new(
                "Main University",
                "http://www.mainuniversity.com/logo.gif",
                "http://www.mainuniversity.com/home",
            ),
            Brand::new(
                "Supreme University",
                "http://www.supremeuniversity.com/logo.png",
                "http://www.supremeuniversity.com/welcome",
            ),
        ])
    }

    /// First brand whose lower-cased name contains the lower-cased query as
    /// a substring. An empty query matches every name, so the first brand in
    /// the list wins.
    pub fn find(&self, query: &str) -> Option<&Brand> {
        let query = query.to_lowercase();
        self.0
            .iter()
            .find(|brand| brand.name.to_lowercase().contains(&query))
    }

    /// The full response body for an optional query: the first match as
    /// compact JSON, or the literal `null` when the query is absent or
    /// nothing matches.
    pub fn respond(&self, query: Option<&str>) -> String {
        let matched = query.and_then(|query| self.find(query));
        // a struct of plain strings always serializes
        serde_json::to_string(&matched).expect("serializing a brand never fails")
    }
}

///////////
// Tests //
///////////
