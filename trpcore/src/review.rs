use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single value in a review's open-ended specs table.
///
/// Specs mix strings, numbers and flags ("Water resistant": true,
/// "Weight (g)": 187, "Chipset": "A17 Pro"); consumers must match on
/// the variant rather than rely on implicit stringification.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SpecValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// The underlying core model for a product review.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub brand: String,
    pub category: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub rating: f64,
    pub price: String,
    pub affiliate_links: BTreeMap<String, String>,
    pub excerpt: String,
    pub content: String,
    pub specs: BTreeMap<String, SpecValue>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub verdict: Option<String>,
    pub author: String,
    pub publish_date: i64,
    pub updated_date: i64,
    pub featured: bool,
    pub trending: bool,
}

/// Newtype for `Vec<Review>`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Reviews(Vec<Review>);

mod impls;
pub mod traits;
