//! Normalized catalog records and the raw wire shapes they are built from.
//!
//! # Design
//! `Raw*` types mirror the upstream catalog (snake_case, canonical `url`).
//! Consumers only ever work with `Person`, `Starship` and
//! `Planet`, whose serialized field names are camelCase. Numeric-looking
//! fields stay `String` because upstream uses values like `"unknown"` or
//! `"30-165"`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The three record kinds served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Person,
    Starship,
    Planet,
}

impl ResourceKind {
    /// Collection segment used in catalog paths.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Person => "people",
            ResourceKind::Starship => "starships",
            ResourceKind::Planet => "planets",
        }
    }

    /// Directory segment used in image urls.
    pub fn image_dir(self) -> &'static str {
        match self {
            ResourceKind::Person => "characters",
            ResourceKind::Starship => "starships",
            ResourceKind::Planet => "planets",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Person => "person",
            ResourceKind::Starship => "starship",
            ResourceKind::Planet => "planet",
        };
        f.write_str(name)
    }
}

/// A normalized record kind with exactly one normalizer.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Wire shape decoded from the catalog.
    type Raw: DeserializeOwned + Send;

    fn normalize(raw: Self::Raw) -> Result<Self, ApiError>;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Labelled fields shown by detail views, in display order.
    fn fields(&self) -> Vec<(&'static str, &str)>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub eye_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starship {
    pub id: String,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    pub name: String,
    pub population: String,
    pub rotation_period: String,
    pub diameter: String,
}

fn unknown() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPerson {
    pub url: String,
    pub name: String,
    #[serde(default = "unknown")]
    pub gender: String,
    #[serde(default = "unknown")]
    pub birth_year: String,
    #[serde(default = "unknown")]
    pub eye_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStarship {
    pub url: String,
    pub name: String,
    #[serde(default = "unknown")]
    pub model: String,
    #[serde(default = "unknown")]
    pub manufacturer: String,
    #[serde(default = "unknown")]
    pub cost_in_credits: String,
    #[serde(default = "unknown")]
    pub length: String,
    #[serde(default = "unknown")]
    pub crew: String,
    #[serde(default = "unknown")]
    pub passengers: String,
    #[serde(default = "unknown")]
    pub cargo_capacity: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanet {
    pub url: String,
    pub name: String,
    #[serde(default = "unknown")]
    pub population: String,
    #[serde(default = "unknown")]
    pub rotation_period: String,
    #[serde(default = "unknown")]
    pub diameter: String,
}

/// Collection envelope. Only the first page is ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage<T> {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}
