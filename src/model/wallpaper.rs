//! Wallpaper payload and its nested structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single wallpaper as returned by the API. Only `id`, `name` and `paths`
/// are always present; the rest depend on the `show_*` flags of the request
/// and on the wallpaper itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallpaper {
    pub id: i64,
    #[serde(default)]
    pub all_free: Option<bool>,
    #[serde(default)]
    pub comments: Option<Comments>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub free: Option<bool>,
    pub name: String,
    pub paths: WallpaperPaths,
    #[serde(default)]
    pub pickle_jar: Option<PickleJar>,
    /// Average rating, reported by the API as a decimal string.
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub resolutions: Option<Resolutions>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub tags: Option<HashMap<String, Tag>>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comments {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub author_display: String,
    pub content: String,
    pub rating: String,
    pub timestamp: i64,
}

/// Relative paths to the wallpaper on the API, CDN and web endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperPaths {
    pub api: String,
    pub thumb: String,
    pub web: String,
}

/// Related "pickle jar" variants of a wallpaper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickleJar {
    pub parent: String,
    pub siblings: Vec<String>,
}

/// Available renditions, keyed by monitor layout. Only `single` is
/// guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolutions {
    pub single: Vec<Resolution>,
    #[serde(default)]
    pub dual: Option<Vec<Resolution>>,
    #[serde(default)]
    pub triple: Option<Vec<Resolution>>,
    #[serde(default)]
    pub mobile: Option<Vec<Resolution>>,
}

/// A concrete rendition. Dimensions come over the wire as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub label: String,
    pub width: String,
    pub height: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
