//! Response payloads decoded from the API's JSON bodies.
//!
//! Every `/v2/core` response wraps its payload in a `db_core` object that
//! echoes the request alongside the data. Unknown fields are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::query::{Operator, Order, WallpaperType, WallpapersOrderBy};
use super::wallpaper::Wallpaper;

/// Absolute base URLs the API reports for itself and its asset hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub api: String,
    pub image: String,
    pub thumb: String,
    pub web: String,
}

/// Structured error body accompanying a non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub code: i64,
    pub description: String,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountInformationResponse {
    pub db_core: AccountCore,
    pub user: AccountUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCore {
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountUser {
    pub active: bool,
    pub display_name: String,
    pub id: i64,
    pub lifetime: bool,
    pub plus: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetWallpaperResponse {
    pub db_core: WallpaperCore,
    /// Absent when the id does not resolve to a wallpaper.
    #[serde(default)]
    pub wallpaper: Option<Wallpaper>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperCore {
    pub timestamp: i64,
    pub endpoints: Endpoints,
    pub request: WallpaperRequestEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperRequestEcho {
    pub params: WallpaperParamsEcho,
    pub query: WallpaperQueryEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperParamsEcho {
    #[serde(rename = "wallpaperId")]
    pub wallpaper_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperQueryEcho {
    pub filter_res_height: i64,
    pub filter_res_operator: Operator,
    #[serde(default)]
    pub filter_res_operator_height: Option<Operator>,
    #[serde(default)]
    pub filter_res_operator_width: Option<Operator>,
    pub filter_res_width: i64,
    pub show_comments: bool,
    pub show_pickle_jar: bool,
    pub show_resolutions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetWallpapersResponse {
    pub db_core: WallpapersCore,
    /// Wallpaper ids on this page, in the requested order.
    pub wallpapers: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpapersCore {
    pub timestamp: i64,
    pub endpoints: Endpoints,
    pub request: WallpapersRequestEcho,
    pub total_pages: i64,
    /// Wallpaper details keyed by id.
    pub wallpapers: HashMap<String, Wallpaper>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpapersRequestEcho {
    pub query: WallpapersQueryEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpapersQueryEcho {
    #[serde(default)]
    pub filter_date_day: Option<i64>,
    #[serde(default)]
    pub filter_date_month: Option<i64>,
    #[serde(default)]
    pub filter_date_year: Option<i64>,
    pub filter_date_operator: Operator,
    #[serde(default)]
    pub filter_gallery: Option<Vec<i64>>,
    #[serde(default)]
    pub filter_rating: Option<i64>,
    #[serde(default)]
    pub filter_rating_operator: Option<Operator>,
    #[serde(default)]
    pub filter_res_operator_height: Option<Operator>,
    #[serde(default)]
    pub filter_res_operator_width: Option<Operator>,
    pub filter_res_height: i64,
    pub filter_res_operator: Operator,
    pub filter_res_width: i64,
    #[serde(default)]
    pub filter_tag: Option<Vec<i64>>,
    pub limit: i64,
    pub order: Order,
    pub order_by: WallpapersOrderBy,
    pub page: i64,
    #[serde(default)]
    pub s: Option<String>,
    pub show_comments: bool,
    pub show_pickle_jar: bool,
    pub show_resolutions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadWallpaperResponse {
    pub db_core: DownloadCore,
    pub download: Download,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadCore {
    pub timestamp: i64,
    pub endpoints: Endpoints,
    pub request: DownloadRequestEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequestEcho {
    pub params: DownloadParamsEcho,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadParamsEcho {
    #[serde(rename = "type")]
    pub wallpaper_type: WallpaperType,
    pub width: i64,
    pub height: i64,
    pub wallpaper_id: i64,
}

/// A one-time download grant for a rendered wallpaper file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Download {
    /// Unix timestamp after which the url is no longer valid.
    pub expiration: i64,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints_json() -> &'static str {
        r#"{
            "api": "https://api.digitalblasphemy.com/v2/core",
            "image": "https://arcadia.digitalblasphemy.com",
            "thumb": "https://cdn.digitalblasphemy.com",
            "web": "https://digitalblasphemy.com"
        }"#
    }

    #[test]
    fn decodes_account_information() {
        let body = r#"{
            "db_core": { "timestamp": 1 },
            "user": {
                "active": true,
                "display_name": "username",
                "id": 2,
                "lifetime": true,
                "plus": true
            }
        }"#;

        let response: GetAccountInformationResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.db_core.timestamp, 1);
        assert_eq!(response.user.display_name, "username");
        assert_eq!(response.user.id, 2);
        assert!(response.user.active);
        assert!(response.user.lifetime);
        assert!(response.user.plus);
    }

    #[test]
    fn decodes_wallpaper_response_without_wallpaper() {
        let body = format!(
            r#"{{
                "db_core": {{
                    "timestamp": 1,
                    "endpoints": {},
                    "request": {{
                        "params": {{ "wallpaperId": 2 }},
                        "query": {{
                            "filter_res_height": 0,
                            "filter_res_operator": ">=",
                            "filter_res_width": 0,
                            "show_comments": false,
                            "show_pickle_jar": false,
                            "show_resolutions": true
                        }}
                    }}
                }}
            }}"#,
            endpoints_json()
        );

        let response: GetWallpaperResponse = serde_json::from_str(&body).unwrap();

        assert_eq!(response.db_core.request.params.wallpaper_id, 2);
        assert_eq!(
            response.db_core.request.query.filter_res_operator,
            Operator::GreaterThanOrEqual
        );
        assert!(response.db_core.request.query.filter_res_operator_height.is_none());
        assert!(response.wallpaper.is_none());
    }

    #[test]
    fn decodes_wallpapers_response() {
        let body = format!(
            r#"{{
                "db_core": {{
                    "timestamp": 1,
                    "endpoints": {},
                    "request": {{
                        "query": {{
                            "filter_date_day": 2,
                            "filter_date_operator": "=",
                            "filter_gallery": [5],
                            "filter_res_height": 7,
                            "filter_res_operator": ">=",
                            "filter_res_width": 8,
                            "filter_tag": [9],
                            "limit": 10,
                            "order": "asc",
                            "order_by": "name",
                            "page": 11,
                            "s": "search",
                            "show_comments": true,
                            "show_pickle_jar": true,
                            "show_resolutions": true
                        }}
                    }},
                    "total_pages": 12,
                    "wallpapers": {{
                        "13": {{
                            "id": 13,
                            "name": "Vulcan",
                            "paths": {{
                                "api": "/wallpaper/13",
                                "thumb": "/thumbnail/21x22/vulcan_thumbnail_21x22.jpg",
                                "web": "/sec/vulcan/"
                            }}
                        }}
                    }}
                }},
                "wallpapers": [13]
            }}"#,
            endpoints_json()
        );

        let response: GetWallpapersResponse = serde_json::from_str(&body).unwrap();

        assert_eq!(response.wallpapers, vec![13]);
        assert_eq!(response.db_core.total_pages, 12);
        let query = &response.db_core.request.query;
        assert_eq!(query.filter_date_day, Some(2));
        assert_eq!(query.filter_date_operator, Operator::Equal);
        assert_eq!(query.order_by, WallpapersOrderBy::Name);
        assert_eq!(query.s.as_deref(), Some("search"));
        assert!(query.filter_date_month.is_none());
        assert_eq!(response.db_core.wallpapers["13"].name, "Vulcan");
    }

    #[test]
    fn decodes_download_response() {
        let body = format!(
            r#"{{
                "db_core": {{
                    "timestamp": 1,
                    "endpoints": {},
                    "request": {{
                        "params": {{
                            "type": "dual",
                            "width": 2560,
                            "height": 1440,
                            "wallpaper_id": 42
                        }}
                    }}
                }},
                "download": {{
                    "expiration": 99,
                    "url": "https://cdn.digitalblasphemy.com/dl/42"
                }}
            }}"#,
            endpoints_json()
        );

        let response: DownloadWallpaperResponse = serde_json::from_str(&body).unwrap();

        assert_eq!(
            response.db_core.request.params.wallpaper_type,
            WallpaperType::Dual
        );
        assert_eq!(response.db_core.request.params.wallpaper_id, 42);
        assert_eq!(response.download.expiration, 99);
        assert_eq!(response.download.url, "https://cdn.digitalblasphemy.com/dl/42");
    }

    #[test]
    fn decodes_response_error_with_and_without_errors() {
        let full: ResponseError =
            serde_json::from_str(r#"{ "code": 401, "description": "Unauthorized", "errors": ["bad key"] }"#)
                .unwrap();
        assert_eq!(full.code, 401);
        assert_eq!(full.errors, Some(vec!["bad key".to_string()]));

        let minimal: ResponseError =
            serde_json::from_str(r#"{ "code": 500, "description": "Internal Server Error" }"#).unwrap();
        assert!(minimal.errors.is_none());
    }
}
