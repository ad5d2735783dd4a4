//! Typed request/response values and the JSON mapping between them.

mod query;
mod request;
mod response;
mod wallpaper;

pub use query::{Operator, Order, WallpaperType, WallpapersOrderBy};
pub use request::{
    DownloadWallpaperRequest, DownloadWallpaperRequestBuilder, GetWallpaperRequest,
    GetWallpaperRequestBuilder, GetWallpapersRequest, GetWallpapersRequestBuilder,
};
pub use response::{
    AccountCore, AccountUser, Download, DownloadCore, DownloadParamsEcho, DownloadRequestEcho,
    DownloadWallpaperResponse, Endpoints, GetAccountInformationResponse, GetWallpaperResponse,
    GetWallpapersResponse, ResponseError, WallpaperCore, WallpaperParamsEcho, WallpaperQueryEcho,
    WallpaperRequestEcho, WallpapersCore, WallpapersQueryEcho, WallpapersRequestEcho,
};
pub use wallpaper::{
    Comment, Comments, PickleJar, Resolution, Resolutions, Tag, Wallpaper, WallpaperPaths,
};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decodes a JSON response body into a typed value.
pub fn from_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// Serializes a typed value to a JSON body.
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::Encode)
}
