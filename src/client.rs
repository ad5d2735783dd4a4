//! Client facade exposing one method per Digital Blasphemy API operation.

use std::path::Path;

use log::debug;
use reqwest::Client;

use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::model::{
    self, DownloadWallpaperRequest, DownloadWallpaperResponse, GetAccountInformationResponse,
    GetWallpaperRequest, GetWallpaperResponse, GetWallpapersRequest, GetWallpapersResponse,
    Wallpaper,
};

/// Base URL of the production API.
pub const DEFAULT_BASE_URL: &str = "https://api.digitalblasphemy.com";

/// Client for the Digital Blasphemy API.
///
/// Holds only immutable configuration and a shared connection pool, so one
/// instance can be used from concurrent tasks without synchronization.
pub struct DigitalBlasphemyClient {
    transport: Box<dyn Transport>,
    base_url: String,
}

impl DigitalBlasphemyClient {
    /// Creates a client talking to the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL, e.g. a stub server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let transport = HttpClient::new(Client::new(), api_key);
        Self::with_transport(Box::new(transport), base_url)
    }

    pub(crate) fn with_transport(
        transport: Box<dyn Transport>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Fetches account details for the configured API key.
    #[tracing::instrument(skip(self))]
    pub async fn get_account_information(&self) -> Result<GetAccountInformationResponse> {
        let url = format!("{}/v2/core/account", self.base_url);
        let body = self.transport.get(&url, &[]).await?;
        model::from_json(&body)
    }

    /// Lists wallpapers matching the request's filters.
    #[tracing::instrument(skip(self, request))]
    pub async fn get_wallpapers(
        &self,
        request: &GetWallpapersRequest,
    ) -> Result<GetWallpapersResponse> {
        let url = format!("{}/v2/core/wallpapers", self.base_url);
        let body = self.transport.get(&url, &request.to_query()).await?;
        model::from_json(&body)
    }

    /// Fetches a single wallpaper. Returns `None` when the API responds
    /// without a wallpaper entry for the id.
    #[tracing::instrument(skip(self, request))]
    pub async fn get_wallpaper(&self, request: &GetWallpaperRequest) -> Result<Option<Wallpaper>> {
        let url = format!(
            "{}/v2/core/wallpaper/{}",
            self.base_url,
            request.wallpaper_id()
        );
        let body = self.transport.get(&url, &request.to_query()).await?;
        let response: GetWallpaperResponse = model::from_json(&body)?;
        Ok(response.wallpaper)
    }

    /// Resolves a time-limited download URL for the requested rendition and
    /// writes the fetched file to `target`.
    #[tracing::instrument(skip(self, request))]
    pub async fn download_wallpaper(
        &self,
        target: &Path,
        request: &DownloadWallpaperRequest,
    ) -> Result<()> {
        let url = format!(
            "{}/v2/core/download/wallpaper/{}/{}/{}/{}",
            self.base_url,
            request.wallpaper_type(),
            request.width(),
            request.height(),
            request.wallpaper_id(),
        );
        let body = self.transport.get(&url, &request.to_query()).await?;
        let response: DownloadWallpaperResponse = model::from_json(&body)?;

        debug!(
            "Downloading wallpaper {} from {}...",
            request.wallpaper_id(),
            response.download.url
        );

        let image = self.transport.get(&response.download.url, &[]).await?;
        tokio::fs::write(target, image).await?;
        Ok(())
    }
}
