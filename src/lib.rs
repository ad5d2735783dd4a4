//! Client library for the [Digital Blasphemy](https://digitalblasphemy.com)
//! wallpaper API.
//!
//! The crate is layered: the [`http`] module issues the raw HTTP calls, the
//! [`model`] module maps between JSON and typed values, and
//! [`DigitalBlasphemyClient`] combines the two into one method per API
//! operation. Every call returns either a typed response or an [`Error`]
//! distinguishing transport failures, malformed payloads and API rejections.
//!
//! ```no_run
//! use digital_blasphemy::DigitalBlasphemyClient;
//! use digital_blasphemy::model::GetWallpapersRequest;
//!
//! # async fn run() -> digital_blasphemy::Result<()> {
//! let client = DigitalBlasphemyClient::new("api key");
//!
//! let account = client.get_account_information().await?;
//! println!("logged in as {}", account.user.display_name);
//!
//! let request = GetWallpapersRequest::builder().limit(5).build()?;
//! let wallpapers = client.get_wallpapers(&request).await?;
//! println!("{} wallpapers on this page", wallpapers.wallpapers.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod model;

pub use client::{DEFAULT_BASE_URL, DigitalBlasphemyClient};
pub use error::{ApiError, Error, Result};
