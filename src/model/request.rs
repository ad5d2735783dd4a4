//! Request values and their builders.
//!
//! Requests are constructed through builders so every value the client sends
//! has been range-checked up front; a failed `build` never reaches the
//! network. Unset filters are `None` and are omitted from the query string.

use super::query::{Operator, Order, WallpaperType, WallpapersOrderBy};
use crate::error::Error;

/// Parameters for listing wallpapers.
#[derive(Debug, Clone, PartialEq)]
pub struct GetWallpapersRequest {
    filter_date_day: Option<u8>,
    filter_date_month: Option<u8>,
    filter_date_year: Option<u16>,
    filter_date_operator: Operator,
    filter_gallery: Vec<i64>,
    filter_rating: Option<f32>,
    filter_rating_operator: Operator,
    filter_res_height: Option<u32>,
    filter_res_operator: Operator,
    filter_res_operator_height: Operator,
    filter_res_operator_width: Operator,
    filter_res_width: Option<u32>,
    filter_tag: Vec<i64>,
    limit: u8,
    order: Order,
    order_by: WallpapersOrderBy,
    page: u32,
    search: Option<String>,
    show_comments: bool,
    show_pickle_jar: bool,
    show_resolutions: bool,
}

impl GetWallpapersRequest {
    pub fn builder() -> GetWallpapersRequestBuilder {
        GetWallpapersRequestBuilder::default()
    }

    /// Query parameters in the order the API documents them. `order_by` is
    /// only sent when it differs from the default sort by date.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(day) = self.filter_date_day {
            query.push(("filter_date_day".to_string(), day.to_string()));
        }
        if let Some(month) = self.filter_date_month {
            query.push(("filter_date_month".to_string(), month.to_string()));
        }
        if let Some(year) = self.filter_date_year {
            query.push(("filter_date_year".to_string(), year.to_string()));
        }
        query.push((
            "filter_date_operator".to_string(),
            self.filter_date_operator.to_string(),
        ));
        for gallery in &self.filter_gallery {
            query.push(("filter_gallery".to_string(), gallery.to_string()));
        }
        if let Some(rating) = self.filter_rating {
            query.push(("filter_rating".to_string(), rating.to_string()));
        }
        query.push((
            "filter_rating_operator".to_string(),
            self.filter_rating_operator.to_string(),
        ));
        if let Some(height) = self.filter_res_height {
            query.push(("filter_res_height".to_string(), height.to_string()));
        }
        query.push((
            "filter_res_operator".to_string(),
            self.filter_res_operator.to_string(),
        ));
        query.push((
            "filter_res_operator_height".to_string(),
            self.filter_res_operator_height.to_string(),
        ));
        query.push((
            "filter_res_operator_width".to_string(),
            self.filter_res_operator_width.to_string(),
        ));
        if let Some(width) = self.filter_res_width {
            query.push(("filter_res_width".to_string(), width.to_string()));
        }
        for tag in &self.filter_tag {
            query.push(("filter_tag".to_string(), tag.to_string()));
        }
        query.push(("limit".to_string(), self.limit.to_string()));
        query.push(("order".to_string(), self.order.to_string()));
        if self.order_by != WallpapersOrderBy::Date {
            query.push(("order_by".to_string(), self.order_by.to_string()));
        }
        query.push(("page".to_string(), self.page.to_string()));
        if let Some(search) = &self.search {
            query.push(("s".to_string(), search.clone()));
        }
        query.push(("show_comments".to_string(), self.show_comments.to_string()));
        query.push((
            "show_pickle_jar".to_string(),
            self.show_pickle_jar.to_string(),
        ));
        query.push((
            "show_resolutions".to_string(),
            self.show_resolutions.to_string(),
        ));
        query
    }
}

impl Default for GetWallpapersRequest {
    fn default() -> Self {
        Self {
            filter_date_day: None,
            filter_date_month: None,
            filter_date_year: None,
            filter_date_operator: Operator::default(),
            filter_gallery: Vec::new(),
            filter_rating: None,
            filter_rating_operator: Operator::default(),
            filter_res_height: None,
            filter_res_operator: Operator::default(),
            filter_res_operator_height: Operator::default(),
            filter_res_operator_width: Operator::default(),
            filter_res_width: None,
            filter_tag: Vec::new(),
            limit: 10,
            order: Order::default(),
            order_by: WallpapersOrderBy::default(),
            page: 1,
            search: None,
            show_comments: false,
            show_pickle_jar: false,
            show_resolutions: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetWallpapersRequestBuilder {
    filter_date_day: Option<u8>,
    filter_date_month: Option<u8>,
    filter_date_year: Option<u16>,
    filter_date_operator: Operator,
    filter_gallery: Vec<i64>,
    filter_rating: Option<f32>,
    filter_rating_operator: Operator,
    filter_res_height: Option<u32>,
    filter_res_operator: Operator,
    filter_res_operator_height: Operator,
    filter_res_operator_width: Operator,
    filter_res_width: Option<u32>,
    filter_tag: Vec<i64>,
    limit: u8,
    order: Order,
    order_by: WallpapersOrderBy,
    page: u32,
    search: Option<String>,
    show_comments: bool,
    show_pickle_jar: bool,
    show_resolutions: bool,
}

impl Default for GetWallpapersRequestBuilder {
    fn default() -> Self {
        Self {
            filter_date_day: None,
            filter_date_month: None,
            filter_date_year: None,
            filter_date_operator: Operator::default(),
            filter_gallery: Vec::new(),
            filter_rating: None,
            filter_rating_operator: Operator::default(),
            filter_res_height: None,
            filter_res_operator: Operator::default(),
            filter_res_operator_height: Operator::default(),
            filter_res_operator_width: Operator::default(),
            filter_res_width: None,
            filter_tag: Vec::new(),
            limit: 10,
            order: Order::default(),
            order_by: WallpapersOrderBy::default(),
            page: 1,
            search: None,
            show_comments: false,
            show_pickle_jar: false,
            show_resolutions: true,
        }
    }
}

impl GetWallpapersRequestBuilder {
    pub fn filter_date_day(mut self, day: u8) -> Self {
        self.filter_date_day = Some(day);
        self
    }

    pub fn filter_date_month(mut self, month: u8) -> Self {
        self.filter_date_month = Some(month);
        self
    }

    pub fn filter_date_year(mut self, year: u16) -> Self {
        self.filter_date_year = Some(year);
        self
    }

    pub fn filter_date_operator(mut self, operator: Operator) -> Self {
        self.filter_date_operator = operator;
        self
    }

    pub fn filter_gallery(mut self, galleries: Vec<i64>) -> Self {
        self.filter_gallery = galleries;
        self
    }

    pub fn filter_rating(mut self, rating: f32) -> Self {
        self.filter_rating = Some(rating);
        self
    }

    pub fn filter_rating_operator(mut self, operator: Operator) -> Self {
        self.filter_rating_operator = operator;
        self
    }

    pub fn filter_res_height(mut self, height: u32) -> Self {
        self.filter_res_height = Some(height);
        self
    }

    pub fn filter_res_operator(mut self, operator: Operator) -> Self {
        self.filter_res_operator = operator;
        self
    }

    pub fn filter_res_operator_height(mut self, operator: Operator) -> Self {
        self.filter_res_operator_height = operator;
        self
    }

    pub fn filter_res_operator_width(mut self, operator: Operator) -> Self {
        self.filter_res_operator_width = operator;
        self
    }

    pub fn filter_res_width(mut self, width: u32) -> Self {
        self.filter_res_width = Some(width);
        self
    }

    pub fn filter_tag(mut self, tags: Vec<i64>) -> Self {
        self.filter_tag = tags;
        self
    }

    pub fn limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn order_by(mut self, order_by: WallpapersOrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn show_comments(mut self, show: bool) -> Self {
        self.show_comments = show;
        self
    }

    pub fn show_pickle_jar(mut self, show: bool) -> Self {
        self.show_pickle_jar = show;
        self
    }

    pub fn show_resolutions(mut self, show: bool) -> Self {
        self.show_resolutions = show;
        self
    }

    pub fn build(self) -> Result<GetWallpapersRequest, Error> {
        if let Some(day) = self.filter_date_day
            && !(1..=31).contains(&day)
        {
            return Err(Error::InvalidRequest(
                "filter date day must be between 1 and 31".to_string(),
            ));
        }
        if let Some(month) = self.filter_date_month
            && !(1..=12).contains(&month)
        {
            return Err(Error::InvalidRequest(
                "filter date month must be between 1 and 12".to_string(),
            ));
        }
        if let Some(year) = self.filter_date_year
            && year < 1997
        {
            return Err(Error::InvalidRequest(
                "filter date year must be 1997 or later".to_string(),
            ));
        }
        if let Some(rating) = self.filter_rating
            && !(1.0..=5.0).contains(&rating)
        {
            return Err(Error::InvalidRequest(
                "filter rating must be between 1 and 5".to_string(),
            ));
        }
        if !(1..=50).contains(&self.limit) {
            return Err(Error::InvalidRequest(
                "limit must be between 1 and 50".to_string(),
            ));
        }
        if self.page < 1 {
            return Err(Error::InvalidRequest(
                "page must be greater than 0".to_string(),
            ));
        }
        if let Some(search) = &self.search
            && search.trim().is_empty()
        {
            return Err(Error::InvalidRequest(
                "search term must not be empty or blank".to_string(),
            ));
        }

        Ok(GetWallpapersRequest {
            filter_date_day: self.filter_date_day,
            filter_date_month: self.filter_date_month,
            filter_date_year: self.filter_date_year,
            filter_date_operator: self.filter_date_operator,
            filter_gallery: self.filter_gallery,
            filter_rating: self.filter_rating,
            filter_rating_operator: self.filter_rating_operator,
            filter_res_height: self.filter_res_height,
            filter_res_operator: self.filter_res_operator,
            filter_res_operator_height: self.filter_res_operator_height,
            filter_res_operator_width: self.filter_res_operator_width,
            filter_res_width: self.filter_res_width,
            filter_tag: self.filter_tag,
            limit: self.limit,
            order: self.order,
            order_by: self.order_by,
            page: self.page,
            search: self.search,
            show_comments: self.show_comments,
            show_pickle_jar: self.show_pickle_jar,
            show_resolutions: self.show_resolutions,
        })
    }
}

/// Parameters for fetching a single wallpaper.
#[derive(Debug, Clone, PartialEq)]
pub struct GetWallpaperRequest {
    wallpaper_id: i64,
    filter_res_height: Option<u32>,
    filter_res_operator: Operator,
    filter_res_operator_height: Operator,
    filter_res_operator_width: Operator,
    filter_res_width: Option<u32>,
    show_comments: bool,
    show_pickle_jar: bool,
    show_resolutions: bool,
}

impl GetWallpaperRequest {
    pub fn builder() -> GetWallpaperRequestBuilder {
        GetWallpaperRequestBuilder::default()
    }

    pub fn wallpaper_id(&self) -> i64 {
        self.wallpaper_id
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(height) = self.filter_res_height {
            query.push(("filter_res_height".to_string(), height.to_string()));
        }
        query.push((
            "filter_res_operator".to_string(),
            self.filter_res_operator.to_string(),
        ));
        query.push((
            "filter_res_operator_height".to_string(),
            self.filter_res_operator_height.to_string(),
        ));
        query.push((
            "filter_res_operator_width".to_string(),
            self.filter_res_operator_width.to_string(),
        ));
        if let Some(width) = self.filter_res_width {
            query.push(("filter_res_width".to_string(), width.to_string()));
        }
        query.push(("show_comments".to_string(), self.show_comments.to_string()));
        query.push((
            "show_pickle_jar".to_string(),
            self.show_pickle_jar.to_string(),
        ));
        query.push((
            "show_resolutions".to_string(),
            self.show_resolutions.to_string(),
        ));
        query
    }
}

#[derive(Debug, Clone)]
pub struct GetWallpaperRequestBuilder {
    wallpaper_id: Option<i64>,
    filter_res_height: Option<u32>,
    filter_res_operator: Operator,
    filter_res_operator_height: Operator,
    filter_res_operator_width: Operator,
    filter_res_width: Option<u32>,
    show_comments: bool,
    show_pickle_jar: bool,
    show_resolutions: bool,
}

impl Default for GetWallpaperRequestBuilder {
    fn default() -> Self {
        Self {
            wallpaper_id: None,
            filter_res_height: None,
            filter_res_operator: Operator::default(),
            filter_res_operator_height: Operator::default(),
            filter_res_operator_width: Operator::default(),
            filter_res_width: None,
            show_comments: false,
            show_pickle_jar: false,
            show_resolutions: true,
        }
    }
}

impl GetWallpaperRequestBuilder {
    pub fn wallpaper_id(mut self, wallpaper_id: i64) -> Self {
        self.wallpaper_id = Some(wallpaper_id);
        self
    }

    pub fn filter_res_height(mut self, height: u32) -> Self {
        self.filter_res_height = Some(height);
        self
    }

    pub fn filter_res_operator(mut self, operator: Operator) -> Self {
        self.filter_res_operator = operator;
        self
    }

    pub fn filter_res_operator_height(mut self, operator: Operator) -> Self {
        self.filter_res_operator_height = operator;
        self
    }

    pub fn filter_res_operator_width(mut self, operator: Operator) -> Self {
        self.filter_res_operator_width = operator;
        self
    }

    pub fn filter_res_width(mut self, width: u32) -> Self {
        self.filter_res_width = Some(width);
        self
    }

    pub fn show_comments(mut self, show: bool) -> Self {
        self.show_comments = show;
        self
    }

    pub fn show_pickle_jar(mut self, show: bool) -> Self {
        self.show_pickle_jar = show;
        self
    }

    pub fn show_resolutions(mut self, show: bool) -> Self {
        self.show_resolutions = show;
        self
    }

    pub fn build(self) -> Result<GetWallpaperRequest, Error> {
        let wallpaper_id = self.wallpaper_id.ok_or_else(|| {
            Error::InvalidRequest("wallpaper id must be provided".to_string())
        })?;
        if wallpaper_id <= 0 {
            return Err(Error::InvalidRequest(
                "wallpaper id must be greater than 0".to_string(),
            ));
        }

        Ok(GetWallpaperRequest {
            wallpaper_id,
            filter_res_height: self.filter_res_height,
            filter_res_operator: self.filter_res_operator,
            filter_res_operator_height: self.filter_res_operator_height,
            filter_res_operator_width: self.filter_res_operator_width,
            filter_res_width: self.filter_res_width,
            show_comments: self.show_comments,
            show_pickle_jar: self.show_pickle_jar,
            show_resolutions: self.show_resolutions,
        })
    }
}

/// Parameters for downloading a rendered wallpaper file.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadWallpaperRequest {
    wallpaper_type: WallpaperType,
    width: u32,
    height: u32,
    wallpaper_id: i64,
    show_watermark: bool,
}

impl DownloadWallpaperRequest {
    pub fn builder() -> DownloadWallpaperRequestBuilder {
        DownloadWallpaperRequestBuilder::default()
    }

    pub fn wallpaper_type(&self) -> WallpaperType {
        self.wallpaper_type
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn wallpaper_id(&self) -> i64 {
        self.wallpaper_id
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        vec![(
            "show_watermark".to_string(),
            self.show_watermark.to_string(),
        )]
    }
}

#[derive(Debug, Clone)]
pub struct DownloadWallpaperRequestBuilder {
    wallpaper_type: WallpaperType,
    width: Option<u32>,
    height: Option<u32>,
    wallpaper_id: Option<i64>,
    show_watermark: bool,
}

impl Default for DownloadWallpaperRequestBuilder {
    fn default() -> Self {
        Self {
            wallpaper_type: WallpaperType::default(),
            width: None,
            height: None,
            wallpaper_id: None,
            show_watermark: true,
        }
    }
}

impl DownloadWallpaperRequestBuilder {
    pub fn wallpaper_type(mut self, wallpaper_type: WallpaperType) -> Self {
        self.wallpaper_type = wallpaper_type;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn wallpaper_id(mut self, wallpaper_id: i64) -> Self {
        self.wallpaper_id = Some(wallpaper_id);
        self
    }

    pub fn show_watermark(mut self, show: bool) -> Self {
        self.show_watermark = show;
        self
    }

    pub fn build(self) -> Result<DownloadWallpaperRequest, Error> {
        let width = self
            .width
            .ok_or_else(|| Error::InvalidRequest("width must be provided".to_string()))?;
        if width == 0 {
            return Err(Error::InvalidRequest(
                "width must be greater than 0".to_string(),
            ));
        }
        let height = self
            .height
            .ok_or_else(|| Error::InvalidRequest("height must be provided".to_string()))?;
        if height == 0 {
            return Err(Error::InvalidRequest(
                "height must be greater than 0".to_string(),
            ));
        }
        let wallpaper_id = self.wallpaper_id.ok_or_else(|| {
            Error::InvalidRequest("wallpaper id must be provided".to_string())
        })?;
        if wallpaper_id <= 0 {
            return Err(Error::InvalidRequest(
                "wallpaper id must be greater than 0".to_string(),
            ));
        }

        Ok(DownloadWallpaperRequest {
            wallpaper_type: self.wallpaper_type,
            width,
            height,
            wallpaper_id,
            show_watermark: self.show_watermark,
        })
    }
}
