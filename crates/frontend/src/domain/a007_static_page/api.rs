use contracts::domain::a007_static_page::aggregate::{StaticPage, StaticPageKind, UpdateStaticPageDto};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, api_url_with};
use crate::shared::http;

pub async fn fetch_page(kind: StaticPageKind) -> Result<StaticPage, ApiError> {
    http::get_json(&api_url_with("/static/v1/getPage", kind.slug())).await
}

pub async fn update_page(dto: &UpdateStaticPageDto) -> Result<(), ApiError> {
    http::post_unit(&api_url("/static/v1/updatePage"), dto).await
}
