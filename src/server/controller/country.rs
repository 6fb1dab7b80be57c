use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        country::{CountryDto, CountryLanguageQuery, CountryListQuery},
        input::{parse_name_query, CountryCode, Language, Region},
    },
    server::{
        controller::util::rejection::query_error,
        error::Error,
        model::app::AppState,
        service::country::{CountryFilter, CountryService},
    },
};

pub static COUNTRY_TAG: &str = "country";

/// List countries, optionally filtered by region and name
#[utoipa::path(
    get,
    path = "/api/v1/countries",
    tag = COUNTRY_TAG,
    params(CountryListQuery),
    responses(
        (status = 200, description = "Matching countries sorted by display name", body = Vec<CountryDto>),
        (status = 400, description = "Unknown region or language, blank name or malformed query string", body = ErrorDto),
        (status = 502, description = "Country data source unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_countries(
    State(state): State<AppState>,
    query: Result<Query<CountryListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(query_error)?;
    let filter = CountryFilter {
        region: query.region.as_deref().map(Region::parse).transpose()?,
        name: query.name.as_deref().map(parse_name_query).transpose()?,
        language: parse_language(query.lang.as_deref())?,
    };

    let countries = CountryService::new(&state.country_client)
        .list_countries(&filter)
        .await?;

    Ok((StatusCode::OK, Json(countries)))
}

/// Get one country by its ISO 3166-1 alpha-3 code
///
/// # Responses
/// - 200 (OK): The country, display name in the `lang` language
/// - 400 (Bad Request): Malformed code, unsupported language or query string
/// - 404 (Not Found): No country has this code
/// - 502 (Bad Gateway): REST Countries failed, timed out or answered with garbage
#[utoipa::path(
    get,
    path = "/api/v1/countries/{code}",
    tag = COUNTRY_TAG,
    params(
        ("code" = String, Path, description = "Three letter country code, any case"),
        CountryLanguageQuery
    ),
    responses(
        (status = 200, description = "The country", body = CountryDto),
        (status = 400, description = "Malformed code or unsupported language", body = ErrorDto),
        (status = 404, description = "No country has this code", body = ErrorDto),
        (status = 502, description = "Country data source unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
    query: Result<Query<CountryLanguageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(query_error)?;
    let code = CountryCode::parse(&code)?;
    let language = parse_language(query.lang.as_deref())?;

    let country = CountryService::new(&state.country_client)
        .fetch_country_by_code(&code, language)
        .await?;

    Ok((StatusCode::OK, Json(country)))
}

fn parse_language(raw: Option<&str>) -> Result<Language, Error> {
    Ok(raw
        .filter(|lang| !lang.trim().is_empty())
        .map(Language::parse)
        .transpose()?
        .unwrap_or_default())
}
