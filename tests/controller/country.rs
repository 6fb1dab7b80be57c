use atlas::{
    model::country::{CountryLanguageQuery, CountryListQuery},
    server::{
        controller::country::{get_country, list_countries},
        model::app::AppState,
    },
};
use atlas_test_utils::fixtures::country::country_json;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
};
use mockito::Matcher;
use serde_json::json;

use super::*;

fn lang(code: &str) -> Result<Query<CountryLanguageQuery>, QueryRejection> {
    Ok(Query(CountryLanguageQuery {
        lang: Some(code.to_string()),
    }))
}

mod get_country {
    use super::*;

    /// Expect 200 with the normalized record, accepting a lower case code
    #[tokio::test]
    async fn returns_country() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_alpha_endpoint("FRA", vec![country_json("FRA", "France")], 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let result = get_country(State(state), Path("fra".to_string()), lang("en")).await;

        test.assert_mocks();
        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["code"], "FRA");
        assert_eq!(body["calling_codes"], json!(["+33"]));
        assert_eq!(body["coordinates"], json!({"lat": 46.0, "lng": 2.0}));

        Ok(())
    }

    /// Expect missing upstream scalars as explicit nulls
    #[tokio::test]
    async fn returns_nulls_for_missing_values() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_alpha_endpoint(
                "ATA",
                vec![json!({"cca3": "ATA", "name": {"common": "Antarctica"}})],
                1,
            )
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let result = get_country(State(state), Path("ATA".to_string()), lang("en")).await;

        let body = body_json(into_response(result)).await;
        assert!(body["population"].is_null());
        assert!(body["capital"].as_array().is_some_and(Vec::is_empty));
        assert!(body["driving_side"].is_null());

        Ok(())
    }

    /// Expect 404 NotFound for a well formed code the upstream doesn't know
    #[tokio::test]
    async fn not_found_for_unknown_code() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_upstream_error("/alpha/ZZZ", 404, 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let result = get_country(State(state), Path("ZZZ".to_string()), lang("en")).await;

        test.assert_mocks();
        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["kind"], "NotFound");

        Ok(())
    }

    /// Expect 400 for a malformed code without contacting the upstream
    #[tokio::test]
    async fn rejects_malformed_code() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("GET", Matcher::Any).expect(0).create())
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let result = get_country(State(state), Path("FR1".to_string()), lang("en")).await;

        test.assert_mocks();
        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["kind"], "ValidationError");

        Ok(())
    }

    /// Expect 400 for an unsupported language
    #[tokio::test]
    async fn rejects_unsupported_language() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state: AppState = test.to_app_state();

        let result = get_country(State(state), Path("FRA".to_string()), lang("xx")).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 502 UpstreamUnavailable when the upstream fails
    #[tokio::test]
    async fn bad_gateway_on_upstream_failure() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_upstream_error("/alpha/FRA", 503, 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let result = get_country(State(state), Path("FRA".to_string()), lang("en")).await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["kind"], "UpstreamUnavailable");

        Ok(())
    }
}

mod list_countries {
    use super::*;

    /// Expect countries sorted by their name in the requested language
    #[tokio::test]
    async fn sorts_by_display_name() -> Result<(), TestError> {
        let mut germany = country_json("DEU", "Germany");
        germany["translations"] = json!({"deu": {"common": "Deutschland"}});
        let mut austria = country_json("AUT", "Austria");
        austria["translations"] = json!({"deu": {"common": "Österreich"}});
        let test = TestBuilder::new()
            .with_region_endpoint("Europe", vec![austria, germany], 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();
        let query = CountryListQuery {
            region: Some("europe".to_string()),
            name: None,
            lang: Some("de".to_string()),
        };

        let result = list_countries(State(state), Ok(Query(query))).await;

        test.assert_mocks();
        let body = body_json(into_response(result)).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|country| country["name"]["display"].as_str())
            .collect();
        assert_eq!(names, vec!["Deutschland", "Österreich"]);

        Ok(())
    }

    /// Expect 400 for an unknown region without contacting the upstream
    #[tokio::test]
    async fn rejects_unknown_region() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("GET", Matcher::Any).expect(0).create())
            .build()
            .await?;
        let state: AppState = test.to_app_state();
        let query = CountryListQuery {
            region: Some("Atlantis".to_string()),
            ..Default::default()
        };

        let result = list_countries(State(state), Ok(Query(query))).await;

        test.assert_mocks();
        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect the name route for a name search
    #[tokio::test]
    async fn searches_by_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_name_endpoint("land", vec![country_json("FIN", "Finland")], 1)
            .build()
            .await?;
        let state: AppState = test.to_app_state();
        let query = CountryListQuery {
            name: Some(" land ".to_string()),
            ..Default::default()
        };

        let result = list_countries(State(state), Ok(Query(query))).await;

        test.assert_mocks();
        let body = body_json(into_response(result)).await;
        assert_eq!(body[0]["code"], "FIN");

        Ok(())
    }
}
