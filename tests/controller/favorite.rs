use atlas::server::{
    controller::favorite::{add_favorite, list_favorites, remove_favorite},
    model::{app::AppState, session::user::SessionUserId},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use super::*;

mod list_favorites {
    use super::*;

    /// Expect 401 Unauthorized without a session
    #[tokio::test]
    async fn unauthorized_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = list_favorites(State(state), test.session.clone()).await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["kind"], "Unauthorized");

        Ok(())
    }

    /// Expect only the session user's favorites, sorted
    #[tokio::test]
    async fn lists_own_favorites() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let ada = test.user().insert_user("Ada", "ada@example.com").await?;
        let grace = test.user().insert_user("Grace", "grace@example.com").await?;
        test.favorite().insert_favorite(ada.id, "JPN").await?;
        test.favorite().insert_favorite(ada.id, "BRA").await?;
        test.favorite().insert_favorite(grace.id, "FRA").await?;
        SessionUserId::insert(&test.session, ada.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = list_favorites(State(state), test.session.clone()).await;

        let body = body_json(into_response(result)).await;
        assert_eq!(body, json!({"favorites": ["BRA", "JPN"]}));

        Ok(())
    }
}

mod add_favorite {
    use super::*;

    /// Expect the added code in the returned set and in a later listing
    #[tokio::test]
    async fn adds_favorite() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = add_favorite(
            State(state.clone()),
            test.session.clone(),
            Path("fra".to_string()),
        )
        .await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"favorites": ["FRA"]}));

        let listed = list_favorites(State(state), test.session.clone()).await;
        assert_eq!(
            body_json(into_response(listed)).await,
            json!({"favorites": ["FRA"]})
        );

        Ok(())
    }

    /// Expect adding the same code twice to leave a single entry
    #[tokio::test]
    async fn is_idempotent() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        for _ in 0..2 {
            let result = add_favorite(
                State(state.clone()),
                test.session.clone(),
                Path("FRA".to_string()),
            )
            .await;
            assert_eq!(into_response(result).status(), StatusCode::OK);
        }

        let listed = list_favorites(State(state), test.session.clone()).await;
        assert_eq!(
            body_json(into_response(listed)).await,
            json!({"favorites": ["FRA"]})
        );

        Ok(())
    }

    /// Expect 401 before the code is validated when there is no session
    #[tokio::test]
    async fn unauthorized_before_validation() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = add_favorite(State(state), test.session.clone(), Path("F".to_string())).await;

        assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 400 for a malformed code
    #[tokio::test]
    async fn rejects_malformed_code() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let result =
            add_favorite(State(state), test.session.clone(), Path("FRANCE".to_string())).await;

        assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 401 and a cleared session when the session user no longer exists
    #[tokio::test]
    async fn unauthorized_for_deleted_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        SessionUserId::insert(&test.session, 42).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = add_favorite(State(state), test.session.clone(), Path("FRA".to_string())).await;

        assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}

mod remove_favorite {
    use super::*;

    /// Expect 204 and the code gone from the listing
    #[tokio::test]
    async fn removes_favorite() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        test.favorite().insert_favorite(user.id, "FRA").await?;
        test.favorite().insert_favorite(user.id, "JPN").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = remove_favorite(
            State(state.clone()),
            test.session.clone(),
            Path("FRA".to_string()),
        )
        .await;

        assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);
        let listed = list_favorites(State(state), test.session.clone()).await;
        assert_eq!(
            body_json(into_response(listed)).await,
            json!({"favorites": ["JPN"]})
        );

        Ok(())
    }

    /// Expect 204 when the code isn't a favorite
    #[tokio::test]
    async fn is_idempotent() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = remove_favorite(State(state), test.session.clone(), Path("FRA".to_string())).await;

        assert_eq!(into_response(result).status(), StatusCode::NO_CONTENT);

        Ok(())
    }
}
