use atlas::{
    model::user::{LoginDto, RegisterDto},
    server::{
        controller::auth::{get_user, login, logout, register},
        model::{app::AppState, session::user::SessionUserId},
    },
};
use axum::{extract::State, http::StatusCode, Json};

use super::*;

fn ada() -> RegisterDto {
    RegisterDto {
        name: "Ada".to_string(),
        email: "Ada@Example.com".to_string(),
        password: "correct horse".to_string(),
    }
}

fn ada_login(password: &str) -> LoginDto {
    LoginDto {
        email: "ada@example.com".to_string(),
        password: password.to_string(),
    }
}

mod register {
    use super::*;

    /// Expect 201 with the new user, who is logged in afterwards
    #[tokio::test]
    async fn creates_user_and_logs_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = register(State(state), test.session.clone(), Ok(Json(ada()))).await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(
            SessionUserId::get(&test.session).await.unwrap(),
            body["id"].as_i64().map(|id| id as i32)
        );

        Ok(())
    }

    /// Expect 409 Conflict when the email is already registered
    #[tokio::test]
    async fn conflict_for_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();

        let first = register(State(state.clone()), test.session.clone(), Ok(Json(ada()))).await;
        assert!(first.is_ok());
        let second = register(State(state), test.session.clone(), Ok(Json(ada()))).await;

        let response = into_response(second);
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["kind"], "Conflict");

        Ok(())
    }

    /// Expect 400 for a password that is too short, without logging in
    #[tokio::test]
    async fn rejects_short_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();
        let payload = RegisterDto {
            password: "short".to_string(),
            ..ada()
        };

        let result = register(State(state), test.session.clone(), Ok(Json(payload))).await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["kind"], "ValidationError");
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}

mod login {
    use super::*;

    /// Expect 200 with the user for the registered credentials
    #[tokio::test]
    async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();
        let registered = register(State(state.clone()), test.session.clone(), Ok(Json(ada()))).await;
        assert!(registered.is_ok());
        test.session.flush().await?;

        let result = login(
            State(state),
            test.session.clone(),
            Ok(Json(ada_login("correct horse"))),
        )
        .await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Ada");
        assert!(SessionUserId::get(&test.session).await.unwrap().is_some());

        Ok(())
    }

    /// Expect 401 for a wrong password
    #[tokio::test]
    async fn unauthorized_for_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();
        let registered = register(State(state.clone()), test.session.clone(), Ok(Json(ada()))).await;
        assert!(registered.is_ok());
        test.session.flush().await?;

        let result = login(
            State(state),
            test.session.clone(),
            Ok(Json(ada_login("battery staple"))),
        )
        .await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["kind"], "Unauthorized");
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    /// Expect 401 for an email nobody registered
    #[tokio::test]
    async fn unauthorized_for_unknown_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = login(
            State(state),
            test.session.clone(),
            Ok(Json(ada_login("correct horse"))),
        )
        .await;

        assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect 200 and an empty session after logging out
    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = logout(test.session.clone()).await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Logged out");
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    /// Expect 200 when there is no session to clear
    #[tokio::test]
    async fn succeeds_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = logout(test.session.clone()).await;

        assert_eq!(into_response(result).status(), StatusCode::OK);

        Ok(())
    }
}

mod get_user {
    use super::*;

    /// Expect the user bound to the session
    #[tokio::test]
    async fn returns_session_user() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_atlas_tables().build().await?;
        let user = test.user().insert_user("Ada", "ada@example.com").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();
        let state: AppState = test.to_app_state();

        let result = get_user(State(state), test.session.clone()).await;

        let response = into_response(result);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], user.id);

        Ok(())
    }

    /// Expect 401 without a session
    #[tokio::test]
    async fn unauthorized_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_atlas_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = get_user(State(state), test.session.clone()).await;

        assert_eq!(into_response(result).status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
