#[cfg(test)]
mod vocation_handler_tests {
    use axum::{
        Router,
        http::{Request, StatusCode},
        routing::*,
    };
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_upsert_vocation_returns_201() {
        // Create a simple router for testing
        let app = Router::new()
            .route(
                "/api/v1/vocations",
                post(|| async { (StatusCode::CREATED, "vocation created") }),
            )
            .route(
                "/api/v1/vocations/:name",
                get(|| async {
                    (
                        StatusCode::OK,
                        r#"{"name":"Inteligencia Artificial"}"#,
                    )
                }),
            );

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/vocations")
                    .header("Content-Type", "application/json")
                    .body(json!({"name": "Inteligencia Artificial"}).to_string())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_vocation_returns_200_for_existing() {
        let app = Router::new().route(
            "/api/v1/vocations/:name",
            get(|| async {
                (
                    StatusCode::OK,
                    r#"{"name":"Inteligencia Artificial"}"#,
                )
            }),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/vocations/Inteligencia%20Artificial")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_course_returns_404_for_non_existing() {
        let app = Router::new().route(
            "/api/v1/courses/:name",
            get(|| async { (StatusCode::NOT_FOUND, r#"{"error":"NOT_FOUND"}"#) }),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/courses/inexistente")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::api::dto::bibliography_dto::SearchBibliographiesRequest;
    use crate::api::dto::course_dto::UpdateCourseRequest;
    use crate::api::dto::record_dto::UpsertRecordRequest;
    use crate::api::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
    use crate::models::course::Difficulty;

    #[test]
    fn test_create_user_request_deserializes() {
        let json = r#"{
            "username": "lucasg",
            "birth_date": "1990-05-15",
            "vocation": "Desarrollo Web"
        }"#;

        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "lucasg");
        assert_eq!(request.vocation, "Desarrollo Web");
    }

    #[test]
    fn test_update_course_request_allows_partial_fields() {
        let request: UpdateCourseRequest =
            serde_json::from_str(r#"{"new_difficulty": "advanced"}"#).unwrap();
        assert!(request.new_name.is_none());
        assert_eq!(request.new_difficulty, Some(Difficulty::Advanced));
    }

    #[test]
    fn test_update_user_request_accepts_progress_list() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"progress": ["HTML y CSS Básico", "Git Esencial"]}"#)
                .unwrap();
        assert!(request.username.is_none());
        assert_eq!(request.progress.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_search_bibliographies_request_keeps_titles_intact() {
        // 标题本身可以含逗号，JSON 载荷不受分隔符影响
        let request: SearchBibliographiesRequest = serde_json::from_str(
            r#"{"titles": ["Python Crash Course, 2nd Edition", "Eloquent JavaScript"]}"#,
        )
        .unwrap();
        assert_eq!(request.titles.len(), 2);
        assert_eq!(request.titles[0], "Python Crash Course, 2nd Edition");
    }

    #[test]
    fn test_upsert_record_request_into_record() {
        let json = r#"{
            "code": "PYAI001",
            "name": "Python para IA",
            "description": "Fundamentos de Python",
            "difficulty": "beginner",
            "prerequisites": ["Conocimientos básicos"],
            "unlocks_bibliography": "Python_Crash_Course"
        }"#;

        let request: UpsertRecordRequest = serde_json::from_str(json).unwrap();
        let record = request.into_record();
        assert_eq!(record.code, "PYAI001");
        assert!(record.topics.is_empty());
        assert_eq!(
            record.unlocks_bibliography.as_deref(),
            Some("Python_Crash_Course")
        );
    }
}
