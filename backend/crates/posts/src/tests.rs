//! Tests for the Posts crate
//! Interaction scenarios against the in-memory stores, then the HTTP surface.

#[cfg(test)]
mod scenario_tests {
    use std::sync::Arc;

    use auth::InMemoryAuthRepository;
    use auth::application::{AuthConfig, ProvisionIdentityUseCase, ProvisionInput};
    use kernel::id::UserId;

    use crate::application::{
        AddCommentUseCase, CreatePostUseCase, DeletePostUseCase, GetPostUseCase,
        LikePostUseCase, ListPostsUseCase, PostsConfig, RemoveCommentUseCase,
    };
    use crate::domain::value_objects::CommentRemoval;
    use crate::error::PostError;
    use crate::infra::{IdentityAuthorDirectory, InMemoryPostRepository};

    type Authors = IdentityAuthorDirectory<InMemoryAuthRepository>;

    struct World {
        posts: Arc<InMemoryPostRepository>,
        authors: Arc<Authors>,
        config: Arc<PostsConfig>,
        a: UserId,
        b: UserId,
    }

    async fn provision(repo: &Arc<InMemoryAuthRepository>, name: &str) -> UserId {
        ProvisionIdentityUseCase::new(repo.clone(), Arc::new(AuthConfig::with_secret("s")))
            .execute(ProvisionInput {
                name: name.to_string(),
                email: format!("{}@example.com", name),
                password: "password".to_string(),
                avatar: None,
            })
            .await
            .unwrap()
            .user_id
    }

    async fn world() -> World {
        let identities = Arc::new(InMemoryAuthRepository::new());
        let a = provision(&identities, "alice").await;
        let b = provision(&identities, "bob").await;

        World {
            posts: Arc::new(InMemoryPostRepository::new()),
            authors: Arc::new(IdentityAuthorDirectory::new(identities)),
            config: Arc::new(PostsConfig::default()),
            a,
            b,
        }
    }

    impl World {
        async fn create(&self, author: &UserId, text: &str) -> String {
            CreatePostUseCase::new(self.posts.clone(), self.authors.clone(), self.config.clone())
                .execute(author, text.to_string())
                .await
                .unwrap()
                .id
                .to_string()
        }

        fn likes(&self) -> LikePostUseCase<InMemoryPostRepository> {
            LikePostUseCase::new(self.posts.clone())
        }

        fn add_comment(&self) -> AddCommentUseCase<InMemoryPostRepository, Authors> {
            AddCommentUseCase::new(self.posts.clone(), self.authors.clone(), self.config.clone())
        }

        fn remove_comment(&self) -> RemoveCommentUseCase<InMemoryPostRepository> {
            RemoveCommentUseCase::new(self.posts.clone(), CommentRemoval::FirstByRequester)
        }
    }

    #[tokio::test]
    async fn test_create_post_snapshots_author() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;

        let post = GetPostUseCase::new(w.posts.clone())
            .execute(&post_id)
            .await
            .unwrap();
        assert_eq!(post.author_id, w.a);
        assert_eq!(post.author_name, "alice");
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[tokio::test]
    async fn test_create_post_for_unknown_identity() {
        let w = world().await;
        let result = CreatePostUseCase::new(w.posts.clone(), w.authors.clone(), w.config.clone())
            .execute(&UserId::new(), "hello".to_string())
            .await;
        assert!(matches!(result, Err(PostError::UnknownAuthor)));
    }

    #[tokio::test]
    async fn test_create_post_text_limit() {
        let w = world().await;
        let config = Arc::new(PostsConfig { max_text_length: 4 });
        let result = CreatePostUseCase::new(w.posts.clone(), w.authors.clone(), config)
            .execute(&w.a, "hello".to_string())
            .await;
        assert!(matches!(result, Err(PostError::TextTooLong { max: 4 })));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let w = world().await;
        let first = w.create(&w.a, "first").await;
        let second = w.create(&w.b, "second").await;

        let posts = ListPostsUseCase::new(w.posts.clone()).execute().await.unwrap();
        let ids: Vec<String> = posts.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_like_scenario() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;

        let likes = w.likes().like(&post_id, w.b).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].user_id, w.b);

        let again = w.likes().like(&post_id, w.b).await;
        assert!(matches!(again, Err(PostError::AlreadyLiked)));

        let post = GetPostUseCase::new(w.posts.clone())
            .execute(&post_id)
            .await
            .unwrap();
        assert_eq!(post.likes.len(), 1);

        // A never liked it
        assert!(matches!(
            w.likes().unlike(&post_id, w.a).await,
            Err(PostError::NotLiked)
        ));

        let likes = w.likes().unlike(&post_id, w.b).await.unwrap();
        assert!(likes.is_empty());
    }

    #[tokio::test]
    async fn test_like_missing_and_malformed_post() {
        let w = world().await;

        let missing = w.likes().like(&kernel::id::PostId::new().to_string(), w.a).await;
        assert!(matches!(missing, Err(PostError::PostNotFound)));

        let malformed = w.likes().like("not-an-id", w.a).await;
        assert!(matches!(malformed, Err(PostError::MalformedId)));
    }

    #[tokio::test]
    async fn test_comment_scenario() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;

        let comments = w
            .add_comment()
            .execute(&post_id, &w.a, "nice".to_string())
            .await
            .unwrap();
        assert_eq!(comments.len(), 1);
        let c1 = comments[0].id.to_string();

        let forbidden = w.remove_comment().execute(&post_id, &c1, &w.b).await;
        assert!(matches!(forbidden, Err(PostError::Forbidden)));

        let comments = w.remove_comment().execute(&post_id, &c1, &w.a).await.unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_remove_comment_missing() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;
        w.add_comment()
            .execute(&post_id, &w.a, "nice".to_string())
            .await
            .unwrap();

        for comment_id in [kernel::id::CommentId::new().to_string(), "garbage".to_string()] {
            let result = w.remove_comment().execute(&post_id, &comment_id, &w.a).await;
            assert!(matches!(result, Err(PostError::CommentNotFound)));
        }
    }

    #[tokio::test]
    async fn test_add_then_remove_shrinks_by_one() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;

        w.add_comment()
            .execute(&post_id, &w.b, "first".to_string())
            .await
            .unwrap();
        let comments = w
            .add_comment()
            .execute(&post_id, &w.a, "second".to_string())
            .await
            .unwrap();
        assert_eq!(comments[0].text, "second");

        let target = comments[0].id.to_string();
        let after = w.remove_comment().execute(&post_id, &target, &w.a).await.unwrap();
        assert_eq!(after.len(), comments.len() - 1);
        assert_eq!(after[0].author_id, w.b);
    }

    #[tokio::test]
    async fn test_remove_by_id_targets_addressed_comment() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;

        let older = w
            .add_comment()
            .execute(&post_id, &w.a, "older".to_string())
            .await
            .unwrap()[0]
            .id
            .to_string();
        w.add_comment()
            .execute(&post_id, &w.a, "newer".to_string())
            .await
            .unwrap();

        let after = RemoveCommentUseCase::new(w.posts.clone(), CommentRemoval::ById)
            .execute(&post_id, &older, &w.a)
            .await
            .unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].text, "newer");
    }

    #[tokio::test]
    async fn test_delete_post_ownership() {
        let w = world().await;
        let post_id = w.create(&w.a, "hello").await;
        let delete = DeletePostUseCase::new(w.posts.clone());

        assert!(matches!(
            delete.execute(&post_id, &w.b).await,
            Err(PostError::Forbidden)
        ));
        assert!(GetPostUseCase::new(w.posts.clone()).execute(&post_id).await.is_ok());

        delete.execute(&post_id, &w.a).await.unwrap();
        assert!(matches!(
            GetPostUseCase::new(w.posts.clone()).execute(&post_id).await,
            Err(PostError::PostNotFound)
        ));
        assert!(matches!(
            delete.execute(&post_id, &w.a).await,
            Err(PostError::PostNotFound)
        ));
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use auth::application::{AuthConfig, ProvisionIdentityUseCase, ProvisionInput, TokenService};
    use auth::{AuthGate, InMemoryAuthRepository};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::PostsConfig;
    use crate::infra::{IdentityAuthorDirectory, InMemoryPostRepository};
    use crate::presentation::router::posts_router;

    struct TestApp {
        router: Router,
        alice: String,
        bob: String,
    }

    async fn app() -> TestApp {
        let identities = Arc::new(InMemoryAuthRepository::new());
        let auth_config = Arc::new(AuthConfig::with_secret("posts-http-secret"));
        let tokens = Arc::new(TokenService::new(&auth_config));

        let mut issued = Vec::new();
        for name in ["alice", "bob"] {
            let identity = ProvisionIdentityUseCase::new(identities.clone(), auth_config.clone())
                .execute(ProvisionInput {
                    name: name.to_string(),
                    email: format!("{}@example.com", name),
                    password: "password".to_string(),
                    avatar: None,
                })
                .await
                .unwrap();
            issued.push(tokens.issue(&identity.user_id).unwrap().token);
        }

        let router = posts_router(
            InMemoryPostRepository::new(),
            IdentityAuthorDirectory::new(identities),
            Arc::new(PostsConfig::default()),
            AuthGate::new(tokens, &auth_config),
        );

        let bob = issued.pop().unwrap();
        let alice = issued.pop().unwrap();
        TestApp { router, alice, bob }
    }

    impl TestApp {
        async fn send(
            &self,
            method: Method,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header("x-auth-token", token);
            }
            let request = match body {
                Some(body) => builder
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }
    }

    #[tokio::test]
    async fn test_routes_require_token() {
        let app = app().await;

        let (status, body) = app.send(Method::GET, "/", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "no token provided");

        let (status, body) = app.send(Method::GET, "/", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "token invalid");
    }

    #[tokio::test]
    async fn test_post_lifecycle() {
        let app = app().await;

        let (status, post) = app
            .send(Method::POST, "/", Some(&app.alice), Some(json!({"text": "hello"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(post["text"], "hello");
        assert_eq!(post["name"], "alice");
        let id = post["id"].as_str().unwrap().to_string();

        let (status, posts) = app.send(Method::GET, "/", Some(&app.bob), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(posts.as_array().unwrap().len(), 1);

        let (status, likes) = app
            .send(Method::PUT, &format!("/like/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(likes.as_array().unwrap().len(), 1);

        let (status, body) = app
            .send(Method::PUT, &format!("/like/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "post already liked");

        let (status, body) = app
            .send(Method::DELETE, &format!("/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "user not authorized");

        let (status, body) = app
            .send(Method::DELETE, &format!("/{}", id), Some(&app.alice), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "post removed");

        let (status, _) = app
            .send(Method::GET, &format!("/{}", id), Some(&app.alice), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_400() {
        let app = app().await;
        let (status, body) = app
            .send(Method::GET, "/not-an-id", Some(&app.alice), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "post not found");
    }

    #[tokio::test]
    async fn test_text_is_required() {
        let app = app().await;
        let (status, body) = app
            .send(Method::POST, "/", Some(&app.alice), Some(json!({})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "text");
        assert_eq!(body["errors"][0]["message"], "text is required");
    }

    #[tokio::test]
    async fn test_bodyless_post_is_validation_error() {
        let app = app().await;
        let (status, body) = app.send(Method::POST, "/", Some(&app.alice), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "text");
        assert_eq!(body["errors"][0]["message"], "text is required");

        let (_, post) = app
            .send(Method::POST, "/", Some(&app.alice), Some(json!({"text": "hello"})))
            .await;
        let id = post["id"].as_str().unwrap();
        let (status, body) = app
            .send(Method::POST, &format!("/comment/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["message"], "text is required");
    }

    #[tokio::test]
    async fn test_unlike_route() {
        let app = app().await;
        let (_, post) = app
            .send(Method::POST, "/", Some(&app.alice), Some(json!({"text": "hello"})))
            .await;
        let id = post["id"].as_str().unwrap().to_string();

        let (status, _) = app
            .send(Method::PUT, &format!("/like/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, likes) = app
            .send(Method::PUT, &format!("/unlike/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(likes.as_array().unwrap().is_empty());

        let (status, body) = app
            .send(Method::PUT, &format!("/unlike/{}", id), Some(&app.bob), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "post was not liked");
    }

    #[tokio::test]
    async fn test_author_removes_comment() {
        let app = app().await;
        let (_, post) = app
            .send(Method::POST, "/", Some(&app.alice), Some(json!({"text": "hello"})))
            .await;
        let id = post["id"].as_str().unwrap().to_string();

        let (_, comments) = app
            .send(
                Method::POST,
                &format!("/comment/{}", id),
                Some(&app.bob),
                Some(json!({"text": "first"})),
            )
            .await;
        let comment_id = comments[0]["id"].as_str().unwrap().to_string();

        let (status, comments) = app
            .send(
                Method::DELETE,
                &format!("/comment/{}/{}", id, comment_id),
                Some(&app.bob),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(comments.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comment_routes() {
        let app = app().await;
        let (_, post) = app
            .send(Method::POST, "/", Some(&app.alice), Some(json!({"text": "hello"})))
            .await;
        let id = post["id"].as_str().unwrap().to_string();

        let (status, comments) = app
            .send(
                Method::POST,
                &format!("/comment/{}", id),
                Some(&app.alice),
                Some(json!({"text": "nice"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let comment_id = comments[0]["id"].as_str().unwrap().to_string();

        let (status, _) = app
            .send(
                Method::DELETE,
                &format!("/comment/{}/{}", id, comment_id),
                Some(&app.bob),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, comments) = app
            .send(
                Method::DELETE,
                &format!("/comment/{}/{}/by-id", id, comment_id),
                Some(&app.alice),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(comments.as_array().unwrap().is_empty());

        let (status, body) = app
            .send(
                Method::DELETE,
                &format!("/comment/{}/{}", id, comment_id),
                Some(&app.alice),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "comment not found");
    }
}
