#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
//! Integration-style client tests for the Game Jolt client.
//!
//! Uses the shared `MockTransport` from `tests/common` to script platform
//! responses and verify the URLs `GameJoltClient` generates, the typed values
//! it returns, and how each error class surfaces.

mod common;

use gamejolt_client::{
    Credentials, GameJoltClient, GameJoltError, ScoreMode, ScoreQuery, ScoreSubmission,
    TrophyFilter,
};
use serde_json::json;

use common::{
    assert_signed, body, failure_json, param, param_names, query_pairs, raw, scores_json,
    start_client, success_json, tables_json, trophies_json, users_json, MockTransport, GAME_ID,
    PRIVATE_KEY, USERNAME, USER_TOKEN,
};

// ════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn user_info_returns_first_user() {
    let (client, requested) = start_client(vec![body(users_json())]);

    let user = client.get_user_info().await.expect("user info");
    assert_eq!(user.id, 1);
    assert_eq!(user.username, USERNAME);
    assert_eq!(user.status.as_deref(), Some("Active"));

    let urls = requested.lock().unwrap();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("http://gamejolt.com/api/game/v1/users/?"));
    assert_eq!(
        param_names(&urls[0]),
        ["format", "game_id", "username", "signature"]
    );
    assert_eq!(param(&urls[0], "game_id").as_deref(), Some("12345"));
    assert_signed(&urls[0]);
}

#[tokio::test]
async fn user_info_empty_list_is_empty_result() {
    let (client, _) = start_client(vec![body(json!({ "response": { "users": [] } }))]);

    let err = client.get_user_info().await.unwrap_err();
    assert!(
        matches!(err, GameJoltError::EmptyResult { ref field } if field == "users"),
        "expected EmptyResult, got {err:?}"
    );
}

#[tokio::test]
async fn authenticate_user_sends_token() {
    let (client, requested) = start_client(vec![body(success_json(json!({})))]);

    assert!(client.authenticate_user().await);

    let urls = requested.lock().unwrap();
    assert!(urls[0].contains("/users/auth/?"));
    assert_eq!(
        param_names(&urls[0]),
        ["format", "game_id", "username", "user_token", "signature"]
    );
    assert_eq!(param(&urls[0], "user_token").as_deref(), Some(USER_TOKEN));
    assert_signed(&urls[0]);
}

#[tokio::test]
async fn reauthentication_uses_new_credentials() {
    let (mut client, requested) = start_client(vec![
        body(failure_json("No such user with the credentials passed in could be found.")),
        body(success_json(json!({}))),
    ]);

    assert!(!client.authenticate_user().await);

    client.set_username("bob").unwrap();
    client.set_user_token("fresh").unwrap();
    assert!(client.authenticate_user().await);

    let urls = requested.lock().unwrap();
    assert_eq!(param(&urls[1], "username").as_deref(), Some("bob"));
    assert_eq!(param(&urls[1], "user_token").as_deref(), Some("fresh"));
    assert_ne!(
        urls[0].rsplit_once("signature=").unwrap().1,
        urls[1].rsplit_once("signature=").unwrap().1
    );
}

// ════════════════════════════════════════════════════════════════════
// Trophies
// ════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn trophies_are_typed() {
    let (client, requested) = start_client(vec![body(trophies_json())]);

    let trophies = client.get_trophies(TrophyFilter::all()).await.unwrap();
    assert_eq!(trophies.len(), 2);
    assert_eq!(trophies[0].title, "First Jump");
    assert!(trophies[0].achieved);
    assert!(!trophies[1].achieved);
    assert_eq!(trophies[1].image_url, "http://example.com/t2.png");

    let urls = requested.lock().unwrap();
    assert!(urls[0].contains("/trophies/?"));
    assert_eq!(
        param_names(&urls[0]),
        ["format", "game_id", "username", "user_token", "signature"]
    );
}

#[tokio::test]
async fn achieved_filter_wins_over_trophy_ids() {
    let (client, requested) = start_client(vec![body(trophies_json())]);

    let filter = TrophyFilter::trophies([1, 2]).with_achieved(false);
    client.get_trophies(filter).await.unwrap();

    let urls = requested.lock().unwrap();
    assert_eq!(param(&urls[0], "achieved").as_deref(), Some("false"));
    assert_eq!(param(&urls[0], "trophy_id"), None);
    assert_signed(&urls[0]);
}

#[tokio::test]
async fn trophy_id_list_is_comma_joined() {
    let (client, requested) = start_client(vec![body(trophies_json())]);

    client
        .get_trophies(TrophyFilter::trophies([1, 2, 30]))
        .await
        .unwrap();

    let urls = requested.lock().unwrap();
    assert_eq!(param(&urls[0], "trophy_id").as_deref(), Some("1,2,30"));
}

#[tokio::test]
async fn mark_trophy_achieved_param_order() {
    let (client, requested) = start_client(vec![body(success_json(json!({})))]);

    assert!(client.mark_trophy_achieved(7).await);

    let urls = requested.lock().unwrap();
    assert!(urls[0].contains("/trophies/add-achieved/?"));
    assert_eq!(
        param_names(&urls[0]),
        [
            "format",
            "game_id",
            "user_token",
            "username",
            "trophy_id",
            "signature"
        ]
    );
    assert_eq!(param(&urls[0], "trophy_id").as_deref(), Some("7"));
    assert_signed(&urls[0]);
}

#[tokio::test]
async fn reply_without_success_flag_is_not_confirmation() {
    let (client, requested) = start_client(vec![
        body(json!({ "response": {} })),
        body(json!({ "response": { "message": "Incorrect signature" } })),
    ]);

    assert!(!client.authenticate_user().await);
    assert!(!client.mark_trophy_achieved(3).await);
    assert_eq!(requested.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn mark_trophy_achieved_false_on_transport_error() {
    let (client, _) = start_client(vec![Err(GameJoltError::transport("connection reset"))]);
    assert!(!client.mark_trophy_achieved(7).await);
}

// ════════════════════════════════════════════════════════════════════
// Scores
// ════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn scores_are_typed() {
    let (client, _) = start_client(vec![body(scores_json())]);

    let scores = client.get_scores(ScoreQuery::new()).await.unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].sort, 1500);
    assert_eq!(scores[0].user.as_deref(), Some("alice"));
    assert!(!scores[0].is_guest());
    assert_eq!(scores[1].guest_name.as_deref(), Some("Bob"));
    assert_eq!(scores[1].extra_data.as_deref(), Some("lvl2"));
}

#[tokio::test]
async fn score_limit_is_clamped_to_100() {
    let (client, requested) = start_client(vec![body(scores_json())]);

    client
        .get_scores(ScoreQuery::new().with_limit(150))
        .await
        .unwrap();

    let urls = requested.lock().unwrap();
    assert_eq!(param(&urls[0], "limit").as_deref(), Some("100"));
    assert_signed(&urls[0]);
}

#[tokio::test]
async fn score_limit_below_one_makes_no_call() {
    let (client, requested) = start_client(vec![]);

    for limit in [0, -1] {
        let err = client
            .get_scores(ScoreQuery::new().with_limit(limit))
            .await
            .unwrap_err();
        assert!(
            matches!(err, GameJoltError::InvalidParameter { field: "limit", .. }),
            "got {err:?}"
        );
    }
    assert!(requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn user_scores_for_table() {
    let (client, requested) = start_client(vec![body(scores_json())]);

    client
        .get_scores(ScoreQuery::new().with_table(11).with_limit(5).user_only())
        .await
        .unwrap();

    let urls = requested.lock().unwrap();
    let pairs = query_pairs(&urls[0]);
    let expected: Vec<(String, String)> = [
        ("format", "json"),
        ("game_id", "12345"),
        ("username", USERNAME),
        ("user_token", USER_TOKEN),
        ("table_id", "11"),
        ("limit", "5"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(&pairs[..pairs.len() - 1], expected.as_slice());
}

#[tokio::test]
async fn submit_authenticated_score() {
    let (client, requested) = start_client(vec![body(success_json(json!({})))]);

    let envelope = client
        .submit_score(
            ScoreSubmission::new("1500 points", 1500).with_extra_data("lvl4"),
            ScoreMode::Authenticated,
        )
        .await
        .unwrap();
    assert!(envelope.is_success());

    let urls = requested.lock().unwrap();
    assert!(urls[0].contains("/scores/add/?"));
    assert_eq!(
        param_names(&urls[0]),
        [
            "format",
            "game_id",
            "score",
            "sort",
            "username",
            "user_token",
            "extra_data",
            "signature"
        ]
    );
    assert_signed(&urls[0]);
}

#[tokio::test]
async fn submit_guest_score() {
    let (client, requested) = start_client(vec![body(success_json(json!({})))]);

    client
        .submit_score(
            ScoreSubmission::new("42", 42).with_table(11),
            ScoreMode::guest("Bob"),
        )
        .await
        .unwrap();

    let urls = requested.lock().unwrap();
    assert_eq!(param(&urls[0], "guestname").as_deref(), Some("Bob"));
    assert_eq!(param(&urls[0], "username"), None);
    assert_eq!(param(&urls[0], "table_id").as_deref(), Some("11"));
}

#[tokio::test]
async fn submit_score_without_identity_makes_no_call() {
    let (transport, requested) = MockTransport::new(vec![]);
    let client = GameJoltClient::new(transport, Credentials::new(GAME_ID, PRIVATE_KEY).unwrap());

    let err = client
        .submit_score(ScoreSubmission::new("1", 1), ScoreMode::Authenticated)
        .await
        .unwrap_err();
    assert!(err.is_invalid_parameter());

    let err = client
        .submit_score(ScoreSubmission::new("1", 1), ScoreMode::guest(""))
        .await
        .unwrap_err();
    assert!(err.is_invalid_parameter());

    assert!(requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn score_tables_are_typed() {
    let (client, requested) = start_client(vec![body(tables_json())]);

    let tables = client.get_score_tables().await.unwrap();
    assert_eq!(tables.len(), 2);
    assert!(tables[0].primary);
    assert_eq!(tables[1].name, "Speedrun");

    let urls = requested.lock().unwrap();
    assert!(urls[0].contains("/scores/tables/?"));
    assert_eq!(param_names(&urls[0]), ["format", "game_id", "signature"]);
    assert_signed(&urls[0]);
}

// ════════════════════════════════════════════════════════════════════
// Data store
// ════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn data_store_global_value() {
    let (client, requested) = start_client(vec![body(success_json(json!({ "data": "v1" })))]);

    let entry = client.get_data_store_value("config", false).await.unwrap();
    assert_eq!(entry.key, "config");
    assert_eq!(entry.data, "v1");
    assert_eq!(entry.username, None);

    let urls = requested.lock().unwrap();
    assert!(urls[0].contains("/data-store/?"));
    assert_eq!(
        param_names(&urls[0]),
        ["format", "game_id", "key", "signature"]
    );
}

#[tokio::test]
async fn data_store_missing_key_is_platform_error() {
    let (client, _) = start_client(vec![body(failure_json("There is no item with the key passed in."))]);

    let err = client.get_data_store_value("nope", true).await.unwrap_err();
    assert!(err.is_platform());
}

// ════════════════════════════════════════════════════════════════════
// Error classes
// ════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn platform_failure_surfaces_message_on_every_typed_endpoint() {
    let fail = || body(failure_json("bad key"));
    let (client, _) = start_client(vec![fail(), fail(), fail(), fail(), fail(), fail()]);

    let errors = vec![
        client.get_user_info().await.unwrap_err(),
        client.get_trophies(TrophyFilter::all()).await.unwrap_err(),
        client.get_scores(ScoreQuery::new()).await.unwrap_err(),
        client
            .submit_score(ScoreSubmission::new("1", 1), ScoreMode::Authenticated)
            .await
            .unwrap_err(),
        client.get_score_tables().await.unwrap_err(),
        client.get_data_store_value("k", false).await.unwrap_err(),
    ];
    for err in errors {
        match err {
            GameJoltError::Platform { message } => {
                assert_eq!(message.as_deref(), Some("bad key"));
            }
            other => panic!("expected Platform error, got {other:?}"),
        }
    }

    // The boolean operations collapse the same reply to `false`.
    let (client2, _) = start_client(vec![fail(), fail()]);
    assert!(!client2.authenticate_user().await);
    assert!(!client2.mark_trophy_achieved(1).await);
}

#[tokio::test]
async fn transport_error_is_preserved() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let (client, _) = start_client(vec![Err(GameJoltError::transport(io))]);

    let err = client.get_score_tables().await.unwrap_err();
    match err {
        GameJoltError::Transport(cause) => {
            let io = cause.downcast_ref::<std::io::Error>().expect("io cause");
            assert_eq!(io.kind(), std::io::ErrorKind::TimedOut);
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_distinguished() {
    let (client, _) = start_client(vec![
        raw("<html>Bad Gateway</html>"),
        body(json!({ "result": {} })),
        body(success_json(json!({ "trophies": "none" }))),
    ]);

    for _ in 0..3 {
        let err = client.get_trophies(TrophyFilter::all()).await.unwrap_err();
        assert!(
            matches!(err, GameJoltError::MalformedResponse(_)),
            "got {err:?}"
        );
    }
}

#[tokio::test]
async fn no_retry_after_failure() {
    let (client, requested) = start_client(vec![
        Err(GameJoltError::transport("refused")),
        body(tables_json()),
    ]);

    assert!(client.get_score_tables().await.is_err());
    assert_eq!(requested.lock().unwrap().len(), 1);

    // The caller decides to retry.
    assert_eq!(client.get_score_tables().await.unwrap().len(), 2);
    assert_eq!(requested.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn identical_calls_produce_identical_urls() {
    let (client, requested) = start_client(vec![body(tables_json()), body(tables_json())]);

    client.get_score_tables().await.unwrap();
    client.get_score_tables().await.unwrap();

    let urls = requested.lock().unwrap();
    assert_eq!(urls[0], urls[1]);
}
