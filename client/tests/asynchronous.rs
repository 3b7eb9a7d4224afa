//! Every operation of `AsyncClient` against the live mock server.

mod common;

use std::time::Duration;

use brawl_client::{ApiError, AsyncClient, LeaderboardKind, LeaderboardQuery};
use common::{
    config, current_year, dead_base_url, silent_server, spawn_mock_server, CLUB_TAG, PLAYER_TAG,
};

fn client() -> AsyncClient {
    AsyncClient::new(config(&spawn_mock_server())).unwrap()
}

#[tokio::test]
async fn get_player() {
    let player = client().get_player(PLAYER_TAG).await.unwrap();
    assert_eq!(player.tag, PLAYER_TAG);
    assert!(player.is_in_club());
    assert_eq!(player.brawler("shelly").unwrap().power, 10);
}

#[tokio::test]
async fn get_player_normalizes_input_tag() {
    let player = client().get_player("#ggjvjlu2").await.unwrap();
    assert_eq!(player.tag, PLAYER_TAG);
}

#[tokio::test]
async fn get_club() {
    let club = client().get_club(CLUB_TAG).await.unwrap();
    assert_eq!(club.tag, CLUB_TAG);
    assert_eq!(club.members.len(), 3);
    assert!(club.member(PLAYER_TAG).is_some());
}

#[tokio::test]
async fn get_leaderboard_players() {
    let c = client();
    let board = c.get_leaderboard(&LeaderboardQuery::new("players")).await.unwrap();
    assert_eq!(board.kind, LeaderboardKind::Players);
    assert!(!board.is_empty());

    let regional = c.get_leaderboard(&LeaderboardQuery::new("players").region("us")).await.unwrap();
    assert_eq!(regional.kind, LeaderboardKind::Players);
    assert_eq!(regional.len(), board.len());
}

#[tokio::test]
async fn get_leaderboard_clubs() {
    let board = client().get_leaderboard(&LeaderboardQuery::new("clubs")).await.unwrap();
    assert_eq!(board.kind, LeaderboardKind::Clubs);
    assert!(board.iter().all(|entry| entry.members_count.is_some()));
}

#[tokio::test]
async fn get_leaderboard_brawler() {
    let board = client()
        .get_leaderboard(&LeaderboardQuery::new("brawlers").brawler("shelly"))
        .await
        .unwrap();
    assert_eq!(board.kind, LeaderboardKind::Brawlers);
    assert!(board.iter().all(|entry| entry.brawler_name.as_deref() == Some("Shelly")));
}

#[tokio::test]
async fn get_events() {
    let events = client().get_events().await.unwrap();
    assert_eq!(events.current.len(), 2);
    assert_eq!(events.upcoming.len(), 1);
}

#[tokio::test]
async fn get_constants() {
    let c = client();
    let all = c.get_constants(None).await.unwrap();
    assert!(all.key.is_none());
    assert!(all.get("maps").is_some());

    let maps = c.get_constants(Some("maps")).await.unwrap();
    assert_eq!(maps.key.as_deref(), Some("maps"));
    assert!(maps.data.is_array());

    let err = c.get_constants(Some("invalid")).await.unwrap_err();
    assert!(matches!(err, ApiError::UnknownKey(_)));
}

#[tokio::test]
async fn get_misc() {
    let misc = client().get_misc().await.unwrap();
    assert_eq!(misc.server_date_year, current_year());
    assert!(misc.server_date().is_some());
}

#[tokio::test]
async fn search_club() {
    let hits = client().search_club("Cactus Bandits").await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].tag, CLUB_TAG);
}

#[tokio::test]
async fn get_battle_logs() {
    let log = client().get_battle_logs(PLAYER_TAG).await.unwrap();
    assert_eq!(log.len(), 2);
    assert!(log.items.iter().all(|battle| battle.battle_time().is_some()));
    assert_eq!(log.items[1].battle.rank, Some(3));
}

#[tokio::test]
async fn invalid_tag() {
    let c = client();
    for tag in ["P", "AAA"] {
        let err = c.get_player(tag).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidTag { .. }), "{tag}: {err:?}");
        assert!(err.is_not_found());
    }

    let err = c.get_player("2PPPPPPP").await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 500, .. }), "{err:?}");

    let err = c.get_player("2PP").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn invalid_leaderboard() {
    let c = client();
    for query in [
        LeaderboardQuery::new("test").limit(200),
        LeaderboardQuery::new("players").limit(201),
        LeaderboardQuery::new("players").limit(-5),
    ] {
        let err = c.get_leaderboard(&query).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)), "{query:?}: {err:?}");
    }
}

#[tokio::test]
async fn validation_fails_before_any_request() {
    let c = AsyncClient::new(config(&dead_base_url())).unwrap();
    assert!(matches!(c.get_player("P").await.unwrap_err(), ApiError::InvalidTag { .. }));
    assert!(matches!(
        c.get_leaderboard(&LeaderboardQuery::new("players").limit(0)).await.unwrap_err(),
        ApiError::InvalidArgument(_)
    ));
    assert!(matches!(c.get_constants(Some("invalid")).await.unwrap_err(), ApiError::UnknownKey(_)));
    assert!(matches!(c.search_club("").await.unwrap_err(), ApiError::InvalidArgument(_)));

    // A well-formed request does go out and fails at the transport.
    assert!(matches!(c.get_events().await.unwrap_err(), ApiError::Transport(_)));
}

#[tokio::test]
async fn empty_token_is_unauthorized() {
    let base_url = spawn_mock_server();
    let mut cfg = config(&base_url);
    cfg.token = String::new();
    let c = AsyncClient::new(cfg).unwrap();
    assert!(matches!(c.get_events().await.unwrap_err(), ApiError::Unauthorized { .. }));
}

#[tokio::test]
async fn close_releases_client() {
    let c = client();
    let _ = c.get_misc().await.unwrap();
    c.close();
}

#[tokio::test]
async fn timeout_maps_to_timeout() {
    let (_listener, base_url) = silent_server();
    let c = AsyncClient::new(config(&base_url).with_timeout(Duration::from_millis(300))).unwrap();

    let err = c.get_events().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout { ref url } if url.ends_with("/events")), "{err:?}");
    assert!(err.is_server_error());
}
