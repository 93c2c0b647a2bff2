use catalog::ItemKind;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};
use youtube_client::{ApiKey, CatalogApi, CatalogError, YouTubeClient};

fn key() -> ApiKey {
    ApiKey::new("test-key").unwrap()
}

fn client_for(server: &MockServer) -> YouTubeClient {
    YouTubeClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_search_ids_for_videos() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "id"))
        .and(query_param("type", "video"))
        .and(query_param("q", "linear algebra"))
        .and(query_param("maxResults", "25"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"items":[
                {"id":{"kind":"youtube#video","videoId":"v1"}},
                {"id":{"kind":"youtube#channel","channelId":"c1"}},
                {"id":{"kind":"youtube#video","videoId":"v2"}}
            ]}"#,
        ))
        .mount(&mock_server)
        .await;

    let ids = client_for(&mock_server)
        .search_ids(&key(), "linear algebra", ItemKind::Video, 25)
        .await
        .unwrap();

    assert_eq!(ids, vec!["v1".to_string(), "v2".to_string()]);
}

#[tokio::test]
async fn test_search_ids_clamps_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "playlist"))
        .and(query_param("maxResults", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"items":[{"id":{"playlistId":"PL1"}}]}"#),
        )
        .mount(&mock_server)
        .await;

    let ids = client_for(&mock_server)
        .search_ids(&key(), "organic chemistry", ItemKind::Playlist, 500)
        .await
        .unwrap();

    assert_eq!(ids, vec!["PL1".to_string()]);
}

#[tokio::test]
async fn test_fetch_videos_maps_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "snippet,contentDetails,statistics"))
        .and(query_param("id", "v1,v2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"items":[
                {
                    "id":"v2",
                    "snippet":{"title":"Vectors","channelTitle":"Math Hub","publishedAt":"2023-05-01T12:00:00Z"},
                    "contentDetails":{"duration":"PT12M","caption":"false"},
                    "statistics":{"viewCount":"77"}
                },
                {
                    "id":"v1",
                    "snippet":{"title":"Matrices","description":"Beginner friendly"},
                    "contentDetails":{"duration":"PT1H2M3S","caption":"true"}
                }
            ]}"#,
        ))
        .mount(&mock_server)
        .await;

    let videos = client_for(&mock_server)
        .fetch_videos(&key(), &["v1".to_string(), "v2".to_string()])
        .await
        .unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "v2");
    assert_eq!(videos[0].channel.as_deref(), Some("Math Hub"));
    assert!(!videos[0].has_captions);
    assert_eq!(videos[0].view_count, Some(77));
    assert_eq!(videos[1].id, "v1");
    assert_eq!(videos[1].duration.as_deref(), Some("PT1H2M3S"));
    assert!(videos[1].has_captions);
    assert_eq!(videos[1].view_count, None);
}

#[tokio::test]
async fn test_fetch_playlists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("part", "snippet,contentDetails"))
        .and(query_param("id", "PL1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"items":[{"id":"PL1","snippet":{"title":"Full Course"},"contentDetails":{"itemCount":31}}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let playlists = client_for(&mock_server)
        .fetch_playlists(&key(), &["PL1".to_string()])
        .await
        .unwrap();

    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].title.as_deref(), Some("Full Course"));
    assert_eq!(playlists[0].item_count, Some(31));
}

#[tokio::test]
async fn test_quota_error_is_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"{"error":{"code":403,"message":"Quota exceeded","errors":[{"reason":"quotaExceeded"}]}}"#,
        ))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .search_ids(&key(), "gate cse", ItemKind::Video, 10)
        .await;

    match result {
        Err(CatalogError::Upstream { status, detail }) => {
            assert_eq!(status, 403);
            assert_eq!(detail, "Quota exceeded (quotaExceeded)");
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .fetch_videos(&key(), &["v1".to_string()])
        .await;

    match result {
        Err(CatalogError::Upstream { status, detail }) => {
            assert_eq!(status, 200);
            assert!(detail.starts_with("unexpected response body"));
        }
        other => panic!("Expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error_without_key() {
    let client = YouTubeClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let secret = ApiKey::new("very-secret-key").unwrap();

    let result = client
        .search_ids(&secret, "neet biology", ItemKind::Video, 5)
        .await;

    match result {
        Err(CatalogError::Transport { message }) => {
            assert!(!message.contains("very-secret-key"));
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"items":[]}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = YouTubeClient::new(mock_server.uri(), Duration::from_millis(100)).unwrap();
    let result = client
        .search_ids(&key(), "cat quant", ItemKind::Video, 5)
        .await;

    assert_eq!(result, Err(CatalogError::transport("request timed out")));
}
