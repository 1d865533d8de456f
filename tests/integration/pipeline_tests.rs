//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to stand in for SteamDB and run the full
//! fetch → parse → write cycle into a temporary output directory.

use std::path::{Path, PathBuf};
use steam_achievements::config::Config;
use steam_achievements::{exit_status, pipeline, AchievementsError};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STEAM_ID: u64 = 631570;

const STATS_PAGE: &str = r#"<html><body>
<table id="js-achievements"><tbody>
  <tr id="achievement-ACH_1">
    <td>ACH_1</td>
    <td>Title One<div class="achievement_desc">Some text</div></td>
    <td><img src="/ach1.jpg"></td>
  </tr>
  <tr id="achievement-ACH_2">
    <td>ACH_2</td>
    <td>Title Two<div class="achievement_desc">Hidden.</div></td>
    <td><img src="/ach2.jpg"></td>
  </tr>
</tbody></table>
<table id="js-stats"><tbody>
  <tr id="stat-NUM_WINS"><td>NUM_WINS</td><td>no name</td><td>0</td></tr>
</tbody></table>
</body></html>"#;

const INFO_PAGE: &str = r#"<html><body><div id="info"><table><tbody>
  <tr><td>App ID</td><td>631570</td></tr>
  <tr><td>Store Release Date</td><td>12 July 2018</td></tr>
  <tr><td>Achievement Languages</td><td>English, French, German</td></tr>
</tbody></table></div></body></html>"#;

const EXPECTED_INI: &str = "[stats:en]\n\
item_0_id=NUM_WINS\n\
item_0_start=0\n\
[achievements:en]\n\
item_0_id=ACH_1\n\
item_0_title=Title One\n\
item_0_comment=Some text\n\
item_1_id=ACH_2\n\
item_1_title=Title Two\n\
item_1_hidden=true\n";

/// Mounts the stats and info pages for `STEAM_ID`
async fn mount_pages(server: &MockServer, stats: &str, info: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/app/{}/stats/", STEAM_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(stats)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/app/{}/info/", STEAM_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(info)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn create_test_config(server: &MockServer, output_dir: &Path, galaxy_id: Option<u64>) -> Config {
    let mut config = Config::new(STEAM_ID, galaxy_id, true);
    config.base_url = server.uri();
    config.output_dir = output_dir.to_path_buf();
    config
}

/// Runs the blocking pipeline off the async test runtime
async fn run_pipeline(config: Config) -> Result<PathBuf, AchievementsError> {
    tokio::task::spawn_blocking(move || pipeline::run(&config))
        .await
        .expect("pipeline task panicked")
}

fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[tokio::test]
async fn test_full_run_writes_steam_ini() {
    let server = MockServer::start().await;
    mount_pages(&server, STATS_PAGE, INFO_PAGE).await;
    let output = TempDir::new().unwrap();

    let result = run_pipeline(create_test_config(&server, output.path(), None)).await;
    assert_eq!(exit_status(&result), 0);

    let written = result.expect("pipeline failed");
    assert_eq!(written, output.path().join("steam-631570.ini"));
    assert_eq!(std::fs::read_to_string(&written).unwrap(), EXPECTED_INI);
}

#[tokio::test]
async fn test_galaxy_id_only_changes_file_name() {
    let server = MockServer::start().await;
    mount_pages(&server, STATS_PAGE, INFO_PAGE).await;
    let steam_dir = TempDir::new().unwrap();
    let galaxy_dir = TempDir::new().unwrap();

    let steam = run_pipeline(create_test_config(&server, steam_dir.path(), None))
        .await
        .unwrap();
    let galaxy = run_pipeline(create_test_config(&server, galaxy_dir.path(), Some(1845001352)))
        .await
        .unwrap();

    assert_eq!(galaxy.file_name().unwrap(), "galaxy-1845001352.ini");
    assert!(!galaxy_dir.path().join("steam-631570.ini").exists());
    assert_eq!(
        std::fs::read_to_string(&steam).unwrap(),
        std::fs::read_to_string(&galaxy).unwrap()
    );
}

#[tokio::test]
async fn test_missing_marker_writes_nothing() {
    let server = MockServer::start().await;
    let info = INFO_PAGE.replace("Store Release Date", "Release Date");
    mount_pages(&server, STATS_PAGE, &info).await;
    let output = TempDir::new().unwrap();

    let result = run_pipeline(create_test_config(&server, output.path(), None)).await;

    match result {
        Err(AchievementsError::MissingMarker { keys, .. }) => {
            assert_eq!(keys, vec!["App ID", "Release Date", "Achievement Languages"]);
        }
        other => panic!("expected missing marker error, got {:?}", other),
    }
    assert!(dir_is_empty(output.path()));
}

#[tokio::test]
async fn test_malformed_achievement_writes_nothing() {
    let server = MockServer::start().await;
    let stats = STATS_PAGE.replace(
        r#"Title Two<div class="achievement_desc">Hidden.</div>"#,
        "Title Two only",
    );
    mount_pages(&server, &stats, INFO_PAGE).await;
    let output = TempDir::new().unwrap();

    let result = run_pipeline(create_test_config(&server, output.path(), None)).await;

    assert!(matches!(
        result,
        Err(AchievementsError::MalformedAchievementText { .. })
    ));
    assert!(dir_is_empty(output.path()));
}

#[tokio::test]
async fn test_no_achievements_fails() {
    let server = MockServer::start().await;
    mount_pages(&server, "<html><body><table></table></body></html>", INFO_PAGE).await;
    let output = TempDir::new().unwrap();

    let result = run_pipeline(create_test_config(&server, output.path(), None)).await;

    assert!(matches!(result, Err(AchievementsError::NoAchievements { .. })));
    assert_eq!(exit_status(&result), 127);
    assert!(dir_is_empty(output.path()));
}

#[tokio::test]
async fn test_no_stats_omits_stats_section() {
    let server = MockServer::start().await;
    let stats = STATS_PAGE.replace(
        r#"<tr id="stat-NUM_WINS"><td>NUM_WINS</td><td>no name</td><td>0</td></tr>"#,
        "",
    );
    mount_pages(&server, &stats, INFO_PAGE).await;
    let output = TempDir::new().unwrap();

    let written = run_pipeline(create_test_config(&server, output.path(), None))
        .await
        .unwrap();

    let ini = std::fs::read_to_string(written).unwrap();
    assert!(ini.starts_with("[achievements:en]\n"));
    assert!(!ini.contains("[stats:"));
}

#[tokio::test]
async fn test_http_error_status_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let output = TempDir::new().unwrap();

    let result = run_pipeline(create_test_config(&server, output.path(), None)).await;

    match result {
        Err(AchievementsError::Http { url, .. }) => {
            assert!(url.ends_with("/app/631570/stats/"));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
    assert!(dir_is_empty(output.path()));
}

#[tokio::test]
async fn test_info_page_fetched_after_stats() {
    let server = MockServer::start().await;
    mount_pages(&server, STATS_PAGE, INFO_PAGE).await;
    let output = TempDir::new().unwrap();

    run_pipeline(create_test_config(&server, output.path(), None))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/app/631570/stats/", "/app/631570/info/"]);
}
