//! End-to-end runs of the workflow against a mocked generation service

use std::time::Duration;

use icongen::{IconClient, IconConfig, Intent, Outcome, StylePreset};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_generation(server: &MockServer, image_paths: &[&str]) {
    let images: Vec<String> = image_paths
        .iter()
        .map(|p| format!("{}{}", server.uri(), p))
        .collect();

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "images": images,
            "metadata": {"prompt": "Weather icons", "style": "outline", "colors": []}
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_image(server: &MockServer, image_path: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

fn config(server: &MockServer, dir: &std::path::Path) -> IconConfig {
    IconConfig::new()
        .with_base_url(server.uri())
        .with_download_dir(dir)
        .with_download_delay(Duration::from_millis(20))
}

#[tokio::test]
async fn test_submit_renders_four_images_and_downloads_them_in_order() {
    let mock_server = MockServer::start().await;
    let paths = ["/img/1.png", "/img/2.png", "/img/3.png", "/img/4.png"];
    mount_generation(&mock_server, &paths).await;
    for (i, p) in paths.iter().enumerate() {
        mount_image(&mock_server, p, &[i as u8; 8]).await;
    }

    let tmp = tempfile::tempdir().unwrap();
    let client = IconClient::new(config(&mock_server, tmp.path())).unwrap();
    let mut workflow = client.controller();

    workflow
        .dispatch(Intent::SetPrompt("Weather   icons".into()))
        .await;
    workflow.dispatch(Intent::SetStyle(StylePreset::Outline)).await;
    let outcome = workflow.dispatch(Intent::Submit).await;
    assert!(matches!(outcome, Outcome::Generated { images: 4 }));

    let view = workflow.results_view().expect("results are shown");
    let rendered: Vec<String> = view.tiles.iter().map(|t| t.url.clone()).collect();
    let expected: Vec<String> = paths
        .iter()
        .map(|p| format!("{}{}", mock_server.uri(), p))
        .collect();
    assert_eq!(rendered, expected);

    let report = match workflow.dispatch(Intent::DownloadAll).await {
        Outcome::BatchFinished(report) => report,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert!(report.is_complete());

    for i in 0..4 {
        let file = tmp.path().join(format!("icon-Weather-icons-{}.png", i + 1));
        assert_eq!(std::fs::read(&file).unwrap(), vec![i as u8; 8]);
    }

    let requests = mock_server.received_requests().await.unwrap();
    let gets: Vec<String> = requests
        .iter()
        .filter(|r| r.method.to_string() == "GET")
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(gets, paths.to_vec());
}

#[tokio::test]
async fn test_failed_image_does_not_stop_the_batch() {
    let mock_server = MockServer::start().await;
    let paths = ["/img/1.png", "/img/missing.png", "/img/3.png"];
    mount_generation(&mock_server, &paths).await;
    mount_image(&mock_server, "/img/1.png", b"one").await;
    mount_image(&mock_server, "/img/3.png", b"three").await;

    let tmp = tempfile::tempdir().unwrap();
    let client = IconClient::new(config(&mock_server, tmp.path())).unwrap();
    let mut workflow = client.controller();

    workflow.dispatch(Intent::SetPrompt("Weather icons".into())).await;
    workflow.dispatch(Intent::Submit).await;

    let report = match workflow.dispatch(Intent::DownloadAll).await {
        Outcome::BatchFinished(report) => report,
        other => panic!("unexpected outcome {:?}", other),
    };

    assert_eq!(report.saved.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].index, 1);
    assert!(tmp.path().join("icon-Weather-icons-3.png").exists());
    assert!(!tmp.path().join("icon-Weather-icons-2.png").exists());
    assert_eq!(
        workflow.state().alert.as_deref(),
        Some(icongen::workflow::DOWNLOAD_FAILED_MESSAGE)
    );
    assert_eq!(workflow.presenter().unwrap().downloading(), None);
}

#[tokio::test]
async fn test_single_download_uses_one_based_index() {
    let mock_server = MockServer::start().await;
    let paths = ["/img/a.png", "/img/b.png"];
    mount_generation(&mock_server, &paths).await;
    mount_image(&mock_server, "/img/b.png", b"bee").await;

    let tmp = tempfile::tempdir().unwrap();
    let client = IconClient::new(config(&mock_server, tmp.path())).unwrap();
    let mut workflow = client.controller();

    workflow.dispatch(Intent::SetPrompt("Weather icons".into())).await;
    workflow.dispatch(Intent::Submit).await;

    match workflow.dispatch(Intent::DownloadImage(1)).await {
        Outcome::Downloaded(saved) => {
            assert_eq!(saved.path, tmp.path().join("icon-Weather-icons-2.png"));
            assert_eq!(saved.size_bytes, 3);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_color_slots_are_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(wiremock::matchers::body_json(json!({
            "prompt": "Hockey equipment",
            "style": "auto",
            "colors": ["#FF5733"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let client = IconClient::new(config(&mock_server, tmp.path())).unwrap();
    let mut workflow = client.controller();

    workflow
        .dispatch(Intent::SetPrompt("Hockey equipment".into()))
        .await;
    workflow.dispatch(Intent::AddColor).await;
    workflow.dispatch(Intent::AddColor).await;
    workflow
        .dispatch(Intent::UpdateColor(1, "#FF5733".into()))
        .await;

    let outcome = workflow.dispatch(Intent::Submit).await;

    assert!(matches!(outcome, Outcome::Failed(_)));
    assert_eq!(
        workflow.state().error.as_deref(),
        Some(icongen::workflow::GENERATION_FAILED_MESSAGE)
    );
}
