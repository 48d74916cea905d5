use std::net::SocketAddr;
use std::time::Duration;
use repo_analyzer::config::credentials::CredentialStore;
use repo_analyzer::server::api_server::ApiServer;
use repo_analyzer::structs::config::server_config::ServerConfig;
use serde_json::{json, Value};
use crate::support::{FakeRepo, Harness, RepoBehavior, ScriptedTransport, REPO_URL};

async fn serve(harness: Harness) -> (ApiServer, SocketAddr) {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        allowed_origins: vec!["*".to_string()],
    };
    let mut server = ApiServer::new(harness.facade, config);
    let addr = server.start().await.expect("server should bind");
    (server, addr)
}

async fn get_json(client: &reqwest::Client, url: String) -> (u16, Value) {
    let response = client.get(url).send().await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn a_job_can_be_followed_over_http() {
    let (mut server, addr) = serve(Harness::healthy()).await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let created: Value = client
        .post(format!("{base}/summarize-repo"))
        .json(&json!({ "repo_url": REPO_URL }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["status"], "queued");
    let job_id = created["job_id"].as_str().expect("job id string").to_string();

    let poll = async {
        loop {
            let (code, status) = get_json(&client, format!("{base}/summary-status?job_id={job_id}")).await;
            assert_eq!(code, 200);
            if status["status"] == "done" || status["status"] == "error" {
                return status;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };
    let finished = tokio::time::timeout(Duration::from_secs(10), poll).await.expect("job did not finish in time");
    assert_eq!(finished["status"], "done");
    assert_eq!(finished["progress"], 100);

    let (code, summary) = get_json(&client, format!("{base}/get-summary?job_id={job_id}")).await;
    assert_eq!(code, 200);
    let all = summary["summary"].as_object().expect("summary map");
    assert_eq!(all.len(), 5);
    assert!(all["security"]["security_overview"].is_string());

    let (code, single) = get_json(&client, format!("{base}/get-summary?job_id={job_id}&analysis_type=mind_map")).await;
    assert_eq!(code, 200);
    assert!(single["summary"]["mind_map_overview"].is_string());

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejections_carry_status_and_detail() {
    let harness = Harness::new(
        FakeRepo::new(RepoBehavior::Ready),
        ScriptedTransport::new(),
        CredentialStore::new(),
    );
    let (mut server, addr) = serve(harness).await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}");

    let response = client
        .post(format!("{base}/summarize-repo"))
        .json(&json!({ "repo_url": REPO_URL }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());

    let (code, _) = get_json(&client, format!("{base}/summary-status?job_id=00000000-0000-0000-0000-000000000000")).await;
    assert_eq!(code, 404);

    let (code, status) = get_json(&client, format!("{base}/api-status")).await;
    assert_eq!(code, 200);
    assert_eq!(status["status"], "not_configured");

    server.shutdown().await.unwrap();
}
