use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn probe() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_probe"));
    cmd.env_remove("PROBE_UPSTREAM_URL")
        .env_remove("PROBE_API_KEY")
        .env_remove("PROBE_MODEL")
        .env_remove("PROBE_SYSTEM_PROMPT")
        .env_remove("RUST_LOG");
    cmd
}

#[tokio::test]
async fn prints_completion_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("x-openai-base-url", "http://localhost:11434/v1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"choices":[{"message":{"content":"Okay, this is a test."}}]}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = probe()
        .env("PROBE_PROXY_URL", format!("{}/v1", mock_server.uri()))
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Okay, this is a test.\n"
    );
}

#[tokio::test]
async fn dash_h_inside_prompt_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": "what does -h mean"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"choices":[{"message":{"content":"It asks for help."}}]}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = probe()
        .env("PROBE_PROXY_URL", format!("{}/v1", mock_server.uri()))
        .args(["what", "does", "-h", "mean"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "It asks for help.\n"
    );
}

#[tokio::test]
async fn lists_models_one_per_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("x-openai-base-url", "http://localhost:11434/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"object": "list", "data": [{"id": "qwen:4b"}, {"id": "llama3"}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = probe()
        .env("PROBE_PROXY_URL", format!("{}/v1", mock_server.uri()))
        .arg("m")
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "qwen:4b\nllama3\n");
}

#[tokio::test]
async fn empty_choices_exits_with_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"choices":[]}"#))
        .mount(&mock_server)
        .await;

    let output = probe()
        .env("PROBE_PROXY_URL", format!("{}/v1", mock_server.uri()))
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn unreachable_proxy_exits_with_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = probe()
        .env("PROBE_PROXY_URL", format!("http://{}/v1", addr))
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn help_makes_no_request() {
    let output = probe()
        .env("PROBE_PROXY_URL", "http://127.0.0.1:9/v1")
        .arg("-h")
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains(".env"));
    assert!(stdout.contains("PROBE_PROXY_URL"));
}
