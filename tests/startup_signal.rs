use std::process::Stdio;

use reqwest::StatusCode;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

#[tokio::test]
async fn binary_prints_one_startup_line_and_logs_to_stderr() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_health-server"))
        .env("HEALTH_SERVER_HOST", "127.0.0.1")
        .env("HEALTH_SERVER_PORT", "0")
        .env("HEALTH_SERVER_LOGGING__FORMAT", "json")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .expect("failed to start server binary");

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut first_line = String::new();
    stdout.read_line(&mut first_line).await.unwrap();

    let port: u16 = first_line
        .trim_end()
        .strip_prefix("Health server on port ")
        .unwrap_or_else(|| panic!("unexpected startup line {:?}", first_line))
        .parse()
        .expect("startup line ends with the port");
    assert_ne!(port, 0);

    let response = reqwest::get(format!("http://127.0.0.1:{}/health", port))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    child.kill().await.unwrap();

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).await.unwrap();
    assert!(rest.is_empty(), "stdout carried more than the startup line: {:?}", rest);

    let mut stderr = String::new();
    child
        .stderr
        .take()
        .unwrap()
        .read_to_string(&mut stderr)
        .await
        .unwrap();
    assert!(stderr.contains("\"event.name\":\"server.listening\""));
}
