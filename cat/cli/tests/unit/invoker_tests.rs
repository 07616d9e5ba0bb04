use cat_cli::application;
use cat_cli::cli::UuidArgs;
use cat_cli::config::ClientConfig;
use cat_cli::error::{InvokeError, Operation};
use cat_cli::invoker::Invoker;
use crate::registry_stub::{spawn_empty_registry, spawn_silent_listener};
use std::net::TcpListener;
use std::process::Command;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// A loopback port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn unreachable_config() -> ClientConfig {
    ClientConfig::new("127.0.0.1", closed_port()).with_deadline(Duration::from_secs(2))
}

#[tokio::test]
async fn refused_connection_never_issues_the_call() {
    let invoker = Invoker::new(unreachable_config());
    let called = Arc::new(AtomicBool::new(false));

    let flag = called.clone();
    let err = invoker
        .call(Operation::ReadAll, move |_client| async move {
            flag.store(true, Ordering::SeqCst);
            Ok(tonic::Response::new(()))
        })
        .await
        .unwrap_err();

    assert!(err.is_connection());
    assert!(!called.load(Ordering::SeqCst));
    assert!(err.to_string().contains("127.0.0.1:"));
}

#[tokio::test]
async fn get_against_closed_port_reports_connection_error() {
    let invoker = Invoker::new(unreachable_config());
    let args = UuidArgs {
        uuid: "42".to_string(),
    };

    let err = application::cmd_get(&invoker, &args).await.unwrap_err();
    let err = err.downcast_ref::<InvokeError>().unwrap();
    assert!(err.is_connection());
}

#[tokio::test]
async fn get_without_answer_exceeds_deadline() {
    let addr = spawn_silent_listener().await;
    let invoker = Invoker::new(
        ClientConfig::new("127.0.0.1", addr.port()).with_deadline(Duration::from_millis(500)),
    );
    let args = UuidArgs {
        uuid: "42".to_string(),
    };

    let err = application::cmd_get(&invoker, &args).await.unwrap_err();
    let err = err.downcast_ref::<InvokeError>().unwrap();
    assert!(!err.is_connection());
    assert!(err.is_deadline_exceeded(), "unexpected error: {err}");
    assert!(err.to_string().contains("deadline of 0.5s exceeded"));
}

#[tokio::test]
async fn all_against_empty_registry_reports_zero() {
    let addr = spawn_empty_registry().await;
    let invoker = Invoker::new(ClientConfig::new("127.0.0.1", addr.port()));

    let summary = application::cmd_all(&invoker).await.unwrap();
    assert_eq!(summary, "read all result: count=0, applications=[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn binary_lists_empty_registry_and_exits_zero() {
    let addr = spawn_empty_registry().await;
    let port = addr.port().to_string();

    let output = tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_cat"))
            .args(["-H", "127.0.0.1", "-P", &port, "all"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "read all result: count=0, applications=[]"
    );
}

#[test]
fn binary_logs_lifecycle_when_verbose() {
    let output = Command::new(env!("CARGO_BIN_EXE_cat"))
        .args(["-v", "-H", "127.0.0.1", "-P", &closed_port().to_string(), "all"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("connecting"));
}

#[test]
fn binary_exits_non_zero_without_server() {
    let output = Command::new(env!("CARGO_BIN_EXE_cat"))
        .args(["-H", "127.0.0.1", "-P", &closed_port().to_string(), "all"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("did not connect"));
}

#[test]
fn binary_prints_version_without_network() {
    let output = Command::new(env!("CARGO_BIN_EXE_cat"))
        .args(["-P", &closed_port().to_string(), "version"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("CAT {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn binary_rejects_missing_uuid() {
    let status = Command::new(env!("CARGO_BIN_EXE_cat"))
        .arg("get")
        .status()
        .unwrap();
    assert!(!status.success());
}
