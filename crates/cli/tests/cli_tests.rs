//! Binary-level tests: exit codes and output side effects

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::thread;
use tempfile::TempDir;

fn run(args: &[&str], home: &Path, cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chapterfeed"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CHAPTERFEED_URL")
        .env_remove("CHAPTERFEED_OUTPUT")
        .env_remove("CHAPTERFEED_USER_AGENT")
        .env_remove("CHAPTERFEED_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

/// Answers one request on a background thread
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/table-of-contents/")
}

const PAGE: &str = r#"<div class="chapter-entry"><a href="/2018/01/01/a/">Chapter 1</a></div>
<div class="chapter-entry"><a href="/2018/06/15/b/">Chapter 2</a></div>"#;

#[test]
fn test_generates_feed_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let url = serve_once("200 OK", PAGE);

    let output = run(&["--url", &url, "-q"], temp_dir.path(), temp_dir.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let xml = fs::read_to_string(temp_dir.path().join("feed.xml")).expect("default output path");
    assert!(xml.find("Chapter 2").expect("c2") < xml.find("Chapter 1").expect("c1"));
}

#[test]
fn test_stdout_mode_writes_no_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let url = serve_once("200 OK", PAGE);

    let output = run(&["--url", &url, "--stdout", "-q"], temp_dir.path(), temp_dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<?xml"));
    assert!(stdout.contains("<pubDate>Fri, 15 Jun 2018 00:00:00 +0000</pubDate>"));
    assert!(!temp_dir.path().join("feed.xml").exists());
}

#[test]
fn test_fetch_failure_exits_non_zero() {
    let temp_dir = TempDir::new().expect("temp dir");
    let url = serve_once("502 Bad Gateway", "");

    let output = run(&["--url", &url, "-o", "out.xml"], temp_dir.path(), temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error fetching page"));
    assert!(!temp_dir.path().join("out.xml").exists());
}

#[test]
fn test_invalid_url_is_config_error() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = run(&["--url", "not-a-url"], temp_dir.path(), temp_dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("feed.xml").exists());
}

#[test]
fn test_init_config_then_use_it() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("chapterfeed.toml");
    let config_arg = config_path.to_str().expect("utf-8 path");

    let output = run(&["--init-config", config_arg], temp_dir.path(), temp_dir.path());
    assert!(output.status.success());
    assert!(config_path.exists());

    let url = serve_once("200 OK", PAGE);
    let contents = fs::read_to_string(&config_path)
        .expect("read config")
        .replace("https://wanderinginn.com/table-of-contents/", &url)
        .replace("feed.xml", "from-config.xml");
    fs::write(&config_path, contents).expect("edit config");

    let output = run(&["-c", config_arg, "-q"], temp_dir.path(), temp_dir.path());
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(temp_dir.path().join("from-config.xml").exists());
}

#[test]
fn test_unparseable_port_is_config_error() {
    let temp_dir = TempDir::new().expect("temp dir");

    let output = run(
        &["--url", "http://example.com:notaport/toc/"],
        temp_dir.path(),
        temp_dir.path(),
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("feed.xml").exists());
}
