// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for the Ollama client
//!
//! A one-shot HTTP responder on a loopback port stands in for the Ollama
//! server, so the client's real request/response path is exercised.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use similar_asserts::assert_eq;
use standup_git::{CommitRecord, aggregate};
use standup_summary::{NO_COMMITS_MESSAGE, OllamaClient, SummaryError, Summarizer, TextGenerator};

// ============================================================================
// Fake server
// ============================================================================

/// Serve exactly one HTTP response, returning the raw request once handled
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    serve(status, vec![body])
}

/// Serve one response per body, in order, on sequential connections
fn serve(status: &'static str, bodies: Vec<&'static str>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let mut requests = String::new();
        for body in bodies {
            let (mut stream, _) = listener.accept().expect("accept connection");
            requests.push_str(&read_request(&mut stream));
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
        }
        requests
    });

    (format!("http://{addr}"), handle)
}

/// Read a full HTTP request (headers plus Content-Length body)
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// A loopback address with nothing listening on it
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn request_body(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").expect("request has body");
    serde_json::from_str(body).expect("request body is JSON")
}

// ============================================================================
// Client tests
// ============================================================================

#[test]
fn test_generate_returns_response_field() {
    let (url, server) = serve_once(
        "200 OK",
        r#"{"model":"llama3.2","response":"Shipped login.","done":true}"#,
    );
    let client = OllamaClient::new(&url, "llama3.2:latest").expect("client");

    let text = client.generate("Summarize today").expect("generate");
    assert_eq!(text, "Shipped login.");

    let request = server.join().expect("server thread");
    assert!(request.starts_with("POST /api/generate "));
    assert_eq!(
        request_body(&request),
        serde_json::json!({"model": "llama3.2:latest", "prompt": "Summarize today", "stream": false})
    );
}

#[test]
fn test_generate_missing_response_field() {
    let (url, server) = serve_once("200 OK", r#"{"done":true}"#);
    let client = OllamaClient::new(&url, "llama3.2:latest").expect("client");

    assert_eq!(client.generate("hi").expect("generate"), "No response from Ollama");
    server.join().expect("server thread");
}

#[test]
fn test_generate_non_json_body() {
    let (url, server) = serve_once("200 OK", "definitely not json");
    let client = OllamaClient::new(&url, "llama3.2:latest").expect("client");

    assert!(matches!(client.generate("hi"), Err(SummaryError::JsonParse(_))));
    server.join().expect("server thread");
}

#[test]
fn test_generate_error_status() {
    let (url, server) = serve_once("404 Not Found", r#"{"error":"model 'nope' not found"}"#);
    let client = OllamaClient::new(&url, "nope").expect("client");

    match client.generate("hi") {
        Err(SummaryError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
    server.join().expect("server thread");
}

#[test]
fn test_generate_connection_refused() {
    let client = OllamaClient::new(&closed_port_url(), "llama3.2:latest").expect("client");
    assert!(matches!(client.generate("hi"), Err(SummaryError::Http(_))));
}

// ============================================================================
// Summarizer over HTTP
// ============================================================================

#[test]
fn test_summarizer_connection_refused_yields_error_strings() {
    let client = OllamaClient::new(&closed_port_url(), "llama3.2:latest").expect("client");
    let projects = aggregate([(
        "Alpha".to_string(),
        vec![CommitRecord::new("0123456789", "Dev", "2026-01-17", "feat: login")],
    )]);

    let summary = Summarizer::new(client).summarize(&projects);

    assert_eq!(summary.total_commits, 1);
    assert!(summary.synthesis.starts_with("Error with Ollama: "));
    assert!(summary.breakdown.starts_with("Error with Ollama: "));
}

#[test]
fn test_summarizer_two_requests() {
    let (url, server) = serve(
        "200 OK",
        vec![r#"{"response":"Standup text"}"#, r#"{"response":"Alpha\n- login"}"#],
    );
    let client = OllamaClient::new(&url, "llama3.2:latest").expect("client");
    let projects = aggregate([
        (
            "Alpha".to_string(),
            vec![CommitRecord::new("0123456789", "Dev", "2026-01-17", "feat: login")],
        ),
        ("Beta".to_string(), vec![]),
    ]);

    let summary = Summarizer::new(client).summarize(&projects);
    assert_eq!(summary.synthesis, "Standup text");
    assert_eq!(summary.breakdown, "Alpha\n- login");

    let requests = server.join().expect("server thread");
    assert_eq!(requests.matches("POST /api/generate").count(), 2);
}

#[test]
fn test_summarizer_no_commits_makes_no_request() {
    // Nothing is listening: any request would fail and show up in the text.
    let client = OllamaClient::new(&closed_port_url(), "llama3.2:latest").expect("client");
    let projects = aggregate([("Alpha".to_string(), vec![])]);

    let summary = Summarizer::new(client).summarize(&projects);
    assert_eq!(summary.synthesis, NO_COMMITS_MESSAGE);
    assert_eq!(summary.breakdown, NO_COMMITS_MESSAGE);
    assert_eq!(summary.total_commits, 0);
}
