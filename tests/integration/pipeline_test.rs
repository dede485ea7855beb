// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tendrs::classifier::GeminiClassifier;
use tendrs::config::settings::{ApiSettings, SearchSettings};
use tendrs::domain::models::Verdict;
use tendrs::fetchers::JsonApiFetcher;
use tendrs::pipeline;

use crate::helpers::{
    carm_notice, output_into, sample_query, welding_notice, FailingFetcher, StubClassifier,
    StubFetcher,
};

fn read_output(output: &tendrs::config::settings::OutputSettings) -> String {
    std::fs::read_to_string(&output.path).expect("output page must exist")
}

#[tokio::test]
async fn test_positive_notice_renders_exactly_one_card() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());
    let fetcher = StubFetcher {
        notices: vec![carm_notice()],
    };
    let classifier = StubClassifier {
        verdict: Verdict::Match,
    };

    let report = pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();

    assert_eq!(report.fetched, 1);
    assert_eq!(report.matched, 1);
    assert_eq!(report.indeterminate, 0);

    let html = read_output(&output);
    assert_eq!(html.matches("class=\"card\"").count(), 1);
    assert!(html.contains("Mobile C-arm fluoroscopy unit for orthopedic theatre"));
    assert!(html.contains("https://example.com/notice/645731"));
    assert!(!html.contains("No matching tender notices"));
}

#[tokio::test]
async fn test_negative_notice_renders_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());
    let fetcher = StubFetcher {
        notices: vec![welding_notice()],
    };
    let classifier = StubClassifier {
        verdict: Verdict::NoMatch,
    };

    let report = pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();

    assert_eq!(report.fetched, 1);
    assert_eq!(report.matched, 0);

    let html = read_output(&output);
    assert!(html.contains("No matching tender notices found in this run."));
    assert_eq!(html.matches("class=\"card\"").count(), 0);
    assert!(!html.contains("Robotic arm for industrial welding"));
}

#[tokio::test]
async fn test_empty_fetch_renders_placeholder_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());
    let fetcher = StubFetcher { notices: vec![] };
    let classifier = StubClassifier {
        verdict: Verdict::Match,
    };

    let report = pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();

    assert_eq!(report.fetched, 0);
    assert_eq!(report.matched, 0);

    let html = read_output(&output);
    assert!(html.contains("No matching tender notices found in this run."));
}

#[tokio::test]
async fn test_fetch_failure_still_produces_valid_page() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());
    let classifier = StubClassifier {
        verdict: Verdict::Match,
    };

    let report = pipeline::run(&FailingFetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();

    assert_eq!(report.fetched, 0);

    let html = read_output(&output);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("No matching tender notices found in this run."));
}

#[tokio::test]
async fn test_classifier_failure_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());
    let fetcher = StubFetcher {
        notices: vec![carm_notice(), welding_notice()],
    };
    let classifier = StubClassifier {
        verdict: Verdict::Indeterminate("model call failed".to_string()),
    };

    let report = pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();

    assert_eq!(report.fetched, 2);
    assert_eq!(report.matched, 0);
    assert_eq!(report.indeterminate, 2);

    let html = read_output(&output);
    assert!(html.contains("No matching tender notices found in this run."));
    assert!(!html.contains("Mobile C-arm fluoroscopy unit"));
}

#[tokio::test]
async fn test_two_runs_are_identical_except_for_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());
    let fetcher = StubFetcher {
        notices: vec![carm_notice()],
    };
    let classifier = StubClassifier {
        verdict: Verdict::Match,
    };

    pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();
    let first = read_output(&output);

    pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();
    let second = read_output(&output);

    let strip_timestamp = |html: &str| {
        html.lines()
            .filter(|line| !line.contains("Generated at"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip_timestamp(&first), strip_timestamp(&second));
}

#[tokio::test]
async fn test_full_stack_run_against_stubbed_endpoints() {
    let search_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notices": [
                {
                    "id": "645731-2025",
                    "title": "Mobile C-arm fluoroscopy unit for orthopedic theatre",
                    "description": "Delivery of one mobile C-arm with flat panel detector",
                    "deadline": "20250115",
                    "detailLink": "https://example.com/notice/645731"
                },
                {
                    "id": "645732-2025",
                    "title": "Robotic arm for industrial welding",
                    "description": "Six-axis industrial robot",
                    "deadline": "N/A",
                    "detailLink": "https://example.com/notice/645732"
                }
            ]
        })))
        .mount(&search_server)
        .await;

    let model_server = MockServer::start().await;
    // First notice is a C-arm, second is not; replies are served in call order
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [ { "content": { "parts": [ { "text": "YES" } ] } } ]
        })))
        .up_to_n_times(1)
        .mount(&model_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [ { "content": { "parts": [ { "text": "NO" } ] } } ]
        })))
        .mount(&model_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = output_into(dir.path());

    let search_settings = SearchSettings {
        backend: "json".to_string(),
        url: format!("{}/search", search_server.uri()),
        timeout: 5,
    };
    let api_settings = ApiSettings {
        key: Some("test-key".to_string()),
        model: "gemini-1.5-flash".to_string(),
        base_url: model_server.uri(),
        timeout: 5,
        prompt_chars: 700,
    };

    let fetcher = JsonApiFetcher::new(&search_settings);
    let classifier = GeminiClassifier::new("test-key".to_string(), &api_settings);

    let report = pipeline::run(&fetcher, &classifier, &sample_query(), &output)
        .await
        .unwrap();

    assert_eq!(report.fetched, 2);
    assert_eq!(report.matched, 1);
    assert_eq!(report.indeterminate, 0);

    let html = read_output(&output);
    assert_eq!(html.matches("class=\"card\"").count(), 1);
    assert!(html.contains("Mobile C-arm fluoroscopy unit for orthopedic theatre"));
    assert!(html.contains("Deadline: 2025-01-15"));
    assert!(!html.contains("Robotic arm for industrial welding"));
}
