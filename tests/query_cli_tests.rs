use predicates::str::contains;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::{items, mock_server, write_config, write_config_with, wsf};

#[test]
fn test_query_without_config_is_general_error_item() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let out = wsf()
        .args(["--config", missing.to_str().unwrap(), "query", "checkin"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = items(&out);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["uid"], "ws-general-error");
    assert_eq!(list[0]["arg"], "error");
    assert_eq!(list[0]["icon"]["path"], "icon.png");
}

#[test]
fn test_empty_query_shows_menu_without_network() {
    let dir = TempDir::new().unwrap();
    // nothing listens here; the menu must not call the API
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", ""])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = items(&out);
    let args: Vec<&str> = list.iter().map(|i| i["arg"].as_str().unwrap()).collect();
    assert_eq!(list.len(), 4);
    assert_eq!(&args[..3], ["checkin", "checkout", "away"]);
    assert!(args[3].starts_with("view:20"));
}

#[test]
fn test_query_argument_may_be_omitted() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(items(&out).len(), 4);
}

#[test]
fn test_checkin_success_item() {
    let (rt, server) = mock_server();
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/worktime"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "username": "A", "team_name": "T" })),
            )
            .expect(1)
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, &server.uri(), "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "  checkin "])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = items(&out);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["uid"], "ws-success-checkin");
    assert_eq!(list[0]["arg"], "success");
    let subtitle = list[0]["subtitle"].as_str().unwrap();
    assert!(subtitle.contains("A (T)"), "{subtitle}");
    rt.block_on(server.verify());
}

#[test]
fn test_checkout_failure_item_is_truncated() {
    let (rt, server) = mock_server();
    rt.block_on(
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, &server.uri(), "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "checkout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = items(&out);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["uid"], "ws-error-checkout");
    assert_eq!(list[0]["arg"], "error");

    let subtitle = list[0]["subtitle"].as_str().unwrap();
    let (_, detail) = subtitle.split_once(": ").unwrap();
    assert!(detail.chars().count() <= 50, "{detail}");
    rt.block_on(server.verify());
}

#[test]
fn test_date_entry_valid_and_invalid() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");
    let cfg = cfg.to_str().unwrap();

    let out = wsf()
        .args(["--config", cfg, "query", "2022-06-09"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let list = items(&out);
    assert_eq!(list[0]["uid"], "ws-view-date-2022-06-09");
    assert_eq!(list[0]["arg"], "view:2022-06-09");

    let out = wsf()
        .args(["--config", cfg, "query", "2022-13-40"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let list = items(&out);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["uid"], "ws-invalid-date");
}

#[test]
fn test_free_text_suggests() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "hello"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let uids: Vec<String> = items(&out)
        .iter()
        .map(|i| i["uid"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(uids, ["ws-suggest-today", "ws-suggest-yesterday", "ws-suggest-date"]);
}

#[test]
fn test_view_lists_records() {
    let (rt, server) = mock_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/worktime"))
            .and(query_param("date", "2022-06-09"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {
                        "email": "a@x.io",
                        "username": "홍길동",
                        "team_name": "개발팀",
                        "wk_start_time": "2022-06-09T09:00:00",
                        "wk_end_time": "2022-06-09T18:00:00",
                        "wk_time_today": 480,
                        "wk_approved": "APV"
                    },
                    { "email": "b@x.io", "username": "B" }
                ]
            })))
            .expect(1)
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, &server.uri(), "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "view:2022-06-09"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = items(&out);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["title"], "홍길동 (개발팀)");
    assert_eq!(
        list[0]["subtitle"],
        "출근: 09:00 | 퇴근: 18:00 | 근무: 8h 0m | 승인"
    );
    assert_eq!(list[0]["arg"], "detail:a@x.io:2022-06-09");
    assert_eq!(list[0]["mods"]["cmd"]["arg"], "detail:a@x.io:2022-06-09");
    assert_eq!(list[1]["uid"], "ws-worktime-b@x.io-2022-06-09");
    rt.block_on(server.verify());
}

#[test]
fn test_view_failure_is_error_item() {
    let (rt, server) = mock_server();
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, &server.uri(), "k", "");

    wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "view:2022-06-09"])
        .assert()
        .success()
        .stdout(contains("ws-error-view"));
}

#[test]
fn test_stdout_is_pure_json_even_with_debug_logging() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");

    let out = wsf()
        .args(["-v", "--config", cfg.to_str().unwrap(), "query", "away"])
        .assert()
        .success()
        .get_output()
        .clone();

    let list = items(&out.stdout);
    assert_eq!(list[0]["uid"], "ws-error-away");
    assert!(!out.stderr.is_empty());
}

fn suggestion_uids(stdout: &[u8]) -> Vec<String> {
    items(stdout)
        .iter()
        .map(|i| i["uid"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_hyphen_leading_query_is_free_text() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");
    let cfg = cfg.to_str().unwrap();

    for args in [
        vec!["query", "-1d"],
        vec!["query", "-h"],
        vec!["query", "--yesterday"],
        vec!["query", "--", "-v"],
    ] {
        let out = wsf()
            .args(["--config", cfg])
            .args(&args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        assert_eq!(
            suggestion_uids(&out),
            ["ws-suggest-today", "ws-suggest-yesterday", "ws-suggest-date"],
            "{args:?}"
        );
    }
}

#[test]
fn test_multi_word_query_is_joined() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config(&dir, "http://127.0.0.1:9", "k", "");

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "view:2022-06-09", "extra"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // "view:2022-06-09 extra" is a view query; nothing listens, so the
    // branch reports its own error item
    assert_eq!(items(&out)[0]["uid"], "ws-error-view");
}

#[test]
fn test_unrepresentable_timeout_is_general_error_item() {
    let dir = TempDir::new().unwrap();
    let cfg = write_config_with(&dir, "http://127.0.0.1:9", "k", "", 1e30, None);

    let out = wsf()
        .args(["--config", cfg.to_str().unwrap(), "query", "checkin"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let list = items(&out);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["uid"], "ws-general-error");
}
