//! Reconciliation pass: the four-way drift classification end to end.

use kc_mirror::commands::check::drift_report;
use kc_mirror::commands::client as client_ops;
use kc_mirror::reconcile::SyncStatus;
use kc_mirror::CliError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{record, TestEnv};

#[tokio::test]
async fn local_only_client_reports_missing() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    env.repo.save(
        "demo",
        &record(serde_json::json!({"id": "svc-a", "clientId": "svc-a", "enabled": true})),
    )?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&env.server)
        .await;

    let report = drift_report(&env.admin, &env.repo, "demo", None).await?;
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines, vec!["svc-a : missing"]);
    Ok(())
}

#[tokio::test]
async fn local_record_without_an_id_keys_on_its_client_id() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    env.repo.save(
        "demo",
        &record(serde_json::json!({"clientId": "svc-a", "enabled": true})),
    )?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&env.server)
        .await;

    let report = drift_report(&env.admin, &env.repo, "demo", None).await?;
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines, vec!["svc-a : missing"]);
    Ok(())
}

#[tokio::test]
async fn all_four_statuses_appear_in_one_pass() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    // missing: local only; equals: identical; differs: diverged payloads.
    env.repo
        .save("demo", &record(serde_json::json!({"id": "a", "clientId": "a"})))?;
    env.repo.save(
        "demo",
        &record(serde_json::json!({"id": "b", "clientId": "b", "enabled": true})),
    )?;
    env.repo.save(
        "demo",
        &record(serde_json::json!({"id": "c", "clientId": "c", "enabled": true})),
    )?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "b", "clientId": "b", "enabled": true},
            {"id": "c", "clientId": "c", "enabled": false},
            {"id": "d", "clientId": "d"},
        ])))
        .mount(&env.server)
        .await;

    let report = drift_report(&env.admin, &env.repo, "demo", None).await?;
    assert_eq!(
        report.entries().to_vec(),
        vec![
            ("a".to_string(), SyncStatus::Missing),
            ("b".to_string(), SyncStatus::Equals),
            ("c".to_string(), SyncStatus::Differs),
            ("d".to_string(), SyncStatus::Stale),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn restore_then_check_reports_equals() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let doc = serde_json::json!({"id": "svc-c", "clientId": "svc-c", "enabled": true});
    env.repo.save("demo", &record(doc.clone()))?;

    Mock::given(method("POST"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&env.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients/svc-c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(doc.clone()))
        .mount(&env.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([doc])))
        .mount(&env.server)
        .await;

    client_ops::restore(&env.admin, &env.repo, "demo", "svc-c").await?;

    let report = drift_report(&env.admin, &env.repo, "demo", None).await?;
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines, vec!["svc-c : equals"]);
    Ok(())
}

#[tokio::test]
async fn remote_record_without_any_identity_is_malformed() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"enabled": true},
        ])))
        .mount(&env.server)
        .await;

    match drift_report(&env.admin, &env.repo, "demo", None).await {
        Err(CliError::MalformedData(_)) => {}
        other => panic!("expected MalformedData, got {other:?}"),
    }
    Ok(())
}
