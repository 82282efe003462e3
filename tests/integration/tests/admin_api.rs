//! Admin API client behavior: authorization header, typed responses and
//! error surfacing.

use kc_admin_client::AdminError;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestEnv;

#[tokio::test]
async fn calls_carry_the_session_bearer_token() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path("/admin/realms"))
        .and(header("authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "master", "realm": "master", "enabled": true},
            {"id": "demo", "realm": "demo", "displayName": "Demo", "enabled": true},
        ])))
        .expect(1)
        .mount(&env.server)
        .await;

    let realms = env.admin.list_realms().await?;
    assert_eq!(realms.len(), 2);
    assert_eq!(realms[1].display_name.as_deref(), Some("Demo"));
    Ok(())
}

#[tokio::test]
async fn list_clients_forwards_the_client_id_filter() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients"))
        .and(query_param("clientId", "svc-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "svc-a", "clientId": "svc-a"},
        ])))
        .expect(1)
        .mount(&env.server)
        .await;

    let clients = env.admin.list_clients("demo", Some("svc-a")).await?;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].client_id(), Some("svc-a"));
    Ok(())
}

#[tokio::test]
async fn non_success_responses_surface_the_transport_status() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("client not found"))
        .mount(&env.server)
        .await;

    match env.admin.get_client("demo", "ghost").await {
        Err(AdminError::Api { status: 404, message }) => {
            assert!(message.contains("client not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn client_secret_is_read_from_the_secret_resource() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("GET"))
        .and(path("/admin/realms/demo/clients/svc-a/client-secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"type": "secret", "value": "s3cr3t"})),
        )
        .mount(&env.server)
        .await;

    let secret = env.admin.get_client_secret("demo", "svc-a").await?;
    assert_eq!(secret.value, "s3cr3t");
    Ok(())
}

#[tokio::test]
async fn delete_realm_issues_a_remote_only_delete() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    Mock::given(method("DELETE"))
        .and(path("/admin/realms/demo"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&env.server)
        .await;

    env.admin.delete_realm("demo").await?;
    Ok(())
}
