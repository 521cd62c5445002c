//! Server listing, owned servers, and server actions.

use minefort::{ApiError, ListOptions, Lookup, SortOrder};
use minefort_core::options::find_by_id_or_name;
use minefort_core::server::{PropertyValue, ServerProperty, ServerState, SubUserRole};
use serde_json::json;

use crate::common::{
    failed, my_server_json, ok, server_json, with_my_server, FakeApi, SESSION,
};

// =============================================================================
// MANAGER
// =============================================================================

#[tokio::test]
async fn test_name_availability_false_for_taken_name() {
    let (client, api) = FakeApi::new()
        .reply("POST", "/server/availability", ok(json!(false)))
        .start()
        .await;
    client.set_session(SESSION);

    let available = client.servers().is_name_available("taken-name").await.unwrap();

    assert!(!available);
    assert_eq!(
        api.last("/server/availability").body,
        json!({"serverName": "taken-name"})
    );
}

#[tokio::test]
async fn test_online_servers_default_body_and_no_cookie() {
    let (client, api) = FakeApi::new()
        .reply(
            "POST",
            "/servers/list",
            json!({
                "status": "OK",
                "result": [server_json("srv-1", "skyblockers", 12), server_json("srv-2", "lobby", 3)],
                "pagination": {"more": true, "total": 812}
            }),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let page = client
        .servers()
        .online_servers_page(ListOptions::default())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "skyblockers");
    assert_eq!(page.items[0].state, ServerState::Online);
    assert!(page.more);
    assert_eq!(page.total, Some(812));

    let request = api.last("/servers/list");
    assert_eq!(
        request.body,
        json!({
            "pagination": {"skip": 0, "limit": 500},
            "sort": {"field": "players.online", "order": "desc"}
        })
    );
    assert_eq!(request.cookie, None);
}

#[tokio::test]
async fn test_online_servers_custom_options() {
    let (client, api) = FakeApi::new()
        .reply("POST", "/servers/list", ok(json!([])))
        .start()
        .await;

    let servers = client
        .servers()
        .online_servers(ListOptions {
            skip: 50,
            limit: 10,
            order: SortOrder::Asc,
        })
        .await
        .unwrap();

    assert!(servers.is_empty());
    assert_eq!(
        api.last("/servers/list").body,
        json!({
            "pagination": {"skip": 50, "limit": 10},
            "sort": {"field": "players.online", "order": "asc"}
        })
    );
}

#[tokio::test]
async fn test_online_server_lookup() {
    let (client, _api) = FakeApi::new()
        .reply(
            "POST",
            "/servers/list",
            ok(json!([server_json("srv-1", "skyblockers", 12), server_json("srv-2", "lobby", 3)])),
        )
        .start()
        .await;
    let servers = client.servers();

    let by_id = servers.online_server("srv-2", Lookup::ById).await.unwrap();
    assert_eq!(by_id.map(|server| server.name).as_deref(), Some("lobby"));

    let by_name = servers.online_server("skyblockers", Lookup::ByName).await.unwrap();
    assert_eq!(by_name.map(|server| server.id).as_deref(), Some("srv-1"));

    let missing = servers.online_server("nobody", Lookup::ByName).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_my_server_lookup_by_name_without_match_is_none() {
    let (client, _api) = with_my_server().start().await;
    client.set_session(SESSION);

    let server = client.servers().my_server("creative", Lookup::ByName).await.unwrap();
    assert!(server.is_none());

    let server = client.servers().my_server("survival", Lookup::ByName).await.unwrap();
    assert_eq!(server.map(|server| server.id.clone()).as_deref(), Some("srv-1"));
}

#[tokio::test]
async fn test_my_servers_not_authenticated_raises() {
    let (client, _api) = FakeApi::new()
        .reply("GET", "/user/servers", failed("NOT_AUTHENTICATED"))
        .start()
        .await;

    let err = client.servers().my_servers().await.unwrap_err();
    assert_eq!(err.api(), Some(&ApiError::NotAuthenticated));
}

#[tokio::test]
async fn test_create_server_returns_id() {
    let (client, api) = FakeApi::new()
        .reply("POST", "/server/create", ok(json!({"serverId": "srv-new"})))
        .start()
        .await;
    client.set_session(SESSION);

    let id = client.servers().create("fresh-world").await.unwrap();

    assert_eq!(id, "srv-new");
    assert_eq!(
        api.last("/server/create").body,
        json!({"serverName": "fresh-world", "template": "default"})
    );
}

#[tokio::test]
async fn test_create_server_over_account_limit() {
    let (client, _api) = FakeApi::new()
        .reply("POST", "/server/create", failed("SERVER_ACCOUNT_LIMIT"))
        .start()
        .await;

    let err = client.servers().create("one-too-many").await.unwrap_err();
    assert_eq!(err.to_string(), "server account limit");
}

// =============================================================================
// OWNED SERVER ACTIONS
// =============================================================================

#[tokio::test]
async fn test_lifecycle_actions_post_to_server_path() {
    let (client, api) = with_my_server()
        .reply("POST", "/server/srv-1/wakeup", ok(json!({})))
        .reply("POST", "/server/srv-1/start", ok(json!({})))
        .reply("POST", "/server/srv-1/stop", ok(json!({})))
        .reply("POST", "/server/srv-1/kill", ok(json!({})))
        .reply("POST", "/server/srv-1/sleep", ok(json!({})))
        .reply("POST", "/server/srv-1/repair", ok(json!({})))
        .reply("POST", "/server/srv-1/reset", ok(json!({})))
        .start()
        .await;
    client.set_session(SESSION);

    let server = client
        .servers()
        .my_server("srv-1", Lookup::ById)
        .await
        .unwrap()
        .unwrap();

    server.wakeup().await.unwrap();
    server.start().await.unwrap();
    server.stop().await.unwrap();
    server.kill().await.unwrap();
    server.sleep().await.unwrap();
    server.repair().await.unwrap();
    server.reset().await.unwrap();

    let actions: Vec<String> = api
        .requests()
        .into_iter()
        .filter(|request| request.method == "POST")
        .map(|request| request.path)
        .collect();
    assert_eq!(
        actions,
        [
            "/server/srv-1/wakeup",
            "/server/srv-1/start",
            "/server/srv-1/stop",
            "/server/srv-1/kill",
            "/server/srv-1/sleep",
            "/server/srv-1/repair",
            "/server/srv-1/reset",
        ]
    );
}

#[tokio::test]
async fn test_console_on_hibernating_server_is_invalid_state() {
    let (client, _api) = with_my_server()
        .reply("GET", "/server/srv-1/console", failed("INVALID_STATE"))
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);
    let err = server.console().await.unwrap_err();

    assert_eq!(err.api(), Some(&ApiError::InvalidState));
}

#[tokio::test]
async fn test_failure_with_text_error_still_maps_status() {
    let (client, _api) = with_my_server()
        .reply(
            "POST",
            "/server/srv-1/start",
            json!({"status": "INVALID_STATE", "error": "Server is hibernating"}),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);
    let err = server.start().await.unwrap_err();

    assert_eq!(err.api(), Some(&ApiError::InvalidState));
    assert_eq!(err.to_string(), "invalid state");
}

#[tokio::test]
async fn test_managed_servers_resolve_by_id_then_name() {
    let (client, _api) = FakeApi::new()
        .reply(
            "GET",
            "/user/servers",
            ok(json!([
                my_server_json("srv-1", "survival"),
                my_server_json("survival", "creative")
            ])),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let servers = client.servers().my_servers().await.unwrap();
    let by_id = find_by_id_or_name(servers.clone(), "survival").unwrap();
    assert_eq!(by_id.name, "creative");

    let by_name = find_by_id_or_name(servers, "creative").unwrap();
    assert_eq!(by_name.id, "survival");
}

#[tokio::test]
async fn test_server_id_is_escaped_in_path() {
    let (client, api) = FakeApi::new()
        .reply("GET", "/user/servers", ok(json!([my_server_json("srv/1?x", "odd")])))
        .reply("POST", "/server/srv%2F1%3Fx/wakeup", ok(json!({})))
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);
    server.wakeup().await.unwrap();

    let request = api.last("/server/srv%2F1%3Fx/wakeup");
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn test_console_lines() {
    let (client, _api) = with_my_server()
        .reply(
            "GET",
            "/server/srv-1/console",
            ok(json!("[12:00:00 INFO]: Starting\n[12:00:05 INFO]: Done")),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);
    let lines = server.console().await.unwrap();

    assert_eq!(lines, vec!["[12:00:00 INFO]: Starting", "[12:00:05 INFO]: Done"]);
}

#[tokio::test]
async fn test_properties_roundtrip_bodies() {
    let (client, api) = with_my_server()
        .reply(
            "GET",
            "/server/srv-1/properties",
            ok(json!({"difficulty": "easy", "pvp": true, "max-players": 20})),
        )
        .reply("POST", "/server/srv-1/properties", ok(json!({})))
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);

    let properties = server.properties().await.unwrap();
    assert_eq!(properties["pvp"], PropertyValue::Bool(true));
    assert_eq!(properties["max-players"], PropertyValue::Integer(20));

    server
        .set_property(ServerProperty::Difficulty, "hard")
        .await
        .unwrap();
    assert_eq!(
        api.last("/server/srv-1/properties").body,
        json!({"property": "difficulty", "value": "hard"})
    );

    server
        .set_property(ServerProperty::AllowFlight, true)
        .await
        .unwrap();
    assert_eq!(
        api.last("/server/srv-1/properties").body,
        json!({"property": "allow-flight", "value": true})
    );
}

#[tokio::test]
async fn test_sub_user_management_bodies() {
    let (client, api) = with_my_server()
        .reply(
            "GET",
            "/server/srv-1/subusers",
            ok(json!([{"userId": "user-3", "email": null, "role": 2, "accepted": true}])),
        )
        .reply("POST", "/server/srv-1/subusers/update", ok(json!({})))
        .reply("DELETE", "/server/srv-1/subusers", ok(json!({})))
        .reply("POST", "/server/srv-1/subusers/invite", ok(json!({})))
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);

    let sub_users = server.sub_users().await.unwrap();
    assert_eq!(sub_users[0].role, SubUserRole::Admin);
    assert_eq!(sub_users[0].email, None);

    server.update_sub_user("user-3", SubUserRole::Moderator).await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/subusers/update").body,
        json!({"userId": "user-3", "role": 1})
    );

    server.delete_sub_user("user-3").await.unwrap();
    let delete = api.last("/server/srv-1/subusers");
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.body, json!({"userId": "user-3"}));

    server.invite_sub_user("alex@example.com", SubUserRole::Viewer).await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/subusers/invite").body,
        json!({"emailAddress": "alex@example.com", "role": 0})
    );
}

#[tokio::test]
async fn test_settings_bodies() {
    let (client, api) = with_my_server()
        .reply("POST", "/server/srv-1/motd", ok(json!({})))
        .reply("POST", "/server/srv-1/name", ok(json!({})))
        .reply("POST", "/server/srv-1/icon", ok(json!({})))
        .reply("POST", "/plugins/srv-1/install", ok(json!({})))
        .reply("DELETE", "/server/srv-1", ok(json!({})))
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);

    server.set_motd("Hello there").await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/motd").body,
        json!({"messageOfTheDay": "Hello there"})
    );

    server.set_name("survival-2").await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/name").body,
        json!({"serverName": "survival-2"})
    );
    // The snapshot is not refreshed by actions.
    assert_eq!(server.name, "survival");

    server.set_icon("icon-diamond").await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/icon").body,
        json!({"iconId": "icon-diamond"})
    );

    server.install_plugin("plugin-42").await.unwrap();
    assert_eq!(
        api.last("/plugins/srv-1/install").body,
        json!({"pluginId": "plugin-42"})
    );

    server.delete("hunter2").await.unwrap();
    let delete = api.last("/server/srv-1");
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.body, json!({"password": "hunter2"}));
}

#[tokio::test]
async fn test_invalid_input_keeps_validation_message() {
    let (client, _api) = with_my_server()
        .reply(
            "POST",
            "/server/srv-1/name",
            json!({
                "status": "INVALID_INPUT",
                "error": {"body": [{
                    "message": "\"serverName\" length must be at least 3 characters long",
                    "path": ["serverName"],
                    "type": "string.min",
                    "context": {"limit": 3, "value": "ab", "label": "serverName", "key": "serverName"}
                }]}
            }),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);
    let err = server.set_name("ab").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid input: \"serverName\" length must be at least 3 characters long"
    );
}
