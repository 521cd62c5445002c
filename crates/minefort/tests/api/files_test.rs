//! Server file system calls: path normalization, bodies, and query strings.

use minefort::{ApiError, FileManager};
use minefort_core::files::{CreateKind, FileKind};
use serde_json::json;

use crate::common::{failed, ok, with_my_server, FakeApi, SESSION};

async fn files_of(api: FakeApi) -> (FileManager, FakeApi) {
    let (client, api) = api.start().await;
    client.set_session(SESSION);

    let server = client.servers().my_servers().await.unwrap().remove(0);
    (server.files(), api)
}

#[tokio::test]
async fn test_create_file_splits_normalized_path() {
    let (files, api) = files_of(
        with_my_server().reply("POST", "/server/srv-1/files/create", ok(json!({}))),
    )
    .await;

    files.create("logs/out.txt", CreateKind::File).await.unwrap();

    let request = api.last("/server/srv-1/files/create");
    assert_eq!(
        request.body,
        json!({"filePath": "root/logs", "fileName": "out.txt", "fileType": "file"})
    );
    assert_eq!(request.cookie, Some(format!("minefort-session={SESSION}")));
}

#[tokio::test]
async fn test_create_directory_sends_folder() {
    let (files, api) = files_of(
        with_my_server().reply("POST", "/server/srv-1/files/create", ok(json!({}))),
    )
    .await;

    files.create("root/plugins/Essentials", CreateKind::Directory).await.unwrap();

    assert_eq!(
        api.last("/server/srv-1/files/create").body,
        json!({"filePath": "root/plugins", "fileName": "Essentials", "fileType": "folder"})
    );
}

#[tokio::test]
async fn test_list_sends_normalized_path_query() {
    let (files, api) = files_of(with_my_server().reply(
        "GET",
        "/server/srv-1/files/list",
        ok(json!([
            {"name": "latest.log", "type": "file", "size": 2048},
            {"name": "archive", "type": "folder"}
        ])),
    ))
    .await;

    let entries = files.list("logs").await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, FileKind::File);
    assert_eq!(entries[0].size, Some(2048));
    assert!(entries[1].is_dir());
    assert_eq!(
        api.last("/server/srv-1/files/list").query.as_deref(),
        Some("path=root%2Flogs")
    );
}

#[tokio::test]
async fn test_read_sends_split_path_query() {
    let (files, api) = files_of(with_my_server().reply(
        "GET",
        "/server/srv-1/files/read",
        ok(json!("eula=true\n")),
    ))
    .await;

    let content = files.read("eula.txt").await.unwrap();

    assert_eq!(content, "eula=true\n");
    assert_eq!(
        api.last("/server/srv-1/files/read").query.as_deref(),
        Some("filePath=root&fileName=eula.txt")
    );
}

#[tokio::test]
async fn test_write_rename_and_delete_bodies() {
    let (files, api) = files_of(
        with_my_server()
            .reply("POST", "/server/srv-1/files/write", ok(json!({})))
            .reply("POST", "/server/srv-1/files/rename", ok(json!({})))
            .reply("POST", "/server/srv-1/files/remove", ok(json!({}))),
    )
    .await;

    files.write("server.properties", "pvp=false\n").await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/files/write").body,
        json!({"filePath": "root", "fileName": "server.properties", "content": "pvp=false\n"})
    );

    files.rename("logs/old.log", "older.log").await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/files/rename").body,
        json!({"filePath": "root/logs", "fileName": "old.log", "newFileName": "older.log"})
    );

    files.delete("root/logs/older.log").await.unwrap();
    assert_eq!(
        api.last("/server/srv-1/files/remove").body,
        json!({"filePath": "root/logs", "fileName": "older.log"})
    );
}

#[tokio::test]
async fn test_delete_checks_the_reply() {
    let (files, _api) = files_of(
        with_my_server().reply("POST", "/server/srv-1/files/remove", failed("ITEM_NOT_FOUND")),
    )
    .await;

    let err = files.delete("missing.txt").await.unwrap_err();
    assert_eq!(err.api(), Some(&ApiError::ItemNotFound));
}
