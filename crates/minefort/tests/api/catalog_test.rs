//! Icons, blog articles, and plugins.

use minefort::{Lookup, PluginSearch};
use serde_json::json;

use crate::common::{failed, icon_json, ok, FakeApi, SESSION};

fn article_json(slug: &str) -> serde_json::Value {
    json!({
        "id": "63a0c1",
        "uuid": "0b0a2c0e-5a55-4c1e-9d52-8b3f0b8f6b11",
        "title": "Release notes",
        "slug": slug,
        "html": "<p>New things</p>",
        "comment_id": "63a0c1",
        "feature_image": null,
        "feature_image_alt": null,
        "feature_image_caption": null,
        "featured": false,
        "visibility": "public",
        "created_at": "2023-01-02T10:00:00.000+00:00",
        "updated_at": "2023-01-03T10:00:00.000+00:00",
        "published_at": "2023-01-03T12:00:00.000+00:00",
        "custom_excerpt": null,
        "codeinjection_head": null,
        "codeinjection_foot": null,
        "custom_template": null,
        "canonical_url": null,
        "authors": [],
        "tags": [],
        "url": format!("https://minefort.com/blog/{slug}/"),
        "excerpt": "New things",
        "reading_time": 1,
        "access": true,
        "comments": false,
        "og_image": null,
        "og_title": null,
        "og_description": null,
        "twitter_image": null,
        "twitter_title": null,
        "twitter_description": null,
        "meta_title": null,
        "meta_description": null,
        "email_subject": null,
        "frontmatter": null
    })
}

#[tokio::test]
async fn test_icon_lookup() {
    let (client, api) = FakeApi::new()
        .reply(
            "GET",
            "/server/icons",
            ok(json!([icon_json("icon-grass", "Grass Block"), icon_json("icon-tnt", "TNT")])),
        )
        .start()
        .await;
    client.set_session(SESSION);
    let icons = client.icons();

    assert_eq!(icons.list().await.unwrap().len(), 2);

    let tnt = icons.get("TNT", Lookup::ByName).await.unwrap().unwrap();
    assert_eq!(tnt.id, "icon-tnt");
    assert_eq!(tnt.price, Some(250));

    assert!(icons.get("TNT", Lookup::ById).await.unwrap().is_none());
    assert!(icons.get("Bedrock", Lookup::ByName).await.unwrap().is_none());

    assert_eq!(
        api.last("/server/icons").cookie,
        Some(format!("minefort-session={SESSION}"))
    );
}

#[tokio::test]
async fn test_articles_are_public() {
    let (client, api) = FakeApi::new()
        .reply("GET", "/blog/articles", ok(json!([article_json("release-notes")])))
        .reply(
            "GET",
            "/blog/articles/release-notes",
            ok(article_json("release-notes")),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let articles = client.network().articles().await.unwrap();
    assert_eq!(articles[0].slug, "release-notes");
    assert_eq!(articles[0].content, "<p>New things</p>");

    let article = client.network().article("release-notes").await.unwrap();
    assert_eq!(article.title, "Release notes");
    assert_eq!(article.featured_image.url, None);
    assert!(!article.comments_enabled);

    assert_eq!(api.last("/blog/articles").cookie, None);
    assert_eq!(api.last("/blog/articles/release-notes").cookie, None);
}

#[tokio::test]
async fn test_missing_article_is_item_not_found() {
    let (client, _api) = FakeApi::new()
        .reply("GET", "/blog/articles/nope", failed("ITEM_NOT_FOUND"))
        .start()
        .await;

    let err = client.network().article("nope").await.unwrap_err();
    assert_eq!(err.to_string(), "item not found");
}

#[tokio::test]
async fn test_article_slug_is_escaped() {
    let (client, api) = FakeApi::new()
        .reply("GET", "/blog/articles/a%2Fb%3Fc%23d", ok(article_json("a/b?c#d")))
        .start()
        .await;

    let article = client.network().article("a/b?c#d").await.unwrap();
    assert_eq!(article.slug, "a/b?c#d");

    let request = api.last("/blog/articles/a%2Fb%3Fc%23d");
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn test_plugin_browse_body_and_page() {
    let (client, api) = FakeApi::new()
        .reply(
            "POST",
            "/plugins/browse",
            json!({
                "status": "OK",
                "result": [{
                    "pluginId": "plugin-42",
                    "versionId": 7,
                    "name": "WorldEdit",
                    "description": "In-game map editor",
                    "icon": "https://cdn.example.com/worldedit.png",
                    "installable": true
                }],
                "pagination": {"more": false, "total": 1}
            }),
        )
        .start()
        .await;
    client.set_session(SESSION);

    let page = client
        .plugins()
        .browse_page(PluginSearch::new("worldedit"))
        .await
        .unwrap();

    assert_eq!(page.items[0].name, "WorldEdit");
    assert_eq!(page.items[0].version_id, 7);
    assert!(!page.more);
    assert_eq!(
        api.last("/plugins/browse").body,
        json!({
            "filters": {"search": "worldedit"},
            "sort": {"field": "downloads", "order": "desc"},
            "pagination": {"skip": 0, "limit": 25}
        })
    );

    let plugins = client.plugins().browse(PluginSearch::default()).await.unwrap();
    assert_eq!(plugins.len(), 1);
    assert_eq!(api.last("/plugins/browse").body["filters"], json!({"search": ""}));
}
