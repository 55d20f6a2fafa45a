use std::sync::Arc;

use stratus_client::{Client, Config, Error, Guid, PageQuery};
use stratus_fake::{ControllerState, FakeCloudController, SequenceGuidSource};

const TOKEN: &str = "token-abc";

async fn test_client() -> (FakeCloudController, Client) {
    let server = FakeCloudController::spawn()
        .await
        .expect("failed to spawn fake controller");
    let client = Client::new(Config::new(server.url()));
    (server, client)
}

async fn seed_users(client: &Client, n: usize) -> Vec<Guid> {
    let mut guids = Vec::with_capacity(n);
    for i in 0..n {
        let guid = Guid::new(format!("user-{i:03}"));
        client
            .users()
            .create(&guid, TOKEN)
            .await
            .expect("failed to create user");
        guids.push(guid);
    }
    guids
}

#[tokio::test]
async fn created_organization_can_be_fetched_back() {
    let (_server, client) = test_client().await;

    let created = client
        .organizations()
        .create("my-new-org", TOKEN)
        .await
        .unwrap();
    assert_eq!(created.name, "my-new-org");
    assert!(!created.guid.is_empty());
    assert_eq!(created.url, format!("/v2/organizations/{}", created.guid));

    let fetched = client
        .organizations()
        .get(&created.guid, TOKEN)
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn getting_an_unknown_organization_is_not_found() {
    let (_server, client) = test_client().await;

    let err = client
        .organizations()
        .get(&Guid::new("org-does-not-exist"), TOKEN)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn associated_users_show_up_in_the_listing() {
    let (_server, client) = test_client().await;
    let orgs = client.organizations();

    let org = orgs.create("test-org", TOKEN).await.unwrap();
    let users = seed_users(&client, 3).await;

    orgs.associate_user(&org.guid, &users[0], TOKEN).await.unwrap();
    orgs.associate_user(&org.guid, &users[1], TOKEN).await.unwrap();

    let page = orgs
        .list_users(&org.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total_results, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.next_url, None);
    assert_eq!(page.prev_url, None);

    let listed: Vec<_> = page.resources.iter().map(|u| u.guid.clone()).collect();
    assert_eq!(listed, vec![users[0].clone(), users[1].clone()]);
}

#[tokio::test]
async fn member_roles_are_tracked_separately() {
    let (_server, client) = test_client().await;
    let orgs = client.organizations();

    let org = orgs.create("test-org", TOKEN).await.unwrap();
    let users = seed_users(&client, 3).await;

    orgs.associate_billing_manager(&org.guid, &users[0], TOKEN).await.unwrap();
    orgs.associate_billing_manager(&org.guid, &users[1], TOKEN).await.unwrap();
    orgs.associate_auditor(&org.guid, &users[2], TOKEN).await.unwrap();
    orgs.associate_manager(&org.guid, &users[2], TOKEN).await.unwrap();

    let billing = orgs
        .list_billing_managers(&org.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(billing.total_results, 2);

    let auditors = orgs
        .list_auditors(&org.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(auditors.total_results, 1);
    assert_eq!(auditors.resources[0].guid, users[2]);

    let managers = orgs
        .list_managers(&org.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(managers.total_results, 1);

    let plain = orgs
        .list_users(&org.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(plain.total_results, 0);
    assert_eq!(plain.total_pages, 0);
}

#[tokio::test]
async fn associating_is_idempotent() {
    let (_server, client) = test_client().await;
    let orgs = client.organizations();

    let org = orgs.create("test-org", TOKEN).await.unwrap();
    let users = seed_users(&client, 1).await;

    orgs.associate_user(&org.guid, &users[0], TOKEN).await.unwrap();
    orgs.associate_user(&org.guid, &users[0], TOKEN).await.unwrap();

    let page = orgs
        .list_users(&org.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total_results, 1);
}

#[tokio::test]
async fn listing_users_of_an_unknown_organization_is_not_found() {
    let (_server, client) = test_client().await;

    let err = client
        .organizations()
        .list_users(&Guid::new("org-does-not-exist"), TOKEN, PageQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn associating_an_unknown_user_is_not_found() {
    let (_server, client) = test_client().await;
    let orgs = client.organizations();

    let org = orgs.create("test-org", TOKEN).await.unwrap();
    let err = orgs
        .associate_user(&org.guid, &Guid::new("user-does-not-exist"), TOKEN)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn listings_paginate_with_next_and_previous_urls() {
    let (_server, client) = test_client().await;
    let orgs = client.organizations();

    let org = orgs.create("big-org", TOKEN).await.unwrap();
    for guid in seed_users(&client, 25).await {
        orgs.associate_user(&org.guid, &guid, TOKEN).await.unwrap();
    }

    let page = orgs
        .list_users(&org.guid, TOKEN, PageQuery::new(2, 10))
        .await
        .unwrap();
    assert_eq!(page.total_results, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.resources.len(), 10);

    let base = format!("/v2/organizations/{}/users", org.guid);
    assert_eq!(
        page.next_url.as_deref(),
        Some(format!("{base}?page=3&results-per-page=10").as_str())
    );
    assert_eq!(
        page.prev_url.as_deref(),
        Some(format!("{base}?page=1&results-per-page=10").as_str())
    );

    // Past the end: empty window, counts intact.
    let past = orgs
        .list_users(&org.guid, TOKEN, PageQuery::new(5, 10))
        .await
        .unwrap();
    assert_eq!(past.total_results, 25);
    assert_eq!(past.total_pages, 3);
    assert!(past.resources.is_empty());
    assert_eq!(past.next_url, None);
}

#[tokio::test]
async fn space_lifecycle_create_fetch_list_developers() {
    let (_server, client) = test_client().await;

    let org = client.organizations().create("test-org", TOKEN).await.unwrap();
    let spaces = client.spaces();

    let space = spaces.create("development", &org.guid, TOKEN).await.unwrap();
    assert_eq!(space.name, "development");
    assert_eq!(space.organization_guid, org.guid);
    assert_eq!(space.organization_url, format!("/v2/organizations/{}", org.guid));
    assert_eq!(space.developers_url, format!("/v2/spaces/{}/developers", space.guid));

    let fetched = spaces.get(&space.guid, TOKEN).await.unwrap();
    assert_eq!(fetched, space);

    let users = seed_users(&client, 2).await;
    spaces
        .associate_developer(&space.guid, &users[0], TOKEN)
        .await
        .unwrap();
    spaces
        .associate_developer(&space.guid, &users[1], TOKEN)
        .await
        .unwrap();

    let page = spaces
        .list_developers(&space.guid, TOKEN, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total_results, 2);
    assert_eq!(page.total_pages, 1);
    let listed: Vec<_> = page.resources.iter().map(|u| u.guid.clone()).collect();
    assert_eq!(listed, users);
}

#[tokio::test]
async fn creating_a_space_in_an_unknown_organization_is_not_found() {
    let (_server, client) = test_client().await;

    let err = client
        .spaces()
        .create("development", &Guid::new("org-does-not-exist"), TOKEN)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn users_are_created_with_caller_supplied_guids() {
    let (_server, client) = test_client().await;
    let users = client.users();

    let created = users.create(&Guid::new("user-123"), TOKEN).await.unwrap();
    assert_eq!(created.guid, Guid::new("user-123"));
    assert_eq!(created.url, "/v2/users/user-123");
    assert!(created.active);
    assert!(!created.admin);

    let fetched = users.get(&created.guid, TOKEN).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn application_lifecycle_create_fetch_summary() {
    let (_server, client) = test_client().await;

    let org = client.organizations().create("test-org", TOKEN).await.unwrap();
    let space = client
        .spaces()
        .create("development", &org.guid, TOKEN)
        .await
        .unwrap();

    let apps = client.applications();
    let app = apps.create("my-app", &space.guid, true, TOKEN).await.unwrap();
    assert_eq!(app.name, "my-app");
    assert_eq!(app.space_guid, space.guid);
    assert!(app.diego);

    let fetched = apps.get(&app.guid, TOKEN).await.unwrap();
    assert_eq!(fetched, app);

    let summary = apps.summary(&app.guid, TOKEN).await.unwrap();
    assert_eq!(summary.guid, app.guid);
    assert_eq!(summary.name, "my-app");
    assert_eq!(summary.space_guid, space.guid);

    let err = apps
        .summary(&Guid::new("app-does-not-exist"), TOKEN)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn sequence_guid_source_makes_guids_deterministic() {
    let state = ControllerState::new(Arc::new(SequenceGuidSource::default()));
    let server = FakeCloudController::spawn_with_state(state)
        .await
        .expect("failed to spawn fake controller");
    let client = Client::new(Config::new(server.url()));

    let org = client.organizations().create("first", TOKEN).await.unwrap();
    assert_eq!(org.guid, Guid::new("org-001"));

    let other = client.organizations().create("second", TOKEN).await.unwrap();
    assert_eq!(other.guid, Guid::new("org-002"));
}
