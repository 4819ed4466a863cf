use ticklist_db::TodoRepository;

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn create_and_list_roundtrip() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool);

    let id = repo.create("buy milk").await.unwrap();
    assert!(id > 0);

    let items = repo.list(0, 100).await.unwrap();
    let created = items
        .iter()
        .find(|item| item.id == id)
        .expect("Should find the created item");

    assert_eq!(created.description, "buy milk");
    assert!(!created.completed);
}

#[tokio::test]
async fn update_sets_completed() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool);

    let id = repo.create("water plants").await.unwrap();

    let returned = repo.update(id, "water plants", true).await.unwrap();
    assert_eq!(returned, id);

    let items = repo.list(0, 100).await.unwrap();
    let updated = items.iter().find(|item| item.id == id).unwrap();
    assert!(updated.completed);
}

#[tokio::test]
async fn update_nonexistent_id_still_returns_id() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool);

    // Affected-row count is not checked: the id comes back regardless.
    let returned = repo.update(999_999, "ghost", true).await.unwrap();
    assert_eq!(returned, 999_999);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool);

    let id = repo.create("take out trash").await.unwrap();

    let first = repo.delete(id).await.unwrap();
    let second = repo.delete(id).await.unwrap();
    assert_eq!(first, id);
    assert_eq!(second, id);

    let items = repo.list(0, 100).await.unwrap();
    assert!(items.iter().all(|item| item.id != id));
}

#[tokio::test]
async fn list_paginates_with_skip_and_limit() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool);

    for description in ["one", "two", "three"] {
        repo.create(description).await.unwrap();
    }

    let first_page = repo.list(0, 1).await.unwrap();
    let second_page = repo.list(1, 1).await.unwrap();

    assert_eq!(first_page.len(), 1);
    assert_eq!(second_page.len(), 1);
    assert_ne!(first_page[0].id, second_page[0].id);
}

#[tokio::test]
async fn list_for_user_scopes_by_owner() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool.clone());

    // Owned rows are populated out of band — creation does not set user_id.
    sqlx::query("INSERT INTO todos (user_id, description, completed) VALUES ($1, $2, $3)")
        .bind(1_i64)
        .bind("alice's item")
        .bind(false)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO todos (user_id, description, completed) VALUES ($1, $2, $3)")
        .bind(2_i64)
        .bind("bob's item")
        .bind(true)
        .execute(&pool)
        .await
        .unwrap();
    repo.create("unowned item").await.unwrap();

    let alices = repo.list_for_user(1).await.unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].description, "alice's item");

    let nobodys = repo.list_for_user(99).await.unwrap();
    assert!(nobodys.is_empty());
}

#[tokio::test]
async fn health_check_succeeds() {
    let (pool, _container) = setup_test_db().await;
    let repo = TodoRepository::new(pool);

    repo.health_check().await.unwrap();
}
