//! Integration tests for goods CRUD against a real database.
//!
//! Exercises the repository layer:
//! - Create / find round-trips
//! - COALESCE semantics of the name/description update
//! - Soft-delete behaviour and repeat deletes
//! - Priority and listing helpers (max_priority, count, max_id)

use sqlx::PgPool;

use goodstack_db::models::good::NewGood;
use goodstack_db::models::project::CreateProject;
use goodstack_db::repositories::good_repo::GoodRepo;
use goodstack_db::repositories::project_repo::ProjectRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_good(project_id: i64, name: &str, priority: i32) -> NewGood {
    NewGood {
        project_id,
        name: name.to_string(),
        description: Some(format!("{name} description")),
        priority,
    }
}

async fn seed_project(pool: &PgPool, name: &str) -> i64 {
    ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_project_exists(pool: PgPool) {
    // The first migration seeds one project so goods can be created
    // against a fresh database.
    let project = ProjectRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(project.name, "First entry");
    assert!(ProjectRepo::exists(&pool, 1).await.unwrap());
    assert!(!ProjectRepo::exists(&pool, 999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_round_trip(pool: PgPool) {
    let project_id = seed_project(&pool, "Round Trip").await;

    let created = GoodRepo::create(&pool, &new_good(project_id, "Widget", 1))
        .await
        .unwrap();
    assert_eq!(created.name, "Widget");
    assert_eq!(created.priority, 1);
    assert!(!created.removed);

    let found = GoodRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);

    assert!(GoodRepo::find_by_id(&pool, created.id + 1000)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_keeps_description_when_absent(pool: PgPool) {
    let project_id = seed_project(&pool, "Update Coalesce").await;
    let good = GoodRepo::create(&pool, &new_good(project_id, "Widget", 1))
        .await
        .unwrap();

    // No description in the payload: name changes, description stays.
    let updated = GoodRepo::update_name_desc(&pool, good.id, project_id, "Gadget", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.description.as_deref(), Some("Widget description"));

    // An explicit empty string is written as-is.
    let cleared = GoodRepo::update_name_desc(&pool, good.id, project_id, "Gadget", Some(""))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.description.as_deref(), Some(""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_project_scoped(pool: PgPool) {
    let project_id = seed_project(&pool, "Scoped Update").await;
    let other_project_id = seed_project(&pool, "Other").await;
    let good = GoodRepo::create(&pool, &new_good(project_id, "Widget", 1))
        .await
        .unwrap();

    // Wrong project: no row matches, nothing changes.
    let miss = GoodRepo::update_name_desc(&pool, good.id, other_project_id, "Hijacked", None)
        .await
        .unwrap();
    assert!(miss.is_none());

    let untouched = GoodRepo::find_by_id(&pool, good.id).await.unwrap().unwrap();
    assert_eq!(untouched.name, "Widget");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_removed_once(pool: PgPool) {
    let project_id = seed_project(&pool, "Soft Delete").await;
    let good = GoodRepo::create(&pool, &new_good(project_id, "Widget", 1))
        .await
        .unwrap();

    let removed = GoodRepo::mark_removed(&pool, good.id, project_id)
        .await
        .unwrap()
        .unwrap();
    assert!(removed.removed);

    // Removed rows stay addressable by id.
    let found = GoodRepo::find_by_id(&pool, good.id).await.unwrap().unwrap();
    assert!(found.removed);

    // A second delete matches no active row.
    let again = GoodRepo::mark_removed(&pool, good.id, project_id)
        .await
        .unwrap();
    assert!(again.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_max_priority_ignores_removed(pool: PgPool) {
    let project_id = seed_project(&pool, "Max Priority").await;

    assert_eq!(GoodRepo::max_priority(&pool, project_id).await.unwrap(), 0);

    GoodRepo::create(&pool, &new_good(project_id, "First", 1))
        .await
        .unwrap();
    let second = GoodRepo::create(&pool, &new_good(project_id, "Second", 2))
        .await
        .unwrap();
    assert_eq!(GoodRepo::max_priority(&pool, project_id).await.unwrap(), 2);

    // Removing the highest-priority good lowers the maximum.
    GoodRepo::mark_removed(&pool, second.id, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(GoodRepo::max_priority(&pool, project_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_and_max_id(pool: PgPool) {
    assert_eq!(GoodRepo::count(&pool).await.unwrap(), 0);
    assert!(GoodRepo::max_id(&pool).await.unwrap().is_none());

    let project_id = seed_project(&pool, "Counters").await;
    let a = GoodRepo::create(&pool, &new_good(project_id, "A", 1))
        .await
        .unwrap();
    let b = GoodRepo::create(&pool, &new_good(project_id, "B", 2))
        .await
        .unwrap();
    GoodRepo::mark_removed(&pool, a.id, project_id)
        .await
        .unwrap()
        .unwrap();

    // count includes removed rows; max_id tracks the highest assigned id.
    assert_eq!(GoodRepo::count(&pool).await.unwrap(), 2);
    assert_eq!(GoodRepo::max_id(&pool).await.unwrap(), Some(b.id));
}
