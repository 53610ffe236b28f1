//! Integration tests for the transactional priority reordering.
//!
//! The invariant under test: after any reorder commits, no two active
//! goods of the same project share a priority.

use std::collections::HashSet;

use sqlx::PgPool;

use goodstack_db::models::good::{Good, NewGood};
use goodstack_db::models::project::CreateProject;
use goodstack_db::repositories::good_repo::GoodRepo;
use goodstack_db::repositories::project_repo::ProjectRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

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

async fn seed_goods(pool: &PgPool, project_id: i64, count: i32) -> Vec<Good> {
    let mut goods = Vec::new();
    for priority in 1..=count {
        let good = GoodRepo::create(
            pool,
            &NewGood {
                project_id,
                name: format!("good-{priority}"),
                description: None,
                priority,
            },
        )
        .await
        .unwrap();
        goods.push(good);
    }
    goods
}

fn assert_distinct_priorities(goods: &[Good]) {
    let priorities: HashSet<i32> = goods.iter().map(|g| g.priority).collect();
    assert_eq!(
        priorities.len(),
        goods.len(),
        "active goods share a priority: {goods:?}"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_shifts_occupant_up(pool: PgPool) {
    let project_id = seed_project(&pool, "Shift").await;
    let goods = seed_goods(&pool, project_id, 3).await;

    // Move the last good into slot 2. The good holding 2 (and everything
    // above) shifts up by one; the good at 1 is untouched.
    let after = GoodRepo::reprioritize(&pool, 2, goods[2].id, project_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.len(), 3);
    assert_eq!(after[0].id, goods[0].id);
    assert_eq!(after[0].priority, 1);
    assert_eq!(after[1].id, goods[2].id);
    assert_eq!(after[1].priority, 2);
    assert_eq!(after[2].id, goods[1].id);
    assert_eq!(after[2].priority, 3);
    assert_distinct_priorities(&after);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_to_front(pool: PgPool) {
    let project_id = seed_project(&pool, "Front").await;
    let goods = seed_goods(&pool, project_id, 4).await;

    let after = GoodRepo::reprioritize(&pool, 1, goods[3].id, project_id)
        .await
        .unwrap()
        .unwrap();

    // The mover takes slot 1, everyone else moves up one.
    let order: Vec<i64> = after.iter().map(|g| g.id).collect();
    assert_eq!(
        order,
        vec![goods[3].id, goods[0].id, goods[1].id, goods[2].id]
    );
    assert_eq!(
        after.iter().map(|g| g.priority).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_skips_removed_rows(pool: PgPool) {
    let project_id = seed_project(&pool, "Removed").await;
    let goods = seed_goods(&pool, project_id, 3).await;

    GoodRepo::mark_removed(&pool, goods[1].id, project_id)
        .await
        .unwrap()
        .unwrap();

    let after = GoodRepo::reprioritize(&pool, 1, goods[2].id, project_id)
        .await
        .unwrap()
        .unwrap();

    // Removed goods are neither shifted nor returned.
    assert_eq!(after.len(), 2);
    assert!(after.iter().all(|g| g.id != goods[1].id));
    assert_distinct_priorities(&after);

    let removed = GoodRepo::find_by_id(&pool, goods[1].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(removed.priority, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_missing_target(pool: PgPool) {
    let project_id = seed_project(&pool, "Missing").await;
    let other_project_id = seed_project(&pool, "Elsewhere").await;
    let goods = seed_goods(&pool, project_id, 2).await;

    // Unknown id.
    let miss = GoodRepo::reprioritize(&pool, 1, 9999, project_id)
        .await
        .unwrap();
    assert!(miss.is_none());

    // Known id, wrong project.
    let miss = GoodRepo::reprioritize(&pool, 1, goods[0].id, other_project_id)
        .await
        .unwrap();
    assert!(miss.is_none());

    // Nothing moved.
    let untouched = GoodRepo::find_by_id(&pool, goods[0].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.priority, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_reorders_keep_priorities_distinct(pool: PgPool) {
    let project_id = seed_project(&pool, "Concurrent").await;
    let goods = seed_goods(&pool, project_id, 5).await;

    // Two reorders race on the same project. Either both commit, or
    // Postgres aborts one as a deadlock victim; the loser is retried.
    let (r1, r2) = tokio::join!(
        GoodRepo::reprioritize(&pool, 2, goods[4].id, project_id),
        GoodRepo::reprioritize(&pool, 3, goods[0].id, project_id),
    );
    if r1.is_err() {
        GoodRepo::reprioritize(&pool, 2, goods[4].id, project_id)
            .await
            .unwrap()
            .unwrap();
    }
    if r2.is_err() {
        GoodRepo::reprioritize(&pool, 3, goods[0].id, project_id)
            .await
            .unwrap()
            .unwrap();
    }

    // Whatever the interleaving, the committed state has no collisions.
    let after = GoodRepo::reprioritize(&pool, 1, goods[1].id, project_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.len(), 5);
    assert_distinct_priorities(&after);
}
