// Postgres repository tests.
//
// These rebuild the `collections` schema, so point DATABASE_URL at a
// scratch database:
//   DATABASE_URL=postgres://... cargo test -p lecheleccion-server -- --ignored --test-threads=1

use lecheleccion_server::{create_pool, BiasStore, DbConfig, DbError, PgStore};
use sqlx::PgPool;

const SCHEMA: &str = include_str!("fixtures/schema.sql");
const NARROW_SCHEMA: &str = include_str!("fixtures/schema_narrow.sql");

async fn scratch_pool() -> PgPool {
    scratch_pool_with(SCHEMA).await
}

async fn scratch_pool_with(schema: &str) -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let config = DbConfig {
        url: Some(url),
        ..DbConfig::default()
    };
    let pool = create_pool(&config).await.expect("pool creation failed");
    sqlx::raw_sql(schema)
        .execute(&pool)
        .await
        .expect("schema setup failed");
    pool
}

async fn insert_article(pool: &PgPool, n: i64) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO collections.articles
            (url, source, publication_date, title, body, external_reference_id)
        VALUES ($1, 'Example Wire', now(), $2, 'body', $3)
        RETURNING id::int8
        "#,
    )
    .bind(format!("https://news.example/{n}"))
    .bind(format!("Story {n}"))
    .bind(n)
    .fetch_one(pool)
    .await
    .expect("insert article");
    id
}

async fn insert_bias(pool: &PgPool, kind: &str, target: i64, scores: [f64; 4]) {
    sqlx::query(
        r#"
        INSERT INTO collections.biases
            (libertarian, green, liberal, conservative, biasable_type, biasable_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(scores[0])
    .bind(scores[1])
    .bind(scores[2])
    .bind(scores[3])
    .bind(kind)
    .bind(target)
    .execute(pool)
    .await
    .expect("insert bias");
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_articles_is_capped() {
    let pool = scratch_pool().await;
    for n in 0..60 {
        insert_article(&pool, n).await;
    }

    let store = PgStore::new(pool);
    let articles = store.list_articles().await.unwrap();
    assert_eq!(articles.len(), 50);
}

#[tokio::test]
#[ignore = "requires database"]
async fn get_article_round_trips_id() {
    let pool = scratch_pool().await;
    let id = insert_article(&pool, 1).await;

    let store = PgStore::new(pool);
    assert_eq!(store.get_article(id).await.unwrap().id, id);

    let err = store.get_article(id + 1000).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "article", .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn averages_cover_whole_table() {
    let pool = scratch_pool().await;
    let store = PgStore::new(pool.clone());

    let empty = store.compute_average_bias().await.unwrap();
    assert_eq!(empty.as_array(), [0.0; 4]);

    for (n, scores) in [
        [0.2, 0.3, 0.1, 0.4],
        [0.4, 0.1, 0.3, 0.2],
        [0.3, 0.2, 0.2, 0.3],
    ]
    .into_iter()
    .enumerate()
    {
        let id = insert_article(&pool, n as i64).await;
        insert_bias(&pool, "Article", id, scores).await;
    }

    let avg = store.compute_average_bias().await.unwrap().as_array();
    for (got, want) in avg.iter().zip([0.3, 0.2, 0.2, 0.3]) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn bias_lookup_respects_discriminator() {
    let pool = scratch_pool().await;
    let id = insert_article(&pool, 1).await;
    insert_bias(&pool, "Comment", id, [0.9; 4]).await;

    let store = PgStore::new(pool.clone());
    let err = store.get_bias(id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "bias", .. }));

    insert_bias(&pool, "Article", id, [0.1, 0.2, 0.3, 0.4]).await;
    let bias = store.get_bias(id).await.unwrap();
    assert_eq!(bias.subject.article_id(), Some(id));
    assert_eq!(bias.scores.as_array(), [0.1, 0.2, 0.3, 0.4]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn users_list_and_get() {
    let pool = scratch_pool().await;
    sqlx::query("INSERT INTO collections.users (name) VALUES ('ana'), ('bruno')")
        .execute(&pool)
        .await
        .unwrap();

    let store = PgStore::new(pool);
    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 2);

    let first = store.get_user(users[0].id).await.unwrap();
    assert_eq!(first, users[0]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn narrow_column_types_decode() {
    let pool = scratch_pool_with(NARROW_SCHEMA).await;
    let id = insert_article(&pool, 7).await;
    insert_bias(&pool, "Article", id, [0.25, 0.5, 0.125, 0.75]).await;
    sqlx::query("INSERT INTO collections.users (name) VALUES ('ana')")
        .execute(&pool)
        .await
        .unwrap();

    let store = PgStore::new(pool);

    let articles = store.list_articles().await.unwrap();
    assert_eq!(articles.len(), 1);
    let article = store.get_article(id).await.unwrap();
    assert_eq!(article.id, id);
    assert_eq!(article.external_reference_id, 7);

    let bias = store.get_bias(id).await.unwrap();
    assert_eq!(bias.subject.article_id(), Some(id));
    assert_eq!(bias.scores.as_array(), [0.25, 0.5, 0.125, 0.75]);

    let avg = store.compute_average_bias().await.unwrap();
    assert_eq!(avg.as_array(), [0.25, 0.5, 0.125, 0.75]);

    let users = store.list_users().await.unwrap();
    assert_eq!(store.get_user(users[0].id).await.unwrap().name, "ana");
}
