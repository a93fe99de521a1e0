//! Integration tests for the repository layer.
//!
//! Exercises the repositories against a real database:
//! - Director/movie/review lifecycle
//! - Joined read views
//! - Review/rating pairing on update and delete
//! - Foreign key violations

use assert_matches::assert_matches;
use reel_db::models::director::{CreateDirector, UpdateDirector};
use reel_db::models::movie::{CreateMovie, UpdateMovie};
use reel_db::models::review::{CreateReview, UpdateReview};
use reel_db::repositories::{DirectorRepo, MovieRepo, RatingRepo, ReviewRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_director(name: &str) -> CreateDirector {
    CreateDirector {
        name: name.to_string(),
        age: None,
        gender: None,
    }
}

fn new_movie(director_id: i64, title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        director_id,
    }
}

fn new_review(rating: i32, text: &str) -> CreateReview {
    CreateReview {
        rating,
        review: Some(text.to_string()),
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

// ---------------------------------------------------------------------------
// Directors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_list_directors(pool: PgPool) {
    let created = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Agnes Varda".into(),
            age: Some(90),
            gender: Some("Female".into()),
        },
    )
    .await
    .unwrap();

    let all = DirectorRepo::list(&pool).await.unwrap();
    assert_eq!(all, vec![created.clone()]);

    let found = DirectorRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.as_ref().and_then(|d| d.age), Some(90));
    assert_eq!(found.and_then(|d| d.gender).as_deref(), Some("Female"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_keeps_absent_fields(pool: PgPool) {
    let created = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Wong Kar-wai".into(),
            age: Some(60),
            gender: Some("Male".into()),
        },
    )
    .await
    .unwrap();

    let updated = DirectorRepo::update(
        &pool,
        created.id,
        &UpdateDirector {
            age: Some(Some(61)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Wong Kar-wai");
    assert_eq!(updated.age, Some(61));
    assert_eq!(updated.gender.as_deref(), Some("Male"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_with_explicit_null_clears_optional_fields(pool: PgPool) {
    let created = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Claire Denis".into(),
            age: Some(77),
            gender: Some("Female".into()),
        },
    )
    .await
    .unwrap();

    let updated = DirectorRepo::update(
        &pool,
        created.id,
        &UpdateDirector {
            name: None,
            age: Some(None),
            gender: Some(None),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Claire Denis");
    assert_eq!(updated.age, None);
    assert_eq!(updated.gender, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_director_returns_none(pool: PgPool) {
    let result = DirectorRepo::update(&pool, 999_999, &UpdateDirector::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_director(pool: PgPool) {
    let created = DirectorRepo::create(&pool, &new_director("Gone")).await.unwrap();

    assert!(DirectorRepo::delete(&pool, created.id).await.unwrap());
    assert!(!DirectorRepo::delete(&pool, created.id).await.unwrap());
    assert!(!DirectorRepo::exists(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_director_with_movies_is_refused(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("Busy")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(director.id, "Film")).await.unwrap();

    let err = DirectorRepo::delete(&pool, director.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err), "unexpected error: {err}");
    assert!(DirectorRepo::exists(&pool, director.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_movie_insert_with_unknown_director_violates_fk(pool: PgPool) {
    let err = MovieRepo::create(&pool, &new_movie(999_999, "Orphan"))
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err), "unexpected error: {err}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_with_director_resolves_name(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("Christopher Nolan"))
        .await
        .unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Inception"))
        .await
        .unwrap();

    let listed = MovieRepo::list_with_director(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, movie.id);
    assert_eq!(listed[0].director, "Christopher Nolan");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_director_scopes_and_handles_unknown(pool: PgPool) {
    let a = DirectorRepo::create(&pool, &new_director("A")).await.unwrap();
    let b = DirectorRepo::create(&pool, &new_director("B")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(a.id, "A1")).await.unwrap();
    MovieRepo::create(&pool, &new_movie(a.id, "A2")).await.unwrap();

    let titles: Vec<_> = MovieRepo::list_by_director(&pool, a.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["A1", "A2"]);

    assert!(MovieRepo::list_by_director(&pool, b.id).await.unwrap().is_empty());
    assert!(MovieRepo::list_by_director(&pool, 999_999).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_movie_director(pool: PgPool) {
    let first = DirectorRepo::create(&pool, &new_director("First")).await.unwrap();
    let second = DirectorRepo::create(&pool, &new_director("Second")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(first.id, "Moved")).await.unwrap();

    MovieRepo::update(
        &pool,
        movie.id,
        &UpdateMovie {
            title: None,
            director_id: Some(second.id),
        },
    )
    .await
    .unwrap()
    .unwrap();

    let detail = MovieRepo::find_detail(&pool, movie.id).await.unwrap().unwrap();
    assert_eq!(detail.title, "Moved");
    assert_eq!(detail.director_id, second.id);
    assert_eq!(detail.director, "Second");
}

// ---------------------------------------------------------------------------
// Reviews and ratings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_review_pairs_rating(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("D")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Heat")).await.unwrap();

    let view = ReviewRepo::create(&pool, movie.id, &new_review(4, "Tense"))
        .await
        .unwrap();
    assert_eq!(view.rating, 4);
    assert_eq!(view.review.as_deref(), Some("Tense"));
    assert_eq!(view.movie_title, "Heat");

    let review = ReviewRepo::find_by_id(&pool, view.id).await.unwrap().unwrap();
    let rating = RatingRepo::find_by_id(&pool, review.rating_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rating.movie_id, movie.id);
    assert_eq!(rating.rating, 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_review_for_unknown_movie_leaves_no_rating(pool: PgPool) {
    let err = ReviewRepo::create(&pool, 999_999, &new_review(3, "Nowhere"))
        .await
        .unwrap_err();
    assert!(is_foreign_key_violation(&err), "unexpected error: {err}");
    assert!(RatingRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_review_rating_in_place(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("D")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Alien")).await.unwrap();
    let view = ReviewRepo::create(&pool, movie.id, &new_review(2, "Meh"))
        .await
        .unwrap();

    let updated = ReviewRepo::update(
        &pool,
        view.id,
        &UpdateReview {
            review: None,
            rating: Some(5),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.rating, 5);
    assert_eq!(updated.review.as_deref(), Some("Meh"));
    assert_eq!(RatingRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_review_with_null_text_clears_it(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("D")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Heat")).await.unwrap();
    let view = ReviewRepo::create(&pool, movie.id, &new_review(4, "Tense"))
        .await
        .unwrap();

    let updated = ReviewRepo::update(
        &pool,
        view.id,
        &UpdateReview {
            review: Some(None),
            rating: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.review, None);
    assert_eq!(updated.rating, 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_review_returns_none(pool: PgPool) {
    let result = ReviewRepo::update(&pool, 999_999, &UpdateReview::default())
        .await
        .unwrap();
    assert_matches!(result, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_review_removes_rating(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("D")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Up")).await.unwrap();
    let keep = ReviewRepo::create(&pool, movie.id, &new_review(5, "Keep"))
        .await
        .unwrap();
    let gone = ReviewRepo::create(&pool, movie.id, &new_review(1, "Gone"))
        .await
        .unwrap();

    assert!(ReviewRepo::delete(&pool, gone.id).await.unwrap());
    assert!(!ReviewRepo::delete(&pool, gone.id).await.unwrap());

    let reviews = ReviewRepo::list(&pool).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, keep.id);

    let ratings = RatingRepo::list(&pool).await.unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].id, reviews[0].rating_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_movie_with_reviews_is_refused(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("D")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Kept")).await.unwrap();
    ReviewRepo::create(&pool, movie.id, &new_review(3, "Fine"))
        .await
        .unwrap();

    let err = MovieRepo::delete(&pool, movie.id).await.unwrap_err();
    assert!(is_foreign_key_violation(&err), "unexpected error: {err}");
    assert!(MovieRepo::find_by_id(&pool, movie.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_movie_exists(pool: PgPool) {
    let director = DirectorRepo::create(&pool, &new_director("D")).await.unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(director.id, "Ran")).await.unwrap();

    assert!(MovieRepo::exists(&pool, movie.id).await.unwrap());
    assert!(!MovieRepo::exists(&pool, movie.id + 1).await.unwrap());

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(!MovieRepo::exists(&pool, movie.id).await.unwrap());
}
