//! Tests for `MemoryStore` and seed loading.

use movies_core::{
  Genre, Movie, MoviePatch, NewMovie, store::MovieStore,
};
use uuid::Uuid;

use crate::{Error, MemoryStore};

fn new_movie(title: &str, genre: Vec<Genre>) -> Movie {
  Movie::create(NewMovie {
    title: title.into(),
    year: 2001,
    director: "Someone".into(),
    duration: 100,
    poster: "https://example.com/poster.jpg".into(),
    genre,
    rate: 5.0,
  })
}

fn titles(movies: &[Movie]) -> Vec<&str> {
  movies.iter().map(|m| m.title.as_str()).collect()
}

// ─── Seed ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bundled_seed_loads() {
  let s = MemoryStore::seeded().unwrap();
  assert_eq!(s.len().await, 8);

  let first = s.list(None).await.unwrap().remove(0);
  assert_eq!(first.title, "The Shawshank Redemption");
}

#[test]
fn seed_rejects_invalid_records() {
  let json = r#"[{
    "id": "dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
    "title": "Bad",
    "year": 1800,
    "director": "X",
    "duration": 90,
    "poster": "https://example.com/x.jpg",
    "genre": ["Drama"]
  }]"#;
  let err = MemoryStore::from_json_str(json).err().unwrap();
  assert!(
    matches!(&err, Error::InvalidSeed { index: 0, source } if source.has_field("year")),
    "{err}"
  );
}

#[test]
fn seed_rejects_missing_and_duplicate_ids() {
  let err = MemoryStore::from_json_str(r#"[{"title": "No id"}]"#)
    .err()
    .unwrap();
  assert!(matches!(err, Error::MissingId { index: 0 }));

  let record = r#"{
    "id": "dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
    "title": "Twice",
    "year": 1999,
    "director": "X",
    "duration": 90,
    "poster": "https://example.com/x.jpg",
    "genre": ["Drama"]
  }"#;
  let err = MemoryStore::from_json_str(&format!("[{record},{record}]"))
    .err()
    .unwrap();
  assert!(matches!(err, Error::DuplicateId(_)));
}

#[tokio::test]
async fn seed_defaults_missing_rate() {
  let json = r#"[{
    "id": "dcdd0fad-a94c-4810-8acc-5f108d3b18c3",
    "title": "Unrated",
    "year": 1999,
    "director": "X",
    "duration": 90,
    "poster": "https://example.com/x.jpg",
    "genre": ["Drama"]
  }]"#;
  let s = MemoryStore::from_json_str(json).unwrap();
  let movies = s.list(None).await.unwrap();
  assert_eq!(movies[0].rate, 5.0);
}

#[tokio::test]
async fn from_json_file_missing_path_is_io_error() {
  let err = MemoryStore::from_json_file("/nonexistent/movies.json")
    .await
    .err()
    .unwrap();
  assert!(matches!(err, Error::Io(_)));
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_without_filter_preserves_insertion_order() {
  let s = MemoryStore::new();
  for title in ["A", "B", "C"] {
    s.insert(new_movie(title, vec![Genre::Drama])).await.unwrap();
  }
  let all = s.list(None).await.unwrap();
  assert_eq!(titles(&all), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn list_filters_by_genre_case_insensitively() {
  let s = MemoryStore::with_movies(vec![
    new_movie("One", vec![Genre::Comedy]),
    new_movie("Two", vec![Genre::Horror]),
    new_movie("Three", vec![Genre::Drama, Genre::Comedy]),
  ]);

  let comedies = s.list(Some("comedy".into())).await.unwrap();
  assert_eq!(titles(&comedies), vec!["One", "Three"]);

  let comedies = s.list(Some("COMEDY".into())).await.unwrap();
  assert_eq!(titles(&comedies), vec!["One", "Three"]);
}

#[tokio::test]
async fn list_unknown_genre_is_empty() {
  let s = MemoryStore::seeded().unwrap();
  assert!(s.list(Some("western".into())).await.unwrap().is_empty());
}

// ─── Get / insert ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_then_get() {
  let s = MemoryStore::new();
  let movie = new_movie("Fresh", vec![Genre::Thriller]);
  s.insert(movie.clone()).await.unwrap();

  assert_eq!(s.get(movie.id).await.unwrap(), Some(movie));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = MemoryStore::seeded().unwrap();
  assert!(s.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn clones_share_state() {
  let a = MemoryStore::new();
  let b = a.clone();
  a.insert(new_movie("Shared", vec![Genre::Crime])).await.unwrap();
  assert_eq!(b.len().await, 1);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_once() {
  let s = MemoryStore::new();
  let movie = new_movie("Doomed", vec![Genre::Horror]);
  s.insert(movie.clone()).await.unwrap();

  assert!(s.delete(movie.id).await.unwrap());
  assert!(s.get(movie.id).await.unwrap().is_none());
  assert!(!s.delete(movie.id).await.unwrap());
  assert!(s.is_empty().await);
}

#[tokio::test]
async fn delete_keeps_order_of_remaining() {
  let a = new_movie("A", vec![Genre::Drama]);
  let b = new_movie("B", vec![Genre::Drama]);
  let c = new_movie("C", vec![Genre::Drama]);
  let s = MemoryStore::with_movies(vec![a, b.clone(), c]);

  s.delete(b.id).await.unwrap();
  assert_eq!(titles(&s.list(None).await.unwrap()), vec!["A", "C"]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_patch() {
  let s = MemoryStore::new();
  let movie = new_movie("Patchable", vec![Genre::Fantasy]);
  s.insert(movie.clone()).await.unwrap();

  let updated = s
    .update(movie.id, MoviePatch {
      rate: Some(9.0),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.rate, 9.0);
  assert_eq!(updated.title, movie.title);
  assert_eq!(updated.genre, movie.genre);
  assert_eq!(s.get(movie.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = MemoryStore::seeded().unwrap();
  let result = s
    .update(Uuid::new_v4(), MoviePatch::default())
    .await
    .unwrap();
  assert!(result.is_none());
}
