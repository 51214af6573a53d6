//! Property-Based Tests for the cache layer
//!
//! Uses proptest against the TTL cache primitive and the cached repository.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::{BookListCache, TtlCache};
use crate::models::NewBook;
use crate::store::{BookRepository, CachedBookRepository, SqliteBookStore};

const LONG_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, value: u32 },
    Get { key: String },
    Invalidate { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Insert { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
    ]
}

/// Mutations and reads issued against the cached repository. Ids are picked
/// by index into the currently known ids so most of them hit real rows.
#[derive(Debug, Clone)]
enum RepoOp {
    Create { title: String },
    Update { pick: usize, title: String },
    Delete { pick: usize },
    Get { pick: usize },
    List,
}

fn repo_op_strategy() -> impl Strategy<Value = RepoOp> {
    prop_oneof![
        "[A-Za-z ]{1,16}".prop_map(|title| RepoOp::Create { title }),
        (any::<usize>(), "[A-Za-z ]{1,16}")
            .prop_map(|(pick, title)| RepoOp::Update { pick, title }),
        any::<usize>().prop_map(|pick| RepoOp::Delete { pick }),
        any::<usize>().prop_map(|pick| RepoOp::Get { pick }),
        Just(RepoOp::List),
    ]
}

fn pick_id(ids: &[i64], pick: usize) -> i64 {
    if ids.is_empty() {
        1
    } else {
        ids[pick % ids.len()]
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Statistics track every lookup, and residency never exceeds capacity.
    #[test]
    fn prop_statistics_and_capacity(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let capacity = 8;
        let mut cache = TtlCache::new(capacity, LONG_TTL);
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => cache.insert(key, value),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Invalidate { key } => {
                    cache.invalidate(&key);
                }
            }
            prop_assert!(cache.len() <= capacity);
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, cache.len());
    }

    // Whatever was written last under a key is what a lookup returns, and an
    // invalidated key stays absent until written again.
    #[test]
    fn prop_last_write_wins_and_invalidation_sticks(
        key in key_strategy(),
        values in prop::collection::vec(any::<u32>(), 1..10)
    ) {
        let mut cache = TtlCache::new(4, LONG_TTL);

        for value in &values {
            cache.insert(key.clone(), *value);
        }
        prop_assert_eq!(cache.get(&key), values.last().copied());

        prop_assert!(cache.invalidate(&key));
        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(!cache.invalidate(&key));
    }

    // Filling past capacity evicts the least recently used key first.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::vec(key_strategy(), 2..10),
        new_key in key_strategy()
    ) {
        let unique: Vec<String> = keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        prop_assume!(unique.len() >= 2);
        prop_assume!(!unique.contains(&new_key));

        let mut cache = TtlCache::new(unique.len(), LONG_TTL);
        for (i, key) in unique.iter().enumerate() {
            cache.insert(key.clone(), i);
        }

        // Reading the oldest key makes the second one the eviction candidate
        prop_assert!(cache.get(&unique[0]).is_some());
        cache.insert(new_key.clone(), usize::MAX);

        prop_assert_eq!(cache.len(), unique.len());
        prop_assert!(cache.get(&unique[1]).is_none());
        prop_assert!(cache.get(&unique[0]).is_some());
        prop_assert!(cache.get(&new_key).is_some());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(25))]

    // No stale list survives a mutation: after every operation the cached
    // list equals what the store itself returns.
    #[test]
    fn prop_cached_list_matches_store(ops in prop::collection::vec(repo_op_strategy(), 1..30)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let store = SqliteBookStore::in_memory().await.unwrap();
            let repo = CachedBookRepository::new(
                store,
                BookListCache::new(100, LONG_TTL),
            );
            let mut ids: Vec<i64> = Vec::new();

            for op in ops {
                match op {
                    RepoOp::Create { title } => {
                        let book = repo
                            .create(NewBook::new(title, "Author", "2000"))
                            .await
                            .unwrap();
                        ids.push(book.id);
                    }
                    RepoOp::Update { pick, title } => {
                        let _ = repo
                            .update(pick_id(&ids, pick), NewBook::new(title, "Editor", "2001"))
                            .await;
                    }
                    RepoOp::Delete { pick } => {
                        let id = pick_id(&ids, pick);
                        if repo.delete(id).await.is_ok() {
                            ids.retain(|known| *known != id);
                        }
                    }
                    RepoOp::Get { pick } => {
                        let _ = repo.get(pick_id(&ids, pick)).await;
                    }
                    RepoOp::List => {}
                }

                let cached = repo.list_all().await.unwrap();
                let fresh = repo.inner().list_all().await.unwrap();
                assert_eq!(cached, fresh);
            }
        });
    }
}
