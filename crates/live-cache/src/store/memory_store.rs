//! In-memory implementation of the cache store port
//!
//! Mirrors the Redis semantics the derived cache relies on: INCR on a missing key starts
//! from zero, LPUSH prepends, ZREVRANK orders equal scores by descending member bytes.

use std::collections::{BTreeMap, HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use live_core::error::DomainError;
use live_core::traits::{CacheStore, RepoResult};

/// A stored value, as reported by [`MemoryCacheStore::snapshot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheValue {
    String(String),
    List(Vec<String>),
    /// `(member, score)` pairs ordered by member
    SortedSet(Vec<(String, i64)>),
}

#[derive(Debug, Default)]
struct State {
    strings: HashMap<String, String>,
    lists: HashMap<String, VecDeque<String>>,
    sorted_sets: HashMap<String, HashMap<String, i64>>,
    unavailable: bool,
}

impl State {
    fn check(&self) -> RepoResult<()> {
        if self.unavailable {
            return Err(DomainError::CacheError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// In-process cache store
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    state: Mutex<State>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the server were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unavailable = unavailable;
    }

    /// Full contents keyed by cache key, in a stable order for comparisons
    pub fn snapshot(&self) -> BTreeMap<String, CacheValue> {
        let state = self.state.lock();
        let mut out = BTreeMap::new();

        for (key, value) in &state.strings {
            out.insert(key.clone(), CacheValue::String(value.clone()));
        }
        for (key, list) in &state.lists {
            out.insert(key.clone(), CacheValue::List(list.iter().cloned().collect()));
        }
        for (key, set) in &state.sorted_sets {
            let mut members: Vec<(String, i64)> =
                set.iter().map(|(m, s)| (m.clone(), *s)).collect();
            members.sort();
            out.insert(key.clone(), CacheValue::SortedSet(members));
        }
        out
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn ping(&self) -> RepoResult<()> {
        self.state.lock().check()
    }

    async fn flush_all(&self) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check()?;
        state.strings.clear();
        state.lists.clear();
        state.sorted_sets.clear();
        Ok(())
    }

    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        state.check()?;
        Ok(state.strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check()?;
        state.strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn del(&self, key: &str) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check()?;
        state.strings.remove(key);
        state.lists.remove(key);
        state.sorted_sets.remove(key);
        Ok(())
    }

    async fn mset(&self, entries: &[(String, String)]) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check()?;
        for (key, value) in entries {
            state.strings.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    async fn incr(&self, key: &str) -> RepoResult<i64> {
        let mut state = self.state.lock();
        state.check()?;
        let current = match state.strings.get(key) {
            Some(value) => value.parse::<i64>().map_err(|_| {
                DomainError::CacheError("ERR value is not an integer or out of range".to_string())
            })?,
            None => 0,
        };
        let next = current + 1;
        state.strings.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn lpush(&self, key: &str, values: &[String]) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.check()?;
        if values.is_empty() {
            return Ok(());
        }
        let list = state.lists.entry(key.to_string()).or_default();
        for value in values {
            list.push_front(value.clone());
        }
        Ok(())
    }

    async fn lrange_all(&self, key: &str) -> RepoResult<Vec<String>> {
        let state = self.state.lock();
        state.check()?;
        Ok(state
            .lists
            .get(key)
            .map(|list| list.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn zincr(&self, key: &str, member: &str, delta: i64) -> RepoResult<i64> {
        let mut state = self.state.lock();
        state.check()?;
        let score = state
            .sorted_sets
            .entry(key.to_string())
            .or_default()
            .entry(member.to_string())
            .or_insert(0);
        *score += delta;
        Ok(*score)
    }

    async fn zrevrank(&self, key: &str, member: &str) -> RepoResult<Option<u64>> {
        let state = self.state.lock();
        state.check()?;
        let Some(set) = state.sorted_sets.get(key) else {
            return Ok(None);
        };
        if !set.contains_key(member) {
            return Ok(None);
        }

        let mut ordered: Vec<(&String, &i64)> = set.iter().collect();
        ordered.sort_by(|a, b| (b.1, b.0.as_bytes()).cmp(&(a.1, a.0.as_bytes())));
        Ok(ordered
            .iter()
            .position(|(m, _)| m.as_str() == member)
            .map(|p| p as u64))
    }

    async fn zscore(&self, key: &str, member: &str) -> RepoResult<Option<i64>> {
        let state = self.state.lock();
        state.check()?;
        Ok(state
            .sorted_sets
            .get(key)
            .and_then(|set| set.get(member))
            .copied())
    }
}
