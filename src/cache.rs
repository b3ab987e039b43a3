//! Cache de respostas do gateway com TTL e limite de tamanho.
//!
//! Substitui o mapa global e ilimitado da versão original por um objeto
//! explícito, de propriedade do chamador, com relógio injetado (testável) e
//! política de expulsão definida: entradas expiram após o TTL e, quando o
//! limite de entradas é atingido, a mais antiga é removida antes de inserir.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use sha2::{Digest, Sha256};

/// Time source for the cache. Injected so tests can control expiry.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Wall-clock time, the production source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Cache tuning knobs.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an entry stays fresh.
    pub ttl: Duration,
    /// Hard bound on the number of entries.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
            max_entries: 128,
        }
    }
}

/// A cached gateway response.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub text: String,
    pub model: String,
    inserted_at: SystemTime,
}

/// In-memory response cache keyed by a SHA-256 hash of the prompt.
pub struct ResponseCache<C: Clock = SystemClock> {
    config: CacheConfig,
    clock: C,
    entries: HashMap<String, CachedResponse>,
}

impl ResponseCache<SystemClock> {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> ResponseCache<C> {
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached response for this prompt if present and fresh.
    /// An expired entry is removed on access.
    pub fn get(&mut self, prompt: &str) -> Option<CachedResponse> {
        let key = hash_prompt(prompt);
        let now = self.clock.now();
        let ttl = self.config.ttl;

        match self.entries.get(&key) {
            Some(entry) if !is_expired(entry, now, ttl) => Some(entry.clone()),
            Some(_) => {
                self.entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Stores a response, evicting expired entries first and then the
    /// oldest entry if the bound would be exceeded.
    pub fn insert(&mut self, prompt: &str, text: String, model: String) {
        let now = self.clock.now();
        let ttl = self.config.ttl;
        self.entries.retain(|_, entry| !is_expired(entry, now, ttl));

        let key = hash_prompt(prompt);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_entries {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest_key) = oldest {
                self.entries.remove(&oldest_key);
            }
        }

        self.entries.insert(
            key,
            CachedResponse {
                text,
                model,
                inserted_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn is_expired(entry: &CachedResponse, now: SystemTime, ttl: Duration) -> bool {
    match now.duration_since(entry.inserted_at) {
        Ok(elapsed) => elapsed >= ttl,
        // Clock moved backwards; keep the entry.
        Err(_) => false,
    }
}

/// Stable cache key for a prompt.
fn hash_prompt(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::UNIX_EPOCH;

    /// Test clock advanced by hand.
    struct ManualClock {
        offset_secs: Cell<u64>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                offset_secs: Cell::new(0),
            }
        }

        fn advance_secs(&self, secs: u64) {
            self.offset_secs.set(self.offset_secs.get() + secs);
        }
    }

    impl Clock for &ManualClock {
        fn now(&self) -> SystemTime {
            UNIX_EPOCH + Duration::from_secs(self.offset_secs.get())
        }
    }

    fn config(ttl_secs: u64, max_entries: usize) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_secs(ttl_secs),
            max_entries,
        }
    }

    #[test]
    fn hit_returns_stored_response() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(60, 8), &clock);

        cache.insert("gere uma proposta", "texto gerado".into(), "nexia-standard".into());
        let hit = cache.get("gere uma proposta").unwrap();
        assert_eq!(hit.text, "texto gerado");
        assert_eq!(hit.model, "nexia-standard");
    }

    #[test]
    fn miss_for_different_prompt() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(60, 8), &clock);

        cache.insert("prompt a", "a".into(), "m".into());
        assert!(cache.get("prompt b").is_none());
    }

    #[test]
    fn entry_expires_at_ttl() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(60, 8), &clock);

        cache.insert("prompt", "texto".into(), "m".into());
        clock.advance_secs(59);
        assert!(cache.get("prompt").is_some());

        clock.advance_secs(1);
        assert!(cache.get("prompt").is_none());
        // The expired entry was removed on access.
        assert!(cache.is_empty());
    }

    #[test]
    fn never_exceeds_entry_bound() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(600, 3), &clock);

        for i in 0..10 {
            cache.insert(&format!("prompt {i}"), format!("texto {i}"), "m".into());
            assert!(cache.len() <= 3);
        }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(600, 2), &clock);

        cache.insert("primeiro", "1".into(), "m".into());
        clock.advance_secs(1);
        cache.insert("segundo", "2".into(), "m".into());
        clock.advance_secs(1);
        cache.insert("terceiro", "3".into(), "m".into());

        assert!(cache.get("primeiro").is_none());
        assert!(cache.get("segundo").is_some());
        assert!(cache.get("terceiro").is_some());
    }

    #[test]
    fn expired_entries_are_purged_before_eviction() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(10, 2), &clock);

        cache.insert("velho", "1".into(), "m".into());
        clock.advance_secs(11);
        cache.insert("novo a", "2".into(), "m".into());
        cache.insert("novo b", "3".into(), "m".into());

        // "velho" expired, so both fresh entries fit without eviction.
        assert!(cache.get("novo a").is_some());
        assert!(cache.get("novo b").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn reinserting_same_prompt_refreshes_entry() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(60, 2), &clock);

        cache.insert("prompt", "antigo".into(), "m".into());
        clock.advance_secs(30);
        cache.insert("prompt", "novo".into(), "m".into());
        clock.advance_secs(45);

        // 75s after the first insert but 45s after the refresh.
        let hit = cache.get("prompt").unwrap();
        assert_eq!(hit.text, "novo");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let clock = ManualClock::new();
        let mut cache = ResponseCache::with_clock(config(60, 8), &clock);
        cache.insert("prompt", "texto".into(), "m".into());
        cache.clear();
        assert!(cache.is_empty());
    }
}
