//! Slug derivation and uniqueness resolution.
//!
//! A display name is normalized into a lowercase kebab-case candidate key,
//! then resolved against the store: the first absent key wins, colliding
//! candidates grow a short random suffix, and resolution gives up after a
//! fixed number of attempts.

use chrono::Utc;
use rand::Rng;

use crate::config::SlugSettings;
use crate::error::SlugError;
use crate::slug::models::{CreatedSlug, SlugRecord};
use crate::store::KvStore;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone)]
pub struct CreateSlugInput {
    pub name: String,
    pub url: String,
}

/// Normalize a display name into a candidate slug.
///
/// Lowercases, trims, turns whitespace runs into single hyphens, drops
/// everything that is not an ASCII word character or hyphen, collapses
/// hyphen runs, and strips hyphens from both ends. A name with no word
/// characters at all normalizes to the empty string; resolution treats
/// that like any other candidate.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut last_was_hyphen = false;

    for ch in text.to_lowercase().trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
            last_was_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-') && !last_was_hyphen && !slug.is_empty() {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Draw `len` characters uniformly from `[a-z0-9]`.
///
/// Plain `thread_rng` is enough here: the suffix only lowers the odds of
/// re-colliding on retry, the uniqueness guarantee comes from the existence
/// check in [`resolve_unique`].
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

/// Resolve `candidate` to a key that is absent from the store.
///
/// Performs at most `max_attempts` lookups; every collision replaces the
/// key with `candidate-<random suffix>`. The check and the later put are
/// not atomic, so this is best-effort under concurrent creates.
pub async fn resolve_unique(
    store: &dyn KvStore,
    candidate: &str,
    settings: &SlugSettings,
) -> Result<String, SlugError> {
    let mut key = candidate.to_string();

    for _ in 0..settings.max_attempts {
        if store.get(&key).await.map_err(SlugError::Store)?.is_none() {
            return Ok(key);
        }
        key = format!("{candidate}-{}", random_suffix(settings.suffix_len));
    }

    tracing::warn!(candidate, "slug generation exhausted after {} attempts", settings.max_attempts);
    Err(SlugError::GenerationExhausted)
}

/// Validate the input, derive a unique key, and persist the record.
pub async fn create_slug(
    store: &dyn KvStore,
    input: CreateSlugInput,
    settings: &SlugSettings,
) -> Result<CreatedSlug, SlugError> {
    if input.name.is_empty() || input.url.is_empty() {
        return Err(SlugError::MissingField);
    }
    if !input.url.contains(&settings.url_marker) {
        return Err(SlugError::InvalidTargetUrl);
    }

    let candidate = slugify(&input.name);
    let key = resolve_unique(store, &candidate, settings).await?;

    let record = SlugRecord {
        name: input.name,
        url: input.url,
        created_at: Utc::now(),
    };
    let value = serde_json::to_string(&record).map_err(|err| SlugError::Store(err.into()))?;
    store.put(&key, &value).await.map_err(SlugError::Store)?;

    Ok(CreatedSlug { key, record })
}

/// Look up `key` verbatim. Absent keys and unparseable stored values both
/// come back as `NotFound`; corruption is logged, never a crash.
pub async fn fetch_slug(store: &dyn KvStore, key: &str) -> Result<SlugRecord, SlugError> {
    let Some(raw) = store.get(key).await.map_err(SlugError::Store)? else {
        return Err(SlugError::NotFound);
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Ok(record),
        Err(err) => {
            tracing::warn!(key, error = %err, "stored slug value is not valid JSON");
            Err(SlugError::NotFound)
        }
    }
}
