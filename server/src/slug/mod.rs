pub mod engine;
pub mod models;

pub use engine::{CreateSlugInput, create_slug, fetch_slug, resolve_unique, slugify};
pub use models::{CreatedSlug, SlugRecord};
