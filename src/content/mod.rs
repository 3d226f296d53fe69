//! Content module - MDX entries, front matter and records

mod frontmatter;
pub mod loader;
mod record;

pub use frontmatter::{Metadata, Tag, TeamMember};
pub use loader::{get_posts, list_entries, list_entries_with_extension, ContentLoader};
pub use record::{find_by_slug, sort_by_published, ContentRecord};
