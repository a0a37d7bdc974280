//! Harvest domain: items, matchers, session state and operator commands

mod command;
mod export;
mod item;
mod matcher;
mod session;

pub use command::{OperatorCommand, ALL_COMMANDS};
pub use export::{parse_export, render_export};
pub use item::{placeholder_title, CollectedItem, Discovery, ExportedItem};
pub use matcher::{
    EmbedMatcher, MediaMatcher, SubstringMatcher, DEFAULT_EMBED_HOST, DEFAULT_MEDIA_EXTENSION,
    DEFAULT_MEDIA_MARKER, DEFAULT_TITLE_SELECTOR,
};
pub use session::{HarvestSession, PollOutcome, PollState};
