//! Live fuzzy-search session coordination.
//!
//! A search UI opens a [`Session`] over a [`DataSource`]. The session owns the
//! corpus snapshot, talks to a match engine running on its own thread, and
//! turns query submissions and host corpus mutations into an ordered stream of
//! [`SessionEvent`]s. Around it:
//! * [`RecencyMemo`]/[`SharedMemo`]: bounded recently-used ids, injected per kind
//! * [`PlaceholderSet`]: named record groups shown for an empty query
//! * [`CorpusHub`]/[`plan_corpus_event`]: keeps every session's engine index in step with the host
//! * [`UiAdapter`]: the closed set of presentation styles
//! * [`SearchApi`]: opens file and command searches with shared memos and settings

mod api;
mod config;
mod error;
mod host;
mod memo;
mod placeholder;
mod record;
mod session;
mod source;
mod sync;
#[cfg(test)]
mod test_host;
mod ui;

pub use api::{CommandSearchOptions, FileSearchOptions, OpenSearch, SearchApi};
pub use config::SearchSettings;
pub use error::{Error, Result};
pub use host::{CommandEntry, FileEntry, Host};
pub use memo::{MAX_MEMO_SIZE, RecencyMemo, SharedMemo};
pub use placeholder::{PlaceholderCategory, PlaceholderGroup, PlaceholderSet};
pub use record::{Record, SearchHit};
pub use session::{Session, SessionConfig, SessionEvent, SessionState};
pub use sift_engine::HighlightSpan;
pub use source::{CommandSource, DataSource, FileSearchKind, FileSource, PlaceholderOptions};
pub use sync::{CorpusEvent, CorpusHub, IndexOp, plan_corpus_event};
pub use ui::{BasicUi, DEFAULT_PREVIEW_CHARS, Preview, PreviewUi, SearchUiKind, UiAdapter, truncate_preview};
