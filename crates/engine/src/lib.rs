//! Match engine side of a search session.
//!
//! The engine is opaque to the coordinator: it owns a positional copy of the
//! corpus, answers searches with ranked positions plus highlight spans, and is
//! reachable only through [`sift_rpc`] calls. This crate provides:
//! * [`MatchEngine`]: the engine contract
//! * [`CorpusIndex`]: positional add/remove/rename semantics shared with the coordinator
//! * [`NucleoEngine`]: the reference fuzzy engine
//! * [`spawn_engine`]: runs any engine on its own thread behind a [`sift_rpc::Port`]

mod engine;
mod highlight;
mod host;
mod index;
mod nucleo;
pub mod protocol;

pub use engine::MatchEngine;
pub use highlight::spans_from_indices;
pub use host::{EngineFactory, spawn_engine};
pub use index::CorpusIndex;
pub use nucleo::{DEFAULT_RESULT_LIMIT, NucleoEngine};
pub use protocol::{HighlightSpan, MatchResult};
