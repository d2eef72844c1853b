//! Live search session coordinator.
//!
//! # Purpose
//!
//! * Turns a stream of query submissions and corpus mutations into an ordered
//!   stream of ranked, highlighted results.
//! * Delegates matching to an engine reachable only through [`sift_rpc`] calls.
//! * Keeps the engine's positional corpus aligned with the session snapshot.
//!
//! # Mental model
//!
//! * One pending slot, one in-flight query:
//!   * `submit_query` overwrites the pending slot.
//!   * a dispatch consumes the slot only when the engine is ready and idle.
//! * Every dispatched `search` carries a sequence number that the engine echoes
//!   in `onSearchFinished`. Only the reply carrying the in-flight number clears
//!   `Running`; anything else is stale and dropped.
//! * The in-flight query holds the corpus `Arc` that was current when it was
//!   sent, so result positions always resolve against the snapshot the engine
//!   searched.
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`Session`] | One open search UI's coordinator | Must never block; all waiting is in `next` | `Session::open` |
//! | [`SessionState`] | Lifecycle phase | `Terminated` is final | `core.rs` handlers |
//! | [`SessionEvent`] | Output pushed to the UI | Results arrive in dispatch order | `on_search_finished` |
//! | [`SessionConfig`] | Selection recording, corpus events, placeholder selection | Memo belongs to the source, never global | caller |
//!
//! # Invariants
//!
//! * Must keep at most one `search` outstanding per session.
//! * Must send only the latest pending query once the outstanding one resolves.
//! * Must ignore replies whose sequence number is not the in-flight one.
//! * Must send `updateIndex` with the full snapshot before the first `search`.
//! * Must forward each corpus op to the engine in the order it is applied locally.
//! * Must ignore every engine message after `destroy`.
//!
//! # Data flow
//!
//! 1. `Session::open` enumerates the source and composes placeholders.
//! 2. Engine signals `ready`; the session sends `updateIndex` then any pending query.
//! 3. `submit_query` fills the slot and dispatches if idle.
//! 4. `onSearchFinished` maps positions to records, emits [`SessionEvent::Results`],
//!    returns to `Idle` and dispatches the slot if filled.
//! 5. Host corpus events are planned into positional ops, applied to the snapshot
//!    and mirrored to the engine.
//!
//! # Lifecycle
//!
//! * Open with `Session::open` when the search UI appears.
//! * Drive with `next().await` or `pump()` from the UI's event loop.
//! * Call `select` or `cancel` on user decision.
//! * Call `destroy` when the UI closes; the engine thread exits once its inbox closes.
//!
//! # Failure modes & recovery
//!
//! * Malformed or unknown engine messages: logged and ignored.
//! * Engine never ready: stays `Uninitialized`; queries keep coalescing.
//! * Engine never replies: stays `Running`; no timeout is applied.
//! * Index drift: detectable only through `request_consistency_check`.

mod core;

pub use self::core::{Session, SessionConfig, SessionEvent, SessionState};
