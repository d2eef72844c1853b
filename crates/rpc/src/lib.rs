//! Method-envelope message transport.
//!
//! This crate provides the one-way call plumbing used between a search session
//! and its match engine:
//! * `Envelope`: The `{ method, args }` wire shape and its tolerant parser
//! * `Endpoint`: Method-name handler table that ignores anything it cannot dispatch
//! * `Caller`: Typed call sender for the methods the peer handles
//! * `Port`/`duplex`: A pair of FIFO channels joining two endpoints
//! * `serve`/`serve_blocking`: Loops driving an endpoint from its inbox
//!
//! There are no request ids on the wire. A reply is a differently named call on
//! the reverse channel, so ordering rests on channel FIFO delivery alone.

#![warn(missing_docs)]

pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod link;
pub mod mainloop;
pub mod protocol;

pub use endpoint::{Dispatch, Endpoint};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use link::{Caller, Inbox, Port, duplex};
pub use mainloop::{serve, serve_blocking};
pub use protocol::{Inbound, SequenceGen};
