//! Corpus mutation fan-out and positional index planning.
//!
//! The host publishes create/delete/rename events on a [`CorpusHub`]; each
//! session turns an event into [`IndexOp`]s against its own snapshot with
//! [`plan_corpus_event`], applies them locally and forwards the same ops to its
//! engine in the same order. Because both sides apply identical positional ops
//! in FIFO order, their corpora stay aligned even when contents repeat.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::{DataSource, Record};

/// One host-side change to the searchable corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusEvent<Id> {
	Created(Id),
	Deleted(Id),
	Renamed { old: Id, new: Id },
}

/// Fans corpus events out to every open session.
pub struct CorpusHub<Id> {
	subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<CorpusEvent<Id>>>>>,
}

impl<Id> Clone for CorpusHub<Id> {
	fn clone(&self) -> Self {
		Self {
			subscribers: Arc::clone(&self.subscribers),
		}
	}
}

impl<Id> Default for CorpusHub<Id> {
	fn default() -> Self {
		Self {
			subscribers: Arc::new(Mutex::new(Vec::new())),
		}
	}
}

impl<Id: Clone> CorpusHub<Id> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a session. The subscription ends when the receiver drops.
	pub fn subscribe(&self) -> mpsc::UnboundedReceiver<CorpusEvent<Id>> {
		let (tx, rx) = mpsc::unbounded_channel();
		self.subscribers.lock().push(tx);
		rx
	}

	/// Delivers `event` to every live subscriber, pruning closed ones.
	///
	/// Returns the number of subscribers that received it.
	pub fn publish(&self, event: CorpusEvent<Id>) -> usize {
		let mut subscribers = self.subscribers.lock();
		subscribers.retain(|tx| tx.send(event.clone()).is_ok());
		tracing::trace!(delivered = subscribers.len(), "search.corpus.publish");
		subscribers.len()
	}

	pub fn subscriber_count(&self) -> usize {
		let mut subscribers = self.subscribers.lock();
		subscribers.retain(|tx| !tx.is_closed());
		subscribers.len()
	}
}

/// A positional edit shared by the coordinator snapshot and the engine index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOp<T> {
	/// Append at the end.
	Add(Record<T>),
	/// Remove the record at a position, shifting later records down.
	Remove(usize),
	/// Replace the record at a position.
	Rename(usize, Record<T>),
}

impl<T> IndexOp<T> {
	/// Applies the op to a snapshot. Out-of-range positions are ignored.
	pub fn apply(self, corpus: &mut Vec<Record<T>>) -> bool {
		match self {
			Self::Add(record) => {
				corpus.push(record);
				true
			}
			Self::Remove(position) if position < corpus.len() => {
				corpus.remove(position);
				true
			}
			Self::Rename(position, record) => match corpus.get_mut(position) {
				Some(slot) => {
					*slot = record;
					true
				}
				None => false,
			},
			Self::Remove(_) => false,
		}
	}
}

fn positions_of<S: DataSource>(source: &S, corpus: &[Record<S::Payload>], id: &S::Id) -> Vec<usize> {
	corpus
		.iter()
		.enumerate()
		.filter(|(_, record)| source.id(record) == *id)
		.map(|(position, _)| position)
		.collect()
}

fn removals<T>(mut positions: Vec<usize>) -> impl Iterator<Item = IndexOp<T>> {
	positions.sort_unstable_by(|a, b| b.cmp(a));
	positions.into_iter().map(IndexOp::Remove)
}

/// Plans the ops that bring `corpus` in line with one host event.
///
/// * create appends every record the source yields for the id, unless that id
///   is already present
/// * delete removes every record with the id, highest position first
/// * rename replaces in place when old and new records pair up one-to-one, and
///   otherwise removes the old records and appends the new ones
pub fn plan_corpus_event<S: DataSource>(
	source: &S,
	corpus: &[Record<S::Payload>],
	event: &CorpusEvent<S::Id>,
) -> Vec<IndexOp<S::Payload>> {
	match event {
		CorpusEvent::Created(id) => {
			if !positions_of(source, corpus, id).is_empty() {
				return Vec::new();
			}
			source.records_for(id).into_iter().map(IndexOp::Add).collect()
		}
		CorpusEvent::Deleted(id) => removals(positions_of(source, corpus, id)).collect(),
		CorpusEvent::Renamed { old, new } => {
			let old_positions = positions_of(source, corpus, old);
			let new_present = old != new && !positions_of(source, corpus, new).is_empty();
			let new_records = if new_present { Vec::new() } else { source.records_for(new) };

			if !old_positions.is_empty() && old_positions.len() == new_records.len() {
				return old_positions
					.into_iter()
					.zip(new_records)
					.map(|(position, record)| IndexOp::Rename(position, record))
					.collect();
			}

			removals(old_positions).chain(new_records.into_iter().map(IndexOp::Add)).collect()
		}
	}
}

#[cfg(test)]
mod tests;
