use std::sync::Arc;

use super::{DataSource, PlaceholderOptions};
use crate::{CommandEntry, Host, PlaceholderCategory, PlaceholderSet, Record, SharedMemo};

pub(crate) const RECENTLY_USED: &str = "Recently used";

/// Host commands, matched on display name and identified by command id.
pub struct CommandSource<H> {
	host: Arc<H>,
	memo: SharedMemo<String>,
}

impl<H: Host> CommandSource<H> {
	pub fn new(host: Arc<H>, memo: SharedMemo<String>) -> Self {
		Self { host, memo }
	}

	fn record_of(entry: CommandEntry) -> Record<CommandEntry> {
		Record::new(entry.name.clone(), entry.clone())
			.with_sub_text(entry.id.clone())
			.with_auxiliary(entry.hotkeys)
	}
}

impl<H: Host> DataSource for CommandSource<H> {
	type Payload = CommandEntry;
	type Id = String;

	fn id(&self, record: &Record<CommandEntry>) -> String {
		record.payload.id.clone()
	}

	fn enumerate(&self) -> Vec<Record<CommandEntry>> {
		self.host.commands().into_iter().map(Self::record_of).collect()
	}

	fn records_for(&self, id: &String) -> Vec<Record<CommandEntry>> {
		self.host
			.commands()
			.into_iter()
			.filter(|entry| entry.id == *id)
			.map(Self::record_of)
			.collect()
	}

	fn placeholders(&self, corpus: &[Record<CommandEntry>], options: PlaceholderOptions) -> PlaceholderSet<CommandEntry> {
		let recent = options.recent.then(|| {
			let records: Vec<_> = self
				.memo
				.with(|memo| memo.get_matching(corpus, |id, record| *id == record.payload.id).into_iter().cloned().collect());
			PlaceholderCategory::new(RECENTLY_USED, records)
		});
		PlaceholderSet::compose([recent])
	}

	fn memo(&self) -> Option<&SharedMemo<String>> {
		Some(&self.memo)
	}
}
