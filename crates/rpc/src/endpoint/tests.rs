use serde_json::{Value, json};

use super::{Dispatch, Endpoint};

#[derive(Default)]
struct Recorder {
	calls: Vec<String>,
}

fn recording_endpoint() -> Endpoint<Recorder> {
	Endpoint::new("test")
		.on("search", |state: &mut Recorder, (query, seq): (String, u64)| {
			state.calls.push(format!("search:{query}:{seq}"));
		})
		.on("updateIndex", |state: &mut Recorder, (contents,): (Vec<String>,)| {
			state.calls.push(format!("updateIndex:{}", contents.join(",")));
		})
		.on_signal("ready", |state: &mut Recorder| state.calls.push("ready".to_string()))
}

#[test]
fn garbage_payloads_never_reach_a_handler() {
	let mut endpoint = recording_endpoint();
	let mut state = Recorder::default();

	let payloads = [
		Value::Null,
		json!("a string"),
		json!({}),
		json!({ "method": 123 }),
		json!({ "method": "unknownMethod", "args": [] }),
	];
	let outcomes: Vec<_> = payloads.into_iter().map(|payload| endpoint.handle(&mut state, payload)).collect();

	assert_eq!(
		outcomes,
		vec![
			Dispatch::Malformed,
			Dispatch::Malformed,
			Dispatch::Malformed,
			Dispatch::Malformed,
			Dispatch::UnknownMethod("unknownMethod".to_string()),
		]
	);
	assert!(state.calls.is_empty());
}

#[test]
fn typed_args_are_decoded_positionally() {
	let mut endpoint = recording_endpoint();
	let mut state = Recorder::default();

	let outcome = endpoint.handle(&mut state, json!({ "method": "search", "args": ["al", 4] }));
	assert_eq!(outcome, Dispatch::Handled("search".to_string()));

	endpoint.handle(&mut state, json!({ "method": "updateIndex", "args": [["a.md", "b.md"]] }));
	endpoint.handle(&mut state, json!({ "method": "ready" }));

	assert_eq!(state.calls, vec!["search:al:4", "updateIndex:a.md,b.md", "ready"]);
}

#[test]
fn wrong_arity_or_types_are_dropped() {
	let mut endpoint = recording_endpoint();
	let mut state = Recorder::default();

	assert_eq!(
		endpoint.handle(&mut state, json!({ "method": "search", "args": ["al"] })),
		Dispatch::InvalidArgs("search".to_string())
	);
	assert_eq!(
		endpoint.handle(&mut state, json!({ "method": "search", "args": [1, "al"] })),
		Dispatch::InvalidArgs("search".to_string())
	);
	assert_eq!(
		endpoint.handle(&mut state, json!({ "method": "search", "args": ["al", 1, 2] })),
		Dispatch::InvalidArgs("search".to_string())
	);
	assert!(state.calls.is_empty());
}

#[test]
fn signal_handlers_ignore_extra_args() {
	let mut endpoint = recording_endpoint();
	let mut state = Recorder::default();

	assert!(endpoint.handle(&mut state, json!({ "method": "ready", "args": [1, 2] })).is_handled());
	assert_eq!(state.calls, vec!["ready"]);
	assert!(endpoint.handles("ready"));
	assert!(!endpoint.handles("onSearchFinished"));
}
