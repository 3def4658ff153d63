use std::{
	collections::{HashMap, VecDeque},
	sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	},
};

use serde_json::{Map, Value, json};
use time::OffsetDateTime;
use tokio::sync::oneshot;
use uuid::Uuid;

use flora_store::{BoxFuture, Document, DocumentStore, Error, Predicate, Result};

/// In-memory document store double. Documents keep insertion order, which
/// gives the stable-ordering guarantee repeated fetches rely on.
#[derive(Default)]
pub struct MemoryStore {
	collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds a document with an explicit identity, bypassing the insert path.
	pub fn seed(&self, collection: &str, id: &str, fields: Map<String, Value>) {
		let mut collections = self.collections.lock().unwrap_or_else(|err| err.into_inner());

		collections
			.entry(collection.to_string())
			.or_default()
			.push(Document { id: id.to_string(), fields });
	}

	pub fn len(&self, collection: &str) -> usize {
		let collections = self.collections.lock().unwrap_or_else(|err| err.into_inner());

		collections.get(collection).map(Vec::len).unwrap_or(0)
	}

	pub fn is_empty(&self, collection: &str) -> bool {
		self.len(collection) == 0
	}
}

impl DocumentStore for MemoryStore {
	fn fetch_all<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move {
			let collections = self.collections.lock().unwrap_or_else(|err| err.into_inner());

			Ok(collections.get(collection).cloned().unwrap_or_default())
		})
	}

	fn fetch_where<'a>(
		&'a self,
		collection: &'a str,
		predicates: &'a [Predicate],
	) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move {
			let collections = self.collections.lock().unwrap_or_else(|err| err.into_inner());
			let documents = collections
				.get(collection)
				.map(|documents| {
					documents
						.iter()
						.filter(|document| matches_all(document, predicates))
						.cloned()
						.collect()
				})
				.unwrap_or_default();

			Ok(documents)
		})
	}

	fn insert<'a>(
		&'a self,
		collection: &'a str,
		fields: Map<String, Value>,
		timestamp_field: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		Box::pin(async move {
			let id = Uuid::new_v4().simple().to_string();
			let now = OffsetDateTime::now_utc();
			let mut fields = fields;

			// Server-assigned timestamp in the store-native wrapper shape.
			fields.insert(
				timestamp_field.to_string(),
				json!({
					"seconds": now.unix_timestamp(),
					"nanos": now.nanosecond(),
				}),
			);

			let mut collections = self.collections.lock().unwrap_or_else(|err| err.into_inner());

			collections
				.entry(collection.to_string())
				.or_default()
				.push(Document { id: id.clone(), fields });

			Ok(id)
		})
	}
}

fn matches_all(document: &Document, predicates: &[Predicate]) -> bool {
	predicates.iter().all(|predicate| {
		document.fields.get(&predicate.field).and_then(Value::as_str)
			== Some(predicate.value.as_str())
	})
}

/// Store double whose every call fails with a transport error.
pub struct FailingStore {
	message: String,
}

impl FailingStore {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	fn error(&self) -> Error {
		Error::Transport { message: self.message.clone() }
	}
}

impl DocumentStore for FailingStore {
	fn fetch_all<'a>(&'a self, _collection: &'a str) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move { Err(self.error()) })
	}

	fn fetch_where<'a>(
		&'a self,
		_collection: &'a str,
		_predicates: &'a [Predicate],
	) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move { Err(self.error()) })
	}

	fn insert<'a>(
		&'a self,
		_collection: &'a str,
		_fields: Map<String, Value>,
		_timestamp_field: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		Box::pin(async move { Err(self.error()) })
	}
}

/// Wraps another store and holds each fetch until the test releases it,
/// making overlapping-fetch interleavings deterministic. Fetches consume
/// gates in call order; a fetch issued without a queued gate passes straight
/// through. Inserts are never gated.
pub struct GatedStore {
	inner: Arc<dyn DocumentStore>,
	gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
	waiting: AtomicUsize,
}

impl GatedStore {
	pub fn new(inner: Arc<dyn DocumentStore>) -> Self {
		Self { inner, gates: Mutex::new(VecDeque::new()), waiting: AtomicUsize::new(0) }
	}

	/// Queues a gate for the next fetch and returns its release handle.
	pub fn gate(&self) -> oneshot::Sender<()> {
		let (tx, rx) = oneshot::channel();
		let mut gates = self.gates.lock().unwrap_or_else(|err| err.into_inner());

		gates.push_back(rx);

		tx
	}

	/// Number of fetches currently parked on a gate.
	pub fn waiting(&self) -> usize {
		self.waiting.load(Ordering::SeqCst)
	}

	async fn pass_gate(&self) {
		let gate = {
			let mut gates = self.gates.lock().unwrap_or_else(|err| err.into_inner());

			gates.pop_front()
		};

		if let Some(gate) = gate {
			self.waiting.fetch_add(1, Ordering::SeqCst);

			// A dropped sender also releases the gate.
			let _ = gate.await;

			self.waiting.fetch_sub(1, Ordering::SeqCst);
		}
	}
}

impl DocumentStore for GatedStore {
	fn fetch_all<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move {
			self.pass_gate().await;

			self.inner.fetch_all(collection).await
		})
	}

	fn fetch_where<'a>(
		&'a self,
		collection: &'a str,
		predicates: &'a [Predicate],
	) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move {
			self.pass_gate().await;

			self.inner.fetch_where(collection, predicates).await
		})
	}

	fn insert<'a>(
		&'a self,
		collection: &'a str,
		fields: Map<String, Value>,
		timestamp_field: &'a str,
	) -> BoxFuture<'a, Result<String>> {
		self.inner.insert(collection, fields, timestamp_field)
	}
}
