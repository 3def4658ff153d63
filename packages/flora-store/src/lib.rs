mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin};

use serde_json::{Map, Value};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A raw document as returned by the store: an opaque identity plus a
/// schemaless field mapping. The designated timestamp field may be a
/// store-native `{seconds, nanos}` object, a numeric epoch value, or a
/// string.
#[derive(Debug, Clone)]
pub struct Document {
	pub id: String,
	pub fields: Map<String, Value>,
}

/// An equality constraint on one field. Predicate sets combine
/// conjunctively; the store offers no OR, prefix, or range matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
	pub field: String,
	pub value: String,
}
impl Predicate {
	pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self { field: field.into(), value: value.into() }
	}
}

/// The narrow interface the core consumes. The store itself is an external
/// collaborator; implementations are injected so callers never touch a
/// process-wide connection handle.
pub trait DocumentStore
where
	Self: Send + Sync,
{
	/// Unconstrained retrieval of the whole collection. Order is
	/// store-defined but stable across identical calls against unchanged
	/// data.
	fn fetch_all<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Document>>>;

	/// Retrieval constrained by every predicate at once.
	fn fetch_where<'a>(
		&'a self,
		collection: &'a str,
		predicates: &'a [Predicate],
	) -> BoxFuture<'a, Result<Vec<Document>>>;

	/// Inserts a field mapping, letting the store assign the identity and a
	/// server-side timestamp under `timestamp_field`. Returns the new
	/// document's identity.
	fn insert<'a>(
		&'a self,
		collection: &'a str,
		fields: Map<String, Value>,
		timestamp_field: &'a str,
	) -> BoxFuture<'a, Result<String>>;
}
