//! Ordered, read-only registries of keyed entries.

use std::collections::HashSet;

use crate::error::{RegistryError, Result};
use crate::location::ResourceLocation;

/// Handle to one registry entry, as yielded by [`Registry::iter`].
///
/// The handle is opaque; its identifier is resolved through [`Registry::key`].
#[derive(Debug)]
pub struct Holder<'a, T> {
	index: usize,
	value: &'a T,
}

impl<'a, T> Holder<'a, T> {
	pub fn value(&self) -> &'a T {
		self.value
	}
}

impl<T> Clone for Holder<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Holder<'_, T> {}

/// An ordered table of entries, each optionally associated with a [`ResourceLocation`].
///
/// Iteration follows registration order. Entries registered without a key are
/// still iterated but [`Registry::key`] reports `None` for them.
#[derive(Debug)]
pub struct Registry<T> {
	name: String,
	entries: Vec<T>,
	keys: Vec<Option<ResourceLocation>>,
	seen: HashSet<ResourceLocation>,
}

impl<T> Registry<T> {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			entries: Vec::new(),
			keys: Vec::new(),
			seen: HashSet::new(),
		}
	}

	/// Registry name, e.g. `minecraft:sound_event`.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Appends an entry under `key`, returning its index.
	pub fn register(&mut self, key: ResourceLocation, value: T) -> Result<usize> {
		if self.seen.contains(&key) {
			return Err(RegistryError::DuplicateKey {
				registry: self.name.clone(),
				key,
			});
		}
		let index = self.entries.len();
		self.seen.insert(key.clone());
		self.entries.push(value);
		self.keys.push(Some(key));
		Ok(index)
	}

	/// Appends an entry that has no resolvable key.
	pub fn register_unkeyed(&mut self, value: T) -> usize {
		let index = self.entries.len();
		self.entries.push(value);
		self.keys.push(None);
		index
	}

	pub fn iter(&self) -> impl Iterator<Item = Holder<'_, T>> + '_ {
		self.entries.iter().enumerate().map(|(index, value)| Holder { index, value })
	}

	/// Returns the key an entry was registered under.
	pub fn key(&self, holder: &Holder<'_, T>) -> Option<&ResourceLocation> {
		self.keys.get(holder.index).and_then(Option::as_ref)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
