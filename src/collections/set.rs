//! Module containing the implementation of [`RadixSet`].

use crate::{
    nodes::{search_for_delete_point, search_for_insert_point, search_for_key, NodeArena, NodeId},
    AsSymbols, NodeRef,
};
use core::fmt;

pub use crate::nodes::InsertError;

/// A set of keys stored in a path-compressed radix tree.
///
/// Every key is a sequence of symbols of type `S`, obtained through the
/// [`AsSymbols`] trait. Keys which share a prefix share the nodes spelling
/// that prefix, and chains of nodes with a single child are collapsed into
/// one edge.
///
/// The empty key cannot be stored.
pub struct RadixSet<S> {
    /// The number of keys present in the tree.
    pub(crate) num_entries: usize,
    /// Storage for the tree nodes, always holding at least the root.
    pub(crate) arena: NodeArena<S>,
}

impl<S> RadixSet<S> {
    /// Create a new, empty [`RadixSet`].
    ///
    /// Only the root node is allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let set = RadixSet::<char>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixSet {
            num_entries: 0,
            arena: NodeArena::new(),
        }
    }

    /// Create a new, empty [`RadixSet`] with space reserved for at least
    /// `capacity` tree nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let set = RadixSet::<u8>::with_capacity(128);
    /// assert_eq!(set.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RadixSet {
            num_entries: 0,
            arena: NodeArena::with_capacity(capacity),
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let mut set = RadixSet::new();
    /// set.insert("poem");
    /// set.insert("poetry");
    /// set.insert("poem");
    ///
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.num_entries
    }

    /// Returns true if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Clear the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let mut set = RadixSet::new();
    /// set.insert("advent");
    /// set.clear();
    ///
    /// assert!(set.is_empty());
    /// assert!(!set.contains("advent"));
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.num_entries = 0;
    }

    /// Return a read-only view of the root node, for inspecting the tree
    /// structure.
    ///
    /// The root is never terminal and has no incoming edge.
    pub fn root(&self) -> NodeRef<'_, S> {
        NodeRef::new(&self.arena, NodeId::ROOT)
    }
}

impl<S: PartialEq + Clone> RadixSet<S> {
    /// Insert a key into the set, returning true if the key was not already
    /// present.
    ///
    /// Inserting the empty key returns false and leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let mut set = RadixSet::new();
    ///
    /// assert!(set.insert("card"));
    /// assert!(set.insert("cardistry"));
    /// assert!(!set.insert("card"));
    /// assert!(!set.insert(""));
    /// ```
    pub fn insert<K>(&mut self, key: K) -> bool
    where
        K: AsSymbols<Symbol = S>,
    {
        self.try_insert(key).is_ok()
    }

    /// Insert a key into the set, returning an error describing why the key
    /// could not be inserted.
    ///
    /// # Errors
    ///  - Returns [`InsertError::EmptyKey`] if the key has no symbols.
    ///  - Returns [`InsertError::AlreadyPresent`] if the key is already in
    ///    the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::{InsertError, RadixSet};
    ///
    /// let mut set = RadixSet::new();
    ///
    /// assert_eq!(set.try_insert("poem"), Ok(()));
    /// assert_eq!(set.try_insert("poem"), Err(InsertError::AlreadyPresent));
    /// assert_eq!(set.try_insert(""), Err(InsertError::EmptyKey));
    /// ```
    pub fn try_insert<K>(&mut self, key: K) -> Result<(), InsertError>
    where
        K: AsSymbols<Symbol = S>,
    {
        let symbols = key.as_symbols();
        let insert_point = search_for_insert_point(&self.arena, &symbols)?;
        let node = insert_point.apply(&mut self.arena, &symbols);
        self.num_entries += 1;
        debug_assert!(self.arena[node].terminal);

        trace_event!(
            key_len = symbols.len(),
            node = %node,
            num_entries = self.num_entries,
            "inserted key"
        );

        Ok(())
    }

    /// Remove a key from the set, returning true if the key was present.
    ///
    /// Any edges made redundant by the removal are merged, so the tree has
    /// the same shape it would have if the key had never been inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let mut set = RadixSet::from(["bear", "bearing", "bee"]);
    ///
    /// assert!(set.delete("bear"));
    /// assert!(!set.delete("bear"));
    /// assert!(!set.delete("be"));
    /// assert!(set.contains("bearing"));
    /// ```
    pub fn delete<K>(&mut self, key: K) -> bool
    where
        K: AsSymbols<Symbol = S>,
    {
        let symbols = key.as_symbols();
        let Some(delete_point) = search_for_delete_point(&self.arena, &symbols) else {
            return false;
        };

        let nodes_before = self.arena.len();
        let result = delete_point.apply(&mut self.arena);
        self.num_entries -= 1;
        debug_assert_eq!(self.arena.len() + result.nodes_freed(), nodes_before);

        trace_event!(
            key_len = symbols.len(),
            result = ?result,
            num_entries = self.num_entries,
            "deleted key"
        );

        true
    }

    /// Remove a key from the set, returning true if the key was present.
    ///
    /// This is the same operation as [`RadixSet::delete`], named after the
    /// standard library collections.
    pub fn remove<K>(&mut self, key: K) -> bool
    where
        K: AsSymbols<Symbol = S>,
    {
        self.delete(key)
    }

    /// Returns true if the set contains the given key.
    ///
    /// A key is only found if it was inserted itself, being a prefix of a
    /// stored key is not enough.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radix_set::RadixSet;
    ///
    /// let set = RadixSet::from(["poetry", "poets"]);
    ///
    /// assert!(set.contains("poets"));
    /// assert!(!set.contains("poet"));
    /// assert!(!set.contains(""));
    /// ```
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsSymbols<Symbol = S>,
    {
        let symbols = key.as_symbols();
        search_for_key(&self.arena, &symbols).is_some()
    }
}

impl<S: Clone> Clone for RadixSet<S> {
    fn clone(&self) -> Self {
        RadixSet {
            num_entries: self.num_entries,
            arena: self.arena.clone(),
        }
    }
}

#[cfg_attr(test, mutants::skip)]
impl<S> fmt::Debug for RadixSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixSet")
            .field("len", &self.num_entries)
            .field("num_nodes", &self.arena.len())
            .finish()
    }
}

impl<S> Default for RadixSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> Extend<K> for RadixSet<S>
where
    K: AsSymbols<Symbol = S>,
    S: PartialEq + Clone,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, S, const N: usize> From<[K; N]> for RadixSet<S>
where
    K: AsSymbols<Symbol = S>,
    S: PartialEq + Clone,
{
    fn from(arr: [K; N]) -> Self {
        let mut set = RadixSet::new();
        set.extend(arr);
        set
    }
}

impl<K, S> FromIterator<K> for RadixSet<S>
where
    K: AsSymbols<Symbol = S>,
    S: PartialEq + Clone,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = RadixSet::new();
        set.extend(iter);
        set
    }
}
