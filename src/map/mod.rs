//! An ordered map based on an unbalanced binary search tree.

mod node;

use compare::{Compare, Natural};
use log::debug;
use self::node::{Dir, Left, LinkExt, Node, Right};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::ops;

/// An ordered map based on an unbalanced binary search tree.
///
/// The shape of the tree is determined solely by the order of insertion: no rebalancing is
/// performed, so inserting keys in sorted order produces a tree whose height equals its length.
/// Every operation walks the tree iteratively, so deep trees cost time but never stack.
///
/// Keys are not required to be unique. Inserting a key that is already present adds a new entry
/// below the existing one (equal keys are routed to the right), and lookups and removals act on
/// the entry closest to the root, which is the first of the equal entries in iteration order.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// map.insert("B", 2.5);
    /// map.insert("A", 0.0);
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&"A", &0.0)));
    /// assert_eq!(it.next(), Some((&"B", &2.5)));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = search_tree::Map::with_cmp(natural().rev());
    ///
    /// for key in ["B", "A", "C"] { map.insert(key, key.len()); }
    ///
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"C", &"B", &"A"]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { root: None, len: 0, cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert('x', ());
    /// assert!(!map.is_empty());
    ///
    /// map.remove(&'x');
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map, counting entries with equal keys separately.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert("98109", 1.5);
    /// map.insert("98109", 2.5);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// Since the tree is never rebalanced, this reflects the order in which keys were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// for i in 0..10 { map.insert(i, ()); }
    /// assert_eq!(map.height(), 10);
    ///
    /// map.clear();
    ///
    /// for &i in &[5, 2, 8, 1, 3, 7, 9] { map.insert(i, ()); }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize { node::height(&self.root) }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use search_tree::Map;
    ///
    /// let map: Map<i32, &str> = Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: Map<i32, &str, _> = Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// This is how a map is reset before being loaded afresh.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: search_tree::Map<_, _> = (0..100).map(|i| (i, ())).collect();
    /// assert_eq!(map.len(), 100);
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.height(), 0);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing map of {} entries", self.len);
        node::clear(&mut self.root);
        self.len = 0;
    }

    /// Inserts an entry into the map.
    ///
    /// The entry is attached as a new leaf; an entry with an equal key is never replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&1, &"b")]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        node::insert(&mut self.root, &self.cmp, key, value);
        self.len += 1;
    }

    /// Removes and returns the entry closest to the root whose key is equal to the given key,
    /// returning `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// for key in ["B", "A", "D", "C", "F"] { map.insert(key, key.to_lowercase()); }
    ///
    /// // "B" has two children, so its in-order successor "C" moves into its place
    /// assert_eq!(map.remove(&"B"), Some(("B", "b".to_string())));
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"A", &"C", &"D", &"F"]);
    ///
    /// assert_eq!(map.remove(&"B"), None);
    /// assert_eq!(map.len(), 4);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let key_value = node::remove(&mut self.root, &self.cmp, key);
        if key_value.is_some() { self.len -= 1; }
        key_value
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert!(!map.contains_key(&"98109"));
    /// map.insert("98109", 1234.5);
    /// assert!(map.contains_key(&"98109"));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value of the entry closest to the root whose key is equal to
    /// the given key, or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert_eq!(map.get(&7), None);
    ///
    /// map.insert(7, "older");
    /// map.insert(7, "newer");
    /// assert_eq!(map.get(&7), Some(&"older"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).key_value().map(|e| e.1)
    }

    /// Returns a mutable reference to the value of the entry closest to the root whose key is
    /// equal to the given key, or `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// map.insert("A", 10);
    ///
    /// if let Some(amount) = map.get_mut(&"A") {
    ///     *amount += 5;
    /// }
    ///
    /// assert_eq!(map.get(&"A"), Some(&15));
    /// assert_eq!(map.get_mut(&"Z"), None);
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).key_value_mut().map(|e| e.1)
    }

    /// Returns references to the entry with the minimum key, or `None` if the map is empty.
    ///
    /// Among entries with equal minimum keys this is the first one yielded by `iter`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// for (i, key) in ["M", "Z", "A"].iter().enumerate() { map.insert(*key, i); }
    /// assert_eq!(map.first(), Some((&"A", &2)));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> {
        Left::extremum(&self.root).key_value()
    }

    /// Returns references to the entry with the maximum key, or `None` if the map is empty.
    ///
    /// Among entries with equal maximum keys this is the last one yielded by `iter`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// for (i, key) in ["M", "Z", "A", "Z"].iter().enumerate() { map.insert(*key, i); }
    /// assert_eq!(map.last(), Some((&"Z", &3)));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> {
        Right::extremum(&self.root).key_value()
    }

    /// Returns an iterator that consumes the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// map.insert(String::from("D"), vec![4]);
    /// map.insert(String::from("C"), vec![3]);
    ///
    /// let entries: Vec<(String, Vec<u8>)> = map.into_iter().collect();
    /// assert_eq!(entries, [("C".to_string(), vec![3]), ("D".to_string(), vec![4])]);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn into_iter(mut self) -> IntoIter<K, V> {
        let len = self.len;
        self.len = 0;
        IntoIter(node::Iter::new(self.root.take(), len))
    }

    /// Returns an iterator over the map's entries in ascending key order with immutable
    /// references to the values.
    ///
    /// The walk is lazy and keeps at most one pending node per level of the tree. Calling this
    /// again, or cloning the iterator, restarts the walk.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// for key in ["B", "A", "D", "C", "F"] { map.insert(key, ()); }
    ///
    /// let it = map.iter();
    /// assert_eq!(it.len(), 5);
    ///
    /// let keys: String = it.clone().map(|e| *e.0).collect();
    /// assert_eq!(keys, "ABCDF");
    /// assert_eq!(it.map(|e| *e.0).collect::<String>(), keys);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(node::Iter::new(self.root.as_node_ref(), self.len))
    }

    /// Returns an iterator over the map's entries in ascending key order with mutable references
    /// to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// for key in ["D", "B", "F"] { map.insert(key, 0); }
    ///
    /// for (rank, (_, value)) in map.iter_mut().enumerate() { *value = rank; }
    ///
    /// assert_eq!(map[&"B"], 0);
    /// assert_eq!(map[&"D"], 1);
    /// assert_eq!(map[&"F"], 2);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(node::IterMut::new(&mut self.root, self.len))
    }

    /// Returns an iterator over the map's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// for &key in &["B", "A", "D", "C", "F"] { map.insert(key, ()); }
    ///
    /// assert_eq!(map.keys().cloned().collect::<Vec<_>>(), ["A", "B", "C", "D", "F"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = search_tree::Map::new();
    ///
    /// map.insert("98223", 129.99);
    /// map.insert("97990", 1200.0);
    ///
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&1200.0, &129.99]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> { Values(self.iter()) }
}

impl<K, V, C> Drop for Map<K, V, C> where C: Compare<K> {
    fn drop(&mut self) { node::clear(&mut self.root); }
}

impl<K, V, C> Clone for Map<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self {
        Map { root: node::clone(&self.root), len: self.len, cmp: self.cmp.clone() }
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(it: I) -> Self {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for Map<K, V, C> where K: PartialEq, V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for Map<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where K: PartialOrd, V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K, V, C> Ord for Map<K, V, C> where K: Ord, V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// An iterator that consumes the map.
///
/// Entries that are not consumed are dropped along with the iterator.
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or the `IntoIterator`
/// trait:
///
/// ```
/// let map: search_tree::Map<_, _> = vec![("b", 2), ("a", 1)].into_iter().collect();
///
/// let mut total = 0;
/// for (_, amount) in map { total += amount; }
/// assert_eq!(total, 3);
/// ```
pub struct IntoIter<K, V>(node::Iter<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    // draining one node at a time keeps deep subtrees from being dropped recursively
    fn drop(&mut self) { for _ in self.by_ref() {} }
}

/// An iterator over the map's entries with immutable references to the values.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the `IntoIterator`
/// trait:
///
/// ```
/// let mut map = search_tree::Map::new();
/// map.insert("98109", 10.0);
///
/// for (_, amount) in &mut map { *amount *= 1.5; }
/// assert_eq!(map[&"98109"], 15.0);
/// ```
pub struct IterMut<'a, K: 'a, V: 'a>(node::IterMut<'a, K, V>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over the map's keys.
///
/// Acquire through [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Keys<'a, K, V> { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the map's values.
///
/// Acquire through [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Values<'a, K, V> { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
