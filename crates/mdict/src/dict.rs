//! Small helpers over maps and sequences.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::Hash;

/// Merge maps into a new one. Later maps override keys of earlier ones.
///
/// The merge is shallow and the inputs are left untouched.
///
/// ```
/// use datakit_mdict::merge;
/// use std::collections::HashMap;
///
/// let a = HashMap::from([("a", 1)]);
/// let b = HashMap::from([("a", 2), ("b", 1)]);
/// let merged = merge([&a, &b]);
/// assert_eq!(merged, HashMap::from([("a", 2), ("b", 1)]));
/// assert_eq!(a, HashMap::from([("a", 1)]));
/// ```
#[must_use]
pub fn merge<'a, K, V, I>(maps: I) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
    I: IntoIterator<Item = &'a HashMap<K, V>>,
{
    let mut merged = HashMap::new();
    for map in maps {
        merged.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Merge JSON objects into a new one. See [`merge`].
///
/// Keys keep the position of their first appearance.
#[must_use]
pub fn merge_objects<'a, I>(objects: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let mut merged = Map::new();
    for object in objects {
        merged.extend(object.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Group items by the key `key_fn` computes for them.
///
/// Items keep their relative order within each group.
pub fn partition<T, K, I, F>(items: I, mut key_fn: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// The first item matching `predicate`, if any.
pub fn first<T, I, P>(items: I, mut predicate: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().find(|item| predicate(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_later_wins() {
        let a = HashMap::from([("a", 1)]);
        let b = HashMap::from([("a", 2), ("b", 1)]);
        let c = HashMap::from([("c", 3)]);

        let merged = merge([&a, &b, &c]);
        assert_eq!(merged, HashMap::from([("a", 2), ("b", 1), ("c", 3)]));

        assert_eq!(a, HashMap::from([("a", 1)]));
        assert_eq!(b, HashMap::from([("a", 2), ("b", 1)]));
    }

    #[test]
    fn test_merge_nothing() {
        let merged: HashMap<String, u8> = merge(std::iter::empty());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_is_shallow() {
        let a = HashMap::from([("k", vec![1, 2])]);
        let b = HashMap::from([("k", vec![3])]);
        assert_eq!(merge([&a, &b])["k"], vec![3]);
    }

    #[test]
    fn test_merge_objects() {
        let a = json!({"a": 1, "nested": {"x": 1}});
        let b = json!({"a": 2, "b": 1, "nested": {"y": 2}});
        let merged = merge_objects([a.as_object().unwrap(), b.as_object().unwrap()]);

        assert_eq!(
            Value::Object(merged.clone()),
            json!({"a": 2, "nested": {"y": 2}, "b": 1})
        );
        let keys: Vec<&String> = merged.keys().collect();
        assert_eq!(keys, ["a", "nested", "b"]);
        assert_eq!(a, json!({"a": 1, "nested": {"x": 1}}));
    }

    #[test]
    fn test_partition() {
        let groups = partition(1..=7, |n| n % 3);
        assert_eq!(groups[&0], vec![3, 6]);
        assert_eq!(groups[&1], vec![1, 4, 7]);
        assert_eq!(groups[&2], vec![2, 5]);
    }

    #[test]
    fn test_first() {
        assert_eq!(first([1, 4, 6], |n| n % 2 == 0), Some(4));
        assert_eq!(first([1, 3], |n| n % 2 == 0), None);
    }
}
