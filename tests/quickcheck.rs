use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use search_tree::Map;

fn build<K, V>(entries: Vec<(K, V)>) -> Map<K, V> where K: Ord {
    let mut map = Map::new();
    for (k, v) in entries { map.insert(k, v); }
    map
}

fn unique(keys: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keys.into_iter().filter(|key| seen.insert(key.clone())).collect()
}

#[quickcheck]
fn iteration_is_sorted(entries: Vec<(u8, u8)>) -> bool {
    let map = build(entries);
    let keys: Vec<_> = map.keys().collect();
    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn iteration_yields_every_entry(entries: Vec<(u8, u8)>) -> bool {
    let mut expected = entries.clone();
    let map = build(entries);
    let mut actual: Vec<(u8, u8)> = map.iter().map(|(k, v)| (*k, *v)).collect();

    // equal keys keep their tree order, so compare as multisets
    expected.sort();
    actual.sort();
    map.len() == expected.len() && actual == expected
}

#[quickcheck]
fn iteration_restarts(entries: Vec<(u8, u8)>) -> bool {
    let map = build(entries);
    let first: Vec<_> = map.iter().collect();
    let it = map.iter();
    let cloned: Vec<_> = it.clone().collect();
    first == map.iter().collect::<Vec<_>>() && first == cloned && it.len() == map.len()
}

#[quickcheck]
fn insert_then_get(entries: Vec<(String, u8)>, key: String, value: u8) -> TestResult {
    if entries.iter().any(|e| e.0 == key) { return TestResult::discard(); }

    let mut map = build(entries);
    map.insert(key.clone(), value);

    TestResult::from_bool(map.get(&key) == Some(&value) && map.contains_key(&key))
}

#[quickcheck]
fn insert_never_replaces(entries: Vec<(u8, u8)>, key: u8, value: u8) -> bool {
    let mut map = build(entries);
    let before = map.get(&key).cloned();
    let count = map.keys().filter(|k| **k == key).count();

    map.insert(key, value);

    map.get(&key).cloned() == before.or(Some(value)) &&
        map.keys().filter(|k| **k == key).count() == count + 1
}

#[quickcheck]
fn get_returns_first_equal_entry(entries: Vec<(u8, u8)>, key: u8) -> bool {
    let map = build(entries);
    map.get(&key) == map.iter().find(|e| *e.0 == key).map(|e| e.1)
}

#[quickcheck]
fn remove_then_absent(keys: Vec<String>) -> bool {
    let keys = unique(keys);
    let mut map = build(keys.iter().cloned().map(|k| (k, ())).collect());

    keys.iter().all(|key| {
        map.remove(key).is_some() && map.get(key).is_none() && !map.contains_key(key)
    }) && map.is_empty() && map.iter().next().is_none()
}

#[quickcheck]
fn remove_absent_is_noop(entries: Vec<(u8, u8)>, key: u8) -> TestResult {
    if entries.iter().any(|e| e.0 == key) { return TestResult::discard(); }

    let mut map = build(entries);
    let before: Vec<(u8, u8)> = map.iter().map(|(k, v)| (*k, *v)).collect();

    TestResult::from_bool(
        map.remove(&key).is_none() &&
        map.len() == before.len() &&
        map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>() == before
    )
}

#[quickcheck]
fn remove_affects_only_first_equal_entry(entries: Vec<(u8, u8)>, key: u8) -> bool {
    let mut map = build(entries);
    let mut expected: Vec<(u8, u8)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let position = expected.iter().position(|e| e.0 == key);
    let removed = position.map(|i| expected.remove(i));

    map.remove(&key) == removed &&
        map.len() == expected.len() &&
        map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>() == expected
}

#[quickcheck]
fn remove_preserves_order(entries: Vec<(u8, u8)>, removals: Vec<u8>) -> bool {
    let mut map = build(entries);
    for key in removals { map.remove(&key); }

    let keys: Vec<_> = map.keys().collect();
    keys.windows(2).all(|w| w[0] <= w[1]) && keys.len() == map.len()
}

#[quickcheck]
fn iter_mut_updates_in_order(entries: Vec<(u8, u8)>) -> bool {
    let mut map = build(entries);
    for (i, (_, value)) in map.iter_mut().enumerate() { *value = i as u8; }
    map.values().enumerate().all(|(i, value)| *value == i as u8)
}

#[quickcheck]
fn into_iter_matches_iter(entries: Vec<(u8, u8)>) -> bool {
    let map = build(entries);
    let borrowed: Vec<(u8, u8)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    map.into_iter().collect::<Vec<_>>() == borrowed
}

#[quickcheck]
fn first_and_last_bound_entries(entries: Vec<(u8, u8)>) -> bool {
    let map: Map<u8, u8> = build(entries);
    map.first() == map.iter().next() && map.last() == map.iter().last()
}
