use std::cmp::Ordering;

use super::KeySequence;

/// Binary search for an element whose extracted key compares equal to `target`.
///
/// `seq` must be sorted ascending by `extract` under `compare`; this is not
/// checked and an unsorted input gives an unspecified (but non-panicking)
/// answer.
///
/// With duplicate keys the index returned is whichever one the probe lands on
/// first. It is not necessarily the leftmost; use [`keyed_search_leftmost`] or
/// [`keyed_search_with`] when a specific element of the run is wanted.
pub fn keyed_search<'a, S, K, E, C>(seq: &'a S, target: &K, extract: E, compare: C) -> Option<usize>
where
    S: KeySequence + ?Sized,
    E: Fn(&'a S::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    probe(seq, target, &extract, &compare)
}

/// Like [`keyed_search`], then picks the element of the equal-key run that
/// satisfies `disambiguate`.
///
/// The probe's own index is tested first. After that the run is scanned
/// outward one step at a time, right side before left side at each distance.
/// A side stops at the end of the run or the sequence. Returns `None` when no
/// element of the run matches.
pub fn keyed_search_with<'a, S, K, E, C, P>(
    seq: &'a S,
    target: &K,
    extract: E,
    compare: C,
    disambiguate: P,
) -> Option<usize>
where
    S: KeySequence + ?Sized,
    E: Fn(&'a S::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
    P: Fn(&S::Item) -> bool,
{
    let mid = probe(seq, target, &extract, &compare)?;
    if disambiguate(seq.item(mid)?) {
        return Some(mid);
    }

    let len = seq.len();
    let in_run = |index: usize| match seq.item(index) {
        Some(item) if compare(&extract(item), target) == Ordering::Equal => Some(item),
        _ => None,
    };

    let mut right = true;
    let mut left = true;
    let mut offset = 1;
    while right || left {
        if right {
            match mid.checked_add(offset).filter(|&i| i < len) {
                Some(index) => match in_run(index) {
                    Some(item) if disambiguate(item) => return Some(index),
                    Some(_) => {}
                    None => right = false,
                },
                None => right = false,
            }
        }
        if left {
            match mid.checked_sub(offset) {
                Some(index) => match in_run(index) {
                    Some(item) if disambiguate(item) => return Some(index),
                    Some(_) => {}
                    None => left = false,
                },
                None => left = false,
            }
        }
        offset += 1;
    }

    None
}

/// Lower-bound search: the lowest index whose key equals `target`.
pub fn keyed_search_leftmost<'a, S, K, E, C>(
    seq: &'a S,
    target: &K,
    extract: E,
    compare: C,
) -> Option<usize>
where
    S: KeySequence + ?Sized,
    E: Fn(&'a S::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let len = seq.len();
    let mut low = 0;
    let mut high = len;

    while low < high {
        let mid = low + (high - low) / 2;
        if compare(&extract(seq.item(mid)?), target) == Ordering::Less {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    if low < len && compare(&extract(seq.item(low)?), target) == Ordering::Equal {
        Some(low)
    } else {
        None
    }
}

/// [`keyed_search`] for keys with a natural ordering.
pub fn search_by_key<'a, S, K, E>(seq: &'a S, target: &K, extract: E) -> Option<usize>
where
    S: KeySequence + ?Sized,
    E: Fn(&'a S::Item) -> K,
    K: Ord,
{
    probe(seq, target, &extract, &K::cmp)
}

fn probe<'a, S, K, E, C>(seq: &'a S, target: &K, extract: &E, compare: &C) -> Option<usize>
where
    S: KeySequence + ?Sized,
    E: Fn(&'a S::Item) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let len = seq.len();
    if len == 0 {
        return None;
    }

    let mut low = 0;
    let mut high = len - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        match compare(&extract(seq.item(mid)?), target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
            Ordering::Equal => return Some(mid),
        }
    }

    None
}
