use std::{collections::HashMap, hash::Hash};

/// Groups values by key. Groups appear in order of their key's first
/// occurrence and keep their values in input order.
pub(crate) fn group_by_key<K, V, I>(pairs: I) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut index = HashMap::<K, usize>::new();
    let mut groups = Vec::<(K, Vec<V>)>::new();
    for (key, value) in pairs {
        match index.get(&key) {
            Some(&i) => groups[i].1.push(value),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![value]));
            }
        }
    }
    groups
}

/// Truncates `label` to `keep` characters followed by `...` when it is longer
/// than `max` characters.
pub(crate) fn truncate_label(label: &str, max: usize, keep: usize) -> String {
    if label.chars().count() > max {
        let mut short = label.chars().take(keep).collect::<String>();
        short.push_str("...");
        short
    } else {
        label.to_owned()
    }
}
