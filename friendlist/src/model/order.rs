use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::FriendRecord;

/// Presentation order: top friends first, then by last name.
///
/// Last names compare as described in [compare_names]. Records that compare [Ordering::Equal]
/// are ties and [sorted] keeps them in input order.
pub fn compare(a: &FriendRecord, b: &FriendRecord) -> Ordering {
    b.top_friend
        .cmp(&a.top_friend)
        .then_with(|| compare_names(a.last_name(), b.last_name()))
}

/// Compares two names ignoring case and accents, so `Émile` sorts with `emile`. Names that only
/// differ by accents or case are ordered by their lowercased characters.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// A sorted copy of `records`. The input slice is left untouched.
pub fn sorted(records: &[FriendRecord]) -> Vec<&FriendRecord> {
    let mut sorted = records.iter().collect::<Vec<_>>();
    // `sort_by` is stable.
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}
