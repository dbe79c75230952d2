//! Unit-cost edit distance.

/// Levenshtein distance between `a` and `b`.
///
/// Insertions, deletions and substitutions each cost one; transpositions
/// get no special treatment. Computed over characters, not bytes, with a
/// single rolling DP row.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let saved = row[j + 1];
            let cost = if ac == *bc { 0 } else { 1 };
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(prev + cost);
            prev = saved;
        }
    }
    row[b.len()]
}
