// ABOUTME: Levenshtein edit distance between two symbol sequences.
// ABOUTME: Classic dynamic-programming table, generic over any equatable symbol.

/// Computes the Levenshtein distance between two sequences.
///
/// The result is the minimum number of single-symbol insertions, deletions
/// or substitutions needed to turn `a` into `b`. Only the case where both
/// sequences are empty short-circuits; when exactly one is empty the distance
/// is the length of the other.
///
/// Runs in O(n·m) time and space. The table is owned by this call.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() && b.is_empty() {
        return 0;
    }

    let rows = a.len() + 1;
    let cols = b.len() + 1;

    // Row-major (len(a)+1) x (len(b)+1) table. Cell (i, j) holds the distance
    // between the first i symbols of `a` and the first j symbols of `b`.
    let mut table = vec![0usize; rows * cols];
    for i in 0..rows {
        table[i * cols] = i;
    }
    for j in 0..cols {
        table[j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = table[(i - 1) * cols + j] + 1;
            let substitution = table[(i - 1) * cols + (j - 1)] + cost;
            let insertion = table[i * cols + (j - 1)] + 1;
            table[i * cols + j] = deletion.min(substitution).min(insertion);
        }
    }

    table[rows * cols - 1]
}

/// Levenshtein distance between two strings, counted in Unicode scalar values.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}
