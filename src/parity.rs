/// Index of the first value where `actual` departs from `expected`.
///
/// When one sequence is a strict prefix of the other the shorter length is
/// returned. `None` means the sequences are identical.
pub fn first_divergence<T: PartialEq>(expected: &[T], actual: &[T]) -> Option<usize> {
    let common = expected.len().min(actual.len());
    (0..common)
        .find(|&i| expected[i] != actual[i])
        .or_else(|| (expected.len() != actual.len()).then_some(common))
}
