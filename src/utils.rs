/// Row-major pairing function for a bounded second component.
///
/// ```text
/// (a, b) -> a * width + b,   where b < width
/// ```
///
/// Unlike the unbounded [pairing functions][pairing] (Cantor, Szudzik), this one is a
/// bijection onto `0..height*width` when `a < height`, so product state spaces stay dense.
///
/// [pairing]: https://en.wikipedia.org/wiki/Pairing_function
pub fn pair_index(a: usize, b: usize, width: usize) -> usize {
    debug_assert!(b < width, "Second component {} out of range 0..{}", b, width);
    a * width + b
}

/// Inverse of [`pair_index`].
///
/// ```text
/// i -> (i / width, i % width)
/// ```
pub fn unpair_index(index: usize, width: usize) -> (usize, usize) {
    assert_ne!(width, 0, "Width should not be zero");
    (index / width, index % width)
}

/// Index of the `(row, column)` cell in a dense row-major table with `columns` columns.
///
/// Transition tables use this with states as rows and symbols as columns.
pub fn cell_index(row: usize, column: usize, columns: usize) -> usize {
    pair_index(row, column, columns)
}
