/// Returns a new list containing every element of `original` that does not
/// appear in `to_remove`, preserving relative order and duplicates.
pub fn exclusive_list<T: PartialEq + Clone>(original: &[T], to_remove: &[T]) -> Vec<T> {
    original
        .iter()
        .filter(|item| !to_remove.contains(item))
        .cloned()
        .collect()
}
