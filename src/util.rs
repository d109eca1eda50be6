/// Indices of all elements that are equal to the maximum.
/// Incomparable elements (NaN) are skipped.
pub fn max_indices<T: PartialOrd>(iter: impl Iterator<Item = T>) -> Vec<usize> {
    let mut max: Option<T> = None;
    let mut indices = Vec::new();
    for (i, v) in iter.enumerate() {
        match max.as_ref().and_then(|m| v.partial_cmp(m)) {
            Some(std::cmp::Ordering::Less) => {}
            Some(std::cmp::Ordering::Equal) => indices.push(i),
            Some(std::cmp::Ordering::Greater) => {
                indices.clear();
                indices.push(i);
                max = Some(v);
            }
            None if max.is_none() && v.partial_cmp(&v).is_some() => {
                indices.push(i);
                max = Some(v);
            }
            None => {}
        }
    }
    indices
}

#[cfg(test)]
mod test {
    use super::max_indices;

    #[test]
    fn ties() {
        assert_eq!(max_indices([1.0, 3.0, 2.0, 3.0].into_iter()), vec![1, 3]);
        assert_eq!(max_indices([f64::NAN, 1.0, f64::NAN].into_iter()), vec![1]);
        assert!(max_indices(std::iter::empty::<f64>()).is_empty());
    }
}
