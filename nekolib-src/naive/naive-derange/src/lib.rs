// Greedy removal of the first fixed point, re-sorting from scratch each step.
// O(n^2 log(n)) time.

/// Returns the indices removed (positions at the time of each removal, in
/// order) and the sequence left over.
pub fn derange_traced<T: Ord + Clone>(a: &[T]) -> (Vec<usize>, Vec<T>) {
    let mut d = a.to_vec();
    let mut removed = vec![];
    loop {
        if d.is_empty() {
            return (removed, d);
        }
        let mut c = d.clone();
        c.sort();
        match (0..d.len()).find(|&i| d[i] == c[i]) {
            Some(i) => {
                d.remove(i);
                removed.push(i);
            }
            None => return (removed, d),
        }
    }
}

pub fn derange<T: Ord + Clone>(a: &[T]) -> Option<Vec<T>> {
    let (_, d) = derange_traced(a);
    (!d.is_empty()).then_some(d)
}

#[test]
fn sanity_check() {
    assert_eq!(derange::<i32>(&[]), None);
    assert_eq!(derange(&[7]), None);
    assert_eq!(derange(&[5, 5, 5]), None);
    assert_eq!(derange(&[1, 2, 3]), None);
    assert_eq!(derange(&[2, 1]), Some(vec![2, 1]));
    assert_eq!(derange(&[2, 1, 4, 3]), Some(vec![2, 1, 4, 3]));

    assert_eq!(derange_traced(&[1, 2, 3]), (vec![0, 0, 0], vec![]));
    // [1, 3, 2, 2] vs [1, 2, 2, 3]: 0 is fixed; then [3, 2, 2] vs [2, 2, 3]:
    // 1 is fixed; then [3, 2] vs [2, 3].
    assert_eq!(derange_traced(&[1, 3, 2, 2]), (vec![0, 1], vec![3, 2]));
}
