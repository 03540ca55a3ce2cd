//! Greedy reduction of a sequence to one with no fixed point against its own
//! sorted order.
//!
//! An index $i$ of $a$ is a *fixed point* if $a\_i$ equals the $i$-th
//! smallest element of $a$. Starting from $a$, the first fixed point is
//! removed repeatedly until none remains or the sequence is empty.
//!
//! # Examples
//! ```
//! use derange::{Derange, FixedPoints};
//!
//! assert_eq!([2, 1, 4, 3].derange(), Some(vec![2, 1, 4, 3]));
//! assert_eq!([1, 2, 3].derange(), None);
//!
//! let a = [1, 3, 2, 2];
//! assert_eq!(a.fixed_points(), [0, 2]);
//! let red = a.derange_traced();
//! assert_eq!(red.removed, [0, 1]);
//! assert_eq!(red.rest, [3, 2]);
//! assert!(red.rest.is_self_deranged());
//! ```
//!
//! # Complexity
//! $O(n^2)$ time in the worst case. The sorted copy is kept up to date by
//! removing the deleted value instead of sorting again, and the scan for the
//! next fixed point resumes where the sorted copy first changed.

pub trait FixedPoints {
    /// Indices $i$ with `self[i]` equal to the $i$-th smallest element.
    fn fixed_points(&self) -> Vec<usize>;
    fn first_fixed_point(&self) -> Option<usize>;
    /// Vacuously `true` for the empty sequence.
    fn is_self_deranged(&self) -> bool { self.first_fixed_point().is_none() }
}

impl<T: Ord> FixedPoints for [T] {
    fn fixed_points(&self) -> Vec<usize> {
        let sorted = sorted_refs(self);
        (0..self.len()).filter(|&i| &self[i] == sorted[i]).collect()
    }
    fn first_fixed_point(&self) -> Option<usize> {
        let sorted = sorted_refs(self);
        (0..self.len()).find(|&i| &self[i] == sorted[i])
    }
}

fn sorted_refs<T: Ord>(a: &[T]) -> Vec<&T> {
    let mut res: Vec<_> = a.iter().collect();
    res.sort_unstable();
    res
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reduction<T> {
    /// Position of each removed element at the time it was removed.
    pub removed: Vec<usize>,
    pub rest: Vec<T>,
}

impl<T> Reduction<T> {
    pub fn found(&self) -> bool { !self.rest.is_empty() }
    pub fn into_result(self) -> Option<Vec<T>> {
        (!self.rest.is_empty()).then_some(self.rest)
    }
}

pub trait Derange {
    type Item;
    /// `None` if every element ends up removed.
    fn derange(&self) -> Option<Vec<Self::Item>>;
    fn derange_traced(&self) -> Reduction<Self::Item>;
}

impl<T: Ord + Clone> Derange for [T] {
    type Item = T;
    fn derange(&self) -> Option<Vec<T>> { self.derange_traced().into_result() }

    fn derange_traced(&self) -> Reduction<T> {
        let mut d = self.to_vec();
        let mut c = self.to_vec();
        c.sort_unstable();

        let mut removed = vec![];
        let mut start = 0;
        while let Some(i) = (start..d.len()).find(|&i| d[i] == c[i]) {
            let x = d.remove(i);
            // c[..r] < x, and r <= i since c[i] == x; neither d[..r] nor
            // c[..r] changes below.
            let r = c.partition_point(|y| y < &x);
            debug_assert!(r <= i && c[r] == x);
            c.remove(r);
            removed.push(i);
            start = r;
        }

        Reduction { removed, rest: d }
    }
}

#[test]
fn sanity_check() {
    assert_eq!(<[i32]>::derange(&[]), None);
    assert_eq!([42].derange(), None);
    assert_eq!([-7].derange_traced().removed, [0]);
    assert_eq!([5, 5, 5].derange(), None);
    assert_eq!([1, 2, 3].derange(), None);
    assert_eq!([1, 2, 3].derange_traced().removed, [0, 0, 0]);

    assert_eq!([2, 1].derange(), Some(vec![2, 1]));
    assert_eq!([2, 1, 4, 3].derange(), Some(vec![2, 1, 4, 3]));
    assert!([2, 1, 4, 3].derange_traced().removed.is_empty());

    assert_eq!([3, 1, 2].fixed_points(), Vec::<usize>::new());
    assert_eq!([1, 3, 2].fixed_points(), [0]);
    assert_eq!([2, 2, 1].first_fixed_point(), Some(1));
    assert!(<[u8]>::is_self_deranged(&[]));
}

#[test]
fn duplicates() {
    // [1, 2, 1, 2] vs [1, 1, 2, 2]: 0 is fixed.
    // [2, 1, 2] vs [1, 2, 2]: 2 is fixed.
    // [2, 1] vs [1, 2].
    let red = [1, 2, 1, 2].derange_traced();
    assert_eq!(red.removed, [0, 2]);
    assert_eq!(red.rest, [2, 1]);

    // [3, 3, 1, 1] vs [1, 1, 3, 3]: nothing fixed.
    assert_eq!([3, 3, 1, 1].derange(), Some(vec![3, 3, 1, 1]));
    // [2, 1, 1] vs [1, 1, 2]: 1 is fixed; [2, 1] vs [1, 2].
    assert_eq!([2, 1, 1].derange(), Some(vec![2, 1]));
}

#[test]
fn resumes_before_removed_position() {
    // [4, 5, 1, 2, 3] vs [1, 2, 3, 4, 5]: nothing fixed.
    assert!([4, 5, 1, 2, 3].is_self_deranged());

    // [2, 3, 1, 3] vs [1, 2, 3, 3]: 3 is fixed, the first 3 in the sorted
    // copy sits at 2; [2, 3, 1] vs [1, 2, 3]: nothing fixed.
    let red = [2, 3, 1, 3].derange_traced();
    assert_eq!(red.removed, [3]);
    assert_eq!(red.rest, [2, 3, 1]);

    // [3, 1, 2, 2] vs [1, 2, 2, 3]: 2 is fixed, the first 2 in the sorted
    // copy sits at 1; [3, 1, 2] vs [1, 2, 3]: nothing fixed.
    let red = [3, 1, 2, 2].derange_traced();
    assert_eq!(red.removed, [2]);
    assert_eq!(red.rest, [3, 1, 2]);
}

#[test]
fn generic_items() {
    let words = ["pear", "apple", "fig"];
    // sorted: apple fig pear
    assert_eq!(words.derange(), Some(words.to_vec()));

    let strings: Vec<String> = ["b", "a", "a"].map(String::from).to_vec();
    assert_eq!(strings.derange().map(|v| v.concat()), Some("ba".to_owned()));
}

#[cfg(test)]
fn is_subsequence<T: Eq>(sub: &[T], of: &[T]) -> bool {
    let mut it = of.iter();
    sub.iter().all(|x| it.any(|y| y == x))
}

#[cfg(test)]
fn check_reduction<T: Ord + Clone + std::fmt::Debug>(a: &[T]) {
    let red = a.derange_traced();
    assert_eq!(
        naive_derange::derange_traced(a),
        (red.removed.clone(), red.rest.clone())
    );

    assert_eq!(red.removed.len() + red.rest.len(), a.len());
    let mut replay = a.to_vec();
    for &i in &red.removed {
        replay.remove(i);
    }
    assert_eq!(replay, red.rest);

    assert!(is_subsequence(&red.rest, a));
    assert!(red.rest.is_self_deranged());
    assert_eq!(red.found(), !red.rest.is_empty());
    if red.found() {
        assert_eq!(red.rest.derange().as_deref(), Some(&red.rest[..]));
        assert!(red.rest.derange_traced().removed.is_empty());
    }
    assert_eq!(a.derange(), red.into_result());
}

#[test]
fn check() {
    for len in 0..=6 {
        for x in 0..4_u32.pow(len) {
            let a: Vec<_> = std::iter::successors(Some(x), |x| Some(x / 4))
                .map(|x| x % 4)
                .take(len as usize)
                .collect();
            check_reduction(&a);
        }
    }
}

#[test]
fn check_random() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use randgen::{Asc, Gen, Perm, Seq};

    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let len = (0..60_usize).generate(&mut rng);
        check_reduction(&Seq { bound: -5_i32..5, len }.generate(&mut rng));
        let wide = Seq { bound: i32::MIN..i32::MAX, len };
        check_reduction(&wide.generate(&mut rng));
        check_reduction(&Perm { len }.generate(&mut rng));

        let asc = Asc { bound: -20_i32..20, len }.generate(&mut rng);
        assert_eq!(asc.derange(), None);
        assert_eq!(asc.fixed_points().len(), len);
    }
}
