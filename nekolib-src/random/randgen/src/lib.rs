use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` values drawn independently from `bound`.
pub struct Seq<B> {
    pub bound: B,
    pub len: usize,
}

/// Non-decreasing `len` values drawn from `bound`.
pub struct Asc<B> {
    pub bound: B,
    pub len: usize,
}

/// A shuffled arrangement of `1..=len`.
pub struct Perm {
    pub len: usize,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Range<usize> {
    type Output = usize;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl<B: Gen> Gen for Seq<B> {
    type Output = Vec<B::Output>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (0..self.len).map(|_| self.bound.generate(rng)).collect()
    }
}

impl<B: Gen> Gen for Asc<B>
where
    B::Output: Ord,
{
    type Output = Vec<B::Output>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { bound, len } = self;
        let mut res = Seq { bound, len: *len }.generate(rng);
        res.sort_unstable();
        res
    }
}

impl<B: Gen> Gen for &'_ B {
    type Output = B::Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        (*self).generate(rng)
    }
}

impl Gen for Perm {
    type Output = Vec<i32>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut res: Vec<_> = (1..=self.len as i32).collect();
        res.shuffle(rng);
        res
    }
}

#[test]
fn sanity_check() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let a = Seq { bound: -3_i32..3, len: 50 }.generate(&mut rng);
    assert_eq!(a.len(), 50);
    assert!(a.iter().all(|x| (-3..3).contains(x)));

    let a = Asc { bound: 0_i32..5, len: 20 }.generate(&mut rng);
    assert!(a.windows(2).all(|w| w[0] <= w[1]));

    let mut p = Perm { len: 8 }.generate(&mut rng);
    p.sort_unstable();
    assert_eq!(p, (1..=8).collect::<Vec<_>>());
}
