/*!
Geometric skip sampling.

Selecting every index of `0..end` independently with probability `p` does not require one
random draw per index: the gap to the next selected index follows a geometric distribution.
[`SkipSampler`] draws these gaps directly, so the cost is proportional to the number of
selected indices. For `p > 1/2` the roles are swapped and the (fewer) rejected indices are
sampled instead.
*/

use rand::Rng;
use rand_distr::{Distribution, Geometric};

/// Bernoulli sampling over an index range by geometric jumps
#[derive(Debug, Copy, Clone)]
pub struct SkipSampler {
    prob: f64,
    end: u64,
}

impl SkipSampler {
    /// Creates a sampler selecting each index of `0..end` with probability `prob`.
    /// `prob` is expected to be a valid probability.
    pub fn new(prob: f64, end: u64) -> Self {
        debug_assert!((0.0..=1.0).contains(&prob));
        Self { prob, end }
    }

    /// Returns an iterator over the selected indices in increasing order
    pub fn iter<R: Rng>(self, rng: &mut R) -> SkipSamplerIter<'_, R> {
        let inverted = self.prob > 0.5;
        let gap_prob = if inverted { 1.0 - self.prob } else { self.prob };
        let gaps = (gap_prob > 0.0).then(|| Geometric::new(gap_prob).ok()).flatten();

        let mut iter = SkipSamplerIter {
            rng,
            gaps,
            inverted,
            cur: 0,
            end: self.end,
            next_rejected: u64::MAX,
        };
        if inverted {
            iter.next_rejected = iter.jump(0);
        }
        iter
    }
}

/// Iterator returned by [`SkipSampler::iter`]
#[derive(Debug)]
pub struct SkipSamplerIter<'a, R: Rng> {
    rng: &'a mut R,
    /// `None` if the sampled event never happens
    gaps: Option<Geometric>,
    inverted: bool,
    cur: u64,
    end: u64,
    next_rejected: u64,
}

impl<R: Rng> SkipSamplerIter<'_, R> {
    /// Position of the next event at or after `from`; `u64::MAX` if there is none
    fn jump(&mut self, from: u64) -> u64 {
        match &self.gaps {
            Some(distr) => from.saturating_add(distr.sample(&mut *self.rng)),
            None => u64::MAX,
        }
    }
}

impl<R: Rng> Iterator for SkipSamplerIter<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inverted {
            if self.cur >= self.end {
                return None;
            }
            let selected = self.jump(self.cur);
            if selected >= self.end {
                self.cur = self.end;
                return None;
            }
            self.cur = selected + 1;
            return Some(selected);
        }

        while self.cur < self.end {
            let x = self.cur;
            self.cur += 1;
            if x == self.next_rejected {
                self.next_rejected = self.jump(self.cur);
            } else {
                return Some(x);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for end in [0, 3, 10] {
            assert_eq!(SkipSampler::new(1.0, end).iter(rng).count(), end as usize);
            assert_eq!(SkipSampler::new(0.0, end).iter(rng).count(), 0);
        }
        assert_eq!(
            SkipSampler::new(1.0, 5).iter(rng).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn strictly_increasing_and_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        for prob in [0.1, 0.5, 0.9] {
            let xs: Vec<u64> = SkipSampler::new(prob, 1000).iter(rng).collect();
            assert!(xs.windows(2).all(|w| w[0] < w[1]));
            assert!(xs.iter().all(|&x| x < 1000));
        }
    }

    #[test]
    fn occurrences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for prob in [0.25, 0.75] {
            let end = 100u64;
            let mut occurrences = vec![0u32; end as usize];
            for _ in 0..1000 {
                for x in SkipSampler::new(prob, end).iter(rng) {
                    occurrences[x as usize] += 1;
                }
            }

            let expected = (1000.0 * prob) as u32;
            assert!(
                occurrences
                    .into_iter()
                    .all(|x| (expected - 100..expected + 100).contains(&x))
            );
        }
    }
}
