use std::iter::FusedIterator;

/// Cuenta regresiva de ticks enteros: N, N-1, ..., 1, 0.
///
/// Siempre termina en 0 (incluido), nunca produce negativos. `Countdown::new(0)`
/// produce un único tick `0`.
#[derive(Debug, Clone)]
pub struct Countdown {
    next: Option<u64>,
}

impl Countdown {
    pub fn new(from: u64) -> Self { Self { next: Some(from) } }
}

impl Iterator for Countdown {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = current.checked_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(n) => {
                let len = usize::try_from(n).map_or(usize::MAX, |n| n.saturating_add(1));
                (len, Some(len))
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Countdown {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero_inclusive() {
        let ticks: Vec<u64> = Countdown::new(5).collect();
        assert_eq!(ticks, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn zero_length_countdown_still_emits_final_tick() {
        let ticks: Vec<u64> = Countdown::new(0).collect();
        assert_eq!(ticks, vec![0]);
    }

    #[test]
    fn strictly_decreasing_and_exhausted() {
        let mut c = Countdown::new(10);
        assert_eq!(c.size_hint(), (11, Some(11)));
        let ticks: Vec<u64> = c.by_ref().collect();
        assert!(ticks.windows(2).all(|w| w[0] == w[1] + 1));
        assert_eq!(ticks.last(), Some(&0));
        assert_eq!(c.next(), None);
    }
}
