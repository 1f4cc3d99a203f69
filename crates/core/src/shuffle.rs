use crate::RngState;

/// Returns a uniformly random permutation of `items`, leaving the input as is.
pub fn shuffled<T: Clone>(items: &[T], rng: &mut RngState) -> Vec<T> {
    let mut out = items.to_vec();
    rng.shuffle(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_are_untouched() {
        let mut rng = RngState::from_seed(1);
        assert!(shuffled::<u8>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[7], &mut rng), vec![7]);
    }

    #[test]
    fn input_is_preserved_and_output_is_a_permutation() {
        let mut rng = RngState::from_seed(9);
        let input: Vec<u32> = (0..52).collect();
        let out = shuffled(&input, &mut rng);
        assert_eq!(input, (0..52).collect::<Vec<_>>());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
        assert_ne!(out, input);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffled(&input, &mut RngState::from_seed(5));
        let b = shuffled(&input, &mut RngState::from_seed(5));
        let mut direct = input.clone();
        RngState::from_seed(5).shuffle(&mut direct);
        assert_eq!(a, b);
        assert_eq!(a, direct);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut rng = RngState::from_seed(42);
        let mut seen_first = [false; 4];
        for _ in 0..200 {
            let out = shuffled(&[0usize, 1, 2, 3], &mut rng);
            seen_first[out[0]] = true;
        }
        assert!(seen_first.iter().all(|seen| *seen));
    }
}
