use rustc_hash::FxHashMap;

/// Returns a frequency table of the input data: each distinct byte value
/// present mapped to its occurrence count. Symbols that never occur are not
/// in the map, so an empty input yields an empty table. Counting runs through
/// a flat 256-slot array first; one pass over the data, one pass over the
/// array.
pub fn build_frequency_table(data: &[u8]) -> FxHashMap<u8, u32> {
    let mut counts = [0_u32; 256];
    data.iter().for_each(|&el| counts[el as usize] += 1);

    counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(symbol, &count)| (symbol as u8, count))
        .collect()
}

#[cfg(test)]
mod test {
    use super::build_frequency_table;

    #[test]
    fn abc_test() {
        let freqs = build_frequency_table(&[65, 66, 67, 66]);
        assert_eq!(freqs.len(), 3);
        assert_eq!(freqs[&65], 1);
        assert_eq!(freqs[&66], 2);
        assert_eq!(freqs[&67], 1);
    }

    #[test]
    fn empty_test() {
        assert!(build_frequency_table(&[]).is_empty());
    }

    #[test]
    fn single_symbol_test() {
        let freqs = build_frequency_table(&[65, 65, 65]);
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs[&65], 3);
    }

    #[test]
    fn full_range_test() {
        let data: Vec<u8> = (0..=255).collect();
        let freqs = build_frequency_table(&data);
        assert_eq!(freqs.len(), 256);
        assert!(freqs.values().all(|&count| count == 1));
    }
}
