use std::collections::HashMap;

use crate::error::PipelineError;
use crate::tokenize::tokenize;

pub type FreqTable = HashMap<String, u64>;

pub fn count_line(frequency: &mut FreqTable, line: &str) {
    for word in tokenize(line) {
        *frequency.entry(word).or_insert(0) += 1;
    }
}

/// Additive merge: counts for shared words are summed, distinct words
/// are unioned. Commutative and associative, so the final table does not
/// depend on how the input was partitioned.
pub fn merge(mut into: FreqTable, from: FreqTable) -> FreqTable {
    for (word, count) in from {
        *into.entry(word).or_insert(0) += count;
    }
    into
}

/// Counts all words across `lines` on a pool of `threads` scoped workers.
/// Each worker tokenizes a contiguous chunk of lines into its own table;
/// the partial tables are merged after the join barrier.
pub fn count_lines(lines: &[String], threads: usize) -> Result<FreqTable, PipelineError> {
    let threads = threads.max(1);
    let part_size = lines.len() / threads + 1;

    let result = crossbeam::scope(|scope| {
        let mut workers = Vec::with_capacity(threads);
        for part in lines.chunks(part_size) {
            workers.push(scope.spawn(move |_| {
                let mut frequency = FreqTable::new();
                for line in part {
                    count_line(&mut frequency, line);
                }
                frequency
            }));
        }

        let mut merged = FreqTable::new();
        for worker in workers {
            let part_frequency = worker
                .join()
                .map_err(|_| PipelineError::Processing("worker thread panicked".to_string()))?;
            merged = merge(merged, part_frequency);
        }
        Ok(merged)
    })
    .map_err(|_| PipelineError::Processing("worker pool failed".to_string()))?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn it_should_sum_counts_on_merge() {
        let mut left = FreqTable::new();
        left.insert("cat".to_string(), 2);
        left.insert("dog".to_string(), 1);
        let mut right = FreqTable::new();
        right.insert("cat".to_string(), 1);
        right.insert("fox".to_string(), 4);

        let merged = merge(left, right);
        assert_eq!(merged.get("cat"), Some(&3));
        assert_eq!(merged.get("dog"), Some(&1));
        assert_eq!(merged.get("fox"), Some(&4));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn it_should_merge_commutatively() {
        let mut left = FreqTable::new();
        left.insert("one".to_string(), 1);
        left.insert("two".to_string(), 2);
        let mut right = FreqTable::new();
        right.insert("two".to_string(), 5);
        right.insert("three".to_string(), 3);

        assert_eq!(merge(left.clone(), right.clone()), merge(right, left));
    }

    #[test]
    fn it_should_count_multiple_lines() {
        let lines = owned(&["cat dog", "dog cat cat"]);
        let frequency = count_lines(&lines, 2).unwrap();
        assert_eq!(frequency.get("cat"), Some(&3));
        assert_eq!(frequency.get("dog"), Some(&2));
        assert_eq!(frequency.len(), 2);
    }

    #[test]
    fn it_should_not_depend_on_partitioning() {
        let lines = owned(&[
            "one two three one two two",
            "three Three THREE",
            "don't-stop-2times don't-stop-2times",
            "",
            "  spaced   out  ",
        ]);

        let reference = count_lines(&lines, 1).unwrap();
        for threads in &[2, 3, 5, 16] {
            assert_eq!(count_lines(&lines, *threads).unwrap(), reference);
        }
    }

    #[test]
    fn it_should_conserve_the_total_word_count() {
        let lines = owned(&["one two three one two two", "Hello, World! hello world"]);
        let total_words: u64 = lines
            .iter()
            .map(|line| tokenize(line).count() as u64)
            .sum();

        let frequency = count_lines(&lines, 4).unwrap();
        assert_eq!(frequency.values().sum::<u64>(), total_words);
    }

    #[test]
    fn it_should_accept_zero_threads_as_one() {
        let lines = owned(&["a b a"]);
        let frequency = count_lines(&lines, 0).unwrap();
        assert_eq!(frequency.get("a"), Some(&2));
    }

    #[test]
    fn it_should_produce_an_empty_table_for_no_lines() {
        let frequency = count_lines(&[], 8).unwrap();
        assert!(frequency.is_empty());
    }
}
