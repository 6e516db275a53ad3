use subset_sum::config::{CENSUS_POPULATIONS, CENSUS_TARGET};
use subset_sum::{find_matching_subset, SearchOutcome, SubsetSearch};

/// 檢查結果是原始輸入的子多重集合 (不會重複使用元素)
fn is_sub_multiset(subset: &[u64], values: &[u64]) -> bool {
    let mut remaining = values.to_vec();
    subset.iter().all(|v| match remaining.iter().position(|r| r == v) {
        Some(index) => {
            remaining.swap_remove(index);
            true
        }
        None => false,
    })
}

#[test]
fn test_full_set_matches_target() {
    let values = [7, 1, 9, 3];
    assert_eq!(
        find_matching_subset(&values, 20),
        SearchOutcome::Found(values.to_vec())
    );
}

#[test]
fn test_zero_target_returns_empty_subset() {
    assert_eq!(find_matching_subset(&[4, 8, 15], 0), SearchOutcome::Found(vec![]));
}

#[test]
fn test_empty_values_with_zero_target() {
    assert_eq!(find_matching_subset(&[], 0), SearchOutcome::Found(vec![]));
}

#[test]
fn test_empty_values_with_positive_target() {
    assert_eq!(find_matching_subset(&[], 3), SearchOutcome::NotFound);
}

#[test]
fn test_target_above_total_is_not_found() {
    assert_eq!(find_matching_subset(&[1, 2, 3], 100), SearchOutcome::NotFound);
}

#[test]
fn test_single_element_preferred_over_pair() {
    assert_eq!(find_matching_subset(&[5, 3, 2], 5), SearchOutcome::Found(vec![5]));
}

#[test]
fn test_repeated_values() {
    assert_eq!(find_matching_subset(&[4, 4, 4], 8), SearchOutcome::Found(vec![4, 4]));
}

#[test]
fn test_every_witness_is_valid() {
    let values = [12, 7, 3, 19, 5, 5, 1, 30];
    let total: u64 = values.iter().sum();

    for target in 0..=total + 2 {
        match find_matching_subset(&values, target) {
            SearchOutcome::Found(subset) => {
                assert_eq!(subset.iter().sum::<u64>(), target, "target {}", target);
                assert!(is_sub_multiset(&subset, &values), "target {}", target);
            }
            SearchOutcome::NotFound => {
                // 暴力確認真的沒有解
                let n = values.len();
                let exists = (0u32..1 << n).any(|mask| {
                    (0..n)
                        .filter(|i| mask & (1 << i) != 0)
                        .map(|i| values[i])
                        .sum::<u64>()
                        == target
                });
                assert!(!exists, "missed a subset for target {}", target);
            }
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let values = [31, 41, 59, 26, 53, 58, 97, 93, 23, 84];
    let first = find_matching_subset(&values, 200);
    for _ in 0..5 {
        assert_eq!(find_matching_subset(&values, 200), first);
    }
}

#[test]
fn test_input_order_does_not_change_result() {
    let a = find_matching_subset(&[2, 9, 4, 7, 1], 13);
    let b = find_matching_subset(&[9, 7, 4, 2, 1], 13);
    assert_eq!(a, b);
    assert_eq!(a, SearchOutcome::Found(vec![9, 4]));
}

#[test]
fn test_census_populations_reach_one_hundred_million() {
    let (outcome, stats) = SubsetSearch::new().run(&CENSUS_POPULATIONS, CENSUS_TARGET);

    let subset = outcome.subset().expect("census target should be reachable");
    assert_eq!(subset.iter().sum::<u64>(), CENSUS_TARGET);
    assert!(is_sub_multiset(subset, &CENSUS_POPULATIONS));
    // 最大的 14 個相加仍不到一億，大小 0..=14 全部剪掉
    assert_eq!(stats.sizes_pruned, 15);
    assert_eq!(stats.matched_size, Some(18));
    assert_eq!(stats.candidates_examined, 16_399_209);
    assert_eq!(
        subset,
        &[
            18897109, 12828837, 9461105, 6371773, 5946800, 5582170, 5268860, 4552402, 4335391,
            4296250, 4224851, 3279833, 3095313, 2812896, 2543482, 2226009, 2142508, 2134411,
        ][..]
    );
}
