use crate::core::combinations::IndexCombinations;
use crate::core::pruning::PrefixMaxSums;
use crate::domain::model::{BaseCase, SearchOutcome, SearchStats};

/// 找出一個總和剛好等於 `target` 的子集。
///
/// 依子集大小由小到大搜尋，同一大小內以遞減排序後的字典序列舉，
/// 回傳第一個符合的組合。`values` 必須全為正整數。
pub fn find_matching_subset(values: &[u64], target: u64) -> SearchOutcome {
    SubsetSearch::new().run(values, target).0
}

/// 不需列舉就能決定結果的情況，依序檢查：全集、目標為 0、總和不足
pub fn classify_base_case(total: u128, target: u64) -> Option<BaseCase> {
    let wanted = u128::from(target);
    if total == wanted {
        Some(BaseCase::FullSet)
    } else if target == 0 {
        Some(BaseCase::ZeroTarget)
    } else if total < wanted {
        Some(BaseCase::Unreachable)
    } else {
        None
    }
}

/// 以 u128 累加，超過 u64 的總和不會被截斷成假的匹配
pub(crate) fn exact_total(values: &[u64]) -> u128 {
    values.iter().map(|&v| u128::from(v)).sum()
}

#[derive(Debug, Clone, Copy)]
pub struct SubsetSearch {
    prune: bool,
}

impl SubsetSearch {
    pub fn new() -> Self {
        Self { prune: true }
    }

    /// 關閉剪枝不會改變結果，只會多檢查一些候選子集
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn run(&self, values: &[u64], target: u64) -> (SearchOutcome, SearchStats) {
        let mut stats = SearchStats::default();
        let wanted = u128::from(target);

        if let Some(base_case) = classify_base_case(exact_total(values), target) {
            stats.base_case = Some(base_case);
            let outcome = match base_case {
                BaseCase::FullSet => {
                    stats.matched_size = Some(values.len());
                    SearchOutcome::Found(values.to_vec())
                }
                BaseCase::ZeroTarget => {
                    stats.matched_size = Some(0);
                    SearchOutcome::Found(Vec::new())
                }
                BaseCase::Unreachable => SearchOutcome::NotFound,
            };
            return (outcome, stats);
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let bounds = PrefixMaxSums::new(&sorted);

        for size in 0..=sorted.len() {
            if self.prune && !bounds.can_reach(size, target) {
                stats.sizes_pruned += 1;
                tracing::debug!(
                    "Skipping size {}: max sum {} < target {}",
                    size,
                    bounds.max_sum(size),
                    target
                );
                continue;
            }

            stats.sizes_searched += 1;
            let mut combinations = IndexCombinations::new(sorted.len(), size);
            while let Some(indices) = combinations.advance() {
                stats.candidates_examined += 1;
                let sum: u128 = indices.iter().map(|&i| u128::from(sorted[i])).sum();
                if sum == wanted {
                    let subset: Vec<u64> = indices.iter().map(|&i| sorted[i]).collect();
                    stats.matched_size = Some(size);
                    tracing::debug!(
                        "Matched at size {} after {} candidates",
                        size,
                        stats.candidates_examined
                    );
                    return (SearchOutcome::Found(subset), stats);
                }
            }
        }

        (SearchOutcome::NotFound, stats)
    }
}

impl Default for SubsetSearch {
    fn default() -> Self {
        Self::new()
    }
}
