/// 每個子集大小可達到的最大總和。
///
/// 由遞減排序的數列建立，`max_sum(k)` 即前 `k` 個 (最大的 `k` 個) 元素之和。
/// 以 u128 儲存，u64 數值的總和不會溢位。
#[derive(Debug, Clone)]
pub struct PrefixMaxSums {
    prefix: Vec<u128>,
}

impl PrefixMaxSums {
    pub fn new(sorted_desc: &[u64]) -> Self {
        debug_assert!(sorted_desc.windows(2).all(|w| w[0] >= w[1]));

        let mut prefix = Vec::with_capacity(sorted_desc.len() + 1);
        prefix.push(0u128);
        let mut running = 0u128;
        for &value in sorted_desc {
            running += u128::from(value);
            prefix.push(running);
        }
        Self { prefix }
    }

    pub fn max_sum(&self, size: usize) -> u128 {
        let last = self.prefix.len() - 1;
        self.prefix[size.min(last)]
    }

    /// 大小為 `size` 的子集是否可能湊到 `target`
    pub fn can_reach(&self, size: usize, target: u64) -> bool {
        self.max_sum(size) >= u128::from(target)
    }

    /// 第一個不會被剪掉的大小；前面的大小都湊不到 `target`。
    /// 全部都湊不到時回傳元素個數加一
    pub fn first_reachable_size(&self, target: u64) -> usize {
        (0..self.prefix.len())
            .find(|&size| self.can_reach(size, target))
            .unwrap_or(self.prefix.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sums() {
        let bounds = PrefixMaxSums::new(&[9, 5, 3, 1]);
        assert_eq!(bounds.max_sum(0), 0);
        assert_eq!(bounds.max_sum(1), 9);
        assert_eq!(bounds.max_sum(2), 14);
        assert_eq!(bounds.max_sum(4), 18);
    }

    #[test]
    fn test_can_reach() {
        let bounds = PrefixMaxSums::new(&[4, 4, 4]);
        assert!(!bounds.can_reach(1, 8));
        assert!(bounds.can_reach(2, 8));
        assert!(bounds.can_reach(3, 8));
    }

    #[test]
    fn test_first_reachable_size() {
        let bounds = PrefixMaxSums::new(&[9, 5, 3, 1]);
        assert_eq!(bounds.first_reachable_size(0), 0);
        assert_eq!(bounds.first_reachable_size(9), 1);
        assert_eq!(bounds.first_reachable_size(10), 2);
        assert_eq!(bounds.first_reachable_size(18), 4);
        assert_eq!(bounds.first_reachable_size(19), 5);
    }

    #[test]
    fn test_sums_beyond_u64_are_exact() {
        let bounds = PrefixMaxSums::new(&[u64::MAX, u64::MAX]);
        assert_eq!(bounds.max_sum(2), 2 * u128::from(u64::MAX));
        assert!(bounds.can_reach(2, u64::MAX));
        assert!(!PrefixMaxSums::new(&[u64::MAX - 1]).can_reach(1, u64::MAX));
    }

    #[test]
    fn test_empty_values() {
        let bounds = PrefixMaxSums::new(&[]);
        assert_eq!(bounds.max_sum(0), 0);
        assert!(bounds.can_reach(0, 0));
        assert!(!bounds.can_reach(0, 1));
    }
}
