/// 以字典序列舉 `0..n` 中所有大小為 `k` 的索引組合，不預先產生整個集合。
///
/// `advance` 借出內部緩衝區，每次前進不需配置記憶體；
/// 同時也實作 `Iterator<Item = Vec<usize>>` 方便一般使用。
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    /// 前進到下一個組合並回傳其索引 (遞增排列)
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        // 找出最右邊還能再往右移的位置
        let mut i = k;
        loop {
            if i == 0 {
                self.exhausted = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(&self.indices)
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}
