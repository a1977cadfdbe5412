/// 次元ごとの満点（合計 100）
pub const WEIGHTS: Weights = Weights {
    location: 30,
    category: 25,
    background: 20,
    availability: 10,
    frequency: 10,
    timing: 5,
};

/// カテゴリの部分一致: 1 件あたり 5 点、上限 15 点
pub const CATEGORY_SUBSTRING_POINTS: u32 = 5;
pub const CATEGORY_SUBSTRING_CAP: u32 = 15;

/// 部分点
pub const BACKGROUND_PARTIAL: u32 = 10;
pub const AVAILABILITY_PARTIAL: u32 = 5;
pub const FREQUENCY_PARTIAL: u32 = 5;
pub const TIMING_PARTIAL: u32 = 2;

/// これ未満の候補者は結果に残さない
pub const DEFAULT_MIN_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub location: u32,
    pub category: u32,
    pub background: u32,
    pub availability: u32,
    pub frequency: u32,
    pub timing: u32,
}

impl Weights {
    pub const fn sum(&self) -> u32 {
        self.location
            + self.category
            + self.background
            + self.availability
            + self.frequency
            + self.timing
    }
}

/// Highest total a candidate can reach.
pub const MAX_TOTAL_SCORE: u32 = WEIGHTS.sum();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        assert_eq!(WEIGHTS.sum(), 100);
        assert_eq!(MAX_TOTAL_SCORE, 100);
    }

    #[test]
    fn partial_credit_never_exceeds_full_weight() {
        assert!(CATEGORY_SUBSTRING_CAP < WEIGHTS.category);
        assert!(BACKGROUND_PARTIAL < WEIGHTS.background);
        assert!(AVAILABILITY_PARTIAL < WEIGHTS.availability);
        assert!(FREQUENCY_PARTIAL < WEIGHTS.frequency);
        assert!(TIMING_PARTIAL < WEIGHTS.timing);
    }
}
