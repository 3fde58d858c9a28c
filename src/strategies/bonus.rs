use crate::domain::model::Seller;
use crate::domain::ports::BonusStrategy;

/// Default bonus policy: a currency amount scaled by rank tier, title and
/// distance from the bottom of the ranking.
///
/// The tier coefficient is 0.15 for first place, 0.10 for second and
/// third, 0.05 for ranks 3-9 and 0.02 below that; a "Senior" title adds
/// 0.03. The result is `base * (1 + coefficient) * (1 - index/total)`,
/// rounded to a whole currency unit.
#[derive(Debug, Clone, Copy)]
pub struct RankScaledBonus {
    pub base: f64,
}

impl Default for RankScaledBonus {
    fn default() -> Self {
        Self { base: 1000.0 }
    }
}

impl BonusStrategy for RankScaledBonus {
    fn bonus(&self, index: usize, total: usize, seller: &Seller) -> f64 {
        let mut coefficient = match index {
            0 => 0.15,
            1 | 2 => 0.10,
            3..=9 => 0.05,
            _ => 0.02,
        };
        if seller.position.contains("Senior") {
            coefficient += 0.03;
        }
        (self.base * (1.0 + coefficient) * (1.0 - index as f64 / total as f64)).round()
    }
}

/// Alternate bonus policy: a flat rate keyed purely by rank tier. First
/// place gets 15%, second and third 10%, last place nothing, everyone in
/// between 5%. A lone seller counts as first place.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTierBonus;

impl BonusStrategy for FlatTierBonus {
    fn bonus(&self, index: usize, total: usize, _seller: &Seller) -> f64 {
        if total == 1 || index == 0 {
            0.15
        } else if index == 1 || index == 2 {
            0.10
        } else if index == total - 1 {
            0.0
        } else {
            0.05
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(position: &str) -> Seller {
        Seller {
            id: "s1".to_string(),
            first_name: None,
            last_name: None,
            name: None,
            position: position.to_string(),
        }
    }

    #[test]
    fn test_rank_scaled_lone_seller() {
        let bonus = RankScaledBonus::default().bonus(0, 1, &seller("Sales"));
        assert_eq!(bonus, 1150.0); // 1000 * 1.15 * (1 - 0/1)
    }

    #[test]
    fn test_rank_scaled_tiers() {
        let strategy = RankScaledBonus::default();
        let s = seller("Sales");
        // index 1 of 2: 1000 * 1.10 * 0.5
        assert_eq!(strategy.bonus(1, 2, &s), 550.0);
        // index 4 of 20: 1000 * 1.05 * 0.8
        assert_eq!(strategy.bonus(4, 20, &s), 840.0);
        // index 10 of 20: 1000 * 1.02 * 0.5
        assert_eq!(strategy.bonus(10, 20, &s), 510.0);
    }

    #[test]
    fn test_rank_scaled_senior_title_bump() {
        let strategy = RankScaledBonus::default();
        assert_eq!(strategy.bonus(0, 1, &seller("Senior Sales")), 1180.0); // 1000 * 1.18
        // case-sensitive substring match
        assert_eq!(strategy.bonus(0, 1, &seller("senior sales")), 1150.0);
    }

    #[test]
    fn test_flat_tier_table() {
        let strategy = FlatTierBonus;
        let s = seller("Sales");
        assert_eq!(strategy.bonus(0, 1, &s), 0.15);
        assert_eq!(strategy.bonus(0, 6, &s), 0.15);
        assert_eq!(strategy.bonus(1, 6, &s), 0.10);
        assert_eq!(strategy.bonus(2, 6, &s), 0.10);
        assert_eq!(strategy.bonus(3, 6, &s), 0.05);
        assert_eq!(strategy.bonus(5, 6, &s), 0.0); // last place
    }
}
