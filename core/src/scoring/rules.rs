use super::*;

pub const DEFAULT_POINTS_PER_EGG: Points = 10;
pub const DEFAULT_COMBO_BONUS: Points = 5;

/// Every cleared egg is worth the same, multi-egg rolls earn nothing extra.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatScoring {
    pub per_egg: Points,
}

impl Default for FlatScoring {
    fn default() -> Self {
        Self {
            per_egg: DEFAULT_POINTS_PER_EGG,
        }
    }
}

impl ScoringRule for FlatScoring {
    fn score(&self, cleared: &[ClearedEgg], _moves_before: Moves) -> Points {
        egg_total(cleared.len(), self.per_egg)
    }
}

/// Base value per egg plus `combo_bonus` for every pair of eggs cleared by
/// the same roll, so clearing `n` eggs at once beats `n` separate clears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboScoring {
    pub per_egg: Points,
    pub combo_bonus: Points,
}

impl Default for ComboScoring {
    fn default() -> Self {
        Self {
            per_egg: DEFAULT_POINTS_PER_EGG,
            combo_bonus: DEFAULT_COMBO_BONUS,
        }
    }
}

impl ScoringRule for ComboScoring {
    fn score(&self, cleared: &[ClearedEgg], _moves_before: Moves) -> Points {
        let eggs = cleared.len();
        let pairs = eggs.saturating_mul(eggs.saturating_sub(1)) / 2;
        egg_total(eggs, self.per_egg).saturating_add(egg_total(pairs, self.combo_bonus))
    }
}

/// Rewards finishing early: each egg is worth `per_egg` plus the moves that
/// were still available when it was cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveBonusScoring {
    pub per_egg: Points,
}

impl Default for ReserveBonusScoring {
    fn default() -> Self {
        Self {
            per_egg: DEFAULT_POINTS_PER_EGG,
        }
    }
}

impl ScoringRule for ReserveBonusScoring {
    fn score(&self, cleared: &[ClearedEgg], moves_before: Moves) -> Points {
        let per_egg = self.per_egg.saturating_add(moves_before.into());
        egg_total(cleared.len(), per_egg)
    }
}

fn egg_total(count: usize, each: Points) -> Points {
    Points::try_from(count)
        .unwrap_or(Points::MAX)
        .saturating_mul(each)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn cleared(count: usize) -> Vec<ClearedEgg> {
        (0..count)
            .map(|i| ClearedEgg {
                origin: (0, i as Coord),
                exit: (1, i as Coord),
                distance: 1,
            })
            .collect()
    }

    #[test]
    fn flat_is_a_simple_sum() {
        let rule = FlatScoring::default();
        assert_eq!(rule.score(&cleared(0), 5), 0);
        assert_eq!(rule.score(&cleared(1), 5), 10);
        assert_eq!(rule.score(&cleared(3), 5), 30);
    }

    #[test]
    fn combo_adds_pair_bonus() {
        let rule = ComboScoring::default();
        assert_eq!(rule.score(&cleared(1), 5), 10);
        assert_eq!(rule.score(&cleared(2), 5), 25);
        assert_eq!(rule.score(&cleared(3), 5), 45);
    }

    #[test]
    fn reserve_bonus_adds_moves_left() {
        // one nest with a single move left earns 10 + 1
        let rule = ReserveBonusScoring::default();
        assert_eq!(rule.score(&cleared(1), 1), 11);
        assert_eq!(rule.score(&cleared(1), 15), 25);
        assert_eq!(rule.score(&cleared(2), 9), 38);
    }

    #[test]
    fn config_dispatches_to_rule() {
        let flat = ScoringConfig::Flat(FlatScoring { per_egg: 3 });
        assert_eq!(flat.score(&cleared(2), 0), 6);
        assert_eq!(ScoringConfig::default().score(&cleared(2), 0), 25);
    }
}
