//! Declarative flag rules for per-episode facts.
//!
//! Each fact is an ordered list of `(condition, outcome)` pairs with an
//! explicit fallback. Rule order is part of the data: `first_match` stops at
//! the first condition that holds, `last_match` lets later rules override
//! earlier ones.

use std::iter::StepBy;
use std::ops::RangeInclusive;

use crate::tables::{Ending, Ep1ActivityGuess, Ep1MemoryCard, Ep1Resolution};

use super::format::FlagSource;

/// A test over one or more flags.
#[derive(Debug)]
pub enum Condition {
    Set(u16),
    Unset(u16),
    AnySet(&'static [u16]),
    All(&'static [Condition]),
}

impl Condition {
    pub fn holds<F: FlagSource + ?Sized>(&self, flags: &F) -> bool {
        match self {
            Condition::Set(flag) => flags.is_flag_set(*flag),
            Condition::Unset(flag) => !flags.is_flag_set(*flag),
            Condition::AnySet(set) => set.iter().any(|&flag| flags.is_flag_set(flag)),
            Condition::All(conditions) => conditions.iter().all(|c| c.holds(flags)),
        }
    }

    /// Every flag index this condition reads.
    pub fn flags(&self) -> Vec<u16> {
        match self {
            Condition::Set(flag) | Condition::Unset(flag) => vec![*flag],
            Condition::AnySet(set) => set.to_vec(),
            Condition::All(conditions) => conditions.iter().flat_map(Condition::flags).collect(),
        }
    }
}

#[derive(Debug)]
pub struct Rule<T: 'static> {
    pub when: Condition,
    pub then: T,
}

/// Ordered rules plus the outcome used when none apply.
#[derive(Debug)]
pub struct DecisionTable<T: 'static> {
    pub rules: &'static [Rule<T>],
    pub fallback: T,
}

impl<T: Copy> DecisionTable<T> {
    /// Outcome of the first rule that holds.
    pub fn first_match<F: FlagSource + ?Sized>(&self, flags: &F) -> T {
        self.rules
            .iter()
            .find(|rule| rule.when.holds(flags))
            .map_or(self.fallback, |rule| rule.then)
    }

    /// Outcome of the last rule that holds.
    pub fn last_match<F: FlagSource + ?Sized>(&self, flags: &F) -> T {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.when.holds(flags))
            .map_or(self.fallback, |rule| rule.then)
    }
}

/// Counts set flags at `start, start + step, ...` up to and including `stop`.
#[derive(Debug)]
pub struct StrideCount {
    pub start: u16,
    pub stop: u16,
    pub step: u16,
}

impl StrideCount {
    pub fn positions(&self) -> StepBy<RangeInclusive<u16>> {
        (self.start..=self.stop).step_by(usize::from(self.step.max(1)))
    }

    pub fn count<F: FlagSource + ?Sized>(&self, flags: &F) -> u32 {
        self.positions()
            .filter(|&flag| flags.is_flag_set(flag))
            .fold(0, |n, _| n + 1)
    }

    /// Largest value `count` can return.
    pub fn max(&self) -> u32 {
        self.positions().fold(0, |n, _| n + 1)
    }
}

/// Flags that mark a checkpoint as a finished playthrough.
pub const COMPLETION_FLAGS: &[u16] = &[4379, 4380, 4381, 4382, 4628];

/// Ending checks, evaluated with `last_match`.
///
/// Several ending flags can be set at once; the later entries win, so
/// Tsuruya outranks Haruhi, Haruhi outranks Mikuru, and so on.
pub static ENDINGS: DecisionTable<Ending> = DecisionTable {
    rules: &[
        Rule { when: Condition::Set(4314), then: Ending::Koizumi },
        Rule { when: Condition::Set(4313), then: Ending::Nagato },
        Rule { when: Condition::Set(4312), then: Ending::Mikuru },
        Rule { when: Condition::Set(4311), then: Ending::Haruhi },
        Rule { when: Condition::Set(4315), then: Ending::Tsuruya },
    ],
    fallback: Ending::Unknown,
};

/// TR05 reached without taking the first EV1_002 choice.
pub static GAME_OVER_TUTORIAL: DecisionTable<bool> = DecisionTable {
    rules: &[Rule {
        when: Condition::All(&[Condition::Set(1016), Condition::Unset(1196)]),
        then: true,
    }],
    fallback: false,
};

/// EV1_001 choices SEL001 to SEL003.
pub static EP1_ACTIVITY_GUESS: DecisionTable<Ep1ActivityGuess> = DecisionTable {
    rules: &[
        Rule { when: Condition::Set(1167), then: Ep1ActivityGuess::GoSwimming },
        Rule { when: Condition::Set(1168), then: Ep1ActivityGuess::GoCamping },
        Rule { when: Condition::Set(1169), then: Ep1ActivityGuess::SummerCamp },
    ],
    fallback: Ep1ActivityGuess::DidntGuess,
};

/// One flag per computer society member, on every other index.
pub static EP1_COMP_SOC_INTERVIEWS: StrideCount = StrideCount {
    start: 1181,
    stop: 1189,
    step: 2,
};

/// Took or returned the memory card, across the five scenes where it can happen.
pub static EP1_MEMORY_CARD: DecisionTable<Ep1MemoryCard> = DecisionTable {
    rules: &[
        Rule {
            when: Condition::AnySet(&[1204, 1237, 1264, 1277, 1289]),
            then: Ep1MemoryCard::Took,
        },
        Rule {
            when: Condition::AnySet(&[1205, 1238, 1265, 1276, 1290]),
            then: Ep1MemoryCard::Returned,
        },
    ],
    fallback: Ep1MemoryCard::DidntFind,
};

/// EV1_026 to EV1_029.
pub static EP1_RESOLUTION: DecisionTable<Ep1Resolution> = DecisionTable {
    rules: &[
        Rule { when: Condition::Set(1393), then: Ep1Resolution::H2o },
        Rule { when: Condition::Set(1396), then: Ep1Resolution::SwappedPlates },
        Rule { when: Condition::Set(1399), then: Ep1Resolution::OffByH2oPlates },
        Rule { when: Condition::Set(1402), then: Ep1Resolution::Misunderstanding },
    ],
    fallback: Ep1Resolution::Unresolved,
};
