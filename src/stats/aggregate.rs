use std::collections::{BTreeMap, HashMap};

use crate::save::SaveRecord;
use crate::save::rules::EP1_COMP_SOC_INTERVIEWS;
use crate::tables::{
    Character, Ending, Ep1ActivityGuess, Ep1MemoryCard, Ep1Resolution, GameOverTutorial,
    ROUTE_GROUPS, SideCharacter, TOPICS,
};

use super::{FriendshipAverages, RouteAggregate, TopicAggregate, WrappedStats};

/// Fold every valid record into a fresh snapshot.
///
/// Invalid records are skipped. An empty corpus yields the zero-filled
/// snapshot; averages over an empty subset are 0.
pub fn aggregate(records: &[SaveRecord]) -> WrappedStats {
    records
        .iter()
        .filter(|record| record.is_valid)
        .fold(Accumulator::new(), |mut acc, record| {
            acc.add(record);
            acc
        })
        .finish()
}

fn zero_filled<K: Ord + Copy>(keys: &[K]) -> BTreeMap<K, u32> {
    keys.iter().map(|&key| (key, 0)).collect()
}

fn mean(sum: f64, count: u32) -> f64 {
    sum / f64::from(count.max(1))
}

/// Running sums for one pass over the corpus.
struct Accumulator {
    submissions: u32,

    with_friendship: u32,
    friendship_sums: [i64; 5],

    endings: BTreeMap<Ending, u32>,

    topics_sum: u64,
    topics_obtained: BTreeMap<u32, u32>,
    topic_counts: HashMap<u16, u32>,

    route_counts: HashMap<u16, u32>,
    character_sums: BTreeMap<Character, u64>,
    side_character_sums: BTreeMap<SideCharacter, u64>,

    meter_sum: i64,

    game_over: BTreeMap<GameOverTutorial, u32>,
    activity_guesses: BTreeMap<Ep1ActivityGuess, u32>,
    interviews: BTreeMap<u32, u32>,
    memory_card: BTreeMap<Ep1MemoryCard, u32>,
    resolutions: BTreeMap<Ep1Resolution, u32>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            submissions: 0,
            with_friendship: 0,
            friendship_sums: [0; 5],
            endings: zero_filled(Ending::ALL),
            topics_sum: 0,
            topics_obtained: BTreeMap::new(),
            topic_counts: HashMap::new(),
            route_counts: HashMap::new(),
            character_sums: Character::ALL.iter().map(|&c| (c, 0)).collect(),
            side_character_sums: SideCharacter::ALL.iter().map(|&c| (c, 0)).collect(),
            meter_sum: 0,
            game_over: zero_filled(GameOverTutorial::ALL),
            activity_guesses: zero_filled(Ep1ActivityGuess::ALL),
            interviews: (0..=EP1_COMP_SOC_INTERVIEWS.max()).map(|n| (n, 0)).collect(),
            memory_card: zero_filled(Ep1MemoryCard::ALL),
            resolutions: zero_filled(Ep1Resolution::ALL),
        }
    }

    fn add(&mut self, record: &SaveRecord) {
        self.submissions += 1;

        if record.has_friendship {
            self.with_friendship += 1;
            for (sum, level) in self
                .friendship_sums
                .iter_mut()
                .zip(record.friendship_levels.to_array())
            {
                *sum += i64::from(level);
            }
        }

        *self.endings.entry(record.unlocked_ending).or_default() += 1;

        self.topics_sum += u64::from(record.num_topics_obtained);
        *self
            .topics_obtained
            .entry(record.num_topics_obtained)
            .or_default() += 1;
        for topic in &record.topics_obtained {
            *self.topic_counts.entry(topic.flag).or_default() += 1;
        }

        for route in &record.routes_taken {
            *self.route_counts.entry(route.flag).or_default() += 1;
        }
        for (character, n) in &record.routes_with_character {
            *self.character_sums.entry(*character).or_default() += u64::from(*n);
        }
        for (side, n) in &record.routes_with_side_character {
            *self.side_character_sums.entry(*side).or_default() += u64::from(*n);
        }

        self.meter_sum += i64::from(record.haruhi_meter);

        let saw = GameOverTutorial::from_seen(record.saw_game_over_tutorial);
        *self.game_over.entry(saw).or_default() += 1;
        *self
            .activity_guesses
            .entry(record.ep1_activity_guess)
            .or_default() += 1;
        *self
            .interviews
            .entry(record.num_comp_soc_members_interviewed)
            .or_default() += 1;
        *self
            .memory_card
            .entry(record.ep1_did_what_with_memory_card)
            .or_default() += 1;
        *self.resolutions.entry(record.ep1_resolution).or_default() += 1;
    }

    fn finish(self) -> WrappedStats {
        let [haruhi, mikuru, nagato, koizumi, tsuruya] = self
            .friendship_sums
            .map(|sum| mean(sum as f64, self.with_friendship));

        let routes_taken: Vec<Vec<RouteAggregate>> = ROUTE_GROUPS
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|route| RouteAggregate {
                        route,
                        count: self.route_counts.get(&route.flag).copied().unwrap_or(0),
                    })
                    .collect()
            })
            .collect();
        let routes_count_max = routes_taken
            .iter()
            .flatten()
            .map(|agg| agg.count)
            .max()
            .unwrap_or(0);

        let topics_chart = TOPICS
            .iter()
            .map(|topic| TopicAggregate {
                topic,
                count: self.topic_counts.get(&topic.flag).copied().unwrap_or(0),
            })
            .collect();

        let submissions = self.submissions;
        WrappedStats {
            num_submissions: submissions,
            friendship_levels: FriendshipAverages {
                haruhi,
                mikuru,
                nagato,
                koizumi,
                tsuruya,
            },
            ending_chart: self.endings,
            average_topics_obtained: mean(self.topics_sum as f64, submissions),
            topics_obtained_chart: self.topics_obtained,
            topics_chart,
            routes_taken,
            routes_count_max,
            average_routes_with_character: self
                .character_sums
                .into_iter()
                .map(|(c, sum)| (c, mean(sum as f64, submissions)))
                .collect(),
            average_routes_with_side_character: self
                .side_character_sums
                .into_iter()
                .map(|(c, sum)| (c, mean(sum as f64, submissions)))
                .collect(),
            average_haruhi_meter: mean(self.meter_sum as f64, submissions),
            saw_game_over_tutorial_chart: self.game_over,
            ep1_activity_guess_chart: self.activity_guesses,
            num_comp_soc_members_interviewed_chart: self.interviews,
            ep1_memory_card_chart: self.memory_card,
            ep1_resolution_chart: self.resolutions,
            save_data: None,
        }
    }
}
