//! Corpus-wide statistics.
//!
//! [`aggregate`] folds every stored record into one [`WrappedStats`]
//! snapshot. Every statically known category (ending, route, topic, episode
//! outcome, character) is present in the output even when nobody hit it.

mod aggregate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::save::SaveRecord;
use crate::tables::{
    Character, Ending, Ep1ActivityGuess, Ep1MemoryCard, Ep1Resolution, GameOverTutorial, Route,
    SideCharacter, Topic, flag_entity,
};

pub use aggregate::aggregate;

/// Mean friendship level per character, over saves that carry them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendshipAverages {
    pub haruhi: f64,
    pub mikuru: f64,
    pub nagato: f64,
    pub koizumi: f64,
    pub tsuruya: f64,
}

/// How many saves took a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAggregate {
    #[serde(with = "flag_entity")]
    pub route: &'static Route,
    pub count: u32,
}

/// How many saves obtained a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAggregate {
    #[serde(with = "flag_entity")]
    pub topic: &'static Topic,
    pub count: u32,
}

/// The aggregate snapshot served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedStats {
    pub num_submissions: u32,

    pub friendship_levels: FriendshipAverages,

    pub ending_chart: BTreeMap<Ending, u32>,

    pub average_topics_obtained: f64,
    /// Number of topics obtained -> number of saves. Only observed counts.
    pub topics_obtained_chart: BTreeMap<u32, u32>,
    pub topics_chart: Vec<TopicAggregate>,

    /// Same shape as the route groups table.
    pub routes_taken: Vec<Vec<RouteAggregate>>,
    pub routes_count_max: u32,
    pub average_routes_with_character: BTreeMap<Character, f64>,
    pub average_routes_with_side_character: BTreeMap<SideCharacter, f64>,

    pub average_haruhi_meter: f64,

    // Episode 1
    pub saw_game_over_tutorial_chart: BTreeMap<GameOverTutorial, u32>,
    pub ep1_activity_guess_chart: BTreeMap<Ep1ActivityGuess, u32>,
    pub num_comp_soc_members_interviewed_chart: BTreeMap<u32, u32>,
    pub ep1_memory_card_chart: BTreeMap<Ep1MemoryCard, u32>,
    pub ep1_resolution_chart: BTreeMap<Ep1Resolution, u32>,

    /// Set only on per-save lookups.
    #[serde(default)]
    pub save_data: Option<SaveRecord>,
}

impl WrappedStats {
    /// This snapshot with one record attached.
    pub fn with_save_data(mut self, record: SaveRecord) -> Self {
        self.save_data = Some(record);
        self
    }

    /// Count for the route with `flag`, if that route exists.
    pub fn route_count(&self, flag: u16) -> Option<u32> {
        self.routes_taken
            .iter()
            .flatten()
            .find(|agg| agg.route.flag == flag)
            .map(|agg| agg.count)
    }

    /// Count for the topic with `flag`, if that topic exists.
    pub fn topic_count(&self, flag: u16) -> Option<u32> {
        self.topics_chart
            .iter()
            .find(|agg| agg.topic.flag == flag)
            .map(|agg| agg.count)
    }
}

impl Default for WrappedStats {
    /// The zero-filled snapshot of an empty corpus.
    fn default() -> Self {
        aggregate(&[])
    }
}
