//! The decoded form of one uploaded save.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tables::{
    Character, Ending, Ep1ActivityGuess, Ep1MemoryCard, Ep1Resolution, Route, SideCharacter,
    Topic, flag_entities,
};

/// Friendship levels read from the checkpoint footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipLevels {
    pub haruhi: i32,
    pub mikuru: i32,
    pub nagato: i32,
    pub koizumi: i32,
    pub tsuruya: i32,
}

impl FriendshipLevels {
    pub fn from_footer(values: [i32; 5]) -> Self {
        let [haruhi, mikuru, nagato, koizumi, tsuruya] = values;
        Self {
            haruhi,
            mikuru,
            nagato,
            koizumi,
            tsuruya,
        }
    }

    pub fn to_array(self) -> [i32; 5] {
        [self.haruhi, self.mikuru, self.nagato, self.koizumi, self.tsuruya]
    }

    /// The base game clears these on completion; only patched saves keep them.
    pub fn is_present(self) -> bool {
        self.to_array().iter().any(|&level| level != 0)
    }
}

/// One decoded upload. Immutable once built.
///
/// When `is_valid` is false only `sha256_hash` carries information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub sha256_hash: String,
    pub is_valid: bool,
    pub has_friendship: bool,
    pub friendship_levels: FriendshipLevels,

    pub unlocked_ending: Ending,

    pub num_topics_obtained: u32,
    #[serde(with = "flag_entities")]
    pub topics_obtained: Vec<&'static Topic>,

    #[serde(with = "flag_entities")]
    pub routes_taken: Vec<&'static Route>,
    pub routes_with_character: BTreeMap<Character, u32>,
    pub routes_with_side_character: BTreeMap<SideCharacter, u32>,

    pub haruhi_meter: i32,

    // Episode 1
    pub saw_game_over_tutorial: bool,
    pub ep1_activity_guess: Ep1ActivityGuess,
    pub num_comp_soc_members_interviewed: u32,
    pub ep1_did_what_with_memory_card: Ep1MemoryCard,
    pub ep1_resolution: Ep1Resolution,
}

impl SaveRecord {
    /// A rejected upload: the hash and nothing else.
    pub fn invalid(sha256_hash: String) -> Self {
        Self {
            sha256_hash,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::tables::{route_by_flag, topic_by_flag};

    #[test]
    fn test_friendship_presence() {
        assert!(!FriendshipLevels::default().is_present());
        assert!(FriendshipLevels::from_footer([0, 0, 0, 0, -1]).is_present());
        assert_eq!(
            FriendshipLevels::from_footer([3, 0, 5, 0, 0]).to_array(),
            [3, 0, 5, 0, 0]
        );
    }

    #[test]
    fn test_invalid_record_is_all_defaults() {
        let record = SaveRecord::invalid("ABCD".to_string());
        assert_eq!(record.sha256_hash, "ABCD");
        assert!(!record.is_valid);
        assert!(!record.has_friendship);
        assert_eq!(record.unlocked_ending, Ending::Unknown);
        assert!(record.routes_taken.is_empty());
        assert!(record.topics_obtained.is_empty());
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_json_shape_and_reload() -> Result<(), serde_json::Error> {
        let mut record = SaveRecord::invalid("00FF".to_string());
        record.is_valid = true;
        record.topics_obtained = vec![topic_by_flag(130).expect("topic 130")];
        record.routes_taken = vec![route_by_flag(1025).expect("route 1025")];
        record.routes_with_character.insert(Character::Koizumi, 1);
        record.ep1_resolution = Ep1Resolution::H2o;

        let value = serde_json::to_value(&record)?;
        assert_eq!(value["sha256Hash"], "00FF");
        assert_eq!(value["friendshipLevels"]["tsuruya"], 0);
        assert_eq!(value["topicsObtained"][0]["type"], "Main");
        assert_eq!(value["routesTaken"][0]["objective"], "A");
        assert_eq!(value["routesWithCharacter"]["chokuretsu-wrapped-koizumi"], 1);
        assert_eq!(value["ep1Resolution"], "chokuretsu-wrapped-ep1-h2o");
        assert_eq!(
            value["ep1DidWhatWithMemoryCard"],
            "chokuretsu-wrapped-ep1-didnt-find-memory-card"
        );

        let back: SaveRecord = serde_json::from_value(value)?;
        assert_eq!(back, record);
        assert!(std::ptr::eq(back.routes_taken[0], record.routes_taken[0]));
        Ok(())
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_unknown_route_flag_rejected_on_load() {
        let json = serde_json::json!({
            "sha256Hash": "00",
            "isValid": true,
            "hasFriendship": false,
            "friendshipLevels": {"haruhi": 0, "mikuru": 0, "nagato": 0, "koizumi": 0, "tsuruya": 0},
            "unlockedEnding": "chokuretsu-wrapped-unknown",
            "numTopicsObtained": 0,
            "topicsObtained": [],
            "routesTaken": [{"flag": 1}],
            "routesWithCharacter": {},
            "routesWithSideCharacter": {},
            "haruhiMeter": 0,
            "sawGameOverTutorial": false,
            "ep1ActivityGuess": "chokuretsu-wrapped-ep1-didnt-guess",
            "numCompSocMembersInterviewed": 0,
            "ep1DidWhatWithMemoryCard": "chokuretsu-wrapped-ep1-didnt-find-memory-card",
            "ep1Resolution": "chokuretsu-wrapped-ep1-unresolved"
        });
        let err = serde_json::from_value::<SaveRecord>(json).unwrap_err();
        assert!(err.to_string().contains("unknown flag 1"));
    }
}
