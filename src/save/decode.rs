//! Turn a raw upload into a [`SaveRecord`].

use std::collections::BTreeMap;
use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::logging::debug;
use crate::tables::{
    Character, ROUTE_GROUPS, SideCharacter, TOPIC_FLAG_RANGE, Topic, topic_by_flag,
};

use super::error::SaveError;
use super::format::{FlagSource, SaveFile};
use super::record::{FriendshipLevels, SaveRecord};
use super::rules::{
    COMPLETION_FLAGS, ENDINGS, EP1_ACTIVITY_GUESS, EP1_COMP_SOC_INTERVIEWS, EP1_MEMORY_CARD,
    EP1_RESOLUTION, GAME_OVER_TUTORIAL,
};

/// Uppercase hex SHA-256 of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02X}");
    }
    hex
}

/// Decode an upload. Never fails: any problem yields [`SaveRecord::invalid`].
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub fn decode(bytes: &[u8]) -> SaveRecord {
    match try_decode(bytes) {
        Ok(record) => record,
        Err(err) => {
            let hash = content_hash(bytes);
            debug!(hash = %hash, error = %err, "rejected save");
            SaveRecord::invalid(hash)
        }
    }
}

/// Decode an upload, reporting why it was rejected.
pub fn try_decode(bytes: &[u8]) -> Result<SaveRecord, SaveError> {
    let save = SaveFile::parse(bytes)?;
    let slot = save
        .latest_completed(COMPLETION_FLAGS)
        .ok_or(SaveError::NoCompletedSlot)?;

    let [haruhi, mikuru, nagato, koizumi, tsuruya, ..] = *slot.footer();
    let friendship_levels =
        FriendshipLevels::from_footer([haruhi, mikuru, nagato, koizumi, tsuruya]);

    let (topics_obtained, num_topics_obtained) = collect_topics(slot);

    let mut routes_with_character: BTreeMap<Character, u32> =
        Character::ALL.iter().map(|&c| (c, 0)).collect();
    let mut routes_with_side_character: BTreeMap<SideCharacter, u32> =
        SideCharacter::ALL.iter().map(|&c| (c, 0)).collect();
    let mut routes_taken = Vec::new();
    for group in ROUTE_GROUPS {
        let Some(route) = group.iter().find(|r| slot.is_flag_set(r.flag)) else {
            continue;
        };
        for character in route.characters {
            *routes_with_character.entry(*character).or_default() += 1;
        }
        for side in route.side_characters {
            *routes_with_side_character.entry(*side).or_default() += 1;
        }
        routes_taken.push(route);
    }

    let raw_meter = slot.haruhi_meter();
    let haruhi_meter = raw_meter
        .checked_add(1)
        .and_then(|m| m.checked_mul(10))
        .ok_or(SaveError::MeterOutOfRange(raw_meter))?;

    Ok(SaveRecord {
        sha256_hash: content_hash(bytes),
        is_valid: true,
        has_friendship: friendship_levels.is_present(),
        friendship_levels,
        unlocked_ending: ENDINGS.last_match(slot),
        num_topics_obtained,
        topics_obtained,
        routes_taken,
        routes_with_character,
        routes_with_side_character,
        haruhi_meter,
        saw_game_over_tutorial: GAME_OVER_TUTORIAL.first_match(slot),
        ep1_activity_guess: EP1_ACTIVITY_GUESS.first_match(slot),
        num_comp_soc_members_interviewed: EP1_COMP_SOC_INTERVIEWS.count(slot),
        ep1_did_what_with_memory_card: EP1_MEMORY_CARD.first_match(slot),
        ep1_resolution: EP1_RESOLUTION.first_match(slot),
    })
}

/// Topics whose flag is set, in flag order. Set flags without a topic are skipped.
fn collect_topics<F: FlagSource + ?Sized>(flags: &F) -> (Vec<&'static Topic>, u32) {
    let topics: Vec<_> = TOPIC_FLAG_RANGE
        .clone()
        .filter(|&flag| flags.is_flag_set(flag))
        .filter_map(topic_by_flag)
        .collect();
    let count = u32::try_from(topics.len()).unwrap_or(u32::MAX);
    (topics, count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::save::fixture::{SaveBuilder, SlotBuilder};
    use crate::save::format::{SAVE_FILE_LEN, SECTION_LEN};
    use crate::tables::{Ending, Ep1ActivityGuess, Ep1MemoryCard, Ep1Resolution};

    fn decode_slot(slot: SlotBuilder) -> SaveRecord {
        let bytes = SaveBuilder::new().checkpoint(0, slot).build();
        let record = decode(&bytes);
        assert!(record.is_valid, "fixture should decode");
        record
    }

    #[test]
    fn test_content_hash_is_uppercase_hex() {
        assert_eq!(
            content_hash(b""),
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn test_reference_scenario() {
        let fourth_route = ROUTE_GROUPS[0][3].flag;
        let record = decode_slot(
            SlotBuilder::completed()
                .friendship([3, 0, 5, 0, 0])
                .flags(&[122, 130, fourth_route]),
        );

        assert!(record.has_friendship);
        assert_eq!(record.friendship_levels.to_array(), [3, 0, 5, 0, 0]);
        assert_eq!(record.unlocked_ending, Ending::Unknown);
        assert_eq!(record.num_topics_obtained, 2);
        assert_eq!(record.topics_obtained.len(), 2);
        assert_eq!(record.routes_taken.len(), 1);
        assert!(std::ptr::eq(record.routes_taken[0], &ROUTE_GROUPS[0][3]));
        assert_eq!(record.routes_with_character[&Character::Koizumi], 1);
        assert_eq!(record.routes_with_side_character[&SideCharacter::President], 1);
        assert_eq!(record.routes_with_side_character[&SideCharacter::Cat], 0);
        assert_eq!(record.routes_with_character.len(), Character::ALL.len());
        assert_eq!(
            record.routes_with_side_character.len(),
            SideCharacter::ALL.len()
        );
    }

    #[test]
    fn test_invalid_without_completed_slot() {
        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::new().flags(&[4379, 4380, 4381, 4382]))
            .build();
        let record = decode(&bytes);
        assert_eq!(record, SaveRecord::invalid(content_hash(&bytes)));
        assert_eq!(try_decode(&bytes), Err(SaveError::NoCompletedSlot));
    }

    #[test]
    fn test_malformed_bytes_still_hashed() {
        let record = decode(b"not a save");
        assert!(!record.is_valid);
        assert_eq!(record.sha256_hash, content_hash(b"not a save"));
    }

    #[test]
    fn test_first_route_in_group_wins() {
        let group = ROUTE_GROUPS[1];
        let record = decode_slot(SlotBuilder::completed().flags(&[group[4].flag, group[2].flag]));
        assert_eq!(record.routes_taken.len(), 1);
        assert_eq!(record.routes_taken[0].flag, group[2].flag);
    }

    #[test]
    fn test_one_route_per_group() {
        let flags: Vec<u16> = ROUTE_GROUPS.iter().map(|g| g[0].flag).collect();
        let record = decode_slot(SlotBuilder::completed().flags(&flags));
        assert_eq!(record.routes_taken.len(), ROUTE_GROUPS.len());
        let tallied: u32 = record.routes_with_character.values().sum();
        let expected: usize = ROUTE_GROUPS.iter().map(|g| g[0].characters.len()).sum();
        assert_eq!(tallied as usize, expected);
    }

    #[test]
    fn test_ending_priority() {
        let record = decode_slot(SlotBuilder::completed().flags(&[4311, 4315]));
        assert_eq!(record.unlocked_ending, Ending::Tsuruya);

        let record = decode_slot(SlotBuilder::completed().flags(&[4314, 4312]));
        assert_eq!(record.unlocked_ending, Ending::Mikuru);
    }

    #[test]
    fn test_zero_footer_has_no_friendship() {
        let record = decode_slot(SlotBuilder::completed());
        assert!(!record.has_friendship);
        assert_eq!(record.friendship_levels, FriendshipLevels::default());
    }

    #[test]
    fn test_topic_flags_without_topics_are_ignored() {
        let record = decode_slot(SlotBuilder::completed().flags(&[121, 122, 151, 821]));
        assert_eq!(record.num_topics_obtained, 1);
        assert_eq!(record.topics_obtained[0].flag, 122);
    }

    #[test]
    fn test_meter_transform() {
        assert_eq!(decode_slot(SlotBuilder::completed().meter(4)).haruhi_meter, 50);
        assert_eq!(decode_slot(SlotBuilder::completed().meter(-1)).haruhi_meter, 0);

        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed().meter(i32::MAX))
            .build();
        assert_eq!(try_decode(&bytes), Err(SaveError::MeterOutOfRange(i32::MAX)));
        assert!(!decode(&bytes).is_valid);
    }

    #[test]
    fn test_episode_one_facts() {
        let record = decode_slot(
            SlotBuilder::completed().flags(&[1016, 1168, 1181, 1183, 1184, 1238, 1399]),
        );
        assert!(record.saw_game_over_tutorial);
        assert_eq!(record.ep1_activity_guess, Ep1ActivityGuess::GoCamping);
        assert_eq!(record.num_comp_soc_members_interviewed, 2);
        assert_eq!(record.ep1_did_what_with_memory_card, Ep1MemoryCard::Returned);
        assert_eq!(record.ep1_resolution, Ep1Resolution::OffByH2oPlates);

        let record = decode_slot(SlotBuilder::completed().flags(&[1016, 1196]));
        assert!(!record.saw_game_over_tutorial);
        assert_eq!(record.ep1_activity_guess, Ep1ActivityGuess::DidntGuess);
        assert_eq!(record.ep1_resolution, Ep1Resolution::Unresolved);
    }

    #[test]
    fn test_newest_completed_slot_is_decoded() {
        let bytes = SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed().saved_at(2024, 3, 1, 0, 0, 0).meter(1))
            .checkpoint(1, SlotBuilder::completed().saved_at(2024, 3, 2, 0, 0, 0).meter(2))
            .build();
        assert_eq!(decode(&bytes).haruhi_meter, 30);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let bytes = SaveBuilder::new()
            .checkpoint(1, SlotBuilder::completed().flags(&[122, 4313]).friendship([1, 2, 3, 4, 5]))
            .build();
        assert_eq!(decode(&bytes), decode(&bytes));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn decode_never_panics_and_always_hashes(bytes in proptest::collection::vec(any::<u8>(), 0..SAVE_FILE_LEN + 16)) {
                let record = decode(&bytes);
                prop_assert_eq!(record.sha256_hash.len(), 64);
                prop_assert_eq!(record.sha256_hash, content_hash(&bytes));
            }

            #[test]
            fn decode_is_pure(flags in proptest::collection::vec(0u16..5120, 0..64), meter in -1000i32..1000) {
                let bytes = SaveBuilder::new()
                    .checkpoint(0, SlotBuilder::completed().flags(&flags).meter(meter))
                    .build();
                let first = decode(&bytes);
                prop_assert!(first.is_valid);
                prop_assert_eq!(&first, &decode(&bytes));
                prop_assert!(first.routes_taken.len() <= ROUTE_GROUPS.len());
            }

            #[test]
            fn corrupting_a_slot_invalidates(offset in 8usize..SECTION_LEN, mask in 1u8..=255) {
                let mut bytes = SaveBuilder::new()
                    .checkpoint(0, SlotBuilder::completed())
                    .build();
                bytes[SECTION_LEN + offset] ^= mask;
                prop_assert!(!decode(&bytes).is_valid);
            }
        }
    }
}
