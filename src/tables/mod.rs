//! Static reference data for Chokuretsu save decoding.
//!
//! Every table here is an ordered slice. Declaration order is load-bearing:
//! route groups are scanned first-match-wins in the order written, and the
//! per-episode decision tables in [`crate::save::rules`] refer to the enums
//! declared below. Nothing in this module is ever persisted on its own;
//! decoded records refer back to table entries by flag index.

mod routes;
mod topics;

use serde::{Deserialize, Serialize};

pub use routes::{ROUTE_GROUPS, route_by_flag, routes};
pub use topics::{TOPIC_FLAG_RANGE, TOPICS, topic_by_flag};

/// Declare an enum whose wire form is a fixed front-end label.
///
/// The generated type serializes as its label (also when used as a map key),
/// exposes `ALL` in declaration order and round-trips through `from_label`.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Front-end label for this variant.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Look a variant up by its label.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Self::from_label(&label).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} label '{}'",
                        stringify!($name),
                        label
                    ))
                })
            }
        }
    };
}

labeled_enum! {
    /// Principal characters that can join Kyon on a route.
    pub enum Character {
        Haruhi => "chokuretsu-wrapped-haruhi",
        Mikuru => "chokuretsu-wrapped-mikuru",
        Nagato => "chokuretsu-wrapped-nagato",
        Koizumi => "chokuretsu-wrapped-koizumi",
    }
}

labeled_enum! {
    /// Side characters that appear along a route.
    pub enum SideCharacter {
        Cat => "chokuretsu-wrapped-cat",
        Girl => "chokuretsu-wrapped-mystery-girl",
        Grocer => "chokuretsu-wrapped-grocer",
        Kunikida => "chokuretsu-wrapped-kunikida",
        MemberA => "chokuretsu-wrapped-member-a",
        MemberB => "chokuretsu-wrapped-member-b",
        MemberC => "chokuretsu-wrapped-member-c",
        MemberD => "chokuretsu-wrapped-member-d",
        Okabe => "chokuretsu-wrapped-okabe",
        President => "chokuretsu-wrapped-president",
        Sister => "chokuretsu-wrapped-sister",
        Taniguchi => "chokuretsu-wrapped-taniguchi",
        Tsuruya => "chokuretsu-wrapped-tsuruya",
    }
}

labeled_enum! {
    /// Ending unlocked by a completed playthrough.
    #[derive(Default)]
    pub enum Ending {
        Haruhi => "chokuretsu-wrapped-haruhi",
        Mikuru => "chokuretsu-wrapped-mikuru",
        Nagato => "chokuretsu-wrapped-nagato",
        Koizumi => "chokuretsu-wrapped-koizumi",
        Tsuruya => "chokuretsu-wrapped-tsuruya",
        /// No ending flag was set.
        #[default]
        Unknown => "chokuretsu-wrapped-unknown",
    }
}

labeled_enum! {
    /// Whether the player hit the game-over tutorial in episode 1.
    pub enum GameOverTutorial {
        Saw => "chokuretsu-wrapped-game-over-saw",
        DidntSee => "chokuretsu-wrapped-game-over-didnt-see",
    }
}

impl GameOverTutorial {
    pub fn from_seen(seen: bool) -> Self {
        if seen {
            GameOverTutorial::Saw
        } else {
            GameOverTutorial::DidntSee
        }
    }
}

labeled_enum! {
    /// What the player guessed the SOS Brigade's summer activity would be.
    #[derive(Default)]
    pub enum Ep1ActivityGuess {
        GoSwimming => "chokuretsu-wrapped-ep1-go-swimming",
        GoCamping => "chokuretsu-wrapped-ep1-go-camping",
        SummerCamp => "chokuretsu-wrapped-ep1-summer-camp",
        #[default]
        DidntGuess => "chokuretsu-wrapped-ep1-didnt-guess",
    }
}

labeled_enum! {
    /// What the player did with the computer society's memory card.
    #[derive(Default)]
    pub enum Ep1MemoryCard {
        Took => "chokuretsu-wrapped-ep1-took-memory-card",
        Returned => "chokuretsu-wrapped-ep1-returned-memory-card",
        #[default]
        DidntFind => "chokuretsu-wrapped-ep1-didnt-find-memory-card",
    }
}

labeled_enum! {
    /// How the episode 1 puzzle was resolved.
    #[derive(Default)]
    pub enum Ep1Resolution {
        H2o => "chokuretsu-wrapped-ep1-h2o",
        SwappedPlates => "chokuretsu-wrapped-ep1-swapped-plates",
        OffByH2oPlates => "chokuretsu-wrapped-ep1-off-by-h2o-plates",
        Misunderstanding => "chokuretsu-wrapped-ep1-a-misunderstanding",
        #[default]
        Unresolved => "chokuretsu-wrapped-ep1-unresolved",
    }
}

/// Objective group a route belongs to within its chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    A,
    B,
    C,
    D,
}

/// Which character's topic list a topic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicType {
    Main,
    Haruhi,
    Mikuru,
    Nagato,
    Koizumi,
    Sub,
}

/// A per-chapter narrative branch.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub flag: u16,
    pub name: &'static str,
    pub characters: &'static [Character],
    pub objective: Objective,
    pub side_characters: &'static [SideCharacter],
}

/// A collectible topic.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub flag: u16,
    pub name: &'static str,
    pub episode: u8,
    #[serde(rename = "type")]
    pub kind: TopicType,
}

/// Static entity addressable by its flag index.
pub trait FlagEntity: Serialize + Sync + 'static {
    fn flag(&self) -> u16;

    /// Exact-match lookup in the owning table.
    fn by_flag(flag: u16) -> Option<&'static Self>;
}

impl FlagEntity for Route {
    fn flag(&self) -> u16 {
        self.flag
    }

    fn by_flag(flag: u16) -> Option<&'static Self> {
        route_by_flag(flag)
    }
}

impl FlagEntity for Topic {
    fn flag(&self) -> u16 {
        self.flag
    }

    fn by_flag(flag: u16) -> Option<&'static Self> {
        topic_by_flag(flag)
    }
}

/// Serde adapter for `Vec<&'static T>` fields.
///
/// Entries are written out in full so API clients get labels and metadata,
/// and read back by flag so a reloaded record points at the live table.
pub(crate) mod flag_entities {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::FlagEntity;

    #[derive(Deserialize)]
    struct FlagOnly {
        flag: u16,
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, T>(entities: &Vec<&'static T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: FlagEntity,
    {
        serializer.collect_seq(entities.iter())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<&'static T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FlagEntity,
    {
        Vec::<FlagOnly>::deserialize(deserializer)?
            .into_iter()
            .map(|entry| {
                T::by_flag(entry.flag)
                    .ok_or_else(|| D::Error::custom(format!("unknown flag {}", entry.flag)))
            })
            .collect()
    }
}

/// Serde adapter for a single `&'static T` field.
pub(crate) mod flag_entity {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FlagEntity;

    #[derive(Deserialize)]
    struct FlagOnly {
        flag: u16,
    }

    pub fn serialize<S, T>(entity: &&'static T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: FlagEntity,
    {
        entity.serialize(serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<&'static T, D::Error>
    where
        D: Deserializer<'de>,
        T: FlagEntity,
    {
        let FlagOnly { flag } = FlagOnly::deserialize(deserializer)?;
        T::by_flag(flag).ok_or_else(|| D::Error::custom(format!("unknown flag {}", flag)))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for ending in Ending::ALL {
            assert_eq!(Ending::from_label(ending.label()), Some(*ending));
        }
        for side in SideCharacter::ALL {
            assert_eq!(SideCharacter::from_label(side.label()), Some(*side));
        }
        assert_eq!(Ending::from_label("chokuretsu-wrapped-kyon"), None);
    }

    #[test]
    fn test_labeled_enum_serializes_as_label() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Ep1MemoryCard::Returned)?;
        assert_eq!(json, "\"chokuretsu-wrapped-ep1-returned-memory-card\"");

        let back: Ep1MemoryCard = serde_json::from_str(&json)?;
        assert_eq!(back, Ep1MemoryCard::Returned);

        assert!(serde_json::from_str::<Ep1MemoryCard>("\"nope\"").is_err());
        Ok(())
    }

    #[test]
    fn test_fallback_defaults() {
        assert_eq!(Ending::default(), Ending::Unknown);
        assert_eq!(Ep1ActivityGuess::default(), Ep1ActivityGuess::DidntGuess);
        assert_eq!(Ep1MemoryCard::default(), Ep1MemoryCard::DidntFind);
        assert_eq!(Ep1Resolution::default(), Ep1Resolution::Unresolved);
    }

    #[test]
    fn test_route_serializes_camel_case() -> Result<(), serde_json::Error> {
        let route = route_by_flag(1025).expect("route 1025 is declared");
        let value = serde_json::to_value(route)?;
        assert_eq!(value["name"], "chokuretsu-wrapped-ep1-working-with-koizumi");
        assert_eq!(value["characters"][0], "chokuretsu-wrapped-koizumi");
        assert_eq!(value["objective"], "A");
        assert_eq!(value["sideCharacters"][2], "chokuretsu-wrapped-sister");
        Ok(())
    }
}
