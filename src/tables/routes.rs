//! Route groups, one per chapter decision point.
//!
//! Within a group, routes are checked in the order listed and the first one
//! whose flag is set is the route taken.

use super::{Character as C, Objective, Route, SideCharacter as S};

const fn route(
    flag: u16,
    name: &'static str,
    characters: &'static [C],
    objective: Objective,
    side_characters: &'static [S],
) -> Route {
    Route {
        flag,
        name,
        characters,
        objective,
        side_characters,
    }
}

/// Ordered route groups: episode 1, episode 2, episode 3 (two groups),
/// episode 4 (two groups), episode 5.
pub static ROUTE_GROUPS: &[&[Route]] = &[
    &[
        route(1022, "chokuretsu-wrapped-ep1-working-alone", &[], Objective::A, &[S::MemberA, S::MemberB, S::President]),
        route(1023, "chokuretsu-wrapped-ep1-with-mikuru", &[C::Mikuru], Objective::A, &[S::MemberA, S::MemberB, S::President]),
        route(1024, "chokuretsu-wrapped-ep1-with-nagato", &[C::Nagato], Objective::A, &[S::MemberA, S::MemberB, S::President]),
        route(1025, "chokuretsu-wrapped-ep1-working-with-koizumi", &[C::Koizumi], Objective::A, &[S::MemberA, S::President, S::Sister]),
        route(1026, "chokuretsu-wrapped-ep1-flower-in-each-hand", &[C::Mikuru, C::Nagato], Objective::A, &[S::MemberA, S::President]),
        route(1027, "chokuretsu-wrapped-ep1-koizumis-plan", &[C::Mikuru, C::Koizumi], Objective::A, &[S::MemberA, S::MemberB, S::President]),
        route(1028, "chokuretsu-wrapped-ep1-the-cool-two", &[C::Nagato, C::Koizumi], Objective::A, &[S::MemberA, S::President]),
        route(1029, "chokuretsu-wrapped-ep1-everyone-to-the-computer-society", &[C::Mikuru, C::Nagato, C::Koizumi], Objective::A, &[S::MemberA, S::MemberB, S::MemberC, S::President]),
        route(1030, "chokuretsu-wrapped-ep1-alone-with-haruhi", &[C::Haruhi], Objective::B, &[]),
        route(1031, "chokuretsu-wrapped-ep1-boisterous-girls", &[C::Haruhi, C::Mikuru], Objective::B, &[S::Sister]),
        route(1032, "chokuretsu-wrapped-ep1-haruhi-and-nagato", &[C::Haruhi, C::Nagato], Objective::B, &[]),
        route(1033, "chokuretsu-wrapped-ep1-a-point-of-reference", &[C::Haruhi, C::Koizumi], Objective::B, &[]),
        route(1034, "chokuretsu-wrapped-ep1-preliminary-investigation", &[C::Haruhi, C::Mikuru, C::Nagato], Objective::B, &[]),
        route(1035, "chokuretsu-wrapped-ep1-sos-brigade-activity-record", &[C::Haruhi, C::Mikuru, C::Koizumi], Objective::B, &[]),
        route(1036, "chokuretsu-wrapped-ep1-second-raid", &[C::Haruhi, C::Nagato, C::Koizumi], Objective::B, &[S::MemberA, S::MemberB, S::President]),
        route(1037, "chokuretsu-wrapped-ep1-gathering-the-troops", &[C::Haruhi, C::Mikuru, C::Nagato, C::Koizumi], Objective::B, &[S::Sister]),
    ],
    &[
        route(1038, "chokuretsu-wrapped-ep2-reconfirmation", &[], Objective::A, &[S::MemberB, S::President]),
        route(1039, "chokuretsu-wrapped-ep2-consultation", &[C::Mikuru], Objective::A, &[S::Sister]),
        route(1040, "chokuretsu-wrapped-ep2-for-persuading-haruhi", &[C::Nagato], Objective::A, &[S::Sister]),
        route(1041, "chokuretsu-wrapped-ep2-koizumis-proposition", &[C::Koizumi], Objective::A, &[]),
        route(1042, "chokuretsu-wrapped-ep2-an-aged-timbre", &[C::Mikuru, C::Nagato], Objective::A, &[]),
        route(1043, "chokuretsu-wrapped-ep2-the-computer-societys-secret", &[C::Mikuru, C::Koizumi], Objective::A, &[S::President]),
        route(1044, "chokuretsu-wrapped-ep2-suspicious-conduct", &[C::Nagato, C::Koizumi], Objective::A, &[S::MemberB]),
        route(1046, "chokuretsu-wrapped-ep2-in-the-mountain-of-books", &[C::Haruhi], Objective::B, &[]),
        route(1047, "chokuretsu-wrapped-ep2-in-charge-of-odd-jobs", &[C::Haruhi, C::Mikuru], Objective::B, &[]),
        route(1048, "chokuretsu-wrapped-ep2-reading-time", &[C::Haruhi, C::Nagato], Objective::B, &[S::Sister]),
        route(1049, "chokuretsu-wrapped-ep2-hierarchy", &[C::Haruhi, C::Koizumi], Objective::B, &[S::Sister]),
        route(1053, "chokuretsu-wrapped-ep2-kyons-strenuous-effort", &[], Objective::C, &[]),
        route(1054, "chokuretsu-wrapped-ep2-mikurus-great-work", &[C::Mikuru], Objective::C, &[S::Okabe]),
        route(1055, "chokuretsu-wrapped-ep2-before-you-know-it", &[C::Nagato], Objective::C, &[]),
        route(1056, "chokuretsu-wrapped-ep2-in-anticipation", &[C::Koizumi], Objective::C, &[S::Okabe]),
        route(1057, "chokuretsu-wrapped-ep2-poster", &[C::Mikuru, C::Nagato], Objective::C, &[S::Sister, S::Tsuruya]),
        route(1058, "chokuretsu-wrapped-ep2-songwriting-contest", &[C::Mikuru, C::Koizumi], Objective::C, &[]),
        route(1059, "chokuretsu-wrapped-ep2-north-highs-alumni", &[C::Nagato, C::Koizumi], Objective::C, &[]),
    ],
    &[
        route(1061, "chokuretsu-wrapped-ep3-kyon-and-the-stray-cat", &[], Objective::A, &[S::Cat, S::Grocer, S::Sister]),
        route(1062, "chokuretsu-wrapped-ep3-careless-mikuru", &[C::Mikuru], Objective::A, &[S::Grocer]),
        route(1063, "chokuretsu-wrapped-ep3-difficult-choice", &[C::Nagato], Objective::A, &[]),
        route(1064, "chokuretsu-wrapped-ep3-lottery-ticket", &[C::Koizumi], Objective::A, &[S::Grocer]),
        route(1065, "chokuretsu-wrapped-ep3-a-flower-in-each-hand-again", &[C::Mikuru, C::Nagato], Objective::A, &[S::Grocer, S::Sister]),
        route(1066, "chokuretsu-wrapped-ep3-mikuru-and-the-stray-cat", &[C::Mikuru, C::Koizumi], Objective::A, &[S::Cat, S::Grocer]),
        route(1067, "chokuretsu-wrapped-ep3-the-shopkeepers-favor", &[C::Nagato, C::Koizumi], Objective::A, &[S::Grocer, S::Sister]),
        route(1068, "chokuretsu-wrapped-ep3-buying-too-much", &[C::Mikuru, C::Nagato, C::Koizumi], Objective::A, &[S::Cat, S::Grocer, S::Sister]),
        route(1069, "chokuretsu-wrapped-ep3-haphazard", &[C::Haruhi], Objective::B, &[S::Sister]),
        route(1070, "chokuretsu-wrapped-ep3-the-maid-is-a-slugger", &[C::Haruhi, C::Mikuru], Objective::B, &[S::Sister]),
        route(1071, "chokuretsu-wrapped-ep3-wasted-effort", &[C::Haruhi, C::Nagato], Objective::B, &[]),
        route(1072, "chokuretsu-wrapped-ep3-a-mountain-of-oversights", &[C::Haruhi, C::Koizumi], Objective::B, &[]),
        route(1073, "chokuretsu-wrapped-ep3-computer-society-in-a-bind", &[C::Haruhi, C::Mikuru, C::Nagato], Objective::B, &[S::MemberA, S::President, S::Sister]),
        route(1074, "chokuretsu-wrapped-ep3-derailment", &[C::Haruhi, C::Mikuru, C::Koizumi], Objective::B, &[S::Sister]),
        route(1075, "chokuretsu-wrapped-ep3-handmade", &[C::Haruhi, C::Nagato, C::Koizumi], Objective::B, &[]),
        route(1076, "chokuretsu-wrapped-ep3-a-mountain-and-a-molehill", &[C::Haruhi, C::Mikuru, C::Nagato, C::Koizumi], Objective::B, &[S::Sister]),
    ],
    &[
        route(1077, "chokuretsu-wrapped-ep3-preparations", &[C::Haruhi], Objective::C, &[S::Kunikida, S::Sister, S::Taniguchi]),
        route(1078, "chokuretsu-wrapped-ep3-never-before-seen", &[C::Haruhi, C::Nagato], Objective::C, &[S::Kunikida, S::Sister, S::Taniguchi]),
        route(1079, "chokuretsu-wrapped-ep3-lame-story", &[C::Haruhi, C::Koizumi], Objective::C, &[S::Kunikida, S::Sister, S::Taniguchi]),
        route(1080, "chokuretsu-wrapped-ep3-a-huge-bother", &[C::Haruhi, C::Nagato, C::Koizumi], Objective::C, &[S::Kunikida, S::Sister, S::Taniguchi]),
        route(1081, "chokuretsu-wrapped-ep3-feels-like-a-date", &[C::Mikuru], Objective::D, &[S::Tsuruya]),
        route(1082, "chokuretsu-wrapped-ep3-nagato-and-a-little-sister", &[C::Mikuru, C::Nagato], Objective::D, &[S::Sister, S::Tsuruya]),
        route(1083, "chokuretsu-wrapped-ep3-mikurus-disaster", &[C::Mikuru, C::Koizumi], Objective::D, &[S::Tsuruya]),
        route(1084, "chokuretsu-wrapped-ep3-state-of-emergency", &[C::Mikuru, C::Nagato, C::Koizumi], Objective::D, &[S::Tsuruya]),
    ],
    &[
        route(1085, "chokuretsu-wrapped-ep4-poolside", &[C::Haruhi], Objective::A, &[]),
        route(1086, "chokuretsu-wrapped-ep4-which-ones-the-moon", &[C::Haruhi, C::Mikuru], Objective::A, &[]),
        route(1087, "chokuretsu-wrapped-ep4-to-our-intergalactic-friends", &[C::Haruhi, C::Nagato], Objective::A, &[]),
        route(1089, "chokuretsu-wrapped-ep4-group-work", &[C::Koizumi], Objective::B, &[]),
        route(1090, "chokuretsu-wrapped-ep4-that-fellow-in-the-science-lab", &[C::Mikuru, C::Koizumi], Objective::B, &[]),
        route(1091, "chokuretsu-wrapped-ep4-the-science-of-fear", &[C::Nagato, C::Koizumi], Objective::B, &[]),
        route(1093, "chokuretsu-wrapped-ep4-to-the-convenience-store-alone", &[], Objective::C, &[]),
        route(1094, "chokuretsu-wrapped-ep4-mikurus-shopping", &[C::Mikuru], Objective::C, &[]),
        route(1095, "chokuretsu-wrapped-ep4-what-nagato-wants", &[C::Nagato], Objective::C, &[]),
        route(1096, "chokuretsu-wrapped-ep4-a-shopping-bag-in-each-hand", &[C::Mikuru, C::Nagato], Objective::C, &[]),
    ],
    &[
        route(1097, "chokuretsu-wrapped-ep4-the-last-stand", &[C::Haruhi], Objective::A, &[]),
        route(1098, "chokuretsu-wrapped-ep4-bandage", &[C::Haruhi, C::Mikuru], Objective::A, &[]),
        route(1099, "chokuretsu-wrapped-ep4-nagatos-fear", &[C::Haruhi, C::Nagato], Objective::A, &[]),
        route(1100, "chokuretsu-wrapped-ep4-the-rules-of-the-test-of-courage", &[C::Haruhi, C::Koizumi], Objective::A, &[]),
        route(1101, "chokuretsu-wrapped-ep4-the-kingdom-of-shadows", &[C::Haruhi, C::Mikuru, C::Nagato], Objective::A, &[]),
        route(1102, "chokuretsu-wrapped-ep4-i-cant-accept-it", &[C::Haruhi, C::Mikuru, C::Koizumi], Objective::A, &[]),
        route(1103, "chokuretsu-wrapped-ep4-trying-again", &[C::Haruhi, C::Nagato, C::Koizumi], Objective::A, &[]),
        route(1105, "chokuretsu-wrapped-ep4-singing-your-own-praises", &[], Objective::B, &[S::Girl, S::MemberA, S::MemberB, S::MemberC, S::President]),
        route(1106, "chokuretsu-wrapped-ep4-unreliable-partner", &[C::Mikuru], Objective::B, &[S::MemberA, S::President]),
        route(1107, "chokuretsu-wrapped-ep4-reliable-partner", &[C::Nagato], Objective::B, &[S::MemberA, S::MemberB, S::MemberC, S::MemberD, S::President]),
        route(1108, "chokuretsu-wrapped-ep4-give-and-take", &[C::Koizumi], Objective::B, &[S::MemberA, S::MemberB, S::MemberC, S::President]),
        route(1109, "chokuretsu-wrapped-ep4-both-extremes", &[C::Mikuru, C::Nagato], Objective::B, &[S::Girl, S::Kunikida, S::MemberA, S::MemberB, S::President, S::Taniguchi]),
        route(1110, "chokuretsu-wrapped-ep4-big-trouble", &[C::Mikuru, C::Koizumi], Objective::B, &[S::Girl, S::Kunikida, S::MemberA, S::President, S::Taniguchi]),
        route(1111, "chokuretsu-wrapped-ep4-an-unexpected-reunion", &[C::Nagato, C::Koizumi], Objective::B, &[S::Girl, S::MemberA, S::MemberB, S::MemberC, S::MemberD]),
        route(1112, "chokuretsu-wrapped-ep4-traces", &[C::Mikuru, C::Nagato, C::Koizumi], Objective::B, &[S::Kunikida, S::Taniguchi]),
        route(1113, "chokuretsu-wrapped-ep4-extra-victims", &[], Objective::C, &[S::Kunikida, S::Taniguchi]),
        route(1114, "chokuretsu-wrapped-ep4-stolen-goods", &[C::Mikuru], Objective::C, &[S::Kunikida, S::Taniguchi]),
        route(1115, "chokuretsu-wrapped-ep4-a-merciless-individual", &[C::Nagato], Objective::C, &[S::Kunikida, S::Taniguchi]),
        route(1116, "chokuretsu-wrapped-ep4-follow-them", &[C::Nagato], Objective::C, &[S::Kunikida, S::Taniguchi]),
        route(1117, "chokuretsu-wrapped-ep4-unforeseen", &[C::Mikuru, C::Nagato], Objective::C, &[S::Kunikida, S::Taniguchi]),
        route(1118, "chokuretsu-wrapped-ep4-uneasiness", &[C::Mikuru, C::Koizumi], Objective::C, &[S::Kunikida, S::Taniguchi]),
        route(1119, "chokuretsu-wrapped-ep4-theres-no-one-here", &[C::Nagato, C::Koizumi], Objective::C, &[S::Kunikida, S::MemberA, S::MemberB, S::President, S::Taniguchi]),
    ],
    &[
        route(1121, "chokuretsu-wrapped-ep5-game", &[C::Haruhi], Objective::A, &[]),
        route(1122, "chokuretsu-wrapped-ep5-miscalculation", &[C::Haruhi, C::Mikuru], Objective::A, &[]),
        route(1123, "chokuretsu-wrapped-ep5-climax", &[C::Haruhi, C::Koizumi], Objective::A, &[]),
        route(1124, "chokuretsu-wrapped-ep5-tournament", &[C::Haruhi, C::Mikuru, C::Koizumi], Objective::A, &[]),
        route(1125, "chokuretsu-wrapped-ep5-working-in-solitude", &[], Objective::B, &[]),
        route(1126, "chokuretsu-wrapped-ep5-near-miss", &[C::Mikuru], Objective::B, &[]),
        route(1127, "chokuretsu-wrapped-ep5-a-nearby-blind-spot", &[C::Koizumi], Objective::B, &[]),
        route(1129, "chokuretsu-wrapped-ep5-straightforward-duty", &[], Objective::C, &[]),
        route(1130, "chokuretsu-wrapped-ep5-state-of-emergency", &[C::Mikuru], Objective::C, &[]),
        route(1131, "chokuretsu-wrapped-ep5-two-options", &[C::Koizumi], Objective::C, &[]),
        route(1133, "chokuretsu-wrapped-ep5-trace-the-abnormality", &[C::Nagato], Objective::D, &[]),
        route(1134, "chokuretsu-wrapped-ep5-all-alone", &[C::Mikuru, C::Nagato], Objective::D, &[]),
        route(1135, "chokuretsu-wrapped-ep5-keeping-busy", &[C::Nagato, C::Koizumi], Objective::D, &[]),
    ],
];

/// Iterate every route across all groups, in declaration order.
pub fn routes() -> impl Iterator<Item = &'static Route> {
    ROUTE_GROUPS.iter().flat_map(|group| group.iter())
}

/// Exact-match lookup by flag index.
pub fn route_by_flag(flag: u16) -> Option<&'static Route> {
    routes().find(|route| route.flag == flag)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_group_shape() {
        let sizes: Vec<usize> = ROUTE_GROUPS.iter().map(|g| g.len()).collect();
        assert_eq!(sizes, vec![16, 18, 16, 8, 10, 22, 13]);
        assert_eq!(routes().count(), 103);
    }

    #[test]
    fn test_flags_unique() {
        let mut seen = HashSet::new();
        for route in routes() {
            assert!(seen.insert(route.flag), "duplicate route flag {}", route.flag);
        }
    }

    #[test]
    fn test_fourth_route_of_first_group() {
        let route = ROUTE_GROUPS
            .first()
            .and_then(|group| group.get(3))
            .expect("episode 1 has at least four routes");
        assert_eq!(route.flag, 1025);
        assert_eq!(route.characters, &[C::Koizumi]);
        assert_eq!(route.side_characters, &[S::MemberA, S::President, S::Sister]);
    }

    #[test]
    fn test_lookup_by_flag() {
        assert_eq!(
            route_by_flag(1135).map(|r| r.name),
            Some("chokuretsu-wrapped-ep5-keeping-busy")
        );
        // 1045 sits between two objective blocks and belongs to no route.
        assert!(route_by_flag(1045).is_none());
    }
}
