//! Collectible topics, sorted by flag.

use std::ops::RangeInclusive;

use super::{Topic, TopicType as T};

/// Flag indices scanned for obtained topics.
///
/// The range is contiguous but the table is not: several indices inside it
/// have no topic attached and are never reported.
pub const TOPIC_FLAG_RANGE: RangeInclusive<u16> = 122..=820;

const fn topic(flag: u16, name: &'static str, episode: u8, kind: T) -> Topic {
    Topic {
        flag,
        name,
        episode,
        kind,
    }
}

pub static TOPICS: &[Topic] = &[
    topic(122, "chokuretsu-wrapped-topic-memory-card", 1, T::Main),
    topic(123, "chokuretsu-wrapped-topic-poster-misprint", 1, T::Main),
    topic(124, "chokuretsu-wrapped-topic-class-6-plate", 1, T::Main),
    topic(125, "chokuretsu-wrapped-topic-broken-music-box", 2, T::Main),
    topic(126, "chokuretsu-wrapped-topic-mysterious-sheet-music", 2, T::Main),
    topic(127, "chokuretsu-wrapped-topic-alumni-register", 2, T::Main),
    topic(128, "chokuretsu-wrapped-topic-contest-poster", 2, T::Main),
    topic(129, "chokuretsu-wrapped-topic-music-disc", 3, T::Main),
    topic(130, "chokuretsu-wrapped-topic-stray-cat", 3, T::Main),
    topic(131, "chokuretsu-wrapped-topic-cd-player", 3, T::Main),
    topic(132, "chokuretsu-wrapped-topic-science-textbook", 3, T::Main),
    topic(133, "chokuretsu-wrapped-topic-choir-club", 3, T::Main),
    topic(134, "chokuretsu-wrapped-topic-full-moon", 4, T::Main),
    topic(135, "chokuretsu-wrapped-topic-flashlight", 4, T::Main),
    topic(136, "chokuretsu-wrapped-topic-anatomical-model", 4, T::Main),
    topic(137, "chokuretsu-wrapped-topic-fireworks", 4, T::Main),
    topic(138, "chokuretsu-wrapped-topic-beach-ball", 4, T::Main),
    topic(139, "chokuretsu-wrapped-topic-shadow-puppetry", 4, T::Main),
    topic(140, "chokuretsu-wrapped-topic-spirit-photograph", 4, T::Main),
    topic(141, "chokuretsu-wrapped-topic-stain-on-the-wall", 4, T::Main),
    topic(142, "chokuretsu-wrapped-topic-photosynthesis", 4, T::Main),
    topic(143, "chokuretsu-wrapped-topic-dragging-marks", 4, T::Main),
    topic(144, "chokuretsu-wrapped-topic-petals", 4, T::Main),
    topic(145, "chokuretsu-wrapped-topic-twins", 5, T::Main),
    topic(146, "chokuretsu-wrapped-topic-hastily-scribbled-notes", 5, T::Main),
    topic(147, "chokuretsu-wrapped-topic-cell-phone", 5, T::Main),
    topic(148, "chokuretsu-wrapped-topic-new-ability", 5, T::Main),
    topic(149, "chokuretsu-wrapped-topic-curtain", 5, T::Main),
    topic(150, "chokuretsu-wrapped-topic-spot", 5, T::Main),
    topic(154, "chokuretsu-wrapped-topic-moths-and-flames", 5, T::Main),
    topic(155, "chokuretsu-wrapped-topic-reflection", 5, T::Main),
    topic(202, "chokuretsu-wrapped-topic-haruhi-and-kyon", 1, T::Haruhi),
    topic(203, "chokuretsu-wrapped-topic-sos-brigade-chief", 1, T::Haruhi),
    topic(204, "chokuretsu-wrapped-topic-alpha-wolf", 1, T::Haruhi),
    topic(205, "chokuretsu-wrapped-topic-brigade-chief-tyranny?!", 1, T::Haruhi),
    topic(206, "chokuretsu-wrapped-topic-a-scientific-approach", 2, T::Haruhi),
    topic(207, "chokuretsu-wrapped-topic-the-best-brigade-chief", 2, T::Haruhi),
    topic(208, "chokuretsu-wrapped-topic-gentle-miss-brigade-chief", 3, T::Haruhi),
    topic(209, "chokuretsu-wrapped-topic-the-sos-brigade's-summer", 3, T::Haruhi),
    topic(210, "chokuretsu-wrapped-topic-haruhi's-pace", 4, T::Haruhi),
    topic(211, "chokuretsu-wrapped-topic-optimistic-haruhi", 4, T::Haruhi),
    topic(212, "chokuretsu-wrapped-topic-kyon's-position", 5, T::Haruhi),
    topic(213, "chokuretsu-wrapped-topic-tranquilizer", 5, T::Haruhi),
    topic(214, "chokuretsu-wrapped-topic-kyon's-treat", 5, T::Haruhi),
    topic(302, "chokuretsu-wrapped-topic-mikuru's-tea", 1, T::Mikuru),
    topic(303, "chokuretsu-wrapped-topic-mikuru-and-the-club-president", 1, T::Mikuru),
    topic(304, "chokuretsu-wrapped-topic-the-computer-club's-goddess", 1, T::Mikuru),
    topic(305, "chokuretsu-wrapped-topic-mikuru-the-popular-favorite", 1, T::Mikuru),
    topic(306, "chokuretsu-wrapped-topic-mikuru's-weak-point", 1, T::Mikuru),
    topic(307, "chokuretsu-wrapped-topic-mikuru-and-the-computer-club", 1, T::Mikuru),
    topic(308, "chokuretsu-wrapped-topic-mikuru's-drawing", 1, T::Mikuru),
    topic(309, "chokuretsu-wrapped-topic-mikuru's-scary-story", 1, T::Mikuru),
    topic(310, "chokuretsu-wrapped-topic-mikuru-and-the-occult", 1, T::Mikuru),
    topic(311, "chokuretsu-wrapped-topic-mikuru-and-nagato", 1, T::Mikuru),
    topic(312, "chokuretsu-wrapped-topic-stained-book", 1, T::Mikuru),
    topic(313, "chokuretsu-wrapped-topic-plain-handkerchief", 1, T::Mikuru),
    topic(314, "chokuretsu-wrapped-topic-mikuru's-tears", 2, T::Mikuru),
    topic(315, "chokuretsu-wrapped-topic-mikuru's-cowardice", 2, T::Mikuru),
    topic(316, "chokuretsu-wrapped-topic-help-from-mikuru", 2, T::Mikuru),
    topic(317, "chokuretsu-wrapped-topic-mikuru's-snacks", 2, T::Mikuru),
    topic(318, "chokuretsu-wrapped-topic-mikuru's-trust-i", 2, T::Mikuru),
    topic(319, "chokuretsu-wrapped-topic-forgetful-mikuru", 2, T::Mikuru),
    topic(320, "chokuretsu-wrapped-topic-mikuru-the-klutz", 2, T::Mikuru),
    topic(325, "chokuretsu-wrapped-topic-passion-for-serving-tea", 2, T::Mikuru),
    topic(326, "chokuretsu-wrapped-topic-mikuru-and-tea-candies", 2, T::Mikuru),
    topic(327, "chokuretsu-wrapped-topic-mikuru's-flowers", 2, T::Mikuru),
    topic(328, "chokuretsu-wrapped-topic-careless-mikuru", 2, T::Mikuru),
    topic(330, "chokuretsu-wrapped-topic-mikuru's-recipe", 3, T::Mikuru),
    topic(331, "chokuretsu-wrapped-topic-mikuru's-calculator", 3, T::Mikuru),
    topic(332, "chokuretsu-wrapped-topic-mikuru's-efforts", 3, T::Mikuru),
    topic(333, "chokuretsu-wrapped-topic-a-flower-in-each-hand", 3, T::Mikuru),
    topic(334, "chokuretsu-wrapped-topic-mikuru-and-the-banana", 3, T::Mikuru),
    topic(335, "chokuretsu-wrapped-topic-dieting", 3, T::Mikuru),
    topic(336, "chokuretsu-wrapped-topic-mikuru-feels-regretful", 3, T::Mikuru),
    topic(337, "chokuretsu-wrapped-topic-kindness-towards-the-elderly", 3, T::Mikuru),
    topic(338, "chokuretsu-wrapped-topic-pom-poms", 3, T::Mikuru),
    topic(339, "chokuretsu-wrapped-topic-mikuru's-hands", 3, T::Mikuru),
    topic(340, "chokuretsu-wrapped-topic-mikuru's-towel", 3, T::Mikuru),
    topic(341, "chokuretsu-wrapped-topic-staff-room-happenings", 3, T::Mikuru),
    topic(342, "chokuretsu-wrapped-topic-president's-intense-stare", 3, T::Mikuru),
    topic(343, "chokuretsu-wrapped-topic-mikuru's-job", 3, T::Mikuru),
    topic(344, "chokuretsu-wrapped-topic-permission-to-borrow", 3, T::Mikuru),
    topic(345, "chokuretsu-wrapped-topic-fight-with-your-body", 3, T::Mikuru),
    topic(346, "chokuretsu-wrapped-topic-mikuru's-shield", 3, T::Mikuru),
    topic(347, "chokuretsu-wrapped-topic-seeing-things", 3, T::Mikuru),
    topic(348, "chokuretsu-wrapped-topic-feels-like-a-date", 3, T::Mikuru),
    topic(349, "chokuretsu-wrapped-topic-ice-cream-date", 3, T::Mikuru),
    topic(350, "chokuretsu-wrapped-topic-tripping-on-a-stone", 3, T::Mikuru),
    topic(351, "chokuretsu-wrapped-topic-mikuru's-trust-ii", 3, T::Mikuru),
    topic(352, "chokuretsu-wrapped-topic-plastic-bottle", 3, T::Mikuru),
    topic(353, "chokuretsu-wrapped-topic-maids-are-culture", 4, T::Mikuru),
    topic(354, "chokuretsu-wrapped-topic-mikuru's-gratitude", 4, T::Mikuru),
    topic(355, "chokuretsu-wrapped-topic-mikuru's-panic", 4, T::Mikuru),
    topic(356, "chokuretsu-wrapped-topic-mikuru's-warmth", 4, T::Mikuru),
    topic(357, "chokuretsu-wrapped-topic-mikuru's-drink", 4, T::Mikuru),
    topic(358, "chokuretsu-wrapped-topic-toy-phone", 4, T::Mikuru),
    topic(359, "chokuretsu-wrapped-topic-mikuru's-story", 4, T::Mikuru),
    topic(360, "chokuretsu-wrapped-topic-orange-juice", 4, T::Mikuru),
    topic(361, "chokuretsu-wrapped-topic-mikuru's-value", 4, T::Mikuru),
    topic(362, "chokuretsu-wrapped-topic-mikuru-invincibility-scheme", 4, T::Mikuru),
    topic(363, "chokuretsu-wrapped-topic-gentle-consideration", 4, T::Mikuru),
    topic(364, "chokuretsu-wrapped-topic-classified-information", 4, T::Mikuru),
    topic(365, "chokuretsu-wrapped-topic-mikuru's-respect", 4, T::Mikuru),
    topic(366, "chokuretsu-wrapped-topic-mikuru's-trembling", 4, T::Mikuru),
    topic(367, "chokuretsu-wrapped-topic-mikuru's-pen", 4, T::Mikuru),
    topic(368, "chokuretsu-wrapped-topic-mikuru's-motivation", 4, T::Mikuru),
    topic(369, "chokuretsu-wrapped-topic-mikuru's-support", 4, T::Mikuru),
    topic(370, "chokuretsu-wrapped-topic-mikuru's-delight", 4, T::Mikuru),
    topic(371, "chokuretsu-wrapped-topic-teary-eyed-mikuru", 4, T::Mikuru),
    topic(372, "chokuretsu-wrapped-topic-airheaded-mikuru", 4, T::Mikuru),
    topic(373, "chokuretsu-wrapped-topic-soft-hands", 4, T::Mikuru),
    topic(374, "chokuretsu-wrapped-topic-haruhi's-sympathizer", 4, T::Mikuru),
    topic(375, "chokuretsu-wrapped-topic-mikuru's-kindness", 4, T::Mikuru),
    topic(376, "chokuretsu-wrapped-topic-old-brooch", 4, T::Mikuru),
    topic(377, "chokuretsu-wrapped-topic-nice-assist", 4, T::Mikuru),
    topic(378, "chokuretsu-wrapped-topic-mikuru's-bodyguard", 4, T::Mikuru),
    topic(379, "chokuretsu-wrapped-topic-mikuru-the-worrywart", 4, T::Mikuru),
    topic(380, "chokuretsu-wrapped-topic-mikuru's-feelings", 5, T::Mikuru),
    topic(381, "chokuretsu-wrapped-topic-serious-mikuru", 5, T::Mikuru),
    topic(382, "chokuretsu-wrapped-topic-the-benefits-of-tea", 5, T::Mikuru),
    topic(383, "chokuretsu-wrapped-topic-request", 5, T::Mikuru),
    topic(384, "chokuretsu-wrapped-topic-loss-of-self-confidence", 5, T::Mikuru),
    topic(385, "chokuretsu-wrapped-topic-working-together-with-mikuru", 5, T::Mikuru),
    topic(386, "chokuretsu-wrapped-topic-wink", 5, T::Mikuru),
    topic(387, "chokuretsu-wrapped-topic-lucky-girl", 5, T::Mikuru),
    topic(388, "chokuretsu-wrapped-topic-positive", 5, T::Mikuru),
    topic(389, "chokuretsu-wrapped-topic-nice-mikuru", 5, T::Mikuru),
    topic(390, "chokuretsu-wrapped-topic-mikuru-the-phantom-thief?", 5, T::Mikuru),
    topic(391, "chokuretsu-wrapped-topic-mikuru's-competitive-spirit", 5, T::Mikuru),
    topic(392, "chokuretsu-wrapped-topic-mikuru's-courage", 5, T::Mikuru),
    topic(402, "chokuretsu-wrapped-topic-nagato's-book-search", 1, T::Nagato),
    topic(403, "chokuretsu-wrapped-topic-nagato's-affiliation", 1, T::Nagato),
    topic(404, "chokuretsu-wrapped-topic-nagato's-interest", 1, T::Nagato),
    topic(405, "chokuretsu-wrapped-topic-nagato's-composure", 1, T::Nagato),
    topic(406, "chokuretsu-wrapped-topic-nagato-and-the-pc", 1, T::Nagato),
    topic(407, "chokuretsu-wrapped-topic-nagato's-silence", 1, T::Nagato),
    topic(408, "chokuretsu-wrapped-topic-tough-girl-nagato", 1, T::Nagato),
    topic(409, "chokuretsu-wrapped-topic-nagato's-souvenir", 1, T::Nagato),
    topic(410, "chokuretsu-wrapped-topic-na-cat-o", 1, T::Nagato),
    topic(411, "chokuretsu-wrapped-topic-nagato's-sixth-sense", 1, T::Nagato),
    topic(412, "chokuretsu-wrapped-topic-nagato's-design-document", 1, T::Nagato),
    topic(413, "chokuretsu-wrapped-topic-nagato's-apology", 1, T::Nagato),
    topic(414, "chokuretsu-wrapped-topic-nagato's-book", 2, T::Nagato),
    topic(415, "chokuretsu-wrapped-topic-nagato's-stance", 2, T::Nagato),
    topic(416, "chokuretsu-wrapped-topic-nagato's-cooperation", 2, T::Nagato),
    topic(417, "chokuretsu-wrapped-topic-nagato's-complaint", 2, T::Nagato),
    topic(418, "chokuretsu-wrapped-topic-super-speed-reader-nagato", 2, T::Nagato),
    topic(419, "chokuretsu-wrapped-topic-nagato's-probability-note", 2, T::Nagato),
    topic(420, "chokuretsu-wrapped-topic-nagato's-hint-i", 2, T::Nagato),
    topic(425, "chokuretsu-wrapped-topic-nagato-the-skilled", 2, T::Nagato),
    topic(426, "chokuretsu-wrapped-topic-sit.", 2, T::Nagato),
    topic(427, "chokuretsu-wrapped-topic-nagato's-pressed-flower", 2, T::Nagato),
    topic(428, "chokuretsu-wrapped-topic-nagato's-bluntness", 2, T::Nagato),
    topic(430, "chokuretsu-wrapped-topic-trust-in-nagato", 3, T::Nagato),
    topic(431, "chokuretsu-wrapped-topic-curry-bread", 3, T::Nagato),
    topic(432, "chokuretsu-wrapped-topic-nagato's-banana", 3, T::Nagato),
    topic(433, "chokuretsu-wrapped-topic-nagato-and-meat", 3, T::Nagato),
    topic(434, "chokuretsu-wrapped-topic-marshmallow", 3, T::Nagato),
    topic(435, "chokuretsu-wrapped-topic-muryo-taisu", 3, T::Nagato),
    topic(436, "chokuretsu-wrapped-topic-nagato's-sigh", 3, T::Nagato),
    topic(437, "chokuretsu-wrapped-topic-nagato's-wisdom", 3, T::Nagato),
    topic(438, "chokuretsu-wrapped-topic-nagato-and-curry", 3, T::Nagato),
    topic(439, "chokuretsu-wrapped-topic-walking-encyclopedia", 3, T::Nagato),
    topic(440, "chokuretsu-wrapped-topic-nagato-and-puzzles", 3, T::Nagato),
    topic(441, "chokuretsu-wrapped-topic-coordinates", 3, T::Nagato),
    topic(442, "chokuretsu-wrapped-topic-identifying-trouble", 3, T::Nagato),
    topic(443, "chokuretsu-wrapped-topic-tin-soldiers", 3, T::Nagato),
    topic(444, "chokuretsu-wrapped-topic-nagato's-hint-ii", 3, T::Nagato),
    topic(445, "chokuretsu-wrapped-topic-information-warfare", 3, T::Nagato),
    topic(446, "chokuretsu-wrapped-topic-out-of-touch", 3, T::Nagato),
    topic(447, "chokuretsu-wrapped-topic-skewer-of-ultimate-misfortune", 3, T::Nagato),
    topic(448, "chokuretsu-wrapped-topic-bowl", 3, T::Nagato),
    topic(449, "chokuretsu-wrapped-topic-shaved-ice-date", 3, T::Nagato),
    topic(450, "chokuretsu-wrapped-topic-insert-advertisement", 3, T::Nagato),
    topic(451, "chokuretsu-wrapped-topic-nagato's-slide-rule", 4, T::Nagato),
    topic(452, "chokuretsu-wrapped-topic-nagato's-amulet", 4, T::Nagato),
    topic(453, "chokuretsu-wrapped-topic-unable-to-respond", 4, T::Nagato),
    topic(454, "chokuretsu-wrapped-topic-capable-nagato", 4, T::Nagato),
    topic(455, "chokuretsu-wrapped-topic-cicada-shell", 4, T::Nagato),
    topic(456, "chokuretsu-wrapped-topic-chocolate", 4, T::Nagato),
    topic(457, "chokuretsu-wrapped-topic-subculture-magazine", 4, T::Nagato),
    topic(458, "chokuretsu-wrapped-topic-mineral-water", 4, T::Nagato),
    topic(459, "chokuretsu-wrapped-topic-nagato's-consent", 4, T::Nagato),
    topic(460, "chokuretsu-wrapped-topic-nagato's-handheld-mirror", 4, T::Nagato),
    topic(461, "chokuretsu-wrapped-topic-nagato's-backup", 4, T::Nagato),
    topic(462, "chokuretsu-wrapped-topic-nagato's-appraisal", 4, T::Nagato),
    topic(463, "chokuretsu-wrapped-topic-nagato's-glasses", 4, T::Nagato),
    topic(464, "chokuretsu-wrapped-topic-nagato's-curry", 4, T::Nagato),
    topic(465, "chokuretsu-wrapped-topic-nagato's-reaction", 4, T::Nagato),
    topic(466, "chokuretsu-wrapped-topic-the-charm", 4, T::Nagato),
    topic(467, "chokuretsu-wrapped-topic-nagato's-stamp-of-approval", 4, T::Nagato),
    topic(468, "chokuretsu-wrapped-topic-evidence?", 4, T::Nagato),
    topic(469, "chokuretsu-wrapped-topic-dose-of-motivation", 4, T::Nagato),
    topic(470, "chokuretsu-wrapped-topic-nagato's-triumphant-look", 4, T::Nagato),
    topic(471, "chokuretsu-wrapped-topic-nagato's-estimation", 4, T::Nagato),
    topic(472, "chokuretsu-wrapped-topic-nagato's-hand", 4, T::Nagato),
    topic(473, "chokuretsu-wrapped-topic-nagato's-restraint", 4, T::Nagato),
    topic(474, "chokuretsu-wrapped-topic-mysterious-mineral", 4, T::Nagato),
    topic(475, "chokuretsu-wrapped-topic-instant-shutdown", 4, T::Nagato),
    topic(476, "chokuretsu-wrapped-topic-chance-of-success", 4, T::Nagato),
    topic(477, "chokuretsu-wrapped-topic-happiness", 4, T::Nagato),
    topic(478, "chokuretsu-wrapped-topic-countermeasure", 5, T::Nagato),
    topic(479, "chokuretsu-wrapped-topic-foresight", 5, T::Nagato),
    topic(480, "chokuretsu-wrapped-topic-rendezvous-with-nagato", 5, T::Nagato),
    topic(481, "chokuretsu-wrapped-topic-two-nagatos", 5, T::Nagato),
    topic(482, "chokuretsu-wrapped-topic-incredibly-chivalrous-nagato", 5, T::Nagato),
    topic(483, "chokuretsu-wrapped-topic-careful-explanation", 5, T::Nagato),
    topic(484, "chokuretsu-wrapped-topic-neo-chess", 5, T::Nagato),
    topic(502, "chokuretsu-wrapped-topic-koizumi's-flattery", 1, T::Koizumi),
    topic(503, "chokuretsu-wrapped-topic-a-clever-person", 1, T::Koizumi),
    topic(504, "chokuretsu-wrapped-topic-interesting-game", 1, T::Koizumi),
    topic(505, "chokuretsu-wrapped-topic-koizumi-and-the-computer", 1, T::Koizumi),
    topic(506, "chokuretsu-wrapped-topic-koizumi-and-the-game", 1, T::Koizumi),
    topic(507, "chokuretsu-wrapped-topic-koizumi's-inquiry", 1, T::Koizumi),
    topic(508, "chokuretsu-wrapped-topic-something-unusual", 1, T::Koizumi),
    topic(509, "chokuretsu-wrapped-topic-koizumi's-hypothesis", 1, T::Koizumi),
    topic(510, "chokuretsu-wrapped-topic-a-ghost's-true-form", 1, T::Koizumi),
    topic(511, "chokuretsu-wrapped-topic-superb-deputy-brigade-chief", 1, T::Koizumi),
    topic(512, "chokuretsu-wrapped-topic-prudent-koizumi", 1, T::Koizumi),
    topic(513, "chokuretsu-wrapped-topic-koizumi's-apology", 1, T::Koizumi),
    topic(514, "chokuretsu-wrapped-topic-esp", 2, T::Koizumi),
    topic(515, "chokuretsu-wrapped-topic-koizumi-the-nitpicker", 2, T::Koizumi),
    topic(516, "chokuretsu-wrapped-topic-the-koizumi-smile", 2, T::Koizumi),
    topic(517, "chokuretsu-wrapped-topic-koizumi-the-self-assured", 2, T::Koizumi),
    topic(518, "chokuretsu-wrapped-topic-koizumi's-cell-phone", 2, T::Koizumi),
    topic(519, "chokuretsu-wrapped-topic-koizumi's-candy", 2, T::Koizumi),
    topic(520, "chokuretsu-wrapped-topic-koizumi's-report", 2, T::Koizumi),
    topic(525, "chokuretsu-wrapped-topic-koizumi-the-prize-pupil", 2, T::Koizumi),
    topic(526, "chokuretsu-wrapped-topic-koizumi's-new-power?", 2, T::Koizumi),
    topic(527, "chokuretsu-wrapped-topic-koizumi's-haruhi-theory", 2, T::Koizumi),
    topic(528, "chokuretsu-wrapped-topic-koizumi's-advice", 2, T::Koizumi),
    topic(530, "chokuretsu-wrapped-topic-koizumi's-true-feelings", 3, T::Koizumi),
    topic(531, "chokuretsu-wrapped-topic-machiavellian-koizumi", 3, T::Koizumi),
    topic(532, "chokuretsu-wrapped-topic-lottery-ticket", 3, T::Koizumi),
    topic(533, "chokuretsu-wrapped-topic-koizumi's-calling", 3, T::Koizumi),
    topic(534, "chokuretsu-wrapped-topic-tendency-to-lecture", 3, T::Koizumi),
    topic(535, "chokuretsu-wrapped-topic-cheat-sheet", 3, T::Koizumi),
    topic(536, "chokuretsu-wrapped-topic-koizumi's-bitter-smile", 3, T::Koizumi),
    topic(537, "chokuretsu-wrapped-topic-madam-and-koizumi", 3, T::Koizumi),
    topic(538, "chokuretsu-wrapped-topic-koizumi's-gaze", 3, T::Koizumi),
    topic(539, "chokuretsu-wrapped-topic-koizumi's-dowsing-rod", 3, T::Koizumi),
    topic(540, "chokuretsu-wrapped-topic-koizumi's-matches", 3, T::Koizumi),
    topic(541, "chokuretsu-wrapped-topic-cowardly-koizumi", 3, T::Koizumi),
    topic(542, "chokuretsu-wrapped-topic-half-baked-koizumi", 3, T::Koizumi),
    topic(543, "chokuretsu-wrapped-topic-“agency”-non-involvement", 3, T::Koizumi),
    topic(544, "chokuretsu-wrapped-topic-koizumi's-hint", 3, T::Koizumi),
    topic(545, "chokuretsu-wrapped-topic-the-ends-justify-the-means", 3, T::Koizumi),
    topic(546, "chokuretsu-wrapped-topic-a-short-rest", 3, T::Koizumi),
    topic(547, "chokuretsu-wrapped-topic-koizumi's-warning", 3, T::Koizumi),
    topic(548, "chokuretsu-wrapped-topic-shower", 3, T::Koizumi),
    topic(549, "chokuretsu-wrapped-topic-koizumi's-trust", 3, T::Koizumi),
    topic(550, "chokuretsu-wrapped-topic-summer-schedule", 3, T::Koizumi),
    topic(551, "chokuretsu-wrapped-topic-skilled-koizumi", 4, T::Koizumi),
    topic(552, "chokuretsu-wrapped-topic-koizumi's-goddess?", 4, T::Koizumi),
    topic(553, "chokuretsu-wrapped-topic-look-of-envy", 4, T::Koizumi),
    topic(554, "chokuretsu-wrapped-topic-koizumi's-heinous-act", 4, T::Koizumi),
    topic(555, "chokuretsu-wrapped-topic-koizumi's-sarcasm", 4, T::Koizumi),
    topic(556, "chokuretsu-wrapped-topic-wealth-of-knowledge", 4, T::Koizumi),
    topic(557, "chokuretsu-wrapped-topic-capable-koizumi", 4, T::Koizumi),
    topic(558, "chokuretsu-wrapped-topic-tabletop-games", 4, T::Koizumi),
    topic(559, "chokuretsu-wrapped-topic-koizumi's-conversation-skills", 4, T::Koizumi),
    topic(560, "chokuretsu-wrapped-topic-koizumi's-“it's-up-to-you!”", 4, T::Koizumi),
    topic(561, "chokuretsu-wrapped-topic-harsh-koizumi", 4, T::Koizumi),
    topic(562, "chokuretsu-wrapped-topic-embarrassing-photo", 4, T::Koizumi),
    topic(563, "chokuretsu-wrapped-topic-koizumi's-supposition", 4, T::Koizumi),
    topic(564, "chokuretsu-wrapped-topic-koizumi's-gutsiness", 4, T::Koizumi),
    topic(565, "chokuretsu-wrapped-topic-koizumi's-nod", 4, T::Koizumi),
    topic(566, "chokuretsu-wrapped-topic-icy-stare", 4, T::Koizumi),
    topic(567, "chokuretsu-wrapped-topic-medicinal-herb", 4, T::Koizumi),
    topic(568, "chokuretsu-wrapped-topic-encouragement", 4, T::Koizumi),
    topic(569, "chokuretsu-wrapped-topic-koizumi's-gratitude", 4, T::Koizumi),
    topic(570, "chokuretsu-wrapped-topic-realism", 4, T::Koizumi),
    topic(571, "chokuretsu-wrapped-topic-bad-at-games", 4, T::Koizumi),
    topic(572, "chokuretsu-wrapped-topic-taniguchi-on-the-roof", 4, T::Koizumi),
    topic(573, "chokuretsu-wrapped-topic-koizumi's-pride", 4, T::Koizumi),
    topic(574, "chokuretsu-wrapped-topic-trust-in-koizumi", 4, T::Koizumi),
    topic(575, "chokuretsu-wrapped-topic-preaching-to-deaf-ears", 4, T::Koizumi),
    topic(576, "chokuretsu-wrapped-topic-shoulder-massage", 4, T::Koizumi),
    topic(577, "chokuretsu-wrapped-topic-visualization", 5, T::Koizumi),
    topic(578, "chokuretsu-wrapped-topic-koizumi,-the-main-act", 5, T::Koizumi),
    topic(579, "chokuretsu-wrapped-topic-a-tide-turning-move", 5, T::Koizumi),
    topic(580, "chokuretsu-wrapped-topic-tournament-bracket", 5, T::Koizumi),
    topic(581, "chokuretsu-wrapped-topic-koizumi's-silver-tongue", 5, T::Koizumi),
    topic(582, "chokuretsu-wrapped-topic-koizumi's-friend", 5, T::Koizumi),
    topic(583, "chokuretsu-wrapped-topic-camaraderie", 5, T::Koizumi),
    topic(584, "chokuretsu-wrapped-topic-koizumi's-own-way", 5, T::Koizumi),
    topic(585, "chokuretsu-wrapped-topic-koizumi's-keen-eyes", 5, T::Koizumi),
    topic(586, "chokuretsu-wrapped-topic-koizumi's-encouragement", 5, T::Koizumi),
    topic(587, "chokuretsu-wrapped-topic-koizumi's-self-confidence", 5, T::Koizumi),
    topic(588, "chokuretsu-wrapped-topic-simple-deduction", 5, T::Koizumi),
    topic(589, "chokuretsu-wrapped-topic-koizumi's-property", 5, T::Koizumi),
    topic(602, "chokuretsu-wrapped-topic-disappointment", 1, T::Sub),
    topic(603, "chokuretsu-wrapped-topic-japan,-the-nation-of-games", 1, T::Sub),
    topic(604, "chokuretsu-wrapped-topic-mascot", 1, T::Sub),
    topic(605, "chokuretsu-wrapped-topic-respect", 1, T::Sub),
    topic(606, "chokuretsu-wrapped-topic-the-clubroom-pc", 1, T::Sub),
    topic(607, "chokuretsu-wrapped-topic-literary-club", 1, T::Sub),
    topic(608, "chokuretsu-wrapped-topic-eye-strain", 1, T::Sub),
    topic(609, "chokuretsu-wrapped-topic-pc-game", 1, T::Sub),
    topic(610, "chokuretsu-wrapped-topic-board-game", 1, T::Sub),
    topic(611, "chokuretsu-wrapped-topic-warm-mood", 1, T::Sub),
    topic(612, "chokuretsu-wrapped-topic-sympathy", 1, T::Sub),
    topic(613, "chokuretsu-wrapped-topic-flattery", 1, T::Sub),
    topic(614, "chokuretsu-wrapped-topic-h₂o", 1, T::Sub),
    topic(615, "chokuretsu-wrapped-topic-calm-and-quick", 1, T::Sub),
    topic(616, "chokuretsu-wrapped-topic-darkest-under-the-lamp-post", 1, T::Sub),
    topic(617, "chokuretsu-wrapped-topic-group-action", 1, T::Sub),
    topic(618, "chokuretsu-wrapped-topic-sos-brigade-homepage", 1, T::Sub),
    topic(619, "chokuretsu-wrapped-topic-breakthrough", 1, T::Sub),
    topic(620, "chokuretsu-wrapped-topic-important-things", 1, T::Sub),
    topic(621, "chokuretsu-wrapped-topic-concern", 1, T::Sub),
    topic(622, "chokuretsu-wrapped-topic-final-wish", 1, T::Sub),
    topic(623, "chokuretsu-wrapped-topic-work-delay", 1, T::Sub),
    topic(624, "chokuretsu-wrapped-topic-a-small-kindness", 1, T::Sub),
    topic(625, "chokuretsu-wrapped-topic-electric-sheep", 1, T::Sub),
    topic(626, "chokuretsu-wrapped-topic-time-for-“something”", 1, T::Sub),
    topic(627, "chokuretsu-wrapped-topic-club-president's-anxiety", 1, T::Sub),
    topic(628, "chokuretsu-wrapped-topic-omitted-letter-misprint", 1, T::Sub),
    topic(629, "chokuretsu-wrapped-topic-treatment", 1, T::Sub),
    topic(630, "chokuretsu-wrapped-topic-going-in-circles", 1, T::Sub),
    topic(631, "chokuretsu-wrapped-topic-feigning-ignorance", 1, T::Sub),
    topic(632, "chokuretsu-wrapped-topic-useful-information", 1, T::Sub),
    topic(633, "chokuretsu-wrapped-topic-open-window", 1, T::Sub),
    topic(634, "chokuretsu-wrapped-topic-scary-object", 1, T::Sub),
    topic(635, "chokuretsu-wrapped-topic-ignorance-is-bliss", 1, T::Sub),
    topic(636, "chokuretsu-wrapped-topic-mysterious-radio-waves", 1, T::Sub),
    topic(637, "chokuretsu-wrapped-topic-the-power-of-imagination", 1, T::Sub),
    topic(638, "chokuretsu-wrapped-topic-nail-dirt", 1, T::Sub),
    topic(639, "chokuretsu-wrapped-topic-answer-sheet", 1, T::Sub),
    topic(640, "chokuretsu-wrapped-topic-extra-history-lesson", 1, T::Sub),
    topic(641, "chokuretsu-wrapped-topic-demonic-whispering", 1, T::Sub),
    topic(642, "chokuretsu-wrapped-topic-very-fast", 1, T::Sub),
    topic(643, "chokuretsu-wrapped-topic-band-aid", 1, T::Sub),
    topic(644, "chokuretsu-wrapped-topic-heroine", 1, T::Sub),
    topic(645, "chokuretsu-wrapped-topic-sos-brigade-activity-log", 1, T::Sub),
    topic(646, "chokuretsu-wrapped-topic-angel-descent", 1, T::Sub),
    topic(647, "chokuretsu-wrapped-topic-distance-between-buildings", 1, T::Sub),
    topic(648, "chokuretsu-wrapped-topic-strategic-retreat", 1, T::Sub),
    topic(649, "chokuretsu-wrapped-topic-empty-shell", 1, T::Sub),
    topic(650, "chokuretsu-wrapped-topic-pitiable-computer-society", 1, T::Sub),
    topic(651, "chokuretsu-wrapped-topic-a-profoundly-wonderful-story", 1, T::Sub),
    topic(652, "chokuretsu-wrapped-topic-a-matter-of-time", 1, T::Sub),
    topic(653, "chokuretsu-wrapped-topic-boy's-team", 1, T::Sub),
    topic(654, "chokuretsu-wrapped-topic-falling-on-your-backside", 1, T::Sub),
    topic(655, "chokuretsu-wrapped-topic-intricate-workmanship", 1, T::Sub),
    topic(656, "chokuretsu-wrapped-topic-acceptance-is-also-important", 1, T::Sub),
    topic(657, "chokuretsu-wrapped-topic-futuristic-ghost-stories", 2, T::Sub),
    topic(658, "chokuretsu-wrapped-topic-overthinking", 2, T::Sub),
    topic(659, "chokuretsu-wrapped-topic-the-cursed-music-room", 2, T::Sub),
    topic(660, "chokuretsu-wrapped-topic-sci-fi-novel", 2, T::Sub),
    topic(661, "chokuretsu-wrapped-topic-doing-it-yourself", 2, T::Sub),
    topic(662, "chokuretsu-wrapped-topic-treated-to-juice", 2, T::Sub),
    topic(663, "chokuretsu-wrapped-topic-silent-observer", 2, T::Sub),
    topic(664, "chokuretsu-wrapped-topic-the-fate-of-the-world", 2, T::Sub),
    topic(665, "chokuretsu-wrapped-topic-annoying-situation", 2, T::Sub),
    topic(666, "chokuretsu-wrapped-topic-danger:-do-not-touch", 2, T::Sub),
    topic(667, "chokuretsu-wrapped-topic-the-truth-of-the-matter", 2, T::Sub),
    topic(668, "chokuretsu-wrapped-topic-closing-ceremony", 2, T::Sub),
    topic(669, "chokuretsu-wrapped-topic-president's-wish", 2, T::Sub),
    topic(670, "chokuretsu-wrapped-topic-inexplicable-conduct", 2, T::Sub),
    topic(671, "chokuretsu-wrapped-topic-computer-club-&-sheet-music", 2, T::Sub),
    topic(672, "chokuretsu-wrapped-topic-suspicious-data", 2, T::Sub),
    topic(673, "chokuretsu-wrapped-topic-insufficient-data", 2, T::Sub),
    topic(674, "chokuretsu-wrapped-topic-president's-orders", 2, T::Sub),
    topic(675, "chokuretsu-wrapped-topic-plasma", 2, T::Sub),
    topic(676, "chokuretsu-wrapped-topic-pouting", 2, T::Sub),
    topic(677, "chokuretsu-wrapped-topic-haruhi-the-unwavering", 2, T::Sub),
    topic(678, "chokuretsu-wrapped-topic-speed-reading-nagato-style", 2, T::Sub),
    topic(679, "chokuretsu-wrapped-topic-haruhi's-theory", 2, T::Sub),
    topic(680, "chokuretsu-wrapped-topic-budget-application-form", 2, T::Sub),
    topic(681, "chokuretsu-wrapped-topic-supplementary-class-schedule", 2, T::Sub),
    topic(682, "chokuretsu-wrapped-topic-physical-examination-notice", 2, T::Sub),
    topic(683, "chokuretsu-wrapped-topic-literary-club-band", 2, T::Sub),
    topic(684, "chokuretsu-wrapped-topic-something-that-passed-by", 2, T::Sub),
    topic(685, "chokuretsu-wrapped-topic-speak-of-the-devil…", 2, T::Sub),
    topic(686, "chokuretsu-wrapped-topic-day-of-deadline", 2, T::Sub),
    topic(687, "chokuretsu-wrapped-topic-beautiful-flower", 2, T::Sub),
    topic(688, "chokuretsu-wrapped-topic-roadside-flower", 2, T::Sub),
    topic(689, "chokuretsu-wrapped-topic-bluebird-of-happiness", 2, T::Sub),
    topic(690, "chokuretsu-wrapped-topic-a-minor-coincidence", 2, T::Sub),
    topic(691, "chokuretsu-wrapped-topic-deadline", 2, T::Sub),
    topic(692, "chokuretsu-wrapped-topic-an-award-of-some-sort", 2, T::Sub),
    topic(693, "chokuretsu-wrapped-topic-chatting-over-tea", 2, T::Sub),
    topic(694, "chokuretsu-wrapped-topic-premature-jab", 2, T::Sub),
    topic(695, "chokuretsu-wrapped-topic-club-member's-gratitude", 2, T::Sub),
    topic(696, "chokuretsu-wrapped-topic-attack-of-the-club-member", 2, T::Sub),
    topic(697, "chokuretsu-wrapped-topic-something-summery", 3, T::Sub),
    topic(698, "chokuretsu-wrapped-topic-cheap-sympathy", 3, T::Sub),
    topic(699, "chokuretsu-wrapped-topic-mikuru's-quip", 3, T::Sub),
    topic(700, "chokuretsu-wrapped-topic-expensive-receipt", 3, T::Sub),
    topic(701, "chokuretsu-wrapped-topic-bell", 3, T::Sub),
    topic(702, "chokuretsu-wrapped-topic-outrageous-ingredients", 3, T::Sub),
    topic(703, "chokuretsu-wrapped-topic-book-barbecue", 3, T::Sub),
    topic(704, "chokuretsu-wrapped-topic-feelings-of-guilt", 3, T::Sub),
    topic(705, "chokuretsu-wrapped-topic-watermelon-seeds", 3, T::Sub),
    topic(706, "chokuretsu-wrapped-topic-dried-banana", 3, T::Sub),
    topic(707, "chokuretsu-wrapped-topic-mysterious-ofuda", 3, T::Sub),
    topic(708, "chokuretsu-wrapped-topic-junk", 3, T::Sub),
    topic(709, "chokuretsu-wrapped-topic-mysterious-mechanism", 3, T::Sub),
    topic(710, "chokuretsu-wrapped-topic-fruit-king", 3, T::Sub),
    topic(711, "chokuretsu-wrapped-topic-moon-viewing-banquet", 3, T::Sub),
    topic(712, "chokuretsu-wrapped-topic-summer-breeze-cd", 3, T::Sub),
    topic(713, "chokuretsu-wrapped-topic-seven-spotted-ladybug", 3, T::Sub),
    topic(714, "chokuretsu-wrapped-topic-meter-long-iron-skewer", 3, T::Sub),
    topic(715, "chokuretsu-wrapped-topic-artificial-feeding", 3, T::Sub),
    topic(716, "chokuretsu-wrapped-topic-junk-storage", 3, T::Sub),
    topic(717, "chokuretsu-wrapped-topic-kyon's-deduction", 3, T::Sub),
    topic(718, "chokuretsu-wrapped-topic-little-sister's-helping-hand", 3, T::Sub),
    topic(719, "chokuretsu-wrapped-topic-lucky-item", 3, T::Sub),
    topic(720, "chokuretsu-wrapped-topic-in-the-palm-of-your-hand", 3, T::Sub),
    topic(721, "chokuretsu-wrapped-topic-medal-of-honor", 3, T::Sub),
    topic(722, "chokuretsu-wrapped-topic-target", 3, T::Sub),
    topic(723, "chokuretsu-wrapped-topic-poltergeist", 3, T::Sub),
    topic(724, "chokuretsu-wrapped-topic-mosquito-coil", 3, T::Sub),
    topic(725, "chokuretsu-wrapped-topic-running-away", 3, T::Sub),
    topic(726, "chokuretsu-wrapped-topic-ray-gun", 3, T::Sub),
    topic(727, "chokuretsu-wrapped-topic-pocket-paperback", 3, T::Sub),
    topic(728, "chokuretsu-wrapped-topic-seal-of-approval", 3, T::Sub),
    topic(729, "chokuretsu-wrapped-topic-sometime", 3, T::Sub),
    topic(730, "chokuretsu-wrapped-topic-ghost", 3, T::Sub),
    topic(731, "chokuretsu-wrapped-topic-enthusiasm", 3, T::Sub),
    topic(732, "chokuretsu-wrapped-topic-secondary-disaster", 3, T::Sub),
    topic(733, "chokuretsu-wrapped-topic-resonance", 3, T::Sub),
    topic(734, "chokuretsu-wrapped-topic-chlorine", 4, T::Sub),
    topic(735, "chokuretsu-wrapped-topic-spirit-of-service", 4, T::Sub),
    topic(736, "chokuretsu-wrapped-topic-surprisingly-good-person", 4, T::Sub),
    topic(737, "chokuretsu-wrapped-topic-ventra-badge", 4, T::Sub),
    topic(738, "chokuretsu-wrapped-topic-marble", 4, T::Sub),
    topic(739, "chokuretsu-wrapped-topic-ordinary", 4, T::Sub),
    topic(740, "chokuretsu-wrapped-topic-being-diplomatic", 4, T::Sub),
    topic(741, "chokuretsu-wrapped-topic-good-fortune", 4, T::Sub),
    topic(742, "chokuretsu-wrapped-topic-emergency", 4, T::Sub),
    topic(743, "chokuretsu-wrapped-topic-air-freshener", 4, T::Sub),
    topic(744, "chokuretsu-wrapped-topic-fluorescent-panel", 4, T::Sub),
    topic(745, "chokuretsu-wrapped-topic-wet-cloth", 4, T::Sub),
    topic(746, "chokuretsu-wrapped-topic-bucket-sound", 4, T::Sub),
    topic(747, "chokuretsu-wrapped-topic-weekly-magazine", 4, T::Sub),
    topic(748, "chokuretsu-wrapped-topic-baseball-equipment", 4, T::Sub),
    topic(749, "chokuretsu-wrapped-topic-warabimochi", 4, T::Sub),
    topic(750, "chokuretsu-wrapped-topic-glowstick", 4, T::Sub),
    topic(751, "chokuretsu-wrapped-topic-manga-magazine", 4, T::Sub),
    topic(752, "chokuretsu-wrapped-topic-astrology-book", 4, T::Sub),
    topic(753, "chokuretsu-wrapped-topic-object-of-interest", 4, T::Sub),
    topic(754, "chokuretsu-wrapped-topic-budget-constraints", 4, T::Sub),
    topic(755, "chokuretsu-wrapped-topic-tabletop-game", 4, T::Sub),
    topic(756, "chokuretsu-wrapped-topic-standoff-surrender", 4, T::Sub),
    topic(757, "chokuretsu-wrapped-topic-clubroom-furnishing", 4, T::Sub),
    topic(758, "chokuretsu-wrapped-topic-shopping-squad", 4, T::Sub),
    topic(759, "chokuretsu-wrapped-topic-adenosine-receptors", 4, T::Sub),
    topic(760, "chokuretsu-wrapped-topic-unwarranted-spite", 4, T::Sub),
    topic(761, "chokuretsu-wrapped-topic-deliberate", 4, T::Sub),
    topic(762, "chokuretsu-wrapped-topic-the-idol-of-north-high", 4, T::Sub),
    topic(763, "chokuretsu-wrapped-topic-yellow-card", 4, T::Sub),
    topic(764, "chokuretsu-wrapped-topic-talking-privately", 4, T::Sub),
    topic(765, "chokuretsu-wrapped-topic-the-next-test-of-courage", 4, T::Sub),
    topic(766, "chokuretsu-wrapped-topic-time-limit", 4, T::Sub),
    topic(767, "chokuretsu-wrapped-topic-scarab-beetle", 4, T::Sub),
    topic(768, "chokuretsu-wrapped-topic-knees", 4, T::Sub),
    topic(769, "chokuretsu-wrapped-topic-unfortunate-circumstance", 4, T::Sub),
    topic(770, "chokuretsu-wrapped-topic-break-time", 4, T::Sub),
    topic(771, "chokuretsu-wrapped-topic-eloquence", 4, T::Sub),
    topic(772, "chokuretsu-wrapped-topic-coward", 4, T::Sub),
    topic(773, "chokuretsu-wrapped-topic-fun-test-of-courage", 4, T::Sub),
    topic(774, "chokuretsu-wrapped-topic-drone-beetle", 4, T::Sub),
    topic(775, "chokuretsu-wrapped-topic-hallway-echo", 4, T::Sub),
    topic(776, "chokuretsu-wrapped-topic-ghost?", 4, T::Sub),
    topic(777, "chokuretsu-wrapped-topic-sunflower-seeds", 4, T::Sub),
    topic(778, "chokuretsu-wrapped-topic-retribution", 4, T::Sub),
    topic(779, "chokuretsu-wrapped-topic-ordinary-human", 4, T::Sub),
    topic(780, "chokuretsu-wrapped-topic-computer-society-romanticism", 4, T::Sub),
    topic(781, "chokuretsu-wrapped-topic-trembling-with-fear", 4, T::Sub),
    topic(782, "chokuretsu-wrapped-topic-flower-seed", 4, T::Sub),
    topic(783, "chokuretsu-wrapped-topic-parasitism", 4, T::Sub),
    topic(784, "chokuretsu-wrapped-topic-indoor-shoes", 4, T::Sub),
    topic(785, "chokuretsu-wrapped-topic-notebook-paper-scrap", 4, T::Sub),
    topic(786, "chokuretsu-wrapped-topic-apology", 4, T::Sub),
    topic(787, "chokuretsu-wrapped-topic-punishment", 4, T::Sub),
    topic(788, "chokuretsu-wrapped-topic-intuition", 4, T::Sub),
    topic(789, "chokuretsu-wrapped-topic-photo-of-taniguchi", 4, T::Sub),
    topic(790, "chokuretsu-wrapped-topic-personal-relationship", 4, T::Sub),
    topic(791, "chokuretsu-wrapped-topic-hose", 4, T::Sub),
    topic(792, "chokuretsu-wrapped-topic-the-taste-of-victory", 5, T::Sub),
    topic(793, "chokuretsu-wrapped-topic-handmade-pieces", 5, T::Sub),
    topic(794, "chokuretsu-wrapped-topic-reliable-friend", 5, T::Sub),
    topic(795, "chokuretsu-wrapped-topic-special-chess-training", 5, T::Sub),
    topic(796, "chokuretsu-wrapped-topic-kyon-goes-first", 5, T::Sub),
    topic(797, "chokuretsu-wrapped-topic-three-heads-are-better-than-one", 5, T::Sub),
    topic(798, "chokuretsu-wrapped-topic-one-to-one", 5, T::Sub),
    topic(799, "chokuretsu-wrapped-topic-sos-brigade-chess-champion", 5, T::Sub),
    topic(800, "chokuretsu-wrapped-topic-kyon's-doubts", 5, T::Sub),
    topic(801, "chokuretsu-wrapped-topic-chewing-gum-strip", 5, T::Sub),
    topic(802, "chokuretsu-wrapped-topic-useless", 5, T::Sub),
    topic(803, "chokuretsu-wrapped-topic-indecipherable", 5, T::Sub),
    topic(804, "chokuretsu-wrapped-topic-mysterious-address", 5, T::Sub),
    topic(805, "chokuretsu-wrapped-topic-impromptu-decision", 5, T::Sub),
    topic(806, "chokuretsu-wrapped-topic-numb-legs", 5, T::Sub),
    topic(807, "chokuretsu-wrapped-topic-tarpaulin", 5, T::Sub),
    topic(808, "chokuretsu-wrapped-topic-bold-opinion", 5, T::Sub),
    topic(809, "chokuretsu-wrapped-topic-girls'-accessories", 5, T::Sub),
    topic(810, "chokuretsu-wrapped-topic-stray-bullet", 5, T::Sub),
    topic(811, "chokuretsu-wrapped-topic-standing-firm", 5, T::Sub),
    topic(812, "chokuretsu-wrapped-topic-misguided-ideas", 5, T::Sub),
    topic(813, "chokuretsu-wrapped-topic-give-up", 5, T::Sub),
    topic(814, "chokuretsu-wrapped-topic-consideration", 5, T::Sub),
    topic(815, "chokuretsu-wrapped-topic-safety-first", 5, T::Sub),
    topic(816, "chokuretsu-wrapped-topic-piercing-scream", 5, T::Sub),
    topic(817, "chokuretsu-wrapped-topic-withered-silver-grass", 5, T::Sub),
    topic(818, "chokuretsu-wrapped-topic-making-it-consistent", 5, T::Sub),
    topic(819, "chokuretsu-wrapped-topic-substitute", 5, T::Sub),
    topic(820, "chokuretsu-wrapped-topic-a-place-that-doesn't-exist", 5, T::Sub),
];

/// Exact-match lookup by flag index.
pub fn topic_by_flag(flag: u16) -> Option<&'static Topic> {
    TOPICS
        .binary_search_by_key(&flag, |topic| topic.flag)
        .ok()
        .and_then(|idx| TOPICS.get(idx))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_unique() {
        assert!(TOPICS.windows(2).all(|w| w[0].flag < w[1].flag));
    }

    #[test]
    fn test_all_topics_in_scan_range() {
        assert_eq!(TOPICS.len(), 510);
        for topic in TOPICS {
            assert!(TOPIC_FLAG_RANGE.contains(&topic.flag), "{} out of range", topic.flag);
        }
    }

    #[test]
    fn test_lookup() {
        let cat = topic_by_flag(130).expect("stray cat topic");
        assert_eq!(cat.name, "chokuretsu-wrapped-topic-stray-cat");
        assert_eq!(cat.episode, 3);
        assert_eq!(cat.kind, T::Main);

        assert!(topic_by_flag(151).is_none());
        assert!(topic_by_flag(121).is_none());
    }
}
