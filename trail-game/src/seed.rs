//! Trail codes: short, typeable names for journey seeds.
//!
//! A code reads `OT-<WORD><NN>`, e.g. `OT-OXBOW42`. There are 6400 of them.
//! Each one names exactly one seed; the seed keeps the code's index in its
//! low 16 bits and a SHA-256 derived tag in the high 48, so a seed can tell
//! whether it came from a code. Seeds that did not are shared as plain
//! numbers instead.

use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const CODE_PREFIX: &str = "OT";
const CODE_DOMAIN: &[u8] = b"wagon-trail/code";
const NUMBERS_PER_WORD: u16 = 100;
const INDEX_MASK: u64 = 0xFFFF;

pub const WORD_LIST: [&str; 64] = [
    "OXBOW", "WAGON", "PRAIRIE", "BISON", "SAGE", "RIVER", "FERRY", "CAULK", "FORD", "YOKE",
    "AXLE", "CANVAS", "LANTERN", "RIFLE", "POWDER", "FLOUR", "BACON", "COFFEE", "BEANS", "QUILT",
    "BONNET", "SADDLE", "MULE", "CATTLE", "COYOTE", "ELK", "DEER", "ANTELOP", "BUTTE", "MESA",
    "CANYON", "SUMMIT", "PASS", "GORGE", "CREEK", "SPRING", "TIMBER", "PINE", "CEDAR", "ASPEN",
    "CAMPFIR", "BUGLE", "SCOUT", "GUIDE", "TRADER", "FORT", "DALLES", "BOISE", "WALLA", "OREGON",
    "CASCADE", "HOOD", "BLUE", "SNAKE", "PLATTE", "SOUTH", "LARAMIE", "KEARNY", "HALL", "WILLOW",
    "HARVEST", "ACRES", "HOMESTD", "FRONTIR",
];

#[allow(clippy::cast_possible_truncation)]
const CODE_COUNT: u16 = WORD_LIST.len() as u16 * NUMBERS_PER_WORD;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrailCodeError {
    #[error("trail codes start with OT-")]
    Prefix,
    #[error("'{0}' is not a trail word")]
    UnknownWord(String),
    #[error("trail codes end in exactly two digits")]
    Number,
}

/// One of the [`WORD_LIST`] words plus a two-digit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrailCode {
    index: u16,
}

impl TrailCode {
    fn from_index(index: u16) -> Option<Self> {
        (index < CODE_COUNT).then_some(Self { index })
    }

    /// Pick a code uniformly-ish from raw entropy.
    #[must_use]
    pub fn from_entropy(entropy: u64) -> Self {
        let index = u16::try_from(entropy % u64::from(CODE_COUNT)).unwrap_or(0);
        Self { index }
    }

    /// The code this seed was built from, if any.
    #[must_use]
    pub fn from_seed(seed: u64) -> Option<Self> {
        let index = u16::try_from(seed & INDEX_MASK).ok()?;
        let code = Self::from_index(index)?;
        (code.seed() == seed).then_some(code)
    }

    #[must_use]
    pub fn seed(self) -> u64 {
        let digest = Sha256::new()
            .chain_update(CODE_DOMAIN)
            .chain_update(self.index.to_be_bytes())
            .finalize();
        let mut tag = [0u8; 8];
        tag[2..].copy_from_slice(&digest[..6]);
        (u64::from_be_bytes(tag) << 16) | u64::from(self.index)
    }

    fn word(self) -> &'static str {
        WORD_LIST[usize::from(self.index / NUMBERS_PER_WORD)]
    }

    const fn number(self) -> u16 {
        self.index % NUMBERS_PER_WORD
    }
}

impl fmt::Display for TrailCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CODE_PREFIX}-{}{:02}", self.word(), self.number())
    }
}

impl FromStr for TrailCode {
    type Err = TrailCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = s.trim().split_once('-').ok_or(TrailCodeError::Prefix)?;
        if !prefix.eq_ignore_ascii_case(CODE_PREFIX) {
            return Err(TrailCodeError::Prefix);
        }
        // The word runs up to the first digit; everything after is the number.
        let split = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let (word, digits) = rest.split_at(split);
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TrailCodeError::Number);
        }
        let word_index = WORD_LIST
            .iter()
            .position(|w| w.eq_ignore_ascii_case(word))
            .ok_or_else(|| TrailCodeError::UnknownWord(word.to_string()))?;
        let word_index = u16::try_from(word_index).map_err(|_| TrailCodeError::Number)?;
        let number = digits.parse::<u16>().map_err(|_| TrailCodeError::Number)?;
        Self::from_index(word_index * NUMBERS_PER_WORD + number).ok_or(TrailCodeError::Number)
    }
}

/// The seed a trail code stands for.
#[must_use]
pub fn decode_to_seed(code: &str) -> Option<u64> {
    code.parse::<TrailCode>().ok().map(TrailCode::seed)
}

/// A fresh seed that is guaranteed to have a trail code.
#[must_use]
pub fn seed_from_entropy(entropy: u64) -> u64 {
    TrailCode::from_entropy(entropy).seed()
}

/// How to hand a seed to someone else: its trail code when it has one,
/// otherwise the number itself. Either form goes back through [`parse_seed`].
#[must_use]
pub fn share_code(seed: u64) -> String {
    TrailCode::from_seed(seed).map_or_else(|| seed.to_string(), |code| code.to_string())
}

/// Accept either a plain number or a trail code.
#[must_use]
pub fn parse_seed(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    trimmed
        .parse::<u64>()
        .ok()
        .or_else(|| decode_to_seed(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_and_their_seeds_name_each_other() {
        let seed = decode_to_seed("OT-OXBOW42").unwrap();
        assert_eq!(share_code(seed), "OT-OXBOW42");
        let seed = decode_to_seed("ot-frontir07").unwrap();
        assert_eq!(share_code(seed), "OT-FRONTIR07");
        let seed = decode_to_seed("OT-PLATTE03").unwrap();
        assert_eq!(parse_seed(&share_code(seed)), Some(seed));
    }

    #[test]
    fn every_code_is_distinct_and_reads_back() {
        let mut seeds = HashSet::new();
        for index in 0..CODE_COUNT {
            let code = TrailCode::from_index(index).unwrap();
            let text = code.to_string();
            assert_eq!(text.parse::<TrailCode>(), Ok(code), "{text}");
            assert_eq!(TrailCode::from_seed(code.seed()), Some(code));
            assert!(seeds.insert(code.seed()));
        }
    }

    #[test]
    fn plain_number_seeds_are_shared_as_numbers() {
        assert_eq!(TrailCode::from_seed(1846), None);
        assert_eq!(share_code(1846), "1846");
        assert_eq!(parse_seed(&share_code(1846)), Some(1846));
        assert_eq!(parse_seed(&share_code(u64::MAX)), Some(u64::MAX));
    }

    #[test]
    fn foreign_or_malformed_codes_are_rejected() {
        assert_eq!(decode_to_seed("CL-ORANGE42"), None);
        assert_eq!(decode_to_seed("OT-NOTAWORD11"), None);
        assert_eq!(decode_to_seed("OT-OX"), None);
        assert_eq!(decode_to_seed("OXBOW42"), None);
        assert_eq!(decode_to_seed("OT-OXBOW4"), None);
        assert_eq!(decode_to_seed("OT-OXBOW421"), None);
        assert_eq!(decode_to_seed("OT-OX4BOW2"), None);
    }

    #[test]
    fn signs_in_the_number_are_rejected() {
        assert_eq!(decode_to_seed("OT-OXBOW+5"), None);
        assert_eq!(decode_to_seed("OT-OXBOW-5"), None);
        assert_eq!(
            "OT-OXBOW+5".parse::<TrailCode>(),
            Err(TrailCodeError::Number)
        );
    }

    #[test]
    fn non_ascii_input_is_rejected_not_split() {
        assert_eq!(parse_seed("OT-ab€"), None);
        assert_eq!(parse_seed("OT-€42"), None);
        assert_eq!(parse_seed("OT-WAGON4€"), None);
        assert_eq!(parse_seed("ÖT-WAGON42"), None);
    }

    #[test]
    fn parse_seed_takes_numbers_or_codes() {
        assert_eq!(parse_seed(" 1234 "), Some(1234));
        assert_eq!(parse_seed("OT-SAGE07"), decode_to_seed("OT-SAGE07"));
        assert_eq!(parse_seed("wagon"), None);
    }

    #[test]
    fn entropy_seeds_always_have_a_code() {
        for entropy in [0, 1, 0x1234_5678, u64::MAX] {
            let seed = seed_from_entropy(entropy);
            let code = share_code(seed);
            assert!(code.starts_with("OT-"), "{code}");
            assert_eq!(decode_to_seed(&code), Some(seed));
        }
    }

    #[test]
    fn word_list_is_plain_unique_words() {
        let unique: HashSet<_> = WORD_LIST.iter().collect();
        assert_eq!(unique.len(), WORD_LIST.len());
        assert!(
            WORD_LIST
                .iter()
                .all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_uppercase()))
        );
    }
}
