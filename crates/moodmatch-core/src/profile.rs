//! Static character profiles keyed by category.
//!
//! Immutable reference data, not user state: each category maps to one
//! promotional character and its Fresh Bar product. Thai strings are
//! carried as opaque pre-translated data.

use serde::Serialize;

use crate::quiz::bank::Category;

/// Descriptive/promotional data revealed as the quiz result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub character_name: &'static str,
    pub name: &'static str,
    pub name_th: &'static str,
    #[serde(rename = "trait")]
    pub trait_line: &'static str,
    pub trait_th: &'static str,
    pub description: &'static str,
    pub product: &'static str,
    pub product_flavor: &'static str,
    pub emoji: &'static str,
}

/// Winning category plus its profile, produced once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterResult {
    pub category: Category,
    pub profile: CharacterProfile,
}

/// Profile table, indexed by `Category::index()`.
const PROFILES: [CharacterProfile; Category::COUNT] = [
    CharacterProfile {
        character_name: "Jolly",
        name: "The Outgoing One",
        name_th: "Social Spark",
        trait_line: "Positive Energy",
        trait_th: "พลังบวก สดใส",
        description: "You light up every room! Your joyful spirit and social \
                      energy inspire everyone around you.",
        product: "Mango Fresh Bar",
        product_flavor: "Yellow-Orange Mango",
        emoji: "⭐",
    },
    CharacterProfile {
        character_name: "Muse",
        name: "The Creative One",
        name_th: "รักอิสระ",
        trait_line: "Free Spirit",
        trait_th: "รักอิสระ สร้างสรรค์",
        description: "Your imagination knows no bounds! You see beauty and \
                      possibilities everywhere.",
        product: "Dragon Fresh Bar",
        product_flavor: "Dragon Pink",
        emoji: "🌸",
    },
    CharacterProfile {
        character_name: "Sereny",
        name: "The Empathetic One",
        name_th: "ใส่ใจตัวเองและคนรอบข้าง",
        trait_line: "Self Care Champion",
        trait_th: "เป็นห่วงความรู้สึกตัวเองและคนอื่น",
        description: "You care deeply about yourself and others. Self-care is \
                      your superpower!",
        product: "Cucumber Fresh Bar",
        product_flavor: "Green Cucumber",
        emoji: "💚",
    },
    CharacterProfile {
        character_name: "Zen",
        name: "The Calm One",
        name_th: "เรียบง่าย ชอบรับฟัง",
        trait_line: "Peaceful Listener",
        trait_th: "เรียบง่าย ชอบรับฟัง",
        description: "Your calm presence is a gift. You listen deeply and \
                      bring peace to any situation.",
        product: "Peach Fresh Bar",
        product_flavor: "Baby Pink Peach",
        emoji: "🍑",
    },
    CharacterProfile {
        character_name: "Champy",
        name: "The Achiever",
        name_th: "Go Getter",
        trait_line: "Determined to Succeed",
        trait_th: "มุ่งมั่น ทะเยอทะยาน",
        description: "Nothing can stop you! Your determination and drive push \
                      you toward every goal.",
        product: "Blueberry Fresh Bar",
        product_flavor: "Blueberry Pink",
        emoji: "💜",
    },
];

/// Profile for `category`.
pub fn profile_for(category: Category) -> &'static CharacterProfile {
    &PROFILES[category.index()]
}
