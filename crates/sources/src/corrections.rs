//! Static correction tables.
//!
//! Two kinds of fixes ship with the binary and never change at runtime:
//! title aliases that reconcile Rotten Tomatoes spellings with the canonical
//! (IMDB/Wikipedia) titles, and opening-weekend figures that are wrong in the
//! source because a limited theatrical opening was reported instead of the
//! wide-release weekend.

use data_loader::Studio;

/// Opening-weekend USA figures to force, keyed by exact canonical title.
pub const OPENING_WEEKEND_OVERRIDES: &[(&str, u64)] = &[
    ("Frozen II", 130_263_358),
    ("Aladdin", 19_200_000),
    ("The Princess and the Frog", 24_208_916),
    ("Brother Bear", 24_208_916),
    ("Atlantis: The Lost Empire", 20_342_105),
    ("The Hunchback of Notre Dame", 21_037_414),
    ("Monsters, Inc.", 62_577_067),
    ("Toy Story", 29_000_000),
    ("Finding Nemo", 70_251_710),
    ("Onward", 39_119_861),
];

/// Rotten Tomatoes spellings that differ from the canonical Disney titles.
const DISNEY_TITLE_ALIASES: &[(&str, &str)] = &[
    ("Atlantis - The Lost Empire", "Atlantis: The Lost Empire"),
    ("Fun & Fancy Free", "Fun and Fancy Free"),
    ("101 Dalmatians", "One Hundred and One Dalmatians"),
    (
        "Many Adventures of Winnie the Pooh",
        "The Many Adventures of Winnie the Pooh",
    ),
    ("Wreck-it Ralph", "Wreck-It Ralph"),
];

/// Rotten Tomatoes spellings that differ from the canonical Pixar titles.
const PIXAR_TITLE_ALIASES: &[(&str, &str)] = &[("WALL-E", "WALL·E")];

/// The forced opening-weekend figure for a title, if one exists.
pub fn opening_weekend_override(title: &str) -> Option<u64> {
    OPENING_WEEKEND_OVERRIDES
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, value)| *value)
}

/// Map a scraped title to its canonical spelling.
///
/// Titles without an alias entry pass through unchanged.
pub fn remap_title<'a>(studio: Studio, title: &'a str) -> &'a str {
    let aliases = match studio {
        Studio::Disney => DISNEY_TITLE_ALIASES,
        Studio::Pixar => PIXAR_TITLE_ALIASES,
    };
    aliases
        .iter()
        .find(|(from, _)| *from == title)
        .map(|(_, to)| *to)
        .unwrap_or(title)
}
