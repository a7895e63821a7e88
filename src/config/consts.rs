// src/config/consts.rs

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "DM_SCREEN_LOG";
pub const DATA_ENV: &str = "DM_SCREEN_DATA";
pub const DEFAULT_DATASET: &str = "data/d100s.csv";

// Treasure hoard input bounds (rows in the shipped table)
pub const TREASURE_ROWS: usize = 100;

// Spells
pub const SPELL_URL: &str = "https://www.aidedd.org/dnd/sorts.php";
pub const SPELL_QUERY_KEY: &str = "vo";

// Encounters + backstories
pub const ENCOUNTER_ORIGIN: &str = "https://randomencountersai.com/";
pub const BACKSTORY_URL: &str = "https://backstorygenerator.com/";
pub const ENCOUNTER_END: &str = "Generated by";
pub const DUNGEON_START: &str = "D4 Random Dungeon Encounters";
pub const DUNGEON_END: &str = "Generated by GPT-3 and lightly edited by a human";
pub const BACKSTORY_START: &str = "Generated by GPT-3 and (Lightly) Edited by a Human for formatting";
pub const BACKSTORY_END: &str = "D&D Backstory Generator with GPT-3 AI";

// Conditions
pub const CONDITION_BASE: &str = "https://dungeons.fandom.com/wiki/";
pub const CONDITION_PREFIX: &str = "SRD:";
pub const CONDITION_SELECTOR: &str = ".mw-parser-output p";

pub const CONDITIONS: [&str; 39] = [
    "Ability Burn", "Ability Damaged", "Ability Drained", "Blinded", "Blown Away", "Checked",
    "Confused", "Cowering", "Dazed", "Dazzled", "Dead", "Deafened", "Disabled", "Dying",
    "Energy Drained", "Entangled", "Exhausted", "Fascinated", "Fatigued", "Flat-Footed",
    "Frightened", "Grappling", "Helpless", "Incorporeal", "Invisible", "Knocked Down",
    "Nauseated", "Panicked", "Paralyzed", "Petrified", "Pinned", "Prone", "Shaken",
    "Sickened", "Stable", "Staggered", "Stunned", "Turned", "Unconscious",
];

// Links tab
pub const SPELLS_FILTER: (&str, &str) = ("Spells Filter", "https://www.aidedd.org/dnd-filters/spells-5e.php");

pub const DM_LINKS: [(&str, &str); 7] = [
    ("Reference Sheet for Combat", "https://donjon.bin.sh/5e/quickref/"),
    ("Encounters with Stats", "https://www.chaosgen.com/dnd5e/encounter"),
    ("Quest Generator", "https://donjon.bin.sh/fantasy/random/"),
    ("Initiative Tracker", "https://donjon.bin.sh/5e/initiative/"),
    ("Monsters with Stats", "https://www.aidedd.org/dnd-filters/monsters.php"),
    ("Shops with Magic Items", "https://donjon.bin.sh/5e/magic/shop.html"),
    ("Spells", "https://www.aidedd.org/dnd-filters/spells-5e.php"),
];

// Window
pub const APP_TITLE: &str = "DM Screen";
