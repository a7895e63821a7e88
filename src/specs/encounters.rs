// src/specs/encounters.rs
//
// randomencountersai.com serves one generated table per terrain; the
// backstory generator is a separate site. Every page is prose between two
// fixed phrases.

use super::Request;
use crate::config::consts::*;
use crate::config::options::EncounterSource;
use crate::extract::ExtractionSpec;

/// Start anchor for a source. Dungeon tables are d4, the rest d1.
pub fn start_anchor(source: EncounterSource) -> String {
    match source {
        EncounterSource::Dungeon => s!(DUNGEON_START),
        EncounterSource::Backstory => s!(BACKSTORY_START),
        EncounterSource::City => s!("D1 Random City Encounters"),
        EncounterSource::Grassland => s!("D1 Random Grassland Encounters"),
        EncounterSource::Forest => s!("D1 Random Forest Encounters"),
    }
}

pub fn end_anchor(source: EncounterSource) -> &'static str {
    match source {
        EncounterSource::Dungeon => DUNGEON_END,
        EncounterSource::Backstory => BACKSTORY_END,
        _ => ENCOUNTER_END,
    }
}

pub fn url(source: EncounterSource) -> String {
    match source.slug() {
        Some(slug) => join!(ENCOUNTER_ORIGIN, slug, "/"),
        None => s!(BACKSTORY_URL),
    }
}

pub fn request(source: EncounterSource) -> Request {
    Request {
        url: url(source),
        spec: ExtractionSpec::anchors(start_anchor(source), Some(end_anchor(source))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_urls() {
        assert_eq!(url(EncounterSource::Dungeon), "https://randomencountersai.com/dungeon/");
        assert_eq!(url(EncounterSource::Forest), "https://randomencountersai.com/forest/");
        assert_eq!(url(EncounterSource::Backstory), "https://backstorygenerator.com/");
    }

    #[test]
    fn city_reads_between_d1_header_and_footer() {
        let req = request(EncounterSource::City);
        assert_eq!(
            req.spec,
            ExtractionSpec::Anchors {
                start: Some(s!("D1 Random City Encounters")),
                end: Some(s!("Generated by")),
            }
        );
    }

    #[test]
    fn dungeon_uses_long_footer() {
        assert_eq!(end_anchor(EncounterSource::Dungeon), DUNGEON_END);
    }
}
