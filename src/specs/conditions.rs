// src/specs/conditions.rs
//
// Fandom SRD wiki: one page per condition at `/wiki/SRD:<Name_With_Underscores>`.
// The article body is the only place with consistent markup, so this is
// the one source read by selector.

use url::Url;

use super::Request;
use crate::config::consts::{CONDITIONS, CONDITION_BASE, CONDITION_PREFIX, CONDITION_SELECTOR};
use crate::error::InputError;
use crate::extract::ExtractionSpec;

/// Canonical spelling from the fixed list, matched case-insensitively.
pub fn lookup(name: &str) -> Option<&'static str> {
    let name = name.trim();
    CONDITIONS.iter().copied().find(|c| c.eq_ignore_ascii_case(name))
}

pub fn slug(name: &str) -> String {
    name.trim().replace(' ', "_")
}

pub fn request(name: &str) -> Result<Request, InputError> {
    let canonical = lookup(name).ok_or_else(|| InputError::UnknownCondition(s!(name.trim())))?;

    let mut url = Url::parse(CONDITION_BASE).map_err(|_| InputError::Url(s!(canonical)))?;
    url.path_segments_mut()
        .map_err(|_| InputError::Url(s!(canonical)))?
        .pop_if_empty()
        .push(&join!(CONDITION_PREFIX, &slug(canonical)));

    Ok(Request {
        url: url.into(),
        spec: ExtractionSpec::Selector(s!(CONDITION_SELECTOR)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("flat-footed"), Some("Flat-Footed"));
        assert_eq!(lookup(" knocked down "), Some("Knocked Down"));
        assert_eq!(lookup("Sleepy"), None);
    }

    #[test]
    fn builds_wiki_path() {
        let req = request("ability burn").unwrap();
        assert_eq!(req.url, "https://dungeons.fandom.com/wiki/SRD:Ability_Burn");
        assert_eq!(req.spec, ExtractionSpec::Selector(s!(".mw-parser-output p")));
    }

    #[test]
    fn unknown_condition_is_rejected() {
        assert_eq!(request("Sleepy"), Err(InputError::UnknownCondition(s!("Sleepy"))));
    }
}
