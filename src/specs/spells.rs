// src/specs/spells.rs
//
// aidedd.org spell pages: `sorts.php?vo=<slug>` where the slug is the
// English name with spaces turned into hyphens. The page has no useful
// structure, so the text is read from the first mention of the name down.

use url::Url;

use super::Request;
use crate::config::consts::{SPELL_QUERY_KEY, SPELL_URL};
use crate::error::InputError;
use crate::extract::ExtractionSpec;

pub fn slug(name: &str) -> String {
    name.trim().replace(' ', "-")
}

pub fn request(name: &str) -> Result<Request, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::EmptySpell);
    }

    let url = Url::parse_with_params(SPELL_URL, &[(SPELL_QUERY_KEY, slug(name))])
        .map_err(|_| InputError::Url(s!(name)))?;

    Ok(Request {
        url: url.into(),
        spec: ExtractionSpec::anchors(name, None),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_query_from_slug() {
        let req = request("  Magic Missile ").unwrap();
        assert_eq!(req.url, "https://www.aidedd.org/dnd/sorts.php?vo=Magic-Missile");
        assert_eq!(req.spec, ExtractionSpec::anchors("Magic Missile", None));
    }

    #[test]
    fn query_value_is_encoded() {
        let req = request("Tasha's Hideous Laughter").unwrap();
        assert_eq!(req.url, "https://www.aidedd.org/dnd/sorts.php?vo=Tasha%27s-Hideous-Laughter");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(request("   "), Err(InputError::EmptySpell));
    }
}
