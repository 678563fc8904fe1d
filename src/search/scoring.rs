//! Weighted fuzzy scoring across the four match fields.
//!
//! Every record carries up to four match fields with fixed weights: `name`
//! (highest), `localized_name`, `description`, and `keywords` (lowest). A
//! query is compared per field against both the whole text and each token;
//! the best similarity wins. A record's score is the product over matched
//! fields of `distance^weight`, so lower is better, matching more fields
//! improves the score, and an exact hit on a heavier field always outranks
//! an exact hit on a lighter one. Scores never leave the query engine.

use super::tokenize::tokenize;
use rapidfuzz::distance::jaro_winkler;

pub(crate) const NAME_WEIGHT: f64 = 0.4;
pub(crate) const LOCALIZED_NAME_WEIGHT: f64 = 0.3;
pub(crate) const DESCRIPTION_WEIGHT: f64 = 0.2;
pub(crate) const KEYWORDS_WEIGHT: f64 = 0.1;

/// Maximum per-field distance that still counts as a match.
/// 0.0 would accept only exact matches, 1.0 would match anything.
pub(crate) const FUZZY_THRESHOLD: f64 = 0.3;

/// Floor applied to matched distances before weighting. Without it an exact
/// match collapses to zero and the field weights can no longer discriminate.
const DISTANCE_FLOOR: f64 = 1e-3;

/// One match field, prepared once at index build time.
#[derive(Debug)]
pub(crate) struct MatchField {
    /// Lowercased full text, compared against the query as a whole.
    text: String,
    /// Lowercased identifier tokens (see `tokenize`).
    tokens: Vec<String>,
}

impl MatchField {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            tokens: tokenize(text),
            text: text.to_lowercase(),
        }
    }

    /// `None` when the source field is absent or blank, so the field simply
    /// contributes no match weight.
    pub(crate) fn try_new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| Self::new(trimmed))
    }
}

/// Distance of `query` to a field, or `None` when the field is no match.
///
/// The query is expected lowercased. Distance is `1 - similarity` for the
/// best of the whole-text and per-token comparisons, floored so exact
/// matches stay comparable across field weights.
pub(crate) fn field_distance(query: &str, field: &MatchField) -> Option<f64> {
    let mut best = jaro_winkler::similarity(query.chars(), field.text.chars());
    for token in &field.tokens {
        if best >= 1.0 {
            break;
        }
        best = best.max(jaro_winkler::similarity(query.chars(), token.chars()));
    }

    let distance = 1.0 - best;
    (distance <= FUZZY_THRESHOLD).then(|| distance.max(DISTANCE_FLOOR))
}

/// Combined score for one record, or `None` when no field matched.
pub(crate) fn weighted_score(
    query: &str,
    fields: [(Option<&MatchField>, f64); 4],
) -> Option<f64> {
    let mut score = 1.0;
    let mut matched = false;

    for (field, weight) in fields {
        let Some(field) = field else { continue };
        if let Some(distance) = field_distance(query, field) {
            score *= distance.powf(weight);
            matched = true;
        }
    }

    matched.then_some(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn exact_score(weight: f64) -> f64 {
        let field = MatchField::new("SetHealth");
        weighted_score("sethealth", [(Some(&field), weight), (None, 0.0), (None, 0.0), (None, 0.0)])
            .unwrap()
    }

    #[test]
    fn heavier_fields_win_on_equal_match_quality() {
        let name = exact_score(NAME_WEIGHT);
        let localized = exact_score(LOCALIZED_NAME_WEIGHT);
        let description = exact_score(DESCRIPTION_WEIGHT);
        let keywords = exact_score(KEYWORDS_WEIGHT);

        check!(name < localized);
        check!(localized < description);
        check!(description < keywords);
    }

    #[rstest]
    #[case("CDOTA_BaseNPC", "CDOTA_BaseNPC")] // exact
    #[case("CDOTA_BaseNP", "CDOTA_BaseNPC")] // one character short
    #[case("sethealt", "SetHealth")] // dropped final char
    fn near_matches_fall_inside_threshold(#[case] query: &str, #[case] text: &str) {
        let field = MatchField::new(text);
        check!(field_distance(&query.to_lowercase(), &field).is_some());
    }

    #[rstest]
    #[case("teleport", "SetHealth")]
    #[case("xyz", "entity_killed")]
    fn unrelated_text_falls_outside_threshold(#[case] query: &str, #[case] text: &str) {
        let field = MatchField::new(text);
        check!(field_distance(query, &field).is_none());
    }

    #[test]
    fn token_matches_reach_into_long_fields() {
        let field = MatchField::new("entindex_killed entindex_attacker damagebits");
        check!(field_distance("attacker", &field).is_some());
    }

    #[test]
    fn matching_two_fields_beats_matching_one() {
        let name = MatchField::new("SetHealth");
        let keywords = MatchField::new("amount");

        let name_only = weighted_score(
            "sethealth",
            [(Some(&name), NAME_WEIGHT), (None, 0.0), (None, 0.0), (None, 0.0)],
        )
        .unwrap();
        // Same name match plus a keywords hit for a query matching both.
        let both = weighted_score(
            "sethealth",
            [
                (Some(&name), NAME_WEIGHT),
                (None, 0.0),
                (None, 0.0),
                (Some(&MatchField::new("sethealth")), KEYWORDS_WEIGHT),
            ],
        )
        .unwrap();

        check!(both < name_only);
    }

    #[test]
    fn blank_fields_are_skipped() {
        check!(MatchField::try_new("").is_none());
        check!(MatchField::try_new("   ").is_none());

        let no_fields: [(Option<&MatchField>, f64); 4] =
            [(None, NAME_WEIGHT), (None, 0.0), (None, 0.0), (None, 0.0)];
        check!(weighted_score("anything", no_fields).is_none());
    }
}
