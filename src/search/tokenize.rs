//! Identifier tokenization for fuzzy match preparation.

use ahash::AHashSet;

/// Splits text into lowercased match tokens.
///
/// Identifiers in the corpus mix conventions (`CDOTA_BaseNPC.SetHealth`,
/// `entity_killed`, `DOTATeam_t`), so tokens are emitted at two
/// granularities: subwords split at CamelCase boundaries and underscores, and
/// whole words split at any other non-word character. Digits count as word
/// characters so enum and constant values stay findable through keyword
/// fields. Duplicates are dropped while preserving first-seen order.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut seen = AHashSet::new();

    let mut word = String::new();
    let mut subword = String::new();
    let mut prev_lowercase = false;

    for c in text.chars() {
        if !c.is_alphanumeric() && c != '_' {
            // Word boundary: emit both granularities and reset.
            push_unique(&subword, &mut seen, &mut tokens);
            push_unique(&word, &mut seen, &mut tokens);
            subword.clear();
            word.clear();
            prev_lowercase = false;
        } else if c == '_' {
            // Subword boundary; the whole word keeps the underscore.
            push_unique(&subword, &mut seen, &mut tokens);
            subword.clear();
            word.push(c);
            prev_lowercase = false;
        } else {
            if prev_lowercase && c.is_uppercase() {
                // CamelCase boundary.
                push_unique(&subword, &mut seen, &mut tokens);
                subword.clear();
            }
            subword.push(c);
            word.push(c);
            prev_lowercase = c.is_lowercase();
        }
    }

    push_unique(&subword, &mut seen, &mut tokens);
    push_unique(&word, &mut seen, &mut tokens);

    tokens
}

fn push_unique(raw: &str, seen: &mut AHashSet<String>, tokens: &mut Vec<String>) {
    if raw.is_empty() {
        return;
    }
    let token = raw.to_lowercase();
    if seen.insert(token.clone()) {
        tokens.push(token);
    }
}
