//! Spanish display text for backend-provided English labels.
//!
//! The backend answers with English risk levels, decisions and an explanation
//! built from snake_case metric names. The tables below map the known values;
//! anything unrecognized is shown as received so new backend vocabulary never
//! blanks the UI.

const RISK_LEVEL_LABELS: &[(&str, &str)] = &[
    ("LOW", "BAJO"),
    ("MEDIUM", "MEDIO"),
    ("HIGH", "ALTO"),
];

const DECISION_LABELS: &[(&str, &str)] = &[
    ("Approve", "Aprobar"),
    ("Approve with conditions", "Aprobar con condiciones"),
    ("Reject", "Rechazar"),
];

// Ordered longest-first so a short token can never split a longer phrase that
// contains it. A test below guards the ordering. "ratio" stays untranslated;
// it reads the same in Spanish.
const EXPLANATION_TOKENS: &[(&str, &str)] = &[
    ("employment_years", "antiguedad_laboral"),
    ("financed_amount", "monto_financiado"),
    ("age", "edad"),
];

/// Spanish label for a backend risk level, or the raw value when unknown.
pub fn risk_level_display(raw: &str) -> String {
    for (english, spanish) in RISK_LEVEL_LABELS {
        if raw == *english {
            return (*spanish).to_string();
        }
    }
    raw.to_string()
}

/// Spanish label for a backend decision, or the raw value when unknown.
pub fn decision_display(raw: &str) -> String {
    for (english, spanish) in DECISION_LABELS {
        if raw == *english {
            return (*spanish).to_string();
        }
    }
    raw.to_string()
}

/// Replace known English metric names in an explanation with Spanish ones.
///
/// Unmatched text passes through untouched, so mixed output is possible when
/// the backend introduces new phrasing.
pub fn translate_explanation(raw: &str) -> String {
    let mut text = raw.to_string();
    for (english, spanish) in EXPLANATION_TOKENS {
        text = text.replace(english, spanish);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_risk_levels_translate() {
        assert_eq!(risk_level_display("LOW"), "BAJO");
        assert_eq!(risk_level_display("MEDIUM"), "MEDIO");
        assert_eq!(risk_level_display("HIGH"), "ALTO");
    }

    #[test]
    fn unknown_risk_level_passes_through() {
        assert_eq!(risk_level_display("CRITICAL"), "CRITICAL");
    }

    #[test]
    fn known_decisions_translate() {
        assert_eq!(decision_display("Approve"), "Aprobar");
        assert_eq!(
            decision_display("Approve with conditions"),
            "Aprobar con condiciones"
        );
        assert_eq!(decision_display("Reject"), "Rechazar");
    }

    #[test]
    fn unmapped_decision_passes_through() {
        // The high-risk branch of the backend emits this combined value; it
        // has no Spanish entry and is shown verbatim.
        assert_eq!(decision_display("Review / Reject"), "Review / Reject");
    }

    #[test]
    fn explanation_translates_metric_names() {
        let raw = "financed_amount=6000000, ratio=1.25, employment_years=6, age=35";
        assert_eq!(
            translate_explanation(raw),
            "monto_financiado=6000000, ratio=1.25, antiguedad_laboral=6, edad=35"
        );
    }

    #[test]
    fn explanation_substitutes_only_known_tokens() {
        assert_eq!(
            translate_explanation("financed_amount ratio and age check"),
            "monto_financiado ratio and edad check"
        );
    }

    #[test]
    fn explanation_passes_unknown_text_through() {
        assert_eq!(
            translate_explanation("applicant flagged for manual check"),
            "applicant flagged for manual check"
        );
    }

    #[test]
    fn no_token_follows_a_longer_token_that_contains_it() {
        // If a short token ran first, it would mangle any longer phrase that
        // contains it before that phrase could match.
        for (index, (english, _)) in EXPLANATION_TOKENS.iter().enumerate() {
            for (later, _) in &EXPLANATION_TOKENS[index + 1..] {
                assert!(
                    !later.contains(english),
                    "{later:?} must be listed before {english:?}"
                );
            }
        }
    }
}
