//! Declarative keyword tables for qualitative scoring, overridable without
//! touching engine internals.
//!
//! The defaults cover German and English vocabulary. Tests and alternate
//! locales substitute their own tables, either programmatically or from a
//! TOML string supplied by the caller (the engine itself reads no files).

use serde::{Deserialize, Serialize};

use verdict_core::errors::TableError;

/// Category label assigned when no taxonomy keyword matches.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One taxonomy category with its keyword list. Order in the parent table
/// matters: the first category with any keyword hit wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl TaxonomyCategory {
    fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// All keyword vocabulary the qualitative scorer consumes.
///
/// Classification is a first-match-wins substring heuristic, not statistical
/// NLU. Approximate on purpose; callers needing precision swap the tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    /// Ordered taxonomy of canonical usability categories.
    pub taxonomy: Vec<TaxonomyCategory>,
    /// Adjectives indicating a surface-level observation.
    pub superficial_words: Vec<String>,
    /// Causal-reasoning connectives indicating deep analysis.
    pub causal_words: Vec<String>,
    /// Impact/consequence vocabulary indicating comprehensive analysis.
    pub impact_words: Vec<String>,
    /// Verbs that make a finding actionable.
    pub actionable_verbs: Vec<String>,
    /// Concrete UI-component nouns.
    pub ui_nouns: Vec<String>,
    /// Phrases that make a finding vague.
    pub vague_phrases: Vec<String>,
    /// Words indicating the finding considers user/task context.
    pub context_words: Vec<String>,
    /// Vocabulary marking subtle problems.
    pub subtle_words: Vec<String>,
    /// Vocabulary marking obvious problems.
    pub obvious_words: Vec<String>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            taxonomy: default_taxonomy(),
            superficial_words: to_owned(&[
                "ugly", "nice", "bad", "good", "small", "big", "hässlich", "schön",
                "schlecht", "klein", "groß", "unschön",
            ]),
            causal_words: to_owned(&[
                "because", "therefore", "since", "leads to", "results in", "causes",
                "weil", "daher", "dadurch", "führt zu", "verursacht", "folglich",
                "deshalb",
            ]),
            impact_words: to_owned(&[
                "abandon", "frustrat", "confus", "prevent", "block", "lose", "fail",
                "impact", "abbruch", "frustrier", "verwirr", "verhindert",
                "blockiert", "scheiter", "auswirkung",
            ]),
            actionable_verbs: to_owned(&[
                "add", "remove", "move", "increase", "reduce", "replace", "rename",
                "highlight", "enlarge", "fix", "hinzufügen", "entfernen",
                "verschieben", "vergrößern", "verkleinern", "ersetzen", "umbenennen",
                "hervorheben", "korrigieren", "anpassen",
            ]),
            ui_nouns: to_owned(&[
                "button", "menu", "icon", "link", "label", "form", "field", "dialog",
                "header", "footer", "tab", "checkbox", "dropdown", "slider",
                "tooltip", "banner", "schaltfläche", "menü", "formular", "feld",
                "eingabefeld", "reiter", "auswahlliste", "symbol",
            ]),
            vague_phrases: to_owned(&[
                "somehow", "maybe", "possibly", "in general", "somewhat", "a bit",
                "irgendwie", "vielleicht", "eventuell", "im allgemeinen", "etwas",
                "ein wenig",
            ]),
            context_words: to_owned(&[
                "user", "task", "goal", "scenario", "workflow", "context", "nutzer",
                "benutzer", "aufgabe", "ziel", "szenario", "arbeitsablauf",
                "kontext", "anwender",
            ]),
            subtle_words: to_owned(&[
                "subtle", "hidden", "easily missed", "hard to notice", "unobtrusive",
                "subtil", "versteckt", "leicht zu übersehen", "kaum sichtbar",
                "unauffällig",
            ]),
            obvious_words: to_owned(&[
                "obvious", "clearly", "immediately visible", "offensichtlich",
                "eindeutig", "sofort sichtbar",
            ]),
        }
    }
}

impl ScoringTables {
    /// Load tables from a TOML string. Missing sections fall back to the
    /// defaults; present sections replace them wholesale.
    pub fn load_from_str(toml_str: &str) -> Result<Self, TableError> {
        let tables: ScoringTables = toml::from_str(toml_str)
            .map_err(|e| TableError::InvalidTable(format!("TOML parse error: {e}")))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Reject categories with empty keyword lists; they could never match
    /// and silently distort systematicity.
    pub fn validate(&self) -> Result<(), TableError> {
        for category in &self.taxonomy {
            if category.keywords.is_empty() {
                return Err(TableError::EmptyKeywordList(category.name.clone()));
            }
        }
        Ok(())
    }
}

/// The ten canonical usability categories, Nielsen-style, in match order.
fn default_taxonomy() -> Vec<TaxonomyCategory> {
    vec![
        TaxonomyCategory::new(
            "visibility of system status",
            &[
                "status", "feedback", "loading", "progress", "indicator",
                "rückmeldung", "ladezeit", "fortschritt", "anzeige",
            ],
        ),
        TaxonomyCategory::new(
            "match with the real world",
            &[
                "jargon", "terminology", "wording", "metaphor", "fachbegriff",
                "begriff", "formulierung", "metapher", "sprache",
            ],
        ),
        TaxonomyCategory::new(
            "user control and freedom",
            &[
                "back", "undo", "cancel", "exit", "zurück", "abbrechen",
                "rückgängig", "verlassen",
            ],
        ),
        TaxonomyCategory::new(
            "consistency and standards",
            &[
                "consistent", "inconsistent", "convention", "uniform",
                "konsistent", "inkonsistent", "einheitlich", "standard",
            ],
        ),
        TaxonomyCategory::new(
            "error prevention",
            &[
                "prevent", "validation", "confirm", "mistake", "verhindern",
                "validierung", "bestätigung", "versehentlich",
            ],
        ),
        TaxonomyCategory::new(
            "recognition rather than recall",
            &[
                "remember", "recall", "memorize", "visible option", "erinnern",
                "merken", "auswendig", "sichtbare option",
            ],
        ),
        TaxonomyCategory::new(
            "flexibility and efficiency",
            &[
                "shortcut", "efficien", "flexib", "accelerat", "abkürzung",
                "effizien", "flexib", "tastenkürzel",
            ],
        ),
        TaxonomyCategory::new(
            "aesthetic and minimalist design",
            &[
                "clutter", "minimal", "overload", "crowded", "layout", "spacing",
                "überladen", "unübersichtlich", "abstand", "gestaltung",
            ],
        ),
        TaxonomyCategory::new(
            "error recovery",
            &[
                "error message", "recover", "diagnose", "fehlermeldung",
                "wiederherstellen", "lösung", "hinweis",
            ],
        ),
        TaxonomyCategory::new(
            "help and documentation",
            &[
                "help", "documentation", "instruction", "tutorial", "hilfe",
                "dokumentation", "anleitung", "erklärung",
            ],
        ),
    ]
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// True if any table entry occurs as a substring of the lowercased text.
pub(crate) fn contains_any(text_lower: &str, words: &[String]) -> bool {
    words.iter().any(|w| text_lower.contains(w.as_str()))
}
