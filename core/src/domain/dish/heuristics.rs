//! Turns raw vision annotations into a dish name, cuisine and confidence.
//!
//! Best guess labels are trusted first, then the top label. Generic answers
//! ("food", "dish") are replaced by the best specific web entity or by a
//! combination of the top labels. The result can be overridden by a match
//! against the dish catalog.

use regex::Regex;

use crate::domain::{
    dish::{
        entities::{DishAnalysis, DishCatalogEntry, VisionDetails},
        value_objects::{Annotation, VisionAnnotations},
    },
    recipe::helpers::DEFAULT_CUISINE,
};

pub const CUISINE_KEYWORDS: [&str; 17] = [
    "Italian",
    "Chinese",
    "Indian",
    "Mexican",
    "Japanese",
    "Thai",
    "French",
    "Greek",
    "Spanish",
    "Mediterranean",
    "American",
    "Korean",
    "Vietnamese",
    "Turkish",
    "Lebanese",
    "Moroccan",
    "Brazilian",
];

pub const DEFAULT_DISH_NAME: &str = "Food Dish";
pub const MAX_ALTERNATIVES: usize = 3;
/// Minimum catalog score for an entry to override the vision guess.
pub const MIN_CATALOG_SCORE: f64 = 1.0;

const BEST_GUESS_CONFIDENCE: f64 = 0.9;
const DEFAULT_CONFIDENCE: f64 = 0.5;
const MIN_WEB_ENTITY_SCORE: f64 = 0.5;
const MIN_NAME_LEN: usize = 3;
const MIN_ALTERNATIVE_LEN: usize = 3;
const DETAILS_LEN: usize = 5;

const GENERIC_WORDS: [&str; 3] = ["food", "recipe", "dish"];
const GENERIC_LABELS: [&str; 5] = ["food", "recipe", "dish", "meal", "cuisine"];
const NAME_PREFIXES: [&str; 6] = ["photo of ", "picture of ", "image of ", "a ", "an ", "the "];

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch<'a> {
    pub entry: &'a DishCatalogEntry,
    pub score: f64,
}

fn is_one_of(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.eq_ignore_ascii_case(w))
}

/// First cuisine keyword mentioned by a label or a web entity.
pub fn detect_cuisine(annotations: &VisionAnnotations) -> Option<&'static str> {
    annotations
        .labels
        .iter()
        .chain(annotations.web_entities.iter())
        .find_map(|annotation| {
            let description = annotation.description.to_lowercase();
            CUISINE_KEYWORDS
                .iter()
                .find(|keyword| description.contains(&keyword.to_lowercase()))
                .copied()
        })
}

/// Drops the first occurrence of each generic word from a best guess label.
pub fn strip_generic_words(label: &str) -> String {
    let mut name = label.to_string();
    for word in GENERIC_WORDS {
        if let Some(position) = name.find(word) {
            name.replace_range(position..position + word.len(), "");
        }
    }
    name.trim().to_string()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> &'a str {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &text[prefix.len()..],
        _ => text,
    }
}

/// Removes leading filler such as "photo of" or articles.
pub fn clean_dish_name(name: &str) -> String {
    NAME_PREFIXES
        .iter()
        .fold(name, |current, prefix| strip_prefix_ignore_case(current, prefix))
        .trim()
        .to_string()
}

pub fn capitalize_words(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn descriptions(annotations: &[Annotation], len: usize) -> Vec<String> {
    annotations
        .iter()
        .take(len)
        .map(|a| a.description.clone())
        .collect()
}

pub fn vision_details(annotations: &VisionAnnotations) -> VisionDetails {
    VisionDetails {
        top_labels: descriptions(&annotations.labels, DETAILS_LEN),
        top_web_entities: descriptions(&annotations.web_entities, DETAILS_LEN),
    }
}

/// Initial guess before any fix-ups: name, confidence and alternatives.
fn initial_guess(annotations: &VisionAnnotations) -> (String, f64, Vec<String>) {
    if let Some(best_guess) = annotations.best_guess_labels.first() {
        let name = strip_generic_words(best_guess);
        let alternatives = annotations
            .web_entities
            .iter()
            .filter(|e| !e.description.is_empty() && e.description != name)
            .take(5)
            .filter(|e| e.description.chars().count() > MIN_ALTERNATIVE_LEN)
            .take(MAX_ALTERNATIVES)
            .map(|e| e.description.clone())
            .collect();
        (name, BEST_GUESS_CONFIDENCE, alternatives)
    } else if let Some(top) = annotations.labels.first() {
        let alternatives = descriptions(&annotations.labels[1..], MAX_ALTERNATIVES);
        (top.description.clone(), top.score, alternatives)
    } else {
        (String::new(), 0.0, Vec::new())
    }
}

/// Runs the identification heuristic without the catalog.
pub fn identify(annotations: &VisionAnnotations) -> DishAnalysis {
    let (mut name, mut confidence, alternatives) = initial_guess(annotations);

    if is_one_of(&name, &GENERIC_WORDS)
        && let Some(entity) = annotations.web_entities.iter().find(|e| {
            e.score >= MIN_WEB_ENTITY_SCORE && !is_one_of(&e.description, &GENERIC_WORDS)
        })
    {
        name = entity.description.clone();
        confidence = entity.score;
    }

    if name.chars().count() < MIN_NAME_LEN {
        let relevant: Vec<&Annotation> = annotations
            .labels
            .iter()
            .filter(|l| !is_one_of(&l.description, &GENERIC_LABELS))
            .take(2)
            .collect();

        if let Some(first) = relevant.first() {
            name = relevant
                .iter()
                .map(|l| l.description.as_str())
                .collect::<Vec<&str>>()
                .join(" ");
            confidence = first.score;
        }
    }

    if name.chars().count() < MIN_NAME_LEN {
        name = DEFAULT_DISH_NAME.to_string();
        confidence = DEFAULT_CONFIDENCE;
    }

    let dish_name = capitalize_words(&clean_dish_name(&name));

    DishAnalysis {
        alternatives: tidy_alternatives(&dish_name, alternatives),
        dish_name,
        cuisine: detect_cuisine(annotations)
            .unwrap_or(DEFAULT_CUISINE)
            .to_string(),
        confidence: clamp_confidence(confidence),
        database_match: None,
        match_score: None,
        vision_details: Some(vision_details(annotations)),
        fallback: false,
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0)
}

/// Removes the dish name and duplicates, keeps at most [`MAX_ALTERNATIVES`].
pub fn tidy_alternatives(dish_name: &str, alternatives: Vec<String>) -> Vec<String> {
    let mut tidy: Vec<String> = Vec::with_capacity(MAX_ALTERNATIVES);
    for alternative in alternatives {
        let alternative = alternative.trim();
        if alternative.is_empty()
            || alternative.eq_ignore_ascii_case(dish_name)
            || tidy.iter().any(|t| t.eq_ignore_ascii_case(alternative))
        {
            continue;
        }
        tidy.push(alternative.to_string());
        if tidy.len() == MAX_ALTERNATIVES {
            break;
        }
    }
    tidy
}

/// Weighted texts the catalog is matched against.
fn catalog_signals(annotations: &VisionAnnotations) -> Vec<(String, f64)> {
    annotations
        .best_guess_labels
        .iter()
        .map(|label| (label.to_lowercase(), 1.0))
        .chain(
            annotations
                .labels
                .iter()
                .chain(annotations.web_entities.iter())
                .map(|a| (a.description.to_lowercase(), a.score.max(0.0))),
        )
        .filter(|(text, _)| !text.is_empty())
        .collect()
}

/// Whole-word, case-insensitive pattern for a catalog name or keyword. A
/// trailing plural `s`/`es` is accepted.
fn word_pattern(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}(?:e?s)?\b", regex::escape(term))).ok()
}

/// Scores every catalog entry against the annotations and returns the best
/// one reaching [`MIN_CATALOG_SCORE`].
///
/// A signal mentioning the entry name as whole words counts twice its weight,
/// each mentioned keyword counts once.
pub fn best_catalog_match<'a>(
    annotations: &VisionAnnotations,
    entries: &'a [DishCatalogEntry],
) -> Option<CatalogMatch<'a>> {
    let signals = catalog_signals(annotations);
    let mut best: Option<CatalogMatch<'a>> = None;

    for entry in entries {
        let name = word_pattern(&entry.name);
        let keywords: Vec<Regex> = entry
            .keywords
            .iter()
            .filter_map(|k| word_pattern(k))
            .collect();

        let score: f64 = signals
            .iter()
            .map(|(text, weight)| {
                let name_hit = match &name {
                    Some(name) if name.is_match(text) => 2.0,
                    _ => 0.0,
                };
                let keyword_hits = keywords.iter().filter(|k| k.is_match(text)).count();
                weight * (name_hit + keyword_hits as f64)
            })
            .sum();

        if score >= MIN_CATALOG_SCORE && best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(CatalogMatch { entry, score });
        }
    }

    best
}

/// Replaces the vision guess with a catalog entry.
pub fn apply_catalog_match(analysis: &mut DishAnalysis, catalog_match: &CatalogMatch<'_>) {
    let previous = std::mem::replace(&mut analysis.dish_name, catalog_match.entry.name.clone());

    let mut alternatives = Vec::with_capacity(analysis.alternatives.len() + 1);
    alternatives.push(previous);
    alternatives.append(&mut analysis.alternatives);

    analysis.alternatives = tidy_alternatives(&analysis.dish_name, alternatives);
    analysis.cuisine = catalog_match.entry.cuisine.clone();
    analysis.database_match = Some(true);
    analysis.match_score = Some((catalog_match.score * 100.0).round() / 100.0);
    analysis.confidence = clamp_confidence(
        analysis
            .confidence
            .max((0.5 + 0.1 * catalog_match.score).min(0.99)),
    );
}
