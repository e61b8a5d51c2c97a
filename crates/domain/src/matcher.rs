use std::{cmp::Ordering, collections::HashSet};

use crate::{Equipment, Exercise, Muscle, Property, normalize_name};

const SEARCH_THRESHOLD: f64 = 0.3;
const SUBSTRING_RATIO: f64 = 0.6;
const MAX_EQUIPMENT_WORDS: usize = 3;

/// Optional context narrowing a free-text exercise reference.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MatchHints {
    pub equipment: Option<String>,
    pub muscle: Option<String>,
}

impl MatchHints {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equipment.is_none() && self.muscle.is_none()
    }

    fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref().filter(|e| !normalize_name(e).is_empty())
    }

    fn muscle(&self) -> Option<&str> {
        self.muscle.as_deref().filter(|m| !normalize_name(m).is_empty())
    }
}

/// Resolves a free-text exercise name to the best matching exercise.
///
/// The tiers are tried in order and the first tier yielding a candidate wins:
///
/// 1. normalized name equals the normalized query
/// 2. normalized id equals the normalized query
/// 3. every keyword of the query is contained in the normalized name
/// 4. the equipment hint matches and the query without the words naming the
///    equipment is contained in the normalized name
/// 5. the muscle hint matches and any keyword is contained in the normalized name
/// 6. both the equipment hint and the muscle hint match
///
/// Keywords are query tokens longer than three characters. Candidates of the
/// same tier are ordered by name length, then by name, then by id. A blank query
/// can only match by tier 6.
#[must_use]
pub fn find<'a>(query: &str, exercises: &'a [Exercise], hints: &MatchHints) -> Option<&'a Exercise> {
    if let Some(exercise) = find_by_name(query, exercises, hints) {
        return Some(exercise);
    }

    if let (Some(equipment), Some(muscle)) = (hints.equipment(), hints.muscle()) {
        return best(exercises, |e| {
            uses_equipment(e, equipment) && targets_muscle(e, muscle)
        });
    }

    None
}

fn find_by_name<'a>(
    query: &str,
    exercises: &'a [Exercise],
    hints: &MatchHints,
) -> Option<&'a Exercise> {
    let normalized_query = normalize_name(query);
    if normalized_query.is_empty() {
        return None;
    }
    let keywords = keywords(query);

    if let Some(exercise) = best(exercises, |e| normalize_name(e.name.as_str()) == normalized_query) {
        return Some(exercise);
    }

    if let Some(exercise) = best(exercises, |e| normalize_name(e.id.as_str()) == normalized_query) {
        return Some(exercise);
    }

    if !keywords.is_empty() {
        if let Some(exercise) = best(exercises, |e| {
            let name = normalize_name(e.name.as_str());
            keywords.iter().all(|k| name.contains(k.as_str()))
        }) {
            return Some(exercise);
        }
    }

    if let Some(equipment) = hints.equipment() {
        let remainder = without_equipment(query, equipment);
        if !remainder.is_empty() {
            if let Some(exercise) = best(exercises, |e| {
                uses_equipment(e, equipment) && normalize_name(e.name.as_str()).contains(&remainder)
            }) {
                return Some(exercise);
            }
        }
    }

    if let Some(muscle) = hints.muscle() {
        if !keywords.is_empty() {
            return best(exercises, |e| {
                let name = normalize_name(e.name.as_str());
                targets_muscle(e, muscle) && keywords.iter().any(|k| name.contains(k.as_str()))
            });
        }
    }

    None
}

/// Ranks exercises by token overlap with the query.
///
/// An exercise is accepted if the Jaccard score of the word sets exceeds 0.3 or
/// if one normalized name contains the other and the shorter one is at least 60 %
/// of the length of the longer one.
#[must_use]
pub fn search<'a>(query: &str, exercises: &'a [Exercise]) -> Vec<&'a Exercise> {
    let normalized_query = normalize_name(query);
    if normalized_query.is_empty() {
        return vec![];
    }
    let query_tokens = tokens(query);

    let mut scored = exercises
        .iter()
        .filter_map(|e| {
            let name = normalize_name(e.name.as_str());
            if is_close_substring(&normalized_query, &name) {
                return Some((e, 1.0));
            }
            let score = jaccard(&query_tokens, &tokens(e.name.as_str()));
            (score > SEARCH_THRESHOLD).then_some((e, score))
        })
        .collect::<Vec<_>>();

    scored.sort_by(|(a, a_score), (b, b_score)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| tie_break(a, b))
    });

    scored.into_iter().map(|(e, _)| e).collect()
}

/// Tiered lookup, falling back to the token overlap search if no hints are given.
#[must_use]
pub fn resolve<'a>(
    query: &str,
    exercises: &'a [Exercise],
    hints: &MatchHints,
) -> Option<&'a Exercise> {
    find(query, exercises, hints).or_else(|| {
        if hints.is_empty() {
            search(query, exercises).into_iter().next()
        } else {
            None
        }
    })
}

fn best<'a>(exercises: &'a [Exercise], predicate: impl Fn(&Exercise) -> bool) -> Option<&'a Exercise> {
    exercises
        .iter()
        .filter(|e| predicate(e))
        .min_by(|a, b| tie_break(a, b))
}

fn tie_break(a: &Exercise, b: &Exercise) -> Ordering {
    a.name
        .as_str()
        .chars()
        .count()
        .cmp(&b.name.as_str().chars().count())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

fn tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn keywords(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(normalize_name)
        .filter(|t| t.chars().count() > 3)
        .collect()
}

/// Normalized query without the words naming the equipment, e.g. "Resistance Band" or
/// "Dumbbells" for the hint "Dumbbell".
fn without_equipment(query: &str, hint: &str) -> String {
    let words = query
        .split_whitespace()
        .map(normalize_name)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>();
    let key = normalize_name(hint);
    let parsed = Equipment::parse(hint);
    let names_hint = |window: &[String]| {
        let phrase = window.concat();
        phrase == key || (parsed.is_some() && Equipment::parse(&phrase) == parsed)
    };

    for len in (1..=words.len().min(MAX_EQUIPMENT_WORDS)).rev() {
        if let Some(start) = words.windows(len).position(names_hint) {
            return words[..start]
                .iter()
                .chain(&words[start + len..])
                .map(String::as_str)
                .collect();
        }
    }

    words.concat()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let score = intersection as f64 / union as f64;
    score
}

fn is_close_substring(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.is_empty() || !longer.contains(shorter) {
        return false;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = shorter.chars().count() as f64 / longer.chars().count() as f64;
    ratio >= SUBSTRING_RATIO
}

fn uses_equipment(exercise: &Exercise, hint: &str) -> bool {
    let parsed = Equipment::parse(hint);
    let hint = normalize_name(hint);
    exercise
        .equipment
        .iter()
        .any(|e| Some(*e) == parsed || normalize_name(e.name()).contains(&hint))
}

fn targets_muscle(exercise: &Exercise, hint: &str) -> bool {
    let parsed = Muscle::parse(hint);
    let hint = normalize_name(hint);
    exercise
        .muscles()
        .any(|m| Some(m) == parsed || normalize_name(m.name()).contains(&hint))
}
