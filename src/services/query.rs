//! Filtering over the in-memory collections
//!
//! Every function here is pure: it never reorders, and an absent filter
//! returns the whole collection.

use crate::models::{QuestionRecord, Quote, QuoteBook, Skill, Talk};

pub const GENERAL_TOPIC: &str = "general";
pub const FALLBACK_QUOTE_TEXT: &str = "It depends... but documentation usually helps.";
pub const FALLBACK_QUOTE_CONTEXT: &str = "When in doubt, always a safe answer";

/// Keep the records that satisfy `matches` against `filter`, in original order
pub fn filter_by<T, Q, F>(items: &[T], filter: Option<Q>, matches: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &Q) -> bool,
{
    match filter {
        None => items.to_vec(),
        Some(value) => items
            .iter()
            .filter(|item| matches(item, &value))
            .cloned()
            .collect(),
    }
}

/// Case-insensitive match on `Skill::domain`
pub fn skills_by_domain(skills: &[Skill], domain: Option<&str>) -> Vec<Skill> {
    filter_by(skills, domain, |skill, domain| {
        skill.domain.to_lowercase() == domain.to_lowercase()
    })
}

/// Exact match on `Talk::year`
pub fn talks_by_year(talks: &[Talk], year: Option<i32>) -> Vec<Talk> {
    filter_by(talks, year, |talk, year| talk.year == *year)
}

/// Exact match on `QuestionRecord::talk_id`
pub fn questions_by_talk(questions: &[QuestionRecord], talk_id: Option<&str>) -> Vec<QuestionRecord> {
    filter_by(questions, talk_id, |q, talk_id| q.talk_id == *talk_id)
}

/// First quote of `topic`, else of the general bucket, else a fixed default
pub fn quote_for_topic(quotes: &QuoteBook, topic: Option<&str>) -> Quote {
    topic
        .and_then(|t| first_in(quotes, t))
        .or_else(|| first_in(quotes, GENERAL_TOPIC))
        .cloned()
        .unwrap_or_else(|| Quote {
            text: FALLBACK_QUOTE_TEXT.to_string(),
            topic: Some(topic.unwrap_or(GENERAL_TOPIC).to_string()),
            context: Some(FALLBACK_QUOTE_CONTEXT.to_string()),
        })
}

fn first_in<'q>(quotes: &'q QuoteBook, topic: &str) -> Option<&'q Quote> {
    quotes.get(topic).and_then(|bucket| bucket.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn skill(id: &str, domain: &str) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            level: "Advanced".to_string(),
            domain: domain.to_string(),
            tags: vec![],
            examples: vec![],
        }
    }

    fn talk(id: &str, year: i32) -> Talk {
        Talk {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            year,
            venue: None,
            topics: vec![],
            slides_url: None,
        }
    }

    fn quote(text: &str, topic: &str) -> Quote {
        Quote {
            text: text.to_string(),
            topic: Some(topic.to_string()),
            context: None,
        }
    }

    #[test]
    fn test_no_filter_returns_everything_in_order() {
        let skills = vec![skill("a", "Cloud"), skill("b", "AI"), skill("c", "Cloud")];
        assert_eq!(skills_by_domain(&skills, None), skills);
    }

    #[test]
    fn test_domain_is_case_insensitive_and_ordered() {
        let skills = vec![skill("a", "Cloud"), skill("b", "AI"), skill("c", "cloud")];
        let ids: Vec<String> = skills_by_domain(&skills, Some("CLOUD"))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_unmatched_filter_is_empty() {
        let skills = vec![skill("a", "Cloud")];
        assert!(skills_by_domain(&skills, Some("NonExistent")).is_empty());

        let talks = vec![talk("t1", 2025)];
        assert!(talks_by_year(&talks, Some(1999)).is_empty());
    }

    #[test]
    fn test_year_filter_example() {
        let talks = vec![talk("t1", 2025), talk("t2", 2026)];
        assert_eq!(talks_by_year(&talks, Some(2025)), vec![talk("t1", 2025)]);
    }

    #[test]
    fn test_quote_topic_then_general_then_default() {
        let mut quotes: QuoteBook = HashMap::new();
        quotes.insert("general".to_string(), vec![quote("caching", "general")]);
        quotes.insert("ai".to_string(), vec![quote("demo", "ai"), quote("second", "ai")]);
        quotes.insert("empty".to_string(), vec![]);

        assert_eq!(quote_for_topic(&quotes, Some("ai")).text, "demo");
        assert_eq!(quote_for_topic(&quotes, Some("missing")).text, "caching");
        assert_eq!(quote_for_topic(&quotes, Some("empty")).text, "caching");
        assert_eq!(quote_for_topic(&quotes, None).text, "caching");

        let none: QuoteBook = HashMap::new();
        let fallback = quote_for_topic(&none, Some("rust"));
        assert_eq!(fallback.text, FALLBACK_QUOTE_TEXT);
        assert_eq!(fallback.topic.as_deref(), Some("rust"));
        assert_eq!(quote_for_topic(&none, None).topic.as_deref(), Some("general"));
    }
}
