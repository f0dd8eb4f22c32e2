//! "Did you mean" suggestions for mistyped commands.
//!
//! Similarity is the Levenshtein distance between the typed word and each
//! known command, scaled to a 0-100 score.

/// Finds the known command closest to a mistyped one.
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    commands: Vec<&'static str>,
    min_similarity: u8,
}

impl CommandMatcher {
    /// Create a matcher over `commands`, accepting suggestions scoring at
    /// least `min_similarity` (0-100).
    pub fn new(commands: &[&'static str], min_similarity: u8) -> Self {
        Self {
            commands: commands.to_vec(),
            min_similarity: min_similarity.min(100),
        }
    }

    /// The best known command for `input`, if any is similar enough.
    ///
    /// Ties go to the command listed first.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let input = Self::normalize(input);
        if input.is_empty() {
            return None;
        }

        let mut best: Option<(&'static str, u8)> = None;
        for &command in &self.commands {
            let score = Self::similarity(&input, command);
            if score < self.min_similarity {
                continue;
            }
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((command, score)),
            }
        }

        best.map(|(command, _)| command)
    }

    /// Similarity between two words, 100 meaning identical.
    pub fn similarity(a: &str, b: &str) -> u8 {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return 100;
        }

        let distance = Self::levenshtein_distance(a, b);
        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 100.0).round() as u8
    }

    /// Edit distance between two strings, keeping only two rows of the table.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let target: Vec<char> = s2.chars().collect();
        let mut previous: Vec<usize> = (0..=target.len()).collect();
        let mut current = vec![0; target.len() + 1];

        for (i, c1) in s1.chars().enumerate() {
            current[0] = i + 1;
            for (j, c2) in target.iter().enumerate() {
                let substitution = previous[j] + usize::from(c1 != *c2);
                let deletion = previous[j + 1] + 1;
                let insertion = current[j] + 1;
                current[j + 1] = substitution.min(deletion).min(insertion);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[target.len()]
    }

    fn normalize(word: &str) -> String {
        word.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: [&str; 5] = ["hello", "add", "add-birthday", "change", "phone"];

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(CommandMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(CommandMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(CommandMatcher::levenshtein_distance("same", "same"), 0);
        assert_eq!(CommandMatcher::levenshtein_distance("abc", ""), 3);
        assert_eq!(CommandMatcher::levenshtein_distance("chnage", "change"), 2);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(CommandMatcher::similarity("hello", "hello"), 100);
        assert_eq!(CommandMatcher::similarity("helo", "hello"), 80);
        assert_eq!(CommandMatcher::similarity("xyz", "abc"), 0);
    }

    #[test]
    fn test_suggest_close_typo() {
        let matcher = CommandMatcher::new(&COMMANDS, 60);
        assert_eq!(matcher.suggest("ad-birthday"), Some("add-birthday"));
        assert_eq!(matcher.suggest("chnage"), Some("change"));
        assert_eq!(matcher.suggest("HELO"), Some("hello"));
    }

    #[test]
    fn test_suggest_nothing_for_unrelated_input() {
        let matcher = CommandMatcher::new(&COMMANDS, 60);
        assert_eq!(matcher.suggest("quit"), None);
        assert_eq!(matcher.suggest(""), None);
    }

    #[test]
    fn test_threshold_is_respected() {
        let strict = CommandMatcher::new(&COMMANDS, 95);
        assert_eq!(strict.suggest("helo"), None);
    }
}
