use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Word tokens of two or more word characters (Unicode-aware)
pub const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// English stop words removed before n-grams are formed.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amoungst",
    "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere",
    "are", "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done", "down", "due", "during",
    "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc",
    "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
    "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found",
    "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt", "have",
    "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself",
    "him", "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least",
    "less", "ltd", "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more",
    "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
    "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "sincere", "six",
    "sixty", "so", "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "system", "take", "ten", "than", "that", "the", "their", "them", "themselves",
    "then", "thence", "there", "thereafter", "thereby", "therefore", "therein", "thereupon",
    "these", "they", "thick", "thin", "third", "this", "those", "though", "three", "through",
    "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve",
    "twenty", "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

fn token_pattern() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).ok()).as_ref()
}

/// Text analyzer shared by corpus building and query vectorization.
///
/// - lower-cases the input
/// - splits into word tokens of at least two word characters
/// - drops English stop words
/// - emits every n-gram with `min_n <= n <= max_n`, joined by a single space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analyzer {
    min_n: usize,
    max_n: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self { min_n: 1, max_n: 2 }
    }
}

impl Analyzer {
    /// `min_n` is raised to 1 and `max_n` to `min_n`
    pub fn new(min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        Self { min_n, max_n: max_n.max(min_n) }
    }

    #[inline]
    pub fn min_n(&self) -> usize {
        self.min_n
    }

    #[inline]
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Word tokens after lower-casing and stop word removal
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let Some(pattern) = token_pattern() else {
            return Vec::new();
        };
        let stop = stop_words();
        let lower = text.to_lowercase();
        let tokens: Vec<String> = pattern
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|tok| !stop.contains(*tok))
            .map(str::to_string)
            .collect();
        tokens
    }

    /// Terms (n-grams) in document order, duplicates kept
    pub fn terms(&self, text: &str) -> Vec<String> {
        let tokens = self.tokens(text);
        let mut terms = Vec::with_capacity(tokens.len() * (self.max_n - self.min_n + 1));
        for n in self.min_n..=self.max_n {
            if n == 1 {
                terms.extend(tokens.iter().cloned());
            } else {
                terms.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_stop_words_and_short_tokens() {
        let a = Analyzer::default();
        assert_eq!(
            a.tokens("Tomato Basil Soup with a Cream!"),
            vec!["tomato", "basil", "soup", "cream"]
        );
        assert_eq!(a.tokens("x y z_q 42"), vec!["z_q", "42"]);
    }

    #[test]
    fn unicode_words_split_on_punctuation() {
        let a = Analyzer::default();
        assert_eq!(
            a.tokens("Crème-brûlée, naïve café's"),
            vec!["crème", "brûlée", "naïve", "café"]
        );
    }

    #[test]
    fn bigrams_skip_removed_stop_words() {
        let a = Analyzer::default();
        let terms = a.terms("wrap with tomato lettuce and cheese");
        assert_eq!(
            terms,
            vec![
                "wrap",
                "tomato",
                "lettuce",
                "cheese",
                "wrap tomato",
                "tomato lettuce",
                "lettuce cheese",
            ]
        );
    }

    #[test]
    fn all_stop_words_yield_nothing() {
        let a = Analyzer::default();
        assert!(a.terms("the and of with").is_empty());
        assert!(a.terms("").is_empty());
    }

    #[test]
    fn unigram_only_analyzer() {
        let a = Analyzer::new(1, 1);
        assert_eq!(a.terms("spicy bean chili"), vec!["spicy", "bean", "chili"]);
    }

    #[test]
    fn out_of_range_ngram_bounds_are_clamped() {
        let zero = Analyzer::new(0, 2);
        assert_eq!((zero.min_n(), zero.max_n()), (1, 2));
        assert_eq!(zero.terms("spicy bean"), vec!["spicy", "bean", "spicy bean"]);

        let inverted = Analyzer::new(3, 1);
        assert_eq!((inverted.min_n(), inverted.max_n()), (3, 3));
        assert!(inverted.terms("spicy bean").is_empty());
        assert_eq!(inverted.terms("spicy bean chili"), vec!["spicy bean chili"]);
    }
}
