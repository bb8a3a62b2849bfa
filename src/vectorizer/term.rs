use indexmap::IndexMap;

/// TermFrequency struct
/// Counts how many times each term occurs in one document (or query).
/// Terms are kept in first-seen order.
///
/// # Examples
/// ```
/// use content_recommender::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("tomato");
/// term_freq.add_term("soup");
/// term_freq.add_term("tomato");
///
/// assert_eq!(term_freq.term_count("tomato"), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u64>,
}

impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self
    }

    /// Add multiple terms
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrence count of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Iterate over (term, count) in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Distinct terms in first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(String::as_str).collect()
    }

    /// number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut tf = TermFrequency::new();
        tf.add_terms(terms);
        tf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_keeps_first_seen_order() {
        let tf = TermFrequency::from(&["soup", "tomato", "soup", "cream"][..]);
        assert_eq!(tf.term_count("soup"), 2);
        assert_eq!(tf.term_count("basil"), 0);
        assert_eq!(tf.term_num(), 3);
        assert_eq!(tf.term_set_ref_str(), vec!["soup", "tomato", "cream"]);
    }
}
