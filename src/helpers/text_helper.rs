/// Whitespace-separated token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A newline or a colon is taken as evidence the prompt already has sections.
pub fn has_structure(text: &str) -> bool {
    text.contains('\n') || text.contains(':')
}

pub fn is_specific(text: &str) -> bool {
    text.chars().count() > 50
}

pub fn contains_ignore_case(haystack_lower: &str, needle: &str) -> bool {
    haystack_lower.contains(&needle.to_lowercase())
}

pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_across_mixed_whitespace() {
        assert_eq!(word_count("  write\tabout \n dogs "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first("javascript"), "Javascript");
        assert_eq!(capitalize_first("c++"), "C++");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn structure_markers() {
        assert!(has_structure("Task: summarize"));
        assert!(has_structure("line one\nline two"));
        assert!(!has_structure("write about dogs"));
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(collapse_whitespace("  guide   to \n Python  "), "guide to Python");
    }
}
