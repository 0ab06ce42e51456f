//! Heading-delimited section extraction.
//!
//! A section is the contiguous run of lines starting at a heading (inclusive)
//! and ending just before the next top-level `## ` heading or the end of the
//! document. Implemented line-based rather than with lookahead regex.

/// Extract the section beginning with `heading` from `text`.
///
/// The heading must start a line and be followed by a word boundary, so
/// `## Our Story` does not match `## Our Storyline`. Returns the section
/// with trailing whitespace trimmed, or `None` when the heading is absent
/// or the input is empty.
pub fn extract_section(text: &str, heading: &str) -> Option<String> {
    if text.is_empty() || heading.is_empty() {
        return None;
    }

    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        if in_section {
            if line.starts_with("## ") {
                break;
            }
            collected.push(line);
        } else if starts_section(line, heading) {
            in_section = true;
            collected.push(line);
        }
    }

    if !in_section {
        return None;
    }

    Some(collected.join("\n").trim_end().to_string())
}

fn starts_section(line: &str, heading: &str) -> bool {
    match line.strip_prefix(heading) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADING: &str = "## Our Story";

    #[test]
    fn extracts_section_to_end_of_document() {
        let text = "# My Story\n\n## Our Story\n\nContent here.\nMore content.";
        let section = extract_section(text, HEADING).unwrap();
        assert_eq!(section, "## Our Story\n\nContent here.\nMore content.");
    }

    #[test]
    fn stops_at_next_top_level_heading() {
        let text = "## Our Story\n\nOur content.\n\n## Who I Am\n\nBio.";
        let section = extract_section(text, HEADING).unwrap();
        assert_eq!(section, "## Our Story\n\nOur content.");
    }

    #[test]
    fn keeps_subsections() {
        let text = "## Our Story\n\n### Chapter 1\n\nIt began.\n\n## Next";
        let section = extract_section(text, HEADING).unwrap();
        assert!(section.contains("### Chapter 1"));
        assert!(!section.contains("## Next"));
    }

    #[test]
    fn absent_heading_returns_none() {
        assert!(extract_section("# Title\n\nNo story.", HEADING).is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        assert!(extract_section("", HEADING).is_none());
    }

    #[test]
    fn heading_with_longer_word_does_not_match() {
        let text = "## Our Storyline\n\nNot the one.";
        assert!(extract_section(text, HEADING).is_none());
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let text = "## Our Story\n\nContent.\n\n\n";
        let section = extract_section(text, HEADING).unwrap();
        assert_eq!(section, "## Our Story\n\nContent.");
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "## Our Story\n\nFirst.\n\n## Middle\n\n## Our Story\n\nSecond.";
        let section = extract_section(text, HEADING).unwrap();
        assert_eq!(section, "## Our Story\n\nFirst.");
    }
}
