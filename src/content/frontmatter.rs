/// A markdown document split into its YAML frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub frontmatter: &'a str,
    pub body: &'a str,
}

/// Split `---`-delimited frontmatter off the top of a markdown file.
///
/// The delimiters must sit on their own lines. Returns an error message
/// (without path context) when the block is missing, unclosed or empty.
pub fn split(source: &str) -> Result<Document<'_>, String> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Err("missing opening '---'".to_string()),
    }

    let start = source.find('\n').map(|i| i + 1).unwrap_or(source.len());
    let mut offset = start;
    for line in lines {
        if line.trim_end() == "---" {
            let frontmatter = &source[start..offset];
            if frontmatter.trim().is_empty() {
                return Err("frontmatter block is empty".to_string());
            }
            let body = &source[offset + line.len()..];
            return Ok(Document { frontmatter, body: body.trim_start_matches(['\r', '\n']) });
        }
        offset += line.len();
    }

    Err("found opening '---' but no closing '---'".to_string())
}
