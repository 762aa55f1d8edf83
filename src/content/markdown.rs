//! Markdown rendering
//!
//! A small two-phase renderer: whole-text substitutions produce inline and
//! heading markup, then a line scan assembles paragraphs, lists and code
//! blocks. The class attributes are part of the output contract with the
//! site stylesheet.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

const H3_OPEN: &str = "<h3 class='text-xl font-semibold mb-4'>";
const H2_OPEN: &str = "<h2 class='text-2xl font-bold mb-6'>";
const H1_OPEN: &str = "<h1 class='text-3xl font-bold mb-8'>";
const CODE_BLOCK_OPEN: &str =
    "<pre class='bg-gray-100 dark:bg-gray-800 p-4 rounded-lg mb-6 overflow-x-auto'><code>";
const CODE_BLOCK_CLOSE: &str = "</code></pre>";
const INLINE_CODE_OPEN: &str = "<code class='bg-gray-100 dark:bg-gray-800 px-1 py-0.5 rounded text-sm'>";
const LIST_OPEN: &str = "<ul class='list-disc list-inside mb-6 space-y-2'>";
const LIST_CLOSE: &str = "</ul>";
const PARAGRAPH_OPEN: &str = "<p class='mb-4'>";

/// Lines starting with one of these are already block-level markup
const BLOCK_TAGS: [&str; 8] = ["<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<li>", "<hr"];

lazy_static! {
    static ref H3_RE: Regex = Regex::new(r"(?m)^###[ \t]+(.+)$").unwrap();
    static ref H2_RE: Regex = Regex::new(r"(?m)^##[ \t]+(.+)$").unwrap();
    static ref H1_RE: Regex = Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC_RE: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    // An unclosed fence runs to the end of the text
    static ref FENCE_RE: Regex = Regex::new(r"```(\w+)?\n([\s\S]*?)(```|\z)").unwrap();
    static ref INLINE_CODE_RE: Regex = Regex::new(r"`(.*?)`").unwrap();
}

/// Line-scan state of the block assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Normal,
    InCodeBlock,
    InList,
}

/// Markdown to HTML renderer
///
/// Stateless; every call works on its own input only.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Render markdown to an HTML fragment
    pub fn render(markdown: &str) -> String {
        let normalized = markdown.replace("\r\n", "\n");
        let substituted = Self::substitute(&normalized);
        Self::assemble_blocks(&substituted)
    }

    /// Phase 1: pattern substitutions over the whole text
    ///
    /// Later passes see the output of earlier ones, so the order is fixed.
    fn substitute(text: &str) -> String {
        let s = H3_RE.replace_all(text, format!("{H3_OPEN}$1</h3>").as_str());
        let s = H2_RE.replace_all(&s, format!("{H2_OPEN}$1</h2>").as_str());
        let s = H1_RE.replace_all(&s, format!("{H1_OPEN}$1</h1>").as_str());

        let s = BOLD_RE.replace_all(&s, "<strong>$1</strong>");
        let s = ITALIC_RE.replace_all(&s, "<em>$1</em>");

        let s = FENCE_RE.replace_all(&s, |caps: &Captures| {
            let closed = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
            format!(
                "{}{}{}",
                CODE_BLOCK_OPEN,
                &caps[2],
                if closed { CODE_BLOCK_CLOSE } else { "" }
            )
        });

        INLINE_CODE_RE
            .replace_all(&s, format!("{INLINE_CODE_OPEN}$1</code>").as_str())
            .into_owned()
    }

    /// Phase 2: assemble paragraphs, lists and code blocks line by line
    fn assemble_blocks(html: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut state = BlockState::Normal;

        for line in html.split('\n') {
            if state == BlockState::InCodeBlock {
                out.push(line.to_string());
                // The closing fence may trail the last line of code
                if line.contains(CODE_BLOCK_CLOSE) {
                    state = BlockState::Normal;
                }
                continue;
            }

            if let Some(code) = line.strip_prefix(CODE_BLOCK_OPEN) {
                if state == BlockState::InList {
                    out.push(LIST_CLOSE.to_string());
                }
                out.push(line.to_string());
                state = if code.contains(CODE_BLOCK_CLOSE) {
                    BlockState::Normal
                } else {
                    BlockState::InCodeBlock
                };
            } else if let Some(item) = line.strip_prefix("- ") {
                if state != BlockState::InList {
                    out.push(LIST_OPEN.to_string());
                    state = BlockState::InList;
                }
                out.push(format!("<li>{}</li>", item));
            } else {
                if state == BlockState::InList {
                    out.push(LIST_CLOSE.to_string());
                    state = BlockState::Normal;
                }
                if line.trim().is_empty() {
                    continue;
                }
                if is_block_tag(line) {
                    out.push(line.to_string());
                } else {
                    out.push(format!("{}{}</p>", PARAGRAPH_OPEN, line));
                }
            }
        }

        // End of input closes whatever is still open
        match state {
            BlockState::InList => out.push(LIST_CLOSE.to_string()),
            BlockState::InCodeBlock => out.push(CODE_BLOCK_CLOSE.to_string()),
            BlockState::Normal => {}
        }

        out.join("\n")
    }
}

fn is_block_tag(line: &str) -> bool {
    BLOCK_TAGS.iter().any(|tag| line.starts_with(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings() {
        assert_eq!(
            MarkdownRenderer::render("# Hello"),
            "<h1 class='text-3xl font-bold mb-8'>Hello</h1>"
        );
        let html = MarkdownRenderer::render("## Two\n### Three\n#NoSpace");
        assert_eq!(
            html,
            "<h2 class='text-2xl font-bold mb-6'>Two</h2>\n\
             <h3 class='text-xl font-semibold mb-4'>Three</h3>\n\
             <p class='mb-4'>#NoSpace</p>"
        );
    }

    #[test]
    fn test_render_paragraphs_drop_blank_lines() {
        let html = MarkdownRenderer::render("First line\n\n   \nSecond line");
        assert_eq!(
            html,
            "<p class='mb-4'>First line</p>\n<p class='mb-4'>Second line</p>"
        );
    }

    #[test]
    fn test_render_inline_markup() {
        let html = MarkdownRenderer::render("A **bold** and *soft* `x + 1` line");
        assert_eq!(
            html,
            "<p class='mb-4'>A <strong>bold</strong> and <em>soft</em> \
             <code class='bg-gray-100 dark:bg-gray-800 px-1 py-0.5 rounded text-sm'>x + 1</code> line</p>"
        );
    }

    #[test]
    fn test_render_list() {
        let html = MarkdownRenderer::render("- a\n- b");
        assert_eq!(
            html,
            "<ul class='list-disc list-inside mb-6 space-y-2'>\n<li>a</li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_list_closed_by_text() {
        let html = MarkdownRenderer::render("- one\n- two\nafter\n- three");
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(
            lines,
            vec![
                LIST_OPEN,
                "<li>one</li>",
                "<li>two</li>",
                "</ul>",
                "<p class='mb-4'>after</p>",
                LIST_OPEN,
                "<li>three</li>",
                "</ul>",
            ]
        );
    }

    #[test]
    fn test_block_tags_not_wrapped() {
        let html = MarkdownRenderer::render("<h1 class='x'>Hi</h1>\n<hr>\n<li>loose</li>");
        assert_eq!(html, "<h1 class='x'>Hi</h1>\n<hr>\n<li>loose</li>");
        assert!(!html.contains(PARAGRAPH_OPEN));
    }

    #[test]
    fn test_render_code_block() {
        let html = MarkdownRenderer::render("Intro\n```rust\nlet a = 1;\n\nlet b = 2;\n```\nOutro");
        assert_eq!(
            html,
            format!(
                "<p class='mb-4'>Intro</p>\n{}let a = 1;\n\nlet b = 2;\n</code></pre>\n<p class='mb-4'>Outro</p>",
                CODE_BLOCK_OPEN
            )
        );
    }

    #[test]
    fn test_code_block_keeps_list_markers_verbatim() {
        let html = MarkdownRenderer::render("```\n- not a list\nplain\n```");
        assert_eq!(
            html,
            format!("{}- not a list\nplain\n</code></pre>", CODE_BLOCK_OPEN)
        );
        assert!(!html.contains("<li>"));
        assert!(!html.contains(PARAGRAPH_OPEN));
    }

    #[test]
    fn test_unclosed_code_block() {
        let html = MarkdownRenderer::render("Intro\n```\nfirst\n- second\n\nthird");
        assert_eq!(
            html,
            format!(
                "<p class='mb-4'>Intro</p>\n{}first\n- second\n\nthird\n</code></pre>",
                CODE_BLOCK_OPEN
            )
        );
    }

    #[test]
    fn test_single_line_code_block() {
        let html = MarkdownRenderer::render("```\nx```\nafter");
        assert_eq!(
            html,
            format!("{}x</code></pre>\n<p class='mb-4'>after</p>", CODE_BLOCK_OPEN)
        );
    }

    #[test]
    fn test_code_block_closed_at_end_of_last_line() {
        let html = MarkdownRenderer::render("```\na\nb```\n\nafter para\n- item");
        assert_eq!(
            html,
            format!(
                "{}a\nb</code></pre>\n<p class='mb-4'>after para</p>\n{}\n<li>item</li>\n</ul>",
                CODE_BLOCK_OPEN, LIST_OPEN
            )
        );
        assert_eq!(html.matches(CODE_BLOCK_CLOSE).count(), 1);
    }

    #[test]
    fn test_code_block_closes_open_list() {
        let html = MarkdownRenderer::render("- item\n```\ncode\n```");
        assert!(html.starts_with(&format!("{}\n<li>item</li>\n</ul>\n{}", LIST_OPEN, CODE_BLOCK_OPEN)));
    }

    #[test]
    fn test_crlf_input() {
        let html = MarkdownRenderer::render("# Title\r\n\r\n- a\r\n");
        assert_eq!(
            html,
            format!("{}Title</h1>\n{}\n<li>a</li>\n</ul>", H1_OPEN, LIST_OPEN)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(MarkdownRenderer::render(""), "");
    }
}
