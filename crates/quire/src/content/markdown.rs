use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};
use serde::de::DeserializeOwned;

/// Line separating the excerpt from the rest of an article.
pub const EXCERPT_SEPARATOR: &str = "---";

/// A Markdown file split into its YAML frontmatter and its body.
///
/// ## Example
/// ```rs
/// use quire::content::MarkdownDocument;
///
/// let document = MarkdownDocument::parse("---\ntitle: Hello\n---\n\nIntro\n\n---\n\nRest\n");
/// assert!(document.body().contains("Rest"));
/// assert_eq!(document.excerpt().as_deref(), Some("<p>Intro</p>\n"));
/// ```
#[derive(Debug)]
pub struct MarkdownDocument<'a> {
    frontmatter: String,
    body: &'a str,
}

impl<'a> MarkdownDocument<'a> {
    pub fn parse(content: &'a str) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

        let mut frontmatter = String::new();
        let mut body_start = 0;
        let mut in_frontmatter = false;

        // Frontmatter can only be the very first block, so there is no need to parse the whole document.
        for (event, range) in Parser::new_ext(content, options).into_offset_iter() {
            match event {
                Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                    in_frontmatter = true
                }
                Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                    body_start = range.end;
                    break;
                }
                Event::Text(ref text) if in_frontmatter => frontmatter.push_str(text),
                _ => break,
            }
        }

        Self {
            frontmatter,
            body: &content[body_start..],
        }
    }

    /// Raw YAML of the frontmatter, empty if the document has none.
    pub fn raw_frontmatter(&self) -> &str {
        &self.frontmatter
    }

    /// Everything after the frontmatter.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserializes the frontmatter. A document without frontmatter deserializes from an empty mapping.
    pub fn frontmatter<T>(&self) -> Result<T, serde_yaml::Error>
    where
        T: DeserializeOwned,
    {
        if self.frontmatter.trim().is_empty() {
            serde_yaml::from_str("{}")
        } else {
            serde_yaml::from_str(&self.frontmatter)
        }
    }

    /// Markdown source of the body up to the first [`EXCERPT_SEPARATOR`] line.
    ///
    /// `None` if there is no separator or nothing but whitespace before it.
    pub fn excerpt_source(&self) -> Option<&'a str> {
        let mut offset = 0;

        for line in self.body.split_inclusive('\n') {
            if line.trim_end() == EXCERPT_SEPARATOR {
                let excerpt = &self.body[..offset];
                return (!excerpt.trim().is_empty()).then_some(excerpt);
            }
            offset += line.len();
        }

        None
    }

    /// Rendered HTML of [`MarkdownDocument::excerpt_source`].
    pub fn excerpt(&self) -> Option<String> {
        self.excerpt_source().map(render_markdown)
    }
}

/// Render Markdown content to HTML.
///
/// ## Example
/// ```rs
/// use quire::content::render_markdown;
/// let markdown = r#"# Hello, world!"#;
/// let html = render_markdown(markdown);
/// ```
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(
        Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
            | Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS,
    );

    let mut in_frontmatter = false;
    let events = Parser::new_ext(content, options).filter(|event| match event {
        Event::Start(Tag::MetadataBlock(_)) => {
            in_frontmatter = true;
            false
        }
        Event::End(TagEnd::MetadataBlock(_)) => {
            in_frontmatter = false;
            false
        }
        _ => !in_frontmatter,
    });

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events);
    html_output
}
