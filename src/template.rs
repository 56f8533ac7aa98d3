//! Placeholder substitution for the starship config template.
//!
//! Templates contain `{{colors.<mode>.<role>}}` tokens. A token is replaced
//! only when its mode matches the active palette and its role exists in it;
//! everything else passes through untouched.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::palette::Palette;

/// Captures: 1=mode, 2=role
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{colors\.([A-Za-z0-9_]+)\.([A-Za-z0-9_]+)\}\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder {
        raw: &'a str,
        mode: &'a str,
        key: &'a str,
    },
}

/// A template split once into literal text and placeholder tokens.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

/// Output of [`Template::render`].
#[derive(Debug)]
pub struct Rendered<'a> {
    pub text: String,
    /// Raw tokens left in `text` because their mode or role did not match.
    pub unresolved: Vec<&'a str>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in PLACEHOLDER_RE.captures_iter(source) {
            let whole = caps.get(0).unwrap();
            if whole.start() > cursor {
                segments.push(Segment::Literal(&source[cursor..whole.start()]));
            }
            segments.push(Segment::Placeholder {
                raw: whole.as_str(),
                mode: caps.get(1).unwrap().as_str(),
                key: caps.get(2).unwrap().as_str(),
            });
            cursor = whole.end();
        }

        if cursor < source.len() {
            segments.push(Segment::Literal(&source[cursor..]));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder { .. }))
            .count()
    }

    pub fn render(&self, palette: &Palette) -> Rendered<'a> {
        let active = palette.mode().as_str();
        let mut text = String::new();
        let mut unresolved = Vec::new();

        for segment in self.segments() {
            match *segment {
                Segment::Literal(literal) => text.push_str(literal),
                Segment::Placeholder { raw, mode, key } => {
                    match palette.get(key).filter(|_| mode == active) {
                        Some(hex) => text.push_str(hex),
                        None => {
                            text.push_str(raw);
                            unresolved.push(raw);
                        }
                    }
                }
            }
        }

        Rendered { text, unresolved }
    }
}

/// Result of [`write_starship`] when no I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    TemplateMissing,
}

/// Render the starship template at `template_path` into `output_path`.
///
/// A missing template is reported and skipped rather than treated as an error.
pub fn write_starship(
    palette: &Palette,
    template_path: &Path,
    output_path: &Path,
) -> Result<WriteOutcome> {
    if !template_path.exists() {
        warn!(path = %template_path.display(), "template:missing, skipping starship config");
        println!("Starship template not found: {}", template_path.display());
        return Ok(WriteOutcome::TemplateMissing);
    }

    let source = fs::read_to_string(template_path).with_context(|| {
        format!(
            "Failed to read starship template '{}'",
            template_path.display()
        )
    })?;

    let template = Template::parse(&source);
    let rendered = template.render(palette);
    if !rendered.unresolved.is_empty() {
        debug!(
            unresolved = ?rendered.unresolved,
            mode = %palette.mode(),
            "template:placeholders left unresolved"
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory at {}", parent.display())
        })?;
    }
    fs::write(output_path, rendered.text).with_context(|| {
        format!(
            "Failed to write starship config to {}",
            output_path.display()
        )
    })?;

    info!(
        template = %template_path.display(),
        path = %output_path.display(),
        placeholders = template.placeholder_count(),
        "template:written"
    );
    println!("Starship config written to {}", output_path.display());
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Mode, resolve};
    use tempfile::TempDir;

    #[test]
    fn parse_splits_literals_and_placeholders() {
        let template = Template::parse("fg={{colors.dark.primary}};");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("fg="),
                Segment::Placeholder {
                    raw: "{{colors.dark.primary}}",
                    mode: "dark",
                    key: "primary",
                },
                Segment::Literal(";"),
            ]
        );
    }

    #[test]
    fn parse_handles_adjacent_placeholders() {
        let template = Template::parse("{{colors.dark.primary}}{{colors.dark.scrim}}");
        assert_eq!(template.segments().len(), 2);
        assert_eq!(template.placeholder_count(), 2);
    }

    #[test]
    fn parse_ignores_tokens_with_whitespace() {
        let template = Template::parse("{{ colors.dark.primary }}");
        assert_eq!(
            template.segments(),
            &[Segment::Literal("{{ colors.dark.primary }}")]
        );
    }

    #[test]
    fn render_substitutes_matching_mode() {
        let rendered =
            Template::parse("style = \"{{colors.dark.primary}}\"").render(&resolve(Mode::Dark));
        assert_eq!(rendered.text, "style = \"#c6bfff\"");
        assert!(rendered.unresolved.is_empty());
        assert!(!rendered.text.contains("{{"));
    }

    #[test]
    fn render_leaves_other_mode_untouched() {
        let source = "a={{colors.light.primary}} b={{colors.dark.primary}}";
        let rendered = Template::parse(source).render(&resolve(Mode::Dark));
        assert_eq!(rendered.text, "a={{colors.light.primary}} b=#c6bfff");
        assert_eq!(rendered.unresolved, vec!["{{colors.light.primary}}"]);
    }

    #[test]
    fn render_leaves_unknown_roles_untouched() {
        let rendered =
            Template::parse("{{colors.light.accent}} {{colors.light.shadow}}")
                .render(&resolve(Mode::Light));
        assert_eq!(rendered.text, "{{colors.light.accent}} #000000");
        assert_eq!(rendered.unresolved, vec!["{{colors.light.accent}}"]);
    }

    #[test]
    fn render_mode_segment_is_case_sensitive() {
        let rendered = Template::parse("{{colors.DARK.primary}}").render(&resolve(Mode::Dark));
        assert_eq!(rendered.text, "{{colors.DARK.primary}}");
    }

    #[test]
    fn render_resolves_every_role_for_both_modes() {
        for mode in [Mode::Dark, Mode::Light] {
            let palette = resolve(mode);
            let source: String = palette
                .iter()
                .map(|(key, _)| format!("{key}={{{{colors.{mode}.{key}}}}}\n"))
                .collect();
            let rendered = Template::parse(&source).render(&palette);
            assert!(rendered.unresolved.is_empty(), "{mode}");
            for (key, hex) in palette.iter() {
                assert!(rendered.text.contains(&format!("{key}={hex}\n")));
            }
        }
    }

    #[test]
    fn render_preserves_text_without_placeholders() {
        let source = "[character]\nsuccess_symbol = \"[>](bold green)\"\n";
        let rendered = Template::parse(source).render(&resolve(Mode::Dark));
        assert_eq!(rendered.text, source);
    }

    #[test]
    fn write_starship_skips_missing_template() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("starship.toml");

        let outcome = write_starship(
            &resolve(Mode::Dark),
            &temp.path().join("missing.toml"),
            &output,
        )
        .unwrap();

        assert_eq!(outcome, WriteOutcome::TemplateMissing);
        assert!(!output.exists());
    }

    #[test]
    fn write_starship_renders_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("starship-colors.toml");
        let output = temp.path().join("config/starship.toml");
        fs::write(
            &template,
            "[directory]\nstyle = \"bold {{colors.light.primary}}\"\n",
        )
        .unwrap();
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, "old contents").unwrap();

        let outcome = write_starship(&resolve(Mode::Light), &template, &output).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[directory]\nstyle = \"bold #5d5791\"\n"
        );
    }

    #[test]
    fn write_starship_creates_output_directory() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("t.toml");
        let output = temp.path().join("nested/dir/starship.toml");
        fs::write(&template, "{{colors.dark.background}}").unwrap();

        write_starship(&resolve(Mode::Dark), &template, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "#131318");
    }
}
