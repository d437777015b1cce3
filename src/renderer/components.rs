use std::collections::BTreeMap;

/// Helpers for emitting HTML markup
pub struct Html;

impl Html {
    /// Escapes text for use in element content or attribute values.
    pub fn encode(text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => output.push_str("&amp;"),
                '<' => output.push_str("&lt;"),
                '>' => output.push_str("&gt;"),
                '"' => output.push_str("&quot;"),
                '\'' => output.push_str("&#039;"),
                _ => output.push(c),
            }
        }
        output
    }

    /// Renders attributes in key order, each prefixed by a space.
    pub fn render_attributes(attributes: &BTreeMap<String, String>) -> String {
        attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, Self::encode(value)))
            .collect()
    }

    /// Wraps already-rendered content in an element.
    pub fn tag(name: &str, content: &str, attributes: &BTreeMap<String, String>) -> String {
        format!(
            "<{}{}>{}</{}>",
            name,
            Self::render_attributes(attributes),
            content,
            name
        )
    }
}

/// Substitutes `{placeholder}` tokens in templates
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Replaces every known placeholder in a single pass. Replacement text
    /// is never scanned again and unknown placeholders are kept verbatim.
    pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            output.push_str(&rest[..start]);
            let candidate = &rest[start..];
            let replaced = candidate.find('}').and_then(|end| {
                let token = &candidate[..=end];
                replacements
                    .iter()
                    .find(|(placeholder, _)| *placeholder == token)
                    .map(|(_, value)| (token.len(), *value))
            });

            match replaced {
                Some((consumed, value)) => {
                    output.push_str(value);
                    rest = &candidate[consumed..];
                }
                None => {
                    output.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        output.push_str(rest);
        output
    }
}

/// Renders the icon fragment placed before a label
pub struct IconRenderer;

impl IconRenderer {
    pub fn render_icon(icon: &str) -> String {
        if icon.is_empty() {
            String::new()
        } else {
            format!("<i class=\"menu-item-icon icon tx-24\">{}</i> ", icon)
        }
    }
}
