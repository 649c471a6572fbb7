//! Header, footer and rule-line format used to render the rules block.

pub const RULE_NUMBER_TOKEN: &str = "{RULENUMBER}";
pub const RULE_TOKEN: &str = "{RULE}";

/// Line break marker understood by game chat.
pub const LINE_BREAK: &str = "<br>";

pub const DEFAULT_HEADER: &str = "These are our rules";
pub const DEFAULT_FOOTER: &str = "";
pub const DEFAULT_RULE_FORMAT: &str = "{RULENUMBER}. {RULE}";

/// Which template a `SetTemplate` mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Header,
    Footer,
    RuleFormat,
}

impl TemplateField {
    /// Footer is the only template allowed to be blank.
    pub fn allows_empty(self) -> bool {
        matches!(self, TemplateField::Footer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub header: String,
    pub footer: String,
    pub rule_format: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        TemplateSet {
            header: DEFAULT_HEADER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            rule_format: DEFAULT_RULE_FORMAT.to_string(),
        }
    }
}

impl TemplateSet {
    pub fn get(&self, field: TemplateField) -> &str {
        match field {
            TemplateField::Header => &self.header,
            TemplateField::Footer => &self.footer,
            TemplateField::RuleFormat => &self.rule_format,
        }
    }

    pub(crate) fn set(&mut self, field: TemplateField, value: String) {
        match field {
            TemplateField::Header => self.header = value,
            TemplateField::Footer => self.footer = value,
            TemplateField::RuleFormat => self.rule_format = value,
        }
    }

    /// Substitutes a rule into the rule-line format.
    ///
    /// Plain textual replace, number token first. Rule text is inserted last
    /// so it is never rescanned, but a format containing the literal tokens
    /// more than once substitutes every occurrence.
    pub fn render_line(&self, number: usize, rule: &str) -> String {
        self.rule_format
            .replace(RULE_NUMBER_TOKEN, &number.to_string())
            .replace(RULE_TOKEN, rule)
    }

    /// Renders the full rules block: header, one line per rule, footer.
    pub fn render_block(&self, rules: &[String]) -> String {
        let mut block = String::with_capacity(self.header.len() + self.footer.len() + 64);
        block.push_str(&self.header);
        block.push_str(LINE_BREAK);

        for (idx, rule) in rules.iter().enumerate() {
            block.push_str(&self.render_line(idx + 1, rule));
            block.push_str(LINE_BREAK);
        }

        block.push_str(&self.footer);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn rules(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_render_line_default_format() {
        let templates = TemplateSet::default();
        assert_eq!(templates.render_line(3, "No griefing"), "3. No griefing");
    }

    #[test]
    fn test_render_line_repeated_tokens() {
        let templates = TemplateSet {
            rule_format: "[{RULENUMBER}] {RULE} ({RULENUMBER})".to_string(),
            ..TemplateSet::default()
        };
        assert_eq!(templates.render_line(2, "Be nice"), "[2] Be nice (2)");
    }

    #[test]
    fn test_rule_text_with_tokens_is_not_rescanned() {
        let templates = TemplateSet::default();
        assert_eq!(
            templates.render_line(1, "Say {RULENUMBER} out loud"),
            "1. Say {RULENUMBER} out loud"
        );
    }

    #[test]
    fn test_render_block_scenario() {
        let templates = TemplateSet {
            header: "Welcome".to_string(),
            footer: String::new(),
            rule_format: DEFAULT_RULE_FORMAT.to_string(),
        };
        let block = templates.render_block(&rules(&["Be nice", "No griefing"]));
        assert_snapshot!(block, @"Welcome<br>1. Be nice<br>2. No griefing<br>");
    }

    #[test]
    fn test_render_block_with_footer_and_no_rules() {
        let templates = TemplateSet {
            footer: "Have fun".to_string(),
            ..TemplateSet::default()
        };
        assert_eq!(templates.render_block(&[]), "These are our rules<br>Have fun");
    }

    #[test]
    fn test_footer_allows_empty_only() {
        assert!(TemplateField::Footer.allows_empty());
        assert!(!TemplateField::Header.allows_empty());
        assert!(!TemplateField::RuleFormat.allows_empty());
    }
}
