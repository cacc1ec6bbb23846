//! メタプロンプトのテンプレート
//!
//! ユーザーの生プロンプトを埋め込む指示文。プレースホルダ `{user_prompt}` をちょうど 1 つ持つ。
//! 不備は起動時の parse で検出し、リクエスト時には失敗しない。

use crate::error::Error;
use regex::Regex;

/// テンプレート中のプレースホルダ
pub const PLACEHOLDER: &str = "{user_prompt}";

const PLACEHOLDER_NAME: &str = "user_prompt";

/// 全エントリポイントで共有する既定のテンプレート
pub const CANONICAL_TEMPLATE: &str = r#"
You are an expert prompt engineer. Your role is to take a user's simple prompt and rewrite it to be more detailed, specific, and effective for a generative AI.

You should enhance the prompt by:
1. Adding specific context and background.
2. Defining a clear structure or format for the desired output.
3. Specifying a tone or persona for the AI to adopt.
4. Including constraints or negative prompts to avoid unwanted content.
5. Ensuring the core intent of the original prompt is preserved and clarified.

Output rules:
1. Output ONLY the raw text of the improved prompt.
2. Do NOT include any headers (e.g., "Constraints:", "Perfected Prompt:", "Analysis:").
3. Do NOT include any introductory or concluding remarks.
4. Do NOT answer the user's prompt.

User's Raw Prompt: "{user_prompt}"

Your Perfected Prompt:
"#;

/// 検証済みテンプレート（プレースホルダの前後に分割して保持）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    prefix: String,
    suffix: String,
}

impl PromptTemplate {
    /// テンプレート文字列を検証して作る
    ///
    /// `{user_prompt}` がちょうど 1 つで、他の `{name}` 形式のプレースホルダが無いこと。
    pub fn parse(text: &str) -> Result<Self, Error> {
        let re = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}")
            .map_err(|e| Error::template(format!("placeholder pattern: {}", e)))?;

        let mut found = 0;
        for cap in re.captures_iter(text) {
            let name = &cap[1];
            if name != PLACEHOLDER_NAME {
                return Err(Error::template(format!(
                    "Template contains unknown placeholder {{{}}}",
                    name
                )));
            }
            found += 1;
        }
        match found {
            0 => Err(Error::template(format!(
                "Template is missing the {} placeholder",
                PLACEHOLDER
            ))),
            1 => {
                let (prefix, suffix) = text
                    .split_once(PLACEHOLDER)
                    .ok_or_else(|| Error::template("placeholder not found"))?;
                Ok(Self {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                })
            }
            n => Err(Error::template(format!(
                "Template must contain {} exactly once (found {})",
                PLACEHOLDER, n
            ))),
        }
    }

    /// 組み込みテンプレート
    pub fn canonical() -> Result<Self, Error> {
        Self::parse(CANONICAL_TEMPLATE)
    }

    /// 生プロンプトをそのまま埋め込む（エスケープ・切り詰めなし）
    pub fn render(&self, raw_prompt: &str) -> String {
        let mut out =
            String::with_capacity(self.prefix.len() + raw_prompt.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(raw_prompt);
        out.push_str(&self.suffix);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_template_passes_self_check() {
        assert!(PromptTemplate::canonical().is_ok());
    }

    #[test]
    fn test_render_contains_raw_prompt() {
        let t = PromptTemplate::canonical().unwrap();
        let out = t.render("write a story about a cat");
        assert!(out.contains("User's Raw Prompt: \"write a story about a cat\""));
    }

    #[test]
    fn test_render_differs_only_at_placeholder() {
        let t = PromptTemplate::canonical().unwrap();
        let raw = "explain quantum computing";
        let out = t.render(raw);
        let pos = CANONICAL_TEMPLATE.find(PLACEHOLDER).unwrap();
        assert_eq!(&out[..pos], &CANONICAL_TEMPLATE[..pos]);
        assert_eq!(&out[pos..pos + raw.len()], raw);
        assert_eq!(
            &out[pos + raw.len()..],
            &CANONICAL_TEMPLATE[pos + PLACEHOLDER.len()..]
        );
    }

    #[test]
    fn test_render_is_verbatim() {
        let t = PromptTemplate::parse("<{user_prompt}>").unwrap();
        assert_eq!(t.render("  \"quoted\" {braces} \n"), "<  \"quoted\" {braces} \n>");
        assert_eq!(t.render(""), "<>");
    }

    #[test]
    fn test_render_does_not_expand_placeholder_inside_prompt() {
        let t = PromptTemplate::parse("A {user_prompt} B").unwrap();
        assert_eq!(t.render("x {user_prompt} y"), "A x {user_prompt} y B");
    }

    #[test]
    fn test_render_is_deterministic() {
        let t = PromptTemplate::canonical().unwrap();
        assert_eq!(t.render("same"), t.render("same"));
    }

    #[test]
    fn test_parse_rejects_missing_placeholder() {
        let err = PromptTemplate::parse("no placeholder here").unwrap_err();
        assert!(matches!(err, Error::Template(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_parse_rejects_duplicate_placeholder() {
        let err = PromptTemplate::parse("{user_prompt} and {user_prompt}").unwrap_err();
        assert!(err.to_string().contains("exactly once"));
    }

    #[test]
    fn test_parse_rejects_unknown_placeholder() {
        let err = PromptTemplate::parse("{user_prompt} for {audience}").unwrap_err();
        assert!(err.to_string().contains("{audience}"));
    }

    #[test]
    fn test_parse_ignores_non_identifier_braces() {
        let t = PromptTemplate::parse("Reply as {\"json\": 1}: {user_prompt}").unwrap();
        assert_eq!(t.render("hi"), "Reply as {\"json\": 1}: hi");
    }
}
