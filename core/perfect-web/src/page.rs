//! フォーム画面の HTML 生成

use std::fmt::Write;

use common::domain::{History, HistoryEntry, ModelCatalog, PerfectionResult};

use crate::session::WebSession;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
.main-header { text-align: center; font-size: 2.5rem; font-weight: bold; margin-bottom: 0;
  background: linear-gradient(90deg, #667eea 0%, #764ba2 100%);
  -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
.subtitle { text-align: center; color: #666; margin-bottom: 2rem; }
.columns { display: flex; gap: 1.5rem; }
.columns > section { flex: 1; }
textarea { width: 100%; font-size: 16px; box-sizing: border-box; }
.info { padding: 0.75rem; border-radius: 0.5rem; background: #e7f1fb; }
.error { padding: 0.75rem; border-radius: 0.5rem; background: #f8d7da; border: 1px solid #f5c2c7; }
.success-box { padding: 0.75rem; border-radius: 0.5rem; background: #d4edda; border: 1px solid #c3e6cb; }
pre { white-space: pre-wrap; background: #f6f8fa; padding: 0.75rem; border-radius: 0.5rem; }
footer { text-align: center; color: #666; padding: 1rem; }
"#;

const EXAMPLES: &str = r#"<details>
<summary>See Examples</summary>
<p><strong>Simple Prompt:</strong></p>
<blockquote>write a story about a cat</blockquote>
<p><strong>Perfected Prompt:</strong></p>
<blockquote>Write a heartwarming short story (800-1000 words) about a curious tabby cat named Whiskers who discovers a hidden magical garden in their backyard. Include:
<ul>
<li>A clear beginning, middle, and end structure</li>
<li>Vivid sensory descriptions of the garden</li>
<li>Character development showing Whiskers' personality</li>
<li>A gentle tone suitable for all ages</li>
<li>Dialogue or internal thoughts from the cat's perspective</li>
</ul>
Avoid: violence, dark themes, or overly complex vocabulary</blockquote>
<hr>
<p><strong>Simple Prompt:</strong></p>
<blockquote>explain quantum computing</blockquote>
<p><strong>Perfected Prompt:</strong></p>
<blockquote>Provide a comprehensive explanation of quantum computing for an intelligent high school student with basic physics knowledge. Structure your response as follows:
<ul>
<li>Introduction: Define quantum computing and its significance (2-3 sentences)</li>
<li>Core Concepts: Explain qubits, superposition, and entanglement using analogies</li>
<li>Comparison: How it differs from classical computing</li>
<li>Applications: 3-4 real-world use cases</li>
<li>Future Outlook: Current limitations and potential</li>
</ul>
Tone: Educational but engaging<br>
Avoid: Complex mathematical formulas, overly technical jargon</blockquote>
</details>"#;

/// HTML 特殊文字をエスケープする
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 画面全体を描画する
pub fn render_page(catalog: &ModelCatalog, session: &WebSession) -> String {
    let selected = catalog
        .find(&session.selected_model)
        .unwrap_or_else(|| catalog.default_option());

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Prompt Perfecter</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1 class=\"main-header\">Prompt Perfecter</h1>\n");
    html.push_str(
        "<p class=\"subtitle\">Transform simple prompts into detailed, effective AI instructions</p>\n",
    );

    // 設定と入力フォーム（Perfect / Clear は同じフォームから別エンドポイントへ送る）
    html.push_str("<div class=\"columns\">\n<section>\n<form method=\"post\" action=\"/perfect\">\n");
    html.push_str("<h3>Settings</h3>\n<label for=\"model\">Select Model</label>\n");
    html.push_str("<select id=\"model\" name=\"model\">\n");
    for option in catalog.options() {
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            escape_html(&option.id),
            if option.id == selected.id { " selected" } else { "" },
            escape_html(&option.label)
        );
    }
    html.push_str("</select>\n");

    let _ = write!(
        html,
        "<div class=\"info\"><strong>{}:</strong><ul>",
        selected.tier.title()
    );
    for line in selected.tier.details() {
        let _ = write!(html, "<li>{}</li>", escape_html(line));
    }
    html.push_str("</ul></div>\n");

    html.push_str("<h3>Your Simple Prompt</h3>\n");
    let _ = writeln!(
        html,
        "<textarea name=\"prompt\" rows=\"8\" placeholder=\"Example: write a story about a cat\">{}</textarea>",
        escape_html(&session.draft)
    );
    html.push_str("<button type=\"submit\">Perfect My Prompt</button>\n");
    html.push_str("<button type=\"submit\" formaction=\"/clear\">Clear</button>\n");
    html.push_str("</form>\n");
    html.push_str(
        "<form method=\"post\" action=\"/history/clear\"><button type=\"submit\">Clear History</button></form>\n",
    );
    html.push_str("</section>\n<section>\n<h3>Perfected Prompt</h3>\n");
    render_output(&mut html, session.prompt.current());
    html.push_str("</section>\n</div>\n");

    html.push_str(EXAMPLES);
    html.push('\n');
    render_history(&mut html, session.prompt.history());

    html.push_str("<hr>\n<footer><p>Made with Rust &amp; Google Gemini</p>");
    html.push_str("<p><small>Tip: Use the perfected prompts with any AI model.</small></p></footer>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_output(html: &mut String, current: Option<&PerfectionResult>) {
    match current {
        Some(PerfectionResult::Success { text }) => {
            let _ = writeln!(html, "<pre id=\"output\">{}</pre>", escape_html(text));
            html.push_str("<p class=\"success-box\">Prompt perfected! Copy the text above.</p>\n");
        }
        Some(PerfectionResult::Failure { message }) => {
            let _ = writeln!(
                html,
                "<div id=\"output\" class=\"error\">{}</div>",
                escape_html(message)
            );
        }
        None => {
            html.push_str(
                "<p class=\"info\">Enter a prompt and click 'Perfect My Prompt' to get started!</p>\n",
            );
        }
    }
}

/// 直近 DISPLAY_LIMIT 件を新しい順に。番号は追加順の 1 始まり。
fn render_history(html: &mut String, history: &History) {
    if history.is_empty() {
        return;
    }
    html.push_str("<hr>\n<h3>Recent History</h3>\n");
    let total = history.len();
    for (i, entry) in history.recent(History::DISPLAY_LIMIT).into_iter().enumerate() {
        let _ = writeln!(
            html,
            "<details class=\"history\"><summary>Prompt {} - {}</summary>\
             <p><strong>Original:</strong></p><pre>{}</pre>\
             <p><strong>Perfected:</strong></p><pre>{}</pre></details>",
            total - i,
            escape_html(&entry.model_label),
            escape_html(&HistoryEntry::preview(&entry.original)),
            escape_html(&HistoryEntry::preview(&entry.perfected))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::domain::ModelId;

    fn session() -> WebSession {
        WebSession::new(ModelId::new("gemini-2.5-flash"))
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"cats\" & 'dogs'</b>"),
            "&lt;b&gt;&quot;cats&quot; &amp; &#39;dogs&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_default_model_selected_with_flash_info() {
        let html = render_page(&ModelCatalog::builtin(), &session());
        assert!(html.contains(
            "<option value=\"gemini-2.5-flash\" selected>Gemini 2.5 Flash (Fast &amp; Balanced)</option>"
        ));
        assert!(html.contains("Flash Models:"));
        assert!(html.contains("1,500 req/day"));
        assert!(html.contains("to get started!"));
        assert!(!html.contains("Recent History"));
    }

    #[test]
    fn test_pro_model_shows_pro_info() {
        let mut s = session();
        s.selected_model = ModelId::new("gemini-pro-latest");
        let html = render_page(&ModelCatalog::builtin(), &s);
        assert!(html.contains("Pro Models:"));
        assert!(html.contains("50 req/day"));
    }

    #[test]
    fn test_history_numbering_and_preview() {
        let mut history = History::new();
        for i in 1..=7 {
            history.append(HistoryEntry::new(
                format!("prompt {}", i),
                "x".repeat(150),
                "Gemini Flash Latest",
            ));
        }
        let mut html = String::new();
        render_history(&mut html, &history);
        assert!(html.contains("Prompt 7 - Gemini Flash Latest"));
        assert!(html.contains("Prompt 3 - Gemini Flash Latest"));
        assert!(!html.contains("Prompt 2 - "));
        assert!(html.find("Prompt 7").unwrap() < html.find("Prompt 6").unwrap());
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
    }

    #[test]
    fn test_output_rendering() {
        let mut html = String::new();
        render_output(&mut html, Some(&PerfectionResult::failure("timed out")));
        assert!(html.contains("class=\"error\">Error: timed out"));

        let mut html = String::new();
        render_output(&mut html, Some(&PerfectionResult::success("Error: a <b> prompt")));
        assert!(html.contains("<pre id=\"output\">Error: a &lt;b&gt; prompt</pre>"));
        assert!(!html.contains("class=\"error\""));
    }
}
