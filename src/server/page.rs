// ============================================================================
// Form Page
// HTML rendering for the browser-facing calculator
// ============================================================================

use crate::domain::Operation;

/// Everything the form page shows: sticky inputs plus at most one outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub num1: String,
    pub num2: String,
    pub operation: String,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl FormView {
    /// Blank form with the default operation selected
    pub fn empty() -> Self {
        Self {
            operation: Operation::default().as_str().to_string(),
            ..Self::default()
        }
    }
}

const STYLE: &str = r#"    body { font-family: Arial, sans-serif; max-width: 520px; margin: 40px auto; padding: 0 16px; }
    .card { border: 1px solid #ddd; border-radius: 10px; padding: 18px; }
    label { display:block; margin-top: 10px; }
    input, select { width: 100%; padding: 10px; margin-top: 6px; }
    button { margin-top: 14px; width: 100%; padding: 10px; cursor: pointer; }
    .result { margin-top: 16px; padding: 12px; border-radius: 8px; background: #f6f6f6; }
    .error { margin-top: 16px; padding: 12px; border-radius: 8px; background: #ffecec; color: #b00020; }"#;

/// Render the full page.
///
/// All caller-supplied text is escaped. An error suppresses the result block.
pub fn render(view: &FormView) -> String {
    let options: String = Operation::ALL
        .iter()
        .map(|op| {
            let selected = if view.operation == op.as_str() {
                " selected"
            } else {
                ""
            };
            format!(
                "        <option value=\"{}\"{}>{}</option>\n",
                op.as_str(),
                selected,
                op.label()
            )
        })
        .collect();

    let outcome = match (&view.error, &view.result) {
        (Some(error), _) => format!(
            "    <div class=\"error\"><strong>Error:</strong> {}</div>\n",
            escape_html(error)
        ),
        (None, Some(result)) => format!(
            "    <div class=\"result\"><strong>Result:</strong> {}</div>\n",
            escape_html(result)
        ),
        (None, None) => String::new(),
    };

    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Decimal Calculator</title>
  <style>
{style}
  </style>
</head>
<body>
  <h2>Simple Calculator</h2>

  <div class="card">
    <form method="POST">
      <label>First number</label>
      <input type="number" step="any" name="num1" value="{num1}" required>

      <label>Second number</label>
      <input type="number" step="any" name="num2" value="{num2}" required>

      <label>Operation</label>
      <select name="operation">
{options}      </select>

      <button type="submit">Calculate</button>
    </form>

{outcome}  </div>

  <p style="margin-top:14px; font-size: 12px; color: #666;">
    Tip: You can also use the API endpoint: <code>/api/calc?num1=10&amp;num2=5&amp;op=divide</code>
  </p>
</body>
</html>
"#,
        style = STYLE,
        num1 = escape_html(&view.num1),
        num2 = escape_html(&view.num2),
        options = options,
        outcome = outcome,
    )
}

/// Escape text for use in HTML content and double-quoted attributes
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let html = render(&FormView::empty());
        assert!(html.contains(r#"name="num1" value="""#));
        assert!(html.contains(r#"<option value="add" selected>Add</option>"#));
        assert!(html.contains(r#"<option value="divide">Divide</option>"#));
        assert!(!html.contains("Result:"));
        assert!(!html.contains("Error:"));
    }

    #[test]
    fn test_sticky_values_and_result() {
        let view = FormView {
            num1: "10".to_string(),
            num2: "5".to_string(),
            operation: "divide".to_string(),
            result: Some("2".to_string()),
            error: None,
        };
        let html = render(&view);
        assert!(html.contains(r#"name="num1" value="10""#));
        assert!(html.contains(r#"name="num2" value="5""#));
        assert!(html.contains(r#"<option value="divide" selected>Divide</option>"#));
        assert!(html.contains(r#"<option value="add">Add</option>"#));
        assert!(html.contains("<strong>Result:</strong> 2</div>"));
    }

    #[test]
    fn test_error_hides_result() {
        let view = FormView {
            result: Some("5".to_string()),
            error: Some("Cannot divide by zero".to_string()),
            ..FormView::empty()
        };
        let html = render(&view);
        assert!(html.contains("<strong>Error:</strong> Cannot divide by zero"));
        assert!(!html.contains("Result:"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let view = FormView {
            num1: r#""><script>alert(1)</script>"#.to_string(),
            ..FormView::empty()
        };
        let html = render(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b<c>'d\""), "a&amp;b&lt;c&gt;&#x27;d&quot;");
        assert_eq!(escape_html("12.5"), "12.5");
    }
}
