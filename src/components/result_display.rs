//! Result Display Component
//!
//! Pretty-prints an opaque JSON payload under a small title. Scraping
//! results have no schema the dashboard knows about, so they are rendered
//! verbatim.

use leptos::*;
use serde_json::Value;

/// Render an opaque JSON value for the operator.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Titled block showing a pretty-printed JSON payload.
#[component]
pub fn ResultDisplay(
    title: &'static str,
    #[prop(into)]
    data: Signal<Option<Value>>,
) -> impl IntoView {
    view! {
        {move || {
            data.get().map(|value| view! {
                <div class="mt-3">
                    <h5 class="text-sm font-semibold text-gray-300 mb-1">{title}</h5>
                    <pre class="bg-gray-900 border border-gray-700 rounded-lg p-3 text-xs
                                text-gray-200 overflow-x-auto">
                        <code>{pretty_json(&value)}</code>
                    </pre>
                </div>
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_indents_objects() {
        let value = json!({"message": "ok", "output_file": "emails.csv"});
        let text = pretty_json(&value);
        assert!(text.contains("\n"));
        assert!(text.contains("\"message\": \"ok\""));
    }

    #[test]
    fn test_pretty_json_renders_null() {
        assert_eq!(pretty_json(&Value::Null), "null");
    }
}
