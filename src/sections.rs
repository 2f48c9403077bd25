use crate::loader::Record;
use crate::summary::value_text;

/// One collapsible block of the report: a category with its formatted
/// properties, in the record's own iteration order.
#[derive(Debug, Clone)]
#[derive(serde::Serialize)]
pub struct Section {
    pub name: String,
    pub icon: &'static str,
    pub properties: Vec<(String, String)>,
}

pub fn build_sections(rec: &Record) -> Vec<Section> {
    rec.iter()
        .map(|(category, value)| {
            let properties = match value.as_object() {
                Some(props) => props
                    .iter()
                    .map(|(k, v)| (derive_display_key(k), format_value(category, v)))
                    .collect(),
                // A category whose value is not a mapping renders empty.
                None => Vec::new(),
            };
            Section { name: category.clone(), icon: icon_for(category), properties }
        })
        .collect()
}

/// Exact-match icon table; unrecognized categories get the generic clipboard.
fn icon_for(category: &str) -> &'static str {
    match category {
        "System" => "🖥️",
        "Network" => "🌐",
        "CPU" => "⚡",
        "Memory" => "🧠",
        "Disk" => "💾",
        "Graphics" => "🎮",
        "Software" => "📦",
        "Services" => "⚙️",
        _ => "📋",
    }
}

/// Strips the characters '1'-'5', turns underscores into spaces, trims.
/// Purely textual: "Processor1" becomes "Processor", but an embedded digit
/// like the 15 in "Core15Threads" is lost too.
pub fn derive_display_key(key: &str) -> String {
    let cleaned: String = key
        .chars()
        .filter(|c| !('1'..='5').contains(c))
        .map(|c| if c == '_' { ' ' } else { c })
        .collect();
    cleaned.trim().to_string()
}

/// Service state renders as a badge on the literal value "Running"; this rule
/// applies only inside a category named exactly "Services".
pub fn format_value(category: &str, v: &serde_json::Value) -> String {
    let text = value_text(v);
    if category == "Services" {
        return if text == "Running" {
            format!("<span class=\"status-running\">✅ {}</span>", text)
        } else {
            format!("<span class=\"status-stopped\">❌ {}</span>", text)
        };
    }
    match v {
        serde_json::Value::String(s) => html_escape(s),
        _ => text,
    }
}

/// Ampersand first so already-escaped entities are not double-escaped.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_strips_digits_and_underscores() {
        assert_eq!(derive_display_key("Processor1"), "Processor");
        assert_eq!(derive_display_key("Total_RAM"), "Total RAM");
        assert_eq!(derive_display_key("Core15Threads"), "CoreThreads");
        assert_eq!(derive_display_key("Disk6"), "Disk6");
    }

    #[test]
    fn display_key_is_idempotent_without_digits() {
        for k in ["ComputerName", "OS Version", "Free Space"] {
            assert_eq!(derive_display_key(&derive_display_key(k)), derive_display_key(k));
        }
    }

    #[test]
    fn escape_is_single_pass_amp_first() {
        assert_eq!(html_escape("A & B < C"), "A &amp; B &lt; C");
        assert_eq!(html_escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn services_running_gets_positive_badge() {
        let v = serde_json::Value::String("Running".to_string());
        let out = format_value("Services", &v);
        assert!(out.contains("status-running"));
        assert!(out.contains("✅"));
    }

    #[test]
    fn services_other_value_gets_negative_badge() {
        let v = serde_json::Value::String("Stopped".to_string());
        let out = format_value("Services", &v);
        assert!(out.contains("status-stopped"));
        assert!(out.contains("❌ Stopped"));
    }

    #[test]
    fn running_outside_services_is_plain_text() {
        let v = serde_json::Value::String("Running".to_string());
        assert_eq!(format_value("Software", &v), "Running");
    }

    #[test]
    fn non_string_values_are_not_escaped() {
        assert_eq!(format_value("Memory", &serde_json::json!(16384)), "16384");
        assert_eq!(format_value("System", &serde_json::json!(true)), "true");
    }

    #[test]
    fn unknown_category_gets_fallback_icon() {
        let rec: Record = serde_json::from_str("{\"Peripherals\":{\"Mouse\":\"USB\"}}").unwrap();
        let sections = build_sections(&rec);
        assert_eq!(sections[0].icon, "📋");
    }

    #[test]
    fn section_order_and_count_match_record() {
        let rec: Record =
            serde_json::from_str("{\"Network\":{},\"System\":{\"ComputerName\":\"PC1\"}}").unwrap();
        let sections = build_sections(&rec);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Network");
        assert!(sections[0].properties.is_empty());
        assert_eq!(sections[1].name, "System");
    }

    #[test]
    fn non_mapping_category_renders_empty() {
        let rec: Record = serde_json::from_str("{\"System\":3}").unwrap();
        let sections = build_sections(&rec);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].properties.is_empty());
    }
}
