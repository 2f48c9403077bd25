use crate::loader::Record;

/// One headline metric for the overview grid.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SummaryItem {
    pub label: String,
    pub value: String,
}

/// Probes a fixed set of well-known paths in priority order. Every probe is
/// optional: a record missing all of them yields an empty list, never an
/// error.
pub fn extract_summary(rec: &Record) -> Vec<SummaryItem> {
    let mut items: Vec<SummaryItem> = Vec::new();
    if let Some(v) = probe(rec, "System", "ComputerName") {
        items.push(SummaryItem { label: "Computer".to_string(), value: v });
    }
    if let Some(v) = probe(rec, "System", "OSVersion") {
        items.push(SummaryItem { label: "Operating System".to_string(), value: v });
    }
    if let Some(v) = probe(rec, "Memory", "TotalRAM") {
        items.push(SummaryItem { label: "Total RAM".to_string(), value: v });
    }
    if let Some(v) = probe(rec, "CPU", "Processor1") {
        // Drop parenthetical clock-speed suffixes like "(8 cores @ 3.6GHz)".
        let name = v.split('(').next().unwrap_or(&v).trim().to_string();
        items.push(SummaryItem { label: "Processor".to_string(), value: name });
    }
    if let Some(serde_json::Value::Object(services)) = rec.get("Services") {
        let running = services.values().filter(|v| v.as_str() == Some("Running")).count();
        items.push(SummaryItem {
            label: "Services Status".to_string(),
            value: format!("{}/{} Running", running, services.len()),
        });
    }
    items
}

fn probe(rec: &Record, category: &str, key: &str) -> Option<String> {
    let props = rec.get(category)?.as_object()?;
    props.get(key).map(value_text)
}

/// Textual form of a scalar: strings verbatim, everything else via the JSON
/// representation.
pub fn value_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_record_yields_empty_summary() {
        assert!(extract_summary(&record("{}")).is_empty());
    }

    #[test]
    fn missing_probes_are_skipped_silently() {
        let rec = record("{\"Disk\":{\"C\":\"500GB\"}}");
        assert!(extract_summary(&rec).is_empty());
    }

    #[test]
    fn processor_name_truncated_at_parenthesis() {
        let rec = record("{\"CPU\":{\"Processor1\":\"Intel Core i7-9700K (8 cores @ 3.6GHz)\"}}");
        let items = extract_summary(&rec);
        assert_eq!(items[0].label, "Processor");
        assert_eq!(items[0].value, "Intel Core i7-9700K");
    }

    #[test]
    fn service_count_aggregates_running_over_total() {
        let rec = record("{\"Services\":{\"Spooler\":\"Running\",\"Fax\":\"Stopped\",\"BITS\":\"Running\"}}");
        let items = extract_summary(&rec);
        assert_eq!(items[0].label, "Services Status");
        assert_eq!(items[0].value, "2/3 Running");
    }

    #[test]
    fn probes_emit_in_priority_order() {
        let rec = record(
            "{\"Services\":{\"A\":\"Running\"},\"Memory\":{\"TotalRAM\":\"16 GB\"},\"System\":{\"OSVersion\":\"10.0\",\"ComputerName\":\"PC1\"}}",
        );
        let items = extract_summary(&rec);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Computer", "Operating System", "Total RAM", "Services Status"]);
    }

    #[test]
    fn numeric_values_use_default_representation() {
        let rec = record("{\"Memory\":{\"TotalRAM\":16384}}");
        let items = extract_summary(&rec);
        assert_eq!(items[0].value, "16384");
    }
}
