use pvalscan_core::model::DocumentStatements;

const HEADER: &str = "document,line,statement,p value,relation,raw value";

/// One row per statement; the p value column is empty when unparsed.
pub fn format_documents(documents: &[DocumentStatements]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for doc in documents {
        for s in &doc.statements {
            let line = s.line_number.to_string();
            let value = s.value.map(|v| v.to_string()).unwrap_or_default();
            let fields: [&str; 6] = [
                &doc.source,
                &line,
                &s.source_line,
                &value,
                s.operator.symbol(),
                &s.raw_value_text,
            ];
            let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }

    out
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
