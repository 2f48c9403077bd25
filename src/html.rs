use crate::loader::Record;
use crate::sections::{build_sections, html_escape};
use crate::summary::extract_summary;

/// Renders the complete self-contained report. Deterministic for a given
/// record, display name, and timestamp string.
pub fn render_html(rec: &Record, display_name: &str, timestamp: &str) -> String {
    let mut s = String::new();
    s.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"UTF-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"><title>System Report - ");
    s.push_str(&html_escape(display_name));
    s.push_str("</title><style>");
    s.push_str("*{margin:0;padding:0;box-sizing:border-box} body{font-family:'Segoe UI',Tahoma,Geneva,Verdana,sans-serif;line-height:1.6;color:#333;background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);min-height:100vh;padding:20px} .container{max-width:1200px;margin:0 auto;background:#ffffff;border-radius:15px;box-shadow:0 20px 40px rgba(0,0,0,0.1);overflow:hidden} .header{background:linear-gradient(135deg,#2c3e50 0%,#34495e 100%);color:white;padding:40px 30px;text-align:center} .header h1{font-size:2.5em;margin-bottom:10px;font-weight:300} .header .subtitle{font-size:1.1em;opacity:.9;margin-bottom:20px} .header .timestamp{background:rgba(255,255,255,0.1);padding:8px 16px;border-radius:20px;display:inline-block;font-size:.9em} .content{padding:30px}");
    s.push_str(" .section{margin-bottom:25px;border-radius:10px;overflow:hidden;box-shadow:0 4px 6px rgba(0,0,0,0.05);border:1px solid #e1e8ed} .section-header{background:linear-gradient(135deg,#3498db 0%,#2980b9 100%);color:white;padding:20px 25px;cursor:pointer;font-size:1.2em;font-weight:600;display:flex;justify-content:space-between;align-items:center;transition:all .3s ease} .section-header:hover{background:linear-gradient(135deg,#2980b9 0%,#3498db 100%);transform:translateY(-1px)} .section-header.active{background:linear-gradient(135deg,#27ae60 0%,#2ecc71 100%)} .toggle-icon{font-size:1.2em;transition:transform .3s ease} .toggle-icon.rotated{transform:rotate(180deg)} .section-content{padding:0;max-height:0;overflow:hidden;transition:all .4s ease;background:#f8f9fa} .section-content.expanded{padding:25px;max-height:2000px}");
    s.push_str(" .property{display:flex;margin-bottom:15px;padding:12px 16px;background:white;border-radius:8px;border-left:4px solid #3498db;transition:all .2s ease} .property:hover{box-shadow:0 2px 8px rgba(0,0,0,0.1);transform:translateX(2px)} .property-name{font-weight:600;min-width:200px;color:#2c3e50;margin-right:20px} .property-value{color:#34495e;flex:1;word-break:break-word} .status-running{color:#27ae60;font-weight:bold;padding:4px 8px;background:#d5f4e6;border-radius:12px;font-size:.9em} .status-stopped{color:#e74c3c;font-weight:bold;padding:4px 8px;background:#fdeaea;border-radius:12px;font-size:.9em}");
    s.push_str(" .summary{background:linear-gradient(135deg,#f39c12 0%,#e67e22 100%);color:white;padding:20px;margin-bottom:30px;border-radius:10px;text-align:center} .summary-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:20px;margin-top:15px} .summary-item{background:rgba(255,255,255,0.1);padding:15px;border-radius:8px} .summary-item h4{margin-bottom:5px;font-size:.9em;opacity:.9} .summary-item .value{font-size:1.2em;font-weight:bold} .footer{text-align:center;padding:30px;background:#f8f9fa;color:#7f8c8d;border-top:1px solid #e1e8ed} .expand-all{background:#3498db;color:white;border:none;padding:12px 24px;border-radius:25px;cursor:pointer;font-size:1em;margin-bottom:20px;transition:all .3s ease} .expand-all:hover{background:#2980b9;transform:translateY(-2px);box-shadow:0 4px 8px rgba(0,0,0,0.2)} @media (max-width:768px){.property{flex-direction:column}.property-name{min-width:auto;margin-bottom:8px;margin-right:0}.header h1{font-size:2em}.content{padding:20px}}");
    s.push_str("</style></head><body><div class=\"container\">");
    s.push_str("<div class=\"header\"><h1>🖥️ System Information Report</h1><p class=\"subtitle\">Computer: <strong>");
    s.push_str(&html_escape(display_name));
    s.push_str("</strong></p><div class=\"timestamp\">Generated: ");
    s.push_str(&html_escape(timestamp));
    s.push_str("</div></div><div class=\"content\">");
    s.push_str("<button class=\"expand-all\" onclick=\"toggleAllSections()\">📂 Expand All Sections</button>");

    let summary = extract_summary(rec);
    if !summary.is_empty() {
        s.push_str("<div class=\"summary\"><h3>📊 System Overview</h3><div class=\"summary-grid\">");
        for item in &summary {
            s.push_str(&format!(
                "<div class=\"summary-item\"><h4>{}</h4><div class=\"value\">{}</div></div>",
                html_escape(&item.label),
                html_escape(&item.value)
            ));
        }
        s.push_str("</div></div>");
    }

    for sec in build_sections(rec) {
        s.push_str("<div class=\"section\"><div class=\"section-header\" onclick=\"toggleSection(this)\"><span>");
        s.push_str(&format!("{} {} Information", sec.icon, html_escape(&sec.name)));
        s.push_str("</span><span class=\"toggle-icon\">▼</span></div><div class=\"section-content\">");
        for (name, value) in &sec.properties {
            s.push_str(&format!(
                "<div class=\"property\"><div class=\"property-name\">{}:</div><div class=\"property-value\">{}</div></div>",
                html_escape(name),
                value
            ));
        }
        s.push_str("</div></div>");
    }

    s.push_str("</div><div class=\"footer\"><p>System inventory report</p><p>Generated by sysreport</p></div></div>");
    s.push_str("<script>let allExpanded=false;function toggleSection(header){const content=header.nextElementSibling;const icon=header.querySelector('.toggle-icon');header.classList.toggle('active');content.classList.toggle('expanded');icon.classList.toggle('rotated');}function toggleAllSections(){const headers=document.querySelectorAll('.section-header');const button=document.querySelector('.expand-all');headers.forEach(header=>{const content=header.nextElementSibling;const icon=header.querySelector('.toggle-icon');if(!allExpanded){header.classList.add('active');content.classList.add('expanded');icon.classList.add('rotated');}else{header.classList.remove('active');content.classList.remove('expanded');icon.classList.remove('rotated');}});allExpanded=!allExpanded;button.textContent=allExpanded?'📁 Collapse All Sections':'📂 Expand All Sections';}document.addEventListener('DOMContentLoaded',function(){const first=document.querySelector('.section-header');if(first){toggleSection(first);}});</script></body></html>");
    s
}
