/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Full document with the sidebar on the left and `main` on the right.
pub fn page(title: &str, sidebar: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | BizDesk</title>
    <style>
{css}
    </style>
</head>
<body>
{sidebar}
    <main class="content">
{main}
    </main>
</body>
</html>"#,
        title = escape(title),
        css = CSS,
        sidebar = sidebar,
        main = main,
    )
}

const CSS: &str = r#"
        * { box-sizing: border-box; }
        body { margin: 0; display: flex; min-height: 100vh; font-family: system-ui, sans-serif; color: #1f2933; background: #f5f7fa; }
        .sidebar { width: 240px; background: #1f2933; color: #e4e7eb; padding: 16px 0; }
        .context { padding: 0 16px 16px; border-bottom: 1px solid #3e4c59; margin-bottom: 8px; }
        .context .company { font-weight: 600; font-size: 15px; }
        .context .detail { font-size: 12px; color: #9aa5b1; }
        .nav { list-style: none; margin: 0; padding: 0; }
        .nav a { display: flex; gap: 10px; align-items: center; padding: 8px 16px; color: inherit; text-decoration: none; }
        .nav a:hover { background: #323f4b; }
        .nav a.active { background: #3e4c59; border-left: 3px solid #47a3f3; }
        .content { flex: 1; padding: 24px 32px; }
        .toolbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; }
        table { width: 100%; border-collapse: collapse; background: #fff; }
        th, td { text-align: left; padding: 10px 12px; border-bottom: 1px solid #e4e7eb; font-size: 14px; }
        th { background: #f0f4f8; font-weight: 600; }
        td.amount { text-align: right; font-variant-numeric: tabular-nums; }
        .stage { padding: 2px 8px; border-radius: 10px; font-size: 12px; background: #e4e7eb; }
        .stage-won { background: #c6f7e2; }
        .stage-lost { background: #ffe3e3; }
        button { border: 1px solid #cbd2d9; background: #fff; border-radius: 4px; padding: 4px 10px; cursor: pointer; }
        button.primary { background: #2186eb; border-color: #2186eb; color: #fff; }
        button.danger { color: #cf1124; }
"#;
