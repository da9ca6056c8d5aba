//! Page shell the rendered SVG is embedded into.
//!
//! Placeholders: `{{TITLE}}` (escaped text), `{{STATS}}` (stat pills) and
//! `{{SVG}}` (the scene). Filled in by [`crate::render::render_page`].

pub const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{TITLE}}</title>
<style>
  :root {
    --bg: #ffffff; --panel: #f5f5f5; --border: #dddddd;
    --text: #222222; --muted: #777777; --accent: #c62828;
    --font: 'DejaVu Sans', Helvetica, Arial, sans-serif;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: var(--font); font-size: 13px; }

  header {
    display: flex; align-items: center; gap: 12px; flex-wrap: wrap;
    padding: 10px 20px; border-bottom: 1px solid var(--border);
    background: var(--panel);
  }
  .stat-pill {
    background: var(--bg); border: 1px solid var(--border);
    border-radius: 4px; padding: 4px 10px; font-size: 12px;
  }
  .stat-pill span { color: var(--accent); font-weight: bold; }

  main { display: flex; justify-content: center; padding: 16px; }
  svg { border: 1px solid var(--border); }
</style>
</head>
<body>
<header>
{{STATS}}
</header>
<main>
{{SVG}}
</main>
</body>
</html>
"#;
