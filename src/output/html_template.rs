//! HTML template constants for the directory tree pages.

/// Document head with styles, up to the opening of the page container.
/// `{title}` is replaced with the page title.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-link: #2563eb;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1000px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; }
        a { color: var(--color-link); text-decoration: none; }
        a:hover { text-decoration: underline; }
        .current-path { margin-bottom: 1.5rem; color: var(--color-text-muted); }
        .current-path .path { font-family: 'SF Mono', SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace; color: var(--color-text); }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border: 1px solid var(--color-border); }
        th, td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.875rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        td { font-size: 0.875rem; }
        td.number, th.number { text-align: right; font-variant-numeric: tabular-nums; }
        tbody tr:hover { background: var(--color-bg); }
        .icon { display: inline-block; width: 1.5rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
"#;

/// Closes the page opened by [`HTML_HEADER`].
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>sloc-scan</strong>
        </div>
    </div>
</body>
</html>
"#;

pub const FOLDER_ICON: &str = "&#x1F4C1;";
pub const FILE_ICON: &str = "&#x1F4C4;";
