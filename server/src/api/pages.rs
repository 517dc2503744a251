//! Inline HTML pages: the creation form, the iframe viewer, and the 404 page.

use crate::slug::SlugRecord;

/// The slug creation form served at `/`.
pub fn home_page() -> &'static str {
    HOME_PAGE
}

/// Full-viewport iframe embed of the target URL, titled by display name.
pub fn viewer_page(record: &SlugRecord) -> String {
    let name = escape_html(&record.name);
    let url = escape_html(&record.url);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name}</title>
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    html, body {{ width: 100%; height: 100%; overflow: hidden; }}
    iframe {{ width: 100%; height: 100%; border: 0; }}
  </style>
</head>
<body>
  <iframe src="{url}"
          title="{name}"
          allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
          allowfullscreen>
  </iframe>
</body>
</html>"#
    )
}

/// Styled 404 page for unknown slugs.
pub fn not_found_page() -> &'static str {
    NOT_FOUND_PAGE
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Slug Generator - Apps Script URL Shortener</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
      background: linear-gradient(135deg, #f5f7fa 0%, #e4e9f2 100%);
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 20px;
    }
    .container { width: 100%; max-width: 600px; }
    .header { text-align: center; margin-bottom: 40px; }
    h1 { font-size: 32px; font-weight: 700; color: #1f2937; }
    .subtitle { color: #6b7280; margin-top: 8px; }
    .card {
      background: white;
      border-radius: 16px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
      padding: 40px;
      border: 1px solid #e5e7eb;
    }
    .form-group { margin-bottom: 24px; }
    label { display: block; font-weight: 600; color: #374151; margin-bottom: 8px; font-size: 14px; }
    input {
      width: 100%;
      padding: 12px 16px;
      border: 2px solid #e5e7eb;
      border-radius: 8px;
      font-size: 15px;
      font-family: inherit;
    }
    input:focus {
      outline: none;
      border-color: #4285F4;
      box-shadow: 0 0 0 3px rgba(66, 133, 244, 0.1);
    }
    .help-text { margin-top: 6px; font-size: 12px; color: #6b7280; line-height: 1.5; }
    .help-text code {
      background: #f3f4f6;
      padding: 2px 6px;
      border-radius: 4px;
      font-family: 'Monaco', 'Courier New', monospace;
      font-size: 11px;
    }
    .btn {
      width: 100%;
      padding: 14px;
      background: linear-gradient(135deg, #4285F4 0%, #34A853 100%);
      color: white;
      border: none;
      border-radius: 8px;
      font-size: 16px;
      font-weight: 600;
      cursor: pointer;
      font-family: inherit;
    }
    .btn:disabled { opacity: 0.6; cursor: not-allowed; }
    .result {
      display: none;
      margin-top: 24px;
      padding: 24px;
      background: linear-gradient(135deg, #d1fae5 0%, #dbeafe 100%);
      border-radius: 12px;
      border: 2px solid #34A853;
    }
    .result.active { display: block; }
    .result-title { font-weight: 600; color: #047857; margin-bottom: 16px; }
    .result-item { margin-bottom: 12px; }
    .result-label { font-size: 13px; font-weight: 600; color: #374151; margin-bottom: 6px; }
    .result-value { display: flex; gap: 8px; }
    .code {
      flex: 1;
      padding: 12px;
      background: white;
      border: 1px solid #d1d5db;
      border-radius: 6px;
      font-family: 'Monaco', 'Courier New', monospace;
      font-size: 14px;
      color: #34A853;
      overflow-x: auto;
    }
    .copy-btn {
      padding: 10px 16px;
      background: white;
      border: 1px solid #d1d5db;
      border-radius: 6px;
      cursor: pointer;
      font-size: 14px;
      color: #374151;
    }
    .copy-btn.copied { background: #34A853; color: white; border-color: #34A853; }
    .error {
      display: none;
      margin-top: 16px;
      padding: 16px;
      background: #fee2e2;
      border: 1px solid #fca5a5;
      border-radius: 8px;
      color: #991b1b;
      font-size: 14px;
    }
    .error.active { display: block; }
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Slug Generator</h1>
      <p class="subtitle">Generate custom URLs for your Google Apps Script web apps</p>
    </div>

    <div class="card">
      <form id="slugForm">
        <div class="form-group">
          <label for="appName">App name</label>
          <input type="text" id="appName" placeholder="Example: My Awesome App" required>
          <p class="help-text">The slug is derived automatically from this name</p>
        </div>

        <div class="form-group">
          <label for="appUrl">Apps Script web app deployment URL</label>
          <input type="url" id="appUrl" placeholder="https://script.google.com/macros/s/.../exec" required>
          <p class="help-text">Use the <strong>deployment</strong> URL containing <code>/macros/s/</code> and ending in <code>/exec</code></p>
        </div>

        <div class="error" id="error"></div>

        <button type="submit" class="btn" id="submitBtn">Generate Slug</button>
      </form>

      <div class="result" id="result">
        <div class="result-title">Slug created!</div>
        <div class="result-item">
          <div class="result-label">Slug:</div>
          <div class="result-value"><code class="code" id="slugValue"></code></div>
        </div>
        <div class="result-item">
          <div class="result-label">Custom URL:</div>
          <div class="result-value">
            <code class="code" id="urlValue"></code>
            <button class="copy-btn" id="copyBtn">Copy</button>
          </div>
        </div>
      </div>
    </div>
  </div>

  <script>
    const form = document.getElementById('slugForm');
    const submitBtn = document.getElementById('submitBtn');
    const result = document.getElementById('result');
    const error = document.getElementById('error');
    const copyBtn = document.getElementById('copyBtn');

    form.addEventListener('submit', async (e) => {
      e.preventDefault();

      const name = document.getElementById('appName').value;
      const url = document.getElementById('appUrl').value;

      error.classList.remove('active');
      result.classList.remove('active');
      submitBtn.disabled = true;

      try {
        const response = await fetch('/api/create', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ name, url })
        });

        const data = await response.json();

        if (!response.ok) {
          throw new Error(data.error || 'Failed to create slug');
        }

        document.getElementById('slugValue').textContent = data.slug;
        document.getElementById('urlValue').textContent = data.url;
        result.classList.add('active');
        form.reset();
      } catch (err) {
        error.textContent = err.message;
        error.classList.add('active');
      } finally {
        submitBtn.disabled = false;
      }
    });

    copyBtn.addEventListener('click', async () => {
      await navigator.clipboard.writeText(document.getElementById('urlValue').textContent);
      copyBtn.textContent = 'Copied!';
      copyBtn.classList.add('copied');
      setTimeout(() => {
        copyBtn.textContent = 'Copy';
        copyBtn.classList.remove('copied');
      }, 2000);
    });
  </script>
</body>
</html>"#;

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Slug Not Found</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
      background: linear-gradient(135deg, #f5f7fa 0%, #e4e9f2 100%);
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 20px;
    }
    .container { text-align: center; max-width: 500px; }
    .card {
      background: white;
      border-radius: 16px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
      padding: 48px 40px;
      border: 1px solid #e5e7eb;
    }
    h1 { font-size: 24px; font-weight: 700; color: #1f2937; margin-bottom: 12px; }
    p { color: #6b7280; margin-bottom: 32px; line-height: 1.6; }
    .btn {
      display: inline-block;
      padding: 12px 24px;
      background: linear-gradient(135deg, #4285F4 0%, #34A853 100%);
      color: white;
      text-decoration: none;
      border-radius: 8px;
      font-weight: 600;
    }
  </style>
</head>
<body>
  <div class="container">
    <div class="card">
      <h1>Slug Not Found</h1>
      <p>Sorry, the slug you are looking for does not exist.</p>
      <a href="/" class="btn">Back to Home</a>
    </div>
  </div>
</body>
</html>"#;
