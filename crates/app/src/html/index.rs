pub(crate) const HOME_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Camera Preview</title>
  <style>
    :root {
      --bg: #0b1120;
      --panel: #151e32;
      --accent: #38bdf8;
      --text: #e2e8f0;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      gap: 1.25rem;
      background: var(--bg);
      color: var(--text);
      font-family: system-ui, sans-serif;
    }

    h1 {
      margin: 0;
      font-size: 1.4rem;
      font-weight: 600;
      letter-spacing: 0.04em;
    }

    .feed {
      background: var(--panel);
      border: 1px solid rgba(56, 189, 248, 0.3);
      border-radius: 12px;
      padding: 0.75rem;
      box-shadow: 0 0 24px rgba(56, 189, 248, 0.12);
    }

    .feed img {
      display: block;
      max-width: min(90vw, 960px);
      border-radius: 8px;
    }

    nav a {
      color: var(--accent);
      margin: 0 0.6rem;
      text-decoration: none;
    }

    nav a:hover {
      text-decoration: underline;
    }
  </style>
</head>

<body>
  <h1>Live camera</h1>
  <div class="feed">
    <img src="/video" alt="live camera stream" />
  </div>
  <nav>
    <a href="/logs">Logs</a>
    <a href="/status">Status</a>
  </nav>
</body>

</html>
"#;
