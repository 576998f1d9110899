pub(crate) const LOGS_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Server Logs</title>
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
      gap: 1rem;
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

    #log {
      width: min(92vw, 1100px);
      min-height: 14rem;
      background: var(--panel);
      border: 1px solid rgba(56, 189, 248, 0.3);
      border-radius: 12px;
      padding: 1rem;
      font-family: ui-monospace, monospace;
      font-size: 0.85rem;
      line-height: 1.5;
      overflow-x: auto;
      white-space: nowrap;
    }

    a {
      color: var(--accent);
      text-decoration: none;
    }

    a:hover {
      text-decoration: underline;
    }
  </style>
</head>

<body>
  <h1>Server logs</h1>
  <div id="log">Loading…</div>
  <a href="/">Back to preview</a>
  <script>
    const log = document.getElementById("log");
    async function refresh() {
      try {
        const resp = await fetch("/logs/live");
        log.innerHTML = await resp.text();
      } catch (err) {
        log.textContent = "log fetch failed: " + err;
      }
    }
    refresh();
    setInterval(refresh, 1000);
  </script>
</body>

</html>
"#;
