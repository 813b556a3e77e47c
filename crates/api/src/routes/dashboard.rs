//! Dashboard Page Route

use axum::response::Html;

/// Render the main dashboard
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>GreenPulse - Emission Dashboard</title>
<style>
  body { font-family: system-ui, sans-serif; background: #0f1720; color: #e6edf3; margin: 0; padding: 2rem; }
  h1 { font-weight: 600; }
  .cards { display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 2rem; }
  .card { background: #1c2733; border-radius: 8px; padding: 1rem 1.5rem; min-width: 180px; }
  .card .label { font-size: 0.8rem; color: #8b98a5; text-transform: uppercase; }
  .card .value { font-size: 2rem; font-weight: 700; }
  .green { color: #3fb950; } .yellow { color: #d29922; } .red { color: #f85149; }
  #chart { display: flex; align-items: flex-end; gap: 3px; height: 180px; background: #1c2733; border-radius: 8px; padding: 1rem; }
  #chart .bar { flex: 1; background: #2f81f7; border-radius: 2px 2px 0 0; min-width: 8px; }
  #error { color: #f85149; margin-top: 1rem; }
</style>
</head>
<body>
<h1>GreenPulse</h1>
<div class="cards">
  <div class="card"><div class="label">Current score</div><div class="value" id="current-score">-</div><div id="current-status">-</div></div>
  <div class="card"><div class="label">Next hour</div><div class="value" id="pred-score">-</div><div id="pred-status">-</div></div>
  <div class="card"><div class="label">As of</div><div id="timestamp">-</div></div>
</div>
<div id="chart"></div>
<div id="error"></div>
<script>
async function refresh() {
  const errorBox = document.getElementById('error');
  try {
    const res = await fetch('/api/refresh-data');
    const data = await res.json();
    if (!data.success) { errorBox.textContent = data.error; return; }
    errorBox.textContent = '';

    const cur = document.getElementById('current-score');
    cur.textContent = data.current.score.toFixed(2);
    cur.className = 'value ' + data.current.color;
    document.getElementById('current-status').textContent = data.current.status;

    const pred = document.getElementById('pred-score');
    pred.textContent = data.prediction.score.toFixed(2);
    pred.className = 'value ' + data.prediction.color;
    document.getElementById('pred-status').textContent = data.prediction.status;

    document.getElementById('timestamp').textContent = data.current.timestamp;

    const chart = document.getElementById('chart');
    chart.innerHTML = '';
    for (const point of data.historical) {
      const bar = document.createElement('div');
      bar.className = 'bar';
      bar.style.height = (point.score * 10) + '%';
      bar.title = point.time + ' - ' + point.score.toFixed(2);
      chart.appendChild(bar);
    }
  } catch (e) {
    errorBox.textContent = 'Failed to refresh: ' + e;
  }
}
refresh();
setInterval(refresh, 30000);
</script>
</body>
</html>
"#;
