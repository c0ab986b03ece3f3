//! Global CSS styles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #1f2326;
  --bg-raised: #2a2f33;
  --border: #3b4247;
  --text-primary: #f5f5f5;
  --text-muted: rgba(245, 245, 245, 0.6);
  --accent: #ff9900;
  --accent-hover: #ffad33;
  --valid: #4caf50;
  --danger: #ff4d4f;
  --font-sans: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  padding: 2rem;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
}

/* === Landing === */
.lander { text-align: center; padding: 4rem 0; }
.lander h2 { font-size: 2rem; font-weight: 600; }
.lander hr { border-color: var(--border); }
.orange-link { color: var(--accent); }
.lander-hint { color: var(--text-muted); font-size: 0.9rem; }

/* === Message table === */
.text-center { text-align: center; }
.toolbar { display: flex; justify-content: flex-end; margin-bottom: 1rem; }
.message-table { width: 100%; border-collapse: collapse; background: var(--bg-raised); }
.message-table th, .message-table td { padding: 0.75rem; border-bottom: 1px solid var(--border); text-align: left; }
.message-table .description { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; max-width: 32rem; }

/* === Form === */
.form-field { display: flex; flex-direction: column; gap: 0.5rem; }
.input-label { font-weight: 500; }
.input-field {
  background: var(--bg-raised);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 4px;
  padding: 0.75rem;
  font: inherit;
  resize: vertical;
}
.input-field.is-valid { border-color: var(--valid); }
.input-field.is-invalid { border-color: var(--danger); }
.input-hint { color: var(--text-muted); }
.form-actions { display: flex; flex-direction: row-reverse; gap: 1rem; margin-top: 1rem; }

/* === Buttons === */
.btn-primary {
  background: var(--accent);
  color: #111;
  border: none;
  border-radius: 4px;
  padding: 0.5rem 1rem;
  font: inherit;
  cursor: pointer;
}
.btn-primary:hover:not(:disabled) { background: var(--accent-hover); }
.btn-link { background: none; border: none; color: var(--accent); font: inherit; cursor: pointer; }
button:disabled { opacity: 0.5; cursor: not-allowed; }

/* === Feedback === */
.spinner {
  display: inline-block;
  width: 2rem;
  height: 2rem;
  border: 3px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
.spinner-sm { width: 1rem; height: 1rem; border-width: 2px; margin-right: 0.5rem; vertical-align: middle; }
@keyframes spin { to { transform: rotate(360deg); } }

.notice {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
  border: 1px solid var(--danger);
  border-radius: 4px;
  color: var(--danger);
}
.notice-dismiss { background: none; border: none; color: inherit; font-size: 1.25rem; cursor: pointer; }
"#;
