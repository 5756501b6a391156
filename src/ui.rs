use crate::models::{Member, Role, Roster};

/// Placeholders appear once each, in this order. The template is cut at
/// each one so member text is never searched for a later placeholder.
const TABLE_SLOTS: [(&str, Role); 3] = [
    ("{{TRAINEE_ROWS}}", Role::Trainee),
    ("{{COMPLETED_ROWS}}", Role::Completed),
    ("{{OFFICIAL_ROWS}}", Role::Official),
];

pub fn render_index(roster: &Roster) -> String {
    let mut out = String::with_capacity(INDEX_HTML.len());
    let mut rest = INDEX_HTML;
    for (placeholder, role) in TABLE_SLOTS {
        if let Some((head, tail)) = rest.split_once(placeholder) {
            out.push_str(head);
            out.push_str(&render_rows(&roster.list(role)));
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

/// Column order matches the table headers: name, recruited, instagram,
/// prints, status.
pub fn render_rows(members: &[Member]) -> String {
    members
        .iter()
        .map(|member| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&member.name),
                member.recruited,
                escape_html(&member.instagram),
                member.prints,
                escape_html(&member.status),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
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

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Team Roster</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #23262b;
      --muted: #6f6a62;
      --accent: #2f4858;
      --accent-2: #ff6b4a;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #e9eef2 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    section {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px 28px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    h2 {
      margin: 0 0 14px;
      font-size: 1.2rem;
      color: var(--accent);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input,
    select {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    button {
      font: inherit;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    button.secondary {
      background: var(--accent-2);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .tables {
      display: grid;
      gap: 24px;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Team Roster</h1>
    </header>

    <section>
      <h2>Sign in</h2>
      <form id="loginForm" method="post" action="/login/form">
        <label>Login
          <input id="login" name="login" type="text" autocomplete="username" />
        </label>
        <label>Password
          <input id="password" name="password" type="password" autocomplete="current-password" />
        </label>
        <button type="submit">Sign in</button>
      </form>
    </section>

    <section>
      <h2>Add member</h2>
      <form id="memberForm" method="post" action="/members">
        <label>Name
          <input id="name" name="name" type="text" required />
        </label>
        <label>Team
          <select id="role" name="role">
            <option value="trainee">Trainee</option>
            <option value="completed">Completed</option>
            <option value="official">Official</option>
          </select>
        </label>
        <button class="secondary" type="submit">Add</button>
      </form>
    </section>

    <div class="tables">
      <section>
        <h2>Trainees</h2>
        <table id="traineeTable">
          <thead>
            <tr><th>Name</th><th>Recruited</th><th>Instagram</th><th>Prints</th><th>Status</th></tr>
          </thead>
          <tbody>
{{TRAINEE_ROWS}}
          </tbody>
        </table>
      </section>

      <section>
        <h2>Completed</h2>
        <table id="completedTable">
          <thead>
            <tr><th>Name</th><th>Recruited</th><th>Instagram</th><th>Prints</th><th>Status</th></tr>
          </thead>
          <tbody>
{{COMPLETED_ROWS}}
          </tbody>
        </table>
      </section>

      <section>
        <h2>Officials</h2>
        <table id="officialsTable">
          <thead>
            <tr><th>Name</th><th>Recruited</th><th>Instagram</th><th>Prints</th><th>Status</th></tr>
          </thead>
          <tbody>
{{OFFICIAL_ROWS}}
          </tbody>
        </table>
      </section>
    </div>
  </main>

  <script>
    document.addEventListener('DOMContentLoaded', () => {
      const loginForm = document.getElementById('loginForm');
      const loginInput = document.getElementById('login');
      const passwordInput = document.getElementById('password');
      const memberForm = document.getElementById('memberForm');

      const bodies = {
        '/get_trainees': document.querySelector('#traineeTable tbody'),
        '/get_completed': document.querySelector('#completedTable tbody'),
        '/get_officials': document.querySelector('#officialsTable tbody')
      };

      const escapeHtml = (value) =>
        String(value ?? '')
          .replace(/&/g, '&amp;')
          .replace(/</g, '&lt;')
          .replace(/>/g, '&gt;')
          .replace(/"/g, '&quot;')
          .replace(/'/g, '&#39;');

      const renderRows = (members) =>
        members
          .map((m) => `<tr><td>${escapeHtml(m.name)}</td><td>${escapeHtml(m.recruited)}</td><td>${escapeHtml(m.instagram)}</td><td>${escapeHtml(m.prints)}</td><td>${escapeHtml(m.status)}</td></tr>`)
          .join('');

      const postJson = async (url, payload) => {
        const res = await fetch(url, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }
        return res.json();
      };

      const loadTable = async (url) => {
        const res = await fetch(url);
        if (!res.ok) {
          throw new Error('Unable to load ' + url);
        }
        bodies[url].innerHTML = renderRows(await res.json());
      };

      const updateTables = () => {
        Object.keys(bodies).forEach((url) => {
          loadTable(url).catch((err) => alert(err.message));
        });
      };

      loginForm.addEventListener('submit', (event) => {
        event.preventDefault();
        const login = loginInput.value.trim();
        const password = passwordInput.value.trim();

        if (!login || !password) {
          alert('Please fill in all fields!');
          return;
        }

        postJson('/login', { login, password })
          .then((data) => alert(data.message))
          .catch((err) => alert(err.message));
      });

      memberForm.addEventListener('submit', (event) => {
        event.preventDefault();
        const name = document.getElementById('name').value;
        const role = document.getElementById('role').value;

        postJson('/add_member', { name, role })
          .then((data) => {
            if (data.success) {
              updateTables();
              memberForm.reset();
            } else {
              alert('Error adding member: ' + data.error);
            }
          })
          .catch((err) => alert(err.message));
      });

      updateTables();
    });
  </script>
</body>
</html>
"##;
