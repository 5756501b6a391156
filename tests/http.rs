use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct AddMemberResponse {
    success: bool,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: bool,
    message: String,
}

#[derive(Debug, Deserialize)]
struct MemberRow {
    name: String,
    recruited: String,
    instagram: String,
    prints: u32,
    status: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "team_roster_http_{tag}_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/get_trainees")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(data_path: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_team_roster"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("ROSTER_ADMIN_LOGIN", "admin")
        .env("ROSTER_ADMIN_PASSWORD", "admin123")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(&unique_data_path("shared")).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn list(client: &Client, base_url: &str, endpoint: &str) -> Vec<MemberRow> {
    client
        .get(format!("{base_url}{endpoint}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add(client: &Client, base_url: &str, body: serde_json::Value) -> AddMemberResponse {
    let response = client
        .post(format!("{base_url}/add_member"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_add_member_appends_to_trainee_table() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list(&client, &server.base_url, "/get_trainees").await;

    let added = add(
        &client,
        &server.base_url,
        serde_json::json!({ "name": "Kelly", "role": "trainee" }),
    )
    .await;
    assert!(added.success);
    assert!(added.error.is_none());

    let after = list(&client, &server.base_url, "/get_trainees").await;
    assert_eq!(after.len(), before.len() + 1);
    let last = after.last().unwrap();
    assert_eq!(last.name, "Kelly");
    assert_eq!(last.instagram, "");
    assert_eq!(last.prints, 0);
    assert_eq!(last.status, "in training");
    assert_eq!(last.recruited.len(), "2026-01-01".len());
}

#[tokio::test]
async fn http_add_member_routes_by_role() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let officials_before = list(&client, &server.base_url, "/get_officials").await.len();
    let completed_before = list(&client, &server.base_url, "/get_completed").await.len();

    let added = add(
        &client,
        &server.base_url,
        serde_json::json!({ "name": "Rita", "role": "official" }),
    )
    .await;
    assert!(added.success);

    assert_eq!(
        list(&client, &server.base_url, "/get_officials").await.len(),
        officials_before + 1
    );
    assert_eq!(
        list(&client, &server.base_url, "/get_completed").await.len(),
        completed_before
    );
}

#[tokio::test]
async fn http_add_member_failure_carries_error_text() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let missing_name = add(
        &client,
        &server.base_url,
        serde_json::json!({ "name": "  ", "role": "trainee" }),
    )
    .await;
    assert!(!missing_name.success);
    assert_eq!(missing_name.error.as_deref(), Some("name is required"));

    let unknown_team = add(
        &client,
        &server.base_url,
        serde_json::json!({ "name": "Lia", "role": "referees" }),
    )
    .await;
    assert!(!unknown_team.success);
    assert_eq!(
        unknown_team.error.as_deref(),
        Some("team does not exist: referees")
    );
}

#[tokio::test]
async fn http_login_reports_outcome() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let login = |login: &'static str, password: &'static str| {
        let client = client.clone();
        let url = format!("{}/login", server.base_url);
        async move {
            client
                .post(url)
                .json(&serde_json::json!({ "login": login, "password": password }))
                .send()
                .await
                .unwrap()
                .json::<LoginResponse>()
                .await
                .unwrap()
        }
    };

    let empty = login("admin", "").await;
    assert!(!empty.success);
    assert_eq!(empty.message, "Please fill in all fields!");

    let wrong = login("admin", "letmein").await;
    assert!(!wrong.success);
    assert_eq!(wrong.message, "Invalid login or password!");

    let ok = login("admin", "admin123").await;
    assert!(ok.success);
    assert_eq!(ok.message, "Login successful!");
}

#[tokio::test]
async fn http_index_serves_forms_and_tables() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    for id in ["memberForm", "loginForm", "traineeTable", "completedTable", "officialsTable"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[tokio::test]
async fn http_roster_survives_restart() {
    let _guard = TEST_LOCK.lock().await;
    let data_path = unique_data_path("restart");
    let client = Client::new();

    {
        let server = spawn_server(&data_path).await;
        let added = add(
            &client,
            &server.base_url,
            serde_json::json!({ "name": "Nina", "role": "completed" }),
        )
        .await;
        assert!(added.success);
    }

    let server = spawn_server(&data_path).await;
    let completed = list(&client, &server.base_url, "/get_completed").await;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].name, "Nina");
    assert_eq!(completed[0].status, "completed");

    drop(server);
    let _ = std::fs::remove_file(&data_path);
}
