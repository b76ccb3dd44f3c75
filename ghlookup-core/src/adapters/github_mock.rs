//! Mock GitHub API server for testing
//!
//! A small HTTP server on a random local port that answers the two endpoints
//! the lookup form uses:
//! - GET /users/{login} returns { login, name, public_repos, ... }
//! - GET /repos/{owner}/{name} returns { name, full_name, stargazers_count, ... }
//!
//! Unknown identifiers get the API's 404 body. Every request line and its
//! User-Agent header are recorded so tests can assert what was sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value as JsonValue};

/// Mock GitHub server for testing
pub struct MockGitHubServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// What the server saw for one connection
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}

/// Canned data and failure switches
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Payloads keyed by login
    pub users: HashMap<String, JsonValue>,
    /// Payloads keyed by `owner/name`
    pub repos: HashMap<String, JsonValue>,
    /// Answer every request with GitHub's anonymous rate-limit 403
    pub rate_limit: bool,
    /// Answer every request with 200 and a non-JSON body
    pub malformed_body: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "defunkt".to_string(),
            json!({
                "login": "defunkt",
                "id": 2,
                "name": "Chris Wanstrath",
                "public_repos": 107,
                "followers": 22000
            }),
        );
        users.insert(
            "nameless".to_string(),
            json!({ "login": "nameless", "id": 99, "name": null, "public_repos": 0 }),
        );

        let mut repos = HashMap::new();
        repos.insert(
            "nodejs/node".to_string(),
            json!({
                "id": 27193779,
                "name": "node",
                "full_name": "nodejs/node",
                "stargazers_count": 100000
            }),
        );

        Self {
            users,
            repos,
            rate_limit: false,
            malformed_body: false,
        }
    }
}

impl MockGitHubServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(Mutex::new(Vec::new()));

        // Non-blocking so the accept loop notices shutdown
        listener.set_nonblocking(true)?;

        let running_clone = running.clone();
        let requests_clone = requests.clone();
        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        let log = requests_clone.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &cfg, &log);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    /// Get the base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockGitHubServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(
    mut stream: TcpStream,
    config: &MockConfig,
    log: &Arc<Mutex<Vec<RecordedRequest>>>,
) {
    // Accepted sockets inherit non-blocking mode on some platforms
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);

    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_response(&mut stream, 400, "Bad Request", r#"{"message": "Bad request"}"#);
        return;
    }

    let method = parts[0];
    let path = parts[1];
    let user_agent = request
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("user-agent")
                .then(|| value.trim().to_string())
        });

    log.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.to_string(),
        user_agent,
    });

    if config.rate_limit {
        send_response(
            &mut stream,
            403,
            "Forbidden",
            r#"{"message": "API rate limit exceeded for 127.0.0.1.", "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"}"#,
        );
        return;
    }

    if method != "GET" {
        send_response(&mut stream, 405, "Method Not Allowed", r#"{"message": "Method not allowed"}"#);
        return;
    }

    if config.malformed_body {
        send_response(&mut stream, 200, "OK", "<html>this is not json</html>");
        return;
    }

    let payload = if let Some(login) = path.strip_prefix("/users/") {
        config.users.get(login)
    } else if let Some(full_name) = path.strip_prefix("/repos/") {
        config.repos.get(full_name)
    } else {
        None
    };

    match payload {
        Some(body) => send_response(&mut stream, 200, "OK", &body.to_string()),
        None => send_response(
            &mut stream,
            404,
            "Not Found",
            r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#,
        ),
    }
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::github::{GitHubClient, DEFAULT_USER_AGENT};
    use crate::domain::result::Error;
    use crate::ports::GitHubApi;

    fn client_for(server: &MockGitHubServer) -> GitHubClient {
        GitHubClient::new_with_base_url(&server.base_url(), DEFAULT_USER_AGENT).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_user_payload() {
        let server = MockGitHubServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let url = format!("{}/users/defunkt", server.base_url());
        let body = client.get_json(&url).await.unwrap();

        assert_eq!(body["name"], "Chris Wanstrath");
        assert_eq!(body["public_repos"], 107);
    }

    #[tokio::test]
    async fn test_sends_user_agent() {
        let server = MockGitHubServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let url = format!("{}/repos/nodejs/node", server.base_url());
        client.get_json(&url).await.unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/repos/nodejs/node");
        assert_eq!(requests[0].user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
    }

    #[tokio::test]
    async fn test_not_found_is_http_error() {
        let server = MockGitHubServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let url = format!("{}/users/no-such-user", server.base_url());
        let err = client.get_json(&url).await.unwrap_err();

        assert!(matches!(err, Error::Http { status: 404 }));
    }

    #[tokio::test]
    async fn test_rate_limit_is_http_error() {
        let server = MockGitHubServer::start(MockConfig {
            rate_limit: true,
            ..Default::default()
        })
        .unwrap();
        let client = client_for(&server);

        let url = format!("{}/users/defunkt", server.base_url());
        let err = client.get_json(&url).await.unwrap_err();

        assert!(matches!(err, Error::Http { status: 403 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let server = MockGitHubServer::start(MockConfig {
            malformed_body: true,
            ..Default::default()
        })
        .unwrap();
        let client = client_for(&server);

        let url = format!("{}/users/defunkt", server.base_url());
        let err = client.get_json(&url).await.unwrap_err();

        assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let mut server = MockGitHubServer::start(MockConfig::default()).unwrap();
        let base_url = server.base_url();
        server.stop();
        drop(server);

        let client = GitHubClient::new_with_base_url(&base_url, DEFAULT_USER_AGENT).unwrap();
        let err = client
            .get_json(&format!("{}/users/defunkt", base_url))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
    }
}
