//! HTTP Task API
//!
//! reqwest-backed implementation of [`TaskApi`]. On wasm32 reqwest goes
//! through the browser's `fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiResponse, ApiResult, TaskApi};
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::models::{Item, NewItem, NewTask, Task, TaskId, TaskUpdate};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Task API client talking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        let endpoint = self.config.endpoint(path);
        Url::parse(&endpoint).map_err(|e| ClientError::InvalidBaseUrl(format!("{endpoint}: {e}")))
    }

    /// Send one request. Only a response carrying `expected` has its body read.
    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        log::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        if status != expected {
            log::debug!("{method} {path} -> {status}");
            return Ok(ApiResponse::status_only(status));
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(ApiResponse::confirmed(status, body))
    }

    /// Like `send`, for endpoints that answer without a body
    async fn send_empty(&self, method: Method, path: &str, expected: StatusCode) -> ApiResult<()> {
        let url = self.url(path)?;
        log::debug!("{method} {url}");

        let response = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        if status == expected {
            Ok(ApiResponse::confirmed(status, ()))
        } else {
            Ok(ApiResponse::status_only(status))
        }
    }
}

fn task_path(task_id: &TaskId, action: &str) -> String {
    format!("/tasks/task/{}/{action}", encode_segment(task_id))
}

fn encode_segment(task_id: &TaskId) -> String {
    utf8_percent_encode(task_id.as_str(), SEGMENT).to_string()
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn find_all(&self) -> ApiResult<Vec<Task>> {
        self.send::<(), _>(Method::GET, "/tasks/find-all", None, StatusCode::OK)
            .await
    }

    async fn save_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.send(Method::POST, "/tasks/save", Some(task), StatusCode::CREATED)
            .await
    }

    async fn update_task(&self, task_id: &TaskId, update: &TaskUpdate) -> ApiResult<Task> {
        let path = format!("/tasks/update/{}", encode_segment(task_id));
        self.send(Method::PUT, &path, Some(update), StatusCode::OK).await
    }

    async fn delete_task(&self, task_id: &TaskId) -> ApiResult<()> {
        let path = format!("/tasks/delete/{}", encode_segment(task_id));
        self.send_empty(Method::DELETE, &path, StatusCode::NO_CONTENT).await
    }

    async fn add_item(&self, task_id: &TaskId, item: &NewItem) -> ApiResult<Task> {
        self.send(Method::POST, &task_path(task_id, "add-item"), Some(item), StatusCode::OK)
            .await
    }

    async fn update_item(&self, task_id: &TaskId, item: &Item) -> ApiResult<Task> {
        self.send(Method::PUT, &task_path(task_id, "update-item"), Some(item), StatusCode::OK)
            .await
    }

    async fn delete_item(&self, task_id: &TaskId, item: &Item) -> ApiResult<Task> {
        self.send(Method::DELETE, &task_path(task_id, "delete-item"), Some(item), StatusCode::OK)
            .await
    }

    async fn clear_items(&self, task_id: &TaskId) -> ApiResult<Task> {
        self.send::<(), _>(Method::DELETE, &task_path(task_id, "clear-items"), None, StatusCode::OK)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, ItemState, Priority};
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const TASK_JSON: &str = r#"{"id":"t-1","title":"Prepare the release",
        "description":"Changelog and tags","createdAt":"2024-01-02T12:00:00Z",
        "updatedAt":null,"expiresAt":"2031-01-01","items":[]}"#;

    fn api() -> HttpTaskApi {
        HttpTaskApi::new(ApiConfig::new("http://localhost:8080/api/v1/"))
    }

    /// Request as seen by the loopback server
    #[derive(Debug)]
    struct Received {
        method: String,
        path: String,
        headers: Vec<(String, String)>,
        body: String,
    }

    impl Received {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        }

        fn json(&self) -> Value {
            serde_json::from_str(&self.body).expect("request body is json")
        }
    }

    /// Answer one request on a loopback port with `status` and `body`.
    ///
    /// Returns a client pointed at the server and the request it received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (HttpTaskApi, JoinHandle<Received>) {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();

        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.expect("accept");
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).await.expect("request line");
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or_default().to_string();
            let path = parts.next().unwrap_or_default().to_string();

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).await.expect("header line");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((key, value)) = line.split_once(':') {
                    headers.push((key.trim().to_string(), value.trim().to_string()));
                }
            }

            let length = headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.parse::<usize>().ok())
                .unwrap_or(0);
            let mut raw = vec![0; length];
            reader.read_exact(&mut raw).await.expect("request body");

            let response = if body.is_empty() {
                format!("HTTP/1.1 {status}\r\nconnection: close\r\n\r\n")
            } else {
                format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                )
            };
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).await.expect("write response");
            stream.shutdown().await.ok();

            Received {
                method,
                path,
                headers,
                body: String::from_utf8(raw).expect("utf-8 body"),
            }
        });

        let api = HttpTaskApi::new(ApiConfig::new(format!("http://127.0.0.1:{port}/api/v1")));
        (api, server)
    }

    fn expected_task() -> Task {
        serde_json::from_str(TASK_JSON).unwrap()
    }

    fn sample_item() -> Item {
        Item {
            id: ItemId::new("i-9"),
            title: "Collect invoices".into(),
            description: "All of them".into(),
            priority: Priority::High,
            state: ItemState::Doing,
        }
    }

    #[test]
    fn test_item_paths_are_nested_under_task() {
        let id = TaskId::new("0b7c2c1e-6a55");
        assert_eq!(task_path(&id, "clear-items"), "/tasks/task/0b7c2c1e-6a55/clear-items");
        assert_eq!(
            api().url(&task_path(&id, "add-item")).unwrap().as_str(),
            "http://localhost:8080/api/v1/tasks/task/0b7c2c1e-6a55/add-item"
        );
    }

    #[test]
    fn test_task_id_cannot_escape_its_segment() {
        let id = TaskId::new("a/b?c");
        assert_eq!(encode_segment(&id), "a%2Fb%3Fc");
    }

    #[test]
    fn test_unusable_base_url() {
        let api = HttpTaskApi::new(ApiConfig::new("not a url"));
        assert!(matches!(api.url("/tasks/find-all"), Err(ClientError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn test_save_task_posts_json_and_decodes_created_task() {
        let (api, server) = serve_once("201 Created", TASK_JSON).await;
        let new_task = NewTask {
            title: "Prepare the release".into(),
            description: "Changelog and tags".into(),
            expires_at: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
        };

        let response = api.save_task(&new_task).await.unwrap();
        let received = server.await.unwrap();

        assert_eq!(response, ApiResponse::confirmed(StatusCode::CREATED, expected_task()));
        assert_eq!(received.method, "POST");
        assert_eq!(received.path, "/api/v1/tasks/save");
        assert_eq!(received.header("content-type"), Some("application/json"));
        assert_eq!(
            received.json(),
            json!({
                "title": "Prepare the release",
                "description": "Changelog and tags",
                "expiresAt": "2031-01-01"
            })
        );
    }

    #[tokio::test]
    async fn test_update_task_puts_camel_case_body() {
        let (api, server) = serve_once("200 OK", TASK_JSON).await;
        let update = TaskUpdate {
            id: TaskId::new("t-1"),
            title: "Prepare the release".into(),
            description: "Changelog and tags".into(),
            expires_at: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
        };

        let response = api.update_task(&TaskId::new("t-1"), &update).await.unwrap();
        let received = server.await.unwrap();

        assert_eq!(response.into_confirmed(StatusCode::OK), Some(expected_task()));
        assert_eq!(received.method, "PUT");
        assert_eq!(received.path, "/api/v1/tasks/update/t-1");
        let body = received.json();
        assert_eq!(body["expiresAt"], "2031-01-01");
        assert!(body.get("expires_at").is_none());
    }

    #[tokio::test]
    async fn test_update_conflict_returns_status_only() {
        let (api, server) = serve_once("409 Conflict", r#"{"message":"invalid date"}"#).await;
        let update = TaskUpdate {
            id: TaskId::new("t-1"),
            title: "Prepare the release".into(),
            description: "Changelog and tags".into(),
            expires_at: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };

        let response = api.update_task(&TaskId::new("t-1"), &update).await.unwrap();
        server.await.unwrap();

        assert_eq!(response, ApiResponse::status_only(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_delete_item_sends_item_as_body() {
        let (api, server) = serve_once("200 OK", TASK_JSON).await;

        let response = api.delete_item(&TaskId::new("t-1"), &sample_item()).await.unwrap();
        let received = server.await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.is_some());
        assert_eq!(received.method, "DELETE");
        assert_eq!(received.path, "/api/v1/tasks/task/t-1/delete-item");
        assert_eq!(received.header("content-type"), Some("application/json"));
        assert_eq!(
            received.json(),
            json!({
                "id": "i-9",
                "title": "Collect invoices",
                "description": "All of them",
                "priority": "Alta",
                "state": "Fazendo"
            })
        );
    }

    #[tokio::test]
    async fn test_delete_task_confirms_no_content() {
        let (api, server) = serve_once("204 No Content", "").await;

        let response = api.delete_task(&TaskId::new("a b")).await.unwrap();
        let received = server.await.unwrap();

        assert_eq!(response, ApiResponse::confirmed(StatusCode::NO_CONTENT, ()));
        assert_eq!(received.method, "DELETE");
        assert_eq!(received.path, "/api/v1/tasks/delete/a%20b");
        assert!(received.body.is_empty());
    }

    #[tokio::test]
    async fn test_other_success_status_skips_the_body() {
        // create answers 200 with a body that would not decode
        let (api, server) = serve_once("200 OK", "not json at all").await;
        let new_task = NewTask {
            title: "Prepare the release".into(),
            description: "Changelog and tags".into(),
            expires_at: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
        };

        let response = api.save_task(&new_task).await.unwrap();
        server.await.unwrap();

        assert_eq!(response, ApiResponse::status_only(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_decode_error() {
        let (api, server) = serve_once("200 OK", r#"[{"id": "t-1""#).await;

        let result = api.find_all().await;
        let received = server.await.unwrap();

        assert!(matches!(result, Err(ClientError::Decode(_))), "{result:?}");
        assert_eq!(received.method, "GET");
        assert_eq!(received.path, "/api/v1/tasks/find-all");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let api = HttpTaskApi::new(ApiConfig::new(format!("http://127.0.0.1:{port}/api/v1")));

        let result = api.clear_items(&TaskId::new("t-1")).await;

        assert!(matches!(result, Err(ClientError::Transport(_))), "{result:?}");
    }
}
