//! Portal HTTP client for the remote deployment variant.
//!
//! Wraps the four backend endpoints behind typed methods. Declared failures
//! ({success: false}) carry the server message; network and decode faults
//! become transport errors with no details exposed to the user.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

const LOGIN_STUDENT_PATH: &str = "/api/login-student";
const REGISTER_STUDENT_PATH: &str = "/api/register-student";
const LOGIN_RECRUITER_PATH: &str = "/api/login-recruiter";
const PREDICT_PATH: &str = "/predict";

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegistrationRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Declared submission outcome. Success responses may carry extra fields
/// (e.g. a nested user object from the student login); they are ignored.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    decision: Option<String>,
    #[serde(default)]
    probability: Option<f64>,
}

/// Result of a successful prediction submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    /// Decision label as returned by the model backend.
    pub decision: String,
    /// Match probability in percent (already scaled by the backend).
    pub probability: f64,
}

/// One file part of a prediction submission.
#[derive(Debug, Clone)]
pub struct PredictionFile {
    /// Multipart field name.
    pub field: String,
    /// File name sent with the part.
    pub file_name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Optional MIME type for the part.
    pub mime_type: Option<String>,
}

/// Multipart payload for the prediction endpoint.
///
/// The state machine treats the payload as opaque; the portal's concrete
/// form is one job_description text field plus one resume_file part.
#[derive(Debug, Clone, Default)]
pub struct PredictionRequest {
    /// Plain text form fields (name, value).
    pub fields: Vec<(String, String)>,
    /// File parts.
    pub files: Vec<PredictionFile>,
}

impl PredictionRequest {
    /// Builds the portal's resume-screening form: a job description plus
    /// one resume file.
    pub fn resume_screening(
        job_description: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime_type: Option<String>,
    ) -> Self {
        Self {
            fields: vec![("job_description".to_string(), job_description.into())],
            files: vec![PredictionFile {
                field: "resume_file".to_string(),
                file_name: file_name.into(),
                bytes,
                mime_type,
            }],
        }
    }
}

/// HTTP client for the portal backend.
#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Creates a client for the given portal origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submits student sign-in credentials.
    pub async fn login_student(&self, email: &str, password: &str) -> PortalResult<()> {
        let request = CredentialsRequest { email, password };
        let payload: SubmitResponse = self.post_json(LOGIN_STUDENT_PATH, &request).await?;
        declared_outcome(LOGIN_STUDENT_PATH, payload)
    }

    /// Submits a new student registration.
    pub async fn register_student(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> PortalResult<()> {
        let request = RegistrationRequest {
            name,
            email,
            password,
        };
        let payload: SubmitResponse = self.post_json(REGISTER_STUDENT_PATH, &request).await?;
        declared_outcome(REGISTER_STUDENT_PATH, payload)
    }

    /// Submits recruiter login credentials.
    pub async fn login_recruiter(&self, email: &str, password: &str) -> PortalResult<()> {
        let request = CredentialsRequest { email, password };
        let payload: SubmitResponse = self.post_json(LOGIN_RECRUITER_PATH, &request).await?;
        declared_outcome(LOGIN_RECRUITER_PATH, payload)
    }

    /// Submits the prediction form as multipart.
    pub async fn predict(&self, request: PredictionRequest) -> PortalResult<PredictionOutcome> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in request.fields {
            form = form.text(name, value);
        }
        for file in request.files {
            let mut part =
                reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = file.mime_type.as_deref()
                && !mime.trim().is_empty()
            {
                part = part
                    .mime_str(mime)
                    .map_err(|_| PortalError::transport("invalid MIME type for file part"))?;
            }
            form = form.part(file.field, part);
        }

        tracing::debug!(path = PREDICT_PATH, "portal request dispatched");
        let response = self
            .http
            .post(self.url(PREDICT_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_fault(PREDICT_PATH, &e))?;

        let status = response.status();
        let payload: PredictResponse = response
            .json()
            .await
            .map_err(|e| transport_fault(PREDICT_PATH, &e))?;

        if payload.success {
            Ok(PredictionOutcome {
                decision: payload.decision.unwrap_or_default(),
                probability: payload.probability.unwrap_or_default(),
            })
        } else {
            tracing::debug!(path = PREDICT_PATH, %status, "portal declined request");
            Err(PortalError::declined(declined_message(payload.message)))
        }
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> PortalResult<T> {
        tracing::debug!(path, "portal request dispatched");
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_fault(path, &e))?;

        tracing::debug!(path, status = %response.status(), "portal response received");
        response.json().await.map_err(|e| transport_fault(path, &e))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn declared_outcome(path: &str, payload: SubmitResponse) -> PortalResult<()> {
    if payload.success {
        Ok(())
    } else {
        tracing::debug!(path, "portal declined request");
        Err(PortalError::declined(declined_message(payload.message)))
    }
}

fn declined_message(message: Option<String>) -> String {
    message.unwrap_or_else(|| "Portal request declined.".to_string())
}

fn transport_fault(path: &str, error: &reqwest::Error) -> PortalError {
    tracing::debug!(path, error = %error, "portal transport fault");
    PortalError::transport(format!("portal request to {path} failed"))
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;
    use crate::error::PortalErrorKind;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn test_login_student_success_ignores_extra_fields() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-student"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Login successful!",
                "user": {"id": 1, "name": "Ana", "email": "ana@example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PortalClient::new(server.uri());
        client
            .login_student("ana@example.com", "secret1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_student_declined_carries_server_message() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-student"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "success": false,
                "message": "Invalid email or password."
            })))
            .mount(&server)
            .await;

        let client = PortalClient::new(server.uri());
        let err = client
            .login_student("ana@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.kind, PortalErrorKind::ServerDeclined);
        assert_eq!(err.message, "Invalid email or password.");
    }

    #[tokio::test]
    async fn test_register_student_declined_conflict() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register-student"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "success": false,
                "message": "Account with this email already exists."
            })))
            .mount(&server)
            .await;

        let client = PortalClient::new(server.uri());
        let err = client
            .register_student("Ana", "ana@example.com", "secret1")
            .await
            .unwrap_err();
        assert_eq!(err.kind, PortalErrorKind::ServerDeclined);
        assert_eq!(err.message, "Account with this email already exists.");
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_fault() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-recruiter"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = PortalClient::new(server.uri());
        let err = client
            .login_recruiter("r@example.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.kind, PortalErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_predict_sends_multipart_and_decodes_outcome() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        let captured = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
        let captured_clone = captured.clone();
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(move |req: &Request| {
                *captured_clone.lock().unwrap() = String::from_utf8_lossy(&req.body).to_string();
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "success": true,
                    "decision": "SELECT",
                    "probability": 82.0
                }))
            })
            .expect(1)
            .mount(&server)
            .await;

        let client = PortalClient::new(server.uri());
        let outcome = client
            .predict(PredictionRequest::resume_screening(
                "Backend engineer, Rust",
                "resume.pdf",
                b"%PDF-1.4 fake".to_vec(),
                Some("application/pdf".to_string()),
            ))
            .await
            .unwrap();

        assert_eq!(outcome.decision, "SELECT");
        assert!((outcome.probability - 82.0).abs() < f64::EPSILON);

        let body = captured.lock().unwrap().clone();
        assert!(
            body.contains("name=\"job_description\""),
            "multipart body should carry the job description field. Got: {}",
            body
        );
        assert!(
            body.contains("filename=\"resume.pdf\""),
            "multipart body should carry the resume file part. Got: {}",
            body
        );
    }

    #[tokio::test]
    async fn test_predict_declined_carries_message() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "success": false,
                "message": "Resume file is required"
            })))
            .mount(&server)
            .await;

        let client = PortalClient::new(server.uri());
        let err = client
            .predict(PredictionRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, PortalErrorKind::ServerDeclined);
        assert_eq!(err.message, "Resume file is required");
    }
}
