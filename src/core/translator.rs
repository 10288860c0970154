// ============================================================================
// LangFill - 翻译客户端
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 调用 chat completion 接口翻译单条文本
// 边界:
//   - ✅ 翻译器 trait 定义
//   - ✅ 请求体构建与发送
//   - ✅ 响应解析与错误分类
//   - ✅ 源语言恒等翻译
//   - ❌ 不应包含重试、退避或限流逻辑
//   - ❌ 不应包含失败降级策略（由调用方决定）
//   - ❌ 不应读取环境变量或全局配置
//
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::config::TranslatorConfig;
use crate::models::language::LanguageCode;

/// 翻译错误
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("API key is not set (expected in environment variable {env})")]
    MissingApiKey { env: String },
}

/// 翻译器接口
#[async_trait]
pub trait Translator: Send + Sync {
    /// 将英文原文翻译为目标语言
    async fn translate(&self, text: &str, lang: &LanguageCode) -> Result<String, TranslateError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// 基于 chat completion 接口的翻译器
#[derive(Debug, Clone)]
pub struct ChatCompletionTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl ChatCompletionTranslator {
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn system_prompt(&self, lang: &LanguageCode) -> String {
        let target = lang.display_name(&self.config.language_names);
        format!(
            "You are a professional English to {target} translator. \
             Translate the given text to natural {target}. \
             Only return the translation without any explanations."
        )
    }

    async fn request(&self, api_key: &str, text: &str, lang: &LanguageCode) -> Result<String, TranslateError> {
        let system_prompt = self.system_prompt(lang);
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let payload = response.text().await?;
        if !status.is_success() {
            return Err(TranslateError::Http {
                status: status.as_u16(),
                body: payload,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&payload)
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::MalformedResponse("response has no choices".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl Translator for ChatCompletionTranslator {
    async fn translate(&self, text: &str, lang: &LanguageCode) -> Result<String, TranslateError> {
        if lang.is_source() {
            return Ok(text.to_string());
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| TranslateError::MissingApiKey {
                env: self.config.api_key_env.clone(),
            })?;

        let translation = self.request(api_key, text, lang).await?;
        tracing::info!(lang = %lang, text, translation = %translation, "translated");
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn config(endpoint: &str) -> TranslatorConfig {
        TranslatorConfig {
            endpoint: endpoint.to_string(),
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..TranslatorConfig::default()
        }
    }

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    /// 接收一个请求并返回固定响应，任务结果为收到的原始请求
    async fn respond_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/v1/chat/completions", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (endpoint, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let lower = line.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn english_is_returned_unchanged_without_a_request() {
        let mut config = config("http://127.0.0.1:9/unreachable");
        config.api_key = None;
        let translator = ChatCompletionTranslator::new(config).unwrap();

        for text in ["Save", "", "  spaced  ", "多语言"] {
            assert_eq!(translator.translate(text, &lang("en")).await.unwrap(), text);
        }
    }

    #[tokio::test]
    async fn sends_chat_completion_request_and_trims_reply() {
        let (endpoint, server) = respond_once(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"  保存\n"}}]}"#,
        )
        .await;
        let translator = ChatCompletionTranslator::new(config(&endpoint)).unwrap();

        let translation = translator.translate("Save", &lang("zh")).await.unwrap();
        assert_eq!(translation, "保存");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer test-key"));

        let body_start = request.find("\r\n\r\n").unwrap() + 4;
        let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["temperature"], 0.3);
        assert_eq!(body["max_tokens"], 100);
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("English to Simplified Chinese translator"));
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Save");
    }

    #[tokio::test]
    async fn unknown_language_uses_raw_code_in_prompt() {
        let (endpoint, server) =
            respond_once(200, r#"{"choices":[{"message":{"content":"保存する"}}]}"#).await;
        let translator = ChatCompletionTranslator::new(config(&endpoint)).unwrap();

        translator.translate("Save", &lang("jp")).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.contains("English to jp translator"));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_body() {
        let (endpoint, _server) =
            respond_once(401, r#"{"error":{"message":"invalid api key"}}"#).await;
        let translator = ChatCompletionTranslator::new(config(&endpoint)).unwrap();

        match translator.translate("Save", &lang("zh")).await {
            Err(TranslateError::Http { status, body }) => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid api key"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn response_without_choices_is_malformed() {
        let (endpoint, _server) = respond_once(200, r#"{"choices":[]}"#).await;
        let translator = ChatCompletionTranslator::new(config(&endpoint)).unwrap();

        let result = translator.translate("Save", &lang("zh")).await;
        assert!(matches!(result, Err(TranslateError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn non_json_response_is_malformed() {
        let (endpoint, _server) = respond_once(200, "<html>gateway</html>").await;
        let translator = ChatCompletionTranslator::new(config(&endpoint)).unwrap();

        let result = translator.translate("Save", &lang("zh")).await;
        assert!(matches!(result, Err(TranslateError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let mut config = config("http://127.0.0.1:9/unreachable");
        config.api_key = None;
        let translator = ChatCompletionTranslator::new(config).unwrap();

        let result = translator.translate("Save", &lang("zh")).await;
        assert!(matches!(result, Err(TranslateError::MissingApiKey { .. })));
    }

    #[tokio::test]
    async fn unanswered_request_times_out_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/", listener.local_addr().unwrap());
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let mut config = config(&endpoint);
        config.timeout_secs = 1;
        let translator = ChatCompletionTranslator::new(config).unwrap();

        match translator.translate("Save", &lang("zh")).await {
            Err(TranslateError::Network(e)) => assert!(e.is_timeout()),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
