use crate::chat::{ChatApiResponse, ChatMessageRole, OpenAiChatRequestBody, Role};
use crate::config::ProbeConfig;
use crate::constants::{
    BASE_URL_HEADER, CHAT_COMPLETIONS_PATH, CMD_MODELS, DEFAULT_PROMPT, MODELS_PATH,
};
use crate::models::ModelListResponse;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Response,
};
use std::error::Error;

pub fn build_headers(config: &ProbeConfig) -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", config.api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(BASE_URL_HEADER),
        HeaderValue::from_str(&config.upstream_base_url)?,
    );
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Joins `path` onto an OpenAI-style base URL such as `http://host/v1`.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Only the first word counts, so `-h` inside a prompt is sent as text.
pub fn is_help_request(args: &[String]) -> bool {
    matches!(args.get(1).map(String::as_str), Some("-h") | Some("-help"))
}

/// `args[0]` is the program name; any remaining words form the prompt.
pub fn build_chat_request(
    args: &[String],
    model: &str,
    system_prompt: Option<&str>,
) -> OpenAiChatRequestBody {
    let prompt = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        DEFAULT_PROMPT.to_string()
    };

    let mut messages = Vec::with_capacity(2);
    if let Some(system_prompt) = system_prompt {
        messages.push(ChatMessageRole {
            role: Role::System,
            content: system_prompt.to_string(),
        });
    }
    messages.push(ChatMessageRole {
        role: Role::User,
        content: prompt,
    });

    OpenAiChatRequestBody {
        model: model.to_string(),
        messages,
        stream: false,
    }
}

pub async fn check_status(response: Response) -> Result<Response, Box<dyn Error>> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    eprintln!("Failed with status code: {}", status);
    if let Ok(error_message) = response.text().await {
        eprintln!("Response error message: {}", error_message);
    }
    Err(format!("Proxy returned {}", status).into())
}

pub async fn process_chat_response(response: Response) -> Result<String, Box<dyn Error>> {
    let api_response = response.json::<ChatApiResponse>().await?;
    let choice = api_response
        .choices
        .into_iter()
        .next()
        .ok_or("Response contained no choices")?;
    debug!("reply role: {:?}", choice.message.role);

    choice
        .message
        .content
        .ok_or_else(|| "First choice has no message content".into())
}

pub async fn process_models_response(response: Response) -> Result<Vec<String>, Box<dyn Error>> {
    let api_response = response.json::<ModelListResponse>().await?;
    Ok(api_response.data.into_iter().map(|model| model.id).collect())
}

pub async fn make_chat_request(
    client: &Client,
    config: &ProbeConfig,
    request_body: &OpenAiChatRequestBody,
) -> Result<String, Box<dyn Error>> {
    let headers = build_headers(config)?;
    let api_url = endpoint_url(&config.proxy_base_url, CHAT_COMPLETIONS_PATH);
    debug!(
        "POST {} ({}: {}) model={}",
        api_url, BASE_URL_HEADER, config.upstream_base_url, request_body.model
    );

    let spinner = create_spinner("green", "Waiting for completion...".to_string());
    let response = client
        .post(&api_url)
        .headers(headers)
        .json(request_body)
        .send()
        .await;
    spinner.finish_and_clear();

    let response = check_status(response?).await?;
    process_chat_response(response).await
}

pub async fn make_models_request(
    client: &Client,
    config: &ProbeConfig,
) -> Result<Vec<String>, Box<dyn Error>> {
    let headers = build_headers(config)?;
    let api_url = endpoint_url(&config.proxy_base_url, MODELS_PATH);
    debug!(
        "GET {} ({}: {})",
        api_url, BASE_URL_HEADER, config.upstream_base_url
    );

    let spinner = create_spinner("cyan", "Listing models...".to_string());
    let response = client.get(&api_url).headers(headers).send().await;
    spinner.finish_and_clear();

    let response = check_status(response?).await?;
    process_models_response(response).await
}

pub async fn process_command(
    client: &Client,
    config: &ProbeConfig,
    args: &[String],
) -> Result<(), Box<dyn Error>> {
    if args.get(1).map(String::as_str) == Some(CMD_MODELS) {
        let models = make_models_request(client, config).await?;
        info!("proxy listed {} models", models.len());
        for id in models {
            println!("{}", id);
        }
        return Ok(());
    }

    let request_body = build_chat_request(args, &config.model, config.system_prompt.as_deref());
    let content = make_chat_request(client, config, &request_body).await?;
    println!("{}", content);
    Ok(())
}
