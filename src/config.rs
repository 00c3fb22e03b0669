// src/config.rs

pub const DEFAULT_QUIZZES_URL: &str = "quizzes.json";
pub const QUIZZES_URL_ENV: &str = "QUIZ_APP_QUIZZES_URL";

fn normalize_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Primer valor válido o el documento por defecto.
pub fn url_or_default(value: Option<&str>) -> String {
    value
        .and_then(normalize_url)
        .unwrap_or_else(|| DEFAULT_QUIZZES_URL.to_string())
}

/// Valor sin decodificar de `key` en una query string (`?a=1&b=2`).
pub fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
}

/// Ubicación del documento de quizzes por defecto.
#[cfg(not(target_arch = "wasm32"))]
pub fn quizzes_url() -> String {
    url_or_default(std::env::var(QUIZZES_URL_ENV).ok().as_deref())
}

/// En web: variable de compilación, `?quizzes_url=`, `<meta name="quiz-app-quizzes-url">`.
#[cfg(target_arch = "wasm32")]
pub fn quizzes_url() -> String {
    let url = option_env!("QUIZ_APP_QUIZZES_URL")
        .and_then(normalize_url)
        .or_else(url_from_page);
    url_or_default(url.as_deref())
}

#[cfg(target_arch = "wasm32")]
fn url_from_page() -> Option<String> {
    let window = web_sys::window()?;

    let from_query = window.location().search().ok().and_then(|search| {
        let raw = query_param(&search, "quizzes_url")?;
        js_sys::decode_uri_component(raw).ok()?.as_string()
    });

    from_query.and_then(|v| normalize_url(&v)).or_else(|| {
        window
            .document()?
            .query_selector("meta[name='quiz-app-quizzes-url']")
            .ok()??
            .get_attribute("content")
            .and_then(|v| normalize_url(&v))
    })
}
