use crate::data::RemoteResponse;
#[cfg(not(target_arch = "wasm32"))]
use crate::data::RemoteSource;
use crate::error::LoadError;

/// Origen nativo: HTTP con reqwest, o ruta relativa leída del disco.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct NativeSource {
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RemoteSource for NativeSource {
    fn fetch(&self, url: &str) -> Result<RemoteResponse, LoadError> {
        if crate::config::is_http_url(url) {
            let response = self
                .client
                .get(url)
                .send()
                .map_err(|err| LoadError::Transport(format!("{url}: {err}")))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .map_err(|err| LoadError::Transport(format!("{url}: {err}")))?;
            return Ok(RemoteResponse { status, body });
        }

        match std::fs::read_to_string(url) {
            Ok(body) => Ok(RemoteResponse { status: 200, body }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(RemoteResponse {
                status: 404,
                body: String::new(),
            }),
            Err(err) => Err(LoadError::Transport(format!("{url}: {err}"))),
        }
    }
}

/// Petición GET del documento tal y como la lanza el navegador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub url: String,
    pub method: &'static str,
    pub cross_origin: bool, // modo `cors`, el mismo que usa `fetch` por defecto
}

pub fn document_request(url: &str) -> DocumentRequest {
    DocumentRequest {
        url: url.to_owned(),
        method: "GET",
        cross_origin: true,
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_document(url: &str) -> Result<RemoteResponse, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let plan = document_request(url);
    let opts = RequestInit::new();
    opts.set_method(plan.method);
    opts.set_mode(if plan.cross_origin {
        RequestMode::Cors
    } else {
        RequestMode::SameOrigin
    });

    let window =
        web_sys::window().ok_or_else(|| LoadError::Transport("no window in wasm".into()))?;

    let request = Request::new_with_str_and_init(&plan.url, &opts)
        .map_err(|err| LoadError::Transport(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| LoadError::Transport(format!("{url}: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Transport("fetch did not return a Response".into()))?;

    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(err) => Err(err),
    }
    .map_err(|err| LoadError::Transport(format!("could not read body: {err:?}")))?;

    Ok(RemoteResponse {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}
