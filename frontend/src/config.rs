const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Backend base URL: `BACKEND_URL` at build time, otherwise the page origin
/// (the backend serves the built frontend itself).
pub fn get_backend_url() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
