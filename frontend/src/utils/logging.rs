/// Console logging that also works in native test builds, where the
/// browser console bindings are unavailable.
pub fn log_info(context: &str, message: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo_console::log!(context, message);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{} {}", context, message);
}

pub fn log_error(context: &str, message: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo_console::error!(context, message);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{} {}", context, message);
}
