//! Browser entry point: installs logging and mounts the app into `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = lumi_dashboard::config::log_level_from(option_env!("LUMI_LOG_LEVEL"));
        if console_log::init_with_level(level).is_err() {
            leptos::logging::warn!("console logger already installed");
        }
        leptos::mount::mount_to_body(lumi_dashboard::app::App);
    }
}
