fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();

        // Natively there is no page to drive; print the defaults as a #site-config template.
        log::warn!("site_behaviors runs in the browser, build for wasm32-unknown-unknown to use it");
        match serde_json::to_string_pretty(&site_behaviors::SiteConfig::default()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize default config: {}", e),
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
        if let Err(e) = site_behaviors::mount() {
            log::error!("Failed to mount site behaviors: {}", e);
        }
    }
}
