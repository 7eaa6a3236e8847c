use viewpan_core::config;

/// Prints the resolved configuration path and the effective values.
pub fn execute() {
    match config::config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (missing, using defaults)", path.display()),
        None => println!("Config file: <could not determine home directory>"),
    }

    let config = config::load();
    println!("chrome.bar_height  = {}", config.chrome.bar_height);
    println!("chrome.panel_width = {}", config.chrome.panel_width);
    println!("log.enabled        = {}", config.log.enabled);
    println!("log.level          = {}", config.log.level);
    println!("log.max_file_mb    = {}", config.log.max_file_mb);
}
