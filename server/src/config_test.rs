use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`].
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("PORT");
        std::env::remove_var("STATIC_DIR");
        std::env::remove_var("POLL_BUDGET_MICROS");
        std::env::remove_var("SDL_MAPPINGS_FILE");
    }
}

#[test]
fn from_env_defaults() {
    let _env = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.poll_budget, DEFAULT_POLL_BUDGET);
    assert!(cfg.static_dir.ends_with("client/dist"));
    assert_eq!(cfg.sdl_mappings_file, None);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:3000");
}

#[test]
fn from_env_parses_overrides() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "0.0.0.0");
        std::env::set_var("PORT", "8080");
        std::env::set_var("STATIC_DIR", "/srv/padscope");
        std::env::set_var("POLL_BUDGET_MICROS", "250");
        std::env::set_var("SDL_MAPPINGS_FILE", "/etc/gamecontrollerdb.txt");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/padscope"));
    assert_eq!(cfg.poll_budget, Duration::from_micros(250));
    assert_eq!(cfg.sdl_mappings_file, Some(PathBuf::from("/etc/gamecontrollerdb.txt")));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert_eq!(err, "invalid PORT: eighty");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_ignores_blank_mappings_file() {
    let _env = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("SDL_MAPPINGS_FILE", "  ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.sdl_mappings_file, None);

    unsafe { clear_server_env() };
}
