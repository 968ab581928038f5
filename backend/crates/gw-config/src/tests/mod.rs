
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point GW_CONFIG_DIR at it and hide any
/// COSMOS_RPC_URL inherited from the developer's shell
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let dir_guard = EnvGuard::set("GW_CONFIG_DIR", temp.path().to_str().unwrap());
    let rpc_guard = EnvGuard::remove(crate::RPC_URL_ENV);
    (temp, dir_guard, rpc_guard)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
}
