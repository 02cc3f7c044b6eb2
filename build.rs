use std::env;
use std::fs;
use std::path::Path;

// Claves que el crate lee con option_env!
const FORWARDED_KEYS: &[&str] = &["WID_SERVER_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Un .env local permite apuntar a un backend de pruebas sin tocar el código
    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env no se pudo leer, usando valores por defecto");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        // El entorno real tiene prioridad sobre el .env
        if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
