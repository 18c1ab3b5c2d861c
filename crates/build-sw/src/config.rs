use serde::Serialize;

/// Prefix shared by every runtime cache name.
pub const CACHE_PREFIX: &str = "hyperworker-";

pub const SW_FILE_NAME: &str = "service-worker.js";

/// Large enough for the compiled `app.js`, which exceeds workbox's 2 MiB
/// default.
pub const MAX_FILE_SIZE_TO_CACHE: u64 = 40 * 1024 * 1024;

const ONE_YEAR_SECONDS: u64 = 60 * 60 * 24 * 365;

/// Options for workbox-build's `generateSW`, serialized with its key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSwConfig {
    pub glob_directory: String,
    pub glob_patterns: Vec<String>,
    pub glob_ignores: Vec<String>,
    pub sw_dest: String,
    pub maximum_file_size_to_cache_in_bytes: u64,
    pub cleanup_outdated_caches: bool,
    pub navigate_fallback: String,
    pub runtime_caching: Vec<RuntimeCaching>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeCaching {
    /// Regular expression source, compiled by the tool.
    pub url_pattern: String,
    pub handler: Strategy,
    pub options: CacheOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    StaleWhileRevalidate,
    CacheFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheOptions {
    pub cache_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cacheable_response: Option<CacheableResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<Expiration>,
}

impl CacheOptions {
    fn named(suffix: &str) -> Self {
        Self {
            cache_name: format!("{CACHE_PREFIX}{suffix}"),
            cacheable_response: None,
            expiration: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheableResponse {
    pub statuses: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expiration {
    pub max_entries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<u64>,
}

/// The service worker setup for a public output directory.
///
/// Everything under the directory is precached except the cljs runtime,
/// which only exists in development builds. Navigation falls back to the
/// single page app's `index.html`.
pub fn service_worker_config(public_out_dir: &str) -> GenerateSwConfig {
    GenerateSwConfig {
        glob_directory: public_out_dir.to_string(),
        glob_patterns: vec!["**/*".to_string()],
        glob_ignores: vec!["js/cljs-runtime/**/*".to_string()],
        sw_dest: format!("{public_out_dir}/{SW_FILE_NAME}"),
        maximum_file_size_to_cache_in_bytes: MAX_FILE_SIZE_TO_CACHE,
        cleanup_outdated_caches: true,
        navigate_fallback: "/index.html".to_string(),
        runtime_caching: vec![
            RuntimeCaching {
                url_pattern: r"^https:\/\/fonts\.googleapis\.com".to_string(),
                handler: Strategy::StaleWhileRevalidate,
                options: CacheOptions::named("google-fonts-stylesheets"),
            },
            RuntimeCaching {
                url_pattern: r"^https:\/\/fonts\.gstatic\.com".to_string(),
                handler: Strategy::CacheFirst,
                options: CacheOptions {
                    cacheable_response: Some(CacheableResponse {
                        statuses: vec![0, 200],
                    }),
                    expiration: Some(Expiration {
                        max_entries: 30,
                        max_age_seconds: Some(ONE_YEAR_SECONDS),
                    }),
                    ..CacheOptions::named("google-fonts-webfonts")
                },
            },
            RuntimeCaching {
                url_pattern: r"\.(?:png|jpg|jpeg|svg)$".to_string(),
                handler: Strategy::StaleWhileRevalidate,
                options: CacheOptions {
                    expiration: Some(Expiration {
                        max_entries: 10,
                        max_age_seconds: None,
                    }),
                    ..CacheOptions::named("images")
                },
            },
        ],
    }
}
