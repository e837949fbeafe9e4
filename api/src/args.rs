use clap::Parser;
use dishcovery_core::domain::common::{
    DatabaseConfig, DishcoveryConfig, GOOGLE_VISION_DEFAULT_URL, RecipeApiConfig,
    SPOONACULAR_DEFAULT_URL, SYNTHESIA_DEFAULT_URL, VideoConfig, VisionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dishcovery-api", version, about)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub recipe_api: RecipeApiArgs,

    #[command(flatten)]
    pub video: VideoArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            server: ServerArgs::default(),
            log: LogArgs::default(),
            vision: VisionArgs {
                vision_api_key: None,
                vision_base_url: GOOGLE_VISION_DEFAULT_URL.to_string(),
            },
            recipe_api: RecipeApiArgs {
                recipe_api_key: None,
                recipe_api_base_url: SPOONACULAR_DEFAULT_URL.to_string(),
            },
            video: VideoArgs {
                video_api_key: None,
                video_base_url: SYNTHESIA_DEFAULT_URL.to_string(),
            },
            db: DatabaseArgs { database_url: None },
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix every route is mounted under, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// `*` accepts any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH", requires = "tls_key_path")]
    pub tls_cert_path: Option<String>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH", requires = "tls_cert_path")]
    pub tls_key_path: Option<String>,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3333,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
            tls_cert_path: None,
            tls_key_path: None,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct VisionArgs {
    #[arg(long, env = "GOOGLE_CLOUD_VISION_API_KEY", hide_env_values = true)]
    pub vision_api_key: Option<String>,

    #[arg(long, env = "VISION_API_BASE_URL", default_value = GOOGLE_VISION_DEFAULT_URL)]
    pub vision_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecipeApiArgs {
    #[arg(long, env = "RECIPE_GENERATION_API_KEY", hide_env_values = true)]
    pub recipe_api_key: Option<String>,

    #[arg(long, env = "RECIPE_API_BASE_URL", default_value = SPOONACULAR_DEFAULT_URL)]
    pub recipe_api_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VideoArgs {
    /// `user:password` pair for the video API.
    #[arg(long, env = "VIDEO_GENERATION_API_KEY", hide_env_values = true)]
    pub video_api_key: Option<String>,

    #[arg(long, env = "VIDEO_API_BASE_URL", default_value = SYNTHESIA_DEFAULT_URL)]
    pub video_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    /// Optional postgres connection string for the dish catalog.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl From<Args> for DishcoveryConfig {
    fn from(args: Args) -> Self {
        Self {
            vision: VisionConfig {
                api_key: args.vision.vision_api_key,
                base_url: args.vision.vision_base_url,
            },
            recipe_api: RecipeApiConfig {
                api_key: args.recipe_api.recipe_api_key,
                base_url: args.recipe_api.recipe_api_base_url,
            },
            video: VideoConfig {
                api_key: args.video.video_api_key,
                base_url: args.video.video_base_url,
            },
            database: args.db.database_url.map(|url| DatabaseConfig { url }),
        }
    }
}
