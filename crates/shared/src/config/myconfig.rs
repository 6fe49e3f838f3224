use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub bcrypt_cost: u32,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `init` feeds it the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let database_url = require("DATABASE_URL")?;
        let jwt_secret = require("JWT_SECRET")?;
        let run_migrations_str = require("RUN_MIGRATIONS")?;
        let port_str = require("PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_conn = lookup("DB_MIN_CONN")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("DB_MIN_CONN must be a valid u32 integer")?
            .unwrap_or(1);

        let db_max_conn = lookup("DB_MAX_CONN")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("DB_MAX_CONN must be a valid u32 integer")?
            .unwrap_or(5);

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        let bcrypt_cost = lookup("BCRYPT_COST")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("BCRYPT_COST must be a valid u32 integer")?
            .unwrap_or(bcrypt::DEFAULT_COST);

        if !(4..=31).contains(&bcrypt_cost) {
            return Err(anyhow!("BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}"));
        }

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            bcrypt_cost,
            dev_mode,
            enable_file_log,
        })
    }
}
