use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PgConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub poolminsize: u32,
    pub poolmaxsize: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub server: Option<ServerConfig>,
    pub pg: Option<PgConfig>,
}

impl Config {
    pub fn from_env() -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn database_url(&self) -> String {
        let pg = self.pg.as_ref().unwrap();

        format!(
            "postgres://{}:{}@{}:{}/{}",
            pg.user, pg.password, pg.host, pg.port, pg.dbname
        )
    }
}
