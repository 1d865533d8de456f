use std::path::PathBuf;
use url::Url;

/// Site the stats and info pages are scraped from
const DEFAULT_BASE_URL: &str = "https://steamdb.info";

/// Directory the ini file is written into; it must already exist
const DEFAULT_OUTPUT_DIR: &str = "gen";

/// Run configuration for a single extraction
#[derive(Debug, Clone)]
pub struct Config {
    /// Steam application id whose pages are scraped
    pub steam_id: u64,

    /// GOG Galaxy id; only changes the output file name
    pub galaxy_id: Option<u64>,

    /// Log every pipeline stage to stderr
    pub verbose: bool,

    /// Root URL of the statistics site
    pub base_url: String,

    /// Directory receiving the ini file
    pub output_dir: PathBuf,

    /// User-Agent header sent with both requests
    pub user_agent: String,
}

impl Config {
    /// Creates a configuration pointing at SteamDB and the `gen` directory
    pub fn new(steam_id: u64, galaxy_id: Option<u64>, verbose: bool) -> Self {
        Self {
            steam_id,
            galaxy_id,
            verbose,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }

    /// URL of the page listing achievements and stats
    pub fn stats_url(&self) -> Result<Url, url::ParseError> {
        self.app_page_url("stats")
    }

    /// URL of the page listing general game information
    pub fn info_url(&self) -> Result<Url, url::ParseError> {
        self.app_page_url("info")
    }

    fn app_page_url(&self, page: &str) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&format!("/app/{}/{}/", self.steam_id, page))
    }

    /// Output file name: `galaxy-<id>.ini` when a Galaxy id is set, `steam-<id>.ini` otherwise
    pub fn output_file_name(&self) -> String {
        match self.galaxy_id {
            Some(galaxy_id) => format!("galaxy-{}.ini", galaxy_id),
            None => format!("steam-{}.ini", self.steam_id),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.output_file_name())
    }
}
