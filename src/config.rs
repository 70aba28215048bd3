use std::fs::File;
use std::path::{Path, PathBuf};
use std::{fs, io::Read, io::Write};

use reqwest::Url;
use toml_edit::DocumentMut;

use crate::errors::{Error, Result};

const TABLE_NAME: &str = "site";

pub const DEFAULT_ORIGIN: &str = "https://wecima.show/";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Settings of a site adapter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub origin: Url,
    pub user_agent: String,
    pub proxy: Option<String>,
}

impl Config {
    pub fn new(origin: &str) -> Result<Self> {
        Ok(Self {
            origin: parse_origin(origin)?,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
        })
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    /// Builds the configuration from the saved file, falling back to the
    /// defaults for every missing key.
    pub fn load() -> Result<Self> {
        let origin = load("origin").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let mut config = Self::new(&origin)?.proxy(load("proxy"));
        if let Some(user_agent) = load("user_agent") {
            config = config.user_agent(&user_agent);
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        save("origin", self.origin.as_str())?;
        save("user_agent", &self.user_agent)?;
        if let Some(proxy) = &self.proxy {
            save("proxy", proxy)?;
        }

        Ok(())
    }
}

/// Parses a site origin, which must be an http(s) base url. The result always
/// ends with a slash so that relative paths join below it.
pub fn parse_origin(input: &str) -> Result<Url> {
    let mut url = Url::parse(input).map_err(|_| Error::InvalidOrigin(input.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidOrigin(input.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Loads a value from the site configuration
pub fn load(key: &str) -> Option<String> {
    let toml = load_toml().ok()?;
    let value = toml.get(TABLE_NAME)?.get(key)?.as_str()?.to_string();

    Some(value)
}

/// Saves a value to the site configuration
pub fn save(key: &str, value: &str) -> Result<()> {
    let path = config_path();

    let mut doc = match load_toml() {
        Ok(t) => t,
        Err(_) => {
            if let Some(p) = path.parent() {
                fs::create_dir_all(p)?;
            }

            DocumentMut::new()
        }
    };

    if !doc.contains_table(TABLE_NAME) {
        doc[TABLE_NAME] = toml_edit::table();
    }
    doc[TABLE_NAME][key] = toml_edit::value(value);
    doc.fmt();

    safe_save(&doc.to_string(), &path)?;

    Ok(())
}

fn load_toml() -> Result<DocumentMut> {
    let path = config_path();

    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    let toml = content.parse::<DocumentMut>()?;

    Ok(toml)
}

/// Saves content using a temporary file to avoid corruption
fn safe_save(content: &str, path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("toml.tmp");

    {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(content.as_bytes())?;
    }

    fs::rename(tmp_path, path)?;

    Ok(())
}

/// Deletes the configuration file
pub fn clean() -> Result<()> {
    let path = config_path();

    fs::remove_file(path)?;

    Ok(())
}

#[cfg(not(windows))]
const CONFIG_PATH: &str = ".config/wecima/config.toml";

#[cfg(windows)]
const CONFIG_PATH: &str = r"AppData\Roaming\wecima\config.toml";

/// Returns the configuration file path for the current OS
pub fn config_path() -> PathBuf {
    let root = {
        #[cfg(test)]
        {
            #[cfg(windows)]
            let r = std::env::var("TEMP").ok();

            #[cfg(not(windows))]
            let r = Some(String::from("/tmp"));

            r
        }

        #[cfg(not(test))]
        {
            #[cfg(windows)]
            let r = std::env::var("HOMEPATH").ok();

            #[cfg(not(windows))]
            let r = std::env::var("HOME").ok();

            r
        }
    };

    let mut path = PathBuf::new();
    if let Some(r) = root {
        path.push(PathBuf::from(r));
    }
    path.push(CONFIG_PATH);

    path
}
