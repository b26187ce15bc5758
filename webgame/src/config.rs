use std::{
    env,
    net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr},
    num::ParseIntError,
    path::{Path, PathBuf},
    rc::Rc,
};

use thiserror::Error;

const HOST_VARIABLE: &str = "WEBGAME_HOST";
const PORT_VARIABLE: &str = "WEBGAME_PORT";
const PUBLIC_PATH_VARIABLE: &str = "WEBGAME_PUBLIC";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub(super) enum Error {
    #[error("Error parsing WEBGAME_HOST value {value:?}: {source}")]
    ParseHost {
        value: Rc<str>,
        #[source]
        source: AddrParseError,
    },
    #[error("Error parsing WEBGAME_PORT value {value:?}: {source}")]
    ParsePort {
        value: Rc<str>,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) address: SocketAddr,
    /// Root directory for static files such as the game script
    pub(crate) public_path: PathBuf,
}

impl Config {
    pub(super) fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    pub(super) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let host = match lookup(HOST_VARIABLE) {
            Some(value) => value.parse().map_err(|source| Error::ParseHost {
                value: value.into(),
                source,
            })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup(PORT_VARIABLE) {
            Some(value) => value.parse().map_err(|source| Error::ParsePort {
                value: value.into(),
                source,
            })?,
            None => DEFAULT_PORT,
        };

        let public_path = lookup(PUBLIC_PATH_VARIABLE)
            .map(PathBuf::from)
            .unwrap_or_else(default_public_path);

        Ok(Self {
            address: SocketAddr::new(host, port),
            public_path,
        })
    }
}

fn default_public_path() -> PathBuf {
    if cfg!(debug_assertions) {
        return Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
    }

    match env::current_exe() {
        Ok(executable) => executable
            .parent()
            .map_or_else(|| "public".into(), |directory| directory.join("public")),
        Err(error) => {
            tracing::warn!(
                "Could not get current executable path. Will serve static files from relative \"public\" directory. Causing Error: {}",
                error
            );
            "public".into()
        }
    }
}
