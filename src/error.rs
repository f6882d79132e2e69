use failure::Fail;
use std::io;
use std::net::SocketAddr;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "cannot reach store at {}: {}", addr, cause)]
    Connection {
        addr: SocketAddr,
        #[cause] cause: io::Error,
    },

    #[fail(display = "value does not parse as {}: {}", target, detail)]
    Format {
        target: &'static str,
        detail: String,
    },

    #[fail(display = "{}", _0)]
    UnhandledError(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
