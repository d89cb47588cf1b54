use std::fmt;

#[derive(Debug)]
pub enum LayoutError {
    /// Page geometry that cannot hold the block kinds it must place.
    Config(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "layout config error: {msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}
