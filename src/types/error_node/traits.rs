use super::ErrorNode;
use crate::types::alloc_type::String;
use core::fmt::{Display, Formatter};

impl Display for ErrorNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

impl core::error::Error for ErrorNode {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl From<&str> for ErrorNode {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorNode {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
