pub mod attr;
pub mod support;
