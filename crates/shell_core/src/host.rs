//! Host runtime abstraction.
//!
//! The shell asks the host for two facts at startup: the viewport size and
//! the preferred-locale list. Desktop embedders get a real implementation
//! from `shell_desktop`; tests use [`FixedHost`].

use crate::flags::Viewport;

/// The runtime embedding the shell.
pub trait Host {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Preferred locales, most preferred first. Never interpreted by the
    /// shell, only forwarded in the init payload.
    fn locales(&self) -> Vec<String>;
}

/// A host with constant answers.
#[derive(Debug, Clone)]
pub struct FixedHost {
    viewport: Viewport,
    locales: Vec<String>,
}

impl FixedHost {
    pub fn new(viewport: Viewport, locales: Vec<String>) -> Self {
        Self { viewport, locales }
    }
}

impl Host for FixedHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn locales(&self) -> Vec<String> {
        self.locales.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_host_reports_what_it_was_given() {
        let host = FixedHost::new(Viewport::new(800, 600), vec!["sv-SE".into()]);
        assert_eq!(host.viewport(), Viewport::new(800, 600));
        assert_eq!(host.locales(), vec!["sv-SE"]);
    }
}
